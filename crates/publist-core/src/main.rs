//! publist CLI
//!
//! Renders a publication dataset as the full listing or as one author's
//! listing, in HTML or plain text.

use std::path::PathBuf;

use clap::Parser;
use publist_core::{
    collect, writer, AuthorQuery, AuthorView, Dataset, DisclosureMap, GroupedView, OutputFormat,
    PublistConfig, PublistError, Result,
};
use publist_domain::{validate_dataset, ValidationSeverity};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "publist", version, about = "Render a researcher's publication list")]
struct Cli {
    /// Publication dataset (JSON array of year groups)
    #[arg(short, long, value_name = "FILE")]
    data: PathBuf,

    /// Configuration file (.toml or .json)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// First name, or a prefix of it, of the author to list
    #[arg(long, requires = "last")]
    first: Option<String>,

    /// Family name of the author to list
    #[arg(long)]
    last: Option<String>,

    /// Output format (overrides the configuration)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Show the BibTeX record of a publication (repeatable)
    #[arg(long = "open", value_name = "ID")]
    open: Vec<String>,

    /// Check the dataset instead of rendering it
    #[arg(long)]
    validate: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PublistConfig::from_path(path)?,
        None => PublistConfig::default(),
    };
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    let dataset = Dataset::from_path(&cli.data)?;
    tracing::info!(
        years = dataset.years().len(),
        publications = dataset.len(),
        "Loaded dataset from {:?}",
        cli.data
    );

    if cli.validate {
        return validate(&dataset);
    }

    let query = match (cli.first, cli.last) {
        (first, Some(last)) => Some(AuthorQuery::new(first.unwrap_or_default(), last)),
        _ => config.author.clone(),
    };

    let mut disclosures = DisclosureMap::new();
    let output = match query {
        Some(query) => {
            let collected = collect(&dataset, &query);
            let ids = AuthorView::build(&collected, &mut disclosures, &config).entry_ids();
            open_requested(&mut disclosures, &ids, &cli.open);
            let view = AuthorView::build(&collected, &mut disclosures, &config);
            if view.is_empty() {
                tracing::warn!(
                    "No publications found for {} {}",
                    query.firstname,
                    query.lastname
                );
            }
            writer::write_author(&view, config.output.format)
        }
        None => {
            let ids = GroupedView::build(&dataset, &mut disclosures, &config).entry_ids();
            open_requested(&mut disclosures, &ids, &cli.open);
            let view = GroupedView::build(&dataset, &mut disclosures, &config);
            writer::write_grouped(&view, config.output.format)
        }
    };

    print!("{}", output);
    Ok(())
}

fn open_requested(disclosures: &mut DisclosureMap, listed: &[&str], requested: &[String]) {
    for id in requested {
        if listed.contains(&id.as_str()) {
            disclosures.toggle(id);
        } else {
            tracing::warn!("Publication {} is not part of this listing", id);
        }
    }
}

fn validate(dataset: &Dataset) -> Result<()> {
    let issues = validate_dataset(dataset);
    let mut errors = 0;

    for issue in &issues {
        match issue.severity {
            ValidationSeverity::Error => {
                errors += 1;
                tracing::error!(id = %issue.publication_id, field = %issue.field, "{}", issue.message);
            }
            ValidationSeverity::Warning => {
                tracing::warn!(id = %issue.publication_id, field = %issue.field, "{}", issue.message);
            }
        }
    }

    println!(
        "{} publications, {} error(s), {} warning(s)",
        dataset.len(),
        errors,
        issues.len() - errors
    );

    if errors > 0 {
        return Err(PublistError::InvalidDataset(errors));
    }
    Ok(())
}
