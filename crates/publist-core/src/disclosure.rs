//! Open/closed state of each publication's BibTeX block.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Visibility of one publication's citation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    pub fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Disclosure state per publication id, owned by one rendered list.
///
/// The map remembers the ordered ids of the list it belongs to. When a view
/// presents a different list, every entry goes back to [`Disclosure::Closed`].
#[derive(Debug, Clone, Default)]
pub struct DisclosureMap {
    items: Vec<String>,
    states: HashMap<String, Disclosure>,
}

impl DisclosureMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the map to a list of publication ids.
    ///
    /// Returns `true` when the list differs from the previous one and the map
    /// was reset.
    pub fn sync<I, S>(&mut self, ids: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: Vec<String> = ids.into_iter().map(|id| id.as_ref().to_string()).collect();
        if ids == self.items {
            return false;
        }

        tracing::debug!(
            previous = self.items.len(),
            current = ids.len(),
            open = self.open_count(),
            "publication list changed, closing all citations"
        );
        self.items = ids;
        self.states.clear();
        true
    }

    /// Flip the state of one publication and return the new state.
    pub fn toggle(&mut self, id: &str) -> Disclosure {
        let state = self.states.entry(id.to_string()).or_default();
        *state = state.toggle();
        *state
    }

    pub fn state(&self, id: &str) -> Disclosure {
        self.states.get(id).copied().unwrap_or_default()
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.state(id).is_open()
    }

    /// Ids currently open, in list order.
    pub fn open_ids(&self) -> Vec<&str> {
        self.items
            .iter()
            .map(String::as_str)
            .filter(|id| self.is_open(id))
            .collect()
    }

    fn open_count(&self) -> usize {
        self.states.values().filter(|state| state.is_open()).count()
    }

    /// Close every citation without forgetting the current list.
    pub fn close_all(&mut self) {
        self.states.clear();
    }
}
