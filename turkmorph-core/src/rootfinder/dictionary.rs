use super::{starts_uppercase, RootFinder};
use crate::lexicon::{Root, RootMap};
use crate::phonetics::alphabet;
use std::sync::Arc;

/// Looks prefixes up in the root map
#[derive(Debug, Clone)]
pub struct DictionaryRootFinder {
    root_map: Arc<RootMap>,
}

impl DictionaryRootFinder {
    /// Finder over a shared root map
    pub fn new(root_map: Arc<RootMap>) -> Self {
        Self { root_map }
    }
}

impl RootFinder for DictionaryRootFinder {
    fn name(&self) -> &str {
        "dictionary"
    }

    fn handles(&self, partial: &str, _whole: &str) -> bool {
        !partial.trim().is_empty()
    }

    fn find_roots(&self, partial: &str, _whole: &str) -> Vec<Arc<Root>> {
        let mut roots = self.root_map.get(partial).to_vec();
        // sentence-initial common nouns
        if starts_uppercase(partial) {
            let mut chars = partial.chars();
            if let Some(first) = chars.next() {
                let lowered = format!("{}{}", alphabet::to_lower(first), chars.as_str());
                roots.extend(self.root_map.get(&lowered).iter().cloned());
            }
        }
        roots
    }
}
