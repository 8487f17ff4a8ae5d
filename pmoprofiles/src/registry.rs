use crate::restriction::{Restriction, RestrictionCategory};
use std::collections::HashMap;
use tracing::debug;

/// Restriction résolue avec sa catégorie, telle que stockée au registre.
#[derive(Debug, Clone, PartialEq)]
pub struct DescribedRestriction {
    pub restriction: Restriction,
    pub category: RestrictionCategory,
}

/// Table identifiant → restriction résolue.
///
/// Peuplée au fil du build par les restrictions nommées, consultée par les
/// références `parent` ultérieures. Les entrées ne sont jamais retirées ;
/// un identifiant redéclaré remplace l'entrée précédente (dernier écrivain
/// gagne).
#[derive(Debug, Default)]
pub struct RestrictionRegistry {
    entries: HashMap<String, DescribedRestriction>,
}

impl RestrictionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: &str, described: DescribedRestriction) {
        if self.entries.insert(id.to_string(), described).is_some() {
            debug!("Replacing registry entry for id {}", id);
        }
    }

    pub fn lookup(&self, id: &str) -> Option<&DescribedRestriction> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
