use super::{Lexeme, PrimaryPos, Root, RootGenerator, SecondaryPos};
use std::collections::HashMap;
use std::sync::Arc;

/// Surface string to roots; the only view of the lexicon the parser needs
#[derive(Debug, Clone, Default)]
pub struct RootMap {
    roots: HashMap<String, Vec<Arc<Root>>>,
}

impl RootMap {
    /// Empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Map over already generated roots
    pub fn from_roots(roots: impl IntoIterator<Item = Root>) -> Self {
        let mut map = Self::new();
        for root in roots {
            map.insert(root);
        }
        map
    }

    /// Generate roots for every lexeme and index them.
    ///
    /// Each entry first gets the attributes it implies (see
    /// [`Lexeme::infer_attributes`]); use [`RootMap::from_roots`] with
    /// [`RootGenerator::generate_all`] to index entries exactly as given.
    pub fn from_lexemes<'a>(
        generator: &RootGenerator,
        lexemes: impl IntoIterator<Item = &'a Lexeme>,
    ) -> Self {
        let lexemes: Vec<Lexeme> = lexemes
            .into_iter()
            .map(|lexeme| lexeme.clone().with_inferred_attributes())
            .collect();
        Self::from_roots(generator.generate_all(&lexemes))
    }

    /// Add a root under its sequence, ignoring exact duplicates
    pub fn insert(&mut self, root: Root) {
        let entry = self.roots.entry(root.as_str().to_string()).or_default();
        if !entry.iter().any(|existing| existing.as_ref() == &root) {
            entry.push(Arc::new(root));
        }
    }

    /// Roots whose sequence is exactly `surface`
    pub fn get(&self, surface: &str) -> &[Arc<Root>] {
        self.roots.get(surface).map_or(&[], Vec::as_slice)
    }

    /// Whether any root has the sequence
    pub fn contains(&self, surface: &str) -> bool {
        self.roots.contains_key(surface)
    }

    /// The unique root with the sequence and categories, if there is exactly one
    pub fn find_unique(
        &self,
        surface: &str,
        primary_pos: PrimaryPos,
        secondary_pos: Option<SecondaryPos>,
    ) -> Option<Arc<Root>> {
        let mut matching = self.get(surface).iter().filter(|root| {
            root.lexeme.primary_pos == primary_pos && root.lexeme.secondary_pos == secondary_pos
        });
        let first = matching.next()?;
        if matching.next().is_some() {
            return None;
        }
        Some(Arc::clone(first))
    }

    /// All roots
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Root>> {
        self.roots.values().flatten()
    }

    /// Number of distinct sequences
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexemeAttribute;

    #[test]
    fn test_lookup_by_sequence() {
        let lexemes = vec![
            Lexeme::new("kitap", "kitap", PrimaryPos::Noun, None)
                .with_attributes([LexemeAttribute::Voicing]),
            Lexeme::new("kitap", "kitap", PrimaryPos::Noun, None)
                .with_attributes([LexemeAttribute::Voicing]),
        ];
        let map = RootMap::from_lexemes(&RootGenerator::new(), &lexemes);
        assert_eq!(map.get("kitab").len(), 1);
        assert_eq!(map.get("kitap").len(), 1);
        assert!(map.get("kita").is_empty());
        assert_eq!(map.iter().count(), 2);
    }

    #[test]
    fn test_find_unique() {
        let lexemes = vec![
            Lexeme::new("o", "o", PrimaryPos::Pronoun, Some(SecondaryPos::Personal)),
            Lexeme::new("o", "o", PrimaryPos::Pronoun, Some(SecondaryPos::Demonstrative)),
        ];
        let map = RootMap::from_lexemes(&RootGenerator::new(), &lexemes);
        assert!(map
            .find_unique("o", PrimaryPos::Pronoun, Some(SecondaryPos::Personal))
            .is_some());
        assert!(map.find_unique("o", PrimaryPos::Noun, None).is_none());
    }

    #[test]
    fn test_plain_entries_get_implied_roots() {
        let lexemes = vec![
            Lexeme::new("ben", "ben", PrimaryPos::Pronoun, Some(SecondaryPos::Personal)),
            Lexeme::new("demek", "de", PrimaryPos::Verb, None),
            Lexeme::new("kitap", "kitap", PrimaryPos::Noun, None),
        ];
        let map = RootMap::from_lexemes(&RootGenerator::new(), &lexemes);
        assert!(map.contains("ban"));
        assert!(map.contains("di"));
        assert!(map.contains("kitab"));
        assert!(map.get("de")[0].lexeme.has_attribute(LexemeAttribute::AoristA));

        let as_given = RootMap::from_roots(RootGenerator::new().generate_all(&lexemes));
        assert!(!as_given.contains("ban"));
        assert!(!as_given.contains("di"));
        assert!(!as_given.contains("kitab"));
    }
}
