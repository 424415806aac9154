//! Text renderings of parse results
//!
//! Three renderings are supported, shown here for "kitaba":
//!
//! | Method | Output |
//! |--------|--------|
//! | [`Formatter::format`] | `kitap+Noun+A3sg+Pnon+Dat` |
//! | [`Formatter::format_with_forms`] | `kitab(kitap)+Noun+A3sg+Pnon+Dat(+yA[a])` |
//! | [`Formatter::format_grouped`] | `(1,"kitap+Noun+A3sg+Pnon+Dat")` |
//!
//! Free transitions never appear in the output.

use crate::lexicon::{PrimaryPos, SecondaryPos};
use crate::morpheme::{MorphemeContainer, SuffixTransition};
use crate::morphotactics::{SuffixGraph, SuffixKind};
use crate::phonetics::sequence::{is_alphanumeric, is_blank};
use std::fmt::Write;

/// Secondary categories left out of grouped output
const GROUPED_SECONDARY_SKIPPED: [(PrimaryPos, SecondaryPos); 3] = [
    (PrimaryPos::Adverb, SecondaryPos::Question),
    (PrimaryPos::Adverb, SecondaryPos::Time),
    (PrimaryPos::Adjective, SecondaryPos::Question),
];

/// Renders containers using the suffix names of a graph
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    graph: &'a SuffixGraph,
}

impl<'a> Formatter<'a> {
    /// Formatter over the graph the containers were built with
    pub fn new(graph: &'a SuffixGraph) -> Self {
        Self { graph }
    }

    /// `lemma_root+Pos[+Spos]+Suffix...`
    pub fn format(&self, container: &MorphemeContainer) -> String {
        let lexeme = &container.root().lexeme;
        let mut out = format!(
            "{}+{}",
            lexeme.lemma_root,
            container.root_state().primary_pos
        );
        if let Some(secondary) = lexeme.secondary_pos {
            let _ = write!(out, "+{secondary}");
        }
        self.append_transitions(&mut out, container, false);
        out
    }

    /// `root(lemma)+Pos[+Spos]+Suffix(template[actual])...`
    pub fn format_with_forms(&self, container: &MorphemeContainer) -> String {
        let root = container.root();
        let mut out = format!(
            "{}({})+{}",
            root.as_str(),
            root.lexeme.lemma,
            container.root_state().primary_pos
        );
        if let Some(secondary) = root.lexeme.secondary_pos {
            let _ = write!(out, "+{secondary}");
        }
        self.append_transitions(&mut out, container, true);
        out
    }

    /// One `(index,"...")` group per inflection group; indices are optional
    pub fn format_grouped(&self, container: &MorphemeContainer, with_indices: bool) -> String {
        let lexeme = &container.root().lexeme;
        let mut head = format!("{}+{}", lexeme.lemma_root, lexeme.primary_pos);
        if let Some(secondary) = lexeme.secondary_pos {
            if !GROUPED_SECONDARY_SKIPPED.contains(&(lexeme.primary_pos, secondary)) {
                let _ = write!(head, "+{secondary}");
            }
        }

        let mut groups = vec![vec![head]];
        for transition in container.transitions() {
            if transition.is_derivational() {
                groups.push(vec![transition.target.primary_pos.to_string()]);
            }
            let suffix = self.graph.suffix(transition.application.suffix());
            if suffix.kind == SuffixKind::Free {
                continue;
            }
            if let Some(group) = groups.last_mut() {
                group.push(suffix.pretty_name.clone());
            }
        }

        let mut out = String::new();
        for (index, group) in groups.iter().enumerate() {
            out.push('(');
            if with_indices {
                let _ = write!(out, "{},", index + 1);
            }
            let _ = write!(out, "\"{}\")", group.join("+"));
        }
        out
    }

    fn append_transitions(&self, out: &mut String, container: &MorphemeContainer, with_forms: bool) {
        for transition in container.transitions() {
            if self.graph.suffix(transition.application.suffix()).kind == SuffixKind::Free {
                continue;
            }
            out.push('+');
            self.append_transition(out, transition, with_forms);
        }
    }

    fn append_transition(&self, out: &mut String, transition: &SuffixTransition, with_forms: bool) {
        if transition.is_derivational() {
            let _ = write!(out, "{}+", transition.target.primary_pos);
        }
        let application = &transition.application;
        let pretty = &self.graph.suffix(application.suffix()).pretty_name;
        if with_forms && !is_blank(&application.actual) && is_alphanumeric(&application.actual) {
            let _ = write!(
                out,
                "{pretty}({}[{}])",
                application.form.template(),
                application.actual
            );
        } else {
            out.push_str(pretty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Lexeme, LexemeAttribute, Root};
    use crate::parser::SuffixApplier;
    use crate::phonetics::{calculate_phonetic_attributes, PhoneticExpectations, PhoneticsEngine};
    use crate::suffix::PlainApplier;
    use std::sync::Arc;

    fn applier() -> SuffixApplier {
        let graph = Arc::new(SuffixGraph::standard().unwrap());
        SuffixApplier::new(graph, PhoneticsEngine::new(Arc::new(PlainApplier)))
    }

    fn kitaba(applier: &SuffixApplier) -> MorphemeContainer {
        let graph = applier.graph();
        let lexeme = Lexeme::new("kitap", "kitap", PrimaryPos::Noun, None)
            .with_attributes([LexemeAttribute::Voicing]);
        let attrs = calculate_phonetic_attributes("kitab", lexeme.attributes);
        let root = Arc::new(Root::new(
            "kitab",
            Arc::new(lexeme),
            attrs,
            PhoneticExpectations::empty(),
        ));
        let mut container =
            MorphemeContainer::new(root, graph.info(graph.state_id("NOUN_ROOT").unwrap()), "a");
        for (suffix, template, target) in [
            ("A3Sg_Noun", "", "NOUN_WITH_AGREEMENT"),
            ("Pnon_Noun", "", "NOUN_WITH_POSSESSION"),
            ("Dat_Noun", "+yA", "NOUN_WITH_CASE"),
        ] {
            let form = graph.suffix_form(suffix, template).unwrap();
            let target = graph.info(graph.state_id(target).unwrap());
            container = applier
                .try_suffix_form(&container, form, target, "kitaba")
                .unwrap();
        }
        container
    }

    #[test]
    fn test_format_variants() {
        let applier = applier();
        let container = kitaba(&applier);
        let formatter = Formatter::new(applier.graph());

        assert_eq!(formatter.format(&container), "kitap+Noun+A3sg+Pnon+Dat");
        assert_eq!(
            formatter.format_with_forms(&container),
            "kitab(kitap)+Noun+A3sg+Pnon+Dat(+yA[a])"
        );
        assert_eq!(
            formatter.format_grouped(&container, true),
            "(1,\"kitap+Noun+A3sg+Pnon+Dat\")"
        );
        assert_eq!(
            formatter.format_grouped(&container, false),
            "(\"kitap+Noun+A3sg+Pnon+Dat\")"
        );
    }

    #[test]
    fn test_bare_root() {
        let applier = applier();
        let graph = applier.graph();
        let lexeme = Lexeme::new("nere", "nere", PrimaryPos::Adverb, Some(SecondaryPos::Question));
        let attrs = calculate_phonetic_attributes("nere", lexeme.attributes);
        let root = Arc::new(Root::new(
            "nere",
            Arc::new(lexeme),
            attrs,
            PhoneticExpectations::empty(),
        ));
        let container =
            MorphemeContainer::new(root, graph.info(graph.state_id("ADVERB_ROOT").unwrap()), "");
        let formatter = Formatter::new(graph);
        assert_eq!(formatter.format(&container), "nere+Adv+Ques");
        assert_eq!(formatter.format_grouped(&container, true), "(1,\"nere+Adv\")");
    }
}
