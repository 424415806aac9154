//! Proper noun and abbreviation grammar

use super::graph::{form, GraphModule, RootDispatch, RootMatcher, StateType, SuffixGraphBuilder};
use crate::error::Result;
use crate::lexicon::{PrimaryPos, SecondaryPos};

const STATES: &[(&str, StateType)] = &[
    ("PROPER_NOUN_ROOT", StateType::Transfer),
    ("PROPER_NOUN_WITH_AGREEMENT", StateType::Transfer),
    ("PROPER_NOUN_WITH_POSSESSION", StateType::Transfer),
    ("PROPER_NOUN_WITH_CASE", StateType::Transfer),
    ("PROPER_NOUN_TERMINAL", StateType::Terminal),
];

/// A bare proper noun ends the word; inflection goes through the apostrophe
/// into the common noun root, as in "Ahmet'e"
#[derive(Debug, Clone, Copy, Default)]
pub struct ProperNounModule;

impl GraphModule for ProperNounModule {
    fn name(&self) -> &'static str {
        "proper_noun"
    }

    fn register(&self, b: &mut SuffixGraphBuilder) -> Result<RootDispatch> {
        for (name, kind) in STATES {
            b.register_state(name, *kind, PrimaryPos::Noun)?;
        }
        b.register_suffix("A3Sg_Proper_Noun", "A3sg")?;
        b.register_suffix("Pnon_Proper_Noun", "Pnon")?;
        b.register_suffix("Nom_Proper_Noun", "Nom")?;
        b.register_suffix("Apos_Proper_Noun", "Apos")?;

        b.free_transition(
            "Proper_Noun_Free_Transition_1",
            "PROPER_NOUN_WITH_CASE",
            "PROPER_NOUN_TERMINAL",
        )?;
        b.connect(
            "PROPER_NOUN_ROOT",
            "A3Sg_Proper_Noun",
            "PROPER_NOUN_WITH_AGREEMENT",
            [form("")],
        )?;
        b.connect(
            "PROPER_NOUN_WITH_AGREEMENT",
            "Pnon_Proper_Noun",
            "PROPER_NOUN_WITH_POSSESSION",
            [form("")],
        )?;
        b.connect(
            "PROPER_NOUN_WITH_POSSESSION",
            "Nom_Proper_Noun",
            "PROPER_NOUN_WITH_CASE",
            [form("")],
        )?;
        b.connect("PROPER_NOUN_ROOT", "Apos_Proper_Noun", "NOUN_ROOT", [form("'")])?;

        let root = b.state_id("PROPER_NOUN_ROOT")?;
        Ok(RootDispatch::new()
            .route(
                RootMatcher::PosWithSecondary(PrimaryPos::Noun, SecondaryPos::ProperNoun),
                root,
            )
            .route(
                RootMatcher::PosWithSecondary(PrimaryPos::Noun, SecondaryPos::Abbreviation),
                root,
            ))
    }
}
