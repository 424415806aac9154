//! Copula grammar
//!
//! Nominal predicates ("elmayım", "evdeydik"), the negative copula "değil"
//! and the explicit `dIr` copula on verbs and question particles.

use super::condition::Condition;
use super::graph::{
    form, GraphModule, RootDispatch, RootMatcher, StateType, SuffixGraphBuilder,
};
use crate::error::Result;
use crate::lexicon::PrimaryPos;

const DEGIL: &str = "değil";

const STATES: &[(&str, StateType, PrimaryPos)] = &[
    ("NOUN_COPULA", StateType::Derivational, PrimaryPos::Noun),
    ("ADJECTIVE_COPULA", StateType::Derivational, PrimaryPos::Adjective),
    ("ADVERB_COPULA", StateType::Derivational, PrimaryPos::Adverb),
    ("PRONOUN_COPULA", StateType::Derivational, PrimaryPos::Pronoun),
    ("VERB_DEGIL_ROOT", StateType::Transfer, PrimaryPos::Verb),
    ("VERB_COPULA_WITHOUT_TENSE", StateType::Transfer, PrimaryPos::Verb),
    ("VERB_COPULA_WITHOUT_TENSE_DERIV", StateType::Derivational, PrimaryPos::Verb),
    ("VERB_COPULA_WITH_TENSE", StateType::Transfer, PrimaryPos::Verb),
    ("VERB_COPULA_WITH_TENSE_DERIV", StateType::Derivational, PrimaryPos::Verb),
    ("VERB_COPULA_WITH_SWAPPED_A3PL", StateType::Transfer, PrimaryPos::Verb),
    (
        "VERB_COPULA_FROM_OTHERS_WITH_SWAPPED_A3PL",
        StateType::Derivational,
        PrimaryPos::Verb,
    ),
];

const SUFFIXES: &[(&str, &str)] = &[
    ("Pres_Cop", "Pres"),
    ("Narr_Cop", "Narr"),
    ("Past_Cop", "Past"),
    ("Cond_Cop", "Cond"),
    ("Cond_Cop_Secondary", "Cond"),
    ("While_Cop", "While"),
    ("AsIf_Cop", "AsIf"),
    ("Cop_Verb", "Cop"),
    ("Cop_Verb_Swapped", "Cop"),
    ("Cop_Others_Swapped", "Cop"),
    ("Cop_Ques", "Cop"),
];

const AGREEMENTS: &[(&str, &str)] = &[
    ("A1Sg_Cop", "A1sg"),
    ("A2Sg_Cop", "A2sg"),
    ("A3Sg_Cop", "A3sg"),
    ("A1Pl_Cop", "A1pl"),
    ("A2Pl_Cop", "A2pl"),
    ("A3Pl_Cop", "A3pl"),
];

const FREE_TRANSITIONS: &[(&str, &str, &str)] = &[
    ("Noun_Cop_Free_Transition", "NOUN_TERMINAL_TRANSFER", "NOUN_COPULA"),
    ("Adjective_Cop_Free_Transition", "ADJECTIVE_TERMINAL_TRANSFER", "ADJECTIVE_COPULA"),
    ("Adverb_Cop_Free_Transition", "ADVERB_TERMINAL_TRANSFER", "ADVERB_COPULA"),
    ("Pronoun_Cop_Free_Transition", "PRONOUN_TERMINAL_TRANSFER", "PRONOUN_COPULA"),
    ("Verb_Degil_Free_Transition", "VERB_DEGIL_ROOT", "VERB_COPULA_WITHOUT_TENSE"),
    (
        "Copula_Deriv_Free_Transition_1",
        "VERB_COPULA_WITHOUT_TENSE",
        "VERB_COPULA_WITHOUT_TENSE_DERIV",
    ),
    (
        "Copula_Deriv_Free_Transition_2",
        "VERB_COPULA_WITH_TENSE",
        "VERB_COPULA_WITH_TENSE_DERIV",
    ),
];

const ZERO_TRANSITIONS: &[(&str, &str, &str)] = &[
    ("Noun_Copula_Zero_Transition", "NOUN_COPULA", "VERB_COPULA_WITHOUT_TENSE"),
    ("Adjective_Copula_Zero_Transition", "ADJECTIVE_COPULA", "VERB_COPULA_WITHOUT_TENSE"),
    ("Adverb_Copula_Zero_Transition", "ADVERB_COPULA", "VERB_COPULA_WITHOUT_TENSE"),
    ("Pronoun_Copula_Zero_Transition", "PRONOUN_COPULA", "VERB_COPULA_WITHOUT_TENSE"),
    ("Adjective_Adverb_Zero_Transition", "ADJECTIVE_DERIV", "ADVERB_ROOT"),
];

/// Copula extensions over the basic grammar
#[derive(Debug, Clone, Copy, Default)]
pub struct CopulaModule;

impl GraphModule for CopulaModule {
    fn name(&self) -> &'static str {
        "copula"
    }

    fn register(&self, b: &mut SuffixGraphBuilder) -> Result<RootDispatch> {
        for (name, kind, pos) in STATES {
            b.register_state(name, *kind, *pos)?;
        }
        for (suffix, pretty) in SUFFIXES {
            b.register_suffix(suffix, pretty)?;
        }
        let agreements = b.register_group("Copula_Agreements_Group")?;
        for (suffix, pretty) in AGREEMENTS {
            b.register_grouped_suffix(suffix, agreements, pretty)?;
        }
        for (suffix, from, to) in FREE_TRANSITIONS {
            b.free_transition(suffix, from, to)?;
        }
        for (suffix, from, to) in ZERO_TRANSITIONS {
            b.zero_transition(suffix, from, to)?;
        }

        register_tenses(b)?;
        register_swapped_a3pl(b)?;
        register_agreements(b)?;
        register_derivations(b)?;
        register_explicit_copula(b)?;

        Ok(RootDispatch::new().route(
            RootMatcher::PosWithSequence(PrimaryPos::Verb, DEGIL.to_string()),
            b.state_id("VERB_DEGIL_ROOT")?,
        ))
    }
}

fn register_tenses(b: &mut SuffixGraphBuilder) -> Result<()> {
    for (suffix, template) in [
        ("Pres_Cop", ""),
        ("Narr_Cop", "+ymIş"),
        ("Past_Cop", "+ydI"),
        ("Cond_Cop", "+ysA"),
    ] {
        b.connect(
            "VERB_COPULA_WITHOUT_TENSE",
            suffix,
            "VERB_COPULA_WITH_TENSE",
            [form(template)],
        )?;
    }
    let after_pres = b.comes_after("Pres_Cop")?;
    b.connect(
        "VERB_COPULA_WITH_TENSE",
        "Cond_Cop_Secondary",
        "VERB_COPULA_WITH_TENSE",
        [form("+ysA").pre(!after_pres)],
    )
}

// "gelecekdir-ler", "elmadır-lar"
fn register_swapped_a3pl(b: &mut SuffixGraphBuilder) -> Result<()> {
    let after_copula_tense = Condition::any([
        b.comes_after("Neces")?,
        b.comes_after("Aor")?,
        b.comes_after("Prog")?,
        b.comes_after("Fut")?,
        b.comes_after("Narr")?,
    ]);
    b.connect(
        "VERB_WITH_TENSE",
        "Cop_Verb_Swapped",
        "VERB_COPULA_WITH_SWAPPED_A3PL",
        [form("dIr").pre(after_copula_tense)],
    )?;
    b.edge("VERB_COPULA_WITH_SWAPPED_A3PL", "A3Pl_Cop", "VERB_TERMINAL")?;

    b.connect(
        "VERB_COPULA_WITHOUT_TENSE",
        "Cop_Others_Swapped",
        "VERB_COPULA_FROM_OTHERS_WITH_SWAPPED_A3PL",
        [form("dIr")],
    )?;
    b.edge(
        "VERB_COPULA_FROM_OTHERS_WITH_SWAPPED_A3PL",
        "A3Pl_Cop",
        "VERB_TERMINAL",
    )
}

fn register_agreements(b: &mut SuffixGraphBuilder) -> Result<()> {
    let after_cond_or_past = Condition::any([
        b.comes_after("Cond_Cop")?,
        b.comes_after("Cond_Cop_Secondary")?,
        b.comes_after("Past_Cop")?,
    ]);
    let short = |template: &str| form(template).pre(after_cond_or_past.clone());

    let agreements = [
        ("A1Sg_Cop", vec![form("+yIm"), short("m")]),
        ("A2Sg_Cop", vec![form("sIn"), short("n")]),
        ("A3Sg_Cop", vec![form("")]),
        ("A1Pl_Cop", vec![form("+yIz"), short("!k")]),
        ("A2Pl_Cop", vec![form("sInIz"), short("nIz")]),
        ("A3Pl_Cop", vec![form("lAr")]),
    ];
    for (suffix, forms) in agreements {
        b.connect("VERB_COPULA_WITH_TENSE", suffix, "VERB_TERMINAL_TRANSFER", forms)?;
    }
    Ok(())
}

fn register_derivations(b: &mut SuffixGraphBuilder) -> Result<()> {
    b.connect(
        "VERB_COPULA_WITHOUT_TENSE_DERIV",
        "While_Cop",
        "ADVERB_ROOT",
        [form("+yken")],
    )?;
    let as_if = b.comes_after("Pres_Cop")? | b.comes_after("Narr_Cop")?;
    b.connect(
        "VERB_COPULA_WITH_TENSE_DERIV",
        "AsIf_Cop",
        "ADVERB_ROOT",
        [form("cAs!InA").pre(as_if)],
    )
}

fn register_explicit_copula(b: &mut SuffixGraphBuilder) -> Result<()> {
    let mut excluded = Vec::new();
    for suffix in [
        "Aor",
        "Past",
        "Cond",
        "Imp",
        "Opt",
        "Cond_Cop",
        "Cond_Cop_Secondary",
        "Past_Cop",
        "Narr_Cop",
        "Narr_Ques",
        "Past_Ques",
    ] {
        excluded.push(!b.comes_after(suffix)?);
    }
    b.connect(
        "VERB_TERMINAL_TRANSFER",
        "Cop_Verb",
        "VERB_TERMINAL_TRANSFER",
        [form("dIr").pre(Condition::all(excluded))],
    )?;

    let after_pres_ques = b.comes_after("Pres_Ques")?;
    b.connect(
        "QUESTION_WITH_AGREEMENT",
        "Cop_Ques",
        "QUESTION_WITH_AGREEMENT",
        [form("dIr").pre(after_pres_ques)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Lexeme, Root};
    use crate::morphotactics::SuffixGraph;
    use crate::phonetics::{PhoneticAttributes, PhoneticExpectations};
    use std::sync::Arc;

    fn verb(surface: &str) -> Root {
        Root::new(
            surface,
            Arc::new(Lexeme::new(surface, surface, PrimaryPos::Verb, None)),
            PhoneticAttributes::empty(),
            PhoneticExpectations::empty(),
        )
    }

    #[test]
    fn test_degil_has_its_own_root_state() {
        let graph = SuffixGraph::standard().unwrap();
        let degil = graph.find_state("VERB_DEGIL_ROOT");
        assert_eq!(graph.default_state_for_root(&verb(DEGIL)), degil);
        assert_eq!(
            graph.default_state_for_root(&verb("gel")),
            graph.find_state("VERB_ROOT")
        );
        assert!(graph.root_states().contains(&degil.unwrap()));
    }

    #[test]
    fn test_question_copula_uses_its_own_suffix() {
        let graph = SuffixGraph::standard().unwrap();
        let state = graph.state_id("QUESTION_WITH_AGREEMENT").unwrap();
        let cop_ques = graph.suffix_id("Cop_Ques").unwrap();
        assert_eq!(graph.target_of(state, cop_ques), Some(state));
        assert_eq!(graph.target_of(state, graph.suffix_id("Cop_Verb").unwrap()), None);
        assert_eq!(graph.suffix(cop_ques).forms.len(), 1);
    }

    #[test]
    fn test_copula_agreements_form_a_group() {
        let graph = SuffixGraph::standard().unwrap();
        let a1sg = graph.suffix(graph.suffix_id("A1Sg_Cop").unwrap());
        let group = graph.group(a1sg.group.unwrap());
        assert_eq!(group.name, "Copula_Agreements_Group");
        assert_eq!(group.members.len(), 6);
    }
}
