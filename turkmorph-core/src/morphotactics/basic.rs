//! Basic grammar: the core categories and their inflection and derivation

use super::condition::Condition;
use super::graph::{
    form, GraphModule, RootDispatch, RootMatcher, StateType, SuffixGraphBuilder,
};
use crate::error::Result;
use crate::lexicon::{LexemeAttribute, PrimaryPos, SecondaryPos};

const T: StateType = StateType::Transfer;
const D: StateType = StateType::Derivational;
const E: StateType = StateType::Terminal;

const STATES: &[(&str, StateType, PrimaryPos)] = &[
    ("NOUN_ROOT", T, PrimaryPos::Noun),
    ("NOUN_WITH_AGREEMENT", T, PrimaryPos::Noun),
    ("NOUN_WITH_POSSESSION", T, PrimaryPos::Noun),
    ("NOUN_WITH_CASE", T, PrimaryPos::Noun),
    ("NOUN_TERMINAL_TRANSFER", T, PrimaryPos::Noun),
    ("NOUN_TERMINAL", E, PrimaryPos::Noun),
    ("NOUN_NOM_DERIV", D, PrimaryPos::Noun),
    ("NOUN_POSSESSIVE_NOM_DERIV", D, PrimaryPos::Noun),
    ("NOUN_DERIV_WITH_CASE", D, PrimaryPos::Noun),
    ("NOUN_COMPOUND_ROOT", T, PrimaryPos::Noun),
    ("NOUN_COMPOUND_WITH_AGREEMENT", T, PrimaryPos::Noun),
    ("NOUN_COMPOUND_WITH_POSSESSION", T, PrimaryPos::Noun),
    ("VERB_ROOT", T, PrimaryPos::Verb),
    ("VERB_WITH_POLARITY", T, PrimaryPos::Verb),
    ("VERB_WITH_TENSE", T, PrimaryPos::Verb),
    ("VERB_WITH_SWAPPED_A3PL", T, PrimaryPos::Verb),
    ("VERB_WITH_SWAPPED_PAST_COND", T, PrimaryPos::Verb),
    ("VERB_TERMINAL", E, PrimaryPos::Verb),
    ("VERB_TERMINAL_TRANSFER", T, PrimaryPos::Verb),
    ("VERB_PLAIN_DERIV", D, PrimaryPos::Verb),
    ("VERB_POLARITY_DERIV", D, PrimaryPos::Verb),
    ("VERB_WITH_TENSE_BEFORE_DERIV", T, PrimaryPos::Verb),
    ("VERB_TENSE_DERIV", D, PrimaryPos::Verb),
    ("VERB_TENSE_ADJ_DERIV", D, PrimaryPos::Verb),
    ("ADJECTIVE_ROOT", T, PrimaryPos::Adjective),
    ("ADJECTIVE_PART_WITHOUT_POSSESSION", T, PrimaryPos::Adjective),
    ("ADJECTIVE_TERMINAL", E, PrimaryPos::Adjective),
    ("ADJECTIVE_TERMINAL_TRANSFER", T, PrimaryPos::Adjective),
    ("ADJECTIVE_DERIV", D, PrimaryPos::Adjective),
    ("ADVERB_ROOT", T, PrimaryPos::Adverb),
    ("ADVERB_TERMINAL", E, PrimaryPos::Adverb),
    ("ADVERB_TERMINAL_TRANSFER", T, PrimaryPos::Adverb),
    ("ADVERB_DERIV", D, PrimaryPos::Adverb),
    ("PRONOUN_ROOT", T, PrimaryPos::Pronoun),
    ("PRONOUN_WITH_AGREEMENT", T, PrimaryPos::Pronoun),
    ("PRONOUN_WITH_POSSESSION", T, PrimaryPos::Pronoun),
    ("PRONOUN_WITH_CASE", T, PrimaryPos::Pronoun),
    ("PRONOUN_NOM_DERIV", D, PrimaryPos::Pronoun),
    ("PRONOUN_TERMINAL", E, PrimaryPos::Pronoun),
    ("PRONOUN_TERMINAL_TRANSFER", T, PrimaryPos::Pronoun),
    ("PRONOUN_DERIV_WITH_CASE", D, PrimaryPos::Pronoun),
    ("DETERMINER_ROOT_TERMINAL", E, PrimaryPos::Determiner),
    ("INTERJECTION_ROOT_TERMINAL", E, PrimaryPos::Interjection),
    ("CONJUNCTION_ROOT_TERMINAL", E, PrimaryPos::Conjunction),
    ("DUP_ROOT_TERMINAL", E, PrimaryPos::Duplicator),
    ("PUNC_ROOT_TERMINAL", E, PrimaryPos::Punctuation),
    ("POSTP_ROOT_TERMINAL", E, PrimaryPos::PostPositive),
    ("QUESTION_ROOT", T, PrimaryPos::Question),
    ("QUESTION_WITH_TENSE", T, PrimaryPos::Question),
    ("QUESTION_WITH_AGREEMENT", T, PrimaryPos::Question),
    ("QUESTION_TERMINAL", E, PrimaryPos::Question),
];

/// (group, [(suffix, pretty name)])
const GROUPS: &[(&str, &[(&str, &str)])] = &[
    ("Noun_Agreements_Group", &[("A3Sg_Noun", "A3sg"), ("A3Pl_Noun", "A3pl")]),
    (
        "Noun_Possession_Group",
        &[
            ("Pnon_Noun", "Pnon"),
            ("P1Sg_Noun", "P1sg"),
            ("P2Sg_Noun", "P2sg"),
            ("P3Sg_Noun", "P3sg"),
            ("P1Pl_Noun", "P1pl"),
            ("P2Pl_Noun", "P2pl"),
            ("P3Pl_Noun", "P3pl"),
        ],
    ),
    (
        "Noun_Case_Group",
        &[
            ("Nom_Noun", "Nom"),
            ("Nom_Deriv_Noun", "Nom"),
            ("Nom_Deriv_Possessive_Noun", "Nom"),
            ("Acc_Noun", "Acc"),
            ("Dat_Noun", "Dat"),
            ("Loc_Noun", "Loc"),
            ("Abl_Noun", "Abl"),
            ("Gen_Noun", "Gen"),
            ("Ins_Noun", "Ins"),
        ],
    ),
    (
        "Relative_Noun_Pronoun_Group",
        &[("RelPron_A3Sg_Noun", "A3sg"), ("RelPron_A3Pl_Noun", "A3pl")],
    ),
    (
        "Verb_Agreements_Group",
        &[
            ("A1Sg_Verb", "A1sg"),
            ("A2Sg_Verb", "A2sg"),
            ("A3Sg_Verb", "A3sg"),
            ("A1Pl_Verb", "A1pl"),
            ("A2Pl_Verb", "A2pl"),
            ("A3Pl_Verb", "A3pl"),
        ],
    ),
    (
        "Verb_Agreements_Swapped_Group",
        &[
            ("A1Sg_Verb_Swapped", "A1sg"),
            ("A2Sg_Verb_Swapped", "A2sg"),
            ("A1Pl_Verb_Swapped", "A1pl"),
            ("A2Pl_Verb_Swapped", "A2pl"),
        ],
    ),
    ("Verb_Conditions_Group", &[("Neg", "Neg"), ("Pos", "Pos")]),
    (
        "Adjective_Possessions_Group",
        &[
            ("Pnon_Adj", "Pnon"),
            ("P1Sg_Adj", "P1sg"),
            ("P2Sg_Adj", "P2sg"),
            ("P3Sg_Adj", "P3sg"),
            ("P1Pl_Adj", "P1pl"),
            ("P2Pl_Adj", "P2pl"),
            ("P3Pl_Adj", "P3pl"),
        ],
    ),
    (
        "Pronoun_Agreements_Group",
        &[
            ("A1Sg_Pron", "A1sg"),
            ("A2Sg_Pron", "A2sg"),
            ("A3Sg_Pron", "A3sg"),
            ("A1Pl_Pron", "A1pl"),
            ("A2Pl_Pron", "A2pl"),
            ("A3Pl_Pron", "A3pl"),
        ],
    ),
    (
        "Pronoun_Possessions_Group",
        &[
            ("Pnon_Pron", "Pnon"),
            ("P1Sg_Pron", "P1sg"),
            ("P2Sg_Pron", "P2sg"),
            ("P3Sg_Pron", "P3sg"),
            ("P1Pl_Pron", "P1pl"),
            ("P2Pl_Pron", "P2pl"),
            ("P3Pl_Pron", "P3pl"),
        ],
    ),
    (
        "Pronoun_Case_Group",
        &[
            ("Nom_Pron", "Nom"),
            ("Nom_Pron_Deriv", "Nom"),
            ("Acc_Pron", "Acc"),
            ("Dat_Pron", "Dat"),
            ("Loc_Pron", "Loc"),
            ("Abl_Pron", "Abl"),
            ("Gen_Pron", "Gen"),
            ("Ins_Pron", "Ins"),
            ("AccordingTo", "AccordingTo"),
        ],
    ),
    (
        "Relative_Pron_Pronoun_Group",
        &[("RelPron_A3Sg_Pron", "A3sg"), ("RelPron_A3Pl_Pron", "A3pl")],
    ),
    (
        "Question_Tense_Group",
        &[
            ("Pres_Ques", "Pres"),
            ("Past_Ques", "Past"),
            ("Narr_Ques", "Narr"),
        ],
    ),
    (
        "Question_Agreements_Group",
        &[
            ("A1Sg_Ques", "A1sg"),
            ("A2Sg_Ques", "A2sg"),
            ("A3Sg_Ques", "A3sg"),
            ("A1Pl_Ques", "A1pl"),
            ("A2Pl_Ques", "A2pl"),
            ("A3Pl_Ques", "A3pl"),
        ],
    ),
];

/// (suffix, pretty name)
const SUFFIXES: &[(&str, &str)] = &[
    // noun to noun, verb, adjective and adverb
    ("Dim", "Dim"),
    ("Prof", "Prof"),
    ("FitFor", "FitFor"),
    ("Title", "Title"),
    ("Acquire", "Acquire"),
    ("Become_Noun", "Become"),
    ("Agt_Noun_to_Adj", "Agt"),
    ("With", "With"),
    ("Without", "Without"),
    ("Related", "Related"),
    ("PointQual_Noun", "PointQual"),
    ("JustLike_Noun", "JustLike"),
    ("Equ_Noun", "Equ"),
    ("Y", "Y"),
    ("For", "For"),
    ("DurationOf", "DurationOf"),
    ("OfUnit_Noun", "OfUnit"),
    ("InTermsOf", "InTermsOf"),
    ("By_Pnon", "By"),
    ("By_Possessive", "By"),
    ("ManyOf", "ManyOf"),
    ("ForALotOfTime", "ForALotOfTime"),
    // compound nouns
    ("A3Sg_Noun_Compound", "A3sg"),
    ("Pnon_Noun_Compound", "Pnon"),
    ("P3Sg_Noun_Compound", "P3sg"),
    ("P3Pl_Noun_Compound", "P3pl"),
    ("Nom_Noun_Compound_Deriv", "Nom"),
    // tenses and moods
    ("Aor", "Aor"),
    ("Prog", "Prog"),
    ("Fut", "Fut"),
    ("Narr", "Narr"),
    ("Past", "Past"),
    ("Pres", "Pres"),
    ("Cond", "Cond"),
    ("Imp", "Imp"),
    ("Neces", "Neces"),
    ("Opt", "Opt"),
    ("Desr", "Desr"),
    // verb derivations
    ("Inf", "Inf"),
    ("PastPart_Noun", "PastPart"),
    ("FutPart_Noun", "FutPart"),
    ("Able", "Able"),
    ("Pass", "Pass"),
    ("Recip", "Recip"),
    ("Hastily", "Hastily"),
    ("EverSince", "EverSince"),
    ("Stay", "Stay"),
    ("Almost", "Almost"),
    ("Once", "Once"),
    ("Gone", "Gone"),
    ("Start", "Start"),
    ("AfterDoingSo", "AfterDoingSo"),
    ("WithoutHavingDoneSo", "WithoutHavingDoneSo"),
    ("AsLongAs", "AsLongAs"),
    ("ByDoingSo", "ByDoingSo"),
    ("When", "When"),
    ("Until", "Until"),
    ("SinceDoingSo", "SinceDoingSo"),
    ("While", "While"),
    ("AsIf", "AsIf"),
    ("A3Pl_Verb_For_Adv", "A3pl"),
    ("PresPart", "PresPart"),
    ("PastPart_Adj", "PastPart"),
    ("FutPart_Adj", "FutPart"),
    ("Agt_Verb_to_Adj", "Agt"),
    ("Aorist_to_Adj", "Aor"),
    ("Future_to_Adj", "Fut"),
    ("Narr_to_Adj", "Narr"),
    // adjective derivations
    ("JustLike_Adj", "JustLike"),
    ("Equ_Adj", "Equ"),
    ("Quite", "Quite"),
    ("Ly", "Ly"),
    ("Ness", "Ness"),
    ("Become_Adj", "Become"),
    // pronoun and adverb derivations
    ("Without_Pron", "Without"),
    ("PointQual_Pron", "PointQual"),
    ("PointQual_Adv", "PointQual"),
];

/// (suffix, from, to)
const FREE_TRANSITIONS: &[(&str, &str, &str)] = &[
    ("Noun_Free_Transition_1", "NOUN_WITH_CASE", "NOUN_TERMINAL_TRANSFER"),
    ("Noun_Free_Transition_2", "NOUN_WITH_CASE", "NOUN_DERIV_WITH_CASE"),
    ("Verb_Free_Transition_1", "VERB_ROOT", "VERB_PLAIN_DERIV"),
    ("Verb_Free_Transition_2", "VERB_WITH_POLARITY", "VERB_POLARITY_DERIV"),
    ("Verb_Free_Transition_3", "VERB_WITH_TENSE", "VERB_WITH_TENSE_BEFORE_DERIV"),
    ("Verb_Free_Transition_4", "VERB_WITH_TENSE_BEFORE_DERIV", "VERB_TENSE_DERIV"),
    ("Verb_Free_Transition_5", "VERB_TERMINAL_TRANSFER", "VERB_TERMINAL"),
    ("Adj_Free_Transition_1", "ADJECTIVE_ROOT", "ADJECTIVE_TERMINAL_TRANSFER"),
    ("Adj_Free_Transition_2", "ADJECTIVE_TERMINAL_TRANSFER", "ADJECTIVE_TERMINAL"),
    ("Adj_Free_Transition_3", "ADJECTIVE_ROOT", "ADJECTIVE_DERIV"),
    ("Adv_Free_Transition_1", "ADVERB_ROOT", "ADVERB_TERMINAL_TRANSFER"),
    ("Adv_Free_Transition_2", "ADVERB_TERMINAL_TRANSFER", "ADVERB_TERMINAL"),
    ("Adv_Free_Transition_3", "ADVERB_ROOT", "ADVERB_DERIV"),
    ("Pronoun_Free_Transition_1", "PRONOUN_WITH_CASE", "PRONOUN_TERMINAL_TRANSFER"),
    ("Pronoun_Free_Transition_2", "PRONOUN_TERMINAL_TRANSFER", "PRONOUN_TERMINAL"),
    ("Pronoun_Free_Transition_3", "PRONOUN_WITH_CASE", "PRONOUN_DERIV_WITH_CASE"),
    ("Question_Free_Transition_1", "QUESTION_WITH_AGREEMENT", "QUESTION_TERMINAL"),
];

const ZERO_TRANSITIONS: &[(&str, &str, &str)] = &[
    ("Adj_to_Noun_Zero_Transition", "ADJECTIVE_DERIV", "NOUN_ROOT"),
    ("Verb_to_Adj_Zero_Transition", "VERB_TENSE_ADJ_DERIV", "ADJECTIVE_ROOT"),
];

/// The grammar every other module builds on
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicModule;

impl GraphModule for BasicModule {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn register(&self, b: &mut SuffixGraphBuilder) -> Result<RootDispatch> {
        for (name, kind, pos) in STATES {
            b.register_state(name, *kind, *pos)?;
        }
        for (group, members) in GROUPS {
            let group = b.register_group(group)?;
            for (suffix, pretty) in *members {
                b.register_grouped_suffix(suffix, group, pretty)?;
            }
        }
        for (suffix, pretty) in SUFFIXES {
            b.register_suffix(suffix, pretty)?;
        }
        b.register_repeatable_suffix("Caus", "Caus")?;
        b.conditional_free_transition("Noun_Terminal_Conditional_Free_Transition")?;

        for (suffix, from, to) in FREE_TRANSITIONS {
            b.free_transition(suffix, from, to)?;
        }
        for (suffix, from, to) in ZERO_TRANSITIONS {
            b.zero_transition(suffix, from, to)?;
        }

        register_noun_suffixes(b)?;
        register_verb_suffixes(b)?;
        register_adjective_suffixes(b)?;
        register_pronoun_suffixes(b)?;
        register_adverb_suffixes(b)?;
        register_question_suffixes(b)?;

        let state = |name: &str| b.state_id(name);
        Ok(RootDispatch::new()
            .route(
                RootMatcher::PosWithAttribute(PrimaryPos::Noun, LexemeAttribute::CompoundP3sg),
                state("NOUN_COMPOUND_ROOT")?,
            )
            .route(RootMatcher::Pos(PrimaryPos::Noun), state("NOUN_ROOT")?)
            .route(RootMatcher::Pos(PrimaryPos::Verb), state("VERB_ROOT")?)
            .route(RootMatcher::Pos(PrimaryPos::Adverb), state("ADVERB_ROOT")?)
            .route(RootMatcher::Pos(PrimaryPos::Adjective), state("ADJECTIVE_ROOT")?)
            .route(RootMatcher::Pos(PrimaryPos::Pronoun), state("PRONOUN_ROOT")?)
            .route(
                RootMatcher::Pos(PrimaryPos::Determiner),
                state("DETERMINER_ROOT_TERMINAL")?,
            )
            .route(
                RootMatcher::Pos(PrimaryPos::Interjection),
                state("INTERJECTION_ROOT_TERMINAL")?,
            )
            .route(
                RootMatcher::Pos(PrimaryPos::Conjunction),
                state("CONJUNCTION_ROOT_TERMINAL")?,
            )
            .route(RootMatcher::Pos(PrimaryPos::Question), state("QUESTION_ROOT")?)
            .route(
                RootMatcher::Pos(PrimaryPos::Punctuation),
                state("PUNC_ROOT_TERMINAL")?,
            )
            .route(RootMatcher::Pos(PrimaryPos::Duplicator), state("DUP_ROOT_TERMINAL")?)
            .route(
                RootMatcher::Pos(PrimaryPos::PostPositive),
                state("POSTP_ROOT_TERMINAL")?,
            ))
    }
}

fn register_noun_suffixes(b: &mut SuffixGraphBuilder) -> Result<()> {
    b.connect("NOUN_ROOT", "A3Sg_Noun", "NOUN_WITH_AGREEMENT", [form("")])?;
    b.connect("NOUN_ROOT", "A3Pl_Noun", "NOUN_WITH_AGREEMENT", [form("lAr")])?;

    // possessives
    let point_quals = ["PointQual_Adv", "PointQual_Noun", "PointQual_Pron"];
    let mut after_point_qual = Vec::with_capacity(point_quals.len());
    for suffix in point_quals {
        after_point_qual.push(b.comes_after_last_non_blank_derivation(suffix)?);
    }
    let not_after_point_qual = Condition::all(after_point_qual.iter().cloned().map(|c| !c));
    let after_point_qual = Condition::any(after_point_qual);

    b.connect("NOUN_WITH_AGREEMENT", "Pnon_Noun", "NOUN_WITH_POSSESSION", [form("")])?;
    for (suffix, template) in [
        ("P1Sg_Noun", "+Im"),
        ("P2Sg_Noun", "+In"),
        ("P3Sg_Noun", "+sI"),
        ("P1Pl_Noun", "+ImIz"),
        ("P2Pl_Noun", "+InIz"),
        ("P3Pl_Noun", "lAr!I"),
    ] {
        b.connect(
            "NOUN_WITH_AGREEMENT",
            suffix,
            "NOUN_WITH_POSSESSION",
            [form(template).pre(not_after_point_qual.clone())],
        )?;
    }
    let after_a3pl = b.comes_after("A3Pl_Noun")?;
    b.form(
        "P3Pl_Noun",
        form("!I").pre(after_a3pl.clone() & not_after_point_qual),
    )?;

    // cases; "kitabı-nı" and "kitaptaki-ni" take the n buffer
    let after_p3 = Condition::any([
        b.comes_after("P3Sg_Noun")?,
        b.comes_after("P3Pl_Noun")?,
        b.comes_after("P3Sg_Noun_Compound")?,
        b.comes_after("P3Pl_Noun_Compound")?,
    ]);
    let point_qual_a3sg =
        after_point_qual.clone() & (b.comes_after("A3Sg_Noun")? | b.comes_after("A3Sg_Noun_Compound")?);
    let point_qual_a3pl = after_point_qual & after_a3pl.clone();
    let y_buffer = (!after_p3.clone() & !point_qual_a3sg.clone()) | point_qual_a3pl;
    let n_buffer = after_p3 | point_qual_a3sg;
    let after_pnon = b.comes_after("Pnon_Noun")?;

    b.connect("NOUN_WITH_POSSESSION", "Nom_Noun", "NOUN_WITH_CASE", [form("")])?;
    b.connect(
        "NOUN_WITH_POSSESSION",
        "Nom_Deriv_Noun",
        "NOUN_NOM_DERIV",
        [form("").pre(after_pnon.clone())],
    )?;
    b.connect(
        "NOUN_WITH_POSSESSION",
        "Nom_Deriv_Possessive_Noun",
        "NOUN_POSSESSIVE_NOM_DERIV",
        [form("").pre(!after_pnon.clone())],
    )?;
    for (suffix, y_form, n_form) in [
        ("Acc_Noun", "+yI", "nI"),
        ("Dat_Noun", "+yA", "nA"),
        ("Loc_Noun", "dA", "ndA"),
        ("Abl_Noun", "dAn", "ndAn"),
    ] {
        b.connect(
            "NOUN_WITH_POSSESSION",
            suffix,
            "NOUN_WITH_CASE",
            [
                form(y_form).pre(y_buffer.clone()),
                form(n_form).pre(n_buffer.clone()),
            ],
        )?;
    }
    b.connect("NOUN_WITH_POSSESSION", "Gen_Noun", "NOUN_WITH_CASE", [form("+nIn")])?;
    b.connect("NOUN_WITH_POSSESSION", "Ins_Noun", "NOUN_WITH_CASE", [form("+ylA")])?;

    // noun to noun
    for (suffix, template) in [("Dim", "cIk"), ("Prof", "lIk"), ("FitFor", "lIk"), ("Title", "lIk")] {
        b.connect("NOUN_NOM_DERIV", suffix, "NOUN_ROOT", [form(template)])?;
    }

    // noun to verb
    b.connect("NOUN_NOM_DERIV", "Acquire", "VERB_ROOT", [form("lAn")])?;
    b.connect("NOUN_NOM_DERIV", "Become_Noun", "VERB_ROOT", [form("lAş")])?;

    // noun to adjective
    let not_after_a3pl = !after_a3pl;
    for (suffix, spec) in [
        ("Agt_Noun_to_Adj", form("cI")),
        ("With", form("lI")),
        ("Without", form("sIz").pre(not_after_a3pl.clone())),
        ("Related", form("sAl").pre(not_after_a3pl)),
        ("JustLike_Noun", form("+ImsI")),
        ("Equ_Noun", form("cA")),
        ("Y", form("lIk")),
        ("For", form("lIk")),
        ("DurationOf", form("lIk")),
        ("OfUnit_Noun", form("lIk")),
    ] {
        b.connect("NOUN_NOM_DERIV", suffix, "ADJECTIVE_ROOT", [spec])?;
    }
    let after_loc = b.comes_after("Loc_Noun")?;
    b.connect(
        "NOUN_DERIV_WITH_CASE",
        "PointQual_Noun",
        "ADJECTIVE_ROOT",
        [form("ki").pre(after_loc)],
    )?;

    // noun to adverb
    b.connect("NOUN_NOM_DERIV", "InTermsOf", "ADVERB_ROOT", [form("cA")])?;
    b.connect("NOUN_NOM_DERIV", "By_Pnon", "ADVERB_ROOT", [form("cA")])?;
    b.connect("NOUN_POSSESSIVE_NOM_DERIV", "By_Possessive", "ADVERB_ROOT", [form("ncA")])?;
    b.connect("NOUN_NOM_DERIV", "ManyOf", "ADVERB_ROOT", [form("lArcA")])?;
    b.connect(
        "NOUN_NOM_DERIV",
        "ForALotOfTime",
        "ADVERB_ROOT",
        [form("lArcA").pre(Condition::RootHasSecondaryPos(SecondaryPos::Time))],
    )?;

    // noun to pronoun: "masanınki", but not "masanınkim"
    let after_gen = b.comes_after("Gen_Noun")?;
    let followed_by_pnon = b.followed_by("Pnon_Pron")?;
    for (suffix, template) in [("RelPron_A3Sg_Noun", "ki"), ("RelPron_A3Pl_Noun", "kiler")] {
        b.connect(
            "NOUN_DERIV_WITH_CASE",
            suffix,
            "PRONOUN_WITH_AGREEMENT",
            [form(template)
                .pre(after_gen.clone())
                .post(followed_by_pnon.clone())],
        )?;
    }

    // compounds with an implicit possessive, "atkuyruğu"
    b.connect(
        "NOUN_COMPOUND_ROOT",
        "A3Sg_Noun_Compound",
        "NOUN_COMPOUND_WITH_AGREEMENT",
        [form("")],
    )?;
    b.connect(
        "NOUN_COMPOUND_WITH_AGREEMENT",
        "P3Sg_Noun_Compound",
        "NOUN_WITH_POSSESSION",
        [form("+sI")],
    )?;
    b.connect(
        "NOUN_COMPOUND_WITH_AGREEMENT",
        "P3Pl_Noun_Compound",
        "NOUN_WITH_POSSESSION",
        [form("lAr!I")],
    )?;
    b.connect(
        "NOUN_COMPOUND_WITH_AGREEMENT",
        "Pnon_Noun_Compound",
        "NOUN_COMPOUND_WITH_POSSESSION",
        [form("")],
    )?;
    b.connect(
        "NOUN_COMPOUND_WITH_POSSESSION",
        "Nom_Noun_Compound_Deriv",
        "NOUN_NOM_DERIV",
        [form("")],
    )?;

    // an adjective used bare as a noun stays an adjective
    let bare_adjective_noun = Condition::all([
        b.comes_after_derivation("Adj_to_Noun_Zero_Transition")?,
        b.comes_after("A3Sg_Noun")?,
        b.comes_after("Pnon_Noun")?,
        b.comes_after("Nom_Noun")?,
    ]);
    b.connect(
        "NOUN_TERMINAL_TRANSFER",
        "Noun_Terminal_Conditional_Free_Transition",
        "NOUN_TERMINAL",
        [form("").pre(!bare_adjective_noun)],
    )
}

fn register_verb_suffixes(b: &mut SuffixGraphBuilder) -> Result<()> {
    register_verb_agreements(b)?;
    register_verb_polarity(b)?;
    register_verb_tenses(b)?;
    register_swapped_past_cond(b)?;
    register_modal_verbs(b)?;

    b.edge("VERB_WITH_TENSE", "A3Pl_Verb", "VERB_WITH_SWAPPED_A3PL")?;
    for tense in ["Cond", "Narr", "Past"] {
        b.edge("VERB_WITH_SWAPPED_A3PL", tense, "VERB_TERMINAL_TRANSFER")?;
    }

    register_verb_to_verb(b)?;
    register_verb_to_other(b)
}

fn register_verb_agreements(b: &mut SuffixGraphBuilder) -> Result<()> {
    let after_imp = b.comes_after("Imp")?;
    let not_after_imp = !after_imp.clone();
    let after_empty_imp = b.comes_after_form("Imp", "")?;
    let after_opt = b.comes_after("Opt")?;

    let agreements = [
        ("A1Sg_Verb", vec![form("+Im"), form("yIm")]),
        (
            "A2Sg_Verb",
            vec![
                form("n").pre(not_after_imp.clone() & !after_opt.clone()),
                form("sIn").pre(not_after_imp.clone()),
                form("").pre(after_imp.clone()),
            ],
        ),
        (
            "A3Sg_Verb",
            vec![
                form("").pre(not_after_imp.clone()),
                form("sIn").pre(after_imp.clone()),
            ],
        ),
        (
            "A1Pl_Verb",
            vec![
                form("+Iz").pre(!after_opt.clone()),
                // "gel-di-k", "gelmiş mi-ydi-k", "gel-se-k"
                form("!k").pre(Condition::any([
                    b.comes_after("Past")?,
                    b.comes_after("Past_Ques")?,
                    b.comes_after("Cond")?,
                    b.comes_after("Desr")?,
                ])),
                form("yIz").pre(!after_opt.clone()),
                form("lIm").pre(after_opt),
            ],
        ),
        (
            "A2Pl_Verb",
            vec![
                form("").pre(after_imp.clone() & !after_empty_imp.clone()),
                form("sInIz").pre(not_after_imp.clone()),
                form("nIz").pre(not_after_imp.clone()),
                form("+yIn").pre(after_empty_imp.clone()),
                form("+yInIz").pre(after_empty_imp),
            ],
        ),
        (
            "A3Pl_Verb",
            vec![
                form("lAr").pre(not_after_imp),
                form("sInlAr").pre(after_imp),
            ],
        ),
    ];
    for (suffix, forms) in agreements {
        b.connect("VERB_WITH_TENSE", suffix, "VERB_TERMINAL_TRANSFER", forms)?;
    }
    Ok(())
}

fn register_verb_polarity(b: &mut SuffixGraphBuilder) -> Result<()> {
    let not_followed_by_tense = Condition::all([
        !b.followed_by("Imp")?,
        !b.followed_by("Past")?,
        !b.followed_by("Narr")?,
    ]);
    b.connect(
        "VERB_ROOT",
        "Neg",
        "VERB_WITH_POLARITY",
        [
            form("m").post(!Condition::LastSuffixGoesTo(StateType::Derivational)),
            form("mA"),
            // "yap-a-madan"
            form("")
                .pre(b.comes_after_derivation_form("Able", "+yA")?)
                .post(not_followed_by_tense)
                .post_derivation(b.followed_by_derivation_form("WithoutHavingDoneSo", "mAdAn")?),
        ],
    )?;
    b.connect("VERB_ROOT", "Pos", "VERB_WITH_POLARITY", [form("")])
}

fn register_verb_tenses(b: &mut SuffixGraphBuilder) -> Result<()> {
    let after_neg = b.comes_after("Neg")?;
    let followed_by_a1 =
        b.followed_by_form("A1Sg_Verb", "+Im")? | b.followed_by_form("A1Pl_Verb", "yIz")?;

    // gel-me-z, gel-me-z-sin, gel-me-m, gel-me-yiz
    b.form(
        "Aor",
        form("+Ir").pre(
            Condition::has_lexeme_attribute(LexemeAttribute::AoristI) & !after_neg.clone(),
        ),
    )?;
    b.form("Aor", form("+Ar").pre(!after_neg.clone()))?;
    b.form(
        "Aor",
        form("z").pre(after_neg.clone()).post(!followed_by_a1.clone()),
    )?;
    b.form("Aor", form("").pre(after_neg).post(followed_by_a1))?;

    b.form("Prog", "Iyor")?;
    b.form("Prog", "mAktA")?;
    b.form("Fut", "+yAcAk")?;
    b.form("Narr", "mIş")?;
    b.form("Narr", "ymIş")?;
    b.form("Past", "dI")?;
    b.form("Past", "ydI")?;
    b.form("Cond", "+ysA")?;

    let followed_by_imperative_agreement = Condition::any([
        b.followed_by("A2Sg_Verb")?,
        b.followed_by("A3Sg_Verb")?,
        b.followed_by("A2Pl_Verb")?,
        b.followed_by("A3Pl_Verb")?,
    ]);
    b.form("Imp", form("").post(followed_by_imperative_agreement))?;
    b.form("Imp", form("sAnA").post(b.followed_by("A2Sg_Verb")?))?;
    b.form("Imp", form("sAnIzA").post(b.followed_by("A2Pl_Verb")?))?;
    b.form("Pres", "")?;

    for tense in ["Aor", "Prog", "Fut", "Narr", "Past", "Cond", "Imp"] {
        b.edge("VERB_WITH_POLARITY", tense, "VERB_WITH_TENSE")?;
    }
    for tense in ["Cond", "Narr", "Past"] {
        b.edge("VERB_WITH_TENSE", tense, "VERB_WITH_TENSE")?;
    }
    Ok(())
}

fn register_swapped_past_cond(b: &mut SuffixGraphBuilder) -> Result<()> {
    let after_past = b.comes_after_form("Past", "dI")?;
    for (suffix, template) in [
        ("A1Sg_Verb_Swapped", "m"),
        ("A2Sg_Verb_Swapped", "n"),
        ("A1Pl_Verb_Swapped", "!k"),
        ("A2Pl_Verb_Swapped", "nIz"),
    ] {
        b.connect(
            "VERB_WITH_TENSE",
            suffix,
            "VERB_WITH_SWAPPED_PAST_COND",
            [form(template).pre(after_past.clone())],
        )?;
    }
    b.edge("VERB_WITH_SWAPPED_PAST_COND", "Cond", "VERB_TERMINAL")
}

fn register_modal_verbs(b: &mut SuffixGraphBuilder) -> Result<()> {
    let modal_followers = Condition::any([
        b.followed_by("Past")?,
        b.followed_by("Narr")?,
        b.followed_by_one_from_group("Verb_Agreements_Group")?,
    ]);
    let after_neg = b.comes_after("Neg")?;

    b.connect("VERB_WITH_POLARITY", "Neces", "VERB_WITH_TENSE", [form("mAl!I")])?;
    b.connect(
        "VERB_WITH_POLARITY",
        "Opt",
        "VERB_WITH_TENSE",
        [
            form("Ay"),
            form("A").pre(!after_neg).post(modal_followers.clone()),
            form("yA").post(modal_followers),
        ],
    )?;
    b.connect("VERB_WITH_POLARITY", "Desr", "VERB_WITH_TENSE", [form("sA")])
}

fn register_verb_to_verb(b: &mut SuffixGraphBuilder) -> Result<()> {
    let followed_by_neg = b.followed_by("Neg")?;
    b.connect(
        "VERB_PLAIN_DERIV",
        "Able",
        "VERB_ROOT",
        [
            form("+yAbil").post(!followed_by_neg.clone()),
            form("+yA").post(followed_by_neg),
        ],
    )?;

    for (suffix, templates) in [
        ("Hastily", &["+yIver"][..]),
        ("EverSince", &["+yAgel"]),
        ("Stay", &["+yAkal"]),
        ("Almost", &["+yAyaz"]),
        ("Once", &["+yAgör"]),
        ("Gone", &["+yAgi!t", "+yAgid"]),
        ("Start", &["+yAkoy"]),
    ] {
        b.connect(
            "VERB_POLARITY_DERIV",
            suffix,
            "VERB_ROOT",
            templates.iter().map(|t| form(t)),
        )?;
    }

    let has = Condition::has_lexeme_attribute;
    let hasnt = Condition::doesnt_have_lexeme_attribute;
    let passive_il = has(LexemeAttribute::PassiveIl)
        | (hasnt(LexemeAttribute::PassiveIn) & hasnt(LexemeAttribute::PassiveInIl));
    b.connect(
        "VERB_PLAIN_DERIV",
        "Pass",
        "VERB_ROOT",
        [
            form("+In").pre(has(LexemeAttribute::PassiveIn)),
            form("+nIl").pre(passive_il),
            form("+InIl").pre(has(LexemeAttribute::PassiveInIl)),
        ],
    )?;

    let recip_then_caus =
        !b.followed_by_derivation("Caus")? | b.followed_by_derivation_form("Caus", "dIr")?;
    b.connect(
        "VERB_PLAIN_DERIV",
        "Recip",
        "VERB_ROOT",
        [form("+Iş").post_derivation(recip_then_caus)],
    )?;

    let after_able = b.comes_after_derivation("Able")?;
    b.connect(
        "VERB_PLAIN_DERIV",
        "Caus",
        "VERB_ROOT",
        [
            form("!t").pre(Condition::all([
                has(LexemeAttribute::CausativeT),
                !b.comes_after_derivation_form("Caus", "!t")?,
                !b.comes_after_derivation_form("Caus", "I!t")?,
            ])),
            form("Ir").pre(has(LexemeAttribute::CausativeIr) & !after_able.clone()),
            form("I!t").pre(has(LexemeAttribute::CausativeIt) & !after_able.clone()),
            form("Ar").pre(has(LexemeAttribute::CausativeAr) & !after_able),
            form("dIr").pre(has(LexemeAttribute::CausativeDIr)),
        ],
    )
}

fn register_verb_to_other(b: &mut SuffixGraphBuilder) -> Result<()> {
    // verb to noun
    b.connect(
        "VERB_POLARITY_DERIV",
        "Inf",
        "NOUN_ROOT",
        [form("mAk"), form("mA"), form("+yIş")],
    )?;
    b.connect("VERB_POLARITY_DERIV", "PastPart_Noun", "NOUN_ROOT", [form("dIk")])?;
    b.connect("VERB_POLARITY_DERIV", "FutPart_Noun", "NOUN_ROOT", [form("+yAcAk")])?;

    // verb to adverb
    for (suffix, templates) in [
        ("AfterDoingSo", &["+yI!p"][..]),
        ("WithoutHavingDoneSo", &["mAdAn", "mAksIzIn"]),
        ("AsLongAs", &["dIkçA"]),
        ("ByDoingSo", &["+yArA!k"]),
        ("When", &["+yIncA"]),
        ("Until", &["+yIncAyA"]),
        ("SinceDoingSo", &["+yAl!I"]),
    ] {
        b.connect(
            "VERB_POLARITY_DERIV",
            suffix,
            "ADVERB_ROOT",
            templates.iter().map(|t| form(t)),
        )?;
    }
    b.connect(
        "VERB_WITH_TENSE_BEFORE_DERIV",
        "A3Pl_Verb_For_Adv",
        "VERB_TENSE_DERIV",
        [form("lAr")],
    )?;
    b.connect("VERB_TENSE_DERIV", "While", "ADVERB_ROOT", [form("ken")])?;
    let as_if = Condition::any([
        b.comes_after("Aor")?,
        b.comes_after("Prog")?,
        b.comes_after("Fut")?,
        b.comes_after("Narr")?,
    ]);
    b.connect(
        "VERB_TENSE_DERIV",
        "AsIf",
        "ADVERB_ROOT",
        [form("cAs!InA").pre(as_if)],
    )?;

    // verb to adjective
    b.connect("VERB_POLARITY_DERIV", "PresPart", "ADJECTIVE_ROOT", [form("+yAn")])?;
    b.connect(
        "VERB_POLARITY_DERIV",
        "PastPart_Adj",
        "ADJECTIVE_PART_WITHOUT_POSSESSION",
        [form("dIk")],
    )?;
    b.connect(
        "VERB_POLARITY_DERIV",
        "FutPart_Adj",
        "ADJECTIVE_PART_WITHOUT_POSSESSION",
        [form("+yAcAk")],
    )?;
    b.connect(
        "VERB_POLARITY_DERIV",
        "Agt_Verb_to_Adj",
        "ADJECTIVE_ROOT",
        [form("+yIcI")],
    )?;
    b.connect(
        "VERB_WITH_POLARITY",
        "Aorist_to_Adj",
        "VERB_TENSE_ADJ_DERIV",
        [
            form("+Ir").pre(Condition::has_lexeme_attribute(LexemeAttribute::AoristI)),
            form("+Ar"),
            form("z").pre(b.comes_after("Neg")?),
        ],
    )?;
    b.connect(
        "VERB_WITH_POLARITY",
        "Future_to_Adj",
        "VERB_TENSE_ADJ_DERIV",
        [form("+yAcAk")],
    )?;
    b.connect(
        "VERB_WITH_POLARITY",
        "Narr_to_Adj",
        "VERB_TENSE_ADJ_DERIV",
        [form("mIş"), form("ymIş")],
    )
}

fn register_adjective_suffixes(b: &mut SuffixGraphBuilder) -> Result<()> {
    b.connect("ADJECTIVE_DERIV", "JustLike_Adj", "ADJECTIVE_ROOT", [form("+ImsI")])?;
    b.connect("ADJECTIVE_DERIV", "Equ_Adj", "ADJECTIVE_ROOT", [form("cA")])?;
    b.connect("ADJECTIVE_DERIV", "Quite", "ADJECTIVE_ROOT", [form("cA")])?;
    b.connect("ADJECTIVE_DERIV", "Ly", "ADVERB_ROOT", [form("cA")])?;
    b.connect("ADJECTIVE_DERIV", "Ness", "NOUN_ROOT", [form("lIk")])?;
    b.connect("ADJECTIVE_DERIV", "Become_Adj", "VERB_ROOT", [form("lAş")])?;

    for (suffix, template) in [
        ("Pnon_Adj", ""),
        ("P1Sg_Adj", "+Im"),
        ("P2Sg_Adj", "+In"),
        ("P3Sg_Adj", "+sI"),
        ("P1Pl_Adj", "+ImIz"),
        ("P2Pl_Adj", "+InIz"),
        ("P3Pl_Adj", "lAr!I"),
    ] {
        b.connect(
            "ADJECTIVE_PART_WITHOUT_POSSESSION",
            suffix,
            "ADJECTIVE_TERMINAL_TRANSFER",
            [form(template)],
        )?;
    }
    Ok(())
}

fn register_pronoun_suffixes(b: &mut SuffixGraphBuilder) -> Result<()> {
    // personal agreements only come from predefined paths
    for suffix in ["A1Sg_Pron", "A2Sg_Pron", "A1Pl_Pron", "A2Pl_Pron"] {
        b.edge("PRONOUN_ROOT", suffix, "PRONOUN_WITH_AGREEMENT")?;
    }
    b.connect("PRONOUN_ROOT", "A3Sg_Pron", "PRONOUN_WITH_AGREEMENT", [form("")])?;
    b.connect("PRONOUN_ROOT", "A3Pl_Pron", "PRONOUN_WITH_AGREEMENT", [form("lAr")])?;

    for (suffix, template) in [
        ("Pnon_Pron", ""),
        ("P1Sg_Pron", "+Im"),
        ("P2Sg_Pron", "+In"),
        ("P3Sg_Pron", "+sI"),
        ("P1Pl_Pron", "+ImIz"),
        ("P2Pl_Pron", "+InIz"),
        ("P3Pl_Pron", "lAr!I"),
    ] {
        b.connect(
            "PRONOUN_WITH_AGREEMENT",
            suffix,
            "PRONOUN_WITH_POSSESSION",
            [form(template)],
        )?;
    }
    b.form("P3Pl_Pron", form("!I").pre(b.comes_after("A3Pl_Pron")?))?;

    let after_p3 = Condition::any([
        b.comes_after("P3Sg_Pron")?,
        b.comes_after("P3Pl_Pron")?,
        b.comes_after_derivation("RelPron_A3Sg_Noun")?,
        b.comes_after_derivation("RelPron_A3Sg_Pron")?,
    ]);
    let after_pnon = b.comes_after("Pnon_Pron")?;
    b.connect("PRONOUN_WITH_POSSESSION", "Nom_Pron", "PRONOUN_WITH_CASE", [form("")])?;
    b.connect(
        "PRONOUN_WITH_POSSESSION",
        "Nom_Pron_Deriv",
        "PRONOUN_NOM_DERIV",
        [form("").pre(after_pnon.clone())],
    )?;
    for (suffix, y_form, n_form) in [
        ("Acc_Pron", "+yI", "nI"),
        ("Dat_Pron", "+yA", "nA"),
        ("Loc_Pron", "dA", "ndA"),
        ("Abl_Pron", "dAn", "ndAn"),
    ] {
        b.connect(
            "PRONOUN_WITH_POSSESSION",
            suffix,
            "PRONOUN_WITH_CASE",
            [
                form(y_form).pre(!after_p3.clone()),
                form(n_form).pre(after_p3.clone()),
            ],
        )?;
    }
    b.connect("PRONOUN_WITH_POSSESSION", "Gen_Pron", "PRONOUN_WITH_CASE", [form("+nIn")])?;
    b.connect("PRONOUN_WITH_POSSESSION", "Ins_Pron", "PRONOUN_WITH_CASE", [form("+ylA")])?;
    b.connect("PRONOUN_WITH_POSSESSION", "AccordingTo", "PRONOUN_WITH_CASE", [form("cA")])?;

    // "ben-siz" but "o-nsuz", "bu-nsuz"
    let demonstrative = Condition::any(["o", "bu", "şu"].map(Condition::applies_to_root));
    let bare_demonstrative = Condition::all([b.comes_after("A3Sg_Pron")?, after_pnon, demonstrative]);
    b.connect(
        "PRONOUN_NOM_DERIV",
        "Without_Pron",
        "ADJECTIVE_ROOT",
        [
            form("sIz").pre(!bare_demonstrative.clone()),
            form("nsuz").pre(bare_demonstrative),
        ],
    )?;
    b.connect(
        "PRONOUN_DERIV_WITH_CASE",
        "PointQual_Pron",
        "ADJECTIVE_ROOT",
        [form("ki").pre(b.comes_after("Loc_Pron")?)],
    )?;

    // "benimki", but not "benimkin"
    let after_gen = b.comes_after("Gen_Pron")?;
    let followed_by_pnon = b.followed_by("Pnon_Pron")?;
    for (suffix, template) in [("RelPron_A3Sg_Noun", "ki"), ("RelPron_A3Pl_Noun", "kiler")] {
        b.connect(
            "PRONOUN_DERIV_WITH_CASE",
            suffix,
            "PRONOUN_WITH_AGREEMENT",
            [form(template)
                .pre(after_gen.clone())
                .post(followed_by_pnon.clone())],
        )?;
    }
    Ok(())
}

fn register_adverb_suffixes(b: &mut SuffixGraphBuilder) -> Result<()> {
    let ku = Condition::any(["bugün", "dün", "gün", "öbür"].map(Condition::applies_to_root));
    b.connect(
        "ADVERB_DERIV",
        "PointQual_Adv",
        "ADJECTIVE_ROOT",
        [form("ki").pre(!ku.clone()), form("kü").pre(ku)],
    )
}

// Question particles only take predefined forms
fn register_question_suffixes(b: &mut SuffixGraphBuilder) -> Result<()> {
    for tense in ["Pres_Ques", "Narr_Ques", "Past_Ques"] {
        b.edge("QUESTION_ROOT", tense, "QUESTION_WITH_TENSE")?;
    }
    for agreement in [
        "A1Sg_Ques",
        "A2Sg_Ques",
        "A3Sg_Ques",
        "A1Pl_Ques",
        "A2Pl_Ques",
        "A3Pl_Ques",
    ] {
        b.edge("QUESTION_WITH_TENSE", agreement, "QUESTION_WITH_AGREEMENT")?;
    }
    Ok(())
}
