//! Hand-enumerated paths for irregular closed-class roots
//!
//! Some roots only occur before a fixed set of suffix realizations that the
//! regular phonetics cannot produce: "di" of demek takes "yecek" where the
//! rules would give "decek", "ban" only takes the dative "a". For those roots
//! the parser seeds these paths instead of starting a fresh search.

use super::applier::SuffixApplier;
use crate::error::{CoreError, Result};
use crate::lexicon::{PrimaryPos, Root, RootMap, SecondaryPos};
use crate::morpheme::MorphemeContainer;
use crate::morphotactics::{StateId, SuffixForm, SuffixId};
use std::collections::HashMap;
use std::sync::Arc;

/// A suffix name with the exact text it takes on the path
type Step = (&'static str, &'static str);

/// Every path of one root
struct PathTable {
    root: &'static str,
    primary_pos: PrimaryPos,
    secondary_pos: Option<SecondaryPos>,
    paths: &'static [&'static [Step]],
}

const DI_YI_PATHS: &[&[Step]] = &[
    &[("Pos", ""), ("Fut", "yecek")],
    &[("Pos", ""), ("Fut", "yeceğ")],
    &[("Pos", ""), ("Future_to_Adj", "yecek")],
    &[("Pos", ""), ("Future_to_Adj", "yeceğ")],
    &[("Pos", ""), ("FutPart_Noun", "yecek")],
    &[("Pos", ""), ("FutPart_Noun", "yeceğ")],
    &[("Pos", ""), ("FutPart_Adj", "yecek")],
    &[("Pos", ""), ("FutPart_Adj", "yeceğ")],
    &[("Pos", ""), ("Prog", "yor")],
    &[("Pos", ""), ("PresPart", "yen")],
    &[("Able", "yebil"), ("Pos", "")],
    &[("Able", "ye"), ("Neg", "me")],
    &[("Able", "ye"), ("Neg", ""), ("WithoutHavingDoneSo", "meden")],
    &[("Pos", ""), ("Opt", "ye")],
    &[("Pos", ""), ("ByDoingSo", "yerek")],
];

const YI_ONLY_PATHS: &[&[Step]] = &[
    &[("Pos", ""), ("AfterDoingSo", "yip")],
    &[("Pos", ""), ("Imp", ""), ("A2Pl_Verb", "yin")],
];

/// Case paths of a pronoun after its agreement and Pnon
macro_rules! pronoun_cases {
    ($agreement:expr; $($case:expr => $form:expr),* $(,)?) => {
        &[
            $(&[$agreement, ("Pnon_Pron", ""), ($case, $form)],)*
            &[$agreement, ("Pnon_Pron", ""), ("Nom_Pron_Deriv", "")],
        ]
    };
}

const BEN_PATHS: &[&[Step]] = pronoun_cases!(("A1Sg_Pron", "");
    "Nom_Pron" => "", "Acc_Pron" => "i", "Loc_Pron" => "de", "Abl_Pron" => "den",
    "Ins_Pron" => "le", "Ins_Pron" => "imle", "Gen_Pron" => "im", "AccordingTo" => "ce",
);
const BAN_PATHS: &[&[Step]] = &[&[("A1Sg_Pron", ""), ("Pnon_Pron", ""), ("Dat_Pron", "a")]];

const SEN_PATHS: &[&[Step]] = pronoun_cases!(("A2Sg_Pron", "");
    "Nom_Pron" => "", "Acc_Pron" => "i", "Loc_Pron" => "de", "Abl_Pron" => "den",
    "Ins_Pron" => "le", "Ins_Pron" => "inle", "Gen_Pron" => "in", "AccordingTo" => "ce",
);
const SAN_PATHS: &[&[Step]] = &[&[("A2Sg_Pron", ""), ("Pnon_Pron", ""), ("Dat_Pron", "a")]];

const O_PERSONAL_PATHS: &[&[Step]] = pronoun_cases!(("A3Sg_Pron", "");
    "Nom_Pron" => "", "Acc_Pron" => "nu", "Dat_Pron" => "na", "Loc_Pron" => "nda",
    "Abl_Pron" => "ndan", "Ins_Pron" => "nla", "Ins_Pron" => "nunla", "Gen_Pron" => "nun",
    "AccordingTo" => "nca",
);
const ONLAR_PERSONAL_PATHS: &[&[Step]] = pronoun_cases!(("A3Pl_Pron", "nlar");
    "Nom_Pron" => "", "Acc_Pron" => "ı", "Dat_Pron" => "a", "Loc_Pron" => "da",
    "Abl_Pron" => "dan", "Ins_Pron" => "la", "Gen_Pron" => "ın", "AccordingTo" => "ca",
);

const BIZ_PATHS: &[&[Step]] = pronoun_cases!(("A1Pl_Pron", "");
    "Nom_Pron" => "", "Acc_Pron" => "i", "Dat_Pron" => "e", "Loc_Pron" => "de",
    "Abl_Pron" => "den", "Ins_Pron" => "le", "Ins_Pron" => "imle", "Gen_Pron" => "im",
    "AccordingTo" => "ce",
);
const BIZLER_PATHS: &[&[Step]] = pronoun_cases!(("A1Pl_Pron", "ler");
    "Nom_Pron" => "", "Acc_Pron" => "i", "Dat_Pron" => "e", "Loc_Pron" => "de",
    "Abl_Pron" => "den", "Ins_Pron" => "le", "Gen_Pron" => "in", "AccordingTo" => "ce",
);

const SIZ_PATHS: &[&[Step]] = pronoun_cases!(("A2Pl_Pron", "");
    "Nom_Pron" => "", "Acc_Pron" => "i", "Dat_Pron" => "e", "Loc_Pron" => "de",
    "Abl_Pron" => "den", "Ins_Pron" => "le", "Ins_Pron" => "inle", "Gen_Pron" => "in",
    "AccordingTo" => "ce",
);
const SIZLER_PATHS: &[&[Step]] = pronoun_cases!(("A2Pl_Pron", "ler");
    "Nom_Pron" => "", "Acc_Pron" => "i", "Dat_Pron" => "e", "Loc_Pron" => "de",
    "Abl_Pron" => "den", "Ins_Pron" => "le", "Gen_Pron" => "in", "AccordingTo" => "ce",
);

const DEMONSTRATIVE_PATHS: &[&[Step]] = pronoun_cases!(("A3Sg_Pron", "");
    "Nom_Pron" => "", "Acc_Pron" => "nu", "Dat_Pron" => "na", "Loc_Pron" => "nda",
    "Abl_Pron" => "ndan", "Ins_Pron" => "nla", "Ins_Pron" => "nunla", "Gen_Pron" => "nun",
);
const DEMONSTRATIVE_PLURAL_PATHS: &[&[Step]] = pronoun_cases!(("A3Pl_Pron", "nlar");
    "Nom_Pron" => "", "Acc_Pron" => "ı", "Dat_Pron" => "a", "Loc_Pron" => "da",
    "Abl_Pron" => "dan", "Ins_Pron" => "la", "Gen_Pron" => "ın",
);

/// Every tense and agreement of one question particle
macro_rules! question_paths {
    (
        pres: $p1s:expr, $p2s:expr, $p1p:expr, $p2p:expr, $p3p:expr;
        $past:expr => $t1s:expr, $t2s:expr, $t1p:expr, $t2p:expr, $t3p:expr;
        $narr:expr => $n1s:expr, $n2s:expr, $n1p:expr, $n2p:expr, $n3p:expr $(;)?
    ) => {
        &[
            &[("Pres_Ques", ""), ("A1Sg_Ques", $p1s)],
            &[("Pres_Ques", ""), ("A2Sg_Ques", $p2s)],
            &[("Pres_Ques", ""), ("A3Sg_Ques", "")],
            &[("Pres_Ques", ""), ("A1Pl_Ques", $p1p)],
            &[("Pres_Ques", ""), ("A2Pl_Ques", $p2p)],
            &[("Pres_Ques", ""), ("A3Pl_Ques", $p3p)],
            &[("Past_Ques", $past), ("A1Sg_Ques", $t1s)],
            &[("Past_Ques", $past), ("A2Sg_Ques", $t2s)],
            &[("Past_Ques", $past), ("A3Sg_Ques", "")],
            &[("Past_Ques", $past), ("A1Pl_Ques", $t1p)],
            &[("Past_Ques", $past), ("A2Pl_Ques", $t2p)],
            &[("Past_Ques", $past), ("A3Pl_Ques", $t3p)],
            &[("Narr_Ques", $narr), ("A1Sg_Ques", $n1s)],
            &[("Narr_Ques", $narr), ("A2Sg_Ques", $n2s)],
            &[("Narr_Ques", $narr), ("A3Sg_Ques", "")],
            &[("Narr_Ques", $narr), ("A1Pl_Ques", $n1p)],
            &[("Narr_Ques", $narr), ("A2Pl_Ques", $n2p)],
            &[("Narr_Ques", $narr), ("A3Pl_Ques", $n3p)],
        ]
    };
}

const MI_PATHS: &[&[Step]] = question_paths!(
    pres: "yım", "sın", "yız", "sınız", "lar";
    "ydı" => "m", "n", "k", "nız", "lar";
    "ymış" => "ım", "sın", "ız", "sınız", "lar";
);
const MI_FRONT_PATHS: &[&[Step]] = question_paths!(
    pres: "yim", "sin", "yiz", "siniz", "ler";
    "ydi" => "m", "n", "k", "niz", "ler";
    "ymiş" => "im", "sin", "iz", "siniz", "ler";
);
const MU_PATHS: &[&[Step]] = question_paths!(
    pres: "yum", "sun", "yuz", "sunuz", "lar";
    "ydu" => "m", "n", "k", "nuz", "lar";
    "ymuş" => "um", "sun", "uz", "sunuz", "lar";
);
const MU_FRONT_PATHS: &[&[Step]] = question_paths!(
    pres: "yüm", "sün", "yüz", "sünüz", "ler";
    "ydü" => "m", "n", "k", "nüz", "ler";
    "ymüş" => "üm", "sün", "üz", "sünüz", "ler";
);

const SU_PATHS: &[&[Step]] = &[
    &[("A3Sg_Noun", ""), ("P1Sg_Noun", "yum")],
    &[("A3Sg_Noun", ""), ("P2Sg_Noun", "yun")],
    &[("A3Sg_Noun", ""), ("P3Sg_Noun", "yu")],
    &[("A3Sg_Noun", ""), ("P1Pl_Noun", "yumuz")],
    &[("A3Sg_Noun", ""), ("P2Pl_Noun", "yunuz")],
    &[("A3Sg_Noun", ""), ("P3Pl_Noun", "ları")],
    &[("A3Sg_Noun", ""), ("Pnon_Noun", ""), ("Gen_Noun", "yun")],
    &[("A3Sg_Noun", ""), ("Pnon_Noun", "")],
    &[("A3Pl_Noun", "lar"), ("Pnon_Noun", "")],
];

const NE_PATHS: &[&[Step]] = &[
    &[("A3Sg_Pron", ""), ("P1Sg_Pron", "m")],
    &[("A3Sg_Pron", ""), ("P1Sg_Pron", "yim")],
    &[("A3Sg_Pron", ""), ("P2Sg_Pron", "n")],
    &[("A3Sg_Pron", ""), ("P2Sg_Pron", "yin")],
    &[("A3Sg_Pron", ""), ("P3Sg_Pron", "yi")],
    &[("A3Sg_Pron", ""), ("P3Sg_Pron", "si")],
    &[("A3Sg_Pron", ""), ("P1Pl_Pron", "yimiz")],
    &[("A3Sg_Pron", ""), ("P2Pl_Pron", "yiniz")],
    &[("A3Sg_Pron", ""), ("P3Pl_Pron", "leri")],
    &[("A3Sg_Pron", ""), ("Pnon_Pron", ""), ("Gen_Pron", "yin")],
    &[("A3Sg_Pron", ""), ("Pnon_Pron", "")],
    &[("A3Pl_Pron", "ler"), ("Pnon_Pron", "")],
];

const fn table(
    root: &'static str,
    primary_pos: PrimaryPos,
    secondary_pos: Option<SecondaryPos>,
    paths: &'static [&'static [Step]],
) -> PathTable {
    PathTable {
        root,
        primary_pos,
        secondary_pos,
        paths,
    }
}

const PERSONAL: Option<SecondaryPos> = Some(SecondaryPos::Personal);
const DEMONSTRATIVE: Option<SecondaryPos> = Some(SecondaryPos::Demonstrative);

static TABLES: &[PathTable] = &[
    table("di", PrimaryPos::Verb, None, DI_YI_PATHS),
    table("yi", PrimaryPos::Verb, None, DI_YI_PATHS),
    table("yi", PrimaryPos::Verb, None, YI_ONLY_PATHS),
    table("su", PrimaryPos::Noun, None, SU_PATHS),
    table("ben", PrimaryPos::Pronoun, PERSONAL, BEN_PATHS),
    table("ban", PrimaryPos::Pronoun, PERSONAL, BAN_PATHS),
    table("sen", PrimaryPos::Pronoun, PERSONAL, SEN_PATHS),
    table("san", PrimaryPos::Pronoun, PERSONAL, SAN_PATHS),
    table("o", PrimaryPos::Pronoun, PERSONAL, O_PERSONAL_PATHS),
    table("biz", PrimaryPos::Pronoun, PERSONAL, BIZ_PATHS),
    table("biz", PrimaryPos::Pronoun, PERSONAL, BIZLER_PATHS),
    table("siz", PrimaryPos::Pronoun, PERSONAL, SIZ_PATHS),
    table("siz", PrimaryPos::Pronoun, PERSONAL, SIZLER_PATHS),
    table("o", PrimaryPos::Pronoun, PERSONAL, ONLAR_PERSONAL_PATHS),
    table("bu", PrimaryPos::Pronoun, DEMONSTRATIVE, DEMONSTRATIVE_PATHS),
    table("şu", PrimaryPos::Pronoun, DEMONSTRATIVE, DEMONSTRATIVE_PATHS),
    table("o", PrimaryPos::Pronoun, DEMONSTRATIVE, DEMONSTRATIVE_PATHS),
    table("bu", PrimaryPos::Pronoun, DEMONSTRATIVE, DEMONSTRATIVE_PLURAL_PATHS),
    table("şu", PrimaryPos::Pronoun, DEMONSTRATIVE, DEMONSTRATIVE_PLURAL_PATHS),
    table("o", PrimaryPos::Pronoun, DEMONSTRATIVE, DEMONSTRATIVE_PLURAL_PATHS),
    table("mı", PrimaryPos::Question, None, MI_PATHS),
    table("mi", PrimaryPos::Question, None, MI_FRONT_PATHS),
    table("mu", PrimaryPos::Question, None, MU_PATHS),
    table("mü", PrimaryPos::Question, None, MU_FRONT_PATHS),
    table("ne", PrimaryPos::Pronoun, Some(SecondaryPos::Question), NE_PATHS),
];

/// Follows one path from a root, one forced form at a time
struct PathBuilder<'a> {
    applier: &'a SuffixApplier,
    container: MorphemeContainer,
}

impl<'a> PathBuilder<'a> {
    fn new(applier: &'a SuffixApplier, root: &Arc<Root>) -> Result<Self> {
        let graph = applier.graph();
        let state = graph
            .default_state_for_root(root)
            .ok_or_else(|| path_error(root, "no entry state for the root".to_string()))?;
        Ok(Self {
            applier,
            container: MorphemeContainer::new(Arc::clone(root), graph.info(state), ""),
        })
    }

    /// Take `suffix` realized as `text`, hopping through one intermediate
    /// state when the suffix is not an edge of the current state
    fn step(mut self, suffix: &str, text: &str) -> Result<Self> {
        let graph = Arc::clone(self.applier.graph());
        let suffix_id = graph.suffix_id(suffix)?;
        let current = self.container.last_state().id;

        let target = match graph.target_of(current, suffix_id) {
            Some(target) => target,
            None => {
                let (intermediate_suffix, intermediate) =
                    self.discover_intermediate(current, suffix_id)?;
                self = self.apply(intermediate_suffix, "", intermediate)?;
                graph.target_of(intermediate, suffix_id).ok_or_else(|| {
                    self.error(format!(
                        "intermediate state {} lost its {suffix} edge",
                        graph.state(intermediate).name
                    ))
                })?
            }
        };
        self.apply(suffix_id, text, target)
    }

    fn discover_intermediate(&self, from: StateId, suffix: SuffixId) -> Result<(SuffixId, StateId)> {
        let graph = self.applier.graph();
        let mut found: Option<(SuffixId, StateId)> = None;
        for edge in &graph.state(from).out_edges {
            if graph.target_of(edge.target, suffix).is_none() {
                continue;
            }
            if let Some((_, previous)) = found {
                return Err(self.error(format!(
                    "{} is reachable through both {} and {}",
                    graph.suffix(suffix).name,
                    graph.state(previous).name,
                    graph.state(edge.target).name
                )));
            }
            found = Some((edge.suffix, edge.target));
        }
        found.ok_or_else(|| {
            self.error(format!(
                "{} is not reachable from {}",
                graph.suffix(suffix).name,
                graph.state(from).name
            ))
        })
    }

    fn apply(mut self, suffix: SuffixId, text: &str, target: StateId) -> Result<Self> {
        let graph = self.applier.graph();
        let form = Arc::new(SuffixForm::forced(suffix, text));
        let surface = format!("{}{text}", self.container.surface_so_far().as_str());
        self.container = self
            .applier
            .try_suffix_form(&self.container, form, graph.info(target), &surface)
            .ok_or_else(|| {
                self.error(format!(
                    "{}({text}) does not apply after '{}'",
                    graph.suffix(suffix).name,
                    self.container.surface_so_far().as_str()
                ))
            })?;
        Ok(self)
    }

    fn error(&self, reason: String) -> CoreError {
        path_error(self.container.root(), reason)
    }

    fn finish(self) -> MorphemeContainer {
        self.container
    }
}

fn path_error(root: &Root, reason: String) -> CoreError {
    CoreError::PredefinedPath {
        root: root.as_str().to_string(),
        reason,
    }
}

/// Precomputed containers keyed by root
#[derive(Debug, Clone, Default)]
pub struct PredefinedPaths {
    paths: HashMap<Arc<Root>, Vec<MorphemeContainer>>,
}

impl PredefinedPaths {
    /// Build every path whose root is in the map.
    ///
    /// Roots missing from the map are skipped; a path that does not fit the
    /// graph is a configuration error.
    pub fn new(applier: &SuffixApplier, root_map: &RootMap) -> Result<Self> {
        let mut paths: HashMap<Arc<Root>, Vec<MorphemeContainer>> = HashMap::new();
        for table in TABLES {
            let Some(root) = root_map.find_unique(table.root, table.primary_pos, table.secondary_pos)
            else {
                tracing::debug!(
                    root = table.root,
                    pos = %table.primary_pos,
                    "root not in map, skipping predefined paths"
                );
                continue;
            };
            for steps in table.paths {
                let mut builder = PathBuilder::new(applier, &root)?;
                for (suffix, text) in steps.iter() {
                    builder = builder.step(suffix, text)?;
                }
                paths
                    .entry(Arc::clone(&root))
                    .or_default()
                    .push(builder.finish());
            }
        }
        tracing::debug!(
            roots = paths.len(),
            paths = paths.values().map(Vec::len).sum::<usize>(),
            "built predefined paths"
        );
        Ok(Self { paths })
    }

    /// Whether the parser must seed this root from its paths
    pub fn has_paths(&self, root: &Root) -> bool {
        self.paths.contains_key(root)
    }

    /// Paths of the root, empty when it has none
    pub fn paths(&self, root: &Root) -> &[MorphemeContainer] {
        self.paths.get(root).map_or(&[], Vec::as_slice)
    }

    /// Number of roots with paths
    pub fn root_count(&self) -> usize {
        self.paths.len()
    }
}
