//! Lexical model: parts of speech, lexemes and roots
//!
//! A [`Lexeme`] is an owned value while a root finder is still deriving its
//! attributes; once it is placed in a [`Root`] it is shared behind an `Arc`
//! and never changes again.

mod generator;
mod inference;
mod root;
mod root_map;

pub use generator::RootGenerator;
pub use root::Root;
pub use root_map::RootMap;

use crate::bitset::enum_set;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Primary syntactic category of a lexeme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrimaryPos {
    /// Noun
    Noun,
    /// Adjective
    Adjective,
    /// Adverb
    Adverb,
    /// Conjunction
    Conjunction,
    /// Interjection
    Interjection,
    /// Verb
    Verb,
    /// Pronoun
    Pronoun,
    /// Numeral
    Numeral,
    /// Determiner
    Determiner,
    /// Postpositive
    PostPositive,
    /// Question particle
    Question,
    /// Duplicator (e.g. the m- in "kitap mitap")
    Duplicator,
    /// Punctuation
    Punctuation,
    /// Unknown
    Unknown,
}

impl PrimaryPos {
    /// Name used in formatted parse results
    pub fn short_name(&self) -> &'static str {
        match self {
            PrimaryPos::Noun => "Noun",
            PrimaryPos::Adjective => "Adj",
            PrimaryPos::Adverb => "Adv",
            PrimaryPos::Conjunction => "Conj",
            PrimaryPos::Interjection => "Interj",
            PrimaryPos::Verb => "Verb",
            PrimaryPos::Pronoun => "Pron",
            PrimaryPos::Numeral => "Num",
            PrimaryPos::Determiner => "Det",
            PrimaryPos::PostPositive => "Postp",
            PrimaryPos::Question => "Ques",
            PrimaryPos::Duplicator => "Dup",
            PrimaryPos::Punctuation => "Punc",
            PrimaryPos::Unknown => "Unk",
        }
    }
}

impl fmt::Display for PrimaryPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Secondary syntactic category of a lexeme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SecondaryPos {
    /// Demonstrative
    Demonstrative,
    /// Time
    Time,
    /// Quantitive
    Quantitive,
    /// Question
    Question,
    /// Proper noun
    ProperNoun,
    /// Personal
    Personal,
    /// Reflexive
    Reflexive,
    /// Explicitly none
    None,
    /// Unknown
    Unknown,
    /// Ordinal
    Ordinal,
    /// Cardinal
    Cardinal,
    /// Percentage
    Percentage,
    /// Ratio
    Ratio,
    /// Range
    Range,
    /// Real number
    Real,
    /// Distribution
    Distribution,
    /// Clock
    Clock,
    /// Date
    Date,
    /// Abbreviation
    Abbreviation,
    /// Cardinal written with digits
    DigitsCardinal,
    /// Ordinal written with digits
    DigitsOrdinal,
    /// Duplicator
    Duplicator,
}

impl SecondaryPos {
    /// Name used in formatted parse results
    pub fn short_name(&self) -> &'static str {
        match self {
            SecondaryPos::Demonstrative => "Demons",
            SecondaryPos::Time => "Time",
            SecondaryPos::Quantitive => "Quant",
            SecondaryPos::Question => "Ques",
            SecondaryPos::ProperNoun => "Prop",
            SecondaryPos::Personal => "Pers",
            SecondaryPos::Reflexive => "Reflex",
            SecondaryPos::None => "None",
            SecondaryPos::Unknown => "Unk",
            SecondaryPos::Ordinal => "Ord",
            SecondaryPos::Cardinal => "Card",
            SecondaryPos::Percentage => "Percent",
            SecondaryPos::Ratio => "Ratio",
            SecondaryPos::Range => "Range",
            SecondaryPos::Real => "Real",
            SecondaryPos::Distribution => "Dist",
            SecondaryPos::Clock => "Clock",
            SecondaryPos::Date => "Date",
            SecondaryPos::Abbreviation => "Abbr",
            SecondaryPos::DigitsCardinal => "DigitsC",
            SecondaryPos::DigitsOrdinal => "DigitsO",
            SecondaryPos::Duplicator => "Dup",
        }
    }
}

impl fmt::Display for SecondaryPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Tag describing how a lexeme behaves under suffixation
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LexemeAttribute {
    #[serde(rename = "Aorist_I")]
    AoristI,
    #[serde(rename = "Aorist_A")]
    AoristA,
    ProgressiveVowelDrop,
    #[serde(rename = "Passive_Il")]
    PassiveIl,
    #[serde(rename = "Passive_In")]
    PassiveIn,
    #[serde(rename = "Passive_InIl")]
    PassiveInIl,
    #[serde(rename = "Causative_t")]
    CausativeT,
    #[serde(rename = "Causative_Ir")]
    CausativeIr,
    #[serde(rename = "Causative_It")]
    CausativeIt,
    #[serde(rename = "Causative_Ar")]
    CausativeAr,
    #[serde(rename = "Causative_dIr")]
    CausativeDIr,
    NoVoicing,
    Voicing,
    VoicingOpt,
    InverseHarmony,
    Doubling,
    EndsWithAyn,
    CompoundP3sg,
    LastVowelDrop,
    RootChange,
    Special,
    NoSuffix,
    Plural,
}

impl LexemeAttribute {
    /// All attributes in bit order
    pub const ALL: [LexemeAttribute; 23] = [
        LexemeAttribute::AoristI,
        LexemeAttribute::AoristA,
        LexemeAttribute::ProgressiveVowelDrop,
        LexemeAttribute::PassiveIl,
        LexemeAttribute::PassiveIn,
        LexemeAttribute::PassiveInIl,
        LexemeAttribute::CausativeT,
        LexemeAttribute::CausativeIr,
        LexemeAttribute::CausativeIt,
        LexemeAttribute::CausativeAr,
        LexemeAttribute::CausativeDIr,
        LexemeAttribute::NoVoicing,
        LexemeAttribute::Voicing,
        LexemeAttribute::VoicingOpt,
        LexemeAttribute::InverseHarmony,
        LexemeAttribute::Doubling,
        LexemeAttribute::EndsWithAyn,
        LexemeAttribute::CompoundP3sg,
        LexemeAttribute::LastVowelDrop,
        LexemeAttribute::RootChange,
        LexemeAttribute::Special,
        LexemeAttribute::NoSuffix,
        LexemeAttribute::Plural,
    ];

    const fn bit(self) -> u32 {
        1 << self as u32
    }
}

enum_set!(
    /// Set of lexeme attributes
    LexemeAttributes,
    LexemeAttribute,
    u32
);

impl Serialize for LexemeAttributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for LexemeAttributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let attrs = Vec::<LexemeAttribute>::deserialize(deserializer)?;
        Ok(attrs.into_iter().collect())
    }
}

/// A dictionary entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lexeme {
    /// Citation form, e.g. "gelmek"
    pub lemma: String,
    /// Form the roots are derived from, e.g. "gel"
    pub lemma_root: String,
    /// Primary part of speech
    pub primary_pos: PrimaryPos,
    /// Secondary part of speech
    #[serde(default)]
    pub secondary_pos: Option<SecondaryPos>,
    /// Behaviour tags
    #[serde(default)]
    pub attributes: LexemeAttributes,
}

impl Lexeme {
    /// Create a lexeme without attributes
    pub fn new(
        lemma: impl Into<String>,
        lemma_root: impl Into<String>,
        primary_pos: PrimaryPos,
        secondary_pos: Option<SecondaryPos>,
    ) -> Self {
        Self {
            lemma: lemma.into(),
            lemma_root: lemma_root.into(),
            primary_pos,
            secondary_pos,
            attributes: LexemeAttributes::empty(),
        }
    }

    /// Copy with the attributes replaced
    pub fn with_attributes(mut self, attributes: impl Into<LexemeAttributes>) -> Self {
        self.attributes = attributes.into();
        self
    }

    /// Whether the lexeme carries the attribute
    pub fn has_attribute(&self, attr: LexemeAttribute) -> bool {
        self.attributes.contains(attr)
    }
}
