//! Suffix rule engine
//!
//! Templates are compiled once into rule lists; appliers realize them
//! against phonetic attribute sets.

pub mod applier;
pub mod form;

pub use applier::{PlainApplier, PrecachingApplier, SuffixFormApplier};
pub use form::{Rule, RuleType, SuffixFormSequence};
