//! Phonetic model
//!
//! Letter classification, surface attribute computation and the engine
//! that applies suffix forms to surfaces.

pub mod alphabet;
pub mod analyzer;
pub mod attributes;
pub mod engine;
pub mod sequence;

pub use analyzer::{calculate_phonetic_attributes, append_char, append_str};
pub use attributes::{
    PhoneticAttribute, PhoneticAttributes, PhoneticExpectation, PhoneticExpectations,
};
pub use engine::PhoneticsEngine;
pub use sequence::TurkishSequence;
