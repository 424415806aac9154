//! Parsing words into morpheme paths
//!
//! [`ContextlessParser`] finds every reading of a word on its own. It is
//! assembled from:
//!
//! - [`SuffixApplier`]: decides whether one suffix form may extend a path
//! - [`MandatoryTransitionApplier`]: forces stems that only exist before a
//!   fixed suffix chain through it
//! - [`PredefinedPaths`]: hand-enumerated paths of irregular roots
//!
//! [`Formatter`] renders the resulting containers.

mod applier;
mod contextless;
mod formatter;
mod mandatory;
mod predefined;

pub use applier::SuffixApplier;
pub use contextless::{ContextlessParser, MorphologicParser, ParseListener};
pub use formatter::Formatter;
pub use mandatory::MandatoryTransitionApplier;
pub use predefined::PredefinedPaths;
