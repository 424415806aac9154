//! Numeral grammar: spelled-out cardinals and ordinals plus digit strings

use super::graph::{form, GraphModule, RootDispatch, RootMatcher, StateType, SuffixGraphBuilder};
use crate::error::Result;
use crate::lexicon::{PrimaryPos, SecondaryPos};

/// Cardinal, ordinal and digit roots, converging on the adjective root
#[derive(Debug, Clone, Copy, Default)]
pub struct NumeralModule;

impl GraphModule for NumeralModule {
    fn name(&self) -> &'static str {
        "numeral"
    }

    fn register(&self, b: &mut SuffixGraphBuilder) -> Result<RootDispatch> {
        let cardinal = b.register_state("NUMERAL_CARDINAL_ROOT", StateType::Transfer, PrimaryPos::Numeral)?;
        b.register_state("NUMERAL_CARDINAL_DERIV", StateType::Derivational, PrimaryPos::Numeral)?;
        let digits = b.register_state(
            "NUMERAL_DIGIT_CARDINAL_ROOT",
            StateType::Transfer,
            PrimaryPos::Numeral,
        )?;
        let ordinal = b.register_state("NUMERAL_ORDINAL_ROOT", StateType::Transfer, PrimaryPos::Numeral)?;
        b.register_state("NUMERAL_ORDINAL_DERIV", StateType::Derivational, PrimaryPos::Numeral)?;

        b.register_suffix("NumbersOf", "NumbersOf")?;
        b.register_suffix("OfUnit_Number", "OfUnit")?;
        b.register_suffix("Apos_Digit", "Apos")?;

        b.free_transition(
            "Numeral_Free_Transition_1",
            "NUMERAL_CARDINAL_ROOT",
            "NUMERAL_CARDINAL_DERIV",
        )?;
        b.free_transition(
            "Numeral_Free_Transition_2",
            "NUMERAL_ORDINAL_ROOT",
            "NUMERAL_ORDINAL_DERIV",
        )?;
        b.free_transition(
            "Digits_Free_Transition_1",
            "NUMERAL_DIGIT_CARDINAL_ROOT",
            "NUMERAL_CARDINAL_DERIV",
        )?;
        b.zero_transition("Numeral_Zero_Transition_1", "NUMERAL_CARDINAL_DERIV", "ADJECTIVE_ROOT")?;
        b.zero_transition("Numeral_Zero_Transition_2", "NUMERAL_ORDINAL_DERIV", "ADJECTIVE_ROOT")?;

        // "üçlerce", "beşlik"
        b.connect("NUMERAL_CARDINAL_DERIV", "NumbersOf", "ADJECTIVE_ROOT", [form("lArcA")])?;
        b.connect("NUMERAL_CARDINAL_DERIV", "OfUnit_Number", "ADJECTIVE_ROOT", [form("lIk")])?;
        // "3'"
        b.connect(
            "NUMERAL_DIGIT_CARDINAL_ROOT",
            "Apos_Digit",
            "NUMERAL_CARDINAL_DERIV",
            [form("'")],
        )?;

        let numeral = |secondary| RootMatcher::PosWithSecondary(PrimaryPos::Numeral, secondary);
        Ok(RootDispatch::new()
            .route(numeral(SecondaryPos::DigitsCardinal), digits)
            .route(numeral(SecondaryPos::DigitsOrdinal), digits)
            .route(numeral(SecondaryPos::Range), digits)
            .route(numeral(SecondaryPos::Cardinal), cardinal)
            .route(numeral(SecondaryPos::Ordinal), ordinal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Lexeme, Root};
    use crate::morphotactics::{BasicModule, SuffixGraph};
    use crate::phonetics::{PhoneticAttributes, PhoneticExpectations};
    use std::sync::Arc;

    fn numeral(surface: &str, secondary: SecondaryPos) -> Root {
        Root::new(
            surface,
            Arc::new(Lexeme::new(surface, surface, PrimaryPos::Numeral, Some(secondary))),
            PhoneticAttributes::empty(),
            PhoneticExpectations::empty(),
        )
    }

    #[test]
    fn test_requires_basic_module() {
        assert!(SuffixGraph::new(&[&NumeralModule]).is_err());
    }

    #[test]
    fn test_dispatch_by_secondary_pos() {
        let graph = SuffixGraph::new(&[&BasicModule, &NumeralModule]).unwrap();
        let state_of = |root: &Root| {
            graph
                .default_state_for_root(root)
                .map(|id| graph.state(id).name.clone())
        };
        assert_eq!(
            state_of(&numeral("3", SecondaryPos::DigitsCardinal)).as_deref(),
            Some("NUMERAL_DIGIT_CARDINAL_ROOT")
        );
        assert_eq!(
            state_of(&numeral("üç", SecondaryPos::Cardinal)).as_deref(),
            Some("NUMERAL_CARDINAL_ROOT")
        );
        assert_eq!(
            state_of(&numeral("üçüncü", SecondaryPos::Ordinal)).as_deref(),
            Some("NUMERAL_ORDINAL_ROOT")
        );
        assert_eq!(state_of(&numeral("%3", SecondaryPos::Percentage)), None);
    }
}
