use ironctl_core::dashboard::MAX_COLUMNS;
use ironctl_core::{Breakpoints, Dashboard, WidgetKind};
use proptest::prelude::*;

// Strategy for valid breakpoint pairs (medium strictly below wide)
fn arb_breakpoints() -> impl Strategy<Value = Breakpoints> {
    (1u16..2000)
        .prop_flat_map(|medium| (Just(medium), (medium + 1)..=u16::MAX))
        .prop_map(|(medium, wide)| Breakpoints::new(medium, wide).unwrap())
}

proptest! {
    /// Property: column count always stays within 1..=3
    #[test]
    fn prop_columns_in_range(bp in arb_breakpoints(), width in any::<u16>()) {
        let columns = bp.columns_for(width);
        prop_assert!((1..=MAX_COLUMNS).contains(&columns));
    }

    /// Property: widening the viewport never removes columns
    #[test]
    fn prop_columns_monotonic(bp in arb_breakpoints(), a in any::<u16>(), b in any::<u16>()) {
        let (narrow, wide) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(bp.columns_for(narrow) <= bp.columns_for(wide));
    }

    /// Property: the grid keeps all three widgets in order at any width
    #[test]
    fn prop_grid_preserves_order(bp in arb_breakpoints(), width in any::<u16>()) {
        let rows = Dashboard::new().grid_rows(bp.columns_for(width));
        let kinds: Vec<WidgetKind> = rows.iter().flatten().map(|w| w.kind()).collect();
        prop_assert_eq!(kinds, vec![WidgetKind::Status, WidgetKind::Schedule, WidgetKind::Impact]);
    }
}
