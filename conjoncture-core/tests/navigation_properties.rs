//! Property tests for navigation and composition invariants.
//!
//! Uses proptest to verify:
//! 1. Any sequence of navigation moves keeps the sub-tab when the primary tab changes
//! 2. Non-employment tabs compose identically for every sub-tab
//! 3. Composition is idempotent
//! 4. Unknown selection strings are rejected without touching the state

use proptest::prelude::*;

use conjoncture_core::{compose, Dataset, DashboardError, NavigationState, PrimaryTab, SecondaryTab};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_primary() -> impl Strategy<Value = PrimaryTab> {
    (0..PrimaryTab::ALL.len()).prop_map(|i| PrimaryTab::ALL[i])
}

fn arb_secondary() -> impl Strategy<Value = SecondaryTab> {
    (0..SecondaryTab::ALL.len()).prop_map(|i| SecondaryTab::ALL[i])
}

#[derive(Debug, Clone, Copy)]
enum Move {
    SetPrimary(PrimaryTab),
    NextPrimary,
    PrevPrimary,
}

fn arb_primary_move() -> impl Strategy<Value = Move> {
    prop_oneof![
        arb_primary().prop_map(Move::SetPrimary),
        Just(Move::NextPrimary),
        Just(Move::PrevPrimary),
    ]
}

// ── 1. Sub-tab persistence ───────────────────────────────────────────

proptest! {
    /// Moving between primary tabs never alters the remembered sub-tab.
    #[test]
    fn primary_moves_preserve_sub_tab(
        secondary in arb_secondary(),
        moves in prop::collection::vec(arb_primary_move(), 0..20),
    ) {
        let mut nav = NavigationState::new(PrimaryTab::Employment, secondary);
        for m in moves {
            match m {
                Move::SetPrimary(tab) => nav.set_primary(tab),
                Move::NextPrimary => nav.next_primary(),
                Move::PrevPrimary => nav.prev_primary(),
            }
            prop_assert_eq!(nav.secondary(), secondary);
        }
        nav.set_primary(PrimaryTab::Employment);
        prop_assert_eq!(nav.secondary(), secondary);
    }

    /// `next` then `prev` is the identity on both levels.
    #[test]
    fn next_prev_round_trip(primary in arb_primary(), secondary in arb_secondary()) {
        let mut nav = NavigationState::new(primary, secondary);
        nav.next_primary();
        nav.prev_primary();
        nav.next_secondary();
        nav.prev_secondary();
        prop_assert_eq!(nav, NavigationState::new(primary, secondary));
    }
}

// ── 2-3. Composition ─────────────────────────────────────────────────

proptest! {
    /// The sub-tab only matters under Employment.
    #[test]
    fn sub_tab_ignored_outside_employment(
        primary in arb_primary(),
        a in arb_secondary(),
        b in arb_secondary(),
    ) {
        prop_assume!(primary != PrimaryTab::Employment);
        let ds = Dataset::bundled();
        prop_assert_eq!(compose(primary, a, &ds), compose(primary, b, &ds));
    }

    #[test]
    fn compose_is_idempotent(primary in arb_primary(), secondary in arb_secondary()) {
        let ds = Dataset::bundled();
        let first = compose(primary, secondary, &ds);
        prop_assert!(!first.is_empty());
        prop_assert_eq!(first, compose(primary, secondary, &ds));
    }
}

// ── 4. Input validation ──────────────────────────────────────────────

proptest! {
    /// Strings that are neither an id nor a position are rejected.
    #[test]
    fn garbage_selection_rejected(input in "[a-z]{3,12}x") {
        let mut nav = NavigationState::new(PrimaryTab::Wages, SecondaryTab::Sectors);
        let before = nav;
        let result = nav.select_primary(&input);
        let rejected = matches!(result, Err(DashboardError::InvalidSelection { .. }));
        prop_assert!(rejected);
        prop_assert!(nav.select_secondary(&input).is_err());
        prop_assert_eq!(nav, before);
    }

    /// 1-based positions select the matching tab.
    #[test]
    fn numeric_selection(i in 0usize..4) {
        let mut nav = NavigationState::default();
        let tab = nav.select_primary(&(i + 1).to_string()).unwrap();
        prop_assert_eq!(tab, PrimaryTab::ALL[i]);
        prop_assert_eq!(nav.primary(), PrimaryTab::ALL[i]);
    }
}
