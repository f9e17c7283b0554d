//! Property tests for the reconciliation engine and the input parser.

use billing_taxes::entities::*;
use billing_taxes::DecimalInputModel;
use proptest::prelude::*;

fn round2(value: f64) -> f64 {
    ((value + f64::EPSILON) * 100.0).round() / 100.0
}

/// Amounts as they arrive from a form field: non-negative, cent-resolution.
fn arb_amount() -> impl Strategy<Value = f64> {
    (0u64..10_000_000u64).prop_map(|cents| cents as f64 / 100.0)
}

/// Plausible tax rates (0% to 100%, quarter-point resolution).
fn arb_percent() -> impl Strategy<Value = f64> {
    (0u32..=400u32).prop_map(|quarters| quarters as f64 / 4.0)
}

proptest! {
    #[test]
    fn derived_amount_matches_rate_over_base(base in arb_amount(), percent in arb_percent()) {
        let mut draft = InvoiceDraft::new(InvoiceType::Sale, percent, 0.0);
        draft.set_base(base);
        let resolved = draft.resolve(TaxKind::Iva);
        prop_assert_eq!(resolved.amount, round2(base * percent / 100.0));
        prop_assert!(!resolved.manual);
    }

    #[test]
    fn manual_amount_resolves_to_itself(base in arb_amount(), amount in arb_amount()) {
        let mut draft = InvoiceDraft::new(InvoiceType::Sale, 21.0, 0.0);
        draft.set_base(base);
        draft.set_amount(TaxKind::Iva, &format!("{:.2}", amount));
        let resolved = draft.resolve(TaxKind::Iva);
        prop_assert_eq!(resolved.amount, round2(amount));
        if base > 0.0 {
            prop_assert_eq!(resolved.percent, round2(amount / base * 100.0));
        } else {
            prop_assert_eq!(resolved.percent, 0.0);
        }
    }

    #[test]
    fn resolved_values_are_always_finite_and_non_negative(
        base in arb_amount(),
        percent in arb_percent(),
        amount in arb_amount(),
    ) {
        let mut draft = InvoiceDraft::new(InvoiceType::Sale, 21.0, 3.0);
        draft.set_base(base);
        draft.set_percent(TaxKind::Iva, &format!("{}", percent));
        draft.set_amount(TaxKind::Iibb, &format!("{:.2}", amount));
        for kind in [TaxKind::Iva, TaxKind::Iibb] {
            let resolved = draft.resolve(kind);
            prop_assert!(resolved.percent.is_finite() && resolved.percent >= 0.0);
            prop_assert!(resolved.amount.is_finite() && resolved.amount >= 0.0);
        }
    }

    #[test]
    fn resolve_is_idempotent(base in arb_amount(), amount in arb_amount()) {
        let mut draft = InvoiceDraft::new(InvoiceType::Sale, 21.0, 3.0);
        draft.set_base(base);
        draft.set_amount(TaxKind::Iva, &format!("{:.2}", amount));
        prop_assert_eq!(draft.resolve(TaxKind::Iva), draft.resolve(TaxKind::Iva));
        prop_assert_eq!(draft.resolve(TaxKind::Iibb), draft.resolve(TaxKind::Iibb));
    }

    #[test]
    fn clearing_a_manual_amount_restores_the_entered_rate(
        base in 1u64..100_000u64,
        percent in arb_percent(),
        amount in arb_amount(),
    ) {
        let base = base as f64;
        let mut draft = InvoiceDraft::new(InvoiceType::Sale, 21.0, 3.0);
        draft.set_base(base);
        draft.set_percent(TaxKind::Iva, &format!("{}", percent));
        draft.set_amount(TaxKind::Iva, &format!("{:.2}", amount));
        draft.set_amount(TaxKind::Iva, "");
        prop_assert_eq!(draft.iva.percent, percent);
        prop_assert_eq!(draft.resolve(TaxKind::Iva).amount, round2(base * percent / 100.0));
    }

    #[test]
    fn parser_is_total(raw in ".*") {
        let value = f64::from(DecimalInputModel::from(raw.as_str()));
        prop_assert!(value.is_finite());
    }

    #[test]
    fn parser_reads_plain_decimals(cents in 0u64..1_000_000_000u64) {
        let value = cents as f64 / 100.0;
        let rendered = format!("{:.2}", value);
        prop_assert_eq!(f64::from(DecimalInputModel::from(rendered.as_str())), value);
    }

    #[test]
    fn parser_accepts_comma_for_dot(cents in 0u64..1_000_000_000u64) {
        let value = cents as f64 / 100.0;
        let with_dot = format!("{:.2}", value);
        let with_comma = with_dot.replace('.', ",");
        prop_assert_eq!(
            f64::from(DecimalInputModel::from(with_comma.as_str())),
            f64::from(DecimalInputModel::from(with_dot.as_str()))
        );
    }
}
