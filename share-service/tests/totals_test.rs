use share_service::models::totals::{compute_totals, line_amount, num};
use share_service::models::LineItem;

fn item(quantity: f64, rate: f64) -> LineItem {
    LineItem {
        id: String::new(),
        description: String::new(),
        quantity,
        rate,
        amount: line_amount(quantity, rate),
    }
}

#[test]
fn concrete_scenario_matches_expected_totals() {
    // 2 x 50 + 1 x 100, 10% tax, 5% discount
    let items = vec![item(2.0, 50.0), item(1.0, 100.0)];
    let totals = compute_totals(&items, 10.0, 5.0, 0.0);

    assert_eq!(totals.subtotal, 200.0);
    assert_eq!(totals.tax_amount, 20.0);
    assert_eq!(totals.discount_amount, 10.0);
    assert_eq!(totals.total, 210.0);
}

#[test]
fn shipping_is_a_flat_addition() {
    let items = vec![item(1.0, 100.0)];
    let totals = compute_totals(&items, 0.0, 0.0, 15.5);
    assert_eq!(totals.total, 115.5);
}

#[test]
fn empty_item_list_yields_all_zeroes() {
    let totals = compute_totals(&[], 10.0, 5.0, 0.0);
    assert_eq!(totals.subtotal, 0.0);
    assert_eq!(totals.tax_amount, 0.0);
    assert_eq!(totals.discount_amount, 0.0);
    assert_eq!(totals.total, 0.0);
}

#[test]
fn negative_inputs_are_not_clamped() {
    // The calculator is purely arithmetic; range validation belongs to the
    // form, so negatives pass straight through
    let items = vec![item(-2.0, 50.0)];
    let totals = compute_totals(&items, 10.0, 0.0, 0.0);
    assert_eq!(totals.subtotal, -100.0);
    assert_eq!(totals.tax_amount, -10.0);
    assert_eq!(totals.total, -110.0);

    let totals = compute_totals(&[item(1.0, 100.0)], -10.0, 120.0, 0.0);
    assert_eq!(totals.tax_amount, -10.0);
    assert_eq!(totals.discount_amount, 120.0);
    assert_eq!(totals.total, 100.0 - 10.0 - 120.0);
}

#[test]
fn totals_invariant_holds_across_rates() {
    let items = vec![item(3.0, 7.25), item(0.5, 199.99), item(12.0, 0.0)];
    for (tax, discount, shipping) in [
        (0.0, 0.0, 0.0),
        (10.0, 5.0, 0.0),
        (100.0, 100.0, 9.99),
        (-3.0, 250.0, -1.0),
    ] {
        let totals = compute_totals(&items, tax, discount, shipping);
        let expected_subtotal: f64 = items.iter().map(|i| i.quantity * i.rate).sum();
        assert_eq!(totals.subtotal, expected_subtotal);
        assert_eq!(
            totals.total,
            totals.subtotal + totals.tax_amount - totals.discount_amount + shipping
        );
    }
}

#[test]
fn non_finite_values_coerce_to_zero() {
    assert_eq!(num(f64::NAN), 0.0);
    assert_eq!(num(f64::INFINITY), 0.0);
    assert_eq!(num(f64::NEG_INFINITY), 0.0);
    assert_eq!(line_amount(f64::NAN, 5.0), 0.0);

    let items = vec![item(f64::NAN, 50.0), item(1.0, 100.0)];
    let totals = compute_totals(&items, f64::NAN, 0.0, f64::NAN);
    assert_eq!(totals.subtotal, 100.0);
    assert_eq!(totals.tax_amount, 0.0);
    assert_eq!(totals.total, 100.0);
}

#[test]
fn stale_amount_fields_do_not_skew_the_subtotal() {
    let mut stale = item(2.0, 50.0);
    stale.amount = 9999.0;
    let totals = compute_totals(&[stale], 0.0, 0.0, 0.0);
    assert_eq!(totals.subtotal, 100.0);
}
