use crate::item::Item;

/// Round to two decimal places, half away from zero
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Sum of line totals for a set of items, rounded to cents
pub fn subtotal<'a, I>(items: I) -> f64
where
    I: IntoIterator<Item = &'a Item>,
{
    let raw: f64 = items.into_iter().map(Item::line_total).sum();
    round_to_cents(raw)
}
