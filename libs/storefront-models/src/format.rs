//! es-AR style number and price formatting

use crate::product::Currency;
use rust_decimal::{Decimal, RoundingStrategy};

/// Group thousands with `.` after rounding to whole units (`1367999.4` -> `1.367.999`).
pub fn format_number(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// `$ 1.367.999`, `US$ 899`
pub fn format_currency(amount: Decimal, currency: Currency) -> String {
    format!("{} {}", currency.symbol(), format_number(amount))
}

/// `10% OFF`
pub fn format_discount(percentage: u32) -> String {
    format!("{}% OFF", percentage)
}
