//! Currency rendering helpers.

use rust_decimal::Decimal;

/// Render a decimal dollar amount as `$1,250,000.00`.
///
/// Always two decimal places, thousands separators in the integer part.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), format!("{f:0<2}")),
        None => (text, "00".to_string()),
    };

    let mut grouped = String::new();
    for (idx, digit) in int_part.chars().enumerate() {
        let remaining = int_part.len() - idx;
        if idx > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{frac_part}")
}
