//! Written-amount parsing: English number phrases to exact values.
//!
//! Implements the group-accumulator method: unit and tens words add into a
//! running group, "hundred" multiplies the group, and a larger scale word
//! flushes the group into the grand total. Arbitrary combinations within the
//! grammar parse correctly; there is no phrase lookup table.

use deed_core::errors::WordNumberError;
use rust_decimal::Decimal;

fn unit_value(token: &str) -> Option<u64> {
    let value = match token {
        "zero" => 0,
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        _ => return None,
    };
    Some(value)
}

fn tens_value(token: &str) -> Option<u64> {
    let value = match token {
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        _ => return None,
    };
    Some(value)
}

fn scale_value(token: &str) -> Option<u64> {
    let value = match token {
        "thousand" => 1_000,
        "million" => 1_000_000,
        "billion" => 1_000_000_000,
        _ => return None,
    };
    Some(value)
}

/// Words that may appear in a written amount without denoting a quantity.
fn is_connector(token: &str) -> bool {
    matches!(token, "and" | "dollar" | "dollars")
}

/// Parse an English number phrase into its exact integer value.
///
/// Case and surrounding whitespace are irrelevant; commas and hyphens are
/// treated as separators ("twenty-one" parses as twenty one). A token that
/// is neither a number word nor a connector fails the parse, as does a scale
/// word with nothing in front of it ("thousand" alone is invalid input, not
/// one thousand).
pub fn parse(phrase: &str) -> Result<Decimal, WordNumberError> {
    let cleaned = phrase
        .to_lowercase()
        .replace([',', '-'], " ");

    let mut grand: u64 = 0;
    let mut group: u64 = 0;
    let mut seen_number = false;

    for token in cleaned.split_whitespace() {
        if is_connector(token) {
            continue;
        }
        if let Some(value) = unit_value(token).or_else(|| tens_value(token)) {
            group += value;
            seen_number = true;
        } else if token == "hundred" {
            if group == 0 {
                return Err(WordNumberError::DanglingScale {
                    scale: token.to_string(),
                    phrase: phrase.to_string(),
                });
            }
            group *= 100;
        } else if let Some(scale) = scale_value(token) {
            if group == 0 {
                return Err(WordNumberError::DanglingScale {
                    scale: token.to_string(),
                    phrase: phrase.to_string(),
                });
            }
            grand += group * scale;
            group = 0;
        } else {
            return Err(WordNumberError::UnknownToken {
                token: token.to_string(),
                phrase: phrase.to_string(),
            });
        }
    }

    if !seen_number {
        return Err(WordNumberError::Empty {
            phrase: phrase.to_string(),
        });
    }

    Ok(Decimal::from(grand + group))
}
