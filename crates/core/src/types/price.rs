//! Catalog price strings and the one place they become numbers.
//!
//! Catalog data carries prices the way they are displayed, e.g. `"1200.00"`,
//! `"1,200.00 DH"` or `" 4,500.00DH "`. [`parse_amount`] is the only
//! conversion from that text to a [`Decimal`]; every total in the crate goes
//! through it so that call sites cannot drift apart.
//!
//! # Parsing rules
//!
//! 1. Surrounding whitespace is trimmed.
//! 2. A trailing currency marker (letters such as `DH`/`MAD`, or one of
//!    `$`, `€`, `£`) is stripped, along with whitespace before it.
//! 3. Every `,` thousands separator is removed.
//! 4. The remainder must be a plain, non-negative decimal number: ASCII
//!    digits with at most one `.` followed by more digits. Exponents (`1e3`),
//!    underscores (`1_000`) and a leading `+` are rejected.
//!
//! Anything else is a [`PriceError`]. What to do with the error is up to the
//! caller: the cart total treats it as a zero contribution, the catalog
//! loader rejects the product.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency suffix shown after amounts (Moroccan dirham).
pub const DEFAULT_CURRENCY_SUFFIX: &str = "DH";

const THOUSANDS_SEPARATOR: char = ',';

/// Errors that can occur when parsing a price string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// Nothing left once whitespace and the currency marker are removed.
    #[error("price is empty")]
    Empty,
    /// The remaining text is not a decimal number.
    #[error("price {input:?} is not a number")]
    Invalid {
        /// The original price string.
        input: String,
    },
    /// The amount is below zero.
    #[error("price {input:?} is negative")]
    Negative {
        /// The original price string.
        input: String,
    },
}

/// Parse a display price string into an amount.
///
/// # Errors
///
/// Returns an error if the input is empty after cleanup, is not a decimal
/// number, or is negative.
///
/// # Examples
///
/// ```
/// use maison_luxe_core::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("1,200.00 DH").unwrap(), Decimal::new(120_000, 2));
/// assert_eq!(parse_amount("300.00").unwrap(), Decimal::new(30_000, 2));
/// assert!(parse_amount("sur demande").is_err());
/// ```
pub fn parse_amount(input: &str) -> Result<Decimal, PriceError> {
    let cleaned: String = input
        .trim()
        .trim_end_matches(is_currency_marker)
        .trim_end()
        .chars()
        .filter(|&c| c != THOUSANDS_SEPARATOR)
        .collect();

    if cleaned.is_empty() {
        return Err(PriceError::Empty);
    }

    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };
    let invalid = || PriceError::Invalid {
        input: input.to_owned(),
    };

    if !is_plain_decimal(digits) {
        return Err(invalid());
    }
    let amount = digits.parse::<Decimal>().map_err(|_| invalid())?;

    if negative && !amount.is_zero() {
        return Err(PriceError::Negative {
            input: input.to_owned(),
        });
    }

    Ok(amount)
}

/// `123` or `123.45`; nothing else gets to the decimal parser.
fn is_plain_decimal(text: &str) -> bool {
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    match text.split_once('.') {
        Some((int_part, frac_part)) => all_digits(int_part) && all_digits(frac_part),
        None => all_digits(text),
    }
}

fn is_currency_marker(c: char) -> bool {
    c.is_alphabetic() || matches!(c, '$' | '€' | '£')
}

/// Format an amount for display, e.g. `12,500.00 DH`.
///
/// Rounds to two decimal places and groups the integer part in thousands.
/// An empty `suffix` omits the currency entirely.
///
/// ```
/// use maison_luxe_core::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(1_250_000, 2), "DH"), "12,500.00 DH");
/// assert_eq!(format_amount(Decimal::ZERO, ""), "0.00");
/// ```
#[must_use]
pub fn format_amount(amount: Decimal, suffix: &str) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut out = String::with_capacity(digits.len() + int_part.len() / 3 + suffix.len() + 2);
    if negative {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(digit);
    }
    out.push('.');
    out.push_str(frac_part);

    if !suffix.is_empty() {
        out.push(' ');
        out.push_str(suffix);
    }
    out
}

/// A price exactly as the catalog spells it.
///
/// The original text is kept so line items snapshot what the shopper saw.
/// Use [`Price::amount`] to get the number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(String);

impl Price {
    /// Wrap a display price string. No validation happens here.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the price text as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the price text into an amount.
    ///
    /// # Errors
    ///
    /// See [`parse_amount`].
    pub fn amount(&self) -> Result<Decimal, PriceError> {
        parse_amount(&self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Price {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl AsRef<str> for Price {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
