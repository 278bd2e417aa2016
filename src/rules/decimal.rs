//! Exact ordering of decimal text such as `"-12.5"` or `"3e-400"`.
//!
//! `Decimal` holds at most 28 fractional digits. A value written with a
//! smaller magnitude is kept as its truncation toward zero plus the sign of
//! the discarded part, which still orders it exactly against any `Decimal`.

use rust_decimal::Decimal;
use std::cmp::Ordering;
use thiserror::Error;

const MAX_SCALE: i128 = 28;

/// Why a text value is not a decimal number.
#[derive(Debug, Error)]
pub(crate) enum DecimalTextError {
    #[error("`{text}` is not a decimal number: {source}")]
    Mantissa {
        text: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("`{0}` has an invalid exponent")]
    Exponent(String),
}

/// Parsed decimal text, compared without rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DecimalText {
    /// Truncated toward zero; `remainder` is the sign of what was cut off.
    Within {
        truncated: Decimal,
        remainder: Ordering,
    },
    /// Magnitude above `Decimal::MAX`, with its sign.
    Beyond(Ordering),
}

impl DecimalText {
    /// Parse `[sign]digits[.digits][(e|E)[sign]digits]`, ignoring surrounding
    /// whitespace. `NaN` and infinities are not numbers here.
    pub(crate) fn parse(text: &str) -> Result<Self, DecimalTextError> {
        let text = text.trim();
        let (mantissa, exponent) = match text.find(|c: char| c == 'e' || c == 'E') {
            Some(at) => {
                let exponent = text[at + 1..]
                    .parse::<i64>()
                    .map_err(|_| DecimalTextError::Exponent(text.to_string()))?;
                (&text[..at], exponent)
            }
            None => (text, 0),
        };

        let mantissa =
            Decimal::from_str_exact(mantissa).map_err(|source| DecimalTextError::Mantissa {
                text: text.to_string(),
                source,
            })?;
        let scale = i128::from(mantissa.scale()) - i128::from(exponent);
        Ok(Self::scaled(mantissa.mantissa(), scale))
    }

    /// The value `digits * 10^-scale`.
    fn scaled(digits: i128, scale: i128) -> Self {
        let sign = digits.cmp(&0);
        if sign == Ordering::Equal {
            return Self::Within {
                truncated: Decimal::ZERO,
                remainder: Ordering::Equal,
            };
        }

        if scale < 0 {
            return pow10(-scale)
                .and_then(|factor| digits.checked_mul(factor))
                .and_then(|widened| exact(widened, 0))
                .map_or(Self::Beyond(sign), |truncated| Self::Within {
                    truncated,
                    remainder: Ordering::Equal,
                });
        }

        let (kept, remainder) = if scale <= MAX_SCALE {
            (digits, Ordering::Equal)
        } else {
            match pow10(scale - MAX_SCALE) {
                Some(factor) => (digits / factor, (digits % factor).cmp(&0)),
                None => (0, sign),
            }
        };
        exact(kept, scale.min(MAX_SCALE))
            .map_or(Self::Beyond(sign), |truncated| Self::Within {
                truncated,
                remainder,
            })
    }

    /// Ordering of the exact value against `bound`.
    pub(crate) fn cmp_to(&self, bound: &Decimal) -> Ordering {
        match self {
            Self::Within {
                truncated,
                remainder,
            } => truncated.cmp(bound).then(*remainder),
            Self::Beyond(sign) => *sign,
        }
    }

    pub(crate) fn signum(&self) -> Ordering {
        self.cmp_to(&Decimal::ZERO)
    }
}

/// Exact `Decimal` for an `f64` bound, through its shortest round-trip text.
pub(crate) fn decimal_bound(bound: f64) -> Option<Decimal> {
    Decimal::from_str_exact(&bound.to_string()).ok()
}

fn pow10(exponent: i128) -> Option<i128> {
    u32::try_from(exponent)
        .ok()
        .and_then(|exponent| 10i128.checked_pow(exponent))
}

fn exact(digits: i128, scale: i128) -> Option<Decimal> {
    let scale = u32::try_from(scale).ok()?;
    Decimal::try_from_i128_with_scale(digits, scale).ok()
}
