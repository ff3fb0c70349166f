//! Coefficient parsing.
//!
//! Coefficients arrive from upstream as one flat string of whitespace-separated decimals,
//! read left-to-right as `x1 y1 x2 y2 ...` (real, imaginary pairs).

use crate::foundation::core::Vec2;
use crate::foundation::error::{EpicycleError, EpicycleResult};

/// One complex Fourier coefficient, stored as `(re, im)` in a 2D vector.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coefficient(pub Vec2);

impl Coefficient {
    /// Build a coefficient from its real and imaginary parts.
    pub fn new(re: f64, im: f64) -> Self {
        Self(Vec2::new(re, im))
    }

    /// The coefficient as a 2D vector.
    pub fn as_vec2(self) -> Vec2 {
        self.0
    }

    /// Euclidean norm `sqrt(re² + im²)`.
    pub fn magnitude(self) -> f64 {
        self.0.hypot()
    }

    /// `true` when both parts are finite.
    pub fn is_finite(self) -> bool {
        self.0.x.is_finite() && self.0.y.is_finite()
    }
}

/// How non-numeric tokens are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Reject the whole input at the first token that is not a finite number.
    #[default]
    Strict,
    /// Map unreadable tokens to `NaN` and keep going.
    Lenient,
}

/// Result of [`parse_coefficients`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedCoefficients {
    /// Coefficients in input order.
    pub coefficients: Vec<Coefficient>,
    /// Trailing token without a partner, if the input had an odd token count.
    pub dropped_trailing: Option<String>,
}

/// Split `input` into consecutive `(x, y)` coefficient pairs.
///
/// An unpaired trailing token is discarded without being parsed. Empty input yields an
/// empty sequence.
pub fn parse_coefficients(input: &str, mode: ParseMode) -> EpicycleResult<ParsedCoefficients> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let paired = tokens.len() - tokens.len() % 2;

    let mut coefficients = Vec::with_capacity(paired / 2);
    for (pair_idx, pair) in tokens[..paired].chunks_exact(2).enumerate() {
        let x = parse_token(pair_idx * 2, pair[0], mode)?;
        let y = parse_token(pair_idx * 2 + 1, pair[1], mode)?;
        coefficients.push(Coefficient::new(x, y));
    }

    let dropped_trailing = tokens.get(paired).map(|t| (*t).to_owned());
    if let Some(token) = &dropped_trailing {
        tracing::warn!(
            index = paired,
            token = %token,
            "dropping unpaired trailing coefficient token"
        );
    }
    tracing::debug!(count = coefficients.len(), ?mode, "parsed coefficients");

    Ok(ParsedCoefficients {
        coefficients,
        dropped_trailing,
    })
}

fn parse_token(index: usize, token: &str, mode: ParseMode) -> EpicycleResult<f64> {
    match (token.parse::<f64>(), mode) {
        (Ok(v), ParseMode::Strict) if v.is_finite() => Ok(v),
        (_, ParseMode::Strict) => Err(EpicycleError::parse(index, token)),
        (Ok(v), ParseMode::Lenient) => Ok(v),
        (Err(_), ParseMode::Lenient) => Ok(f64::NAN),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/coeffs/parse.rs"]
mod tests;
