use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::ratio::constants::{DECIMAL_PLACES, SUGAR_PER_ML, TEA_PER_ML};
use crate::ratio::detector::parse_volume;
use crate::ratio::error::ConvertError;

/// A validated amount of water in milliliters.
///
/// Only constructible through [`WaterVolume::new`] or [`str::parse`], so the
/// value is always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct WaterVolume(f64);

impl WaterVolume {
    pub fn new(ml: f64) -> Result<Self, ConvertError> {
        if ml.is_finite() && ml > 0.0 {
            Ok(Self(ml))
        } else {
            Err(ConvertError::InvalidVolume)
        }
    }

    pub fn ml(&self) -> f64 {
        self.0
    }

    /// Scale the reference batch to this volume.
    pub fn ingredients(&self) -> IngredientQuantities {
        IngredientQuantities {
            sugar: round_to_places(self.0 * SUGAR_PER_ML, DECIMAL_PLACES),
            tea: round_to_places(self.0 * TEA_PER_ML, DECIMAL_PLACES),
        }
    }
}

impl TryFrom<f64> for WaterVolume {
    type Error = ConvertError;

    fn try_from(ml: f64) -> Result<Self, Self::Error> {
        Self::new(ml)
    }
}

impl FromStr for WaterVolume {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ml = parse_volume(s).ok_or(ConvertError::InvalidVolume)?;
        Self::new(ml)
    }
}

impl fmt::Display for WaterVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ml", self.0)
    }
}

/// Sugar and tea leaves for a given volume of water, in grams.
///
/// Both values are rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IngredientQuantities {
    sugar: f64,
    tea: f64,
}

impl IngredientQuantities {
    /// Sugar [g].
    pub fn sugar(&self) -> f64 {
        self.sugar
    }

    /// Tea leaves [g].
    pub fn tea(&self) -> f64 {
        self.tea
    }
}

/// Round half away from zero at `places` decimal places.
///
/// Values too large to scale are already past that precision and come back
/// unchanged.
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
