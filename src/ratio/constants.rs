//! Fixed brewing ratio.
//!
//! One reference batch is 675 ml of water with 25 g of sugar and 7 g of tea
//! leaves. Every conversion scales linearly from this batch.

/// Water in the reference batch [ml].
pub const REFERENCE_WATER_ML: f64 = 675.0;

/// Sugar in the reference batch [g].
pub const REFERENCE_SUGAR_G: f64 = 25.0;

/// Tea leaves in the reference batch [g].
pub const REFERENCE_TEA_G: f64 = 7.0;

/// Sugar per milliliter of water [g/ml].
pub const SUGAR_PER_ML: f64 = REFERENCE_SUGAR_G / REFERENCE_WATER_ML;

/// Tea leaves per milliliter of water [g/ml].
pub const TEA_PER_ML: f64 = REFERENCE_TEA_G / REFERENCE_WATER_ML;

/// Decimal places kept in every gram quantity.
pub const DECIMAL_PLACES: i32 = 2;

/// Message carried by every rejected water volume.
pub const INVALID_VOLUME_MESSAGE: &str =
    "Please enter a valid positive number for the water amount.";
