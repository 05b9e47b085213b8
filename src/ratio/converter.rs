use log::debug;

use crate::ratio::error::ConvertError;
use crate::ratio::types::{IngredientQuantities, WaterVolume};

/// Convert a water volume in milliliters into sugar and tea quantities.
///
/// Fails with [`ConvertError::InvalidVolume`] unless `water_ml` is finite and
/// strictly positive. Pure: the same input always yields the same output.
pub fn convert(water_ml: f64) -> Result<IngredientQuantities, ConvertError> {
    let volume = WaterVolume::new(water_ml).inspect_err(|_| {
        debug!("rejected water volume: {}", water_ml);
    })?;
    Ok(convert_volume(volume))
}

/// Same as [`convert`], starting from raw form text such as `"337.5"` or
/// `"675 ml"`.
pub fn convert_str(input: &str) -> Result<IngredientQuantities, ConvertError> {
    let volume: WaterVolume = input.parse().inspect_err(|_| {
        debug!("rejected water volume input: {:?}", input);
    })?;
    Ok(convert_volume(volume))
}

/// Conversion for an already validated volume. Cannot fail.
pub fn convert_volume(volume: WaterVolume) -> IngredientQuantities {
    let quantities = volume.ingredients();
    debug!(
        "{} -> sugar {} g, tea {} g",
        volume,
        quantities.sugar(),
        quantities.tea()
    );
    quantities
}
