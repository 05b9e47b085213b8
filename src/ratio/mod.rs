// Fixed-ratio conversion from water volume to sugar and tea quantities

pub mod constants;
pub mod converter;
pub mod detector;
pub mod error;
pub mod formatter;
pub mod types;

#[cfg(test)]
mod tests;

pub use converter::{convert, convert_str, convert_volume};
pub use detector::{looks_like_volume, parse_volume};
pub use error::ConvertError;
pub use formatter::{describe_ratio, format_quantities, OutputFormat};
pub use types::{round_to_places, IngredientQuantities, WaterVolume};
