use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::ratio::constants::{
    REFERENCE_SUGAR_G, REFERENCE_TEA_G, REFERENCE_WATER_ML, SUGAR_PER_ML, TEA_PER_ML,
};
use crate::ratio::detector::parse_volume;
use crate::ratio::types::IngredientQuantities;

/// How a calculation is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render quantities for display.
///
/// `water` is the input text as the user typed it; it is echoed in the text
/// heading and, when it parses, in the JSON `water_ml` field.
pub fn format_quantities(
    water: Option<&str>,
    quantities: &IngredientQuantities,
    format: OutputFormat,
    show_heading: bool,
) -> String {
    match format {
        OutputFormat::Text => format_text(water, quantities, show_heading),
        OutputFormat::Json => format_json(water, quantities),
    }
}

fn format_text(
    water: Option<&str>,
    quantities: &IngredientQuantities,
    show_heading: bool,
) -> String {
    let mut out = String::new();
    if show_heading {
        if let Some(water) = water {
            // Echo the number without any "ml" the user typed
            let shown = parse_volume(water)
                .map(|ml| ml.to_string())
                .unwrap_or_else(|| water.trim().to_string());
            out.push_str(&format!("Results for {} ml of water\n", shown));
        }
    }
    out.push_str(&format!("  Sugar: {:.2} g\n", quantities.sugar()));
    out.push_str(&format!("  Tea:   {:.2} g", quantities.tea()));
    out
}

fn format_json(water: Option<&str>, quantities: &IngredientQuantities) -> String {
    let water_ml = water.and_then(parse_volume);
    let value = json!({
        "water_ml": water_ml,
        "sugar": quantities.sugar(),
        "tea": quantities.tea(),
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

/// Describe the fixed recipe and the per-milliliter rates
pub fn describe_ratio() -> String {
    format!(
        "{} ml water -> {} g sugar, {} g tea\n  Sugar: {:.6} g/ml\n  Tea:   {:.6} g/ml",
        REFERENCE_WATER_ML, REFERENCE_SUGAR_G, REFERENCE_TEA_G, SUGAR_PER_ML, TEA_PER_ML
    )
}
