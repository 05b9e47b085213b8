//! Tea calculator: sugar and tea leaves for any amount of water, scaled from
//! a fixed 675 ml / 25 g / 7 g batch.
//!
//! The core is [`ratio::convert`], a pure function. [`form::FormState`] holds
//! the transient input/result state a form needs, and the `wasm` module
//! exposes both to a browser page.

pub mod config;
pub mod form;
pub mod ratio;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use ratio::{convert, convert_str, ConvertError, IngredientQuantities, WaterVolume};
