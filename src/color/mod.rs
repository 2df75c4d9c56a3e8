//! Color value type and hue arithmetic
//!
//! Colors are stored in HSLA space. Hue is an angle in degrees, so every
//! operation that aggregates hues goes through a unit-circle projection.

/// HSLA color type with distance metric and averaging
pub mod hsla;
/// Hue angle projection onto the unit circle and back
pub mod hue;

pub use hsla::Hsla;
