//! Brand roster configuration for BrandPulse.
//!
//! Loads the YAML brand roster, validates it (unique names/slugs, exactly one
//! primary brand), and exposes the plot order every chart uses: primary brand
//! first, remaining brands in roster order.

pub mod brands;
pub mod error;

pub use brands::{load_brands, plot_order, BrandConfig, BrandsFile, Role};
pub use error::ConfigError;
