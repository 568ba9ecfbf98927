use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// How a brand relates to the dashboard owner.
///
/// Exactly one brand in the roster is `Primary`; it is always plotted first
/// and the render layer gives it distinct styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Primary,
    Competitor,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Primary => write!(f, "primary"),
            Role::Competitor => write!(f, "competitor"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandConfig {
    pub name: String,
    pub role: Role,
    pub notes: Option<String>,
}

impl BrandConfig {
    /// Generate a URL-safe slug from the brand name.
    ///
    /// Slugs are the keys every dataset map and chart series uses.
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' {
                    c
                } else if c == ' ' {
                    '-'
                } else {
                    '\0'
                }
            })
            .filter(|&c| c != '\0')
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[derive(Debug, Deserialize)]
pub struct BrandsFile {
    pub brands: Vec<BrandConfig>,
}

impl BrandsFile {
    /// The designated primary brand.
    ///
    /// Validation guarantees exactly one exists in a loaded roster.
    #[must_use]
    pub fn primary(&self) -> Option<&BrandConfig> {
        self.brands.iter().find(|b| b.role == Role::Primary)
    }
}

/// Load and validate the brand roster from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation (empty/duplicate names, duplicate slugs, not exactly one
/// primary brand).
pub fn load_brands(path: &Path) -> Result<BrandsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BrandsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let brands_file: BrandsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::BrandsFileParse)?;

    validate_brands(&brands_file)?;

    Ok(brands_file)
}

fn validate_brands(brands_file: &BrandsFile) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();
    let mut seen_slugs = HashSet::new();
    let mut primary_count = 0usize;

    for brand in &brands_file.brands {
        if brand.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "brand name must be non-empty".to_string(),
            ));
        }

        if brand.role == Role::Primary {
            primary_count += 1;
        }

        let lower_name = brand.name.to_lowercase();
        if !seen_names.insert(lower_name) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand name: '{}'",
                brand.name
            )));
        }

        let slug = brand.slug();
        if !seen_slugs.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand slug: '{}' (from brand '{}')",
                slug, brand.name
            )));
        }
    }

    if primary_count != 1 {
        return Err(ConfigError::Validation(format!(
            "roster must designate exactly one primary brand, found {primary_count}"
        )));
    }

    Ok(())
}

/// Resolve the plot order for a chart: the primary brand first, then the
/// remaining selected brands in roster order.
///
/// `selected` filters by slug; an empty selection means all brands. Slugs
/// that match no roster entry are ignored.
#[must_use]
pub fn plot_order<'a>(brands: &'a [BrandConfig], selected: &[String]) -> Vec<&'a BrandConfig> {
    let wanted = |b: &BrandConfig| selected.is_empty() || selected.iter().any(|s| *s == b.slug());

    let mut ordered: Vec<&BrandConfig> = brands
        .iter()
        .filter(|b| b.role == Role::Primary && wanted(b))
        .collect();
    ordered.extend(
        brands
            .iter()
            .filter(|b| b.role != Role::Primary && wanted(b)),
    );
    ordered
}
