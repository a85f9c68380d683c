//! Bundled per-tier Helm values presets, embedded at compile time.

use include_dir::{Dir, include_dir};

use crate::domain::{AppError, Tier};

static VALUES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/values");

/// Fetch the Helm values preset for a validated tier.
///
/// The tier set and the bundled asset set are expected to cover each other;
/// a miss is a packaging defect surfaced as [`AppError::PresetNotFound`].
pub fn tier_values(tier: Tier) -> Result<&'static str, AppError> {
    let filename = tier.values_filename();
    VALUES_DIR
        .get_file(&filename)
        .and_then(|file| file.contents_utf8())
        .ok_or(AppError::PresetNotFound(filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tier_has_a_bundled_preset() {
        for tier in Tier::ALL {
            let values = tier_values(tier).unwrap();
            assert!(!values.is_empty(), "Preset for {:?} should not be empty", tier);
        }
    }

    #[test]
    fn presets_are_valid_yaml_without_a_datadog_key() {
        // Top-level `datadog:` in a preset would collide with the rendered
        // values block in the HelmRelease document.
        for tier in Tier::ALL {
            let values = tier_values(tier).unwrap();
            let value: serde_yaml::Value = serde_yaml::from_str(values).unwrap();
            assert!(value.get("datadog").is_none(), "Preset for {:?} redefines datadog", tier);
        }
    }
}
