use meshview_scene::RgbColor;
use serde::{Deserialize, Serialize};

use crate::{ConversionParams, SettingsError};

/// Settings handed to the [`Importer`](crate::Importer) with every load.
///
/// ```
/// # use meshview_loader::ImportSettings;
/// # use meshview_scene::RgbColor;
/// let settings = ImportSettings::from_ron("(default_color: (r: 255, g: 0, b: 0))").unwrap();
/// assert_eq!(settings.default_color, RgbColor::new(255, 0, 0));
/// assert_eq!(settings.default_line_color, ImportSettings::default().default_line_color);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Color of surfaces the model gives no material.
    pub default_color: RgbColor,
    /// Color of line geometry the model gives no material.
    pub default_line_color: RgbColor,
}

impl ImportSettings {
    /// Reads settings from RON. Missing fields keep their default value.
    pub fn from_ron(text: &str) -> Result<Self, SettingsError> {
        Ok(ron::from_str(text)?)
    }
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            default_color: RgbColor::new(200, 200, 200),
            default_line_color: RgbColor::new(100, 100, 100),
        }
    }
}

/// What the graphics driver reported about its shader float precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverCapabilities {
    /// Mantissa bits of a fragment shader's high precision float. Drivers that report `0` claim
    /// high precision support but do not deliver it.
    pub high_float_precision: u32,
}

impl DriverCapabilities {
    /// Returns `true` if high precision materials render incorrectly on this driver.
    pub fn has_highp_driver_issue(&self) -> bool {
        self.high_float_precision == 0
    }
}

impl Default for DriverCapabilities {
    fn default() -> Self {
        Self {
            high_float_precision: 23,
        }
    }
}

/// Settings fixed when a [`ModelLoader`](crate::ModelLoader) is created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelLoaderSettings {
    /// Capabilities of the driver the converted scene will be drawn with.
    pub driver: DriverCapabilities,
    /// If set, overrides the medium precision decision derived from [`Self::driver`].
    pub force_mediump_for_materials: Option<bool>,
}

impl ModelLoaderSettings {
    /// Reads settings from RON. Missing fields keep their default value.
    pub fn from_ron(text: &str) -> Result<Self, SettingsError> {
        Ok(ron::from_str(text)?)
    }

    /// Returns the parameters every conversion of this loader runs with.
    pub fn conversion_params(&self) -> ConversionParams {
        ConversionParams {
            force_mediump_for_materials: self
                .force_mediump_for_materials
                .unwrap_or_else(|| self.driver.has_highp_driver_issue()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_issue_forces_medium_precision() {
        let settings = ModelLoaderSettings {
            driver: DriverCapabilities {
                high_float_precision: 0,
            },
            ..Default::default()
        };
        assert!(settings.conversion_params().force_mediump_for_materials);
        assert!(
            !ModelLoaderSettings::default()
                .conversion_params()
                .force_mediump_for_materials
        );
    }

    #[test]
    fn explicit_override_wins() {
        let settings = ModelLoaderSettings::from_ron(
            "(driver: (high_float_precision: 0), force_mediump_for_materials: Some(false))",
        )
        .unwrap();
        assert!(!settings.conversion_params().force_mediump_for_materials);
    }

    #[test]
    fn empty_ron_gives_defaults() {
        assert_eq!(
            ModelLoaderSettings::from_ron("()").unwrap(),
            ModelLoaderSettings::default()
        );
        assert_eq!(
            ImportSettings::from_ron("()").unwrap(),
            ImportSettings::default()
        );
    }

    #[test]
    fn malformed_ron_is_an_error() {
        assert!(matches!(
            ImportSettings::from_ron("(default_color: 12"),
            Err(SettingsError::Ron(_))
        ));
    }
}
