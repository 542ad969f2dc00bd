//! Tunable constants of the visibility model.
//!
//! The extinction coefficient, margins and the deep-sky contrast mapping are
//! empirical values picked for a natural-looking naked-eye sky, not quantities
//! taken from a photometric standard. They live here so a caller can
//! recalibrate them without touching the scoring code. `Default` carries the
//! stock values.

use crate::{VisibilityError, VisibilityResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Naked-eye limiting magnitude for Bortle classes 1 (darkest) through 9.
pub const BORTLE_LIMITING_MAGNITUDES: [f64; 9] = [8.0, 7.5, 7.0, 6.5, 6.0, 5.5, 5.0, 4.5, 4.1];

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisibilityConfig {
    /// Atmospheric extinction, magnitudes per airmass.
    pub extinction_mag_per_airmass: f64,
    /// A star counts as visible up to this far past the limiting magnitude.
    pub star_margin_mag: f64,
    /// Limiting magnitude with the Sun at or above civil twilight.
    pub twilight_limit_mag: f64,
    /// Limiting magnitude lost to a full Moon high in the sky.
    pub moon_limit_loss_mag: f64,
    /// Fraction of the fade weight a full, high Moon removes.
    pub moon_alpha_dimming: f64,
    pub min_limiting_mag: f64,
    pub max_limiting_mag: f64,
    pub bortle_limiting_mag: [f64; 9],
    pub dso: DsoConfig,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            extinction_mag_per_airmass: 0.20,
            star_margin_mag: 0.20,
            twilight_limit_mag: 2.5,
            moon_limit_loss_mag: 2.0,
            moon_alpha_dimming: 0.70,
            min_limiting_mag: -1.5,
            max_limiting_mag: 9.0,
            bortle_limiting_mag: BORTLE_LIMITING_MAGNITUDES,
            dso: DsoConfig::default(),
        }
    }
}

/// Deep-sky detectability constants.
///
/// Sky background in mag/arcsec² is estimated from the effective limiting
/// magnitude `L` as `sky_offset + sky_slope·L`, clamped to
/// `[sky_min, sky_max]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DsoConfig {
    pub sky_offset: f64,
    pub sky_slope: f64,
    pub sky_min: f64,
    pub sky_max: f64,
    /// How much fainter than the sky an object's surface may be and still
    /// register, mag/arcsec².
    pub contrast_offset_mag: f64,
    /// Width of the contrast ramp, mag/arcsec².
    pub contrast_window_mag: f64,
    pub brightness_margin_mag: f64,
    /// Width of the total-magnitude ramp, mag.
    pub brightness_window_mag: f64,
    /// Altitude at which the altitude factor reaches 1, degrees.
    pub full_altitude_deg: f64,
    /// Smallest angular diameter used for the surface-brightness estimate.
    pub min_size_arcmin: f64,
    pub detection_threshold: f64,
}

impl Default for DsoConfig {
    fn default() -> Self {
        Self {
            sky_offset: 13.0,
            sky_slope: 1.1,
            sky_min: 14.0,
            sky_max: 22.0,
            contrast_offset_mag: 4.5,
            contrast_window_mag: 5.0,
            brightness_margin_mag: 0.2,
            brightness_window_mag: 2.0,
            full_altitude_deg: 20.0,
            min_size_arcmin: 0.1,
            detection_threshold: 0.12,
        }
    }
}

fn check_finite(name: &str, value: f64) -> VisibilityResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(VisibilityError::invalid_config(format!(
            "{} is not finite ({})",
            name, value
        )))
    }
}

fn check_positive(name: &str, value: f64) -> VisibilityResult<()> {
    check_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(VisibilityError::invalid_config(format!(
            "{} must be positive ({})",
            name, value
        )))
    }
}

impl VisibilityConfig {
    /// Checks a hand-built or deserialized configuration.
    pub fn validate(&self) -> VisibilityResult<()> {
        check_finite("extinction_mag_per_airmass", self.extinction_mag_per_airmass)?;
        if self.extinction_mag_per_airmass < 0.0 {
            return Err(VisibilityError::invalid_config(
                "extinction coefficient must not be negative",
            ));
        }
        check_finite("star_margin_mag", self.star_margin_mag)?;
        check_finite("twilight_limit_mag", self.twilight_limit_mag)?;
        check_finite("moon_limit_loss_mag", self.moon_limit_loss_mag)?;
        if !(0.0..=1.0).contains(&self.moon_alpha_dimming) {
            return Err(VisibilityError::invalid_config(format!(
                "moon_alpha_dimming {} outside [0, 1]",
                self.moon_alpha_dimming
            )));
        }
        check_finite("min_limiting_mag", self.min_limiting_mag)?;
        check_finite("max_limiting_mag", self.max_limiting_mag)?;
        if self.min_limiting_mag > self.max_limiting_mag {
            return Err(VisibilityError::invalid_config(format!(
                "limiting magnitude range [{}, {}] is empty",
                self.min_limiting_mag, self.max_limiting_mag
            )));
        }
        for (i, &mag) in self.bortle_limiting_mag.iter().enumerate() {
            check_finite(&format!("bortle_limiting_mag[{}]", i), mag)?;
        }
        self.dso.validate()
    }
}

impl DsoConfig {
    pub fn validate(&self) -> VisibilityResult<()> {
        check_finite("sky_offset", self.sky_offset)?;
        check_finite("sky_slope", self.sky_slope)?;
        check_finite("sky_min", self.sky_min)?;
        check_finite("sky_max", self.sky_max)?;
        if self.sky_min > self.sky_max {
            return Err(VisibilityError::invalid_config(format!(
                "sky brightness range [{}, {}] is empty",
                self.sky_min, self.sky_max
            )));
        }
        check_finite("contrast_offset_mag", self.contrast_offset_mag)?;
        check_positive("contrast_window_mag", self.contrast_window_mag)?;
        check_finite("brightness_margin_mag", self.brightness_margin_mag)?;
        check_positive("brightness_window_mag", self.brightness_window_mag)?;
        check_positive("full_altitude_deg", self.full_altitude_deg)?;
        check_positive("min_size_arcmin", self.min_size_arcmin)?;
        if !(0.0..1.0).contains(&self.detection_threshold) {
            return Err(VisibilityError::invalid_config(format!(
                "detection_threshold {} outside [0, 1)",
                self.detection_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        VisibilityConfig::default().validate().unwrap();
        assert_eq!(VisibilityConfig::default().extinction_mag_per_airmass, 0.20);
        assert_eq!(DsoConfig::default().detection_threshold, 0.12);
    }

    #[test]
    fn test_bortle_table_darkens_monotonically() {
        for pair in BORTLE_LIMITING_MAGNITUDES.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn test_rejects_bad_values() {
        let config = VisibilityConfig {
            extinction_mag_per_airmass: -0.1,
            ..VisibilityConfig::default()
        };
        assert!(config.validate().is_err());

        let config = VisibilityConfig {
            moon_alpha_dimming: 1.5,
            ..VisibilityConfig::default()
        };
        assert!(config.validate().is_err());

        let mut config = VisibilityConfig::default();
        config.dso.contrast_window_mag = 0.0;
        assert!(matches!(
            config.validate(),
            Err(VisibilityError::InvalidConfig { .. })
        ));

        let mut config = VisibilityConfig::default();
        config.bortle_limiting_mag[4] = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_config_fills_defaults() {
        let config: VisibilityConfig =
            serde_json::from_str(r#"{"extinction_mag_per_airmass": 0.28, "dso": {"detection_threshold": 0.2}}"#)
                .unwrap();
        assert_eq!(config.extinction_mag_per_airmass, 0.28);
        assert_eq!(config.star_margin_mag, 0.20);
        assert_eq!(config.dso.detection_threshold, 0.2);
        assert_eq!(config.dso.sky_slope, 1.1);
    }
}
