//! Deep-sky object detectability.
//!
//! An extended object spreads its light over its disk, so it is judged by
//! surface brightness against the sky background rather than by total
//! magnitude alone. Treating the object as a uniform disk of diameter `d`
//! arcminutes:
//!
//! ```text
//! S = m + 2.5·log10(π·(30·d)²)          mag/arcsec²
//! ```
//!
//! The sky background is estimated from the effective limiting magnitude.
//! Four factors in [0, 1] are multiplied into a score:
//!
//! - contrast: how far `S` sits above (brighter than) the background
//! - brightness: whether the total light clears the limiting magnitude
//! - altitude: ramps from the horizon to `full_altitude_deg`
//! - sky: twilight and moonlight
//!
//! The object counts as detected at `score ≥ detection_threshold`. A star of
//! the same total magnitude is always at least as easy to see.

use crate::extinction::extinction_delta_magnitude;
use crate::{VisibilityConfig, VisibilityError, VisibilityInputs, VisibilityResult};
use libm::log10;
use skywatch_core::constants::{ARCSEC_PER_ARCMIN, PI};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeepSkyObject {
    /// Integrated visual magnitude.
    pub magnitude: f64,
    /// Major-axis diameter, arcminutes.
    pub angular_size_arcmin: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DsoVisibility {
    pub visible: bool,
    /// 0 below the detection threshold, ramping to 1 at a perfect score.
    pub alpha: f64,
    pub score: f64,
    /// Extincted surface brightness, mag/arcsec².
    pub surface_brightness: f64,
    /// Estimated sky background, mag/arcsec².
    pub sky_brightness: f64,
    pub limiting_magnitude: f64,
    pub contrast_factor: f64,
    pub brightness_factor: f64,
    pub altitude_factor: f64,
    pub sky_factor: f64,
}

/// Mean surface brightness of a uniform disk, mag/arcsec².
pub fn surface_brightness(magnitude: f64, diameter_arcmin: f64) -> f64 {
    let radius_arcsec = diameter_arcmin * ARCSEC_PER_ARCMIN / 2.0;
    magnitude + 2.5 * log10(PI * radius_arcsec * radius_arcsec)
}

/// Stock-config [`VisibilityConfig::evaluate_dso`].
pub fn evaluate_dso_detectability(
    object: &DeepSkyObject,
    inputs: &VisibilityInputs,
) -> VisibilityResult<DsoVisibility> {
    VisibilityConfig::default().evaluate_dso(object, inputs)
}

impl VisibilityConfig {
    /// # Errors
    ///
    /// [`VisibilityError::InvalidConfig`] if `self` fails
    /// [`validate`](Self::validate), [`VisibilityError::InvalidInput`] for a
    /// non-finite magnitude or a negative size.
    pub fn evaluate_dso(
        &self,
        object: &DeepSkyObject,
        inputs: &VisibilityInputs,
    ) -> VisibilityResult<DsoVisibility> {
        self.validate()?;
        if !object.magnitude.is_finite() {
            return Err(VisibilityError::invalid_input(format!(
                "object magnitude {} is not finite",
                object.magnitude
            )));
        }
        if !object.angular_size_arcmin.is_finite() || object.angular_size_arcmin < 0.0 {
            return Err(VisibilityError::invalid_input(format!(
                "angular size {} arcmin must be finite and non-negative",
                object.angular_size_arcmin
            )));
        }

        let dso = &self.dso;
        let sky = inputs.sky();
        let altitude = inputs.target_altitude_deg();

        let extinction = extinction_delta_magnitude(altitude, self.extinction_mag_per_airmass);
        let effective_magnitude = object.magnitude + extinction;
        let size = object.angular_size_arcmin.max(dso.min_size_arcmin);
        let surface = surface_brightness(effective_magnitude, size);

        let limiting_magnitude = self.limiting_magnitude(sky);
        let sky_brightness = (dso.sky_offset + dso.sky_slope * limiting_magnitude)
            .clamp(dso.sky_min, dso.sky_max);

        let contrast_factor = ((sky_brightness - surface + dso.contrast_offset_mag)
            / dso.contrast_window_mag)
            .clamp(0.0, 1.0);
        let brightness_factor = ((limiting_magnitude + dso.brightness_margin_mag
            - effective_magnitude)
            / dso.brightness_window_mag)
            .clamp(0.0, 1.0);
        let altitude_factor = (altitude / dso.full_altitude_deg).clamp(0.0, 1.0);
        let sky_factor = self.sky_fade(sky);

        let score = contrast_factor * brightness_factor * altitude_factor * sky_factor;
        let visible = score >= dso.detection_threshold;
        let alpha = if visible {
            ((score - dso.detection_threshold) / (1.0 - dso.detection_threshold)).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Ok(DsoVisibility {
            visible,
            alpha,
            score,
            surface_brightness: surface,
            sky_brightness,
            limiting_magnitude,
            contrast_factor,
            brightness_factor,
            altitude_factor,
            sky_factor,
        })
    }
}
