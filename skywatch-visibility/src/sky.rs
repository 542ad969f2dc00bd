//! Sky darkness: twilight, moonlight and light pollution.
//!
//! These combine into the effective naked-eye limiting magnitude. The free
//! functions use the stock [`VisibilityConfig`]; the methods on the config
//! take tuned values.

use crate::{SkyConditions, VisibilityConfig, VisibilityInputs};

/// 0 with the Sun at or above -6° (civil twilight), 1 at or below -18°
/// (astronomical night), linear in between.
pub fn twilight_factor(sun_altitude_deg: f64) -> f64 {
    ((-sun_altitude_deg - 6.0) / 12.0).clamp(0.0, 1.0)
}

/// How much the Moon washes out the sky, 0 to 1.
///
/// Zero below -2° or at new Moon. Above that the Moon contributes 35% of its
/// illuminated fraction at the horizon rising to 100% at 20° altitude.
pub fn moon_wash_factor(moon_altitude_deg: f64, moon_illumination: f64) -> f64 {
    if moon_altitude_deg <= -2.0 || moon_illumination <= 0.0 {
        return 0.0;
    }
    let height = ((moon_altitude_deg + 2.0) / 22.0).clamp(0.0, 1.0);
    moon_illumination.min(1.0) * (0.35 + 0.65 * height)
}

/// Stock limiting magnitude for a Bortle class; out-of-range classes clamp
/// to 1 or 9.
pub fn bortle_limiting_magnitude(bortle_class: u8) -> f64 {
    VisibilityConfig::default().bortle_limiting_magnitude(bortle_class)
}

pub fn effective_limiting_magnitude(inputs: &VisibilityInputs) -> f64 {
    VisibilityConfig::default().limiting_magnitude(inputs.sky())
}

impl VisibilityConfig {
    pub fn bortle_limiting_magnitude(&self, bortle_class: u8) -> f64 {
        let index = usize::from(bortle_class.clamp(1, 9)) - 1;
        self.bortle_limiting_mag[index]
    }

    /// Effective limiting magnitude under `sky`.
    ///
    /// Blends from the twilight limit toward the Bortle limit as the sky
    /// darkens, subtracts up to `moon_limit_loss_mag` for moonlight, and
    /// clamps to `[min_limiting_mag, max_limiting_mag]`.
    pub fn limiting_magnitude(&self, sky: &SkyConditions) -> f64 {
        let twilight = twilight_factor(sky.sun_altitude_deg());
        let moon = moon_wash_factor(sky.moon_altitude_deg(), sky.moon_illumination());
        let dark = self.bortle_limiting_magnitude(sky.bortle_class());

        let base = self.twilight_limit_mag + twilight * (dark - self.twilight_limit_mag);
        (base - self.moon_limit_loss_mag * moon).clamp(self.min_limiting_mag, self.max_limiting_mag)
    }

    /// Presentation weight from sky darkness alone.
    pub(crate) fn sky_fade(&self, sky: &SkyConditions) -> f64 {
        let twilight = twilight_factor(sky.sun_altitude_deg());
        let moon = moon_wash_factor(sky.moon_altitude_deg(), sky.moon_illumination());
        twilight * (1.0 - self.moon_alpha_dimming * moon)
    }
}
