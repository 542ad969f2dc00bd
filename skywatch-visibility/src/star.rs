//! Point-source visibility.

use crate::extinction::extinction_delta_magnitude;
use crate::{SkyConditions, VisibilityConfig, VisibilityError, VisibilityInputs, VisibilityResult};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StarVisibility {
    pub visible: bool,
    /// Catalog magnitude plus extinction.
    pub effective_magnitude: f64,
    pub limiting_magnitude: f64,
    /// Fade weight in [0, 1] for rendering. Independent of `visible`.
    pub alpha: f64,
}

/// One catalog star as seen at the current instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StarTarget {
    pub magnitude: f64,
    pub altitude_deg: f64,
}

/// Stock-config [`VisibilityConfig::evaluate_star`].
pub fn evaluate_star_visibility(
    star_magnitude: f64,
    inputs: &VisibilityInputs,
) -> VisibilityResult<StarVisibility> {
    VisibilityConfig::default().evaluate_star(star_magnitude, inputs)
}

/// Stock-config [`VisibilityConfig::evaluate_star_batch`].
pub fn evaluate_star_batch(
    stars: &[StarTarget],
    sky: &SkyConditions,
) -> Vec<VisibilityResult<StarVisibility>> {
    VisibilityConfig::default().evaluate_star_batch(stars, sky)
}

impl VisibilityConfig {
    /// A star is visible when `magnitude + extinction ≤ limit + star_margin_mag`.
    ///
    /// # Errors
    ///
    /// [`VisibilityError::InvalidConfig`] if `self` fails
    /// [`validate`](Self::validate), [`VisibilityError::InvalidInput`] for a
    /// non-finite magnitude.
    pub fn evaluate_star(
        &self,
        star_magnitude: f64,
        inputs: &VisibilityInputs,
    ) -> VisibilityResult<StarVisibility> {
        self.validate()?;
        self.score_star(star_magnitude, inputs)
    }

    fn score_star(
        &self,
        star_magnitude: f64,
        inputs: &VisibilityInputs,
    ) -> VisibilityResult<StarVisibility> {
        if !star_magnitude.is_finite() {
            return Err(VisibilityError::invalid_input(format!(
                "star magnitude {} is not finite",
                star_magnitude
            )));
        }
        let sky = inputs.sky();

        let effective_magnitude = star_magnitude
            + extinction_delta_magnitude(inputs.target_altitude_deg(), self.extinction_mag_per_airmass);
        let limiting_magnitude = self.limiting_magnitude(sky);

        Ok(StarVisibility {
            visible: effective_magnitude <= limiting_magnitude + self.star_margin_mag,
            effective_magnitude,
            limiting_magnitude,
            alpha: self.sky_fade(sky),
        })
    }

    /// Evaluates many stars under one sky. Results keep input order; a bad
    /// record fails on its own without affecting the others. An invalid
    /// configuration fails every record.
    pub fn evaluate_star_batch(
        &self,
        stars: &[StarTarget],
        sky: &SkyConditions,
    ) -> Vec<VisibilityResult<StarVisibility>> {
        tracing::debug!(count = stars.len(), "star visibility batch");

        if let Err(err) = self.validate() {
            tracing::warn!(error = %err, "rejecting star batch");
            return stars.iter().map(|_| Err(err.clone())).collect();
        }

        let evaluate = |star: &StarTarget| -> VisibilityResult<StarVisibility> {
            let inputs = sky.for_target(star.altitude_deg)?;
            self.score_star(star.magnitude, &inputs)
        };

        #[cfg(feature = "parallel")]
        {
            stars.par_iter().map(evaluate).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            stars.iter().map(evaluate).collect()
        }
    }
}
