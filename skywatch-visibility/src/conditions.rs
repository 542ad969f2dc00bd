use crate::{VisibilityError, VisibilityResult};
use skywatch_core::angle::validate_range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

fn check_range(value: f64, min: f64, max: f64, name: &str) -> VisibilityResult<f64> {
    validate_range(value, min, max, "visibility inputs", name)
        .map_err(|e| VisibilityError::invalid_input(e.to_string()))
}

/// Observing conditions shared by every target at one instant and site.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SkyConditions {
    sun_altitude_deg: f64,
    moon_altitude_deg: f64,
    moon_illumination: f64,
    bortle_class: u8,
}

impl SkyConditions {
    /// `bortle_class` outside 1..=9 is accepted and clamped when the table
    /// is looked up.
    pub fn new(
        sun_altitude_deg: f64,
        moon_altitude_deg: f64,
        moon_illumination: f64,
        bortle_class: u8,
    ) -> VisibilityResult<Self> {
        Ok(Self {
            sun_altitude_deg: check_range(sun_altitude_deg, -90.0, 90.0, "sun altitude")?,
            moon_altitude_deg: check_range(moon_altitude_deg, -90.0, 90.0, "moon altitude")?,
            moon_illumination: check_range(moon_illumination, 0.0, 1.0, "moon illumination")?,
            bortle_class,
        })
    }

    pub fn sun_altitude_deg(&self) -> f64 {
        self.sun_altitude_deg
    }

    pub fn moon_altitude_deg(&self) -> f64 {
        self.moon_altitude_deg
    }

    /// Illuminated fraction of the Moon's disk, 0 (new) to 1 (full).
    pub fn moon_illumination(&self) -> f64 {
        self.moon_illumination
    }

    pub fn bortle_class(&self) -> u8 {
        self.bortle_class
    }

    pub fn for_target(&self, target_altitude_deg: f64) -> VisibilityResult<VisibilityInputs> {
        Ok(VisibilityInputs {
            sky: *self,
            target_altitude_deg: check_range(
                target_altitude_deg,
                -90.0,
                90.0,
                "target altitude",
            )?,
        })
    }
}

/// Everything the scoring functions need about one target.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct VisibilityInputs {
    sky: SkyConditions,
    target_altitude_deg: f64,
}

impl VisibilityInputs {
    pub fn new(
        sun_altitude_deg: f64,
        moon_altitude_deg: f64,
        moon_illumination: f64,
        bortle_class: u8,
        target_altitude_deg: f64,
    ) -> VisibilityResult<Self> {
        SkyConditions::new(sun_altitude_deg, moon_altitude_deg, moon_illumination, bortle_class)?
            .for_target(target_altitude_deg)
    }

    pub fn sky(&self) -> &SkyConditions {
        &self.sky
    }

    pub fn target_altitude_deg(&self) -> f64 {
        self.target_altitude_deg
    }
}

// Deserialization goes through the checked constructors.

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawSkyConditions {
    sun_altitude_deg: f64,
    moon_altitude_deg: f64,
    moon_illumination: f64,
    bortle_class: u8,
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for SkyConditions {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = RawSkyConditions::deserialize(d)?;
        Self::new(
            raw.sun_altitude_deg,
            raw.moon_altitude_deg,
            raw.moon_illumination,
            raw.bortle_class,
        )
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawVisibilityInputs {
    sky: SkyConditions,
    target_altitude_deg: f64,
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for VisibilityInputs {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = RawVisibilityInputs::deserialize(d)?;
        raw.sky
            .for_target(raw.target_altitude_deg)
            .map_err(serde::de::Error::custom)
    }
}
