use crate::{CoordError, CoordResult, SkyDirection};
use skywatch_core::angle::wrap_0_360;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Altitude above the horizon and azimuth, both in degrees.
///
/// Azimuth is measured from north through east (N = 0°, E = 90°). A
/// horizontal position is always derived from an equatorial one for a given
/// observer and instant; it is never the stored source of truth.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalCoordinate {
    altitude_deg: f64,
    azimuth_deg: f64,
}

impl HorizontalCoordinate {
    /// Altitude must lie in [-90, 90]; azimuth is wrapped to [0, 360).
    pub fn new(altitude_deg: f64, azimuth_deg: f64) -> CoordResult<Self> {
        if !altitude_deg.is_finite() || !(-90.0..=90.0).contains(&altitude_deg) {
            return Err(CoordError::invalid_coordinate(format!(
                "altitude {} outside [-90, 90]",
                altitude_deg
            )));
        }
        if !azimuth_deg.is_finite() {
            return Err(CoordError::invalid_coordinate(format!(
                "azimuth {} is not finite",
                azimuth_deg
            )));
        }

        Ok(Self {
            altitude_deg,
            azimuth_deg: wrap_0_360(azimuth_deg),
        })
    }

    /// Skips validation; callers guarantee finite values.
    pub(crate) fn from_trusted(altitude_deg: f64, azimuth_deg: f64) -> Self {
        Self {
            altitude_deg: altitude_deg.clamp(-90.0, 90.0),
            azimuth_deg: wrap_0_360(azimuth_deg),
        }
    }

    #[inline]
    pub fn altitude_deg(&self) -> f64 {
        self.altitude_deg
    }

    #[inline]
    pub fn azimuth_deg(&self) -> f64 {
        self.azimuth_deg
    }

    pub fn zenith_angle_deg(&self) -> f64 {
        90.0 - self.altitude_deg
    }

    pub fn is_above_horizon(&self) -> bool {
        self.altitude_deg > 0.0
    }

    /// Eight-point compass label for the azimuth.
    pub fn cardinal_direction(&self) -> &'static str {
        let az_deg = self.azimuth_deg;
        if !(22.5..337.5).contains(&az_deg) {
            "N"
        } else if az_deg < 67.5 {
            "NE"
        } else if az_deg < 112.5 {
            "E"
        } else if az_deg < 157.5 {
            "SE"
        } else if az_deg < 202.5 {
            "S"
        } else if az_deg < 247.5 {
            "SW"
        } else if az_deg < 292.5 {
            "W"
        } else {
            "NW"
        }
    }
}

impl SkyDirection for HorizontalCoordinate {
    fn longitude_deg(&self) -> f64 {
        self.azimuth_deg
    }

    fn latitude_deg(&self) -> f64 {
        self.altitude_deg
    }
}

impl std::fmt::Display for HorizontalCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Alt {:+.4}° Az {:.4}° ({})",
            self.altitude_deg,
            self.azimuth_deg,
            self.cardinal_direction()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let hor = HorizontalCoordinate::new(45.0, 180.0).unwrap();
        assert_eq!(hor.altitude_deg(), 45.0);
        assert_eq!(hor.azimuth_deg(), 180.0);
        assert_eq!(hor.zenith_angle_deg(), 45.0);
        assert!(hor.is_above_horizon());

        let wrapped = HorizontalCoordinate::new(-5.0, -90.0).unwrap();
        assert_eq!(wrapped.azimuth_deg(), 270.0);
        assert!(!wrapped.is_above_horizon());
    }

    #[test]
    fn test_validation() {
        assert!(HorizontalCoordinate::new(90.5, 0.0).is_err());
        assert!(HorizontalCoordinate::new(f64::NAN, 0.0).is_err());
        assert!(HorizontalCoordinate::new(10.0, f64::INFINITY).is_err());
        assert!(HorizontalCoordinate::new(-90.0, 720.0).is_ok());
    }

    #[test]
    fn test_cardinal_direction() {
        let cases = [
            (0.0, "N"),
            (359.0, "N"),
            (22.5, "NE"),
            (90.0, "E"),
            (135.0, "SE"),
            (180.0, "S"),
            (225.0, "SW"),
            (270.0, "W"),
            (315.0, "NW"),
            (337.5, "N"),
        ];
        for (az, expected) in cases {
            let hor = HorizontalCoordinate::new(10.0, az).unwrap();
            assert_eq!(hor.cardinal_direction(), expected, "azimuth {}", az);
        }
    }

    #[test]
    fn test_display() {
        let hor = HorizontalCoordinate::new(12.5, 91.0).unwrap();
        assert_eq!(hor.to_string(), "Alt +12.5000° Az 91.0000° (E)");
    }
}
