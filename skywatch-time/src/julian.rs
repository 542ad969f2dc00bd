use skywatch_core::constants::{J2000_JD, UNIX_EPOCH_JD};
use std::fmt;

/// A Julian Date split into two parts to keep sub-millisecond precision.
///
/// `jd1` usually holds the whole-day part (e.g. the JD of a UTC midnight) and
/// `jd2` the fraction of the day. Only the sum is meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn from_f64(jd: f64) -> Self {
        Self::new(jd, 0.0)
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn unix_epoch() -> Self {
        Self::new(UNIX_EPOCH_JD, 0.0)
    }

    pub fn jd1(&self) -> f64 {
        self.jd1
    }

    pub fn jd2(&self) -> f64 {
        self.jd2
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    /// Days since J2000.0, with the large offset removed before adding the fraction.
    pub fn days_since_j2000(&self) -> f64 {
        (self.jd1 - J2000_JD) + self.jd2
    }

    pub fn is_finite(&self) -> bool {
        self.jd1.is_finite() && self.jd2.is_finite()
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::from_f64(jd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_julian_date_creation() {
        let jd = JulianDate::new(J2000_JD, 0.5);
        assert_eq!(jd.jd1(), J2000_JD);
        assert_eq!(jd.jd2(), 0.5);
        assert_eq!(jd.to_f64(), 2451545.5);
    }

    #[test]
    fn test_epochs() {
        assert_eq!(JulianDate::j2000().to_f64(), J2000_JD);
        assert_eq!(JulianDate::unix_epoch().to_f64(), UNIX_EPOCH_JD);
        assert_eq!(JulianDate::j2000().days_since_j2000(), 0.0);
    }

    #[test]
    fn test_days_since_j2000() {
        let jd = JulianDate::new(UNIX_EPOCH_JD, 0.25);
        assert_eq!(jd.days_since_j2000(), -10957.25);
        // Offset removed before the fraction is added
        let jd = JulianDate::new(J2000_JD, 1e-9);
        assert_eq!(jd.days_since_j2000(), 1e-9);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let original = JulianDate::new(2451545.5, 0.123456789);
        let json = serde_json::to_string(&original).unwrap();
        let back: JulianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(original, back);
    }
}
