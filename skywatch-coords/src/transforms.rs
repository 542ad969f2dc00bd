//! Equatorial ↔ horizontal transforms for a ground observer.
//!
//! Both directions go through the same rotation about the observer's east
//! axis. With hour angle `H`, declination `δ` and latitude `φ`:
//!
//! ```text
//! x = -cos H · cos δ · sin φ + sin δ · cos φ     (toward north)
//! y = -sin H · cos δ                             (toward east)
//! z =  cos H · cos δ · cos φ + sin δ · sin φ     (toward zenith)
//! ```
//!
//! so `alt = asin(z)` and `az = atan2(y, x)`. The rotation is its own inverse
//! up to the sign of `y`, which is what [`horizontal_to_equatorial`] uses.
//!
//! No refraction, parallax, precession or nutation is applied.

use crate::{EquatorialCoordinate, HorizontalCoordinate};
use skywatch_core::angle::wrap_0_360;
use skywatch_core::constants::{DEG_TO_RAD, RAD_TO_DEG};
use skywatch_core::math::safe_asin;
use skywatch_core::GeographicObserver;
use skywatch_time::{Instant, SiderealTime};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Local hour angle `LST − RA` in (-180, 180]; positive west of the meridian.
pub fn hour_angle_deg(
    eq: &EquatorialCoordinate,
    observer: &GeographicObserver,
    instant: &Instant,
) -> f64 {
    SiderealTime::local(instant, observer).hour_angle_deg(eq.ra_deg())
}

/// Rotates `(a, b)` spherical angles (radians) between the hour-angle and
/// horizon frames. Returns `(atan2(y, x), asin(z))`.
#[inline]
fn rotate_about_east(angle: f64, lat2: f64, sin_lat: f64, cos_lat: f64) -> (f64, f64) {
    let (sin_a, cos_a) = libm::sincos(angle);
    let (sin_b, cos_b) = libm::sincos(lat2);

    let x = -cos_a * cos_b * sin_lat + sin_b * cos_lat;
    let y = -sin_a * cos_b;
    let z = cos_a * cos_b * cos_lat + sin_b * sin_lat;

    let r = x * x + y * y;
    let lon = if r != 0.0 { libm::atan2(y, x) } else { 0.0 };
    (lon, safe_asin(z))
}

/// Altitude/azimuth of a fixed sky direction for an observer at an instant.
///
/// Azimuth is measured from north through east and is 0 at the zenith and
/// nadir, where it is undefined.
pub fn equatorial_to_horizontal(
    eq: &EquatorialCoordinate,
    observer: &GeographicObserver,
    instant: &Instant,
) -> HorizontalCoordinate {
    let ha = hour_angle_deg(eq, observer, instant) * DEG_TO_RAD;
    let (sin_lat, cos_lat) = libm::sincos(observer.latitude_rad());

    let (az, alt) = rotate_about_east(ha, eq.dec_deg() * DEG_TO_RAD, sin_lat, cos_lat);
    HorizontalCoordinate::from_trusted(alt * RAD_TO_DEG, az * RAD_TO_DEG)
}

/// Inverse of [`equatorial_to_horizontal`].
///
/// Round trips agree to well under 1e-6° away from the observer's poles and
/// the zenith.
pub fn horizontal_to_equatorial(
    hor: &HorizontalCoordinate,
    observer: &GeographicObserver,
    instant: &Instant,
) -> EquatorialCoordinate {
    let (sin_lat, cos_lat) = libm::sincos(observer.latitude_rad());

    let (ha, dec) = rotate_about_east(
        hor.azimuth_deg() * DEG_TO_RAD,
        hor.altitude_deg() * DEG_TO_RAD,
        sin_lat,
        cos_lat,
    );

    let lst = SiderealTime::local(instant, observer).degrees();
    EquatorialCoordinate::from_trusted(wrap_0_360(lst - ha * RAD_TO_DEG), dec * RAD_TO_DEG)
}

/// Transforms a whole catalog for one observer and instant.
///
/// Output order matches input order. With the `parallel` feature the work is
/// spread over the rayon pool; results are bit-identical either way.
pub fn equatorial_to_horizontal_batch(
    coords: &[EquatorialCoordinate],
    observer: &GeographicObserver,
    instant: &Instant,
) -> Vec<HorizontalCoordinate> {
    tracing::debug!(count = coords.len(), "equatorial_to_horizontal batch");

    #[cfg(feature = "parallel")]
    {
        coords
            .par_iter()
            .map(|eq| equatorial_to_horizontal(eq, observer, instant))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        coords
            .iter()
            .map(|eq| equatorial_to_horizontal(eq, observer, instant))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn mauna_kea() -> GeographicObserver {
        GeographicObserver::new(19.8283, -155.4783, 4145.0).unwrap()
    }

    #[test]
    fn test_meridian_transit() {
        let observer = GeographicObserver::new(40.0, -75.0, 0.0).unwrap();
        let instant = Instant::from_calendar(2024, 1, 15, 3, 0, 0.0).unwrap();
        let lst = SiderealTime::local(&instant, &observer).degrees();

        // A star on the meridian south of the zenith
        let eq = EquatorialCoordinate::new(lst, 10.0).unwrap();
        assert_abs_diff_eq!(hour_angle_deg(&eq, &observer, &instant), 0.0, epsilon = 1e-9);
        let hor = equatorial_to_horizontal(&eq, &observer, &instant);
        assert_abs_diff_eq!(hor.altitude_deg(), 60.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hor.azimuth_deg(), 180.0, epsilon = 1e-9);

        // North of the zenith, azimuth 0
        let eq = EquatorialCoordinate::new(lst, 70.0).unwrap();
        let hor = equatorial_to_horizontal(&eq, &observer, &instant);
        assert_abs_diff_eq!(hor.altitude_deg(), 60.0, epsilon = 1e-9);
        assert!(hor.azimuth_deg() < 1e-9 || hor.azimuth_deg() > 360.0 - 1e-9);
    }

    #[test]
    fn test_rising_star_is_east() {
        let observer = GeographicObserver::new(35.0, 0.0, 0.0).unwrap();
        let instant = Instant::j2000();
        let lst = SiderealTime::local(&instant, &observer).degrees();

        // Hour angle -90° on the celestial equator: on the horizon due east
        let eq = EquatorialCoordinate::new(lst + 90.0, 0.0).unwrap();
        let hor = equatorial_to_horizontal(&eq, &observer, &instant);
        assert_abs_diff_eq!(hor.altitude_deg(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hor.azimuth_deg(), 90.0, epsilon = 1e-9);
        assert_eq!(hor.cardinal_direction(), "E");
    }

    #[test]
    fn test_celestial_pole_altitude_equals_latitude() {
        let observer = mauna_kea();
        let pole = EquatorialCoordinate::new(0.0, 90.0).unwrap();
        for hour in 0..24 {
            let instant = Instant::from_calendar(2023, 9, 1, hour, 0, 0.0).unwrap();
            let hor = equatorial_to_horizontal(&pole, &observer, &instant);
            assert_abs_diff_eq!(hor.altitude_deg(), observer.latitude_deg(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_vega_from_greenwich() {
        // Vega at 2000-01-01 21:00 UT from Greenwich, close to setting in the
        // north-west: alt ≈ 7.89°, az ≈ 327.26°
        let vega = EquatorialCoordinate::new(279.234_735, 38.783_689).unwrap();
        let instant = Instant::from_calendar(2000, 1, 1, 21, 0, 0.0).unwrap();
        let hor = equatorial_to_horizontal(&vega, &GeographicObserver::greenwich(), &instant);
        assert_abs_diff_eq!(hor.altitude_deg(), 7.893, epsilon = 0.01);
        assert_abs_diff_eq!(hor.azimuth_deg(), 327.264, epsilon = 0.01);
        assert_eq!(hor.cardinal_direction(), "NW");
    }

    #[test]
    fn test_round_trip() {
        let observer = mauna_kea();
        let instant = Instant::from_calendar(2024, 6, 21, 8, 15, 30.25).unwrap();
        for ra in (0..360).step_by(15) {
            for dec in (-80..=80).step_by(20) {
                let eq = EquatorialCoordinate::new(ra as f64 + 0.37, dec as f64 + 0.11).unwrap();
                let hor = equatorial_to_horizontal(&eq, &observer, &instant);
                let back = horizontal_to_equatorial(&hor, &observer, &instant);

                let dra = skywatch_core::angle::wrap_pm_180(back.ra_deg() - eq.ra_deg());
                assert!(dra.abs() < 1e-6, "ra {} dec {}: dra {}", ra, dec, dra);
                assert_abs_diff_eq!(back.dec_deg(), eq.dec_deg(), epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_batch_matches_single() {
        let observer = mauna_kea();
        let instant = Instant::from_unix_millis(1_700_000_000_000);
        let catalog: Vec<_> = (0..100)
            .map(|i| EquatorialCoordinate::new(i as f64 * 3.6, (i as f64 * 1.7) - 85.0).unwrap())
            .collect();

        let batch = equatorial_to_horizontal_batch(&catalog, &observer, &instant);
        assert_eq!(batch.len(), catalog.len());
        for (eq, hor) in catalog.iter().zip(&batch) {
            let single = equatorial_to_horizontal(eq, &observer, &instant);
            assert_eq!(single.altitude_deg().to_bits(), hor.altitude_deg().to_bits());
            assert_eq!(single.azimuth_deg().to_bits(), hor.azimuth_deg().to_bits());
        }
    }
}
