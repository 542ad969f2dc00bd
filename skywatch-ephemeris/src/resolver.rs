//! Geocentric and topocentric positions from heliocentric vectors.
//!
//! Planetary ephemerides and satellite propagation are external concerns.
//! They plug in through [`EphemerisProvider`] and [`SatellitePropagator`];
//! this module only combines their vectors with the comet propagator and
//! turns the result into sky coordinates for an observer.

use crate::ecliptic::ecliptic_to_equatorial_j2000;
use crate::propagator::OrbitPropagator;
use crate::{OrbitError, OrbitResult, OrbitalElements};
use skywatch_coords::{
    equatorial_to_horizontal, horizontal_to_equatorial, EquatorialCoordinate,
    HorizontalCoordinate,
};
use skywatch_core::constants::{AU_KM, MILLIS_PER_DAY_F64, SPEED_OF_LIGHT_AU_PER_DAY};
use skywatch_core::{GeographicObserver, Vector3};
use skywatch_time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
        };
        f.write_str(name)
    }
}

/// Source of heliocentric positions for solar-system bodies.
pub trait EphemerisProvider {
    /// Heliocentric position of `body`, ecliptic J2000, AU.
    fn heliocentric_position(&self, body: Body, instant: &Instant) -> OrbitResult<Vector3>;
}

/// Observer position relative to the geocenter.
pub trait SiteVectorProvider {
    /// Geocentric position of the observer, equatorial J2000, AU.
    fn site_vector(&self, observer: &GeographicObserver, instant: &Instant)
        -> OrbitResult<Vector3>;
}

/// A two-line element set, passed through untouched to the propagator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tle {
    pub name: Option<String>,
    pub line1: String,
    pub line2: String,
}

/// Look angles for a satellite as seen by one observer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SatelliteLook {
    pub altitude_deg: f64,
    pub azimuth_deg: f64,
    pub range_km: f64,
}

/// SGP4-class satellite propagator.
pub trait SatellitePropagator {
    fn look_angles(
        &self,
        tle: &Tle,
        observer: &GeographicObserver,
        instant: &Instant,
    ) -> OrbitResult<SatelliteLook>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedPosition {
    pub equatorial: EquatorialCoordinate,
    pub horizontal: HorizontalCoordinate,
    /// Distance from the observer (or geocenter without a site vector), AU.
    pub distance_au: f64,
    /// `None` for satellites.
    pub heliocentric_distance_au: Option<f64>,
    /// Light travel time applied, days. Zero when correction is off.
    pub light_time_days: f64,
    /// Apparent total magnitude, for comets that carry magnitude parameters.
    pub magnitude: Option<f64>,
}

/// Light-time settings for [`GeocentricResolver`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LightTimeCorrection {
    pub enabled: bool,
    /// Stop once successive light-time estimates differ by less than this, days.
    pub tolerance_days: f64,
    pub max_iterations: u32,
}

impl Default for LightTimeCorrection {
    fn default() -> Self {
        Self {
            enabled: false,
            tolerance_days: 1e-9,
            max_iterations: 10,
        }
    }
}

impl LightTimeCorrection {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }
}

/// Combines an external Earth ephemeris with target positions to produce
/// observer-centered sky coordinates.
pub struct GeocentricResolver<'a, E: EphemerisProvider + ?Sized> {
    ephemeris: &'a E,
    site: Option<&'a dyn SiteVectorProvider>,
    propagator: OrbitPropagator,
    light_time: LightTimeCorrection,
}

impl<'a, E: EphemerisProvider + ?Sized> GeocentricResolver<'a, E> {
    pub fn new(ephemeris: &'a E) -> Self {
        Self {
            ephemeris,
            site: None,
            propagator: OrbitPropagator::default(),
            light_time: LightTimeCorrection::default(),
        }
    }

    pub fn with_site_provider(mut self, site: &'a dyn SiteVectorProvider) -> Self {
        self.site = Some(site);
        self
    }

    pub fn with_propagator(mut self, propagator: OrbitPropagator) -> Self {
        self.propagator = propagator;
        self
    }

    pub fn with_light_time(mut self, light_time: LightTimeCorrection) -> Self {
        self.light_time = light_time;
        self
    }

    pub fn resolve_comet(
        &self,
        elements: &OrbitalElements,
        observer: &GeographicObserver,
        instant: &Instant,
    ) -> OrbitResult<ResolvedPosition> {
        let mut resolved = self.resolve_with(observer, instant, |t| {
            self.propagator.position_at(elements, t)
        })?;

        if let (Some(mag), Some(r)) = (&elements.magnitude, resolved.heliocentric_distance_au) {
            resolved.magnitude = Some(mag.apparent_magnitude(r, resolved.distance_au)?);
        }
        Ok(resolved)
    }

    pub fn resolve_body(
        &self,
        body: Body,
        observer: &GeographicObserver,
        instant: &Instant,
    ) -> OrbitResult<ResolvedPosition> {
        if body == Body::Earth {
            return Err(OrbitError::ephemeris(
                "Earth has no geocentric direction",
            ));
        }
        self.resolve_with(observer, instant, |t| {
            self.ephemeris.heliocentric_position(body, t)
        })
    }

    /// Resolves a target given by a heliocentric ecliptic position function.
    fn resolve_with<F>(
        &self,
        observer: &GeographicObserver,
        instant: &Instant,
        target_at: F,
    ) -> OrbitResult<ResolvedPosition>
    where
        F: Fn(&Instant) -> OrbitResult<Vector3>,
    {
        let earth = self.ephemeris.heliocentric_position(Body::Earth, instant)?;
        let site = match self.site {
            Some(provider) => provider.site_vector(observer, instant)?,
            None => Vector3::zeros(),
        };

        let observer_equatorial = |target: Vector3| ecliptic_to_equatorial_j2000(&(target - earth)) - site;

        let mut target = target_at(instant)?;
        let mut relative = observer_equatorial(target);
        let mut light_time = 0.0;

        if self.light_time.enabled {
            for iteration in 1..=self.light_time.max_iterations {
                let tau = relative.magnitude() / SPEED_OF_LIGHT_AU_PER_DAY;
                let emitted = instant.add_millis(-(tau * MILLIS_PER_DAY_F64).round() as i64);
                target = target_at(&emitted)?;
                relative = observer_equatorial(target);

                let change = (tau - light_time).abs();
                light_time = tau;
                tracing::trace!(iteration, light_time_days = tau, change, "light-time iteration");
                if change < self.light_time.tolerance_days {
                    break;
                }
            }
        }

        let distance_au = relative.magnitude();
        let equatorial = EquatorialCoordinate::from_vector(&relative)?;
        let horizontal = equatorial_to_horizontal(&equatorial, observer, instant);

        Ok(ResolvedPosition {
            equatorial,
            horizontal,
            distance_au,
            heliocentric_distance_au: Some(target.magnitude()),
            light_time_days: light_time,
            magnitude: None,
        })
    }
}

/// Wraps an external satellite propagator's look angles in a [`ResolvedPosition`].
pub fn resolve_satellite<S: SatellitePropagator + ?Sized>(
    propagator: &S,
    tle: &Tle,
    observer: &GeographicObserver,
    instant: &Instant,
) -> OrbitResult<ResolvedPosition> {
    let look = propagator.look_angles(tle, observer, instant)?;
    if !look.range_km.is_finite() || look.range_km <= 0.0 {
        return Err(OrbitError::ephemeris(format!(
            "satellite range {} km must be positive",
            look.range_km
        )));
    }

    let horizontal = HorizontalCoordinate::new(look.altitude_deg, look.azimuth_deg)?;
    let equatorial = horizontal_to_equatorial(&horizontal, observer, instant);

    Ok(ResolvedPosition {
        equatorial,
        horizontal,
        distance_au: look.range_km / AU_KM,
        heliocentric_distance_au: None,
        light_time_days: 0.0,
        magnitude: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CometMagnitude;
    use approx::assert_abs_diff_eq;
    use skywatch_coords::angular_separation_deg;

    /// Earth on a circular 1 AU orbit, starting on +X at J2000; planets fixed.
    struct CircularEarth;

    impl EphemerisProvider for CircularEarth {
        fn heliocentric_position(&self, body: Body, instant: &Instant) -> OrbitResult<Vector3> {
            match body {
                Body::Sun => Ok(Vector3::zeros()),
                Body::Earth => {
                    let days = instant.days_since(&Instant::j2000());
                    let angle = days * 0.017_202_098_95;
                    Ok(Vector3::new(angle.cos(), angle.sin(), 0.0))
                }
                Body::Jupiter => Ok(Vector3::new(-5.2, 0.0, 0.0)),
                other => Err(OrbitError::ephemeris(format!("{} not available", other))),
            }
        }
    }

    struct FixedLook(SatelliteLook);

    impl SatellitePropagator for FixedLook {
        fn look_angles(
            &self,
            _tle: &Tle,
            _observer: &GeographicObserver,
            _instant: &Instant,
        ) -> OrbitResult<SatelliteLook> {
            Ok(self.0)
        }
    }

    fn observer() -> GeographicObserver {
        GeographicObserver::new(40.0, -105.0, 1600.0).unwrap()
    }

    #[test]
    fn test_sun_is_opposite_earth() {
        let resolver = GeocentricResolver::new(&CircularEarth);
        let sun = resolver
            .resolve_body(Body::Sun, &observer(), &Instant::j2000())
            .unwrap();
        // Earth on +X means the Sun is seen toward RA 180°
        assert_abs_diff_eq!(sun.equatorial.ra_deg(), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(sun.equatorial.dec_deg(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(sun.distance_au, 1.0, epsilon = 1e-12);
        assert_eq!(sun.heliocentric_distance_au, Some(0.0));
    }

    #[test]
    fn test_provider_errors_propagate() {
        let resolver = GeocentricResolver::new(&CircularEarth);
        assert!(matches!(
            resolver.resolve_body(Body::Mars, &observer(), &Instant::j2000()),
            Err(OrbitError::Ephemeris { .. })
        ));
        assert!(resolver
            .resolve_body(Body::Earth, &observer(), &Instant::j2000())
            .is_err());
    }

    #[test]
    fn test_comet_with_magnitude() {
        let elements = OrbitalElements::new(1.2, 0.7, 40.0, 80.0, 25.0, Instant::j2000())
            .unwrap()
            .with_magnitude(CometMagnitude::new(6.0, 4.0).unwrap());
        let t = Instant::j2000().add_days(20.0).unwrap();
        let resolver = GeocentricResolver::new(&CircularEarth);
        let resolved = resolver.resolve_comet(&elements, &observer(), &t).unwrap();

        let r = resolved.heliocentric_distance_au.unwrap();
        let expected = 6.0 + 5.0 * resolved.distance_au.log10() + 10.0 * r.log10();
        assert_abs_diff_eq!(resolved.magnitude.unwrap(), expected, epsilon = 1e-12);
        assert!(r > 1.2);
    }

    #[test]
    fn test_light_time_correction() {
        let elements = OrbitalElements::new(1.2, 0.7, 40.0, 80.0, 25.0, Instant::j2000()).unwrap();
        let t = Instant::j2000().add_days(20.0).unwrap();

        let plain = GeocentricResolver::new(&CircularEarth)
            .resolve_comet(&elements, &observer(), &t)
            .unwrap();
        let corrected = GeocentricResolver::new(&CircularEarth)
            .with_light_time(LightTimeCorrection::enabled())
            .resolve_comet(&elements, &observer(), &t)
            .unwrap();

        assert_eq!(plain.light_time_days, 0.0);
        assert_abs_diff_eq!(
            corrected.light_time_days,
            corrected.distance_au / SPEED_OF_LIGHT_AU_PER_DAY,
            epsilon = 1e-7
        );
        // A comet moves well under a degree during a few minutes of light time
        let shift = angular_separation_deg(&plain.equatorial, &corrected.equatorial);
        assert!(shift > 0.0 && shift < 0.1);
    }

    #[test]
    fn test_site_vector_shifts_distance() {
        struct OffsetSite;
        impl SiteVectorProvider for OffsetSite {
            fn site_vector(
                &self,
                _observer: &GeographicObserver,
                _instant: &Instant,
            ) -> OrbitResult<Vector3> {
                Ok(Vector3::new(-1.0e-3, 0.0, 0.0))
            }
        }

        let resolver = GeocentricResolver::new(&CircularEarth).with_site_provider(&OffsetSite);
        let sun = resolver
            .resolve_body(Body::Sun, &observer(), &Instant::j2000())
            .unwrap();
        assert_abs_diff_eq!(sun.distance_au, 1.0 - 1.0e-3, epsilon = 1e-12);
    }

    #[test]
    fn test_satellite() {
        let look = SatelliteLook {
            altitude_deg: 35.0,
            azimuth_deg: 210.0,
            range_km: 1200.0,
        };
        let tle = Tle {
            name: Some("ISS (ZARYA)".into()),
            line1: String::new(),
            line2: String::new(),
        };
        let resolved = resolve_satellite(&FixedLook(look), &tle, &observer(), &Instant::j2000()).unwrap();
        assert_eq!(resolved.horizontal.altitude_deg(), 35.0);
        assert_abs_diff_eq!(resolved.distance_au * AU_KM, 1200.0, epsilon = 1e-6);
        assert_eq!(resolved.heliocentric_distance_au, None);

        let round = equatorial_to_horizontal(&resolved.equatorial, &observer(), &Instant::j2000());
        assert!(angular_separation_deg(&round, &resolved.horizontal) < 1e-6);

        let bad = SatelliteLook { altitude_deg: 95.0, ..look };
        assert!(resolve_satellite(&FixedLook(bad), &tle, &observer(), &Instant::j2000()).is_err());
    }
}
