use skywatch_coords::{
    angular_separation_deg, equatorial_to_horizontal, equatorial_to_horizontal_batch,
    horizontal_to_equatorial, project_fisheye, EquatorialCoordinate, GeographicObserver,
    HorizontalCoordinate, Instant,
};
use skywatch_core::angle::wrap_pm_180;

fn observers() -> Vec<GeographicObserver> {
    [
        (51.4769, 0.0),
        (-33.8688, 151.2093),
        (19.8283, -155.4783),
        (64.1466, -21.9426),
        (0.0, 36.8),
        (-75.0, 123.0),
        (89.0, 45.0),
    ]
    .iter()
    .map(|&(lat, lon)| GeographicObserver::new(lat, lon, 0.0).unwrap())
    .collect()
}

fn instants() -> Vec<Instant> {
    vec![
        Instant::from_calendar(1901, 3, 5, 4, 0, 0.0).unwrap(),
        Instant::j2000(),
        Instant::from_calendar(2024, 12, 31, 23, 59, 59.999).unwrap(),
        Instant::from_calendar(2099, 7, 4, 12, 30, 0.0).unwrap(),
    ]
}

#[test]
fn horizontal_round_trip_within_micro_degree() {
    for observer in observers() {
        for instant in instants() {
            for ra in (0..360).step_by(23) {
                for dec in (-85..=85).step_by(17) {
                    let eq = EquatorialCoordinate::new(ra as f64 + 0.123, dec as f64).unwrap();
                    let hor = equatorial_to_horizontal(&eq, &observer, &instant);
                    let back = horizontal_to_equatorial(&hor, &observer, &instant);

                    let dra = wrap_pm_180(back.ra_deg() - eq.ra_deg()) * eq.dec_deg().to_radians().cos();
                    let ddec = back.dec_deg() - eq.dec_deg();
                    assert!(
                        dra.abs() < 1e-6 && ddec.abs() < 1e-6,
                        "{} {} {}: dra {} ddec {}",
                        observer,
                        instant,
                        eq,
                        dra,
                        ddec
                    );
                }
            }
        }
    }
}

#[test]
fn altitude_and_azimuth_stay_in_range() {
    for observer in observers() {
        for instant in instants() {
            for ra in (0..360).step_by(10) {
                for dec in (-90..=90).step_by(10) {
                    let eq = EquatorialCoordinate::new(ra as f64, dec as f64).unwrap();
                    let hor = equatorial_to_horizontal(&eq, &observer, &instant);
                    assert!((-90.0..=90.0).contains(&hor.altitude_deg()));
                    assert!((0.0..360.0).contains(&hor.azimuth_deg()));
                }
            }
        }
    }
}

#[test]
fn transforms_preserve_separation() {
    let observer = GeographicObserver::new(-29.2563, -70.738, 2400.0).unwrap();
    let instant = Instant::from_calendar(2023, 5, 10, 2, 0, 0.0).unwrap();
    let a = EquatorialCoordinate::new(186.65, -63.1).unwrap();
    let b = EquatorialCoordinate::new(201.3, -11.16).unwrap();

    let sep_eq = angular_separation_deg(&a, &b);
    let sep_hor = angular_separation_deg(
        &equatorial_to_horizontal(&a, &observer, &instant),
        &equatorial_to_horizontal(&b, &observer, &instant),
    );
    assert!((sep_eq - sep_hor).abs() < 1e-9);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let observer = GeographicObserver::new(45.5, -73.6, 30.0).unwrap();
    let instant = Instant::from_unix_millis(1_718_000_000_000);
    let eq = EquatorialCoordinate::new(88.7929, 7.4071).unwrap();
    let center = HorizontalCoordinate::new(30.0, 120.0).unwrap();

    let first = equatorial_to_horizontal(&eq, &observer, &instant);
    let first_point = project_fisheye(&first, &center, 180.0).unwrap();
    for _ in 0..100 {
        let again = equatorial_to_horizontal(&eq, &observer, &instant);
        assert_eq!(again.altitude_deg().to_bits(), first.altitude_deg().to_bits());
        assert_eq!(again.azimuth_deg().to_bits(), first.azimuth_deg().to_bits());
        assert_eq!(project_fisheye(&again, &center, 180.0).unwrap(), first_point);
    }
}

#[test]
fn threads_agree_with_single_thread() {
    let observer = GeographicObserver::new(35.0, 139.7, 40.0).unwrap();
    let instant = Instant::from_calendar(2025, 1, 1, 12, 0, 0.0).unwrap();
    let catalog: Vec<EquatorialCoordinate> = (0..2000)
        .map(|i| {
            let ra = (i as f64 * 0.18) % 360.0;
            let dec = ((i * 37) % 181) as f64 - 90.0;
            EquatorialCoordinate::new(ra, dec).unwrap()
        })
        .collect();

    let reference = equatorial_to_horizontal_batch(&catalog, &observer, &instant);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| equatorial_to_horizontal_batch(&catalog, &observer, &instant)))
            .collect();
        for handle in handles {
            let result = handle.join().unwrap();
            assert_eq!(result.len(), reference.len());
            for (a, b) in result.iter().zip(&reference) {
                assert_eq!(a.altitude_deg().to_bits(), b.altitude_deg().to_bits());
                assert_eq!(a.azimuth_deg().to_bits(), b.azimuth_deg().to_bits());
            }
        }
    });
}
