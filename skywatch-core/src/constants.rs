pub const J2000_JD: f64 = 2451545.0;

/// Julian Date of 1970-01-01T00:00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2440587.5;

pub const MILLIS_PER_DAY: i64 = 86_400_000;

pub const MILLIS_PER_DAY_F64: f64 = 86_400_000.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

pub const ARCSEC_PER_ARCMIN: f64 = 60.0;

/// Gaussian gravitational constant, AU^1.5 / day.
pub const GAUSSIAN_GRAVITATIONAL_CONSTANT: f64 = 0.01720209895;

/// Mean obliquity of the ecliptic at J2000.0 in degrees.
pub const J2000_OBLIQUITY_DEG: f64 = 23.439291111;

pub const J2000_OBLIQUITY_RAD: f64 = J2000_OBLIQUITY_DEG * DEG_TO_RAD;

/// Astronomical Unit in kilometers (derived from IAU 2012 definition)
pub const AU_KM: f64 = 149_597_870.7;

pub const SPEED_OF_LIGHT_AU_PER_DAY: f64 = 173.1446326846693;
