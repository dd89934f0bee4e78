//! Planetary positions

use std::fmt;
use std::os::raw::c_char;

use log::warn;
use serde::{Deserialize, Serialize};
use sweph_sys as ffi;

use crate::context::Ephemeris;
use crate::error::{message_from_buffer, Error, Result};
use crate::types::{Body, CalcFlags};

/// Output of `swe_calc_ut`
///
/// With `SEFLG_EQUATORIAL` the first two fields hold right ascension and
/// declination; with `SEFLG_XYZ` they are cartesian. Speeds are zero unless a
/// speed flag was given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub longitude: f64,
    pub latitude: f64,
    pub distance: f64,
    pub longitude_speed: f64,
    pub latitude_speed: f64,
    pub distance_speed: f64,
}

impl Position {
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.longitude,
            self.latitude,
            self.distance,
            self.longitude_speed,
            self.latitude_speed,
            self.distance_speed,
        ]
    }

    /// Sign, degree and minute of the longitude
    pub fn zodiac(&self) -> ZodiacPosition {
        ZodiacPosition::from_longitude(self.longitude)
    }
}

impl From<[f64; 6]> for Position {
    fn from(xx: [f64; 6]) -> Self {
        Self {
            longitude: xx[0],
            latitude: xx[1],
            distance: xx[2],
            longitude_speed: xx[3],
            latitude_speed: xx[4],
            distance_speed: xx[5],
        }
    }
}

pub const SIGNS: [&str; 12] = [
    "Ari", "Tau", "Gem", "Can", "Leo", "Vir", "Lib", "Sco", "Sag", "Cap", "Aqu", "Pis",
];

/// Ecliptic longitude split into zodiac sign, degree and minute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZodiacPosition {
    /// 0 = Aries .. 11 = Pisces
    pub sign: usize,
    pub degree: u32,
    /// Rounded; may be 60 when the longitude is within half a minute of the next degree
    pub minute: u32,
}

impl ZodiacPosition {
    pub fn from_longitude(longitude: f64) -> Self {
        let lon = longitude.rem_euclid(360.0);
        let sign = ((lon / 30.0).floor() as usize).min(11);
        let within = lon - sign as f64 * 30.0;
        let degree = within.floor();
        let minute = ((within - degree) * 60.0).round();
        Self {
            sign,
            degree: degree as u32,
            minute: minute as u32,
        }
    }

    pub fn sign_name(&self) -> &'static str {
        SIGNS[self.sign]
    }
}

impl fmt::Display for ZodiacPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}º {} {}", self.degree, self.sign_name(), self.minute)
    }
}

impl Ephemeris {
    /// Position of a body at a Julian day in UT
    ///
    /// Fails with [`Error::Native`] carrying the library message when
    /// `swe_calc_ut` reports an error. Note that the library may also fall back
    /// to another ephemeris silently; the returned flags are not inspected.
    pub fn calculate_position(&self, jd_ut: f64, body: Body, flags: CalcFlags) -> Result<Position> {
        let mut xx = [0.0f64; 6];
        let mut serr = [0 as c_char; ffi::AS_MAXCH];

        let ret = self.with_native(|| unsafe {
            ffi::swe_calc_ut(jd_ut, body.value(), flags.value(), xx.as_mut_ptr(), serr.as_mut_ptr())
        });

        if ret < 0 {
            let err = Error::from_serr(&serr, "calculate_position", ret);
            warn!("swe_calc_ut(body={}, flags={}) failed: {}", body, flags, err);
            return Err(err);
        }
        Ok(Position::from(xx))
    }

    /// The library's name for a body ("Sun", "Ceres", asteroid names from seasnam.txt, ...)
    pub fn planet_name(&self, body: Body) -> String {
        let mut name = [0 as c_char; ffi::AS_MAXCH];
        self.with_native(|| unsafe { ffi::swe_get_planet_name(body.value(), name.as_mut_ptr()) });
        message_from_buffer(&name)
    }
}

/// Version string of the linked Swiss Ephemeris library
pub fn version() -> String {
    let mut buf = [0 as c_char; ffi::AS_MAXCH];
    crate::context::with_library(|| unsafe { ffi::swe_version(buf.as_mut_ptr()) });
    message_from_buffer(&buf)
}
