//! Coordinate transforms

use serde::{Deserialize, Serialize};
use sweph_sys as ffi;

use crate::context::{with_library, Ephemeris};
use crate::types::{HorizonConversion, Observer};

/// Horizontal coordinates from `swe_azalt`, in degrees
///
/// Azimuth is measured from the south point, westward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Horizontal {
    pub azimuth: f64,
    pub true_altitude: f64,
    pub apparent_altitude: f64,
}

impl Horizontal {
    pub fn to_array(&self) -> [f64; 3] {
        [self.azimuth, self.true_altitude, self.apparent_altitude]
    }
}

/// Polar coordinate pair with an optional distance
///
/// A missing distance is sent to the library as 1.0 and left out of the result,
/// so the output carries a distance exactly when the input did.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalCoord {
    pub longitude: f64,
    pub latitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl SphericalCoord {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            distance: None,
        }
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Two or three components, mirroring whether a distance is present
    pub fn to_vec(&self) -> Vec<f64> {
        let mut out = vec![self.longitude, self.latitude];
        out.extend(self.distance);
        out
    }
}

/// Rotate a coordinate about the vernal-equinox axis by `obliquity` degrees
///
/// A positive obliquity converts equatorial to ecliptic coordinates; a negative
/// one converts ecliptic to equatorial.
pub fn coordinate_transform(obliquity: f64, coord: SphericalCoord) -> SphericalCoord {
    let xpo = [coord.longitude, coord.latitude, coord.distance.unwrap_or(1.0)];
    let mut xpn = [0.0f64; 3];
    with_library(|| unsafe { ffi::swe_cotrans(xpo.as_ptr(), xpn.as_mut_ptr(), obliquity) });
    SphericalCoord {
        longitude: xpn[0],
        latitude: xpn[1],
        distance: coord.distance.map(|_| xpn[2]),
    }
}

impl Ephemeris {
    /// Convert an ecliptic or equatorial position to azimuth and altitude
    ///
    /// `coordinates` is (longitude or RA, latitude or declination, distance);
    /// the distance is not used by the library. Never fails.
    pub fn azimuth_altitude(
        &self,
        jd_ut: f64,
        conversion: HorizonConversion,
        observer: &Observer,
        coordinates: [f64; 3],
    ) -> Horizontal {
        let mut geopos = observer.position.to_array();
        let mut xin = coordinates;
        let mut xaz = [0.0f64; 3];
        self.with_native(|| unsafe {
            ffi::swe_azalt(
                jd_ut,
                conversion.value(),
                geopos.as_mut_ptr(),
                observer.pressure,
                observer.temperature,
                xin.as_mut_ptr(),
                xaz.as_mut_ptr(),
            )
        });
        Horizontal {
            azimuth: xaz[0],
            true_altitude: xaz[1],
            apparent_altitude: xaz[2],
        }
    }
}
