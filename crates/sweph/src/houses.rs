//! House cusps and house positions

use std::os::raw::c_char;

use log::warn;
use serde::{Deserialize, Serialize};
use sweph_sys as ffi;

use crate::context::Ephemeris;
use crate::error::{message_from_buffer, Error, Result};
use crate::types::{CalcFlags, HouseSystem};

/// Cusps and angles returned by `swe_houses`
///
/// `cusps[0]` is unused by the library and always 0; `cusps[1..=12]` are the
/// twelve cusps (36 Gauquelin sectors for system 'G').
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    pub cusps: Vec<f64>,
    pub ascmc: [f64; ffi::SE_NUM_ASCMC],
}

impl HouseCusps {
    fn from_buffers(system: HouseSystem, cusps: &[f64], ascmc: [f64; ffi::SE_NUM_ASCMC]) -> Self {
        Self {
            cusps: cusps[..system.cusp_count()].to_vec(),
            ascmc,
        }
    }

    /// Cusp `n`, counting from 1
    pub fn cusp(&self, n: usize) -> Option<f64> {
        if n == 0 {
            return None;
        }
        self.cusps.get(n).copied()
    }

    pub fn ascendant(&self) -> f64 {
        self.ascmc[0]
    }

    /// Midheaven
    pub fn mc(&self) -> f64 {
        self.ascmc[1]
    }

    pub fn armc(&self) -> f64 {
        self.ascmc[2]
    }

    pub fn vertex(&self) -> f64 {
        self.ascmc[3]
    }

    pub fn equatorial_ascendant(&self) -> f64 {
        self.ascmc[4]
    }

    /// Co-ascendant (W. Koch)
    pub fn co_ascendant_koch(&self) -> f64 {
        self.ascmc[5]
    }

    /// Co-ascendant (M. Munkasey)
    pub fn co_ascendant_munkasey(&self) -> f64 {
        self.ascmc[6]
    }

    /// Polar ascendant (M. Munkasey)
    pub fn polar_ascendant(&self) -> f64 {
        self.ascmc[7]
    }
}

/// Output of `swe_houses_ex2`: positions plus their daily speeds, in the same layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCuspsWithSpeed {
    pub positions: HouseCusps,
    pub speeds: HouseCusps,
}

impl Ephemeris {
    /// House cusps and angles for a Julian day (UT) and geographic location
    pub fn houses(
        &self,
        jd_ut: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps> {
        // Sized for Gauquelin sectors regardless of the requested system
        let mut cusps = [0.0f64; ffi::SE_NUM_CUSPS_GAUQUELIN];
        let mut ascmc = [0.0f64; ffi::SE_NUM_ASCMC];

        let ret = self.with_native(|| unsafe {
            ffi::swe_houses(
                jd_ut,
                latitude,
                longitude,
                system.0 as i32,
                cusps.as_mut_ptr(),
                ascmc.as_mut_ptr(),
            )
        });

        if ret < 0 {
            // swe_houses has no error buffer
            let err = Error::from_serr(&[], "compute_houses", ret);
            warn!("swe_houses(system={}) failed: {}", system, err);
            return Err(err);
        }
        Ok(HouseCusps::from_buffers(system, &cusps, ascmc))
    }

    /// House cusps, angles and their speeds; `flags` may carry
    /// `SEFLG_SIDEREAL`, `SEFLG_RADIANS` or `SEFLG_NONUT`
    pub fn houses_extended(
        &self,
        jd_ut: f64,
        flags: CalcFlags,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseCuspsWithSpeed> {
        let mut cusps = [0.0f64; ffi::SE_NUM_CUSPS_GAUQUELIN];
        let mut ascmc = [0.0f64; ffi::SE_NUM_ASCMC];
        let mut cusp_speed = [0.0f64; ffi::SE_NUM_CUSPS_GAUQUELIN];
        let mut ascmc_speed = [0.0f64; ffi::SE_NUM_ASCMC];
        let mut serr = [0 as c_char; ffi::AS_MAXCH];

        let ret = self.with_native(|| unsafe {
            ffi::swe_houses_ex2(
                jd_ut,
                flags.value(),
                latitude,
                longitude,
                system.0 as i32,
                cusps.as_mut_ptr(),
                ascmc.as_mut_ptr(),
                cusp_speed.as_mut_ptr(),
                ascmc_speed.as_mut_ptr(),
                serr.as_mut_ptr(),
            )
        });

        if ret < 0 {
            let err = Error::from_serr(&serr, "compute_houses_extended", ret);
            warn!("swe_houses_ex2(system={}, flags={}) failed: {}", system, flags, err);
            return Err(err);
        }
        Ok(HouseCuspsWithSpeed {
            positions: HouseCusps::from_buffers(system, &cusps, ascmc),
            speeds: HouseCusps::from_buffers(system, &cusp_speed, ascmc_speed),
        })
    }

    /// House position (1.0 ..< 13.0, or ..< 37.0 for Gauquelin) of an ecliptic point
    ///
    /// The library signals failure by writing a message and returning 0, which is
    /// never a valid house position.
    pub fn house_position(
        &self,
        armc: f64,
        latitude: f64,
        obliquity: f64,
        system: HouseSystem,
        ecliptic_longitude: f64,
        ecliptic_latitude: f64,
    ) -> Result<f64> {
        let mut xpin = [ecliptic_longitude, ecliptic_latitude];
        let mut serr = [0 as c_char; ffi::AS_MAXCH];

        let hpos = self.with_native(|| unsafe {
            ffi::swe_house_pos(
                armc,
                latitude,
                obliquity,
                system.0 as i32,
                xpin.as_mut_ptr(),
                serr.as_mut_ptr(),
            )
        });

        if hpos <= 0.0 && !message_from_buffer(&serr).is_empty() {
            let err = Error::from_serr(&serr, "house_position", -1);
            warn!("swe_house_pos(system={}) failed: {}", system, err);
            return Err(err);
        }
        Ok(hpos)
    }
}
