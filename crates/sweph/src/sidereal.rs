//! Ayanamsha

use std::os::raw::c_char;

use log::warn;
use sweph_sys as ffi;

use crate::context::Ephemeris;
use crate::error::{Error, Result};
use crate::types::CalcFlags;

impl Ephemeris {
    /// Ayanamsha at a Julian day in UT for this context's sidereal mode
    ///
    /// Uses the library's default Delta T; it has no error channel.
    pub fn ayanamsha(&self, jd_ut: f64) -> f64 {
        self.with_native(|| unsafe { ffi::swe_get_ayanamsa_ut(jd_ut) })
    }

    /// Ayanamsha with a Delta T consistent with the ephemeris selected in `flags`
    pub fn ayanamsha_extended(&self, jd_ut: f64, flags: CalcFlags) -> Result<f64> {
        let mut daya = 0.0f64;
        let mut serr = [0 as c_char; ffi::AS_MAXCH];

        let ret = self.with_native(|| unsafe {
            ffi::swe_get_ayanamsa_ex_ut(jd_ut, flags.value(), &mut daya, serr.as_mut_ptr())
        });

        if ret < 0 {
            let err = Error::from_serr(&serr, "get_ayanamsha_extended", ret);
            warn!("swe_get_ayanamsa_ex_ut(flags={}) failed: {}", flags, err);
            return Err(err);
        }
        Ok(daya)
    }
}
