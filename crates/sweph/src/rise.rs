//! Rise, set and meridian transit search

use std::os::raw::c_char;
use std::ptr;

use log::warn;
use sweph_sys as ffi;

use crate::context::Ephemeris;
use crate::error::{Error, Result};
use crate::types::{CalcFlags, Observer, RiseEvent, RiseTarget};

/// Star name in a buffer the library may overwrite with the catalogue name
fn star_buffer(name: &str) -> Result<Vec<c_char>> {
    if name.is_empty() {
        return Err(Error::InvalidInput(
            "Star name is empty; use RiseTarget::Body for planets".into(),
        ));
    }
    if name.as_bytes().contains(&0) {
        return Err(Error::InvalidInput("Star name contains null bytes".into()));
    }
    let mut buf = vec![0 as c_char; ffi::SE_MAX_STNAME.max(name.len() + 1)];
    for (slot, byte) in buf.iter_mut().zip(name.bytes()) {
        *slot = byte as c_char;
    }
    Ok(buf)
}

impl Ephemeris {
    /// Next rise, set or transit of a body or fixed star after `jd_ut`
    ///
    /// Returns the event time as a Julian day in UT. A circumpolar body that
    /// never rises or sets is reported as [`Error::Native`] (status -2).
    pub fn rise_or_transit(
        &self,
        jd_ut: f64,
        target: &RiseTarget,
        flags: CalcFlags,
        event: RiseEvent,
        observer: &Observer,
    ) -> Result<f64> {
        self.rise_trans(jd_ut, target, flags, event, observer, None)
    }

    /// Like [`rise_or_transit`](Self::rise_or_transit), against a local horizon
    /// `horizon_height` degrees above the mathematical one
    pub fn rise_or_transit_true_horizon(
        &self,
        jd_ut: f64,
        target: &RiseTarget,
        flags: CalcFlags,
        event: RiseEvent,
        observer: &Observer,
        horizon_height: f64,
    ) -> Result<f64> {
        self.rise_trans(jd_ut, target, flags, event, observer, Some(horizon_height))
    }

    fn rise_trans(
        &self,
        jd_ut: f64,
        target: &RiseTarget,
        flags: CalcFlags,
        event: RiseEvent,
        observer: &Observer,
        horizon_height: Option<f64>,
    ) -> Result<f64> {
        let (ipl, mut star) = match target {
            RiseTarget::Body(body) => (body.value(), None),
            RiseTarget::Star(name) => (0, Some(star_buffer(name)?)),
        };
        let star_ptr = star.as_mut().map_or(ptr::null_mut(), |buf| buf.as_mut_ptr());
        let mut geopos = observer.position.to_array();
        let mut tret = 0.0f64;
        let mut serr = [0 as c_char; ffi::AS_MAXCH];

        // the library stores the observer in its topocentric register
        let ret = self.with_native_observer(observer.position, || unsafe {
            match horizon_height {
                None => ffi::swe_rise_trans(
                    jd_ut,
                    ipl,
                    star_ptr,
                    flags.value(),
                    event.value(),
                    geopos.as_mut_ptr(),
                    observer.pressure,
                    observer.temperature,
                    &mut tret,
                    serr.as_mut_ptr(),
                ),
                Some(horhgt) => ffi::swe_rise_trans_true_hor(
                    jd_ut,
                    ipl,
                    star_ptr,
                    flags.value(),
                    event.value(),
                    geopos.as_mut_ptr(),
                    observer.pressure,
                    observer.temperature,
                    horhgt,
                    &mut tret,
                    serr.as_mut_ptr(),
                ),
            }
        });

        if ret < 0 {
            let operation = if horizon_height.is_some() {
                "rise_or_transit_true_horizon"
            } else {
                "rise_or_transit"
            };
            let err = Error::from_serr(&serr, operation, ret);
            warn!("{}({:?}, event={}) failed: {}", operation, target, event, err);
            return Err(err);
        }
        Ok(tret)
    }
}
