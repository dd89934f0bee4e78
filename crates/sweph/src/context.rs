//! Ephemeris context - owns the four configuration registers the native library reads implicitly

use std::ffi::CString;
use std::path::{Path, PathBuf};
use std::ptr;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;
use parking_lot::{const_mutex, Mutex};
use sweph_sys as ffi;

use crate::config::EphemerisConfig;
use crate::error::{Error, Result};
use crate::types::{GeoPosition, SiderealConfig};

/// Values of the library's process-wide registers as seen by one context
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Registers {
    /// `None` lets the library fall back to `SE_EPHE_PATH` or its built-in default
    pub ephe_path: Option<CString>,
    pub jpl_file: CString,
    pub topo: GeoPosition,
    pub sidereal: SiderealConfig,
}

impl Default for Registers {
    fn default() -> Self {
        Self {
            ephe_path: None,
            jpl_file: CString::new(ffi::SE_FNAME_DFT).unwrap_or_default(),
            topo: GeoPosition::default(),
            sidereal: SiderealConfig::default(),
        }
    }
}

/// What the native library currently holds
struct NativeState {
    /// `None` until the first register push, and again after `swe_close`
    applied: Option<Registers>,
    /// Context whose registers were applied last
    owner: u64,
}

static NATIVE: Mutex<NativeState> = const_mutex(NativeState {
    applied: None,
    owner: 0,
});

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Run `f` while holding the process-wide library lock, without touching the registers
///
/// For routines that read none of the registers (calendar conversion, cotrans).
pub(crate) fn with_library<T>(f: impl FnOnce() -> T) -> T {
    let _guard = NATIVE.lock();
    f()
}

/// Swiss Ephemeris calculation context
///
/// Holds the ephemeris search path, JPL file name, topocentric observer and
/// sidereal mode. The native library keeps these as hidden globals; every
/// calculation made through an `Ephemeris` first takes a process-wide lock and
/// pushes this context's values into the library if another context (or
/// nobody) put different ones there.
///
/// Several contexts may therefore be used from different threads; their calls
/// are serialized and never observe each other's configuration.
///
/// # Example
///
/// ```rust,ignore
/// use sweph::{Body, CalcFlags, Ephemeris, GeoPosition};
///
/// let mut eph = Ephemeris::new();
/// eph.set_topocentric(GeoPosition::new(-112.183333, 45.45, 1524.0));
///
/// let jd = sweph::julian_day(&sweph::CalendarDate::new(1981, 8, 22, 11.35), Default::default());
/// let sun = eph.calculate_position(jd, Body::SUN, CalcFlags::MOSEPH | CalcFlags::TOPOCTR)?;
/// println!("{}", sun.zodiac());
/// ```
#[derive(Debug)]
pub struct Ephemeris {
    id: u64,
    registers: Registers,
}

impl Ephemeris {
    /// Create a context with the library's default register values
    pub fn new() -> Self {
        Self {
            id: NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed),
            registers: Registers::default(),
        }
    }

    /// Create a context from a loaded configuration
    pub fn from_config(config: &EphemerisConfig) -> Result<Self> {
        let mut eph = Self::new();
        if let Some(path) = &config.ephe_path {
            eph.set_ephemeris_path(path)?;
        }
        if let Some(file) = &config.jpl_file {
            eph.set_jpl_file(file)?;
        }
        if let Some(topo) = config.topocentric {
            eph.set_topocentric(topo);
        }
        if let Some(sidereal) = config.sidereal {
            eph.set_sidereal_mode(sidereal);
        }
        Ok(eph)
    }

    /// Set the directory (or `:`/`;`-separated list) searched for ephemeris files
    pub fn set_ephemeris_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let c_path = CString::new(path.to_string_lossy().into_owned())
            .map_err(|_| Error::InvalidInput("Path contains null bytes".into()))?;
        self.registers.ephe_path = Some(c_path);
        Ok(())
    }

    /// Set the JPL ephemeris file name (looked up on the ephemeris path)
    pub fn set_jpl_file(&mut self, file_name: &str) -> Result<()> {
        self.registers.jpl_file = CString::new(file_name)
            .map_err(|_| Error::InvalidInput("File name contains null bytes".into()))?;
        Ok(())
    }

    /// Set the observer used by `SEFLG_TOPOCTR` calculations
    pub fn set_topocentric(&mut self, position: GeoPosition) {
        self.registers.topo = position;
    }

    /// Set the sidereal mode used by ayanamsha and `SEFLG_SIDEREAL` calculations
    pub fn set_sidereal_mode(&mut self, sidereal: SiderealConfig) {
        self.registers.sidereal = sidereal;
    }

    /// Configured ephemeris search path, if any
    pub fn ephemeris_path(&self) -> Option<PathBuf> {
        self.registers
            .ephe_path
            .as_ref()
            .map(|p| PathBuf::from(p.to_string_lossy().into_owned()))
    }

    /// Configured JPL file name
    pub fn jpl_file(&self) -> String {
        self.registers.jpl_file.to_string_lossy().into_owned()
    }

    /// Configured topocentric observer
    pub fn topocentric(&self) -> GeoPosition {
        self.registers.topo
    }

    /// Configured sidereal mode
    pub fn sidereal_mode(&self) -> SiderealConfig {
        self.registers.sidereal
    }

    /// Release the library's open ephemeris files and cached state
    ///
    /// Registers are pushed again on the next call through any context.
    pub fn close(&self) {
        let mut native = NATIVE.lock();
        unsafe { ffi::swe_close() };
        native.applied = None;
        native.owner = 0;
        debug!("swisseph closed by context {}", self.id);
    }

    /// Run `f` under the library lock with this context's registers in effect
    pub(crate) fn with_native<T>(&self, f: impl FnOnce() -> T) -> T {
        let mut native = NATIVE.lock();
        self.sync_registers(&mut native);
        f()
    }

    /// Like [`with_native`](Self::with_native), for routines that overwrite
    /// the library's topocentric register with `position`
    ///
    /// The register is recorded as holding `position` so the next call
    /// through any context pushes its own location again.
    pub(crate) fn with_native_observer<T>(
        &self,
        position: GeoPosition,
        f: impl FnOnce() -> T,
    ) -> T {
        let mut native = NATIVE.lock();
        self.sync_registers(&mut native);
        let out = f();
        self.note_observer(&mut native, position);
        out
    }

    fn note_observer(&self, native: &mut NativeState, position: GeoPosition) {
        if let Some(applied) = native.applied.as_mut() {
            if applied.topo != position {
                debug!(
                    "context {}: topocentric overwritten by observer {:?}",
                    self.id, position
                );
                applied.topo = position;
            }
        }
    }

    fn sync_registers(&self, native: &mut NativeState) {
        let wanted = &self.registers;
        if native.applied.as_ref() == Some(wanted) {
            native.owner = self.id;
            return;
        }
        if native.owner != self.id {
            debug!("registers: context {} -> context {}", native.owner, self.id);
        }
        let current = native.applied.take();
        let fresh = current.is_none();
        let current = current.unwrap_or_default();

        if fresh || current.ephe_path != wanted.ephe_path {
            let ptr = wanted.ephe_path.as_ref().map_or(ptr::null(), |p| p.as_ptr());
            unsafe { ffi::swe_set_ephe_path(ptr) };
            debug!(
                "context {}: ephemeris path -> {:?}",
                self.id, wanted.ephe_path
            );
        }
        if fresh || current.jpl_file != wanted.jpl_file {
            unsafe { ffi::swe_set_jpl_file(wanted.jpl_file.as_ptr()) };
            debug!("context {}: jpl file -> {:?}", self.id, wanted.jpl_file);
        }
        if fresh || current.topo != wanted.topo {
            let t = wanted.topo;
            unsafe { ffi::swe_set_topo(t.longitude, t.latitude, t.altitude) };
            debug!("context {}: topocentric -> {:?}", self.id, t);
        }
        if fresh || current.sidereal != wanted.sidereal {
            let s = wanted.sidereal;
            unsafe { ffi::swe_set_sid_mode(s.mode.value(), s.t0, s.ayan_t0) };
            debug!("context {}: sidereal mode -> {:?}", self.id, s);
        }

        native.applied = Some(wanted.clone());
        native.owner = self.id;
    }

    /// Identifier used in log output
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Default for Ephemeris {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Ephemeris {
    /// The clone is an independent context with its own id
    fn clone(&self) -> Self {
        Self {
            id: NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed),
            registers: self.registers.clone(),
        }
    }
}
