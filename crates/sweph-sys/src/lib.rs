//! # sweph-sys
//!
//! Low-level FFI bindings to the Swiss Ephemeris C library (`libswe`).
//!
//! This crate provides raw, unsafe declarations of the `swephexp.h` entry points
//! and every constant the bindings export. For a safe, ergonomic API, use the
//! `sweph` crate instead.
//!
//! ## Safety
//!
//! All functions in this crate are unsafe. Users must ensure:
//! - Output pointers reference buffers of at least the documented length
//! - Error buffers hold at least [`AS_MAXCH`] bytes
//! - Strings are NUL-terminated
//! - Calls are serialized: the library keeps process-wide mutable state
//!
//! ## Example
//!
//! ```rust,ignore
//! use sweph_sys::*;
//!
//! let jd = unsafe { swe_julday(1981, 8, 22, 11.35, SE_GREG_CAL) };
//! assert!((jd - 2444838.972916667).abs() < 1e-9);
//! ```

#![allow(non_camel_case_types)]

use std::os::raw::{c_char, c_double, c_int};

pub type int32 = i32;

// ============================================================================
// Buffer sizes and status codes
// ============================================================================

/// Size of error-message buffers passed as `serr`
pub const AS_MAXCH: usize = 256;

/// Minimum size of a fixed-star name buffer; the library writes the full name back
pub const SE_MAX_STNAME: usize = 256;

/// Number of cusp slots required by `swe_houses*` for Gauquelin sectors
pub const SE_NUM_CUSPS_GAUQUELIN: usize = 37;

/// Number of cusp slots for all other house systems
pub const SE_NUM_CUSPS: usize = 13;

/// Number of `ascmc` slots written by `swe_houses*`
pub const SE_NUM_ASCMC: usize = 10;

pub const OK: int32 = 0;
pub const ERR: int32 = -1;

/// Default JPL ephemeris file name
pub const SE_FNAME_DFT: &str = "de431.eph";

// ============================================================================
// Calendars
// ============================================================================

pub const SE_JUL_CAL: c_int = 0;
pub const SE_GREG_CAL: c_int = 1;

// ============================================================================
// Bodies
// ============================================================================

pub const SE_ECL_NUT: int32 = -1;
pub const SE_SUN: int32 = 0;
pub const SE_MOON: int32 = 1;
pub const SE_MERCURY: int32 = 2;
pub const SE_VENUS: int32 = 3;
pub const SE_MARS: int32 = 4;
pub const SE_JUPITER: int32 = 5;
pub const SE_SATURN: int32 = 6;
pub const SE_URANUS: int32 = 7;
pub const SE_NEPTUNE: int32 = 8;
pub const SE_PLUTO: int32 = 9;
pub const SE_MEAN_NODE: int32 = 10;
pub const SE_TRUE_NODE: int32 = 11;
pub const SE_MEAN_APOG: int32 = 12;
pub const SE_OSCU_APOG: int32 = 13;
pub const SE_EARTH: int32 = 14;
pub const SE_CHIRON: int32 = 15;
pub const SE_PHOLUS: int32 = 16;
pub const SE_CERES: int32 = 17;
pub const SE_PALLAS: int32 = 18;
pub const SE_JUNO: int32 = 19;
pub const SE_VESTA: int32 = 20;
pub const SE_INTP_APOG: int32 = 21;
pub const SE_INTP_PERG: int32 = 22;
pub const SE_NPLANETS: int32 = 23;

pub const SE_PLMOON_OFFSET: int32 = 9000;
pub const SE_AST_OFFSET: int32 = 10000;
pub const SE_VARUNA: int32 = SE_AST_OFFSET + 20000;

pub const SE_FICT_OFFSET: int32 = 40;
pub const SE_FICT_OFFSET_1: int32 = 39;
pub const SE_FICT_MAX: int32 = 999;
pub const SE_NFICT_ELEM: int32 = 15;

// Hamburger or Uranian "planets"
pub const SE_CUPIDO: int32 = 40;
pub const SE_HADES: int32 = 41;
pub const SE_ZEUS: int32 = 42;
pub const SE_KRONOS: int32 = 43;
pub const SE_APOLLON: int32 = 44;
pub const SE_ADMETOS: int32 = 45;
pub const SE_VULKANUS: int32 = 46;
pub const SE_POSEIDON: int32 = 47;
// other fictitious bodies
pub const SE_ISIS: int32 = 48;
pub const SE_NIBIRU: int32 = 49;
pub const SE_HARRINGTON: int32 = 50;
pub const SE_NEPTUNE_LEVERRIER: int32 = 51;
pub const SE_NEPTUNE_ADAMS: int32 = 52;
pub const SE_PLUTO_LOWELL: int32 = 53;
pub const SE_PLUTO_PICKERING: int32 = 54;
pub const SE_VULCAN: int32 = 55;
pub const SE_WHITE_MOON: int32 = 56;
pub const SE_PROSERPINA: int32 = 57;
pub const SE_WALDEMATH: int32 = 58;

// ============================================================================
// Calculation flags
// ============================================================================

pub const SEFLG_JPLEPH: int32 = 1;
pub const SEFLG_SWIEPH: int32 = 2;
pub const SEFLG_MOSEPH: int32 = 4;
pub const SEFLG_HELCTR: int32 = 8;
pub const SEFLG_TRUEPOS: int32 = 16;
pub const SEFLG_J2000: int32 = 32;
pub const SEFLG_NONUT: int32 = 64;
pub const SEFLG_SPEED3: int32 = 128;
pub const SEFLG_SPEED: int32 = 256;
pub const SEFLG_NOGDEFL: int32 = 512;
pub const SEFLG_NOABERR: int32 = 1024;
pub const SEFLG_ASTROMETRIC: int32 = SEFLG_NOABERR | SEFLG_NOGDEFL;
pub const SEFLG_EQUATORIAL: int32 = 2 * 1024;
pub const SEFLG_XYZ: int32 = 4 * 1024;
pub const SEFLG_RADIANS: int32 = 8 * 1024;
pub const SEFLG_BARYCTR: int32 = 16 * 1024;
pub const SEFLG_TOPOCTR: int32 = 32 * 1024;
pub const SEFLG_ORBEL_AA: int32 = SEFLG_TOPOCTR;
pub const SEFLG_TROPICAL: int32 = 0;
pub const SEFLG_SIDEREAL: int32 = 64 * 1024;
pub const SEFLG_ICRS: int32 = 128 * 1024;
pub const SEFLG_DPSIDEPS_1980: int32 = 256 * 1024;
pub const SEFLG_JPLHOR: int32 = SEFLG_DPSIDEPS_1980;
pub const SEFLG_JPLHOR_APPROX: int32 = 512 * 1024;
pub const SEFLG_CENTER_BODY: int32 = 1024 * 1024;

// ============================================================================
// Sidereal modes
// ============================================================================

pub const SE_SIDBITS: int32 = 256;
pub const SE_SIDBIT_ECL_T0: int32 = 256;
pub const SE_SIDBIT_SSY_PLANE: int32 = 512;
pub const SE_SIDBIT_USER_UT: int32 = 1024;

pub const SE_SIDM_FAGAN_BRADLEY: int32 = 0;
pub const SE_SIDM_LAHIRI: int32 = 1;
pub const SE_SIDM_DELUCE: int32 = 2;
pub const SE_SIDM_RAMAN: int32 = 3;
pub const SE_SIDM_USHASHASHI: int32 = 4;
pub const SE_SIDM_KRISHNAMURTI: int32 = 5;
pub const SE_SIDM_DJWHAL_KHUL: int32 = 6;
pub const SE_SIDM_YUKTESHWAR: int32 = 7;
pub const SE_SIDM_JN_BHASIN: int32 = 8;
pub const SE_SIDM_BABYL_KUGLER1: int32 = 9;
pub const SE_SIDM_BABYL_KUGLER2: int32 = 10;
pub const SE_SIDM_BABYL_KUGLER3: int32 = 11;
pub const SE_SIDM_BABYL_HUBER: int32 = 12;
pub const SE_SIDM_BABYL_ETPSC: int32 = 13;
pub const SE_SIDM_ALDEBARAN_15TAU: int32 = 14;
pub const SE_SIDM_HIPPARCHOS: int32 = 15;
pub const SE_SIDM_SASSANIAN: int32 = 16;
pub const SE_SIDM_GALCENT_0SAG: int32 = 17;
pub const SE_SIDM_J2000: int32 = 18;
pub const SE_SIDM_J1900: int32 = 19;
pub const SE_SIDM_B1950: int32 = 20;
pub const SE_SIDM_SURYASIDDHANTA: int32 = 21;
pub const SE_SIDM_SURYASIDDHANTA_MSUN: int32 = 22;
pub const SE_SIDM_ARYABHATA: int32 = 23;
pub const SE_SIDM_ARYABHATA_MSUN: int32 = 24;
pub const SE_SIDM_SS_REVATI: int32 = 25;
pub const SE_SIDM_SS_CITRA: int32 = 26;
pub const SE_SIDM_TRUE_CITRA: int32 = 27;
pub const SE_SIDM_TRUE_REVATI: int32 = 28;
pub const SE_SIDM_TRUE_PUSHYA: int32 = 29;
pub const SE_SIDM_USER: int32 = 255;

// ============================================================================
// Horizontal coordinate conversion
// ============================================================================

pub const SE_ECL2HOR: int32 = 0;
pub const SE_EQU2HOR: int32 = 1;
pub const SE_HOR2ECL: int32 = 0;
pub const SE_HOR2EQU: int32 = 1;

// ============================================================================
// Rise, set and transit
// ============================================================================

pub const SE_CALC_RISE: int32 = 1;
pub const SE_CALC_SET: int32 = 2;
pub const SE_CALC_MTRANSIT: int32 = 4;
pub const SE_CALC_ITRANSIT: int32 = 8;
pub const SE_BIT_DISC_CENTER: int32 = 256;
pub const SE_BIT_DISC_BOTTOM: int32 = 8192;
pub const SE_BIT_GEOCTR_NO_ECL_LAT: int32 = 128;
pub const SE_BIT_NO_REFRACTION: int32 = 512;
pub const SE_BIT_CIVIL_TWILIGHT: int32 = 1024;
pub const SE_BIT_NAUTIC_TWILIGHT: int32 = 2048;
pub const SE_BIT_ASTRO_TWILIGHT: int32 = 4096;
pub const SE_BIT_FIXED_DISC_SIZE: int32 = 16384;
pub const SE_BIT_FORCE_SLOW_METHOD: int32 = 32768;
pub const SE_BIT_HINDU_RISING: int32 =
    SE_BIT_DISC_CENTER | SE_BIT_NO_REFRACTION | SE_BIT_GEOCTR_NO_ECL_LAT;

// ============================================================================
// FFI Function Declarations
// ============================================================================

extern "C" {
    // Configuration registers
    pub fn swe_set_ephe_path(path: *const c_char);
    pub fn swe_set_jpl_file(fname: *const c_char);
    pub fn swe_set_topo(geolon: c_double, geolat: c_double, geoalt: c_double);
    pub fn swe_set_sid_mode(sid_mode: int32, t0: c_double, ayan_t0: c_double);
    pub fn swe_close();

    // Version and names
    pub fn swe_version(s: *mut c_char) -> *mut c_char;
    pub fn swe_get_planet_name(ipl: c_int, spname: *mut c_char) -> *mut c_char;

    // Calendar
    pub fn swe_julday(
        year: c_int,
        month: c_int,
        day: c_int,
        hour: c_double,
        gregflag: c_int,
    ) -> c_double;

    pub fn swe_revjul(
        jd: c_double,
        gregflag: c_int,
        jyear: *mut c_int,
        jmon: *mut c_int,
        jday: *mut c_int,
        jut: *mut c_double,
    );

    // Planetary positions
    pub fn swe_calc_ut(
        tjd_ut: c_double,
        ipl: int32,
        iflag: int32,
        xx: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    // Ayanamsha
    pub fn swe_get_ayanamsa_ut(tjd_ut: c_double) -> c_double;

    pub fn swe_get_ayanamsa_ex_ut(
        tjd_ut: c_double,
        iflag: int32,
        daya: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    // Houses
    pub fn swe_houses(
        tjd_ut: c_double,
        geolat: c_double,
        geolon: c_double,
        hsys: c_int,
        cusps: *mut c_double,
        ascmc: *mut c_double,
    ) -> c_int;

    pub fn swe_houses_ex2(
        tjd_ut: c_double,
        iflag: int32,
        geolat: c_double,
        geolon: c_double,
        hsys: c_int,
        cusps: *mut c_double,
        ascmc: *mut c_double,
        cusp_speed: *mut c_double,
        ascmc_speed: *mut c_double,
        serr: *mut c_char,
    ) -> c_int;

    pub fn swe_house_pos(
        armc: c_double,
        geolat: c_double,
        eps: c_double,
        hsys: c_int,
        xpin: *mut c_double,
        serr: *mut c_char,
    ) -> c_double;

    // Rise, set and meridian transits
    pub fn swe_rise_trans(
        tjd_ut: c_double,
        ipl: int32,
        starname: *mut c_char,
        epheflag: int32,
        rsmi: int32,
        geopos: *mut c_double,
        atpress: c_double,
        attemp: c_double,
        tret: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_rise_trans_true_hor(
        tjd_ut: c_double,
        ipl: int32,
        starname: *mut c_char,
        epheflag: int32,
        rsmi: int32,
        geopos: *mut c_double,
        atpress: c_double,
        attemp: c_double,
        horhgt: c_double,
        tret: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    // Coordinate transforms
    pub fn swe_azalt(
        tjd_ut: c_double,
        calc_flag: int32,
        geopos: *mut c_double,
        atpress: c_double,
        attemp: c_double,
        xin: *mut c_double,
        xaz: *mut c_double,
    );

    pub fn swe_cotrans(xpo: *const c_double, xpn: *mut c_double, eps: c_double);
}
