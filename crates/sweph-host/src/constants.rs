//! The integer constants exported alongside the shims.
//!
//! Names and values are those of `swephexp.h`, taken from `sweph-sys`.

use sweph::ffi;

macro_rules! constant_table {
    ($($name:ident),* $(,)?) => {
        &[$((stringify!($name), ffi::$name as i64)),*]
    };
}

/// Every exported constant, in header order within each group
pub static CONSTANTS: &[(&str, i64)] = constant_table![
    // Calendar codes
    SE_JUL_CAL,
    SE_GREG_CAL,
    // Bodies and body offsets
    SE_ECL_NUT,
    SE_SUN,
    SE_MOON,
    SE_MERCURY,
    SE_VENUS,
    SE_MARS,
    SE_JUPITER,
    SE_SATURN,
    SE_URANUS,
    SE_NEPTUNE,
    SE_PLUTO,
    SE_MEAN_NODE,
    SE_TRUE_NODE,
    SE_MEAN_APOG,
    SE_OSCU_APOG,
    SE_EARTH,
    SE_CHIRON,
    SE_PHOLUS,
    SE_CERES,
    SE_PALLAS,
    SE_JUNO,
    SE_VESTA,
    SE_INTP_APOG,
    SE_INTP_PERG,
    SE_NPLANETS,
    SE_PLMOON_OFFSET,
    SE_AST_OFFSET,
    SE_VARUNA,
    SE_FICT_OFFSET,
    SE_FICT_OFFSET_1,
    SE_FICT_MAX,
    SE_NFICT_ELEM,
    SE_CUPIDO,
    SE_HADES,
    SE_ZEUS,
    SE_KRONOS,
    SE_APOLLON,
    SE_ADMETOS,
    SE_VULKANUS,
    SE_POSEIDON,
    SE_ISIS,
    SE_NIBIRU,
    SE_HARRINGTON,
    SE_NEPTUNE_LEVERRIER,
    SE_NEPTUNE_ADAMS,
    SE_PLUTO_LOWELL,
    SE_PLUTO_PICKERING,
    SE_VULCAN,
    SE_WHITE_MOON,
    SE_PROSERPINA,
    SE_WALDEMATH,
    // Calculation flags
    SEFLG_JPLEPH,
    SEFLG_SWIEPH,
    SEFLG_MOSEPH,
    SEFLG_HELCTR,
    SEFLG_TRUEPOS,
    SEFLG_J2000,
    SEFLG_NONUT,
    SEFLG_SPEED3,
    SEFLG_SPEED,
    SEFLG_NOGDEFL,
    SEFLG_NOABERR,
    SEFLG_ASTROMETRIC,
    SEFLG_EQUATORIAL,
    SEFLG_XYZ,
    SEFLG_RADIANS,
    SEFLG_BARYCTR,
    SEFLG_TOPOCTR,
    SEFLG_ORBEL_AA,
    SEFLG_TROPICAL,
    SEFLG_SIDEREAL,
    SEFLG_ICRS,
    SEFLG_DPSIDEPS_1980,
    SEFLG_JPLHOR,
    SEFLG_JPLHOR_APPROX,
    SEFLG_CENTER_BODY,
    // Sidereal modes and option bits
    SE_SIDBITS,
    SE_SIDBIT_ECL_T0,
    SE_SIDBIT_SSY_PLANE,
    SE_SIDBIT_USER_UT,
    SE_SIDM_FAGAN_BRADLEY,
    SE_SIDM_LAHIRI,
    SE_SIDM_DELUCE,
    SE_SIDM_RAMAN,
    SE_SIDM_USHASHASHI,
    SE_SIDM_KRISHNAMURTI,
    SE_SIDM_DJWHAL_KHUL,
    SE_SIDM_YUKTESHWAR,
    SE_SIDM_JN_BHASIN,
    SE_SIDM_BABYL_KUGLER1,
    SE_SIDM_BABYL_KUGLER2,
    SE_SIDM_BABYL_KUGLER3,
    SE_SIDM_BABYL_HUBER,
    SE_SIDM_BABYL_ETPSC,
    SE_SIDM_ALDEBARAN_15TAU,
    SE_SIDM_HIPPARCHOS,
    SE_SIDM_SASSANIAN,
    SE_SIDM_GALCENT_0SAG,
    SE_SIDM_J2000,
    SE_SIDM_J1900,
    SE_SIDM_B1950,
    SE_SIDM_SURYASIDDHANTA,
    SE_SIDM_SURYASIDDHANTA_MSUN,
    SE_SIDM_ARYABHATA,
    SE_SIDM_ARYABHATA_MSUN,
    SE_SIDM_SS_REVATI,
    SE_SIDM_SS_CITRA,
    SE_SIDM_TRUE_CITRA,
    SE_SIDM_TRUE_REVATI,
    SE_SIDM_TRUE_PUSHYA,
    SE_SIDM_USER,
    // Horizontal conversion directions
    SE_ECL2HOR,
    SE_EQU2HOR,
    SE_HOR2ECL,
    SE_HOR2EQU,
    // Rise, set and transit events
    SE_CALC_RISE,
    SE_CALC_SET,
    SE_CALC_MTRANSIT,
    SE_CALC_ITRANSIT,
    // Rise search option bits
    SE_BIT_DISC_CENTER,
    SE_BIT_DISC_BOTTOM,
    SE_BIT_GEOCTR_NO_ECL_LAT,
    SE_BIT_NO_REFRACTION,
    SE_BIT_CIVIL_TWILIGHT,
    SE_BIT_NAUTIC_TWILIGHT,
    SE_BIT_ASTRO_TWILIGHT,
    SE_BIT_FIXED_DISC_SIZE,
    SE_BIT_FORCE_SLOW_METHOD,
    SE_BIT_HINDU_RISING,
];

/// Look up a constant by its header name
pub fn constant(name: &str) -> Option<i64> {
    CONSTANTS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, value)| *value)
}

pub fn constants() -> &'static [(&'static str, i64)] {
    CONSTANTS
}
