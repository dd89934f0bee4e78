//! Type definitions for sweph

use serde::{Deserialize, Serialize};
use sweph_sys as ffi;

use crate::error::Error;

define_code_type!(
    /// Planet, node, asteroid or fictitious body identifier (`SE_*`)
    i32,
    Body
);

impl Body {
    pub const ECL_NUT: Body = Body(ffi::SE_ECL_NUT);
    pub const SUN: Body = Body(ffi::SE_SUN);
    pub const MOON: Body = Body(ffi::SE_MOON);
    pub const MERCURY: Body = Body(ffi::SE_MERCURY);
    pub const VENUS: Body = Body(ffi::SE_VENUS);
    pub const MARS: Body = Body(ffi::SE_MARS);
    pub const JUPITER: Body = Body(ffi::SE_JUPITER);
    pub const SATURN: Body = Body(ffi::SE_SATURN);
    pub const URANUS: Body = Body(ffi::SE_URANUS);
    pub const NEPTUNE: Body = Body(ffi::SE_NEPTUNE);
    pub const PLUTO: Body = Body(ffi::SE_PLUTO);
    pub const MEAN_NODE: Body = Body(ffi::SE_MEAN_NODE);
    pub const TRUE_NODE: Body = Body(ffi::SE_TRUE_NODE);
    pub const MEAN_APOG: Body = Body(ffi::SE_MEAN_APOG);
    pub const OSCU_APOG: Body = Body(ffi::SE_OSCU_APOG);
    pub const EARTH: Body = Body(ffi::SE_EARTH);
    pub const CHIRON: Body = Body(ffi::SE_CHIRON);
    pub const PHOLUS: Body = Body(ffi::SE_PHOLUS);
    pub const CERES: Body = Body(ffi::SE_CERES);
    pub const PALLAS: Body = Body(ffi::SE_PALLAS);
    pub const JUNO: Body = Body(ffi::SE_JUNO);
    pub const VESTA: Body = Body(ffi::SE_VESTA);
    pub const INTP_APOG: Body = Body(ffi::SE_INTP_APOG);
    pub const INTP_PERG: Body = Body(ffi::SE_INTP_PERG);
    pub const CUPIDO: Body = Body(ffi::SE_CUPIDO);
    pub const HADES: Body = Body(ffi::SE_HADES);
    pub const ZEUS: Body = Body(ffi::SE_ZEUS);
    pub const KRONOS: Body = Body(ffi::SE_KRONOS);
    pub const APOLLON: Body = Body(ffi::SE_APOLLON);
    pub const ADMETOS: Body = Body(ffi::SE_ADMETOS);
    pub const VULKANUS: Body = Body(ffi::SE_VULKANUS);
    pub const POSEIDON: Body = Body(ffi::SE_POSEIDON);

    /// Numbered minor planet, e.g. `Body::asteroid(433)` for Eros
    pub const fn asteroid(number: i32) -> Body {
        Body(ffi::SE_AST_OFFSET + number)
    }

    /// Lower-case English name for the bodies the chart helpers know about
    pub fn name(&self) -> Option<&'static str> {
        let name = match self.0 {
            ffi::SE_SUN => "sun",
            ffi::SE_MOON => "moon",
            ffi::SE_MERCURY => "mercury",
            ffi::SE_VENUS => "venus",
            ffi::SE_MARS => "mars",
            ffi::SE_JUPITER => "jupiter",
            ffi::SE_SATURN => "saturn",
            ffi::SE_URANUS => "uranus",
            ffi::SE_NEPTUNE => "neptune",
            ffi::SE_PLUTO => "pluto",
            ffi::SE_MEAN_NODE => "mean node",
            ffi::SE_TRUE_NODE => "true node",
            ffi::SE_MEAN_APOG => "mean lilith",
            ffi::SE_OSCU_APOG => "true lilith",
            ffi::SE_EARTH => "earth",
            ffi::SE_CHIRON => "chiron",
            ffi::SE_PHOLUS => "pholus",
            ffi::SE_CERES => "ceres",
            ffi::SE_PALLAS => "pallas",
            ffi::SE_JUNO => "juno",
            ffi::SE_VESTA => "vesta",
            _ => return None,
        };
        Some(name)
    }

    /// Astrological glyph for the classical planets
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self.0 {
            ffi::SE_SUN => "☉",
            ffi::SE_MOON => "☽",
            ffi::SE_MERCURY => "☿",
            ffi::SE_VENUS => "♀",
            ffi::SE_MARS => "♂",
            ffi::SE_JUPITER => "♃",
            ffi::SE_SATURN => "♄",
            ffi::SE_URANUS => "♅",
            ffi::SE_NEPTUNE => "♆",
            ffi::SE_PLUTO => "♇",
            _ => return None,
        };
        Some(symbol)
    }
}

define_code_type!(
    /// Calculation flag bits (`SEFLG_*`)
    i32,
    CalcFlags
);
impl_bit_ops!(CalcFlags);

impl CalcFlags {
    pub const NONE: CalcFlags = CalcFlags(0);
    pub const JPLEPH: CalcFlags = CalcFlags(ffi::SEFLG_JPLEPH);
    pub const SWIEPH: CalcFlags = CalcFlags(ffi::SEFLG_SWIEPH);
    pub const MOSEPH: CalcFlags = CalcFlags(ffi::SEFLG_MOSEPH);
    pub const HELCTR: CalcFlags = CalcFlags(ffi::SEFLG_HELCTR);
    pub const TRUEPOS: CalcFlags = CalcFlags(ffi::SEFLG_TRUEPOS);
    pub const J2000: CalcFlags = CalcFlags(ffi::SEFLG_J2000);
    pub const NONUT: CalcFlags = CalcFlags(ffi::SEFLG_NONUT);
    pub const SPEED3: CalcFlags = CalcFlags(ffi::SEFLG_SPEED3);
    pub const SPEED: CalcFlags = CalcFlags(ffi::SEFLG_SPEED);
    pub const NOGDEFL: CalcFlags = CalcFlags(ffi::SEFLG_NOGDEFL);
    pub const NOABERR: CalcFlags = CalcFlags(ffi::SEFLG_NOABERR);
    pub const ASTROMETRIC: CalcFlags = CalcFlags(ffi::SEFLG_ASTROMETRIC);
    pub const EQUATORIAL: CalcFlags = CalcFlags(ffi::SEFLG_EQUATORIAL);
    pub const XYZ: CalcFlags = CalcFlags(ffi::SEFLG_XYZ);
    pub const RADIANS: CalcFlags = CalcFlags(ffi::SEFLG_RADIANS);
    pub const BARYCTR: CalcFlags = CalcFlags(ffi::SEFLG_BARYCTR);
    pub const TOPOCTR: CalcFlags = CalcFlags(ffi::SEFLG_TOPOCTR);
    pub const SIDEREAL: CalcFlags = CalcFlags(ffi::SEFLG_SIDEREAL);
    pub const ICRS: CalcFlags = CalcFlags(ffi::SEFLG_ICRS);
}

impl Default for CalcFlags {
    fn default() -> Self {
        CalcFlags::NONE
    }
}

/// Named calculation options, composed into [`CalcFlags`]
///
/// Speed is computed and the Moshier ephemeris (which needs no data files) is
/// used unless told otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcOptions {
    /// Compute daily speeds
    pub speed: bool,
    /// True geometric positions, no light-time correction
    pub true_positions: bool,
    pub sidereal: bool,
    pub topocentric: bool,
    pub heliocentric: bool,
    /// Right ascension and declination instead of ecliptic longitude and latitude
    pub equatorial: bool,
    pub moshier_ephemeris: bool,
    pub jpl_ephemeris: bool,
    pub swiss_ephemeris: bool,
}

impl Default for CalcOptions {
    fn default() -> Self {
        Self {
            speed: true,
            true_positions: false,
            sidereal: false,
            topocentric: false,
            heliocentric: false,
            equatorial: false,
            moshier_ephemeris: true,
            jpl_ephemeris: false,
            swiss_ephemeris: false,
        }
    }
}

impl From<CalcOptions> for CalcFlags {
    fn from(o: CalcOptions) -> Self {
        let pairs = [
            (o.speed, CalcFlags::SPEED),
            (o.true_positions, CalcFlags::TRUEPOS),
            (o.sidereal, CalcFlags::SIDEREAL),
            (o.topocentric, CalcFlags::TOPOCTR),
            (o.heliocentric, CalcFlags::HELCTR),
            (o.moshier_ephemeris, CalcFlags::MOSEPH),
            (o.jpl_ephemeris, CalcFlags::JPLEPH),
            (o.swiss_ephemeris, CalcFlags::SWIEPH),
            (o.equatorial, CalcFlags::EQUATORIAL),
        ];
        pairs
            .into_iter()
            .filter(|(on, _)| *on)
            .fold(CalcFlags::NONE, |acc, (_, flag)| acc | flag)
    }
}

define_code_type!(
    /// Ayanamsha scheme (`SE_SIDM_*`), optionally or'ed with `SE_SIDBIT_*` options
    i32,
    SiderealMode
);

impl SiderealMode {
    pub const FAGAN_BRADLEY: SiderealMode = SiderealMode(ffi::SE_SIDM_FAGAN_BRADLEY);
    pub const LAHIRI: SiderealMode = SiderealMode(ffi::SE_SIDM_LAHIRI);
    pub const DELUCE: SiderealMode = SiderealMode(ffi::SE_SIDM_DELUCE);
    pub const RAMAN: SiderealMode = SiderealMode(ffi::SE_SIDM_RAMAN);
    pub const USHASHASHI: SiderealMode = SiderealMode(ffi::SE_SIDM_USHASHASHI);
    pub const KRISHNAMURTI: SiderealMode = SiderealMode(ffi::SE_SIDM_KRISHNAMURTI);
    pub const DJWHAL_KHUL: SiderealMode = SiderealMode(ffi::SE_SIDM_DJWHAL_KHUL);
    pub const YUKTESHWAR: SiderealMode = SiderealMode(ffi::SE_SIDM_YUKTESHWAR);
    pub const JN_BHASIN: SiderealMode = SiderealMode(ffi::SE_SIDM_JN_BHASIN);
    pub const BABYL_KUGLER1: SiderealMode = SiderealMode(ffi::SE_SIDM_BABYL_KUGLER1);
    pub const BABYL_KUGLER2: SiderealMode = SiderealMode(ffi::SE_SIDM_BABYL_KUGLER2);
    pub const BABYL_KUGLER3: SiderealMode = SiderealMode(ffi::SE_SIDM_BABYL_KUGLER3);
    pub const BABYL_HUBER: SiderealMode = SiderealMode(ffi::SE_SIDM_BABYL_HUBER);
    pub const BABYL_ETPSC: SiderealMode = SiderealMode(ffi::SE_SIDM_BABYL_ETPSC);
    pub const ALDEBARAN_15TAU: SiderealMode = SiderealMode(ffi::SE_SIDM_ALDEBARAN_15TAU);
    pub const HIPPARCHOS: SiderealMode = SiderealMode(ffi::SE_SIDM_HIPPARCHOS);
    pub const SASSANIAN: SiderealMode = SiderealMode(ffi::SE_SIDM_SASSANIAN);
    pub const GALCENT_0SAG: SiderealMode = SiderealMode(ffi::SE_SIDM_GALCENT_0SAG);
    pub const J2000: SiderealMode = SiderealMode(ffi::SE_SIDM_J2000);
    pub const J1900: SiderealMode = SiderealMode(ffi::SE_SIDM_J1900);
    pub const B1950: SiderealMode = SiderealMode(ffi::SE_SIDM_B1950);
    pub const USER: SiderealMode = SiderealMode(ffi::SE_SIDM_USER);
}

/// The sidereal-mode register: scheme plus reference epoch and ayanamsha at that epoch
///
/// `t0` and `ayan_t0` are only read by the library for [`SiderealMode::USER`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiderealConfig {
    pub mode: SiderealMode,
    #[serde(default)]
    pub t0: f64,
    #[serde(default)]
    pub ayan_t0: f64,
}

impl SiderealConfig {
    pub fn new(mode: SiderealMode) -> Self {
        Self {
            mode,
            t0: 0.0,
            ayan_t0: 0.0,
        }
    }

    /// User-defined ayanamsha with value `ayan_t0` at Julian day `t0`
    pub fn user(t0: f64, ayan_t0: f64) -> Self {
        Self {
            mode: SiderealMode::USER,
            t0,
            ayan_t0,
        }
    }
}

impl Default for SiderealConfig {
    fn default() -> Self {
        Self::new(SiderealMode::FAGAN_BRADLEY)
    }
}

/// Calendar system for Julian-day conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calendar {
    Julian,
    #[default]
    Gregorian,
}

impl From<Calendar> for i32 {
    fn from(c: Calendar) -> Self {
        match c {
            Calendar::Julian => ffi::SE_JUL_CAL,
            Calendar::Gregorian => ffi::SE_GREG_CAL,
        }
    }
}

impl TryFrom<i32> for Calendar {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            ffi::SE_JUL_CAL => Ok(Calendar::Julian),
            ffi::SE_GREG_CAL => Ok(Calendar::Gregorian),
            other => Err(Error::InvalidInput(format!(
                "calendar code must be {} (Julian) or {} (Gregorian), got {}",
                ffi::SE_JUL_CAL,
                ffi::SE_GREG_CAL,
                other
            ))),
        }
    }
}

/// House method, the one-letter ASCII code understood by `swe_houses`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HouseSystem(pub u8);

impl HouseSystem {
    pub const PLACIDUS: HouseSystem = HouseSystem(b'P');
    pub const KOCH: HouseSystem = HouseSystem(b'K');
    pub const PORPHYRIUS: HouseSystem = HouseSystem(b'O');
    pub const REGIOMONTANUS: HouseSystem = HouseSystem(b'R');
    pub const CAMPANUS: HouseSystem = HouseSystem(b'C');
    /// Equal houses, cusp 1 is the Ascendant ('A' and 'E' are synonyms)
    pub const EQUAL: HouseSystem = HouseSystem(b'E');
    pub const VEHLOW_EQUAL: HouseSystem = HouseSystem(b'V');
    pub const WHOLE_SIGN: HouseSystem = HouseSystem(b'W');
    pub const AXIAL_ROTATION: HouseSystem = HouseSystem(b'X');
    pub const AZIMUTHAL: HouseSystem = HouseSystem(b'H');
    /// Polich/Page, the "topocentric" system
    pub const POLICH_PAGE: HouseSystem = HouseSystem(b'T');
    pub const ALCABITUS: HouseSystem = HouseSystem(b'B');
    pub const MORINUS: HouseSystem = HouseSystem(b'M');
    pub const KRUSINSKI: HouseSystem = HouseSystem(b'U');
    pub const GAUQUELIN: HouseSystem = HouseSystem(b'G');

    /// Build from a code letter; non-ASCII characters are rejected
    pub fn from_char(code: char) -> Option<Self> {
        code.is_ascii().then_some(HouseSystem(code as u8))
    }

    pub fn as_char(&self) -> char {
        self.0 as char
    }

    /// Number of cusp slots the library fills for this system (index 0 unused)
    pub fn cusp_count(&self) -> usize {
        if *self == HouseSystem::GAUQUELIN {
            ffi::SE_NUM_CUSPS_GAUQUELIN
        } else {
            ffi::SE_NUM_CUSPS
        }
    }
}

impl std::fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

define_code_type!(
    /// Rise/set/transit event (`SE_CALC_*`) with optional `SE_BIT_*` modifiers
    i32,
    RiseEvent
);
impl_bit_ops!(RiseEvent);

impl RiseEvent {
    pub const RISE: RiseEvent = RiseEvent(ffi::SE_CALC_RISE);
    pub const SET: RiseEvent = RiseEvent(ffi::SE_CALC_SET);
    pub const MERIDIAN_TRANSIT: RiseEvent = RiseEvent(ffi::SE_CALC_MTRANSIT);
    pub const LOWER_TRANSIT: RiseEvent = RiseEvent(ffi::SE_CALC_ITRANSIT);
    pub const DISC_CENTER: RiseEvent = RiseEvent(ffi::SE_BIT_DISC_CENTER);
    pub const DISC_BOTTOM: RiseEvent = RiseEvent(ffi::SE_BIT_DISC_BOTTOM);
    pub const GEOCTR_NO_ECL_LAT: RiseEvent = RiseEvent(ffi::SE_BIT_GEOCTR_NO_ECL_LAT);
    pub const NO_REFRACTION: RiseEvent = RiseEvent(ffi::SE_BIT_NO_REFRACTION);
    pub const CIVIL_TWILIGHT: RiseEvent = RiseEvent(ffi::SE_BIT_CIVIL_TWILIGHT);
    pub const NAUTIC_TWILIGHT: RiseEvent = RiseEvent(ffi::SE_BIT_NAUTIC_TWILIGHT);
    pub const ASTRO_TWILIGHT: RiseEvent = RiseEvent(ffi::SE_BIT_ASTRO_TWILIGHT);
    pub const FIXED_DISC_SIZE: RiseEvent = RiseEvent(ffi::SE_BIT_FIXED_DISC_SIZE);
    pub const HINDU_RISING: RiseEvent = RiseEvent(ffi::SE_BIT_HINDU_RISING);
}

define_code_type!(
    /// Direction of a horizontal conversion (`SE_ECL2HOR` / `SE_EQU2HOR`)
    i32,
    HorizonConversion
);

impl HorizonConversion {
    pub const ECLIPTIC_TO_HORIZON: HorizonConversion = HorizonConversion(ffi::SE_ECL2HOR);
    pub const EQUATORIAL_TO_HORIZON: HorizonConversion = HorizonConversion(ffi::SE_EQU2HOR);
}

/// Geographic position of an observer: degrees east, degrees north, metres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPosition {
    pub longitude: f64,
    pub latitude: f64,
    #[serde(default)]
    pub altitude: f64,
}

impl GeoPosition {
    pub fn new(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude,
        }
    }

    pub(crate) fn to_array(self) -> [f64; 3] {
        [self.longitude, self.latitude, self.altitude]
    }
}

/// Observer for rise/transit searches and horizontal conversion
///
/// A pressure of 0 lets the library estimate it from the altitude.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Observer {
    pub position: GeoPosition,
    /// Atmospheric pressure in mbar/hPa
    #[serde(default)]
    pub pressure: f64,
    /// Atmospheric temperature in °C
    #[serde(default)]
    pub temperature: f64,
}

impl Observer {
    pub fn new(position: GeoPosition, pressure: f64, temperature: f64) -> Self {
        Self {
            position,
            pressure,
            temperature,
        }
    }
}

/// What a rise/transit search looks for: a body by id, or a fixed star by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiseTarget {
    Body(Body),
    /// Catalogue name; an empty name is rejected as [`Error::InvalidInput`](crate::Error::InvalidInput)
    Star(String),
}

impl From<Body> for RiseTarget {
    fn from(body: Body) -> Self {
        RiseTarget::Body(body)
    }
}
