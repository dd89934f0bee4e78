//! Ephemeris configuration loaded from TOML or environment variables.

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{GeoPosition, SiderealConfig, SiderealMode};

/// Initial register values for an [`Ephemeris`](crate::Ephemeris).
///
/// Every field is optional; unset fields keep the library defaults.
///
/// ```toml
/// ephe_path = "/usr/share/swisseph"
/// jpl_file = "de440.eph"
///
/// [topocentric]
/// longitude = -112.183333
/// latitude = 45.45
/// altitude = 1524.0
///
/// [sidereal]
/// mode = 1
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EphemerisConfig {
    /// Directory (or list of directories) searched for ephemeris files
    pub ephe_path: Option<PathBuf>,
    /// JPL ephemeris file name
    pub jpl_file: Option<String>,
    /// Observer for topocentric calculations
    pub topocentric: Option<GeoPosition>,
    /// Sidereal mode and, for user-defined modes, its reference epoch
    pub sidereal: Option<SiderealConfig>,
}

impl EphemerisConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Create a configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `SWEPH_EPHE_PATH` (optional): ephemeris search path
    /// - `SWEPH_JPL_FILE` (optional): JPL ephemeris file name
    /// - `SWEPH_TOPO` (optional): observer as `lon,lat[,alt]`
    /// - `SWEPH_SIDEREAL_MODE` (optional): `SE_SIDM_*` number
    /// - `SWEPH_SIDEREAL_T0`, `SWEPH_SIDEREAL_AYAN_T0` (optional, default 0): epoch and
    ///   ayanamsha for user-defined modes
    ///
    /// # Errors
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let ephe_path = env::var("SWEPH_EPHE_PATH").ok().map(PathBuf::from);
        let jpl_file = env::var("SWEPH_JPL_FILE").ok();

        let topocentric = match env::var("SWEPH_TOPO") {
            Ok(raw) => Some(parse_geo_position(&raw)?),
            Err(_) => None,
        };

        let sidereal = match env::var("SWEPH_SIDEREAL_MODE") {
            Ok(raw) => {
                let mode: i32 = raw.trim().parse().map_err(|_| {
                    Error::Config(format!("SWEPH_SIDEREAL_MODE must be an integer, got '{raw}'"))
                })?;
                Some(SiderealConfig {
                    mode: SiderealMode(mode),
                    t0: env_f64("SWEPH_SIDEREAL_T0")?,
                    ayan_t0: env_f64("SWEPH_SIDEREAL_AYAN_T0")?,
                })
            }
            Err(_) => None,
        };

        Ok(Self {
            ephe_path,
            jpl_file,
            topocentric,
            sidereal,
        })
    }
}

fn env_f64(key: &str) -> Result<f64> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("{key} must be a number, got '{raw}'"))),
        Err(_) => Ok(0.0),
    }
}

/// Parse `lon,lat[,alt]`
fn parse_geo_position(raw: &str) -> Result<GeoPosition> {
    let parts = raw
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| Error::Config(format!("SWEPH_TOPO must be 'lon,lat[,alt]', got '{raw}'")))?;

    match parts.as_slice() {
        [lon, lat] => Ok(GeoPosition::new(*lon, *lat, 0.0)),
        [lon, lat, alt] => Ok(GeoPosition::new(*lon, *lat, *alt)),
        _ => Err(Error::Config(format!(
            "SWEPH_TOPO must be 'lon,lat[,alt]', got '{raw}'"
        ))),
    }
}
