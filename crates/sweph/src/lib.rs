//! # sweph
//!
//! Safe, ergonomic Rust bindings to the Swiss Ephemeris library.
//!
//! Every operation is a thin wrapper over one `swe_*` routine: arguments are
//! marshalled into native types, the routine runs under a process-wide lock, and
//! native failures surface as [`Error::Native`] with the library's own message.
//! No astronomy is reimplemented here.
//!
//! ## Features
//!
//! - Julian day conversion in both directions, Julian or Gregorian calendar
//! - Planet, node, asteroid and fictitious body positions
//! - Ayanamsha and sidereal positions
//! - House cusps, angles, speeds and house positions
//! - Rise, set and meridian transit search for bodies and fixed stars
//! - Horizontal and ecliptic/equatorial coordinate transforms
//!
//! ## Configuration registers
//!
//! The library reads its ephemeris path, JPL file, topocentric observer and
//! sidereal mode from hidden globals. Here they belong to an explicit
//! [`Ephemeris`] context; see its documentation for how contexts share the
//! library.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sweph::{julian_day, Body, CalcFlags, Calendar, CalendarDate, Ephemeris, HouseSystem};
//!
//! let eph = Ephemeris::new();
//! let jd = julian_day(&CalendarDate::new(1981, 8, 22, 11.35), Calendar::Gregorian);
//!
//! let sun = eph.calculate_position(jd, Body::SUN, CalcFlags::MOSEPH | CalcFlags::SPEED)?;
//! println!("Sun {}", sun.zodiac());
//!
//! let houses = eph.houses(jd, 45.45, -112.183333, HouseSystem::PLACIDUS)?;
//! println!("Asc {:.4} MC {:.4}", houses.ascendant(), houses.mc());
//! ```

#[macro_use]
mod macros;

mod calendar;
mod config;
mod context;
mod coords;
mod error;
mod houses;
mod position;
mod rise;
mod sidereal;
mod types;

pub use calendar::{julian_day, julian_day_from_datetime, reverse_julian_day, CalendarDate};
pub use config::EphemerisConfig;
pub use context::Ephemeris;
pub use coords::{coordinate_transform, Horizontal, SphericalCoord};
pub use error::{Error, Result};
pub use houses::{HouseCusps, HouseCuspsWithSpeed};
pub use position::{version, Position, ZodiacPosition, SIGNS};
pub use types::*;

/// Raw bindings, for constants and routines not wrapped here
pub use sweph_sys as ffi;
