//! # sweph-host
//!
//! A dynamically typed call surface over [`sweph`], shaped like a scripting
//! language extension module: shims are looked up by name, take positional
//! [`serde_json::Value`] arguments and return a `Value`.
//!
//! The wire contract is the argument order and arity of each shim:
//!
//! | Shim | Arguments |
//! |---|---|
//! | `set_ephemeris_path` | path |
//! | `set_jpl_file` | file name |
//! | `set_topocentric` | lon, lat, alt |
//! | `set_sidereal_mode` | mode, t0, ayan_t0 |
//! | `julian_day` | year, month, day, hour, \[calendar\] |
//! | `reverse_julian_day` | jd, \[calendar\] |
//! | `calculate_position` | jd_ut, body, flags |
//! | `get_ayanamsha` | jd_ut |
//! | `get_ayanamsha_extended` | jd_ut, flags |
//! | `compute_houses` | jd_ut, lat, lon, house system |
//! | `compute_houses_extended` | jd_ut, flags, lat, lon, house system |
//! | `house_position` | armc, lat, obliquity, house system, ecl_lon, ecl_lat |
//! | `rise_or_transit` | jd_ut, body or star, flags, event, lon, lat, height, pressure, temp |
//! | `rise_or_transit_true_horizon` | as above, horizon height |
//! | `azimuth_altitude` | jd_ut, conversion, lon, lat, height, pressure, temp, in0, in1, in2 |
//! | `coordinate_transform` | obliquity, lon, lat, \[distance\] |
//! | `version`, `close` | none |
//! | `planet_name` | body |
//!
//! ```rust,ignore
//! use serde_json::json;
//! use sweph_host::Namespace;
//!
//! let mut ns = Namespace::init();
//! let jd = ns.call("julian_day", &[json!(1981), json!(8), json!(22), json!(11.35)])?;
//! let speed = ns.constant("SEFLG_SPEED").unwrap_or_default();
//! ```

mod args;
mod backend;
mod constants;
mod error;
mod namespace;
pub mod shell;

pub use args::Args;
pub use backend::Backend;
pub use constants::{constant, constants, CONSTANTS};
pub use error::{ErrorKind, HostError, HostResult};
pub use namespace::Namespace;
