//! Name-addressed shim registry.
//!
//! [`Namespace::init`] registers every shim once, each with the range of
//! argument counts it accepts. A call checks the count first and raises
//! [`HostError::ArgumentCount`] before any argument is looked at, then coerces
//! the arguments, calls the backend and converts the result to a JSON value.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use log::debug;
use serde_json::{json, Value};
use sweph::{
    CalcFlags, CalendarDate, Ephemeris, EphemerisConfig, GeoPosition, HorizonConversion,
    HouseCusps, RiseEvent, SiderealConfig, SiderealMode, SphericalCoord,
};

use crate::args::Args;
use crate::backend::Backend;
use crate::constants;
use crate::error::{HostError, HostResult};

type Handler<B> = fn(&mut B, &Args<'_>) -> HostResult<Value>;

struct Shim<B> {
    arity: RangeInclusive<usize>,
    handler: Handler<B>,
}

/// The host-facing module: shims plus constants over one backend
pub struct Namespace<B = Ephemeris> {
    backend: B,
    shims: BTreeMap<&'static str, Shim<B>>,
}

impl Namespace<Ephemeris> {
    /// Namespace over a fresh ephemeris context with default registers
    pub fn init() -> Self {
        Self::with_backend(Ephemeris::new())
    }

    pub fn from_config(config: &EphemerisConfig) -> sweph::Result<Self> {
        Ok(Self::with_backend(Ephemeris::from_config(config)?))
    }
}

impl<B: Backend> Namespace<B> {
    pub fn with_backend(backend: B) -> Self {
        let mut ns = Self {
            backend,
            shims: BTreeMap::new(),
        };

        ns.register("set_ephemeris_path", 1..=1, set_ephemeris_path);
        ns.register("set_jpl_file", 1..=1, set_jpl_file);
        ns.register("set_topocentric", 3..=3, set_topocentric);
        ns.register("set_sidereal_mode", 3..=3, set_sidereal_mode);
        ns.register("julian_day", 4..=5, julian_day);
        ns.register("reverse_julian_day", 1..=2, reverse_julian_day);
        ns.register("calculate_position", 3..=3, calculate_position);
        ns.register("get_ayanamsha", 1..=1, get_ayanamsha);
        ns.register("get_ayanamsha_extended", 2..=2, get_ayanamsha_extended);
        ns.register("compute_houses", 4..=4, compute_houses);
        ns.register("compute_houses_extended", 5..=5, compute_houses_extended);
        ns.register("house_position", 6..=6, house_position);
        ns.register("rise_or_transit", 9..=9, rise_or_transit);
        ns.register("rise_or_transit_true_horizon", 10..=10, rise_or_transit);
        ns.register("azimuth_altitude", 10..=10, azimuth_altitude);
        ns.register("coordinate_transform", 3..=4, coordinate_transform);
        ns.register("version", 0..=0, version);
        ns.register("planet_name", 1..=1, planet_name);
        ns.register("close", 0..=0, close);

        debug!("sweph namespace initialized with {} shims", ns.shims.len());
        ns
    }

    fn register(&mut self, name: &'static str, arity: RangeInclusive<usize>, handler: Handler<B>) {
        self.shims.insert(name, Shim { arity, handler });
    }

    /// Invoke shim `name` with positional arguments
    pub fn call(&mut self, name: &str, args: &[Value]) -> HostResult<Value> {
        let (&function, shim) = self
            .shims
            .get_key_value(name)
            .ok_or_else(|| HostError::UnknownFunction(name.to_string()))?;

        if !shim.arity.contains(&args.len()) {
            return Err(HostError::ArgumentCount);
        }
        (shim.handler)(&mut self.backend, &Args::new(function, args))
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.shims.contains_key(name)
    }

    /// Registered shim names, sorted
    pub fn functions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.shims.keys().copied()
    }

    pub fn constant(&self, name: &str) -> Option<i64> {
        constants::constant(name)
    }

    pub fn constants(&self) -> &'static [(&'static str, i64)] {
        constants::constants()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}

impl Default for Namespace<Ephemeris> {
    fn default() -> Self {
        Self::init()
    }
}

// =========================================================
// Setters
// =========================================================

fn set_ephemeris_path<B: Backend>(backend: &mut B, args: &Args<'_>) -> HostResult<Value> {
    let path = args.string(0)?;
    backend
        .set_ephemeris_path(path)
        .map_err(|err| args.reject(0, err))?;
    Ok(Value::Null)
}

fn set_jpl_file<B: Backend>(backend: &mut B, args: &Args<'_>) -> HostResult<Value> {
    let file_name = args.string(0)?;
    backend
        .set_jpl_file(file_name)
        .map_err(|err| args.reject(0, err))?;
    Ok(Value::Null)
}

fn set_topocentric<B: Backend>(backend: &mut B, args: &Args<'_>) -> HostResult<Value> {
    let position = GeoPosition::new(args.f64(0)?, args.f64(1)?, args.f64(2)?);
    backend.set_topocentric(position);
    Ok(Value::Null)
}

fn set_sidereal_mode<B: Backend>(backend: &mut B, args: &Args<'_>) -> HostResult<Value> {
    let sidereal = SiderealConfig {
        mode: SiderealMode(args.i32(0)?),
        t0: args.f64(1)?,
        ayan_t0: args.f64(2)?,
    };
    backend.set_sidereal_mode(sidereal);
    Ok(Value::Null)
}

// =========================================================
// Calendar
// =========================================================

fn julian_day<B: Backend>(backend: &mut B, args: &Args<'_>) -> HostResult<Value> {
    // month and day pass through to the library as given, negative or not
    let date = CalendarDate::new(
        args.i32(0)?,
        args.i32(1)? as u32,
        args.i32(2)? as u32,
        args.f64(3)?,
    );
    let calendar = args.calendar(4)?;
    Ok(json!(backend.julian_day(&date, calendar)))
}

fn reverse_julian_day<B: Backend>(backend: &mut B, args: &Args<'_>) -> HostResult<Value> {
    let jd = args.f64(0)?;
    let calendar = args.calendar(1)?;
    let date = backend.reverse_julian_day(jd, calendar);
    Ok(json!([date.year, date.month, date.day, date.hour]))
}

// =========================================================
// Positions and ayanamsha
// =========================================================

fn calculate_position<B: Backend>(backend: &mut B, args: &Args<'_>) -> HostResult<Value> {
    let jd = args.f64(0)?;
    let body = args.i32(1)?.into();
    let flags = CalcFlags(args.i32(2)?);
    let position = backend.calculate_position(jd, body, flags)?;
    Ok(json!(position.to_array()))
}

fn get_ayanamsha<B: Backend>(backend: &mut B, args: &Args<'_>) -> HostResult<Value> {
    Ok(json!(backend.ayanamsha(args.f64(0)?)))
}

fn get_ayanamsha_extended<B: Backend>(backend: &mut B, args: &Args<'_>) -> HostResult<Value> {
    let jd = args.f64(0)?;
    let flags = CalcFlags(args.i32(1)?);
    Ok(json!(backend.ayanamsha_extended(jd, flags)?))
}

// =========================================================
// Houses
// =========================================================

fn cusps_and_angles(houses: &HouseCusps) -> Vec<Value> {
    vec![json!(houses.cusps), json!(houses.ascmc)]
}

fn compute_houses<B: Backend>(backend: &mut B, args: &Args<'_>) -> HostResult<Value> {
    let jd = args.f64(0)?;
    let lat = args.f64(1)?;
    let lon = args.f64(2)?;
    let system = args.house_system(3)?;
    let houses = backend.houses(jd, lat, lon, system)?;
    Ok(Value::Array(cusps_and_angles(&houses)))
}

fn compute_houses_extended<B: Backend>(backend: &mut B, args: &Args<'_>) -> HostResult<Value> {
    let jd = args.f64(0)?;
    let flags = CalcFlags(args.i32(1)?);
    let lat = args.f64(2)?;
    let lon = args.f64(3)?;
    let system = args.house_system(4)?;
    let houses = backend.houses_extended(jd, flags, lat, lon, system)?;

    let mut out = cusps_and_angles(&houses.positions);
    out.extend(cusps_and_angles(&houses.speeds));
    Ok(Value::Array(out))
}

fn house_position<B: Backend>(backend: &mut B, args: &Args<'_>) -> HostResult<Value> {
    let armc = args.f64(0)?;
    let lat = args.f64(1)?;
    let obliquity = args.f64(2)?;
    let system = args.house_system(3)?;
    let ecl_lon = args.f64(4)?;
    let ecl_lat = args.f64(5)?;
    let hpos = backend.house_position(armc, lat, obliquity, system, ecl_lon, ecl_lat)?;
    Ok(json!(hpos))
}

// =========================================================
// Rise, transit and horizontal coordinates
// =========================================================

/// Shared by both rise shims; a tenth argument is the horizon height
fn rise_or_transit<B: Backend>(backend: &mut B, args: &Args<'_>) -> HostResult<Value> {
    let jd = args.f64(0)?;
    let target = args.rise_target(1)?;
    let flags = CalcFlags(args.i32(2)?);
    let event = RiseEvent(args.i32(3)?);
    let observer = args.observer(4)?;
    let horizon_height = args.optional_f64(9)?;

    let tret = backend
        .rise_or_transit(jd, &target, flags, event, &observer, horizon_height)
        .map_err(|err| args.reject(1, err))?;
    Ok(json!(tret))
}

fn azimuth_altitude<B: Backend>(backend: &mut B, args: &Args<'_>) -> HostResult<Value> {
    let jd = args.f64(0)?;
    let conversion = HorizonConversion(args.i32(1)?);
    let observer = args.observer(2)?;
    let coordinates = [args.f64(7)?, args.f64(8)?, args.f64(9)?];
    let horizontal = backend.azimuth_altitude(jd, conversion, &observer, coordinates);
    Ok(json!(horizontal.to_array()))
}

fn coordinate_transform<B: Backend>(backend: &mut B, args: &Args<'_>) -> HostResult<Value> {
    let obliquity = args.f64(0)?;
    let coord = SphericalCoord {
        longitude: args.f64(1)?,
        latitude: args.f64(2)?,
        distance: args.optional_f64(3)?,
    };
    Ok(json!(backend.coordinate_transform(obliquity, coord).to_vec()))
}

// =========================================================
// Library
// =========================================================

fn version<B: Backend>(backend: &mut B, _args: &Args<'_>) -> HostResult<Value> {
    Ok(json!(backend.version()))
}

fn planet_name<B: Backend>(backend: &mut B, args: &Args<'_>) -> HostResult<Value> {
    Ok(json!(backend.planet_name(args.i32(0)?.into())))
}

fn close<B: Backend>(backend: &mut B, _args: &Args<'_>) -> HostResult<Value> {
    backend.close();
    Ok(Value::Null)
}
