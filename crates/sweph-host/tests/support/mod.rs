#![allow(dead_code)]

use serde_json::{json, Value};
use sweph::{
    Body, CalcFlags, Calendar, CalendarDate, GeoPosition, HorizonConversion, Horizontal,
    HouseCusps, HouseCuspsWithSpeed, HouseSystem, Observer, Position, RiseEvent, RiseTarget,
    SiderealConfig, SphericalCoord,
};
use sweph_host::{Backend, Namespace};

/// One backend invocation, with the typed arguments it received
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    SetEphemerisPath(String),
    SetJplFile(String),
    SetTopocentric(GeoPosition),
    SetSiderealMode(SiderealConfig),
    JulianDay(CalendarDate, Calendar),
    ReverseJulianDay(f64, Calendar),
    CalculatePosition(f64, Body, CalcFlags),
    Ayanamsha(f64),
    AyanamshaExtended(f64, CalcFlags),
    Houses(f64, f64, f64, HouseSystem),
    HousesExtended(f64, CalcFlags, f64, f64, HouseSystem),
    HousePosition(f64, f64, f64, HouseSystem, f64, f64),
    RiseOrTransit(f64, RiseTarget, CalcFlags, RiseEvent, Observer, Option<f64>),
    AzimuthAltitude(f64, HorizonConversion, Observer, [f64; 3]),
    CoordinateTransform(f64, SphericalCoord),
    PlanetName(Body),
    Close,
}

/// Backend that records every call and answers with canned values.
///
/// Interior mutability lets the `&self` operations record too.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub calls: std::cell::RefCell<Vec<Recorded>>,
    /// When set, every fallible operation fails with this native message
    pub native_failure: Option<String>,
}

impl RecordingBackend {
    pub fn failing(message: &str) -> Self {
        Self {
            native_failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    fn record(&self, call: Recorded) {
        self.calls.borrow_mut().push(call);
    }

    fn outcome<T>(&self, value: T) -> sweph::Result<T> {
        match &self.native_failure {
            Some(message) => Err(sweph::Error::Native(message.clone())),
            None => Ok(value),
        }
    }

    pub fn last(&self) -> Option<Recorded> {
        self.calls.borrow().last().cloned()
    }
}

fn canned_houses(system: HouseSystem, scale: f64) -> HouseCusps {
    let cusps = (0..system.cusp_count())
        .map(|i| i as f64 * 30.0 * scale)
        .collect();
    let mut ascmc = [0.0; 10];
    for (i, slot) in ascmc.iter_mut().enumerate() {
        *slot = (100 + i) as f64 * scale;
    }
    HouseCusps { cusps, ascmc }
}

impl Backend for RecordingBackend {
    fn set_ephemeris_path(&mut self, path: &str) -> sweph::Result<()> {
        self.record(Recorded::SetEphemerisPath(path.to_string()));
        if path.contains('\0') {
            return Err(sweph::Error::InvalidInput("path contains null bytes".into()));
        }
        Ok(())
    }

    fn set_jpl_file(&mut self, file_name: &str) -> sweph::Result<()> {
        self.record(Recorded::SetJplFile(file_name.to_string()));
        Ok(())
    }

    fn set_topocentric(&mut self, position: GeoPosition) {
        self.record(Recorded::SetTopocentric(position));
    }

    fn set_sidereal_mode(&mut self, sidereal: SiderealConfig) {
        self.record(Recorded::SetSiderealMode(sidereal));
    }

    fn julian_day(&self, date: &CalendarDate, calendar: Calendar) -> f64 {
        self.record(Recorded::JulianDay(*date, calendar));
        2444838.972916667
    }

    fn reverse_julian_day(&self, jd: f64, calendar: Calendar) -> CalendarDate {
        self.record(Recorded::ReverseJulianDay(jd, calendar));
        CalendarDate::new(-44, 3, 15, 12.5)
    }

    fn calculate_position(&self, jd_ut: f64, body: Body, flags: CalcFlags) -> sweph::Result<Position> {
        self.record(Recorded::CalculatePosition(jd_ut, body, flags));
        self.outcome(Position::from([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]))
    }

    fn ayanamsha(&self, jd_ut: f64) -> f64 {
        self.record(Recorded::Ayanamsha(jd_ut));
        24.0
    }

    fn ayanamsha_extended(&self, jd_ut: f64, flags: CalcFlags) -> sweph::Result<f64> {
        self.record(Recorded::AyanamshaExtended(jd_ut, flags));
        self.outcome(23.5)
    }

    fn houses(&self, jd_ut: f64, lat: f64, lon: f64, system: HouseSystem) -> sweph::Result<HouseCusps> {
        self.record(Recorded::Houses(jd_ut, lat, lon, system));
        self.outcome(canned_houses(system, 1.0))
    }

    fn houses_extended(
        &self,
        jd_ut: f64,
        flags: CalcFlags,
        lat: f64,
        lon: f64,
        system: HouseSystem,
    ) -> sweph::Result<HouseCuspsWithSpeed> {
        self.record(Recorded::HousesExtended(jd_ut, flags, lat, lon, system));
        self.outcome(HouseCuspsWithSpeed {
            positions: canned_houses(system, 1.0),
            speeds: canned_houses(system, 0.01),
        })
    }

    fn house_position(
        &self,
        armc: f64,
        lat: f64,
        obliquity: f64,
        system: HouseSystem,
        ecl_lon: f64,
        ecl_lat: f64,
    ) -> sweph::Result<f64> {
        self.record(Recorded::HousePosition(armc, lat, obliquity, system, ecl_lon, ecl_lat));
        self.outcome(7.25)
    }

    fn rise_or_transit(
        &self,
        jd_ut: f64,
        target: &RiseTarget,
        flags: CalcFlags,
        event: RiseEvent,
        observer: &Observer,
        horizon_height: Option<f64>,
    ) -> sweph::Result<f64> {
        self.record(Recorded::RiseOrTransit(
            jd_ut,
            target.clone(),
            flags,
            event,
            *observer,
            horizon_height,
        ));
        self.outcome(jd_ut + 0.25)
    }

    fn azimuth_altitude(
        &self,
        jd_ut: f64,
        conversion: HorizonConversion,
        observer: &Observer,
        coordinates: [f64; 3],
    ) -> Horizontal {
        self.record(Recorded::AzimuthAltitude(jd_ut, conversion, *observer, coordinates));
        Horizontal {
            azimuth: 180.0,
            true_altitude: 10.0,
            apparent_altitude: 10.1,
        }
    }

    fn coordinate_transform(&self, obliquity: f64, coord: SphericalCoord) -> SphericalCoord {
        self.record(Recorded::CoordinateTransform(obliquity, coord));
        coord
    }

    fn version(&self) -> String {
        "0.0.test".to_string()
    }

    fn planet_name(&self, body: Body) -> String {
        self.record(Recorded::PlanetName(body));
        format!("body {body}")
    }

    fn close(&mut self) {
        self.record(Recorded::Close);
    }
}

pub fn recording_namespace() -> Namespace<RecordingBackend> {
    Namespace::with_backend(RecordingBackend::default())
}

/// `n` numeric arguments 1.0, 2.0, ...
pub fn numbers(n: usize) -> Vec<Value> {
    (1..=n).map(|i| json!(i as f64)).collect()
}
