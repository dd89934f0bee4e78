//! The seam between the host namespace and the ephemeris.
//!
//! The namespace only ever talks to a [`Backend`]. Production code uses
//! [`sweph::Ephemeris`]; tests substitute a recording fake so argument
//! marshalling can be checked without the native library.

use sweph::{
    Body, CalcFlags, Calendar, CalendarDate, Ephemeris, GeoPosition, HorizonConversion, Horizontal,
    HouseCusps, HouseCuspsWithSpeed, HouseSystem, Observer, Position, RiseEvent, RiseTarget,
    SiderealConfig, SphericalCoord,
};

/// Operations the host shims dispatch to, one per native entry point
pub trait Backend {
    fn set_ephemeris_path(&mut self, path: &str) -> sweph::Result<()>;

    fn set_jpl_file(&mut self, file_name: &str) -> sweph::Result<()>;

    fn set_topocentric(&mut self, position: GeoPosition);

    fn set_sidereal_mode(&mut self, sidereal: SiderealConfig);

    fn julian_day(&self, date: &CalendarDate, calendar: Calendar) -> f64;

    fn reverse_julian_day(&self, jd: f64, calendar: Calendar) -> CalendarDate;

    fn calculate_position(&self, jd_ut: f64, body: Body, flags: CalcFlags) -> sweph::Result<Position>;

    fn ayanamsha(&self, jd_ut: f64) -> f64;

    fn ayanamsha_extended(&self, jd_ut: f64, flags: CalcFlags) -> sweph::Result<f64>;

    fn houses(&self, jd_ut: f64, lat: f64, lon: f64, system: HouseSystem) -> sweph::Result<HouseCusps>;

    fn houses_extended(
        &self,
        jd_ut: f64,
        flags: CalcFlags,
        lat: f64,
        lon: f64,
        system: HouseSystem,
    ) -> sweph::Result<HouseCuspsWithSpeed>;

    fn house_position(
        &self,
        armc: f64,
        lat: f64,
        obliquity: f64,
        system: HouseSystem,
        ecl_lon: f64,
        ecl_lat: f64,
    ) -> sweph::Result<f64>;

    /// Rise/transit search; `horizon_height` selects the true-horizon variant
    fn rise_or_transit(
        &self,
        jd_ut: f64,
        target: &RiseTarget,
        flags: CalcFlags,
        event: RiseEvent,
        observer: &Observer,
        horizon_height: Option<f64>,
    ) -> sweph::Result<f64>;

    fn azimuth_altitude(
        &self,
        jd_ut: f64,
        conversion: HorizonConversion,
        observer: &Observer,
        coordinates: [f64; 3],
    ) -> Horizontal;

    fn coordinate_transform(&self, obliquity: f64, coord: SphericalCoord) -> SphericalCoord;

    fn version(&self) -> String;

    fn planet_name(&self, body: Body) -> String;

    fn close(&mut self);
}

impl Backend for Ephemeris {
    fn set_ephemeris_path(&mut self, path: &str) -> sweph::Result<()> {
        Ephemeris::set_ephemeris_path(self, path)
    }

    fn set_jpl_file(&mut self, file_name: &str) -> sweph::Result<()> {
        Ephemeris::set_jpl_file(self, file_name)
    }

    fn set_topocentric(&mut self, position: GeoPosition) {
        Ephemeris::set_topocentric(self, position)
    }

    fn set_sidereal_mode(&mut self, sidereal: SiderealConfig) {
        Ephemeris::set_sidereal_mode(self, sidereal)
    }

    fn julian_day(&self, date: &CalendarDate, calendar: Calendar) -> f64 {
        sweph::julian_day(date, calendar)
    }

    fn reverse_julian_day(&self, jd: f64, calendar: Calendar) -> CalendarDate {
        sweph::reverse_julian_day(jd, calendar)
    }

    fn calculate_position(&self, jd_ut: f64, body: Body, flags: CalcFlags) -> sweph::Result<Position> {
        Ephemeris::calculate_position(self, jd_ut, body, flags)
    }

    fn ayanamsha(&self, jd_ut: f64) -> f64 {
        Ephemeris::ayanamsha(self, jd_ut)
    }

    fn ayanamsha_extended(&self, jd_ut: f64, flags: CalcFlags) -> sweph::Result<f64> {
        Ephemeris::ayanamsha_extended(self, jd_ut, flags)
    }

    fn houses(&self, jd_ut: f64, lat: f64, lon: f64, system: HouseSystem) -> sweph::Result<HouseCusps> {
        Ephemeris::houses(self, jd_ut, lat, lon, system)
    }

    fn houses_extended(
        &self,
        jd_ut: f64,
        flags: CalcFlags,
        lat: f64,
        lon: f64,
        system: HouseSystem,
    ) -> sweph::Result<HouseCuspsWithSpeed> {
        Ephemeris::houses_extended(self, jd_ut, flags, lat, lon, system)
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
        Ephemeris::house_position(self, armc, lat, obliquity, system, ecl_lon, ecl_lat)
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
        match horizon_height {
            None => Ephemeris::rise_or_transit(self, jd_ut, target, flags, event, observer),
            Some(height) => Ephemeris::rise_or_transit_true_horizon(
                self, jd_ut, target, flags, event, observer, height,
            ),
        }
    }

    fn azimuth_altitude(
        &self,
        jd_ut: f64,
        conversion: HorizonConversion,
        observer: &Observer,
        coordinates: [f64; 3],
    ) -> Horizontal {
        Ephemeris::azimuth_altitude(self, jd_ut, conversion, observer, coordinates)
    }

    fn coordinate_transform(&self, obliquity: f64, coord: SphericalCoord) -> SphericalCoord {
        sweph::coordinate_transform(obliquity, coord)
    }

    fn version(&self) -> String {
        sweph::version()
    }

    fn planet_name(&self, body: Body) -> String {
        Ephemeris::planet_name(self, body)
    }

    fn close(&mut self) {
        Ephemeris::close(self)
    }
}
