//! Calls into the linked Swiss Ephemeris library.
//!
//! Moshier's analytical ephemeris is used everywhere so that no data files are
//! needed. Reference values come from the library itself at the reference
//! instant; tolerances absorb differences between library releases.

use approx::assert_abs_diff_eq;
use sweph::{
    Body, CalcFlags, Ephemeris, Error, GeoPosition, HorizonConversion, HouseSystem, Observer,
    RiseEvent, RiseTarget, SiderealConfig, SiderealMode,
};

mod support;
use support::{bozeman, bozeman_observer, REFERENCE_JD};

// =========================================================
// Positions
// =========================================================

#[test]
fn test_sun_moshier_reference() {
    let eph = Ephemeris::new();
    let sun = eph
        .calculate_position(REFERENCE_JD, Body::SUN, CalcFlags::MOSEPH)
        .unwrap();

    assert_abs_diff_eq!(sun.longitude, 149.26566155075085, epsilon = 1e-3);
    assert_abs_diff_eq!(sun.latitude, -0.00012095608841323021, epsilon = 1e-5);
    assert_abs_diff_eq!(sun.distance, 1.0112944920684557, epsilon = 1e-5);
    // no speed flag, no speeds
    assert_eq!(sun.longitude_speed, 0.0);
    assert_eq!(sun.latitude_speed, 0.0);
    assert_eq!(sun.distance_speed, 0.0);
    assert_eq!(sun.zodiac().sign_name(), "Leo");
}

#[test]
fn test_sun_speed_reference() {
    let eph = Ephemeris::new();
    let sun = eph
        .calculate_position(REFERENCE_JD, Body::SUN, CalcFlags::MOSEPH | CalcFlags::SPEED)
        .unwrap();

    assert_abs_diff_eq!(sun.longitude_speed, 0.9636052090727139, epsilon = 1e-4);
}

#[test]
fn test_true_positions_differ_from_apparent() {
    let eph = Ephemeris::new();
    let flags = CalcFlags::MOSEPH | CalcFlags::SPEED;
    let apparent = eph.calculate_position(REFERENCE_JD, Body::SUN, flags).unwrap();
    let truepos = eph
        .calculate_position(REFERENCE_JD, Body::SUN, flags | CalcFlags::TRUEPOS)
        .unwrap();

    // aberration is about 20 arcseconds
    let diff = truepos.longitude - apparent.longitude;
    assert!(diff > 0.003 && diff < 0.008, "unexpected aberration {diff}");
}

#[test]
fn test_invalid_body_is_native_failure() {
    let eph = Ephemeris::new();
    let err = eph
        .calculate_position(REFERENCE_JD, Body(-999), CalcFlags::MOSEPH)
        .unwrap_err();

    assert!(matches!(err, Error::Native(_)));
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_topocentric_flag_uses_configured_location() {
    let mut eph = Ephemeris::new();
    eph.set_topocentric(bozeman());
    let flags = CalcFlags::MOSEPH | CalcFlags::SPEED | CalcFlags::TRUEPOS;

    let geo = eph.calculate_position(REFERENCE_JD, Body::MOON, flags).unwrap();
    let topo = eph
        .calculate_position(REFERENCE_JD, Body::MOON, flags | CalcFlags::TOPOCTR)
        .unwrap();

    // lunar parallax is up to a degree
    let shift = (geo.longitude - topo.longitude).abs() + (geo.latitude - topo.latitude).abs();
    assert!(shift > 1e-3, "topocentric position did not move: {shift}");
}

#[test]
fn test_contexts_do_not_share_topocentric_location() {
    let mut north = Ephemeris::new();
    north.set_topocentric(GeoPosition::new(0.0, 60.0, 0.0));
    let mut south = Ephemeris::new();
    south.set_topocentric(GeoPosition::new(0.0, -60.0, 0.0));
    let flags = CalcFlags::MOSEPH | CalcFlags::TOPOCTR;

    let first = north.calculate_position(REFERENCE_JD, Body::MOON, flags).unwrap();
    let other = south.calculate_position(REFERENCE_JD, Body::MOON, flags).unwrap();
    let again = north.calculate_position(REFERENCE_JD, Body::MOON, flags).unwrap();

    assert_eq!(first, again);
    assert!((first.latitude - other.latitude).abs() > 1e-3);
}

#[test]
fn test_planet_name() {
    let eph = Ephemeris::new();
    assert_eq!(eph.planet_name(Body::SUN), "Sun");
    assert_eq!(eph.planet_name(Body::MARS), "Mars");
}

// =========================================================
// Sidereal
// =========================================================

#[test]
fn test_ayanamsha_by_mode() {
    let fagan = Ephemeris::new();
    assert_abs_diff_eq!(fagan.ayanamsha(REFERENCE_JD), 24.4838, epsilon = 0.01);

    let mut lahiri = Ephemeris::new();
    lahiri.set_sidereal_mode(SiderealConfig::new(SiderealMode::LAHIRI));
    assert_abs_diff_eq!(lahiri.ayanamsha(REFERENCE_JD), 23.6006, epsilon = 0.01);

    let mut user = Ephemeris::new();
    user.set_sidereal_mode(SiderealConfig::user(2415020.5, 22.460489112721632));
    assert_abs_diff_eq!(user.ayanamsha(REFERENCE_JD), 23.6006, epsilon = 0.01);
}

#[test]
fn test_ayanamsha_extended_matches_plain() {
    let mut eph = Ephemeris::new();
    eph.set_sidereal_mode(SiderealConfig::new(SiderealMode::LAHIRI));
    let extended = eph.ayanamsha_extended(REFERENCE_JD, CalcFlags::MOSEPH).unwrap();
    assert_abs_diff_eq!(extended, eph.ayanamsha(REFERENCE_JD), epsilon = 0.01);
}

#[test]
fn test_sidereal_position_subtracts_ayanamsha() {
    let mut eph = Ephemeris::new();
    eph.set_sidereal_mode(SiderealConfig::new(SiderealMode::LAHIRI));
    let tropical = eph
        .calculate_position(REFERENCE_JD, Body::SUN, CalcFlags::MOSEPH)
        .unwrap();
    let sidereal = eph
        .calculate_position(REFERENCE_JD, Body::SUN, CalcFlags::MOSEPH | CalcFlags::SIDEREAL)
        .unwrap();
    let ayanamsha = eph.ayanamsha_extended(REFERENCE_JD, CalcFlags::MOSEPH).unwrap();

    assert_abs_diff_eq!(tropical.longitude - sidereal.longitude, ayanamsha, epsilon = 0.01);
}

// =========================================================
// Houses
// =========================================================

#[test]
fn test_placidus_reference() {
    let eph = Ephemeris::new();
    let houses = eph
        .houses(REFERENCE_JD, 45.45, -112.183333, HouseSystem::PLACIDUS)
        .unwrap();

    assert_eq!(houses.cusps.len(), 13);
    assert_eq!(houses.cusps[0], 0.0);
    assert_abs_diff_eq!(houses.cusp(1).unwrap(), 133.95429950225963, epsilon = 1e-2);
    assert_abs_diff_eq!(houses.cusp(10).unwrap(), 30.873580044336133, epsilon = 1e-2);
    assert_abs_diff_eq!(houses.ascendant(), 133.95429950225963, epsilon = 1e-2);
    assert_abs_diff_eq!(houses.mc(), 30.873580044336133, epsilon = 1e-2);
    assert_abs_diff_eq!(houses.armc(), 28.745753308674352, epsilon = 1e-2);
}

#[test]
fn test_every_letter_system_computes() {
    let eph = Ephemeris::new();
    for code in ['P', 'K', 'O', 'R', 'C', 'A', 'E', 'V', 'X', 'H', 'T', 'B'] {
        let system = HouseSystem::from_char(code).unwrap();
        let houses = eph.houses(REFERENCE_JD, 45.45, -112.183333, system);
        assert!(houses.is_ok(), "system {code} failed: {houses:?}");
    }
}

#[test]
fn test_gauquelin_returns_sectors() {
    let eph = Ephemeris::new();
    let houses = eph
        .houses(REFERENCE_JD, 45.45, -112.183333, HouseSystem::GAUQUELIN)
        .unwrap();
    assert_eq!(houses.cusps.len(), 37);
}

#[test]
fn test_houses_extended_agrees_with_houses() {
    let eph = Ephemeris::new();
    let plain = eph
        .houses(REFERENCE_JD, 45.45, -112.183333, HouseSystem::KOCH)
        .unwrap();
    let extended = eph
        .houses_extended(REFERENCE_JD, CalcFlags::NONE, 45.45, -112.183333, HouseSystem::KOCH)
        .unwrap();

    for (a, b) in plain.cusps.iter().zip(&extended.positions.cusps) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
    }
    assert_eq!(extended.speeds.cusps.len(), 13);
    // the MC moves about 360° per sidereal day
    assert!(extended.speeds.mc() > 300.0);
}

#[test]
fn test_ascendant_is_on_first_cusp() {
    let eph = Ephemeris::new();
    let houses = eph
        .houses(REFERENCE_JD, 45.45, -112.183333, HouseSystem::PLACIDUS)
        .unwrap();
    let obliquity = eph
        .calculate_position(REFERENCE_JD, Body::ECL_NUT, CalcFlags::MOSEPH)
        .unwrap()
        .longitude;

    let hpos = eph
        .house_position(
            houses.armc(),
            45.45,
            obliquity,
            HouseSystem::PLACIDUS,
            houses.ascendant(),
            0.0,
        )
        .unwrap();

    let from_first = (hpos - 1.0).rem_euclid(12.0);
    assert!(from_first < 1e-3 || from_first > 12.0 - 1e-3, "house position {hpos}");
}

// =========================================================
// Rise and transit
// =========================================================

#[test]
fn test_sunrise_within_a_day() {
    let eph = Ephemeris::new();
    let rise = eph
        .rise_or_transit(
            REFERENCE_JD,
            &RiseTarget::Body(Body::SUN),
            CalcFlags::MOSEPH,
            RiseEvent::RISE,
            &bozeman_observer(),
        )
        .unwrap();
    assert!(rise > REFERENCE_JD && rise < REFERENCE_JD + 1.0);
}

#[test]
fn test_higher_horizon_delays_sunrise() {
    let eph = Ephemeris::new();
    let target = RiseTarget::Body(Body::SUN);
    let observer = bozeman_observer();
    let flat = eph
        .rise_or_transit_true_horizon(
            REFERENCE_JD,
            &target,
            CalcFlags::MOSEPH,
            RiseEvent::RISE,
            &observer,
            0.0,
        )
        .unwrap();
    let hills = eph
        .rise_or_transit_true_horizon(
            REFERENCE_JD,
            &target,
            CalcFlags::MOSEPH,
            RiseEvent::RISE,
            &observer,
            5.0,
        )
        .unwrap();
    assert!(hills > flat);
}

#[test]
fn test_meridian_transit_after_start() {
    let eph = Ephemeris::new();
    let transit = eph
        .rise_or_transit(
            REFERENCE_JD,
            &RiseTarget::Body(Body::MOON),
            CalcFlags::MOSEPH,
            RiseEvent::MERIDIAN_TRANSIT,
            &bozeman_observer(),
        )
        .unwrap();
    assert!(transit > REFERENCE_JD && transit < REFERENCE_JD + 1.1);
}

#[test]
fn test_rise_search_keeps_configured_topocentric_location() {
    let mut eph = Ephemeris::new();
    eph.set_topocentric(GeoPosition::new(10.0, 50.0, 0.0));
    let flags = CalcFlags::MOSEPH | CalcFlags::TOPOCTR;

    let before = eph.calculate_position(REFERENCE_JD, Body::MOON, flags).unwrap();
    eph.rise_or_transit(
        REFERENCE_JD,
        &RiseTarget::Body(Body::SUN),
        CalcFlags::MOSEPH,
        RiseEvent::RISE,
        &bozeman_observer(),
    )
    .unwrap();
    let after_rise = eph.calculate_position(REFERENCE_JD, Body::MOON, flags).unwrap();
    eph.rise_or_transit_true_horizon(
        REFERENCE_JD,
        &RiseTarget::Body(Body::SUN),
        CalcFlags::MOSEPH,
        RiseEvent::SET,
        &bozeman_observer(),
        0.0,
    )
    .unwrap();
    let after_set = eph.calculate_position(REFERENCE_JD, Body::MOON, flags).unwrap();

    assert_eq!(before, after_rise);
    assert_eq!(before, after_set);
}

#[test]
fn test_rise_search_does_not_move_other_contexts() {
    let mut searcher = Ephemeris::new();
    searcher.set_topocentric(GeoPosition::new(10.0, 50.0, 0.0));
    let mut bystander = Ephemeris::new();
    bystander.set_topocentric(GeoPosition::new(10.0, 50.0, 0.0));
    let flags = CalcFlags::MOSEPH | CalcFlags::TOPOCTR;

    let before = bystander.calculate_position(REFERENCE_JD, Body::MOON, flags).unwrap();
    // a polar observer; the search may find no event, the location is still stored
    let polar = Observer::new(GeoPosition::new(-112.18, 80.0, 1524.0), 1013.25, 15.0);
    let _ = searcher.rise_or_transit(
        REFERENCE_JD,
        &RiseTarget::Body(Body::MOON),
        CalcFlags::MOSEPH,
        RiseEvent::RISE,
        &polar,
    );
    let after = bystander.calculate_position(REFERENCE_JD, Body::MOON, flags).unwrap();

    assert_eq!(before, after);
}

#[test]
fn test_empty_star_name_is_rejected() {
    let eph = Ephemeris::new();
    let err = eph
        .rise_or_transit(
            REFERENCE_JD,
            &RiseTarget::Star(String::new()),
            CalcFlags::MOSEPH,
            RiseEvent::RISE,
            &bozeman_observer(),
        )
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_unknown_star_is_native_failure() {
    let eph = Ephemeris::new();
    let err = eph
        .rise_or_transit(
            REFERENCE_JD,
            &RiseTarget::Star("NoSuchStarAnywhere".into()),
            CalcFlags::MOSEPH,
            RiseEvent::RISE,
            &bozeman_observer(),
        )
        .unwrap_err();
    assert!(err.is_native());
    assert!(!err.to_string().is_empty());
}

// =========================================================
// Horizontal coordinates
// =========================================================

#[test]
fn test_azimuth_altitude_of_sun() {
    let eph = Ephemeris::new();
    let sun = eph
        .calculate_position(REFERENCE_JD, Body::SUN, CalcFlags::MOSEPH)
        .unwrap();
    let horizontal = eph.azimuth_altitude(
        REFERENCE_JD,
        HorizonConversion::ECLIPTIC_TO_HORIZON,
        &bozeman_observer(),
        [sun.longitude, sun.latitude, sun.distance],
    );

    assert!((0.0..360.0).contains(&horizontal.azimuth));
    assert!((-90.0..=90.0).contains(&horizontal.true_altitude));
    // refraction only ever lifts the body
    if horizontal.true_altitude > -1.0 {
        assert!(horizontal.apparent_altitude >= horizontal.true_altitude);
    }
}

// =========================================================
// Registers and lifecycle
// =========================================================

#[test]
fn test_calculation_after_close() {
    let mut eph = Ephemeris::new();
    eph.set_sidereal_mode(SiderealConfig::new(SiderealMode::LAHIRI));
    let before = eph.ayanamsha(REFERENCE_JD);

    eph.close();

    // registers are pushed again on the next call
    assert_abs_diff_eq!(eph.ayanamsha(REFERENCE_JD), before, epsilon = 1e-12);
    let sun = eph.calculate_position(REFERENCE_JD, Body::SUN, CalcFlags::MOSEPH);
    assert!(sun.is_ok());
}

#[test]
fn test_missing_ephemeris_path_falls_back_to_moshier() {
    let dir = tempfile::tempdir().unwrap();
    let mut eph = Ephemeris::new();
    eph.set_ephemeris_path(dir.path()).unwrap();
    assert_eq!(eph.ephemeris_path(), Some(dir.path().to_path_buf()));

    // no .se1 files there, the library drops to Moshier and says so in the flags only
    let sun = eph
        .calculate_position(REFERENCE_JD, Body::SUN, CalcFlags::SWIEPH)
        .unwrap();
    assert_abs_diff_eq!(sun.longitude, 149.26566155075085, epsilon = 1e-3);
}

#[test]
fn test_version_is_reported() {
    let version = sweph::version();
    assert!(version.chars().next().is_some_and(|c| c.is_ascii_digit()));
}
