mod common;

use common::FixtureProvider;
use lumina_astrology::aspects::{AspectKind, NATAL_ASPECTS};
use lumina_astrology::chart::{ChartBuilder, HouseAssigner, NatalChart, Placement};
use lumina_astrology::ephemeris::{
    Body, GeoLocation, HouseFrame, HouseSystem, PositionProvider, TRACKED_BODIES,
};
use lumina_astrology::calculate_birth_chart;
use lumina_astrology::western::{Sign, ZodiacPosition, ZODIAC_SIGNS};

// Known birth data: January 15, 1990, 14:30, New York City
const TEST_DATE: &str = "1990-01-15";
const TEST_TIME: &str = "14:30";
const TEST_LAT: f64 = 40.7128;
const TEST_LON: f64 = -74.0060;

fn new_york_chart() -> NatalChart {
    calculate_birth_chart(&FixtureProvider::new(), TEST_DATE, TEST_TIME, TEST_LAT, TEST_LON).unwrap()
}

#[test]
fn test_chart_has_all_bodies_in_catalog_order() {
    let chart = new_york_chart();
    let bodies: Vec<Body> = chart.placements.keys().copied().collect();
    let mut expected = TRACKED_BODIES.to_vec();
    expected.push(Body::SouthNode);
    assert_eq!(bodies, expected);
    assert!(chart.diagnostics.is_complete());
}

#[test]
fn test_sun_in_capricorn() {
    let chart = new_york_chart();
    assert_eq!(chart.placement(Body::Sun).unwrap().sign, Sign::Capricorn);
}

#[test]
fn test_twelve_sequential_houses() {
    let chart = new_york_chart();
    assert_eq!(chart.houses.len(), 12);
    let numbers: Vec<u8> = chart.houses.iter().map(|h| h.house).collect();
    assert_eq!(numbers, (1..=12).collect::<Vec<u8>>());
}

#[test]
fn test_placement_ranges() {
    let chart = new_york_chart();
    for (body, placement) in &chart.placements {
        assert!((0.0..30.0).contains(&placement.degree_in_sign), "{} degree", body);
        assert!((0.0..360.0).contains(&placement.absolute_degree), "{} absolute", body);
        assert!((1..=12).contains(&placement.house), "{} house", body);
    }
    for cusp in &chart.houses {
        assert!((0.0..30.0).contains(&cusp.degree_in_sign));
        assert!((0.0..360.0).contains(&cusp.absolute_degree));
    }
}

#[test]
fn test_south_node_opposite_north_node() {
    let chart = new_york_chart();
    let north = chart.placement(Body::NorthNode).unwrap();
    let south = chart.placement(Body::SouthNode).unwrap();
    let expected = (north.absolute_degree + 180.0) % 360.0;
    assert!((south.absolute_degree - expected).abs() < 0.01);
    assert!(north.retrograde, "mean node moves backwards");
    assert!(!south.retrograde);
}

#[test]
fn test_houses_assigned_against_cusps() {
    let provider = FixtureProvider::new();
    let chart = calculate_birth_chart(&provider, TEST_DATE, TEST_TIME, TEST_LAT, TEST_LON).unwrap();
    let jd = provider.julian_day(1990, 1, 15, 14.5);
    let frame = provider
        .houses(jd, GeoLocation { lat: TEST_LAT, lon: TEST_LON }, HouseSystem::Placidus)
        .unwrap();

    let assigner = HouseAssigner::new();
    for (body, placement) in &chart.placements {
        assert_eq!(
            placement.house,
            assigner.assign(placement.absolute_degree, &frame.cusps),
            "{}",
            body
        );
    }
}

#[test]
fn test_location_changes_angles_not_bodies() {
    let provider = FixtureProvider::new();
    let new_york = calculate_birth_chart(&provider, TEST_DATE, TEST_TIME, 40.7128, -74.0060).unwrap();
    let tokyo = calculate_birth_chart(&provider, TEST_DATE, TEST_TIME, 35.6762, 139.6503).unwrap();

    assert_ne!(new_york.ascendant, tokyo.ascendant);
    for body in new_york.placements.keys() {
        assert_eq!(
            new_york.placements[body].absolute_degree,
            tokyo.placements[body].absolute_degree
        );
    }
}

#[test]
fn test_aspects_within_orb() {
    let chart = new_york_chart();
    for aspect in &chart.aspects {
        let definition = NATAL_ASPECTS.iter().find(|d| d.kind == aspect.kind).unwrap();
        assert!(aspect.orb <= definition.orb);
        assert_ne!(aspect.body1, aspect.body2);
    }
}

#[test]
fn test_fixed_positions_produce_expected_houses_and_aspects() {
    let provider = FixtureProvider::new()
        .with_position(Body::Sun, 10.0, 1.0)
        .with_position(Body::Moon, 100.0, 13.0)
        .with_position(Body::Mercury, 50.0, -0.5)
        .with_houses(HouseFrame {
            cusps: std::array::from_fn(|i| i as f64 * 30.0),
            ascendant: 0.0,
            midheaven: 270.0,
        });
    let chart = ChartBuilder::new(&provider)
        .calculate_birth_chart(TEST_DATE, TEST_TIME, TEST_LAT, TEST_LON)
        .unwrap();

    assert_eq!(chart.placement(Body::Sun).unwrap().house, 1);
    assert_eq!(chart.placement(Body::Moon).unwrap().house, 4);
    assert_eq!(chart.placement(Body::Mercury).unwrap().house, 2);
    assert!(chart.placement(Body::Mercury).unwrap().retrograde);
    assert_eq!(chart.midheaven.sign, Sign::Capricorn);
    assert!(chart
        .aspects
        .iter()
        .any(|a| a.body1 == Body::Sun && a.body2 == Body::Moon && a.kind == AspectKind::Square));
}

#[test]
fn test_malformed_date_is_rejected() {
    let err = calculate_birth_chart(&FixtureProvider::new(), "not-a-date", "12:00", 40.0, -74.0)
        .unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().starts_with("Chart calculation failed"));

    assert!(calculate_birth_chart(&FixtureProvider::new(), "", "12:00", 40.0, -74.0).is_err());
    assert!(calculate_birth_chart(&FixtureProvider::new(), TEST_DATE, "noon", 40.0, -74.0).is_err());
}

#[test]
fn test_single_body_failure_degrades() {
    let provider = FixtureProvider::new().failing(Body::Mars);
    let chart = calculate_birth_chart(&provider, TEST_DATE, TEST_TIME, TEST_LAT, TEST_LON).unwrap();

    assert_eq!(chart.placements.len(), 12);
    assert_eq!(chart.placement(Body::Mars), Some(&Placement::degraded()));
    assert_eq!(chart.diagnostics.degraded_bodies, vec![Body::Mars]);
    assert!(!chart.diagnostics.house_fallback);
    assert!(chart
        .aspects
        .iter()
        .all(|a| a.body1 != Body::Mars && a.body2 != Body::Mars));
    assert_eq!(chart.placement(Body::Sun).unwrap().sign, Sign::Capricorn);
}

#[test]
fn test_north_node_failure_carries_to_south_node() {
    let provider = FixtureProvider::new().failing(Body::NorthNode);
    let chart = calculate_birth_chart(&provider, TEST_DATE, TEST_TIME, TEST_LAT, TEST_LON).unwrap();

    let south = chart.placement(Body::SouthNode).unwrap();
    assert_eq!(south.absolute_degree, 180.0);
    assert_eq!(south.sign, Sign::Libra);
    assert_eq!(south.house, 1);
    assert_eq!(
        chart.diagnostics.degraded_bodies,
        vec![Body::NorthNode, Body::SouthNode]
    );
}

#[test]
fn test_house_failure_uses_whole_sign_placeholder() {
    let provider = FixtureProvider::new().without_houses();
    let chart = calculate_birth_chart(&provider, TEST_DATE, TEST_TIME, TEST_LAT, TEST_LON).unwrap();

    assert!(chart.diagnostics.house_fallback);
    assert_eq!(chart.houses.len(), 12);
    for (i, cusp) in chart.houses.iter().enumerate() {
        assert_eq!(cusp.house as usize, i + 1);
        assert_eq!(cusp.sign, ZODIAC_SIGNS[i]);
        assert_eq!(cusp.degree_in_sign, 0.0);
        assert_eq!(cusp.absolute_degree, i as f64 * 30.0);
    }
    assert_eq!(chart.ascendant, ZodiacPosition::default());
    assert_eq!(chart.midheaven, ZodiacPosition::default());
    assert!(chart.placements.values().all(|p| p.house == 1));
    // aspects still computed
    assert_eq!(chart.aspects, new_york_chart().aspects);
}

#[test]
fn test_chart_wire_format() {
    let chart = new_york_chart();
    let json = serde_json::to_value(&chart).unwrap();

    for key in ["planets", "ascendant", "midheaven", "houses", "aspects"] {
        assert!(json.get(key).is_some(), "missing {}", key);
    }
    assert!(json.get("diagnostics").is_none());

    let node = &json["planets"]["North Node"];
    for key in ["sign", "degree", "absolute_degree", "house", "retrograde"] {
        assert!(node.get(key).is_some(), "North Node missing {}", key);
    }
    assert_eq!(json["planets"]["Sun"]["sign"], "Capricorn");
    assert_eq!(json["houses"][0]["house"], 1);
    assert!(json["ascendant"].get("degree").is_some());
}

#[test]
fn test_stored_chart_round_trips() {
    let chart = new_york_chart();
    let text = serde_json::to_string(&chart).unwrap();
    let restored: NatalChart = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, chart);
}
