use std::path::PathBuf;

use campus_paths_lib::{
    load_campus, Campus, ConnectionRow, DatasetPaths, Error, Heading, LocationRow,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
}

fn small_campus() -> Campus {
    let paths = DatasetPaths {
        buildings: fixture("campus_buildings_small.tsv"),
        paths: fixture("campus_paths_small.tsv"),
    };
    load_campus(&paths).expect("small fixture loads")
}

fn full_campus() -> Campus {
    let paths = DatasetPaths {
        buildings: fixture("campus_buildings.tsv"),
        paths: fixture("campus_paths.tsv"),
    };
    load_campus(&paths).expect("campus fixture loads")
}

#[test]
fn route_passes_through_intermediate_building() {
    let campus = small_campus();
    let route = campus.find_route("B1", "B3").expect("route exists");

    let hops: Vec<(f64, f64, f64)> = route
        .waypoints
        .iter()
        .map(|waypoint| (waypoint.x, waypoint.y, waypoint.leg_distance))
        .collect();
    assert_eq!(hops, vec![(10.0, 10.0, 12.6), (100.1, 0.0, 90.7)]);
    assert_eq!(route.start.short_id, "B1");
    assert_eq!(route.goal.short_id, "B3");
}

#[test]
fn route_to_self_has_no_legs() {
    let campus = small_campus();
    let route = campus.find_route("B2", "B2").expect("self route");
    assert_eq!(route.leg_count(), 0);
    assert_eq!(route.total_distance(), 0.0);
}

#[test]
fn route_crosses_anonymous_waypoint() {
    let campus = full_campus();
    let route = campus.find_route("CSE", "KNE").expect("route exists");

    let legs = route.legs();
    let headings: Vec<Heading> = legs.iter().map(|leg| leg.heading).collect();
    assert_eq!(
        headings,
        vec![Heading::W, Heading::W, Heading::NW, Heading::NW]
    );
    assert_eq!(legs[1].to.x, 2050.0);
    assert_eq!(legs[1].to.y, 1700.0);
    assert!((route.total_distance() - 445.2).abs() < 1e-9);
}

#[test]
fn adjacent_buildings_route_directly() {
    let campus = full_campus();
    let route = campus.find_route("MGH", "OUG").expect("route exists");
    assert_eq!(route.leg_count(), 1);
    assert_eq!(route.waypoints[0].leg_distance, 97.3);
}

#[test]
fn unknown_building_is_distinct_from_missing_route() {
    let campus = full_campus();

    let error = campus.find_route("CSX", "KNE").expect_err("unknown id");
    match error {
        Error::UnknownBuilding { id, suggestions } => {
            assert_eq!(id, "CSX");
            assert_eq!(suggestions.first().map(String::as_str), Some("CSE"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let error = campus.find_route("CSE", "ISO").expect_err("isolated");
    assert!(matches!(error, Error::RouteNotFound { .. }));
    assert_eq!(error.to_string(), "no route found between CSE and ISO");
}

#[test]
fn unknown_goal_is_reported_too() {
    let campus = small_campus();
    let error = campus.find_route("B1", "Z9").expect_err("unknown goal");
    assert!(matches!(error, Error::UnknownBuilding { id, .. } if id == "Z9"));
}

#[test]
fn building_directory_is_sorted_by_id() {
    let campus = full_campus();
    let ids: Vec<String> = campus.buildings_sorted_by_id().into_keys().collect();
    assert_eq!(ids, vec!["CSE", "EEB", "ISO", "KNE", "MGH", "OUG", "SUZ"]);

    assert_eq!(
        campus.long_name("KNE"),
        Some("Kane Hall (North Entrance)")
    );
    assert_eq!(campus.long_name("nope"), None);
    assert!(campus.location("nope").is_none());
    assert!(campus.location("CSE").is_some_and(|cse| !cse.is_waypoint()));
}

#[test]
fn waypoints_stay_out_of_the_directory() {
    let campus = full_campus();
    assert_eq!(campus.buildings_sorted_by_id().len(), 7);
    assert_eq!(campus.graph().len(), 8);
}

#[test]
fn reloading_replaces_previous_contents() {
    let locations = vec![
        LocationRow {
            short_id: "A".to_string(),
            long_name: "Alpha".to_string(),
            x: 0.0,
            y: 0.0,
        },
        LocationRow {
            short_id: "B".to_string(),
            long_name: "Beta".to_string(),
            x: 3.0,
            y: 4.0,
        },
    ];
    let connections = vec![ConnectionRow {
        origin_x: 0.0,
        origin_y: 0.0,
        dest_x: 3.0,
        dest_y: 4.0,
        distance: 5.0,
    }];

    let mut campus = Campus::from_rows(&locations, &connections).expect("loads");
    let before = campus.graph().to_string();
    campus.load(&locations, &connections).expect("reloads");
    assert_eq!(campus.graph().to_string(), before);
    assert_eq!(campus.graph().edge_count(), 1);

    campus.load(&locations[..1], &[]).expect("smaller dataset");
    assert_eq!(campus.buildings_sorted_by_id().len(), 1);
    assert!(campus.location("B").is_none());
}

#[test]
fn failed_load_leaves_campus_empty() {
    let mut campus = small_campus();
    let bad = ConnectionRow {
        origin_x: 1.1,
        origin_y: 1.1,
        dest_x: 10.0,
        dest_y: 10.0,
        distance: f64::NAN,
    };
    let error = campus.load(&[], &[bad]).expect_err("nan distance");
    assert!(matches!(error, Error::InvalidDistance { .. }));
    assert!(campus.graph().is_empty());
    assert!(campus.buildings_sorted_by_id().is_empty());
}
