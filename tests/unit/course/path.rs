use super::*;

#[test]
fn default_maze_is_valid_and_left_to_right() {
    let course = Course::default_maze();
    assert_eq!(course.waypoint_count(), DEFAULT_MAZE_WAYPOINTS.len());
    assert_eq!(course.waypoint(0), Point::new(150.0, 300.0));
    assert_eq!(course.exit(), Point::new(850.0, 350.0));
    assert!(course.total_len() > 0.0);
}

#[test]
fn construction_rejects_degenerate_input() {
    assert!(Course::new(vec![Point::new(0.0, 0.0)], Point::ORIGIN).is_err());
    assert!(
        Course::new(
            vec![Point::new(0.0, 0.0), Point::new(0.0, 0.0)],
            Point::ORIGIN
        )
        .is_err()
    );
    assert!(
        Course::new(
            vec![Point::new(0.0, f64::NAN), Point::new(1.0, 0.0)],
            Point::ORIGIN
        )
        .is_err()
    );
    assert!(
        Course::new(
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
            Point::new(f64::INFINITY, 0.0)
        )
        .is_err()
    );
}

#[test]
fn point_at_clamps_and_hits_endpoints() {
    let course = Course::default_maze();
    assert_eq!(course.point_at(-0.5), course.waypoint(0));
    assert_eq!(course.point_at(0.0), course.waypoint(0));
    assert_eq!(course.point_at(1.0), course.exit());
    assert_eq!(course.point_at(2.0), course.exit());
}

#[test]
fn point_at_is_on_the_polyline() {
    let course = Course::new(
        vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
        ],
        Point::ORIGIN,
    )
    .unwrap();
    // Halfway along a 200px course is the corner.
    assert_eq!(course.point_at(0.5), Point::new(100.0, 0.0));
    // A quarter of the way lies on the first segment.
    assert_eq!(course.point_at(0.25), Point::new(50.0, 0.0));
}

#[test]
fn target_waypoint_maps_progress_to_indices() {
    let course = Course::default_maze();
    let n = course.waypoint_count();
    assert_eq!(course.target_waypoint(0.0), 0);
    assert_eq!(course.target_waypoint(1.0), n - 1);
    assert_eq!(course.target_waypoint(0.5), (n - 1) / 2);
    // Monotone in progress.
    let mut last = 0;
    for i in 0..=100 {
        let t = course.target_waypoint(i as f64 / 100.0);
        assert!(t >= last);
        last = t;
    }
}

#[test]
fn lane_offsets_are_centered() {
    assert_eq!(Course::lane_offset(0, 1), 0.0);
    assert_eq!(
        Course::lane_offset(0, 2) + Course::lane_offset(1, 2),
        0.0
    );
    assert_eq!(Course::lane_offset(1, 3), 0.0);
    assert_eq!(Course::lane_offset(2, 3), LANE_SPACING_PX);
}

#[test]
fn start_stagger_grows_per_player() {
    assert_eq!(Course::start_stagger(0), 0.0);
    assert_eq!(Course::start_stagger(2), 2.0 * START_STAGGER_PX);
}

#[test]
fn pellets_follow_segment_spacing() {
    let course = Course::new(
        vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
        Point::ORIGIN,
    )
    .unwrap();
    let pellets = course.pellet_points();
    assert_eq!(pellets.len(), 5);
    assert_eq!(pellets[0], Point::new(0.0, 0.0));
    assert_eq!(pellets[1], Point::new(20.0, 0.0));
    // The segment end is excluded.
    assert!(pellets.iter().all(|p| p.x < 100.0));
}

#[test]
fn power_pellets_sit_on_anchor_waypoints() {
    let course = Course::default_maze();
    let n = course.waypoint_count();
    let anchors = course.power_pellet_points();
    assert_eq!(anchors[0], course.waypoint(0));
    assert_eq!(anchors[1], course.waypoint(n / 2));
    assert_eq!(anchors[2], course.waypoint(n - 2));
}
