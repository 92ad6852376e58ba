use diffdrive_sim::input::{DriveCommand, InputEvent, InputSource, ScriptedInput};
use diffdrive_sim::render::{DrawCall, RecordingSink, GREEN, YELLOW};
use diffdrive_sim::simulation::FixedClock;
use diffdrive_sim::{
    DifferentialDrive, GridPathfinder, ObstacleMap, RobotGeometry, RobotPose, SimConfig,
    Simulation, WorldPoint,
};
use itertools::Itertools;

/// The default configuration: 800x600 workspace, 20 unit cells, three obstacles.
#[test]
fn path_avoids_every_obstacle() {
    let config = SimConfig::default();
    let map = ObstacleMap::new(config.obstacles.clone(), config.cell_size).unwrap();
    let solver = GridPathfinder::new(&map, config.width, config.height);
    let path = solver.find_path(config.start, config.goal).unwrap();

    assert!(!path.is_empty());
    assert_eq!(path.first(), Some(&WorldPoint::new(110.0, 110.0)));
    assert_eq!(path.last(), Some(&WorldPoint::new(710.0, 510.0)));
    // (5, 5) to (35, 25) in cells; no detour is needed through the gaps above and below.
    assert_eq!(path.steps(), 50);
    for p in &path {
        assert!(!map.contains_point(p.x, p.y), "{:?} lies in an obstacle", p);
        assert!(!map.is_blocked(p.x - 10.0, p.y - 10.0));
    }
    for (a, b) in path.iter().tuple_windows() {
        assert!((a.distance(b) - 20.0).abs() < 1e-9);
    }
}

#[test]
fn one_second_forward_moves_one_hundred_units() {
    let mut robot = DifferentialDrive::new(
        RobotGeometry::default(),
        RobotPose::new(100.0, 100.0, 0.0),
    );
    robot.set_wheel_speeds(20.0, 20.0);
    robot.integrate(1.0);
    assert_eq!(robot.pose().x - 100.0, 100.0);
    assert_eq!(robot.pose().y, 100.0);
}

#[test]
fn headless_run_overlays_path_and_robot() {
    let mut sim = Simulation::new(SimConfig::default()).unwrap();
    let mut input = ScriptedInput::default()
        .hold(DriveCommand::PivotLeft, 30)
        .hold(DriveCommand::Forward, 30)
        .idle(10);
    let mut sink = RecordingSink::new();
    let frames = sim.run(&mut input, &mut sink, &mut FixedClock::from_fps(60));
    assert_eq!(frames, 72);

    let frame = sink.last_frame();
    assert!(frame.contains(&DrawCall::FillCircle(
        WorldPoint::new(700.0, 500.0),
        20.0,
        GREEN
    )));
    let planned = frame
        .iter()
        .find_map(|c| match c {
            DrawCall::Polyline(points, color, _) if *color == YELLOW => Some(points.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(planned, sim.path().waypoints());

    // Pivoting left for half a second at 5 rad/s leaves the robot in place.
    let pose = sim.robot().pose();
    assert!((pose.heading - 2.5).abs() < 1e-9);
    let moved = pose.position().distance(&WorldPoint::new(100.0, 100.0));
    assert!((moved - 50.0).abs() < 1e-6);
    assert_eq!(input.poll(), vec![InputEvent::Quit]);
}
