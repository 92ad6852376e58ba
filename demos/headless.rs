use diffdrive_sim::input::{DriveCommand, ScriptedInput};
use diffdrive_sim::render::RecordingSink;
use diffdrive_sim::simulation::FixedClock;
use diffdrive_sim::{SimConfig, Simulation};

// Runs the reference scene without a window. The robot pivots left for half a second, drives
// forward for two seconds and reverses for one, at a fixed 60 frames per second.
//
// Run with RUST_LOG=info to see the planner output.

fn main() {
    env_logger::init();
    let mut sim = match Simulation::new(SimConfig::default()) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    println!("Planned path:");
    for p in sim.path() {
        println!("({}, {})", p.x, p.y);
    }
    let mut input = ScriptedInput::default()
        .hold(DriveCommand::PivotLeft, 30)
        .hold(DriveCommand::Forward, 120)
        .hold(DriveCommand::Reverse, 60);
    let mut sink = RecordingSink::new();
    let frames = sim.run(&mut input, &mut sink, &mut FixedClock::from_fps(60));
    let pose = sim.robot().pose();
    println!(
        "After {} frames: x = {:.2}, y = {:.2}, heading = {:.3} rad",
        frames,
        pose.x,
        pose.y,
        pose.normalized_heading()
    );
    println!("Trail holds {} positions", sim.robot().trail().len());
}
