//! Vortex in a closed box.
//!
//! Runs the default configuration (256² cells, HLLC, minmod, reflective
//! walls) to the reference end time and reports conservation diagnostics
//! along the way.
//!
//! ```text
//! RUST_LOG=info cargo run --release --example vortex -- [n] [adaptive]
//! ```

use euler_fv::simulation::{EulerSimulation, FlowSimulation, SimulationRunner};
use euler_fv::solver::{DiagnosticsTracker, GridConfig, TimeStepping};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let n = match args.next() {
        Some(arg) => arg.parse()?,
        None => 256,
    };
    let time_stepping = match args.next() {
        Some(arg) => arg.parse::<TimeStepping>()?,
        None => TimeStepping::Fixed,
    };

    let config = GridConfig::new(n).with_time_stepping(time_stepping);

    println!("2D Euler Vortex");
    println!("===============");
    println!("Grid: {}x{} (dx = {:.4e})", n, n, config.dx());
    println!("CFL: {}, gamma: {}", config.cfl, config.gamma);
    println!("Time stepping: {}", config.time_stepping);
    println!("Boundaries: {}", config.boundary);
    println!("End time: {} (~{} fixed steps)", config.t_end, config.estimated_steps());
    println!();

    let t_end = config.t_end;
    let mut sim = EulerSimulation::new(config)?;
    let mut tracker = DiagnosticsTracker::new(sim.diagnostics());
    println!("t = {:.4}: {}", 0.0, tracker.initial().summary_line());

    let summary = SimulationRunner::new()
        .with_t_end(t_end)
        .with_callback_interval(t_end / 8.0)
        .run_with_callback(&mut sim, |sim| {
            let time = sim.info().time;
            if time > 0.0 {
                tracker.update(time, sim.diagnostics());
                println!("t = {:.4}: {}", time, tracker.current().summary_line());
            }
        });

    println!();
    println!(
        "{} steps in {:.2} s ({:.1} steps/s), stopped: {}",
        summary.n_steps,
        summary.wall_time,
        summary.steps_per_second(),
        summary.stop_reason
    );
    if sim.conserves_mass() {
        println!("Relative mass error (closed box): {:.3e}", tracker.mass_error());
    } else {
        println!("Relative mass change (open boundaries): {:.3e}", tracker.mass_error());
    }
    println!("Relative energy change: {:.3e}", tracker.energy_change());
    println!("Max CFL seen: {:.3}", tracker.max_cfl_seen());
    println!();
    println!("{}", tracker.current().detailed());

    tracker.log_summary();
    if !tracker.is_stable() {
        return Err("simulation became unstable".into());
    }
    Ok(())
}
