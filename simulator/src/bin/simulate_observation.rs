//! Simulate photon counts from a single star
//!
//! Builds an instrument from a preset or a JSON configuration, observes a
//! blackbody star described on the command line and prints the per-bin
//! expected and simulated photon counts.
//!
//! Usage:
//! ```
//! cargo run --bin simulate_observation -- [OPTIONS]
//! ```
//!
//! See --help for detailed options.

use clap::Parser;
use log::info;
use simulator::shared_args::{SharedSimulationArgs, StarArgs};
use simulator::{Instrument, ObsType, StellarPhysics};

#[derive(Parser, Debug)]
#[command(
    name = "Observation Simulator",
    about = "Simulates photon counts from a blackbody star",
    long_about = None
)]
struct Args {
    #[command(flatten)]
    shared: SharedSimulationArgs,

    #[command(flatten)]
    star: StarArgs,

    /// Print the result as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging from environment variables
    env_logger::init();

    let args = Args::parse();

    let obstype: ObsType = args.shared.obstype.parse()?;
    let instrument = Instrument::new(args.shared.instrument.load_config()?)?;
    let star = args.star.to_star();

    info!("{instrument}");
    info!("{star}");

    let result = instrument.simulate(&star, args.shared.obstime, obstype, args.shared.seed)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Observation Simulator");
    println!("=====================");
    println!("Instrument: {}", instrument.name());
    println!("  Bins: {}", instrument.nlam());
    println!("  Bin width: {:.3} nm", instrument.lambin());
    println!("  Collecting area: {:.4} m²", instrument.area());
    println!("Target: {}", star.name);
    println!("  Luminosity: {:.4e} W", star.luminosity());
    println!("  Peak wavelength: {:.2} nm", star.wien_peak_nm());
    println!("Exposure: {} s", result.obstime_s);
    println!();
    println!(
        "{:>12} {:>16} {:>12} {:>16}",
        "lambda [nm]", "expected", "error", "simulated"
    );
    for (lmbda, expected, error, simulated) in result.rows() {
        println!("{lmbda:>12.3} {expected:>16.6e} {error:>12.4e} {simulated:>16}");
    }
    println!();
    println!(
        "Total: {:.6e} expected, {} simulated",
        result.expected.sum(),
        result.simulated.sum()
    );

    Ok(())
}
