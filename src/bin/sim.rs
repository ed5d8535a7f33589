//! Step-response simulation driver for the rigid-sphere particle.

use anyhow::Result;
use clap::{Arg, Command, ValueHint};
use log::{info, LevelFilter};

use spherodyn::config::ScenarioConfig;
use spherodyn::particle::{Particle, DEFAULT_SAMPLE_TIME};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("SPHERODYN_LOG", "error,spherodyn=info"))
        .init();

    let matches = Command::new("spherodyn-sim")
        .version(clap::crate_version!())
        .about("Integrate a rigid-sphere particle under a force impulse and print the final state")
        .arg(
            Arg::new("position")
                .short('p')
                .long("position")
                .num_args(3)
                .value_parser(clap::value_parser!(f64))
                .default_values(["0.0", "0.0", "0.0"])
                .help("Initial position x y z, in meters"),
        )
        .arg(
            Arg::new("mass")
                .short('m')
                .long("mass")
                .value_parser(clap::value_parser!(f64))
                .default_value("0.001")
                .help("Particle mass in kilograms"),
        )
        .arg(
            Arg::new("radius")
                .short('r')
                .long("radius")
                .value_parser(clap::value_parser!(f64))
                .default_value("1.0")
                .help("Particle radius in meters"),
        )
        .arg(
            Arg::new("sample_time")
                .long("dt")
                .value_parser(clap::value_parser!(f64))
                .default_value("0.001")
                .help("Integration sample time in seconds (must be non-zero)"),
        )
        .arg(
            Arg::new("normal_force")
                .long("normal-force")
                .num_args(3)
                .value_parser(clap::value_parser!(f64))
                .default_values(["2000.0", "1000.0", "0.0"])
                .help("Normal force components fnx fny fnz, in newtons"),
        )
        .arg(
            Arg::new("tangent_force")
                .long("tangent-force")
                .num_args(3)
                .value_parser(clap::value_parser!(f64))
                .default_values(["0.0", "0.0", "0.0"])
                .help("Tangential force components ftx fty ftz, in newtons"),
        )
        .arg(
            Arg::new("steps")
                .short('n')
                .long("steps")
                .value_parser(clap::value_parser!(u32))
                .default_value("1000")
                .help("Number of integration steps"),
        )
        .arg(
            Arg::new("impulse_steps")
                .long("impulse-steps")
                .value_parser(clap::value_parser!(u32))
                .default_value("1")
                .help("Zero the input after this many steps (0 holds the force for the whole run)"),
        )
        .arg(
            Arg::new("scenarios")
                .long("scenarios")
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .value_hint(ValueHint::FilePath)
                .help("Write the stock scenario configuration to this JSON path and exit"),
        )
        .get_matches();

    if let Some(path) = matches.get_one::<std::path::PathBuf>("scenarios") {
        ScenarioConfig::default().save(path)?;
        info!("wrote scenario configuration to {}", path.display());
        return Ok(());
    }

    let position: Vec<f64> = matches
        .get_many::<f64>("position")
        .expect("defaulted")
        .copied()
        .collect();
    let normal: Vec<f64> = matches
        .get_many::<f64>("normal_force")
        .expect("defaulted")
        .copied()
        .collect();
    let tangent: Vec<f64> = matches
        .get_many::<f64>("tangent_force")
        .expect("defaulted")
        .copied()
        .collect();
    let mass = *matches.get_one::<f64>("mass").expect("defaulted");
    let radius = *matches.get_one::<f64>("radius").expect("defaulted");
    let dt = *matches.get_one::<f64>("sample_time").expect("defaulted");
    let steps = *matches.get_one::<u32>("steps").expect("defaulted");
    let impulse_steps = *matches.get_one::<u32>("impulse_steps").expect("defaulted");

    let mut particle = Particle::new(position[0], position[1], position[2], mass, radius);
    if dt != DEFAULT_SAMPLE_TIME {
        particle.set_sample_time(dt)?;
    }
    particle.set_u(
        normal[0], normal[1], normal[2], tangent[0], tangent[1], tangent[2],
    );

    info!(
        "running {} steps at dt = {} s (impulse for {} steps)",
        steps, dt, impulse_steps
    );
    for step in 0..steps {
        if impulse_steps != 0 && step == impulse_steps {
            particle.set_u(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        }
        particle.update()?;
    }

    println!("{}", particle);
    Ok(())
}
