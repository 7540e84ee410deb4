use anyhow::{anyhow, Result};
use clap::{arg, Command};
use std::str::FromStr;
use trijet_kinematics::{trijet_mass, trijet_pt, Batch, Difficulty, DEFAULT_TARGET_MASS};
use trijet_search::{find_best_trijet, Strategy};

fn cli() -> Command {
    Command::new("trijet-worker")
        .about("Runs trijet searches over generated jet events")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("search")
                .about("Runs one strategy over a seeded batch of events")
                .arg(
                    arg!(<STRATEGY> "Search strategy (reference, equivalent, transposed, direct, approximate)")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(<SEED> "Batch seed").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(--num_events [NUM_EVENTS] "Number of events to generate")
                        .default_value("1000")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--num_jets [NUM_JETS] "Number of jets per event")
                        .default_value("8")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--target [TARGET] "Target mass to match (default 171.5)")
                        .value_parser(clap::value_parser!(f64)),
                ),
        )
        .subcommand(
            Command::new("compare")
                .about("Runs every strategy over a seeded batch and reports disagreements")
                .arg(arg!(<SEED> "Batch seed").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(--num_events [NUM_EVENTS] "Number of events to generate")
                        .default_value("1000")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--num_jets [NUM_JETS] "Number of jets per event")
                        .default_value("8")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--target [TARGET] "Target mass to match (default 171.5)")
                        .value_parser(clap::value_parser!(f64)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("search", sub_m)) => search(
            sub_m.get_one::<String>("STRATEGY").unwrap().clone(),
            *sub_m.get_one::<u64>("SEED").unwrap(),
            *sub_m.get_one::<usize>("num_events").unwrap(),
            *sub_m.get_one::<usize>("num_jets").unwrap(),
            sub_m.get_one::<f64>("target").copied().unwrap_or(DEFAULT_TARGET_MASS),
        ),
        Some(("compare", sub_m)) => compare(
            *sub_m.get_one::<u64>("SEED").unwrap(),
            *sub_m.get_one::<usize>("num_events").unwrap(),
            *sub_m.get_one::<usize>("num_jets").unwrap(),
            sub_m.get_one::<f64>("target").copied().unwrap_or(DEFAULT_TARGET_MASS),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn expand_seed(seed: u64) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[..8].copy_from_slice(&seed.to_be_bytes());
    bytes
}

pub fn search(
    strategy: String,
    seed: u64,
    num_events: usize,
    num_jets: usize,
    target: f64,
) -> Result<()> {
    // Reject unknown strategy names before any work.
    let strategy = Strategy::from_str(&strategy)?;

    let batch = Batch::generate_instance(
        &expand_seed(seed),
        &Difficulty { num_jets },
        num_events,
    )?;

    let mut sum_pt = 0.0;
    let mut sum_mass = 0.0;
    for event in &batch.events {
        let trijet = find_best_trijet(strategy, &event.jets, target)?;
        let columns = event.columns();
        sum_pt += trijet_pt(&columns, &trijet)?;
        sum_mass += trijet_mass(&columns, &trijet)?;
    }

    let n = batch.events.len() as f64;
    println!("strategy: {}", strategy.name());
    println!("events: {}", batch.events.len());
    println!("mean trijet pt: {}", sum_pt / n);
    println!("mean trijet mass: {}", sum_mass / n);
    Ok(())
}

pub fn compare(seed: u64, num_events: usize, num_jets: usize, target: f64) -> Result<()> {
    let batch = Batch::generate_instance(
        &expand_seed(seed),
        &Difficulty { num_jets },
        num_events,
    )?;

    let mut approximate_matches = 0usize;
    for (i, event) in batch.events.iter().enumerate() {
        let exact = find_best_trijet(Strategy::Reference, &event.jets, target)?;
        for strategy in Strategy::ALL.iter().filter(|s| s.is_exact()) {
            let result = find_best_trijet(*strategy, &event.jets, target)?;
            if result != exact {
                return Err(anyhow!(
                    "Event {}: exact strategy '{}' returned {:?}, expected {:?}",
                    i,
                    strategy.name(),
                    result.indices,
                    exact.indices
                ));
            }
        }
        let approx = find_best_trijet(Strategy::Approximate, &event.jets, target)?;
        if approx == exact {
            approximate_matches += 1;
        }
    }

    println!("events: {}", batch.events.len());
    println!("exact strategies agree on every event");
    println!(
        "approximate matched the exact optimum on {}/{} events",
        approximate_matches,
        batch.events.len()
    );
    Ok(())
}
