use std::env;
use std::process;

use clap::{App, Arg, ArgGroup, ArgMatches};
use log::debug;

use sliding_puzzle_solver::config::{Config, Dedup, Method};
use sliding_puzzle_solver::{LoadBoard, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sliding-puzzle-solver")
        .author("martin-t")
        .version("0.1")
        .about("Finds the shortest solution of an NxN sliding puzzle or proves there is none")
        .arg(
            Arg::with_name("manhattan")
                .short("m")
                .long("manhattan")
                .help("order states by moves + manhattan distance (default)"),
        )
        .arg(
            Arg::with_name("hamming")
                .short("a")
                .long("hamming")
                .help("order states by moves + hamming distance"),
        )
        .group(ArgGroup::with_name("method").args(&["manhattan", "hamming"]))
        .arg(
            Arg::with_name("weight")
                .short("w")
                .long("weight")
                .takes_value(true)
                .validator(|w| match w.parse::<u32>() {
                    Ok(w) if w >= 1 => Ok(()),
                    _ => Err("must be a positive integer".to_owned()),
                })
                .help("multiply the heuristic - faster but the solution might not be optimal"),
        )
        .arg(
            Arg::with_name("closed-set")
                .short("c")
                .long("closed-set")
                .help("never expand the same board twice (only the previous board is skipped by default)"),
        )
        .arg(
            Arg::with_name("stats")
                .short("s")
                .long("stats")
                .help("print search statistics"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let config = config_from(&matches);
    debug!("Using {}", config);

    // unwrap is ok - clap ensures it's there
    let path = matches.value_of("file").unwrap();

    let board = path.load_board().unwrap_or_else(|err| {
        let current_dir = env::current_dir().unwrap_or_default();
        eprintln!(
            "Can't load board {} in {}: {}",
            path,
            current_dir.display(),
            err
        );
        process::exit(1);
    });

    println!("Solving {}...", path);
    let solver = board.solve(&config).unwrap_or_else(|err| {
        eprintln!("Failed to solve: {}", err);
        process::exit(1);
    });

    match solver.moves() {
        None => println!("No solution possible"),
        Some(moves) => {
            println!("Minimum number of moves = {}", moves);
            for board in solver.solution() {
                println!("{}", board);
            }
        }
    }

    if matches.is_present("stats") {
        println!("Initial board search:");
        println!("{}", solver.stats());
        println!("Twin board search:");
        println!("{}", solver.twin_stats());
    }
}

fn config_from(matches: &ArgMatches<'_>) -> Config {
    let method = if matches.is_present("hamming") {
        Method::Hamming
    } else {
        Method::Manhattan
    };
    let dedup = if matches.is_present("closed-set") {
        Dedup::Closed
    } else {
        Dedup::Predecessor
    };
    // validated by clap
    let weight = matches
        .value_of("weight")
        .and_then(|w| w.parse().ok())
        .unwrap_or(1);
    Config::new(method, dedup, weight)
}
