//! Headless driver: generates random cities, runs a solver and prints
//! each improvement plus a summary.

use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;
use u_tsp::brute::{factorial, BruteForceConfig, BruteForceSolver};
use u_tsp::ga::{GaConfig, GaSolver};
use u_tsp::model::{generate_cities, Bounds, City};
use u_tsp::observer::{GenerationReport, Incumbent, Observer};
use u_tsp::random::create_rng;
use u_tsp::TspResult;

#[derive(Parser)]
#[command(name = "u-tsp", version, about = "Travelling Salesperson: brute force or genetic search")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Exact shortest open path by exhaustive search
    Brute(BruteArgs),
    /// Closed tour by genetic algorithm
    Ga(GaArgs),
}

#[derive(Args)]
struct CommonArgs {
    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// print every improvement
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

#[derive(Args)]
struct BruteArgs {
    /// number of cities
    #[arg(long, default_value_t = 9)]
    cities: usize,

    /// largest accepted city count
    #[arg(long, default_value_t = 10)]
    max_cities: usize,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args)]
struct GaArgs {
    /// number of cities
    #[arg(long, default_value_t = 20)]
    cities: usize,

    /// candidate tours per generation
    #[arg(long, default_value_t = 1000)]
    population_size: usize,

    /// number of generations
    #[arg(long, default_value_t = 500)]
    generations: usize,

    /// fraction of each generation replaced by the best tour
    #[arg(long, default_value_t = 0.02)]
    elite_fraction: f64,

    /// per-position swap probability
    #[arg(long, default_value_t = 0.1)]
    mutation_rate: f64,

    /// evaluate tour lengths in parallel (needs the `parallel` feature)
    #[arg(long, default_value_t = false)]
    parallel: bool,

    #[command(flatten)]
    common: CommonArgs,
}

/// Prints improvements when verbose.
struct ConsolePrinter {
    verbose: bool,
}

impl Observer for ConsolePrinter {
    fn on_incumbent(&mut self, incumbent: &Incumbent) {
        if self.verbose {
            println!(
                "permutation {:>9}: {} pixels {:?}",
                incumbent.permutation, incumbent.length, incumbent.tour
            );
        }
    }

    fn on_generation(&mut self, report: &GenerationReport) {
        if self.verbose && report.last_improvement() == Some(report.generation) {
            println!(
                "generation {:>5}: {} pixels",
                report.generation, report.best_length
            );
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Brute(args) => run_brute(&args),
        Command::Ga(args) => run_ga(&args),
    };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn cities_for(n: usize, bounds: &Bounds, seed: u64) -> TspResult<Vec<City>> {
    generate_cities(n, bounds, &mut create_rng(seed))
}

fn run_brute(args: &BruteArgs) -> TspResult<()> {
    let seed = args.common.seed.unwrap_or_else(rand::random);
    let cities = cities_for(args.cities, &Bounds::brute_force_canvas(), seed)?;
    let config = BruteForceConfig::default().with_max_cities(args.max_cities);
    let solver = BruteForceSolver::new(&cities, config)?;

    println!(
        "seed {seed}: searching {} permutations of {} cities",
        factorial(args.cities).unwrap_or(u64::MAX),
        args.cities
    );
    let mut printer = ConsolePrinter {
        verbose: args.common.verbose,
    };
    let result = solver.run(&mut printer);

    println!(
        "It took {:.3} seconds to run with {} cities to visit.",
        result.elapsed.as_secs_f64(),
        args.cities
    );
    println!("The optimal path is {} pixels long.", result.best_length);
    println!("Path: {:?}", result.best_path);
    Ok(())
}

fn run_ga(args: &GaArgs) -> TspResult<()> {
    let seed = args.common.seed.unwrap_or_else(rand::random);
    let cities = cities_for(args.cities, &Bounds::genetic_canvas(), seed)?;
    let config = GaConfig::default()
        .with_population_size(args.population_size)
        .with_max_generations(args.generations)
        .with_elite_fraction(args.elite_fraction)
        .with_mutation_rate(args.mutation_rate)
        .with_parallel(args.parallel)
        .with_seed(seed.wrapping_add(1));
    let mut solver = GaSolver::new(&cities, config)?;

    println!(
        "seed {seed}: {} cities, population {}, {} generations",
        args.cities, args.population_size, args.generations
    );
    let mut printer = ConsolePrinter {
        verbose: args.common.verbose,
    };
    let result = solver.run(&mut printer);

    match result.last_improvement() {
        Some(generation) => println!(
            "Best: {} pixels from generation {}",
            result.best_length, generation
        ),
        None => println!("Best: {} pixels", result.best_length),
    }
    println!(
        "{} generations in {:.2} seconds",
        result.generations,
        result.elapsed.as_secs_f64()
    );
    println!("Tour: {:?}", result.best_tour);
    Ok(())
}
