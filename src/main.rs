use anyhow::{anyhow, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use u_tardiness::baseline::{BruteForce, GreedyDescent};
use u_tardiness::problem::{Job, ProblemInstance, Sequence};
use u_tardiness::tabu::{StallPolicy, TabuConfig, TabuRunner};

const PROCESSING_TIMES: [u64; 6] = [6, 4, 8, 2, 10, 3];
const DUE_DATES: [u64; 6] = [9, 12, 15, 8, 20, 22];
const WEIGHTS: [u64; 6] = [1, 1, 1, 1, 1, 1];

fn instance_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("instance")
            .long("instance")
            .help("(Optional) Path to a json file holding a list of jobs")
            .value_parser(value_parser!(PathBuf))
            .conflicts_with_all(["processing-times", "due-dates", "weights"]),
    )
    .arg(
        Arg::new("processing-times")
            .long("processing-times")
            .help("(Optional) Comma separated processing times, indexed by job id")
            .value_delimiter(',')
            .num_args(1..)
            .value_parser(value_parser!(u64)),
    )
    .arg(
        Arg::new("due-dates")
            .long("due-dates")
            .help("(Optional) Comma separated due dates, indexed by job id")
            .value_delimiter(',')
            .num_args(1..)
            .value_parser(value_parser!(u64)),
    )
    .arg(
        Arg::new("weights")
            .long("weights")
            .help("(Optional) Comma separated weights, indexed by job id")
            .value_delimiter(',')
            .num_args(1..)
            .value_parser(value_parser!(u64)),
    )
}

fn start_arg() -> Arg {
    Arg::new("start")
        .long("start")
        .help("(Optional) Comma separated starting sequence")
        .value_delimiter(',')
        .num_args(1..)
        .value_parser(value_parser!(usize))
}

fn cli() -> Command {
    Command::new("u-tardiness")
        .about("Single-machine total weighted tardiness sequencing")
        .arg_required_else_help(true)
        .subcommand(
            instance_args(Command::new("tabu").about("Runs tabu search and prints its trace"))
                .arg(start_arg().conflicts_with("seed"))
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("(Optional) Start from a random sequence drawn with this seed")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("tenure")
                        .long("tenure")
                        .help("(Optional) Tabu tenure")
                        .default_value("3")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("iterations")
                        .long("iterations")
                        .help("(Optional) Iteration budget")
                        .default_value("10")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("stall")
                        .long("stall")
                        .help("(Optional) Policy when every neighbor is tabu")
                        .default_value("hold")
                        .value_parser(["hold", "first-neighbor"]),
                )
                .arg(
                    Arg::new("parallel")
                        .long("parallel")
                        .help("Score neighbors in parallel (needs the `parallel` feature)")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the result as json instead of the text trace")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(instance_args(
            Command::new("brute-force").about("Evaluates every permutation"),
        ))
        .subcommand(
            instance_args(Command::new("greedy").about(
                "Runs greedy descent from --start, or from every permutation when omitted",
            ))
            .arg(start_arg())
            .arg(
                Arg::new("iterations")
                    .long("iterations")
                    .help("(Optional) Maximum number of improving moves")
                    .default_value("10")
                    .value_parser(value_parser!(usize)),
            ),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("tabu", sub_m)) => tabu(sub_m),
        Some(("brute-force", sub_m)) => brute_force(sub_m),
        Some(("greedy", sub_m)) => greedy(sub_m),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_instance(matches: &ArgMatches) -> Result<ProblemInstance> {
    if let Some(path) = matches.get_one::<PathBuf>("instance") {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let jobs: Vec<Job> = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        return Ok(ProblemInstance::from_jobs(jobs)?);
    }

    let list = |name: &str, default: &[u64]| -> Vec<u64> {
        matches
            .get_many::<u64>(name)
            .map(|values| values.copied().collect())
            .unwrap_or_else(|| default.to_vec())
    };
    Ok(ProblemInstance::new(
        list("processing-times", &PROCESSING_TIMES),
        list("due-dates", &DUE_DATES),
        list("weights", &WEIGHTS),
    )?)
}

fn load_start(matches: &ArgMatches, instance: &ProblemInstance) -> Result<Sequence> {
    if let Some(ids) = matches.get_many::<usize>("start") {
        return Ok(Sequence::new(ids.copied().collect())?);
    }
    if let Ok(Some(&seed)) = matches.try_get_one::<u64>("seed") {
        let mut rng = StdRng::seed_from_u64(seed);
        return Ok(Sequence::shuffled(instance.len(), &mut rng));
    }
    Ok(Sequence::identity(instance.len()))
}

fn tabu(matches: &ArgMatches) -> Result<()> {
    let instance = load_instance(matches)?;
    let start = load_start(matches, &instance)?;
    let stall_policy = match matches.get_one::<String>("stall").map(String::as_str) {
        Some("first-neighbor") => StallPolicy::FirstNeighbor,
        _ => StallPolicy::Hold,
    };
    let config = TabuConfig::default()
        .with_tabu_tenure(*matches.get_one::<usize>("tenure").unwrap())
        .with_max_iterations(*matches.get_one::<usize>("iterations").unwrap())
        .with_stall_policy(stall_policy)
        .with_parallel(matches.get_flag("parallel"));

    let result = TabuRunner::run(&instance, &start, &config)?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    for record in &result.trace {
        println!("{}", record);
    }
    println!("{}", result);
    Ok(())
}

fn brute_force(matches: &ArgMatches) -> Result<()> {
    let instance = load_instance(matches)?;
    let result = BruteForce::run(&instance)?;
    println!(
        "Best sequence among {} possible sequences is {}, with the optimal value: {}.",
        result.evaluated, result.best, result.best_value
    );
    println!(
        "{} other sequences share this optimal value.",
        result.optimal_count - 1
    );
    Ok(())
}

fn greedy(matches: &ArgMatches) -> Result<()> {
    let instance = load_instance(matches)?;
    let max_iterations = *matches.get_one::<usize>("iterations").unwrap();

    if matches.contains_id("start") {
        let start = load_start(matches, &instance)?;
        let result = GreedyDescent::run(&instance, &start, max_iterations)?;
        println!(
            "Greedy descent from {} reached {} with value: {} after {} improving moves{}.",
            start,
            result.best,
            result.best_value,
            result.iterations,
            if result.hit_limit { " (limit reached)" } else { "" }
        );
        return Ok(());
    }

    let survey = GreedyDescent::survey(&instance, max_iterations)?;
    println!(
        "Greedy descent found {} local minima within {} iterations.",
        survey.local_minima, max_iterations
    );
    println!(
        "Greedy descent stopped {} runs after {} iterations.",
        survey.limit_reached, max_iterations
    );
    println!("Average value: {}.", survey.average_value);
    println!("Average iterations: {}.", survey.average_iterations);
    Ok(())
}
