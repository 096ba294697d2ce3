use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, Command};
use knap_algorithms::{run, Algorithm};
use knap_challenges::knapsack::Instance;
use knap_utils::{jsonify, load_hyperparameters};
use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

fn cli() -> Command {
    Command::new("knap-runtime")
        .about("Solves a 0/1 knapsack instance with the selected algorithm")
        .arg_required_else_help(true)
        .arg(
            arg!(<ALGORITHM> "Algorithm selector: 0|dp, 1|greedy or 2|backtracking")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(
            arg!(--input [INPUT] "Path to an instance file, or '-' for stdin")
                .default_value("-")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--hyperparameters [HYPERPARAMETERS] "Hyperparameters json string or path to json file")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(arg!(--json "Print the result as a json object").action(ArgAction::SetTrue))
}

fn main() {
    let env = env_logger::Env::new()
        .filter("KNAP_LOG")
        .write_style("KNAP_LOG_STYLE");
    env_logger::init_from_env(env);

    let matches = cli().get_matches();

    if let Err(e) = solve(
        matches.get_one::<String>("ALGORITHM").unwrap().clone(),
        matches.get_one::<PathBuf>("input").unwrap().clone(),
        matches.get_one::<String>("hyperparameters").cloned(),
        matches.get_flag("json"),
    ) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn solve(
    selector: String,
    input: PathBuf,
    hyperparameters: Option<String>,
    json: bool,
) -> Result<()> {
    let algorithm: Algorithm = selector.parse()?;
    let hyperparameters = hyperparameters
        .map(|h| load_hyperparameters(&h))
        .transpose()?;
    let instance = load_instance(&input)?;

    let result = run(algorithm, &instance, &hyperparameters)?;
    if json {
        println!("{}", jsonify(&result));
    } else {
        println!("{}", result);
    }
    Ok(())
}

fn load_instance(path: &PathBuf) -> Result<Instance> {
    let instance = if path.as_os_str() == "-" {
        Instance::from_reader(io::stdin().lock())?
    } else {
        let file = File::open(path)
            .map_err(|e| anyhow!("Failed to read instance file {:?}: {}", path, e))?;
        Instance::from_reader(BufReader::new(file))?
    };
    log::debug!(
        "loaded {} items, total weight {}, capacity {}",
        instance.num_items,
        instance.total_weight(),
        instance.capacity
    );
    Ok(instance)
}
