use crate::knapsack::{backtracking, dynamic, greedy};
use knap_challenges::{knapsack::Instance, KnapsackError, KnapsackResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr, time::Instant};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Dynamic,
    Greedy,
    Backtracking,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Dynamic,
        Algorithm::Greedy,
        Algorithm::Backtracking,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dynamic => "dynamic",
            Algorithm::Greedy => "greedy",
            Algorithm::Backtracking => "backtracking",
        }
    }

    pub fn solve(
        &self,
        instance: &Instance,
        hyperparameters: &Option<Map<String, Value>>,
    ) -> KnapsackResult<u64> {
        match self {
            Algorithm::Dynamic => dynamic::solve_challenge(instance, hyperparameters),
            Algorithm::Greedy => greedy::solve_challenge(instance, hyperparameters),
            Algorithm::Backtracking => backtracking::solve_challenge(instance, hyperparameters),
        }
    }
}

/// Accepts the numeric selectors `0`, `1`, `2` as well as algorithm names.
impl FromStr for Algorithm {
    type Err = KnapsackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "dp" | "dynamic" => Ok(Algorithm::Dynamic),
            "1" | "greedy" => Ok(Algorithm::Greedy),
            "2" | "bt" | "backtracking" => Ok(Algorithm::Backtracking),
            _ => Err(KnapsackError::UnsupportedSelector(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SolveResult {
    pub best_value: u64,
    pub elapsed_seconds: f64,
}

/// The single-line report: best value, then elapsed seconds.
impl fmt::Display for SolveResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {:.6}", self.best_value, self.elapsed_seconds)
    }
}

/// Runs one solver against `instance`, timing only the solve call.
pub fn run(
    algorithm: Algorithm,
    instance: &Instance,
    hyperparameters: &Option<Map<String, Value>>,
) -> KnapsackResult<SolveResult> {
    log::info!(
        "solving {} items, capacity {} with {}",
        instance.num_items,
        instance.capacity,
        algorithm
    );

    let start = Instant::now();
    let outcome = algorithm.solve(instance, hyperparameters);
    let elapsed_seconds = start.elapsed().as_secs_f64();

    match outcome {
        Ok(best_value) => {
            log::info!(
                "{} finished in {:.6}s with value {}",
                algorithm,
                elapsed_seconds,
                best_value
            );
            Ok(SolveResult {
                best_value,
                elapsed_seconds,
            })
        }
        Err(e) => {
            log::warn!("{} failed after {:.6}s: {}", algorithm, elapsed_seconds, e);
            Err(e)
        }
    }
}
