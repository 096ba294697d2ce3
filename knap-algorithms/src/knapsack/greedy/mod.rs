//! Density-ranked greedy heuristic for the 0/1 knapsack.
//!
//! Items that weigh nothing are taken unconditionally. The rest are scanned
//! once in descending value/weight order and each is taken whole if it still
//! fits; an item that does not fit is skipped rather than ending the scan.
//! There is no approximation guarantee.
use super::by_density;
use knap_challenges::{knapsack::Instance, KnapsackResult};
use serde_json::{Map, Value};

pub fn solve_challenge(
    challenge: &Instance,
    _hyperparameters: &Option<Map<String, Value>>,
) -> KnapsackResult<u64> {
    let items = &challenge.items;
    let mut remaining = challenge.capacity;
    let mut total_value = 0u64;
    let mut num_selected = 0usize;

    for item in items.iter().filter(|item| item.weight == 0) {
        total_value += item.value as u64;
        num_selected += 1;
    }

    for i in by_density(items) {
        let weight = items[i].weight as u64;
        if weight == 0 || weight > remaining {
            continue;
        }
        remaining -= weight;
        total_value += items[i].value as u64;
        num_selected += 1;
    }

    log::debug!(
        "greedy selected {} of {} items, {} capacity left",
        num_selected,
        items.len(),
        remaining
    );
    Ok(total_value)
}
