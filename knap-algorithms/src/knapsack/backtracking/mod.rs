//! Exhaustive include/exclude search with fractional bounding.
//!
//! Exponential in the worst case; meant as ground truth on small instances.
//! The decision tree is walked depth-first from an explicit stack, so deep
//! instances cannot overflow the call stack.
use super::by_density;
use knap_challenges::{
    knapsack::{Instance, Item},
    KnapsackResult,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_expanded: u64,
    pub nodes_pruned: u64,
    pub leaves_reached: u64,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    index: usize,
    remaining: u64,
    value: u64,
    /// Optimistic total for any completion of this partial selection.
    bound: u64,
}

pub fn solve_challenge(
    challenge: &Instance,
    _hyperparameters: &Option<Map<String, Value>>,
) -> KnapsackResult<u64> {
    let (best_value, stats) = search(challenge);
    log::debug!(
        "backtracking expanded {} nodes, pruned {}, reached {} leaves",
        stats.nodes_expanded,
        stats.nodes_pruned,
        stats.leaves_reached
    );
    Ok(best_value)
}

pub fn search(challenge: &Instance) -> (u64, SearchStats) {
    // Density order keeps every suffix sorted, which the fractional bound relies on.
    let items: Vec<Item> = by_density(&challenge.items)
        .into_iter()
        .map(|i| challenge.items[i])
        .collect();
    let num_items = items.len();

    let mut stats = SearchStats::default();
    let mut best_value = 0u64;
    let mut stack = Vec::with_capacity(2 * num_items + 1);
    stack.push(Frame {
        index: 0,
        remaining: challenge.capacity,
        value: 0,
        bound: fractional_bound(&items, 0, challenge.capacity),
    });

    while let Some(frame) = stack.pop() {
        // best_value may have grown since this frame was pushed
        if frame.bound <= best_value {
            stats.nodes_pruned += 1;
            continue;
        }
        stats.nodes_expanded += 1;
        best_value = best_value.max(frame.value);

        if frame.index == num_items {
            stats.leaves_reached += 1;
            continue;
        }

        let item = items[frame.index];
        let next = frame.index + 1;

        let exclude = Frame {
            index: next,
            remaining: frame.remaining,
            value: frame.value,
            bound: frame.value + fractional_bound(&items, next, frame.remaining),
        };
        if exclude.bound > best_value {
            stack.push(exclude);
        } else {
            stats.nodes_pruned += 1;
        }

        // Pushed last so it is popped first.
        let weight = item.weight as u64;
        if weight <= frame.remaining {
            let remaining = frame.remaining - weight;
            let value = frame.value + item.value as u64;
            let include = Frame {
                index: next,
                remaining,
                value,
                bound: value + fractional_bound(&items, next, remaining),
            };
            if include.bound > best_value {
                stack.push(include);
            } else {
                stats.nodes_pruned += 1;
            }
        }
    }

    (best_value, stats)
}

/// Floor of the linear relaxation over `items[from..]` with `remaining`
/// capacity. `items` must be in descending density order.
fn fractional_bound(items: &[Item], from: usize, mut remaining: u64) -> u64 {
    let mut bound = 0u64;
    for item in &items[from..] {
        let weight = item.weight as u64;
        if weight <= remaining {
            remaining -= weight;
            bound += item.value as u64;
        } else {
            bound += (item.value as u128 * remaining as u128 / weight as u128) as u64;
            break;
        }
    }
    bound
}
