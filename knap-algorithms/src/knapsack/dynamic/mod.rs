//! Exact bottom-up dynamic programming over residual capacity.
//!
//! The `(N + 1) x (W + 1)` table is kept as a single rolling row that is
//! swept from high to low capacity, so each item is counted at most once.
//! The row length is checked against `max_table_bytes` before anything is
//! allocated, and a refused allocation is reported instead of aborting.
mod params;
pub use params::{Params, DEFAULT_MAX_TABLE_BYTES};

use knap_challenges::{knapsack::Instance, KnapsackError, KnapsackResult};
use serde_json::{Map, Value};
use std::mem::size_of;

pub fn solve_challenge(
    challenge: &Instance,
    hyperparameters: &Option<Map<String, Value>>,
) -> KnapsackResult<u64> {
    let params = Params::initialize(hyperparameters);
    let capacity = effective_capacity(challenge, &params);
    let mut table = allocate_table(capacity, params.max_table_bytes)?;
    // allocate_table guarantees capacity + 1 fits in usize
    let capacity = capacity as usize;

    log::debug!(
        "dp table has {} entries for declared capacity {}",
        table.len(),
        challenge.capacity
    );

    for item in &challenge.items {
        let weight = item.weight as usize;
        if weight > capacity {
            continue;
        }
        let value = item.value as u64;
        for c in (weight..=capacity).rev() {
            let with_item = table[c - weight] + value;
            if with_item > table[c] {
                table[c] = with_item;
            }
        }
    }

    Ok(table[capacity])
}

/// The capacity the table is actually sized by. No capacity above the total
/// item weight can change the optimum.
pub fn effective_capacity(challenge: &Instance, params: &Params) -> u64 {
    if params.cap_to_weight_sum {
        challenge.capacity.min(challenge.total_weight())
    } else {
        challenge.capacity
    }
}

fn allocate_table(capacity: u64, limit_bytes: u64) -> KnapsackResult<Vec<u64>> {
    let entries = capacity as u128 + 1;
    let requested_bytes = entries * size_of::<u64>() as u128;
    let exhausted = || KnapsackError::ResourceExhausted {
        requested_bytes,
        limit_bytes,
    };

    if requested_bytes > limit_bytes as u128 {
        return Err(exhausted());
    }
    let entries = usize::try_from(entries).map_err(|_| exhausted())?;

    let mut table = Vec::new();
    table.try_reserve_exact(entries).map_err(|_| exhausted())?;
    table.resize(entries, 0u64);
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use knap_challenges::knapsack::Item;

    #[test]
    fn test_allocate_table_respects_limit() {
        assert_eq!(allocate_table(7, 64).unwrap().len(), 8);
        assert_eq!(
            allocate_table(8, 64),
            Err(KnapsackError::ResourceExhausted {
                requested_bytes: 72,
                limit_bytes: 64
            })
        );
        assert!(allocate_table(u64::MAX, u64::MAX).is_err());
    }

    #[test]
    fn test_effective_capacity() {
        let instance = Instance::new(1_000, vec![Item::new(3, 1), Item::new(4, 1)]);
        assert_eq!(effective_capacity(&instance, &Params::default()), 7);
        let uncapped = Params {
            cap_to_weight_sum: false,
            ..Params::default()
        };
        assert_eq!(effective_capacity(&instance, &uncapped), 1_000);
        let tight = Instance::new(5, instance.items.clone());
        assert_eq!(effective_capacity(&tight, &Params::default()), 5);
    }

    #[test]
    fn test_params_initialize() {
        let mut m = Map::new();
        m.insert("max_table_bytes".to_string(), Value::from(4096u64));
        m.insert("cap_to_weight_sum".to_string(), Value::Bool(false));
        m.insert("unrelated".to_string(), Value::from("ignored"));
        assert_eq!(
            Params::initialize(&Some(m)),
            Params {
                max_table_bytes: 4096,
                cap_to_weight_sum: false
            }
        );
        assert_eq!(Params::initialize(&None), Params::default());
    }
}
