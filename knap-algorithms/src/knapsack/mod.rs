use knap_challenges::knapsack::Item;
use std::cmp::Ordering;

pub mod backtracking;
pub mod dynamic;
pub mod greedy;

/// Item indices ordered by descending value density. Zero-weight items come
/// first; ties go to the higher value, then to the earlier input position.
pub(crate) fn by_density(items: &[Item]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        compare_density(&items[b], &items[a])
            .then_with(|| items[b].value.cmp(&items[a].value))
            .then_with(|| a.cmp(&b))
    });
    order
}

// Exact comparison of value/weight via cross-multiplication; u32 * u32 fits in u64.
fn compare_density(a: &Item, b: &Item) -> Ordering {
    match (a.weight, b.weight) {
        (0, 0) => Ordering::Equal,
        (0, _) => Ordering::Greater,
        (_, 0) => Ordering::Less,
        _ => (a.value as u64 * b.weight as u64).cmp(&(b.value as u64 * a.weight as u64)),
    }
}
