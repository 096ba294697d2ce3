use knap_challenges::knapsack::{Instance, Item, Track};
use knap_challenges::KnapsackError;

fn malformed_line(input: &str) -> usize {
    match input.parse::<Instance>() {
        Err(KnapsackError::MalformedInput { line, .. }) => line,
        other => panic!("expected MalformedInput, got {:?}", other),
    }
}

#[test]
fn test_parse_instance() {
    let instance: Instance = "3 50\n10 60\n20 100\n30 120\n".parse().unwrap();
    assert_eq!(instance.num_items, 3);
    assert_eq!(instance.capacity, 50);
    assert_eq!(
        instance.items,
        vec![Item::new(10, 60), Item::new(20, 100), Item::new(30, 120)]
    );
    assert_eq!(instance.total_weight(), 60);
    assert_eq!(instance.total_value(), 280);
}

#[test]
fn test_parse_tolerates_blank_lines_and_spacing() {
    let instance: Instance = "\n  2   10  \n\n0 5\n\t10 1\n\n".parse().unwrap();
    assert_eq!(instance.items, vec![Item::new(0, 5), Item::new(10, 1)]);
    assert_eq!(instance.capacity, 10);
}

#[test]
fn test_parse_empty_item_list() {
    let instance: Instance = "0 1000".parse().unwrap();
    assert_eq!(instance.num_items, 0);
    assert!(instance.items.is_empty());
}

#[test]
fn test_parse_huge_capacity() {
    let instance: Instance = "1 10000000000\n5 7\n".parse().unwrap();
    assert_eq!(instance.capacity, 10_000_000_000);
}

#[test]
fn test_parse_malformed() {
    assert_eq!(malformed_line(""), 1);
    assert_eq!(malformed_line("3"), 1);
    assert_eq!(malformed_line("3 50 7\n"), 1);
    assert_eq!(malformed_line("x 50\n"), 1);
    assert_eq!(malformed_line("1 5.5\n1 1\n"), 1);
    assert_eq!(malformed_line("2 50\n10 60\n"), 3);
    assert_eq!(malformed_line("1 50\n10 60\n20 100\n"), 3);
    assert_eq!(malformed_line("1 50\n10\n"), 2);
    assert_eq!(malformed_line("1 50\n10 sixty\n"), 2);
    // Fits the header integer parse but not an item weight.
    assert_eq!(malformed_line("1 50\n4294967296 1\n"), 2);
}

#[test]
fn test_parse_negative_parameters() {
    assert_eq!(
        "-1 50\n".parse::<Instance>(),
        Err(KnapsackError::InvalidParameter {
            name: "N",
            value: -1
        })
    );
    assert_eq!(
        "1 -50\n1 1\n".parse::<Instance>(),
        Err(KnapsackError::InvalidParameter {
            name: "W",
            value: -50
        })
    );
    assert_eq!(
        "1 50\n-3 1\n".parse::<Instance>(),
        Err(KnapsackError::InvalidParameter {
            name: "weight",
            value: -3
        })
    );
}

#[test]
fn test_display_round_trips_through_parser() {
    let instance = Instance::new(50, vec![Item::new(10, 60), Item::new(0, 5)]);
    assert_eq!(instance.to_string(), "2 50\n10 60\n0 5\n");
    assert_eq!(instance.to_string().parse::<Instance>().unwrap(), instance);
}

#[test]
fn test_generate_instance_is_deterministic() {
    let track = Track {
        num_items: 40,
        ..Track::default()
    };
    let a = Instance::generate_instance(&[7u8; 32], &track).unwrap();
    let b = Instance::generate_instance(&[7u8; 32], &track).unwrap();
    let c = Instance::generate_instance(&[8u8; 32], &track).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.num_items, 40);
    assert_eq!(a.capacity, track.capacity);
    assert!(a
        .items
        .iter()
        .all(|item| (1..=100).contains(&item.weight) && (1..=100).contains(&item.value)));
}

#[test]
fn test_generate_correlated_instance() {
    let track = Track {
        num_items: 25,
        correlated: true,
        ..Track::default()
    };
    let instance = Instance::generate_instance(&[1u8; 32], &track).unwrap();
    assert!(instance
        .items
        .iter()
        .all(|item| item.value == item.weight + 10));
}

#[test]
fn test_generate_rejects_zero_weight_range() {
    let track = Track {
        max_item_weight: 0,
        ..Track::default()
    };
    assert!(Instance::generate_instance(&[0u8; 32], &track).is_err());
}
