use crate::{KnapsackError, KnapsackResult};
use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    io::{BufRead, Cursor},
    str::FromStr,
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub weight: u32,
    pub value: u32,
}

impl Item {
    pub fn new(weight: u32, value: u32) -> Self {
        Self { weight, value }
    }
}

/// Parameters for synthetic instances. Values are drawn from the same range as
/// weights, or pinned to `weight + 10` when `correlated` is set.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Track {
    pub num_items: usize,
    pub capacity: u64,
    pub max_item_weight: u32,
    pub correlated: bool,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            num_items: 16,
            capacity: 500,
            max_item_weight: 100,
            correlated: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub num_items: usize,
    pub capacity: u64,
    pub items: Vec<Item>,
}

impl Instance {
    pub fn new(capacity: u64, items: Vec<Item>) -> Self {
        Self {
            num_items: items.len(),
            capacity,
            items,
        }
    }

    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self> {
        if track.max_item_weight == 0 {
            return Err(anyhow!("max_item_weight must be at least 1"));
        }
        let mut rng = SmallRng::from_seed(seed.clone());

        let items = (0..track.num_items)
            .map(|_| {
                let weight = rng.gen_range(1..=track.max_item_weight);
                let value = if track.correlated {
                    weight.saturating_add(10)
                } else {
                    rng.gen_range(1..=track.max_item_weight)
                };
                Item::new(weight, value)
            })
            .collect();

        Ok(Self::new(track.capacity, items))
    }

    /// Reads the `N W` header followed by exactly `N` lines of `weight value`.
    /// Blank lines are skipped wherever they appear.
    pub fn from_reader<R: BufRead>(reader: R) -> KnapsackResult<Self> {
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .filter(|(_, line)| !matches!(line, Ok(l) if l.trim().is_empty()));

        let (line_no, header) = match lines.next() {
            Some((line_no, line)) => (line_no, read_line(line_no, line)?),
            None => {
                return Err(KnapsackError::MalformedInput {
                    line: 1,
                    reason: "missing header `N W`".to_string(),
                })
            }
        };
        let [n, w] = split_pair(line_no, &header)?;
        let num_items: usize = parse_field(line_no, "N", n)?;
        let capacity: u64 = parse_field(line_no, "W", w)?;

        // N is untrusted; grow with the lines actually read.
        let mut items = Vec::new();
        let mut last_line = line_no;
        while items.len() < num_items {
            let (line_no, line) = match lines.next() {
                Some((line_no, line)) => (line_no, read_line(line_no, line)?),
                None => {
                    return Err(KnapsackError::MalformedInput {
                        line: last_line + 1,
                        reason: format!("expected {} items, found {}", num_items, items.len()),
                    })
                }
            };
            let [weight, value] = split_pair(line_no, &line)?;
            items.push(Item::new(
                parse_field(line_no, "weight", weight)?,
                parse_field(line_no, "value", value)?,
            ));
            last_line = line_no;
        }

        if let Some((line_no, _)) = lines.next() {
            return Err(KnapsackError::MalformedInput {
                line: line_no,
                reason: format!("unexpected content after {} declared items", num_items),
            });
        }

        Ok(Self::new(capacity, items))
    }

    pub fn total_weight(&self) -> u64 {
        self.items.iter().map(|item| item.weight as u64).sum()
    }

    pub fn total_value(&self) -> u64 {
        self.items.iter().map(|item| item.value as u64).sum()
    }
}

impl FromStr for Instance {
    type Err = KnapsackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(Cursor::new(s))
    }
}

/// Writes the instance back in the input format accepted by `from_reader`.
impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} {}", self.items.len(), self.capacity)?;
        for item in &self.items {
            writeln!(f, "{} {}", item.weight, item.value)?;
        }
        Ok(())
    }
}

fn read_line(line_no: usize, line: std::io::Result<String>) -> KnapsackResult<String> {
    line.map_err(|e| KnapsackError::MalformedInput {
        line: line_no,
        reason: e.to_string(),
    })
}

fn split_pair(line_no: usize, line: &str) -> KnapsackResult<[&str; 2]> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        &[a, b] => Ok([a, b]),
        _ => Err(KnapsackError::MalformedInput {
            line: line_no,
            reason: format!("expected 2 integers, found {} tokens", tokens.len()),
        }),
    }
}

fn parse_field<T: TryFrom<i128>>(line_no: usize, name: &'static str, token: &str) -> KnapsackResult<T> {
    let value = token
        .parse::<i128>()
        .map_err(|_| KnapsackError::MalformedInput {
            line: line_no,
            reason: format!("{} `{}` is not an integer", name, token),
        })?;
    if value < 0 {
        return Err(KnapsackError::InvalidParameter { name, value });
    }
    T::try_from(value).map_err(|_| KnapsackError::MalformedInput {
        line: line_no,
        reason: format!("{} {} is out of range", name, value),
    })
}
