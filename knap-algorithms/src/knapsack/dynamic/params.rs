use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_MAX_TABLE_BYTES: u64 = 1 << 30;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    /// Upper bound on the rolling table allocation
    pub max_table_bytes: u64,

    /// Shrink the table to the total item weight when the declared capacity is larger
    pub cap_to_weight_sum: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            max_table_bytes: DEFAULT_MAX_TABLE_BYTES,
            cap_to_weight_sum: true,
        }
    }
}

impl Params {
    pub fn initialize(h: &Option<Map<String, Value>>) -> Self {
        let mut p = Self::default();
        if let Some(m) = h {
            if let Some(v) = m.get("max_table_bytes").and_then(|v| v.as_u64()) { p.max_table_bytes = v; }
            if let Some(v) = m.get("cap_to_weight_sum").and_then(|v| v.as_bool()) { p.cap_to_weight_sum = v; }
        }
        p
    }
}
