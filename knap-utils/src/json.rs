use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fs, path::Path};

pub fn dejsonify<'a, T>(json_str: &'a str) -> serde_json::Result<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_str::<T>(json_str)
}

/// Serializes with object keys in sorted order, so equal values always
/// produce byte-identical output.
pub fn jsonify<T>(obj: &T) -> String
where
    T: Serialize,
{
    serde_json::to_value(obj)
        .and_then(|v| serde_json::to_string(&v))
        .expect("serializable object failed to encode as json")
}

/// Accepts either an inline json string or a path to a `.json` file.
pub fn load_json_arg(arg: &str) -> Result<String> {
    if arg.ends_with(".json") {
        fs::read_to_string(Path::new(arg))
            .map_err(|e| anyhow!("Failed to read json file {}: {}", arg, e))
    } else {
        Ok(arg.to_string())
    }
}

/// Loads a json object of tuning knobs. Anything other than an object is rejected.
pub fn load_hyperparameters(arg: &str) -> Result<Map<String, Value>> {
    let json = load_json_arg(arg)?;
    match dejsonify::<Value>(&json)? {
        Value::Object(map) => Ok(map),
        other => Err(anyhow!("Hyperparameters must be a json object, got {}", other)),
    }
}
