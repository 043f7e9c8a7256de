//! Serde adapters for scalars carried as JSON strings.
//!
//! Clients send `"salary": "90000"` and `"on_contract": "true"`. Native JSON
//! numbers and booleans are accepted too; output always uses the string form.

use serde::{Deserialize, Deserializer, Serializer};

/// `f64` encoded as a decimal string.
pub mod number {
    use super::*;
    use serde::de::Error as _;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Number(f64),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(n),
            Repr::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| D::Error::custom(format!("invalid numeric string: {:?}", s))),
        }
    }
}

/// `bool` encoded as a string, accepting the usual spellings.
pub mod boolean {
    use super::*;
    use serde::de::Error as _;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Bool(bool),
    }

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Bool(b) => Ok(b),
            Repr::Text(s) => parse_bool(&s)
                .ok_or_else(|| D::Error::custom(format!("invalid boolean string: {:?}", s))),
        }
    }

    pub(crate) fn parse_bool(s: &str) -> Option<bool> {
        match s {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
            "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
            _ => None,
        }
    }
}
