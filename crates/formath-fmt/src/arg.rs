use crate::format_spec::canonical_float;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single value substituted into a template placeholder.
///
/// The set of kinds is closed: integers, floating point numbers, booleans,
/// characters and text. Each renders through its `Display` implementation;
/// floats use the shortest form described in [`crate::format_spec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Arg {
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    Text(String),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Int(v) => write!(f, "{}", v),
            Arg::UInt(v) => write!(f, "{}", v),
            Arg::Float(v) => f.write_str(&canonical_float(*v)),
            Arg::Bool(v) => write!(f, "{}", v),
            Arg::Char(v) => write!(f, "{}", v),
            Arg::Text(v) => f.write_str(v),
        }
    }
}

macro_rules! impl_from_lossless {
    ($variant:ident($target:ty): $($source:ty),+) => {
        $(
            impl From<$source> for Arg {
                fn from(value: $source) -> Self {
                    Arg::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from_lossless!(Int(i64): i8, i16, i32, i64);
impl_from_lossless!(UInt(u64): u8, u16, u32, u64);
impl_from_lossless!(Float(f64): f32, f64);

impl From<isize> for Arg {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target.
        Arg::Int(value as i64)
    }
}

impl From<usize> for Arg {
    fn from(value: usize) -> Self {
        Arg::UInt(value as u64)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<char> for Arg {
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Text(value.clone())
    }
}

impl From<&Arg> for Arg {
    fn from(value: &Arg) -> Self {
        value.clone()
    }
}
