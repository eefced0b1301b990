//! Input Providers
//!
//! Materialize the value sequence a run or comparison works on:
//!
//! - **Manual**: comma/whitespace separated list (`--values "5, 3 8"`)
//! - **File**: one number per non-empty line (`--file data.txt`)
//! - **Generator**: seeded synthetic data in one of several [`Pattern`]s
//!
//! Integers are preferred when parsing; anything else must parse as a float.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Numeric value accepted on the command line
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Integer literal
    Int(i64),
    /// Floating-point literal
    Float(f64),
}

impl Number {
    /// Value widened to `f64`
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.partial_cmp(b),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            // Debug keeps the fractional part (`3.0`) so the value re-parses as a float
            Number::Float(v) => write!(f, "{:?}", v),
        }
    }
}

// Step descriptions render values with `{:?}`; keep them looking like numbers
impl std::fmt::Debug for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

impl std::str::FromStr for Number {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(v) = s.parse::<i64>() {
            return Ok(Number::Int(v));
        }
        s.parse::<f64>()
            .map(Number::Float)
            .map_err(|_| format!("Invalid number: {}", s))
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

/// Input provider failures
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// A manual list entry is not a number
    #[error("Invalid number '{value}' at position {position}")]
    InvalidValue {
        /// 1-based position in the list
        position: usize,
        /// Offending text
        value: String,
    },
    /// A file line is not a number
    #[error("Invalid number in {} at line {line}: {value}", path.display())]
    InvalidLine {
        /// File being read
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// Offending text
        value: String,
    },
    /// Dataset file could not be read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
    /// Generator bounds are inverted
    #[error("Invalid range: min ({min}) is greater than max ({max})")]
    InvalidRange {
        /// Lower bound
        min: i64,
        /// Upper bound
        max: i64,
    },
}

/// Parse a comma/whitespace separated list of numbers
pub fn parse_values(text: &str) -> Result<Vec<Number>, InputError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(i, s)| {
            s.parse().map_err(|_| InputError::InvalidValue {
                position: i + 1,
                value: s.to_string(),
            })
        })
        .collect()
}

/// Read one number per non-empty line
pub fn read_numbers(path: &Path) -> Result<Vec<Number>, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut numbers = Vec::new();
    for (index, raw) in content.lines().enumerate() {
        let s = raw.trim();
        if s.is_empty() {
            continue;
        }
        let number = s.parse().map_err(|_| InputError::InvalidLine {
            path: path.to_path_buf(),
            line: index + 1,
            value: s.to_string(),
        })?;
        numbers.push(number);
    }
    Ok(numbers)
}

/// Write one number per line; [`read_numbers`] reads the file back
pub fn save_dataset(path: &Path, data: &[Number]) -> Result<(), InputError> {
    let mut content = String::with_capacity(data.len() * 8);
    for number in data {
        content.push_str(&number.to_string());
        content.push('\n');
    }
    std::fs::write(path, content).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Shape of generated data
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    /// Uniform draws from `[min, max]`
    #[default]
    Random,
    /// Evenly spaced ascending values
    Sorted,
    /// Evenly spaced descending values
    Reverse,
    /// Sorted, then `size / 10` random pair swaps
    NearlySorted,
    /// Draws from a pool of `size / 3 + 1` distinct values
    Duplicates,
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::Random => write!(f, "random"),
            Pattern::Sorted => write!(f, "sorted"),
            Pattern::Reverse => write!(f, "reverse"),
            Pattern::NearlySorted => write!(f, "nearly-sorted"),
            Pattern::Duplicates => write!(f, "duplicates"),
        }
    }
}

/// Parameters of a generated dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSpec {
    /// Number of values
    pub size: usize,
    /// Inclusive lower bound
    pub min: i64,
    /// Inclusive upper bound
    pub max: i64,
    /// Shape of the data
    pub pattern: Pattern,
    /// Fixed seed for reproducible data; entropy when absent
    pub seed: Option<u64>,
}

/// Generate integers according to `spec`
pub fn generate(spec: &GeneratorSpec) -> Result<Vec<Number>, InputError> {
    let GeneratorSpec {
        size,
        min,
        max,
        pattern,
        seed,
    } = *spec;
    if min > max {
        return Err(InputError::InvalidRange { min, max });
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    // Widened so that the full i64 range does not overflow
    let step = (i128::from(max) - i128::from(min)) / (size.saturating_sub(1).max(1) as i128);
    // Every offset stays within [min, max], so narrowing back is lossless
    let ascending = |i: usize| (i128::from(min) + i as i128 * step) as i64;
    let descending = |i: usize| (i128::from(max) - i as i128 * step) as i64;

    let values: Vec<i64> = match pattern {
        Pattern::Random => (0..size).map(|_| rng.gen_range(min..=max)).collect(),
        Pattern::Sorted => (0..size).map(ascending).collect(),
        Pattern::Reverse => (0..size).map(descending).collect(),
        Pattern::NearlySorted => {
            let mut values: Vec<i64> = (0..size).map(ascending).collect();
            for _ in 0..size / 10 {
                let i = rng.gen_range(0..size);
                let j = rng.gen_range(0..size);
                values.swap(i, j);
            }
            values
        }
        Pattern::Duplicates => {
            let pool: Vec<i64> = (0..size / 3 + 1).map(|_| rng.gen_range(min..=max)).collect();
            (0..size)
                .filter_map(|_| pool.choose(&mut rng).copied())
                .collect()
        }
    };

    Ok(values.into_iter().map(Number::Int).collect())
}
