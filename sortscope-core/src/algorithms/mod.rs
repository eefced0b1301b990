//! Algorithm Variants
//!
//! The closed set of instrumented sorts. Every variant satisfies the same
//! contract: all element access goes through the [`Recorder`], and the only
//! thing that differs between them is the algorithm body and the milestone
//! steps it narrates.

mod merge;
mod priority_queue;
mod quick;
mod selection;

use crate::error::RunError;
use crate::recorder::Recorder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Sorting algorithm variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Top-down merge sort (stable)
    MergeSort,
    /// Lomuto quick sort, last-element pivot
    QuickSort,
    /// Selection sort, one swap per position
    SelectionSort,
    /// In-place binary min-heap, repeated minimum extraction
    PriorityQueueSort,
}

/// Static description of an algorithm variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmInfo {
    /// Variant identifier (`merge_sort`, ...)
    pub name: String,
    /// Display name
    pub display_name: String,
    /// Time complexity
    pub time_complexity: String,
    /// Auxiliary space complexity
    pub space_complexity: String,
    /// Whether equal elements keep their relative order
    pub stable: bool,
    /// One-line description
    pub description: String,
}

impl Algorithm {
    /// All variants in canonical order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::MergeSort,
        Algorithm::QuickSort,
        Algorithm::SelectionSort,
        Algorithm::PriorityQueueSort,
    ];

    /// Variant identifier used in reports and rankings
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::MergeSort => "merge_sort",
            Algorithm::QuickSort => "quick_sort",
            Algorithm::SelectionSort => "selection_sort",
            Algorithm::PriorityQueueSort => "priority_queue_sort",
        }
    }

    /// Whether the variant preserves the order of equal elements
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::MergeSort)
    }

    /// Complexity and stability information
    pub fn info(self) -> AlgorithmInfo {
        let (display_name, time, space, description) = match self {
            Algorithm::MergeSort => (
                "Merge Sort",
                "O(n log n)",
                "O(n)",
                "Recursively halves the range and merges sorted halves through an auxiliary buffer",
            ),
            Algorithm::QuickSort => (
                "Quick Sort",
                "O(n log n) average, O(n²) worst",
                "O(log n) average, O(n) worst",
                "Partitions around the last element of the range and recurses on both sides",
            ),
            Algorithm::SelectionSort => (
                "Selection Sort",
                "O(n²)",
                "O(1)",
                "Repeatedly selects the minimum of the unsorted remainder",
            ),
            Algorithm::PriorityQueueSort => (
                "Priority Queue Sort",
                "O(n log n)",
                "O(1)",
                "Builds a binary min-heap and repeatedly extracts the minimum",
            ),
        };

        AlgorithmInfo {
            name: self.name().to_string(),
            display_name: display_name.to_string(),
            time_complexity: time.to_string(),
            space_complexity: space.to_string(),
            stable: self.is_stable(),
            description: description.to_string(),
        }
    }

    pub(crate) fn sort<T>(self, rec: &mut Recorder<'_, T>) -> Result<(), RunError>
    where
        T: PartialOrd + Clone + Debug,
    {
        match self {
            Algorithm::MergeSort => merge::sort(rec),
            Algorithm::QuickSort => quick::sort(rec),
            Algorithm::SelectionSort => selection::sort(rec),
            Algorithm::PriorityQueueSort => priority_queue::sort(rec),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlgorithmRegistry::standard()
            .resolve(s)
            .ok_or_else(|| format!("Unknown algorithm: {}", s))
    }
}

/// Explicit name → variant mapping.
///
/// Callers build one and hand it to whatever needs name resolution; there is
/// no process-wide registry.
#[derive(Debug, Clone, Default)]
pub struct AlgorithmRegistry {
    entries: BTreeMap<String, Algorithm>,
}

impl AlgorithmRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the four standard variants under their identifiers
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for algorithm in Algorithm::ALL {
            registry.register(algorithm.name(), algorithm);
        }
        registry
    }

    /// Map `name` to `algorithm`, replacing any previous mapping
    pub fn register(&mut self, name: &str, algorithm: Algorithm) -> &mut Self {
        self.entries.insert(normalize(name), algorithm);
        self
    }

    /// Look up a name (case-insensitive, `-` accepted for `_`)
    pub fn resolve(&self, name: &str) -> Option<Algorithm> {
        self.entries.get(&normalize(name)).copied()
    }

    /// Registered names in alphabetical order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no names are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase().replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Runner, Step};

    #[test]
    fn test_standard_registry() {
        let registry = AlgorithmRegistry::standard();
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.resolve("merge_sort"), Some(Algorithm::MergeSort));
        assert_eq!(registry.resolve("Quick-Sort"), Some(Algorithm::QuickSort));
        assert_eq!(registry.resolve("bogo_sort"), None);
    }

    #[test]
    fn test_aliases() {
        let mut registry = AlgorithmRegistry::standard();
        registry.register("heap", Algorithm::PriorityQueueSort);
        assert_eq!(registry.resolve("HEAP"), Some(Algorithm::PriorityQueueSort));
        assert_eq!(registry.names().next(), Some("heap"));
    }

    #[test]
    fn test_from_str_roundtrip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert!("insertion_sort".parse::<Algorithm>().is_err());
    }

    fn contract_inputs() -> Vec<Vec<i32>> {
        vec![
            vec![64, 34, 25, 12, 22, 11, 90],
            vec![9, 1, 8, 2, 7, 3],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![3, 3, 1, 3, 1, 2, 2],
            vec![42, -7],
        ]
    }

    #[test]
    fn test_empty_and_single_element() {
        for algorithm in Algorithm::ALL {
            for input in [vec![], vec![7]] {
                let mut runner = Runner::new(algorithm, &input);
                assert_eq!(runner.run().unwrap(), input.as_slice());

                let metrics = runner.final_metrics().unwrap();
                assert_eq!(metrics.comparisons(), 0, "{algorithm}");
                assert_eq!(metrics.swaps(), 0, "{algorithm}");
                // Start and complete milestones only
                assert_eq!(runner.steps().len(), 2, "{algorithm}");
                assert!(runner.steps().iter().all(Step::is_milestone));
            }
        }
    }

    #[test]
    fn test_step_records_match_counters() {
        for algorithm in Algorithm::ALL {
            for input in contract_inputs() {
                let mut runner = Runner::new(algorithm, &input);
                runner.run().unwrap();
                let metrics = runner.final_metrics().unwrap();
                let steps = runner.steps();

                let compared = steps.iter().filter(|s| s.comparison().is_some()).count();
                let swapped = steps.iter().filter(|s| s.swapped().is_some()).count();
                assert_eq!(compared as u64, metrics.comparisons(), "{algorithm} {input:?}");
                assert_eq!(swapped as u64, metrics.swaps(), "{algorithm} {input:?}");
                assert!(metrics.array_accesses() >= 2 * metrics.comparisons());
            }
        }
    }

    #[test]
    fn test_steps_replay_to_result() {
        for algorithm in Algorithm::ALL {
            for input in contract_inputs() {
                let mut runner = Runner::new(algorithm, &input);
                let result = runner.run().unwrap().to_vec();

                let mut replay = input.clone();
                for (k, step) in runner.steps().iter().enumerate() {
                    assert_eq!(step.number(), k as u64 + 1);
                    if let Some(mutation) = step.mutation() {
                        mutation.apply(&mut replay);
                    }
                    assert_eq!(step.snapshot(), replay.as_slice(), "{algorithm} step {}", k + 1);
                }
                assert_eq!(replay, result);
            }
        }
    }

    #[test]
    fn test_milestones_bracket_the_run() {
        for algorithm in Algorithm::ALL {
            let mut runner = Runner::new(algorithm, &[3, 1, 2]);
            runner.run().unwrap();
            let steps = runner.steps();
            let display = algorithm.info().display_name;

            assert_eq!(steps[0].description(), format!("Starting {display}"));
            assert_eq!(steps[0].highlighted(), &[0, 1, 2]);
            assert_eq!(
                steps[steps.len() - 1].description(),
                format!("{display} complete")
            );
        }
    }

    #[test]
    fn test_only_merge_sort_is_stable() {
        let stable: Vec<_> = Algorithm::ALL.iter().filter(|a| a.info().stable).collect();
        assert_eq!(stable, vec![&Algorithm::MergeSort]);
    }
}
