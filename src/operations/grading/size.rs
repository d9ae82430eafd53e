use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A target size for grading.
///
/// `grade` is the signed step from the base size (`0` is the base). The
/// measurements travel with the size for the caller's benefit; grading itself
/// only reads the step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub name: String,
    pub grade: i32,
    #[serde(default)]
    pub measurements: BTreeMap<String, f64>,
}

impl Size {
    /// Creates a size with no measurements.
    #[must_use]
    pub fn new(name: impl Into<String>, grade: i32) -> Self {
        Self {
            name: name.into(),
            grade,
            measurements: BTreeMap::new(),
        }
    }

    /// Records a body measurement for this size.
    #[must_use]
    pub fn with_measurement(mut self, name: impl Into<String>, value: f64) -> Self {
        self.measurements.insert(name.into(), value);
        self
    }

    /// Whether this is the base size.
    #[must_use]
    pub fn is_base(&self) -> bool {
        self.grade == 0
    }
}

/// Builds an ordered size run whose grades count steps away from `base`.
///
/// `size_run(&["XS", "S", "M", "L", "XL"], "M")` yields grades `-2..=2`. When
/// `base` is not among `names` the first name is taken as the base.
#[must_use]
pub fn size_run(names: &[&str], base: &str) -> Vec<Size> {
    let base_index = names.iter().position(|n| *n == base);
    if base_index.is_none() {
        tracing::debug!(
            base,
            "base size missing from size run, grading from the first size"
        );
    }
    let base_index = base_index.unwrap_or(0);
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Size::new(*name, step_between(base_index, i)))
        .collect()
}

/// Signed number of steps from `from` to `to`, saturating at the `i32` range.
fn step_between(from: usize, to: usize) -> i32 {
    if to >= from {
        i32::try_from(to - from).unwrap_or(i32::MAX)
    } else {
        i32::try_from(from - to).map_or(i32::MIN, |steps| -steps)
    }
}
