use serde::{Deserialize, Serialize};

/// Default experiment id written for a primer set
pub const DEFAULT_PRIMER_SET_ID: &str = "ID1";

/// Default minimum product length passed to ipcress
pub const DEFAULT_MIN_DISTANCE: u64 = 100;

/// Default maximum product length passed to ipcress
pub const DEFAULT_MAX_DISTANCE: u64 = 1000;

/// Product length range searched by ipcress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceBounds {
    pub min_distance: u64,
    pub max_distance: u64,
}

impl Default for DistanceBounds {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

/// A forward/reverse primer pair, as fed to ipcress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimerSet {
    pub id: String,
    pub forward: String,
    pub reverse: String,
}

impl PrimerSet {
    pub fn new(forward: impl Into<String>, reverse: impl Into<String>) -> Self {
        Self {
            id: DEFAULT_PRIMER_SET_ID.to_string(),
            forward: forward.into(),
            reverse: reverse.into(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Render the primer set as one line of an ipcress input file:
    /// `<id> <forward> <reverse> <min_distance> <max_distance>`
    #[must_use]
    pub fn to_ipcress_format(&self, bounds: DistanceBounds) -> String {
        format!(
            "{} {} {} {} {}",
            self.id, self.forward, self.reverse, bounds.min_distance, bounds.max_distance
        )
    }
}
