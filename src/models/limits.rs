//! Workload limit policy.

use serde::{Deserialize, Serialize};

/// Process-wide caps on concurrent primary projects per worker.
///
/// Read-only for the duration of a pass. Specialist operations are not
/// limited by these caps; they only contribute to daily load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadLimits {
    /// Maximum concurrent implementations per worker.
    pub max_implementations: u32,
    /// Maximum concurrent offers per worker.
    pub max_offers: u32,
    /// Maximum concurrent projects of any kind per worker.
    pub max_total_projects: u32,
}

impl WorkloadLimits {
    /// Creates a limits record.
    pub fn new(max_implementations: u32, max_offers: u32, max_total_projects: u32) -> Self {
        Self {
            max_implementations,
            max_offers,
            max_total_projects,
        }
    }

    /// Limits that never exclude a candidate. Useful when only skill and
    /// load balancing should drive selection.
    pub fn unrestricted() -> Self {
        Self::new(u32::MAX, u32::MAX, u32::MAX)
    }
}

impl Default for WorkloadLimits {
    /// The stock policy: one implementation, two offers, two projects
    /// total per worker.
    fn default() -> Self {
        Self::new(1, 2, 2)
    }
}
