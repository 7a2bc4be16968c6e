//! Per-pass capability index.
//!
//! Derives, for each worker, the set of operation categories they may be
//! assigned to, by unioning the grants of every role the worker holds.
//! Built once at the start of a pass and discarded after.

use std::collections::HashMap;

use crate::models::{Capability, CapabilitySet, Role, Worker};

/// Worker id to capability set lookup.
#[derive(Debug, Clone, Default)]
pub struct SkillIndex {
    capabilities: HashMap<String, CapabilitySet>,
}

impl SkillIndex {
    /// Builds the index from the roster and role definitions.
    ///
    /// Role ids on a worker that match no supplied role contribute
    /// nothing. The worker's `is_admin` flag is deliberately ignored:
    /// administrators hold every authorization permission elsewhere in
    /// the application, but assignment capability comes from roles alone.
    pub fn build(workers: &[Worker], roles: &[Role]) -> Self {
        let roles_by_id: HashMap<&str, &Role> =
            roles.iter().map(|r| (r.id.as_str(), r)).collect();

        let capabilities = workers
            .iter()
            .map(|worker| {
                let set = worker
                    .role_ids
                    .iter()
                    .filter_map(|id| roles_by_id.get(id.as_str()))
                    .fold(CapabilitySet::empty(), |acc, role| acc.union(role.grants));
                (worker.id.clone(), set)
            })
            .collect();

        Self { capabilities }
    }

    /// The capability set for a worker (empty if unknown).
    pub fn capabilities(&self, worker_id: &str) -> CapabilitySet {
        self.capabilities
            .get(worker_id)
            .copied()
            .unwrap_or_default()
    }

    /// Whether a worker holds a capability.
    pub fn can(&self, worker_id: &str, capability: Capability) -> bool {
        self.capabilities(worker_id).contains(capability)
    }

    /// Number of indexed workers.
    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}
