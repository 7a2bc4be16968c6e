//! Per-worker workload accounting.
//!
//! Tracks, for the duration of one pass, how many primary projects of
//! each kind a worker holds and how many operation-days are already
//! attributed to each calendar day. State is rebuilt from the supplied
//! projects at the start of every pass and discarded after; nothing
//! survives between runs.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Project, ProjectKind, Worker};

/// Every calendar day in `[start, end]` inclusive.
///
/// Empty when `start > end`, mirroring an inclusive date walk.
pub(crate) fn days_inclusive(
    start: NaiveDate,
    end: NaiveDate,
) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

/// Mutable workload counters for one worker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkloadState {
    /// Concurrent implementation projects held (primary assignments).
    pub implementations: u32,
    /// Concurrent offer projects held (primary assignments).
    pub offers: u32,
    /// Concurrent projects of any kind. Always equals
    /// `implementations + offers`.
    pub total_projects: u32,
    /// Operation-days attributed per calendar day.
    pub daily_load: BTreeMap<NaiveDate, u32>,
}

impl WorkloadState {
    /// Load already attributed to a given day.
    #[inline]
    pub fn load_on(&self, day: NaiveDate) -> u32 {
        self.daily_load.get(&day).copied().unwrap_or(0)
    }

    fn count_primary(&mut self, kind: ProjectKind) {
        match kind {
            ProjectKind::Implementation => self.implementations += 1,
            ProjectKind::Offer => self.offers += 1,
        }
        self.total_projects += 1;
    }

    fn add_daily(&mut self, start: NaiveDate, end: NaiveDate) {
        for day in days_inclusive(start, end) {
            *self.daily_load.entry(day).or_insert(0) += 1;
        }
    }
}

/// Workload state for the whole roster, keyed by worker id.
///
/// Keys are held in a `BTreeMap` so iteration is in ascending worker id
/// order; the candidate selector relies on this as its fixed, stable
/// iteration order.
#[derive(Debug, Clone, Default)]
pub struct WorkloadTracker {
    states: BTreeMap<String, WorkloadState>,
}

impl WorkloadTracker {
    /// Zeroed state for every worker on the roster.
    pub fn initialize(workers: &[Worker]) -> Self {
        Self {
            states: workers
                .iter()
                .map(|w| (w.id.clone(), WorkloadState::default()))
                .collect(),
        }
    }

    /// Counts the existing assignments of all supplied projects.
    pub fn record_existing(&mut self, projects: &[Project]) {
        for project in projects {
            self.record_project(project);
        }
    }

    /// Counts the existing assignments of one project.
    ///
    /// Every operation with an assigned worker and both dates set adds
    /// one unit of daily load per day in its window; the primary
    /// operation additionally bumps the holder's project counters.
    /// Assignments to workers not on the roster are ignored.
    pub fn record_project(&mut self, project: &Project) {
        for op in &project.operations {
            let (Some(worker_id), Some(start), Some(end)) = (&op.worker_id, op.start, op.end)
            else {
                continue;
            };
            let Some(state) = self.states.get_mut(worker_id.as_str()) else {
                continue;
            };
            if op.category.is_primary() {
                state.count_primary(project.kind);
            }
            state.add_daily(start, end);
        }
    }

    /// Records a fresh assignment so subsequent selections see it.
    ///
    /// Mirrors [`record_project`](Self::record_project): primaries bump
    /// the project counters, every assignment adds daily load.
    pub fn reserve(
        &mut self,
        worker_id: &str,
        is_primary: bool,
        kind: ProjectKind,
        start: NaiveDate,
        end: NaiveDate,
    ) {
        let Some(state) = self.states.get_mut(worker_id) else {
            return;
        };
        if is_primary {
            state.count_primary(kind);
        }
        state.add_daily(start, end);
    }

    /// The state for one worker.
    pub fn state(&self, worker_id: &str) -> Option<&WorkloadState> {
        self.states.get(worker_id)
    }

    /// All states in ascending worker id order.
    pub fn states(&self) -> impl Iterator<Item = (&str, &WorkloadState)> {
        self.states.iter().map(|(id, state)| (id.as_str(), state))
    }

    /// Number of tracked workers.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no workers are tracked.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
