//! Least-loaded candidate selection.
//!
//! Given one operation's requirement, filters the roster by capability
//! and (for primaries) by concurrency limits, scores the survivors by
//! projected load over the operation's window, and returns the best
//! candidate or none.
//!
//! # Scoring
//!
//! For each day in the window, a candidate contributes their existing
//! load on that day; a day already carrying [`DAILY_STACK_LIMIT`] or
//! more tasks contributes [`OVERLOAD_PENALTY`] instead, which all but
//! rules out stacking a third same-day task on anyone while an
//! unburdened alternative exists. Ties keep the first candidate seen in
//! ascending worker id order.

use chrono::NaiveDate;
use tracing::trace;

use crate::models::{Capability, OperationCategory, ProjectKind, WorkloadLimits};
use crate::skills::SkillIndex;
use crate::workload::{days_inclusive, WorkloadState, WorkloadTracker};

/// Tasks a worker may comfortably carry on one day.
pub const DAILY_STACK_LIMIT: u32 = 2;

/// Per-day score once [`DAILY_STACK_LIMIT`] is reached.
pub const OVERLOAD_PENALTY: u64 = 100;

/// One operation's staffing requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Operation category to staff.
    pub category: OperationCategory,
    /// Kind of the owning project.
    pub project_kind: ProjectKind,
    /// Whether this is a primary assignment (counts toward project
    /// limits) or a specialist one (daily load only).
    pub is_primary: bool,
    /// Window start. `None` disqualifies the requirement outright.
    pub start: Option<NaiveDate>,
    /// Window end (inclusive). `None` disqualifies the requirement.
    pub end: Option<NaiveDate>,
}

impl Requirement {
    /// A primary-operation requirement.
    pub fn primary(
        project_kind: ProjectKind,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Self {
        Self {
            category: OperationCategory::Primary,
            project_kind,
            is_primary: true,
            start,
            end,
        }
    }

    /// A specialist-operation requirement.
    pub fn specialist(
        category: OperationCategory,
        project_kind: ProjectKind,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Self {
        Self {
            category,
            project_kind,
            is_primary: false,
            start,
            end,
        }
    }

    /// The capability a candidate must hold.
    ///
    /// The primary operation splits by project kind; specialist
    /// categories map 1:1.
    pub fn capability(&self) -> Capability {
        match (self.category, self.project_kind) {
            (OperationCategory::Primary, ProjectKind::Implementation) => Capability::Implementation,
            (OperationCategory::Primary, ProjectKind::Offer) => Capability::Offer,
            (OperationCategory::Welding, _) => Capability::Welding,
            (OperationCategory::Painting, _) => Capability::Painting,
            (OperationCategory::Gluing, _) => Capability::Gluing,
        }
    }
}

/// Picks the least-loaded eligible worker for one requirement.
#[derive(Debug, Clone, Copy)]
pub struct CandidateSelector<'a> {
    skills: &'a SkillIndex,
    limits: &'a WorkloadLimits,
}

impl<'a> CandidateSelector<'a> {
    /// Creates a selector over the given skill index and limits.
    pub fn new(skills: &'a SkillIndex, limits: &'a WorkloadLimits) -> Self {
        Self { skills, limits }
    }

    /// Selects the best candidate, or `None` if nobody qualifies.
    ///
    /// Returns `None` immediately when the requirement has no complete
    /// window; callers are expected to have filtered that out, but the
    /// check keeps the function total.
    pub fn select(&self, requirement: &Requirement, tracker: &WorkloadTracker) -> Option<String> {
        let (start, end) = match (requirement.start, requirement.end) {
            (Some(start), Some(end)) => (start, end),
            _ => return None,
        };
        let capability = requirement.capability();

        let mut best: Option<&str> = None;
        let mut best_load = u64::MAX;

        for (worker_id, state) in tracker.states() {
            if !self.skills.can(worker_id, capability) {
                continue;
            }
            if requirement.is_primary && self.at_limit(state, requirement.project_kind) {
                continue;
            }

            let projected = projected_load(state, start, end);
            trace!(worker = worker_id, projected, "candidate scored");

            // Strict improvement only: the first candidate seen keeps
            // the slot on a tie.
            if projected < best_load {
                best_load = projected;
                best = Some(worker_id);
            }
        }

        best.map(str::to_owned)
    }

    /// Whether limits exclude this worker from another primary of the
    /// given kind.
    fn at_limit(&self, state: &WorkloadState, kind: ProjectKind) -> bool {
        let kind_capped = match kind {
            ProjectKind::Implementation => state.implementations >= self.limits.max_implementations,
            ProjectKind::Offer => state.offers >= self.limits.max_offers,
        };
        kind_capped || state.total_projects >= self.limits.max_total_projects
    }
}

/// Projected incremental load of placing a task over `[start, end]`.
fn projected_load(state: &WorkloadState, start: NaiveDate, end: NaiveDate) -> u64 {
    days_inclusive(start, end)
        .map(|day| {
            let load = state.load_on(day);
            if load >= DAILY_STACK_LIMIT {
                OVERLOAD_PENALTY
            } else {
                u64::from(load)
            }
        })
        .sum()
}
