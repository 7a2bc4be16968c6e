//! Plan quality metrics.
//!
//! Aggregates a finished assignment plan into the numbers a caller
//! typically surfaces after a pass: how much was staffed, what was
//! skipped and why, and how the work spread across the roster.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{AssignmentPlan, Outcome, SkipReason};
use crate::workload::days_inclusive;

/// Aggregated view of one assignment plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Operations that received a worker.
    pub assigned: usize,
    /// Projects excluded for missing/invalid primary dates.
    pub skipped_missing_dates: usize,
    /// Specialist operations cleared as not required.
    pub skipped_not_required: usize,
    /// Operations nobody could take.
    pub skipped_no_worker: usize,
    /// Assignments per worker.
    pub assignments_by_worker: HashMap<String, usize>,
    /// Highest single-day task count per worker, over this plan's
    /// assignments only.
    pub peak_daily_load: HashMap<String, u32>,
    /// Fraction of staffing-relevant decisions that got a worker
    /// (`NotRequired` skips are intentional and excluded). 1.0 when
    /// nothing needed staffing.
    pub coverage: f64,
}

impl PlanSummary {
    /// Computes the summary for a plan.
    pub fn calculate(plan: &AssignmentPlan) -> Self {
        let mut summary = PlanSummary {
            coverage: 1.0,
            ..Default::default()
        };
        let mut daily: HashMap<String, HashMap<chrono::NaiveDate, u32>> = HashMap::new();

        for decision in &plan.decisions {
            match &decision.outcome {
                Outcome::Assigned {
                    worker_id,
                    start,
                    end,
                } => {
                    summary.assigned += 1;
                    *summary
                        .assignments_by_worker
                        .entry(worker_id.clone())
                        .or_insert(0) += 1;
                    let days = daily.entry(worker_id.clone()).or_default();
                    for day in days_inclusive(*start, *end) {
                        *days.entry(day).or_insert(0) += 1;
                    }
                }
                Outcome::Skipped { reason } => match reason {
                    SkipReason::MissingDates => summary.skipped_missing_dates += 1,
                    SkipReason::NotRequired => summary.skipped_not_required += 1,
                    SkipReason::NoEligibleWorker => summary.skipped_no_worker += 1,
                },
            }
        }

        summary.peak_daily_load = daily
            .into_iter()
            .map(|(worker, days)| {
                let peak = days.values().copied().max().unwrap_or(0);
                (worker, peak)
            })
            .collect();

        let relevant = summary.assigned + summary.skipped_no_worker + summary.skipped_missing_dates;
        if relevant > 0 {
            summary.coverage = summary.assigned as f64 / relevant as f64;
        }

        summary
    }

    /// Whether coverage reaches a threshold.
    pub fn meets_coverage(&self, min_coverage: f64) -> bool {
        self.coverage >= min_coverage
    }
}
