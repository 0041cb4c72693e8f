//! Performance metrics computation
//!
//! This module computes the four normalized performance scores from the
//! practice log: consistency, discipline, improvement, and weekly trend.
//! All computations are pure projections over the log; nothing is cached or
//! mutated, and the same log always yields the same snapshot.

use crate::types::{PerformanceMetrics, ProgressEntry};
use chrono::Days;
use std::collections::HashSet;

/// Length of the trailing activity window used for consistency, in days
pub const ACTIVITY_WINDOW_DAYS: u32 = 14;

/// Reference number of drills a session is expected to complete
pub const EXPECTED_DAILY_DRILLS: u32 = 3;

/// Number of entries in each weekly-trend comparison window
pub const TREND_WINDOW_ENTRIES: usize = 7;

/// Metrics engine computing a performance snapshot from the log
pub struct MetricsEngine;

impl MetricsEngine {
    /// Compute a performance snapshot from the practice log.
    ///
    /// Total function: an empty log yields the all-zero snapshot. Entries are
    /// stably sorted by date first, so same-day entries keep insertion order.
    pub fn compute(entries: &[ProgressEntry]) -> PerformanceMetrics {
        if entries.is_empty() {
            return PerformanceMetrics::ZERO;
        }

        let mut sorted: Vec<&ProgressEntry> = entries.iter().collect();
        sorted.sort_by_key(|e| e.date);

        PerformanceMetrics {
            consistency: compute_consistency(&sorted),
            discipline: compute_discipline(&sorted),
            improvement: compute_improvement(&sorted),
            weekly_trend: compute_weekly_trend(&sorted),
        }
    }
}

/// Share of the trailing 14-day window containing active training.
///
/// A day counts as active when at least one entry on that date has positive
/// net hours. The window ends at the most recent entry's date; entries before
/// it have no effect.
fn compute_consistency(sorted: &[&ProgressEntry]) -> f64 {
    let end = match sorted.last() {
        Some(entry) => entry.date,
        None => return 0.0,
    };
    let start = end
        .checked_sub_days(Days::new(u64::from(ACTIVITY_WINDOW_DAYS) - 1))
        .unwrap_or(end);

    let active_days: HashSet<_> = sorted
        .iter()
        .filter(|e| e.date >= start && e.date <= end && e.net_hours_clamped() > 0.0)
        .map(|e| e.date)
        .collect();

    (100.0 * active_days.len() as f64 / f64::from(ACTIVITY_WINDOW_DAYS)).clamp(0.0, 100.0)
}

/// Mean drill-completion adherence against the daily expectation.
fn compute_discipline(sorted: &[&ProgressEntry]) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let adherence_sum: f64 = sorted
        .iter()
        .map(|e| (f64::from(e.drills_completed) / f64::from(EXPECTED_DAILY_DRILLS)).min(1.0))
        .sum();
    (100.0 * adherence_sum / sorted.len() as f64).clamp(0.0, 100.0)
}

/// Signed percentage change in mean self rating between the first and second
/// halves of the log. The middle entry of an odd-length log belongs to the
/// second half.
fn compute_improvement(sorted: &[&ProgressEntry]) -> f64 {
    if sorted.len() < 2 {
        return 0.0;
    }
    let mid = sorted.len() / 2;
    let mean_first = mean_self_rating(&sorted[..mid]);
    let mean_second = mean_self_rating(&sorted[mid..]);
    if mean_first == 0.0 {
        return 0.0;
    }
    (100.0 * (mean_second - mean_first) / mean_first).clamp(-100.0, 100.0)
}

/// Point-delta in mean self rating between the most recent up-to-7 entries
/// and the up-to-7 entries immediately before them. Zero when there is no
/// prior window. Unclamped; this is a small signed delta, not a percentage.
fn compute_weekly_trend(sorted: &[&ProgressEntry]) -> f64 {
    let recent_len = sorted.len().min(TREND_WINDOW_ENTRIES);
    let recent_start = sorted.len() - recent_len;
    if recent_start == 0 {
        return 0.0;
    }
    let prior_start = recent_start.saturating_sub(TREND_WINDOW_ENTRIES);
    let recent_avg = mean_self_rating(&sorted[recent_start..]);
    let prior_avg = mean_self_rating(&sorted[prior_start..recent_start]);
    recent_avg - prior_avg
}

fn mean_self_rating(entries: &[&ProgressEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let sum: f64 = entries.iter().map(|e| e.self_rating_clamped()).sum();
    sum / entries.len() as f64
}
