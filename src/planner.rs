//! Training plan generation
//!
//! This module synthesizes a weekly training plan from a user profile and the
//! static drill catalog: filter the catalog by role and skill, first-fit pack
//! drills under the weekly hour budget, derive weekly targets from the
//! profile, and spread the selected drills across the week around a rest day.
//!
//! Generation is deterministic: the same profile and catalog always produce
//! the same plan, down to the plan id (v5, namespaced off the user id).

use crate::error::EngineError;
use crate::metrics::EXPECTED_DAILY_DRILLS;
use crate::types::{
    DaySchedule, Difficulty, Drill, DrillCategory, Role, SkillLevel, TrainingPlan, User,
    WeeklyTarget,
};
use chrono::Utc;
use uuid::Uuid;

/// Week day labels, Monday first
pub const WEEK_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Weekly role-specific base targets at Beginner level
const RUNS_BASE_TARGET: f64 = 120.0;
const WICKETS_BASE_TARGET: f64 = 8.0;
const CATCHES_BASE_TARGET: f64 = 12.0;

/// Plan generator producing a weekly training plan from a profile
pub struct PlanGenerator;

impl PlanGenerator {
    /// Generate a training plan for the given user.
    ///
    /// Fails only when `weekly_hours` is not positive; the plan cannot be
    /// packed into zero time. Every target's `current` value is left at zero
    /// for the caller to populate from the latest log snapshot.
    pub fn generate(user: &User, catalog: &[Drill]) -> Result<TrainingPlan, EngineError> {
        if user.weekly_hours <= 0.0 {
            return Err(EngineError::InvalidProfile(format!(
                "weekly hours must be positive, got {}",
                user.weekly_hours
            )));
        }

        let filtered = filter_catalog(catalog, user.role, user.skill_level);
        // Never produce an empty plan: an over-narrow filter falls back to
        // the full catalog.
        let pool: Vec<Drill> = if filtered.is_empty() {
            catalog.to_vec()
        } else {
            filtered
        };

        let selected = select_drills(&pool, user.weekly_hours);
        let weekly_targets = build_weekly_targets(user);
        let (drills, schedule) = build_schedule(selected, user.weekly_hours);

        Ok(TrainingPlan {
            id: Uuid::new_v5(&Uuid::NAMESPACE_OID, user.id.as_bytes()),
            user_id: user.id,
            drills,
            weekly_targets,
            schedule,
            created_at: Utc::now(),
        })
    }
}

/// Filter the catalog to the user's skill band and role-relevant categories.
///
/// Intermediate players draw from all three difficulties but the filtered
/// set is ordered Medium-first (stable within groups), which biases the
/// first-fit pack toward Medium without any randomness.
fn filter_catalog(catalog: &[Drill], role: Role, skill: SkillLevel) -> Vec<Drill> {
    let mut filtered: Vec<Drill> = catalog
        .iter()
        .filter(|d| difficulty_in_band(d.difficulty, skill) && category_fits_role(d.category, role))
        .cloned()
        .collect();

    if skill == SkillLevel::Intermediate {
        filtered.sort_by_key(|d| u8::from(d.difficulty != Difficulty::Medium));
    }

    filtered
}

fn difficulty_in_band(difficulty: Difficulty, skill: SkillLevel) -> bool {
    match skill {
        SkillLevel::Beginner => matches!(difficulty, Difficulty::Easy | Difficulty::Medium),
        SkillLevel::Intermediate => true,
        SkillLevel::Advanced => matches!(difficulty, Difficulty::Medium | Difficulty::Hard),
    }
}

fn category_fits_role(category: DrillCategory, role: Role) -> bool {
    match role {
        Role::Batsman => matches!(category, DrillCategory::Batting | DrillCategory::Fitness),
        Role::Bowler => matches!(category, DrillCategory::Bowling | DrillCategory::Fitness),
        Role::AllRounder => true,
        Role::Wicketkeeper => matches!(category, DrillCategory::Fielding | DrillCategory::Fitness),
    }
}

/// First-fit greedy selection under the weekly minute budget.
///
/// Selection stops at the first drill that would overflow the budget; ties
/// are broken by pool order. A budget too small for any drill still yields
/// the shortest drill in the pool rather than an empty plan.
fn select_drills(pool: &[Drill], weekly_hours: f64) -> Vec<Drill> {
    let budget_minutes = weekly_hours * 60.0;
    let mut selected = Vec::new();
    let mut running = 0.0;

    for drill in pool {
        if running + f64::from(drill.duration) > budget_minutes {
            break;
        }
        running += f64::from(drill.duration);
        selected.push(drill.clone());
    }

    if selected.is_empty() {
        if let Some(shortest) = pool.iter().min_by_key(|d| d.duration) {
            selected.push(shortest.clone());
        }
    }

    selected
}

/// Derive the weekly target lines from the profile.
fn build_weekly_targets(user: &User) -> Vec<WeeklyTarget> {
    let mut targets = vec![
        target("Sessions", user.weekly_hours.round().min(7.0), "sessions"),
        target("Net Hours", user.weekly_hours, "hours"),
        target(
            "Drills Completed",
            f64::from(EXPECTED_DAILY_DRILLS * 7),
            "drills",
        ),
    ];

    let multiplier = user.skill_level.target_multiplier();
    match user.role {
        Role::Batsman => {
            targets.push(target("Runs Scored", (RUNS_BASE_TARGET * multiplier).round(), "runs"));
        }
        Role::Bowler => {
            targets.push(target(
                "Wickets Taken",
                (WICKETS_BASE_TARGET * multiplier).round(),
                "wickets",
            ));
        }
        Role::AllRounder => {
            targets.push(target("Runs Scored", (RUNS_BASE_TARGET * multiplier).round(), "runs"));
            targets.push(target(
                "Wickets Taken",
                (WICKETS_BASE_TARGET * multiplier).round(),
                "wickets",
            ));
        }
        Role::Wicketkeeper => {
            targets.push(target(
                "Catches",
                (CATCHES_BASE_TARGET * multiplier).round(),
                "catches",
            ));
        }
    }

    targets
}

fn target(metric: &str, value: f64, unit: &str) -> WeeklyTarget {
    WeeklyTarget {
        metric: metric.to_string(),
        current: 0.0,
        target: value,
        unit: unit.to_string(),
    }
}

/// Distribute the selected drills across the week.
///
/// One rest day receives nothing: the least-loaded day with ties broken
/// toward the end of the week, which on a fresh plan is Sunday and stays
/// Sunday since the rest day never accumulates load. Drills go round-robin
/// to the least-loaded eligible day under the per-day cap of
/// `ceil(weekly_hours / 6)` hours, preferring a day without the drill's
/// category when one fits.
///
/// Returns the drills that were actually placed alongside the schedule. A
/// drill that fits no day once the cap has fragmented (the budget guarantees
/// total capacity, not a contiguous slot per drill) is dropped from the plan
/// rather than listed without an assignment.
fn build_schedule(drills: Vec<Drill>, weekly_hours: f64) -> (Vec<Drill>, Vec<DaySchedule>) {
    let cap_minutes = (weekly_hours / 6.0).ceil() * 60.0;

    let mut loads = [0.0f64; 7];
    let mut activities: Vec<Vec<String>> = vec![Vec::new(); 7];
    let mut categories: Vec<Vec<DrillCategory>> = vec![Vec::new(); 7];
    let mut placed = Vec::with_capacity(drills.len());

    // All loads start equal, so the latest least-loaded day is Sunday.
    let rest_day = least_loaded_latest(&loads);

    for drill in drills {
        let duration = f64::from(drill.duration);
        let fits = |day: usize| day != rest_day && loads[day] + duration <= cap_minutes;

        let diversified = (0..7)
            .filter(|&day| fits(day) && !categories[day].contains(&drill.category))
            .min_by(|&a, &b| loads[a].total_cmp(&loads[b]));
        let chosen = diversified.or_else(|| {
            (0..7)
                .filter(|&day| fits(day))
                .min_by(|&a, &b| loads[a].total_cmp(&loads[b]))
        });

        if let Some(day) = chosen {
            loads[day] += duration;
            categories[day].push(drill.category);
            activities[day].push(format!("{} ({} min)", drill.name, drill.duration));
            placed.push(drill);
        }
    }

    let schedule = WEEK_DAYS
        .iter()
        .enumerate()
        .map(|(day, label)| DaySchedule {
            day: (*label).to_string(),
            activities: std::mem::take(&mut activities[day]),
            duration: loads[day] / 60.0,
        })
        .collect();

    (placed, schedule)
}

fn least_loaded_latest(loads: &[f64; 7]) -> usize {
    let mut best = 0;
    for (day, load) in loads.iter().enumerate() {
        if *load <= loads[best] {
            best = day;
        }
    }
    best
}
