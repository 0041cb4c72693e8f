//! Coaching feedback generation
//!
//! This module turns a profile, the practice log, and a metrics snapshot into
//! a coaching record: a feedback paragraph keyed off banded consistency and
//! discipline, three suggestions, the two weakest performance dimensions as
//! focus areas, and a motivational quote selected by calendar day.
//!
//! The calendar date is an explicit input so that generation stays
//! reproducible; there is no hidden randomness anywhere in this module.

use crate::types::{CoachFeedback, PerformanceMetrics, ProgressEntry, User};
use chrono::{Datelike, NaiveDate, Utc};
use uuid::Uuid;

/// Score band for consistency and discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    High,
    Mid,
    Low,
}

fn band(score: f64) -> Band {
    if score >= 80.0 {
        Band::High
    } else if score >= 60.0 {
        Band::Mid
    } else {
        Band::Low
    }
}

/// Performance dimension surfaced as a focus area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dimension {
    Consistency,
    Discipline,
    Improvement,
    WeeklyTrend,
}

impl Dimension {
    fn label(self) -> &'static str {
        match self {
            Dimension::Consistency => "Consistency",
            Dimension::Discipline => "Discipline",
            Dimension::Improvement => "Improvement",
            Dimension::WeeklyTrend => "Weekly Trend",
        }
    }
}

/// Fixed ordered quote list; the day of year picks one deterministically.
const QUOTES: [&str; 10] = [
    "Cricket is a game of patience. Master the wait, and you master the game.",
    "You don't play for the crowd, you play for the country and for yourself.",
    "Every net session is a deposit. Match day is when you withdraw.",
    "Form is temporary, class is permanent, and practice is what turns one into the other.",
    "The bowler who lands six balls where they want beats the one who bowls one unplayable delivery.",
    "Champions keep playing until they get it right, then keep practising so they never get it wrong.",
    "A dropped catch is forgotten by everyone except the fielder who learns from it.",
    "Train your weaknesses until they become the strengths nobody expects.",
    "The scoreboard follows the basics: watch the ball, run hard, back yourself.",
    "Small improvements every session beat heroic efforts once a month.",
];

const ONBOARDING_SUGGESTIONS: [&str; 3] = [
    "Log your first practice session so your coach has something to work with.",
    "Start with short, regular sessions; three focused half-hours beat one long slog.",
    "Set a realistic weekly hours figure in your profile and protect that time.",
];

/// Feedback generator producing a coaching record from profile, log, and metrics
pub struct FeedbackGenerator;

impl FeedbackGenerator {
    /// Generate coaching feedback dated `on`.
    ///
    /// Total function: an empty log yields an encouraging onboarding record.
    /// Two calls with identical inputs on the same calendar day are identical
    /// in content.
    pub fn generate(
        user: &User,
        entries: &[ProgressEntry],
        metrics: &PerformanceMetrics,
        on: NaiveDate,
    ) -> CoachFeedback {
        let quote = QUOTES[on.ordinal0() as usize % QUOTES.len()].to_string();

        if entries.is_empty() {
            return CoachFeedback {
                id: Uuid::new_v4(),
                user_id: user.id,
                feedback: format!(
                    "Welcome to the nets, {}! You haven't logged any sessions yet, so \
                     there's nothing to analyse — and that's fine. Every {} started \
                     somewhere. Log your first practice and we'll build from there.",
                    user.name,
                    user.role.as_str()
                ),
                suggestions: ONBOARDING_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
                focus_areas: vec![
                    Dimension::Consistency.label().to_string(),
                    Dimension::Discipline.label().to_string(),
                ],
                motivational_quote: quote,
                created_at: Utc::now(),
            };
        }

        let cons_band = band(metrics.consistency);
        let disc_band = band(metrics.discipline);
        let weaker = weaker_dimension(metrics);

        CoachFeedback {
            id: Uuid::new_v4(),
            user_id: user.id,
            feedback: feedback_paragraph(user, metrics, cons_band, disc_band, weaker),
            suggestions: build_suggestions(metrics, weaker),
            focus_areas: focus_areas(metrics)
                .into_iter()
                .map(|d| d.label().to_string())
                .collect(),
            motivational_quote: quote,
            created_at: Utc::now(),
        }
    }
}

/// The weaker of the two banded metrics; ties count discipline as weaker.
fn weaker_dimension(metrics: &PerformanceMetrics) -> Dimension {
    if metrics.consistency < metrics.discipline {
        Dimension::Consistency
    } else {
        Dimension::Discipline
    }
}

/// One paragraph per (consistency band, discipline band) pair, addressing the
/// user by name and speaking to the weaker metric.
fn feedback_paragraph(
    user: &User,
    metrics: &PerformanceMetrics,
    cons_band: Band,
    disc_band: Band,
    weaker: Dimension,
) -> String {
    let name = &user.name;
    let weaker_label = weaker.label().to_lowercase();
    let consistency = metrics.consistency.round();
    let discipline = metrics.discipline.round();

    match (cons_band, disc_band) {
        (Band::High, Band::High) => format!(
            "Outstanding work, {name}. You're training {consistency}% of available days and \
             completing your planned drills almost every session. This is exactly the base a \
             {role} needs — keep the routine and start raising the difficulty.",
            role = user.role.as_str()
        ),
        (Band::High, Band::Mid) => format!(
            "Great attendance, {name} — {consistency}% of days active is a serious habit. Your \
             discipline is a touch behind at {discipline}%: you're showing up, but not always \
             finishing the drill list. Close out the sessions you start."
        ),
        (Band::High, Band::Low) => format!(
            "{name}, you're at the nets constantly, which is the hard part. But your \
             {weaker_label} score of {discipline}% says the sessions are drifting: plenty of \
             time in, few drills finished. Bring a written drill list and work through it."
        ),
        (Band::Mid, Band::High) => format!(
            "Quality over quantity, {name}. When you train, you complete what you planned — \
             discipline is at {discipline}%. Your {weaker_label} is the gap: at {consistency}% \
             of days, too much rust builds up between sessions. Shorter but more frequent \
             visits will fix it."
        ),
        (Band::Mid, Band::Mid) => format!(
            "Solid middle ground, {name}. Consistency at {consistency}% and discipline at \
             {discipline}% mean the foundations are in place but neither habit has locked in \
             yet. Pick your {weaker_label} and push it over 80% this fortnight."
        ),
        (Band::Mid, Band::Low) => format!(
            "{name}, you train often enough at {consistency}% of days, but your \
             {weaker_label} of {discipline}% means most sessions end before the work is done. \
             Cut the session length if you must — just finish the drills you set out to do."
        ),
        (Band::Low, Band::High) => format!(
            "{name}, the sessions you do log are excellent — drills finished, discipline at \
             {discipline}%. The problem is the calendar: {weaker_label} sits at \
             {consistency}%. Rust is costing you more than any technical fault right now."
        ),
        (Band::Low, Band::Mid) => format!(
            "{name}, both habits need attention but {weaker_label} comes first: \
             {consistency}% of recent days with bat or ball in hand is not enough to improve. \
             Book three short sessions this week and keep them."
        ),
        (Band::Low, Band::Low) => format!(
            "Honest assessment time, {name}: consistency at {consistency}% and discipline at \
             {discipline}% mean training isn't really happening yet. Start small — one \
             half-hour session, every drill completed — and rebuild the habit from there."
        ),
    }
}

/// Two suggestions from the weaker metric's band pool plus one keyed to the
/// sign of improvement; always exactly three.
fn build_suggestions(metrics: &PerformanceMetrics, weaker: Dimension) -> Vec<String> {
    let weaker_band = match weaker {
        Dimension::Consistency => band(metrics.consistency),
        _ => band(metrics.discipline),
    };

    let pool: [&str; 2] = match weaker {
        Dimension::Consistency => match weaker_band {
            Band::Low => [
                "Schedule three fixed practice slots per week and treat them like matches.",
                "Keep a kit bag packed so a free half hour can become a session.",
            ],
            Band::Mid => [
                "Add one more training day per week; frequency beats duration.",
                "Attach practice to an existing routine so the habit carries itself.",
            ],
            Band::High => [
                "Your rhythm is excellent; protect it during busy weeks with shorter sessions.",
                "Use one session a week purely for match simulation to cash in the consistency.",
            ],
        },
        _ => match weaker_band {
            Band::Low => [
                "Write the drill list before the session and tick each item off as you go.",
                "Halve the number of planned drills until you finish a full list, then build back up.",
            ],
            Band::Mid => [
                "Finish the drill you least enjoy first; the rest of the session gets easier.",
                "Track completed drills in your log daily to keep the target visible.",
            ],
            Band::High => [
                "Drill completion is strong; raise the difficulty before raising the volume.",
                "Rotate in one new drill a week so completion stays challenging.",
            ],
        },
    };

    let trend_tip = if metrics.improvement >= 0.0 {
        "Your self-ratings are trending up — keep honest notes so you know what's working."
    } else {
        "Your self-ratings have dipped; review your recent session notes and drop to a drill \
         difficulty you can win at before pushing on."
    };

    vec![pool[0].to_string(), pool[1].to_string(), trend_tip.to_string()]
}

/// The two lowest-scoring dimensions on a common 0-100 scale.
///
/// Improvement and weekly trend are mapped via `(x + 100) / 2` for ranking
/// only. Ties resolve in the fixed priority order consistency > discipline >
/// improvement > weekly trend, which the stable sort preserves.
fn focus_areas(metrics: &PerformanceMetrics) -> [Dimension; 2] {
    let mut ranked = [
        (Dimension::Consistency, metrics.consistency),
        (Dimension::Discipline, metrics.discipline),
        (Dimension::Improvement, (metrics.improvement + 100.0) / 2.0),
        (Dimension::WeeklyTrend, (metrics.weekly_trend + 100.0) / 2.0),
    ];
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    [ranked[0].0, ranked[1].0]
}
