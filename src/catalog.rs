//! Static drill catalog
//!
//! Immutable reference data the plan generator selects from. Catalog order is
//! part of the contract: first-fit selection and tie-breaking both follow it,
//! so reordering entries changes generated plans.

use crate::types::{Difficulty, Drill, DrillCategory};

fn drill(
    id: &str,
    name: &str,
    description: &str,
    duration: u32,
    difficulty: Difficulty,
    category: DrillCategory,
) -> Drill {
    Drill {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        duration,
        difficulty,
        category,
    }
}

/// Full static drill bank, in catalog order.
///
/// Every category carries at least one drill per difficulty, so every
/// role/skill filter combination yields a non-empty set.
pub fn catalog() -> Vec<Drill> {
    vec![
        drill(
            "bat-throwdowns",
            "Throwdown Timing",
            "Face 40 throwdowns focusing on head position and timing rather than power.",
            30,
            Difficulty::Easy,
            DrillCategory::Batting,
        ),
        drill(
            "bat-front-foot-drive",
            "Front-Foot Drive Repetitions",
            "Groove the front-foot drive off a bowling machine, 6 overs at a full length.",
            45,
            Difficulty::Medium,
            DrillCategory::Batting,
        ),
        drill(
            "bat-short-ball",
            "Short-Ball Response",
            "Pull, hook and evade against short-pitched bowling at match pace.",
            40,
            Difficulty::Hard,
            DrillCategory::Batting,
        ),
        drill(
            "bat-running-between",
            "Running Between Wickets",
            "Paired sprint work on calling, turning tight twos and sliding the bat.",
            25,
            Difficulty::Easy,
            DrillCategory::Batting,
        ),
        drill(
            "bat-spin-sweep",
            "Sweeping Against Spin",
            "Conventional and reverse sweep options against turning deliveries.",
            35,
            Difficulty::Hard,
            DrillCategory::Batting,
        ),
        drill(
            "bowl-target-cone",
            "Target Bowling at Cones",
            "Hit a cone on a good length, 5 sets of 6 deliveries, log your strike count.",
            30,
            Difficulty::Easy,
            DrillCategory::Bowling,
        ),
        drill(
            "bowl-yorker",
            "Yorker Under Pressure",
            "Bowl yorkers at a base-of-stumps target with a fielder count on the clock.",
            35,
            Difficulty::Hard,
            DrillCategory::Bowling,
        ),
        drill(
            "bowl-seam-position",
            "Seam Position Check",
            "Short run-up deliveries filmed for wrist and seam position review.",
            40,
            Difficulty::Medium,
            DrillCategory::Bowling,
        ),
        drill(
            "bowl-variation",
            "Variation Disguise",
            "Alternate stock ball and slower ball without a visible change in action.",
            45,
            Difficulty::Hard,
            DrillCategory::Bowling,
        ),
        drill(
            "bowl-run-up-rhythm",
            "Run-Up Rhythm",
            "Walk-throughs and three-quarter pace run-ups to settle approach rhythm.",
            20,
            Difficulty::Easy,
            DrillCategory::Bowling,
        ),
        drill(
            "field-high-catch",
            "High-Catch Circuit",
            "Rotating high catches from a fungo bat, call early and finish with soft hands.",
            30,
            Difficulty::Medium,
            DrillCategory::Fielding,
        ),
        drill(
            "field-ground-attack",
            "Attack the Ball",
            "One-handed pickup and throw on the run from a rolled ball.",
            25,
            Difficulty::Easy,
            DrillCategory::Fielding,
        ),
        drill(
            "field-keeper-glovework",
            "Keeper Glovework",
            "Standing-up takes off deflections, leg-side takes and quick stumping reps.",
            40,
            Difficulty::Hard,
            DrillCategory::Fielding,
        ),
        drill(
            "field-slip-cordon",
            "Slip Cordon Reflexes",
            "Edged balls off a slip cradle at increasing pace.",
            30,
            Difficulty::Medium,
            DrillCategory::Fielding,
        ),
        drill(
            "fit-interval-run",
            "Shuttle Intervals",
            "10 sets of 22-yard shuttles at match intensity with walk-back recovery.",
            25,
            Difficulty::Medium,
            DrillCategory::Fitness,
        ),
        drill(
            "fit-core-stability",
            "Core Stability Set",
            "Planks, dead bugs and rotational med-ball work for bowling and batting stability.",
            30,
            Difficulty::Easy,
            DrillCategory::Fitness,
        ),
        drill(
            "fit-mobility",
            "Mobility and Band Work",
            "Shoulder and hip mobility sequence with resistance bands.",
            20,
            Difficulty::Easy,
            DrillCategory::Fitness,
        ),
        drill(
            "fit-plyometrics",
            "Explosive Plyometrics",
            "Box jumps, bounds and lateral hops for first-step quickness.",
            35,
            Difficulty::Hard,
            DrillCategory::Fitness,
        ),
        drill(
            "bat-gap-hitting",
            "Gap-Hitting Targets",
            "Hit designated gaps against varied fields, scoring each placement.",
            40,
            Difficulty::Medium,
            DrillCategory::Batting,
        ),
        drill(
            "bowl-death-overs",
            "Death-Over Simulation",
            "Two simulated death overs with field set and batters attacking.",
            30,
            Difficulty::Medium,
            DrillCategory::Bowling,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let drills = catalog();
        let ids: HashSet<_> = drills.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), drills.len());
    }

    #[test]
    fn test_every_category_covers_every_difficulty_band() {
        let drills = catalog();
        for category in [
            DrillCategory::Batting,
            DrillCategory::Bowling,
            DrillCategory::Fielding,
            DrillCategory::Fitness,
        ] {
            // Beginner band needs Easy or Medium; Advanced needs Medium or Hard.
            let easy_or_medium = drills.iter().any(|d| {
                d.category == category
                    && matches!(d.difficulty, Difficulty::Easy | Difficulty::Medium)
            });
            let medium_or_hard = drills.iter().any(|d| {
                d.category == category
                    && matches!(d.difficulty, Difficulty::Medium | Difficulty::Hard)
            });
            assert!(easy_or_medium, "{} lacks a beginner drill", category.as_str());
            assert!(medium_or_hard, "{} lacks an advanced drill", category.as_str());
        }
    }

    #[test]
    fn test_catalog_is_deterministic() {
        assert_eq!(catalog(), catalog());
    }

    #[test]
    fn test_durations_are_positive() {
        assert!(catalog().iter().all(|d| d.duration > 0));
    }
}
