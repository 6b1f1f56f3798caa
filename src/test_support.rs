//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::model::{Block, Catalog, Exercise, Workout};

/// "Pull Day": block A with 3 exercises, block B with 2.
pub fn pull_day() -> Workout {
    Workout::new(
        "Pull Day",
        vec![
            Block::new(
                "Strength Block A",
                "10-15 min",
                vec![
                    Exercise::new("DB Rows", "3 x 10-12", "2 sec pull", "Go heavy"),
                    Exercise::new("Pull-ups", "3 x 6-8", "", ""),
                    Exercise::new("Face pulls", "3 x 15", "", "Squeeze at the top"),
                ],
            ),
            Block::new(
                "Finisher",
                "",
                vec![
                    Exercise::new("Dead hangs", "2 x 20-30 sec", "", ""),
                    Exercise::named("Band pull-aparts"),
                ],
            ),
        ],
    )
}

/// A second workout so menu selection has somewhere to go.
pub fn leg_day() -> Workout {
    Workout::new(
        "Leg Day",
        vec![Block::new(
            "Main",
            "20 min",
            vec![
                Exercise::new("Goblet squats", "4 x 10", "3-1-1", ""),
                Exercise::new("RDLs", "3 x 8", "", "Hinge, don't squat"),
            ],
        )],
    )
}

/// Catalog with "Pull Day" then "Leg Day".
pub fn test_catalog() -> Catalog {
    Catalog::new(vec![pull_day(), leg_day()])
}

/// Build a one-workout catalog whose blocks have the given exercise counts.
pub fn catalog_with_blocks(sizes: &[usize]) -> Catalog {
    let blocks = sizes
        .iter()
        .enumerate()
        .map(|(b, &n)| {
            let exercises = (0..n)
                .map(|e| Exercise::named(format!("Exercise {b}.{e}")))
                .collect();
            Block::new(format!("Block {b}"), "", exercises)
        })
        .collect();
    Catalog::single(Workout::new("Generated", blocks))
}
