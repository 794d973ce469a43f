//! Level bands keyed on lifetime points.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub level: u32,
    pub name: &'static str,
    pub min_points: u64,
    /// `None` for the uncapped top level.
    pub max_points: Option<u64>,
    /// Hex color for display.
    pub color: &'static str,
}

pub const LEVELS: [Level; 6] = [
    Level {
        level: 1,
        name: "Geography Novice",
        min_points: 0,
        max_points: Some(999),
        color: "#94a3b8",
    },
    Level {
        level: 2,
        name: "World Explorer",
        min_points: 1_000,
        max_points: Some(2_499),
        color: "#22c55e",
    },
    Level {
        level: 3,
        name: "Globe Trotter",
        min_points: 2_500,
        max_points: Some(4_999),
        color: "#3b82f6",
    },
    Level {
        level: 4,
        name: "Cartographer",
        min_points: 5_000,
        max_points: Some(9_999),
        color: "#a855f7",
    },
    Level {
        level: 5,
        name: "Geography Master",
        min_points: 10_000,
        max_points: Some(19_999),
        color: "#f59e0b",
    },
    Level {
        level: 6,
        name: "World Champion",
        min_points: 20_000,
        max_points: None,
        color: "#ef4444",
    },
];

pub fn level_for_points(points: u64) -> Level {
    LEVELS
        .iter()
        .rev()
        .find(|l| points >= l.min_points)
        .copied()
        .unwrap_or(LEVELS[0])
}

pub fn level_by_number(number: u32) -> Level {
    LEVELS
        .iter()
        .find(|l| l.level == number)
        .copied()
        .unwrap_or(LEVELS[0])
}

/// Progress through the current band, 0–100.
pub fn level_progress(points: u64) -> f64 {
    let level = level_for_points(points);
    let Some(max) = level.max_points else {
        return 100.0;
    };

    let in_level = (points - level.min_points) as f64;
    let range = (max - level.min_points + 1) as f64;
    (in_level / range * 100.0).min(100.0)
}

/// Points still needed to reach the next level; 0 at the top.
pub fn points_to_next_level(points: u64) -> u64 {
    match level_for_points(points).max_points {
        Some(max) => max + 1 - points,
        None => 0,
    }
}

pub fn is_level_up(previous_points: u64, new_points: u64) -> bool {
    level_for_points(new_points).level > level_for_points(previous_points).level
}
