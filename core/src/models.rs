use serde::{Deserialize, Serialize};
use std::fmt;

/// Aktivitetstype – bestemmer hvilket formelsett som gjelder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    Walking,
    Swimming,
}

impl WorkoutKind {
    /// Visningsnavn i sammendragsmeldingen.
    pub fn label(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Walking => "Walking",
            WorkoutKind::Swimming => "Swimming",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Én treningsøkt slik den kommer fra sensorpakken, ferdig validert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Workout {
    Running {
        action: f64, // steg
        duration_h: f64,
        weight_kg: f64,
    },
    Walking {
        action: f64, // steg
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    },
    Swimming {
        action: f64, // svømmetak
        duration_h: f64,
        weight_kg: f64,
        length_pool_m: f64,
        count_pool: f64,
    },
}

impl Workout {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running { .. } => WorkoutKind::Running,
            Workout::Walking { .. } => WorkoutKind::Walking,
            Workout::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    pub fn action(&self) -> f64 {
        match *self {
            Workout::Running { action, .. }
            | Workout::Walking { action, .. }
            | Workout::Swimming { action, .. } => action,
        }
    }

    /// Varighet i timer. Brukes som divisor – alltid > 0 etter validering.
    pub fn duration_h(&self) -> f64 {
        match *self {
            Workout::Running { duration_h, .. }
            | Workout::Walking { duration_h, .. }
            | Workout::Swimming { duration_h, .. } => duration_h,
        }
    }

    pub fn weight_kg(&self) -> f64 {
        match *self {
            Workout::Running { weight_kg, .. }
            | Workout::Walking { weight_kg, .. }
            | Workout::Swimming { weight_kg, .. } => weight_kg,
        }
    }
}
