use crate::models::WorkoutKind;
use serde::{Deserialize, Serialize};

/// Avledet sammendrag for én økt – bygges én gang, endres aldri.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub workout_type: WorkoutKind,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub kcal: f64,
}

impl WorkoutSummary {
    /// Fast meldingsmal, alle verdier med tre desimaler.
    pub fn message(&self) -> String {
        format!(
            "Workout type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout_type, self.duration_h, self.distance_km, self.mean_speed_kmh, self.kcal
        )
    }
}
