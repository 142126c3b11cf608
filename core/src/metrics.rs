use crate::models::Workout;
use crate::types::WorkoutSummary;

pub const M_IN_KM: f64 = 1000.0;
pub const LEN_STEP: f64 = 0.65; // meter per steg (løp/gange)
pub const MIN_PER_H: f64 = 60.0;
pub const KMH_TO_MS: f64 = 3.6;
pub const CM_PER_M: f64 = 100.0;

// Empiriske kaloriekoeffisienter – skal bevares eksakt.
const RUN_SPEED_FACTOR: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;
const WLK_WEIGHT_FACTOR: f64 = 0.035;
const WLK_SPEED_HEIGHT_FACTOR: f64 = 0.029;
const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_FACTOR: f64 = 2.0;

/// Distanse i km. Løp/gange bruker steglengde,
/// svømming bruker bassenglengde × antall lengder.
pub fn distance_km(w: &Workout) -> f64 {
    match *w {
        Workout::Running { action, .. } | Workout::Walking { action, .. } => {
            action * LEN_STEP / M_IN_KM
        }
        Workout::Swimming {
            length_pool_m,
            count_pool,
            ..
        } => length_pool_m * count_pool / M_IN_KM,
    }
}

/// Snittfart i km/t. For svømming følger farten direkte av
/// bassengregnskapet siden distansen er bassenglengde × lengder.
pub fn mean_speed_kmh(w: &Workout) -> f64 {
    distance_km(w) / w.duration_h()
}

/// Kalorier (kcal) per aktivitet. Exhaustiv match – en ny
/// aktivitet uten egen formel skal ikke kompilere.
pub fn spent_kcal(w: &Workout) -> f64 {
    let speed = mean_speed_kmh(w);
    match *w {
        Workout::Running {
            duration_h,
            weight_kg,
            ..
        } => {
            (RUN_SPEED_FACTOR * speed + RUN_SPEED_SHIFT) * weight_kg / M_IN_KM
                * duration_h
                * MIN_PER_H
        }
        Workout::Walking {
            duration_h,
            weight_kg,
            height_cm,
            ..
        } => {
            let speed_ms = speed / KMH_TO_MS;
            (WLK_WEIGHT_FACTOR * weight_kg
                + speed_ms.powi(2) / (height_cm / CM_PER_M) * WLK_SPEED_HEIGHT_FACTOR * weight_kg)
                * duration_h
                * MIN_PER_H
        }
        Workout::Swimming {
            duration_h,
            weight_kg,
            ..
        } => (speed + SWM_SPEED_SHIFT) * SWM_WEIGHT_FACTOR * weight_kg * duration_h,
    }
}

/// Bygg sammendraget for én økt. Ren funksjon – samme record
/// gir alltid bit-identisk resultat.
pub fn summarize(w: &Workout) -> WorkoutSummary {
    WorkoutSummary {
        workout_type: w.kind(),
        duration_h: w.duration_h(),
        distance_km: distance_km(w),
        mean_speed_kmh: mean_speed_kmh(w),
        kcal: spent_kcal(w),
    }
}
