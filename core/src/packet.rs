use crate::error::TrackerError;
use crate::models::{Workout, WorkoutKind};

/// Antall posisjonelle felter per aktivitet.
pub fn arity(kind: WorkoutKind) -> usize {
    match kind {
        WorkoutKind::Running => 3,  // [action, duration_h, weight_kg]
        WorkoutKind::Walking => 4,  // + height_cm
        WorkoutKind::Swimming => 5, // + length_pool_m, count_pool
    }
}

/// Les én sensorpakke: aktivitetskode + posisjonelle argumenter.
pub fn read_packet(code: &str, data: &[f64]) -> Result<Workout, TrackerError> {
    let kind = match code {
        "RUN" => WorkoutKind::Running,
        "WLK" => WorkoutKind::Walking,
        "SWM" => WorkoutKind::Swimming,
        _ => {
            log::warn!("avviser pakke med ukjent kode {:?}", code);
            return Err(TrackerError::UnknownActivityKind(code.to_string()));
        }
    };

    let expected = arity(kind);
    if data.len() != expected {
        return Err(TrackerError::InvalidArgumentCount {
            kind,
            expected,
            got: data.len(),
        });
    }

    let workout = match kind {
        WorkoutKind::Running => Workout::Running {
            action: data[0],
            duration_h: data[1],
            weight_kg: data[2],
        },
        WorkoutKind::Walking => Workout::Walking {
            action: data[0],
            duration_h: data[1],
            weight_kg: data[2],
            height_cm: data[3],
        },
        WorkoutKind::Swimming => Workout::Swimming {
            action: data[0],
            duration_h: data[1],
            weight_kg: data[2],
            length_pool_m: data[3],
            count_pool: data[4],
        },
    };

    validate(&workout)?;
    log::debug!("pakke {} -> {:?}", code, workout.kind());
    Ok(workout)
}

/// Varighet og vekt er divisorer/faktorer og må være > 0.
/// Her stopper vi også NaN/inf før de når formlene.
fn validate(w: &Workout) -> Result<(), TrackerError> {
    require_positive("duration_h", w.duration_h())?;
    require_positive("weight_kg", w.weight_kg())?;

    let action = w.action();
    if !action.is_finite() || action < 0.0 {
        return Err(TrackerError::InvalidArgumentValue {
            field: "action",
            value: action,
        });
    }

    if let Workout::Walking { height_cm, .. } = *w {
        require_positive("height_cm", height_cm)?;
    }
    if let Workout::Swimming {
        length_pool_m,
        count_pool,
        ..
    } = *w
    {
        require_positive("length_pool_m", length_pool_m)?;
        require_positive("count_pool", count_pool)?;
    }
    Ok(())
}

fn require_positive(field: &'static str, value: f64) -> Result<(), TrackerError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TrackerError::InvalidArgumentValue { field, value })
    }
}
