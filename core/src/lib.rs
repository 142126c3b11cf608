pub mod cli;
pub mod error;
pub mod metrics;
pub mod models;
pub mod packet;
pub mod types;

pub use error::TrackerError;
pub use metrics::summarize;
pub use models::{Workout, WorkoutKind};
pub use packet::read_packet;
pub use types::WorkoutSummary;

use serde::Deserialize;

/// Full pipeline for én pakke: dispatch -> metrikker -> melding.
pub fn compute_summary(code: &str, data: &[f64]) -> Result<String, TrackerError> {
    let workout = packet::read_packet(code, data)?;
    Ok(metrics::summarize(&workout).message())
}

/// Pakkeform på JSON-grensen:
/// {"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}
#[derive(Debug, Deserialize)]
struct PacketIn {
    workout_type: String,
    data: Vec<f64>,
}

/// JSON-string inn, serialisert `WorkoutSummary` ut.
/// Parsefeil rapporteres med JSON-stien til feltet som feilet.
pub fn summarize_packet_json(packet_json: &str) -> Result<String, TrackerError> {
    let de = &mut serde_json::Deserializer::from_str(packet_json);
    let packet: PacketIn =
        serde_path_to_error::deserialize(de).map_err(|e| TrackerError::BadPacketJson {
            path: e.path().to_string(),
            message: e.inner().to_string(),
        })?;

    let workout = packet::read_packet(&packet.workout_type, &packet.data)?;
    let summary = metrics::summarize(&workout);

    serde_json::to_string(&summary).map_err(|e| TrackerError::BadPacketJson {
        path: ".".to_string(),
        message: e.to_string(),
    })
}
