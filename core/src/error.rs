use crate::models::WorkoutKind;
use thiserror::Error;

/// Valideringsfeil fra pakke-dispatch og JSON-inngangen.
/// Ingen av disse er fatale for prosessen – driveren velger selv
/// om den vil hoppe over pakken eller avbryte.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    /// Ukjent aktivitetskode. Vi defaulter aldri til en aktivitet.
    #[error("unknown activity kind: {0:?}")]
    UnknownActivityKind(String),

    #[error("{kind} expects {expected} arguments, got {got}")]
    InvalidArgumentCount {
        kind: WorkoutKind,
        expected: usize,
        got: usize,
    },

    #[error("invalid value for {field}: {value}")]
    InvalidArgumentValue { field: &'static str, value: f64 },

    /// Parsefeil på JSON-grensen, med sti til feltet som feilet.
    #[error("bad packet json at {path}: {message}")]
    BadPacketJson { path: String, message: String },
}
