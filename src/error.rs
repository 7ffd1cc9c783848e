use thiserror::Error;

/// Errors raised by the relevance engine's few genuinely-failing operations.
///
/// Admission, area synthesis, and matching never raise -- they clamp or
/// return default/sentinel values (see `trace.rs`). Only operations with no
/// meaningful default use this type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("trace has {0} point(s), need at least 2")]
    NotEnoughTracePoints(usize),

    #[error("degenerate edge: both endpoints coincide")]
    DegenerateEdge,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_enough_trace_points_display() {
        let err = EngineError::NotEnoughTracePoints(1);
        assert_eq!(err.to_string(), "trace has 1 point(s), need at least 2");
    }

    #[test]
    fn degenerate_edge_display() {
        let err = EngineError::DegenerateEdge;
        assert_eq!(err.to_string(), "degenerate edge: both endpoints coincide");
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(
            EngineError::NotEnoughTracePoints(0),
            EngineError::NotEnoughTracePoints(0)
        );
        assert_ne!(
            EngineError::NotEnoughTracePoints(0),
            EngineError::DegenerateEdge
        );
    }
}
