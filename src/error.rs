use thiserror::Error;

/// Errors produced by the encoding pipeline.
///
/// Weight derivation errors are corpus-wide and fatal; the remaining
/// variants are per-concept and get isolated into the run report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    /// A modality is constant across the whole corpus, so its precision
    /// weight would be infinite.
    #[error("modality {modality} has zero variance across the corpus")]
    DegenerateInput { modality: &'static str },

    /// Neuron parameters outside their valid range.
    #[error("invalid neuron config: threshold={threshold}, tau={tau} (both must be > 0)")]
    InvalidNeuronConfig { threshold: f32, tau: f32 },

    /// The binarization window must cover at least one time step.
    #[error("invalid tolerance {0}: window size must be positive")]
    InvalidTolerance(usize),

    /// A sensory vector with the wrong arity, or a value outside [0, 1].
    #[error("malformed sensory vector: {reason}")]
    MalformedVector { reason: String },
}
