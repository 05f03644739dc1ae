//! sensecode: binary fingerprints for concepts from multi-modal sensory
//! strength ratings.
//!
//! Each concept carries five intensity ratings (auditory, gustatory,
//! haptic, olfactory, visual). The pipeline turns the corpus into one
//! binary code per concept:
//!
//! 1. derive per-channel precision weights from corpus variance,
//! 2. sample the concept's normalized vector into a stochastic spike train,
//! 3. integrate the train through a leaky-integrate-and-fire neuron,
//! 4. OR-reduce the firing sequence into a compact '0'/'1' string.
//!
//! Codes from the same corpus are directly comparable bit-for-bit, which
//! is the point: similarity between concepts reduces to similarity
//! between their codes.

#[path = "core/prng.rs"]
pub mod prng;

#[path = "core/weights.rs"]
pub mod weights;

#[path = "core/spikes.rs"]
pub mod spikes;

#[path = "core/neuron.rs"]
pub mod neuron;

#[path = "core/code.rs"]
pub mod code;

#[path = "core/pipeline.rs"]
pub mod pipeline;

pub mod error;

pub use error::EncodeError;
pub use pipeline::{
    encode_concept, encode_corpus, CorpusReport, PipelineConfig, SkippedConcept,
};
pub use spikes::{validate_vector, SensoryVector, SpikeTrain};
pub use weights::{sample_variance, ChannelWeights, MODALITY_COUNT, MODALITY_NAMES};
