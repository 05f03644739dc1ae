use hashbrown::HashMap;
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::code::reduce_to_binary_code;
use crate::error::EncodeError;
use crate::neuron::LifNeuron;
use crate::prng::Prng;
use crate::spikes::{validate_vector, SpikeTrain};
use crate::weights::ChannelWeights;

// Fallback run seed when the caller does not provide one, so unseeded
// runs are still reproducible for evaluation.
const DEFAULT_SEED: u64 = 0x5EED_C0DE;

/// Knobs for one encoding run, shared by every concept in the corpus.
///
/// `time_steps = 0` is not an error; it degenerates to an empty spike
/// train and an empty code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Discretized steps per spike train.
    pub time_steps: usize,
    /// Binarization window: steps OR-reduced into one output bit.
    pub tolerance: usize,
    /// Firing threshold of the integration neuron.
    pub threshold: f32,
    /// Leak time constant of the integration neuron.
    pub tau: f32,
    /// Constant added to the projected current; `None` disables it.
    pub bias: Option<f32>,
    /// Base seed for spike sampling. `None` uses a fixed default.
    pub seed: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            time_steps: 1000,
            tolerance: 2,
            threshold: 5.0,
            tau: 0.1,
            bias: None,
            seed: None,
        }
    }
}

impl PipelineConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A concept dropped from the run, with the reason it failed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SkippedConcept {
    pub concept: String,
    pub reason: String,
}

/// Outcome of a corpus run: binary codes for every concept that encoded
/// cleanly, plus the concepts that were skipped and why. Never a silent
/// partial map.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CorpusReport {
    pub codes: HashMap<String, String>,
    pub skipped: Vec<SkippedConcept>,
}

impl CorpusReport {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Encode one concept end-to-end against the shared channel weights.
///
/// The neuron is built fresh per call, so concepts never leak membrane
/// state into each other.
pub fn encode_concept(
    values: &[f32],
    weights: &ChannelWeights,
    cfg: &PipelineConfig,
    rng: &mut Prng,
) -> Result<String, EncodeError> {
    let vector = validate_vector(values)?;
    let mut neuron = LifNeuron::new(cfg.threshold, cfg.tau, cfg.bias)?;
    let train = SpikeTrain::sample(&vector, cfg.time_steps, rng);
    let outputs = neuron.run(&train, weights);
    reduce_to_binary_code(&outputs, cfg.tolerance)
}

// Per-concept seed: FNV-1a over the name, mixed with the run seed, so a
// concept's sampling does not depend on corpus order or parallelism.
fn concept_seed(base: u64, concept: &str) -> u64 {
    let mut h: u64 = 0xCBF2_9CE4_8422_2325;
    for &b in concept.as_bytes() {
        h ^= b as u64;
        h = h.wrapping_mul(0x100_0000_01B3);
    }
    h ^ base
}

/// Run the whole corpus.
///
/// Weight derivation failures are fatal and happen before this call.
/// Per-concept failures (malformed vector, lazily surfaced neuron or
/// tolerance misconfiguration) are isolated: the concept is recorded in
/// `skipped` and the run continues.
pub fn encode_corpus(
    corpus: &[(String, Vec<f32>)],
    weights: &ChannelWeights,
    cfg: &PipelineConfig,
) -> CorpusReport {
    let base = cfg.seed.unwrap_or(DEFAULT_SEED);

    #[cfg(feature = "parallel")]
    let results: Vec<(&str, Result<String, EncodeError>)> = {
        use rayon::prelude::*;
        corpus
            .par_iter()
            .map(|(concept, values)| {
                let mut rng = Prng::new(concept_seed(base, concept));
                (concept.as_str(), encode_concept(values, weights, cfg, &mut rng))
            })
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let results: Vec<(&str, Result<String, EncodeError>)> = corpus
        .iter()
        .map(|(concept, values)| {
            let mut rng = Prng::new(concept_seed(base, concept));
            (concept.as_str(), encode_concept(values, weights, cfg, &mut rng))
        })
        .collect();

    let mut report = CorpusReport::default();
    for (concept, result) in results {
        match result {
            Ok(code) => {
                debug!(concept, code = code.as_str(), "concept encoded");
                report.codes.insert(concept.to_string(), code);
            }
            Err(err) => {
                warn!(concept, error = %err, "concept skipped");
                report.skipped.push(SkippedConcept {
                    concept: concept.to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }
    report
}
