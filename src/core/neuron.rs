use crate::error::EncodeError;
use crate::spikes::SpikeTrain;
use crate::weights::ChannelWeights;

/// Leaky-integrate-and-fire neuron behind a 5 -> 1 weighted projection.
///
/// Per step: the membrane decays by exp(-1/tau), then accumulates the
/// projected input current. On reaching or exceeding `threshold` the step
/// outputs 1.0 and the membrane hard-resets to 0; otherwise the step
/// outputs 0.0 and the membrane carries over. Small `tau` means fast leak
/// (little memory between steps), large `tau` means slow leak.
#[derive(Debug, Clone)]
pub struct LifNeuron {
    threshold: f32,
    decay: f32,
    bias: f32,
    membrane: f32,
}

impl LifNeuron {
    /// `bias` is an optional constant added to every projected current;
    /// `None` disables it.
    pub fn new(threshold: f32, tau: f32, bias: Option<f32>) -> Result<Self, EncodeError> {
        if !(threshold > 0.0) || !(tau > 0.0) {
            return Err(EncodeError::InvalidNeuronConfig { threshold, tau });
        }
        Ok(Self {
            threshold,
            decay: (-1.0 / tau).exp(),
            bias: bias.unwrap_or(0.0),
            membrane: 0.0,
        })
    }

    /// Return the membrane to rest. Running a train resets first, so one
    /// instance can be reused across concepts without leaking state.
    pub fn reset(&mut self) {
        self.membrane = 0.0;
    }

    #[inline]
    pub fn membrane(&self) -> f32 {
        self.membrane
    }

    /// Advance one step with the given input current.
    /// Returns 1.0 if the neuron fired this step, 0.0 otherwise.
    pub fn step(&mut self, current: f32) -> f32 {
        self.membrane = self.membrane * self.decay + current;
        if self.membrane >= self.threshold {
            self.membrane = 0.0;
            1.0
        } else {
            0.0
        }
    }

    /// Drive the neuron with a whole spike train and collect one output
    /// per time step.
    pub fn run(&mut self, train: &SpikeTrain, weights: &ChannelWeights) -> Vec<f32> {
        self.reset();
        train
            .rows()
            .iter()
            .map(|row| self.step(weights.project(row) + self.bias))
            .collect()
    }
}
