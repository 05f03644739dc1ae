use crate::error::EncodeError;

/// Number of sensory channels per concept.
pub const MODALITY_COUNT: usize = 5;

/// Channel order is fixed corpus-wide; sensory vectors, spike rows and
/// weights all share it.
pub const MODALITY_NAMES: [&str; MODALITY_COUNT] =
    ["Auditory", "Gustatory", "Haptic", "Olfactory", "Visual"];

/// Per-modality combination weights, derived once per corpus and shared
/// read-only by every concept encoding.
///
/// Inverse-variance (precision) weighting: weight_m = c / var_m with
/// c = 1 / sum_j(1 / var_j). A low-variance channel carries more certainty
/// and gets a larger share. Two consequences worth testing against:
/// weight_m * var_m = c for every m, and the weights sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelWeights {
    values: [f32; MODALITY_COUNT],
}

impl ChannelWeights {
    /// Derive weights from precomputed per-modality variances.
    ///
    /// A variance that is zero, negative or NaN makes the precision
    /// undefined and fails the whole run.
    pub fn from_variances(variances: [f32; MODALITY_COUNT]) -> Result<Self, EncodeError> {
        for (m, &v) in variances.iter().enumerate() {
            if !(v > 0.0) {
                return Err(EncodeError::DegenerateInput {
                    modality: MODALITY_NAMES[m],
                });
            }
        }

        let c = 1.0 / variances.iter().map(|v| 1.0 / v).sum::<f32>();
        let mut values = [0.0; MODALITY_COUNT];
        for (w, &v) in values.iter_mut().zip(variances.iter()) {
            *w = c / v;
        }
        Ok(Self { values })
    }

    /// Derive weights straight from raw per-modality value columns.
    ///
    /// Variance is taken over the raw (pre-normalization) columns, one
    /// entry per concept.
    pub fn from_columns(columns: &[Vec<f32>; MODALITY_COUNT]) -> Result<Self, EncodeError> {
        let mut variances = [0.0; MODALITY_COUNT];
        for (slot, column) in variances.iter_mut().zip(columns.iter()) {
            *slot = sample_variance(column);
        }
        Self::from_variances(variances)
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; MODALITY_COUNT] {
        &self.values
    }

    /// 5 -> 1 projection of one spike row: sum of the weights of the
    /// channels that fired this step.
    #[inline]
    pub fn project(&self, row: &[bool; MODALITY_COUNT]) -> f32 {
        let mut acc = 0.0;
        for (w, &fired) in self.values.iter().zip(row.iter()) {
            if fired {
                acc += w;
            }
        }
        acc
    }
}

/// Unbiased (n-1) sample variance. Returns 0.0 for fewer than two values,
/// which the weight deriver then rejects as degenerate.
pub fn sample_variance(values: &[f32]) -> f32 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f32;
    let mean = values.iter().sum::<f32>() / n;
    let sq_sum: f32 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    sq_sum / (n - 1.0)
}
