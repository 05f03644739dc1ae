use crate::error::EncodeError;

/// OR-reduce the neuron output sequence into a binary string.
///
/// Consecutive non-overlapping windows of `tolerance` steps each become
/// one character: '1' if any output in the window is non-zero, '0' if all
/// are zero. The final window may be short when the sequence length is
/// not a multiple of `tolerance`; that is equivalent to zero-padding it,
/// since padding can never contribute a spike. Output length is
/// ceil(len / tolerance).
pub fn reduce_to_binary_code(outputs: &[f32], tolerance: usize) -> Result<String, EncodeError> {
    if tolerance == 0 {
        return Err(EncodeError::InvalidTolerance(tolerance));
    }

    let mut code = String::with_capacity(outputs.len().div_ceil(tolerance));
    for window in outputs.chunks(tolerance) {
        let fired = window.iter().any(|&v| v != 0.0);
        code.push(if fired { '1' } else { '0' });
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_tolerance_is_invalid() {
        let err = reduce_to_binary_code(&[0.0, 1.0], 0).unwrap_err();
        assert_eq!(err, EncodeError::InvalidTolerance(0));
    }

    #[test]
    fn length_is_ceil_of_len_over_tolerance() {
        for (len, tolerance, expected) in [(10, 2, 5), (10, 3, 4), (9, 3, 3), (1, 4, 1)] {
            let outputs = vec![0.0; len];
            let code = reduce_to_binary_code(&outputs, tolerance).unwrap();
            assert_eq!(code.len(), expected, "len={len} tolerance={tolerance}");
        }
    }

    #[test]
    fn all_zero_outputs_give_all_zero_code() {
        let code = reduce_to_binary_code(&[0.0; 10], 2).unwrap();
        assert_eq!(code, "00000");
    }

    #[test]
    fn any_spike_in_window_sets_its_bit() {
        // Single spike exactly at the start of the second window.
        let mut outputs = vec![0.0; 10];
        outputs[2] = 1.0;
        let code = reduce_to_binary_code(&outputs, 2).unwrap();
        assert_eq!(code, "01000");

        // And at the last slot of the first window.
        let mut outputs = vec![0.0; 10];
        outputs[1] = 1.0;
        let code = reduce_to_binary_code(&outputs, 2).unwrap();
        assert_eq!(code, "10000");
    }

    #[test]
    fn ragged_tail_window_behaves_like_zero_padding() {
        // Length 7, tolerance 3: windows [0..3), [3..6), [6..7).
        let mut outputs = vec![0.0; 7];
        outputs[6] = 1.0;
        let code = reduce_to_binary_code(&outputs, 3).unwrap();
        assert_eq!(code, "001");

        let code = reduce_to_binary_code(&vec![0.0; 7], 3).unwrap();
        assert_eq!(code, "000");
    }

    #[test]
    fn empty_sequence_gives_empty_code() {
        let code = reduce_to_binary_code(&[], 4).unwrap();
        assert_eq!(code, "");
    }

    #[test]
    fn tolerance_one_is_identity() {
        let code = reduce_to_binary_code(&[0.0, 1.0, 0.0, 1.0, 1.0], 1).unwrap();
        assert_eq!(code, "01011");
    }
}
