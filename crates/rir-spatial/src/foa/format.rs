//! Ambisonic format conversion - normalization and channel ordering

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use super::FOA_CHANNELS;
use crate::error::{SpatialError, SpatialResult};

/// Normalization scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Normalization {
    /// SN3D (Schmidt semi-normalized) - AmbiX standard
    SN3D,
    /// N3D (fully normalized)
    N3D,
    /// FuMa (Furse-Malham) - legacy
    FuMa,
}

/// Channel ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelOrdering {
    /// ACN (Ambisonic Channel Number) - AmbiX standard, [W, Y, Z, X]
    ACN,
    /// FuMa ordering - legacy, [W, X, Y, Z]
    FuMa,
}

/// Complete first-order format specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbisonicFormat {
    /// Normalization scheme
    pub normalization: Normalization,
    /// Channel ordering
    pub ordering: ChannelOrdering,
}

impl AmbisonicFormat {
    /// AmbiX format (ACN + SN3D) - modern standard
    pub fn ambix() -> Self {
        Self {
            normalization: Normalization::SN3D,
            ordering: ChannelOrdering::ACN,
        }
    }

    /// FuMa format (legacy)
    pub fn fuma() -> Self {
        Self {
            normalization: Normalization::FuMa,
            ordering: ChannelOrdering::FuMa,
        }
    }
}

impl Default for AmbisonicFormat {
    fn default() -> Self {
        Self::ambix()
    }
}

/// First-order format converter
pub struct FormatConverter {
    /// Per-source-channel gain for the normalization change
    norm_gains: [f64; FOA_CHANNELS],
    /// Channel permutation (source index -> target index)
    reorder_map: [usize; FOA_CHANNELS],
}

impl FormatConverter {
    /// Create converter between two first-order formats
    pub fn new(source: AmbisonicFormat, target: AmbisonicFormat) -> Self {
        let source_to_acn = Self::ordering_to_acn(source.ordering);
        let target_to_acn = Self::ordering_to_acn(target.ordering);

        // Invert the target map: ACN -> target channel index
        let mut acn_to_target = [0usize; FOA_CHANNELS];
        for (idx, &acn) in target_to_acn.iter().enumerate() {
            acn_to_target[acn] = idx;
        }

        let source_factors = Self::norm_factors(source.normalization);
        let target_factors = Self::norm_factors(target.normalization);

        let mut norm_gains = [1.0f64; FOA_CHANNELS];
        let mut reorder_map = [0usize; FOA_CHANNELS];
        for src in 0..FOA_CHANNELS {
            let acn = source_to_acn[src];
            reorder_map[src] = acn_to_target[acn];
            norm_gains[src] = target_factors[acn] / source_factors[acn];
        }

        Self {
            norm_gains,
            reorder_map,
        }
    }

    /// Convert a first-order buffer of shape (time_samples, 4)
    ///
    /// # Errors
    ///
    /// [`SpatialError::InvalidChannelCount`] unless the input has exactly
    /// 4 columns.
    pub fn convert(&self, input: ArrayView2<'_, f64>) -> SpatialResult<Array2<f64>> {
        if input.ncols() != FOA_CHANNELS {
            return Err(SpatialError::InvalidChannelCount {
                expected: FOA_CHANNELS,
                got: input.ncols(),
            });
        }

        let mut output = Array2::<f64>::zeros(input.raw_dim());
        for src in 0..FOA_CHANNELS {
            let gain = self.norm_gains[src];
            let target = self.reorder_map[src];
            for t in 0..input.nrows() {
                output[[t, target]] = input[[t, src]] * gain;
            }
        }

        Ok(output)
    }

    /// Channel scaling of each normalization relative to SN3D, ACN-indexed
    fn norm_factors(norm: Normalization) -> [f64; FOA_CHANNELS] {
        match norm {
            Normalization::SN3D => [1.0; FOA_CHANNELS],
            // N3D = SN3D * sqrt(2l + 1)
            Normalization::N3D => {
                let dipole = 3.0f64.sqrt();
                [1.0, dipole, dipole, dipole]
            }
            // FuMa W carries -3 dB; first-order dipoles match SN3D
            Normalization::FuMa => [1.0 / 2.0f64.sqrt(), 1.0, 1.0, 1.0],
        }
    }

    /// Map from channel index in `ordering` to ACN index
    fn ordering_to_acn(ordering: ChannelOrdering) -> [usize; FOA_CHANNELS] {
        match ordering {
            ChannelOrdering::ACN => [0, 1, 2, 3],
            // FuMa order is W, X, Y, Z
            ChannelOrdering::FuMa => [0, 3, 1, 2],
        }
    }
}

/// Convert a first-order AmbiX buffer to FuMa
pub fn ambix_to_fuma(input: ArrayView2<'_, f64>) -> SpatialResult<Array2<f64>> {
    FormatConverter::new(AmbisonicFormat::ambix(), AmbisonicFormat::fuma()).convert(input)
}

/// Convert a first-order FuMa buffer to AmbiX
pub fn fuma_to_ambix(input: ArrayView2<'_, f64>) -> SpatialResult<Array2<f64>> {
    FormatConverter::new(AmbisonicFormat::fuma(), AmbisonicFormat::ambix()).convert(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::arr2;

    #[test]
    fn test_identity_conversion() {
        let converter = FormatConverter::new(AmbisonicFormat::ambix(), AmbisonicFormat::ambix());
        let input = arr2(&[[1.0, 0.5, 0.3, 0.7], [-0.2, 0.0, 0.9, -1.0]]);

        let output = converter.convert(input.view()).unwrap();
        for (got, want) in output.iter().zip(input.iter()) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ambix_to_fuma() {
        // AmbiX [W, Y, Z, X] with distinct channel values
        let input = arr2(&[[1.0, 2.0, 3.0, 4.0]]);
        let output = ambix_to_fuma(input.view()).unwrap();

        // FuMa order is [W, X, Y, Z] with W attenuated by 1/sqrt(2)
        assert_abs_diff_eq!(output[[0, 0]], 1.0 / 2.0f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(output[[0, 1]], 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(output[[0, 2]], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(output[[0, 3]], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fuma_ambix_roundtrip() {
        let input = arr2(&[[1.0, 0.5, 0.3, 0.7], [0.25, -0.5, 0.75, -1.0]]);

        let fuma = ambix_to_fuma(input.view()).unwrap();
        let back = fuma_to_ambix(fuma.view()).unwrap();

        for (got, want) in back.iter().zip(input.iter()) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sn3d_to_n3d_gains() {
        let converter = FormatConverter::new(
            AmbisonicFormat::ambix(),
            AmbisonicFormat {
                normalization: Normalization::N3D,
                ordering: ChannelOrdering::ACN,
            },
        );
        let input = arr2(&[[1.0, 1.0, 1.0, 1.0]]);
        let output = converter.convert(input.view()).unwrap();

        let dipole = 3.0f64.sqrt();
        assert_abs_diff_eq!(output[[0, 0]], 1.0, epsilon = 1e-12);
        for ch in 1..4 {
            assert_abs_diff_eq!(output[[0, ch]], dipole, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_invalid_channel_count() {
        let input = Array2::<f64>::zeros((8, 5));
        let err = ambix_to_fuma(input.view()).unwrap_err();
        assert!(matches!(
            err,
            SpatialError::InvalidChannelCount {
                expected: 4,
                got: 5
            }
        ));
    }
}
