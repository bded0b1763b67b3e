//! A-format to B-format RIR conversion for tetrahedral microphones

use log::debug;
use nalgebra::{Matrix4, Vector4};
use ndarray::{Array2, ArrayView2, Axis};

use super::{FOA_CHANNELS, sh_basis};
use crate::error::{SpatialError, SpatialResult};
use crate::position::Position3D;

/// Capsule unit vectors of an ideal tetrahedral microphone
fn capsule_directions() -> [Position3D; FOA_CHANNELS] {
    let s = 3.0_f64.sqrt();
    [
        Position3D::new(1.0 / s, 1.0 / s, 1.0 / s),
        Position3D::new(1.0 / s, -1.0 / s, -1.0 / s),
        Position3D::new(-1.0 / s, 1.0 / s, -1.0 / s),
        Position3D::new(-1.0 / s, -1.0 / s, 1.0 / s),
    ]
}

/// A-format to B-format converter for an ideal tetrahedral microphone.
///
/// Derives the SN3D/ACN spherical-harmonic encoding matrix from the fixed
/// capsule geometry, inverts it once, and applies the inverse to every time
/// sample of the input. Output channels are [W, Y, Z, X] (AmbiX).
pub struct TetramicConverter {
    /// Basis functions (rows) evaluated at capsule directions (columns)
    encode: Matrix4<f64>,
    /// Inverse of the encoding matrix, the A → B transform
    decode: Matrix4<f64>,
}

impl TetramicConverter {
    /// Derive the encoding matrix from the capsule geometry and invert it.
    ///
    /// # Errors
    ///
    /// [`SpatialError::SingularMatrix`] if the encoding matrix cannot be
    /// inverted. The regular tetrahedron guarantees invertibility, so this
    /// only guards against a broken direction set.
    pub fn new() -> SpatialResult<Self> {
        let mut encode = Matrix4::zeros();
        for (capsule, dir) in capsule_directions().iter().enumerate() {
            let basis = sh_basis(dir);
            for (ch, &value) in basis.iter().enumerate() {
                encode[(ch, capsule)] = value;
            }
        }

        let decode = encode.try_inverse().ok_or(SpatialError::SingularMatrix)?;
        debug!(
            "derived tetramic A2B matrix, encoding det = {:.6e}",
            encode.determinant()
        );

        Ok(Self { encode, decode })
    }

    /// Encoding matrix: basis functions (rows) at capsule directions (columns)
    pub fn encoding_matrix(&self) -> &Matrix4<f64> {
        &self.encode
    }

    /// Decoding matrix: the A → B transform applied per time sample
    pub fn decoding_matrix(&self) -> &Matrix4<f64> {
        &self.decode
    }

    /// Convert A-format RIRs of shape (time_samples, 4) to B-format.
    ///
    /// Returns a freshly allocated buffer of the same shape with channels in
    /// ACN order [W, Y, Z, X], SN3D normalization. Each time sample is
    /// converted independently; non-finite input samples propagate to the
    /// output unchanged.
    ///
    /// # Errors
    ///
    /// [`SpatialError::InvalidChannelCount`] unless the input has exactly
    /// 4 columns.
    pub fn convert(&self, rirs_a: ArrayView2<'_, f64>) -> SpatialResult<Array2<f64>> {
        if rirs_a.ncols() != FOA_CHANNELS {
            return Err(SpatialError::InvalidChannelCount {
                expected: FOA_CHANNELS,
                got: rirs_a.ncols(),
            });
        }

        let mut rirs_b = Array2::<f64>::zeros(rirs_a.raw_dim());
        for (sample_a, mut sample_b) in rirs_a
            .axis_iter(Axis(0))
            .zip(rirs_b.axis_iter_mut(Axis(0)))
        {
            let a = Vector4::new(sample_a[0], sample_a[1], sample_a[2], sample_a[3]);
            let b = self.decode * a;
            for ch in 0..FOA_CHANNELS {
                sample_b[ch] = b[ch];
            }
        }

        Ok(rirs_b)
    }
}
