//! Ambisonic room-impulse-response processing
//!
//! Converts first-order Ambisonic RIR measurements between microphone-native
//! and standard representations:
//!
//! ## A-format → B-format
//! - Ideal tetrahedral capsule geometry (4 capsules)
//! - SN3D normalization, ACN channel ordering (AmbiX)
//! - Batched conversion across all time samples
//!
//! ## Format conversion
//! - SN3D/N3D/FuMa normalization
//! - ACN/FuMa channel ordering
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rir_spatial::foa::TetramicConverter;
//!
//! // rirs_a: ndarray::Array2<f64> of shape (time_samples, 4)
//! let converter = TetramicConverter::new()?;
//! let rirs_b = converter.convert(rirs_a.view())?; // (T, 4), [W, Y, Z, X]
//! ```

pub mod foa;

mod error;
mod position;

pub use error::{SpatialError, SpatialResult};
pub use position::{Position3D, SphericalCoord};
