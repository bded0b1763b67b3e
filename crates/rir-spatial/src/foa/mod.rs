//! First-order Ambisonics (FOA)
//!
//! Real SN3D-normalized spherical harmonics in ACN order [W, Y, Z, X]
//! (the AmbiX convention):
//! - Basis evaluation for arbitrary directions
//! - A-format (tetrahedral microphone) to B-format RIR conversion
//! - SN3D/N3D/FuMa normalization and ACN/FuMa ordering conversion

mod format;
mod tetramic;

pub use format::{
    AmbisonicFormat, ChannelOrdering, FormatConverter, Normalization, ambix_to_fuma,
    fuma_to_ambix,
};
pub use tetramic::TetramicConverter;

use std::f64::consts::PI;

use crate::position::Position3D;

/// Number of channels in a first-order Ambisonic signal
pub const FOA_CHANNELS: usize = 4;

/// ACN channel index from (order, degree)
pub fn acn_index(order: i32, degree: i32) -> usize {
    (order * order + order + degree) as usize
}

/// Get (order, degree) from ACN index
pub fn acn_to_order_degree(acn: usize) -> (i32, i32) {
    let order = (acn as f64).sqrt().floor() as i32;
    let degree = acn as i32 - order * order - order;
    (order, degree)
}

/// Real SN3D-normalized spherical-harmonic basis for orders 0 and 1,
/// evaluated at `direction`, in ACN order [W, Y, Z, X].
///
/// Carries the physical 1/sqrt(4π) scaling so the values can be assembled
/// directly into a capsule encoding matrix.
pub fn sh_basis(direction: &Position3D) -> [f64; FOA_CHANNELS] {
    let dir = direction.normalized();
    let theta = dir.z.acos(); // inclination from +Z
    let phi = dir.y.atan2(dir.x); // azimuth in the horizontal plane

    let w = 1.0 / (4.0 * PI).sqrt();
    let dipole = (3.0 / (4.0 * PI)).sqrt();

    [
        w,
        dipole * theta.sin() * phi.sin(),
        dipole * theta.cos(),
        dipole * theta.sin() * phi.cos(),
    ]
}
