//! 3D position types for capsule and source directions

use serde::{Deserialize, Serialize};

/// 3D position in space, Ambisonic axis convention
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position3D {
    /// X coordinate (front/back, positive = front)
    pub x: f64,
    /// Y coordinate (left/right, positive = left)
    pub y: f64,
    /// Z coordinate (up/down, positive = up)
    pub z: f64,
}

impl Position3D {
    /// Create new position
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create from spherical coordinates
    ///
    /// # Arguments
    /// * `azimuth` - Horizontal angle in degrees (0 = front, positive = left)
    /// * `elevation` - Vertical angle in degrees (-90 to 90, positive = up)
    /// * `distance` - Distance from origin
    pub fn from_spherical(azimuth: f64, elevation: f64, distance: f64) -> Self {
        let az_rad = azimuth.to_radians();
        let el_rad = elevation.to_radians();
        let cos_el = el_rad.cos();

        Self {
            x: distance * az_rad.cos() * cos_el,
            y: distance * az_rad.sin() * cos_el,
            z: distance * el_rad.sin(),
        }
    }

    /// Convert to spherical coordinates
    pub fn to_spherical(&self) -> SphericalCoord {
        let distance = self.magnitude();
        if distance < 1e-12 {
            return SphericalCoord::new(0.0, 0.0, 0.0);
        }

        let azimuth = self.y.atan2(self.x).to_degrees();
        let elevation = (self.z / distance).asin().to_degrees();

        SphericalCoord::new(azimuth, elevation, distance)
    }

    /// Get magnitude (distance from origin)
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Normalize to unit vector
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag < 1e-12 {
            return Self::new(1.0, 0.0, 0.0); // Default forward
        }
        Self::new(self.x / mag, self.y / mag, self.z / mag)
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

/// Spherical coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalCoord {
    /// Azimuth in degrees (0 = front, positive = left)
    pub azimuth: f64,
    /// Elevation in degrees (-90 to 90)
    pub elevation: f64,
    /// Distance from origin
    pub distance: f64,
}

impl SphericalCoord {
    /// Create new spherical coordinate
    pub fn new(azimuth: f64, elevation: f64, distance: f64) -> Self {
        Self {
            azimuth,
            elevation,
            distance,
        }
    }

    /// Convert to Cartesian position
    pub fn to_cartesian(&self) -> Position3D {
        Position3D::from_spherical(self.azimuth, self.elevation, self.distance)
    }
}
