use cgmath::InnerSpace;

use crate::MeshError;

pub type Vector3 = cgmath::Vector3<f32>;

// Vertex buffers handed to a renderer rely on Vector3 being laid out as [f32; 3].
static_assertions::assert_eq_size!(Vector3, [f32; 3]);
static_assertions::assert_eq_align!(Vector3, f32);

/// A triangle with its corner positions resolved out of a [`crate::TriangleMesh`].
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Triangle {
    pub p0: Vector3,
    pub p1: Vector3,
    pub p2: Vector3,
}

impl std::default::Default for Triangle {
    fn default() -> Self {
        let origin = Vector3::new(0.0, 0.0, 0.0);
        Self {
            p0: origin,
            p1: origin,
            p2: origin,
        }
    }
}

/// Projects `v` onto the unit sphere.
///
/// A zero-length input yields NaN components. Use [`try_normalize`] when the
/// input is not known to be non-zero.
#[inline]
pub fn normalize(v: Vector3) -> Vector3 {
    v.normalize()
}

/// Projects `v` onto the unit sphere, rejecting vectors with no direction.
pub fn try_normalize(v: Vector3) -> Result<Vector3, MeshError> {
    let length = v.magnitude();
    if length == 0.0 || !length.is_finite() {
        return Err(MeshError::ZeroLengthVector {
            x: v.x,
            y: v.y,
            z: v.z,
        });
    }
    Ok(v / length)
}

/// Average of the two endpoints. Not normalized.
#[inline]
pub fn midpoint(a: Vector3, b: Vector3) -> Vector3 {
    (a + b) / 2.0
}

#[inline]
pub fn dot(w: Vector3, v: Vector3) -> f32 {
    w.dot(v)
}

/// Converts azimuth and elevation, both in degrees, to a unit direction.
///
/// Azimuth is measured in the xy plane from +x towards +y, elevation from the
/// xy plane towards +z.
pub fn az_el_to_vec3(az: f32, el: f32) -> Vector3 {
    let (az, el) = (az.to_radians(), el.to_radians());
    Vector3::new(az.cos() * el.cos(), az.sin() * el.cos(), el.sin())
}

/// Inverse of [`az_el_to_vec3`]. Returns `(azimuth, elevation)` in degrees,
/// azimuth in (-180, 180] and elevation in [-90, 90].
pub fn vec3_to_az_el(v: Vector3) -> (f32, f32) {
    let ground = (v.x * v.x + v.y * v.y).sqrt();
    let az = v.y.atan2(v.x).to_degrees();
    let el = v.z.atan2(ground).to_degrees();
    (az, el)
}

/// Angle in degrees between two unit vectors.
pub fn angle_between(w: Vector3, v: Vector3) -> f32 {
    // Rounding can push the dot of near-parallel unit vectors just past 1.
    dot(w, v).clamp(-1.0, 1.0).acos().to_degrees()
}
