#![allow(dead_code)]
//! Interpolation helpers for acting motion.

use crate::data::Vec3;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    Vec3 {
        x: lerp_f32(a.x, b.x, t),
        y: lerp_f32(a.y, b.y, t),
        z: lerp_f32(a.z, b.z, t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp_f32(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp_f32(2.0, 4.0, 0.5), 3.0);
        let a = Vec3::new(-5.0, 0.0, 1.0);
        let b = Vec3::new(5.0, 2.0, 1.0);
        assert_eq!(lerp_vec3(a, b, 0.5), Vec3::new(0.0, 1.0, 1.0));
        assert_eq!(lerp_vec3(a, b, 0.0), a);
    }
}
