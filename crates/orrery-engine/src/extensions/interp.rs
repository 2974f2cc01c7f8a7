// extensions/interp.rs
//
// Pure interpolation helpers for animation — just math.
// Applying `lerp_vec3(current, target, f)` once per frame yields the
// exponential-smoothing camera glide used by focus and restore.

use glam::Vec3;

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two Vec3 values.
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
    }

    #[test]
    fn repeated_lerp_converges() {
        // The per-frame smoothing idiom: distance shrinks by (1 - t) each
        // step, so it strictly decreases and passes any tolerance.
        let target = Vec3::new(100.0, -40.0, 7.0);
        let mut pos = Vec3::ZERO;
        let mut prev_dist = (target - pos).length();
        let mut steps = 0;
        while (target - pos).length() >= 0.5 {
            pos = lerp_vec3(pos, target, 0.05);
            let dist = (target - pos).length();
            assert!(dist < prev_dist, "distance must strictly decrease");
            prev_dist = dist;
            steps += 1;
            assert!(steps < 1000, "did not converge");
        }
    }
}
