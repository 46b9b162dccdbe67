use glam::{Mat4, Vec3};

/// Radians added per tick.
pub const DEFAULT_STEP: f32 = 0.02;

/// Rotation axis; intentionally not unit length, [`rotation_about`] normalizes it.
pub const DEFAULT_AXIS: Vec3 = Vec3::new(1.0, 1.0, 0.0);

/// Accumulated rotation angle of the cube.
///
/// The angle grows without bound; periodicity of sin/cos takes care of wrapping.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotation {
    angle: f32,
    step: f32,
}

impl Rotation {
    pub fn new(step: f32) -> Self {
        Self { angle: 0.0, step }
    }

    /// Current angle in radians.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Advances by one step and returns the new angle.
    pub fn advance(&mut self) -> f32 {
        self.angle += self.step;
        self.angle
    }

    /// Model matrix for the current angle about `axis`.
    pub fn model_matrix(&self, axis: Vec3) -> Mat4 {
        Mat4::IDENTITY * rotation_about(self.angle, axis)
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

/// Axis-angle rotation matrix. `axis` need not be normalized.
///
/// A zero-length axis has no direction to rotate about and yields the identity.
pub fn rotation_about(radians: f32, axis: Vec3) -> Mat4 {
    let unit = axis.normalize_or_zero();
    if unit == Vec3::ZERO {
        return Mat4::IDENTITY;
    }
    Mat4::from_axis_angle(unit, radians)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_rotation(m: Mat4) {
        let cols = [m.x_axis.truncate(), m.y_axis.truncate(), m.z_axis.truncate()];
        for (i, a) in cols.iter().enumerate() {
            assert!((a.length() - 1.0).abs() < EPS, "column {i} not unit: {a}");
            for b in &cols[i + 1..] {
                assert!(a.dot(*b).abs() < EPS, "columns not orthogonal: {a} {b}");
            }
        }
        assert!((m.determinant() - 1.0).abs() < EPS, "det = {}", m.determinant());
        assert_eq!(m.w_axis, glam::Vec4::W);
    }

    // ── Rotation state ────────────────────────────────────────────────────

    #[test]
    fn starts_at_zero() {
        assert_eq!(Rotation::default().angle(), 0.0);
    }

    #[test]
    fn advances_by_fixed_step() {
        let mut r = Rotation::default();
        for n in 1..=500u32 {
            r.advance();
            let expected = DEFAULT_STEP * n as f32;
            assert!((r.angle() - expected).abs() < 1e-3, "after {n} ticks: {}", r.angle());
        }
    }

    #[test]
    fn grows_past_two_pi_without_wrapping() {
        let mut r = Rotation::default();
        for _ in 0..1000 {
            r.advance();
        }
        assert!(r.angle() > std::f32::consts::TAU * 3.0);
    }

    #[test]
    fn custom_step() {
        let mut r = Rotation::new(0.5);
        r.advance();
        r.advance();
        assert_eq!(r.angle(), 1.0);
    }

    // ── model matrix ──────────────────────────────────────────────────────

    #[test]
    fn identity_at_zero() {
        assert_eq!(Rotation::default().model_matrix(DEFAULT_AXIS), Mat4::IDENTITY);
    }

    #[test]
    fn always_a_proper_rotation() {
        let mut r = Rotation::default();
        for _ in 0..2000 {
            assert_rotation(r.model_matrix(DEFAULT_AXIS));
            r.advance();
        }
    }

    #[test]
    fn axis_is_normalized_internally() {
        let a = rotation_about(1.3, DEFAULT_AXIS);
        let b = rotation_about(1.3, DEFAULT_AXIS * 7.5);
        assert!(a.abs_diff_eq(b, EPS));
        assert_rotation(a);
    }

    #[test]
    fn axis_is_left_fixed() {
        let m = rotation_about(0.9, DEFAULT_AXIS);
        let unit = DEFAULT_AXIS.normalize();
        assert!(m.transform_vector3(unit).abs_diff_eq(unit, EPS));
    }

    #[test]
    fn zero_axis_is_identity() {
        assert_eq!(rotation_about(1.0, Vec3::ZERO), Mat4::IDENTITY);
    }
}
