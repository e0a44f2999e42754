use glam::{EulerRot, Mat4, Quat, Vec3};

/// Per-instance data for GPU, one column-major model matrix
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
}

impl InstanceRaw {
    pub const IDENTITY: InstanceRaw = InstanceRaw {
        model: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub fn from_matrix(matrix: Mat4) -> Self {
        Self {
            model: matrix.to_cols_array_2d(),
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }

    pub fn translation(&self) -> Vec3 {
        let [x, y, z, _] = self.model[3];
        Vec3::new(x, y, z)
    }
}

impl From<Mat4> for InstanceRaw {
    fn from(matrix: Mat4) -> Self {
        Self::from_matrix(matrix)
    }
}

/// Local transform of a scene node.
///
/// Rotation is stored as XYZ Euler angles in radians so oscillators can
/// drive a single axis directly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn xyz(x: f32, y: f32, z: f32) -> Self {
        Self::at(Vec3::new(x, y, z))
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn rotated_x(mut self, angle: f32) -> Self {
        self.rotation.x = angle;
        self
    }

    pub fn rotated_y(mut self, angle: f32) -> Self {
        self.rotation.y = angle;
        self
    }

    pub fn rotated_z(mut self, angle: f32) -> Self {
        self.rotation.z = angle;
        self
    }

    pub fn scaled(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    pub fn scaled_by(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.translation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_raw_is_sixty_four_bytes() {
        assert_eq!(std::mem::size_of::<InstanceRaw>(), 64);
    }

    #[test]
    fn identity_instance_matches_identity_matrix() {
        assert_eq!(InstanceRaw::from_matrix(Mat4::IDENTITY), InstanceRaw::IDENTITY);
    }

    #[test]
    fn transform_matrix_carries_translation() {
        let t = Transform::xyz(1.0, 2.0, 3.0).rotated_y(1.0).scaled(2.0);
        let raw = InstanceRaw::from(t.matrix());
        assert!((raw.translation() - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);
    }
}
