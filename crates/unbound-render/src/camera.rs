//! Camera and view management.

use glam::{Mat4, Vec3};

/// Camera for rendering.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: std::f32::consts::FRAC_PI_4,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    /// Set the aspect ratio.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Unit vector from the eye towards the target.
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Get the view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Get camera uniforms for GPU.
    pub fn uniforms(&self) -> CameraUniforms {
        CameraUniforms::from(self)
    }
}

/// Camera uniform buffer data for GPU.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub view_projection: [[f32; 4]; 4],
    pub position: [f32; 4],
}

impl From<&Camera> for CameraUniforms {
    fn from(camera: &Camera) -> Self {
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            projection: camera.projection_matrix().to_cols_array_2d(),
            view_projection: camera.view_projection_matrix().to_cols_array_2d(),
            position: [camera.position.x, camera.position.y, camera.position.z, 1.0],
        }
    }
}

/// Default eye height above the target.
pub const FOLLOW_HEIGHT: f32 = 45.0;
/// Default eye distance behind the target along +Z.
pub const FOLLOW_DISTANCE: f32 = 50.0;

/// Third-person camera trailing a single target.
///
/// Owned by whoever drives the frame loop; every `update` re-derives the eye
/// from the target, so it holds no state beyond the offset.
#[derive(Debug, Clone)]
pub struct FollowCamera {
    camera: Camera,
    height: f32,
    distance: f32,
}

impl FollowCamera {
    /// Create a follow camera looking at `target` with the default offset.
    pub fn new(target: Vec3) -> Self {
        Self::with_offset(target, FOLLOW_HEIGHT, FOLLOW_DISTANCE)
    }

    /// Create a follow camera with a custom height and distance.
    pub fn with_offset(target: Vec3, height: f32, distance: f32) -> Self {
        let camera = Camera {
            fov: 45.0_f32.to_radians(),
            ..Camera::default()
        };
        let mut follow = Self {
            camera,
            height,
            distance,
        };
        follow.update(target);
        follow
    }

    /// Re-aim at `target`, placing the eye above and behind it.
    pub fn update(&mut self, target: Vec3) {
        self.camera.target = target;
        self.camera.position = target + self.offset();
    }

    /// Eye offset from the target.
    pub const fn offset(&self) -> Vec3 {
        Vec3::new(0.0, self.height, self.distance)
    }

    /// The underlying camera.
    pub const fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Set the aspect ratio of the underlying camera.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.camera.set_aspect(aspect);
    }
}
