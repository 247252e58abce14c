//! Camera for the lane
//!
//! 2D orthographic camera over CSS pixels, origin top-left, y down

use glam::{Mat4, Vec3};

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Map `width` x `height` CSS pixels onto clip space
    pub fn pixels(width: f32, height: f32) -> Self {
        let view = Mat4::IDENTITY;
        // top = 0, bottom = height so y grows downward like the DOM
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);

        Self { view, projection }
    }

    pub fn project(&self, x: f32, y: f32) -> Vec3 {
        (self.projection * self.view).project_point3(Vec3::new(x, y, 0.0))
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        let view_proj = camera.projection * camera.view;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_pixel_corners_map_to_clip_space() {
        let camera = Camera::pixels(800.0, 600.0);
        assert!(close(camera.project(0.0, 0.0).truncate().extend(0.0), Vec3::new(-1.0, 1.0, 0.0)));
        assert!(close(camera.project(800.0, 600.0).truncate().extend(0.0), Vec3::new(1.0, -1.0, 0.0)));
        assert!(close(camera.project(400.0, 300.0).truncate().extend(0.0), Vec3::ZERO));
    }

    #[test]
    fn test_uniform_is_256_bytes() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 256);
    }
}
