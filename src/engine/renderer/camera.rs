// Camera fitting the fixed simulation space into the window

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// Maps simulation space (origin top-left, y down) onto the window surface.
///
/// The simulation keeps the size it was created with. When the window
/// changes size or DPI, the whole simulation area is scaled uniformly to fit
/// and centred, leaving bars on the sides that do not match its aspect ratio.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Simulation extent in world units
    world_size: Vec2,
    /// Surface size in physical pixels
    viewport_size: Vec2,
    /// Physical pixels per world unit
    scale: f32,
    /// Physical pixel offset of the world origin
    offset: Vec2,
    /// View-projection matrix
    view_proj: Mat4,
}

impl Camera {
    /// Create a camera for a world of `world_size` shown on a surface of
    /// `viewport_width` by `viewport_height` physical pixels
    pub fn new(world_size: Vec2, viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            world_size,
            viewport_size: Vec2::new(viewport_width, viewport_height),
            scale: 1.0,
            offset: Vec2::ZERO,
            view_proj: Mat4::IDENTITY,
        };
        camera.update_view_proj();
        camera
    }

    /// Recompute the fit and the view-projection matrix
    fn update_view_proj(&mut self) {
        let ratio = self.viewport_size / self.world_size;
        self.scale = ratio.x.min(ratio.y).max(f32::EPSILON);
        self.offset = (self.viewport_size - self.world_size * self.scale) / 2.0;

        // Visible world rectangle, letterbox included
        let min = -self.offset / self.scale;
        let max = (self.viewport_size - self.offset) / self.scale;

        // Bottom of the screen is the largest y
        self.view_proj = Mat4::orthographic_rh(min.x, max.x, max.y, min.y, -1.0, 1.0);
    }

    /// Resize the viewport (physical pixels)
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_size = Vec2::new(width, height);
        self.update_view_proj();
    }

    /// Get the view-projection matrix
    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }

    /// Physical pixels per world unit
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Convert a physical-pixel window position to world coordinates
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        (screen_pos - self.offset) / self.scale
    }

    /// Convert world coordinates to a physical-pixel window position
    #[allow(dead_code)]
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        world_pos * self.scale + self.offset
    }
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Create a new camera uniform from a camera
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec4;

    fn clip(camera: &Camera, world: Vec2) -> Vec2 {
        let p = camera.view_proj_matrix() * Vec4::new(world.x, world.y, 0.0, 1.0);
        Vec2::new(p.x / p.w, p.y / p.w)
    }

    #[test]
    fn test_same_size_is_identity_mapping() {
        let camera = Camera::new(Vec2::new(800.0, 600.0), 800.0, 600.0);
        assert_eq!(camera.scale(), 1.0);
        assert_eq!(camera.screen_to_world(Vec2::new(120.0, 80.0)), Vec2::new(120.0, 80.0));
    }

    #[test]
    fn test_hidpi_scales_uniformly() {
        let camera = Camera::new(Vec2::new(800.0, 600.0), 1600.0, 1200.0);
        assert_eq!(camera.scale(), 2.0);
        assert_eq!(camera.screen_to_world(Vec2::new(400.0, 300.0)), Vec2::new(200.0, 150.0));
    }

    #[test]
    fn test_wide_window_is_pillarboxed() {
        let mut camera = Camera::new(Vec2::new(800.0, 600.0), 800.0, 600.0);
        camera.resize(1200.0, 600.0);

        assert_eq!(camera.scale(), 1.0);
        // 200px bars left and right
        assert_eq!(camera.screen_to_world(Vec2::new(200.0, 0.0)), Vec2::ZERO);
        assert_eq!(camera.world_to_screen(Vec2::new(800.0, 600.0)), Vec2::new(1000.0, 600.0));
    }

    #[test]
    fn test_projection_puts_world_origin_top_left() {
        let camera = Camera::new(Vec2::new(800.0, 600.0), 800.0, 600.0);

        let top_left = clip(&camera, Vec2::ZERO);
        assert_relative_eq!(top_left.x, -1.0, epsilon = 1e-5);
        assert_relative_eq!(top_left.y, 1.0, epsilon = 1e-5);

        let bottom_right = clip(&camera, Vec2::new(800.0, 600.0));
        assert_relative_eq!(bottom_right.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(bottom_right.y, -1.0, epsilon = 1e-5);
    }
}
