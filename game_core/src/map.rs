use glam::Vec2;

use crate::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from top-left corner and size (screen space, y grows downward)
    pub fn from_corner_size(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(x + w, y + h))
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self::new(center - half, center + half)
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap test; touching edges do not collide
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Viewport the run is played in, in CSS pixels.
///
/// All lane geometry is derived from the current dimensions every frame, so a
/// resize mid-run simply moves the limits and the player column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Horizontal position of the player column
    pub fn player_x(&self, config: &Config) -> f32 {
        self.width * config.player_x_ratio
    }

    pub fn top_limit(&self, config: &Config) -> f32 {
        self.height * config.lane_top_ratio
    }

    pub fn bottom_limit(&self, config: &Config) -> f32 {
        self.height * config.lane_bottom_ratio
    }

    /// X coordinate new obstacles appear at
    pub fn spawn_x(&self, config: &Config) -> f32 {
        self.width + config.spawn_margin
    }

    /// Fixed-size square centered on the player node
    pub fn player_box(&self, config: &Config, y: f32) -> Aabb {
        Aabb::from_center_size(
            Vec2::new(self.player_x(config), y),
            Vec2::splat(config.player_hitbox),
        )
    }

    /// Solid parts of a gate at `x`: everything above and below an opening
    /// centered at half the viewport height.
    pub fn gate_rects(&self, config: &Config, x: f32, w: f32) -> [Aabb; 2] {
        let gap_y = self.height / 2.0;
        let gap_half = config.gate_gap_half(self.height);
        let top = Aabb::from_corner_size(x, 0.0, w, gap_y - gap_half);
        let bottom = Aabb::from_corner_size(
            x,
            gap_y + gap_half,
            w,
            self.height - (gap_y + gap_half),
        );
        [top, bottom]
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}
