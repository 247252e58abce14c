use crate::{Aabb, Config, Viewport};

/// Player component - the node moving up and down the lane
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub y: f32,  // Vertical position in pixels (clamped to the lane)
    pub vy: f32, // Vertical velocity in px/s
}

impl Player {
    pub fn new(y: f32) -> Self {
        Self { y, vy: 0.0 }
    }
}

/// Movement intent for the player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerIntent {
    pub dir: i8, // -1 = ascend, 0 = steady, 1 = descend
}

impl PlayerIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Single solid block around a random vertical slot
    Bar,
    /// Full-height wall with an opening centered on the viewport
    Gate,
}

/// Color tag of an obstacle; the renderer maps it to a glow color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glow {
    Violet,
    Cyan,
    Magenta,
    Lime,
    Amber,
}

impl Glow {
    pub const PALETTE: [Glow; 5] = [Glow::Violet, Glow::Cyan, Glow::Magenta, Glow::Lime, Glow::Amber];

    pub fn hex(self) -> u32 {
        match self {
            Glow::Violet => 0x7c5cff,
            Glow::Cyan => 0x63faff,
            Glow::Magenta => 0xff4dc1,
            Glow::Lime => 0x9dff3a,
            Glow::Amber => 0xffd24d,
        }
    }
}

/// Obstacle component
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub x: f32, // Leading (left) edge
    pub y: f32, // Slot center; ignored by gates
    pub w: f32,
    pub h: f32,
    pub glow: Glow,
    pub scored: bool,
}

impl Obstacle {
    /// Right edge; the pass is credited once this is left of the player column
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.w
    }

    /// Flip the pass credit. Returns true only the first time.
    pub fn mark_scored(&mut self) -> bool {
        if self.scored {
            return false;
        }
        self.scored = true;
        true
    }

    /// Solid rectangles this obstacle occupies in the current viewport
    pub fn collision_shape(&self, viewport: &Viewport, config: &Config) -> CollisionShape {
        match self.kind {
            ObstacleKind::Bar => CollisionShape::Single(Aabb::from_corner_size(
                self.x,
                self.y - self.h / 2.0,
                self.w,
                self.h,
            )),
            ObstacleKind::Gate => CollisionShape::Pair(viewport.gate_rects(config, self.x, self.w)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionShape {
    Single(Aabb),
    Pair([Aabb; 2]),
}

impl CollisionShape {
    pub fn rects(&self) -> &[Aabb] {
        match self {
            CollisionShape::Single(rect) => std::slice::from_ref(rect),
            CollisionShape::Pair(rects) => rects,
        }
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.rects().iter().any(|rect| rect.intersects(other))
    }
}

/// Spawn order of an obstacle; also its horizontal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpawnSeq(pub u64);

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(x: f32, y: f32) -> Obstacle {
        Obstacle {
            kind: ObstacleKind::Bar,
            x,
            y,
            w: 22.0,
            h: 120.0,
            glow: Glow::Cyan,
            scored: false,
        }
    }

    #[test]
    fn test_mark_scored_only_once() {
        let mut ob = bar(0.0, 300.0);
        assert!(ob.mark_scored());
        assert!(!ob.mark_scored());
        assert!(ob.scored);
    }

    #[test]
    fn test_bar_shape_centered_on_slot() {
        let config = Config::new();
        let viewport = Viewport::new(800.0, 600.0);
        let shape = bar(100.0, 300.0).collision_shape(&viewport, &config);
        assert_eq!(shape.rects().len(), 1);
        let rect = shape.rects()[0];
        assert_eq!(rect.min.y, 240.0);
        assert_eq!(rect.max.y, 360.0);
        assert_eq!(rect.max.x, 122.0);
    }

    #[test]
    fn test_gate_shape_ignores_spawn_slot() {
        let config = Config::new();
        let viewport = Viewport::new(800.0, 600.0);
        let mut gate = bar(100.0, 150.0);
        gate.kind = ObstacleKind::Gate;
        let a = gate.collision_shape(&viewport, &config);
        gate.y = 450.0;
        let b = gate.collision_shape(&viewport, &config);
        assert_eq!(a, b);
        assert_eq!(a.rects().len(), 2);
    }

    #[test]
    fn test_palette_hex() {
        assert_eq!(Glow::PALETTE.len(), 5);
        assert_eq!(Glow::Violet.hex(), 0x7c5cff);
        assert_eq!(Glow::Amber.hex(), 0xffd24d);
    }
}
