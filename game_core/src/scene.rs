//! Frame description for renderers.
//!
//! Building a scene only reads the session; the renderer turns the
//! primitives into draw calls.

use glam::Vec2;

use crate::{Aabb, Session, Viewport};

pub const BACKDROP_TOP: u32 = 0x060616;
pub const BACKDROP_BOTTOM: u32 = 0x03030a;
pub const PLAYER_COLOR: u32 = 0x7c5cff;
pub const CORNER_RADIUS: f32 = 8.0;

/// sRGB color with straight alpha, components in 0..=1
pub type Rgba = [f32; 4];

pub fn rgb(hex: u32) -> Rgba {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        1.0,
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Vertical linear gradient filling `rect`
    Gradient { rect: Aabb, top: Rgba, bottom: Rgba },
    /// Rounded rectangle with a soft halo
    GlowRect { rect: Aabb, color: Rgba, corner_radius: f32 },
    /// Filled disc with a soft halo
    GlowDisc { center: Vec2, radius: f32, color: Rgba },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub viewport: Viewport,
    pub primitives: Vec<Primitive>,
}

/// Paint order: backdrop, obstacles in spawn order, then the player node.
/// The player is only drawn while a run is active.
pub fn build_scene(session: &Session) -> Scene {
    let viewport = session.viewport;
    let config = &session.config;
    let mut primitives = vec![Primitive::Gradient {
        rect: Aabb::from_corner_size(0.0, 0.0, viewport.width, viewport.height),
        top: rgb(BACKDROP_TOP),
        bottom: rgb(BACKDROP_BOTTOM),
    }];

    if !session.is_active() {
        return Scene {
            viewport,
            primitives,
        };
    }

    for obstacle in session.obstacles() {
        let color = rgb(obstacle.glow.hex());
        let shape = obstacle.collision_shape(&viewport, config);
        for rect in shape.rects() {
            let size = rect.size();
            if size.x <= 0.0 || size.y <= 0.0 {
                continue;
            }
            primitives.push(Primitive::GlowRect {
                rect: *rect,
                color,
                corner_radius: CORNER_RADIUS,
            });
        }
    }

    let player = session.player();
    primitives.push(Primitive::GlowDisc {
        center: Vec2::new(viewport.player_x(config), player.y),
        radius: config.player_radius,
        color: rgb(PLAYER_COLOR),
    });

    Scene {
        viewport,
        primitives,
    }
}
