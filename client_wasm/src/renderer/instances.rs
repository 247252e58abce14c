use game_core::{Primitive, Rgba, Scene};

pub const SHAPE_GRADIENT: f32 = 0.0;
pub const SHAPE_RECT: f32 = 1.0;
pub const SHAPE_DISC: f32 = 2.0;

/// Halo strength at the center of a glow (0x66 / 0xff)
pub const HALO_ALPHA: f32 = 0.4;
/// Rect halos spill this far past each edge
pub const RECT_HALO_PAD: f32 = 24.0;
/// Disc halo fades out at this multiple of the radius
pub const DISC_HALO_FADE: f32 = 2.2;
/// Disc halo quad extends to this multiple of the radius
pub const DISC_HALO_EXTENT: f32 = 2.4;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub bounds: [f32; 4],  // quad x, y, w, h in CSS px, halo included
    pub shape: [f32; 4],   // center x, center y, half w, half h
    pub color: [f32; 4],   // linear rgba; gradient top
    pub color_b: [f32; 4], // gradient bottom
    pub params: [f32; 4],  // kind, corner radius, halo radius, unused
}

pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn linear_rgba(color: Rgba) -> [f32; 4] {
    [
        srgb_to_linear(color[0]),
        srgb_to_linear(color[1]),
        srgb_to_linear(color[2]),
        color[3],
    ]
}

/// One instance per primitive, in paint order
pub fn instances_from_scene(scene: &Scene) -> Vec<InstanceData> {
    scene.primitives.iter().map(instance_for).collect()
}

fn instance_for(primitive: &Primitive) -> InstanceData {
    match *primitive {
        Primitive::Gradient { rect, top, bottom } => {
            let size = rect.size();
            let center = rect.center();
            InstanceData {
                bounds: [rect.min.x, rect.min.y, size.x, size.y],
                shape: [center.x, center.y, size.x * 0.5, size.y * 0.5],
                color: linear_rgba(top),
                color_b: linear_rgba(bottom),
                params: [SHAPE_GRADIENT, 0.0, 0.0, 0.0],
            }
        }
        Primitive::GlowRect {
            rect,
            color,
            corner_radius,
        } => {
            let size = rect.size();
            let center = rect.center();
            let radius = corner_radius.min(size.x * 0.5).min(size.y * 0.5).max(0.0);
            let color = linear_rgba(color);
            InstanceData {
                bounds: [
                    rect.min.x - RECT_HALO_PAD,
                    rect.min.y - RECT_HALO_PAD,
                    size.x + RECT_HALO_PAD * 2.0,
                    size.y + RECT_HALO_PAD * 2.0,
                ],
                shape: [center.x, center.y, size.x * 0.5, size.y * 0.5],
                color,
                color_b: color,
                params: [SHAPE_RECT, radius, size.x.max(size.y), 0.0],
            }
        }
        Primitive::GlowDisc {
            center,
            radius,
            color,
        } => {
            let extent = radius * DISC_HALO_EXTENT;
            let color = linear_rgba(color);
            InstanceData {
                bounds: [center.x - extent, center.y - extent, extent * 2.0, extent * 2.0],
                shape: [center.x, center.y, radius, radius],
                color,
                color_b: color,
                params: [SHAPE_DISC, 0.0, radius * DISC_HALO_FADE, 0.0],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{rgb, Aabb, Viewport};
    use glam::Vec2;

    fn scene(primitives: Vec<Primitive>) -> Scene {
        Scene {
            viewport: Viewport::new(800.0, 600.0),
            primitives,
        }
    }

    #[test]
    fn test_srgb_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!(srgb_to_linear(0.5) < 0.5);
    }

    #[test]
    fn test_rect_padded_for_halo_and_radius_clamped() {
        let instances = instances_from_scene(&scene(vec![Primitive::GlowRect {
            rect: Aabb::from_corner_size(100.0, 50.0, 10.0, 120.0),
            color: rgb(0x63faff),
            corner_radius: 8.0,
        }]));
        let inst = instances[0];
        assert_eq!(inst.bounds, [76.0, 26.0, 58.0, 168.0]);
        assert_eq!(inst.shape, [105.0, 110.0, 5.0, 60.0]);
        assert_eq!(inst.params[0], SHAPE_RECT);
        assert_eq!(inst.params[1], 5.0, "Radius never exceeds half the short side");
        assert_eq!(inst.params[2], 120.0);
    }

    #[test]
    fn test_disc_bounds_cover_halo() {
        let instances = instances_from_scene(&scene(vec![Primitive::GlowDisc {
            center: Vec2::new(300.0, 200.0),
            radius: 10.0,
            color: rgb(0x7c5cff),
        }]));
        let inst = instances[0];
        assert_eq!(inst.params[0], SHAPE_DISC);
        assert!((inst.bounds[2] - 48.0).abs() < 1e-4);
        assert!((inst.bounds[0] - 276.0).abs() < 1e-4);
        assert!(inst.params[2] < inst.bounds[2] * 0.5);
    }

    #[test]
    fn test_paint_order_preserved() {
        let gradient = Primitive::Gradient {
            rect: Aabb::from_corner_size(0.0, 0.0, 800.0, 600.0),
            top: rgb(0x060616),
            bottom: rgb(0x03030a),
        };
        let disc = Primitive::GlowDisc {
            center: Vec2::new(1.0, 1.0),
            radius: 16.0,
            color: rgb(0x7c5cff),
        };
        let instances = instances_from_scene(&scene(vec![gradient, disc]));
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].params[0], SHAPE_GRADIENT);
        assert_eq!(instances[0].bounds, [0.0, 0.0, 800.0, 600.0]);
        assert_eq!(instances[1].params[0], SHAPE_DISC);
    }

    #[test]
    fn test_empty_scene_has_no_instances() {
        assert!(instances_from_scene(&scene(Vec::new())).is_empty());
    }
}
