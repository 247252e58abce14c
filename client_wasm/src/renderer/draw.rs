use super::instances::instances_from_scene;
use super::resources::ensure_instance_capacity;
use super::Renderer;
use game_core::Scene;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, scene: &Scene) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Skip this frame; the next one draws into the fresh surface
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let instance_count = update_buffers(renderer, scene);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_instances(renderer, &mut pass, instance_count);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &mut Renderer, scene: &Scene) -> u32 {
    let instances = instances_from_scene(scene);
    ensure_instance_capacity(&renderer.device, &mut renderer.buffers, instances.len());
    if !instances.is_empty() {
        renderer.queue.write_buffer(
            &renderer.buffers.instances,
            0,
            bytemuck::cast_slice(&instances),
        );
    }
    instances.len() as u32
}

fn draw_instances<'a>(renderer: &'a Renderer, pass: &mut RenderPass<'a>, count: u32) {
    if count == 0 {
        return;
    }
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(0, renderer.quad.vertex_buffer.slice(..));
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));
    pass.set_index_buffer(renderer.quad.index_buffer.slice(..), IndexFormat::Uint16);
    pass.draw_indexed(0..renderer.quad.index_count, 0, 0..count);
}
