pub mod instances;

#[cfg(target_arch = "wasm32")]
pub mod draw;
#[cfg(target_arch = "wasm32")]
pub mod init;
#[cfg(target_arch = "wasm32")]
pub mod pipeline;
#[cfg(target_arch = "wasm32")]
pub mod resources;
#[cfg(target_arch = "wasm32")]
pub mod shaders;

#[cfg(target_arch = "wasm32")]
pub use gpu::Renderer;

#[cfg(target_arch = "wasm32")]
mod gpu {
    use super::{draw, init, pipeline, resources};
    use crate::camera::Camera;
    use crate::canvas::CanvasSize;
    use crate::mesh::{create_quad, Mesh};
    use game_core::Scene;
    use resources::GameBuffers;
    use wgpu::*;

    pub struct Renderer {
        pub device: Device,
        pub queue: Queue,
        pub surface: Surface<'static>,
        pub surface_config: SurfaceConfiguration,
        pub size: (u32, u32),
        pub camera: Camera,

        pub main_pipeline: RenderPipeline,
        pub camera_bind_group: BindGroup,

        pub buffers: GameBuffers,
        pub quad: Mesh,
    }

    impl Renderer {
        /// `canvas` must already be sized to `canvas_size`
        pub async fn new(
            canvas: web_sys::HtmlCanvasElement,
            canvas_size: CanvasSize,
        ) -> Result<Self, String> {
            let ctx = init::init_wgpu(canvas).await?;
            let camera = Camera::pixels(canvas_size.css_width as f32, canvas_size.css_height as f32);

            let buffers = resources::create_buffers(&ctx.device, &camera);
            let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);

            let (vertices, indices) = create_quad();
            let quad = Mesh::new(&ctx.device, &ctx.queue, &vertices, &indices);

            let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
                label: Some("Camera Bind Group"),
                layout: &pipes.camera_layout,
                entries: &[BindGroupEntry {
                    binding: 0,
                    resource: buffers.camera.as_entire_binding(),
                }],
            });

            Ok(Self {
                device: ctx.device,
                queue: ctx.queue,
                surface: ctx.surface,
                surface_config: ctx.config,
                size: ctx.size,
                camera,
                main_pipeline: pipes.main_pipeline,
                camera_bind_group,
                buffers,
                quad,
            })
        }

        /// Resize the rendering surface
        pub fn resize(&mut self, canvas_size: CanvasSize) {
            if canvas_size.is_empty() {
                return;
            }
            self.size = (canvas_size.backing_width, canvas_size.backing_height);
            self.surface_config.width = canvas_size.backing_width;
            self.surface_config.height = canvas_size.backing_height;
            self.surface.configure(&self.device, &self.surface_config);

            self.camera = Camera::pixels(canvas_size.css_width as f32, canvas_size.css_height as f32);
            resources::write_camera(&self.queue, &self.buffers, &self.camera);
        }

        pub fn draw(&mut self, scene: &Scene) -> Result<(), String> {
            draw::draw_frame(self, scene)
        }
    }
}
