use crate::constants::LIGHT_DIR;
use crate::core::color::srgb_to_linear_rgb;
use crate::core::constants::PARTICLE_SIZE;
use crate::core::{Camera, OrbitalScene, ParticleField};
use rand::Rng;
use web_sys as web;

mod helpers;
mod particles;
mod spheres;

use particles::{create_particle_resources, ParticleResources};
use spheres::{create_sphere_resources, SphereResources};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    particle_model: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    light_dir: [f32; 4],
    params: [f32; 4],
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    view_format: wgpu::TextureFormat,

    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    spheres: SphereResources,
    particles: ParticleResources,
    depth_view: wgpu::TextureView,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new<R: Rng>(
        canvas: &'a web::HtmlCanvasElement,
        field: &ParticleField<R>,
        background: [f32; 3],
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Browsers usually expose only non-sRGB canvas formats; render through an
        // sRGB view so linear shader output is encoded the same way everywhere.
        let view_format = format.add_srgb_suffix();
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: if view_format == format {
                vec![]
            } else {
                vec![view_format]
            },
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let globals_bgl = helpers::create_globals_layout(&device);
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let spheres = create_sphere_resources(&device, &globals_bgl, view_format);
        let particles = create_particle_resources(&device, &globals_bgl, view_format, field);
        let depth_view = helpers::create_depth_texture(&device, width, height);

        let mut gpu = Self {
            surface,
            device,
            queue,
            config,
            view_format,
            globals_buffer,
            globals_bind_group,
            spheres,
            particles,
            depth_view,
            width,
            height,
            clear_color: wgpu::Color::BLACK,
        };
        gpu.set_background(background);
        Ok(gpu)
    }

    /// Direct assignment; the next frame clears to this color.
    ///
    /// `rgb` is sRGB, matching the page background, and is decoded for the sRGB surface.
    pub fn set_background(&mut self, rgb: [f32; 3]) {
        let rgb = srgb_to_linear_rgb(rgb);
        self.clear_color = wgpu::Color {
            r: rgb[0] as f64,
            g: rgb[1] as f64,
            b: rgb[2] as f64,
            a: 1.0,
        };
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Reconfigure the surface and depth target at the current size (resize, lost surface).
    pub fn reconfigure(&mut self) {
        self.config.width = self.width.max(1);
        self.config.height = self.height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.depth_view = helpers::create_depth_texture(&self.device, self.width, self.height);
    }

    pub fn render<R: Rng>(
        &mut self,
        camera: &Camera,
        scene: &OrbitalScene,
        field: &ParticleField<R>,
    ) -> Result<(), wgpu::SurfaceError> {
        let globals = Globals {
            view: camera.view_matrix().to_cols_array_2d(),
            proj: camera.projection_matrix().to_cols_array_2d(),
            particle_model: field.model_matrix().to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            light_dir: [LIGHT_DIR[0], LIGHT_DIR[1], LIGHT_DIR[2], 0.0],
            params: [PARTICLE_SIZE, 0.0, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
        self.spheres.write_instances(&self.queue, scene);
        self.particles.sync_colors(&self.queue, field);

        let frame = self.surface.get_current_texture()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            // Opaque spheres first; particles blend over them without writing depth.
            self.spheres.draw(&mut rpass);
            self.particles.draw(&mut rpass);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
