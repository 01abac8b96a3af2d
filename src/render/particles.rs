use super::helpers;
use crate::core::color::srgb_to_linear_rgb;
use crate::core::ParticleField;
use rand::Rng;
use wgpu::util::DeviceExt;

/// GPU copy of the particle field: static positions, colors re-uploaded per recolor.
pub(crate) struct ParticleResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    position_buffer: wgpu::Buffer,
    color_buffer: wgpu::Buffer,
    count: u32,
    uploaded_generation: u64,
}

pub(crate) fn create_particle_resources<R: Rng>(
    device: &wgpu::Device,
    globals_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    field: &ParticleField<R>,
) -> ParticleResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("particles_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::PARTICLES_WGSL.into()),
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("particles_pl"),
        bind_group_layouts: &[globals_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("particles_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_particle"),
            buffers: &[
                wgpu::VertexBufferLayout {
                    array_stride: 12,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x3],
                },
                wgpu::VertexBufferLayout {
                    array_stride: 12,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &wgpu::vertex_attr_array![1 => Float32x3],
                },
            ],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(helpers::depth_state(false)),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_particle"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let position_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("particle_positions"),
        contents: bytemuck::cast_slice(field.positions()),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let color_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("particle_colors"),
        contents: bytemuck::cast_slice(&linear_colors(field)),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    });

    ParticleResources {
        pipeline,
        position_buffer,
        color_buffer,
        count: field.len() as u32,
        uploaded_generation: field.color_generation(),
    }
}

// The surface format is sRGB, so authored colors are decoded before upload.
fn linear_colors<R: Rng>(field: &ParticleField<R>) -> Vec<[f32; 3]> {
    field.colors().iter().map(|c| srgb_to_linear_rgb(*c)).collect()
}

impl ParticleResources {
    /// Re-upload the whole color buffer when the field has been recolored.
    pub(crate) fn sync_colors<R: Rng>(&mut self, queue: &wgpu::Queue, field: &ParticleField<R>) {
        if field.color_generation() == self.uploaded_generation {
            return;
        }
        queue.write_buffer(&self.color_buffer, 0, bytemuck::cast_slice(&linear_colors(field)));
        self.uploaded_generation = field.color_generation();
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.position_buffer.slice(..));
        rpass.set_vertex_buffer(1, self.color_buffer.slice(..));
        rpass.draw(0..6, 0..self.count);
    }
}
