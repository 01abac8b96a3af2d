use super::helpers;
use crate::constants::{SPHERE_RINGS, SPHERE_SEGMENTS};
use crate::core::color::srgb_to_linear_rgb;
use crate::core::geometry::{uv_sphere, MeshVertex};
use crate::core::{Material, OrbitalScene};
use glam::Mat4;
use wgpu::util::DeviceExt;

// hub + four orbital nodes
const SPHERE_COUNT: usize = 5;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SphereInstance {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    material: [f32; 4],
}

impl SphereInstance {
    fn new(model: Mat4, m: &Material) -> Self {
        let c = srgb_to_linear_rgb(m.color);
        Self {
            model: model.to_cols_array_2d(),
            color: [c[0], c[1], c[2], 1.0],
            material: [m.metalness, m.roughness, m.emissive_intensity, 0.0],
        }
    }
}

pub(crate) struct SphereResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instance_buffer: wgpu::Buffer,
}

pub(crate) fn create_sphere_resources(
    device: &wgpu::Device,
    globals_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
) -> SphereResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("spheres_pl"),
        bind_group_layouts: &[globals_bgl],
        push_constant_ranges: &[],
    });

    const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
    const INSTANCE_ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4,
        6 => Float32x4, 7 => Float32x4
    ];

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("spheres_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_sphere"),
            buffers: &[
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<MeshVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &VERTEX_ATTRS,
                },
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<SphereInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &INSTANCE_ATTRS,
                },
            ],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        depth_stencil: Some(helpers::depth_state(true)),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_sphere"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let mesh = uv_sphere(SPHERE_RINGS, SPHERE_SEGMENTS);
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("sphere_vertices"),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("sphere_indices"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("sphere_instances"),
        size: (std::mem::size_of::<SphereInstance>() * SPHERE_COUNT) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    SphereResources {
        pipeline,
        vertex_buffer,
        index_buffer,
        index_count: mesh.indices.len() as u32,
        instance_buffer,
    }
}

impl SphereResources {
    pub(crate) fn write_instances(&self, queue: &wgpu::Queue, scene: &OrbitalScene) {
        let mut instances = [SphereInstance::new(scene.hub_model(), &scene.hub().material);
            SPHERE_COUNT];
        for (slot, n) in instances[1..].iter_mut().zip(scene.nodes()) {
            *slot = SphereInstance::new(scene.node_model(n.node.section), &n.material);
        }
        queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..self.index_count, 0, 0..SPHERE_COUNT as u32);
    }
}
