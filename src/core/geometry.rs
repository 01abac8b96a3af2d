use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

pub struct SphereMesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u16>,
}

/// Unit UV sphere with `rings` latitude bands and `segments` longitude slices.
///
/// Seam and pole vertices are duplicated so every ring has `segments + 1` vertices.
pub fn uv_sphere(rings: u16, segments: u16) -> SphereMesh {
    let rings = rings.max(2);
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((rings as usize + 1) * (segments as usize + 1));
    for r in 0..=rings {
        let phi = PI * r as f32 / rings as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for s in 0..=segments {
            let theta = TAU * s as f32 / segments as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let n = [sin_phi * cos_theta, cos_phi, sin_phi * sin_theta];
            vertices.push(MeshVertex {
                position: n,
                normal: n,
            });
        }
    }

    let stride = segments + 1;
    let mut indices = Vec::with_capacity(rings as usize * segments as usize * 6);
    for r in 0..rings {
        for s in 0..segments {
            let a = r * stride + s;
            let b = a + stride;
            // counter-clockwise seen from outside
            indices.extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
        }
    }
    SphereMesh { vertices, indices }
}
