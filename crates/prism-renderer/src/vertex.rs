use wgpu::util::DeviceExt;
use wgpu::{BufferAddress, VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use prism_core::MeshData;

/// 頂点属性（position / color / normal）
const ATTRIBUTES: [VertexAttribute; 3] = [
    // position
    VertexAttribute {
        offset: 0,
        shader_location: 0,
        format: VertexFormat::Float32x3,
    },
    // color (rgba)
    VertexAttribute {
        offset: std::mem::size_of::<[f32; 3]>() as BufferAddress,
        shader_location: 1,
        format: VertexFormat::Float32x4,
    },
    // normal
    VertexAttribute {
        offset: std::mem::size_of::<[f32; 7]>() as BufferAddress,
        shader_location: 2,
        format: VertexFormat::Float32x3,
    },
];

/// `prism_core::Vertex` の頂点バッファレイアウトを取得
pub fn vertex_layout() -> VertexBufferLayout<'static> {
    VertexBufferLayout {
        array_stride: std::mem::size_of::<prism_core::Vertex>() as BufferAddress,
        step_mode: VertexStepMode::Vertex,
        attributes: &ATTRIBUTES,
    }
}

/// GPUにアップロード済みのメッシュ
/// 頂点バッファ、インデックスバッファ（u16）を保持
#[derive(Debug)]
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl GpuMesh {
    /// メッシュデータをGPUバッファへアップロード
    pub fn upload(device: &wgpu::Device, mesh: &MeshData) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Vertex Buffer"),
            contents: bytemuck::cast_slice(mesh.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Index Buffer"),
            contents: bytemuck::cast_slice(mesh.indices()),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count() as u32,
        }
    }
}
