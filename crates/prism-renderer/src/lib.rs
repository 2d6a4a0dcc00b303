pub mod uniform;
pub mod vertex;

pub use uniform::FrameUniform;
pub use vertex::{GpuMesh, vertex_layout};

// Re-export glam types for consistent version usage
pub use glam;
