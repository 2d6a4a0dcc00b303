pub mod camera;
pub mod config;
pub mod error;
pub mod geometry;
pub mod object3d;

// Re-exports
pub use camera::Camera;
pub use config::{LightingConfig, SceneConfig, ShapeDesc};
pub use error::GeometryError;
pub use geometry::{Color, CubeColors, MeshData, Vertex, cube, icosphere, sphere};
pub use object3d::Object3D;

// Re-export glam types for consistent version usage
pub use glam;
