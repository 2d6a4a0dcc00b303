use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::{Color, CubeColors, MeshData, cube, icosphere, sphere};

/// Which procedural shape to generate, with its parameters.
///
/// Serializes as a tagged object, e.g.
/// `{"type": "icosphere", "radius": 0.75, "subdivisions": 3, "color": [...]}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeDesc {
    Cube {
        length: f32,
        width: f32,
        height: f32,
        color: Color,
        /// Overrides `color` with one color per face
        /// (front/back/top/bottom/right/left) when present.
        #[serde(default)]
        face_colors: Option<[Color; 6]>,
    },
    Sphere {
        radius: f32,
        latitude_bands: u32,
        longitude_bands: u32,
        color: Color,
    },
    Icosphere {
        radius: f32,
        subdivisions: u32,
        color: Color,
    },
}

impl ShapeDesc {
    /// Run the matching generator.
    pub fn build(&self) -> Result<MeshData, GeometryError> {
        match *self {
            ShapeDesc::Cube {
                length,
                width,
                height,
                color,
                face_colors,
            } => {
                let colors = match face_colors {
                    Some(faces) => CubeColors::PerFace(faces),
                    None => CubeColors::Uniform(color),
                };
                cube(length, width, height, colors)
            }
            ShapeDesc::Sphere {
                radius,
                latitude_bands,
                longitude_bands,
                color,
            } => sphere(radius, latitude_bands, longitude_bands, color),
            ShapeDesc::Icosphere {
                radius,
                subdivisions,
                color,
            } => icosphere(radius, subdivisions, color),
        }
    }
}

/// Directional light parameters fed to the fragment stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightingConfig {
    #[serde(default = "default_light_dir")]
    pub light_dir: [f32; 3],
    /// The two observed shader revisions used 0.2 and 1.0 here, so it is a
    /// parameter rather than a constant.
    #[serde(default = "default_ambient_strength")]
    pub ambient_strength: f32,
}

fn default_light_dir() -> [f32; 3] {
    [0.0, 1.0, 0.0]
}

fn default_ambient_strength() -> f32 {
    0.2
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            light_dir: default_light_dir(),
            ambient_strength: default_ambient_strength(),
        }
    }
}

/// Full scene description: the one object, its idle spin, the lighting and
/// the clear color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub shape: ShapeDesc,
    #[serde(default)]
    pub lighting: LightingConfig,
    /// Euler spin rate in radians per second, applied every frame.
    #[serde(default = "default_spin")]
    pub spin: [f32; 3],
    #[serde(default = "default_clear_color")]
    pub clear_color: [f32; 4],
}

fn default_spin() -> [f32; 3] {
    [0.5, 1.0, 0.0]
}

fn default_clear_color() -> [f32; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            shape: ShapeDesc::Icosphere {
                radius: 0.75,
                subdivisions: 3,
                color: [0.8, 0.3, 0.2, 1.0],
            },
            lighting: LightingConfig::default(),
            spin: default_spin(),
            clear_color: default_clear_color(),
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
