use std::fmt;

/// A construction-time failure in one of the geometry generators.
///
/// The generators never degenerate silently: bad parameters are rejected
/// before any vertex is emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Cube extents must all be finite and positive.
    InvalidExtent { length: f32, width: f32, height: f32 },
    /// Sphere radius must be finite and positive.
    InvalidRadius(f32),
    /// UV sphere needs at least 2 latitude bands and 3 longitude bands.
    InvalidBands { latitude: u32, longitude: u32 },
    /// The requested tessellation does not fit in the u16 index space.
    IndexOverflow(usize),
    /// Icosphere subdivision beyond this level overflows the u16 index space.
    TooManySubdivisions(u32),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidExtent {
                length,
                width,
                height,
            } => write!(
                f,
                "cube extents must be finite and positive, got {}x{}x{}",
                length, width, height
            ),
            GeometryError::InvalidRadius(r) => {
                write!(f, "radius must be finite and positive, got {}", r)
            }
            GeometryError::InvalidBands {
                latitude,
                longitude,
            } => write!(
                f,
                "sphere needs >= 2 latitude and >= 3 longitude bands, got {}x{}",
                latitude, longitude
            ),
            GeometryError::IndexOverflow(n) => {
                write!(f, "mesh would have {} vertices, which exceeds the u16 index space", n)
            }
            GeometryError::TooManySubdivisions(n) => {
                write!(f, "icosphere subdivision level {} overflows the u16 index space", n)
            }
        }
    }
}

impl std::error::Error for GeometryError {}
