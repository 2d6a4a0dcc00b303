use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use prism_core::LightingConfig;

/// フレームごとのGPU Uniform
/// 合成行列（projection * view * model）とライトパラメータを列優先形式で格納
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct FrameUniform {
    pub matrix: [[f32; 4]; 4],
    pub light_dir: [f32; 3],
    pub ambient_strength: f32,
}

impl FrameUniform {
    /// 合成行列とライト設定からUniformを作成
    pub fn new(matrix: Mat4, lighting: &LightingConfig) -> Self {
        Self {
            matrix: matrix.to_cols_array_2d(),
            light_dir: lighting.light_dir,
            ambient_strength: lighting.ambient_strength,
        }
    }
}

impl Default for FrameUniform {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, &LightingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size() {
        // mat4 (64) + vec3 (12) + f32 (4) = 80 bytes, 16-byte aligned
        assert_eq!(std::mem::size_of::<FrameUniform>(), 80);
    }

    #[test]
    fn test_default_lighting() {
        let uniform = FrameUniform::default();
        assert_eq!(uniform.light_dir, [0.0, 1.0, 0.0]);
        assert_eq!(uniform.ambient_strength, 0.2);
    }

    #[test]
    fn test_matrix_is_column_major() {
        let m = Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
        let uniform = FrameUniform::new(m, &LightingConfig::default());
        // translation lives in the last column
        assert_eq!(uniform.matrix[3][0], 1.0);
        assert_eq!(uniform.matrix[3][1], 2.0);
        assert_eq!(uniform.matrix[3][2], 3.0);
    }
}
