//! シェーダーモジュール
//!
//! WGSLシェーダーを外部ファイルから読み込む

/// メインシェーダー（単一オブジェクトのLambertシェーディング）
pub const MAIN_SHADER: &str = include_str!("main.wgsl");
