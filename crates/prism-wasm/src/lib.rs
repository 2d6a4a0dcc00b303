// crates/prism-wasm/src/lib.rs

mod renderer;
mod shaders;
mod utils;

use std::f32::consts::FRAC_PI_4;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use glam::Vec3;
use prism_core::{Camera, LightingConfig, Object3D, SceneConfig, ShapeDesc};
use prism_renderer::FrameUniform;

use crate::renderer::Renderer;
use crate::utils::console_log;

// パニック時のスタックトレース表示
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 10.0;

/// Engine構造体
/// Camera、Object3D、Rendererを統合し、JSから操作可能なAPIを提供
///
/// すべての呼び出しは同一スレッド上で実行される。入力系メソッドは
/// フレーム間に呼ばれ、次の `tick` で1回だけ積分される。
#[wasm_bindgen]
pub struct Engine {
    renderer: Renderer,
    camera: Camera,
    object: Object3D,
    lighting: LightingConfig,
    spin: Vec3,
}

impl Engine {
    async fn with_config(canvas: HtmlCanvasElement, config: SceneConfig) -> Result<Engine, JsValue> {
        console_log!("Creating Engine...");

        let mesh = config
            .shape
            .build()
            .map_err(|e| JsValue::from_str(&format!("Failed to build geometry: {}", e)))?;
        console_log!(
            "Geometry: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        let renderer = Renderer::create(canvas, &mesh, config.clear_color).await?;
        let aspect = renderer.width() as f32 / renderer.height() as f32;
        let camera = Camera::new(FRAC_PI_4, aspect, CAMERA_NEAR, CAMERA_FAR);
        let object = Object3D::new(mesh);

        console_log!("Engine created successfully");
        Ok(Self {
            renderer,
            camera,
            object,
            lighting: config.lighting,
            spin: Vec3::from(config.spin),
        })
    }
}

#[wasm_bindgen]
impl Engine {
    /// デフォルトシーン（icosphere）で新しいEngineを作成（非同期）
    pub async fn create(canvas: HtmlCanvasElement) -> Result<Engine, JsValue> {
        Engine::with_config(canvas, SceneConfig::default()).await
    }

    /// JSオブジェクトのシーン設定からEngineを作成（非同期）
    pub async fn create_with_config(
        canvas: HtmlCanvasElement,
        config: JsValue,
    ) -> Result<Engine, JsValue> {
        let config: SceneConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid scene config: {}", e)))?;
        Engine::with_config(canvas, config).await
    }

    /// フレーム更新：オブジェクト回転 + カメラ積分 + 描画
    /// 描画失敗はログに残してフレームをスキップ（起動後は落とさない）
    pub fn tick(&mut self, delta_time: f32) {
        let spin = self.spin * delta_time;
        self.object.rotate(spin.x, spin.y, spin.z);

        self.camera.update(delta_time);
        self.camera.set_model_matrix(self.object.model_matrix());

        let uniform = FrameUniform::new(self.camera.final_matrix(), &self.lighting);
        if let Err(e) = self.renderer.render(&uniform) {
            console_log!("Frame skipped: {:?}", e);
        }
    }

    /// 前進の移動インパルスを追加（キー入力用、次のtickで積分）
    pub fn move_forward(&mut self, distance: f32) {
        self.camera.move_forward(distance);
    }

    pub fn move_backward(&mut self, distance: f32) {
        self.camera.move_backward(distance);
    }

    pub fn move_left(&mut self, distance: f32) {
        self.camera.move_left(distance);
    }

    pub fn move_right(&mut self, distance: f32) {
        self.camera.move_right(distance);
    }

    /// 視線のオービット回転（ポインタ移動量、ピクセル単位）
    pub fn rotate_camera(&mut self, dx: f32, dy: f32) {
        self.camera.rotate(dx, dy);
    }

    /// Canvasリサイズ：Surfaceとカメラのアスペクト比を更新
    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
        if height > 0 {
            self.camera.set_aspect(width as f32 / height as f32);
        }
    }

    /// 描画する形状をJSON記述から差し替え
    pub fn set_shape(&mut self, json: &str) -> Result<(), JsValue> {
        let desc: ShapeDesc = serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("Invalid shape description: {}", e)))?;
        let mesh = desc
            .build()
            .map_err(|e| JsValue::from_str(&format!("Failed to build geometry: {}", e)))?;

        self.renderer.set_mesh(&mesh);
        self.object.set_mesh(mesh);
        Ok(())
    }

    /// 環境光の強さを設定（0.0〜1.0程度）
    pub fn set_ambient_strength(&mut self, strength: f32) {
        self.lighting.ambient_strength = strength;
    }

    /// ライト方向を設定
    pub fn set_light_dir(&mut self, x: f32, y: f32, z: f32) {
        self.lighting.light_dir = [x, y, z];
    }

    /// オブジェクトの自動回転速度を設定（rad/s）
    pub fn set_spin(&mut self, x: f32, y: f32, z: f32) {
        self.spin = Vec3::new(x, y, z);
    }

    /// カメラ位置を取得（x, y, zの配列）
    pub fn camera_position(&self) -> Vec<f32> {
        let p = self.camera.position();
        vec![p.x, p.y, p.z]
    }

    /// 幅取得
    pub fn width(&self) -> u32 {
        self.renderer.width()
    }

    /// 高さ取得
    pub fn height(&self) -> u32 {
        self.renderer.height()
    }
}
