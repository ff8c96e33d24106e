/// Point-lit cube demo with world-space lighting
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext, WebGlUniformLocation};

use spin3d_core::scene::{
    CLEAR_COLOR, FRUSTUM_DEPTH, LIGHT_WORLD_POSITION, LIT_BASE_COLOR, LIT_SCENE,
};
use spin3d_core::{transform_set, Frustum, LightingMode, Mesh, SceneState};

use crate::context;

const VERTEX_SHADER: &str = include_str!("shaders/point_light.vert");
const FRAGMENT_SHADER: &str = include_str!("shaders/point_light.frag");

/// A cube lit by a positional light, redrawn on pointer drags and
/// shininess-slider input.
///
/// Lighting runs in world space against `u_lightWorldPosition`, so the
/// normal matrix bound to `u_worldInverseTranspose` comes from the
/// object-to-world matrix only, never the projected one.
#[wasm_bindgen]
pub struct PointLightDemo {
    canvas: HtmlCanvasElement,
    gl: WebGl2RenderingContext,
    world_view_projection_location: WebGlUniformLocation,
    world_inverse_transpose_location: WebGlUniformLocation,
    world_location: WebGlUniformLocation,
    shininess_location: WebGlUniformLocation,
    vertex_count: i32,
    state: SceneState,
}

#[wasm_bindgen]
impl PointLightDemo {
    /// Builds the demo on the canvas with the given element id and draws
    /// the initial frame.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<PointLightDemo, JsValue> {
        let canvas = context::find_canvas(canvas_id)?;
        context::resize_to_display(&canvas);
        let gl = context::webgl2_context(&canvas)?;

        gl.viewport(0, 0, gl.drawing_buffer_width(), gl.drawing_buffer_height());
        let [r, g, b, a] = CLEAR_COLOR;
        gl.clear_color(r, g, b, a);
        gl.enable(WebGl2RenderingContext::CULL_FACE);
        gl.enable(WebGl2RenderingContext::DEPTH_TEST);

        let program = context::compile_program(&gl, VERTEX_SHADER, FRAGMENT_SHADER)?;
        gl.use_program(Some(&program));

        let mesh = Mesh::unit_cube();
        context::upload_attribute(&gl, &program, "a_position", &mesh.positions(), 3)?;
        context::upload_attribute(&gl, &program, "a_normal", &mesh.normals(), 3)?;

        let world_view_projection_location =
            context::uniform_location(&gl, &program, "u_worldViewProjection")?;
        let world_inverse_transpose_location =
            context::uniform_location(&gl, &program, "u_worldInverseTranspose")?;
        let world_location = context::uniform_location(&gl, &program, "u_world")?;
        let shininess_location = context::uniform_location(&gl, &program, "u_shininess")?;

        // The light and base color never change; set them once.
        let light_location = context::uniform_location(&gl, &program, "u_lightWorldPosition")?;
        gl.uniform3fv_with_f32_array(Some(&light_location), &LIGHT_WORLD_POSITION);
        let color_location = context::uniform_location(&gl, &program, "u_color")?;
        gl.uniform4fv_with_f32_array(Some(&color_location), &LIT_BASE_COLOR);

        let demo = PointLightDemo {
            canvas,
            gl,
            world_view_projection_location,
            world_inverse_transpose_location,
            world_location,
            shininess_location,
            vertex_count: mesh.vertex_count() as i32,
            state: SceneState::new(),
        };
        demo.render();
        Ok(demo)
    }

    /// Pointer drag handler. Coordinates are client pixels; events with
    /// no button held are ignored.
    pub fn pointer_moved(&mut self, client_x: f32, client_y: f32, buttons: u16) {
        if buttons == 0 {
            return;
        }
        let nx = client_x / self.canvas.client_width().max(1) as f32;
        let ny = client_y / self.canvas.client_height().max(1) as f32;
        self.state.pointer_moved(nx, ny);
        self.render();
    }

    /// Shininess-slider handler.
    pub fn set_shininess(&mut self, value: f32) {
        self.state.set_shininess(value);
        self.render();
    }
}

impl PointLightDemo {
    fn render(&self) {
        let gl = &self.gl;
        gl.clear(WebGl2RenderingContext::COLOR_BUFFER_BIT | WebGl2RenderingContext::DEPTH_BUFFER_BIT);

        let frustum = Frustum::from_viewport(
            gl.drawing_buffer_width() as u32,
            gl.drawing_buffer_height() as u32,
            FRUSTUM_DEPTH,
        );
        let view_projection = frustum.matrix();

        gl.uniform1f(Some(&self.shininess_location), self.state.shininess);

        for placement in &LIT_SCENE {
            let pose = placement.pose(&self.state);
            match transform_set(&view_projection, &pose, LightingMode::PointLight) {
                Some(transforms) => {
                    gl.uniform_matrix4fv_with_f32_array(
                        Some(&self.world_view_projection_location),
                        false,
                        transforms.object_to_clip.as_slice(),
                    );
                    gl.uniform_matrix4fv_with_f32_array(
                        Some(&self.world_inverse_transpose_location),
                        false,
                        transforms.normal_matrix.as_slice(),
                    );
                    gl.uniform_matrix4fv_with_f32_array(
                        Some(&self.world_location),
                        false,
                        transforms.object_to_world.as_slice(),
                    );
                    gl.draw_arrays(WebGl2RenderingContext::TRIANGLES, 0, self.vertex_count);
                }
                None => {
                    web_sys::console::warn_1(&"singular transform, skipping draw".into());
                }
            }
        }
    }
}
