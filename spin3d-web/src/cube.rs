/// Two-cube demo with clip-space directional shading
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext, WebGlUniformLocation};

use spin3d_core::scene::{CLEAR_COLOR, CUBE_SCENE, FRUSTUM_DEPTH};
use spin3d_core::{transform_set, Frustum, LightingMode, Mesh, SceneState};

use crate::context;

const VERTEX_SHADER: &str = include_str!("shaders/cube.vert");
const FRAGMENT_SHADER: &str = include_str!("shaders/cube.frag");

/// A rotating pair of cubes, redrawn on every pointer drag.
///
/// Shading is directional and happens in clip space, so the normal
/// matrix bound to `u_inverse` is the inverse-transpose of the full
/// object-to-clip matrix.
#[wasm_bindgen]
pub struct CubeDemo {
    canvas: HtmlCanvasElement,
    gl: WebGl2RenderingContext,
    matrix_location: WebGlUniformLocation,
    inverse_location: WebGlUniformLocation,
    vertex_count: i32,
    state: SceneState,
}

#[wasm_bindgen]
impl CubeDemo {
    /// Builds the demo on the canvas with the given element id and draws
    /// the initial frame.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<CubeDemo, JsValue> {
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

        let matrix_location = context::uniform_location(&gl, &program, "u_matrix")?;
        let inverse_location = context::uniform_location(&gl, &program, "u_inverse")?;

        let demo = CubeDemo {
            canvas,
            gl,
            matrix_location,
            inverse_location,
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
}

impl CubeDemo {
    fn render(&self) {
        let gl = &self.gl;
        gl.clear(WebGl2RenderingContext::COLOR_BUFFER_BIT | WebGl2RenderingContext::DEPTH_BUFFER_BIT);

        let frustum = Frustum::from_viewport(
            gl.drawing_buffer_width() as u32,
            gl.drawing_buffer_height() as u32,
            FRUSTUM_DEPTH,
        );
        let view_projection = frustum.matrix();

        for placement in &CUBE_SCENE {
            let pose = placement.pose(&self.state);
            match transform_set(&view_projection, &pose, LightingMode::Directional) {
                Some(transforms) => {
                    gl.uniform_matrix4fv_with_f32_array(
                        Some(&self.matrix_location),
                        false,
                        transforms.object_to_clip.as_slice(),
                    );
                    gl.uniform_matrix4fv_with_f32_array(
                        Some(&self.inverse_location),
                        false,
                        transforms.normal_matrix.as_slice(),
                    );
                    // TODO: index the cube with drawElements so shared
                    // vertices upload once
                    gl.draw_arrays(WebGl2RenderingContext::TRIANGLES, 0, self.vertex_count);
                }
                None => {
                    web_sys::console::warn_1(&"singular transform, skipping draw".into());
                }
            }
        }
    }
}
