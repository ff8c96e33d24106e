/// Nested spinning-triangle demo, 2D and animation-frame driven
use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{WebGl2RenderingContext, WebGlUniformLocation};

use spin3d_core::planar::{spin_angle, spin_color, spin_transform, SPIN_SIZES, TRIANGLE_POSITIONS};
use spin3d_core::scene::CLEAR_COLOR;

use crate::context;
use crate::error::SetupError;

const VERTEX_SHADER: &str = include_str!("shaders/triangle.vert");
const FRAGMENT_SHADER: &str = include_str!("shaders/triangle.frag");

/// Four nested triangles spinning at size-proportional rates.
#[wasm_bindgen]
pub struct TriangleDemo {
    gl: WebGl2RenderingContext,
    matrix_location: WebGlUniformLocation,
    color_location: WebGlUniformLocation,
}

#[wasm_bindgen]
impl TriangleDemo {
    /// Builds the demo on the canvas with the given element id.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<TriangleDemo, JsValue> {
        let canvas = context::find_canvas(canvas_id)?;
        context::resize_to_display(&canvas);
        let gl = context::webgl2_context(&canvas)?;

        gl.viewport(0, 0, gl.drawing_buffer_width(), gl.drawing_buffer_height());
        let [r, g, b, a] = CLEAR_COLOR;
        gl.clear_color(r, g, b, a);
        gl.enable(WebGl2RenderingContext::CULL_FACE);

        let program = context::compile_program(&gl, VERTEX_SHADER, FRAGMENT_SHADER)?;
        gl.use_program(Some(&program));

        context::upload_attribute(&gl, &program, "a_position", &TRIANGLE_POSITIONS, 2)?;

        let matrix_location = context::uniform_location(&gl, &program, "u_matrix")?;
        let color_location = context::uniform_location(&gl, &program, "u_color")?;

        Ok(TriangleDemo {
            gl,
            matrix_location,
            color_location,
        })
    }

    /// Draws one frame at the given timestamp in milliseconds.
    pub fn render(&self, time_ms: f64) {
        draw_frame(&self.gl, &self.matrix_location, &self.color_location, time_ms);
    }

    /// Starts the self-rescheduling animation loop.
    ///
    /// The loop never stops on its own; it redraws until the page goes
    /// away.
    pub fn start(&self) -> Result<(), JsValue> {
        let window =
            web_sys::window().ok_or_else(|| SetupError::MissingElement("window".into()))?;

        let gl = self.gl.clone();
        let matrix_location = self.matrix_location.clone();
        let color_location = self.color_location.clone();

        // Keep the callback alive through the Rc cycle it captures.
        let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let scheduled = callback.clone();
        let inner_window = window.clone();

        *callback.borrow_mut() = Some(Closure::new(move |time_ms: f64| {
            draw_frame(&gl, &matrix_location, &color_location, time_ms);

            if let Some(next) = scheduled.borrow().as_ref() {
                if inner_window
                    .request_animation_frame(next.as_ref().unchecked_ref())
                    .is_err()
                {
                    web_sys::console::warn_1(&"failed to schedule next frame".into());
                }
            }
        }));

        if let Some(first) = callback.borrow().as_ref() {
            window
                .request_animation_frame(first.as_ref().unchecked_ref())
                .map_err(|_| {
                    SetupError::ResourceAcquisition("requestAnimationFrame unavailable".into())
                })?;
        }

        Ok(())
    }
}

fn draw_frame(
    gl: &WebGl2RenderingContext,
    matrix_location: &WebGlUniformLocation,
    color_location: &WebGlUniformLocation,
    time_ms: f64,
) {
    gl.clear(WebGl2RenderingContext::COLOR_BUFFER_BIT);

    let angle = spin_angle(time_ms);
    for size in SPIN_SIZES {
        let matrix = spin_transform(angle, size);
        gl.uniform_matrix3fv_with_f32_array(Some(matrix_location), false, matrix.as_slice());
        gl.uniform4fv_with_f32_array(Some(color_location), &spin_color(angle, size));
        gl.draw_arrays(WebGl2RenderingContext::TRIANGLES, 0, 3);
    }
}
