/// Canvas, context, shader, and buffer plumbing shared by the demos
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation,
};

use crate::error::SetupError;

/// Finds the canvas with the given element id.
pub fn find_canvas(canvas_id: &str) -> Result<HtmlCanvasElement, SetupError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| SetupError::MissingElement("document".into()))?;

    document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| SetupError::MissingElement(format!("canvas #{canvas_id}")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SetupError::MissingElement(format!("#{canvas_id} is not a canvas")))
}

/// Resizes the drawing buffer to the canvas' CSS display size. Returns
/// true when the size changed.
pub fn resize_to_display(canvas: &HtmlCanvasElement) -> bool {
    let width = canvas.client_width().max(0) as u32;
    let height = canvas.client_height().max(0) as u32;

    if canvas.width() != width || canvas.height() != height {
        canvas.set_width(width);
        canvas.set_height(height);
        return true;
    }

    false
}

/// Opens a WebGL2 context on the canvas.
pub fn webgl2_context(canvas: &HtmlCanvasElement) -> Result<WebGl2RenderingContext, SetupError> {
    let context = canvas
        .get_context("webgl2")
        .map_err(|_| SetupError::ResourceAcquisition("webgl2 context request failed".into()))?
        .ok_or_else(|| SetupError::ResourceAcquisition("webgl2 context unavailable".into()))?
        .dyn_into::<WebGl2RenderingContext>()
        .map_err(|_| {
            SetupError::ResourceAcquisition("webgl2 context has unexpected type".into())
        })?;

    web_sys::console::log_1(&"WebGL 2 Rendering Context".into());
    Ok(context)
}

/// Compiles and links a vertex/fragment shader pair.
pub fn compile_program(
    gl: &WebGl2RenderingContext,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<WebGlProgram, SetupError> {
    let vertex = compile_shader(gl, WebGl2RenderingContext::VERTEX_SHADER, vertex_source)?;
    let fragment = compile_shader(gl, WebGl2RenderingContext::FRAGMENT_SHADER, fragment_source)?;

    let program = gl
        .create_program()
        .ok_or_else(|| SetupError::ResourceAcquisition("failed to create program".into()))?;

    gl.attach_shader(&program, &vertex);
    gl.attach_shader(&program, &fragment);
    gl.link_program(&program);
    gl.detach_shader(&program, &vertex);
    gl.detach_shader(&program, &fragment);
    gl.delete_shader(Some(&vertex));
    gl.delete_shader(Some(&fragment));

    let linked = gl
        .get_program_parameter(&program, WebGl2RenderingContext::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if !linked {
        let info = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        return Err(SetupError::ResourceAcquisition(format!(
            "program link failed: {info}"
        )));
    }

    Ok(program)
}

fn compile_shader(
    gl: &WebGl2RenderingContext,
    kind: u32,
    source: &str,
) -> Result<WebGlShader, SetupError> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| SetupError::ResourceAcquisition("failed to create shader".into()))?;

    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, WebGl2RenderingContext::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if !compiled {
        let info = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        return Err(SetupError::ResourceAcquisition(format!(
            "shader compile failed: {info}"
        )));
    }

    Ok(shader)
}

/// Uploads a static float buffer and points the named attribute at
/// `size`-component chunks of it.
pub fn upload_attribute(
    gl: &WebGl2RenderingContext,
    program: &WebGlProgram,
    name: &str,
    data: &[f32],
    size: i32,
) -> Result<WebGlBuffer, SetupError> {
    let location = gl.get_attrib_location(program, name);
    if location < 0 {
        return Err(SetupError::ResourceAcquisition(format!(
            "attribute {name} not found"
        )));
    }

    let buffer = gl
        .create_buffer()
        .ok_or_else(|| SetupError::ResourceAcquisition("failed to create buffer".into()))?;

    gl.enable_vertex_attrib_array(location as u32);
    gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, Some(&buffer));

    let view = js_sys::Float32Array::from(data);
    gl.buffer_data_with_array_buffer_view(
        WebGl2RenderingContext::ARRAY_BUFFER,
        &view,
        WebGl2RenderingContext::STATIC_DRAW,
    );

    gl.vertex_attrib_pointer_with_i32(
        location as u32,
        size,
        WebGl2RenderingContext::FLOAT,
        false,
        0,
        0,
    );

    Ok(buffer)
}

/// Resolves a uniform by name.
pub fn uniform_location(
    gl: &WebGl2RenderingContext,
    program: &WebGlProgram,
    name: &str,
) -> Result<WebGlUniformLocation, SetupError> {
    gl.get_uniform_location(program, name)
        .ok_or_else(|| SetupError::ResourceAcquisition(format!("uniform {name} not found")))
}
