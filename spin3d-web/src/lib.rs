/// spin3d Web - WebGL2 demo frontend
///
/// Compiled to a `cdylib` and driven from JavaScript. The page constructs
/// one demo struct per canvas and forwards pointer and slider events into
/// it; each event recomputes the frame's matrices and redraws before the
/// call returns. The DOM never reaches past this crate into the core.

use wasm_bindgen::prelude::*;

mod context;
mod cube;
mod error;
mod point_light;
mod triangle;

pub use cube::CubeDemo;
pub use error::SetupError;
pub use point_light::PointLightDemo;
pub use triangle::TriangleDemo;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// Call once at startup, before constructing any demo.
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
