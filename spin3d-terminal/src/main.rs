/// spin3d Terminal Demo - Interactive Cubes
///
/// Renders the cube scenes as ASCII and rotates them with the mouse.
/// Controls:
///   - Mouse drag: Rotate the cubes
///   - L: Cycle lighting mode
///   - +/-: Adjust shininess
///   - Q/ESC: Quit

use std::env;
use std::io;
use spin3d_core::LightingMode;
use spin3d_terminal::TerminalApp;

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let mode = match args.get(1).map(String::as_str) {
        None | Some("cube") => LightingMode::Directional,
        Some("point-light") => LightingMode::PointLight,
        Some("unlit") => LightingMode::Unlit,
        Some(other) => {
            eprintln!("Unknown demo {:?}", other);
            eprintln!("Usage: {} [cube|point-light|unlit]", args[0]);
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "unknown demo"));
        }
    };

    log::info!("starting {:?} demo", mode);

    let mut app = TerminalApp::new(mode)?;
    app.run()
}
