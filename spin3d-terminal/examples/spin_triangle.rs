/// Example: the nested spinning triangles, rasterized as ASCII
///
/// Usage: cargo run --example spin_triangle  (press Q or ESC to quit)

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    terminal,
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

use spin3d_core::planar::{spin_angle, spin_color, spin_transform, SPIN_SIZES, TRIANGLE_POSITIONS};
use spin3d_terminal::AsciiRenderer;

fn main() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = animate();

    terminal::disable_raw_mode()?;
    execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

    result
}

fn animate() -> io::Result<()> {
    let (width, height) = terminal::size()?;
    let mut renderer = AsciiRenderer::new(width as usize, height as usize);
    let start = Instant::now();

    // Redraws forever; only a keypress breaks the loop.
    loop {
        if event::poll(Duration::from_millis(0))? {
            if let Event::Key(KeyEvent { code, .. }) = event::read()? {
                if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
                    return Ok(());
                }
            }
        }

        let time_ms = start.elapsed().as_secs_f64() * 1000.0;
        let angle = spin_angle(time_ms);

        renderer.clear();
        for size in SPIN_SIZES {
            let transform = spin_transform(angle, size);
            // The green channel of the color ramp carries the size falloff.
            let brightness = spin_color(angle, size)[1];
            renderer.render_planar(&TRIANGLE_POSITIONS, &transform, brightness);
        }

        let mut out = stdout();
        queue!(out, cursor::MoveTo(0, 0))?;
        renderer.draw(&mut out)?;
        out.flush()?;

        std::thread::sleep(Duration::from_millis(33));
    }
}
