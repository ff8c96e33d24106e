/// Terminal frontend for the spin3d demos
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, MouseEvent,
        MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use spin3d_core::scene::{CUBE_SCENE, FRUSTUM_DEPTH, LIT_SCENE};
use spin3d_core::{transform_set, Frustum, LightingMode, Mesh, Placement, SceneState};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::AsciiRenderer;

/// Logical viewport the scenes were authored against. The rasterizer maps
/// its clip cube onto however many character cells the terminal has.
const LOGICAL_VIEWPORT: (u32, u32) = (800, 600);

/// Main application struct for the interactive terminal demos
pub struct TerminalApp {
    mesh: Mesh,
    state: SceneState,
    mode: LightingMode,
    renderer: AsciiRenderer,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mode: LightingMode) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            mesh: Mesh::unit_cube(),
            state: SceneState::new(),
            mode,
            renderer: AsciiRenderer::new(width as usize, height as usize),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(
            stdout(),
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('l') => {
                    self.mode = next_mode(self.mode);
                    log::info!("lighting mode now {:?}", self.mode);
                }
                KeyCode::Char('+') => {
                    self.state.set_shininess(self.state.shininess + 25.0);
                }
                KeyCode::Char('-') => {
                    self.state.set_shininess((self.state.shininess - 25.0).max(1.0));
                }
                _ => {}
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Drag(_),
                column,
                row,
                ..
            }) => {
                // Drag position maps to absolute rotation, same as the
                // pointer on the web canvas.
                let (width, height) = terminal::size()?;
                let nx = column as f32 / width.max(1) as f32;
                let ny = row as f32 / height.max(1) as f32;
                self.state.pointer_moved(nx, ny);
            }
            Event::Resize(width, height) => {
                self.renderer = AsciiRenderer::new(width as usize, height as usize);
            }
            _ => {}
        }
        Ok(())
    }

    fn placements(&self) -> &'static [Placement] {
        match self.mode {
            LightingMode::PointLight => &LIT_SCENE,
            _ => &CUBE_SCENE,
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let frustum = Frustum::from_viewport(LOGICAL_VIEWPORT.0, LOGICAL_VIEWPORT.1, FRUSTUM_DEPTH);
        let view_projection = frustum.matrix();

        self.renderer.clear();

        for placement in self.placements() {
            let pose = placement.pose(&self.state);
            match transform_set(&view_projection, &pose, self.mode) {
                Some(transforms) => self.renderer.render_mesh(
                    &self.mesh,
                    &transforms,
                    self.mode,
                    self.state.shininess,
                ),
                None => log::warn!("singular transform for {:?}, skipping draw", placement),
            }
        }

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "spin3d | {:?} | FPS: {:.1} | Controls: Drag=Rotate L=Lighting +/-=Shininess Q=Quit",
                self.mode, self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

fn next_mode(mode: LightingMode) -> LightingMode {
    match mode {
        LightingMode::Directional => LightingMode::PointLight,
        LightingMode::PointLight => LightingMode::Unlit,
        LightingMode::Unlit => LightingMode::Directional,
    }
}
