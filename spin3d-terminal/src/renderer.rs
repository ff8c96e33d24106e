/// ASCII rasterizer for the demo scenes
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::{Matrix3, Point2, Point3, Vector3};
use spin3d_core::scene::LIGHT_WORLD_POSITION;
use spin3d_core::{LightingMode, Mesh, Triangle, TransformSet};
use std::io::Write;

/// Character luminosity ramp for depth/shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// ASCII renderer that converts transformed geometry to terminal characters
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    char_buffer: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            char_buffer: vec![' '; size],
        }
    }

    pub fn clear(&mut self) {
        for i in 0..self.depth_buffer.len() {
            self.depth_buffer[i] = f32::INFINITY;
            self.char_buffer[i] = ' ';
        }
    }

    pub fn render_mesh(
        &mut self,
        mesh: &Mesh,
        transforms: &TransformSet,
        mode: LightingMode,
        shininess: f32,
    ) {
        for triangle in &mesh.triangles {
            self.render_triangle(triangle, transforms, mode, shininess);
        }
    }

    fn render_triangle(
        &mut self,
        triangle: &Triangle,
        transforms: &TransformSet,
        mode: LightingMode,
        shininess: f32,
    ) {
        // The orthographic pipeline keeps w at 1, so clip space already is
        // normalized device coordinates. Off-screen parts are clipped per
        // cell by the rasterizer's bounding box, like the GPU does.
        let mut screen_coords = Vec::new();
        for vertex in &triangle.vertices {
            let clip = transforms.object_to_clip.transform_point(&vertex.position);
            let screen_x = (clip.x + 1.0) * 0.5 * self.width as f32;
            let screen_y = (1.0 - clip.y) * 0.5 * self.height as f32;
            screen_coords.push((screen_x, screen_y, clip.z));
        }

        let brightness = shade(triangle, transforms, mode, shininess);
        self.rasterize_triangle(&screen_coords, ramp_char(brightness));
    }

    /// Rasterizes one 2D triangle given in clip-space coordinates.
    pub fn render_planar(&mut self, positions: &[f32; 6], transform: &Matrix3<f32>, brightness: f32) {
        let mut screen_coords = Vec::new();
        for vertex in positions.chunks(2) {
            let moved = transform.transform_point(&Point2::new(vertex[0], vertex[1]));
            let screen_x = (moved.x + 1.0) * 0.5 * self.width as f32;
            let screen_y = (1.0 - moved.y) * 0.5 * self.height as f32;
            screen_coords.push((screen_x, screen_y, 0.0));
        }

        self.rasterize_triangle(&screen_coords, ramp_char(brightness));
    }

    fn rasterize_triangle(&mut self, coords: &[(f32, f32, f32)], character: char) {
        let (v0, v1, v2) = (coords[0], coords[1], coords[2]);

        // Bounding box
        let min_x = v0.0.min(v1.0).min(v2.0).floor() as i32;
        let max_x = v0.0.max(v1.0).max(v2.0).ceil() as i32;
        let min_y = v0.1.min(v1.1).min(v2.1).floor() as i32;
        let max_y = v0.1.max(v1.1).max(v2.1).ceil() as i32;

        // Clip to screen bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.width as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i32 - 1);

        // Scanline rasterization
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                // Barycentric coordinates
                if let Some((w0, w1, w2)) = barycentric(
                    (v0.0, v0.1),
                    (v1.0, v1.1),
                    (v2.0, v2.1),
                    (px, py),
                ) {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        // Interpolate depth
                        let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;

                        let idx = y as usize * self.width + x as usize;
                        if depth < self.depth_buffer[idx] {
                            self.depth_buffer[idx] = depth;
                            self.char_buffer[idx] = character;
                        }
                    }
                }
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let c = self.char_buffer[idx];

                // Color based on character intensity
                let color = match c {
                    ' ' | '.' | ':' => Color::DarkGrey,
                    '-' | '=' => Color::Grey,
                    '+' | '*' => Color::White,
                    '#' | '%' | '@' => Color::Cyan,
                    _ => Color::White,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Flat-shaded brightness for one triangle under the given mode
fn shade(triangle: &Triangle, transforms: &TransformSet, mode: LightingMode, shininess: f32) -> f32 {
    match mode {
        LightingMode::Unlit => 1.0,
        LightingMode::Directional => {
            let normal = transformed_normal(triangle, transforms);
            let light_dir = Vector3::new(0.0, 0.0, 1.0);
            normal.dot(&light_dir).max(0.0)
        }
        LightingMode::PointLight => {
            let normal = transformed_normal(triangle, transforms);
            let centroid = Point3::from(
                (triangle.vertices[0].position.coords
                    + triangle.vertices[1].position.coords
                    + triangle.vertices[2].position.coords)
                    / 3.0,
            );
            let surface = transforms.object_to_world.transform_point(&centroid);
            let to_light = (Point3::from(LIGHT_WORLD_POSITION) - surface).normalize();
            let diffuse = normal.dot(&to_light).max(0.0);
            // Specular highlight; the ramp clamps anything past full white.
            diffuse + diffuse.powf(shininess)
        }
    }
}

/// The face normal pushed through the upper-left 3x3 of the normal matrix,
/// exactly as the web shaders consume it
fn transformed_normal(triangle: &Triangle, transforms: &TransformSet) -> Vector3<f32> {
    let linear = transforms.normal_matrix.fixed_view::<3, 3>(0, 0);
    (linear * triangle.vertices[0].normal).normalize()
}

fn ramp_char(brightness: f32) -> char {
    let char_index = (brightness * (LUMINOSITY_RAMP.len() - 1) as f32) as usize;
    LUMINOSITY_RAMP[char_index.min(LUMINOSITY_RAMP.len() - 1)]
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}
