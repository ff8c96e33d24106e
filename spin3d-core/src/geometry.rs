/// Geometry primitives and the static demo meshes
use nalgebra::{Point3, Vector3};

/// A 3D vertex with position and normal
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32, nx: f32, ny: f32, nz: f32) -> Self {
        Self {
            position: Point3::new(x, y, z),
            normal: Vector3::new(nx, ny, nz),
        }
    }
}

/// A triangle face defined by three vertices
#[derive(Debug, Clone)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }
}

/// A 3D mesh composed of triangles
#[derive(Debug, Clone)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn vertex_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Vertex positions as flat 3-float triples, in draw order.
    ///
    /// Uploaded once into a static buffer; never rewritten.
    pub fn positions(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.vertex_count() * 3);
        for triangle in &self.triangles {
            for vertex in &triangle.vertices {
                data.extend_from_slice(&[
                    vertex.position.x,
                    vertex.position.y,
                    vertex.position.z,
                ]);
            }
        }
        data
    }

    /// Vertex normals as flat 3-float triples, matching `positions`.
    pub fn normals(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.vertex_count() * 3);
        for triangle in &self.triangles {
            for vertex in &triangle.vertices {
                data.extend_from_slice(&[vertex.normal.x, vertex.normal.y, vertex.normal.z]);
            }
        }
        data
    }

    /// Unit cube centered on the origin, positive Y up, positive Z facing
    /// inwards. Six faces, two triangles each, flat per-face normals.
    pub fn unit_cube() -> Self {
        let mut mesh = Self::with_capacity(12);

        // Front face
        mesh.add_triangle(Triangle::new(
            Vertex::new(-1.0, 1.0, -1.0, 0.0, 0.0, -1.0),
            Vertex::new(-1.0, -1.0, -1.0, 0.0, 0.0, -1.0),
            Vertex::new(1.0, 1.0, -1.0, 0.0, 0.0, -1.0),
        ));
        mesh.add_triangle(Triangle::new(
            Vertex::new(1.0, 1.0, -1.0, 0.0, 0.0, -1.0),
            Vertex::new(-1.0, -1.0, -1.0, 0.0, 0.0, -1.0),
            Vertex::new(1.0, -1.0, -1.0, 0.0, 0.0, -1.0),
        ));

        // Top face
        mesh.add_triangle(Triangle::new(
            Vertex::new(-1.0, 1.0, 1.0, 0.0, 1.0, 0.0),
            Vertex::new(-1.0, 1.0, -1.0, 0.0, 1.0, 0.0),
            Vertex::new(1.0, 1.0, 1.0, 0.0, 1.0, 0.0),
        ));
        mesh.add_triangle(Triangle::new(
            Vertex::new(1.0, 1.0, 1.0, 0.0, 1.0, 0.0),
            Vertex::new(-1.0, 1.0, -1.0, 0.0, 1.0, 0.0),
            Vertex::new(1.0, 1.0, -1.0, 0.0, 1.0, 0.0),
        ));

        // Right face
        mesh.add_triangle(Triangle::new(
            Vertex::new(1.0, 1.0, -1.0, 1.0, 0.0, 0.0),
            Vertex::new(1.0, -1.0, -1.0, 1.0, 0.0, 0.0),
            Vertex::new(1.0, 1.0, 1.0, 1.0, 0.0, 0.0),
        ));
        mesh.add_triangle(Triangle::new(
            Vertex::new(1.0, 1.0, 1.0, 1.0, 0.0, 0.0),
            Vertex::new(1.0, -1.0, -1.0, 1.0, 0.0, 0.0),
            Vertex::new(1.0, -1.0, 1.0, 1.0, 0.0, 0.0),
        ));

        // Back face
        mesh.add_triangle(Triangle::new(
            Vertex::new(-1.0, 1.0, 1.0, 0.0, 0.0, 1.0),
            Vertex::new(1.0, 1.0, 1.0, 0.0, 0.0, 1.0),
            Vertex::new(-1.0, -1.0, 1.0, 0.0, 0.0, 1.0),
        ));
        mesh.add_triangle(Triangle::new(
            Vertex::new(1.0, 1.0, 1.0, 0.0, 0.0, 1.0),
            Vertex::new(1.0, -1.0, 1.0, 0.0, 0.0, 1.0),
            Vertex::new(-1.0, -1.0, 1.0, 0.0, 0.0, 1.0),
        ));

        // Bottom face
        mesh.add_triangle(Triangle::new(
            Vertex::new(-1.0, -1.0, 1.0, 0.0, -1.0, 0.0),
            Vertex::new(1.0, -1.0, 1.0, 0.0, -1.0, 0.0),
            Vertex::new(-1.0, -1.0, -1.0, 0.0, -1.0, 0.0),
        ));
        mesh.add_triangle(Triangle::new(
            Vertex::new(1.0, -1.0, 1.0, 0.0, -1.0, 0.0),
            Vertex::new(1.0, -1.0, -1.0, 0.0, -1.0, 0.0),
            Vertex::new(-1.0, -1.0, -1.0, 0.0, -1.0, 0.0),
        ));

        // Left face
        mesh.add_triangle(Triangle::new(
            Vertex::new(-1.0, 1.0, 1.0, -1.0, 0.0, 0.0),
            Vertex::new(-1.0, -1.0, -1.0, -1.0, 0.0, 0.0),
            Vertex::new(-1.0, 1.0, -1.0, -1.0, 0.0, 0.0),
        ));
        mesh.add_triangle(Triangle::new(
            Vertex::new(-1.0, 1.0, 1.0, -1.0, 0.0, 0.0),
            Vertex::new(-1.0, -1.0, 1.0, -1.0, 0.0, 0.0),
            Vertex::new(-1.0, -1.0, -1.0, -1.0, 0.0, 0.0),
        ));

        mesh
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_cube_shape() {
        let cube = Mesh::unit_cube();
        assert_eq!(cube.triangles.len(), 12);
        assert_eq!(cube.vertex_count(), 36);
        assert_eq!(cube.positions().len(), 108);
        assert_eq!(cube.normals().len(), 108);
    }

    #[test]
    fn test_unit_cube_normals_are_axis_aligned() {
        let cube = Mesh::unit_cube();
        for triangle in &cube.triangles {
            for vertex in &triangle.vertices {
                assert!((vertex.normal.norm() - 1.0).abs() < 1e-6);
                // Every position sits on the face its normal points along.
                let along = vertex.position.coords.dot(&vertex.normal);
                assert!((along - 1.0).abs() < 1e-6);
            }
        }
    }
}
