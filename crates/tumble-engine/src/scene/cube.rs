use bytemuck::{Pod, Zeroable};

/// Cube vertex: object-space position + RGBA color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x4  // color
    ];

    const fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// The 8 corners of a 2×2×2 cube centered on the origin.
pub const CUBE_VERTICES: [Vertex; 8] = [
    Vertex::new([1.0, -1.0, 1.0], [1.0, 0.0, 0.0, 1.0]),
    Vertex::new([-1.0, -1.0, 1.0], [0.0, 1.0, 0.0, 1.0]),
    Vertex::new([-1.0, 1.0, 1.0], [0.0, 0.0, 1.0, 1.0]),
    Vertex::new([1.0, 1.0, 1.0], [1.0, 1.0, 0.0, 1.0]),
    Vertex::new([1.0, -1.0, -1.0], [1.0, 0.0, 1.0, 1.0]),
    Vertex::new([-1.0, -1.0, -1.0], [0.0, 1.0, 1.0, 1.0]),
    Vertex::new([-1.0, 1.0, -1.0], [1.0, 1.0, 1.0, 1.0]),
    Vertex::new([1.0, 1.0, -1.0], [0.0, 0.0, 0.0, 1.0]),
];

/// 6 faces × 2 triangles, triangle-list order.
#[rustfmt::skip]
pub const CUBE_INDICES: [u16; 36] = [
    0, 1, 2, 2, 3, 0, // +z
    0, 3, 7, 7, 4, 0, // +x
    4, 7, 6, 6, 5, 4, // -z
    1, 5, 6, 6, 2, 1, // -x
    3, 2, 6, 6, 7, 3, // +y
    0, 4, 5, 5, 1, 0, // -y
];

#[cfg(test)]
mod tests {
    use super::*;

    use glam::Vec3;

    fn pos(i: u16) -> Vec3 {
        Vec3::from(CUBE_VERTICES[i as usize].position)
    }

    // ── vertices ──────────────────────────────────────────────────────────

    #[test]
    fn eight_vertices_of_seven_floats() {
        assert_eq!(CUBE_VERTICES.len(), 8);
        assert_eq!(std::mem::size_of::<Vertex>(), 7 * std::mem::size_of::<f32>());
        assert_eq!(bytemuck::cast_slice::<Vertex, f32>(&CUBE_VERTICES).len(), 56);
    }

    #[test]
    fn vertex_table_matches_literals() {
        let floats: &[f32] = bytemuck::cast_slice(&CUBE_VERTICES);
        assert_eq!(&floats[0..7], &[1.0, -1.0, 1.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(&floats[42..49], &[-1.0, 1.0, -1.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(&floats[49..56], &[1.0, 1.0, -1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn vertices_are_distinct_cube_corners() {
        for (i, a) in CUBE_VERTICES.iter().enumerate() {
            assert!(a.position.iter().all(|c| c.abs() == 1.0));
            assert_eq!(a.color[3], 1.0);
            for b in &CUBE_VERTICES[i + 1..] {
                assert_ne!(a.position, b.position);
            }
        }
    }

    #[test]
    fn layout_stride_matches_struct() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 28);
        assert_eq!(layout.attributes[1].offset, 12);
    }

    // ── indices ───────────────────────────────────────────────────────────

    #[test]
    fn thirty_six_indices_in_range() {
        assert_eq!(CUBE_INDICES.len(), 36);
        assert_eq!(CUBE_INDICES.chunks_exact(3).count(), 12);
        assert!(CUBE_INDICES.iter().all(|&i| i <= 7));
    }

    #[test]
    fn every_triangle_lies_on_a_face() {
        for tri in CUBE_INDICES.chunks_exact(3) {
            let (a, b, c) = (pos(tri[0]), pos(tri[1]), pos(tri[2]));
            let on_face = (0..3).any(|axis| a[axis] == b[axis] && b[axis] == c[axis]);
            assert!(on_face, "triangle {tri:?} is not on a cube face");
        }
    }

    #[test]
    fn each_face_has_two_triangles() {
        let mut per_face = [0u32; 6];
        for tri in CUBE_INDICES.chunks_exact(3) {
            let centroid = (pos(tri[0]) + pos(tri[1]) + pos(tri[2])) / 3.0;
            // The dominant centroid axis identifies the face.
            let m = centroid.abs();
            let axis = if m.x >= m.y && m.x >= m.z {
                0
            } else if m.y >= m.z {
                1
            } else {
                2
            };
            let side = usize::from(centroid[axis] < 0.0);
            per_face[axis * 2 + side] += 1;
        }
        assert_eq!(per_face, [2; 6]);
    }

    #[test]
    fn winding_is_consistent() {
        // All faces wind the same way: every normal points toward the center.
        for tri in CUBE_INDICES.chunks_exact(3) {
            let (a, b, c) = (pos(tri[0]), pos(tri[1]), pos(tri[2]));
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) < 0.0, "triangle {tri:?} winds the other way");
        }
    }
}
