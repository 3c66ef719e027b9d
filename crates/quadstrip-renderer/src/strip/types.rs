use crate::stage::Vertex;

/// Two counter-clockwise triangles over the four quad corners.
pub const QUAD_INDICES: &[u16] = &[0, 1, 2, 0, 2, 3];

pub(crate) const QUAD_INDEX_COUNT: u32 = 6;

/// Base quad of side `size` with its lower-left corner at the origin.
///
/// UV origin is the top-left corner of the quad.
pub fn quad_vertices(size: f32) -> [Vertex; 4] {
    [
        Vertex {
            position: [0.0, 0.0],
            uv: [0.0, 1.0],
        }, // bottom-left
        Vertex {
            position: [size, 0.0],
            uv: [1.0, 1.0],
        }, // bottom-right
        Vertex {
            position: [size, size],
            uv: [1.0, 0.0],
        }, // top-right
        Vertex {
            position: [0.0, size],
            uv: [0.0, 0.0],
        }, // top-left
    ]
}
