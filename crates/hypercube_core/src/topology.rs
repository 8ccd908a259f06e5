//! Fixed combinatorial structure of the tesseract
//!
//! Vertices 0-7 have w = +1 and vertices 8-15 have w = -1. Inside each
//! w-group, the first four and last four vertices are opposite squares of a
//! 3-cube (y = +1 and y = -1), walked in the same rotational order so that
//! vertex `i` and `i + 4` are joined.

/// Number of tesseract vertices
pub const VERTEX_COUNT: usize = 16;

/// Number of tesseract edges
pub const EDGE_COUNT: usize = 32;

/// Unit corner positions as (x, y, z, w) signs, in construction order
pub const CORNER_SIGNS: [[f64; 4]; VERTEX_COUNT] = [
    [ 1.0,  1.0,  1.0,  1.0], // 0
    [ 1.0,  1.0, -1.0,  1.0], // 1
    [-1.0,  1.0, -1.0,  1.0], // 2
    [-1.0,  1.0,  1.0,  1.0], // 3
    [ 1.0, -1.0,  1.0,  1.0], // 4
    [ 1.0, -1.0, -1.0,  1.0], // 5
    [-1.0, -1.0, -1.0,  1.0], // 6
    [-1.0, -1.0,  1.0,  1.0], // 7
    [ 1.0,  1.0,  1.0, -1.0], // 8
    [ 1.0,  1.0, -1.0, -1.0], // 9
    [-1.0,  1.0, -1.0, -1.0], // 10
    [-1.0,  1.0,  1.0, -1.0], // 11
    [ 1.0, -1.0,  1.0, -1.0], // 12
    [ 1.0, -1.0, -1.0, -1.0], // 13
    [-1.0, -1.0, -1.0, -1.0], // 14
    [-1.0, -1.0,  1.0, -1.0], // 15
];

/// Vertex index pairs for every edge, in draw order
pub const EDGE_PAIRS: [(usize, usize); EDGE_COUNT] = [
    // w = +1 cube: two squares, then the struts joining them
    (0, 1), (1, 2), (2, 3), (3, 0),
    (4, 5), (5, 6), (6, 7), (7, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
    // w = -1 cube
    (8, 9), (9, 10), (10, 11), (11, 8),
    (12, 13), (13, 14), (14, 15), (15, 12),
    (8, 12), (9, 13), (10, 14), (11, 15),
    // extrusion along w
    (0, 8), (1, 9), (2, 10), (3, 11),
    (4, 12), (5, 13), (6, 14), (7, 15),
];

/// Number of coordinates in which two corners differ in sign
pub fn sign_distance(a: usize, b: usize) -> usize {
    CORNER_SIGNS[a]
        .iter()
        .zip(CORNER_SIGNS[b].iter())
        .filter(|(sa, sb)| sa != sb)
        .count()
}
