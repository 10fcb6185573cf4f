// Solid tables: vertex encodings (sign * 1-based constant index,
// 0 for a zero coordinate), face rings (CCW from outside, anchor
// first), and, for dual construction, per-vertex face rings.
// Derived from the standard constructions; every table checked
// against Euler's formula, face signatures and convexity.

pub struct SolidTable {
    pub verts: &'static [[i8; 3]],
    pub faces: &'static [&'static [u8]],
    pub vertex_fans: Option<&'static [&'static [u8]]>,
}

pub static TETRAHEDRON: SolidTable = SolidTable {
    verts: &[[1, 1, 1], [1, -1, -1], [-1, 1, -1], [-1, -1, 1]],
    faces: &[&[0, 1, 2], &[0, 2, 3], &[0, 3, 1], &[1, 3, 2]],
    vertex_fans: None,
};

pub static TRUNCATED_TETRAHEDRON: SolidTable = SolidTable {
    verts: &[[2, 1, 1], [2, -1, -1], [1, 2, 1], [1, 1, 2], [1, -1, -2], [1, -2, -1], [-1, 2, -1], [-1, 1, -2], [-1, -1, 2], [-1, -2, 1], [-2, 1, -1], [-2, -1, 1]],
    faces: &[&[0, 1, 4, 7, 6, 2], &[0, 2, 3], &[0, 3, 8, 9, 5, 1], &[1, 5, 4], &[2, 6, 10, 11, 8, 3], &[4, 5, 9, 11, 10, 7], &[6, 7, 10], &[8, 11, 9]],
    vertex_fans: Some(&[&[0, 1, 2], &[0, 2, 3], &[0, 4, 1], &[1, 4, 2], &[0, 3, 5], &[2, 5, 3], &[0, 6, 4], &[0, 5, 6], &[2, 4, 7], &[2, 7, 5], &[4, 6, 5], &[4, 5, 7]]),
};

pub static CUBOCTAHEDRON: SolidTable = SolidTable {
    verts: &[[1, 1, 0], [1, 0, 1], [1, 0, -1], [1, -1, 0], [0, 1, 1], [0, 1, -1], [0, -1, 1], [0, -1, -1], [-1, 1, 0], [-1, 0, 1], [-1, 0, -1], [-1, -1, 0]],
    faces: &[&[0, 1, 3, 2], &[0, 2, 5], &[0, 4, 1], &[0, 5, 8, 4], &[1, 4, 9, 6], &[1, 6, 3], &[2, 3, 7], &[2, 7, 10, 5], &[3, 6, 11, 7], &[4, 8, 9], &[5, 10, 8], &[6, 9, 11], &[7, 11, 10], &[8, 10, 11, 9]],
    vertex_fans: None,
};

pub static TRUNCATED_OCTAHEDRON: SolidTable = SolidTable {
    verts: &[[2, 1, 0], [2, 0, 1], [2, 0, -1], [2, -1, 0], [1, 2, 0], [1, 0, 2], [1, 0, -2], [1, -2, 0], [0, 2, 1], [0, 2, -1], [0, 1, 2], [0, 1, -2], [0, -1, 2], [0, -1, -2], [0, -2, 1], [0, -2, -1], [-1, 2, 0], [-1, 0, 2], [-1, 0, -2], [-1, -2, 0], [-2, 1, 0], [-2, 0, 1], [-2, 0, -1], [-2, -1, 0]],
    faces: &[&[0, 1, 3, 2], &[0, 2, 6, 11, 9, 4], &[0, 4, 8, 10, 5, 1], &[1, 5, 12, 14, 7, 3], &[2, 3, 7, 15, 13, 6], &[4, 9, 16, 8], &[5, 10, 17, 12], &[6, 13, 18, 11], &[7, 14, 19, 15], &[8, 16, 20, 21, 17, 10], &[9, 11, 18, 22, 20, 16], &[12, 17, 21, 23, 19, 14], &[13, 15, 19, 23, 22, 18], &[20, 22, 23, 21]],
    vertex_fans: Some(&[&[0, 1, 2], &[0, 2, 3], &[0, 4, 1], &[0, 3, 4], &[1, 5, 2], &[2, 6, 3], &[1, 4, 7], &[3, 8, 4], &[2, 5, 9], &[1, 10, 5], &[2, 9, 6], &[1, 7, 10], &[3, 6, 11], &[4, 12, 7], &[3, 11, 8], &[4, 8, 12], &[5, 10, 9], &[6, 9, 11], &[7, 12, 10], &[8, 11, 12], &[9, 10, 13], &[9, 13, 11], &[10, 12, 13], &[11, 13, 12]]),
};

pub static RHOMBICUBOCTAHEDRON: SolidTable = SolidTable {
    verts: &[[2, 1, 1], [2, 1, -1], [2, -1, 1], [2, -1, -1], [1, 2, 1], [1, 2, -1], [1, 1, 2], [1, 1, -2], [1, -1, 2], [1, -1, -2], [1, -2, 1], [1, -2, -1], [-1, 2, 1], [-1, 2, -1], [-1, 1, 2], [-1, 1, -2], [-1, -1, 2], [-1, -1, -2], [-1, -2, 1], [-1, -2, -1], [-2, 1, 1], [-2, 1, -1], [-2, -1, 1], [-2, -1, -1]],
    faces: &[&[0, 1, 5, 4], &[0, 2, 3, 1], &[0, 4, 6], &[0, 6, 8, 2], &[1, 3, 9, 7], &[1, 7, 5], &[2, 8, 10], &[2, 10, 11, 3], &[3, 11, 9], &[4, 5, 13, 12], &[4, 12, 14, 6], &[5, 7, 15, 13], &[6, 14, 16, 8], &[7, 9, 17, 15], &[8, 16, 18, 10], &[9, 11, 19, 17], &[10, 18, 19, 11], &[12, 13, 21, 20], &[12, 20, 14], &[13, 15, 21], &[14, 20, 22, 16], &[15, 17, 23, 21], &[16, 22, 18], &[17, 19, 23], &[18, 22, 23, 19], &[20, 21, 23, 22]],
    vertex_fans: Some(&[&[0, 2, 3, 1], &[0, 1, 4, 5], &[1, 3, 6, 7], &[1, 7, 8, 4], &[0, 9, 10, 2], &[0, 5, 11, 9], &[2, 10, 12, 3], &[4, 13, 11, 5], &[3, 12, 14, 6], &[4, 8, 15, 13], &[6, 14, 16, 7], &[7, 16, 15, 8], &[9, 17, 18, 10], &[9, 11, 19, 17], &[10, 18, 20, 12], &[11, 13, 21, 19], &[12, 20, 22, 14], &[13, 15, 23, 21], &[14, 22, 24, 16], &[15, 16, 24, 23], &[17, 25, 20, 18], &[17, 19, 21, 25], &[20, 25, 24, 22], &[21, 23, 24, 25]]),
};

pub static SNUB_CUBE: SolidTable = SolidTable {
    verts: &[[1, 2, 3], [1, -2, -3], [-1, 2, -3], [-1, -2, 3], [3, 1, 2], [3, -1, -2], [-3, 1, -2], [-3, -1, 2], [2, 3, 1], [2, -3, -1], [-2, 3, -1], [-2, -3, 1], [2, 1, -3], [2, -1, 3], [-2, 1, 3], [-2, -1, -3], [3, 2, -1], [3, -2, 1], [-3, 2, 1], [-3, -2, -1], [1, 3, -2], [1, -3, 2], [-1, 3, 2], [-1, -3, -2]],
    faces: &[&[0, 4, 8], &[0, 8, 22], &[0, 13, 4], &[0, 14, 3, 13], &[0, 22, 14], &[1, 5, 9], &[1, 9, 23], &[1, 12, 5], &[1, 15, 2, 12], &[1, 23, 15], &[2, 6, 10], &[2, 10, 20], &[2, 15, 6], &[2, 20, 12], &[3, 7, 11], &[3, 11, 21], &[3, 14, 7], &[3, 21, 13], &[4, 13, 17], &[4, 16, 8], &[4, 17, 5, 16], &[5, 12, 16], &[5, 17, 9], &[6, 15, 19], &[6, 18, 10], &[6, 19, 7, 18], &[7, 14, 18], &[7, 19, 11], &[8, 16, 20], &[8, 20, 10, 22], &[9, 17, 21], &[9, 21, 11, 23], &[10, 18, 22], &[11, 19, 23], &[12, 20, 16], &[13, 21, 17], &[14, 22, 18], &[15, 23, 19]],
    vertex_fans: Some(&[&[0, 1, 4, 3, 2], &[5, 6, 9, 8, 7], &[8, 12, 10, 11, 13], &[3, 16, 14, 15, 17], &[0, 2, 18, 20, 19], &[5, 7, 21, 20, 22], &[10, 12, 23, 25, 24], &[14, 16, 26, 25, 27], &[0, 19, 28, 29, 1], &[5, 22, 30, 31, 6], &[10, 24, 32, 29, 11], &[14, 27, 33, 31, 15], &[7, 8, 13, 34, 21], &[2, 3, 17, 35, 18], &[3, 4, 36, 26, 16], &[8, 9, 37, 23, 12], &[19, 20, 21, 34, 28], &[18, 35, 30, 22, 20], &[24, 25, 26, 36, 32], &[23, 37, 33, 27, 25], &[11, 29, 28, 34, 13], &[15, 31, 30, 35, 17], &[1, 29, 32, 36, 4], &[6, 31, 33, 37, 9]]),
};

pub static DODECAHEDRON: SolidTable = SolidTable {
    verts: &[[1, 1, 1], [1, 1, -1], [1, -1, 1], [1, -1, -1], [-1, 1, 1], [-1, 1, -1], [-1, -1, 1], [-1, -1, -1], [0, 2, 3], [0, 2, -3], [0, -2, 3], [0, -2, -3], [3, 0, 2], [3, 0, -2], [-3, 0, 2], [-3, 0, -2], [2, 3, 0], [2, -3, 0], [-2, 3, 0], [-2, -3, 0]],
    faces: &[&[0, 8, 10, 2, 12], &[0, 12, 13, 1, 16], &[0, 16, 18, 4, 8], &[1, 9, 5, 18, 16], &[1, 13, 3, 11, 9], &[2, 10, 6, 19, 17], &[2, 17, 3, 13, 12], &[3, 17, 19, 7, 11], &[4, 14, 6, 10, 8], &[4, 18, 5, 15, 14], &[5, 9, 11, 7, 15], &[6, 14, 15, 7, 19]],
    vertex_fans: None,
};

pub static ICOSAHEDRON: SolidTable = SolidTable {
    verts: &[[0, 1, 2], [0, 1, -2], [0, -1, 2], [0, -1, -2], [2, 0, 1], [2, 0, -1], [-2, 0, 1], [-2, 0, -1], [1, 2, 0], [1, -2, 0], [-1, 2, 0], [-1, -2, 0]],
    faces: &[&[0, 2, 4], &[0, 4, 8], &[0, 6, 2], &[0, 8, 10], &[0, 10, 6], &[1, 3, 7], &[1, 5, 3], &[1, 7, 10], &[1, 8, 5], &[1, 10, 8], &[2, 6, 11], &[2, 9, 4], &[2, 11, 9], &[3, 5, 9], &[3, 9, 11], &[3, 11, 7], &[4, 5, 8], &[4, 9, 5], &[6, 7, 11], &[6, 10, 7]],
    vertex_fans: None,
};

pub static ICOSIDODECAHEDRON: SolidTable = SolidTable {
    verts: &[[0, 0, 1], [0, 0, -1], [1, 0, 0], [-1, 0, 0], [0, 1, 0], [0, -1, 0], [2, 3, 4], [2, 3, -4], [2, -3, 4], [2, -3, -4], [-2, 3, 4], [-2, 3, -4], [-2, -3, 4], [-2, -3, -4], [4, 2, 3], [4, 2, -3], [4, -2, 3], [4, -2, -3], [-4, 2, 3], [-4, 2, -3], [-4, -2, 3], [-4, -2, -3], [3, 4, 2], [3, 4, -2], [3, -4, 2], [3, -4, -2], [-3, 4, 2], [-3, 4, -2], [-3, -4, 2], [-3, -4, -2]],
    faces: &[&[0, 6, 10], &[0, 8, 16, 14, 6], &[0, 10, 18, 20, 12], &[0, 12, 8], &[1, 7, 15, 17, 9], &[1, 9, 13], &[1, 11, 7], &[1, 13, 21, 19, 11], &[2, 14, 16], &[2, 15, 23, 22, 14], &[2, 16, 24, 25, 17], &[2, 17, 15], &[3, 18, 26, 27, 19], &[3, 19, 21], &[3, 20, 18], &[3, 21, 29, 28, 20], &[4, 22, 23], &[4, 23, 7, 11, 27], &[4, 26, 10, 6, 22], &[4, 27, 26], &[5, 24, 8, 12, 28], &[5, 25, 24], &[5, 28, 29], &[5, 29, 13, 9, 25], &[6, 14, 22], &[7, 23, 15], &[8, 24, 16], &[9, 17, 25], &[10, 26, 18], &[11, 19, 27], &[12, 20, 28], &[13, 29, 21]],
    vertex_fans: Some(&[&[0, 2, 3, 1], &[4, 5, 7, 6], &[8, 10, 11, 9], &[12, 13, 15, 14], &[16, 17, 19, 18], &[20, 22, 23, 21], &[0, 1, 24, 18], &[4, 6, 17, 25], &[1, 3, 20, 26], &[4, 27, 23, 5], &[0, 18, 28, 2], &[6, 7, 29, 17], &[2, 30, 20, 3], &[5, 23, 31, 7], &[1, 8, 9, 24], &[4, 25, 9, 11], &[1, 26, 10, 8], &[4, 11, 10, 27], &[2, 28, 12, 14], &[7, 13, 12, 29], &[2, 14, 15, 30], &[7, 31, 15, 13], &[9, 16, 18, 24], &[9, 25, 17, 16], &[10, 26, 20, 21], &[10, 21, 23, 27], &[12, 28, 18, 19], &[12, 19, 17, 29], &[15, 22, 20, 30], &[15, 31, 23, 22]]),
};

pub static TRUNCATED_ICOSIDODECAHEDRON: SolidTable = SolidTable {
    verts: &[[1, 2, 3], [1, 2, -3], [1, -2, 3], [1, -2, -3], [-1, 2, 3], [-1, 2, -3], [-1, -2, 3], [-1, -2, -3], [3, 1, 2], [3, 1, -2], [3, -1, 2], [3, -1, -2], [-3, 1, 2], [-3, 1, -2], [-3, -1, 2], [-3, -1, -2], [2, 3, 1], [2, 3, -1], [2, -3, 1], [2, -3, -1], [-2, 3, 1], [-2, 3, -1], [-2, -3, 1], [-2, -3, -1], [4, 5, 6], [4, 5, -6], [4, -5, 6], [4, -5, -6], [-4, 5, 6], [-4, 5, -6], [-4, -5, 6], [-4, -5, -6], [6, 4, 5], [6, 4, -5], [6, -4, 5], [6, -4, -5], [-6, 4, 5], [-6, 4, -5], [-6, -4, 5], [-6, -4, -5], [5, 6, 4], [5, 6, -4], [5, -6, 4], [5, -6, -4], [-5, 6, 4], [-5, 6, -4], [-5, -6, 4], [-5, -6, -4], [7, 8, 9], [7, 8, -9], [7, -8, 9], [7, -8, -9], [-7, 8, 9], [-7, 8, -9], [-7, -8, 9], [-7, -8, -9], [9, 7, 8], [9, 7, -8], [9, -7, 8], [9, -7, -8], [-9, 7, 8], [-9, 7, -8], [-9, -7, 8], [-9, -7, -8], [8, 9, 7], [8, 9, -7], [8, -9, 7], [8, -9, -7], [-8, 9, 7], [-8, 9, -7], [-8, -9, 7], [-8, -9, -7], [10, 11, 12], [10, 11, -12], [10, -11, 12], [10, -11, -12], [-10, 11, 12], [-10, 11, -12], [-10, -11, 12], [-10, -11, -12], [12, 10, 11], [12, 10, -11], [12, -10, 11], [12, -10, -11], [-12, 10, 11], [-12, 10, -11], [-12, -10, 11], [-12, -10, -11], [11, 12, 10], [11, 12, -10], [11, -12, 10], [11, -12, -10], [-11, 12, 10], [-11, 12, -10], [-11, -12, 10], [-11, -12, -10], [13, 14, 15], [13, 14, -15], [13, -14, 15], [13, -14, -15], [-13, 14, 15], [-13, 14, -15], [-13, -14, 15], [-13, -14, -15], [15, 13, 14], [15, 13, -14], [15, -13, 14], [15, -13, -14], [-15, 13, 14], [-15, 13, -14], [-15, -13, 14], [-15, -13, -14], [14, 15, 13], [14, 15, -13], [14, -15, 13], [14, -15, -13], [-14, 15, 13], [-14, 15, -13], [-14, -15, 13], [-14, -15, -13]],
    faces: &[&[0, 2, 26, 74, 106, 58, 56, 104, 72, 24], &[0, 4, 6, 2], &[0, 24, 48, 52, 28, 4], &[1, 3, 7, 5], &[1, 5, 29, 53, 49, 25], &[1, 25, 73, 105, 57, 59, 107, 75, 27, 3], &[2, 6, 30, 54, 50, 26], &[3, 27, 51, 55, 31, 7], &[4, 28, 76, 108, 60, 62, 110, 78, 30, 6], &[5, 7, 31, 79, 111, 63, 61, 109, 77, 29], &[8, 9, 33, 81, 113, 65, 64, 112, 80, 32], &[8, 10, 11, 9], &[8, 32, 56, 58, 34, 10], &[9, 11, 35, 59, 57, 33], &[10, 34, 82, 114, 66, 67, 115, 83, 35, 11], &[12, 13, 15, 14], &[12, 14, 38, 62, 60, 36], &[12, 36, 84, 116, 68, 69, 117, 85, 37, 13], &[13, 37, 61, 63, 39, 15], &[14, 15, 39, 87, 119, 71, 70, 118, 86, 38], &[16, 17, 21, 20], &[16, 20, 44, 92, 100, 52, 48, 96, 88, 40], &[16, 40, 64, 65, 41, 17], &[17, 41, 89, 97, 49, 53, 101, 93, 45, 21], &[18, 19, 43, 67, 66, 42], &[18, 22, 23, 19], &[18, 42, 90, 98, 50, 54, 102, 94, 46, 22], &[19, 23, 47, 95, 103, 55, 51, 99, 91, 43], &[20, 21, 45, 69, 68, 44], &[22, 46, 70, 71, 47, 23], &[24, 72, 96, 48], &[25, 49, 97, 73], &[26, 50, 98, 74], &[27, 75, 99, 51], &[28, 52, 100, 76], &[29, 77, 101, 53], &[30, 78, 102, 54], &[31, 55, 103, 79], &[32, 80, 104, 56], &[33, 57, 105, 81], &[34, 58, 106, 82], &[35, 83, 107, 59], &[36, 60, 108, 84], &[37, 85, 109, 61], &[38, 86, 110, 62], &[39, 63, 111, 87], &[40, 88, 112, 64], &[41, 65, 113, 89], &[42, 66, 114, 90], &[43, 91, 115, 67], &[44, 68, 116, 92], &[45, 93, 117, 69], &[46, 94, 118, 70], &[47, 71, 119, 95], &[72, 104, 80, 112, 88, 96], &[73, 97, 89, 113, 81, 105], &[74, 98, 90, 114, 82, 106], &[75, 107, 83, 115, 91, 99], &[76, 100, 92, 116, 84, 108], &[77, 109, 85, 117, 93, 101], &[78, 110, 86, 118, 94, 102], &[79, 103, 95, 119, 87, 111]],
    vertex_fans: Some(&[&[0, 2, 1], &[3, 4, 5], &[0, 1, 6], &[3, 5, 7], &[1, 2, 8], &[3, 9, 4], &[1, 8, 6], &[3, 7, 9], &[10, 12, 11], &[10, 11, 13], &[11, 12, 14], &[11, 14, 13], &[15, 16, 17], &[15, 17, 18], &[15, 19, 16], &[15, 18, 19], &[20, 21, 22], &[20, 22, 23], &[24, 26, 25], &[24, 25, 27], &[20, 28, 21], &[20, 23, 28], &[25, 26, 29], &[25, 29, 27], &[0, 30, 2], &[4, 31, 5], &[0, 6, 32], &[5, 33, 7], &[2, 34, 8], &[4, 9, 35], &[6, 8, 36], &[7, 37, 9], &[10, 38, 12], &[10, 13, 39], &[12, 40, 14], &[13, 14, 41], &[16, 42, 17], &[17, 43, 18], &[16, 19, 44], &[18, 45, 19], &[21, 46, 22], &[22, 47, 23], &[24, 48, 26], &[24, 27, 49], &[21, 28, 50], &[23, 51, 28], &[26, 52, 29], &[27, 29, 53], &[2, 30, 21], &[4, 23, 31], &[6, 26, 32], &[7, 33, 27], &[2, 21, 34], &[4, 35, 23], &[6, 36, 26], &[7, 27, 37], &[0, 12, 38], &[5, 39, 13], &[0, 40, 12], &[5, 13, 41], &[8, 42, 16], &[9, 18, 43], &[8, 16, 44], &[9, 45, 18], &[10, 22, 46], &[10, 47, 22], &[14, 48, 24], &[14, 24, 49], &[17, 50, 28], &[17, 28, 51], &[19, 29, 52], &[19, 53, 29], &[0, 54, 30], &[5, 31, 55], &[0, 32, 56], &[5, 57, 33], &[8, 34, 58], &[9, 59, 35], &[8, 60, 36], &[9, 37, 61], &[10, 54, 38], &[10, 39, 55], &[14, 40, 56], &[14, 57, 41], &[17, 42, 58], &[17, 59, 43], &[19, 60, 44], &[19, 45, 61], &[21, 54, 46], &[23, 47, 55], &[26, 48, 56], &[27, 57, 49], &[21, 50, 58], &[23, 59, 51], &[26, 60, 52], &[27, 53, 61], &[21, 30, 54], &[23, 55, 31], &[26, 56, 32], &[27, 33, 57], &[21, 58, 34], &[23, 35, 59], &[26, 36, 60], &[27, 61, 37], &[0, 38, 54], &[5, 55, 39], &[0, 56, 40], &[5, 41, 57], &[8, 58, 42], &[9, 43, 59], &[8, 44, 60], &[9, 61, 45], &[10, 46, 54], &[10, 55, 47], &[14, 56, 48], &[14, 49, 57], &[17, 58, 50], &[17, 51, 59], &[19, 52, 60], &[19, 61, 53]]),
};

pub static RHOMBICOSIDODECAHEDRON: SolidTable = SolidTable {
    verts: &[[1, 1, 3], [1, 1, -3], [1, -1, 3], [1, -1, -3], [-1, 1, 3], [-1, 1, -3], [-1, -1, 3], [-1, -1, -3], [3, 1, 1], [3, 1, -1], [3, -1, 1], [3, -1, -1], [-3, 1, 1], [-3, 1, -1], [-3, -1, 1], [-3, -1, -1], [1, 3, 1], [1, 3, -1], [1, -3, 1], [1, -3, -1], [-1, 3, 1], [-1, 3, -1], [-1, -3, 1], [-1, -3, -1], [4, 5, 6], [4, 5, -6], [4, -5, 6], [4, -5, -6], [-4, 5, 6], [-4, 5, -6], [-4, -5, 6], [-4, -5, -6], [6, 4, 5], [6, 4, -5], [6, -4, 5], [6, -4, -5], [-6, 4, 5], [-6, 4, -5], [-6, -4, 5], [-6, -4, -5], [5, 6, 4], [5, 6, -4], [5, -6, 4], [5, -6, -4], [-5, 6, 4], [-5, 6, -4], [-5, -6, 4], [-5, -6, -4], [7, 0, 4], [7, 0, -4], [-7, 0, 4], [-7, 0, -4], [4, 7, 0], [4, -7, 0], [-4, 7, 0], [-4, -7, 0], [0, 4, 7], [0, 4, -7], [0, -4, 7], [0, -4, -7]],
    faces: &[&[0, 2, 26, 48, 24], &[0, 4, 6, 2], &[0, 24, 40, 56], &[0, 56, 4], &[1, 3, 7, 5], &[1, 5, 57], &[1, 25, 49, 27, 3], &[1, 57, 41, 25], &[2, 6, 58], &[2, 58, 42, 26], &[3, 27, 43, 59], &[3, 59, 7], &[4, 28, 50, 30, 6], &[4, 56, 44, 28], &[5, 7, 31, 51, 29], &[5, 29, 45, 57], &[6, 30, 46, 58], &[7, 59, 47, 31], &[8, 9, 33, 52, 32], &[8, 10, 11, 9], &[8, 32, 24, 48], &[8, 48, 10], &[9, 11, 49], &[9, 49, 25, 33], &[10, 34, 53, 35, 11], &[10, 48, 26, 34], &[11, 35, 27, 49], &[12, 13, 15, 14], &[12, 14, 50], &[12, 36, 54, 37, 13], &[12, 50, 28, 36], &[13, 37, 29, 51], &[13, 51, 15], &[14, 15, 39, 55, 38], &[14, 38, 30, 50], &[15, 51, 31, 39], &[16, 17, 21, 20], &[16, 20, 44, 56, 40], &[16, 40, 32, 52], &[16, 52, 17], &[17, 41, 57, 45, 21], &[17, 52, 33, 41], &[18, 19, 53], &[18, 22, 23, 19], &[18, 42, 58, 46, 22], &[18, 53, 34, 42], &[19, 23, 47, 59, 43], &[19, 43, 35, 53], &[20, 21, 54], &[20, 54, 36, 44], &[21, 45, 37, 54], &[22, 46, 38, 55], &[22, 55, 23], &[23, 55, 39, 47], &[24, 32, 40], &[25, 41, 33], &[26, 42, 34], &[27, 35, 43], &[28, 44, 36], &[29, 37, 45], &[30, 38, 46], &[31, 47, 39]],
    vertex_fans: Some(&[&[0, 2, 3, 1], &[4, 5, 7, 6], &[0, 1, 8, 9], &[4, 6, 10, 11], &[1, 3, 13, 12], &[4, 14, 15, 5], &[1, 12, 16, 8], &[4, 11, 17, 14], &[18, 20, 21, 19], &[18, 19, 22, 23], &[19, 21, 25, 24], &[19, 24, 26, 22], &[27, 28, 30, 29], &[27, 29, 31, 32], &[27, 33, 34, 28], &[27, 32, 35, 33], &[36, 37, 38, 39], &[36, 39, 41, 40], &[42, 45, 44, 43], &[42, 43, 46, 47], &[36, 48, 49, 37], &[36, 40, 50, 48], &[43, 44, 51, 52], &[43, 52, 53, 46], &[0, 20, 54, 2], &[6, 7, 55, 23], &[0, 9, 56, 25], &[6, 26, 57, 10], &[12, 13, 58, 30], &[14, 31, 59, 15], &[12, 34, 60, 16], &[14, 17, 61, 35], &[18, 38, 54, 20], &[18, 23, 55, 41], &[24, 25, 56, 45], &[24, 47, 57, 26], &[29, 30, 58, 49], &[29, 50, 59, 31], &[33, 51, 60, 34], &[33, 35, 61, 53], &[2, 54, 38, 37], &[7, 40, 41, 55], &[9, 44, 45, 56], &[10, 57, 47, 46], &[13, 37, 49, 58], &[15, 59, 50, 40], &[16, 60, 51, 44], &[17, 46, 53, 61], &[0, 25, 21, 20], &[6, 23, 22, 26], &[12, 30, 28, 34], &[14, 35, 32, 31], &[18, 41, 39, 38], &[24, 45, 42, 47], &[29, 49, 48, 50], &[33, 53, 52, 51], &[2, 37, 13, 3], &[5, 15, 40, 7], &[8, 16, 44, 9], &[10, 46, 17, 11]]),
};

pub static SNUB_DODECAHEDRON: SolidTable = SolidTable {
    verts: &[[1, 2, 3], [1, -2, -3], [-1, 2, -3], [-1, -2, 3], [3, 1, 2], [3, -1, -2], [-3, 1, -2], [-3, -1, 2], [2, 3, 1], [2, -3, -1], [-2, 3, -1], [-2, -3, 1], [4, 5, 6], [4, -5, -6], [-4, 5, -6], [-4, -5, 6], [6, 4, 5], [6, -4, -5], [-6, 4, -5], [-6, -4, 5], [5, 6, 4], [5, -6, -4], [-5, 6, -4], [-5, -6, 4], [7, 8, -9], [7, -8, 9], [-7, 8, 9], [-7, -8, -9], [9, 7, -8], [9, -7, 8], [-9, 7, 8], [-9, -7, -8], [8, 9, -7], [8, -9, 7], [-8, 9, 7], [-8, -9, -7], [10, 11, 12], [10, -11, -12], [-10, 11, -12], [-10, -11, 12], [12, 10, 11], [12, -10, -11], [-12, 10, -11], [-12, -10, 11], [11, 12, 10], [11, -12, -10], [-11, 12, -10], [-11, -12, 10], [13, 14, -15], [13, -14, 15], [-13, 14, 15], [-13, -14, -15], [15, 13, -14], [15, -13, 14], [-15, 13, 14], [-15, -13, -14], [14, 15, -13], [14, -15, 13], [-14, 15, 13], [-14, -15, -13]],
    faces: &[&[0, 3, 25], &[0, 12, 44], &[0, 25, 49, 36, 12], &[0, 26, 3], &[0, 44, 26], &[1, 2, 24], &[1, 13, 45], &[1, 24, 48, 37, 13], &[1, 27, 2], &[1, 45, 27], &[2, 14, 46], &[2, 27, 51, 38, 14], &[2, 46, 24], &[3, 15, 47], &[3, 26, 50, 39, 15], &[3, 47, 25], &[4, 5, 28], &[4, 16, 36], &[4, 28, 52, 40, 16], &[4, 29, 5], &[4, 36, 29], &[5, 17, 37], &[5, 29, 53, 41, 17], &[5, 37, 28], &[6, 7, 30], &[6, 18, 38], &[6, 30, 54, 42, 18], &[6, 31, 7], &[6, 38, 31], &[7, 19, 39], &[7, 31, 55, 43, 19], &[7, 39, 30], &[8, 10, 34], &[8, 20, 40], &[8, 32, 10], &[8, 34, 58, 44, 20], &[8, 40, 32], &[9, 11, 35], &[9, 21, 41], &[9, 33, 11], &[9, 35, 59, 45, 21], &[9, 41, 33], &[10, 22, 42], &[10, 32, 56, 46, 22], &[10, 42, 34], &[11, 23, 43], &[11, 33, 57, 47, 23], &[11, 43, 35], &[12, 16, 20], &[12, 20, 44], &[12, 36, 16], &[13, 17, 21], &[13, 21, 45], &[13, 37, 17], &[14, 18, 22], &[14, 22, 46], &[14, 38, 18], &[15, 19, 23], &[15, 23, 47], &[15, 39, 19], &[16, 40, 20], &[17, 41, 21], &[18, 42, 22], &[19, 43, 23], &[24, 46, 56], &[24, 56, 48], &[25, 47, 57], &[25, 57, 49], &[26, 44, 58], &[26, 58, 50], &[27, 45, 59], &[27, 59, 51], &[28, 37, 48], &[28, 48, 52], &[29, 36, 49], &[29, 49, 53], &[30, 39, 50], &[30, 50, 54], &[31, 38, 51], &[31, 51, 55], &[32, 40, 52], &[32, 52, 56], &[33, 41, 53], &[33, 53, 57], &[34, 42, 54], &[34, 54, 58], &[35, 43, 55], &[35, 55, 59], &[48, 56, 52], &[49, 57, 53], &[50, 58, 54], &[51, 59, 55]],
    vertex_fans: Some(&[&[0, 2, 1, 4, 3], &[5, 7, 6, 9, 8], &[5, 8, 11, 10, 12], &[0, 3, 14, 13, 15], &[16, 18, 17, 20, 19], &[16, 19, 22, 21, 23], &[24, 26, 25, 28, 27], &[24, 27, 30, 29, 31], &[32, 35, 33, 36, 34], &[37, 40, 38, 41, 39], &[32, 34, 43, 42, 44], &[37, 39, 46, 45, 47], &[1, 2, 50, 48, 49], &[6, 7, 53, 51, 52], &[10, 11, 56, 54, 55], &[13, 14, 59, 57, 58], &[17, 18, 60, 48, 50], &[21, 22, 61, 51, 53], &[25, 26, 62, 54, 56], &[29, 30, 63, 57, 59], &[33, 35, 49, 48, 60], &[38, 40, 52, 51, 61], &[42, 43, 55, 54, 62], &[45, 46, 58, 57, 63], &[5, 12, 64, 65, 7], &[0, 15, 66, 67, 2], &[3, 4, 68, 69, 14], &[8, 9, 70, 71, 11], &[16, 23, 72, 73, 18], &[19, 20, 74, 75, 22], &[24, 31, 76, 77, 26], &[27, 28, 78, 79, 30], &[34, 36, 80, 81, 43], &[39, 41, 82, 83, 46], &[32, 44, 84, 85, 35], &[37, 47, 86, 87, 40], &[2, 74, 20, 17, 50], &[7, 72, 23, 21, 53], &[11, 78, 28, 25, 56], &[14, 76, 31, 29, 59], &[18, 80, 36, 33, 60], &[22, 82, 41, 38, 61], &[26, 84, 44, 42, 62], &[30, 86, 47, 45, 63], &[1, 49, 35, 68, 4], &[6, 52, 40, 70, 9], &[10, 55, 43, 64, 12], &[13, 58, 46, 66, 15], &[7, 65, 88, 73, 72], &[2, 67, 89, 75, 74], &[14, 69, 90, 77, 76], &[11, 71, 91, 79, 78], &[18, 73, 88, 81, 80], &[22, 75, 89, 83, 82], &[26, 77, 90, 85, 84], &[30, 79, 91, 87, 86], &[43, 81, 88, 65, 64], &[46, 83, 89, 67, 66], &[35, 85, 90, 69, 68], &[40, 87, 91, 71, 70]]),
};

pub static BILUNABIROTUNDA: SolidTable = SolidTable {
    verts: &[[0, 2, 0], [0, -2, 0], [1, 0, 3], [1, 0, -3], [-1, 0, 3], [-1, 0, -3], [2, 1, 1], [2, 1, -1], [2, -1, 1], [2, -1, -1], [-2, 1, 1], [-2, 1, -1], [-2, -1, 1], [-2, -1, -1]],
    faces: &[&[0, 6, 7], &[0, 7, 3, 5, 11], &[0, 10, 4, 2, 6], &[0, 11, 10], &[1, 8, 2, 4, 12], &[1, 9, 8], &[1, 12, 13], &[1, 13, 5, 3, 9], &[2, 8, 6], &[3, 7, 9], &[4, 10, 12], &[5, 13, 11], &[6, 8, 9, 7], &[10, 11, 13, 12]],
    vertex_fans: None,
};

pub static ELONGATED_PENTAGONAL_DIPYRAMID: SolidTable = SolidTable {
    verts: &[[0, 1, 4], [2, 3, 4], [4, -5, 4], [-4, -5, 4], [-2, 3, 4], [0, 1, -4], [2, 3, -4], [4, -5, -4], [-4, -5, -4], [-2, 3, -4], [0, 0, 7], [0, 0, -7]],
    faces: &[&[0, 1, 6, 5], &[0, 4, 10], &[0, 5, 9, 4], &[0, 10, 1], &[1, 2, 7, 6], &[1, 10, 2], &[2, 3, 8, 7], &[2, 10, 3], &[3, 4, 9, 8], &[3, 10, 4], &[5, 6, 11], &[5, 11, 9], &[6, 7, 11], &[7, 8, 11], &[8, 9, 11]],
    vertex_fans: None,
};

/// Truncated triakis tetrahedron: each vertex is a point on the
/// edge from a 6-valent triakis-tetrahedron vertex toward a
/// neighbour, at the truncation depth that makes the hexagons
/// regular. Entries are (vertex, neighbour) into the triakis
/// tetrahedron vertex list (itself the dual of the truncated
/// tetrahedron, indexed by face).
pub static TRUNCATED_TRIAKIS_TETRAHEDRON_CUTS: &[[u8; 2]] = &[
    [0, 1], [0, 2], [0, 3], [0, 4], [0, 5], [0, 6], [2, 0], [2, 1], [2, 3], [2, 4], [2, 5], [2, 7], [4, 0], [4, 1], [4, 2], [4, 5], [4, 6], [4, 7], [5, 0], [5, 2], [5, 3], [5, 4], [5, 6], [5, 7]
];

/// The four untruncated 3-valent apex vertices, appended after
/// the cut points in the order listed.
pub static TRUNCATED_TRIAKIS_TETRAHEDRON_APEXES: &[u8] = &[1, 3, 6, 7];

pub static TRUNCATED_TRIAKIS_TETRAHEDRON_FACES: &[&[u8]] = &[&[0, 1, 2, 4, 5, 3], &[0, 3, 12, 13, 24], &[0, 24, 7, 6, 1], &[1, 6, 8, 25, 2], &[2, 25, 20, 18, 4], &[3, 5, 26, 16, 12], &[4, 18, 22, 26, 5], &[6, 7, 9, 11, 10, 8], &[7, 24, 13, 14, 9], &[8, 10, 19, 20, 25], &[9, 14, 17, 27, 11], &[10, 11, 27, 23, 19], &[12, 16, 15, 17, 14, 13], &[15, 16, 26, 22, 21], &[15, 21, 23, 27, 17], &[18, 20, 19, 23, 21, 22]];

// Representative face rings for the biscribed constant solvers
// (one ring per face orbit; plane distance equality defines the
// common insphere).
pub static SNUB_CUBE_SQUARE: &[u8] = &[0, 14, 3, 13];
pub static SNUB_CUBE_TRIANGLE_A: &[u8] = &[0, 4, 8];
pub static SNUB_CUBE_TRIANGLE_B: &[u8] = &[11, 19, 23];
pub static TRUNCATED_ICOSIDODECAHEDRON_SQUARE: &[u8] = &[0, 4, 6, 2];
pub static TRUNCATED_ICOSIDODECAHEDRON_HEXAGON: &[u8] = &[0, 24, 48, 52, 28, 4];
pub static TRUNCATED_ICOSIDODECAHEDRON_DECAGON: &[u8] = &[0, 2, 26, 74, 106, 58, 56, 104, 72, 24];
