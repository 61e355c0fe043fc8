#![allow(dead_code)]

/// Outline of a traced blob, 88 vertices.
pub const BLOB_CONTOUR: [(i32, i32); 88] = [
    (53, 19), (52, 20), (49, 20), (48, 21), (47, 21), (46, 22), (45, 22), (44, 23),
    (43, 23), (42, 24), (41, 24), (39, 26), (38, 26), (34, 30), (76, 30), (77, 31),
    (79, 31), (80, 32), (81, 32), (83, 34), (84, 34), (86, 36), (86, 37), (87, 38),
    (87, 39), (88, 40), (88, 47), (86, 49), (86, 50), (83, 53), (82, 53), (81, 54),
    (81, 55), (82, 55), (84, 57), (84, 58), (85, 59), (85, 60), (86, 61), (86, 63),
    (87, 64), (87, 65), (88, 66), (93, 66), (94, 65), (94, 64), (95, 63), (95, 60),
    (96, 59), (99, 59), (99, 53), (98, 52), (97, 52), (96, 51), (95, 51), (94, 50),
    (93, 50), (90, 47), (90, 46), (91, 45), (91, 44), (92, 43), (92, 42), (93, 41),
    (93, 39), (94, 38), (94, 36), (91, 33), (91, 32), (85, 26), (84, 26), (82, 24),
    (81, 24), (80, 23), (79, 23), (78, 22), (77, 22), (76, 21), (75, 21), (74, 20),
    (71, 20), (70, 19), (69, 19), (67, 21), (66, 21), (62, 25), (60, 25), (54, 19),
];

pub fn unit_square() -> Vec<(f64, f64)> {
    vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
}

pub fn translate(points: &[(f64, f64)], dx: f64, dy: f64) -> Vec<(f64, f64)> {
    points.iter().map(|&(x, y)| (x + dx, y + dy)).collect()
}

pub fn scale(points: &[(f64, f64)], s: f64) -> Vec<(f64, f64)> {
    points.iter().map(|&(x, y)| (x * s, y * s)).collect()
}

pub fn rotate(points: &[(f64, f64)], angle: f64) -> Vec<(f64, f64)> {
    let (sin, cos) = angle.sin_cos();
    points.iter().map(|&(x, y)| (cos * x - sin * y, sin * x + cos * y)).collect()
}
