pub mod array3d;
pub mod error;
pub mod report;
pub mod walk;

pub use array3d::{Array3D, Coord};
pub use error::{Error, Result};
pub use report::write_report;
pub use walk::{walk, Location, LocationMode, WalkConfig, WalkRecord, Walker};

pub const D0: usize = 2;
pub const D1: usize = 3;
pub const D2: usize = 4;

pub type FixedArray3D = Array3D<i32>;

const LITERAL: [[[i32; D2]; D1]; D0] = [
    [[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12]],
    [[13, 14, 15, 16], [17, 18, 19, 20], [21, 22, 23, 24]],
];

/// The 2x3x4 array holding 1..=24 in row-major order
pub fn sample() -> Result<FixedArray3D> {
    let data = LITERAL.iter().flatten().flatten().copied().collect();
    Array3D::from_array(D0, D1, D2, data)
}
