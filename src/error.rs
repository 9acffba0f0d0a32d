pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Shape mismatch: expected {expected} elements, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("Shape {dims:?} has more elements than fit in a usize")]
    ShapeOverflow { dims: (usize, usize, usize) },

    #[error("Index out of range: the len is {len} but the index is {index}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Coordinate {coords:?} out of range for dimensions {dims:?}")]
    CoordOutOfRange {
        coords: (usize, usize, usize),
        dims: (usize, usize, usize),
    },
}
