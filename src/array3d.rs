use crate::error::{Error, Result};

pub type Coord = (usize, usize, usize);

/// Contiguous, row-major three dimensional array. The last coordinate varies fastest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Array3D<T> {
    d0: usize,
    d1: usize,
    d2: usize,
    data: Vec<T>,
}

/// Element count of a shape, or `ShapeOverflow` if it does not fit in a `usize`.
fn checked_len((d0, d1, d2): Coord) -> Result<usize> {
    d0.checked_mul(d1)
        .and_then(|n| n.checked_mul(d2))
        .ok_or(Error::ShapeOverflow { dims: (d0, d1, d2) })
}

impl<T> Array3D<T> {
    pub fn from_array(d0: usize, d1: usize, d2: usize, data: Vec<T>) -> Result<Self> {
        let expected = checked_len((d0, d1, d2))?;
        if data.len() != expected {
            return Err(Error::ShapeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { d0, d1, d2, data })
    }

    pub fn new(d0: usize, d1: usize, d2: usize) -> Result<Self>
    where
        T: Default + Copy,
    {
        let len = checked_len((d0, d1, d2))?;
        Ok(Self {
            d0,
            d1,
            d2,
            data: vec![T::default(); len],
        })
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn dims(&self) -> Coord {
        (self.d0, self.d1, self.d2)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn calc_index(&self, (i, j, k): Coord) -> usize {
        debug_assert!(i < self.d0);
        debug_assert!(j < self.d1);
        debug_assert!(k < self.d2);
        i * self.d1 * self.d2 + j * self.d2 + k
    }

    fn in_bounds(&self, (i, j, k): Coord) -> bool {
        i < self.d0 && j < self.d1 && k < self.d2
    }

    /// Row-major linear index of `pos`
    pub fn linear_index(&self, pos: Coord) -> Result<usize> {
        if !self.in_bounds(pos) {
            return Err(Error::CoordOutOfRange {
                coords: pos,
                dims: self.dims(),
            });
        }
        Ok(self.calc_index(pos))
    }

    /// Inverse of [`Array3D::linear_index`]
    pub fn coords(&self, index: usize) -> Result<Coord> {
        if index >= self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        let plane = self.d1 * self.d2;
        Ok((index / plane, (index % plane) / self.d2, index % self.d2))
    }

    pub fn get(&self, pos: Coord) -> Option<&T> {
        self.in_bounds(pos).then(|| &self.data[self.calc_index(pos)])
    }

    pub fn get_flat(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }
}

impl<T> std::ops::Index<Coord> for Array3D<T> {
    type Output = T;
    #[track_caller]
    fn index(&self, pos: Coord) -> &T {
        match self.linear_index(pos) {
            Ok(idx) => &self.data[idx],
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> std::ops::Index<usize> for Array3D<T> {
    type Output = T;
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}
