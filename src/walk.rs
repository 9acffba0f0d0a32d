use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::array3d::{Array3D, Coord};

/// How a record reports where its element lives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LocationMode {
    /// Memory address of the element
    #[default]
    Address,
    /// Linear offset into the backing storage
    Offset,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkConfig {
    pub location: LocationMode,
}

impl WalkConfig {
    pub fn with_location(mut self, location: LocationMode) -> Self {
        self.location = location;
        self
    }
}

/// Only ever formatted, never dereferenced.
pub enum Location<T> {
    Address(*const T),
    Offset(usize),
}

// Manual impls: a pointer or an offset is copyable and comparable whatever `T` is.
impl<T> Clone for Location<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Location<T> {}

impl<T> PartialEq for Location<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Location::Address(a), Location::Address(b)) => std::ptr::eq(*a, *b),
            (Location::Offset(a), Location::Offset(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> Eq for Location<T> {}

impl<T> fmt::Debug for Location<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Address(ptr) => f.debug_tuple("Address").field(ptr).finish(),
            Location::Offset(offset) => f.debug_tuple("Offset").field(offset).finish(),
        }
    }
}

impl<T> fmt::Display for Location<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Address(ptr) => write!(f, "{:p}", *ptr),
            Location::Offset(offset) => write!(f, "{}", offset),
        }
    }
}

#[derive(Debug)]
pub struct WalkRecord<'a, T> {
    pub index: usize,
    pub coords: Coord,
    pub location: Location<T>,
    pub value: &'a T,
}

impl<'a, T> Clone for WalkRecord<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for WalkRecord<'a, T> {}

/// Row-major traversal of an [`Array3D`]. Coordinates advance as three nested loops
/// (k innermost), and each element is read back through the flat view.
pub struct Walker<'a, T> {
    array: &'a Array3D<T>,
    config: WalkConfig,
    pos: Coord,
    remaining: usize,
}

pub fn walk<T>(array: &Array3D<T>, config: WalkConfig) -> Walker<'_, T> {
    debug!(dims = ?array.dims(), len = array.len(), mode = ?config.location, "starting walk");
    Walker {
        array,
        config,
        pos: (0, 0, 0),
        remaining: array.len(),
    }
}

impl<'a, T> Walker<'a, T> {
    fn advance(&mut self) {
        let (d0, d1, d2) = self.array.dims();
        let (i, j, k) = &mut self.pos;
        *k += 1;
        if *k == d2 {
            *k = 0;
            *j += 1;
            if *j == d1 {
                *j = 0;
                *i += 1;
            }
        }
        debug_assert!(self.remaining == 0 || *i < d0);
    }
}

impl<'a, T> Iterator for Walker<'a, T> {
    type Item = WalkRecord<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let array: &'a Array3D<T> = self.array;
        let (i, j, k) = self.pos;
        let (_, d1, d2) = array.dims();
        let index = i * d1 * d2 + j * d2 + k;
        let value = &array[index];
        debug_assert!(std::ptr::eq(value, &array[self.pos]));

        let location = match self.config.location {
            LocationMode::Address => Location::Address(value as *const T),
            LocationMode::Offset => Location::Offset(index),
        };
        trace!(index, coords = ?self.pos, %location, "visit");

        let record = WalkRecord {
            index,
            coords: self.pos,
            location,
            value,
        };

        self.remaining -= 1;
        if self.remaining == 0 {
            debug!(len = self.array.len(), "walk finished");
        } else {
            self.advance();
        }
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Walker<'a, T> {}

impl<'a, T> FusedIterator for Walker<'a, T> {}
