use std::ops;

use crate::dims::Dims;

#[derive(Debug, Clone)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        let Dims(x, y) = pos;
        // negative coordinates wrap to huge values and fail the bound check
        let (x, y) = (x as usize, y as usize);

        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        let x = idx % self.width;
        let y = idx / self.width;

        Some(Dims(x as i32, y as i32))
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buf.iter_mut()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, width: usize, height: usize) -> Self {
        Self {
            buf: vec![item.clone(); width * height],
            width,
            height,
        }
    }

    /// Returns `None` if either dimension is non-positive.
    pub fn new_dims(item: T, size: Dims) -> Option<Self> {
        if !size.all_positive() {
            return None;
        }

        Some(Self::new(item, size.0 as usize, size.1 as usize))
    }

    pub fn fill(&mut self, value: T) {
        self.buf.fill(value);
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.dim_to_idx(index)
            .and_then(|i| self.buf.get(i))
            .expect("Index out of bounds")
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.dim_to_idx(index)
            .and_then(|i| self.buf.get_mut(i))
            .expect("Index out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::{Array2D, Dims};

    #[test]
    fn index_mapping_roundtrip() {
        let array = Array2D::new(0u8, 4, 3);

        for pos in array.iter_pos() {
            let idx = array.dim_to_idx(pos).unwrap();
            assert_eq!(array.idx_to_dim(idx), Some(pos));
        }
    }

    #[test]
    fn out_of_bounds_is_none() {
        let array = Array2D::new(0u8, 4, 3);

        assert!(array.get(Dims(4, 0)).is_none());
        assert!(array.get(Dims(0, 3)).is_none());
        assert!(array.get(Dims(-1, 0)).is_none());
        assert!(array.get(Dims(0, -1)).is_none());
    }

    #[test]
    fn new_dims_rejects_non_positive() {
        assert!(Array2D::new_dims(0u8, Dims(0, 3)).is_none());
        assert!(Array2D::new_dims(0u8, Dims(3, -1)).is_none());
        assert!(Array2D::new_dims(0u8, Dims(3, 3)).is_some());
    }
}
