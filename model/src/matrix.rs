/// A dense, row-major matrix.
///
/// Used for the instance's processing-time matrix and reused by the
/// `solution` crate for the completion-time buffer — both are hot,
/// fixed-shape N×M integer matrices, so a flat `Vec` with manual stride
/// indexing avoids the per-row allocation a `Vec<Vec<T>>` would cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }
}

impl<T> Matrix<T> {
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let n = rows.len();
        let m = rows.first().map_or(0, |r| r.len());
        let data = rows.into_iter().flatten().collect();
        Matrix {
            rows: n,
            cols: m,
            data,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> &T {
        &self.data[i * self.cols + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.data[i * self.cols + j] = value;
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }
}
