use model::{Instance, Matrix};

/// Scratch buffer for the flow-shop completion-time recurrence.
///
/// `C[i, j]` is the completion time of the job in position `i` (under
/// whichever permutation was last passed to [`CompletionMatrix::fill`]) on
/// machine `j`. Derived state, not persisted: every neighborhood move and
/// every objective evaluation reuses one of these buffers rather than
/// allocating a fresh matrix.
#[derive(Debug, Clone)]
pub struct CompletionMatrix {
    c: Matrix<i64>,
}

impl CompletionMatrix {
    pub fn new(n: usize, m: usize) -> CompletionMatrix {
        CompletionMatrix {
            c: Matrix::filled(n, m, 0),
        }
    }

    /// Fills `C` in place from `instance.p`, reordered by `order`. `order`
    /// need not be a full permutation of every job in the instance — NEH
    /// evaluates partial sequences while it is still being built — so this
    /// takes a plain job-id slice rather than a validated [`Permutation`].
    /// `O(len(order) * m)`, no allocation.
    pub fn fill(&mut self, instance: &Instance, order: &[usize]) {
        let n = order.len();
        let m = instance.m();
        for i in 0..n {
            let job = order[i];
            for j in 0..m {
                let p_ij = instance.processing_time(job, j);
                let value = match (i, j) {
                    (0, 0) => p_ij,
                    (_, 0) => *self.c.get(i - 1, 0) + p_ij,
                    (0, _) => *self.c.get(0, j - 1) + p_ij,
                    (_, _) => std::cmp::max(*self.c.get(i - 1, j), *self.c.get(i, j - 1)) + p_ij,
                };
                self.c.set(i, j, value);
            }
        }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i64 {
        *self.c.get(i, j)
    }

    /// `C[n-1, m-1]`, the completion time of the last job on the last
    /// machine — the makespan of whichever permutation was last filled.
    #[inline]
    pub fn makespan(&self) -> i64 {
        self.get(self.c.rows() - 1, self.c.cols() - 1)
    }
}
