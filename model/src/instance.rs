use crate::{Matrix, PfspError};

/// A PFSP-WT problem instance.
///
/// Immutable once built: `n` jobs must pass through `m` machines in the
/// same order on every machine. `p[i, j]` is the processing time of job
/// `i` on machine `j`; `d[i]` is job `i`'s due date; `w[i]` is its
/// tardiness weight. Safe to share across concurrent optimizers — nothing
/// here is ever mutated after construction.
#[derive(Debug, Clone)]
pub struct Instance {
    n: usize,
    m: usize,
    p: Matrix<i64>,
    d: Vec<i64>,
    w: Vec<f64>,
}

impl Instance {
    /// Builds an instance, validating the invariants spelled out in the
    /// data model: non-negative processing times, matching dimensions,
    /// and at least one job and one machine.
    pub fn new(p: Vec<Vec<i64>>, d: Vec<i64>, w: Vec<f64>) -> Result<Instance, PfspError> {
        let n = p.len();
        if n == 0 {
            return Err(PfspError::Dimension {
                reason: "instance has zero jobs".to_string(),
            });
        }
        let m = p[0].len();
        if m == 0 {
            return Err(PfspError::Dimension {
                reason: "instance has zero machines".to_string(),
            });
        }
        if p.iter().any(|row| row.len() != m) {
            return Err(PfspError::Dimension {
                reason: "processing-time rows have inconsistent lengths".to_string(),
            });
        }
        if p.iter().flatten().any(|&t| t < 0) {
            return Err(PfspError::Dimension {
                reason: "processing times must be non-negative".to_string(),
            });
        }
        if d.len() != n {
            return Err(PfspError::Dimension {
                reason: format!("expected {n} due dates, got {}", d.len()),
            });
        }
        if w.len() != n {
            return Err(PfspError::Dimension {
                reason: format!("expected {n} weights, got {}", w.len()),
            });
        }
        if w.iter().any(|x| !x.is_finite() || *x < 0.0) {
            return Err(PfspError::Dimension {
                reason: "weights must be finite and non-negative".to_string(),
            });
        }
        Ok(Instance {
            n,
            m,
            p: Matrix::from_rows(p),
            d,
            w,
        })
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn m(&self) -> usize {
        self.m
    }

    #[inline]
    pub fn processing_time(&self, job: usize, machine: usize) -> i64 {
        *self.p.get(job, machine)
    }

    #[inline]
    pub fn processing_times(&self) -> &Matrix<i64> {
        &self.p
    }

    #[inline]
    pub fn due_date(&self, job: usize) -> i64 {
        self.d[job]
    }

    #[inline]
    pub fn due_dates(&self) -> &[i64] {
        &self.d
    }

    #[inline]
    pub fn weight(&self, job: usize) -> f64 {
        self.w[job]
    }

    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_processing_times() {
        let p = vec![vec![1, 2], vec![1]];
        let err = Instance::new(p, vec![1, 1], vec![1.0, 1.0]).unwrap_err();
        assert!(matches!(err, PfspError::Dimension { .. }));
    }

    #[test]
    fn rejects_negative_processing_time() {
        let p = vec![vec![-1, 2], vec![1, 2]];
        let err = Instance::new(p, vec![1, 1], vec![1.0, 1.0]).unwrap_err();
        assert!(matches!(err, PfspError::Dimension { .. }));
    }

    #[test]
    fn accepts_well_formed_instance() {
        let p = vec![vec![3, 2], vec![2, 4], vec![1, 3]];
        let d = vec![5, 9, 12];
        let w = vec![1.0, 1.0, 1.0];
        let instance = Instance::new(p, d, w).unwrap();
        assert_eq!(instance.n(), 3);
        assert_eq!(instance.m(), 2);
        assert_eq!(instance.processing_time(0, 0), 3);
    }
}
