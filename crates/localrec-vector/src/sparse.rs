/// Sparse `f64` vector: `(column, weight)` pairs sorted by column, no zeros.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn zero() -> Self { Self::default() }

    /// Build from unordered entries. Repeated columns are summed and zero
    /// weights dropped.
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_unstable_by_key(|&(col, _)| col);
        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());
        for (col, w) in entries {
            match merged.last_mut() {
                Some((last, acc)) if *last == col => *acc += w,
                _ => merged.push((col, w)),
            }
        }
        merged.retain(|&(_, w)| w != 0.0);
        Self { entries: merged }
    }

    pub fn is_zero(&self) -> bool { self.entries.is_empty() }

    pub fn nnz(&self) -> usize { self.entries.len() }

    pub fn get(&self, col: usize) -> f64 {
        self.entries
            .binary_search_by_key(&col, |&(c, _)| c)
            .map(|i| self.entries[i].1)
            .unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ { self.entries.iter().copied() }

    pub fn norm(&self) -> f64 { self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt() }

    /// Scale to unit Euclidean length. The zero vector is returned unchanged.
    pub fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
        self
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ci, wi) = self.entries[i];
            let (cj, wj) = other.entries[j];
            match ci.cmp(&cj) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wi * wj;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}
