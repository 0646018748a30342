//! Fixed-size transfer matrix with overflow tracked per entry.
//!
//! Entry `(i, j)` of a transfer matrix counts the length-1 walks from `i` to
//! `j`. Powers accumulate longer walks: `M^k[i][j]` is the number of walks of
//! length `k` from `i` to `j`.
//!
//! Entries are [`CheckedCount`]s: `None` marks an entry whose true value does
//! not fit in [`Count`]. Counts are never negative, so an overflowed factor
//! only poisons a product whose other factor is non-zero, and `None` is exact:
//! an entry is `None` if and only if its true value exceeds `Count::MAX`.

use std::ops::Index;

use tracing::trace;

/// A walk count.
pub type Count = u128;

/// A walk count, or `None` once it no longer fits in [`Count`].
pub type CheckedCount = Option<Count>;

/// Walk counts per node for one hop length.
pub type HopCounts<const N: usize> = [Count; N];

/// Walk counts per node for one hop length, with overflow tracked per node.
pub type CheckedHopCounts<const N: usize> = [CheckedCount; N];

/// `a × b`, exact whenever either side is a known zero.
fn checked_product(a: CheckedCount, b: CheckedCount) -> CheckedCount {
    match (a, b) {
        (Some(0), _) | (_, Some(0)) => Some(0),
        (Some(a), Some(b)) => a.checked_mul(b),
        _ => None,
    }
}

/// Sum of non-negative counts; `None` as soon as any term or partial sum is.
fn checked_sum(terms: impl IntoIterator<Item = CheckedCount>) -> CheckedCount {
    terms
        .into_iter()
        .try_fold(0, |sum: Count, term| sum.checked_add(term?))
}

/// A dense `N×N` matrix of walk counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<const N: usize> {
    rows: [[CheckedCount; N]; N],
}

impl<const N: usize> Matrix<N> {
    /// Creates a matrix from rows of exact counts.
    pub fn from_rows(rows: [[Count; N]; N]) -> Self {
        Self {
            rows: rows.map(|row| row.map(Some)),
        }
    }

    /// The all-zero matrix.
    pub const fn zero() -> Self {
        Self {
            rows: [[Some(0); N]; N],
        }
    }

    /// The identity matrix, i.e. `M^0` for any `M`.
    pub fn identity() -> Self {
        let mut matrix = Self::zero();
        for (i, row) in matrix.rows.iter_mut().enumerate() {
            row[i] = Some(1);
        }
        matrix
    }

    /// Returns true if `self[(i, j)] == self[(j, i)]` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..N).all(|i| (0..i).all(|j| self.rows[i][j] == self.rows[j][i]))
    }

    /// Standard triple-loop product `self × rhs`.
    pub fn checked_mul(&self, rhs: &Self) -> Self {
        let mut product = Self::zero();
        for (row, out) in self.rows.iter().zip(product.rows.iter_mut()) {
            for (col, slot) in out.iter_mut().enumerate() {
                *slot = checked_sum(
                    row.iter()
                        .zip(rhs.rows.iter())
                        .map(|(&a, rhs_row)| checked_product(a, rhs_row[col])),
                );
            }
        }
        product
    }

    /// Matrix-vector product `self × vector`.
    pub fn checked_mul_vector(&self, vector: &CheckedHopCounts<N>) -> CheckedHopCounts<N> {
        self.rows.each_ref().map(|row| {
            checked_sum(
                row.iter()
                    .zip(vector.iter())
                    .map(|(&weight, &value)| checked_product(weight, value)),
            )
        })
    }

    /// Raises the matrix to `exponent` by repeated squaring.
    ///
    /// Bits of `exponent` are consumed least-significant first. `power_of_2`
    /// holds `M^(2^bit)` for the current bit and is multiplied into the
    /// accumulator whenever that bit is set. It is only squared while higher
    /// bits remain, so no product beyond `M^exponent` is ever formed and an
    /// exponent of zero returns the identity without multiplying.
    pub fn checked_pow(&self, exponent: u32) -> Self {
        let mut accum = Self::identity();
        let mut power_of_2 = self.clone();
        let mut remaining = exponent;
        let mut bit = 0u32;

        while remaining != 0 {
            if remaining & 1 == 1 {
                trace!(bit, "multiplying power into accumulator");
                accum = accum.checked_mul(&power_of_2);
            }
            remaining >>= 1;
            bit += 1;
            if remaining != 0 {
                power_of_2 = power_of_2.checked_mul(&power_of_2);
            }
        }

        accum
    }
}

impl<const N: usize> Index<(usize, usize)> for Matrix<N> {
    type Output = CheckedCount;

    fn index(&self, (row, col): (usize, usize)) -> &CheckedCount {
        &self.rows[row][col]
    }
}
