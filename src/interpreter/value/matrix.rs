use std::fmt::Display;

use crate::{
    error::{MathError, MathResult},
    interpreter::value::scalar::Scalar,
    util::settings::{MAX_MATRIX_COLS, MAX_MATRIX_ROWS},
};

/// A dense, non-empty, rectangular grid of scalars.
///
/// Matrices are immutable values: every operation returns a new matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    data: Vec<Vec<Scalar>>,
}

impl Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells = row.iter()
                           .map(ToString::to_string)
                           .collect::<Vec<_>>()
                           .join(" , ");
            write!(f, "[ {cells} ]")?;
        }
        Ok(())
    }
}

impl Matrix {
    /// Builds a matrix from its rows.
    ///
    /// # Errors
    /// Returns `MathError::DimensionMismatch` if the grid is empty, if rows
    /// have different lengths, or if it exceeds the maximum dimensions.
    ///
    /// # Example
    /// ```
    /// use computor::interpreter::value::{matrix::Matrix, scalar::Scalar};
    ///
    /// let m = Matrix::new(vec![vec![Scalar::from(1), Scalar::from(2)],
    ///                          vec![Scalar::from(3), Scalar::from(4)]]).unwrap();
    /// assert_eq!(m.rows(), 2);
    /// assert_eq!(m.cols(), 2);
    ///
    /// assert!(Matrix::new(vec![vec![Scalar::from(1)], vec![]]).is_err());
    /// ```
    pub fn new(data: Vec<Vec<Scalar>>) -> MathResult<Self> {
        Self::with_limits(data, MAX_MATRIX_ROWS, MAX_MATRIX_COLS)
    }

    /// Builds a matrix, checking it against explicit dimension bounds.
    ///
    /// # Errors
    /// See [`Matrix::new`].
    pub fn with_limits(data: Vec<Vec<Scalar>>,
                       max_rows: usize,
                       max_cols: usize)
                       -> MathResult<Self> {
        let cols = data.first().map_or(0, Vec::len);
        if data.is_empty() || cols == 0 {
            return Err(MathError::DimensionMismatch { details: "a matrix needs at least one row and one column".to_string(), });
        }
        if let Some((i, row)) = data.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(MathError::DimensionMismatch { details: format!("row {} has {} elements, expected {cols}",
                                                                       i + 1,
                                                                       row.len()), });
        }
        if data.len() > max_rows || cols > max_cols {
            return Err(MathError::DimensionMismatch { details: format!("{}x{cols} exceeds the maximum of {max_rows}x{max_cols}",
                                                                       data.len()), });
        }

        Ok(Self { data })
    }

    /// The `n × n` identity matrix.
    ///
    /// # Errors
    /// Returns `MathError::DimensionMismatch` for `n == 0` or an `n` above
    /// the maximum.
    pub fn identity(n: usize) -> MathResult<Self> {
        Self::new((0..n).map(|i| {
                            (0..n).map(|j| if i == j { Scalar::one() } else { Scalar::zero() })
                                  .collect()
                        })
                        .collect())
    }

    /// A `rows × cols` matrix of zeros.
    ///
    /// # Errors
    /// Returns `MathError::DimensionMismatch` for empty or oversized shapes.
    pub fn zeros(rows: usize, cols: usize) -> MathResult<Self> {
        Self::new(vec![vec![Scalar::zero(); cols]; rows])
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.data[0].len()
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Returns the entry at `(row, col)`, zero-based.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Scalar> {
        self.data.get(row).and_then(|r| r.get(col))
    }

    /// Iterates over the rows.
    pub fn row_iter(&self) -> impl Iterator<Item = &[Scalar]> {
        self.data.iter().map(Vec::as_slice)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().flatten().all(Scalar::is_zero)
    }

    /// Returns `true` for a square identity matrix.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.is_square()
        && self.data.iter().enumerate().all(|(i, row)| {
                                             row.iter().enumerate().all(|(j, v)| {
                                                                       if i == j {
                                                                           v.is_one()
                                                                       } else {
                                                                           v.is_zero()
                                                                       }
                                                                   })
                                         })
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        let data = (0..self.cols()).map(|j| self.data.iter().map(|row| row[j].clone()).collect())
                                   .collect();
        Self { data }
    }

    fn shape(&self) -> String {
        format!("{}x{}", self.rows(), self.cols())
    }

    fn ensure_same_shape(&self, other: &Self, op: &str) -> MathResult<()> {
        if self.rows() != other.rows() || self.cols() != other.cols() {
            return Err(MathError::DimensionMismatch { details: format!("cannot apply '{op}' to {} and {}",
                                                                       self.shape(),
                                                                       other.shape()), });
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, f: impl Fn(&Scalar, &Scalar) -> Scalar) -> Self {
        let data = self.data
                       .iter()
                       .zip(&other.data)
                       .map(|(a, b)| a.iter().zip(b).map(|(x, y)| f(x, y)).collect())
                       .collect();
        Self { data }
    }

    fn map(&self, f: impl Fn(&Scalar) -> Scalar) -> Self {
        Self { data: self.data
                         .iter()
                         .map(|row| row.iter().map(&f).collect())
                         .collect(), }
    }

    fn try_map(&self, f: impl Fn(&Scalar) -> MathResult<Scalar>) -> MathResult<Self> {
        let data = self.data
                       .iter()
                       .map(|row| row.iter().map(&f).collect::<MathResult<Vec<_>>>())
                       .collect::<MathResult<Vec<_>>>()?;
        Ok(Self { data })
    }

    /// Element-wise sum of two matrices of the same shape.
    ///
    /// # Errors
    /// Returns `MathError::DimensionMismatch` if the shapes differ.
    pub fn add(&self, other: &Self) -> MathResult<Self> {
        self.ensure_same_shape(other, "+")?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Element-wise difference of two matrices of the same shape.
    ///
    /// # Errors
    /// Returns `MathError::DimensionMismatch` if the shapes differ.
    pub fn sub(&self, other: &Self) -> MathResult<Self> {
        self.ensure_same_shape(other, "-")?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Element-wise (Hadamard) product; `*` between two matrices.
    ///
    /// # Errors
    /// Returns `MathError::DimensionMismatch` if the shapes differ.
    pub fn mul_elementwise(&self, other: &Self) -> MathResult<Self> {
        self.ensure_same_shape(other, "*")?;
        Ok(self.zip_with(other, |a, b| a * b))
    }

    /// Multiplies every entry by a scalar.
    #[must_use]
    pub fn scale(&self, factor: &Scalar) -> Self {
        self.map(|v| v * factor)
    }

    /// Divides every entry by a non-zero scalar.
    ///
    /// # Errors
    /// Returns `MathError::DivisionByZero` if `divisor` is zero.
    pub fn div_scalar(&self, divisor: &Scalar) -> MathResult<Self> {
        if divisor.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        self.try_map(|v| v.checked_div(divisor))
    }

    /// Takes every entry modulo a non-zero scalar.
    ///
    /// # Errors
    /// - `MathError::DivisionByZero` if `divisor` is zero.
    /// - `MathError::InvalidOperation` if an entry or the divisor is not
    ///   real.
    pub fn rem_scalar(&self, divisor: &Scalar) -> MathResult<Self> {
        if divisor.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        self.try_map(|v| v.checked_rem(divisor))
    }

    /// True matrix product; the `**` operator.
    ///
    /// # Errors
    /// Returns `MathError::DimensionMismatch` if the left column count is not
    /// the right row count.
    ///
    /// # Example
    /// ```
    /// use computor::interpreter::value::{matrix::Matrix, scalar::Scalar};
    ///
    /// let a = Matrix::new(vec![vec![Scalar::from(1), Scalar::from(2)]]).unwrap();
    /// let b = Matrix::new(vec![vec![Scalar::from(3)], vec![Scalar::from(4)]]).unwrap();
    /// let p = a.matmul(&b).unwrap();
    /// assert_eq!(p.get(0, 0), Some(&Scalar::from(11)));
    /// assert!(b.matmul(&b).is_err());
    /// ```
    pub fn matmul(&self, other: &Self) -> MathResult<Self> {
        if self.cols() != other.rows() {
            return Err(MathError::DimensionMismatch { details: format!("cannot multiply {} by {}",
                                                                       self.shape(),
                                                                       other.shape()), });
        }

        let data = self.data
                       .iter()
                       .map(|row| {
                           (0..other.cols()).map(|j| {
                                                row.iter()
                                                   .zip(&other.data)
                                                   .fold(Scalar::zero(), |acc, (a, other_row)| {
                                                       &acc + &(a * &other_row[j])
                                                   })
                                            })
                                            .collect()
                       })
                       .collect();

        Ok(Self { data })
    }

    fn ensure_square(&self, what: &str) -> MathResult<()> {
        if !self.is_square() {
            return Err(MathError::DimensionMismatch { details: format!("{what} requires a square matrix, got {}",
                                                                       self.shape()), });
        }
        Ok(())
    }

    /// Raises a square matrix to a non-negative integer power by repeated
    /// squaring. `A^0` is the identity.
    ///
    /// # Errors
    /// Returns `MathError::DimensionMismatch` if the matrix is not square.
    pub fn pow(&self, exponent: u32) -> MathResult<Self> {
        self.ensure_square("a matrix power")?;

        let mut result = Self::identity(self.rows())?;
        let mut base = self.clone();
        let mut n = exponent;

        while n > 0 {
            if n % 2 == 1 {
                result = result.matmul(&base)?;
            }
            n /= 2;
            if n > 0 {
                base = base.matmul(&base)?;
            }
        }

        Ok(result)
    }

    /// The minor obtained by deleting `row` and `col`.
    fn minor(&self, row: usize, col: usize) -> Self {
        let data = self.data
                       .iter()
                       .enumerate()
                       .filter(|(i, _)| *i != row)
                       .map(|(_, r)| {
                           r.iter()
                            .enumerate()
                            .filter(|(j, _)| *j != col)
                            .map(|(_, v)| v.clone())
                            .collect()
                       })
                       .collect();
        Self { data }
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// # Errors
    /// Returns `MathError::DimensionMismatch` if the matrix is not square.
    ///
    /// # Example
    /// ```
    /// use computor::interpreter::value::{matrix::Matrix, scalar::Scalar};
    ///
    /// let m = Matrix::new(vec![vec![Scalar::from(1), Scalar::from(2)],
    ///                          vec![Scalar::from(3), Scalar::from(4)]]).unwrap();
    /// assert_eq!(m.determinant().unwrap(), Scalar::from(-2));
    /// ```
    pub fn determinant(&self) -> MathResult<Scalar> {
        self.ensure_square("a determinant")?;

        let d = &self.data;
        match self.rows() {
            1 => Ok(d[0][0].clone()),
            2 => Ok(&(&d[0][0] * &d[1][1]) - &(&d[0][1] * &d[1][0])),
            n => {
                let mut det = Scalar::zero();
                for j in 0..n {
                    if d[0][j].is_zero() {
                        continue;
                    }
                    let term = &d[0][j] * &self.minor(0, j).determinant()?;
                    det = if j % 2 == 0 { &det + &term } else { &det - &term };
                }
                Ok(det)
            },
        }
    }

    /// Inverse by Gauss–Jordan elimination on `[A | I]` with partial
    /// pivoting.
    ///
    /// The pivot of each column is the remaining candidate of largest
    /// magnitude. Arithmetic is exact, so the matrix is singular exactly when
    /// some column has no non-zero candidate.
    ///
    /// # Errors
    /// - `MathError::DimensionMismatch` if the matrix is not square.
    /// - `MathError::SingularMatrix` if it has no inverse.
    pub fn inverse(&self) -> MathResult<Self> {
        self.ensure_square("an inverse")?;

        let n = self.rows();
        let mut aug: Vec<Vec<Scalar>> =
            self.data
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    let mut r = row.clone();
                    r.extend((0..n).map(|j| if i == j { Scalar::one() } else { Scalar::zero() }));
                    r
                })
                .collect();

        for col in 0..n {
            let pivot_row = (col..n).max_by(|&a, &b| {
                                        aug[a][col].magnitude_squared()
                                                   .cmp(&aug[b][col].magnitude_squared())
                                    })
                                    .ok_or(MathError::SingularMatrix)?;
            if aug[pivot_row][col].is_zero() {
                return Err(MathError::SingularMatrix);
            }
            aug.swap(col, pivot_row);

            let pivot = aug[col][col].clone();
            for v in &mut aug[col] {
                *v = v.checked_div(&pivot)?;
            }

            let pivot_values = aug[col].clone();
            for (r, row) in aug.iter_mut().enumerate() {
                if r == col || row[col].is_zero() {
                    continue;
                }
                let factor = row[col].clone();
                for (v, p) in row.iter_mut().zip(&pivot_values) {
                    *v = &*v - &(&factor * p);
                }
            }
        }

        let data = aug.into_iter()
                      .map(|row| row.into_iter().skip(n).map(Scalar::simplify).collect())
                      .collect();
        Ok(Self { data })
    }
}

impl std::ops::Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        self.map(|v| -v)
    }
}
