//! Linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Linear interpolation between data points.
///
/// A single knot is allowed: it answers its own abscissa and, with
/// [`with_flat_below`](Self::with_flat_below), everything to its left.
///
/// # Example
///
/// ```rust
/// use bondcurve_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let days = vec![90.0, 181.0, 365.0];
/// let rates = vec![0.010, 0.015, 0.020];
///
/// let interp = LinearInterpolator::new(days, rates).unwrap().with_flat_below();
/// assert_eq!(interp.interpolate(10.0).unwrap(), 0.010);
/// assert!(interp.interpolate(400.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    flat_below: bool,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no points, if lengths differ, or if
    /// `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.is_empty() {
            return Err(MathError::insufficient_data(1, 0));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.windows(2).any(|w| w[1] <= w[0]) {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }

        Ok(Self {
            xs,
            ys,
            flat_below: false,
        })
    }

    /// Holds the first value constant for queries below the data range.
    #[must_use]
    pub fn with_flat_below(mut self) -> Self {
        self.flat_below = true;
        self
    }

    /// Returns the x coordinates.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the y coordinates.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    fn out_of_range(&self, x: f64) -> MathError {
        MathError::ExtrapolationNotAllowed {
            x,
            min: self.min_x(),
            max: self.max_x(),
        }
    }

    /// Finds the index i such that xs[i] <= x < xs[i+1].
    fn find_segment(&self, x: f64) -> usize {
        let upper = self.xs.partition_point(|&probe| probe <= x);
        upper.saturating_sub(1).min(self.xs.len() - 2)
    }

    /// Resolves queries that do not need a segment. `None` means interpolate.
    fn boundary_value(&self, x: f64) -> MathResult<Option<f64>> {
        if x.is_nan() {
            return Err(MathError::invalid_input("query point is NaN"));
        }
        if x < self.min_x() {
            return if self.flat_below {
                Ok(Some(self.ys[0]))
            } else {
                Err(self.out_of_range(x))
            };
        }
        if x > self.max_x() {
            return Err(self.out_of_range(x));
        }
        if self.xs.len() == 1 {
            return if x == self.xs[0] {
                Ok(Some(self.ys[0]))
            } else {
                Err(self.out_of_range(x))
            };
        }
        Ok(None)
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        if let Some(value) = self.boundary_value(x)? {
            return Ok(value);
        }

        let i = self.find_segment(x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);

        if x == x1 {
            return Ok(y1);
        }

        // Weighted form: exact at both knots and symmetric at the midpoint
        let t = (x - x0) / (x1 - x0);
        Ok((1.0 - t) * y0 + t * y1)
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        if self.boundary_value(x)?.is_some() {
            return Ok(0.0);
        }

        let i = self.find_segment(x);
        Ok((self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i]))
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
