//! Natural cubic spline through a set of knots
//!
//! Second derivatives vanish at both ends, which keeps colour ramps smooth
//! between anchor colours without overshooting at the extremes.

use crate::io::error::{Result, computation_error};

/// Cubic spline with natural boundary conditions
#[derive(Debug, Clone)]
pub struct Spline {
    knots: Vec<(f64, f64)>,
    second_derivatives: Vec<f64>,
}

impl Spline {
    /// Fit a spline through `(x, y)` knots
    ///
    /// # Errors
    ///
    /// Returns a computation error if fewer than two knots are given or the
    /// x values are not strictly increasing.
    pub fn natural(knots: Vec<(f64, f64)>) -> Result<Self> {
        let n = knots.len();
        if n < 2 {
            return Err(computation_error(
                "spline fit",
                &format!("need at least 2 knots, got {n}"),
            ));
        }
        if knots.windows(2).any(|pair| match pair {
            [a, b] => b.0 <= a.0,
            _ => false,
        }) {
            return Err(computation_error(
                "spline fit",
                &"x values must be strictly increasing",
            ));
        }

        // Tridiagonal decomposition
        let mut second_derivatives = vec![0.0; n];
        let mut u = vec![0.0; n];
        for i in 1..n - 1 {
            let (Some(&(x0, y0)), Some(&(x1, y1)), Some(&(x2, y2))) =
                (knots.get(i - 1), knots.get(i), knots.get(i + 1))
            else {
                continue;
            };
            let previous_second = second_derivatives.get(i - 1).copied().unwrap_or(0.0);
            let previous_u = u.get(i - 1).copied().unwrap_or(0.0);

            let sig = (x1 - x0) / (x2 - x0);
            let p = sig.mul_add(previous_second, 2.0);
            let slope_change = (y2 - y1) / (x2 - x1) - (y1 - y0) / (x1 - x0);

            if let Some(sd) = second_derivatives.get_mut(i) {
                *sd = (sig - 1.0) / p;
            }
            if let Some(value) = u.get_mut(i) {
                *value = sig.mul_add(-previous_u, 6.0 * slope_change / (x2 - x0)) / p;
            }
        }

        // Back substitution, last second derivative stays zero
        for k in (0..n - 1).rev() {
            let next = second_derivatives.get(k + 1).copied().unwrap_or(0.0);
            let u_k = u.get(k).copied().unwrap_or(0.0);
            if let Some(sd) = second_derivatives.get_mut(k) {
                *sd = sd.mul_add(next, u_k);
            }
        }

        Ok(Self {
            knots,
            second_derivatives,
        })
    }

    /// Evaluate the spline at `x`
    ///
    /// Values outside the knot range clamp to the nearest end knot.
    pub fn evaluate(&self, x: f64) -> f64 {
        let (Some(&(first_x, first_y)), Some(&(last_x, last_y))) =
            (self.knots.first(), self.knots.last())
        else {
            return 0.0;
        };
        if x <= first_x {
            return first_y;
        }
        if x >= last_x {
            return last_y;
        }

        let hi = self.knots.partition_point(|&(knot_x, _)| knot_x <= x);
        let lo = hi.saturating_sub(1);
        let (Some(&(x_lo, y_lo)), Some(&(x_hi, y_hi))) = (self.knots.get(lo), self.knots.get(hi))
        else {
            return last_y;
        };
        let sd_lo = self.second_derivatives.get(lo).copied().unwrap_or(0.0);
        let sd_hi = self.second_derivatives.get(hi).copied().unwrap_or(0.0);

        let h = x_hi - x_lo;
        let a = (x_hi - x) / h;
        let b = (x - x_lo) / h;
        let curvature = (a.powi(3) - a).mul_add(sd_lo, (b.powi(3) - b) * sd_hi) * h * h / 6.0;

        a.mul_add(y_lo, b * y_hi) + curvature
    }
}
