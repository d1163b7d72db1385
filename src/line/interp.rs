use crate::foundation::error::InterpolationError;

/// Piecewise-linear interpolant over knots with strictly increasing x.
#[derive(Clone, Debug)]
pub struct LinearInterpolant<'a> {
    xs: &'a [f64],
    ys: &'a [f64],
}

impl<'a> LinearInterpolant<'a> {
    pub fn new(xs: &'a [f64], ys: &'a [f64]) -> Result<Self, InterpolationError> {
        validate_knots(xs, ys)?;
        Ok(Self { xs, ys })
    }

    /// `(x_min, x_max)` of the knots.
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Evaluate at `x`. Knots are reproduced exactly; no extrapolation.
    pub fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        let (min, max) = self.domain();
        if !(min..=max).contains(&x) {
            return Err(InterpolationError::OutOfDomain { x, min, max });
        }

        let idx = self.xs.partition_point(|&k| k <= x);
        if idx >= self.xs.len() {
            return Ok(self.ys[self.ys.len() - 1]);
        }
        // idx > 0 because x >= xs[0].
        let (x0, x1) = (self.xs[idx - 1], self.xs[idx]);
        let (y0, y1) = (self.ys[idx - 1], self.ys[idx]);
        if x == x0 {
            return Ok(y0);
        }
        let span = x1 - x0;
        let t = if span.is_finite() {
            (x - x0) / span
        } else {
            // Halving keeps both differences finite for knots near f64::MAX.
            (x * 0.5 - x0 * 0.5) / (x1 * 0.5 - x0 * 0.5)
        };
        Ok(lerp(y0, y1, t))
    }
}

/// Checks that `(xs, ys)` define a piecewise-linear interpolant.
pub fn validate_knots(xs: &[f64], ys: &[f64]) -> Result<(), InterpolationError> {
    if xs.len() != ys.len() {
        return Err(InterpolationError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    if xs.len() < 2 {
        return Err(InterpolationError::InsufficientPoints(xs.len()));
    }
    if let Some(i) = xs
        .iter()
        .zip(ys)
        .position(|(x, y)| !x.is_finite() || !y.is_finite())
    {
        return Err(InterpolationError::NonFinite(i));
    }
    if xs.iter().all(|&x| x == xs[0]) {
        return Err(InterpolationError::DegenerateDomain(xs[0]));
    }
    if let Some(i) = xs.windows(2).position(|w| w[0] >= w[1]) {
        return Err(InterpolationError::NonIncreasingX {
            index: i,
            prev: xs[i],
            next: xs[i + 1],
        });
    }
    Ok(())
}

/// `n` evenly spaced values over `[start, end]` with exact endpoints.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| lerp(start, end, i as f64 / last)).collect();
            out[0] = start;
            out[n - 1] = end;
            out
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let d = b - a;
    if d.is_finite() {
        a + d * t
    } else {
        a * (1.0 - t) + b * t
    }
}

#[cfg(test)]
#[path = "../../tests/unit/line/interp.rs"]
mod tests;
