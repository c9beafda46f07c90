//! Evenly spaced sample grids.

/// `n` evenly spaced values over `[start, stop]`, endpoints inclusive.
///
/// `n = 0` yields an empty grid and `n = 1` yields just `start`, matching the
/// usual linspace conventions.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + i as f64 * step).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints_and_length() {
        let g = linspace(0.0, 1.0, 500);
        assert_eq!(g.len(), 500);
        assert_eq!(g[0], 0.0);
        assert!((g[499] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn linspace_is_strictly_increasing() {
        let g = linspace(0.3, 0.9, 200);
        for w in g.windows(2) {
            assert!(w[1] > w[0]);
        }
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.25, 1.0, 1), vec![0.25]);
    }
}
