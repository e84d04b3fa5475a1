//! Random point sampling and equal-distance estimation.

use core::cmp::Ordering;

use rand::Rng;

use super::Point;

/// Largest absolute coordinate produced by [`random_point`].
pub const COORDINATE_LIMIT: i32 = 100;

/// Returns a point with integer coordinates in
/// `-COORDINATE_LIMIT..=COORDINATE_LIMIT`.
pub fn random_point<R: Rng + ?Sized>(rng: &mut R) -> Point {
    let x = rng.random_range(-COORDINATE_LIMIT..=COORDINATE_LIMIT);
    let y = rng.random_range(-COORDINATE_LIMIT..=COORDINATE_LIMIT);
    Point::new(f64::from(x), f64::from(y))
}

/// Sorts points by distance from the origin, nearest first.
///
/// The sort is stable, so equally distant points keep their order.
pub fn sort_by_distance(points: &mut [Point]) {
    points.sort_by(|a, b| {
        a.distance_from_origin()
            .partial_cmp(&b.distance_from_origin())
            .unwrap_or(Ordering::Equal)
    });
}

/// Outcome of [`estimate_equal_distance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EqualDistanceReport {
    /// Pairs of points drawn.
    pub trials: u64,
    /// Pairs whose points were equally far from the origin.
    pub found: u64,
}

impl EqualDistanceReport {
    /// Average number of pairs drawn per equal-distance pair.
    ///
    /// Returns `None` if no equal pair was found.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for trial counts"
    )]
    pub fn trials_per_match(&self) -> Option<f64> {
        (self.found > 0).then(|| self.trials as f64 / self.found as f64)
    }
}

/// Draws pairs of random points until `target` of them are equally far from
/// the origin.
pub fn estimate_equal_distance<R: Rng + ?Sized>(rng: &mut R, target: u64) -> EqualDistanceReport {
    let mut report = EqualDistanceReport {
        trials: 0,
        found: 0,
    };

    while report.found < target {
        let a = random_point(rng);
        let b = random_point(rng);
        report.trials += 1;

        if a == b {
            report.found += 1;
            log::debug!("{a} and {b} after {} pairs", report.trials);
        }
    }

    log::info!(
        "found {} equal-distance pairs in {} trials",
        report.found,
        report.trials
    );
    report
}
