//! Simulation configuration options.

use crate::hand::Category;

/// Configuration options for a hand-frequency simulation.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckhand::{Category, SimulationOptions};
///
/// let options = SimulationOptions::default()
///     .with_category(Category::Flush)
///     .with_target_matches(100)
///     .with_max_trials(Some(1_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationOptions {
    /// Category of hand to count.
    pub category: Category,
    /// Number of matching hands to observe before stopping.
    pub target_matches: u64,
    /// Whether to stop as soon as the first matching hand appears.
    pub stop_after_first: bool,
    /// Upper bound on trials. `None` runs until the target is reached.
    pub max_trials: Option<u64>,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            category: Category::Straight,
            target_matches: 10_000,
            stop_after_first: false,
            max_trials: None,
        }
    }
}

impl SimulationOptions {
    /// Sets the category of hand to count.
    ///
    /// # Example
    ///
    /// ```
    /// use deckhand::{Category, SimulationOptions};
    ///
    /// let options = SimulationOptions::default().with_category(Category::Quads);
    /// assert_eq!(options.category, Category::Quads);
    /// ```
    #[must_use]
    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets the number of matching hands to observe.
    ///
    /// # Example
    ///
    /// ```
    /// use deckhand::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_target_matches(50);
    /// assert_eq!(options.target_matches, 50);
    /// ```
    #[must_use]
    pub const fn with_target_matches(mut self, target: u64) -> Self {
        self.target_matches = target;
        self
    }

    /// Sets whether to stop after the first matching hand.
    ///
    /// # Example
    ///
    /// ```
    /// use deckhand::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_stop_after_first(true);
    /// assert!(options.stop_after_first);
    /// ```
    #[must_use]
    pub const fn with_stop_after_first(mut self, stop: bool) -> Self {
        self.stop_after_first = stop;
        self
    }

    /// Sets the upper bound on trials.
    ///
    /// # Example
    ///
    /// ```
    /// use deckhand::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_max_trials(Some(500));
    /// assert_eq!(options.max_trials, Some(500));
    /// ```
    #[must_use]
    pub const fn with_max_trials(mut self, max: Option<u64>) -> Self {
        self.max_trials = max;
        self
    }
}
