//! Monte Carlo estimation of hand category frequencies.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::Hand;
use crate::options::SimulationOptions;

/// Outcome of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    /// Hands dealt.
    pub trials: u64,
    /// Hands that matched the category.
    pub matches: u64,
    /// The first matching hand, if any.
    pub first_match: Option<Hand>,
}

impl SimulationReport {
    /// Returns the observed frequency as a percentage, `100 * matches / trials`.
    ///
    /// Returns 0 if no trials were run.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for trial counts"
    )]
    pub fn probability_percent(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        100.0 * self.matches as f64 / self.trials as f64
    }
}

/// Repeatedly deals a hand from a freshly shuffled deck and counts how often
/// it falls into the configured category.
///
/// # Example
///
/// ```
/// use deckhand::{Simulation, SimulationOptions};
///
/// let options = SimulationOptions::default().with_target_matches(3);
/// let report = Simulation::new(options, 42).run().unwrap();
/// assert_eq!(report.matches, 3);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    options: SimulationOptions,
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Creates a new simulation with the given seed.
    #[must_use]
    pub fn new(options: SimulationOptions, seed: u64) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the simulation options.
    #[must_use]
    pub const fn options(&self) -> &SimulationOptions {
        &self.options
    }

    /// Deals one hand from a new shuffled deck.
    fn trial(&mut self) -> Result<Hand, DeckError> {
        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        Hand::deal_from(&mut deck)
    }

    /// Runs trials until the target number of matches is reached, the first
    /// match is seen with `stop_after_first`, or `max_trials` runs out.
    ///
    /// # Errors
    ///
    /// Returns an error if a trial cannot deal a full hand.
    pub fn run(&mut self) -> Result<SimulationReport, DeckError> {
        let SimulationOptions {
            category,
            target_matches,
            stop_after_first,
            max_trials,
        } = self.options;

        let mut report = SimulationReport {
            trials: 0,
            matches: 0,
            first_match: None,
        };

        while report.matches < target_matches
            && max_trials.is_none_or(|max| report.trials < max)
        {
            let hand = self.trial()?;
            report.trials += 1;

            if !category.matches(&hand) {
                continue;
            }

            report.matches += 1;
            log::debug!(
                "{category} #{} after {} trials: {hand}",
                report.matches,
                report.trials
            );

            if report.first_match.is_none() {
                report.first_match = Some(hand);
            }
            if stop_after_first {
                break;
            }
        }

        log::info!(
            "simulation finished: {} {category} hands in {} trials",
            report.matches,
            report.trials
        );
        Ok(report)
    }
}
