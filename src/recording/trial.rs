//! Trial-result data structures for solver evaluation runs.

use serde::{Deserialize, Serialize};

/// Outcome of one replayed game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialRecord {
    /// Zero-based index of the game within the run.
    pub game: usize,
    /// The secret code, formatted like `(1,2,3,4)`.
    pub secret: String,
    /// Guesses needed to find it.
    pub attempts: usize,
}

/// Aggregate view over a run of trials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrialSummary {
    pub games: usize,
    pub mean_attempts: f64,
    pub std_attempts: f64,
    pub max_attempts: usize,
}

/// Mean, population standard deviation and maximum of the guess counts.
pub fn summarize(records: &[TrialRecord]) -> TrialSummary {
    if records.is_empty() {
        return TrialSummary {
            games: 0,
            mean_attempts: 0.0,
            std_attempts: 0.0,
            max_attempts: 0,
        };
    }

    let games = records.len();
    let mean = records.iter().map(|r| r.attempts as f64).sum::<f64>() / games as f64;
    let variance = records
        .iter()
        .map(|r| {
            let diff = r.attempts as f64 - mean;
            diff * diff
        })
        .sum::<f64>()
        / games as f64;
    let max = records.iter().map(|r| r.attempts).max().unwrap_or(0);

    TrialSummary {
        games,
        mean_attempts: mean,
        std_attempts: variance.sqrt(),
        max_attempts: max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(game: usize, attempts: usize) -> TrialRecord {
        TrialRecord {
            game,
            secret: "(1,1)".to_string(),
            attempts,
        }
    }

    #[test]
    fn test_summary_of_empty_run() {
        let summary = summarize(&[]);
        assert_eq!(summary.games, 0);
        assert_eq!(summary.mean_attempts, 0.0);
    }

    #[test]
    fn test_summary_statistics() {
        let records = vec![record(0, 2), record(1, 4), record(2, 6)];
        let summary = summarize(&records);

        assert_eq!(summary.games, 3);
        assert!((summary.mean_attempts - 4.0).abs() < 1e-9);
        // Population std of {2,4,6}.
        assert!((summary.std_attempts - (8.0f64 / 3.0).sqrt()).abs() < 1e-9);
        assert_eq!(summary.max_attempts, 6);
    }
}
