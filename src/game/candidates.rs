use crate::game::code::Code;
use crate::game::feedback::{evaluate_guess, Feedback};

/// Retains the codes still consistent with an observed response: those
/// producing exactly `feedback` when `guess` is scored against them.
pub fn filter_candidates(candidates: &[Code], guess: &Code, feedback: Feedback) -> Vec<Code> {
    candidates
        .iter()
        .filter(|code| evaluate_guess(guess, code) == feedback)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::code::all_codes;
    use crate::game::parameters::GameParameters;

    #[test]
    fn test_filter_keeps_consistent_codes() {
        let params = GameParameters::new(2, 3);
        let universe = all_codes(&params);
        let guess = Code(vec![1, 1]);

        let remaining = filter_candidates(&universe, &guess, Feedback(0, 0));

        // Codes with no 1 anywhere: (2,2), (2,3), (3,2), (3,3).
        assert_eq!(remaining.len(), 4);
        assert!(remaining.iter().all(|code| !code.pegs().contains(&1)));
    }

    #[test]
    fn test_filter_shrinks_or_preserves() {
        let params = GameParameters::new(2, 3);
        let universe = all_codes(&params);
        let guess = Code(vec![1, 2]);

        for code in &universe {
            let feedback = evaluate_guess(&guess, code);
            let remaining = filter_candidates(&universe, &guess, feedback);
            assert!(!remaining.is_empty());
            assert!(remaining.len() <= universe.len());
            assert!(remaining.contains(code));
        }
    }

    #[test]
    fn test_exact_feedback_pins_the_code() {
        let params = GameParameters::new(2, 3);
        let universe = all_codes(&params);
        let guess = Code(vec![2, 3]);

        let remaining = filter_candidates(&universe, &guess, Feedback(2, 0));
        assert_eq!(remaining, vec![guess]);
    }
}
