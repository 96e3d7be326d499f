use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::parameters::GameParameters;

/// An ordered sequence of pegs, each drawn from `1..=num_colors`.
///
/// Represents a secret, a guess, or a still-possible candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Code(pub Vec<u8>);

impl Code {
    /// The peg values of this code.
    pub fn pegs(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Draws a uniformly random code for the given board.
    pub fn random(params: &GameParameters, rng: &mut impl Rng) -> Self {
        let pegs = (0..params.code_length)
            .map(|_| rng.random_range(1..=params.num_colors))
            .collect();
        Code(pegs)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, peg) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{peg}")?;
        }
        write!(f, ")")
    }
}

/// Enumerates the full candidate universe: every code of length
/// `code_length` over colors `1..=num_colors`, in lexicographic order.
pub fn all_codes(params: &GameParameters) -> Vec<Code> {
    let mut codes = Vec::with_capacity(params.universe_size());
    let mut current = vec![1u8; params.code_length];

    loop {
        codes.push(Code(current.clone()));

        // Odometer increment, least significant peg last.
        let mut position = params.code_length;
        loop {
            if position == 0 {
                return codes;
            }
            position -= 1;
            if current[position] < params.num_colors {
                current[position] += 1;
                break;
            }
            current[position] = 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_universe_enumeration() {
        let params = GameParameters::new(2, 3);
        let codes = all_codes(&params);

        assert_eq!(codes.len(), 9);
        assert_eq!(codes[0], Code(vec![1, 1]));
        assert_eq!(codes[8], Code(vec![3, 3]));

        // Every code is distinct.
        for (i, a) in codes.iter().enumerate() {
            for b in codes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_universe_matches_parameters() {
        let params = GameParameters::default();
        let codes = all_codes(&params);
        assert_eq!(codes.len(), params.universe_size());
    }

    #[test]
    fn test_random_code_in_bounds() {
        let params = GameParameters::default();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let code = Code::random(&params, &mut rng);
            assert_eq!(code.len(), params.code_length);
            assert!(code
                .pegs()
                .iter()
                .all(|&peg| (1..=params.num_colors).contains(&peg)));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Code(vec![1, 2, 3]).to_string(), "(1,2,3)");
    }
}
