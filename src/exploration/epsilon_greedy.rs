use rand::Rng;

use crate::decay::Decay;

use super::Choice;

/// Epsilon greedy exploration policy with time-decaying epsilon threshold
#[derive(Debug, Clone)]
pub struct EpsilonGreedy<D: Decay> {
    epsilon: D,
}

impl<D: Decay> EpsilonGreedy<D> {
    /// Initialize epsilon greedy policy with a decay strategy
    pub fn new(decay: D) -> Self {
        Self { epsilon: decay }
    }

    /// The exploration probability at time `t`
    pub fn epsilon(&self, t: u64) -> f32 {
        self.epsilon.evaluate(t as f32)
    }

    /// Invoke epsilon greedy policy at time `t`
    ///
    /// Explores with probability epsilon: a zero epsilon never explores and an
    /// epsilon of one always does.
    pub fn choose<R: Rng + ?Sized>(&self, t: u64, rng: &mut R) -> Choice {
        if rng.gen::<f32>() < self.epsilon(t) {
            Choice::Explore
        } else {
            Choice::Exploit
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::decay::{self, Multiplicative};

    use super::*;

    #[test]
    fn extremes_are_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        let never = EpsilonGreedy::new(decay::Constant::new(0.0));
        let always = EpsilonGreedy::new(decay::Constant::new(1.0));
        for t in 0..1000 {
            assert_eq!(never.choose(t, &mut rng), Choice::Exploit);
            assert_eq!(always.choose(t, &mut rng), Choice::Explore);
        }
    }

    #[test]
    fn epsilon_follows_decay() {
        let policy = EpsilonGreedy::new(Multiplicative::new(0.5, 1.0).unwrap());
        assert_eq!(policy.epsilon(0), 1.0);
        assert_eq!(policy.epsilon(2), 0.25);
    }

    #[test]
    fn explore_rate_roughly_matches_epsilon() {
        let mut rng = StdRng::seed_from_u64(42);
        let policy = EpsilonGreedy::new(decay::Constant::new(0.3));
        let explored = (0..10_000)
            .filter(|&t| policy.choose(t, &mut rng) == Choice::Explore)
            .count();
        assert!(
            (2_700..3_300).contains(&explored),
            "explored {explored} times out of 10000"
        );
    }
}
