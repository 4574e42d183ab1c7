use std::collections::HashMap;

use rand::{rngs::StdRng, seq::SliceRandom, Rng};

use crate::{
    assert_interval,
    decay::{self, Decay},
    env::DiscreteActionSpace,
    exploration::{Choice, EpsilonGreedy},
    memory::Exp,
};

use super::Hashable;

/// Configuration for the [`QTableAgent`]
pub struct QTableAgentConfig<D: Decay = decay::Multiplicative> {
    /// Exploration policy, evaluated at the number of decays so far
    ///
    /// **Default**: starts at `1.0` and is multiplied by `0.99` on every decay
    pub exploration: EpsilonGreedy<D>,
    /// Learning rate α
    ///
    /// **Default**: `0.1`
    pub alpha: f32,
    /// Discount factor γ
    ///
    /// **Default**: `0.9`
    pub gamma: f32,
}

impl Default for QTableAgentConfig {
    fn default() -> Self {
        Self {
            exploration: EpsilonGreedy::new(decay::Multiplicative::default()),
            alpha: 0.1,
            gamma: 0.9,
        }
    }
}

/// A simple Q-learning agent that utilizes a Q-table to learn its environment
///
/// Values are updated with the one step rule
///
/// Q(s,a) ← Q(s,a) + α(r + γ max<sub>a'</sub> Q(s',a') - Q(s,a))
///
/// where unseen state-action pairs count as `0`.
///
/// ### Generics
/// - `E` - The [`DiscreteActionSpace`] in which the agent will learn
///     - The state and action types must be `Copy`, `Eq`, and `Hash` to be used as keys in a [`HashMap`]
/// - `D` - The [`Decay`] strategy of the exploration rate
/// - `R` - The random source used for exploration
pub struct QTableAgent<E, D = decay::Multiplicative, R = StdRng>
where
    E: DiscreteActionSpace,
    E::State: Hashable,
    E::Action: Hashable,
    D: Decay,
    R: Rng,
{
    q_table: HashMap<(E::State, E::Action), f32>,
    exploration: EpsilonGreedy<D>,
    alpha: f32, // learning rate
    gamma: f32, // discount factor
    t: u64,     // exploration decays so far
    rng: R,
}

impl<E, D, R> QTableAgent<E, D, R>
where
    E: DiscreteActionSpace,
    E::State: Hashable,
    E::Action: Hashable,
    D: Decay,
    R: Rng,
{
    /// Initialize a new `QTableAgent` drawing its randomness from `rng`
    ///
    /// **Panics** if `alpha` or `gamma` is not in the interval `[0,1]`
    pub fn new(config: QTableAgentConfig<D>, rng: R) -> Self {
        assert_interval!(config.alpha, 0.0, 1.0);
        assert_interval!(config.gamma, 0.0, 1.0);
        Self {
            q_table: HashMap::new(),
            exploration: config.exploration,
            alpha: config.alpha,
            gamma: config.gamma,
            t: 0,
            rng,
        }
    }

    pub fn q_table(&self) -> &HashMap<(E::State, E::Action), f32> {
        &self.q_table
    }

    /// The stored value of a state-action pair, `0` if it was never updated
    pub fn value(&self, state: E::State, action: E::Action) -> f32 {
        self.q_table.get(&(state, action)).copied().unwrap_or(0.0)
    }

    /// Overwrite the value of a state-action pair
    ///
    /// Values seeded on a terminal state are never read back by [`learn`](Self::learn),
    /// which treats the future value of a terminal experience as `0`.
    pub fn set_value(&mut self, state: E::State, action: E::Action, value: f32) {
        self.q_table.insert((state, action), value);
    }

    /// Current probability of taking a random action
    pub fn exploration_rate(&self) -> f32 {
        self.exploration.epsilon(self.t)
    }

    /// Choose an action based on the current state and exploration policy
    pub fn act(&mut self, state: E::State) -> E::Action {
        match self.exploration.choose(self.t, &mut self.rng) {
            Choice::Explore => *E::actions()
                .choose(&mut self.rng)
                .expect("There is always at least one action available"),
            Choice::Exploit => self.greedy(state),
        }
    }

    /// The highest valued action, the earliest listed one on ties
    fn greedy(&self, state: E::State) -> E::Action {
        let (action, _) = E::actions()
            .iter()
            .map(|&a| (a, self.value(state, a)))
            .reduce(|best, next| if next.1 > best.1 { next } else { best })
            .expect("There is always at least one action available");
        action
    }

    fn max_value(&self, state: E::State) -> f32 {
        E::actions()
            .iter()
            .map(|&a| self.value(state, a))
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// Learn from a given experience and update the table
    ///
    /// A terminal experience (no next state) has no future value.
    pub fn learn(&mut self, experience: Exp<E>) {
        let Exp {
            state,
            action,
            next_state,
            reward,
        } = experience;

        let q_value = self.value(state, action);
        let max_next_q = next_state.map_or(0.0, |s| self.max_value(s));
        let update = q_value + self.alpha * (reward + self.gamma * max_next_q - q_value);

        self.q_table.insert((state, action), update);
    }

    /// Advance the exploration schedule by one step
    pub fn decay_exploration(&mut self) {
        self.t += 1;
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use crate::{
        env::{tests::MockEnv, Environment},
        gym::{Action, MazeWalk},
    };

    use super::*;

    fn greedy_config() -> QTableAgentConfig<decay::Constant> {
        QTableAgentConfig {
            exploration: EpsilonGreedy::new(decay::Constant::new(0.0)),
            alpha: 0.1,
            gamma: 0.9,
        }
    }

    fn mock_agent() -> QTableAgent<MockEnv, decay::Constant> {
        QTableAgent::new(greedy_config(), StdRng::seed_from_u64(0))
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn learn_applies_one_step_update() {
        let mut agent = mock_agent();
        agent.set_value(1, 0, 2.0);
        agent.set_value(1, 1, 5.0);

        agent.learn(Exp {
            state: 0,
            action: 1,
            next_state: Some(1),
            reward: -1.0,
        });

        // 0 + 0.1 * (-1 + 0.9 * 5 - 0)
        assert!(close(agent.value(0, 1), 0.35), "got {}", agent.value(0, 1));
        assert_eq!(agent.value(0, 0), 0.0, "other actions untouched");
        assert_eq!(agent.value(1, 1), 5.0, "next state untouched");
    }

    #[test]
    fn repeated_updates_converge_monotonically() {
        let mut agent = mock_agent();
        agent.set_value(1, 1, 5.0);
        let target = -1.0 + 0.9 * 5.0;

        let mut prev = agent.value(0, 1);
        for _ in 0..200 {
            agent.learn(Exp {
                state: 0,
                action: 1,
                next_state: Some(1),
                reward: -1.0,
            });
            let value = agent.value(0, 1);
            let expected_step = 0.1 * (target - prev);
            assert!(close(value - prev, expected_step), "step is α times the error");
            assert!(value >= prev && value <= target, "moves toward the target");
            prev = value;
        }
        assert!((prev - target).abs() < 1e-3, "converged to {prev}");
    }

    #[test]
    fn terminal_experience_has_no_future_value() {
        let mut agent = mock_agent();
        agent.set_value(3, 1, 50.0);
        agent.learn(Exp {
            state: 2,
            action: 1,
            next_state: None,
            reward: 1.0,
        });
        assert!(close(agent.value(2, 1), 0.1));
    }

    #[test]
    fn acts_over_any_static_action_list() {
        let mut agent = mock_agent();
        assert_eq!(agent.act(2), 0, "ties go to the first listed action");
        agent.set_value(2, 1, 0.5);
        assert_eq!(agent.act(2), 1);
    }

    #[test]
    fn table_only_grows() {
        let mut agent = mock_agent();
        let mut env = MockEnv { pos: 0 };
        let mut state = env.reset();
        for i in 0..10 {
            let action = i % 2;
            let before = agent.q_table().len();
            let (next_state, reward) = env.step(action);
            agent.learn(Exp {
                state,
                action,
                next_state,
                reward,
            });
            assert!(agent.q_table().len() >= before);
            state = next_state.unwrap_or_else(|| env.reset());
        }
        assert!(agent.q_table().len() <= MockEnv::LEN * 2);
    }

    #[test]
    fn greedy_ties_go_to_the_first_action() {
        let mut agent: QTableAgent<MazeWalk, _> =
            QTableAgent::new(greedy_config(), StdRng::seed_from_u64(0));
        assert_eq!(agent.act((0, 0)), Action::Up, "all zero picks Up");

        agent.set_value((0, 0), Action::Right, 1.0);
        agent.set_value((0, 0), Action::Down, 1.0);
        assert_eq!(agent.act((0, 0)), Action::Down, "Down listed before Right");

        agent.set_value((0, 0), Action::Up, -1.0);
        agent.set_value((0, 0), Action::Left, 3.0);
        assert_eq!(agent.act((0, 0)), Action::Left);
    }

    #[test]
    fn negative_values_lose_to_unseen_actions() {
        let mut agent: QTableAgent<MazeWalk, _> =
            QTableAgent::new(greedy_config(), StdRng::seed_from_u64(0));
        agent.set_value((4, 4), Action::Up, -0.1);
        agent.set_value((4, 4), Action::Down, -0.2);
        assert_eq!(agent.act((4, 4)), Action::Left);
    }

    #[test]
    fn exploration_decays_per_step() {
        let mut agent: QTableAgent<MazeWalk> =
            QTableAgent::new(QTableAgentConfig::default(), StdRng::seed_from_u64(0));
        assert_eq!(agent.exploration_rate(), 1.0);

        for n in 1..=300 {
            agent.decay_exploration();
            let expected = 0.99f32.powi(n);
            assert!(
                (agent.exploration_rate() - expected).abs() < 1e-4,
                "rate after {n} decays"
            );
        }
    }

    #[test]
    fn full_exploration_is_uniform() {
        let mut agent: QTableAgent<MazeWalk> =
            QTableAgent::new(QTableAgentConfig::default(), StdRng::seed_from_u64(5));
        agent.set_value((0, 0), Action::Up, 100.0);

        let mut counts = HashMap::new();
        for _ in 0..4000 {
            *counts.entry(agent.act((0, 0))).or_insert(0) += 1;
        }
        for action in MazeWalk::actions() {
            let n = counts.get(action).copied().unwrap_or(0);
            assert!((800..1200).contains(&n), "{action} chosen {n} times");
        }
    }

    #[test]
    #[should_panic(expected = "Invalid value for `config.alpha`")]
    fn rejects_bad_learning_rate() {
        let config = QTableAgentConfig {
            alpha: 1.5,
            ..Default::default()
        };
        let _agent: QTableAgent<MazeWalk> = QTableAgent::new(config, StdRng::seed_from_u64(0));
    }
}
