use std::io;

use rand::{rngs::StdRng, Rng};

use crate::{
    algo::QTableAgent,
    decay::{self, Decay},
    env::{Environment, Report},
    gym::MazeWalk,
    maze::{Grid, Pos},
    memory::Exp,
    render::{Advance, Render},
};

/// Whether the walker is still looking for the goal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SimState {
    #[default]
    Running,
    Reached,
}

/// Everything a renderer needs to draw the simulation between two steps
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub grid: &'a Grid,
    pub position: Pos,
    pub goal: Pos,
    /// Number of steps taken so far
    pub step: u64,
}

/// Couples a maze and a learning agent and advances them one step at a time
///
/// There is no step limit: the simulation runs until the agent reaches the
/// goal or the caller stops calling [`step`](Self::step). Stopping between two
/// steps always leaves a consistent state that can be resumed.
pub struct Simulation<D = decay::Multiplicative, R = StdRng>
where
    D: Decay,
    R: Rng,
{
    env: MazeWalk,
    agent: QTableAgent<MazeWalk, D, R>,
    state: SimState,
    steps: u64,
}

impl<D, R> Simulation<D, R>
where
    D: Decay,
    R: Rng,
{
    /// Place the agent at the entrance of `grid`
    pub fn new(grid: Grid, agent: QTableAgent<MazeWalk, D, R>) -> Self {
        let mut env = MazeWalk::new(grid);
        env.reset();
        let state = if env.is_active() {
            SimState::Running
        } else {
            SimState::Reached
        };

        Self {
            env,
            agent,
            state,
            steps: 0,
        }
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn position(&self) -> Pos {
        self.env.pos()
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn grid(&self) -> &Grid {
        self.env.grid()
    }

    pub fn agent(&self) -> &QTableAgent<MazeWalk, D, R> {
        &self.agent
    }

    /// Totals of steps and reward collected so far
    pub fn report(&self) -> &Report {
        &self.env.report
    }

    /// Snapshot for the renderer
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            grid: self.env.grid(),
            position: self.env.pos(),
            goal: self.env.goal(),
            step: self.steps,
        }
    }

    /// Let the agent pick an action, move, and learn from the outcome
    ///
    /// Does nothing once the goal has been reached.
    pub fn step(&mut self) -> SimState {
        if self.state == SimState::Reached {
            return self.state;
        }

        let state = self.env.pos();
        let action = self.agent.act(state);
        let (next_state, reward) = self.env.step(action);

        log::debug!(
            "step {}: {:?} --{action}--> {:?} (reward {reward}, epsilon {:.4})",
            self.steps,
            state,
            self.env.pos(),
            self.agent.exploration_rate(),
        );

        self.agent.learn(Exp {
            state,
            action,
            next_state,
            reward,
        });
        self.agent.decay_exploration();
        self.steps += 1;

        if next_state.is_none() {
            self.state = SimState::Reached;
            let totals = self
                .env
                .report
                .totals()
                .map(|(key, value)| format!("{key} {value}"))
                .collect::<Vec<_>>();
            log::info!(
                "reached the goal at {:?}: {}",
                self.env.goal(),
                totals.join(", ")
            );
        }

        self.state
    }

    /// Show each frame to `renderer` and step until the goal is reached or the renderer quits
    pub fn run<V: Render + ?Sized>(&mut self, renderer: &mut V) -> io::Result<SimState> {
        while self.state == SimState::Running {
            if renderer.render(&self.frame())? == Advance::Quit {
                log::info!("stopped after {} steps", self.steps);
                break;
            }
            self.step();
        }

        Ok(self.state)
    }
}
