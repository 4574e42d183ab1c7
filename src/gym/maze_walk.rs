use strum::{Display, VariantArray};

use crate::{
    env::{DiscreteActionSpace, Environment, Report},
    maze::{Grid, Pos},
};

/// A move to one of the four orthogonal neighbors
///
/// Declaration order is the order greedy selection scans actions in, so ties
/// go to `Up`, then `Down`, `Left` and `Right`.
#[derive(VariantArray, Display, Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

/// Apply the movement rule
///
/// The neighbor in the direction of `action` is returned if it is inside the
/// grid and open. Otherwise the walker bumps into the wall and stays at `pos`.
pub fn step_dir(pos: Pos, action: Action, grid: &Grid) -> Pos {
    let (x, y) = pos;
    let target = match action {
        Action::Up => y.checked_sub(1).map(|y| (x, y)),
        Action::Down => Some((x, y + 1)),
        Action::Left => x.checked_sub(1).map(|x| (x, y)),
        Action::Right => Some((x + 1, y)),
    };

    target.filter(|&t| grid.is_open(t)).unwrap_or(pos)
}

/// A walker dropped at the entrance of a maze who has to find the center
///
/// Every step costs [`STEP_PENALTY`](Self::STEP_PENALTY), including steps into
/// a wall, and arriving at the goal pays [`GOAL_REWARD`](Self::GOAL_REWARD) and
/// ends the episode.
pub struct MazeWalk {
    grid: Grid,
    pos: Pos,
    pub report: Report,
}

impl MazeWalk {
    pub const GOAL_REWARD: f32 = 100.0;
    pub const STEP_PENALTY: f32 = -1.0;

    pub fn new(grid: Grid) -> Self {
        let pos = grid.start();
        Self {
            grid,
            pos,
            report: Report::new(vec!["steps", "reward"]),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current position of the walker
    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn goal(&self) -> Pos {
        self.grid.goal()
    }

    /// Whether the walker has yet to reach the goal
    pub fn is_active(&self) -> bool {
        self.pos != self.goal()
    }
}

impl Environment for MazeWalk {
    type State = Pos;
    type Action = Action;

    fn step(&mut self, action: Self::Action) -> (Option<Self::State>, f32) {
        self.report.entry("steps").and_modify(|x| *x += 1.0);

        self.pos = step_dir(self.pos, action, &self.grid);
        let (next_state, reward) = if self.is_active() {
            (Some(self.pos), Self::STEP_PENALTY)
        } else {
            (None, Self::GOAL_REWARD)
        };

        self.report
            .entry("reward")
            .and_modify(|x| *x += reward as f64);

        (next_state, reward)
    }

    fn reset(&mut self) -> Self::State {
        self.pos = self.grid.start();
        self.pos
    }
}

impl DiscreteActionSpace for MazeWalk {
    fn actions() -> &'static [Self::Action] {
        Action::VARIANTS
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::maze;

    use super::*;

    /// 5x5 corridor from the entrance, right along the top and down to the center
    pub(crate) const HOOK: &str = "
        ...##
        ##.##
        ##.##
        #####
        #####
    ";

    #[test]
    fn movement_follows_open_cells() {
        let grid: Grid = HOOK.parse().unwrap();
        assert_eq!(step_dir((0, 0), Action::Right, &grid), (1, 0));
        assert_eq!(step_dir((2, 0), Action::Down, &grid), (2, 1));
        assert_eq!(step_dir((2, 1), Action::Up, &grid), (2, 0));
        assert_eq!(step_dir((1, 0), Action::Left, &grid), (0, 0));
    }

    #[test]
    fn movement_bumps_into_walls_and_edges() {
        let grid: Grid = HOOK.parse().unwrap();
        assert_eq!(step_dir((0, 0), Action::Up, &grid), (0, 0), "top edge");
        assert_eq!(step_dir((0, 0), Action::Left, &grid), (0, 0), "left edge");
        assert_eq!(step_dir((0, 0), Action::Down, &grid), (0, 0), "wall below");
        assert_eq!(step_dir((2, 2), Action::Down, &grid), (2, 2), "dead end");

        let open: Grid = ".".parse().unwrap();
        for &action in Action::VARIANTS {
            assert_eq!(step_dir((0, 0), action, &open), (0, 0), "1x1 grid");
        }
    }

    #[test]
    fn movement_never_leaves_the_grid() {
        let grid = maze::generate(9, 7, &mut StdRng::seed_from_u64(11));
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                for &action in Action::VARIANTS {
                    let next = step_dir((x, y), action, &grid);
                    assert!(grid.in_bounds(next), "{action} from {:?}", (x, y));
                    if next != (x, y) {
                        assert!(grid.is_open(next), "only open cells are entered");
                        let dist = x.abs_diff(next.0) + y.abs_diff(next.1);
                        assert_eq!(dist, 1, "one cell at a time");
                    }
                }
            }
        }
    }

    #[test]
    fn bumping_costs_a_step_and_stays_put() {
        let mut env = MazeWalk::new(HOOK.parse().unwrap());
        assert_eq!(env.reset(), (0, 0));
        assert_eq!(env.step(Action::Up), (Some((0, 0)), -1.0));
        assert_eq!(env.pos(), (0, 0));
        assert!(env.is_active());
    }

    #[test]
    fn reaching_the_goal_is_terminal() {
        let mut env = MazeWalk::new(HOOK.parse().unwrap());
        assert_eq!(env.goal(), (2, 2));
        for action in [Action::Right, Action::Right, Action::Down] {
            let (next, reward) = env.step(action);
            assert!(next.is_some());
            assert_eq!(reward, MazeWalk::STEP_PENALTY);
        }
        assert_eq!(env.step(Action::Down), (None, MazeWalk::GOAL_REWARD));
        assert!(!env.is_active());

        assert_eq!(env.report["steps"], 4.0, "steps counted");
        assert_eq!(env.report["reward"], 97.0, "rewards summed");
    }

    #[test]
    fn actions_in_tie_break_order() {
        assert_eq!(
            MazeWalk::actions(),
            [Action::Up, Action::Down, Action::Left, Action::Right]
        );
    }
}
