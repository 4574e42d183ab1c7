pub mod q_table;

pub use q_table::{QTableAgent, QTableAgentConfig};

/// A trait for state and action types that can be used as keys in a [`HashMap`](std::collections::HashMap)
///
/// Owned and `'static` so actions can be handed out from a static list.
pub trait Hashable: Copy + Eq + std::hash::Hash + 'static {}

impl<T> Hashable for T where T: Copy + Eq + std::hash::Hash + 'static {}
