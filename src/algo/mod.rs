pub mod tabular;

pub use tabular::{QTableAgent, QTableAgentConfig};
