pub mod leaderboard;
pub mod linescore;
pub mod scoreboard;
pub mod template;

pub use leaderboard::*;
pub use linescore::*;
pub use scoreboard::*;
pub use template::*;
