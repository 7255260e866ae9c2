pub mod args;
pub mod model;
pub mod score {
    pub mod aggregator;
    pub mod leaderboard;

    pub use aggregator::*;
    pub use leaderboard::*;
}
pub mod course {
    pub mod par;
    pub mod range;
    pub mod validation;

    pub use par::*;
    pub use range::*;
    pub use validation::*;
}
pub mod storage;
pub mod controller {
    pub mod score;
}
pub mod view {
    pub mod index;
    pub mod score;
}

const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";

pub use model::{CourseDetails, HoleScore, Round};
pub use storage::{RoundStore, StorageError};
