pub mod course;
pub mod player;
pub mod round;
pub mod utils;

pub use course::*;
pub use player::*;
pub use round::*;
pub use utils::*;
