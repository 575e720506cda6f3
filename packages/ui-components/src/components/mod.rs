pub mod progress_bar;
pub mod question_card;

pub use progress_bar::*;
pub use question_card::*;
