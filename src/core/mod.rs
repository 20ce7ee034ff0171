pub mod prompt;
pub mod reading;
pub mod samjae;
pub mod zodiac;

pub use crate::domain::model::{Reading, SamjaeInfo, UserProfile};
pub use crate::domain::ports::ReadingClient;
pub use crate::utils::error::Result;
