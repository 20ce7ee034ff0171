pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::gemini::GeminiClient;
pub use crate::config::CliConfig;
pub use crate::core::reading::ReadingEngine;
pub use crate::core::zodiac::Zodiac;
pub use crate::domain::model::{Gender, Reading, SamjaeInfo, UserProfile};
pub use crate::domain::ports::ReadingClient;
pub use crate::utils::error::{ReadingError, Result};
