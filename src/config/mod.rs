use crate::adapters::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::domain::model::{Gender, UserProfile};
use crate::utils::error::Result;
use crate::utils::validation::{validate_birth_date, validate_url, Validate};
use chrono::NaiveDate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "samjae-reading")]
#[command(about = "2026년(병오년) 삼재 확인 & 처방 CLI")]
pub struct CliConfig {
    /// 이름 (닉네임)
    #[arg(long)]
    pub name: String,

    /// 성별 (남성/여성)
    #[arg(long, default_value = "남성")]
    pub gender: Gender,

    /// 생년월일 (YYYY-MM-DD)
    #[arg(long)]
    pub birth_date: NaiveDate,

    /// 삼재와 관련하여 걱정되거나 궁금한 점
    #[arg(long)]
    pub concern: Option<String>,

    /// Gemini API key. Falls back to the GEMINI_API_KEY environment variable.
    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Flag wins over environment; neither present means no credential.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            name: self.name.clone(),
            gender: self.gender,
            birth_date: self.birth_date,
            concern: self.concern.clone(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_birth_date("birth_date", self.birth_date)?;
        Ok(())
    }
}
