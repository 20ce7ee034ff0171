use crate::core::zodiac::Zodiac;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "남성"),
            Gender::Female => write!(f, "여성"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "남성" | "male" | "m" => Ok(Gender::Male),
            "여성" | "female" | "f" => Ok(Gender::Female),
            other => Err(format!(
                "unknown gender '{}', expected 남성/male or 여성/female",
                other
            )),
        }
    }
}

/// One interaction's worth of form input. Captured once, read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub concern: Option<String>,
}

impl UserProfile {
    pub fn birth_year(&self) -> i32 {
        self.birth_date.year()
    }
}

/// Samjae classification for the fixed 2026 anchor year.
///
/// All label fields are constants keyed only on membership; the anchor is
/// intentionally not derived from the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SamjaeInfo {
    pub is_samjae: bool,
    pub status: &'static str,
    pub period: &'static str,
    pub year_th: &'static str,
}

/// Final result of one reading request.
#[derive(Debug, Clone)]
pub struct Reading {
    pub zodiac: Zodiac,
    pub samjae: SamjaeInfo,
    pub text: String,
}
