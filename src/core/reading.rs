use crate::core::{prompt, samjae, zodiac::Zodiac};
use crate::domain::model::{Reading, SamjaeInfo, UserProfile};
use crate::domain::ports::ReadingClient;
use crate::utils::error::{ReadingError, Result};
use crate::utils::validation::validate_non_empty_string;

/// Drives one reading interaction: validate, resolve, classify, compose,
/// submit. Generic over the client port so tests can inject stubs.
pub struct ReadingEngine<C: ReadingClient> {
    client: C,
}

impl<C: ReadingClient> ReadingEngine<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Pure pre-submit verdict, shown to the user before any network call.
    pub fn verdict(profile: &UserProfile) -> (Zodiac, SamjaeInfo) {
        let year = profile.birth_year();
        (Zodiac::from_year(year), samjae::classify(year))
    }

    pub async fn run(&self, profile: &UserProfile) -> Result<Reading> {
        // Validation errors must surface before the client is touched.
        validate_non_empty_string("name", &profile.name)?;

        let (zodiac, info) = Self::verdict(profile);
        tracing::debug!(
            "Composing prompt: zodiac={}, samjae={}",
            zodiac.english(),
            info.is_samjae
        );

        let prompt = prompt::compose(profile, zodiac, &info);
        let text = self.client.submit(&prompt).await?;

        if text.trim().is_empty() {
            return Err(ReadingError::service(
                "generative service returned an empty reading",
            ));
        }

        Ok(Reading {
            zodiac,
            samjae: info,
            text,
        })
    }
}
