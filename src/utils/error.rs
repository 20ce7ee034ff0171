use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadingError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Validation error in '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Authentication error: {message}")]
    AuthError { message: String },

    #[error("Reading service error: {message}")]
    ServiceError { message: String },
}

impl ReadingError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        ReadingError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        ReadingError::AuthError {
            message: message.into(),
        }
    }

    pub fn service(message: impl Into<String>) -> Self {
        ReadingError::ServiceError {
            message: message.into(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReadingError::ValidationError { field, message } => {
                format!("입력값이 올바르지 않습니다 ({}): {}", field, message)
            }
            ReadingError::AuthError { message } => {
                format!("API 키 인증에 실패했습니다: {}", message)
            }
            ReadingError::ServiceError { message } => {
                format!("천기를 읽는 중 오류가 발생했습니다: {}", message)
            }
            ReadingError::ApiError(e) => {
                format!("천기를 읽는 중 오류가 발생했습니다: {}", e)
            }
            ReadingError::SerializationError(e) => {
                format!("응답을 해석하지 못했습니다: {}", e)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReadingError::ValidationError { .. } => "입력값을 고친 뒤 다시 실행해주세요.",
            ReadingError::AuthError { .. } => {
                "--api-key 옵션 또는 GEMINI_API_KEY 환경변수를 확인해주세요."
            }
            ReadingError::ServiceError { .. }
            | ReadingError::ApiError(_)
            | ReadingError::SerializationError(_) => {
                "네트워크 상태를 확인하고 잠시 후 다시 시도해주세요."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ReadingError>;
