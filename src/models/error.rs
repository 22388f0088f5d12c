use serde::Serialize;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;
use crate::services::SimulatorError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug)]
pub enum ApiError {
    ValidationError(String),
    NotFound(String),
    SessionLimit(String),
    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::SessionLimit(msg) => write!(f, "Session limit: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl From<SimulatorError> for ApiError {
    fn from(err: SimulatorError) -> Self {
        match err {
            SimulatorError::SessionNotFound(_) => ApiError::NotFound(err.to_string()),
            SimulatorError::SessionLimit(_) => ApiError::SessionLimit(err.to_string()),
            SimulatorError::LockPoisoned => ApiError::InternalError(err.to_string()),
            SimulatorError::EmptyDocument
            | SimulatorError::NoWallet
            | SimulatorError::NoHash
            | SimulatorError::NoSignature
            | SimulatorError::MissingReceivedDocument
            | SimulatorError::MissingPublicKey
            | SimulatorError::MissingSignature => ApiError::ValidationError(err.to_string()),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::ValidationError(_) => {
                HttpResponse::BadRequest().json(ErrorResponse {
                    code: "VALIDATION_ERROR".to_string(),
                    message: self.to_string(),
                    details: None,
                })
            }
            ApiError::NotFound(_) => {
                HttpResponse::NotFound().json(ErrorResponse {
                    code: "NOT_FOUND".to_string(),
                    message: self.to_string(),
                    details: None,
                })
            }
            ApiError::SessionLimit(_) => {
                HttpResponse::Conflict().json(ErrorResponse {
                    code: "SESSION_LIMIT".to_string(),
                    message: self.to_string(),
                    details: None,
                })
            }
            ApiError::InternalError(_) => {
                HttpResponse::InternalServerError().json(ErrorResponse {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "Internal server error".to_string(),
                    details: Some(self.to_string()),
                })
            }
        }
    }
}
