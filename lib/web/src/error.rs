use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rdf_deref_backend::ResolveError;

#[derive(thiserror::Error, Debug)]
pub enum ResolverServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Content Negotiation Failed: {0}")]
    ContentNegotiation(String),
    #[error("Gateway timeout: {0}")]
    GatewayTimeout(String),
    #[error("Internal server error: {0}")]
    Internal(anyhow::Error),
}

impl From<ResolveError> for ResolverServerError {
    fn from(error: ResolveError) -> Self {
        match error {
            ResolveError::Validation(error) => Self::BadRequest(error.to_string()),
            ResolveError::NotFound { uri } => Self::NotFound(format!(
                "No triples found for <{uri}>. The resource is not described by this server."
            )),
            ResolveError::Timeout(_) => Self::GatewayTimeout(error.to_string()),
            ResolveError::Execution { .. } | ResolveError::Parse(_) => {
                Self::Internal(anyhow::Error::new(error))
            }
        }
    }
}

impl IntoResponse for ResolverServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ResolverServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ResolverServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ResolverServerError::ContentNegotiation(msg) => (StatusCode::NOT_ACCEPTABLE, msg),
            ResolverServerError::GatewayTimeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg),
            ResolverServerError::Internal(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        (status, message).into_response()
    }
}
