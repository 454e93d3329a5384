use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::borrow::Cow;

pub type PfResult<T, E = PfError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum PfError {
    #[error("About document not found")]
    AboutNotFound,

    #[error("Project not found")]
    ProjectNotFound,

    #[error("About document already exists. Use PUT to update.")]
    AboutExists,

    #[error("{message}")]
    Validation {
        message: Cow<'static, str>,
        detail: String,
    },

    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    /// An internal failure reported under an endpoint-specific message.
    #[error("{message}")]
    Internal {
        message: &'static str,
        source: Box<PfError>,
    },

    #[error("an internal server error occurred")]
    Anyhow(#[from] anyhow::Error),
}

impl PfError {
    pub fn validation(message: impl Into<Cow<'static, str>>, detail: impl ToString) -> Self {
        Self::Validation {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::AboutNotFound => StatusCode::NOT_FOUND,
            Self::ProjectNotFound => StatusCode::NOT_FOUND,
            Self::AboutExists => StatusCode::BAD_REQUEST,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Sqlx(_) | Self::Anyhow(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal { source, .. } => source.status_code(),
        }
    }
}

/// Error envelope. `error` carries the underlying detail when there is one.
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntoResponse for PfError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            Self::AboutNotFound | Self::ProjectNotFound | Self::AboutExists => ErrorBody {
                message: self.to_string(),
                error: None,
            },
            Self::Validation {
                ref message,
                ref detail,
            } => ErrorBody {
                message: message.to_string(),
                error: Some(detail.clone()),
            },
            Self::Sqlx(ref e) => {
                tracing::error!("Database error: {:?}", e);
                ErrorBody {
                    message: e.to_string(),
                    error: None,
                }
            }
            Self::Internal {
                message,
                ref source,
            } => {
                tracing::error!("{}: {:?}", message, source);
                ErrorBody {
                    message: message.to_string(),
                    error: Some(source.to_string()),
                }
            }
            Self::Anyhow(ref e) => {
                tracing::error!("Generic error: {:?}", e);
                ErrorBody {
                    message: self.to_string(),
                    error: Some(format!("{e:#}")),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

pub trait PfResultExt<T> {
    /// Report database and other internal failures under `message`.
    ///
    /// Client errors pass through unchanged.
    fn internal_context(self, message: &'static str) -> PfResult<T>;
}

impl<T> PfResultExt<T> for PfResult<T> {
    fn internal_context(self, message: &'static str) -> PfResult<T> {
        self.map_err(|e| match e {
            PfError::Sqlx(_) | PfError::Anyhow(_) => PfError::Internal {
                message,
                source: Box::new(e),
            },
            e => e,
        })
    }
}

impl From<JsonRejection> for PfError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation("Invalid request body", rejection.body_text())
    }
}
