use crate::models::analysis::AnalysisKind;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure body returned by the backend on any non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub detail: String,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{detail}")]
    Backend { status: StatusCode, detail: String },
    #[error("Failed to {operation}: {source}")]
    Book {
        operation: &'static str,
        #[source]
        source: Box<ClientError>,
    },
    // Backend detail is only reachable through source().
    #[error("{kind} analysis failed")]
    Analysis {
        kind: AnalysisKind,
        #[source]
        source: Box<ClientError>,
    },
    #[error("Unknown analysis kind: {0}")]
    UnknownAnalysis(String),
}

impl ClientError {
    pub(crate) fn book(operation: &'static str, source: ClientError) -> Self {
        ClientError::Book {
            operation,
            source: Box::new(source),
        }
    }

    pub(crate) fn analysis(kind: AnalysisKind, source: ClientError) -> Self {
        ClientError::Analysis {
            kind,
            source: Box::new(source),
        }
    }

    /// HTTP status reported by the backend, looking through wrappers.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Backend { status, .. } => Some(*status),
            ClientError::Request(e) => e.status(),
            ClientError::Book { source, .. } | ClientError::Analysis { source, .. } => {
                source.status()
            }
            _ => None,
        }
    }
}
