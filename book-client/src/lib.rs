//! Client for the book analysis backend.
//!
//! [`ApiClient`] talks to the backend over HTTP: book storage through
//! [`BookApi`] and text analysis jobs through [`AnalysisApi`]. [`BookStore`]
//! holds the current book selection for whatever UI drives the client.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{AnalysisApi, ApiClient, BookApi};
pub use config::ClientConfig;
pub use error::{ApiErrorBody, ClientError};
pub use models::analysis::{
    AnalysisKind, AnalysisOutcome, AnalysisResponse, CharacterAnalysis, LanguageAnalysis,
    SentimentAnalysis, SummaryAnalysis,
};
pub use models::book::{Book, SuccessResponse};
pub use store::{BookStore, SelectionAction, SelectionState};
