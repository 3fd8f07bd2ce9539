use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The analysis jobs the backend knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisKind {
    Characters,
    Language,
    Sentiment,
    Summary,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 4] = [
        AnalysisKind::Characters,
        AnalysisKind::Language,
        AnalysisKind::Sentiment,
        AnalysisKind::Summary,
    ];

    pub fn endpoint(self) -> &'static str {
        match self {
            AnalysisKind::Characters => "characters",
            AnalysisKind::Language => "language",
            AnalysisKind::Sentiment => "sentiment",
            AnalysisKind::Summary => "summary",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

impl FromStr for AnalysisKind {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        AnalysisKind::ALL
            .into_iter()
            .find(|kind| kind.endpoint() == name)
            .ok_or_else(|| ClientError::UnknownAnalysis(s.to_string()))
    }
}

/// Result fields merged next to `success` on the wire. Only the client
/// builds one, so `success` is never read from a response body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnalysisResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T> AnalysisResponse<T> {
    pub fn succeeded(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CharacterAnalysis {
    pub characters: Vec<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LanguageAnalysis {
    pub language_code: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SentimentAnalysis {
    pub sentiment: f64,
    pub classification: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SummaryAnalysis {
    pub summary: String,
    pub word_count: u64,
}

/// One analysis result, tagged by the kind that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Characters(AnalysisResponse<CharacterAnalysis>),
    Language(AnalysisResponse<LanguageAnalysis>),
    Sentiment(AnalysisResponse<SentimentAnalysis>),
    Summary(AnalysisResponse<SummaryAnalysis>),
}

impl AnalysisOutcome {
    pub fn kind(&self) -> AnalysisKind {
        match self {
            AnalysisOutcome::Characters(_) => AnalysisKind::Characters,
            AnalysisOutcome::Language(_) => AnalysisKind::Language,
            AnalysisOutcome::Sentiment(_) => AnalysisKind::Sentiment,
            AnalysisOutcome::Summary(_) => AnalysisKind::Summary,
        }
    }

    pub fn success(&self) -> bool {
        match self {
            AnalysisOutcome::Characters(r) => r.success,
            AnalysisOutcome::Language(r) => r.success,
            AnalysisOutcome::Sentiment(r) => r.success,
            AnalysisOutcome::Summary(r) => r.success,
        }
    }

    /// One-line description for logs and the console.
    pub fn summary_line(&self) -> String {
        match self {
            AnalysisOutcome::Characters(r) => {
                format!("{} characters found", r.data.characters.len())
            }
            AnalysisOutcome::Language(r) => format!(
                "language {} (confidence {:.2})",
                r.data.language_code, r.data.confidence
            ),
            AnalysisOutcome::Sentiment(r) => format!(
                "sentiment {:.3} ({})",
                r.data.sentiment, r.data.classification
            ),
            AnalysisOutcome::Summary(r) => {
                format!("summary of {} words", r.data.word_count)
            }
        }
    }
}
