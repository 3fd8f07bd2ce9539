use super::{decode_json, AnalysisApi, ApiClient};
use crate::error::ClientError;
use crate::models::analysis::{
    AnalysisKind, AnalysisOutcome, AnalysisResponse, CharacterAnalysis, LanguageAnalysis,
    SentimentAnalysis, SummaryAnalysis,
};
use async_trait::async_trait;
use futures::future::join_all;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

impl ApiClient {
    /// Runs one analysis job and wraps the decoded result in a success envelope.
    ///
    /// Every failure collapses into `"{kind} analysis failed"`; the underlying
    /// error is logged and kept as the error's source.
    pub async fn fetch_api<T: DeserializeOwned>(
        &self,
        kind: AnalysisKind,
        book_id: &str,
    ) -> Result<AnalysisResponse<T>, ClientError> {
        match self.run_analysis(kind, book_id).await {
            Ok(data) => Ok(AnalysisResponse::succeeded(data)),
            Err(e) => {
                warn!("{} analysis for book {} failed: {}", kind, book_id, e);
                Err(ClientError::analysis(kind, e))
            }
        }
    }

    async fn run_analysis<T: DeserializeOwned>(
        &self,
        kind: AnalysisKind,
        book_id: &str,
    ) -> Result<T, ClientError> {
        let url = self.url(kind.endpoint());
        debug!("POST {}?book_id={}", url, book_id);

        let response = self
            .client
            .post(&url)
            .query(&[("book_id", book_id)])
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        decode_json(response).await
    }

    pub async fn analyze_characters(
        &self,
        book_id: &str,
    ) -> Result<AnalysisResponse<CharacterAnalysis>, ClientError> {
        self.fetch_api(AnalysisKind::Characters, book_id).await
    }

    pub async fn analyze_language(
        &self,
        book_id: &str,
    ) -> Result<AnalysisResponse<LanguageAnalysis>, ClientError> {
        self.fetch_api(AnalysisKind::Language, book_id).await
    }

    pub async fn analyze_sentiment(
        &self,
        book_id: &str,
    ) -> Result<AnalysisResponse<SentimentAnalysis>, ClientError> {
        self.fetch_api(AnalysisKind::Sentiment, book_id).await
    }

    pub async fn analyze_summary(
        &self,
        book_id: &str,
    ) -> Result<AnalysisResponse<SummaryAnalysis>, ClientError> {
        self.fetch_api(AnalysisKind::Summary, book_id).await
    }

    /// Requests every analysis kind at once. Results come back in
    /// [`AnalysisKind::ALL`] order; one failure does not stop the others.
    pub async fn analyze_all(
        &self,
        book_id: &str,
    ) -> Vec<(AnalysisKind, Result<AnalysisOutcome, ClientError>)> {
        info!("Requesting all analyses for book {}", book_id);

        let requests = AnalysisKind::ALL
            .into_iter()
            .map(|kind| async move { (kind, self.analyze(kind, book_id).await) });

        join_all(requests).await
    }
}

#[async_trait]
impl AnalysisApi for ApiClient {
    async fn analyze(
        &self,
        kind: AnalysisKind,
        book_id: &str,
    ) -> Result<AnalysisOutcome, ClientError> {
        let outcome = match kind {
            AnalysisKind::Characters => {
                AnalysisOutcome::Characters(self.analyze_characters(book_id).await?)
            }
            AnalysisKind::Language => {
                AnalysisOutcome::Language(self.analyze_language(book_id).await?)
            }
            AnalysisKind::Sentiment => {
                AnalysisOutcome::Sentiment(self.analyze_sentiment(book_id).await?)
            }
            AnalysisKind::Summary => AnalysisOutcome::Summary(self.analyze_summary(book_id).await?),
        };
        Ok(outcome)
    }
}
