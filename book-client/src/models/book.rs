use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub book_type: String,
    pub image: String,
    pub url: String,
    pub site_name: String,
    pub content: String,
}

/// Returned by the backend when a book is saved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessResponse {
    pub message: String,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "success".to_string()
}
