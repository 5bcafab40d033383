use serde::Serialize;
use text_count_domain::TextCountResult;

/// Output of [`crate::AnalyzeText`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutput {
    pub result: TextCountResult,
    /// Most frequent characters, present when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_characters: Option<Vec<TopCharacter>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopCharacter {
    #[serde(rename = "char")]
    pub ch: char,
    pub count: usize,
}
