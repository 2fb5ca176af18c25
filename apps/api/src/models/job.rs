use serde::{Deserialize, Serialize};

/// One raw dataset row. Field names follow the dataset's CSV header;
/// extra columns are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct JobRow {
    #[serde(rename = "Job Title")]
    pub title: String,
    #[serde(rename = "Job Description")]
    pub description: String,
}

/// A job posting with its cached keyword reduction.
#[derive(Debug, Clone)]
pub struct JobPosting {
    pub title: String,
    /// Original description as loaded from the dataset. Scoring only ever
    /// sees the reduced form.
    #[allow(dead_code)]
    pub description: String,
    /// Space-joined set of noun terms derived from `description` once at
    /// startup. Never recomputed afterward.
    pub processed_description: String,
}

/// Ordered collection of job postings. Built once at startup and only read
/// after that; per-request scores are kept in request-local structures, not
/// written back here.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    postings: Vec<JobPosting>,
}

impl JobCatalog {
    pub fn new(postings: Vec<JobPosting>) -> Self {
        Self { postings }
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

/// One (title, score) pair in the ranked response. Key names are part of
/// the wire contract consumed by the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEntry {
    #[serde(rename = "Job Title")]
    pub title: String,
    #[serde(rename = "Match_Score")]
    pub score: f64,
}

/// Full match response: the single best match plus every posting ranked
/// descending by score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatches {
    pub best_match: MatchEntry,
    pub all_matches: Vec<MatchEntry>,
}
