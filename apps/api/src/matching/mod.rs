// Matching pipeline: PDF extraction, keyword reduction, TF-IDF scoring.
// The catalog side is reduced once at startup (corpus); the résumé side is
// vectorized raw, per request.

pub mod corpus;
pub mod extractor;
pub mod handlers;
pub mod keywords;
pub mod ranker;
pub mod vectorizer;
