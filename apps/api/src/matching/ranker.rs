//! Catalog ranking: scores one résumé against every posting in a single
//! vectorization pass and orders the results.

use std::cmp::Ordering;

use tracing::debug;

use crate::errors::AppError;
use crate::matching::vectorizer::{cosine_similarity, vectorize};
use crate::models::job::{JobCatalog, MatchEntry, RankedMatches};

/// Multipliers applied to raw cosine similarity. Scores land in 0..=600;
/// API consumers expect these magnitudes.
pub const SCORE_SCALE: f64 = 100.0;
pub const SCORE_AMPLIFICATION: f64 = 6.0;

/// Ranks every posting in `catalog` against `resume_text`.
///
/// The postings' reduced descriptions and the raw résumé text are
/// vectorized as one batch, résumé last, then each posting is scored by
/// cosine similarity against the résumé row. `best_match` is the first
/// posting with the maximum score (catalog order breaks ties) and
/// `all_matches` is sorted descending, equal scores keeping catalog order.
pub fn rank_catalog(catalog: &JobCatalog, resume_text: &str) -> Result<RankedMatches, AppError> {
    if catalog.is_empty() {
        return Err(AppError::Vectorization(
            "job catalog is empty, nothing to rank".to_string(),
        ));
    }

    let mut documents: Vec<&str> = catalog
        .postings()
        .iter()
        .map(|posting| posting.processed_description.as_str())
        .collect();
    documents.push(resume_text);

    let vectors = vectorize(&documents)?;
    debug!(
        "vectorized {} documents over {} terms",
        vectors.rows.len(),
        vectors.terms.len()
    );
    let (resume_row, posting_rows) = vectors.rows.split_last().ok_or_else(|| {
        AppError::Vectorization("vectorizer returned no rows".to_string())
    })?;

    let mut all_matches: Vec<MatchEntry> = catalog
        .postings()
        .iter()
        .zip(posting_rows)
        .map(|(posting, row)| MatchEntry {
            title: posting.title.clone(),
            score: cosine_similarity(row, resume_row) * SCORE_SCALE * SCORE_AMPLIFICATION,
        })
        .collect();

    let best_match = all_matches[index_of_max(&all_matches)].clone();

    all_matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    Ok(RankedMatches {
        best_match,
        all_matches,
    })
}

/// Index of the highest-scoring entry. Later entries must score strictly
/// higher to win, so ties go to the earliest posting.
fn index_of_max(entries: &[MatchEntry]) -> usize {
    let mut best = 0;
    for (index, entry) in entries.iter().enumerate().skip(1) {
        if entry.score > entries[best].score {
            best = index;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::corpus::preprocess;
    use crate::models::job::JobRow;

    fn catalog_from(rows: &[(&str, &str)]) -> JobCatalog {
        preprocess(
            rows.iter()
                .map(|(title, description)| JobRow {
                    title: title.to_string(),
                    description: description.to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_relevant_posting_outranks_unrelated_one() {
        let catalog = catalog_from(&[
            ("Data Analyst", "Analyze data using Python and SQL."),
            ("Chef", "Prepare meals in a kitchen."),
        ]);
        let ranked =
            rank_catalog(&catalog, "Experienced in Python, SQL, and data analysis.").unwrap();

        assert_eq!(ranked.best_match.title, "Data Analyst");
        assert_eq!(ranked.all_matches[0].title, "Data Analyst");
        assert!(ranked.all_matches[0].score > ranked.all_matches[1].score);
    }

    #[test]
    fn test_identical_text_scores_full_amplified_range() {
        let catalog = catalog_from(&[("Data Analyst", "Python SQL data")]);
        let ranked = rank_catalog(&catalog, "Python SQL data").unwrap();

        // The reduced posting and the résumé are the same bag of terms, so
        // cosine is 1.0 and the score is exactly 100 * 6.
        assert!(
            (ranked.best_match.score - 600.0).abs() < 1e-9,
            "expected 600, got {}",
            ranked.best_match.score
        );
    }

    #[test]
    fn test_scores_stay_within_amplified_bounds() {
        let catalog = catalog_from(&[
            ("Data Analyst", "Analyze data using Python and SQL."),
            ("Chef", "Prepare meals in a kitchen."),
            ("Writer", "Write articles about food and travel."),
        ]);
        let ranked = rank_catalog(&catalog, "Python data kitchen articles").unwrap();

        for entry in &ranked.all_matches {
            assert!(entry.score.is_finite());
            assert!(
                (0.0..=600.0 + 1e-9).contains(&entry.score),
                "score {} out of range",
                entry.score
            );
        }
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let catalog = catalog_from(&[
            ("Data Analyst", "Analyze data using Python and SQL."),
            ("Chef", "Prepare meals in a kitchen."),
            ("Writer", "Write articles about food and travel."),
        ]);
        let resume = "Python, SQL and some food writing.";

        let first = rank_catalog(&catalog, resume).unwrap();
        let second = rank_catalog(&catalog, resume).unwrap();

        assert_eq!(first.best_match, second.best_match);
        assert_eq!(first.all_matches, second.all_matches);
    }

    #[test]
    fn test_tie_goes_to_the_earlier_posting() {
        let catalog = catalog_from(&[
            ("First Posting", "Python SQL data"),
            ("Second Posting", "Python SQL data"),
        ]);
        let ranked = rank_catalog(&catalog, "Python SQL data").unwrap();

        assert_eq!(ranked.best_match.title, "First Posting");
        // The descending sort is stable, so equal scores keep catalog order.
        assert_eq!(ranked.all_matches[0].title, "First Posting");
        assert_eq!(ranked.all_matches[1].title, "Second Posting");
    }

    #[test]
    fn test_all_matches_sorted_descending() {
        let catalog = catalog_from(&[
            ("Chef", "Prepare meals in a kitchen."),
            ("Data Analyst", "Analyze data using Python and SQL."),
            ("Gardener", "Tend plants and lawns."),
        ]);
        let ranked = rank_catalog(&catalog, "Python and SQL for data work").unwrap();

        assert_eq!(ranked.all_matches.len(), 3);
        for pair in ranked.all_matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(ranked.best_match, ranked.all_matches[0]);
    }

    #[test]
    fn test_unrelated_resume_scores_zero_everywhere() {
        let catalog = catalog_from(&[("Chef", "Prepare meals in a kitchen.")]);
        let ranked = rank_catalog(&catalog, "quantum chromodynamics").unwrap();

        assert_eq!(ranked.best_match.score, 0.0);
    }

    #[test]
    fn test_empty_resume_is_still_ranked() {
        // An empty résumé vectorizes to a zero row: every score is 0 and
        // the first posting wins by tie-break.
        let catalog = catalog_from(&[
            ("Data Analyst", "Analyze data using Python and SQL."),
            ("Chef", "Prepare meals in a kitchen."),
        ]);
        let ranked = rank_catalog(&catalog, "").unwrap();

        assert_eq!(ranked.best_match.title, "Data Analyst");
        assert!(ranked.all_matches.iter().all(|entry| entry.score == 0.0));
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let catalog = JobCatalog::new(Vec::new());
        let result = rank_catalog(&catalog, "Python");
        assert!(matches!(result, Err(AppError::Vectorization(_))));
    }

    #[test]
    fn test_ranking_does_not_mutate_the_catalog() {
        let catalog = catalog_from(&[
            ("Data Analyst", "Analyze data using Python and SQL."),
            ("Chef", "Prepare meals in a kitchen."),
        ]);
        let before: Vec<String> = catalog
            .postings()
            .iter()
            .map(|p| p.processed_description.clone())
            .collect();

        rank_catalog(&catalog, "Python SQL").unwrap();
        rank_catalog(&catalog, "kitchen meals").unwrap();

        let after: Vec<String> = catalog
            .postings()
            .iter()
            .map(|p| p.processed_description.clone())
            .collect();
        assert_eq!(before, after);
    }
}
