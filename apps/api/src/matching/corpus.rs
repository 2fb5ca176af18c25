//! Startup preprocessing: reduces every job description to its keyword
//! form exactly once, before the server starts accepting requests.

use tracing::debug;

use crate::matching::keywords::extract_key_terms;
use crate::models::job::{JobCatalog, JobPosting, JobRow};

/// Builds the in-memory catalog from raw dataset rows.
///
/// Each description is reduced here and cached on the posting; request
/// handlers read the cached form and never recompute or overwrite it.
pub fn preprocess(rows: Vec<JobRow>) -> JobCatalog {
    let postings = rows
        .into_iter()
        .map(|row| {
            let processed_description = extract_key_terms(&row.description);
            debug!(
                title = %row.title,
                terms = processed_description.split_whitespace().count(),
                "reduced job description"
            );
            JobPosting {
                title: row.title,
                description: row.description,
                processed_description,
            }
        })
        .collect();

    JobCatalog::new(postings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str, description: &str) -> JobRow {
        JobRow {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_preprocess_reduces_each_description() {
        let catalog = preprocess(vec![row(
            "Data Analyst",
            "Analyze data using Python and SQL.",
        )]);
        assert_eq!(catalog.postings()[0].processed_description, "data Python SQL");
    }

    #[test]
    fn test_preprocess_keeps_the_raw_description() {
        let catalog = preprocess(vec![row("Chef", "Prepare meals in a kitchen.")]);
        let posting = &catalog.postings()[0];
        assert_eq!(posting.description, "Prepare meals in a kitchen.");
        assert_eq!(posting.processed_description, "meals kitchen");
    }

    #[test]
    fn test_preprocess_preserves_row_order() {
        let catalog = preprocess(vec![
            row("First", "Databases."),
            row("Second", "Kitchens."),
            row("Third", "Gardens."),
        ]);
        let titles: Vec<&str> = catalog
            .postings()
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_noun_free_description_reduces_to_empty() {
        let catalog = preprocess(vec![row("Oddity", "Develop and improve quickly.")]);
        assert_eq!(catalog.postings()[0].processed_description, "");
    }
}
