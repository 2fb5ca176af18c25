//! TF-IDF vectors over a shared vocabulary, plus cosine similarity.
//!
//! All documents for a request are vectorized together: the vocabulary and
//! the document frequencies come from that batch alone, so scores are
//! self-contained and two requests never influence each other.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Vectorization
// ────────────────────────────────────────────────────────────────────────────

/// The result of vectorizing a batch of documents.
pub struct TfidfVectors {
    /// Alphabetically sorted vocabulary; column `i` of every row is `terms[i]`.
    pub terms: Vec<String>,
    /// One L2-normalized row per input document, in input order.
    pub rows: Vec<Vec<f64>>,
}

/// Builds TF-IDF rows for `documents`.
///
/// Terms are lowercased word runs of two or more characters. Inverse
/// document frequency is smoothed, `ln((1 + n) / (1 + df)) + 1`, so no
/// term ever gets a zero weight. Each row is scaled to unit length; a
/// document with no vocabulary terms keeps an all-zero row.
///
/// Fails with [`AppError::Vectorization`] when no document contributes a
/// single term, since there is nothing to compare.
pub fn vectorize(documents: &[&str]) -> Result<TfidfVectors, AppError> {
    let tokenized: Vec<Vec<String>> = documents.iter().map(|doc| tokenize(doc)).collect();

    let mut terms: BTreeSet<&str> = BTreeSet::new();
    for tokens in &tokenized {
        terms.extend(tokens.iter().map(String::as_str));
    }
    if terms.is_empty() {
        return Err(AppError::Vectorization(
            "empty vocabulary: no document contains a term of two or more characters".to_string(),
        ));
    }

    let column: HashMap<&str, usize> = terms
        .iter()
        .enumerate()
        .map(|(index, term)| (*term, index))
        .collect();

    // Document frequency counts each document at most once per term.
    let mut df = vec![0u32; column.len()];
    for tokens in &tokenized {
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for term in unique {
            df[column[term]] += 1;
        }
    }

    let doc_count = documents.len() as f64;
    let idf: Vec<f64> = df
        .iter()
        .map(|&count| ((1.0 + doc_count) / (1.0 + f64::from(count))).ln() + 1.0)
        .collect();

    let mut rows = Vec::with_capacity(tokenized.len());
    for tokens in &tokenized {
        let mut row = vec![0.0_f64; column.len()];
        for token in tokens {
            row[column[token.as_str()]] += 1.0;
        }
        for (value, weight) in row.iter_mut().zip(&idf) {
            *value *= weight;
        }
        normalize(&mut row);
        rows.push(row);
    }

    Ok(TfidfVectors {
        terms: terms.into_iter().map(str::to_owned).collect(),
        rows,
    })
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_lowercase)
        .collect()
}

fn normalize(row: &mut [f64]) {
    let norm = row.iter().map(|value| value * value).sum::<f64>().sqrt();
    if norm > 0.0 {
        for value in row.iter_mut() {
            *value /= norm;
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Similarity
// ────────────────────────────────────────────────────────────────────────────

/// Cosine similarity between two equal-length vectors. Zero vectors have no
/// direction, so any comparison involving one yields 0.0.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|value| value * value).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|value| value * value).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
