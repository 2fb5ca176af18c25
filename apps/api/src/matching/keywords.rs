//! Keyword reduction: collapses free text to a deduplicated set of its
//! noun-like terms (skills, tools, domain words).
//!
//! Tokens are classified by a small rule-based tagger: closed-class words
//! and common verbs/adjectives are filtered by lexicon, derivational
//! suffixes catch the rest, capitalized tokens count as proper nouns, and
//! anything left defaults to a common noun. The tagger looks at one token
//! at a time, so reducing a reduction reproduces it exactly.

use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

/// Token classes the reducer distinguishes. Only `Noun` and `ProperNoun`
/// survive the reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Other,
}

/// Closed-class words: determiners, prepositions, conjunctions, pronouns,
/// auxiliaries and a handful of high-frequency adverbs.
const FUNCTION_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "again", "against", "all", "almost", "along",
    "already", "also", "although", "always", "am", "among", "an", "and", "any", "anyone",
    "anything", "are", "around", "as", "at", "back", "be", "because", "been", "before", "being",
    "below", "between", "both", "but", "by", "can", "cannot", "could", "did", "do", "does",
    "doing", "done", "down", "during", "each", "either", "else", "enough", "etc", "even", "ever",
    "every", "everyone", "everything", "few", "for", "from", "further", "had", "has", "have",
    "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "however",
    "i", "if", "in", "into", "is", "it", "its", "itself", "just", "least", "less", "like",
    "many", "may", "maybe", "me", "might", "more", "most", "much", "must", "my", "myself",
    "neither", "never", "no", "none", "nor", "not", "nothing", "now", "of", "off", "often", "on",
    "once", "one", "only", "onto", "or", "other", "others", "our", "ours", "ourselves", "out",
    "over", "own", "per", "rather", "same", "shall", "she", "should", "since", "so", "some",
    "someone", "something", "still", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "throughout",
    "to", "together", "too", "toward", "towards", "under", "until", "up", "upon", "us", "very",
    "was", "we", "well", "were", "what", "when", "where", "whether", "which", "while", "who",
    "whom", "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your",
    "yours", "yourself", "yourselves",
];

/// Verbs that dominate job description prose. Third-person forms are caught
/// by stripping a trailing `s` before the lookup.
const COMMON_VERBS: &[&str] = &[
    "achieve", "analyse", "analyze", "apply", "assist", "become", "bring", "build",
    "collaborate", "communicate", "conduct", "contribute", "coordinate", "create", "define",
    "deliver", "demonstrate", "develop", "enable", "ensure", "establish", "evaluate", "execute",
    "expect", "find", "follow", "gain", "get", "give", "go", "grow", "handle", "help",
    "identify", "implement", "improve", "include", "join", "keep", "know", "lead", "learn",
    "led", "maintain", "make", "manage", "meet", "monitor", "need", "operate", "optimise",
    "optimize", "oversee", "participate", "perform", "prepare", "prioritise", "prioritize",
    "provide", "pursue", "receive", "recommend", "resolve", "run", "seek", "serve", "solve",
    "take", "troubleshoot", "understand", "use", "used", "utilise", "utilize", "want", "write",
];

/// Adjectives that recur in requirement lists.
const COMMON_ADJECTIVES: &[&str] = &[
    "able", "additional", "advanced", "basic", "best", "better", "big", "comfortable",
    "competitive", "critical", "current", "deep", "detailed", "different", "dynamic",
    "effective", "efficient", "excellent", "exceptional", "extensive", "familiar", "fast",
    "flexible", "fluent", "fresh", "full", "general", "good", "great", "high", "ideal",
    "important", "innovative", "key", "large", "local", "low", "necessary", "new", "nice",
    "open", "outstanding", "passionate", "positive", "previous", "prior", "professional",
    "proven", "quick", "ready", "related", "relevant", "reliable", "responsible", "similar",
    "simple", "small", "smart", "solid", "strong", "successful", "technical", "top", "various",
    "wide", "willing",
];

/// Gerund-shaped words that are nouns in this domain and must survive the
/// `-ing` suffix rule.
const ING_NOUNS: &[&str] = &[
    "accounting", "advertising", "banking", "billing", "branding", "building", "ceiling",
    "consulting", "engineering", "forecasting", "learning", "licensing", "manufacturing",
    "marketing", "messaging", "modeling", "modelling", "monitoring", "nursing", "onboarding",
    "pricing", "processing", "programming", "publishing", "recruiting", "reporting",
    "scheduling", "spring", "staffing", "string", "testing", "training", "troubleshooting",
    "warehousing", "writing",
];

/// Nouns that happen to end in `-ed`.
const ED_NOUNS: &[&str] = &["breed", "deed", "feed", "seed", "speed"];

/// Nouns that happen to end in `-ly`.
const LY_NOUNS: &[&str] = &["anomaly", "assembly", "family", "supply"];

/// Reduces `text` to its deduplicated noun terms, joined by single spaces.
///
/// Deduplication is case-sensitive on the exact surface form and keeps the
/// first occurrence, so the output is deterministic for a given input.
/// Empty or noun-free input yields an empty string.
pub fn extract_key_terms(text: &str) -> String {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut terms: Vec<&str> = Vec::new();

    for token in text.unicode_words() {
        if !matches!(tag_token(token), PosTag::Noun | PosTag::ProperNoun) {
            continue;
        }
        if seen.insert(token) {
            terms.push(token);
        }
    }

    terms.join(" ")
}

/// Classifies a single token. Pure: the tag depends on nothing but the
/// token itself.
pub fn tag_token(token: &str) -> PosTag {
    if !token.chars().any(|c| c.is_alphabetic()) {
        return PosTag::Other;
    }

    let lower = token.to_lowercase();
    if is_listed(FUNCTION_WORDS, &lower) || is_verb(&lower) || is_listed(COMMON_ADJECTIVES, &lower)
    {
        return PosTag::Other;
    }

    // Capitalized tokens (including acronyms) skip the suffix rules:
    // proper nouns are not derivational.
    if token.chars().next().is_some_and(|c| c.is_uppercase()) {
        return PosTag::ProperNoun;
    }

    if let Some(tag) = suffix_tag(&lower) {
        return tag;
    }

    PosTag::Noun
}

fn is_verb(lower: &str) -> bool {
    if is_listed(COMMON_VERBS, lower) {
        return true;
    }
    // Third-person singular: "analyzes" -> "analyze".
    lower
        .strip_suffix('s')
        .is_some_and(|stem| is_listed(COMMON_VERBS, stem))
}

/// Derivational suffix rules for uncapitalized tokens.
fn suffix_tag(lower: &str) -> Option<PosTag> {
    if lower.len() >= 5 && lower.ends_with("ly") && !is_listed(LY_NOUNS, lower) {
        return Some(PosTag::Other); // adverbs
    }
    if lower.len() >= 5 && lower.ends_with("ing") && !is_listed(ING_NOUNS, lower) {
        return Some(PosTag::Other); // gerunds and participles
    }
    if lower.len() >= 4 && lower.ends_with("ed") && !is_listed(ED_NOUNS, lower) {
        return Some(PosTag::Other); // past forms
    }
    if lower.len() >= 5
        && (lower.ends_with("ize") || lower.ends_with("ise") || lower.ends_with("ify"))
    {
        return Some(PosTag::Other); // verb-forming suffixes
    }
    None
}

fn is_listed(table: &[&str], word: &str) -> bool {
    table.binary_search(&word).is_ok()
}
