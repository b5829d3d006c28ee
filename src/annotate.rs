//! Summary annotations: keywords, legal citations, highlighting.
//!
//! These helpers run over the aggregated plain summary only. They are deliberately literal:
//! citation matching is a fixed pattern, and highlighting is raw substring replacement whose
//! partial-word collisions are part of the observable output contract.

use crate::models::analysis::EntitySpan;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Entity type tags retained as document keywords.
const KEYWORD_LABELS: [&str; 5] = ["LAW", "DATE", "ORG", "PERSON", "GPE"];

/// Filter entity spans down to keyword labels and deduplicate their surface text.
///
/// First occurrence wins, so the keyword order follows the entity order in the summary.
pub fn keywords_from_entities(entities: &[EntitySpan]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut keywords = Vec::new();
    for entity in entities {
        if KEYWORD_LABELS.contains(&entity.label.as_str()) && seen.insert(entity.text.clone()) {
            keywords.push(entity.text.clone());
        }
    }
    keywords
}

static CITATION_PATTERN: OnceLock<Regex> = OnceLock::new();

fn citation_pattern() -> &'static Regex {
    CITATION_PATTERN.get_or_init(|| {
        Regex::new(r"(Section\s\d+|Article\s\d+|Act\s\d{4})").expect("citation pattern compiles")
    })
}

/// Collect distinct legal references (sections, articles, four-digit acts) from a summary.
pub fn extract_citations(text: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut citations = Vec::new();
    for found in citation_pattern().find_iter(text) {
        let citation = found.as_str().to_string();
        if seen.insert(citation.clone()) {
            citations.push(citation);
        }
    }
    citations
}

/// Wrap every occurrence of each keyword in `<b>` tags via raw substring replacement.
///
/// A keyword that happens to appear inside a longer word is still wrapped; that collision is
/// an accepted quirk of the scheme, not something to sanitize away.
pub fn highlight_keywords(summary: &str, keywords: &[String]) -> String {
    let mut highlighted = summary.to_string();
    for keyword in keywords {
        if keyword.is_empty() {
            continue;
        }
        highlighted = highlighted.replace(keyword.as_str(), &format!("<b>{keyword}</b>"));
    }
    highlighted
}
