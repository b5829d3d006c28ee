//! Document-level aggregation of chunk summaries.

use super::summarize::ChunkSummary;

/// Document-level summary in all three output formats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSummary {
    /// Space-joined plain summaries, in chunk order.
    pub plain: String,
    /// Space-joined bulleted summaries, in chunk order.
    pub bullets: String,
    /// Space-joined FAQ summaries, in chunk order.
    pub faq: String,
}

/// Merge per-chunk summaries into a document-level summary.
///
/// Each field is the space-joined concatenation of the chunk values in input order. There is
/// no re-summarization or deduplication across chunks, so long documents produce
/// proportionally long aggregates. An empty input yields three empty strings.
pub fn merge(summaries: &[ChunkSummary]) -> DocumentSummary {
    DocumentSummary {
        plain: join_field(summaries, |summary| &summary.plain),
        bullets: join_field(summaries, |summary| &summary.bullets),
        faq: join_field(summaries, |summary| &summary.faq),
    }
}

fn join_field<'a, F>(summaries: &'a [ChunkSummary], field: F) -> String
where
    F: Fn(&'a ChunkSummary) -> &'a str,
{
    summaries.iter().map(field).collect::<Vec<_>>().join(" ")
}
