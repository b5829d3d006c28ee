//! DOCX paragraph extraction via docx-rs.

use super::ExtractError;
use docx_rs::{DocumentChild, ParagraphChild, RunChild};

/// Concatenate paragraph texts with newline separators, in document order.
///
/// Every paragraph contributes a line, including empty ones, so blank paragraphs in the
/// source survive as blank lines.
pub(super) async fn paragraph_text(bytes: Vec<u8>) -> Result<String, ExtractError> {
    tokio::task::spawn_blocking(move || {
        let docx = docx_rs::read_docx(&bytes)
            .map_err(|error| ExtractError::Docx(format!("failed to parse document: {error}")))?;
        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(text_of_paragraph(paragraph)),
                _ => None,
            })
            .collect();
        Ok(paragraphs.join("\n"))
    })
    .await?
}

fn text_of_paragraph(paragraph: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        match child {
            ParagraphChild::Run(run) => push_run_text(&mut text, run),
            ParagraphChild::Hyperlink(link) => {
                for link_child in &link.children {
                    if let ParagraphChild::Run(run) = link_child {
                        push_run_text(&mut text, run);
                    }
                }
            }
            _ => {}
        }
    }
    text
}

fn push_run_text(text: &mut String, run: &docx_rs::Run) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}
