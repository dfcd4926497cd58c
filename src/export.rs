//! Glossary document export.
//!
//! Converts glossary text into a .docx document: a level-1 heading followed
//! by one paragraph per input line. Markdown table syntax in the glossary is
//! preserved as literal text, never rendered as a table.

use std::io::{Seek, Write};

use anyhow::Result;
use docx_rs::{Docx, Paragraph, Run};

/// Heading placed at the top of every exported document
pub const DOCUMENT_TITLE: &str = "CLIL Glossary";

/// Filename offered to the client for the downloaded attachment
pub const ATTACHMENT_NAME: &str = "glossary.docx";

/// Build the in-memory document: heading plus one paragraph per
/// `'\n'`-separated line, verbatim and in order.
pub fn build_document(text: &str) -> Docx {
    let mut docx = Docx::new().add_paragraph(
        Paragraph::new()
            .add_run(Run::new().add_text(DOCUMENT_TITLE))
            .style("Heading1"),
    );

    for line in text.split('\n') {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
    }

    docx
}

/// Pack the document for `text` into `writer` as a .docx archive.
pub fn write_document<W: Write + Seek>(text: &str, writer: W) -> Result<()> {
    build_document(text).build().pack(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::DocumentChild;
    use std::io::Cursor;

    fn paragraph_texts(docx: &Docx) -> Vec<String> {
        docx.document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(p) => Some(p.raw_text()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn document_has_one_paragraph_per_line_plus_heading() {
        let text = "| Term | Kazakh |\n|---|---|\n| algorithm | алгоритм |";
        let docx = build_document(text);
        let paragraphs = paragraph_texts(&docx);

        assert_eq!(paragraphs.len(), 4);
        assert_eq!(paragraphs[0], DOCUMENT_TITLE);
        assert_eq!(paragraphs[1], "| Term | Kazakh |");
        assert_eq!(paragraphs[2], "|---|---|");
        assert_eq!(paragraphs[3], "| algorithm | алгоритм |");
    }

    #[test]
    fn blank_lines_become_empty_paragraphs() {
        let docx = build_document("first\n\nlast");
        let paragraphs = paragraph_texts(&docx);

        assert_eq!(paragraphs.len(), 4);
        assert_eq!(paragraphs[2], "");
    }

    #[test]
    fn packed_document_is_a_zip_archive() {
        let mut buffer = Cursor::new(Vec::new());
        write_document("single line", &mut buffer).unwrap();

        let bytes = buffer.into_inner();
        // .docx files are ZIP archives, so the magic bytes are "PK"
        assert!(bytes.starts_with(b"PK"));
    }
}
