//! WordprocessingML for the blocks produced by [`super::build_document`].

use std::fmt::Write;

use crate::export::docx::{Align, Block, Cell, HeadingLevel, Paragraph, Run, Table};
use crate::render::html::escape_markup;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// US letter, in twips.
const PAGE_WIDTH: u32 = 12_240;
const PAGE_HEIGHT: u32 = 15_840;
/// Half an inch on every side.
const PAGE_MARGIN: u32 = 720;
const CONTENT_WIDTH: u32 = PAGE_WIDTH - 2 * PAGE_MARGIN;

/// `numId` of the bullet list defined in `numbering.xml`.
pub const BULLET_NUM_ID: u32 = 1;

pub fn document_xml(blocks: &[Block]) -> String {
    let mut out = String::with_capacity(8 * 1024);
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    let _ = write!(out, r#"<w:document xmlns:w="{W_NS}" xmlns:r="{R_NS}"><w:body>"#);
    for block in blocks {
        match block {
            Block::Paragraph(p) => write_paragraph(&mut out, p),
            Block::Table(t) => write_table(&mut out, t),
        }
    }
    let _ = write!(
        out,
        r#"<w:sectPr><w:pgSz w:w="{PAGE_WIDTH}" w:h="{PAGE_HEIGHT}"/><w:pgMar w:top="{m}" w:right="{m}" w:bottom="{m}" w:left="{m}" w:header="0" w:footer="0" w:gutter="0"/></w:sectPr>"#,
        m = PAGE_MARGIN
    );
    out.push_str("</w:body></w:document>");
    out
}

fn write_paragraph(out: &mut String, p: &Paragraph) {
    out.push_str("<w:p><w:pPr>");
    if let Some(level) = p.heading {
        let style = match level {
            HeadingLevel::Title => "Heading1",
            HeadingLevel::Section => "Heading2",
        };
        let _ = write!(out, r#"<w:pStyle w:val="{style}"/>"#);
    }
    if p.bullet {
        let _ = write!(
            out,
            r#"<w:numPr><w:ilvl w:val="0"/><w:numId w:val="{BULLET_NUM_ID}"/></w:numPr>"#
        );
    }
    if p.divider {
        out.push_str(
            r#"<w:pBdr><w:bottom w:val="single" w:sz="6" w:space="1" w:color="CCCCCC"/></w:pBdr>"#,
        );
    }
    let _ = write!(
        out,
        r#"<w:spacing w:before="{}" w:after="{}"/>"#,
        p.spacing_before, p.spacing_after
    );
    let jc = match p.align {
        Align::Left => "left",
        Align::Center => "center",
        Align::Right => "right",
    };
    let _ = write!(out, r#"<w:jc w:val="{jc}"/>"#);
    out.push_str("</w:pPr>");

    for run in &p.runs {
        write_run(out, run);
    }
    out.push_str("</w:p>");
}

fn write_run(out: &mut String, run: &Run) {
    if run.text.is_empty() {
        return;
    }
    out.push_str("<w:r>");
    if run.bold || run.italic || run.size.is_some() {
        out.push_str("<w:rPr>");
        if run.bold {
            out.push_str("<w:b/>");
        }
        if run.italic {
            out.push_str("<w:i/>");
        }
        if let Some(size) = run.size {
            let _ = write!(out, r#"<w:sz w:val="{size}"/>"#);
        }
        out.push_str("</w:rPr>");
    }
    let _ = write!(
        out,
        r#"<w:t xml:space="preserve">{}</w:t></w:r>"#,
        escape_xml(&run.text)
    );
}

/// Escapes run text for XML 1.0, dropping the control characters it cannot carry.
fn escape_xml(raw: &str) -> String {
    let legal: String = raw
        .chars()
        .filter(|&c| {
            !matches!(
                c,
                '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
            )
        })
        .collect();
    escape_markup(&legal)
}

fn write_table(out: &mut String, table: &Table) {
    out.push_str(r#"<w:tbl><w:tblPr><w:tblW w:w="5000" w:type="pct"/><w:tblBorders>"#);
    for edge in ["top", "left", "bottom", "right", "insideH", "insideV"] {
        let _ = write!(out, r#"<w:{edge} w:val="nil"/>"#);
    }
    out.push_str(r#"</w:tblBorders><w:tblLayout w:type="fixed"/></w:tblPr><w:tblGrid>"#);
    for pct in &table.column_pct {
        let _ = write!(out, r#"<w:gridCol w:w="{}"/>"#, CONTENT_WIDTH * pct / 100);
    }
    out.push_str("</w:tblGrid>");

    for row in &table.rows {
        out.push_str("<w:tr>");
        for cell in row {
            write_cell(out, cell);
        }
        out.push_str("</w:tr>");
    }
    out.push_str("</w:tbl>");
}

fn write_cell(out: &mut String, cell: &Cell) {
    out.push_str("<w:tc>");
    if let Some(pct) = cell.width_pct {
        // pct widths are in fiftieths of a percent
        let _ = write!(out, r#"<w:tcPr><w:tcW w:w="{}" w:type="pct"/></w:tcPr>"#, pct * 50);
    }
    write_paragraph(out, &cell.paragraph);
    out.push_str("</w:tc>");
}
