mod common;
use common::{sample_sheet, temp_out};

use std::fs;
use std::path::Path;

use tripsheet::core::layout_sheet;
use tripsheet::export::SheetPdf;

#[test]
fn test_pdf_one_page_per_sheet() {
    let out = temp_out("pdf_two_pages", "pdf");

    let sheet = sample_sheet();
    let scene = layout_sheet(Some(&sheet));

    let mut pdf = SheetPdf::new();
    pdf.add_sheet(&scene, Some("Day 1"));
    pdf.add_sheet(&scene, Some("Day 2"));
    pdf.save(Path::new(&out)).expect("save pdf");

    let bytes = fs::read(&out).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF-"));

    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("Helvetica"));
    assert!(text.contains("/Count 2"));
}

#[test]
fn test_pdf_empty_scene_still_produces_document() {
    let out = temp_out("pdf_empty", "pdf");

    let scene = layout_sheet(None);

    let mut pdf = SheetPdf::new();
    pdf.add_sheet(&scene, None);
    pdf.save(Path::new(&out)).expect("save pdf");

    let bytes = fs::read(&out).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(!bytes.is_empty());
}
