use pdf_writer::types::LineCapStyle;
use pdf_writer::{Content, Name, Pdf, Rect, Ref};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::scene::{Anchor, CANVAS_HEIGHT, CANVAS_WIDTH, Scene};

// Duty-line stroke, #1e88e5 as fractional RGB.
const STROKE_R: f32 = 0.118;
const STROKE_G: f32 = 0.533;
const STROKE_B: f32 = 0.898;
const STROKE_WIDTH: f32 = 2.0;

const TITLE_SIZE: f32 = 10.0;
const TITLE_MARGIN: f32 = 12.0;

/// Multi-page PDF builder: one log-sheet page per scene.
///
/// Pages use the template's pixel size as their media box so the layout
/// constants carry over unchanged; only the y axis flips.
pub struct SheetPdf {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,

    next_id: i32,
    font_id: Ref,
}

impl Default for SheetPdf {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetPdf {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            next_id,
            font_id,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Canvas coordinates are y-down; PDF user space is y-up.
    fn flip(y: f64) -> f32 {
        (CANVAS_HEIGHT - y) as f32
    }

    /// Append one page drawing the given scene.
    pub fn add_sheet(&mut self, scene: &Scene, title: Option<&str>) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(
                    0.0,
                    0.0,
                    CANVAS_WIDTH as f32,
                    CANVAS_HEIGHT as f32,
                ))
                .contents(content_id);
            page.resources().fonts().pair(Name(b"F1"), self.font_id);
        }

        let mut content = Content::new();

        if let Some(title) = title {
            self.draw_text(
                &mut content,
                TITLE_MARGIN,
                CANVAS_HEIGHT as f32 - TITLE_MARGIN,
                TITLE_SIZE,
                0.0,
                title,
            );
        }

        if !scene.segments.is_empty() {
            content.save_state();
            content.set_stroke_rgb(STROKE_R, STROKE_G, STROKE_B);
            content.set_line_width(STROKE_WIDTH);
            content.set_line_cap(LineCapStyle::RoundCap);
            for seg in &scene.segments {
                content.move_to(seg.x1 as f32, Self::flip(seg.y1));
                content.line_to(seg.x2 as f32, Self::flip(seg.y2));
                content.stroke();
            }
            content.restore_state();
        }

        for label in &scene.labels {
            let size = label.size as f32;
            let mut x = label.x as f32;
            if label.anchor == Anchor::End {
                // Helvetica digits are ~0.55 em wide; close enough for the
                // narrow summary column.
                x -= label.text.len() as f32 * size * 0.55;
            }
            self.draw_text(
                &mut content,
                x,
                Self::flip(label.y),
                size,
                label.rotation as f32,
                &label.text,
            );
        }

        self.pdf.stream(content_id, &content.finish());
    }

    /// Place one run of text. `rotation` is degrees clockwise as seen on
    /// the page (canvas convention); the matrix below converts to PDF's
    /// counterclockwise angles.
    fn draw_text(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        size: f32,
        rotation: f32,
        text: &str,
    ) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        if rotation == 0.0 {
            content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        } else {
            let (s, c) = (-rotation.to_radians()).sin_cos();
            content.set_text_matrix([c, s, -s, c, x, y]);
        }
        content.show(pdf_writer::Str(text.as_bytes()));
        content.end_text();
    }

    /// Finish the document and write it out.
    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        {
            let mut pages = self.pdf.pages(self.pages_id);
            pages.count(self.page_refs.len() as i32);
            pages.kids(self.page_refs.clone());
        }

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
