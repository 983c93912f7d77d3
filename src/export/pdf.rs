use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const REGULAR: &[u8] = b"F1";
const BOLD: &[u8] = b"F2";

/// Table header fill, rgb(99, 102, 241).
const HEADER_FILL: (f32, f32, f32) = (99.0 / 255.0, 102.0 / 255.0, 241.0 / 255.0);

/// Average Helvetica glyph width as a fraction of the font size; used to
/// turn a column width into a wrap width in characters.
const GLYPH_RATIO: f32 = 0.55;

/// A4 report writer: title band, then a grid table that wraps long cells
/// and flows over as many pages as needed.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    line_h: f32,
    pad: f32,

    next_id: i32,
    font_id: Ref,
    bold_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_id = Ref::new(4);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_id).base_font(Name(b"Helvetica-Bold"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 40.0,
            line_h: 13.0,
            pad: 4.0,

            next_id: 5,
            font_id,
            bold_id,

            font_size: 10.0,
            header_font_size: 10.0,
            title_font_size: 16.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources()
            .fonts()
            .pair(Name(REGULAR), self.font_id)
            .pair(Name(BOLD), self.bold_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, font: &[u8], x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(font), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&encode(text)));
        content.end_text();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.set_line_width(0.5);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    /// Height of a row whose cells are already wrapped into lines.
    fn row_height(&self, cells: &[Vec<String>]) -> f32 {
        let lines = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
        lines as f32 * self.line_h + 2.0 * self.pad
    }

    /// Draw one row with its bottom edge at `y`.
    #[allow(clippy::too_many_arguments)]
    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        h: f32,
        col_widths: &[f32],
        cells: &[Vec<String>],
        font: &[u8],
        size: f32,
    ) {
        let mut x = self.margin;
        let top = y + h;

        for (i, lines) in cells.iter().enumerate() {
            let w = col_widths[i];
            for (k, line) in lines.iter().enumerate() {
                let baseline = top - self.pad - size - k as f32 * self.line_h + 2.0;
                self.draw_text(content, font, x + self.pad, baseline, size, line);
            }
            self.draw_cell_borders(content, x, y, w, h);
            x += w;
        }
    }

    /// Narrow columns sized to their content; the last column takes the
    /// rest of the printable width.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let char_w = self.font_size * GLYPH_RATIO;
        let max = self.page_w - 2.0 * self.margin;
        let last = headers.len().saturating_sub(1);

        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.chars().count() as f32 * char_w + 2.0 * self.pad)
            .collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate().take(last) {
                let w = cell.chars().count() as f32 * char_w + 2.0 * self.pad;
                widths[i] = widths[i].max(w);
            }
        }

        let fixed: f32 = widths.iter().take(last).sum();
        if let Some(w) = widths.get_mut(last) {
            *w = (max - fixed).max(120.0);
        }

        widths
    }

    fn wrap_cells(&self, row: &[String], col_widths: &[f32], size: f32) -> Vec<Vec<String>> {
        row.iter()
            .zip(col_widths)
            .map(|(text, w)| {
                let cols = (((w - 2.0 * self.pad) / (size * GLYPH_RATIO)) as usize).max(1);
                let lines: Vec<String> = textwrap::wrap(text, cols)
                    .into_iter()
                    .map(|l| l.into_owned())
                    .collect();
                if lines.is_empty() {
                    vec![String::new()]
                } else {
                    lines
                }
            })
            .collect()
    }

    /// Title band, page number and table header. Returns the y where the
    /// first body row may start.
    fn start_page(
        &self,
        content: &mut Content,
        title: &str,
        subtitle: &str,
        page: usize,
        col_widths: &[f32],
        header: &[Vec<String>],
    ) -> f32 {
        let top = self.page_h - self.margin;

        self.draw_text(content, BOLD, self.margin, top - self.title_font_size, self.title_font_size, title);
        self.draw_text(content, REGULAR, self.margin, top - self.title_font_size - 16.0, self.font_size, subtitle);

        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            REGULAR,
            self.page_w - self.margin - 40.0,
            self.margin - 20.0,
            self.font_size,
            &pg,
        );

        let h = self.row_height(header);
        let y = top - self.title_font_size - 30.0 - h;

        content.save_state();
        content.set_fill_rgb(HEADER_FILL.0, HEADER_FILL.1, HEADER_FILL.2);
        content.rect(self.margin, y, col_widths.iter().sum(), h);
        content.fill_nonzero();
        // white header text
        content.set_fill_rgb(1.0, 1.0, 1.0);
        self.draw_row(content, y, h, col_widths, header, BOLD, self.header_font_size);
        content.restore_state();

        y
    }

    /// Titled multipage table. With no rows the single page still carries
    /// the title band and the header row. A row that does not fit on the
    /// current page moves to the next one; a row taller than a whole page
    /// is split line by line across pages.
    pub fn write_report(&mut self, title: &str, subtitle: &str, headers: &[&str], rows: &[Vec<String>]) {
        let col_widths = self.compute_col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let header = self.wrap_cells(&header_row, &col_widths, self.header_font_size);

        let mut page_idx = 1;
        let mut content = self.new_page();
        let mut y = self.start_page(&mut content, title, subtitle, page_idx, &col_widths, &header);
        let body_top = y;
        let mut on_page = 0;

        for row in rows {
            let mut cells = self.wrap_cells(row, &col_widths, self.font_size);

            loop {
                let h = self.row_height(&cells);
                if y - h >= self.margin {
                    y -= h;
                    self.draw_row(&mut content, y, h, &col_widths, &cells, REGULAR, self.font_size);
                    on_page += 1;
                    break;
                }

                let fits_fresh_page = body_top - h >= self.margin;
                let room = ((y - self.margin - 2.0 * self.pad) / self.line_h).floor();

                if (!fits_fresh_page || on_page == 0) && room >= 1.0 {
                    let rest = split_cells(&mut cells, room as usize);
                    let h = self.row_height(&cells);
                    y -= h;
                    self.draw_row(&mut content, y, h, &col_widths, &cells, REGULAR, self.font_size);
                    cells = rest;
                }

                self.finalize_page(content);
                page_idx += 1;
                content = self.new_page();
                y = self.start_page(&mut content, title, subtitle, page_idx, &col_widths, &header);
                on_page = 0;
            }
        }

        self.finalize_page(content);
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Keep the first `lines` lines of every cell in `cells` and return the
/// remainder as the continuation row.
fn split_cells(cells: &mut [Vec<String>], lines: usize) -> Vec<Vec<String>> {
    cells
        .iter_mut()
        .map(|cell| {
            let tail = cell.split_off(lines.min(cell.len()));
            if tail.is_empty() {
                vec![String::new()]
            } else {
                tail
            }
        })
        .collect()
}

/// Base-14 fonts only cover single-byte text: common typographic marks are
/// folded to ASCII, anything else becomes `?`.
fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            c if c.is_ascii() => c as u8,
            '\u{2013}' | '\u{2014}' => b'-',
            '\u{2018}' | '\u{2019}' => b'\'',
            '\u{201C}' | '\u{201D}' => b'"',
            _ => b'?',
        })
        .collect()
}
