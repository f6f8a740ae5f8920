use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Minimal flowing-layout PDF writer: lines of text and bordered tables,
/// top to bottom, with automatic page breaks and a page footer.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    content: Option<Content>,
    content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    y: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
    footer: String,
}

impl PdfManager {
    pub fn new(footer: &str) -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            content: None,
            content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 18.0,
            y: 0.0,

            next_id: 4,
            font_id,

            font_size: 9.0,
            header_font_size: 9.5,
            title_font_size: 15.0,
            footer: footer.to_string(),
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Close the current page (if any) and open a new one.
    fn new_page(&mut self) {
        self.finalize_page();

        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);
        drop(page);

        let mut content = Content::new();
        let footer = format!("{}  -  Page {}", self.footer, self.page_refs.len());
        draw_text(&mut content, self.margin, self.margin - 30.0, 8.0, &footer);

        self.content = Some(content);
        self.content_id = Some(content_id);
        self.y = self.page_h - self.margin;
    }

    fn finalize_page(&mut self) {
        if let (Some(content), Some(id)) = (self.content.take(), self.content_id.take()) {
            self.pdf.stream(id, &content.finish());
        }
    }

    /// Start a new page when less than `h` points are left.
    fn ensure_space(&mut self, h: f32) {
        if self.content.is_none() || self.y - h < self.margin {
            self.new_page();
        }
    }

    pub fn title(&mut self, text: &str) {
        let size = self.title_font_size;
        self.ensure_space(size + 12.0);
        self.y -= size;
        if let Some(c) = self.content.as_mut() {
            draw_text(c, self.margin, self.y, size, text);
        }
        self.y -= 12.0;
    }

    pub fn line(&mut self, text: &str) {
        let size = self.font_size + 1.0;
        self.ensure_space(size + 5.0);
        self.y -= size + 5.0;
        if let Some(c) = self.content.as_mut() {
            draw_text(c, self.margin, self.y, size, text);
        }
    }

    pub fn spacer(&mut self, h: f32) {
        self.y -= h;
    }

    /// Bordered table; the header is repeated after a page break and the
    /// optional `footer_row` is drawn shaded after the last row.
    pub fn table(&mut self, headers: &[&str], rows: &[Vec<String>], footer_row: Option<Vec<String>>) {
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        let mut all: Vec<&Vec<String>> = rows.iter().collect();
        if let Some(f) = &footer_row {
            all.push(f);
        }
        let widths = compute_col_widths(headers, &all, self.page_w - 2.0 * self.margin);

        self.ensure_space(self.row_h * 2.0);
        self.table_row(&widths, &header_row, self.header_font_size, Some((0.85, 0.87, 0.90)));

        for (i, row) in rows.iter().enumerate() {
            if self.y - self.row_h < self.margin {
                self.new_page();
                self.table_row(&widths, &header_row, self.header_font_size, Some((0.85, 0.87, 0.90)));
            }
            let fill = if i % 2 == 0 { Some((0.96, 0.96, 0.96)) } else { None };
            self.table_row(&widths, row, self.font_size, fill);
        }

        if let Some(f) = footer_row {
            self.ensure_space(self.row_h);
            self.table_row(&widths, &f, self.header_font_size, Some((0.90, 0.93, 0.98)));
        }
    }

    fn table_row(&mut self, widths: &[f32], row: &[String], size: f32, fill: Option<(f32, f32, f32)>) {
        self.y -= self.row_h;
        let (x0, y, h) = (self.margin, self.y, self.row_h);

        let Some(c) = self.content.as_mut() else {
            return;
        };

        if let Some((r, g, b)) = fill {
            c.save_state();
            c.set_fill_rgb(r, g, b);
            c.rect(x0, y, widths.iter().sum(), h);
            c.fill_nonzero();
            c.restore_state();
        }

        let mut x = x0;
        for (i, w) in widths.iter().enumerate() {
            let text = row.get(i).map(String::as_str).unwrap_or("");
            draw_text(c, x + 4.0, y + 5.0, size, text);
            draw_cell_borders(c, x, y, *w, h);
            x += w;
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        if self.page_refs.is_empty() {
            self.new_page();
        }
        self.finalize_page();

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let count = self.page_refs.len() as i32;
        self.pdf
            .pages(self.pages_id)
            .count(count)
            .kids(self.page_refs.iter().copied());

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

fn draw_text(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
    content.begin_text();
    content.set_font(Name(b"F1"), size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(&to_win_ansi(text)));
    content.end_text();
}

/// Encode `text` for the WinAnsi-encoded standard font. Latin-1 maps 1:1;
/// unmapped characters become `?`.
fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7E}' | '\u{A0}'..='\u{FF}' => c as u8,
            '€' => 0x80,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}

fn draw_cell_borders(content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
    content.save_state();
    content.set_stroke_rgb(0.65, 0.65, 0.65);
    content.rect(x, y, w, h);
    content.stroke();
    content.restore_state();
}

/// Column widths from header + content length, scaled down to `max`.
fn compute_col_widths(headers: &[&str], rows: &[&Vec<String>], max: f32) -> Vec<f32> {
    let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 5.6 + 10.0).collect();

    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = (cell.len() as f32 * 5.4 + 10.0).max(widths[i]);
        }
    }

    let total: f32 = widths.iter().sum();
    if total > max {
        let scale = max / total;
        for w in &mut widths {
            *w *= scale;
        }
    }

    widths
}
