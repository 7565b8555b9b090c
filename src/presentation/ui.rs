use crate::application::{App, Pane};
use crate::domain::{Sheet, Store};
use crate::presentation::grid::{draw_body, draw_text_section};
use crate::presentation::layout::{truncate_label, DashboardLayout};
use crate::presentation::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, Frame};

pub const HELP_TEXT: &str = "[help] [move: ↑ → ↓ ←]  [delete item under cursor: del] [exit: ctrl+c / q]";
const CREATED_FMT: &str = "%a %e %Y";

/// Paints the whole dashboard with a fixed [`Theme`]. Every frame is a full repaint.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn draw<S: Store>(&self, f: &mut Frame, app: &App<S>) {
        let area = f.area();
        self.paint(f.buffer_mut(), area, app);
    }

    pub fn paint<S: Store>(&self, buf: &mut Buffer, area: Rect, app: &App<S>) {
        let shown = app.shown_sheet();
        let layout = DashboardLayout::compute(area, app.folders().len(), app.sheets().len(), shown.is_some());

        self.paint_footer(buf, layout.footer, app.status_message());

        if app.folders().is_empty() {
            if let Some(&row) = layout.folder_rows.first() {
                draw_text_section(buf, row, self.theme.folders.selected, "No folders");
            }
            return;
        }

        self.paint_folders(buf, &layout, app);
        self.paint_sheets(buf, &layout, app);
        self.paint_detail(buf, &layout, shown);
    }

    fn paint_folders<S: Store>(&self, buf: &mut Buffer, layout: &DashboardLayout, app: &App<S>) {
        let styles = &self.theme.folders;
        for (i, (row, folder)) in layout.folder_rows.iter().zip(app.folders()).enumerate() {
            let style = if app.active_pane() == Pane::Folders && app.folder_cursor() == i {
                styles.selected
            } else {
                styles.default
            };
            draw_text_section(buf, *row, style, &truncate_label(&folder.name));
        }
    }

    fn paint_sheets<S: Store>(&self, buf: &mut Buffer, layout: &DashboardLayout, app: &App<S>) {
        let styles = &self.theme.sheets;
        if app.sheets().is_empty() {
            if let Some(&row) = layout.sheet_rows.first() {
                draw_text_section(buf, row, styles.selected, "No sheets");
            }
            return;
        }

        for (i, (row, sheet)) in layout.sheet_rows.iter().zip(app.sheets()).enumerate() {
            let style = if app.active_pane() == Pane::Sheets && app.sheet_cursor() == Some(i) {
                styles.selected
            } else {
                styles.default
            };
            draw_text_section(buf, *row, style, &truncate_label(&sheet.name));
        }
    }

    fn paint_detail(&self, buf: &mut Buffer, layout: &DashboardLayout, shown: Option<&Sheet>) {
        let styles = &self.theme.detail;
        let Some(sheet) = shown else {
            draw_text_section(buf, layout.header_strip, styles.selected, "No Sheet");
            return;
        };

        let fields = [
            format!("Sheet Id: {}", sheet.id),
            format!("Name: {}", truncate_label(&sheet.name)),
            format!("Alias: {}", sheet.alias),
            format!("Created: {}", sheet.created_at.format(CREATED_FMT)),
        ];
        for (cell, text) in layout.header_cells.iter().zip(&fields) {
            draw_text_section(buf, *cell, styles.selected, text);
        }
        draw_body(buf, layout.body, styles.default, &sheet.body);
    }

    fn paint_footer(&self, buf: &mut Buffer, footer: Rect, message: Option<&str>) {
        match message {
            Some(text) => draw_text_section(buf, footer, self.theme.message, text),
            None => draw_text_section(buf, footer, self.theme.footer, HELP_TEXT),
        }
    }
}
