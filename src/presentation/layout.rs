//! Screen geometry for the three-pane dashboard.
//!
//! Columns are fixed width from the left edge: folders, then sheets, then
//! the detail pane taking whatever is left. The last row is the footer.

use ratatui::layout::Rect;
use std::borrow::Cow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const FOLDER_COLUMN_WIDTH: u16 = 20;
pub const SHEET_COLUMN_WIDTH: u16 = 20;
/// Width of each header field (id, name, alias); the created-at field takes the rest.
pub const HEADER_ITEM_WIDTH: u16 = 18;
pub const HEADER_FIELDS: u16 = 4;
/// Header text row plus one blank spacer row above the body.
pub const HEADER_HEIGHT: u16 = 2;
/// Visible characters kept from a long name before the ellipsis.
pub const NAME_BUDGET: usize = 16;
pub const ELLIPSIS: &str = "...";

/// Shortens `name` to [`NAME_BUDGET`] display columns plus [`ELLIPSIS`].
///
/// Double-width glyphs count as two columns. This happens before layout and
/// never depends on the terminal width.
///
/// ```
/// use keeper::presentation::truncate_label;
///
/// assert_eq!(truncate_label("groceries"), "groceries");
/// assert_eq!(truncate_label("a very long sheet name"), "a very long shee...");
/// ```
pub fn truncate_label(name: &str) -> Cow<'_, str> {
    if name.width() <= NAME_BUDGET {
        return Cow::Borrowed(name);
    }
    let mut short = String::new();
    let mut used = 0;
    for ch in name.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > NAME_BUDGET {
            break;
        }
        short.push(ch);
        used += w;
    }
    short.push_str(ELLIPSIS);
    Cow::Owned(short)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardLayout {
    pub folder_column: Rect,
    pub sheet_column: Rect,
    pub detail: Rect,
    /// One single-line rect per folder, or one for the placeholder when there are none.
    pub folder_rows: Vec<Rect>,
    pub sheet_rows: Vec<Rect>,
    /// First row of the detail pane.
    pub header_strip: Rect,
    /// Id / name / alias / created-at fields; empty while no sheet is open.
    pub header_cells: Vec<Rect>,
    /// Wrapped sheet body; zero-sized while no sheet is open.
    pub body: Rect,
    pub footer: Rect,
}

impl DashboardLayout {
    pub fn compute(area: Rect, folders: usize, sheets: usize, detail_open: bool) -> Self {
        let footer = if area.height > 0 {
            Rect::new(area.x, area.bottom() - 1, area.width, 1)
        } else {
            Rect::default()
        };
        let panes_height = area.height.saturating_sub(1);

        let folder_column = column(area, 0, FOLDER_COLUMN_WIDTH, panes_height);
        let sheet_column = column(area, FOLDER_COLUMN_WIDTH, SHEET_COLUMN_WIDTH, panes_height);
        let detail_offset = FOLDER_COLUMN_WIDTH + SHEET_COLUMN_WIDTH;
        let detail = column(area, detail_offset, area.width.saturating_sub(detail_offset), panes_height);

        let header_strip = Rect::new(detail.x, detail.y, detail.width, detail.height.min(1));

        let (header_cells, body) = if detail_open {
            let body_height = detail.height.saturating_sub(HEADER_HEIGHT);
            let body = if body_height > 0 && detail.width > 0 {
                Rect::new(detail.x, detail.y + HEADER_HEIGHT, detail.width, body_height)
            } else {
                Rect::default()
            };
            (header_fields(header_strip), body)
        } else {
            (Vec::new(), Rect::default())
        };

        Self {
            folder_column,
            sheet_column,
            detail,
            folder_rows: list_rows(folder_column, folders),
            sheet_rows: list_rows(sheet_column, sheets),
            header_strip,
            header_cells,
            body,
            footer,
        }
    }
}

/// A column starting `offset` cells into `area`, clipped to its right edge.
fn column(area: Rect, offset: u16, width: u16, height: u16) -> Rect {
    let offset = offset.min(area.width);
    let width = width.min(area.width - offset);
    Rect::new(area.x + offset, area.y, width, height)
}

fn list_rows(column: Rect, count: usize) -> Vec<Rect> {
    if column.width == 0 {
        return Vec::new();
    }
    let shown = count.max(1).min(column.height as usize) as u16;
    (0..shown)
        .map(|i| Rect::new(column.x, column.y + i, column.width, 1))
        .collect()
}

fn header_fields(strip: Rect) -> Vec<Rect> {
    if strip.height == 0 {
        return Vec::new();
    }
    let mut cells = Vec::new();
    for i in 0..HEADER_FIELDS {
        let offset = i * HEADER_ITEM_WIDTH;
        if offset >= strip.width {
            break;
        }
        let remaining = strip.width - offset;
        let width = if i == HEADER_FIELDS - 1 {
            remaining
        } else {
            remaining.min(HEADER_ITEM_WIDTH)
        };
        cells.push(Rect::new(strip.x + offset, strip.y, width, 1));
    }
    cells
}
