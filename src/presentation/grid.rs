//! Cell-level painting into a ratatui [`Buffer`].
//!
//! Both painters write every cell of their rectangle, so whatever was drawn
//! there before is gone without a separate clear. Nothing is written outside
//! the rectangle or outside the buffer.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;

/// Paints a left-aligned single line of `text` into `area`.
///
/// The first cell of every row is padding, the text follows on the first
/// row, and the rest of the rectangle is spaces in `style`. Text longer than
/// the row is clipped; a double-width glyph that would cross the right edge
/// is left out and its cell stays blank.
pub fn draw_text_section(buf: &mut Buffer, area: Rect, style: Style, text: &str) {
    let area = area.intersection(buf.area);
    if area.is_empty() {
        return;
    }

    fill(buf, area, style);

    let y = area.top();
    let mut x = area.left() + 1;
    for ch in text.chars().map(printable) {
        let Some(w) = glyph_width(ch) else {
            continue;
        };
        if x + w > area.right() {
            break;
        }
        put(buf, x, y, ch, style);
        x += w;
    }
}

/// Paints `text` wrapped at the width of `area` and clipped at its height.
///
/// Wrapping is by display column; a newline starts a new row. Only the part
/// that fits is shown.
pub fn draw_body(buf: &mut Buffer, area: Rect, style: Style, text: &str) {
    let area = area.intersection(buf.area);
    if area.is_empty() {
        return;
    }

    fill(buf, area, style);

    let (mut x, mut y) = (area.left(), area.top());
    for ch in text.chars() {
        match ch {
            '\n' => {
                x = area.left();
                y += 1;
                if y >= area.bottom() {
                    break;
                }
                continue;
            }
            '\r' => continue,
            _ => {}
        }

        let ch = printable(ch);
        let Some(w) = glyph_width(ch) else {
            continue;
        };
        if w > area.width {
            continue;
        }
        if x + w > area.right() {
            x = area.left();
            y += 1;
        }
        if y >= area.bottom() {
            break;
        }
        put(buf, x, y, ch, style);
        x += w;
    }
}

pub fn fill(buf: &mut Buffer, area: Rect, style: Style) {
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            put(buf, x, y, ' ', style);
        }
    }
}

fn put(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.reset();
        cell.set_char(ch).set_style(style);
    }
}

/// Columns taken by `ch`, or `None` for zero-width glyphs that get no cell of their own.
fn glyph_width(ch: char) -> Option<u16> {
    match ch.width() {
        Some(0) | None => None,
        Some(w) => Some(w as u16),
    }
}

fn printable(ch: char) -> char {
    if ch.is_control() { ' ' } else { ch }
}
