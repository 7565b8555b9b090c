use ratatui::style::{Color, Modifier, Style};

/// Default and highlighted style for one pane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneStyle {
    pub default: Style,
    pub selected: Style,
}

/// Every style the dashboard paints with, fixed when the renderer is built.
///
/// For the detail pane `selected` is the header strip and `default` the body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub folders: PaneStyle,
    pub sheets: PaneStyle,
    pub detail: PaneStyle,
    pub footer: Style,
    pub message: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            folders: PaneStyle {
                default: Style::default().bg(Color::Reset).fg(Color::White),
                selected: Style::default().bg(Color::Indexed(208)).fg(Color::Black),
            },
            sheets: PaneStyle {
                default: Style::default().bg(Color::Reset).fg(Color::White),
                selected: Style::default()
                    .bg(Color::Red)
                    .fg(Color::Reset)
                    .add_modifier(Modifier::BOLD),
            },
            detail: PaneStyle {
                default: Style::default().bg(Color::Reset).fg(Color::White),
                selected: Style::default().bg(Color::LightBlue).fg(Color::Black),
            },
            footer: Style::default().bg(Color::LightGreen).fg(Color::Black),
            message: Style::default().bg(Color::Yellow).fg(Color::Black),
        }
    }
}
