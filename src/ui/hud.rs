use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::Round;

/// Supplemental values displayed by the HUD row.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    /// Best score seen this session; never persisted.
    pub session_best: u32,
    pub theme: &'a Theme,
}

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, round: &Round, info: HudInfo<'_>) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let left = format!(" {}x{}", round.bounds().width, round.bounds().height);
    let right = format!(
        "Length {}  Score {}  Best {} ",
        round.snake.len(),
        round.score,
        info.session_best,
    );

    frame.render_widget(
        Paragraph::new(Line::from(spread_line(
            &left,
            &right,
            usize::from(hud_area.width),
        )))
        .style(Style::default().fg(info.theme.hud_score)),
        hud_area,
    );

    play_area
}

/// Joins left- and right-aligned text into one padded line.
fn spread_line(left: &str, right: &str, total_width: usize) -> String {
    let used = left.width() + right.width();
    let padding = total_width.saturating_sub(used);
    format!("{left}{}{right}", " ".repeat(padding))
}
