use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    GridSize, Theme, BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN,
    GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL,
};
use crate::game::Round;
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::{
    render_countdown, render_pause_menu, render_round_over_menu, render_start_menu,
};

/// Which application screen is layered over the play field.
///
/// The round's own lifecycle phases cover play and round-end; everything
/// else here (menus, countdown, pause) exists only in the terminal shell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Overlay {
    None,
    StartMenu,
    Countdown { seconds_left: u64 },
    Paused,
    RoundOver,
}

/// Renders the full frame from immutable round state.
pub fn render(frame: &mut Frame<'_>, round: &Round, info: HudInfo<'_>, overlay: Overlay) {
    let area = frame.area();
    let play_area = render_hud(frame, area, round, info);

    let theme = info.theme;
    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    if overlay != Overlay::StartMenu {
        render_food(frame, inner, round, theme);
        render_snake(frame, inner, round, theme);
    }

    match overlay {
        Overlay::None => {}
        Overlay::StartMenu => render_start_menu(frame, play_area, info.session_best, theme),
        Overlay::Countdown { seconds_left } => {
            render_countdown(frame, play_area, seconds_left, theme);
        }
        Overlay::Paused => render_pause_menu(frame, play_area, theme),
        Overlay::RoundOver => render_round_over_menu(
            frame,
            play_area,
            round.phase(),
            round.score,
            info.session_best,
            round.death_reason(),
            theme,
        ),
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, round: &Round, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, round.bounds(), round.food.position) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, round: &Round, theme: &Theme) {
    let head = round.snake.head();
    let tail = round.snake.segments().last().copied();

    let buffer = frame.buffer_mut();
    for segment in round.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, round.bounds(), *segment) else {
            continue;
        };

        if *segment == head {
            let glyph = head_glyph(round.snake.heading());
            buffer.set_string(
                x,
                y,
                glyph,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
            continue;
        }

        if Some(*segment) == tail {
            buffer.set_string(x, y, GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail));
            continue;
        }

        buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
