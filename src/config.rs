use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical grid dimensions passed through the game as a named type.
///
/// Replaces the anonymous `(u16, u16)` tuple that was used for bounds,
/// making width vs. height unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Rule applied when the snake head steps past the grid edge.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum EdgePolicy {
    /// Leaving the grid ends the round.
    #[default]
    Bounded,
    /// Coordinates wrap modulo the grid on both axes.
    Toroidal,
}

/// Static parameters for one round of play.
#[derive(Debug, Clone, Copy)]
pub struct RoundConfig {
    pub grid: GridSize,
    pub edge_policy: EdgePolicy,
    /// Target body length at round start. The body materializes from a
    /// single cell over the first `initial_length - 1` ticks.
    pub initial_length: usize,
    pub initial_score: u32,
    /// Fixed seed for reproducible rounds; `None` seeds from entropy.
    pub random_seed: Option<u64>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            grid: GridSize {
                width: DEFAULT_GRID_WIDTH,
                height: DEFAULT_GRID_HEIGHT,
            },
            edge_policy: EdgePolicy::Bounded,
            initial_length: 1,
            initial_score: 0,
            random_seed: None,
        }
    }
}

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_score: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_score: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    border_bg: Color::DarkGray,
    hud_score: Color::Cyan,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Magenta,
    border_bg: Color::Black,
    hud_score: Color::Magenta,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// All available themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Returns the theme with the given name, if any.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.name == name)
}

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Glyph drawn for food.
pub const GLYPH_FOOD: &str = "●";

/// Glyph drawn for snake body segments.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Glyph drawn for the tail segment.
pub const GLYPH_SNAKE_TAIL: &str = "▓";

/// Directional head glyphs.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Gameplay tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// Pre-round countdown length in seconds.
pub const COUNTDOWN_SECONDS: u64 = 3;

#[cfg(test)]
mod tests {
    use super::{theme_by_name, GridSize, RoundConfig, THEMES};

    #[test]
    fn total_cells_multiplies_dimensions() {
        let grid = GridSize {
            width: 6,
            height: 4,
        };
        assert_eq!(grid.total_cells(), 24);
    }

    #[test]
    fn default_config_is_valid() {
        let config = RoundConfig::default();
        assert!(config.initial_length >= 1);
        assert!(config.grid.total_cells() > 0);
    }

    #[test]
    fn every_theme_is_reachable_by_name() {
        for theme in THEMES {
            assert!(theme_by_name(theme.name).is_some());
        }
        assert!(theme_by_name("no-such-theme").is_none());
    }
}
