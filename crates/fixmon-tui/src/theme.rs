//! Centralized theme for the fixture window
//!
//! - `palette` — raw color constants
//! - `styles` — semantic style builder functions

pub mod palette {
    use ratatui::style::Color;

    pub const LIGHT_ON: Color = Color::Green;
    pub const LIGHT_OFF: Color = Color::Red;
    pub const LIGHT_UNKNOWN: Color = Color::DarkGray;
    pub const BADGE_TEXT: Color = Color::Black;

    pub const FOCUS: Color = Color::Cyan;
    pub const BORDER: Color = Color::DarkGray;
    pub const TITLE: Color = Color::White;
    pub const BUTTON: Color = Color::Blue;
    pub const BUTTON_ACTIVE: Color = Color::Yellow;
    pub const GROUP_LABEL: Color = Color::DarkGray;
    pub const LOG_TEXT: Color = Color::Gray;
    pub const CLOSED_TAG: Color = Color::Red;
}

pub mod styles {
    use ratatui::style::{Modifier, Style};
    use ratatui::symbols;
    use ratatui::widgets::{Block, Borders};

    use fixmon_core::LightState;

    use super::palette;

    /// Bordered container used by every panel row.
    pub fn panel_block(title: &str) -> Block<'_> {
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(Style::default().fg(palette::BORDER))
            .title_style(Style::default().fg(palette::TITLE))
    }

    /// Badge style for a light state.
    pub fn light_badge(state: LightState) -> Style {
        let bg = match state {
            LightState::On => palette::LIGHT_ON,
            LightState::Off => palette::LIGHT_OFF,
            LightState::Unknown => palette::LIGHT_UNKNOWN,
        };
        Style::default().fg(palette::BADGE_TEXT).bg(bg)
    }

    /// Overlay marking the focused widget.
    pub fn focused() -> Style {
        Style::default()
            .fg(palette::FOCUS)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn button() -> Style {
        Style::default().fg(palette::BUTTON)
    }

    pub fn button_active() -> Style {
        Style::default()
            .fg(palette::BUTTON_ACTIVE)
            .add_modifier(Modifier::BOLD)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use ratatui::style::Color;

        #[test]
        fn test_light_badge_maps_states() {
            assert_eq!(light_badge(LightState::On).bg, Some(Color::Green));
            assert_eq!(light_badge(LightState::Off).bg, Some(Color::Red));
            assert_eq!(light_badge(LightState::Unknown).bg, Some(Color::DarkGray));
        }
    }
}
