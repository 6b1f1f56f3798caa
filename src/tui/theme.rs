//! # Theme
//!
//! Turns a [`StyleTag`] into a ratatui [`Style`]. This is the only place
//! that knows what "title" or "dim" look like on screen.
//!
//! Colours come from `[theme]` in the config file. Each entry is parsed with
//! ratatui's `Color::from_str`, so names (`"cyan"`), 256-colour indices
//! (`"212"`) and hex (`"#ff87d7"`) all work. Anything unparsable keeps the
//! default and logs a warning.

use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::config::ThemeConfig;
use crate::core::view::{StyleTag, ViewLine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub title: Color,
    pub block: Color,
    pub exercise: Color,
    pub dim: Color,
    pub highlight: Color,
    pub selected: Color,
    pub help: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Color::Indexed(212),
            block: Color::Indexed(86),
            exercise: Color::Indexed(252),
            dim: Color::Indexed(240),
            highlight: Color::Indexed(229),
            selected: Color::Indexed(212),
            help: Color::Indexed(241),
        }
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        let defaults = Self::default();
        Self {
            title: pick("title", config.title.as_deref(), defaults.title),
            block: pick("block", config.block.as_deref(), defaults.block),
            exercise: pick("exercise", config.exercise.as_deref(), defaults.exercise),
            dim: pick("dim", config.dim.as_deref(), defaults.dim),
            highlight: pick("highlight", config.highlight.as_deref(), defaults.highlight),
            selected: pick("selected", config.selected.as_deref(), defaults.selected),
            help: pick("help", config.help.as_deref(), defaults.help),
        }
    }

    pub fn style(&self, tag: StyleTag) -> Style {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        match tag {
            StyleTag::Title => bold.fg(self.title),
            StyleTag::Block => bold.fg(self.block),
            StyleTag::Highlight => bold.fg(self.highlight),
            StyleTag::Selected => bold.fg(self.selected),
            StyleTag::Exercise => Style::default().fg(self.exercise),
            StyleTag::Subtitle | StyleTag::Dim => Style::default().fg(self.dim),
            StyleTag::Help => Style::default().fg(self.help),
            StyleTag::Blank => Style::default(),
        }
    }

    /// Format one projected line for display.
    pub fn line<'a>(&self, line: &'a ViewLine) -> Line<'a> {
        Line::from(Span::styled(line.text.as_str(), self.style(line.style)))
    }
}

fn pick(name: &str, configured: Option<&str>, default: Color) -> Color {
    let Some(raw) = configured else {
        return default;
    };
    match Color::from_str(raw.trim()) {
        Ok(color) => color,
        Err(_) => {
            warn!("Unrecognized theme colour {name} = {raw:?}, keeping default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let theme = Theme::default();
        assert_eq!(theme.style(StyleTag::Title).fg, Some(Color::Indexed(212)));
        assert!(theme.style(StyleTag::Title).add_modifier.contains(Modifier::BOLD));
        assert!(!theme.style(StyleTag::Help).add_modifier.contains(Modifier::BOLD));
        assert_eq!(theme.style(StyleTag::Blank), Style::default());
    }

    #[test]
    fn test_config_colours_parse() {
        let config = ThemeConfig {
            title: Some("cyan".to_string()),
            block: Some("#ff87d7".to_string()),
            help: Some(" 99 ".to_string()),
            ..Default::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.title, Color::Cyan);
        assert_eq!(theme.block, Color::Rgb(0xff, 0x87, 0xd7));
        assert_eq!(theme.help, Color::Indexed(99));
        assert_eq!(theme.dim, Theme::default().dim);
    }

    #[test]
    fn test_bad_colour_keeps_default() {
        let config = ThemeConfig {
            selected: Some("not-a-colour".to_string()),
            ..Default::default()
        };
        assert_eq!(Theme::from_config(&config).selected, Theme::default().selected);
    }

    #[test]
    fn test_line_carries_text_and_style() {
        let theme = Theme::default();
        let view_line = ViewLine {
            text: "DB Rows".to_string(),
            style: StyleTag::Highlight,
        };
        let line = theme.line(&view_line);
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].content, "DB Rows");
        assert_eq!(line.spans[0].style, theme.style(StyleTag::Highlight));
    }
}
