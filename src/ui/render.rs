//! Plain-text rendering of screens for the terminal

use std::io;

use crossterm::style::{Color, Colored, Stylize};
use crossterm::tty::IsTty;
use egui::Color32;

use crate::models::news::NewsItem;
use crate::models::theme::Palette;
use crate::ui::screens::feed::LoadState;

/// Writes screen content as lines of text, colored with the active palette
pub struct TextRenderer {
    palette: &'static Palette,
    color: bool,
}

impl TextRenderer {
    pub fn new(palette: &'static Palette, color: bool) -> Self {
        Self { palette, color }
    }

    /// Colors only when stdout is a terminal and `NO_COLOR` is unset;
    /// `no_color` turns it off regardless.
    pub fn for_stdout(palette: &'static Palette, no_color: bool) -> Self {
        let color = !no_color && io::stdout().is_tty() && !Colored::ansi_color_disabled();
        Self::new(palette, color)
    }

    fn paint(&self, text: &str, color: Color32) -> String {
        if !self.color {
            return text.to_string();
        }
        text.with(Color::Rgb {
            r: color.r(),
            g: color.g(),
            b: color.b(),
        })
        .to_string()
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(text, self.palette.text)
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(text, self.palette.secondary)
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(text, self.palette.primary)
    }

    /// One numbered article card
    pub fn news_card(&self, index: usize, item: &NewsItem) -> Vec<String> {
        let mut lines = vec![
            format!("{:>2}. {}", index + 1, self.heading(&item.title)),
            format!("    {} · {}", self.muted(&item.source_name().to_uppercase()), self.muted(&item.published_label())),
        ];
        if let Some(description) = item.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(format!("    {}", description));
        }
        lines.push(format!("    {}", self.accent(&item.url)));
        lines
    }

    /// Lines for a settled load state. `empty_message` is shown when the
    /// request succeeded without articles.
    pub fn load_state(&self, state: &LoadState, empty_message: &str) -> Vec<String> {
        match state {
            LoadState::Idle => Vec::new(),
            LoadState::Loading => vec![self.muted("Loading…")],
            LoadState::Empty => vec![self.muted(empty_message)],
            LoadState::Failed(message) => vec![message.clone()],
            LoadState::Loaded(items) => items
                .iter()
                .enumerate()
                .flat_map(|(i, item)| self.news_card(i, item))
                .collect(),
        }
    }
}
