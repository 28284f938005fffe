use ratatui::{buffer::Buffer, layout::Rect};

use crate::{
    ui::{render_results, render_typing},
    App, AppState,
};

/// A UI Screen boundary: responsible for rendering the body below the header
pub trait Screen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Typing screen - target text, cursor and live wpm
pub struct TypingScreen;

impl Screen for TypingScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        render_typing(app, area, buf);
    }
}

/// Results screen - headline numbers, details and the per-word chart
pub struct ResultsScreen;

impl Screen for ResultsScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        render_results(app, area, buf);
    }
}

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(state: &AppState) -> Box<dyn Screen> {
    match state {
        AppState::Typing => Box::new(TypingScreen),
        AppState::Results => Box::new(ResultsScreen),
    }
}
