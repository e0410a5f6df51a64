mod checkbox;
mod done_button;
mod hint_bar;
pub mod layout;
mod page_list;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Theme::page()), area);

    let layout = state.layout();

    frame.render_widget(Clear, layout.card);
    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::card());
    frame.render_widget(card, layout.card);

    page_list::render(frame, &layout, state);
    done_button::render(frame, layout.done, state);

    if let Some(hints) = layout.hints {
        hint_bar::render(frame, hints, state);
    }
}
