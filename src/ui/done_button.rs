use crate::app::state::AppState;
use crate::picker::Target;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let tracker = state.picker.tracker(Target::Done);
    let style = Theme::button(tracker.hovering, tracker.pressed);
    let label = if state.focus == Target::Done {
        "› Done ‹"
    } else {
        "Done"
    };
    let button = Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(Alignment::Center)
        .style(style);
    frame.render_widget(button, area);
}
