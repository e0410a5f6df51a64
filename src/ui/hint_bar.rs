use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const HINTS: &[(&str, &str)] = &[
    ("↑↓", "Move"),
    ("Space", "Toggle"),
    ("a", "All"),
    ("d", "Done"),
    ("r", "Revert"),
    ("Esc", "Quit"),
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = vec![Span::styled(
        format!(" {} ", state.status_line()),
        Theme::hint_text(),
    )];

    for (key, text) in HINTS {
        let used: usize = parts.iter().map(|s| s.width()).sum();
        let wanted = key.chars().count() + text.chars().count() + 3;
        if used + wanted > area.width as usize {
            break;
        }
        parts.push(Span::styled(format!(" {}", key), Theme::hint_key()));
        parts.push(Span::styled(format!(" {} ", text), Theme::hint_text()));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)).style(Theme::page()), area);
}
