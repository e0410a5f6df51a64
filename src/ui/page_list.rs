use crate::app::state::AppState;
use crate::picker::{RowView, Target};
use crate::ui::checkbox;
use crate::ui::layout::PickerLayout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use unicode_width::UnicodeWidthChar;

/// Left gutter: focus marker plus one space.
const GUTTER: u16 = 2;

pub fn render(frame: &mut Frame, layout: &PickerLayout, state: &AppState) {
    let header = state.picker.header_view();
    let focused = state.focus == Target::Header;
    render_row(frame, layout.header, header, focused, Theme::title());

    render_divider(frame, layout.header_divider);

    if state.picker.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled("  No pages", Theme::placeholder())))
            .style(Theme::row(false));
        frame.render_widget(empty, layout.list);
    } else {
        let needs_scrollbar =
            layout.visible_rows() > 0 && state.picker.len() > layout.visible_rows();
        for index in state.scroll_offset..state.picker.len() {
            let Some(mut area) = layout.row_rect(index, state.scroll_offset) else {
                break;
            };
            if needs_scrollbar {
                area.width = area.width.saturating_sub(1);
            }
            let Some(view) = state.picker.row_view(index) else {
                break;
            };
            let focused = state.focus == Target::Row(index);
            render_row(frame, area, view, focused, Theme::label());
        }

        if needs_scrollbar {
            let bar = Rect::new(
                layout.list.x + layout.list.width.saturating_sub(1),
                layout.list.y,
                1,
                layout.list.height,
            );
            let mut bar_state = ScrollbarState::new(state.max_scroll()).position(state.scroll_offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None)
                    .thumb_style(Theme::scrollbar_thumb())
                    .track_style(Theme::scrollbar_track()),
                bar,
                &mut bar_state,
            );
        }
    }

    render_divider(frame, layout.list_divider);
}

fn render_row(frame: &mut Frame, area: Rect, view: RowView<'_>, focused: bool, label_style: Style) {
    if area.width < GUTTER + checkbox::WIDTH {
        return;
    }
    let row_style = Theme::row(view.hovering || focused);
    let bg = row_style.bg.unwrap_or(Theme::BG_CARD);

    let label_w = (area.width - GUTTER - checkbox::WIDTH) as usize;
    let label = truncate_to_width(view.label, label_w);
    let pad = label_w.saturating_sub(display_width(&label));

    let marker = if focused { "›" } else { " " };
    let mut spans = vec![
        Span::styled(marker, Theme::focus_marker().bg(bg)),
        Span::styled(" ", row_style),
        Span::styled(label, label_style.bg(bg)),
        Span::styled(" ".repeat(pad), row_style),
    ];
    spans.extend(checkbox::spans(view.visual(), bg));

    frame.render_widget(Paragraph::new(Line::from(spans)).style(row_style), area);
}

fn render_divider(frame: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled("─".repeat(area.width as usize), Theme::divider()));
    frame.render_widget(Paragraph::new(line), area);
}

fn display_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Cut `s` to at most `max` columns, ending in `…` when anything was cut.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if display_width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Page 1", 10), "Page 1");
        assert_eq!(truncate_to_width("Quarterly report", 8), "Quarter…");
        assert_eq!(truncate_to_width("日本語のページ", 5), "日本…");
        assert_eq!(truncate_to_width("abc", 0), "");
        assert_eq!(truncate_to_width("abc", 1), "…");
    }
}
