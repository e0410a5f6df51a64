//! Terminal glyphs for the six checkbox appearances.
//!
//! Every variant is exactly `WIDTH` cells wide so rows never shift when the
//! state changes: a one-cell glow slot on each side of a three-cell box.

use crate::picker::checkbox::CheckboxVisual;
use crate::ui::theme::Theme;
use ratatui::prelude::*;

pub const WIDTH: u16 = 5;

pub fn spans(visual: CheckboxVisual, row_bg: Color) -> Vec<Span<'static>> {
    let base = Theme::checkbox_base(visual);
    let (glow_l, glow_r) = if visual.has_glow() {
        ("(", ")")
    } else {
        (" ", " ")
    };
    let glow = Style::default().fg(Theme::PRESS_GLOW).bg(row_bg);

    let body: Vec<Span<'static>> = if visual.is_checked() {
        vec![Span::styled(
            " ✓ ",
            Style::default()
                .fg(Theme::CHECK_MARK)
                .bg(base)
                .add_modifier(Modifier::BOLD),
        )]
    } else {
        let frame = Style::default().fg(base).bg(row_bg);
        let mark = match visual {
            CheckboxVisual::UncheckedHover => {
                Span::styled("✓", Style::default().fg(Theme::UNCHECKED_BORDER).bg(row_bg))
            }
            CheckboxVisual::UncheckedPressed => {
                Span::styled("✓", Style::default().fg(Theme::PRESS_GLOW).bg(row_bg))
            }
            _ => Span::styled(" ", frame),
        };
        vec![Span::styled("[", frame), mark, Span::styled("]", frame)]
    };

    let mut out = Vec::with_capacity(body.len() + 2);
    out.push(Span::styled(glow_l, glow));
    out.extend(body);
    out.push(Span::styled(glow_r, glow));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [CheckboxVisual; 6] = [
        CheckboxVisual::UncheckedIdle,
        CheckboxVisual::UncheckedHover,
        CheckboxVisual::UncheckedPressed,
        CheckboxVisual::CheckedIdle,
        CheckboxVisual::CheckedHover,
        CheckboxVisual::CheckedPressed,
    ];

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_every_variant_has_fixed_width() {
        for visual in ALL {
            let line = Line::from(spans(visual, Theme::BG_CARD));
            assert_eq!(line.width(), WIDTH as usize, "{:?}", visual);
        }
    }

    #[test]
    fn test_glow_only_when_pressed() {
        assert_eq!(text(&spans(CheckboxVisual::CheckedPressed, Theme::BG_CARD)), "( ✓ )");
        assert_eq!(text(&spans(CheckboxVisual::UncheckedPressed, Theme::BG_CARD)), "([✓])");
        assert_eq!(text(&spans(CheckboxVisual::UncheckedIdle, Theme::BG_CARD)), " [ ] ");
        assert_eq!(text(&spans(CheckboxVisual::CheckedHover, Theme::BG_CARD)), "  ✓  ");
    }

    #[test]
    fn test_checked_fill_follows_hover_but_not_press() {
        let hover = spans(CheckboxVisual::CheckedHover, Theme::BG_CARD);
        assert_eq!(hover[1].style.bg, Some(Theme::CHECKED_HOVER));
        let pressed = spans(CheckboxVisual::CheckedPressed, Theme::BG_CARD);
        assert_eq!(pressed[1].style.bg, Some(Theme::CHECKED));
    }
}
