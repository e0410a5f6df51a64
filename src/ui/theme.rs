use crate::picker::checkbox::CheckboxVisual;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_PAGE: Color = Color::Rgb(0xf5, 0xf5, 0xf5);
    pub const BG_CARD: Color = Color::Rgb(0xff, 0xff, 0xff);
    pub const BG_ROW_HOVER: Color = Color::Rgb(0xf2, 0xf2, 0xf2);
    pub const TEXT_PRIMARY: Color = Color::Rgb(0x1f, 0x21, 0x28);
    pub const TEXT_MUTED: Color = Color::Rgb(0x8a, 0x8a, 0x8a);
    pub const DIVIDER: Color = Color::Rgb(0xe6, 0xe5, 0xe5);
    pub const BORDER: Color = Color::Rgb(0xee, 0xee, 0xee);

    pub const CHECKED: Color = Color::Rgb(0x24, 0x69, 0xf6);
    pub const CHECKED_HOVER: Color = Color::Rgb(0x50, 0x87, 0xf8);
    pub const UNCHECKED_BORDER: Color = Color::Rgb(0xe1, 0xe1, 0xe1);
    pub const UNCHECKED_BORDER_HOVER: Color = Color::Rgb(0xbd, 0xbd, 0xbd);
    pub const PRESS_GLOW: Color = Color::Rgb(0x93, 0xaa, 0xe4);
    pub const CHECK_MARK: Color = Color::White;

    pub const BUTTON: Color = Color::Rgb(0xff, 0xce, 0x22);
    pub const BUTTON_HOVER: Color = Color::Rgb(0xff, 0xd8, 0x4d);
    pub const BUTTON_TEXT: Color = Color::Rgb(0x00, 0x00, 0x00);

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn card() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_CARD)
    }

    pub fn page() -> Style {
        Style::default().bg(Self::BG_PAGE)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER).bg(Self::BG_CARD)
    }

    pub fn divider() -> Style {
        Style::default().fg(Self::DIVIDER).bg(Self::BG_CARD)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Self::TEXT_MUTED).add_modifier(Modifier::ITALIC)
    }

    /// Row background: tinted while hovered or focused.
    pub fn row(highlight: bool) -> Style {
        if highlight {
            Style::default().bg(Self::BG_ROW_HOVER)
        } else {
            Style::default().bg(Self::BG_CARD)
        }
    }

    pub fn focus_marker() -> Style {
        Style::default().fg(Self::CHECKED).add_modifier(Modifier::BOLD)
    }

    /// Pressing returns the button to its resting color.
    pub fn button(hovering: bool, pressed: bool) -> Style {
        let bg = if hovering && !pressed {
            Self::BUTTON_HOVER
        } else {
            Self::BUTTON
        };
        Style::default()
            .fg(Self::BUTTON_TEXT)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_key() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .bg(Self::BG_PAGE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_text() -> Style {
        Style::default().fg(Self::TEXT_MUTED).bg(Self::BG_PAGE)
    }

    pub fn scrollbar_thumb() -> Style {
        Style::default().fg(Self::UNCHECKED_BORDER_HOVER)
    }

    pub fn scrollbar_track() -> Style {
        Style::default().fg(Self::BG_CARD)
    }

    /// Box outline (unchecked) or fill (checked) color for a checkbox.
    pub fn checkbox_base(visual: CheckboxVisual) -> Color {
        match visual {
            CheckboxVisual::UncheckedIdle => Self::UNCHECKED_BORDER,
            CheckboxVisual::UncheckedHover | CheckboxVisual::UncheckedPressed => {
                Self::UNCHECKED_BORDER_HOVER
            }
            CheckboxVisual::CheckedIdle | CheckboxVisual::CheckedPressed => Self::CHECKED,
            CheckboxVisual::CheckedHover => Self::CHECKED_HOVER,
        }
    }
}
