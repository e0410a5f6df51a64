use crate::picker::Target;
use ratatui::layout::{Position, Rect};

const CARD_WIDTH: u16 = 46;
/// Borders, header, two dividers and the Done button.
const CARD_CHROME: u16 = 6;

/// Screen geometry of the picker card. Rendering and pointer hit-testing both
/// read from this, so they always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerLayout {
    pub card: Rect,
    pub header: Rect,
    pub header_divider: Rect,
    pub list: Rect,
    pub list_divider: Rect,
    pub done: Rect,
    pub hints: Option<Rect>,
}

impl PickerLayout {
    pub fn visible_rows(&self) -> usize {
        self.list.height as usize
    }

    /// Which surface sits under the terminal cell `(x, y)`.
    pub fn target_at(&self, x: u16, y: u16, scroll: usize, item_count: usize) -> Option<Target> {
        let pos = Position::new(x, y);
        if self.header.contains(pos) {
            return Some(Target::Header);
        }
        if self.done.contains(pos) {
            return Some(Target::Done);
        }
        if self.list.contains(pos) {
            let index = scroll + (y - self.list.y) as usize;
            return (index < item_count).then_some(Target::Row(index));
        }
        None
    }

    /// Screen row of item `index`, if it is scrolled into view.
    pub fn row_rect(&self, index: usize, scroll: usize) -> Option<Rect> {
        let offset = index.checked_sub(scroll)?;
        if offset >= self.visible_rows() {
            return None;
        }
        Some(Rect::new(
            self.list.x,
            self.list.y + offset as u16,
            self.list.width,
            1,
        ))
    }
}

pub fn compute_layout(
    area: Rect,
    item_count: usize,
    max_visible_rows: u16,
    show_hints: bool,
) -> PickerLayout {
    let hint_h = u16::from(show_hints);
    let available = area.height.saturating_sub(CARD_CHROME + hint_h);
    let wanted = (item_count.max(1)).min(max_visible_rows as usize) as u16;
    let rows = wanted.min(available);

    let card_w = CARD_WIDTH.min(area.width);
    let card_h = (rows + CARD_CHROME).min(area.height);
    let total_h = (card_h + hint_h).min(area.height);
    let card_x = area.x + (area.width - card_w) / 2;
    let card_y = area.y + (area.height - total_h) / 2;
    let card = Rect::new(card_x, card_y, card_w, card_h);

    let inner_x = card.x + 1;
    let inner_w = card.width.saturating_sub(2);
    let header = Rect::new(inner_x, card.y + 1, inner_w, 1);
    let header_divider = Rect::new(inner_x, card.y + 2, inner_w, 1);
    let list = Rect::new(inner_x, card.y + 3, inner_w, rows);
    let list_divider = Rect::new(inner_x, list.y + rows, inner_w, 1);
    let done = Rect::new(inner_x + 1, list_divider.y + 1, inner_w.saturating_sub(2), 1);
    let hints = show_hints.then(|| Rect::new(card.x, card.y + card.height, card.width, 1));

    // Tiny terminals push the lower parts off screen; clip so nothing is
    // drawn outside the buffer.
    PickerLayout {
        card,
        header: header.intersection(area),
        header_divider: header_divider.intersection(area),
        list: list.intersection(area),
        list_divider: list_divider.intersection(area),
        done: done.intersection(area),
        hints: hints.map(|r| r.intersection(area)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn test_card_is_centered_and_sized_by_rows() {
        let layout = compute_layout(screen(), 3, 6, true);
        assert_eq!(layout.card.width, CARD_WIDTH);
        assert_eq!(layout.card.height, 3 + CARD_CHROME);
        assert_eq!(layout.card.x, (80 - CARD_WIDTH) / 2);
        assert_eq!(layout.visible_rows(), 3);
        assert_eq!(layout.hints.unwrap().y, layout.card.y + layout.card.height);
    }

    #[test]
    fn test_rows_capped_by_config_and_screen() {
        assert_eq!(compute_layout(screen(), 20, 6, true).visible_rows(), 6);
        let short = Rect::new(0, 0, 80, 10);
        assert_eq!(compute_layout(short, 20, 6, true).visible_rows(), 3);
        // An empty list still reserves one row for the placeholder.
        assert_eq!(compute_layout(screen(), 0, 6, false).visible_rows(), 1);
    }

    #[test]
    fn test_target_at_covers_every_surface() {
        let layout = compute_layout(screen(), 10, 6, true);
        let x = layout.card.x + 3;

        assert_eq!(layout.target_at(x, layout.header.y, 0, 10), Some(Target::Header));
        assert_eq!(layout.target_at(x, layout.list.y, 0, 10), Some(Target::Row(0)));
        assert_eq!(layout.target_at(x, layout.list.y + 5, 0, 10), Some(Target::Row(5)));
        assert_eq!(layout.target_at(x, layout.list.y + 2, 4, 10), Some(Target::Row(6)));
        assert_eq!(layout.target_at(x, layout.done.y, 0, 10), Some(Target::Done));
        assert_eq!(layout.target_at(x, layout.header_divider.y, 0, 10), None);
        assert_eq!(layout.target_at(0, 0, 0, 10), None);
    }

    #[test]
    fn test_target_at_ignores_rows_past_the_end() {
        let layout = compute_layout(screen(), 0, 6, true);
        assert_eq!(layout.target_at(layout.list.x, layout.list.y, 0, 0), None);
    }

    #[test]
    fn test_row_rect_respects_scroll() {
        let layout = compute_layout(screen(), 10, 6, true);
        assert_eq!(layout.row_rect(2, 2).map(|r| r.y), Some(layout.list.y));
        assert!(layout.row_rect(1, 2).is_none());
        assert!(layout.row_rect(8, 2).is_none());
        assert_eq!(layout.row_rect(7, 2).map(|r| r.y), Some(layout.list.y + 5));
    }
}
