use crate::config::model::UiConfig;
use crate::config::AppConfig;
use crate::picker::{Picker, Target};
use crate::ui::layout::{compute_layout, PickerLayout};
use ratatui::layout::Rect;

pub struct AppState {
    pub picker: Picker,
    pub ui: UiConfig,
    /// Keyboard cursor.
    pub focus: Target,
    pub scroll_offset: usize,
    /// Surface currently under the mouse pointer.
    pub hovered: Option<Target>,
    /// Surface that received the last left-button press.
    pub pressed_on: Option<Target>,
    pub last_mouse: Option<(u16, u16)>,
    pub viewport: Rect,
    pub status_message: Option<String>,
    pub dirty: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(picker: Picker, ui: UiConfig, viewport: Rect) -> Self {
        Self {
            picker,
            ui,
            focus: Target::Header,
            scroll_offset: 0,
            hovered: None,
            pressed_on: None,
            last_mouse: None,
            viewport,
            status_message: None,
            dirty: true,
            should_quit: false,
        }
    }

    pub fn from_config(
        cfg: &AppConfig,
        viewport: Rect,
        on_done: impl FnMut(Vec<String>) + 'static,
    ) -> Self {
        let picker = Picker::with_policy(
            cfg.pages.clone(),
            cfg.initial_selected.clone(),
            cfg.title.clone(),
            cfg.selection.policy(),
        )
        .on_done(on_done);
        Self::new(picker, cfg.ui.clone(), viewport)
    }

    /// Swap in a freshly loaded config. The selection is replaced, not merged.
    pub fn apply_config(&mut self, cfg: &AppConfig) {
        self.picker.set_title(cfg.title.clone());
        self.picker.reset_with_policy(
            cfg.pages.clone(),
            cfg.initial_selected.clone(),
            cfg.selection.policy(),
        );
        self.ui = cfg.ui.clone();
        self.focus = Target::Header;
        self.scroll_offset = 0;
        self.hovered = None;
        self.pressed_on = None;
        self.status_message = None;
        self.dirty = true;
    }

    pub fn layout(&self) -> PickerLayout {
        compute_layout(
            self.viewport,
            self.picker.len(),
            self.ui.max_visible_rows,
            self.ui.show_hints,
        )
    }

    pub fn target_at(&self, x: u16, y: u16) -> Option<Target> {
        self.layout()
            .target_at(x, y, self.scroll_offset, self.picker.len())
    }

    pub fn max_scroll(&self) -> usize {
        self.picker
            .len()
            .saturating_sub(self.layout().visible_rows())
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let next = self.scroll_offset.saturating_add_signed(delta);
        self.scroll_offset = next.min(self.max_scroll());
        self.dirty = true;
    }

    /// Focus order: header, each row, Done.
    fn focus_order_index(&self) -> usize {
        match self.focus {
            Target::Header => 0,
            Target::Row(i) => i + 1,
            Target::Done => self.picker.len() + 1,
        }
    }

    fn target_for_order_index(&self, index: usize) -> Target {
        let n = self.picker.len();
        match index {
            0 => Target::Header,
            i if i <= n => Target::Row(i - 1),
            _ => Target::Done,
        }
    }

    pub fn move_focus(&mut self, delta: isize) {
        let last = self.picker.len() + 1;
        let next = self
            .focus_order_index()
            .saturating_add_signed(delta)
            .min(last);
        self.set_focus(self.target_for_order_index(next));
    }

    pub fn set_focus(&mut self, target: Target) {
        self.focus = match target {
            Target::Row(i) if i >= self.picker.len() => Target::Done,
            other => other,
        };
        self.ensure_focus_visible();
        self.dirty = true;
    }

    /// Scroll just far enough that a focused row is on screen.
    pub fn ensure_focus_visible(&mut self) {
        let Target::Row(index) = self.focus else {
            return;
        };
        let visible = self.layout().visible_rows().max(1);
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + visible {
            self.scroll_offset = index + 1 - visible;
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        self.ensure_focus_visible();
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        format!(
            "{} of {} selected",
            self.picker.selection().selected_known(),
            self.picker.len()
        )
    }
}
