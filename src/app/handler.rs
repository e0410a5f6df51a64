use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::picker::{ClickOutcome, Target};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::InputClosed => {
            tracing::warn!("terminal input closed");
            vec![Action::Quit]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => {
            let actions = handle_key(state, key);
            // Focus moves can scroll rows under a stationary pointer.
            rehover(state);
            actions
        }
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(w, h) => {
            state.resize(w, h);
            rehover(state);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    let page = state.layout().visible_rows().max(1) as isize;
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
            state.move_focus(-1);
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            state.move_focus(1);
            vec![]
        }
        KeyCode::PageUp => {
            state.move_focus(-page);
            vec![]
        }
        KeyCode::PageDown => {
            state.move_focus(page);
            vec![]
        }
        KeyCode::Home => {
            state.set_focus(Target::Header);
            vec![]
        }
        KeyCode::End => {
            state.set_focus(Target::Done);
            vec![]
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            let focus = state.focus;
            activate(state, focus)
        }
        KeyCode::Char('a') => activate(state, Target::Header),
        KeyCode::Char('d') => vec![Action::Confirm],
        KeyCode::F(5) => vec![Action::Reload],
        KeyCode::Char('r') => {
            state.picker.revert();
            state.status_message = Some("Reverted to initial selection".to_string());
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            update_hover(state, x, y);
            vec![]
        }
        MouseEventKind::Down(MouseButton::Left) => {
            update_hover(state, x, y);
            let target = state.target_at(x, y);
            if let Some(target) = target {
                state.picker.pointer_down(target);
                state.set_focus(target);
            }
            state.pressed_on = target;
            vec![]
        }
        MouseEventKind::Up(MouseButton::Left) => {
            update_hover(state, x, y);
            let target = state.target_at(x, y);
            let pressed_on = state.pressed_on.take();
            match target {
                Some(target) => {
                    state.picker.pointer_up(target);
                    // A click needs press and release on the same surface.
                    if pressed_on == Some(target) {
                        activate(state, target)
                    } else {
                        vec![]
                    }
                }
                None => vec![],
            }
        }
        MouseEventKind::ScrollDown => {
            state.scroll_by(1);
            rehover(state);
            vec![]
        }
        MouseEventKind::ScrollUp => {
            state.scroll_by(-1);
            rehover(state);
            vec![]
        }
        _ => vec![],
    }
}

/// Send leave/enter transitions when the surface under the pointer changes.
fn update_hover(state: &mut AppState, x: u16, y: u16) {
    state.last_mouse = Some((x, y));
    let next = state.target_at(x, y);
    if next == state.hovered {
        return;
    }
    if let Some(prev) = state.hovered {
        state.picker.pointer_leave(prev);
    }
    if let Some(next) = next {
        state.picker.pointer_enter(next);
    }
    state.hovered = next;
}

/// Scrolling or resizing moves content under a stationary pointer.
fn rehover(state: &mut AppState) {
    if let Some((x, y)) = state.last_mouse {
        update_hover(state, x, y);
    }
}

fn activate(state: &mut AppState, target: Target) -> Vec<Action> {
    state.status_message = None;
    match state.picker.click(target) {
        ClickOutcome::Confirm => vec![Action::Confirm],
        ClickOutcome::Changed | ClickOutcome::Ignored => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::UiConfig;
    use crate::picker::{Item, Picker};
    use ratatui::layout::Rect;

    fn state_with(n: usize, initial: &[&str]) -> AppState {
        let items = (1..=n)
            .map(|i| Item::new(format!("p{}", i), format!("Page {}", i)))
            .collect();
        let initial = initial.iter().map(|s| s.to_string()).collect();
        let picker = Picker::new(items, initial, "All pages");
        AppState::new(picker, UiConfig::default(), Rect::new(0, 0, 80, 24))
    }

    fn mouse(kind: MouseEventKind, x: u16, y: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn click_at(state: &mut AppState, x: u16, y: u16) -> Vec<Action> {
        let mut actions = handle_event(state, mouse(MouseEventKind::Moved, x, y));
        actions.extend(handle_event(
            state,
            mouse(MouseEventKind::Down(MouseButton::Left), x, y),
        ));
        actions.extend(handle_event(
            state,
            mouse(MouseEventKind::Up(MouseButton::Left), x, y),
        ));
        actions
    }

    #[test]
    fn test_header_click_toggles_all() {
        let mut state = state_with(3, &[]);
        let layout = state.layout();
        let x = layout.header.x + 2;

        assert!(click_at(&mut state, x, layout.header.y).is_empty());
        assert!(state.picker.is_all_selected());

        click_at(&mut state, x, layout.header.y);
        assert!(state.picker.snapshot().is_empty());
    }

    #[test]
    fn test_row_click_toggles_that_row() {
        let mut state = state_with(3, &[]);
        let layout = state.layout();
        click_at(&mut state, layout.list.x + 2, layout.list.y + 1);
        assert_eq!(state.picker.snapshot(), vec!["p2".to_string()]);
        assert!(state.picker.tracker(Target::Row(1)).hovering);
        assert!(!state.picker.tracker(Target::Row(1)).pressed);
    }

    #[test]
    fn test_drag_off_row_clears_press_and_does_not_toggle() {
        let mut state = state_with(3, &[]);
        let layout = state.layout();
        let x = layout.list.x + 2;

        handle_event(&mut state, mouse(MouseEventKind::Moved, x, layout.list.y));
        handle_event(
            &mut state,
            mouse(MouseEventKind::Down(MouseButton::Left), x, layout.list.y),
        );
        let row = state.picker.tracker(Target::Row(0));
        assert!(row.hovering && row.pressed);

        handle_event(
            &mut state,
            mouse(MouseEventKind::Drag(MouseButton::Left), x, layout.list.y + 2),
        );
        assert!(state.picker.tracker(Target::Row(0)).is_idle());
        assert!(state.picker.tracker(Target::Row(2)).hovering);

        handle_event(
            &mut state,
            mouse(MouseEventKind::Up(MouseButton::Left), x, layout.list.y + 2),
        );
        assert!(state.picker.snapshot().is_empty());
        assert!(state.pressed_on.is_none());
    }

    #[test]
    fn test_done_click_requests_confirm() {
        let mut state = state_with(3, &["p1"]);
        let layout = state.layout();
        let actions = click_at(&mut state, layout.done.x + 1, layout.done.y);
        assert_eq!(actions, vec![Action::Confirm]);
    }

    #[test]
    fn test_leaving_card_resets_hover() {
        let mut state = state_with(3, &[]);
        let layout = state.layout();
        handle_event(&mut state, mouse(MouseEventKind::Moved, layout.header.x, layout.header.y));
        assert!(state.picker.tracker(Target::Header).hovering);
        handle_event(&mut state, mouse(MouseEventKind::Moved, 0, 0));
        assert!(state.picker.tracker(Target::Header).is_idle());
        assert!(state.hovered.is_none());
    }

    #[test]
    fn test_scroll_moves_hover_to_new_row() {
        let mut state = state_with(10, &[]);
        let layout = state.layout();
        let (x, y) = (layout.list.x + 2, layout.list.y);
        handle_event(&mut state, mouse(MouseEventKind::Moved, x, y));
        assert_eq!(state.hovered, Some(Target::Row(0)));

        handle_event(&mut state, mouse(MouseEventKind::ScrollDown, x, y));
        assert_eq!(state.scroll_offset, 1);
        assert_eq!(state.hovered, Some(Target::Row(1)));
        assert!(state.picker.tracker(Target::Row(0)).is_idle());
        assert!(state.picker.tracker(Target::Row(1)).hovering);
    }

    #[test]
    fn test_focus_scroll_moves_hover_to_new_row() {
        let mut state = state_with(10, &[]);
        let layout = state.layout();
        let (x, y) = (layout.list.x + 2, layout.list.y);
        handle_event(&mut state, mouse(MouseEventKind::Moved, x, y));
        assert_eq!(state.hovered, Some(Target::Row(0)));

        handle_event(&mut state, key(KeyCode::End));
        for _ in 0..3 {
            handle_event(&mut state, key(KeyCode::Up));
        }
        assert_eq!(state.scroll_offset, 4);
        assert_eq!(state.hovered, state.target_at(x, y));
        assert_eq!(state.hovered, Some(Target::Row(4)));
        assert!(state.picker.tracker(Target::Row(0)).is_idle());
        assert!(state.picker.tracker(Target::Row(4)).hovering);
    }

    #[test]
    fn test_keyboard_toggle_and_confirm() {
        let mut state = state_with(3, &[]);
        handle_event(&mut state, key(KeyCode::Down));
        handle_event(&mut state, key(KeyCode::Down));
        handle_event(&mut state, key(KeyCode::Char(' ')));
        assert_eq!(state.picker.snapshot(), vec!["p2".to_string()]);

        handle_event(&mut state, key(KeyCode::Char('a')));
        assert!(state.picker.is_all_selected());

        handle_event(&mut state, key(KeyCode::End));
        assert_eq!(handle_event(&mut state, key(KeyCode::Enter)), vec![Action::Confirm]);
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('d'))), vec![Action::Confirm]);
    }

    #[test]
    fn test_revert_and_quit_keys() {
        let mut state = state_with(3, &["p3"]);
        handle_event(&mut state, key(KeyCode::Char('a')));
        handle_event(&mut state, key(KeyCode::Char('r')));
        assert_eq!(state.picker.snapshot(), vec!["p3".to_string()]);
        assert_eq!(handle_event(&mut state, key(KeyCode::F(5))), vec![Action::Reload]);
        assert_eq!(handle_event(&mut state, key(KeyCode::Esc)), vec![Action::Quit]);
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, ctrl_c), vec![Action::Quit]);
    }
}
