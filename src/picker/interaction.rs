/// Transient pointer state for one interactive surface.
///
/// `hovering` and `pressed` are independent: the button can still be down
/// after the pointer has been dragged elsewhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionTracker {
    pub hovering: bool,
    pub pressed: bool,
}

impl InteractionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_enter(&mut self) {
        self.hovering = true;
    }

    /// Leaving always aborts a press, whatever the button state is.
    pub fn pointer_leave(&mut self) {
        self.hovering = false;
        self.pressed = false;
    }

    pub fn pointer_down(&mut self) {
        self.pressed = true;
    }

    pub fn pointer_up(&mut self) {
        self.pressed = false;
    }

    pub fn is_idle(&self) -> bool {
        !self.hovering && !self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_clears_press_without_up() {
        let mut t = InteractionTracker::new();
        assert!(t.is_idle());

        t.pointer_enter();
        assert_eq!(t, InteractionTracker { hovering: true, pressed: false });

        t.pointer_down();
        assert_eq!(t, InteractionTracker { hovering: true, pressed: true });

        t.pointer_leave();
        assert_eq!(t, InteractionTracker { hovering: false, pressed: false });
    }

    #[test]
    fn test_down_and_up_ignore_hover() {
        let mut t = InteractionTracker::new();
        t.pointer_down();
        assert!(t.pressed);
        assert!(!t.hovering);
        t.pointer_up();
        assert!(t.is_idle());

        t.pointer_enter();
        t.pointer_down();
        t.pointer_up();
        assert!(t.hovering);
        assert!(!t.pressed);
    }
}
