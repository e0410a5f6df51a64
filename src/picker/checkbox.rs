/// The six ways a checkbox can be drawn.
///
/// Pressed wins over hover for the base colors; the glow ring is drawn on
/// top of whichever base (checked or unchecked) is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxVisual {
    UncheckedIdle,
    UncheckedHover,
    UncheckedPressed,
    CheckedIdle,
    CheckedHover,
    CheckedPressed,
}

impl CheckboxVisual {
    pub fn resolve(checked: bool, hovering: bool, pressed: bool) -> Self {
        match (checked, pressed, hovering) {
            (false, true, _) => Self::UncheckedPressed,
            (false, false, true) => Self::UncheckedHover,
            (false, false, false) => Self::UncheckedIdle,
            (true, true, _) => Self::CheckedPressed,
            (true, false, true) => Self::CheckedHover,
            (true, false, false) => Self::CheckedIdle,
        }
    }

    pub fn is_checked(self) -> bool {
        matches!(self, Self::CheckedIdle | Self::CheckedHover | Self::CheckedPressed)
    }

    pub fn has_glow(self) -> bool {
        matches!(self, Self::UncheckedPressed | Self::CheckedPressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_way_mapping() {
        use CheckboxVisual::*;
        let cases = [
            ((false, false, false), UncheckedIdle),
            ((false, true, false), UncheckedHover),
            ((false, true, true), UncheckedPressed),
            ((false, false, true), UncheckedPressed),
            ((true, false, false), CheckedIdle),
            ((true, true, false), CheckedHover),
            ((true, true, true), CheckedPressed),
            ((true, false, true), CheckedPressed),
        ];
        for ((checked, hovering, pressed), expected) in cases {
            assert_eq!(
                CheckboxVisual::resolve(checked, hovering, pressed),
                expected,
                "checked={} hovering={} pressed={}",
                checked,
                hovering,
                pressed
            );
        }
    }

    #[test]
    fn test_glow_is_additive_to_base() {
        let v = CheckboxVisual::resolve(true, true, true);
        assert!(v.is_checked());
        assert!(v.has_glow());
        assert_ne!(v, CheckboxVisual::CheckedHover);

        let v = CheckboxVisual::resolve(false, true, true);
        assert!(!v.is_checked());
        assert!(v.has_glow());
    }
}
