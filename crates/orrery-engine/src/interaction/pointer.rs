use glam::Vec2;

use crate::input::queue::MouseButton;

/// Maximum on-screen displacement (px) between press and release for the
/// pair to count as a click. Anything farther is a drag.
pub const CLICK_SLOP_PX: f32 = 5.0;

/// Classified pointer activity, produced from raw down/move/up events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    /// A camera gesture began (any button press).
    GestureStart { button: MouseButton },
    /// The pointer moved with a button held. `delta` is in pixels since
    /// the previous move.
    Drag { button: MouseButton, delta: Vec2 },
    /// A press/release pair within the click slop.
    Click { at: Vec2 },
}

/// Tracks one pointer across a press/drag/release cycle and
/// distinguishes clicks from drags.
pub struct PointerTracker {
    pressed: Option<MouseButton>,
    press_at: Vec2,
    last: Vec2,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            pressed: None,
            press_at: Vec2::ZERO,
            last: Vec2::ZERO,
        }
    }

    pub fn on_down(&mut self, at: Vec2, button: MouseButton) -> PointerAction {
        self.pressed = Some(button);
        self.press_at = at;
        self.last = at;
        PointerAction::GestureStart { button }
    }

    pub fn on_move(&mut self, at: Vec2) -> Option<PointerAction> {
        let button = self.pressed?;
        let delta = at - self.last;
        self.last = at;
        Some(PointerAction::Drag { button, delta })
    }

    /// Release. Returns a click only when the pointer stayed within
    /// `CLICK_SLOP_PX` of the press position.
    pub fn on_up(&mut self, at: Vec2) -> Option<PointerAction> {
        let was_pressed = self.pressed.take().is_some();
        if was_pressed && (at - self.press_at).length() <= CLICK_SLOP_PX {
            Some(PointerAction::Click { at })
        } else {
            None
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed.is_some()
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_displacement_is_a_click() {
        let mut tracker = PointerTracker::new();
        tracker.on_down(Vec2::new(100.0, 100.0), MouseButton::Left);
        tracker.on_move(Vec2::new(103.0, 100.0));
        let action = tracker.on_up(Vec2::new(103.0, 100.0));
        assert_eq!(action, Some(PointerAction::Click { at: Vec2::new(103.0, 100.0) }));
    }

    #[test]
    fn large_displacement_is_not_a_click() {
        let mut tracker = PointerTracker::new();
        tracker.on_down(Vec2::new(100.0, 100.0), MouseButton::Left);
        tracker.on_move(Vec2::new(140.0, 100.0));
        assert_eq!(tracker.on_up(Vec2::new(140.0, 100.0)), None);
    }

    #[test]
    fn boundary_displacement_still_clicks() {
        let mut tracker = PointerTracker::new();
        tracker.on_down(Vec2::new(0.0, 0.0), MouseButton::Left);
        let action = tracker.on_up(Vec2::new(CLICK_SLOP_PX, 0.0));
        assert!(matches!(action, Some(PointerAction::Click { .. })));
    }

    #[test]
    fn drag_reports_per_move_deltas() {
        let mut tracker = PointerTracker::new();
        tracker.on_down(Vec2::new(10.0, 10.0), MouseButton::Right);
        let a = tracker.on_move(Vec2::new(15.0, 10.0));
        let b = tracker.on_move(Vec2::new(15.0, 18.0));
        assert_eq!(
            a,
            Some(PointerAction::Drag { button: MouseButton::Right, delta: Vec2::new(5.0, 0.0) })
        );
        assert_eq!(
            b,
            Some(PointerAction::Drag { button: MouseButton::Right, delta: Vec2::new(0.0, 8.0) })
        );
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.on_move(Vec2::new(5.0, 5.0)), None);
        assert_eq!(tracker.on_up(Vec2::new(5.0, 5.0)), None);
    }
}
