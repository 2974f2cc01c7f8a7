use glam::{Vec2, Vec3};

use crate::api::types::EntityId;
use crate::extensions::interp::lerp_vec3;
use crate::renderer::camera::OrbitCamera;
use crate::renderer::controls::OrbitControls;

/// Camera standoff distance from a focused body.
pub const FOCUS_STANDOFF: f32 = 15.0;
/// Extra slack before the zoom-in correction switches off.
pub const FOCUS_STANDOFF_SLACK: f32 = 1.0;
/// Per-frame smoothing for the look-at target while focused.
pub const TARGET_SMOOTHING: f32 = 0.1;
/// Per-frame smoothing for camera approach and restore.
pub const CAMERA_SMOOTHING: f32 = 0.05;
/// Both eye and target must come this close to their snapshots for a
/// restore to complete.
pub const RESTORE_EPS: f32 = 0.5;
/// Zoom-button step along the view axis.
pub const ZOOM_STEP: f32 = 15.0;
/// The zoom-in button refuses to act closer than this to the target.
pub const MIN_ZOOM_DISTANCE: f32 = 20.0;

/// The focus/restore state machine. A tagged state instead of loose
/// booleans, so "restoring while zooming" is simply not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusState {
    Idle,
    Focusing { zooming: bool },
    Restoring,
}

/// Camera, controls and focus-session state, owned by the animation loop
/// and passed by reference to the interaction handlers.
///
/// Snapshot invariant: the pre-focus eye/target pair is written exactly
/// once per focus session — on entry from any non-`Focusing` state — and
/// is never overwritten while the session stays open across re-targeting.
pub struct ViewportSession {
    pub camera: OrbitCamera,
    pub controls: OrbitControls,
    /// Viewport size in pixels; kept in sync with the canvas.
    pub viewport: Vec2,
    state: FocusState,
    focused: Option<EntityId>,
    saved_eye: Vec3,
    saved_target: Vec3,
    /// Focused body's world position last frame, for the rigid follow.
    last_target_pos: Vec3,
}

impl ViewportSession {
    pub fn new(camera: OrbitCamera, viewport: Vec2) -> Self {
        Self {
            camera,
            controls: OrbitControls::new(),
            viewport,
            state: FocusState::Idle,
            focused: None,
            saved_eye: Vec3::ZERO,
            saved_target: Vec3::ZERO,
            last_target_pos: Vec3::ZERO,
        }
    }

    pub fn state(&self) -> FocusState {
        self.state
    }

    pub fn focused(&self) -> Option<EntityId> {
        self.focused
    }

    /// Whether a focus session is currently open.
    pub fn is_focused(&self) -> bool {
        matches!(self.state, FocusState::Focusing { .. })
    }

    /// The saved pre-focus pose (eye, target).
    pub fn snapshot(&self) -> (Vec3, Vec3) {
        (self.saved_eye, self.saved_target)
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport = Vec2::new(width, height);
            self.camera.set_aspect(width / height);
        }
    }

    /// Open a focus session on `entity`, or re-target an open one.
    /// Snapshots the current pose only when no session is open.
    pub fn begin_focus(&mut self, entity: EntityId, world_pos: Vec3) {
        if !self.is_focused() {
            self.saved_eye = self.camera.eye;
            self.saved_target = self.camera.target;
        }
        self.focused = Some(entity);
        self.last_target_pos = world_pos;
        // Look at the body right away; the eye glides in over later frames.
        self.camera.target = world_pos;
        self.state = FocusState::Focusing { zooming: true };
    }

    /// Close the active session and glide back to the saved pose.
    /// No-op unless a session is open.
    pub fn clear_focus(&mut self) {
        if self.is_focused() {
            self.focused = None;
            self.state = FocusState::Restoring;
        }
    }

    /// A manual camera gesture began. Automated corrections stop on the
    /// axes the user took over: the zoom-in glide is dropped, an active
    /// restore is abandoned where it stands. An open focus session stays
    /// open and keeps tracking its body.
    pub fn interrupt(&mut self) {
        match self.state {
            FocusState::Focusing { zooming: true } => {
                self.state = FocusState::Focusing { zooming: false };
            }
            FocusState::Restoring => {
                self.state = FocusState::Idle;
            }
            _ => {}
        }
    }

    /// Step the camera closer along its forward axis (zoom button),
    /// gated by the minimum distance.
    pub fn nudge_closer(&mut self) {
        if self.camera.distance_to_target() > MIN_ZOOM_DISTANCE {
            let forward = self.camera.forward();
            self.camera.eye += forward * ZOOM_STEP;
        }
    }

    /// Step the camera farther along its forward axis (zoom button).
    pub fn nudge_farther(&mut self) {
        let forward = self.camera.forward();
        self.camera.eye -= forward * ZOOM_STEP;
    }

    /// Per-frame camera behavior. `focused_pos` is the focused body's
    /// current world position (ignored outside a focus session).
    pub fn tick(&mut self, focused_pos: Option<Vec3>) {
        match self.state {
            FocusState::Focusing { zooming } => {
                if let Some(pos) = focused_pos {
                    // Ride along rigidly with the body...
                    let shift = pos - self.last_target_pos;
                    self.camera.eye += shift;
                    self.last_target_pos = pos;
                    // ...while the look-at point eases onto it.
                    self.camera.target = lerp_vec3(self.camera.target, pos, TARGET_SMOOTHING);

                    if zooming {
                        let dist = (self.camera.eye - pos).length();
                        if dist > FOCUS_STANDOFF + FOCUS_STANDOFF_SLACK {
                            let dir = (self.camera.eye - pos).normalize_or_zero();
                            let ideal = pos + dir * FOCUS_STANDOFF;
                            self.camera.eye = lerp_vec3(self.camera.eye, ideal, CAMERA_SMOOTHING);
                        } else {
                            self.state = FocusState::Focusing { zooming: false };
                        }
                    }
                }
            }
            FocusState::Restoring => {
                self.camera.eye = lerp_vec3(self.camera.eye, self.saved_eye, CAMERA_SMOOTHING);
                self.camera.target = lerp_vec3(self.camera.target, self.saved_target, CAMERA_SMOOTHING);
                if (self.camera.eye - self.saved_eye).length() < RESTORE_EPS
                    && (self.camera.target - self.saved_target).length() < RESTORE_EPS
                {
                    self.state = FocusState::Idle;
                }
            }
            FocusState::Idle => {}
        }

        self.controls.update(&mut self.camera);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ViewportSession {
        let camera = OrbitCamera::new(
            Vec3::new(0.0, 20.0, 40.0),
            Vec3::ZERO,
            45f32.to_radians(),
            16.0 / 9.0,
        );
        ViewportSession::new(camera, Vec2::new(1280.0, 720.0))
    }

    #[test]
    fn begin_focus_snapshots_once() {
        let mut s = session();
        let before = (s.camera.eye, s.camera.target);

        s.begin_focus(EntityId(1), Vec3::new(11.0, 0.0, 0.0));
        assert_eq!(s.snapshot(), before);
        assert_eq!(s.state(), FocusState::Focusing { zooming: true });

        // Re-target: snapshot must survive untouched even though the
        // camera has moved since.
        for _ in 0..10 {
            s.tick(Some(Vec3::new(11.0, 0.0, 0.0)));
        }
        s.begin_focus(EntityId(2), Vec3::new(-14.0, 0.0, 0.0));
        assert_eq!(s.snapshot(), before);
        assert_eq!(s.focused(), Some(EntityId(2)));
    }

    #[test]
    fn begin_focus_targets_body_immediately() {
        let mut s = session();
        let pos = Vec3::new(11.0, 0.0, 0.0);
        s.begin_focus(EntityId(1), pos);
        assert_eq!(s.camera.target, pos);
    }

    #[test]
    fn refocus_during_restore_takes_a_fresh_snapshot() {
        let mut s = session();
        s.begin_focus(EntityId(1), Vec3::new(11.0, 0.0, 0.0));
        for _ in 0..30 {
            s.tick(Some(Vec3::new(11.0, 0.0, 0.0)));
        }
        s.clear_focus();
        s.tick(None);
        assert_eq!(s.state(), FocusState::Restoring);

        // Mid-restore click: the session reopens and saves the pose the
        // camera happens to be in right now.
        let mid_restore = (s.camera.eye, s.camera.target);
        s.begin_focus(EntityId(2), Vec3::new(-14.0, 0.0, 0.0));
        assert_eq!(s.snapshot().0, mid_restore.0);
        assert_eq!(s.state(), FocusState::Focusing { zooming: true });
    }

    #[test]
    fn clear_focus_outside_session_is_a_noop() {
        let mut s = session();
        s.clear_focus();
        assert_eq!(s.state(), FocusState::Idle);
    }

    #[test]
    fn zoom_glide_stops_at_standoff() {
        let mut s = session();
        let pos = Vec3::new(11.0, 0.0, 0.0);
        s.begin_focus(EntityId(1), pos);

        let mut ticks = 0;
        while s.state() == (FocusState::Focusing { zooming: true }) {
            s.tick(Some(pos));
            ticks += 1;
            assert!(ticks < 1000, "zoom never settled");
        }
        let dist = (s.camera.eye - pos).length();
        assert!(
            dist <= FOCUS_STANDOFF + FOCUS_STANDOFF_SLACK + 0.1,
            "dist = {dist}"
        );
        assert_eq!(s.state(), FocusState::Focusing { zooming: false });
    }

    #[test]
    fn restore_converges_monotonically_then_idles() {
        let mut s = session();
        let pos = Vec3::new(11.0, 0.0, 0.0);
        s.begin_focus(EntityId(1), pos);
        for _ in 0..120 {
            s.tick(Some(pos));
        }
        s.clear_focus();

        let (saved_eye, _) = s.snapshot();
        let mut prev = (s.camera.eye - saved_eye).length();
        let mut ticks = 0;
        while s.state() == FocusState::Restoring {
            s.tick(None);
            let dist = (s.camera.eye - saved_eye).length();
            assert!(dist < prev + 1e-4, "restore distance grew: {dist} > {prev}");
            prev = dist;
            ticks += 1;
            assert!(ticks < 2000, "restore never completed");
        }
        assert_eq!(s.state(), FocusState::Idle);
        assert!((s.camera.eye - saved_eye).length() < RESTORE_EPS);
    }

    #[test]
    fn interrupt_drops_zoom_but_keeps_the_session() {
        let mut s = session();
        s.begin_focus(EntityId(1), Vec3::new(11.0, 0.0, 0.0));
        s.interrupt();
        assert_eq!(s.state(), FocusState::Focusing { zooming: false });
        assert_eq!(s.focused(), Some(EntityId(1)));
    }

    #[test]
    fn interrupt_abandons_restore_in_place() {
        let mut s = session();
        s.begin_focus(EntityId(1), Vec3::new(11.0, 0.0, 0.0));
        for _ in 0..30 {
            s.tick(Some(Vec3::new(11.0, 0.0, 0.0)));
        }
        s.clear_focus();
        s.tick(None);
        let parked = s.camera.eye;
        s.interrupt();
        assert_eq!(s.state(), FocusState::Idle);
        s.tick(None);
        // No further restore pull; only settled controls ran.
        assert!((s.camera.eye - parked).length() < 1e-3);
    }

    #[test]
    fn focused_body_drags_the_camera_rigidly() {
        let mut s = session();
        let mut pos = Vec3::new(11.0, 0.0, 0.0);
        s.begin_focus(EntityId(1), pos);
        s.interrupt(); // zooming off, isolate the rigid follow
        let eye_before = s.camera.eye;
        pos += Vec3::new(0.0, 0.0, -2.5);
        s.tick(Some(pos));
        assert!((s.camera.eye - (eye_before + Vec3::new(0.0, 0.0, -2.5))).length() < 1e-4);
    }

    #[test]
    fn zoom_buttons_respect_the_distance_gate() {
        let mut s = session();
        let start = s.camera.eye;
        s.nudge_closer();
        assert!((s.camera.eye - start).length() > 1.0, "should have stepped");

        // Park the camera just inside the gate; the button must refuse.
        s.camera.eye = s.camera.target + Vec3::new(0.0, 0.0, MIN_ZOOM_DISTANCE - 1.0);
        let parked = s.camera.eye;
        s.nudge_closer();
        assert_eq!(s.camera.eye, parked);

        // Zooming out is never gated.
        s.nudge_farther();
        assert!((s.camera.eye - parked).length() > 1.0);
    }
}
