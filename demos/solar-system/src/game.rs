/// The solar system itself: one-time scene population plus the per-frame
/// update driving orbits, meteorites, UFOs and the focus camera.

use glam::{Vec2, Vec3};
use orrery_engine::{
    Color3, EngineContext, Entity, EntityId, Game, GameConfig, InputEvent, InputQueue,
    LocalTransform, MeshComponent, MouseButton, PointerAction, PointerTracker, Surface, UiEvent,
};

use crate::bodies::{self, PLANETS, PLANET_COUNT};
use crate::meteors::{self, Meteor};
use crate::scenery;
use crate::ufo::{self, Ufo};

/// Simulation slows to 5% while a body holds the camera's attention.
pub const FOCUS_TIME_SCALE: f32 = 0.05;
/// Angular speeds are tuned per 60 Hz frame; deltas are scaled to match.
pub const FRAME_NORMALIZE: f32 = 60.0;

// ── Custom event kinds from the overlay UI ───────────────────────────

pub const CUSTOM_CLOSE_INFO: u32 = 1;
pub const CUSTOM_ZOOM_IN: u32 = 2;
pub const CUSTOM_ZOOM_OUT: u32 = 3;

// ── Event kinds to the overlay UI ────────────────────────────────────

/// a = catalog index of the focused body.
pub const EVENT_SHOW_INFO: f32 = 1.0;
pub const EVENT_HIDE_INFO: f32 = 2.0;

pub struct SolarSystem {
    tracker: PointerTracker,

    // Entity IDs
    sun_id: Option<EntityId>,
    planet_ids: [Option<EntityId>; PLANET_COUNT],
    orbit_pivots: [Option<EntityId>; PLANET_COUNT],
    moon_id: Option<EntityId>,
    moon_pivot: Option<EntityId>,

    meteors: Vec<Meteor>,
    ufos: Vec<Ufo>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            tracker: PointerTracker::new(),
            sun_id: None,
            planet_ids: [None; PLANET_COUNT],
            orbit_pivots: [None; PLANET_COUNT],
            moon_id: None,
            moon_pivot: None,
            meteors: Vec::new(),
            ufos: Vec::new(),
        }
    }

    /// Map a picked entity to its catalog index for the info panel.
    fn catalog_index(&self, id: EntityId) -> Option<usize> {
        if self.sun_id == Some(id) {
            return Some(bodies::SUN_INDEX);
        }
        if self.moon_id == Some(id) {
            return Some(bodies::MOON_INDEX);
        }
        self.planet_ids.iter().position(|&p| p == Some(id))
    }

    /// A confirmed click: ray-pick the scene and either open/re-target a
    /// focus session or treat it as a "close info" on empty space.
    fn handle_click(&mut self, ctx: &mut EngineContext, at: Vec2) {
        let ray = ctx.session.camera.screen_ray(at, ctx.session.viewport);
        match ctx.hits.pick(&ray, &ctx.scene) {
            Some(body) => {
                let Some(index) = self.catalog_index(body) else { return };
                let Some(pos) = ctx.scene.get(body).map(|e| e.pos) else { return };
                ctx.session.begin_focus(body, pos);
                ctx.emit_event(UiEvent::new(EVENT_SHOW_INFO, index as f32, 0.0, 0.0));
            }
            None => self.close_info(ctx),
        }
    }

    fn close_info(&mut self, ctx: &mut EngineContext) {
        ctx.session.clear_focus();
        ctx.emit_event(UiEvent::new(EVENT_HIDE_INFO, 0.0, 0.0, 0.0));
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        // ── Sun ──────────────────────────────────────────────────────
        let sun = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(sun).with_tag("sun").with_mesh(
                MeshComponent::sphere(
                    bodies::SUN_RADIUS,
                    Color3::new(bodies::SUN_COLOR.0, bodies::SUN_COLOR.1, bodies::SUN_COLOR.2),
                )
                .with_surface(Surface::Plasma)
                .with_emissive(2.0),
            ),
        );
        let sun_hit = ctx.next_id();
        ctx.hits.register(sun_hit, sun, bodies::SUN_RADIUS * bodies::SUN_HIT_FACTOR);
        self.sun_id = Some(sun);

        let halo = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(halo).with_tag("sun-halo").with_mesh(
                MeshComponent::halo(
                    bodies::SUN_HALO_RADIUS,
                    Color3::new(
                        bodies::SUN_HALO_COLOR.0,
                        bodies::SUN_HALO_COLOR.1,
                        bodies::SUN_HALO_COLOR.2,
                    ),
                )
                .with_alpha(bodies::SUN_HALO_ALPHA)
                .with_emissive(1.0),
            ),
        );

        // ── Planets, each under an orbit pivot ───────────────────────
        for (i, spec) in PLANETS.iter().enumerate() {
            let pivot = ctx.next_id();
            ctx.graph.register(pivot);

            let planet = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(planet).with_tag(spec.name).with_mesh(
                    MeshComponent::sphere(
                        spec.radius,
                        Color3::new(spec.primary.0, spec.primary.1, spec.primary.2),
                    )
                    .with_shininess(16.0),
                ),
            );
            ctx.graph.register_with(
                planet,
                LocalTransform::new()
                    .with_offset(Vec3::new(spec.orbit, 0.0, 0.0))
                    .with_rotation(Vec3::new(0.0, 0.0, bodies::AXIAL_TILT)),
            );
            ctx.graph.set_parent(planet, Some(pivot));

            let hit = ctx.next_id();
            ctx.hits.register(hit, planet, spec.radius * bodies::PLANET_HIT_FACTOR);

            self.orbit_pivots[i] = Some(pivot);
            self.planet_ids[i] = Some(planet);

            if i == bodies::SATURN {
                let ring = ctx.next_id();
                ctx.scene.spawn(
                    Entity::new(ring).with_tag("saturn-ring").with_mesh(
                        MeshComponent::ring(
                            bodies::RING_INNER,
                            bodies::RING_OUTER,
                            Color3::new(
                                bodies::RING_COLOR.0,
                                bodies::RING_COLOR.1,
                                bodies::RING_COLOR.2,
                            ),
                        )
                        .with_shininess(16.0),
                    ),
                );
                ctx.graph.register_with(
                    ring,
                    LocalTransform::new().with_rotation(Vec3::new(bodies::RING_TILT, 0.0, 0.0)),
                );
                ctx.graph.set_parent(ring, Some(planet));
            }
        }

        // ── Moon, on a pivot re-anchored to Earth every tick ─────────
        let moon_pivot = ctx.next_id();
        ctx.graph.register(moon_pivot);

        let moon = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(moon).with_tag("moon").with_mesh(
                MeshComponent::sphere(
                    bodies::MOON_RADIUS,
                    Color3::new(bodies::MOON_COLOR.0, bodies::MOON_COLOR.1, bodies::MOON_COLOR.2),
                )
                .with_shininess(16.0),
            ),
        );
        ctx.graph.register_with(
            moon,
            LocalTransform::new().with_offset(Vec3::new(bodies::MOON_OFFSET, 0.0, 0.0)),
        );
        ctx.graph.set_parent(moon, Some(moon_pivot));

        let moon_hit = ctx.next_id();
        ctx.hits.register(moon_hit, moon, bodies::MOON_RADIUS * bodies::PLANET_HIT_FACTOR);
        self.moon_pivot = Some(moon_pivot);
        self.moon_id = Some(moon);

        // ── Static backdrop ──────────────────────────────────────────
        scenery::build_starfield(&mut ctx.rng, &mut ctx.backdrop);
        scenery::build_galaxy(&mut ctx.rng, &mut ctx.backdrop);
        scenery::build_constellations(&mut ctx.rng, &mut ctx.backdrop);
        scenery::build_orbit_rings(&mut ctx.backdrop);

        // ── Movers ───────────────────────────────────────────────────
        self.meteors = meteors::spawn_field(ctx);
        self.ufos = ufo::spawn_fleet(ctx);

        log::info!(
            "scene populated: {} entities, {} pick volumes",
            ctx.scene.len(),
            ctx.hits.len()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32) {
        // Interaction first — handlers run strictly before this frame's
        // motion, never concurrently with it.
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y, button } => {
                    self.tracker.on_down(Vec2::new(x, y), button);
                    ctx.session.interrupt();
                }
                InputEvent::PointerMove { x, y } => {
                    if let Some(PointerAction::Drag { button, delta }) =
                        self.tracker.on_move(Vec2::new(x, y))
                    {
                        match button {
                            MouseButton::Left => ctx.session.controls.pan(delta),
                            MouseButton::Right => ctx.session.controls.rotate(delta),
                            MouseButton::Middle => ctx.session.controls.dolly(delta.y * 4.0),
                        }
                    }
                }
                InputEvent::PointerUp { x, y, .. } => {
                    if let Some(PointerAction::Click { at }) = self.tracker.on_up(Vec2::new(x, y)) {
                        self.handle_click(ctx, at);
                    }
                }
                InputEvent::Wheel { delta } => ctx.session.controls.dolly(delta),
                InputEvent::Resize { width, height } => ctx.session.set_viewport(width, height),
                InputEvent::Custom { kind, .. } => match kind {
                    CUSTOM_CLOSE_INFO => self.close_info(ctx),
                    CUSTOM_ZOOM_IN => ctx.session.nudge_closer(),
                    CUSTOM_ZOOM_OUT => ctx.session.nudge_farther(),
                    _ => {}
                },
            }
        }

        // Slow motion while focused; the shader clock ignores it.
        let scale = if ctx.session.is_focused() { FOCUS_TIME_SCALE } else { 1.0 };
        ctx.clock.set_time_scale(scale);
        let sim_dt = ctx.clock.advance(dt);
        let step = sim_dt * FRAME_NORMALIZE;

        // Orbital motion.
        for (i, pivot) in self.orbit_pivots.iter().enumerate() {
            let Some(p) = *pivot else { continue };
            if let Some(local) = ctx.graph.get_local_mut(p) {
                local.rotation.y += PLANETS[i].speed * step;
            }
        }
        ctx.graph.propagate(&mut ctx.scene);

        // Re-anchor the moon pivot onto Earth's fresh world position,
        // spin it, and reassert the moon's fixed local offset.
        if let (Some(pivot), Some(earth)) = (self.moon_pivot, self.planet_ids[bodies::EARTH]) {
            let earth_pos = ctx.scene.get(earth).map(|e| e.pos).unwrap_or(Vec3::ZERO);
            if let Some(local) = ctx.graph.get_local_mut(pivot) {
                local.offset = earth_pos;
                local.rotation.y += bodies::MOON_SPIN * step;
            }
            if let Some(moon) = self.moon_id {
                if let Some(local) = ctx.graph.get_local_mut(moon) {
                    local.offset = Vec3::new(bodies::MOON_OFFSET, 0.0, 0.0);
                }
            }
        }

        meteors::update(&mut self.meteors, &mut ctx.scene, &mut ctx.rng, sim_dt);
        ufo::update(
            &mut self.ufos,
            &mut ctx.scene,
            &mut ctx.graph,
            &mut ctx.rng,
            ctx.clock.now(),
            sim_dt,
        );

        ctx.graph.propagate(&mut ctx.scene);

        // Camera focus / restore / control damping.
        let focused_pos = ctx
            .session
            .focused()
            .and_then(|id| ctx.scene.get(id))
            .map(|e| e.pos);
        ctx.session.tick(focused_pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::interaction::focus::{FOCUS_STANDOFF, FOCUS_STANDOFF_SLACK, RESTORE_EPS};
    use orrery_engine::FocusState;

    const DT: f32 = 1.0 / 60.0;

    fn boot() -> (SolarSystem, EngineContext) {
        let mut game = SolarSystem::new();
        let mut ctx = EngineContext::new(&game.config());
        game.init(&mut ctx);
        ctx.graph.propagate(&mut ctx.scene);
        (game, ctx)
    }

    fn run_frames(game: &mut SolarSystem, ctx: &mut EngineContext, n: usize) {
        let input = InputQueue::new();
        for _ in 0..n {
            game.update(ctx, &input, DT);
        }
    }

    fn click(game: &mut SolarSystem, ctx: &mut EngineContext, at: Vec2) {
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: at.x, y: at.y, button: MouseButton::Left });
        input.push(InputEvent::PointerUp { x: at.x, y: at.y, button: MouseButton::Left });
        game.update(ctx, &input, DT);
    }

    /// A screen pixel whose pick ray hits nothing, for empty-space clicks.
    fn empty_pixel(ctx: &EngineContext) -> Vec2 {
        let candidates = [
            Vec2::new(3.0, 3.0),
            Vec2::new(ctx.session.viewport.x - 3.0, 3.0),
            Vec2::new(3.0, ctx.session.viewport.y - 3.0),
            Vec2::new(ctx.session.viewport.x / 2.0, 3.0),
        ];
        for at in candidates {
            let ray = ctx.session.camera.screen_ray(at, ctx.session.viewport);
            if ctx.hits.pick(&ray, &ctx.scene).is_none() {
                return at;
            }
        }
        panic!("no empty pixel found");
    }

    fn screen_pos_of(ctx: &EngineContext, id: EntityId) -> Vec2 {
        let pos = ctx.scene.get(id).unwrap().pos;
        ctx.session
            .camera
            .world_to_screen(pos, ctx.session.viewport)
            .expect("body should be on screen")
    }

    #[test]
    fn orbit_angles_accumulate_scaled_deltas() {
        let (mut game, mut ctx) = boot();
        let frames = 10;
        run_frames(&mut game, &mut ctx, frames);
        for i in 0..PLANET_COUNT {
            let angle = ctx
                .graph
                .get_local(game.orbit_pivots[i].unwrap())
                .unwrap()
                .rotation
                .y;
            let expected = PLANETS[i].speed * DT * FRAME_NORMALIZE * frames as f32;
            assert!(
                (angle - expected).abs() < 1e-4,
                "{}: angle {angle}, expected {expected}",
                PLANETS[i].name
            );
        }
    }

    #[test]
    fn moon_rides_at_fixed_offset_from_earth() {
        let (mut game, mut ctx) = boot();
        run_frames(&mut game, &mut ctx, 30);
        let earth = ctx.scene.get(game.planet_ids[bodies::EARTH].unwrap()).unwrap().pos;
        let moon = ctx.scene.get(game.moon_id.unwrap()).unwrap().pos;
        assert!(
            ((moon - earth).length() - bodies::MOON_OFFSET).abs() < 1e-3,
            "moon drifted: {}",
            (moon - earth).length()
        );
    }

    #[test]
    fn clicking_earth_opens_a_focus_session() {
        let (mut game, mut ctx) = boot();
        let earth = game.planet_ids[bodies::EARTH].unwrap();
        let at = screen_pos_of(&ctx, earth);

        click(&mut game, &mut ctx, at);

        assert!(ctx.session.is_focused());
        assert_eq!(ctx.session.focused(), Some(earth));
        assert!(
            ctx.events
                .iter()
                .any(|e| e.kind == EVENT_SHOW_INFO && e.a == bodies::EARTH as f32),
            "missing show-info event"
        );
    }

    #[test]
    fn clicking_the_sun_uses_its_synthetic_catalog_entry() {
        let (mut game, mut ctx) = boot();
        let at = screen_pos_of(&ctx, game.sun_id.unwrap());
        click(&mut game, &mut ctx, at);
        assert_eq!(ctx.session.focused(), game.sun_id);
        assert!(ctx
            .events
            .iter()
            .any(|e| e.kind == EVENT_SHOW_INFO && e.a == bodies::SUN_INDEX as f32));
    }

    #[test]
    fn camera_settles_at_the_standoff_distance() {
        let (mut game, mut ctx) = boot();
        let earth = game.planet_ids[bodies::EARTH].unwrap();
        let at = screen_pos_of(&ctx, earth);
        click(&mut game, &mut ctx, at);

        run_frames(&mut game, &mut ctx, 600);

        let earth_pos = ctx.scene.get(earth).unwrap().pos;
        let dist = (ctx.session.camera.eye - earth_pos).length();
        assert!(
            dist <= FOCUS_STANDOFF + FOCUS_STANDOFF_SLACK + 0.5,
            "camera still {dist} away"
        );
        assert_eq!(ctx.session.state(), FocusState::Focusing { zooming: false });
    }

    #[test]
    fn empty_click_restores_the_saved_pose() {
        let (mut game, mut ctx) = boot();
        let eye_before = ctx.session.camera.eye;
        let earth = game.planet_ids[bodies::EARTH].unwrap();

        let at = screen_pos_of(&ctx, earth);
        click(&mut game, &mut ctx, at);
        run_frames(&mut game, &mut ctx, 120);

        let at = empty_pixel(&ctx);
        click(&mut game, &mut ctx, at);
        assert_eq!(ctx.session.state(), FocusState::Restoring);
        assert!(ctx.events.iter().any(|e| e.kind == EVENT_HIDE_INFO));

        run_frames(&mut game, &mut ctx, 600);
        assert_eq!(ctx.session.state(), FocusState::Idle);
        assert!(
            (ctx.session.camera.eye - eye_before).length() < RESTORE_EPS + 0.1,
            "eye did not return: {:?}",
            ctx.session.camera.eye
        );
    }

    #[test]
    fn focus_slows_the_clock_and_release_restores_it() {
        let (mut game, mut ctx) = boot();
        let earth = game.planet_ids[bodies::EARTH].unwrap();
        let at = screen_pos_of(&ctx, earth);
        click(&mut game, &mut ctx, at);
        assert_eq!(ctx.clock.time_scale(), FOCUS_TIME_SCALE);

        let mut input = InputQueue::new();
        input.push(InputEvent::Custom { kind: CUSTOM_CLOSE_INFO, a: 0.0, b: 0.0, c: 0.0 });
        game.update(&mut ctx, &input, DT);
        assert_eq!(ctx.clock.time_scale(), 1.0);
        assert!(ctx.events.iter().any(|e| e.kind == EVENT_HIDE_INFO));
    }

    #[test]
    fn retargeting_keeps_the_original_snapshot() {
        let (mut game, mut ctx) = boot();
        let earth = game.planet_ids[bodies::EARTH].unwrap();
        let at = screen_pos_of(&ctx, earth);
        click(&mut game, &mut ctx, at);
        let snapshot = ctx.session.snapshot();

        run_frames(&mut game, &mut ctx, 60);
        let sun_at = screen_pos_of(&ctx, game.sun_id.unwrap());
        click(&mut game, &mut ctx, sun_at);

        assert_eq!(ctx.session.focused(), game.sun_id);
        assert_eq!(ctx.session.snapshot(), snapshot);
    }
}
