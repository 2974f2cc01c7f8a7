use glam::{Vec2, Vec3};

use crate::api::types::{EntityId, UiEvent};
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::core::time::SimClock;
use crate::extensions::transform::TransformGraph;
use crate::input::queue::InputQueue;
use crate::interaction::focus::ViewportSession;
use crate::interaction::picking::HitRegistry;
use crate::renderer::backdrop::BackdropBuffers;
use crate::renderer::camera::OrbitCamera;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Maximum number of render instances (default: 256).
    pub max_instances: usize,
    /// Maximum number of UI events per frame (default: 32).
    pub max_events: usize,
    /// Capacity of the static backdrop point buffer (default: 16384).
    pub max_points: usize,
    /// Capacity of the static backdrop line buffer, in vertices
    /// (default: 8192).
    pub max_line_vertices: usize,
    /// Vertical field of view in degrees (default: 45).
    pub fov_y_deg: f32,
    pub z_near: f32,
    pub z_far: f32,
    /// Initial camera position.
    pub eye: Vec3,
    /// Initial viewport size in pixels; a Resize event overrides it.
    pub viewport: Vec2,
    /// Seed for the deterministic scene RNG.
    pub rng_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_instances: 256,
            max_events: 32,
            max_points: 16384,
            max_line_vertices: 8192,
            fov_y_deg: 45.0,
            z_near: 0.1,
            z_far: 1000.0,
            eye: Vec3::new(0.0, 20.0, 40.0),
            viewport: Vec2::new(1280.0, 720.0),
            rng_seed: 42,
        }
    }
}

/// The core contract every visualization must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the scene: spawn entities, register hit volumes, fill the
    /// backdrop buffers. Called once.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The per-frame update, given the wall-clock delta in seconds.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub graph: TransformGraph,
    pub hits: HitRegistry,
    pub session: ViewportSession,
    pub clock: SimClock,
    pub rng: Rng,
    pub backdrop: BackdropBuffers,
    pub events: Vec<UiEvent>,
    max_events: usize,
    next_id: u32,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        let mut camera = OrbitCamera::new(
            config.eye,
            Vec3::ZERO,
            config.fov_y_deg.to_radians(),
            config.viewport.x / config.viewport.y,
        );
        camera.near = config.z_near;
        camera.far = config.z_far;

        Self {
            scene: Scene::new(),
            graph: TransformGraph::new(),
            hits: HitRegistry::new(),
            session: ViewportSession::new(camera, config.viewport),
            clock: SimClock::new(),
            rng: Rng::new(config.rng_seed),
            backdrop: BackdropBuffers::with_capacity(config.max_points, config.max_line_vertices),
            events: Vec::new(),
            max_events: config.max_events,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a UI event to be forwarded to the DOM overlay.
    pub fn emit_event(&mut self, event: UiEvent) {
        if self.events.len() < self.max_events {
            self.events.push(event);
        } else {
            log::warn!("UI event queue full, dropping event kind {}", event.kind);
        }
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}
