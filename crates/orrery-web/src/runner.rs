use orrery_engine::systems::render::build_render_buffer;
use orrery_engine::{
    CameraUniform, EngineContext, Game, GameConfig, InputEvent, InputQueue, ProtocolLayout,
    RenderBuffer,
};

/// Generic runner that wires up the engine loop.
///
/// Each concrete visualization creates a `thread_local!` GameRunner and
/// exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    camera_uniform: CameraUniform,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        let ctx = EngineContext::new(&config);
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);
        let camera_uniform = ctx.session.camera.uniform();

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            render_buffer,
            camera_uniform,
            config,
            layout,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        // Resolve initial world transforms before the first frame renders.
        self.ctx.graph.propagate(&mut self.ctx.scene);
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: update the game, rebuild render data.
    /// `dt` is the wall-clock delta in seconds since the previous frame.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            log::warn!("tick before init — ignoring frame");
            return;
        }

        self.ctx.clear_frame_data();
        self.game.update(&mut self.ctx, &self.input, dt);
        self.input.drain();

        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        self.camera_uniform = self.ctx.session.camera.uniform();
    }

    // ---- Pointer accessors for zero-copy reads from JS ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn points_ptr(&self) -> *const f32 {
        self.ctx.backdrop.points_ptr()
    }

    pub fn point_count(&self) -> u32 {
        self.ctx.backdrop.point_count()
    }

    pub fn lines_ptr(&self) -> *const f32 {
        self.ctx.backdrop.lines_ptr()
    }

    pub fn line_vertex_count(&self) -> u32 {
        self.ctx.backdrop.line_vertex_count()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera_uniform as *const CameraUniform as *const f32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    /// Time uniform for the animated sun surface.
    pub fn shader_time(&self) -> f32 {
        self.ctx.clock.shader_time()
    }

    // ---- Capacity accessors (read once by TypeScript at startup) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_points(&self) -> u32 {
        self.layout.max_points as u32
    }

    pub fn max_line_vertices(&self) -> u32 {
        self.layout.max_line_vertices as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn viewport_width(&self) -> f32 {
        self.ctx.session.viewport.x
    }

    pub fn viewport_height(&self) -> f32 {
        self.ctx.session.viewport.y
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
