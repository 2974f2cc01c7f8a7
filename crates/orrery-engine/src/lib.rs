pub mod api;
pub mod core;
pub mod components;
pub mod extensions;
pub mod input;
pub mod interaction;
pub mod renderer;
pub mod systems;
pub mod bridge;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig};
pub use api::types::{EntityId, UiEvent};
pub use components::entity::Entity;
pub use components::mesh::{Color3, MeshComponent, Shape, Surface};
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::time::SimClock;
pub use extensions::{lerp, lerp_vec3, LocalTransform, TransformGraph};
pub use input::queue::{InputEvent, InputQueue, MouseButton};
pub use interaction::focus::{FocusState, ViewportSession};
pub use interaction::picking::{HitRegistry, Ray};
pub use interaction::pointer::{PointerAction, PointerTracker, CLICK_SLOP_PX};
pub use renderer::backdrop::{BackdropBuffers, LineVertex, PointVertex};
pub use renderer::camera::{CameraUniform, OrbitCamera};
pub use renderer::controls::OrbitControls;
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use bridge::protocol::ProtocolLayout;
pub use systems::render::build_render_buffer;
