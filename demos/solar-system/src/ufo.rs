/// The occasional visitor. Each UFO cycles between dormant (hidden,
/// waiting out a cooldown) and active (crossing the system on a straight
/// line at fixed speed). Crossing the despawn bound hides it and schedules
/// the next visit.

use std::f32::consts::PI;

use glam::Vec3;
use orrery_engine::{
    Color3, EngineContext, Entity, EntityId, LocalTransform, MeshComponent, Rng, Scene,
    TransformGraph,
};

pub const UFO_COUNT: usize = 2;
/// Distance from the origin past which an active UFO despawns.
pub const DESPAWN_DISTANCE: f32 = 100.0;
/// Entry/exit ring radius.
pub const SPAWN_RADIUS: f32 = 90.0;
/// Flight speed, world units per second.
pub const FLIGHT_SPEED: f32 = 12.0;
/// Saucer body spin, radians per second.
pub const SPIN_RATE: f32 = 10.0;
/// Cooldown range between visits, seconds.
pub const COOLDOWN_MIN: f32 = 10.0;
pub const COOLDOWN_MAX: f32 = 30.0;
/// After a spawn, the next dormancy check is pushed this far out so a
/// single cooldown expiry can never double-spawn.
pub const SPAWN_LATCH: f32 = 100.0;
/// Stagger between the fleet's first visits.
const FIRST_SPAWN_BASE: f32 = 5.0;
const FIRST_SPAWN_STEP: f32 = 15.0;

const ENTRY_HEIGHT_HALF: f32 = 15.0;
const FORWARD_TILT: f32 = PI / 10.0;
const RUNNING_LIGHTS: usize = 8;
const LIGHT_RING_RADIUS: f32 = 0.6;

pub struct Ufo {
    /// Group pivot carrying the whole craft (never in the scene itself).
    root: EntityId,
    /// The saucer body, spun separately from the rest.
    body: EntityId,
    /// Every rendered part, for visibility toggling.
    parts: Vec<EntityId>,
    pub velocity: Vec3,
    pub active: bool,
    /// Simulation time of the next dormancy check.
    pub next_spawn: f32,
}

impl Ufo {
    pub fn position(&self, graph: &TransformGraph) -> Vec3 {
        graph.get_local(self.root).map(|l| l.offset).unwrap_or(Vec3::ZERO)
    }

    fn set_visible(&self, scene: &mut Scene, visible: bool) {
        for &part in &self.parts {
            if let Some(entity) = scene.get_mut(part) {
                entity.visible = visible;
            }
        }
    }
}

/// Build the dormant fleet: saucer body, glass dome and a ring of green
/// running lights per craft, all hidden until the first spawn.
pub fn spawn_fleet(ctx: &mut EngineContext) -> Vec<Ufo> {
    let mut fleet = Vec::with_capacity(UFO_COUNT);

    for i in 0..UFO_COUNT {
        let root = ctx.next_id();
        ctx.graph.register(root);

        let body = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(body)
                .with_tag("ufo-body")
                .with_scale(Vec3::new(1.0, 0.25, 1.0))
                .with_visible(false)
                .with_mesh(
                    MeshComponent::sphere(0.7, Color3::new(0.63, 0.63, 0.63)).with_shininess(96.0),
                ),
        );
        ctx.graph.register(body);
        ctx.graph.set_parent(body, Some(root));

        let dome = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(dome)
                .with_tag("ufo-dome")
                .with_visible(false)
                .with_mesh(
                    MeshComponent::sphere(0.35, Color3::new(0.53, 0.80, 1.0))
                        .with_shininess(128.0)
                        .with_emissive(0.4)
                        .with_alpha(0.8),
                ),
        );
        ctx.graph
            .register_with(dome, LocalTransform::new().with_offset(Vec3::new(0.0, 0.08, 0.0)));
        ctx.graph.set_parent(dome, Some(root));

        let mut parts = vec![body, dome];
        for n in 0..RUNNING_LIGHTS {
            let angle = n as f32 / RUNNING_LIGHTS as f32 * std::f32::consts::TAU;
            let light = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(light)
                    .with_tag("ufo-light")
                    .with_visible(false)
                    .with_mesh(
                        MeshComponent::sphere(0.05, Color3::new(0.0, 1.0, 0.0)).with_emissive(1.0),
                    ),
            );
            ctx.graph.register_with(
                light,
                LocalTransform::new().with_offset(Vec3::new(
                    angle.cos() * LIGHT_RING_RADIUS,
                    0.0,
                    angle.sin() * LIGHT_RING_RADIUS,
                )),
            );
            ctx.graph.set_parent(light, Some(root));
            parts.push(light);
        }

        fleet.push(Ufo {
            root,
            body,
            parts,
            velocity: Vec3::ZERO,
            active: false,
            next_spawn: FIRST_SPAWN_BASE + i as f32 * FIRST_SPAWN_STEP,
        });
    }

    fleet
}

/// Place a UFO on the entry ring and point it at a spot roughly across
/// the system.
fn launch(ufo: &mut Ufo, scene: &mut Scene, graph: &mut TransformGraph, rng: &mut Rng) {
    let angle = rng.next_f32() * std::f32::consts::TAU;
    let start = Vec3::new(
        angle.cos() * SPAWN_RADIUS,
        rng.next_signed(ENTRY_HEIGHT_HALF),
        angle.sin() * SPAWN_RADIUS,
    );

    let exit_angle = angle + PI + rng.next_signed(0.5);
    let target = Vec3::new(
        exit_angle.cos() * SPAWN_RADIUS,
        rng.next_signed(ENTRY_HEIGHT_HALF),
        exit_angle.sin() * SPAWN_RADIUS,
    );

    let dir = (target - start).normalize_or_zero();
    ufo.velocity = dir * FLIGHT_SPEED;

    // Nose toward the exit point, with a slight forward tilt.
    let yaw = dir.x.atan2(dir.z);
    let pitch = -dir.y.asin() + FORWARD_TILT;
    if let Some(local) = graph.get_local_mut(ufo.root) {
        local.offset = start;
        local.rotation = Vec3::new(pitch, yaw, 0.0);
    }

    ufo.active = true;
    ufo.set_visible(scene, true);
}

/// Advance the fleet one frame. `now` is the monotonic clock in seconds.
pub fn update(
    fleet: &mut [Ufo],
    scene: &mut Scene,
    graph: &mut TransformGraph,
    rng: &mut Rng,
    now: f32,
    sim_dt: f32,
) {
    for ufo in fleet {
        if ufo.active {
            let mut out_of_bounds = false;
            if let Some(local) = graph.get_local_mut(ufo.root) {
                local.offset += ufo.velocity * sim_dt;
                out_of_bounds = local.offset.length() > DESPAWN_DISTANCE;
            }
            if let Some(local) = graph.get_local_mut(ufo.body) {
                local.rotation.y += SPIN_RATE * sim_dt;
            }

            if out_of_bounds {
                ufo.active = false;
                ufo.set_visible(scene, false);
                ufo.next_spawn = now + rng.next_range(COOLDOWN_MIN, COOLDOWN_MAX);
            }
        } else if now > ufo.next_spawn {
            launch(ufo, scene, graph, rng);
            ufo.next_spawn = now + SPAWN_LATCH;
        }
    }
}
