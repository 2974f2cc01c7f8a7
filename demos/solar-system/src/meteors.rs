/// Drifting meteorite field. Rocks tumble through the system on straight
/// lines; anything that strays past the recycle bound is thrown back into
/// a box near the center with a fresh velocity. The field never shrinks
/// or grows — it is an endless recycling, not a bounded simulation.

use glam::Vec3;
use orrery_engine::{Color3, EngineContext, Entity, EntityId, MeshComponent, Rng, Scene};

pub const METEOR_COUNT: usize = 100;
/// Distance from the origin past which a meteorite is recycled.
pub const RECYCLE_DISTANCE: f32 = 150.0;
/// Half-extents of the initial scatter box.
pub const SCATTER_HALF: Vec3 = Vec3::new(100.0, 50.0, 100.0);
/// Half-extents of the respawn box (tighter than the scatter box).
pub const RESPAWN_HALF: Vec3 = Vec3::new(50.0, 25.0, 50.0);
/// Per-axis velocity half-ranges, world units per second.
pub const VELOCITY_HALF: Vec3 = Vec3::new(5.0, 1.0, 5.0);

const ROCK_RADIUS: f32 = 0.2;
const ROCK_COLOR: (f32, f32, f32) = (0.53, 0.53, 0.53);

pub struct Meteor {
    pub id: EntityId,
    pub velocity: Vec3,
}

fn random_box(rng: &mut Rng, half: Vec3) -> Vec3 {
    Vec3::new(
        rng.next_signed(half.x),
        rng.next_signed(half.y),
        rng.next_signed(half.z),
    )
}

fn random_velocity(rng: &mut Rng) -> Vec3 {
    random_box(rng, VELOCITY_HALF)
}

/// Scatter the full meteorite field across the system.
pub fn spawn_field(ctx: &mut EngineContext) -> Vec<Meteor> {
    let mut meteors = Vec::with_capacity(METEOR_COUNT);
    for _ in 0..METEOR_COUNT {
        let id = ctx.next_id();
        let pos = random_box(&mut ctx.rng, SCATTER_HALF);
        let spin = Vec3::new(
            ctx.rng.next_f32() * std::f32::consts::PI,
            ctx.rng.next_f32() * std::f32::consts::PI,
            0.0,
        );
        let size = ctx.rng.next_range(0.5, 2.0);

        ctx.scene.spawn(
            Entity::new(id)
                .with_tag("meteor")
                .with_pos(pos)
                .with_rotation(spin)
                .with_scale(Vec3::splat(size))
                .with_mesh(
                    MeshComponent::rock(ROCK_RADIUS, Color3::new(ROCK_COLOR.0, ROCK_COLOR.1, ROCK_COLOR.2))
                        .with_shininess(8.0),
                ),
        );
        meteors.push(Meteor { id, velocity: random_velocity(&mut ctx.rng) });
    }
    meteors
}

/// Integrate one frame of meteorite motion.
pub fn update(meteors: &mut [Meteor], scene: &mut Scene, rng: &mut Rng, sim_dt: f32) {
    for meteor in meteors {
        let Some(entity) = scene.get_mut(meteor.id) else { continue };

        entity.pos += meteor.velocity * sim_dt;
        entity.rotation.x += sim_dt;
        entity.rotation.y += sim_dt * 0.5;

        if entity.pos.length() > RECYCLE_DISTANCE {
            entity.pos = random_box(rng, RESPAWN_HALF);
            meteor.velocity = random_velocity(rng);
        }
    }
}
