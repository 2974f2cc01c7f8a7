use glam::Vec3;

use crate::api::types::EntityId;
use crate::core::scene::Scene;

/// A ray in world space. `dir` must be normalized.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Distance along the ray to the first intersection with a sphere,
    /// or None if the ray misses or the sphere is behind the origin.
    pub fn hit_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.dir);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_d = disc.sqrt();
        let near = -b - sqrt_d;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + sqrt_d;
        (far >= 0.0).then_some(far)
    }
}

/// An enlarged invisible pick sphere, centered on its owning entity.
#[derive(Debug, Clone, Copy)]
struct HitVolume {
    owner: EntityId,
    radius: f32,
}

/// Lookup table from hit-volume id to the owning entity.
///
/// Small clickable bodies register a volume a few times their visual
/// radius; picking resolves the nearest volume back to its owner through
/// this table. Volumes live for the whole session — they are never
/// destroyed independently of their owner.
#[derive(Debug, Default)]
pub struct HitRegistry {
    volumes: Vec<(EntityId, HitVolume)>,
}

impl HitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pick sphere owned by `owner`. `volume_id` is the
    /// proxy's own identity, distinct from the owner's.
    pub fn register(&mut self, volume_id: EntityId, owner: EntityId, radius: f32) {
        self.volumes.push((volume_id, HitVolume { owner, radius }));
    }

    /// Resolve a hit-volume id to its owning entity.
    pub fn owner_of(&self, volume_id: EntityId) -> Option<EntityId> {
        self.volumes
            .iter()
            .find(|(id, _)| *id == volume_id)
            .map(|(_, v)| v.owner)
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    /// Cast a ray against every registered volume (each centered on its
    /// owner's current world position), take the nearest intersection and
    /// map it back to the owning entity. Invisible owners are skipped.
    pub fn pick(&self, ray: &Ray, scene: &Scene) -> Option<EntityId> {
        let mut best: Option<(f32, EntityId)> = None;
        for (volume_id, volume) in &self.volumes {
            let Some(owner) = scene.get(volume.owner) else { continue };
            if !owner.visible {
                continue;
            }
            if let Some(t) = ray.hit_sphere(owner.pos, volume.radius) {
                if best.map_or(true, |(bt, _)| t < bt) {
                    best = Some((t, *volume_id));
                }
            }
        }
        best.and_then(|(_, volume_id)| self.owner_of(volume_id))
    }
}
