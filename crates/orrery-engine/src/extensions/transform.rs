// extensions/transform.rs
//
// Transform hierarchy extension — tracks parent-child relationships by EntityId.
// Completely decoupled from Entity/Scene internals.
//
// Nodes do not need a scene entity of their own: orbit pivots and other
// group nodes are pure transforms whose children are the rendered meshes.
//
// Usage:
//   let mut graph = TransformGraph::new();
//   graph.set_parent(child_id, Some(pivot_id));
//   graph.propagate(&mut scene);  // Writes world transforms into the scene

use std::collections::HashMap;

use glam::{EulerRot, Quat, Vec3};

use crate::api::types::EntityId;
use crate::core::scene::Scene;

/// Local transform data for entities in a hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct LocalTransform {
    /// Position relative to parent (or world if no parent).
    pub offset: Vec3,
    /// Rotation relative to parent, Euler XYZ radians.
    pub rotation: Vec3,
    /// Scale multiplier relative to parent.
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            offset: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl LocalTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }
}

/// Node in the transform hierarchy.
#[derive(Debug, Clone, Default)]
struct TransformNode {
    parent: Option<EntityId>,
    children: Vec<EntityId>,
    local: LocalTransform,
}

/// Transform hierarchy graph — manages parent-child relationships.
///
/// Exists separately from Scene to maintain clean architecture.
/// Games that need hierarchy create this alongside their Scene.
#[derive(Debug, Default)]
pub struct TransformGraph {
    nodes: HashMap<EntityId, TransformNode>,
    /// Entities with no parent (top-level).
    roots: Vec<EntityId>,
    /// Dirty flag — set when hierarchy changes, cleared after propagate.
    dirty: bool,
}

impl TransformGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity in the hierarchy with default local transform.
    pub fn register(&mut self, id: EntityId) {
        self.nodes.entry(id).or_default();
        if !self.roots.contains(&id) {
            self.roots.push(id);
        }
        self.dirty = true;
    }

    /// Register an entity with a specific local transform.
    pub fn register_with(&mut self, id: EntityId, local: LocalTransform) {
        let node = self.nodes.entry(id).or_default();
        node.local = local;
        if !self.roots.contains(&id) {
            self.roots.push(id);
        }
        self.dirty = true;
    }

    /// Set the parent of an entity. Pass `None` to make it a root.
    pub fn set_parent(&mut self, child: EntityId, parent: Option<EntityId>) {
        self.nodes.entry(child).or_default();
        if let Some(p) = parent {
            self.nodes.entry(p).or_default();
            if !self.roots.contains(&p) {
                self.roots.push(p);
            }
        }

        // Remove from old parent's children
        if let Some(old_parent) = self.nodes.get(&child).and_then(|n| n.parent) {
            if let Some(old_node) = self.nodes.get_mut(&old_parent) {
                old_node.children.retain(|&c| c != child);
            }
        }

        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = parent;
        }

        if let Some(p) = parent {
            if let Some(parent_node) = self.nodes.get_mut(&p) {
                if !parent_node.children.contains(&child) {
                    parent_node.children.push(child);
                }
            }
            self.roots.retain(|&r| r != child);
        } else if !self.roots.contains(&child) {
            self.roots.push(child);
        }

        self.dirty = true;
    }

    /// Set the local transform for an entity.
    pub fn set_local(&mut self, id: EntityId, local: LocalTransform) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.local = local;
            self.dirty = true;
        }
    }

    /// Get the local transform for an entity.
    pub fn get_local(&self, id: EntityId) -> Option<&LocalTransform> {
        self.nodes.get(&id).map(|n| &n.local)
    }

    /// Get the local transform mutably. Marks the graph dirty.
    pub fn get_local_mut(&mut self, id: EntityId) -> Option<&mut LocalTransform> {
        self.dirty = true;
        self.nodes.get_mut(&id).map(|n| &mut n.local)
    }

    /// Get the parent of an entity.
    pub fn get_parent(&self, id: EntityId) -> Option<EntityId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    /// Get the children of an entity.
    pub fn get_children(&self, id: EntityId) -> Option<&[EntityId]> {
        self.nodes.get(&id).map(|n| n.children.as_slice())
    }

    /// Propagate transforms from roots down through the hierarchy.
    /// Writes world pos/rotation/scale into scene entities that exist;
    /// pure group nodes contribute their transform without being written.
    pub fn propagate(&mut self, scene: &mut Scene) {
        if !self.dirty {
            return;
        }

        let roots: Vec<EntityId> = self.roots.clone();
        for root in roots {
            self.propagate_recursive(root, Vec3::ZERO, Vec3::ZERO, Vec3::ONE, scene);
        }

        self.dirty = false;
    }

    fn propagate_recursive(
        &self,
        id: EntityId,
        parent_pos: Vec3,
        parent_rot: Vec3,
        parent_scale: Vec3,
        scene: &mut Scene,
    ) {
        let Some(node) = self.nodes.get(&id) else { return };
        let local = &node.local;

        // Rotate the offset by the parent rotation, then scale and translate
        let parent_quat = Quat::from_euler(EulerRot::XYZ, parent_rot.x, parent_rot.y, parent_rot.z);
        let world_pos = parent_pos + parent_quat * (local.offset * parent_scale);
        let world_rot = parent_rot + local.rotation;
        let world_scale = parent_scale * local.scale;

        if let Some(entity) = scene.get_mut(id) {
            entity.pos = world_pos;
            entity.rotation = world_rot;
            entity.scale = world_scale;
        }

        let children: Vec<EntityId> = node.children.clone();
        for child in children {
            self.propagate_recursive(child, world_pos, world_rot, world_scale, scene);
        }
    }

    /// Check if the hierarchy has pending changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the hierarchy as needing propagation.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Number of entities in the hierarchy.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the hierarchy is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn parent_child_relationship() {
        let mut graph = TransformGraph::new();
        let parent = EntityId(1);
        let child = EntityId(2);

        graph.register(parent);
        graph.register(child);
        graph.set_parent(child, Some(parent));

        assert_eq!(graph.get_parent(child), Some(parent));
        assert_eq!(graph.get_children(parent), Some([child].as_slice()));
    }

    #[test]
    fn pivot_rotation_swings_child_offset() {
        // An orbit pivot rotated 90° about Y carries its child from +X to -Z.
        let mut graph = TransformGraph::new();
        let mut scene = Scene::new();

        let pivot = EntityId(1);
        let body = EntityId(2);
        scene.spawn(Entity::new(body));

        graph.register_with(pivot, LocalTransform::new().with_rotation(Vec3::new(0.0, FRAC_PI_2, 0.0)));
        graph.register_with(body, LocalTransform::new().with_offset(Vec3::new(10.0, 0.0, 0.0)));
        graph.set_parent(body, Some(pivot));

        graph.propagate(&mut scene);

        let world = scene.get(body).unwrap().pos;
        assert!(world.x.abs() < 1e-5, "x = {}", world.x);
        assert!((world.z + 10.0).abs() < 1e-5, "z = {}", world.z);
    }

    #[test]
    fn group_nodes_need_no_scene_entity() {
        let mut graph = TransformGraph::new();
        let mut scene = Scene::new();

        let pivot = EntityId(1);
        let body = EntityId(2);
        scene.spawn(Entity::new(body));

        graph.register_with(pivot, LocalTransform::new().with_offset(Vec3::new(5.0, 0.0, 0.0)));
        graph.register_with(body, LocalTransform::new().with_offset(Vec3::new(1.0, 0.0, 0.0)));
        graph.set_parent(body, Some(pivot));

        graph.propagate(&mut scene);

        assert_eq!(scene.get(body).unwrap().pos, Vec3::new(6.0, 0.0, 0.0));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn propagate_clears_dirty() {
        let mut graph = TransformGraph::new();
        let mut scene = Scene::new();
        graph.register(EntityId(1));
        assert!(graph.is_dirty());
        graph.propagate(&mut scene);
        assert!(!graph.is_dirty());
    }
}
