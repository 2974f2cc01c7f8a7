use crate::components::entity::Entity;
use crate::components::mesh::{Shape, Surface};
use crate::renderer::instance::{
    RenderBuffer, RenderInstance, SHAPE_HALO, SHAPE_RING, SHAPE_ROCK, SHAPE_SPHERE, SURFACE_LIT,
    SURFACE_PLASMA,
};

/// Build the render buffer from the scene.
/// Invisible entities and pure pivots (no mesh) are skipped.
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();

    for entity in entities {
        if !entity.visible {
            continue;
        }
        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };

        let (shape, param0, param1) = match mesh.shape {
            Shape::Sphere { radius } => (SHAPE_SPHERE, radius, 0.0),
            Shape::Ring { inner, outer } => (SHAPE_RING, inner, outer),
            Shape::Rock { radius } => (SHAPE_ROCK, radius, 0.0),
            Shape::Halo { radius } => (SHAPE_HALO, radius, 0.0),
        };
        let (surface, shininess) = match mesh.surface {
            Surface::Lit { shininess } => (SURFACE_LIT, shininess),
            Surface::Plasma => (SURFACE_PLASMA, 0.0),
        };

        buffer.push(RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            rot_x: entity.rotation.x,
            rot_y: entity.rotation.y,
            rot_z: entity.rotation.z,
            scale_x: entity.scale.x,
            scale_y: entity.scale.y,
            scale_z: entity.scale.z,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            shape,
            param0,
            param1,
            surface,
            shininess,
            emissive: mesh.emissive,
            alpha: mesh.alpha,
            _pad: 0.0,
        });
    }

    if buffer.dropped() > 0 {
        log::warn!("render buffer full: {} instances dropped", buffer.dropped());
    }
}
