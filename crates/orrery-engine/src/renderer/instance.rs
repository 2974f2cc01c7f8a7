use bytemuck::{Pod, Zeroable};

/// Shape kind codes shared with the TypeScript renderer.
pub const SHAPE_SPHERE: f32 = 0.0;
pub const SHAPE_RING: f32 = 1.0;
pub const SHAPE_ROCK: f32 = 2.0;
pub const SHAPE_HALO: f32 = 3.0;

/// Surface kind codes shared with the TypeScript renderer.
pub const SURFACE_LIT: f32 = 0.0;
pub const SURFACE_PLASMA: f32 = 1.0;

/// Per-instance render data read by the TypeScript renderer.
/// Must match the TypeScript protocol: 20 floats = 80 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Euler rotation, radians (XYZ order).
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub scale_z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// One of the SHAPE_* codes.
    pub shape: f32,
    /// Shape parameters: sphere/rock/halo radius, or ring inner radius.
    pub param0: f32,
    /// Ring outer radius; unused otherwise.
    pub param1: f32,
    /// One of the SURFACE_* codes.
    pub surface: f32,
    pub shininess: f32,
    pub emissive: f32,
    pub alpha: f32,
    pub _pad: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 20;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all mesh instances for one frame.
/// Bounded: pushes beyond capacity are counted and dropped.
pub struct RenderBuffer {
    instances: Vec<RenderInstance>,
    capacity: usize,
    dropped: usize,
}

impl RenderBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.dropped = 0;
    }

    pub fn push(&mut self, instance: RenderInstance) {
        if self.instances.len() < self.capacity {
            self.instances.push(instance);
        } else {
            self.dropped += 1;
        }
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instances dropped this frame because the buffer was full.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Raw pointer to instance data for zero-copy reads from JS.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_instance_is_20_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), 80);
        assert_eq!(RenderInstance::FLOATS, 20);
    }

    #[test]
    fn push_beyond_capacity_drops() {
        let mut buf = RenderBuffer::with_capacity(2);
        buf.push(RenderInstance::default());
        buf.push(RenderInstance::default());
        buf.push(RenderInstance::default());
        assert_eq!(buf.instance_count(), 2);
        assert_eq!(buf.dropped(), 1);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
        assert_eq!(buf.dropped(), 0);
    }
}
