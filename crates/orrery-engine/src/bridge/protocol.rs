/// Wire format shared with the TypeScript renderer.
/// Must stay in sync with `protocol.ts`.
///
/// All sections are flat f32 arrays read straight out of wasm memory:
/// ```text
/// [Instances: max_instances × 20 floats]   rebuilt every frame
/// [Points:    max_points × 8 floats]       static, uploaded once
/// [Lines:     max_line_vertices × 8 floats] static, uploaded once
/// [Events:    max_events × 4 floats]       rebuilt every frame
/// [Camera:    20 floats]                   rebuilt every frame
/// ```

use crate::api::game::GameConfig;

/// Floats per render instance (wire format — never changes).
pub const INSTANCE_FLOATS: usize = 20;

/// Floats per backdrop point: x, y, z, r, g, b, size, pad.
pub const POINT_FLOATS: usize = 8;

/// Floats per backdrop line vertex: x, y, z, r, g, b, alpha, pad.
pub const LINE_FLOATS: usize = 8;

/// Floats per UI event: kind, a, b, c.
pub const EVENT_FLOATS: usize = 4;

/// Floats in the camera uniform: view-proj matrix + eye.
pub const CAMERA_FLOATS: usize = 20;

/// Runtime-computed capacities handed to TypeScript at startup so it can
/// size its GPU buffers before the first frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_points: usize,
    pub max_line_vertices: usize,
    pub max_events: usize,

    /// Size of the instance section in floats.
    pub instance_data_floats: usize,
    /// Size of the point section in floats.
    pub point_data_floats: usize,
    /// Size of the line section in floats.
    pub line_data_floats: usize,
    /// Size of the event section in floats.
    pub event_data_floats: usize,
}

impl ProtocolLayout {
    pub fn new(
        max_instances: usize,
        max_points: usize,
        max_line_vertices: usize,
        max_events: usize,
    ) -> Self {
        Self {
            max_instances,
            max_points,
            max_line_vertices,
            max_events,
            instance_data_floats: max_instances * INSTANCE_FLOATS,
            point_data_floats: max_points * POINT_FLOATS,
            line_data_floats: max_line_vertices * LINE_FLOATS,
            event_data_floats: max_events * EVENT_FLOATS,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_instances,
            config.max_points,
            config.max_line_vertices,
            config.max_events,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_sizes_add_up() {
        let layout = ProtocolLayout::new(256, 16384, 8192, 32);
        assert_eq!(layout.instance_data_floats, 256 * 20);
        assert_eq!(layout.point_data_floats, 16384 * 8);
        assert_eq!(layout.line_data_floats, 8192 * 8);
        assert_eq!(layout.event_data_floats, 32 * 4);
    }

    #[test]
    fn from_config_matches_config() {
        let config = GameConfig::default();
        let layout = ProtocolLayout::from_config(&config);
        assert_eq!(layout.max_instances, config.max_instances);
        assert_eq!(layout.max_events, config.max_events);
    }
}
