use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// One backdrop point (star / galaxy particle): 8 floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct PointVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Point size in pixels.
    pub size: f32,
    pub _pad: f32,
}

impl PointVertex {
    pub const FLOATS: usize = 8;
}

/// One backdrop line vertex (orbit circles, constellation figures): 8 floats.
/// Lines are vertex pairs.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct LineVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
    pub _pad: f32,
}

impl LineVertex {
    pub const FLOATS: usize = 8;
}

/// Static backdrop geometry, built once during scene population and
/// uploaded to the GPU a single time: starfield, galaxy, constellations,
/// orbit circles. Bounded; overflow is counted and logged.
pub struct BackdropBuffers {
    points: Vec<PointVertex>,
    lines: Vec<LineVertex>,
    max_points: usize,
    max_line_vertices: usize,
    dropped_points: usize,
    dropped_lines: usize,
}

impl BackdropBuffers {
    pub fn with_capacity(max_points: usize, max_line_vertices: usize) -> Self {
        Self {
            points: Vec::with_capacity(max_points),
            lines: Vec::with_capacity(max_line_vertices),
            max_points,
            max_line_vertices,
            dropped_points: 0,
            dropped_lines: 0,
        }
    }

    pub fn push_point(&mut self, pos: Vec3, color: (f32, f32, f32), size: f32) {
        if self.points.len() >= self.max_points {
            self.dropped_points += 1;
            if self.dropped_points == 1 {
                log::warn!("backdrop point buffer full ({} max)", self.max_points);
            }
            return;
        }
        self.points.push(PointVertex {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color.0,
            g: color.1,
            b: color.2,
            size,
            _pad: 0.0,
        });
    }

    pub fn push_line(&mut self, a: Vec3, b: Vec3, color: (f32, f32, f32), alpha: f32) {
        if self.lines.len() + 2 > self.max_line_vertices {
            self.dropped_lines += 1;
            if self.dropped_lines == 1 {
                log::warn!("backdrop line buffer full ({} max)", self.max_line_vertices);
            }
            return;
        }
        for pos in [a, b] {
            self.lines.push(LineVertex {
                x: pos.x,
                y: pos.y,
                z: pos.z,
                r: color.0,
                g: color.1,
                b: color.2,
                alpha,
                _pad: 0.0,
            });
        }
    }

    pub fn point_count(&self) -> u32 {
        self.points.len() as u32
    }

    pub fn line_vertex_count(&self) -> u32 {
        self.lines.len() as u32
    }

    pub fn points_ptr(&self) -> *const f32 {
        self.points.as_ptr() as *const f32
    }

    pub fn lines_ptr(&self) -> *const f32 {
        self.lines.as_ptr() as *const f32
    }

    pub fn points(&self) -> &[PointVertex] {
        &self.points
    }

    pub fn lines(&self) -> &[LineVertex] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_are_8_floats() {
        assert_eq!(std::mem::size_of::<PointVertex>(), 32);
        assert_eq!(std::mem::size_of::<LineVertex>(), 32);
    }

    #[test]
    fn lines_are_vertex_pairs() {
        let mut buf = BackdropBuffers::with_capacity(16, 16);
        buf.push_line(Vec3::ZERO, Vec3::X, (1.0, 1.0, 1.0), 0.3);
        assert_eq!(buf.line_vertex_count(), 2);
        assert_eq!(buf.lines()[1].x, 1.0);
    }

    #[test]
    fn overflow_is_dropped_not_grown() {
        let mut buf = BackdropBuffers::with_capacity(1, 2);
        buf.push_point(Vec3::ZERO, (1.0, 1.0, 1.0), 1.0);
        buf.push_point(Vec3::ZERO, (1.0, 1.0, 1.0), 1.0);
        assert_eq!(buf.point_count(), 1);

        buf.push_line(Vec3::ZERO, Vec3::X, (1.0, 1.0, 1.0), 1.0);
        buf.push_line(Vec3::ZERO, Vec3::X, (1.0, 1.0, 1.0), 1.0);
        assert_eq!(buf.line_vertex_count(), 2);
    }
}
