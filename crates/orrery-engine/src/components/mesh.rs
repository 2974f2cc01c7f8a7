/// RGB color in linear space.
#[derive(Debug, Clone, Copy)]
pub struct Color3 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color3 {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color3 {
    fn default() -> Self {
        Self { r: 0.7, g: 0.7, b: 0.7 }
    }
}

/// Renderable shape primitive. Parameters are in local units,
/// multiplied by the entity scale on the GPU side.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Sphere { radius: f32 },
    /// Flat annulus in the local XY plane.
    Ring { inner: f32, outer: f32 },
    /// Low-poly tumbling rock.
    Rock { radius: f32 },
    /// Camera-facing additive glow billboard.
    Halo { radius: f32 },
}

/// Surface treatment selected by the renderer.
#[derive(Debug, Clone, Copy)]
pub enum Surface {
    /// Standard lit material with a Phong specular exponent.
    Lit { shininess: f32 },
    /// Animated noise shader driven by the shader clock (the sun).
    Plasma,
}

/// Component for mesh-rendered entities.
#[derive(Debug, Clone, Copy)]
pub struct MeshComponent {
    pub shape: Shape,
    pub color: Color3,
    pub surface: Surface,
    /// HDR glow multiplier (0.0 = none).
    pub emissive: f32,
    /// Opacity (1.0 = opaque).
    pub alpha: f32,
}

impl MeshComponent {
    pub fn new(shape: Shape, color: Color3) -> Self {
        Self {
            shape,
            color,
            surface: Surface::Lit { shininess: 32.0 },
            emissive: 0.0,
            alpha: 1.0,
        }
    }

    pub fn sphere(radius: f32, color: Color3) -> Self {
        Self::new(Shape::Sphere { radius }, color)
    }

    pub fn ring(inner: f32, outer: f32, color: Color3) -> Self {
        Self::new(Shape::Ring { inner, outer }, color)
    }

    pub fn rock(radius: f32, color: Color3) -> Self {
        Self::new(Shape::Rock { radius }, color)
    }

    pub fn halo(radius: f32, color: Color3) -> Self {
        Self::new(Shape::Halo { radius }, color)
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.surface = Surface::Lit { shininess };
        self
    }

    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = surface;
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}
