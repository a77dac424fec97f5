use std::{cell::RefCell, rc::Rc};

use crate::{MaterialColor, RgbColor};

/// A material shared between the meshes that use it and the loader that owns the default one.
///
/// Recoloring through one handle is visible through every other, the same way the renderer
/// sees it.
pub type SharedMaterial = Rc<RefCell<Material>>;

/// Floating point precision requested for a material's shaders.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderPrecision {
    /// Let the renderer decide, normally high precision.
    #[default]
    Default,
    /// Force medium precision, for drivers that misbehave with high precision floats.
    Medium,
}

/// Surface appearance of a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Name of the material in the source model, if it had one.
    pub name: Option<String>,
    /// Base color.
    pub color: MaterialColor,
    /// `true` if the color comes from per-vertex colors rather than [`Material::color`].
    pub vertex_colors: bool,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f32,
    /// Shader precision requested for this material.
    pub precision: ShaderPrecision,
}

impl Material {
    /// Creates an opaque material with a flat color.
    pub fn new(color: impl Into<MaterialColor>) -> Self {
        Self {
            name: None,
            color: color.into(),
            vertex_colors: false,
            opacity: 1.0,
            precision: ShaderPrecision::Default,
        }
    }

    /// Returns this material with per-vertex colors enabled or disabled.
    #[must_use]
    pub fn with_vertex_colors(mut self, vertex_colors: bool) -> Self {
        self.vertex_colors = vertex_colors;
        self
    }

    /// Returns this material with a name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns this material with the given shader precision.
    #[must_use]
    pub fn with_precision(mut self, precision: ShaderPrecision) -> Self {
        self.precision = precision;
        self
    }

    /// Returns `true` if the material is colored per vertex, in which case a flat replacement
    /// color would be ignored by the renderer.
    pub fn uses_vertex_colors(&self) -> bool {
        self.vertex_colors
    }

    /// Wraps the material so it can be shared between meshes.
    pub fn into_shared(self) -> SharedMaterial {
        Rc::new(RefCell::new(self))
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(MaterialColor::WHITE)
    }
}

impl From<RgbColor> for Material {
    fn from(color: RgbColor) -> Self {
        Self::new(color)
    }
}
