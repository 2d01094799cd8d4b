//! Drawables handed to the renderer.

use crate::bounds::BoundingSphere;
use crate::objects::GlyphBatch;
use crate::primitive::Primitive;

/// A renderer-ready graphics object.
#[derive(Debug, Clone)]
pub enum Drawable {
    /// An indexed triangle or line batch bound to a shader program.
    Primitive(Primitive),
    /// A batch of sphere glyphs.
    Glyphs(GlyphBatch),
}

impl Drawable {
    /// Returns the bounding sphere used for culling.
    pub fn bounding_sphere(&self) -> BoundingSphere {
        match self {
            Self::Primitive(p) => p.bounding_sphere(),
            Self::Glyphs(g) => g.bounding_sphere(),
        }
    }

    /// Returns the primitive, if this drawable is one.
    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            Self::Primitive(p) => Some(p),
            Self::Glyphs(_) => None,
        }
    }

    /// Returns the glyph batch, if this drawable is one.
    pub fn as_glyphs(&self) -> Option<&GlyphBatch> {
        match self {
            Self::Glyphs(g) => Some(g),
            Self::Primitive(_) => None,
        }
    }
}
