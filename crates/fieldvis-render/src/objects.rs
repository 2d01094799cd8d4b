//! Batched glyph rendering (spheres).

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

use crate::bounds::{compute_bounding_sphere_of_spheres, BoundingSphere};
use crate::drawable::Drawable;

/// Glyph shapes an [`ObjectRenderer`] can batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// A sphere given by center and radius.
    Sphere,
}

/// Per-instance sphere data, laid out for an instance buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SphereInstance {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
}

impl SphereInstance {
    /// Returns the center as a vector.
    pub fn center(&self) -> Vec3 {
        Vec3::from_array(self.center)
    }

    /// Returns the color as a vector.
    pub fn color(&self) -> Vec4 {
        Vec4::from_array(self.color)
    }
}

/// Collects glyphs and commits them into a single drawable.
#[derive(Debug, Default)]
pub struct ObjectRenderer {
    spheres: Vec<SphereInstance>,
}

impl ObjectRenderer {
    /// Creates an empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves capacity for `count` additional glyphs of the given type.
    pub fn reserve(&mut self, object_type: ObjectType, count: usize) {
        match object_type {
            ObjectType::Sphere => self.spheres.reserve(count),
        }
    }

    /// Adds a sphere glyph.
    pub fn add_sphere(&mut self, center: Vec3, radius: f32, color: Vec4) {
        self.spheres.push(SphereInstance {
            center: center.to_array(),
            radius,
            color: color.to_array(),
        });
    }

    /// Returns the number of glyphs collected so far.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Returns true if no glyphs have been added.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Finishes the batch.
    pub fn commit(self) -> Drawable {
        let bounds: Vec<(Vec3, f32)> = self
            .spheres
            .iter()
            .map(|s| (s.center(), s.radius))
            .collect();
        let bounding_sphere = compute_bounding_sphere_of_spheres(&bounds);
        log::debug!("committing {} sphere glyphs", self.spheres.len());
        Drawable::Glyphs(GlyphBatch {
            spheres: self.spheres,
            bounding_sphere,
        })
    }
}

/// A committed batch of sphere glyphs.
#[derive(Debug, Clone)]
pub struct GlyphBatch {
    spheres: Vec<SphereInstance>,
    bounding_sphere: BoundingSphere,
}

impl GlyphBatch {
    /// Returns the sphere instances.
    pub fn spheres(&self) -> &[SphereInstance] {
        &self.spheres
    }

    /// Returns the number of spheres.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Returns true if the batch holds no spheres.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Returns the bounding sphere of all glyphs.
    pub fn bounding_sphere(&self) -> BoundingSphere {
        self.bounding_sphere
    }

    /// Returns the instance data as bytes, ready for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.spheres)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_batches_spheres() {
        let mut renderer = ObjectRenderer::new();
        renderer.reserve(ObjectType::Sphere, 2);
        renderer.add_sphere(Vec3::ZERO, 0.5, Vec4::ONE);
        renderer.add_sphere(Vec3::new(2.0, 0.0, 0.0), 0.25, Vec4::ONE);
        assert_eq!(renderer.len(), 2);

        let Drawable::Glyphs(batch) = renderer.commit() else {
            panic!("expected glyph batch");
        };
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.spheres()[1].radius, 0.25);
        assert_eq!(batch.as_bytes().len(), 2 * std::mem::size_of::<SphereInstance>());

        let bs = batch.bounding_sphere();
        assert!(bs.contains(Vec3::new(-0.5, 0.0, 0.0), 1e-5));
        assert!(bs.contains(Vec3::new(2.25, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn test_empty_commit() {
        let Drawable::Glyphs(batch) = ObjectRenderer::new().commit() else {
            panic!("expected glyph batch");
        };
        assert!(batch.is_empty());
        assert_eq!(batch.bounding_sphere(), BoundingSphere::default());
    }
}
