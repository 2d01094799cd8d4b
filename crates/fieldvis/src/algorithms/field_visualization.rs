//! Sphere glyphs at field samples above a threshold.

use fieldvis_core::{AbortFlag, FieldvisError, OptionSchema, Options, Result};
use fieldvis_render::{ObjectRenderer, ObjectType};
use fieldvis_structures::as_field;
use glam::Vec4;

use super::grid_visualization::DEFAULT_COLOR;
use crate::algorithm::{Algorithm, OutputDecl, Outputs};

/// Places a sphere at every grid point whose field value exceeds a threshold.
#[derive(Debug, Default)]
pub struct FieldVisualization;

impl FieldVisualization {
    /// Creates the algorithm.
    pub fn new() -> Self {
        Self
    }
}

impl Algorithm for FieldVisualization {
    fn name(&self) -> &'static str {
        "Aufgabe3/Field"
    }

    fn description(&self) -> &'static str {
        "Show sphere glyphs where a field exceeds a threshold."
    }

    fn options(&self) -> OptionSchema {
        OptionSchema::new()
            .add_dataset("Field", "A scalar or vector field on a grid")
            .add("threshold", "Values at or below this are not drawn", 0.0)
            .add("radius", "Sphere radius", 0.25)
            .add("scaleSpheres", "Scale each sphere's radius by its value", false)
            .add("color", "The color of the spheres", DEFAULT_COLOR)
    }

    fn outputs(&self) -> &'static [OutputDecl] {
        const OUTPUTS: &[OutputDecl] = &[OutputDecl::graphics("field")];
        OUTPUTS
    }

    fn execute(&self, options: &Options, abort: &AbortFlag) -> Result<Outputs> {
        let Some(dataset) = options.dataset_any("Field")? else {
            log::debug!("Input Field not set or supported.");
            return Ok(Outputs::new());
        };
        let actual = dataset.type_name();
        let field = as_field(dataset).ok_or_else(|| FieldvisError::OptionType {
            name: "Field".to_string(),
            expected: "field",
            actual,
        })?;

        let threshold: f64 = options.get("threshold")?;
        let radius: f64 = options.get("radius")?;
        let scale_spheres: bool = options.get("scaleSpheres")?;
        let color: Vec4 = options.get("color")?;

        let points = field.domain().points();
        let mut renderer = ObjectRenderer::new();
        renderer.reserve(ObjectType::Sphere, points.len());

        for (i, &p) in points.iter().enumerate() {
            abort.check()?;
            let Some(value) = field.evaluate(i) else {
                continue;
            };
            if f64::from(value) > threshold {
                let r = if scale_spheres {
                    f64::from(value) * radius
                } else {
                    radius
                };
                renderer.add_sphere(p, r as f32, color);
            }
        }

        let mut outputs = Outputs::new();
        outputs.set_graphics("field", renderer.commit());
        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldvis_render::GlyphBatch;
    use fieldvis_structures::{Grid, ScalarField, VectorField};
    use glam::{UVec3, Vec3};
    use std::sync::Arc;

    fn domain() -> Arc<Grid> {
        Arc::new(Grid::uniform(UVec3::new(4, 1, 1), Vec3::ZERO, Vec3::X).unwrap())
    }

    fn run(overrides: &Options) -> Result<Outputs> {
        let algorithm = FieldVisualization::new();
        let options = Options::resolve(&algorithm.options(), overrides);
        algorithm.execute(&options, &AbortFlag::new())
    }

    fn glyphs(outputs: &Outputs) -> &GlyphBatch {
        outputs.graphics("field").and_then(|d| d.as_glyphs()).unwrap()
    }

    #[test]
    fn test_missing_field_produces_nothing() {
        assert!(run(&Options::new()).unwrap().is_empty());
    }

    #[test]
    fn test_threshold_is_strict() {
        let field = ScalarField::new(domain(), vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        let outputs = run(&Options::new()
            .with("Field", Arc::new(field))
            .with("threshold", 1.0))
        .unwrap();

        let batch = glyphs(&outputs);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.spheres()[0].center(), Vec3::new(2.0, 0.0, 0.0));
        assert!(batch.spheres().iter().all(|s| s.radius == 0.25));
    }

    #[test]
    fn test_scaled_spheres() {
        let field = ScalarField::new(domain(), vec![0.0, 1.0, 2.0, 4.0]).unwrap();
        let outputs = run(&Options::new()
            .with("Field", Arc::new(field))
            .with("radius", 0.5)
            .with("scaleSpheres", true))
        .unwrap();

        let radii: Vec<f32> = glyphs(&outputs).spheres().iter().map(|s| s.radius).collect();
        assert_eq!(radii, vec![0.5, 1.0, 2.0]);
        let bs = glyphs(&outputs).bounding_sphere();
        assert!(bs.contains(Vec3::new(5.0, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn test_vector_field_uses_magnitude() {
        let field = VectorField::from_fn(domain(), |p| Vec3::new(0.0, p.x, 0.0));
        let outputs = run(&Options::new()
            .with("Field", Arc::new(field))
            .with("threshold", 1.5))
        .unwrap();
        assert_eq!(glyphs(&outputs).len(), 2);
    }

    #[test]
    fn test_rejects_non_field_input() {
        let err = run(&Options::new().with("Field", domain())).unwrap_err();
        assert!(matches!(err, FieldvisError::OptionType { actual: "Grid", .. }));
    }

    #[test]
    fn test_abort_produces_no_output() {
        let algorithm = FieldVisualization::new();
        let field = ScalarField::new(domain(), vec![1.0; 4]).unwrap();
        let options = Options::resolve(
            &algorithm.options(),
            &Options::new().with("Field", Arc::new(field)),
        );
        let abort = AbortFlag::new();
        abort.abort();
        assert!(matches!(
            algorithm.execute(&options, &abort),
            Err(FieldvisError::Aborted)
        ));
    }
}
