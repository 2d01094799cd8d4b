//! Samples a radial field on a uniform grid and prints the sphere glyphs.

use std::sync::Arc;

use fieldvis::*;

fn main() -> Result<()> {
    init_logging();

    let registry = default_registry()?;
    let abort = AbortFlag::new();

    let overrides = Options::new()
        .with("origin", Vec3::splat(-1.0))
        .with("extent", Vec3::splat(5.0))
        .with("spacing", Vec3::splat(0.5));
    let built = registry.run("Aufgabe1/StructuredGrid", &overrides, &abort)?;
    let Some(grid) = built.data::<Grid>("grid") else {
        return Ok(());
    };

    let field = ScalarField::from_fn(Arc::clone(&grid), |p| 1.5 - p.length());
    let overrides = Options::new()
        .with("Field", Arc::new(field))
        .with("threshold", 0.5)
        .with("radius", 0.2)
        .with("scaleSpheres", true)
        .with("color", Vec4::new(0.2, 0.4, 0.9, 1.0));
    let drawn = registry.run("Aufgabe3/Field", &overrides, &abort)?;

    if let Some(glyphs) = drawn.graphics("field").and_then(Drawable::as_glyphs) {
        let bs = glyphs.bounding_sphere();
        println!(
            "{} spheres on {} points, bounds {:?} r={:.3}",
            glyphs.len(),
            grid.num_points(),
            bs.center,
            bs.radius
        );
        for sphere in glyphs.spheres() {
            println!("  {:?} r={:.3}", sphere.center(), sphere.radius);
        }
    }

    Ok(())
}
