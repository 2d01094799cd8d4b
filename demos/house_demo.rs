//! Builds the house mesh and prints the drawables produced for it.
//!
//! Run with `RUST_LOG=debug cargo run --example house_demo` to see the
//! algorithm log output.

use fieldvis::*;

fn main() -> Result<()> {
    init_logging();

    let registry = default_registry()?;
    let abort = AbortFlag::new();

    for algorithm in registry.iter() {
        println!(
            "{}: {} ({} options)",
            algorithm.name(),
            algorithm.description(),
            algorithm.options().len()
        );
    }

    let built = registry.run("Aufgabe1/UnstructuredGrid (House)", &Options::new(), &abort)?;
    let Some(grid) = built.data::<Grid>("grid") else {
        return Ok(());
    };
    println!(
        "house: {} points, {} cells",
        grid.num_points(),
        grid.num_cells()
    );

    for single in [None, Some(7)] {
        let mut overrides = Options::new().with("grid", grid.clone());
        if let Some(index) = single {
            overrides.set("singleCell", true).set("cellIndex", index);
        }
        let drawn = registry.run("Aufgabe2/Visualization", &overrides, &abort)?;

        let label = single.map_or_else(|| "all cells".to_string(), |i| format!("cell {i}"));
        for name in ["gridCells", "gridLines"] {
            if let Some(primitive) = drawn.graphics(name).and_then(Drawable::as_primitive) {
                println!(
                    "{label} {name}: {:?} x {}, program {}",
                    primitive.kind(),
                    primitive.num_primitives(),
                    primitive.program().vertex_path().display()
                );
            }
        }
    }

    Ok(())
}
