//! Integration tests running the built-in algorithms through the registry.

use std::sync::Arc;

use fieldvis::*;
use proptest::prelude::*;

fn registry() -> AlgorithmRegistry {
    init_logging();
    default_registry().expect("registry")
}

#[test]
fn test_default_registry() {
    let registry = registry();
    assert_eq!(registry.len(), 4);
    let names: Vec<&str> = registry.names().collect();
    assert_eq!(
        names,
        vec![
            "Aufgabe1/StructuredGrid",
            "Aufgabe1/UnstructuredGrid (House)",
            "Aufgabe2/Visualization",
            "Aufgabe3/Field",
        ]
    );

    let option_counts: Vec<(&str, usize)> = registry
        .iter()
        .map(|algorithm| (algorithm.name(), algorithm.options().len()))
        .collect();
    assert_eq!(
        option_counts,
        vec![
            ("Aufgabe1/StructuredGrid", 3),
            ("Aufgabe1/UnstructuredGrid (House)", 0),
            ("Aufgabe2/Visualization", 4),
            ("Aufgabe3/Field", 5),
        ]
    );
    assert!(registry.iter().all(|algorithm| !algorithm.outputs().is_empty()));

    let mut registry = registry;
    let err = registry
        .register(Box::new(StructuredGrid::new()))
        .unwrap_err();
    assert!(matches!(err, FieldvisError::AlgorithmExists(_)));
}

#[test]
fn test_unknown_algorithm() {
    let err = registry()
        .run("Aufgabe4/Missing", &Options::new(), &AbortFlag::new())
        .unwrap_err();
    assert!(matches!(err, FieldvisError::UnknownAlgorithm(name) if name == "Aufgabe4/Missing"));
}

#[test]
fn test_structured_grid_pipeline() {
    let registry = registry();
    let abort = AbortFlag::new();

    let built = registry
        .run(
            "Aufgabe1/StructuredGrid",
            &Options::new()
                .with("extent", Vec3::new(3.0, 2.0, 2.0))
                .with("spacing", Vec3::ONE),
            &abort,
        )
        .unwrap();
    let grid = built.data::<Grid>("grid").unwrap();
    assert_eq!(grid.num_points(), 12);
    assert_eq!(grid.num_cells(), 2);

    let drawn = registry
        .run("Aufgabe2/Visualization", &Options::new().with("grid", grid), &abort)
        .unwrap();
    let cells = drawn.graphics("gridCells").and_then(Drawable::as_primitive).unwrap();
    let lines = drawn.graphics("gridLines").and_then(Drawable::as_primitive).unwrap();

    assert_eq!(cells.kind(), PrimitiveKind::Triangles);
    assert_eq!(cells.num_primitives(), 24);
    assert_eq!(lines.kind(), PrimitiveKind::Lines);
    assert_eq!(lines.num_primitives(), 48);

    let bs = cells.bounding_sphere();
    assert!(bs.contains(Vec3::ZERO, 1e-4));
    assert!(bs.contains(Vec3::new(2.0, 1.0, 1.0), 1e-4));
}

#[test]
fn test_house_pipeline() {
    let registry = registry();
    let abort = AbortFlag::new();

    let built = registry
        .run("Aufgabe1/UnstructuredGrid (House)", &Options::new(), &abort)
        .unwrap();
    assert_eq!(built.get("grid").map(Output::kind), Some(OutputKind::Data));
    let grid = built.data::<Grid>("grid").unwrap();

    let drawn = registry
        .run("Aufgabe2/Visualization", &Options::new().with("grid", grid), &abort)
        .unwrap();
    assert_eq!(
        drawn.get("gridCells").map(Output::kind),
        Some(OutputKind::Graphics)
    );
    assert!(drawn.get("grid").is_none());
    let cells = drawn.graphics("gridCells").and_then(Drawable::as_primitive).unwrap();
    let lines = drawn.graphics("gridLines").and_then(Drawable::as_primitive).unwrap();
    assert_eq!(cells.num_primitives(), 18);
    assert_eq!(lines.num_primitives(), 38);
}

#[test]
fn test_visualization_without_grid() {
    let outputs = registry()
        .run("Aufgabe2/Visualization", &Options::new(), &AbortFlag::new())
        .unwrap();
    assert!(outputs.is_empty());
}

#[test]
fn test_field_glyphs_on_structured_grid() {
    let registry = registry();
    let abort = AbortFlag::new();

    let built = registry
        .run(
            "Aufgabe1/StructuredGrid",
            &Options::new()
                .with("extent", Vec3::new(5.0, 5.0, 5.0))
                .with("spacing", Vec3::splat(0.5)),
            &abort,
        )
        .unwrap();
    let grid = built.data::<Grid>("grid").unwrap();

    // Distance from the lattice center.
    let center = Vec3::splat(1.0);
    let field = ScalarField::from_fn(Arc::clone(&grid), |p| p.distance(center));
    let expected = field.values().iter().filter(|&&v| v > 1.0).count();

    let outputs = registry
        .run(
            "Aufgabe3/Field",
            &Options::new()
                .with("Field", Arc::new(field))
                .with("threshold", 1.0)
                .with("scaleSpheres", true),
            &abort,
        )
        .unwrap();
    let glyphs = outputs.graphics("field").and_then(Drawable::as_glyphs).unwrap();
    assert_eq!(glyphs.len(), expected);
    assert!(glyphs.spheres().iter().all(|s| s.radius > 0.25));

    let bs = glyphs.bounding_sphere();
    for s in glyphs.spheres() {
        assert!(bs.contains(s.center(), 1e-4));
    }
}

#[test]
fn test_options_from_json() {
    let registry = registry();
    let json = serde_json::json!({
        "extent": { "type": "point3", "value": [2.0, 2.0, 1.0] },
        "spacing": { "type": "point3", "value": [1.0, 1.0, 1.0] }
    });
    let overrides = Options::from_json(&json.to_string()).unwrap();

    let built = registry
        .run("Aufgabe1/StructuredGrid", &overrides, &AbortFlag::new())
        .unwrap();
    let grid = built.data::<Grid>("grid").unwrap();
    assert_eq!(grid.num_points(), 4);
    assert_eq!(grid.count_cells(CellType::Quad), 1);
}

#[test]
fn test_invalid_extent() {
    let err = registry()
        .run(
            "Aufgabe1/StructuredGrid",
            &Options::new().with("extent", Vec3::new(-1.0, 2.0, 2.0)),
            &AbortFlag::new(),
        )
        .unwrap_err();
    assert!(matches!(err, FieldvisError::InvalidOption { .. }));
}

#[test]
fn test_abort_stops_every_algorithm() {
    let registry = registry();
    let abort = AbortFlag::new();
    let grid = Arc::new(house().unwrap());
    let field = Arc::new(ScalarField::from_fn(Arc::clone(&grid), |p| p.y));

    abort.abort();
    for (name, overrides) in [
        (
            "Aufgabe1/StructuredGrid",
            Options::new().with("extent", Vec3::splat(2.0)),
        ),
        ("Aufgabe2/Visualization", Options::new().with("grid", grid)),
        ("Aufgabe3/Field", Options::new().with("Field", field)),
    ] {
        let result = registry.run(name, &overrides, &abort);
        assert!(matches!(result, Err(FieldvisError::Aborted)), "{name}");
    }

    abort.reset();
    assert!(registry
        .run("Aufgabe1/StructuredGrid", &Options::new(), &abort)
        .is_ok());
}

#[test]
fn test_custom_resource_path() {
    let registry = registry_with_resources("assets");
    let registry = registry.unwrap();
    let grid = Arc::new(house().unwrap());
    let outputs = registry
        .run(
            "Aufgabe2/Visualization",
            &Options::new().with("grid", grid),
            &AbortFlag::new(),
        )
        .unwrap();
    let cells = outputs.graphics("gridCells").and_then(Drawable::as_primitive).unwrap();
    assert!(cells.program().vertex_path().starts_with("assets"));
}

/// Triangles and lines one cell of the given type decomposes into.
fn primitive_counts(cell_type: CellType) -> (usize, usize) {
    match cell_type {
        CellType::Hexahedron => (12, 24),
        CellType::Quad => (2, 4),
        CellType::Triangle => (1, 3),
        _ => (0, 0),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_single_cell_through_registry(
        nx in 1u32..5,
        ny in 1u32..5,
        nz in 1u32..5,
        cell_index in -3i64..80,
    ) {
        let registry = registry();
        let abort = AbortFlag::new();
        let json = serde_json::json!({
            "extent": { "type": "point3", "value": [f64::from(nx), f64::from(ny), f64::from(nz)] },
            "spacing": { "type": "point3", "value": [1.0, 1.0, 1.0] },
        });
        let built = registry
            .run("Aufgabe1/StructuredGrid", &Options::from_json(&json.to_string()).unwrap(), &abort)
            .unwrap();
        let grid = built.data::<Grid>("grid").unwrap();
        prop_assert_eq!(grid.num_points(), (nx * ny * nz) as usize);

        let overrides = Options::new()
            .with("grid", Arc::clone(&grid))
            .with("singleCell", true)
            .with("cellIndex", cell_index);
        let drawn = registry.run("Aufgabe2/Visualization", &overrides, &abort).unwrap();
        let cells = drawn.graphics("gridCells").and_then(Drawable::as_primitive).unwrap();
        let lines = drawn.graphics("gridLines").and_then(Drawable::as_primitive).unwrap();

        let selected = usize::try_from(cell_index).ok().and_then(|i| grid.cell(i));
        let (triangles, segments) = selected.map_or((0, 0), |cell| primitive_counts(cell.cell_type()));
        prop_assert_eq!(cells.num_primitives(), triangles);
        prop_assert_eq!(lines.num_primitives(), segments);
    }
}
