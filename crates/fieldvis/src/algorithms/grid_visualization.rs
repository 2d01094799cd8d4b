//! Solid and wireframe rendering of a grid's cells.

use fieldvis_core::{AbortFlag, OptionSchema, Options, Result};
use fieldvis_render::{
    compute_bounding_sphere, compute_normals, GraphicsSystem, PrimitiveConfig, PrimitiveKind,
    RenderOption,
};
use fieldvis_structures::{try_decompose, CellFilter, Grid};
use glam::Vec4;

use crate::algorithm::{Algorithm, OutputDecl, Outputs};

const SURFACE_VERTEX_SHADER: &str = "shader/surface/phong/singleColor/vertex.glsl";
const SURFACE_FRAGMENT_SHADER: &str = "shader/surface/phong/singleColor/fragment.glsl";
const LINE_VERTEX_SHADER: &str = "shader/line/noShading/singleColor/vertex.glsl";
const LINE_FRAGMENT_SHADER: &str = "shader/line/noShading/singleColor/fragment.glsl";

const LINE_WIDTH: i32 = 2;

/// Default color for cells and lines.
pub const DEFAULT_COLOR: Vec4 = Vec4::new(0.75, 0.75, 0.0, 1.0);

/// Draws the cells of an input grid as shaded triangles plus a wireframe.
#[derive(Debug, Default)]
pub struct GridVisualization {
    system: GraphicsSystem,
}

impl GridVisualization {
    /// Creates the algorithm, resolving shaders through `system`.
    pub fn new(system: GraphicsSystem) -> Self {
        Self { system }
    }
}

impl Algorithm for GridVisualization {
    fn name(&self) -> &'static str {
        "Aufgabe2/Visualization"
    }

    fn description(&self) -> &'static str {
        "Draw grid cells as shaded surfaces and wireframe lines."
    }

    fn options(&self) -> OptionSchema {
        OptionSchema::new()
            .add_dataset("grid", "The grid to draw")
            .add("color", "The color of the graphics", DEFAULT_COLOR)
            .add("singleCell", "Draw only the cell selected by cellIndex", false)
            .add("cellIndex", "Index of the cell drawn in single-cell mode", 0)
    }

    fn outputs(&self) -> &'static [OutputDecl] {
        const OUTPUTS: &[OutputDecl] = &[
            OutputDecl::graphics("gridCells"),
            OutputDecl::graphics("gridLines"),
        ];
        OUTPUTS
    }

    fn execute(&self, options: &Options, abort: &AbortFlag) -> Result<Outputs> {
        let Some(grid) = options.dataset::<Grid>("grid")? else {
            log::debug!("No grid");
            return Ok(Outputs::new());
        };
        let color: Vec4 = options.get("color")?;
        let filter = CellFilter::from_selection(options.get("singleCell")?, options.get("cellIndex")?);

        let buffers = try_decompose(&grid, filter, abort)?;
        let vertices = grid.points();
        let indices = buffers.triangle_indices();
        let line_vertices = buffers.line_vertices(vertices);
        log::debug!(
            "{} triangles, {} lines from {} cells",
            buffers.num_triangles(),
            buffers.num_lines(),
            grid.num_cells()
        );

        let bounding_sphere = compute_bounding_sphere(vertices);
        let normals = compute_normals(vertices, &indices);
        let system = &self.system;

        let cells = system.make_primitive(
            PrimitiveConfig::new(PrimitiveKind::Triangles)
                .vertex_buffer("position", system.make_buffer(vertices))
                .vertex_buffer("normal", system.make_buffer(&normals))
                .index_buffer(system.make_index_buffer(indices))
                .uniform("color", color)
                .render_option(RenderOption::Blend, true)
                .bounding_sphere(bounding_sphere),
            system.make_program_from_files(SURFACE_VERTEX_SHADER, SURFACE_FRAGMENT_SHADER)?,
        )?;

        let lines = system.make_primitive(
            PrimitiveConfig::new(PrimitiveKind::Lines)
                .vertex_buffer("in_vertex", system.make_buffer(&line_vertices))
                .uniform("u_color", color)
                .uniform("u_lineWidth", LINE_WIDTH)
                .bounding_sphere(bounding_sphere),
            system.make_program_from_files(LINE_VERTEX_SHADER, LINE_FRAGMENT_SHADER)?,
        )?;

        let mut outputs = Outputs::new();
        outputs.set_graphics("gridCells", cells);
        outputs.set_graphics("gridLines", lines);
        Ok(outputs)
    }
}
