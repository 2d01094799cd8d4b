//! Algorithm trait and algorithm outputs.
//!
//! An [`Algorithm`] declares the options it reads and the outputs it writes,
//! and produces [`Outputs`] from an [`Options`] bag when executed.

use std::collections::BTreeMap;
use std::sync::Arc;

use fieldvis_core::{downcast_dataset, AbortFlag, Dataset, OptionSchema, Options, Result};
use fieldvis_render::Drawable;

/// What kind of value an output slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    /// A dataset (grid, field) other algorithms can consume.
    Data,
    /// A drawable for the renderer.
    Graphics,
}

/// Declaration of an output slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputDecl {
    /// Slot name.
    pub name: &'static str,
    /// Kind of value written to the slot.
    pub kind: OutputKind,
}

impl OutputDecl {
    /// Declares a dataset output.
    pub const fn data(name: &'static str) -> Self {
        Self {
            name,
            kind: OutputKind::Data,
        }
    }

    /// Declares a graphics output.
    pub const fn graphics(name: &'static str) -> Self {
        Self {
            name,
            kind: OutputKind::Graphics,
        }
    }
}

/// A value written to an output slot.
#[derive(Debug, Clone)]
pub enum Output {
    /// A dataset handle.
    Data(Arc<dyn Dataset>),
    /// A drawable.
    Graphics(Drawable),
}

impl Output {
    /// Returns the kind of this output.
    pub fn kind(&self) -> OutputKind {
        match self {
            Self::Data(_) => OutputKind::Data,
            Self::Graphics(_) => OutputKind::Graphics,
        }
    }
}

/// Named results of one algorithm execution.
#[derive(Debug, Clone, Default)]
pub struct Outputs {
    values: BTreeMap<String, Output>,
}

impl Outputs {
    /// Creates an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a dataset to a slot.
    pub fn set_data(&mut self, name: impl Into<String>, dataset: Arc<dyn Dataset>) {
        self.values.insert(name.into(), Output::Data(dataset));
    }

    /// Writes a drawable to a slot.
    pub fn set_graphics(&mut self, name: impl Into<String>, drawable: Drawable) {
        self.values.insert(name.into(), Output::Graphics(drawable));
    }

    /// Returns the raw output in a slot.
    pub fn get(&self, name: &str) -> Option<&Output> {
        self.values.get(name)
    }

    /// Returns the dataset in a slot, downcast to `T`.
    pub fn data<T: Dataset>(&self, name: &str) -> Option<Arc<T>> {
        match self.values.get(name)? {
            Output::Data(dataset) => downcast_dataset::<T>(Arc::clone(dataset)),
            Output::Graphics(_) => None,
        }
    }

    /// Returns the drawable in a slot.
    pub fn graphics(&self, name: &str) -> Option<&Drawable> {
        match self.values.get(name)? {
            Output::Graphics(drawable) => Some(drawable),
            Output::Data(_) => None,
        }
    }

    /// Returns the number of written slots.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing was written.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over slot names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// A visualization algorithm.
///
/// Implementations are stateless between calls: every `execute` recomputes
/// its outputs from the options alone.
pub trait Algorithm: Send + Sync {
    /// Returns the unique name of this algorithm (e.g., "`Aufgabe2/Visualization`").
    fn name(&self) -> &'static str;

    /// Returns a one-line description.
    fn description(&self) -> &'static str;

    /// Returns the options this algorithm reads, with their defaults.
    fn options(&self) -> OptionSchema;

    /// Returns the output slots this algorithm may write.
    fn outputs(&self) -> &'static [OutputDecl];

    /// Runs the algorithm.
    ///
    /// `options` should hold every declared option; use [`Options::resolve`]
    /// to fill in defaults. Long-running loops stop with `Err(Aborted)` once
    /// `abort` is raised, in which case no outputs are produced.
    fn execute(&self, options: &Options, abort: &AbortFlag) -> Result<Outputs>;
}
