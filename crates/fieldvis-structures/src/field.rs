//! Fields sampled at the points of a grid.

use std::any::Any;
use std::sync::Arc;

use fieldvis_core::{downcast_dataset, Dataset, FieldvisError, Result};
use glam::Vec3;

use crate::grid::Grid;

/// A field with one value per point of its grid domain.
pub trait Field: Dataset {
    /// Returns the grid the field is defined on.
    fn domain(&self) -> &Arc<Grid>;

    /// Evaluates the field at point `index` of the domain.
    ///
    /// Vector fields evaluate to their magnitude. Returns `None` past the end
    /// of the domain.
    fn evaluate(&self, index: usize) -> Option<f32>;
}

/// A scalar value per grid point.
#[derive(Debug, Clone)]
pub struct ScalarField {
    domain: Arc<Grid>,
    values: Vec<f32>,
}

impl ScalarField {
    /// Creates a scalar field; `values` must have one entry per domain point.
    pub fn new(domain: Arc<Grid>, values: Vec<f32>) -> Result<Self> {
        if values.len() != domain.num_points() {
            return Err(FieldvisError::SizeMismatch {
                expected: domain.num_points(),
                actual: values.len(),
            });
        }
        Ok(Self { domain, values })
    }

    /// Samples `f` at every domain point.
    pub fn from_fn(domain: Arc<Grid>, f: impl Fn(Vec3) -> f32) -> Self {
        let values = domain.points().iter().map(|&p| f(p)).collect();
        Self { domain, values }
    }

    /// Returns the values.
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

impl Field for ScalarField {
    fn domain(&self) -> &Arc<Grid> {
        &self.domain
    }

    fn evaluate(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }
}

impl Dataset for ScalarField {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }

    fn type_name(&self) -> &'static str {
        "ScalarField"
    }
}

/// A vector value per grid point.
#[derive(Debug, Clone)]
pub struct VectorField {
    domain: Arc<Grid>,
    values: Vec<Vec3>,
}

impl VectorField {
    /// Creates a vector field; `values` must have one entry per domain point.
    pub fn new(domain: Arc<Grid>, values: Vec<Vec3>) -> Result<Self> {
        if values.len() != domain.num_points() {
            return Err(FieldvisError::SizeMismatch {
                expected: domain.num_points(),
                actual: values.len(),
            });
        }
        Ok(Self { domain, values })
    }

    /// Samples `f` at every domain point.
    pub fn from_fn(domain: Arc<Grid>, f: impl Fn(Vec3) -> Vec3) -> Self {
        let values = domain.points().iter().map(|&p| f(p)).collect();
        Self { domain, values }
    }

    /// Returns the values.
    pub fn values(&self) -> &[Vec3] {
        &self.values
    }
}

impl Field for VectorField {
    fn domain(&self) -> &Arc<Grid> {
        &self.domain
    }

    fn evaluate(&self, index: usize) -> Option<f32> {
        self.values.get(index).map(|v| v.length())
    }
}

impl Dataset for VectorField {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }

    fn type_name(&self) -> &'static str {
        "VectorField"
    }
}

/// Downcasts a dataset to one of the field types.
pub fn as_field(dataset: Arc<dyn Dataset>) -> Option<Arc<dyn Field>> {
    if dataset.as_any().is::<ScalarField>() {
        return downcast_dataset::<ScalarField>(dataset).map(|f| f as Arc<dyn Field>);
    }
    downcast_dataset::<VectorField>(dataset).map(|f| f as Arc<dyn Field>)
}
