//! Dataset trait for data handed between algorithms.
//!
//! A [`Dataset`] is an immutable piece of data (a grid, a field) that one
//! algorithm produces and another consumes through its options. Datasets are
//! shared as `Arc<dyn Dataset>` and downcast to their concrete type on use.

use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

/// An immutable dataset that can be passed through option bags.
pub trait Dataset: Any + Debug + Send + Sync {
    /// Returns a reference to self as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Converts the shared handle into an `Any` handle for downcasting.
    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;

    /// Returns the type name of this dataset (e.g., "`Grid`", "`ScalarField`").
    fn type_name(&self) -> &'static str;
}

/// Downcasts a shared dataset handle to a concrete type.
///
/// Returns `None` if the dataset is of a different type.
pub fn downcast_dataset<T: Dataset>(dataset: Arc<dyn Dataset>) -> Option<Arc<T>> {
    dataset.into_any_arc().downcast::<T>().ok()
}
