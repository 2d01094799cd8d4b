//! Option bags passed to algorithms.
//!
//! Every algorithm declares an [`OptionSchema`] naming its options, their
//! descriptions, and default values. The caller builds an [`Options`] bag from
//! the schema, overrides what it needs, and hands it to `execute`.

use std::collections::BTreeMap;
use std::sync::Arc;

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::dataset::{downcast_dataset, Dataset};
use crate::error::{FieldvisError, Result};

/// A single typed option value.
///
/// Plain values serialize as `{"type": "float", "value": 0.25}`. Dataset
/// handles only exist at runtime and are never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum OptionValue {
    /// A boolean switch.
    Bool(bool),
    /// An integral value.
    Int(i64),
    /// A floating point value.
    Float(f64),
    /// A 3D point or vector.
    Point3(Vec3),
    /// An RGBA color.
    Color(Vec4),
    /// A dataset handle; `None` when no input is connected.
    #[serde(skip)]
    Dataset(Option<Arc<dyn Dataset>>),
}

impl OptionValue {
    /// Returns the name of the value's type, as used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Point3(_) => "point3",
            Self::Color(_) => "color",
            Self::Dataset(_) => "dataset",
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Vec3> for OptionValue {
    fn from(value: Vec3) -> Self {
        Self::Point3(value)
    }
}

impl From<Vec4> for OptionValue {
    fn from(value: Vec4) -> Self {
        Self::Color(value)
    }
}

impl<T: Dataset> From<Arc<T>> for OptionValue {
    fn from(value: Arc<T>) -> Self {
        Self::Dataset(Some(value as Arc<dyn Dataset>))
    }
}

/// Types that can be read out of an [`OptionValue`].
pub trait FromOptionValue: Sized {
    /// Name of the expected type, as used in error messages.
    const KIND: &'static str;

    /// Extracts the value, or `None` if the variant does not match.
    fn from_option_value(value: &OptionValue) -> Option<Self>;
}

impl FromOptionValue for bool {
    const KIND: &'static str = "bool";

    fn from_option_value(value: &OptionValue) -> Option<Self> {
        match value {
            OptionValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromOptionValue for i64 {
    const KIND: &'static str = "int";

    fn from_option_value(value: &OptionValue) -> Option<Self> {
        match value {
            OptionValue::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromOptionValue for f64 {
    const KIND: &'static str = "float";

    fn from_option_value(value: &OptionValue) -> Option<Self> {
        match value {
            OptionValue::Float(v) => Some(*v),
            // Integral literals are accepted where a float is expected
            OptionValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }
}

impl FromOptionValue for Vec3 {
    const KIND: &'static str = "point3";

    fn from_option_value(value: &OptionValue) -> Option<Self> {
        match value {
            OptionValue::Point3(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromOptionValue for Vec4 {
    const KIND: &'static str = "color";

    fn from_option_value(value: &OptionValue) -> Option<Self> {
        match value {
            OptionValue::Color(v) => Some(*v),
            // RGB colors get an opaque alpha
            OptionValue::Point3(v) => Some(v.extend(1.0)),
            _ => None,
        }
    }
}

/// Declaration of a single option.
#[derive(Debug, Clone)]
pub struct OptionDecl {
    /// Option name, unique within a schema.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Value used when the caller does not override the option.
    pub default: OptionValue,
}

/// The set of options an algorithm accepts.
#[derive(Debug, Clone, Default)]
pub struct OptionSchema {
    decls: Vec<OptionDecl>,
}

impl OptionSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an option with a default value.
    #[must_use]
    pub fn add(
        mut self,
        name: &'static str,
        description: &'static str,
        default: impl Into<OptionValue>,
    ) -> Self {
        self.decls.push(OptionDecl {
            name,
            description,
            default: default.into(),
        });
        self
    }

    /// Declares a dataset input, unset by default.
    #[must_use]
    pub fn add_dataset(mut self, name: &'static str, description: &'static str) -> Self {
        self.decls.push(OptionDecl {
            name,
            description,
            default: OptionValue::Dataset(None),
        });
        self
    }

    /// Looks up the declaration of an option.
    pub fn get(&self, name: &str) -> Option<&OptionDecl> {
        self.decls.iter().find(|d| d.name == name)
    }

    /// Returns whether the schema declares the given option.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns all declarations in declaration order.
    pub fn decls(&self) -> &[OptionDecl] {
        &self.decls
    }

    /// Returns the number of declared options.
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// Returns true if the schema declares no options.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

/// A named bag of option values.
#[derive(Debug, Clone, Default)]
pub struct Options {
    values: BTreeMap<String, OptionValue>,
}

impl Options {
    /// Creates an empty option bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an option bag holding the schema's defaults.
    pub fn from_schema(schema: &OptionSchema) -> Self {
        let values = schema
            .decls()
            .iter()
            .map(|d| (d.name.to_string(), d.default.clone()))
            .collect();
        Self { values }
    }

    /// Fills in schema defaults, then applies the overrides.
    ///
    /// Overrides the schema does not declare are kept but logged, since they
    /// usually indicate a misspelled option name.
    pub fn resolve(schema: &OptionSchema, overrides: &Options) -> Self {
        let mut resolved = Self::from_schema(schema);
        for (name, value) in &overrides.values {
            if !schema.contains(name) {
                log::warn!("option '{name}' is not declared by the algorithm");
            }
            resolved.values.insert(name.clone(), value.clone());
        }
        resolved
    }

    /// Parses plain option values from a JSON object.
    ///
    /// ```
    /// use fieldvis_core::Options;
    ///
    /// let options = Options::from_json(r#"{"radius": {"type": "float", "value": 0.5}}"#).unwrap();
    /// assert_eq!(options.get::<f64>("radius").unwrap(), 0.5);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let values: BTreeMap<String, OptionValue> = serde_json::from_str(json)?;
        Ok(Self { values })
    }

    /// Sets an option value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Builder-style variant of [`Options::set`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Returns the raw value of an option.
    pub fn value(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    /// Reads a typed option value.
    pub fn get<T: FromOptionValue>(&self, name: &str) -> Result<T> {
        let value = self
            .values
            .get(name)
            .ok_or_else(|| FieldvisError::OptionMissing(name.to_string()))?;
        T::from_option_value(value).ok_or_else(|| FieldvisError::OptionType {
            name: name.to_string(),
            expected: T::KIND,
            actual: value.kind_name(),
        })
    }

    /// Reads a dataset input without downcasting it.
    ///
    /// Returns `Ok(None)` when the input is not connected.
    pub fn dataset_any(&self, name: &str) -> Result<Option<Arc<dyn Dataset>>> {
        match self.values.get(name) {
            None => Err(FieldvisError::OptionMissing(name.to_string())),
            Some(OptionValue::Dataset(dataset)) => Ok(dataset.clone()),
            Some(other) => Err(FieldvisError::OptionType {
                name: name.to_string(),
                expected: "dataset",
                actual: other.kind_name(),
            }),
        }
    }

    /// Reads a dataset input.
    ///
    /// Returns `Ok(None)` when the input is not connected, and an error when
    /// it is connected to a dataset of a different type.
    pub fn dataset<T: Dataset>(&self, name: &str) -> Result<Option<Arc<T>>> {
        let Some(dataset) = self.dataset_any(name)? else {
            return Ok(None);
        };
        let actual = dataset.type_name();
        downcast_dataset::<T>(dataset)
            .map(Some)
            .ok_or_else(|| FieldvisError::OptionType {
                name: name.to_string(),
                expected: std::any::type_name::<T>(),
                actual,
            })
    }

    /// Returns the number of values in the bag.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the bag holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}
