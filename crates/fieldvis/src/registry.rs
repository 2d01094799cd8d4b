//! Registry for looking up algorithms by name.

use std::collections::BTreeMap;

use fieldvis_core::{AbortFlag, FieldvisError, Options, Result};

use crate::algorithm::{Algorithm, Outputs};

/// Registry for managing available algorithms.
///
/// The registry is an ordinary value; callers own it and decide which
/// algorithms it holds.
#[derive(Default)]
pub struct AlgorithmRegistry {
    /// Map from algorithm name -> algorithm
    algorithms: BTreeMap<String, Box<dyn Algorithm>>,
}

impl AlgorithmRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an algorithm.
    ///
    /// Returns an error if an algorithm with the same name already exists.
    pub fn register(&mut self, algorithm: Box<dyn Algorithm>) -> Result<()> {
        let name = algorithm.name().to_string();
        if self.algorithms.contains_key(&name) {
            return Err(FieldvisError::AlgorithmExists(name));
        }

        log::debug!("registered algorithm '{name}'");
        self.algorithms.insert(name, algorithm);
        Ok(())
    }

    /// Gets an algorithm by name.
    pub fn get(&self, name: &str) -> Option<&dyn Algorithm> {
        self.algorithms.get(name).map(|a| a.as_ref())
    }

    /// Checks if an algorithm with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.algorithms.contains_key(name)
    }

    /// Removes an algorithm by name.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Algorithm>> {
        self.algorithms.remove(name)
    }

    /// Removes all algorithms from the registry.
    pub fn clear(&mut self) {
        self.algorithms.clear();
    }

    /// Returns an iterator over all algorithms, in name order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Algorithm> {
        self.algorithms.values().map(|a| a.as_ref())
    }

    /// Returns the registered names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.algorithms.keys().map(String::as_str)
    }

    /// Returns the total number of registered algorithms.
    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }

    /// Executes an algorithm by name.
    ///
    /// `overrides` is merged over the algorithm's declared defaults. Outputs
    /// written to undeclared slots are logged.
    pub fn run(&self, name: &str, overrides: &Options, abort: &AbortFlag) -> Result<Outputs> {
        let algorithm = self
            .get(name)
            .ok_or_else(|| FieldvisError::UnknownAlgorithm(name.to_string()))?;

        let options = Options::resolve(&algorithm.options(), overrides);
        let outputs = algorithm.execute(&options, abort)?;

        for slot in outputs.names() {
            if !algorithm.outputs().iter().any(|d| d.name == slot) {
                log::warn!("algorithm '{name}' wrote undeclared output '{slot}'");
            }
        }
        log::info!("algorithm '{name}' produced {} outputs", outputs.len());
        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::OutputDecl;
    use fieldvis_core::OptionSchema;

    struct Noop(&'static str);

    impl Algorithm for Noop {
        fn name(&self) -> &'static str {
            self.0
        }

        fn description(&self) -> &'static str {
            "Does nothing."
        }

        fn options(&self) -> OptionSchema {
            OptionSchema::new().add("flag", "Unused", false)
        }

        fn outputs(&self) -> &'static [OutputDecl] {
            &[]
        }

        fn execute(&self, options: &Options, abort: &AbortFlag) -> Result<Outputs> {
            abort.check()?;
            options.get::<bool>("flag")?;
            Ok(Outputs::new())
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = AlgorithmRegistry::new();
        assert!(registry.is_empty());

        registry.register(Box::new(Noop("b"))).unwrap();
        registry.register(Box::new(Noop("a"))).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("a"));
        assert_eq!(registry.get("b").unwrap().description(), "Does nothing.");
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["a", "b"]);

        assert!(registry.remove("a").is_some());
        assert!(!registry.contains("a"));
        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = AlgorithmRegistry::new();
        registry.register(Box::new(Noop("same"))).unwrap();
        assert!(matches!(
            registry.register(Box::new(Noop("same"))),
            Err(FieldvisError::AlgorithmExists(name)) if name == "same"
        ));
    }

    #[test]
    fn test_run_resolves_defaults() {
        let mut registry = AlgorithmRegistry::new();
        registry.register(Box::new(Noop("noop"))).unwrap();

        // "flag" is only present through the schema default
        let outputs = registry.run("noop", &Options::new(), &AbortFlag::new()).unwrap();
        assert!(outputs.is_empty());

        assert!(matches!(
            registry.run("missing", &Options::new(), &AbortFlag::new()),
            Err(FieldvisError::UnknownAlgorithm(_))
        ));
    }
}
