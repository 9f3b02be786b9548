use std::collections::HashMap;

use crate::module::node::ModuleNode;

/*
Module Registry
===============

Hosts discover and instantiate modules through a registry value. The
registry is deliberately an explicit handle, not a global: whoever owns the
host owns the registry, registers descriptors at startup, and passes the
registry wherever instantiation happens. No static mutable state, no
registration-at-load-time magic.

A descriptor pairs a stable slug (patch files refer to it) with a display
name and a factory closure that builds a fresh boxed instance.
*/

/// Boxed factory producing a fresh module instance.
type ModuleFactoryFn = Box<dyn Fn() -> Box<dyn ModuleNode> + Send + Sync>;

/// One registered module type.
pub struct ModuleDescriptor {
    slug: String,
    name: String,
    factory: ModuleFactoryFn,
}

impl ModuleDescriptor {
    pub fn new<F, M>(slug: &str, name: &str, factory: F) -> Self
    where
        F: Fn() -> M + Send + Sync + 'static,
        M: ModuleNode + 'static,
    {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
            factory: Box::new(move || Box::new(factory())),
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build a fresh instance of this module type.
    pub fn instantiate(&self) -> Box<dyn ModuleNode> {
        (self.factory)()
    }
}

/// Registry of module descriptors keyed by slug.
#[derive(Default)]
pub struct ModuleRegistry {
    descriptors: HashMap<String, ModuleDescriptor>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module type. Slugs must be unique.
    pub fn register(&mut self, descriptor: ModuleDescriptor) -> Result<(), RegistryError> {
        let slug = descriptor.slug().to_string();
        if self.descriptors.contains_key(&slug) {
            return Err(RegistryError::DuplicateSlug { slug });
        }
        self.descriptors.insert(slug, descriptor);
        Ok(())
    }

    /// Build a fresh instance of the module registered under `slug`.
    pub fn instantiate(&self, slug: &str) -> Result<Box<dyn ModuleNode>, RegistryError> {
        self.descriptors
            .get(slug)
            .map(|d| d.instantiate())
            .ok_or_else(|| RegistryError::UnknownSlug {
                slug: slug.to_string(),
            })
    }

    pub fn descriptor(&self, slug: &str) -> Option<&ModuleDescriptor> {
        self.descriptors.get(slug)
    }

    /// Iterate registered descriptors in no particular order.
    pub fn descriptors(&self) -> impl Iterator<Item = &ModuleDescriptor> {
        self.descriptors.values()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// Errors that can occur when registering or instantiating modules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A descriptor with this slug is already registered
    DuplicateSlug { slug: String },
    /// No descriptor registered under this slug
    UnknownSlug { slug: String },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::DuplicateSlug { slug } => {
                write!(f, "module slug already registered: {}", slug)
            }
            RegistryError::UnknownSlug { slug } => {
                write!(f, "no module registered under slug: {}", slug)
            }
        }
    }
}

impl std::error::Error for RegistryError {}
