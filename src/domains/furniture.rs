//! Furniture factories: a plain workshop plus style families that label
//! every piece they make.

use crate::error::FactoryError;
use crate::registry::{prefix_label, FallbackPolicy, FamilyRegistry};

pub trait FurnitureFactory: Send + Sync {
    fn create_sofa(&self) -> String;
    fn create_table(&self) -> String;
    fn create_chair(&self) -> String;
}

/// Base workshop with no styling.
#[derive(Debug, Clone, Copy, Default)]
pub struct Workshop;

impl FurnitureFactory for Workshop {
    fn create_sofa(&self) -> String {
        "Sofa".to_string()
    }

    fn create_table(&self) -> String {
        "Table".to_string()
    }

    fn create_chair(&self) -> String {
        "Chair".to_string()
    }
}

/// Wraps another factory and prefixes each piece with the style name.
pub struct StyledFurniture {
    style: String,
    inner: Box<dyn FurnitureFactory>,
}

impl StyledFurniture {
    pub fn new(style: impl Into<String>, inner: Box<dyn FurnitureFactory>) -> Self {
        Self {
            style: style.into(),
            inner,
        }
    }

    pub fn style(&self) -> &str {
        &self.style
    }
}

impl FurnitureFactory for StyledFurniture {
    fn create_sofa(&self) -> String {
        prefix_label(&self.style, &self.inner.create_sofa())
    }

    fn create_table(&self) -> String {
        prefix_label(&self.style, &self.inner.create_table())
    }

    fn create_chair(&self) -> String {
        prefix_label(&self.style, &self.inner.create_chair())
    }
}

pub type FurnitureRegistry = FamilyRegistry<Box<dyn FurnitureFactory>, Box<dyn FurnitureFactory>>;

fn styled(style: &'static str) -> impl Fn(Box<dyn FurnitureFactory>) -> Box<dyn FurnitureFactory> {
    move |base: Box<dyn FurnitureFactory>| -> Box<dyn FurnitureFactory> {
        Box::new(StyledFurniture::new(style, base))
    }
}

pub fn furniture_registry(policy: FallbackPolicy) -> FurnitureRegistry {
    FurnitureRegistry::new()
        .register("Royal", styled("Royal"))
        .register("Modern", styled("Modern"))
        .with_policy(policy)
}

pub fn create_furniture(
    registry: &FurnitureRegistry,
    style: &str,
) -> Result<Box<dyn FurnitureFactory>, FactoryError> {
    registry.create_family(style, || Box::new(Workshop) as Box<dyn FurnitureFactory>)
}

/// Capability name and result for every piece a factory makes.
pub fn catalog(factory: &dyn FurnitureFactory) -> Vec<(&'static str, String)> {
    vec![
        ("create_chair", factory.create_chair()),
        ("create_sofa", factory.create_sofa()),
        ("create_table", factory.create_table()),
    ]
}
