//! Cars: a two-level abstract factory. The manufacturer is resolved first
//! and bound into the base car; the variant then decorates that car.

use std::fmt;

use tracing::debug;

use crate::error::FactoryError;
use crate::registry::{Constructor, FamilyRegistry};

/// Manufacturer context injected into every car it builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manufacturer {
    name: String,
}

impl Manufacturer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

pub trait CarModel: Send + Sync {
    fn manufacturer(&self) -> &Manufacturer;
    fn build(&self) -> String;
}

/// A car bound to its manufacturer, before any variant is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    manufacturer: Manufacturer,
}

impl Car {
    pub fn new(manufacturer: Manufacturer) -> Self {
        Self { manufacturer }
    }
}

impl CarModel for Car {
    fn manufacturer(&self) -> &Manufacturer {
        &self.manufacturer
    }

    fn build(&self) -> String {
        format!("{} car", self.manufacturer.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantCar {
    variant: String,
    car: Car,
}

impl VariantCar {
    pub fn new(variant: impl Into<String>, car: Car) -> Self {
        Self {
            variant: variant.into(),
            car,
        }
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }
}

/// The variant transform applied on top of a manufacturer-bound build.
pub fn construct_variant(variant: &str, base_build: &str) -> String {
    format!("Constructed a {variant} {base_build}")
}

impl CarModel for VariantCar {
    fn manufacturer(&self) -> &Manufacturer {
        self.car.manufacturer()
    }

    fn build(&self) -> String {
        construct_variant(&self.variant, &self.car.build())
    }
}

pub type ManufacturerRegistry = FamilyRegistry<(), Manufacturer>;
pub type VariantRegistry = FamilyRegistry<Car, Box<dyn CarModel>>;

pub fn manufacturer_registry() -> ManufacturerRegistry {
    ["BMW", "Mercedes"]
        .into_iter()
        .fold(ManufacturerRegistry::new(), |registry, name| {
            registry.register(name, move |_| Manufacturer::new(name))
        })
}

pub fn variant_registry() -> VariantRegistry {
    ["luxury", "mini", "micro"]
        .into_iter()
        .fold(VariantRegistry::new(), |registry, variant| {
            registry.register(variant, move |car: Car| -> Box<dyn CarModel> {
                Box::new(VariantCar::new(variant, car))
            })
        })
}

/// Builds fresh cars for one `(manufacturer, variant)` pair.
#[derive(Clone)]
pub struct CarConstructor {
    manufacturer: Manufacturer,
    variant: Constructor<Car, Box<dyn CarModel>>,
}

impl CarConstructor {
    pub fn manufacturer(&self) -> &Manufacturer {
        &self.manufacturer
    }

    pub fn construct(&self) -> Box<dyn CarModel> {
        (self.variant)(Car::new(self.manufacturer.clone()))
    }
}

impl fmt::Debug for CarConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarConstructor")
            .field("manufacturer", &self.manufacturer)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct CarFactory {
    manufacturers: ManufacturerRegistry,
    variants: VariantRegistry,
}

impl CarFactory {
    pub fn new(manufacturers: ManufacturerRegistry, variants: VariantRegistry) -> Self {
        Self {
            manufacturers,
            variants,
        }
    }

    /// Resolves both discriminators up front, so an unknown manufacturer or
    /// variant fails here rather than when a car is built.
    pub fn constructor(
        &self,
        manufacturer: &str,
        variant: &str,
    ) -> Result<CarConstructor, FactoryError> {
        let manufacturer = self.manufacturers.resolve(manufacturer)?;
        let variant = self.variants.constructor(variant)?;
        debug!(manufacturer = manufacturer.name(), "car constructor ready");
        Ok(CarConstructor {
            manufacturer,
            variant,
        })
    }

    pub fn create_car(
        &self,
        manufacturer: &str,
        variant: &str,
    ) -> Result<Box<dyn CarModel>, FactoryError> {
        Ok(self.constructor(manufacturer, variant)?.construct())
    }
}

impl Default for CarFactory {
    fn default() -> Self {
        Self::new(manufacturer_registry(), variant_registry())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANUFACTURERS: [&str; 2] = ["BMW", "Mercedes"];
    const VARIANTS: [&str; 3] = ["luxury", "mini", "micro"];

    #[test]
    fn test_bmw_luxury() {
        let car = CarFactory::default().create_car("BMW", "luxury").unwrap();
        assert_eq!(car.build(), "Constructed a luxury BMW car");
        assert_eq!(car.manufacturer().name(), "BMW");
    }

    #[test]
    fn test_mercedes_mini() {
        let car = CarFactory::default().create_car("Mercedes", "mini").unwrap();
        assert_eq!(car.build(), "Constructed a mini Mercedes car");
    }

    #[test]
    fn test_two_level_dispatch_composes() {
        let factory = CarFactory::default();
        for manufacturer in MANUFACTURERS {
            for variant in VARIANTS {
                let car = factory.create_car(manufacturer, variant).unwrap();
                let bound = Car::new(Manufacturer::new(manufacturer));
                assert_eq!(car.build(), construct_variant(variant, &bound.build()));
            }
        }
    }

    #[test]
    fn test_unknown_manufacturer_rejected() {
        let err = CarFactory::default()
            .create_car("Tesla", "mini")
            .map(|car| car.build())
            .unwrap_err();
        assert_eq!(err.discriminator(), Some("Tesla"));
    }

    #[test]
    fn test_unknown_variant_rejected_before_building() {
        let err = CarFactory::default().constructor("BMW", "truck").unwrap_err();
        assert_eq!(err.discriminator(), Some("truck"));
    }

    #[test]
    fn test_constructor_builds_fresh_cars() {
        let constructor = CarFactory::default().constructor("BMW", "micro").unwrap();
        assert_eq!(constructor.manufacturer().name(), "BMW");
        let first = constructor.construct();
        let second = constructor.construct();
        assert_eq!(first.build(), second.build());
        assert_eq!(first.build(), "Constructed a micro BMW car");
    }

    #[test]
    fn test_variant_accessor() {
        let car = VariantCar::new("mini", Car::new(Manufacturer::new("BMW")));
        assert_eq!(car.variant(), "mini");
        assert_eq!(car.manufacturer(), &Manufacturer::new("BMW"));
    }
}
