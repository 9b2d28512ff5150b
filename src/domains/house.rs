//! Houses: a consuming builder plus a director that knows a few common
//! floor plans. Every plan starts from a fresh builder, so nothing needs
//! resetting between houses.

use std::fmt;

use itertools::Itertools;

use crate::error::FactoryError;
use crate::registry::{FallbackPolicy, FamilyRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Garden,
    SwimmingPool(u32),
    Roof,
    Garage,
    Windows(u32),
    Doors(u32),
}

impl Feature {
    fn same_kind(&self, other: &Feature) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::Garden => write!(f, "garden"),
            Feature::SwimmingPool(count) => write!(f, "{count} swimming pool"),
            Feature::Roof => write!(f, "roof"),
            Feature::Garage => write!(f, "garage"),
            Feature::Windows(count) => write!(f, "{count} windows"),
            Feature::Doors(count) => write!(f, "{count} doors"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    features: Vec<Feature>,
}

impl House {
    pub fn builder() -> HouseBuilder {
        HouseBuilder::new()
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn windows(&self) -> u32 {
        self.count_of(|feature| match feature {
            Feature::Windows(count) => Some(*count),
            _ => None,
        })
    }

    pub fn doors(&self) -> u32 {
        self.count_of(|feature| match feature {
            Feature::Doors(count) => Some(*count),
            _ => None,
        })
    }

    pub fn has(&self, feature: Feature) -> bool {
        self.features.iter().any(|f| f.same_kind(&feature))
    }

    fn count_of(&self, pick: impl Fn(&Feature) -> Option<u32>) -> u32 {
        self.features.iter().find_map(pick).unwrap_or(1)
    }

    /// Lists features in the order they were chosen.
    pub fn describe(&self) -> String {
        if self.features.is_empty() {
            return "House created".to_string();
        }
        format!("House with {} created", self.features.iter().join(", "))
    }
}

/// Consuming builder. Setting a feature twice keeps its original position
/// and takes the latest value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct HouseBuilder {
    features: Vec<Feature>,
}

impl HouseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn with(mut self, feature: Feature) -> Self {
        match self.features.iter_mut().find(|f| f.same_kind(&feature)) {
            Some(existing) => *existing = feature,
            None => self.features.push(feature),
        }
        self
    }

    pub fn garden(self) -> Self {
        self.with(Feature::Garden)
    }

    pub fn swimming_pools(self, count: u32) -> Self {
        self.with(Feature::SwimmingPool(count))
    }

    pub fn roof(self) -> Self {
        self.with(Feature::Roof)
    }

    pub fn garage(self) -> Self {
        self.with(Feature::Garage)
    }

    pub fn windows(self, count: u32) -> Self {
        self.with(Feature::Windows(count))
    }

    pub fn doors(self, count: u32) -> Self {
        self.with(Feature::Doors(count))
    }

    pub fn build(self) -> House {
        House {
            features: self.features,
        }
    }
}

pub type PlanRegistry = FamilyRegistry<HouseBuilder, HouseBuilder>;

pub fn plan_registry(policy: FallbackPolicy) -> PlanRegistry {
    PlanRegistry::new()
        .register("small", |builder: HouseBuilder| builder.windows(2).doors(1))
        .register("big", |builder: HouseBuilder| builder.windows(5).doors(2))
        .register("mansion", |builder: HouseBuilder| {
            builder
                .windows(15)
                .doors(20)
                .garage()
                .swimming_pools(2)
                .roof()
        })
        .with_policy(policy)
}

/// Knows the common plans and hands back a builder the caller can keep
/// customising before `build()`.
#[derive(Debug, Clone)]
pub struct Director {
    plans: PlanRegistry,
}

impl Director {
    pub fn new(plans: PlanRegistry) -> Self {
        Self { plans }
    }

    pub fn plan(&self, name: &str) -> Result<HouseBuilder, FactoryError> {
        self.plans.create_family(name, HouseBuilder::new)
    }

    pub fn small_house(&self) -> Result<HouseBuilder, FactoryError> {
        self.plan("small")
    }

    pub fn big_house(&self) -> Result<HouseBuilder, FactoryError> {
        self.plan("big")
    }

    pub fn mansion(&self) -> Result<HouseBuilder, FactoryError> {
        self.plan("mansion")
    }
}

impl Default for Director {
    fn default() -> Self {
        Self::new(plan_registry(FallbackPolicy::Base))
    }
}
