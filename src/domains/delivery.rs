//! Delivery orders: a factory method picks the transport mode, and the
//! order is then assembled with an operator and a vehicle. Billing only
//! sees the cost of each order, never the transport behind it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DeliveryError, FactoryError};
use crate::registry::FamilyRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Road,
    Sea,
    Air,
}

impl TransportMode {
    pub const ALL: [TransportMode; 3] = [
        TransportMode::Road,
        TransportMode::Sea,
        TransportMode::Air,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TransportMode::Road => "road",
            TransportMode::Sea => "sea",
            TransportMode::Air => "air",
        }
    }

    pub fn cost_per_order(&self) -> u64 {
        match self {
            TransportMode::Road => 1_000,
            TransportMode::Sea => 5_000,
            TransportMode::Air => 10_000,
        }
    }

    pub fn required_license(&self) -> License {
        match self {
            TransportMode::Road => License::Driving,
            TransportMode::Sea => License::Sailing,
            TransportMode::Air => License::Air,
        }
    }

    fn vehicle_noun(&self) -> &'static str {
        match self {
            TransportMode::Road => "truck",
            TransportMode::Sea => "Ship",
            TransportMode::Air => "Plane",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum License {
    Driving,
    Sailing,
    Air,
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            License::Driving => "driving",
            License::Sailing => "sailing",
            License::Air => "air",
        };
        f.write_str(name)
    }
}

/// A driver, captain or pilot, depending on the license they hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    name: String,
    license: License,
    valid: bool,
}

impl Operator {
    pub fn new(name: impl Into<String>, license: License, valid: bool) -> Self {
        Self {
            name: name.into(),
            license,
            valid,
        }
    }

    pub fn driver(name: impl Into<String>, valid: bool) -> Self {
        Self::new(name, License::Driving, valid)
    }

    pub fn captain(name: impl Into<String>, valid: bool) -> Self {
        Self::new(name, License::Sailing, valid)
    }

    pub fn pilot(name: impl Into<String>, valid: bool) -> Self {
        Self::new(name, License::Air, valid)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn check_license(&self, required: License) -> Result<(), DeliveryError> {
        if self.license != required {
            return Err(DeliveryError::WrongLicense {
                operator: self.name.clone(),
                held: self.license.to_string(),
                required: required.to_string(),
            });
        }
        if !self.valid {
            return Err(DeliveryError::InvalidLicense {
                operator: self.name.clone(),
                license: required.to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    number: String,
}

impl Vehicle {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    mode: TransportMode,
    operator: Option<Operator>,
    vehicle: Option<Vehicle>,
}

impl Order {
    pub fn new(mode: TransportMode) -> Self {
        Self {
            mode,
            operator: None,
            vehicle: None,
        }
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    pub fn cost_per_order(&self) -> u64 {
        self.mode.cost_per_order()
    }

    pub fn with_operator(self, operator: Operator) -> Self {
        Self {
            operator: Some(operator),
            ..self
        }
    }

    pub fn with_vehicle(self, vehicle: Vehicle) -> Self {
        Self {
            vehicle: Some(vehicle),
            ..self
        }
    }

    /// Delivery starts only when the operator holds a valid license for
    /// this order's transport mode and a vehicle is assigned.
    pub fn start_delivery(&self) -> Result<String, DeliveryError> {
        let mode = self.mode.key().to_string();
        let operator = self
            .operator
            .as_ref()
            .ok_or_else(|| DeliveryError::MissingOperator { mode: mode.clone() })?;
        operator.check_license(self.mode.required_license())?;
        let vehicle = self
            .vehicle
            .as_ref()
            .ok_or(DeliveryError::MissingVehicle { mode })?;

        Ok(format!(
            "delivered by {} using a {} having no {}",
            operator.name,
            self.mode.vehicle_noun(),
            vehicle.number
        ))
    }
}

pub type OrderRegistry = FamilyRegistry<(), Order>;

/// Registers one order kind per transport mode; unknown kinds become
/// `default_kind` orders.
pub fn order_registry(default_kind: TransportMode) -> OrderRegistry {
    TransportMode::ALL
        .into_iter()
        .fold(OrderRegistry::new(), |registry, mode| {
            registry.register(mode.key(), move |_| Order::new(mode))
        })
        .fallback_to_family(default_kind.key())
}

pub fn place_order(registry: &OrderRegistry, kind: &str) -> Result<Order, FactoryError> {
    registry.resolve(kind)
}

#[derive(Debug, Clone, Default)]
pub struct Bill {
    orders: Vec<Order>,
}

impl Bill {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn calculate(&self) -> u64 {
        self.orders.iter().map(Order::cost_per_order).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> OrderRegistry {
        order_registry(TransportMode::Air)
    }

    #[test]
    fn test_road_delivery() {
        let order = place_order(&registry(), "road")
            .unwrap()
            .with_operator(Operator::driver("harpreet", true))
            .with_vehicle(Vehicle::new("DL 1234"));
        assert_eq!(
            order.start_delivery().unwrap(),
            "delivered by harpreet using a truck having no DL 1234"
        );
    }

    #[test]
    fn test_sea_and_air_delivery() {
        let sea = place_order(&registry(), "sea")
            .unwrap()
            .with_operator(Operator::captain("captain haddock", true))
            .with_vehicle(Vehicle::new("S 1234"));
        assert_eq!(
            sea.start_delivery().unwrap(),
            "delivered by captain haddock using a Ship having no S 1234"
        );

        let air = place_order(&registry(), "air")
            .unwrap()
            .with_operator(Operator::pilot("Bade Meaow", true))
            .with_vehicle(Vehicle::new("Boeing 1234"));
        assert_eq!(
            air.start_delivery().unwrap(),
            "delivered by Bade Meaow using a Plane having no Boeing 1234"
        );
    }

    #[test]
    fn test_unknown_kind_defaults_to_air() {
        let order = place_order(&registry(), "rail").unwrap();
        assert_eq!(order.mode(), TransportMode::Air);
        assert_eq!(order.cost_per_order(), 10_000);
    }

    #[test]
    fn test_invalid_license_blocks_delivery() {
        let order = Order::new(TransportMode::Road)
            .with_operator(Operator::driver("harpreet", false))
            .with_vehicle(Vehicle::new("DL 1234"));
        assert_eq!(
            order.start_delivery(),
            Err(DeliveryError::InvalidLicense {
                operator: "harpreet".to_string(),
                license: "driving".to_string(),
            })
        );
    }

    #[test]
    fn test_wrong_license_blocks_delivery() {
        let order = Order::new(TransportMode::Sea)
            .with_operator(Operator::pilot("Mr. Emirates", true))
            .with_vehicle(Vehicle::new("S 99"));
        assert!(matches!(
            order.start_delivery(),
            Err(DeliveryError::WrongLicense { .. })
        ));
    }

    #[test]
    fn test_missing_assignments() {
        let bare = Order::new(TransportMode::Air);
        assert!(matches!(
            bare.start_delivery(),
            Err(DeliveryError::MissingOperator { .. })
        ));

        let no_vehicle = bare.with_operator(Operator::pilot("Mr. Emirates", true));
        assert_eq!(
            no_vehicle.start_delivery(),
            Err(DeliveryError::MissingVehicle {
                mode: "air".to_string()
            })
        );
    }

    #[test]
    fn test_bill_totals_every_mode() {
        let registry = registry();
        let orders = ["road", "sea", "air", "air"]
            .into_iter()
            .map(|kind| place_order(&registry, kind).unwrap())
            .collect();
        assert_eq!(Bill::new(orders).calculate(), 26_000);
        assert_eq!(Bill::default().calculate(), 0);
    }

    #[test]
    fn test_vehicle_and_operator_accessors() {
        assert_eq!(Vehicle::new("DL 1").number(), "DL 1");
        assert_eq!(Operator::captain("haddock", true).name(), "haddock");
        assert_eq!(TransportMode::Sea.to_string(), "sea");
    }
}
