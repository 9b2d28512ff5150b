//! The showroom wires every domain registry from one [`DemoConfig`] and
//! turns a request into the lines a demo prints: one line per capability.

use tracing::info;

use crate::config::DemoConfig;
use crate::domains::car::CarFactory;
use crate::domains::delivery::{
    order_registry, place_order, Bill, Operator, OrderRegistry, TransportMode, Vehicle,
};
use crate::domains::furniture::{
    catalog, create_furniture, furniture_registry, FurnitureRegistry,
};
use crate::domains::house::{plan_registry, Director};
use crate::domains::shape::{shape_registry, Canvas, ShapeRegistry};
use crate::domains::theme::{create_theme, theme_registry, widgets, ThemeRegistry};
use crate::error::{ConfigError, ShowroomError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub capability: String,
    pub value: String,
}

impl Line {
    pub fn new(capability: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            capability: capability.into(),
            value: value.into(),
        }
    }
}

fn lines(pairs: Vec<(&'static str, String)>) -> Vec<Line> {
    pairs
        .into_iter()
        .map(|(capability, value)| Line::new(capability, value))
        .collect()
}

#[derive(Debug, Clone)]
pub struct Showroom {
    furniture: FurnitureRegistry,
    themes: ThemeRegistry,
    shapes: ShapeRegistry,
    cars: CarFactory,
    orders: OrderRegistry,
    director: Director,
}

impl Showroom {
    /// Wires the registries, rejecting a `theme_default` that names no
    /// registered theme.
    pub fn new(config: &DemoConfig) -> Result<Self, ConfigError> {
        let showroom = Self::wire(config);
        if !showroom.themes.contains(&config.theme_default) {
            return Err(ConfigError::InvalidValue {
                field: "theme_default".to_string(),
                value: config.theme_default.clone(),
                known: showroom.themes.discriminators(),
            });
        }
        Ok(showroom)
    }

    fn wire(config: &DemoConfig) -> Self {
        Self {
            furniture: furniture_registry(config.furniture_fallback),
            themes: theme_registry(&config.theme_default),
            shapes: shape_registry(),
            cars: CarFactory::default(),
            orders: order_registry(config.order_default),
            director: Director::new(plan_registry(config.house_fallback)),
        }
    }

    pub fn furniture(&self, style: &str) -> Result<Vec<Line>, ShowroomError> {
        let factory = create_furniture(&self.furniture, style)?;
        Ok(lines(catalog(factory.as_ref())))
    }

    pub fn theme(&self, platform: &str) -> Result<Vec<Line>, ShowroomError> {
        let theme = create_theme(&self.themes, platform)?;
        Ok(lines(widgets(theme.as_ref())))
    }

    pub fn shape(&self, dimension: &str) -> Result<Vec<Line>, ShowroomError> {
        let canvas = Canvas::paint(&self.shapes, dimension)?;
        let slots = ["create_circle", "create_square"];
        Ok(slots
            .into_iter()
            .zip(canvas.items())
            .map(|(capability, shape)| Line::new(capability, shape.name()))
            .collect())
    }

    pub fn car(&self, manufacturer: &str, variant: &str) -> Result<Vec<Line>, ShowroomError> {
        let car = self.cars.create_car(manufacturer, variant)?;
        Ok(vec![Line::new("build", car.build())])
    }

    /// Places one order per kind, staffs each with a sample operator and
    /// vehicle for its transport mode, and finishes with the bill.
    pub fn delivery(&self, kinds: &[String]) -> Result<Vec<Line>, ShowroomError> {
        let mut out = Vec::with_capacity(kinds.len() + 1);
        let mut orders = Vec::with_capacity(kinds.len());

        for kind in kinds {
            let order = place_order(&self.orders, kind)?;
            let (operator, vehicle) = sample_crew(order.mode());
            let order = order.with_operator(operator).with_vehicle(vehicle);
            out.push(Line::new("start_delivery", order.start_delivery()?));
            orders.push(order);
        }

        let total = Bill::new(orders).calculate();
        info!(orders = kinds.len(), total, "bill calculated");
        out.push(Line::new("calculate_bill", total.to_string()));
        Ok(out)
    }

    pub fn house(&self, plan: &str) -> Result<Vec<Line>, ShowroomError> {
        let house = self.director.plan(plan)?.build();
        Ok(vec![Line::new("get_house", house.describe())])
    }
}

impl Default for Showroom {
    fn default() -> Self {
        Self::wire(&DemoConfig::default())
    }
}

fn sample_crew(mode: TransportMode) -> (Operator, Vehicle) {
    match mode {
        TransportMode::Road => (
            Operator::driver("harpreet", true),
            Vehicle::new("DL 1234"),
        ),
        TransportMode::Sea => (
            Operator::captain("captain haddock", true),
            Vehicle::new("S 1234"),
        ),
        TransportMode::Air => (
            Operator::pilot("Bade Meaow", true),
            Vehicle::new("Boeing 1234"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FactoryError;
    use crate::registry::FallbackPolicy;

    fn values(lines: Vec<Line>) -> Vec<String> {
        lines.into_iter().map(|line| line.value).collect()
    }

    #[test]
    fn test_furniture_lines() {
        let out = Showroom::default().furniture("Royal").unwrap();
        assert_eq!(out[0], Line::new("create_chair", "RoyalChair"));
        assert_eq!(values(out), ["RoyalChair", "RoyalSofa", "RoyalTable"]);
    }

    #[test]
    fn test_strict_furniture_config() {
        let config = DemoConfig {
            furniture_fallback: FallbackPolicy::Reject,
            ..DemoConfig::default()
        };
        let err = Showroom::new(&config)
            .unwrap()
            .furniture("Gothic")
            .unwrap_err();
        assert!(matches!(
            err,
            ShowroomError::Factory(FactoryError::UnknownDiscriminator { .. })
        ));
    }

    #[test]
    fn test_theme_lines() {
        let out = Showroom::default().theme("windows").unwrap();
        assert_eq!(out[0].value, "windowsButton");
        assert_eq!(out[3].value, r#"{"windows three col layout":[]}"#);
    }

    #[test]
    fn test_unregistered_theme_default_rejected_at_startup() {
        let config = DemoConfig {
            theme_default: "Linux".to_string(),
            ..DemoConfig::default()
        };
        match Showroom::new(&config) {
            Err(ConfigError::InvalidValue {
                field,
                value,
                known,
            }) => {
                assert_eq!(field, "theme_default");
                assert_eq!(value, "Linux");
                assert_eq!(known, ["Mac", "windows"]);
            }
            other => panic!("expected InvalidValue, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_registered_theme_default_accepted() {
        let config = DemoConfig {
            theme_default: "windows".to_string(),
            ..DemoConfig::default()
        };
        let out = Showroom::new(&config).unwrap().theme("beos").unwrap();
        assert_eq!(out[0].value, "windowsButton");
    }

    #[test]
    fn test_shape_lines() {
        let out = Showroom::default().shape("3d").unwrap();
        assert_eq!(
            out,
            [
                Line::new("create_circle", "Sphere"),
                Line::new("create_square", "Cube")
            ]
        );
        assert!(Showroom::default().shape("1d").is_err());
    }

    #[test]
    fn test_car_line() {
        let out = Showroom::default().car("Mercedes", "mini").unwrap();
        assert_eq!(values(out), ["Constructed a mini Mercedes car"]);
    }

    #[test]
    fn test_delivery_lines_end_with_bill() {
        let kinds = ["road", "sea", "air"].map(String::from);
        let out = Showroom::default().delivery(&kinds).unwrap();
        assert_eq!(out.len(), 4);
        assert_eq!(
            out[1].value,
            "delivered by captain haddock using a Ship having no S 1234"
        );
        assert_eq!(out[3], Line::new("calculate_bill", "16000"));
    }

    #[test]
    fn test_house_line() {
        let out = Showroom::default().house("big").unwrap();
        assert_eq!(values(out), ["House with 5 windows, 2 doors created"]);
    }
}
