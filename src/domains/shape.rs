//! Shapes on a canvas. Unlike the decorating families, a dimension family
//! replaces the whole factory: a 3D canvas turns circles into spheres and
//! squares into cubes.

use std::fmt;

use serde::Serialize;

use crate::error::FactoryError;
use crate::registry::FamilyRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Shape {
    Circle,
    Square,
    Sphere,
    Cube,
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Circle => "Circle",
            Shape::Square => "Square",
            Shape::Sphere => "Sphere",
            Shape::Cube => "Cube",
        }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, Shape::Sphere | Shape::Cube)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub trait ShapeFactory: Send + Sync {
    fn create_circle(&self) -> Shape;
    fn create_square(&self) -> Shape;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlatShapes;

impl ShapeFactory for FlatShapes {
    fn create_circle(&self) -> Shape {
        Shape::Circle
    }

    fn create_square(&self) -> Shape {
        Shape::Square
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SolidShapes;

impl ShapeFactory for SolidShapes {
    fn create_circle(&self) -> Shape {
        Shape::Sphere
    }

    fn create_square(&self) -> Shape {
        Shape::Cube
    }
}

pub type ShapeRegistry = FamilyRegistry<(), Box<dyn ShapeFactory>>;

/// `2d` and `3d` only; any other dimension is rejected.
pub fn shape_registry() -> ShapeRegistry {
    ShapeRegistry::new()
        .register("2d", |_| Box::new(FlatShapes) as Box<dyn ShapeFactory>)
        .register("3d", |_| Box::new(SolidShapes) as Box<dyn ShapeFactory>)
        .reject_unknown()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Canvas {
    dimension: String,
    items: Vec<Shape>,
}

impl Canvas {
    /// Paints one circle-slot and one square-slot shape using the factory
    /// registered for `dimension`.
    pub fn paint(registry: &ShapeRegistry, dimension: &str) -> Result<Self, FactoryError> {
        let factory = registry.resolve(dimension)?;
        Ok(Self {
            dimension: dimension.to_string(),
            items: vec![factory.create_circle(), factory.create_square()],
        })
    }

    pub fn dimension(&self) -> &str {
        &self.dimension
    }

    pub fn items(&self) -> &[Shape] {
        &self.items
    }
}
