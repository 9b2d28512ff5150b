//! # Creational Patterns
//!
//! Abstract Factory, Factory Method and Builder, shown through small toy
//! domains that all sit on one mechanism: a [`FamilyRegistry`] that maps a
//! discriminator to a constructor wrapping a fresh base product.
//!
//! ## Domains
//!
//! - **furniture**: `Royal` / `Modern` styles label every piece
//! - **theme**: `windows` / `Mac` widgets and form layouts
//! - **shape**: `2d` / `3d` canvases swap the whole factory
//! - **car**: manufacturer x variant, two lookups composed
//! - **delivery**: `road` / `sea` / `air` orders and their bill
//! - **house**: consuming builder plus director plans
//!
//! ## Running the demo
//!
//! ```bash
//! cargo run --bin creational-demo -- furniture Royal
//! cargo run --bin creational-demo -- car BMW luxury
//! cargo run --bin creational-demo -- tour
//! ```

pub mod config;
pub mod domains;
pub mod error;
pub mod registry;
pub mod showroom;

pub use config::DemoConfig;
pub use error::{ConfigError, DeliveryError, FactoryError, ShowroomError};
pub use registry::{prefix_label, Constructor, Fallback, FallbackPolicy, FamilyRegistry};
pub use showroom::{Line, Showroom};
