//! UI themes. A theme hands out widgets and forms; platform themes decorate
//! the neutral theme with their own label and form layout.

use serde_json::{Map, Value};

use crate::error::FactoryError;
use crate::registry::{prefix_label, FamilyRegistry};

pub const DEFAULT_FORM_STYLE: &str = "layout one column";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    style: String,
    children: Vec<String>,
}

impl Form {
    pub fn new(style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            children: Vec::new(),
        }
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn add_child(&mut self, item: impl Into<String>) {
        self.children.push(item.into());
    }

    /// Same children, different layout.
    pub fn restyled(self, style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            children: self.children,
        }
    }

    /// Renders as `{ "<style>": [children...] }`.
    pub fn to_json(&self) -> Value {
        let mut layout = Map::new();
        layout.insert(self.style.clone(), Value::from(self.children.clone()));
        Value::Object(layout)
    }
}

pub trait Theme: Send + Sync {
    fn create_button(&self) -> String;
    fn create_text_box(&self) -> String;
    fn create_label(&self) -> String;
    fn create_form(&self) -> Form;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTheme;

impl Theme for PlainTheme {
    fn create_button(&self) -> String {
        "Button".to_string()
    }

    fn create_text_box(&self) -> String {
        "TextBox".to_string()
    }

    fn create_label(&self) -> String {
        "Label".to_string()
    }

    fn create_form(&self) -> Form {
        Form::new(DEFAULT_FORM_STYLE)
    }
}

pub struct PlatformTheme {
    platform: String,
    layout: String,
    inner: Box<dyn Theme>,
}

impl PlatformTheme {
    pub fn new(
        platform: impl Into<String>,
        layout: impl Into<String>,
        inner: Box<dyn Theme>,
    ) -> Self {
        Self {
            platform: platform.into(),
            layout: layout.into(),
            inner,
        }
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }
}

impl Theme for PlatformTheme {
    fn create_button(&self) -> String {
        prefix_label(&self.platform, &self.inner.create_button())
    }

    fn create_text_box(&self) -> String {
        prefix_label(&self.platform, &self.inner.create_text_box())
    }

    fn create_label(&self) -> String {
        prefix_label(&self.platform, &self.inner.create_label())
    }

    fn create_form(&self) -> Form {
        let style = format!("{} {}", self.platform, self.layout);
        self.inner.create_form().restyled(style)
    }
}

pub type ThemeRegistry = FamilyRegistry<Box<dyn Theme>, Box<dyn Theme>>;

fn platform(name: &'static str, layout: &'static str) -> impl Fn(Box<dyn Theme>) -> Box<dyn Theme> {
    move |base: Box<dyn Theme>| -> Box<dyn Theme> {
        Box::new(PlatformTheme::new(name, layout, base))
    }
}

/// Registers the `windows` and `Mac` themes; anything else gets
/// `default_family`.
pub fn theme_registry(default_family: &str) -> ThemeRegistry {
    ThemeRegistry::new()
        .register("windows", platform("windows", "three col layout"))
        .register("Mac", platform("Mac", "two col layout"))
        .fallback_to_family(default_family)
}

pub fn create_theme(
    registry: &ThemeRegistry,
    platform: &str,
) -> Result<Box<dyn Theme>, FactoryError> {
    registry.create_family(platform, || Box::new(PlainTheme) as Box<dyn Theme>)
}

pub fn widgets(theme: &dyn Theme) -> Vec<(&'static str, String)> {
    vec![
        ("create_button", theme.create_button()),
        ("create_label", theme.create_label()),
        ("create_text_box", theme.create_text_box()),
        ("create_form", theme.create_form().to_json().to_string()),
    ]
}
