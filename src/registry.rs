//! # Product Family Registry
//!
//! A registry maps a discriminator (such as `"Royal"`, `"windows"` or `"3d"`)
//! to a constructor that takes a freshly built base product and returns the
//! family's product. Decorating families wrap the base and transform each
//! capability; replacing families ignore the base and build their own.
//!
//! What happens to a discriminator that matches nothing is decided per
//! registry through its [`Fallback`] policy.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::FactoryError;

/// Shared constructor turning a base product into a family product.
pub type Constructor<B, P> = Arc<dyn Fn(B) -> P + Send + Sync>;

// =============================================================================
// Fallback policy
// =============================================================================

pub enum Fallback<B, P> {
    /// Unknown discriminators fail with `UnknownDiscriminator`.
    Reject,
    /// Unknown discriminators hand back the base product unchanged.
    Base(Constructor<B, P>),
    /// Unknown discriminators resolve to the named family.
    Family(String),
}

impl<B, P> Clone for Fallback<B, P> {
    fn clone(&self) -> Self {
        match self {
            Fallback::Reject => Fallback::Reject,
            Fallback::Base(constructor) => Fallback::Base(Arc::clone(constructor)),
            Fallback::Family(name) => Fallback::Family(name.clone()),
        }
    }
}

impl<B, P> fmt::Debug for Fallback<B, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::Reject => write!(f, "Reject"),
            Fallback::Base(_) => write!(f, "Base"),
            Fallback::Family(name) => f.debug_tuple("Family").field(name).finish(),
        }
    }
}

/// Serializable subset of [`Fallback`] used by configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    Reject,
    #[default]
    Base,
}

// =============================================================================
// Registry
// =============================================================================

pub struct FamilyRegistry<B, P> {
    families: BTreeMap<String, Constructor<B, P>>,
    fallback: Fallback<B, P>,
}

impl<B, P> FamilyRegistry<B, P> {
    pub fn new() -> Self {
        Self {
            families: BTreeMap::new(),
            fallback: Fallback::Reject,
        }
    }

    /// Registers a family. A second registration under the same
    /// discriminator replaces the first.
    pub fn register<F>(mut self, discriminator: impl Into<String>, constructor: F) -> Self
    where
        F: Fn(B) -> P + Send + Sync + 'static,
    {
        self.families.insert(discriminator.into(), Arc::new(constructor));
        self
    }

    pub fn reject_unknown(mut self) -> Self {
        self.fallback = Fallback::Reject;
        self
    }

    pub fn fallback_to_family(mut self, family: impl Into<String>) -> Self {
        self.fallback = Fallback::Family(family.into());
        self
    }

    pub fn fallback(&self) -> &Fallback<B, P> {
        &self.fallback
    }

    pub fn contains(&self, discriminator: &str) -> bool {
        self.families.contains_key(discriminator)
    }

    /// Registered discriminators in sorted order.
    pub fn discriminators(&self) -> Vec<String> {
        self.families.keys().cloned().collect()
    }

    /// Resolves the constructor for `discriminator`, applying the fallback
    /// policy when no family is registered under it.
    pub fn constructor(&self, discriminator: &str) -> Result<Constructor<B, P>, FactoryError> {
        if let Some(constructor) = self.families.get(discriminator) {
            debug!(discriminator, "resolved family");
            return Ok(Arc::clone(constructor));
        }

        match &self.fallback {
            Fallback::Reject => {
                warn!(discriminator, "no family registered, rejecting");
                Err(FactoryError::unknown_discriminator(
                    discriminator,
                    self.discriminators(),
                ))
            }
            Fallback::Base(constructor) => {
                debug!(discriminator, "no family registered, using base product");
                Ok(Arc::clone(constructor))
            }
            Fallback::Family(family) => {
                debug!(
                    discriminator,
                    fallback = %family,
                    "no family registered, using default family"
                );
                self.families
                    .get(family)
                    .cloned()
                    .ok_or_else(|| FactoryError::UnknownFallbackFamily {
                        family: family.clone(),
                    })
            }
        }
    }

    /// Builds the product for `discriminator` on top of a fresh base product.
    pub fn create_family<F>(&self, discriminator: &str, base: F) -> Result<P, FactoryError>
    where
        F: FnOnce() -> B,
    {
        let constructor = self.constructor(discriminator)?;
        Ok(constructor(base()))
    }
}

impl<B, P> FamilyRegistry<B, P>
where
    B: Into<P> + 'static,
    P: 'static,
{
    pub fn fallback_to_base(mut self) -> Self {
        self.fallback = Fallback::Base(Arc::new(|base: B| base.into()));
        self
    }

    pub fn with_policy(self, policy: FallbackPolicy) -> Self {
        match policy {
            FallbackPolicy::Reject => self.reject_unknown(),
            FallbackPolicy::Base => self.fallback_to_base(),
        }
    }
}

impl<P> FamilyRegistry<(), P> {
    /// Lookup for registries that produce context values rather than
    /// decorating a base product.
    pub fn resolve(&self, discriminator: &str) -> Result<P, FactoryError> {
        self.create_family(discriminator, || ())
    }
}

impl<B, P> Default for FamilyRegistry<B, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B, P> Clone for FamilyRegistry<B, P> {
    fn clone(&self) -> Self {
        Self {
            families: self.families.clone(),
            fallback: self.fallback.clone(),
        }
    }
}

impl<B, P> fmt::Debug for FamilyRegistry<B, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FamilyRegistry")
            .field("families", &self.families.keys().collect::<Vec<_>>())
            .field("fallback", &self.fallback)
            .finish()
    }
}

/// The label-decorating transform shared by most families.
pub fn prefix_label(label: &str, value: &str) -> String {
    format!("{label}{value}")
}
