//! Element cache keyed by logical page role.
//!
//! The runtime registers each element as it mounts. Once the page is ready the
//! cache is sealed: later registrations are ignored and lookups are read-only.
//! Only the container and the title are required; every other role is
//! optional and handlers skip their effect when it is absent.

use std::collections::HashMap;
use std::fmt;

use crate::error::{PageError, PageResult};

/// Logical role of a page element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRole {
    Container,
    Title,
    Subtitle,
    Action,
    Body,
    ParticleHost,
}

impl ElementRole {
    /// Roles without which the page cannot initialize.
    pub const REQUIRED: [ElementRole; 2] = [ElementRole::Container, ElementRole::Title];

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementRole::Container => "container",
            ElementRole::Title => "title",
            ElementRole::Subtitle => "subtitle",
            ElementRole::Action => "action",
            ElementRole::Body => "body",
            ElementRole::ParticleHost => "particle-host",
        }
    }
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map from role to a located element handle.
///
/// Generic over the handle so the runtime can store mounted webview nodes
/// while tests store plain markers.
#[derive(Debug, Clone)]
pub struct ElementCache<E> {
    elements: HashMap<ElementRole, E>,
    sealed: bool,
}

impl<E> Default for ElementCache<E> {
    fn default() -> Self {
        Self {
            elements: HashMap::new(),
            sealed: false,
        }
    }
}

impl<E> ElementCache<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an element for a role. Returns `false` once the cache is sealed.
    pub fn register(&mut self, role: ElementRole, element: E) -> bool {
        if self.sealed {
            return false;
        }
        self.elements.insert(role, element);
        true
    }

    /// Verify the required roles and freeze the cache.
    ///
    /// Fails with the first missing required role; the cache stays unsealed in
    /// that case so the caller can report what is present.
    pub fn seal(&mut self) -> PageResult<()> {
        for role in ElementRole::REQUIRED {
            if !self.elements.contains_key(&role) {
                return Err(PageError::MissingElement(role));
            }
        }
        self.sealed = true;
        Ok(())
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn get(&self, role: ElementRole) -> Option<&E> {
        self.elements.get(&role)
    }

    /// Look up a role that must be present.
    pub fn require(&self, role: ElementRole) -> PageResult<&E> {
        self.elements
            .get(&role)
            .ok_or(PageError::MissingElement(role))
    }

    pub fn contains(&self, role: ElementRole) -> bool {
        self.elements.contains_key(&role)
    }

    /// Roles currently located, in no particular order.
    pub fn roles(&self) -> impl Iterator<Item = ElementRole> + '_ {
        self.elements.keys().copied()
    }
}
