//! Worker and role models.
//!
//! Workers are the people operations get assigned to. What a worker may
//! do is not stored on the worker record itself: it is derived from the
//! roles the worker holds, each of which grants a fixed set of
//! capability flags (see [`crate::skills::SkillIndex`]).

use serde::{Deserialize, Serialize};

/// A capability flag: permission to perform one category of operation.
///
/// Capabilities map 1:1 to role permission grants. `Implementation` and
/// `Offer` both authorize the primary operation, split by project kind;
/// the remaining flags authorize their specialist category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Primary operation of an implementation project.
    Implementation,
    /// Primary operation of an offer project.
    Offer,
    /// Welding specialist operation.
    Welding,
    /// Painting specialist operation.
    Painting,
    /// Gluing specialist operation.
    Gluing,
}

impl Capability {
    /// All capabilities, in declaration order.
    pub const ALL: [Capability; 5] = [
        Capability::Implementation,
        Capability::Offer,
        Capability::Welding,
        Capability::Painting,
        Capability::Gluing,
    ];

    #[inline]
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A fixed-size set of capability flags.
///
/// Backed by a bit mask rather than a string-keyed map so that lookups
/// cannot miss on a typo. Serialized as a list of capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Capability>", into = "Vec<Capability>")]
pub struct CapabilitySet(u8);

impl CapabilitySet {
    /// Creates an empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Adds a capability, returning the updated set.
    #[must_use]
    pub fn with(mut self, capability: Capability) -> Self {
        self.grant(capability);
        self
    }

    /// Adds a capability in place.
    pub fn grant(&mut self, capability: Capability) {
        self.0 |= capability.bit();
    }

    /// Whether the set contains a capability.
    #[inline]
    pub fn contains(&self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    /// Set union.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Whether no capability is granted.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates the granted capabilities in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        let mask = self.0;
        Capability::ALL
            .into_iter()
            .filter(move |c| mask & c.bit() != 0)
    }
}

impl From<Vec<Capability>> for CapabilitySet {
    fn from(capabilities: Vec<Capability>) -> Self {
        capabilities
            .into_iter()
            .fold(Self::empty(), |set, c| set.with(c))
    }
}

impl From<CapabilitySet> for Vec<Capability> {
    fn from(set: CapabilitySet) -> Self {
        set.iter().collect()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, c| set.with(c))
    }
}

/// A role: a named bundle of capability grants.
///
/// Roles are managed outside the engine; the engine only reads the
/// grants when building the per-pass skill index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Unique role identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Capabilities this role grants.
    pub grants: CapabilitySet,
}

impl Role {
    /// Creates a role with no grants.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            grants: CapabilitySet::empty(),
        }
    }

    /// Sets the role name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a capability grant.
    pub fn with_grant(mut self, capability: Capability) -> Self {
        self.grants.grant(capability);
        self
    }
}

/// A worker on the roster.
///
/// The `is_admin` flag mirrors the surrounding application's
/// authorization model; it does not widen the worker's assignment
/// capabilities (those come from roles alone).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier. Candidate iteration is in ascending
    /// identifier order, so this also fixes tie-break behavior.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Identifiers of the roles this worker holds.
    pub role_ids: Vec<String>,
    /// Administrator flag (authorization only, no capability effect).
    pub is_admin: bool,
}

impl Worker {
    /// Creates a worker with no roles.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            role_ids: Vec::new(),
            is_admin: false,
        }
    }

    /// Sets the worker name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a role membership.
    pub fn with_role(mut self, role_id: impl Into<String>) -> Self {
        self.role_ids.push(role_id.into());
        self
    }

    /// Marks the worker as an administrator.
    pub fn as_admin(mut self) -> Self {
        self.is_admin = true;
        self
    }
}
