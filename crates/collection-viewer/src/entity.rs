//! Collection Entities
//!
//! The item record shared by every widget and the trait the controller
//! uses to look items up by their stable id.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Core trait for anything the controller can hold
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + fmt::Debug + fmt::Display;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Stable item identifier, assigned when the default content is authored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        ItemId(id)
    }
}

/// An item with a stable id and an author-supplied payload.
///
/// The payload is flattened on the wire, so a gallery image is stored as
/// `{"id": 1, "dataUrl": "...", "description": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item<P> {
    pub id: ItemId,
    #[serde(flatten)]
    pub payload: P,
}

impl<P> Item<P> {
    pub fn new(id: impl Into<ItemId>, payload: P) -> Self {
        Self { id: id.into(), payload }
    }
}

impl<P: Clone> Entity for Item<P> {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}
