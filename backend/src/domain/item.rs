//! Item data model.
//!
//! An [`Item`] is a named catalogue entry with an optional price and quantity.
//! Identifiers are assigned by the store and never change afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors raised when constructing item primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemValidationError {
    /// Identifiers start at 1.
    #[error("item id must be positive")]
    ZeroId,
    /// Names must contain at least one non-whitespace character.
    #[error("item name must not be blank")]
    BlankName,
}

/// Store-assigned item identifier.
///
/// ## Invariants
/// - Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ItemId(u64);

impl ItemId {
    /// Validate and wrap a raw identifier.
    ///
    /// # Examples
    /// ```
    /// use item_service::domain::ItemId;
    ///
    /// assert_eq!(ItemId::new(3).expect("positive id").get(), 3);
    /// assert!(ItemId::new(0).is_err());
    /// ```
    pub fn new(raw: u64) -> Result<Self, ItemValidationError> {
        if raw == 0 {
            return Err(ItemValidationError::ZeroId);
        }
        Ok(Self(raw))
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ItemId> for u64 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl TryFrom<u64> for ItemId {
    type Error = ItemValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Non-blank item name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Validate and construct a name. Surrounding whitespace is preserved;
    /// only all-blank input is rejected.
    ///
    /// # Examples
    /// ```
    /// use item_service::domain::ItemName;
    ///
    /// assert_eq!(ItemName::new("itemA").expect("valid").as_str(), "itemA");
    /// assert!(ItemName::new("   ").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, ItemValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ItemValidationError::BlankName);
        }
        Ok(Self(value))
    }

    /// Borrow the name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = ItemValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Field values for creating or overwriting an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub name: ItemName,
    pub price: Option<i32>,
    pub quantity: Option<i32>,
}

impl ItemDraft {
    /// Build a draft from already validated parts.
    pub fn new(name: ItemName, price: Option<i32>, quantity: Option<i32>) -> Self {
        Self {
            name,
            price,
            quantity,
        }
    }
}

/// Stored item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: ItemId,
    name: ItemName,
    price: Option<i32>,
    quantity: Option<i32>,
}

impl Item {
    /// Materialise a draft under the given identifier.
    pub fn new(id: ItemId, draft: ItemDraft) -> Self {
        let ItemDraft {
            name,
            price,
            quantity,
        } = draft;
        Self {
            id,
            name,
            price,
            quantity,
        }
    }

    /// Overwrite every mutable field; the identifier is untouched.
    pub fn apply(&mut self, draft: ItemDraft) {
        self.name = draft.name;
        self.price = draft.price;
        self.quantity = draft.quantity;
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn price(&self) -> Option<i32> {
        self.price
    }

    pub fn quantity(&self) -> Option<i32> {
        self.quantity
    }
}
