//! Item form bodies and their validation.
//!
//! Browsers submit `application/x-www-form-urlencoded` bodies. Every field is
//! captured as raw text so a rejected submission can be echoed back verbatim.

use serde::{Deserialize, Serialize};

use crate::domain::{Item, ItemDraft, ItemName};

use super::validation::{FieldError, FieldName, blank_field_error, parse_optional_i32};

pub const ITEM_NAME_FIELD: FieldName = FieldName::new("itemName");
pub const PRICE_FIELD: FieldName = FieldName::new("price");
pub const QUANTITY_FIELD: FieldName = FieldName::new("quantity");

/// Message shown when the item name is missing or blank.
pub const BLANK_ITEM_NAME_MESSAGE: &str = "item name must not be blank";

/// Raw add/edit form body.
///
/// `id` is only present on the edit form; the path identifier is
/// authoritative, so it is accepted and otherwise ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFormInput {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
}

impl ItemFormInput {
    /// Pre-fill the form from a stored item.
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: Some(item.id().to_string()),
            item_name: Some(item.name().to_string()),
            price: item.price().map(|price| price.to_string()),
            quantity: item.quantity().map(|quantity| quantity.to_string()),
        }
    }

    /// Validate the submission, returning every field error found.
    ///
    /// # Examples
    /// ```
    /// use item_service::inbound::http::forms::ItemFormInput;
    ///
    /// let input = ItemFormInput {
    ///     item_name: Some("itemA".into()),
    ///     price: Some("10000".into()),
    ///     quantity: Some(String::new()),
    ///     ..ItemFormInput::default()
    /// };
    /// let draft = input.validate().expect("valid form");
    /// assert_eq!(draft.price, Some(10_000));
    /// assert_eq!(draft.quantity, None);
    /// ```
    pub fn validate(&self) -> Result<ItemDraft, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = ItemName::new(self.item_name.clone().unwrap_or_default())
            .map_err(|_| errors.push(blank_field_error(ITEM_NAME_FIELD, BLANK_ITEM_NAME_MESSAGE)))
            .ok();
        let price = parse_optional_i32(self.price.as_deref(), PRICE_FIELD, "price")
            .map_err(|error| errors.push(error))
            .ok()
            .flatten();
        let quantity = parse_optional_i32(self.quantity.as_deref(), QUANTITY_FIELD, "quantity")
            .map_err(|error| errors.push(error))
            .ok()
            .flatten();

        match name {
            Some(name) if errors.is_empty() => Ok(ItemDraft::new(name, price, quantity)),
            _ => Err(errors),
        }
    }
}
