//! Server-rendered HTML pages.
//!
//! Pages are plain strings built from small fragments. Every piece of user
//! supplied text goes through [`escape`] before it reaches the markup.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;

use crate::domain::{Item, ItemId};

use super::forms::{ITEM_NAME_FIELD, ItemFormInput, PRICE_FIELD, QUANTITY_FIELD};
use super::validation::{FieldError, FieldName, error_for};

/// Escape text for safe inclusion in HTML element bodies and attributes.
///
/// # Examples
/// ```
/// use item_service::inbound::http::views::escape;
///
/// assert_eq!(escape("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
/// ```
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Wrap a rendered page in an HTML response.
pub fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

fn layout(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n<main class=\"container\">\n{content}</main>\n\
         </body>\n</html>\n",
        title = escape(title),
    )
}

fn optional_number(value: Option<i32>) -> String {
    value.map(|number| number.to_string()).unwrap_or_default()
}

pub fn index_page() -> String {
    layout(
        "Item service",
        "<h1>Item service</h1>\n<ul>\n<li><a href=\"/items\">Items</a></li>\n</ul>\n",
    )
}

pub fn item_list_page(items: &[Item]) -> String {
    let rows: String = items
        .iter()
        .map(|item| {
            format!(
                "<tr>\n<td><a href=\"/items/{id}\">{id}</a></td>\n\
                 <td><a href=\"/items/{id}\">{name}</a></td>\n<td>{price}</td>\n<td>{quantity}</td>\n</tr>\n",
                id = item.id(),
                name = escape(item.name().as_str()),
                price = optional_number(item.price()),
                quantity = optional_number(item.quantity()),
            )
        })
        .collect();
    let content = format!(
        "<h2>Items</h2>\n<p><a href=\"/items/add\">Add item</a></p>\n<table>\n<thead>\n\
         <tr><th>ID</th><th>Name</th><th>Price</th><th>Quantity</th></tr>\n</thead>\n\
         <tbody>\n{rows}</tbody>\n</table>\n"
    );
    layout("Items", &content)
}

/// Item detail page. `saved` shows the confirmation banner used after a
/// successful add.
pub fn item_detail_page(item: &Item, saved: bool) -> String {
    let banner = if saved {
        "<p class=\"status\">Saved</p>\n"
    } else {
        ""
    };
    let content = format!(
        "<h2>Item</h2>\n{banner}<dl>\n<dt>ID</dt><dd id=\"itemId\">{id}</dd>\n\
         <dt>Name</dt><dd id=\"itemName\">{name}</dd>\n\
         <dt>Price</dt><dd id=\"price\">{price}</dd>\n\
         <dt>Quantity</dt><dd id=\"quantity\">{quantity}</dd>\n</dl>\n\
         <p><a href=\"/items/{id}/edit\">Edit</a> <a href=\"/items\">Back to list</a></p>\n",
        id = item.id(),
        name = escape(item.name().as_str()),
        price = optional_number(item.price()),
        quantity = optional_number(item.quantity()),
    );
    layout("Item", &content)
}

fn input_field(
    label: &str,
    field: FieldName,
    input_type: &str,
    value: Option<&str>,
    errors: &[FieldError],
) -> String {
    let error = error_for(errors, field)
        .map(|error| {
            format!(
                "<p class=\"field-error\" data-field=\"{field}\" data-code=\"{code}\">{message}</p>\n",
                code = error.code().as_str(),
                message = escape(error.message()),
            )
        })
        .unwrap_or_default();
    format!(
        "<div>\n<label for=\"{field}\">{label}</label>\n\
         <input type=\"{input_type}\" id=\"{field}\" name=\"{field}\" value=\"{value}\">\n{error}</div>\n",
        value = escape(value.unwrap_or_default()),
    )
}

fn form_fields(form: &ItemFormInput, errors: &[FieldError]) -> String {
    let mut fields = input_field(
        "Name",
        ITEM_NAME_FIELD,
        "text",
        form.item_name.as_deref(),
        errors,
    );
    fields.push_str(&input_field(
        "Price",
        PRICE_FIELD,
        "text",
        form.price.as_deref(),
        errors,
    ));
    fields.push_str(&input_field(
        "Quantity",
        QUANTITY_FIELD,
        "text",
        form.quantity.as_deref(),
        errors,
    ));
    fields
}

pub fn add_form_page(form: &ItemFormInput, errors: &[FieldError]) -> String {
    let content = format!(
        "<h2>Add item</h2>\n<form action=\"/items/add\" method=\"post\">\n{fields}\
         <button type=\"submit\">Save</button>\n<a href=\"/items\">Cancel</a>\n</form>\n",
        fields = form_fields(form, errors),
    );
    layout("Add item", &content)
}

pub fn edit_form_page(id: ItemId, form: &ItemFormInput, errors: &[FieldError]) -> String {
    let content = format!(
        "<h2>Edit item</h2>\n<form action=\"/items/{id}/edit\" method=\"post\">\n\
         <input type=\"hidden\" id=\"id\" name=\"id\" value=\"{id}\">\n{fields}\
         <button type=\"submit\">Save</button>\n<a href=\"/items/{id}\">Cancel</a>\n</form>\n",
        fields = form_fields(form, errors),
    );
    layout("Edit item", &content)
}

pub fn not_found_page() -> String {
    layout(
        "Item not found",
        "<h2>Item not found</h2>\n<p><a href=\"/items\">Back to list</a></p>\n",
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let content = format!(
        "<h2>{status}</h2>\n<p class=\"error\">{message}</p>\n",
        status = escape(&status.to_string()),
        message = escape(message),
    );
    layout("Error", &content)
}
