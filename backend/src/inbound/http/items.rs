//! Item page handlers.
//!
//! ```text
//! GET  /items                 list
//! GET  /items/add             empty add form
//! POST /items/add             add, then 302 to /items/{id}?status=true
//! GET  /items/{id}            detail
//! GET  /items/{id}/edit       pre-filled edit form
//! POST /items/{id}/edit       update, then 302 to /items/{id}
//! ```
//!
//! Validation failures re-render the originating form with status 200.
//! Unknown identifiers render the not-found page with status 404.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::debug;

use crate::domain::{ErrorCode, ItemId};

use super::HttpResult;
use super::forms::ItemFormInput;
use super::state::HttpState;
use super::views;

/// Query string accepted by the detail page.
#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    #[serde(default)]
    pub status: Option<String>,
}

impl DetailQuery {
    fn saved(&self) -> bool {
        self.status.as_deref() == Some("true")
    }
}

/// Register every item route. `/items/add` must precede `/items/{id}`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use item_service::inbound::http::items;
///
/// let _app = App::new().configure(items::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(list_items)
        .service(add_form)
        .service(add_item)
        .service(item_detail)
        .service(edit_form)
        .service(edit_item);
}

fn not_found() -> HttpResponse {
    views::html(StatusCode::NOT_FOUND, views::not_found_page())
}

fn redirect(location: String) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Identifiers that are zero or overflow `u64` can never exist in the store.
fn parse_id(raw: &str) -> Option<ItemId> {
    raw.parse::<u64>()
        .ok()
        .and_then(|value| ItemId::new(value).ok())
}

/// Landing page.
#[get("/")]
pub async fn index() -> HttpResponse {
    views::html(StatusCode::OK, views::index_page())
}

/// List every item.
#[get("/items")]
pub async fn list_items(state: web::Data<HttpState>) -> HttpResult<HttpResponse> {
    let items = state.items_query.list_items().await?;
    Ok(views::html(StatusCode::OK, views::item_list_page(&items)))
}

/// Show one item.
#[get("/items/{id:\\d+}")]
pub async fn item_detail(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<DetailQuery>,
) -> HttpResult<HttpResponse> {
    let Some(id) = parse_id(&path) else {
        return Ok(not_found());
    };
    match state.items_query.find_item(id).await? {
        Some(item) => Ok(views::html(
            StatusCode::OK,
            views::item_detail_page(&item, query.saved()),
        )),
        None => Ok(not_found()),
    }
}

/// Empty add form.
#[get("/items/add")]
pub async fn add_form() -> HttpResponse {
    views::html(
        StatusCode::OK,
        views::add_form_page(&ItemFormInput::default(), &[]),
    )
}

/// Validate and store a new item.
#[post("/items/add")]
pub async fn add_item(
    state: web::Data<HttpState>,
    form: web::Form<ItemFormInput>,
) -> HttpResult<HttpResponse> {
    let form = form.into_inner();
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            debug!(error_count = errors.len(), "add form rejected");
            return Ok(views::html(
                StatusCode::OK,
                views::add_form_page(&form, &errors),
            ));
        }
    };
    let item = state.items_command.add_item(draft).await?;
    Ok(redirect(format!("/items/{}?status=true", item.id())))
}

/// Edit form pre-filled from the stored item.
#[get("/items/{id:\\d+}/edit")]
pub async fn edit_form(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> HttpResult<HttpResponse> {
    let Some(id) = parse_id(&path) else {
        return Ok(not_found());
    };
    match state.items_query.find_item(id).await? {
        Some(item) => Ok(views::html(
            StatusCode::OK,
            views::edit_form_page(id, &ItemFormInput::from_item(&item), &[]),
        )),
        None => Ok(not_found()),
    }
}

/// Validate and overwrite an existing item.
#[post("/items/{id:\\d+}/edit")]
pub async fn edit_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Form<ItemFormInput>,
) -> HttpResult<HttpResponse> {
    let Some(id) = parse_id(&path) else {
        return Ok(not_found());
    };
    let form = form.into_inner();
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            debug!(item_id = %id, error_count = errors.len(), "edit form rejected");
            return Ok(views::html(
                StatusCode::OK,
                views::edit_form_page(id, &form, &errors),
            ));
        }
    };
    match state.items_command.update_item(id, draft).await {
        Ok(item) => Ok(redirect(format!("/items/{}", item.id()))),
        Err(error) if error.code() == ErrorCode::NotFound => Ok(not_found()),
        Err(error) => Err(error),
    }
}
