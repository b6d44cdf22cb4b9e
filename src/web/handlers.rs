//! axum request handlers.

use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use log::error;
use uuid::Uuid;

use crate::constants::{ERROR_PAGE_CONFLICT, ERROR_PAGE_NOT_FOUND, ERROR_PAGE_STORE};
use crate::service::ItemError;

use super::forms::{CreateForm, EditForm, IndexQuery};
use super::templates;
use super::AppState;

/// Failure of a request, rendered as an HTML error page.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error(transparent)]
    Item(#[from] ItemError),

    #[error("Malformed item id: {0}")]
    InvalidId(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, heading, message) = match &self {
            WebError::InvalidId(_) | WebError::Item(ItemError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Not found", ERROR_PAGE_NOT_FOUND.to_string())
            }
            WebError::Item(ItemError::ConcurrencyConflict(_)) => {
                (StatusCode::CONFLICT, "Conflict", ERROR_PAGE_CONFLICT.to_string())
            }
            WebError::Item(ItemError::Validation(message)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "Invalid input", message.clone())
            }
            WebError::Item(ItemError::StoreUnavailable(e)) => {
                error!("Store failure: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Error", ERROR_PAGE_STORE.to_string())
            }
        };

        (status, Html(templates::error_page(heading, &message))).into_response()
    }
}

fn parse_id(raw: &str) -> Result<Uuid, WebError> {
    Uuid::parse_str(raw.trim()).map_err(|_| WebError::InvalidId(raw.to_string()))
}

pub async fn index(State(state): State<AppState>, Query(query): Query<IndexQuery>) -> Result<Html<String>, WebError> {
    let params = query.into_params();
    let page = state.controller.list_page(&params).await?;
    Ok(Html(templates::index(&page, &params)))
}

pub async fn details(State(state): State<AppState>, Path(id): Path<String>) -> Result<Html<String>, WebError> {
    let item = state.controller.get_item(parse_id(&id)?).await?;
    Ok(Html(templates::details(&item)))
}

pub async fn new_form() -> Html<String> {
    Html(templates::create_form("", None, None))
}

pub async fn create(State(state): State<AppState>, Form(form): Form<CreateForm>) -> Result<Response, WebError> {
    match state.controller.create_item(form.title.clone(), form.color.clone()).await {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(ItemError::Validation(message)) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(templates::create_form(&form.title, form.color.as_deref(), Some(&message))),
        )
            .into_response()),
        Err(e) => Err(e.into()),
    }
}

pub async fn edit_form(State(state): State<AppState>, Path(id): Path<String>) -> Result<Html<String>, WebError> {
    let item = state.controller.get_item(parse_id(&id)?).await?;
    Ok(Html(templates::edit_form(&item, None)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<EditForm>,
) -> Result<Response, WebError> {
    let id = parse_id(&id)?;
    if parse_id(&form.id)? != id {
        return Err(ItemError::NotFound(id).into());
    }

    let is_completed = form.is_completed();
    match state
        .controller
        .update_item(id, form.title.clone(), form.color.clone(), is_completed)
        .await
    {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(ItemError::Validation(message)) => {
            let submitted = super::ItemView {
                id,
                title: form.title,
                is_completed,
                color: form.color,
            };
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(templates::edit_form(&submitted, Some(&message))),
            )
                .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn delete_confirm(State(state): State<AppState>, Path(id): Path<String>) -> Result<Html<String>, WebError> {
    let item = state.controller.get_item(parse_id(&id)?).await?;
    Ok(Html(templates::delete_confirm(&item)))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Redirect, WebError> {
    state.controller.delete_item(parse_id(&id)?).await?;
    Ok(Redirect::to("/"))
}

pub async fn health() -> &'static str {
    "ok"
}
