//! HTML view handlers under `/product`.
//!
//! Handlers return a `ViewOutcome` instead of building responses inline; the
//! conversion to HTTP happens once, in `IntoResponse`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use tracing::error;

use super::extract::ViewProductId;
use super::pages;
use crate::product::{Product, ProductForm};
use crate::service::{ProductService, ServiceError};
use crate::store::ProductStore;

const INDEX: &str = "/product";

/// Body of the 400 returned when a create form does not validate.
pub const INVALID_PRODUCT_MESSAGE: &str = "Product not Valid.";

type Service<S> = State<Arc<ProductService<S>>>;

/// Result of a view request.
#[derive(Debug)]
pub enum ViewOutcome {
    /// A rendered page.
    Page(String),
    /// Post/redirect/get: send the browser elsewhere.
    Redirect(&'static str),
    /// The submitted input was rejected.
    Invalid { status: StatusCode, body: String },
    /// The addressed product does not exist (or the form addressed another).
    NotFound,
    /// The store failed.
    Failed(ServiceError),
}

impl ViewOutcome {
    fn render<T>(result: Result<T, ServiceError>, page: impl FnOnce(T) -> String) -> Self {
        match result {
            Ok(value) => ViewOutcome::Page(page(value)),
            Err(e) => e.into(),
        }
    }

    fn redirect_on_success<T>(result: Result<T, ServiceError>) -> Self {
        match result {
            Ok(_) => ViewOutcome::Redirect(INDEX),
            Err(e) => e.into(),
        }
    }
}

impl From<ServiceError> for ViewOutcome {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_)
            | ServiceError::UnknownId(_)
            | ServiceError::IdentityMismatch { .. } => ViewOutcome::NotFound,
            ServiceError::Validation(_) => ViewOutcome::Invalid {
                status: StatusCode::BAD_REQUEST,
                body: INVALID_PRODUCT_MESSAGE.to_string(),
            },
            ServiceError::BadRequest(reason) => ViewOutcome::Invalid {
                status: StatusCode::BAD_REQUEST,
                body: reason,
            },
            e @ ServiceError::Store(_) => ViewOutcome::Failed(e),
        }
    }
}

impl IntoResponse for ViewOutcome {
    fn into_response(self) -> Response {
        match self {
            ViewOutcome::Page(html) => Html(html).into_response(),
            ViewOutcome::Redirect(to) => Redirect::to(to).into_response(),
            ViewOutcome::Invalid { status, body } => (status, body).into_response(),
            ViewOutcome::NotFound => {
                (StatusCode::NOT_FOUND, Html(pages::not_found())).into_response()
            }
            ViewOutcome::Failed(e) => {
                error!(error = %e, "product view request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(pages::server_error())).into_response()
            }
        }
    }
}

/// `GET /product`
pub(super) async fn index<S: ProductStore>(State(service): Service<S>) -> ViewOutcome {
    ViewOutcome::render(service.list_all().await, |products| {
        pages::index(&products)
    })
}

/// `GET /product/:id`
pub(super) async fn details<S: ProductStore>(
    State(service): Service<S>,
    ViewProductId(id): ViewProductId,
) -> ViewOutcome {
    ViewOutcome::render(service.get_by_id(id).await, |p: Product| pages::details(&p))
}

/// `GET /product/create`
pub(super) async fn create_form() -> ViewOutcome {
    ViewOutcome::Page(pages::create_form(&ProductForm::default(), None))
}

/// `POST /product/create`
pub(super) async fn create<S: ProductStore>(
    State(service): Service<S>,
    Form(form): Form<ProductForm>,
) -> ViewOutcome {
    ViewOutcome::redirect_on_success(service.create_from_form(&form).await)
}

/// `GET /product/edit/:id`
pub(super) async fn edit_form<S: ProductStore>(
    State(service): Service<S>,
    ViewProductId(id): ViewProductId,
) -> ViewOutcome {
    ViewOutcome::render(service.get_by_id(id).await, |p: Product| {
        pages::edit_form(p.id, &ProductForm::from(&p), None)
    })
}

/// `POST /product/edit/:id`: an invalid form is shown again with its errors.
pub(super) async fn edit<S: ProductStore>(
    State(service): Service<S>,
    ViewProductId(id): ViewProductId,
    Form(form): Form<ProductForm>,
) -> ViewOutcome {
    match service.update_from_form(id, &form).await {
        Ok(_) => ViewOutcome::Redirect(INDEX),
        Err(ServiceError::Validation(errors)) => {
            ViewOutcome::Page(pages::edit_form(id, &form, Some(&errors)))
        }
        Err(e) => e.into(),
    }
}

/// `GET /product/delete/:id`
pub(super) async fn delete_confirm<S: ProductStore>(
    State(service): Service<S>,
    ViewProductId(id): ViewProductId,
) -> ViewOutcome {
    ViewOutcome::render(service.get_by_id(id).await, |p: Product| {
        pages::delete_confirm(&p)
    })
}

/// `POST /product/delete/:id`
pub(super) async fn delete<S: ProductStore>(
    State(service): Service<S>,
    ViewProductId(id): ViewProductId,
) -> ViewOutcome {
    ViewOutcome::redirect_on_success(service.delete(id).await)
}
