use axum::{
    http::{HeaderMap, StatusCode, header::REFERER},
    response::{Html, IntoResponse, Redirect, Response},
};
use dioxus::prelude::*;
use serde::Deserialize;
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicBool, Ordering},
};

use torneo_app::{
    SaveErrorHandler, SaveOutcome, UpdateComponent, forms::EntityForm, navigation::Navigator,
    service::EntityService,
};
use torneo_types::errors::{ApiError, ApplicationError};

use crate::{
    components::{FormContext, PageLayout, wrap_in_html},
    http::AppState,
};

/// Glue between an edit form and its pages.
pub(crate) trait FormView: EntityForm {
    /// Navigation entry highlighted on the form pages.
    const NAV: &'static str;
    /// List page, also the fallback "previous state".
    const LIST_PATH: &'static str;

    fn service(state: &AppState) -> Arc<dyn EntityService<Self::Entity>>;

    fn title(&self) -> String;

    fn render(self, title: String, context: FormContext) -> Element;
}

/// Submitted form plus the page it should return to.
#[derive(Debug, Deserialize)]
pub struct Submission<F> {
    #[serde(flatten)]
    pub form: F,
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Turns the component's "go back" into an HTTP redirect.
pub(crate) struct RedirectNavigator {
    target: String,
    navigated: AtomicBool,
}

impl RedirectNavigator {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
            navigated: AtomicBool::new(false),
        }
    }

    /// `303 See Other` to the previous page, once the component asked for it.
    pub fn redirect(&self) -> Option<Redirect> {
        self.navigated
            .load(Ordering::Acquire)
            .then(|| Redirect::to(&self.target))
    }
}

impl Navigator for RedirectNavigator {
    fn previous_state(&self) {
        self.navigated.store(true, Ordering::Release);
    }
}

/// Keeps the message of a failed save so the form can show it.
#[derive(Default)]
pub(crate) struct FlashErrorHandler {
    message: Mutex<Option<String>>,
}

impl FlashErrorHandler {
    pub fn take(&self) -> Option<String> {
        self.message
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl SaveErrorHandler for FlashErrorHandler {
    fn on_save_error(&self, error: &ApplicationError) {
        let message = t!("common.save_failed", reason = error.to_string()).to_string();
        *self.message.lock().unwrap_or_else(PoisonError::into_inner) = Some(message);
    }
}

/// Local path the user came from; anything else falls back to `default`.
pub(crate) fn return_to_from(headers: &HeaderMap, default: &str) -> String {
    let referer = headers.get(REFERER).and_then(|value| value.to_str().ok());
    let path = referer.map(|r| match r.find("://") {
        Some(scheme_end) => {
            let rest = &r[scheme_end + 3..];
            rest.find('/').map(|i| &rest[i..]).unwrap_or("/")
        }
        None => r,
    });
    sanitize_return_to(path, default)
}

/// Keeps only site-relative paths that are not themselves form pages.
pub(crate) fn sanitize_return_to(path: Option<&str>, default: &str) -> String {
    match path.map(str::trim) {
        Some(p)
            if p.starts_with('/')
                && !p.starts_with("//")
                && !p.ends_with("/new")
                && !p.ends_with("/edit") =>
        {
            p.to_string()
        }
        _ => default.to_string(),
    }
}

pub(crate) fn render_page(title: &str, nav_active: &str, content: Element) -> Html<String> {
    let body_content = dioxus_ssr::render_element(rsx! {
        PageLayout { nav_active: nav_active.to_string(), {content} }
    });
    Html(wrap_in_html(title, &body_content))
}

fn render_form<F: FormView>(form: F, context: FormContext) -> Html<String> {
    let title = form.title();
    render_page(&title, F::NAV, form.render(title.clone(), context))
}

fn error_page(status: StatusCode, nav_active: &str, message: String) -> Response {
    let content = rsx! {
        div { class: "content-box p-6 bg-white",
            p { class: "text-red-600 error", "{message}" }
        }
    };
    let title = t!("common.error");
    (status, render_page(&title, nav_active, content)).into_response()
}

pub(crate) fn failure_response(error: &ApplicationError, nav_active: &str) -> Response {
    let status = match error {
        ApplicationError::Api(ApiError::NotFound { .. }) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_GATEWAY,
    };
    error_page(status, nav_active, error.to_string())
}

fn component<F: FormView>(
    state: &AppState,
    navigator: Arc<dyn Navigator>,
) -> UpdateComponent<F> {
    UpdateComponent::new(F::service(state), navigator)
}

/// Blank form for a new entity.
pub(crate) fn new_page<F: FormView>(state: &AppState, headers: &HeaderMap) -> Response {
    let return_to = return_to_from(headers, F::LIST_PATH);
    let component = component::<F>(state, Arc::new(RedirectNavigator::new(&return_to)));
    render_form(component.edit_form(), FormContext::new(&return_to)).into_response()
}

/// Form loaded with the stored entity `id`.
pub(crate) async fn edit_page<F: FormView>(
    state: &AppState,
    id: i64,
    headers: &HeaderMap,
) -> Response {
    let return_to = return_to_from(headers, F::LIST_PATH);
    let component = component::<F>(state, Arc::new(RedirectNavigator::new(&return_to)));

    match F::service(state).find(id).await {
        Ok(response) => {
            component.update_form(&response.body);
            render_form(component.edit_form(), FormContext::new(&return_to)).into_response()
        }
        Err(e) => {
            tracing::warn!(id, "Could not load entity: {e}");
            failure_response(&e, F::NAV)
        }
    }
}

/// Validates and saves a submitted form.
pub(crate) async fn save_submission<F: FormView>(
    state: &AppState,
    submission: Submission<F>,
) -> Response {
    let Submission { form, return_to } = submission;
    let return_to = sanitize_return_to(return_to.as_deref(), F::LIST_PATH);
    let context = FormContext::new(&return_to);

    let violations = form.validate();
    if !violations.is_empty() {
        tracing::debug!(count = violations.len(), "Rejected invalid form");
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            render_form(form, context.with_validation(&violations)),
        )
            .into_response();
    }

    let navigator = Arc::new(RedirectNavigator::new(&return_to));
    let errors = Arc::new(FlashErrorHandler::default());
    let component = component::<F>(state, navigator.clone()).with_error_handler(errors.clone());
    component.set_form(form);

    match component.save().await {
        SaveOutcome::Saved(_) => navigator
            .redirect()
            .unwrap_or_else(|| Redirect::to(&return_to))
            .into_response(),
        SaveOutcome::Failed | SaveOutcome::AlreadySaving => (
            StatusCode::BAD_GATEWAY,
            render_form(component.edit_form(), context.with_failure(errors.take())),
        )
            .into_response(),
    }
}
