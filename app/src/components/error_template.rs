//! This module defines the error page shown for unknown routes and any
//! [`AppError`] raised inside an error boundary.
//!
//! On the server the first error also decides the HTTP status of the response.

use http::status::StatusCode;
use leptos::prelude::*;
use leptos_router::components::A;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Page Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Pulls the `AppError`s out of a Leptos `Errors` collection.
///
/// Errors of other types are ignored. Falls back to [`AppError::NotFound`]
/// when nothing matches.
pub fn collect_app_errors(errors: Errors) -> Vec<AppError> {
    let found: Vec<AppError> = errors
        .into_iter()
        .filter_map(|(_key, err)| err.downcast_ref::<AppError>().cloned())
        .collect();
    if found.is_empty() {
        vec![AppError::NotFound]
    } else {
        found
    }
}

/// Renders the error page.
///
/// * `outside_errors` - errors created outside a boundary, e.g. the router fallback.
/// * `errors` - the reactive errors of an error boundary.
pub fn component(
    outside_errors: Option<Errors>,
    errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match (outside_errors, errors) {
        (Some(outside), _) => collect_app_errors(outside),
        (None, Some(signal)) => collect_app_errors(signal.get_untracked()),
        (None, None) => vec![AppError::NotFound],
    };

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let Some(response) = use_context::<ResponseOptions>() {
            response.set_status(errors[0].status_code());
        }
    }

    let heading = if errors.len() > 1 { "Errors" } else { "Error" };

    view! {
        <div class="grid place-content-center px-4 h-full antialiased">
            <h1 class="mb-6 text-center">{heading}</h1>
            {errors
                .into_iter()
                .map(|error| {
                    view! {
                        <div class="flex flex-col gap-1 justify-center items-center">
                            <h2 class="text-xl tracking-widest uppercase text-stone-400">
                                {format!("{}| {error}", error.status_code())}
                            </h2>
                            <div class="mt-6 text-center duration-200 hover:text-[#c08a4b]">
                                <A href="/">"Back to the workshop"</A>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
