// Core application modules and components
use crate::components::{error_template, header, icons};
use chrono::{Datelike as _, Utc};
use leptos::{
    html::{body, div, footer, head, html, meta, p},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod components;
mod custom_furniture;
pub mod inquiry;
pub mod types;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            meta()
                .name("description")
                .content("Handmade custom furniture designed around your space."),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/atelier.css")
                    .build(),
            ),
            Title(
                TitleProps::builder()
                    .text("Atelier \u{2013} Custom Furniture Workshop")
                    .build(),
            ),
        )),
        body().class("bg-[#1c1917]").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <div class="overflow-auto text-stone-100 font-serif">
                {header::component}
                <main class="pt-10 pb-24 mt-16">
                    <FlatRoutes fallback=|| {
                        let mut outside_errors = Errors::default();
                        outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                        error_template::component(Some(outside_errors), None)
                    }>
                        <Route path=StaticSegment("") view=custom_furniture::component/>
                        <Route path=StaticSegment("custom-furniture") view=custom_furniture::component/>
                    </FlatRoutes>
                </main>
                {footer_component()}
            </div>
        </Router>
    }
}

fn footer_component() -> impl IntoView {
    footer()
        .class("py-6 px-4 border-t md:px-6 border-stone-800 bg-[#1c1917]")
        .child(
            div().class("flex flex-col gap-4 justify-between items-center mx-auto max-w-5xl md:flex-row").child((
                icons::component(),
                p().class("text-sm text-stone-400")
                    .child(format!("\u{a9} {} Atelier Furniture Workshop", Utc::now().year())),
            )),
        )
}
