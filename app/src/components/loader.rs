//! This module defines the loading indicators: an inline `spinner` and a
//! full-viewport `overlay` built from it.
//!
//! Both are plain functions of their options and carry `role="status"` so
//! assistive technology announces them.

use core::str::FromStr;

use leptos::{
    html::{div, p, span},
    prelude::*,
};
use thiserror::Error;

/// Text shown when the caller does not provide one.
pub const DEFAULT_MESSAGE: &str = "Loading...";

/// Fixed spinner dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SpinnerSize {
    /// The Tailwind sizing class applied to the spinning ring.
    pub const fn class(self) -> &'static str {
        match self {
            Self::Small => "size-4",
            Self::Medium => "size-8",
            Self::Large => "size-12",
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown spinner size `{0}`, expected one of sm, md, lg")]
pub struct SpinnerSizeError(pub String);

impl FromStr for SpinnerSize {
    type Err = SpinnerSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(Self::Small),
            "md" => Ok(Self::Medium),
            "lg" => Ok(Self::Large),
            other => Err(SpinnerSizeError(other.to_string())),
        }
    }
}

fn indicator(size: SpinnerSize, label: String) -> impl IntoView {
    div()
        .class("flex flex-col gap-2 justify-center items-center")
        .child((
            span()
                .attr("aria-hidden", "true")
                .class(format!(
                    "inline-block rounded-full border-2 animate-spin border-[#c08a4b] border-t-transparent {}",
                    size.class()
                )),
            p().class("text-sm italic text-stone-300").child(label),
        ))
}

/// Renders an inline busy indicator with the text "Loading...".
pub fn spinner(size: SpinnerSize) -> impl IntoView {
    div()
        .attr("role", "status")
        .attr("aria-live", "polite")
        .class("flex justify-center items-center p-4")
        .child(indicator(size, DEFAULT_MESSAGE.to_string()))
}

/// Renders a blocking indicator covering the whole viewport.
///
/// `message` replaces the default "Loading..." text when given.
pub fn overlay(message: Option<String>) -> impl IntoView {
    let message = message.unwrap_or_else(|| DEFAULT_MESSAGE.to_string());

    div()
        .attr("role", "status")
        .attr("aria-live", "assertive")
        .attr("aria-busy", "true")
        .class("flex fixed inset-0 z-50 justify-center items-center bg-black/60 backdrop-blur-sm")
        .child(indicator(SpinnerSize::Large, message))
}
