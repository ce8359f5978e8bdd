//! Reusable UI pieces shared by the storefront pages.
//!
//! Each sub-module defines one element: the error page, the header, the
//! contact links, and the loading indicators.

pub mod error_template;
pub mod header;
pub mod icons;
pub mod loader;
