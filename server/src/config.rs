use std::env;

const DEFAULT_PUBLIC_URL: &str = "https://atelier-furniture.com";

/// Settings read from the environment (and `.env`) on top of the Leptos
/// configuration in `Cargo.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Absolute origin used for links in the sitemap, without a trailing slash.
    pub public_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let public_url = lookup("PUBLIC_URL")
            .map(|url| url.trim().trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_PUBLIC_URL.to_owned());

        Self { public_url }
    }
}
