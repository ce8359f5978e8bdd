use app::components::loader::{DEFAULT_MESSAGE, SpinnerSize, overlay, spinner};
use leptos::prelude::*;

#[cfg(test)]
mod loading_indicator_tests {

    use super::*;

    fn render(view: impl IntoView + 'static) -> String {
        Owner::new().with(|| view.to_html())
    }

    #[test]
    fn test_spinner_sizes_map_to_fixed_classes() {
        let cases = [
            ("sm", "size-4"),
            ("md", "size-8"),
            ("lg", "size-12"),
        ];
        for (token, class) in cases {
            let size: SpinnerSize = token.parse().unwrap();
            let html = render(spinner(size));
            assert!(html.contains(class), "{token} should render {class}: {html}");
        }
    }

    #[test]
    fn test_spinner_always_announces_loading() {
        for size in [SpinnerSize::Small, SpinnerSize::Medium, SpinnerSize::Large] {
            let html = render(spinner(size));
            assert!(html.contains(r#"role="status""#));
            assert!(html.contains(DEFAULT_MESSAGE));
        }
    }

    #[test]
    fn test_spinner_is_pure() {
        assert_eq!(
            render(spinner(SpinnerSize::Large)),
            render(spinner(SpinnerSize::Large))
        );
    }

    #[test]
    fn test_overlay_messages() {
        let default = render(overlay(None));
        assert!(default.contains("Loading..."));
        assert!(default.contains(r#"role="status""#));

        let custom = render(overlay(Some("Saving your design".to_string())));
        assert!(custom.contains("Saving your design"));
        assert!(custom.contains(r#"role="status""#));
    }

    #[test]
    fn test_overlay_composes_large_spinner() {
        let html = render(overlay(None));
        assert!(html.contains(SpinnerSize::Large.class()));
        assert!(html.contains("animate-spin"));
    }
}
