//! Right-pointing arrow icon, shrunk on very small screens

use leptos::prelude::*;

use crate::state::mobile::use_mobile_context;

pub const ARROW_PATH: &str = "M2.34315 7.375C1.99797 7.375 1.71815 7.65482 1.71815 8C1.71815 8.34518 1.99797 8.625 2.34315 8.625L2.34315 7.375ZM14.0988 8.44194C14.3429 8.19786 14.3429 7.80213 14.0988 7.55806L10.1213 3.58058C9.87724 3.3365 9.48151 3.3365 9.23744 3.58058C8.99336 3.82466 8.99336 4.22039 9.23744 4.46447L12.773 8L9.23744 11.5355C8.99336 11.7796 8.99336 12.1753 9.23744 12.4194C9.48152 12.6635 9.87724 12.6635 10.1213 12.4194L14.0988 8.44194ZM2.34315 8.625L13.6569 8.625L13.6569 7.375L2.34315 7.375L2.34315 8.625Z";
pub const ARROW_FILL: &str = "#D9D9D9";

/// Rendered icon size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconDimension {
    Compact,
    Regular,
}

impl IconDimension {
    pub fn for_screen(is_very_small_screen: bool) -> Self {
        if is_very_small_screen {
            IconDimension::Compact
        } else {
            IconDimension::Regular
        }
    }

    /// Width and height share the same value
    pub fn size(self) -> &'static str {
        match self {
            IconDimension::Compact => "14",
            IconDimension::Regular => "16",
        }
    }
}

#[component]
pub fn VectorArrow() -> impl IntoView {
    let mobile = use_mobile_context();
    let size = move || IconDimension::for_screen(mobile.is_very_small_screen()).size();

    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 16 16"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d=ARROW_PATH fill=ARROW_FILL/>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::mobile::{MobileContext, ViewportClass};

    fn render(class: ViewportClass) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(MobileContext::new(class));
            view! { <VectorArrow/> }.to_html()
        })
    }

    #[test]
    fn test_dimension_for_screen() {
        assert_eq!(IconDimension::for_screen(true).size(), "14");
        assert_eq!(IconDimension::for_screen(false).size(), "16");
    }

    #[test]
    fn test_very_small_screen_renders_compact() {
        let html = render(ViewportClass::VerySmall);
        assert!(html.contains(r#"width="14""#));
        assert!(html.contains(r#"height="14""#));
        assert!(!html.contains(r#""16""#));
    }

    #[test]
    fn test_other_screens_render_regular() {
        for class in [ViewportClass::Mobile, ViewportClass::Desktop] {
            let html = render(class);
            assert!(html.contains(r#"width="16""#));
            assert!(html.contains(r#"height="16""#));
            assert!(!html.contains(r#""14""#));
        }
    }

    #[test]
    fn test_path_is_constant() {
        for class in [ViewportClass::VerySmall, ViewportClass::Desktop] {
            let html = render(class);
            assert!(html.contains(ARROW_PATH));
            assert!(html.contains(ARROW_FILL));
        }
    }

    #[test]
    fn test_rerender_is_identical() {
        assert_eq!(render(ViewportClass::VerySmall), render(ViewportClass::VerySmall));
        assert_eq!(render(ViewportClass::Desktop), render(ViewportClass::Desktop));
    }
}
