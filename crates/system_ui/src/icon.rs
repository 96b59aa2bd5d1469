//! Centralized icon catalog for the calendar widgets.
//!
//! Paths follow the Fluent UI System Icons regular 24px grid so every glyph shares one viewBox and
//! renders through the single [`Icon`] component.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers.
pub enum IconName {
    /// Previous page.
    ChevronLeft,
    /// Next page.
    ChevronRight,
    /// Previous year block.
    ChevronDoubleLeft,
    /// Next year block.
    ChevronDoubleRight,
    /// Date picker trigger glyph.
    Calendar,
    /// Clear/dismiss glyph.
    Dismiss,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::ChevronDoubleLeft => "chevron-double-left",
            Self::ChevronDoubleRight => "chevron-double-right",
            Self::Calendar => "calendar",
            Self::Dismiss => "dismiss",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::ChevronLeft => {
                r#"<path d="M15.53 4.22c.3.3.3.77 0 1.06L8.81 12l6.72 6.72a.75.75 0 1 1-1.06 1.06l-7.25-7.25a.75.75 0 0 1 0-1.06l7.25-7.25c.3-.3.77-.3 1.06 0Z"/>"#
            }
            Self::ChevronRight => {
                r#"<path d="M8.47 4.22c-.3.3-.3.77 0 1.06L15.19 12l-6.72 6.72a.75.75 0 1 0 1.06 1.06l7.25-7.25a.75.75 0 0 0 0-1.06L9.53 4.22a.75.75 0 0 0-1.06 0Z"/>"#
            }
            Self::ChevronDoubleLeft => {
                r#"<path d="M11.53 4.22c.3.3.3.77 0 1.06L4.81 12l6.72 6.72a.75.75 0 1 1-1.06 1.06l-7.25-7.25a.75.75 0 0 1 0-1.06l7.25-7.25c.3-.3.77-.3 1.06 0Zm8 0c.3.3.3.77 0 1.06L12.81 12l6.72 6.72a.75.75 0 1 1-1.06 1.06l-7.25-7.25a.75.75 0 0 1 0-1.06l7.25-7.25c.3-.3.77-.3 1.06 0Z"/>"#
            }
            Self::ChevronDoubleRight => {
                r#"<path d="M4.47 4.22c-.3.3-.3.77 0 1.06L11.19 12l-6.72 6.72a.75.75 0 1 0 1.06 1.06l7.25-7.25a.75.75 0 0 0 0-1.06L5.53 4.22a.75.75 0 0 0-1.06 0Zm8 0c-.3.3-.3.77 0 1.06L19.19 12l-6.72 6.72a.75.75 0 1 0 1.06 1.06l7.25-7.25a.75.75 0 0 0 0-1.06l-7.25-7.25a.75.75 0 0 0-1.06 0Z"/>"#
            }
            Self::Calendar => {
                r#"<path d="M17.75 3A3.25 3.25 0 0 1 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25C3 4.45 4.46 3 6.25 3h11.5Zm1.75 5.5h-15v9.25c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V8.5Zm-11.75 6a1.25 1.25 0 1 1 0 2.5 1.25 1.25 0 0 1 0-2.5Zm4.25 0a1.25 1.25 0 1 1 0 2.5 1.25 1.25 0 0 1 0-2.5Zm-4.25-4a1.25 1.25 0 1 1 0 2.5 1.25 1.25 0 0 1 0-2.5Zm4.25 0a1.25 1.25 0 1 1 0 2.5 1.25 1.25 0 0 1 0-2.5Zm4.25 0a1.25 1.25 0 1 1 0 2.5 1.25 1.25 0 0 1 0-2.5Zm1.5-6H6.25c-.97 0-1.75.78-1.75 1.75V7h15v-.75c0-.97-.78-1.75-1.75-1.75Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 16px icon for inline button slots.
    #[default]
    Sm,
    /// 20px icon for header navigation.
    Md,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
        }
    }

    /// Stable size token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[component]
/// Renders an icon from the catalog as inline SVG.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    const ALL: [IconName; 6] = [
        IconName::ChevronLeft,
        IconName::ChevronRight,
        IconName::ChevronDoubleLeft,
        IconName::ChevronDoubleRight,
        IconName::Calendar,
        IconName::Dismiss,
    ];

    #[test]
    fn tokens_are_unique_and_bodies_are_paths() {
        let tokens: HashSet<&str> = ALL.iter().map(|icon| icon.token()).collect();
        assert_eq!(tokens.len(), ALL.len());
        assert!(ALL.iter().all(|icon| icon.svg_body().starts_with("<path")));
    }

    #[test]
    fn sizes_map_to_pixels() {
        assert_eq!(IconSize::default().px(), 16);
        assert_eq!(IconSize::Md.token(), "md");
    }
}
