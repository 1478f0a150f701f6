//! Responsive layout state
//!
//! Buckets the viewport width into a [`ViewportClass`] and shares it through
//! context so components can pick layout variants without reading the window.

use std::fmt;
use std::str::FromStr;

use leptos::ev;
use leptos::prelude::*;

use crate::error::Error;
use crate::utils::constants::{MOBILE_MAX_WIDTH, VERY_SMALL_SCREEN_MAX_WIDTH, VIEWPORT_QUERY_PARAM};
use crate::utils::url::get_query_param;

/// Coarse classification of the viewport width
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewportClass {
    VerySmall,
    Mobile,
    #[default]
    Desktop,
}

impl ViewportClass {
    /// Classify a width in CSS pixels. Unusable widths count as desktop.
    pub fn from_width(width: f64) -> Self {
        if !width.is_finite() || width < 0.0 {
            ViewportClass::Desktop
        } else if width < VERY_SMALL_SCREEN_MAX_WIDTH {
            ViewportClass::VerySmall
        } else if width < MOBILE_MAX_WIDTH {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn is_very_small_screen(self) -> bool {
        self == ViewportClass::VerySmall
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, ViewportClass::VerySmall | ViewportClass::Mobile)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewportClass::VerySmall => "very-small",
            ViewportClass::Mobile => "mobile",
            ViewportClass::Desktop => "desktop",
        }
    }
}

impl fmt::Display for ViewportClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewportClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "very-small" => Ok(ViewportClass::VerySmall),
            "mobile" => Ok(ViewportClass::Mobile),
            "desktop" => Ok(ViewportClass::Desktop),
            _ => Err(Error::UnknownViewport(s.to_string())),
        }
    }
}

/// Global layout context
#[derive(Clone, Copy)]
pub struct MobileContext {
    viewport: RwSignal<ViewportClass>,
}

impl MobileContext {
    pub fn new(class: ViewportClass) -> Self {
        Self {
            viewport: RwSignal::new(class),
        }
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport.get()
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport.with(|class| class.is_mobile())
    }

    pub fn is_very_small_screen(&self) -> bool {
        self.viewport.with(|class| class.is_very_small_screen())
    }

    /// Reclassify `width`, notifying subscribers only when the class changes.
    ///
    /// Returns whether the class changed.
    pub fn set_width(&self, width: f64) -> bool {
        let class = ViewportClass::from_width(width);
        if self.viewport.get_untracked() == class {
            return false;
        }
        log::debug!("Viewport class changed to {} ({}px)", class, width);
        self.viewport.set(class);
        true
    }
}

fn window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

fn viewport_override() -> Option<ViewportClass> {
    let value = get_query_param(VIEWPORT_QUERY_PARAM)?;
    match value.parse() {
        Ok(class) => Some(class),
        Err(e) => {
            log::warn!("Ignoring viewport override: {}", e);
            None
        }
    }
}

/// Provide the layout context, tracking window resizes unless a
/// `?viewport=` override pins the class.
pub fn provide_mobile_context() -> MobileContext {
    let context = match viewport_override() {
        Some(class) => {
            log::info!("Viewport pinned to {}", class);
            MobileContext::new(class)
        }
        None => {
            let initial = window_width()
                .map(ViewportClass::from_width)
                .unwrap_or_default();
            let context = MobileContext::new(initial);

            let handle = window_event_listener(ev::resize, move |_| {
                if let Some(width) = window_width() {
                    context.set_width(width);
                }
            });
            on_cleanup(move || handle.remove());

            context
        }
    };

    provide_context(context);
    context
}

pub fn use_mobile_context() -> MobileContext {
    expect_context::<MobileContext>()
}
