// Team Roster - Theme System
// Light / Dark modes with fixed Tailwind class sets

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::motion::{Hover, Press, button_motion};

const THEME_STORAGE_KEY: &str = "teamroster_theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    pub fn from_str(s: &str) -> Option<ThemeMode> {
        match s {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn toggled(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }
}

/// Tailwind classes for every themed surface.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub page: &'static str,
    pub panel: &'static str,
    pub card: &'static str,
    pub avatar: &'static str,
    pub avatar_icon: &'static str,
    pub muted_text: &'static str,
    pub primary_button: &'static str,
    pub icon_button: &'static str,
    pub danger_button: &'static str,
    pub cancel_button: &'static str,
    pub form_panel: &'static str,
    pub input: &'static str,
}

static LIGHT: Palette = Palette {
    page: "bg-gray-100 text-gray-900",
    panel: "bg-white",
    card: "bg-gray-50 border-gray-200",
    avatar: "bg-blue-100",
    avatar_icon: "text-blue-600",
    muted_text: "text-gray-600",
    primary_button: "bg-blue-500 text-white hover:bg-blue-600",
    icon_button: "bg-gray-200 hover:bg-gray-300",
    danger_button: "bg-red-200 hover:bg-red-300",
    cancel_button: "bg-gray-200 text-gray-900",
    form_panel: "bg-gray-100",
    input: "bg-white text-gray-900",
};

static DARK: Palette = Palette {
    page: "bg-gray-900 text-white",
    panel: "bg-gray-800",
    card: "bg-gray-700 border-gray-600",
    avatar: "bg-blue-600",
    avatar_icon: "text-white",
    muted_text: "text-gray-300",
    primary_button: "bg-blue-600 text-white hover:bg-blue-700",
    icon_button: "bg-gray-600 hover:bg-gray-500",
    danger_button: "bg-red-600 hover:bg-red-500",
    cancel_button: "bg-gray-600 text-white",
    form_panel: "bg-gray-700",
    input: "bg-gray-600 text-white",
};

/// Apply theme to the document
pub fn apply_theme(mode: ThemeMode) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(root) = document.document_element() {
                if let Ok(html) = root.dyn_into::<HtmlElement>() {
                    html.set_attribute("data-theme", mode.as_str()).ok();
                }
            }
        }
    }
}

/// Load theme from local storage or return default
pub fn load_theme() -> ThemeMode {
    LocalStorage::get::<String>(THEME_STORAGE_KEY)
        .ok()
        .and_then(|s| ThemeMode::from_str(&s))
        .unwrap_or_default()
}

pub fn save_theme(mode: ThemeMode) {
    if let Err(e) = LocalStorage::set(THEME_STORAGE_KEY, mode.as_str()) {
        gloo::console::warn!(save_failure_message(mode, &e));
    }
}

fn save_failure_message(mode: ThemeMode, err: &StorageError) -> String {
    format!("failed to save {} theme: {}", mode.as_str(), err)
}

// ===== Theme Context =====

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub mode: ThemeMode,
    pub set_theme: Callback<ThemeMode>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Html,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let mode = use_state(load_theme);

    {
        let mode = mode.clone();
        use_effect_with(*mode, move |mode| {
            apply_theme(*mode);
            || ()
        });
    }

    let set_theme = {
        let mode = mode.clone();
        Callback::from(move |new_mode: ThemeMode| {
            gloo::console::log!(format!("theme -> {}", new_mode.as_str()));
            save_theme(new_mode);
            mode.set(new_mode);
        })
    };

    let ctx = ThemeContext {
        mode: *mode,
        set_theme,
    };

    html! {
        <ContextProvider<ThemeContext> context={ctx}>
            { props.children.clone() }
        </ContextProvider<ThemeContext>>
    }
}

/// Hook to access theme context
#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found")
}

// ===== Theme Toggle =====

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme_ctx = use_theme();
    let next = theme_ctx.mode.toggled();
    let palette = theme_ctx.mode.palette();

    let onclick = {
        let set_theme = theme_ctx.set_theme.clone();
        Callback::from(move |_| set_theme.emit(next))
    };

    let icon = if theme_ctx.mode.is_dark() {
        IconKind::Sun
    } else {
        IconKind::Moon
    };

    html! {
        <button
            {onclick}
            title={format!("Switch to {} mode", next.display_name())}
            class={classes!("p-2", "rounded", button_motion(Hover::Pop, Press::Firm), palette.icon_button)}
        >
            <Icon kind={icon} class="w-5 h-5" />
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_names() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(ThemeMode::from_str("system"), None);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
        assert!(!ThemeMode::default().is_dark());
    }

    #[test]
    fn test_palettes_differ() {
        let light = ThemeMode::Light.palette();
        let dark = ThemeMode::Dark.palette();
        assert_ne!(light, dark);
        assert_eq!(dark.page, "bg-gray-900 text-white");
        assert_eq!(light.page, "bg-gray-100 text-gray-900");
        assert_eq!(dark.input, "bg-gray-600 text-white");
    }

    #[test]
    fn test_save_failure_message() {
        let err = StorageError::KeyNotFound(THEME_STORAGE_KEY.to_string());
        let msg = save_failure_message(ThemeMode::Dark, &err);
        assert!(msg.starts_with("failed to save dark theme: "));
        assert!(msg.contains(THEME_STORAGE_KEY));
    }
}
