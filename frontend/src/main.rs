use yew::prelude::*;

mod components;
mod logging;
mod pages;
mod theme;

use pages::team::TeamManagementPage;
use theme::{ThemeProvider, ThemeToggle, use_theme};

const TAILWIND_CSS: &str = "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css";

#[function_component(AppShell)]
fn app_shell() -> Html {
    let palette = use_theme().mode.palette();

    html! {
        <div class={classes!("min-h-screen", palette.page)}>
            <header class="flex justify-end px-6 pt-4">
                <ThemeToggle />
            </header>
            <TeamManagementPage />
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider>
            <AppShell />
        </ThemeProvider>
    }
}

fn append_stylesheet(href: &str) -> Option<()> {
    let document = web_sys::window()?.document()?;
    let link = document.create_element("link").ok()?;
    link.set_attribute("href", href).ok()?;
    link.set_attribute("rel", "stylesheet").ok()?;
    document.head()?.append_child(&link).ok()?;
    Some(())
}

fn main() {
    if let Err(e) = logging::init_tracing() {
        gloo::console::error!(format!("failed to install tracing subscriber: {}", e));
    }

    // Load Tailwind CSS
    if append_stylesheet(TAILWIND_CSS).is_none() {
        gloo::console::error!("failed to load stylesheet");
    }

    // Apply initial theme
    theme::apply_theme(theme::load_theme());

    yew::Renderer::<App>::new().render();
}
