use common::Dataset;
use yew::prelude::*;

pub mod components;
pub mod hooks;
pub mod icons;
pub mod settings;


use components::dashboard::Dashboard;
use components::layout::layout::Layout;
use hooks::{use_viewport_width, ShellStore};
use settings::AppSettings;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub settings: AppSettings,
    /// Window width at startup, in CSS pixels.
    pub viewport_width: u32,
}

/// Root view-model: owns the shell toggle state and the tracked viewport width.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let layout_mode = props.settings.layout_mode;
    let shell = use_reducer_eq(move || ShellStore::new(layout_mode));
    let viewport_width = use_viewport_width(props.viewport_width);

    let view = shell.0.view(viewport_width, props.settings.narrow_breakpoint_px);
    log::trace!("Rendering shell {:?} at {}px", view, viewport_width);

    // Charts reflow whenever the docked panel changes width
    let nav_width_px = view.static_nav.map(|nav| nav.width.px()).unwrap_or(0);

    let on_action = {
        let shell = shell.clone();
        Callback::from(move |action| shell.dispatch(action))
    };

    html! {
        <Layout mode={layout_mode} view={view} on_action={on_action}>
            <Dashboard dataset={Dataset::fiscal_year()} nav_width_px={nav_width_px} />
        </Layout>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Read settings first, the log level comes from them
    let (settings, rejected) = AppSettings::from_environment();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Finboard Dashboard Starting ===");
    for err in &rejected {
        log::warn!("Ignoring stored setting: {}", err);
    }
    log::info!("Dashboard settings: {:?}", settings);

    let viewport_width =
        hooks::current_viewport_width().unwrap_or(settings.narrow_breakpoint_px);
    log::debug!("Initial viewport width: {}px", viewport_width);

    yew::Renderer::<App>::with_props(AppProps {
        settings,
        viewport_width,
    })
    .render();
    log::info!("Dashboard initialized successfully");
}
