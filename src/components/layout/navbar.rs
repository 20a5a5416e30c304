use common::{Icon, ShellAction, DASHBOARD_SUBTITLE, DASHBOARD_TITLE};
use yew::prelude::*;
use crate::icons::IconGlyph;

/// Action sent by the hamburger button.
pub fn hamburger_action() -> ShellAction {
    ShellAction::OpenDrawer
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub show_hamburger: bool,
    pub on_action: Callback<ShellAction>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let open_drawer = props.on_action.reform(|_: MouseEvent| {
        log::debug!("Hamburger clicked");
        hamburger_action()
    });

    html! {
        <header class="h-20 shrink-0 bg-white border-b border-slate-200 px-4 md:px-10 flex items-center justify-between sticky top-0 z-10">
            <div class="flex items-center gap-4 min-w-0">
                if props.show_hamburger {
                    <button
                        type="button"
                        aria-label="Open navigation"
                        class="p-3 text-slate-500 hover:bg-slate-50 rounded-xl border border-slate-100"
                        onclick={open_drawer}
                    >
                        <IconGlyph icon={Icon::Menu} />
                    </button>
                }
                <div class="min-w-0">
                    <h2 class="text-xl md:text-2xl font-black text-slate-900 tracking-tight truncate">{DASHBOARD_TITLE}</h2>
                    <p class="hidden sm:block text-sm text-slate-400 font-medium">{DASHBOARD_SUBTITLE}</p>
                </div>
            </div>
            <div class="flex items-center gap-4">
                // Notification and export buttons are visual only
                <button
                    type="button"
                    aria-label="Notifications"
                    class="p-3 text-slate-400 hover:bg-slate-50 rounded-full transition-all border border-slate-100"
                >
                    <IconGlyph icon={Icon::Bell} />
                </button>
                <button
                    type="button"
                    class="flex items-center gap-2 bg-slate-900 text-white px-5 py-2.5 rounded-xl font-bold hover:bg-blue-600 transition-all shadow-lg shadow-slate-200"
                >
                    <IconGlyph icon={Icon::Download} />
                    <span class="hidden sm:inline">{"Export Data"}</span>
                </button>
            </div>
        </header>
    }
}
