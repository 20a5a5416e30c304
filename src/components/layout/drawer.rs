use common::{DrawerView, Icon, NavWidth, ShellAction};
use yew::prelude::*;
use super::sidebar::NavContent;
use crate::icons::IconGlyph;

/// Action sent by both the backdrop and the close button.
pub fn dismiss_action() -> ShellAction {
    ShellAction::CloseDrawer
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub view: DrawerView,
    pub on_action: Callback<ShellAction>,
}

/// Overlay navigation for narrow viewports.
///
/// When closed the panel stays mounted but is translated off-screen, hidden
/// and inert, so neither pointer nor keyboard can reach its buttons. The
/// backdrop only exists while it is open.
#[function_component(Drawer)]
pub fn drawer(props: &Props) -> Html {
    let open = props.view.open;
    let close = props.on_action.reform(|_: MouseEvent| {
        log::debug!("Drawer dismissed");
        dismiss_action()
    });

    let position = if open {
        classes!("translate-x-0")
    } else {
        classes!("-translate-x-full", "pointer-events-none", "invisible")
    };

    html! {
        <>
            if open {
                <div
                    data-panel="drawer-backdrop"
                    class="fixed inset-0 z-40 bg-slate-900/60 backdrop-blur-sm"
                    aria-hidden="true"
                    onclick={close.clone()}
                ></div>
            }
            <aside
                data-panel="drawer"
                data-state={if open { "open" } else { "closed" }}
                aria-hidden={(!open).to_string()}
                inert={(!open).then_some("")}
                class={classes!(
                    NavWidth::Expanded.css_class(),
                    "fixed", "inset-y-0", "left-0", "z-50", "p-8",
                    "bg-[#0f172a]", "text-white", "flex", "flex-col", "shadow-2xl",
                    "transition-all", "duration-300",
                    position
                )}
            >
                <button
                    type="button"
                    aria-label="Close navigation"
                    class="absolute top-8 right-6 p-2 text-slate-400 hover:text-white rounded-xl"
                    onclick={close}
                >
                    <IconGlyph icon={Icon::Close} />
                </button>
                <NavContent show_labels={true} />
            </aside>
        </>
    }
}
