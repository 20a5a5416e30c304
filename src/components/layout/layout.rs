use common::{LayoutMode, ShellAction, ShellView};
use yew::prelude::*;
use super::drawer::Drawer;
use super::navbar::Navbar;
use super::sidebar::Sidebar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub mode: LayoutMode,
    pub view: ShellView,
    pub on_action: Callback<ShellAction>,
}

/// Navigation and content side by side, filling the viewport exactly.
/// Only the content region scrolls.
#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    let view = props.view;

    let sidebar = match view.static_nav {
        Some(nav) => html! { <Sidebar view={nav} on_action={props.on_action.clone()} /> },
        None => html! {},
    };

    let drawer = match view.drawer {
        Some(drawer) => html! { <Drawer view={drawer} on_action={props.on_action.clone()} /> },
        None => html! {},
    };

    html! {
        <div class="flex h-screen w-screen bg-[#f8fafc] font-sans overflow-hidden" data-layout={props.mode.as_str()}>
            { sidebar }
            { drawer }
            <main class="flex-1 flex flex-col min-w-0 overflow-y-auto">
                <Navbar show_hamburger={view.hamburger} on_action={props.on_action.clone()} />
                <div class="p-4 md:p-10 space-y-10">
                    { for props.children.iter() }
                </div>
            </main>
        </div>
    }
}
