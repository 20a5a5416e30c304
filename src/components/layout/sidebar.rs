use common::{
    Icon, NavEntry, NavPanelView, ShellAction, BRAND_MARK, BRAND_NAME, NAV_ENTRIES, SYSTEM_STATUS,
};
use yew::prelude::*;
use crate::icons::IconGlyph;

fn nav_item(entry: &NavEntry, show_labels: bool) -> Html {
    let state_classes = if entry.active {
        classes!("bg-blue-600/10", "text-blue-400", "font-bold", "border", "border-blue-500/20")
    } else {
        classes!("text-slate-400", "hover:text-white", "hover:bg-slate-800/50")
    };

    // Entries do not navigate anywhere
    html! {
        <button
            type="button"
            key={entry.label}
            class={classes!(
                "flex", "items-center", "gap-4", "w-full", "p-4", "rounded-2xl", "transition-all",
                (!show_labels).then_some("justify-center"),
                state_classes
            )}
            title={(!show_labels).then_some(entry.label)}
            aria-current={entry.active.then_some("page")}
            data-nav={entry.icon.key()}
        >
            <IconGlyph icon={entry.icon} class="text-lg w-6 text-center" />
            if show_labels {
                <span>{entry.label}</span>
            }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavContentProps {
    pub show_labels: bool,
}

/// Brand mark, navigation entries and status indicator.
#[function_component(NavContent)]
pub fn nav_content(props: &NavContentProps) -> Html {
    let show_labels = props.show_labels;

    let status = if show_labels {
        html! {
            <div class="p-4 bg-slate-800/30 rounded-2xl border border-slate-700/50 mt-auto">
                <p class="text-xs text-slate-500 font-bold uppercase mb-1">{"Status"}</p>
                <p class="text-sm text-emerald-400 flex items-center gap-2 font-medium">
                    <span class="w-2 h-2 bg-emerald-400 rounded-full animate-pulse"></span>
                    {SYSTEM_STATUS}
                </p>
            </div>
        }
    } else {
        html! {
            <div class="mt-auto flex justify-center" title={SYSTEM_STATUS}>
                <span class="w-2 h-2 bg-emerald-400 rounded-full animate-pulse"></span>
            </div>
        }
    };

    html! {
        <>
            <div class={classes!("flex", "items-center", "gap-3", "mb-12", (!show_labels).then_some("justify-center"))}>
                <div class="w-10 h-10 shrink-0 bg-blue-600 rounded-xl flex items-center justify-center shadow-lg shadow-blue-500/30 font-bold text-lg">
                    {BRAND_MARK}
                </div>
                if show_labels {
                    <h1 class="text-xl font-black tracking-tight uppercase">{BRAND_NAME}</h1>
                }
            </div>
            <nav class="space-y-2 flex-1">
                { for NAV_ENTRIES.iter().map(|entry| nav_item(entry, show_labels)) }
            </nav>
            { status }
        </>
    }
}

pub fn collapse_toggle_action() -> ShellAction {
    ShellAction::ToggleCollapsed
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub view: NavPanelView,
    pub on_action: Callback<ShellAction>,
}

/// Navigation panel docked at the left edge.
#[function_component(Sidebar)]
pub fn sidebar(props: &Props) -> Html {
    let view = props.view;
    let padding = if view.show_labels { "p-8" } else { "px-4 py-8" };

    let toggle = if view.collapse_toggle {
        let (icon, label) = if view.show_labels {
            (Icon::ChevronLeft, "Collapse navigation")
        } else {
            (Icon::ChevronRight, "Expand navigation")
        };
        let onclick = props.on_action.reform(|_: MouseEvent| collapse_toggle_action());
        html! {
            <button
                type="button"
                aria-label={label}
                aria-expanded={view.show_labels.to_string()}
                class="mb-6 flex items-center justify-center w-full p-3 text-slate-400 hover:text-white hover:bg-slate-800/50 rounded-2xl transition-all"
                onclick={onclick}
            >
                <IconGlyph icon={icon} />
            </button>
        }
    } else {
        html! {}
    };

    html! {
        <aside
            data-panel="static-nav"
            data-width={view.width.px().to_string()}
            class={classes!(
                view.width.css_class(),
                padding,
                "bg-[#0f172a]", "text-white", "flex", "flex-col", "shrink-0", "shadow-2xl",
                "transition-all", "duration-300"
            )}
        >
            { toggle }
            <NavContent show_labels={view.show_labels} />
        </aside>
    }
}
