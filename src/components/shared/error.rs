use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub height_px: Option<u32>,
}

/// Stand-in for a panel whose content could not be prepared.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    let style = props.height_px.map(|px| format!("height: {}px;", px));

    html! {
        <div class="flex flex-col items-center justify-center gap-3 text-center" style={style} role="alert">
            <i class="fas fa-exclamation-circle text-2xl text-red-400"></i>
            <span class="font-bold text-slate-700">{"Something went wrong"}</span>
            <span class="text-sm text-slate-400">{&props.message}</span>
        </div>
    }
}
