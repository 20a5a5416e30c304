use common::Icon;
use yew::prelude::*;

/// Font Awesome glyph class for each icon.
const GLYPHS: [(Icon, &str); 13] = [
    (Icon::Dashboard, "fa-gauge-high"),
    (Icon::TrendingUp, "fa-arrow-trend-up"),
    (Icon::BarChart, "fa-chart-column"),
    (Icon::PieChart, "fa-chart-pie"),
    (Icon::Settings, "fa-gear"),
    (Icon::DollarSign, "fa-dollar-sign"),
    (Icon::Globe, "fa-globe"),
    (Icon::Download, "fa-download"),
    (Icon::Bell, "fa-bell"),
    (Icon::Menu, "fa-bars"),
    (Icon::Close, "fa-xmark"),
    (Icon::ChevronLeft, "fa-chevron-left"),
    (Icon::ChevronRight, "fa-chevron-right"),
];

const FALLBACK_GLYPH: &str = "fa-circle";

pub fn glyph(icon: Icon) -> &'static str {
    GLYPHS
        .iter()
        .find(|(candidate, _)| *candidate == icon)
        .map(|(_, class)| *class)
        .unwrap_or(FALLBACK_GLYPH)
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconProps) -> Html {
    html! {
        <i
            class={classes!("fas", glyph(props.icon), props.class.clone())}
            data-icon={props.icon.key()}
            aria-hidden="true"
        ></i>
    }
}
