use common::Dataset;
use yew::prelude::*;
use super::chart::{RegionalShareChart, TrendChart};
use super::stats::Stats;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub dataset: &'static Dataset,
    /// Width of the docked navigation panel, 0 when there is none.
    #[prop_or_default]
    pub nav_width_px: u32,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &Props) -> Html {
    html! {
        <>
            <Stats kpis={props.dataset.kpis} />
            <div class="grid grid-cols-1 xl:grid-cols-3 gap-6 md:gap-10">
                <TrendChart dataset={props.dataset} nav_width_px={props.nav_width_px} />
                <RegionalShareChart dataset={props.dataset} nav_width_px={props.nav_width_px} />
            </div>
        </>
    }
}
