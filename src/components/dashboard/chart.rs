use common::{regional_chart, trend_chart, Dataset, GROWTH_LABEL, TOP_REGION_LABEL};
use yew::prelude::*;
use crate::components::shared::{ErrorDisplay, PlotlyChart};

const TREND_CHART_HEIGHT_PX: u32 = 420;
const REGIONAL_CHART_HEIGHT_PX: u32 = 350;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub dataset: &'static Dataset,
    /// Width of the docked navigation panel, 0 when there is none.
    #[prop_or_default]
    pub nav_width_px: u32,
}

#[function_component(TrendChart)]
pub fn trend_chart_card(props: &Props) -> Html {
    let spec = use_memo(props.dataset, |dataset| trend_chart(dataset).map_err(|e| e.to_string()));

    let chart = match &*spec {
        Ok(spec) => html! {
            <PlotlyChart div_id="chart-revenue-budget" spec={spec.clone()} height_px={TREND_CHART_HEIGHT_PX} reflow_key={props.nav_width_px} />
        },
        Err(message) => {
            log::error!("Trend chart unavailable: {}", message);
            html! { <ErrorDisplay message={message.clone()} height_px={Some(TREND_CHART_HEIGHT_PX)} /> }
        }
    };

    html! {
        <div class="xl:col-span-2 bg-white p-6 md:p-8 rounded-[40px] border border-slate-200/60 shadow-sm">
            <div class="flex flex-wrap items-center justify-between gap-4 mb-8">
                <div>
                    <h3 class="text-xl font-black text-slate-900 tracking-tight">{"Revenue vs. Budget"}</h3>
                    <p class="text-sm text-slate-400 font-medium">{"Monthly performance tracking"}</p>
                </div>
                <div class="flex gap-4 text-xs font-bold">
                    <div class="flex items-center gap-2"><span class="w-3 h-3 bg-blue-600 rounded-full"></span>{"ACTUAL"}</div>
                    <div class="flex items-center gap-2"><span class="w-3 h-3 bg-slate-200 rounded-full"></span>{"BUDGET"}</div>
                </div>
            </div>
            { chart }
        </div>
    }
}

#[function_component(RegionalShareChart)]
pub fn regional_share_chart(props: &Props) -> Html {
    let spec = use_memo(props.dataset, |dataset| regional_chart(dataset));

    html! {
        <div class="bg-white p-6 md:p-8 rounded-[40px] border border-slate-200/60 shadow-sm">
            <h3 class="text-xl font-black text-slate-900 tracking-tight mb-2">{"Regional Share"}</h3>
            <p class="text-sm text-slate-400 font-medium mb-8">{"Sales by Territory"}</p>
            <PlotlyChart div_id="chart-regional-share" spec={(*spec).clone()} height_px={REGIONAL_CHART_HEIGHT_PX} reflow_key={props.nav_width_px} />
            // Legend figures are fixed text, not aggregates of the dataset
            <div class="mt-6 pt-6 border-t border-slate-100 grid grid-cols-2 gap-4">
                <div class="text-center">
                    <p class="text-xs text-slate-400 font-bold uppercase">{"Top Region"}</p>
                    <p class="font-black text-slate-900">{TOP_REGION_LABEL}</p>
                </div>
                <div class="text-center">
                    <p class="text-xs text-slate-400 font-bold uppercase">{"Growth"}</p>
                    <p class="font-black text-emerald-500">{GROWTH_LABEL}</p>
                </div>
            </div>
        </div>
    }
}
