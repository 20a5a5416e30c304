use common::{KpiEntry, KPI_DELTA};
use yew::prelude::*;
use crate::icons::IconGlyph;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub kpis: &'static [KpiEntry],
}

fn kpi_card(kpi: &KpiEntry) -> Html {
    let badge_style = format!("background-color: {}; color: {};", kpi.background, kpi.color);

    html! {
        <div key={kpi.label} class="bg-white p-7 rounded-[32px] border border-slate-200/60 shadow-sm hover:shadow-xl hover:shadow-blue-500/5 transition-all group" data-kpi={kpi.label}>
            <div class="flex justify-between items-start mb-6">
                <div style={badge_style} class="p-3 rounded-2xl group-hover:scale-110 transition-transform duration-300">
                    <IconGlyph icon={kpi.icon} class="text-2xl w-7 text-center" />
                </div>
                <span class="text-xs font-black text-emerald-500 bg-emerald-50 px-2 py-1 rounded-lg">{KPI_DELTA}</span>
            </div>
            <p class="text-slate-400 text-xs font-black uppercase tracking-[0.1em] mb-1">{kpi.label}</p>
            <h3 class="text-3xl font-black text-slate-900 tracking-tighter">{kpi.value}</h3>
        </div>
    }
}

/// One card per KPI, in dataset order.
#[function_component(Stats)]
pub fn stats(props: &Props) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4 md:gap-8">
            { for props.kpis.iter().map(kpi_card) }
        </div>
    }
}
