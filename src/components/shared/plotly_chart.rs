use common::ChartSpec;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);

    #[wasm_bindgen(js_namespace = ["Plotly", "Plots"], js_name = resize)]
    fn resize_plot(div_id: &str);
}

// Navigation panel width transitions run for 300ms
const REFLOW_DELAY_MS: u32 = 320;

#[derive(Properties, PartialEq)]
pub struct PlotlyChartProps {
    pub div_id: AttrValue,
    pub spec: ChartSpec,
    pub height_px: u32,
    /// Anything that changes the container width without a window resize,
    /// such as the docked navigation panel width. A change triggers a reflow.
    #[prop_or_default]
    pub reflow_key: u32,
}

// Serialize to JSON and parse as a plain JS object
fn to_js(value: &serde_json::Value) -> Result<JsValue, String> {
    let json = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&json).map_err(|e| format!("{:?}", e))
}

fn draw(div_id: &str, spec: &ChartSpec) -> Result<(), String> {
    let data = to_js(&spec.data)?;
    let layout = to_js(&spec.layout)?;
    let config = to_js(&spec.config)?;
    new_plot(div_id, data, layout, config);
    Ok(())
}

/// Container that Plotly.js draws into once it is mounted.
#[function_component(PlotlyChart)]
pub fn plotly_chart(props: &PlotlyChartProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with(
        (container_ref.clone(), props.spec.clone(), props.div_id.clone()),
        move |(container_ref, spec, div_id)| {
            if container_ref.cast::<HtmlElement>().is_some() {
                log::trace!("Drawing chart {}", div_id);
                if let Err(err) = draw(div_id, spec) {
                    log::error!("Failed to draw chart {}: {}", div_id, err);
                }
            }
            || ()
        },
    );

    use_effect_with(
        (props.div_id.clone(), props.reflow_key),
        move |(div_id, reflow_key)| {
            let div_id = div_id.to_string();
            let reflow_key = *reflow_key;
            let pending = Timeout::new(REFLOW_DELAY_MS, move || {
                log::trace!("Reflowing chart {} (key {})", div_id, reflow_key);
                resize_plot(&div_id);
            });
            move || drop(pending)
        },
    );

    html! {
        <div
            ref={container_ref}
            id={props.div_id.clone()}
            class="chart-container"
            data-reflow-key={props.reflow_key.to_string()}
            style={format!("height: {}px; width: 100%;", props.height_px)}
        ></div>
    }
}
