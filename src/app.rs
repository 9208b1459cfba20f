use const_format::formatcp;
use leptos::*;

use crate::chart::GoogleChart;
use crate::config::Rows;
use crate::engine::Engine;

const BANNER: &str = formatcp!("google-chart {}", env!("CARGO_PKG_VERSION"));

const CHART_KINDS: [&str; 7] = ["Line", "Area", "Pie", "Column", "Timeline", "Gauge", "Bar"];

fn sample_rows() -> Rows {
    vec![
        vec!["Machine".into(), "Output".into()],
        vec!["Press".into(), 38.into()],
        vec!["Lathe".into(), 27.into()],
        vec!["Mill".into(), 21.into()],
    ]
}

#[component]
fn ChartPicker(set_kind: WriteSignal<String>) -> impl IntoView {
    view! {
        <div class="chart-picker">
            {CHART_KINDS
                .iter()
                .map(|kind| {
                    let kind = *kind;
                    view! {
                        <button on:click=move |_| set_kind.set(kind.to_owned())>{kind}</button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let engine = Engine::new();
    let (kind, set_kind) = create_signal("Line".to_owned());
    let (data, set_data) = create_signal(None::<Rows>);

    view! {
        <div class="dashboard">
            <p class="banner">{BANNER}</p>
            <ChartPicker set_kind=set_kind/>
            <p>"Chart type: " {move || kind.get()}</p>
            <button on:click=move |_| {
                set_data
                    .update(|data| {
                        *data = if data.is_some() { None } else { Some(sample_rows()) };
                    })
            }>
                "Toggle sample data"
            </button>
            <GoogleChart
                engine=engine
                title=String::from("Production overview")
                chart_type=kind
                data=data
            />
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="container">
            <Dashboard/>
        </main>
    }
}
