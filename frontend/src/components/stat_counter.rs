use log::warn;
use yew::prelude::*;

use crate::config;
use crate::content::Stat;
use crate::motion::count_up::{use_count_up, CounterSpec};
use crate::motion::visibility::{use_in_view, ViewportOptions};

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub stat: Stat,
    pub start: bool,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let stat = props.stat;
    match CounterSpec::new(stat.value, config::COUNTER_DURATION_MS, stat.is_year) {
        Ok(spec) => html! { <CountingStat stat={stat} spec={spec} start={props.start} /> },
        Err(err) => {
            warn!("stat {} shown without animation: {}", stat.label, err);
            render_stat(&stat, stat.value)
        }
    }
}

#[derive(Properties, PartialEq)]
struct CountingStatProps {
    stat: Stat,
    spec: CounterSpec,
    start: bool,
}

#[function_component(CountingStat)]
fn counting_stat(props: &CountingStatProps) -> Html {
    let value = use_count_up(props.spec, props.start);
    render_stat(&props.stat, value)
}

fn render_stat(stat: &Stat, value: u32) -> Html {
    html! {
        <div class="stat-item">
            <div class="stat-value">
                { value }
                if !stat.suffix.is_empty() {
                    <span class="stat-suffix">{ stat.suffix }</span>
                }
            </div>
            <div class="stat-label">{ stat.label }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsBandProps {
    pub stats: &'static [Stat],
    #[prop_or_default]
    pub children: Children,
}

/// Grid of counters that all start once the band is 30% on screen.
#[function_component(StatsBand)]
pub fn stats_band(props: &StatsBandProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(
        node.clone(),
        Some(ViewportOptions::threshold(config::STATS_VISIBILITY_THRESHOLD)),
    );

    html! {
        <div ref={node} class="stats-band">
            <div class="stats-grid">
                { for props.stats.iter().map(|stat| html! {
                    <StatCounter key={stat.label} stat={*stat} start={in_view} />
                }) }
            </div>
            { for props.children.iter() }
        </div>
    }
}
