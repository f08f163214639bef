use chrono::Utc;
use yew::prelude::*;

use crate::components::{format_count, DataTable, FilterDropdown};
use crate::config::{BackendConfig, CONFIG};
use crate::hooks::use_today_metrics;
use crate::models::MetricKind;
use crate::pages::{ConfigErrorPanel, MetricsGrid, RefreshAction, RefreshEntry, RefreshLog};
use crate::utils::TABLE_PAGE_SIZE;

pub const LOG_HEADERS: [&str; 4] = ["Hora", "Métrica", "Valor", "Estado"];

pub fn entry_row(entry: &RefreshEntry) -> Vec<AttrValue> {
    vec![
        AttrValue::from(entry.at.format("%H:%M:%S").to_string()),
        AttrValue::from(entry.kind.title()),
        AttrValue::from(format_count(entry.value)),
        AttrValue::from(entry.status().to_string()),
    ]
}

pub fn filter_label(filter: Option<MetricKind>) -> &'static str {
    filter.map_or("Todas las métricas", |kind| kind.title())
}

#[derive(Properties, PartialEq)]
struct MonitoringPanelProps {
    backend: BackendConfig,
}

#[function_component(MonitoringPanel)]
fn monitoring_panel(props: &MonitoringPanelProps) -> Html {
    let metrics = use_today_metrics(props.backend.clone());
    let refresh_log = use_reducer(RefreshLog::default);
    let filter = use_state(|| None::<MetricKind>);
    let filter_open = use_state(|| false);
    let visible = use_state(|| TABLE_PAGE_SIZE);

    {
        let dispatcher = refresh_log.dispatcher();
        use_effect_with(metrics.clone(), move |metrics| {
            dispatcher.dispatch(RefreshAction::Observe {
                metrics: metrics.clone(),
                now: Utc::now(),
            });
            || ()
        });
    }

    let entries = refresh_log.filtered(*filter);
    let total = entries.len();
    let rows: Vec<Vec<AttrValue>> = entries.into_iter().map(entry_row).collect();

    let on_toggle = {
        let filter_open = filter_open.clone();
        Callback::from(move |_| filter_open.set(!*filter_open))
    };

    let select = |choice: Option<MetricKind>| {
        let filter = filter.clone();
        let filter_open = filter_open.clone();
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            filter.set(choice);
            filter_open.set(false);
            visible.set(TABLE_PAGE_SIZE);
        })
    };

    let on_reach_end = {
        let visible = visible.clone();
        Callback::from(move |_| {
            if *visible < total {
                log::debug!("📜 [MONITOR] Cargando más filas ({} de {})", *visible, total);
                visible.set(*visible + TABLE_PAGE_SIZE);
            }
        })
    };

    let on_clear = {
        let dispatcher = refresh_log.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(RefreshAction::Clear))
    };

    html! {
        <>
            <MetricsGrid metrics={metrics} />
            <div class="monitoring-toolbar">
                <FilterDropdown label={filter_label(*filter)} open={*filter_open} {on_toggle}>
                    <button class="filter-option" onclick={select(None)}>{filter_label(None)}</button>
                    { for MetricKind::ALL.iter().map(|&kind| html! {
                        <button
                            class={classes!("filter-option", (*filter == Some(kind)).then_some("selected"))}
                            onclick={select(Some(kind))}
                        >
                            {kind.title()}
                        </button>
                    }) }
                </FilterDropdown>
                <button class="btn-secondary" onclick={on_clear}>{"Limpiar historial"}</button>
            </div>
            <DataTable
                headers={LOG_HEADERS.iter().map(|h| AttrValue::from(*h)).collect::<Vec<_>>()}
                {rows}
                visible_row_count={*visible}
                on_reach_end={Some(on_reach_end)}
                empty_message={Some(AttrValue::from("Esperando el primer refresco..."))}
            />
        </>
    }
}

#[function_component(MonitoringPage)]
pub fn monitoring_page() -> Html {
    match CONFIG.backend() {
        Ok(backend) => html! {
            <section class="monitoring-page">
                <h2>{"Monitorización en vivo"}</h2>
                <MonitoringPanel {backend} />
            </section>
        },
        Err(error) => html! { <ConfigErrorPanel {error} /> },
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn row_columns_match_headers() {
        let entry = RefreshEntry {
            at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap(),
            kind: MetricKind::WorkFailed,
            value: 1500,
            error: None,
        };
        let row = entry_row(&entry);
        assert_eq!(row.len(), LOG_HEADERS.len());
        assert_eq!(row[0].as_str(), "09:05:07");
        assert_eq!(row[1].as_str(), "Fallidos");
        assert_eq!(row[2].as_str(), "1.500");
        assert_eq!(row[3].as_str(), "OK");
    }

    #[test]
    fn filter_label_defaults_to_all() {
        assert_eq!(filter_label(None), "Todas las métricas");
        assert_eq!(filter_label(Some(MetricKind::WorkCancelled)), "Cancelados");
    }
}
