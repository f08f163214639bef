use yew::prelude::*;

use crate::components::{format_count, format_percent, CardColor, KpiCard, TrendType};
use crate::config::{BackendConfig, CONFIG};
use crate::error::ConfigError;
use crate::hooks::{use_today_metrics, TodayMetrics};
use crate::models::MetricKind;

pub fn card_color(kind: MetricKind) -> CardColor {
    match kind {
        MetricKind::TotalOrders => CardColor::Blue,
        MetricKind::WorkCompleted => CardColor::Green,
        MetricKind::WorkFailed => CardColor::Red,
        MetricKind::WorkCancelled => CardColor::Yellow,
    }
}

/// Tendencia de una tarjeta como porcentaje del total de pedidos
pub fn card_trend(metrics: &TodayMetrics, kind: MetricKind) -> Option<(String, TrendType)> {
    if kind == MetricKind::TotalOrders {
        return None;
    }
    let share = metrics.share_of_orders(kind)?;
    let trend_type = match kind {
        MetricKind::WorkCompleted => TrendType::Up,
        _ if share > 0.0 => TrendType::Down,
        _ => TrendType::Neutral,
    };
    Some((format!("{} del total", format_percent(share)), trend_type))
}

#[derive(Properties, PartialEq)]
pub struct ConfigErrorPanelProps {
    pub error: ConfigError,
}

#[function_component(ConfigErrorPanel)]
pub fn config_error_panel(props: &ConfigErrorPanelProps) -> Html {
    html! {
        <div class="config-error-panel">
            <h3>{"⚠️ Configuración incompleta"}</h3>
            <p>{props.error.to_string()}</p>
            <p class="hint">{"Define DASHBOARD_BACKEND_URL y DASHBOARD_BACKEND_KEY en .env y recompila."}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MetricsGridProps {
    pub metrics: TodayMetrics,
}

#[function_component(MetricsGrid)]
pub fn metrics_grid(props: &MetricsGridProps) -> Html {
    html! {
        <div class="kpi-grid">
            { for MetricKind::ALL.iter().map(|&kind| {
                let reading = props.metrics.get(kind);
                let (trend, trend_type) = match card_trend(&props.metrics, kind) {
                    Some((text, trend_type)) => (Some(AttrValue::from(text)), trend_type),
                    None => (None, TrendType::Neutral),
                };
                html! {
                    <KpiCard
                        title={kind.title()}
                        value={format_count(reading.data)}
                        {trend}
                        {trend_type}
                        color={card_color(kind)}
                        loading={reading.loading}
                        stale={reading.is_stale()}
                        error={reading.error.clone().map(AttrValue::from)}
                    />
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DashboardMetricsProps {
    backend: BackendConfig,
}

#[function_component(DashboardMetrics)]
fn dashboard_metrics(props: &DashboardMetricsProps) -> Html {
    let metrics = use_today_metrics(props.backend.clone());
    html! { <MetricsGrid {metrics} /> }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    match CONFIG.backend() {
        Ok(backend) => html! {
            <section class="dashboard-page">
                <h2>{"Resumen de hoy"}</h2>
                <DashboardMetrics {backend} />
            </section>
        },
        Err(error) => html! { <ConfigErrorPanel {error} /> },
    }
}
