use std::rc::Rc;

use futures::FutureExt;
use yew::prelude::*;

use crate::config::{BackendConfig, CONFIG};
use crate::hooks::use_polling;
use crate::models::{MetricKind, MetricReading};
use crate::polling::{Fetcher, PollKey};
use crate::services::RpcClient;

/// Fetcher de un contador RPC
pub fn rpc_fetcher(client: RpcClient, kind: MetricKind) -> Fetcher<i64> {
    Rc::new(move || {
        let client = client.clone();
        async move { client.call_scalar(kind.rpc_name()).await }.boxed_local()
    })
}

#[hook]
pub fn use_metric(kind: MetricKind, backend: BackendConfig) -> MetricReading<i64> {
    let client = RpcClient::new(&backend, CONFIG.network_timeout_ms());
    let key = PollKey {
        name: kind.rpc_name(),
        source: backend.url,
        interval_ms: CONFIG.poll_interval_ms,
    };
    use_polling(key, rpc_fetcher(client, kind), 0)
}

#[hook]
pub fn use_today_total_orders(backend: BackendConfig) -> MetricReading<i64> {
    use_metric(MetricKind::TotalOrders, backend)
}

#[hook]
pub fn use_today_work_cancel(backend: BackendConfig) -> MetricReading<i64> {
    use_metric(MetricKind::WorkCancelled, backend)
}

#[hook]
pub fn use_today_work_fail(backend: BackendConfig) -> MetricReading<i64> {
    use_metric(MetricKind::WorkFailed, backend)
}

#[hook]
pub fn use_today_work_complete(backend: BackendConfig) -> MetricReading<i64> {
    use_metric(MetricKind::WorkCompleted, backend)
}

/// Las cuatro lecturas del día, en el orden de `MetricKind::ALL`
#[derive(Clone, PartialEq, Debug)]
pub struct TodayMetrics {
    pub total_orders: MetricReading<i64>,
    pub completed: MetricReading<i64>,
    pub failed: MetricReading<i64>,
    pub cancelled: MetricReading<i64>,
}

impl TodayMetrics {
    pub fn get(&self, kind: MetricKind) -> &MetricReading<i64> {
        match kind {
            MetricKind::TotalOrders => &self.total_orders,
            MetricKind::WorkCompleted => &self.completed,
            MetricKind::WorkFailed => &self.failed,
            MetricKind::WorkCancelled => &self.cancelled,
        }
    }

    /// Porcentaje de `kind` sobre el total de pedidos (None sin pedidos)
    pub fn share_of_orders(&self, kind: MetricKind) -> Option<f64> {
        let total = self.total_orders.data;
        if total <= 0 {
            return None;
        }
        Some(self.get(kind).data as f64 * 100.0 / total as f64)
    }
}

#[hook]
pub fn use_today_metrics(backend: BackendConfig) -> TodayMetrics {
    TodayMetrics {
        total_orders: use_today_total_orders(backend.clone()),
        completed: use_today_work_complete(backend.clone()),
        failed: use_today_work_fail(backend.clone()),
        cancelled: use_today_work_cancel(backend),
    }
}
