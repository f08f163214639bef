use chrono::{DateTime, Utc};

/// Contadores del día expuestos por el backend como RPC sin argumentos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    TotalOrders,
    WorkCancelled,
    WorkFailed,
    WorkCompleted,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        MetricKind::TotalOrders,
        MetricKind::WorkCompleted,
        MetricKind::WorkFailed,
        MetricKind::WorkCancelled,
    ];

    pub fn rpc_name(&self) -> &'static str {
        match self {
            MetricKind::TotalOrders => "get_today_total_orders",
            MetricKind::WorkCancelled => "get_today_work_cancel",
            MetricKind::WorkFailed => "get_today_work_fail",
            MetricKind::WorkCompleted => "get_today_work_complete",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MetricKind::TotalOrders => "Pedidos de hoy",
            MetricKind::WorkCancelled => "Cancelados",
            MetricKind::WorkFailed => "Fallidos",
            MetricKind::WorkCompleted => "Completados",
        }
    }
}

/// Lectura reactiva de un recurso con polling
#[derive(Debug, Clone, PartialEq)]
pub struct MetricReading<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
    /// Momento del último fetch correcto (solo en memoria)
    pub fetched_at: Option<DateTime<Utc>>,
}

impl<T> MetricReading<T> {
    /// Estado antes del primer fetch
    pub fn pending(default: T) -> Self {
        Self {
            data: default,
            loading: true,
            error: None,
            fetched_at: None,
        }
    }

    /// Hay un valor de un fetch anterior pero el último falló
    pub fn is_stale(&self) -> bool {
        self.error.is_some() && self.fetched_at.is_some()
    }
}
