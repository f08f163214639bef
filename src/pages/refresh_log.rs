use std::collections::HashMap;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use yew::Reducible;

use crate::hooks::TodayMetrics;
use crate::models::MetricKind;

/// Máximo de entradas guardadas en memoria
pub const REFRESH_LOG_CAPACITY: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct RefreshEntry {
    pub at: DateTime<Utc>,
    pub kind: MetricKind,
    pub value: i64,
    pub error: Option<String>,
}

impl RefreshEntry {
    pub fn status(&self) -> &str {
        match &self.error {
            Some(error) => error,
            None => "OK",
        }
    }
}

type Seen = (Option<DateTime<Utc>>, Option<String>);

/// Historial de refrescos, más reciente primero
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RefreshLog {
    pub entries: Vec<RefreshEntry>,
    last_seen: HashMap<MetricKind, Seen>,
}

pub enum RefreshAction {
    Observe {
        metrics: TodayMetrics,
        now: DateTime<Utc>,
    },
    Clear,
}

impl RefreshLog {
    /// Añade una entrada por cada métrica cuyo último fetch terminó desde la observación anterior
    pub fn observe(&mut self, metrics: &TodayMetrics, now: DateTime<Utc>) {
        for kind in MetricKind::ALL {
            let reading = metrics.get(kind);
            if reading.loading {
                continue;
            }
            let seen = (reading.fetched_at, reading.error.clone());
            if self.last_seen.get(&kind) == Some(&seen) {
                continue;
            }
            // Un error nuevo no trae fetched_at propio
            let at = match (&reading.error, reading.fetched_at) {
                (None, Some(at)) => at,
                _ => now,
            };
            self.push(RefreshEntry {
                at,
                kind,
                value: reading.data,
                error: reading.error.clone(),
            });
            self.last_seen.insert(kind, seen);
        }
    }

    pub fn push(&mut self, entry: RefreshEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(REFRESH_LOG_CAPACITY);
    }

    pub fn filtered(&self, kind: Option<MetricKind>) -> Vec<&RefreshEntry> {
        self.entries
            .iter()
            .filter(|e| kind.map_or(true, |k| e.kind == k))
            .collect()
    }
}

impl Reducible for RefreshLog {
    type Action = RefreshAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RefreshAction::Observe { metrics, now } => next.observe(&metrics, now),
            RefreshAction::Clear => next.entries.clear(),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
