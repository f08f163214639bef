// ============================================================================
// POLLING - Recurso remoto refrescado a intervalo fijo
// ============================================================================
// Un único PollingResource<T> por métrica:
// - al montar: fetch inmediato, luego uno por intervalo
// - como mucho un fetch en vuelo (los ticks durante un fetch se omiten)
// - en error se conserva el último valor bueno y se expone el mensaje
// - al desmontar: se cancela el timer y se descartan respuestas tardías
// ============================================================================

pub mod clock;

pub use clock::{BrowserClock, Clock, Spawner, WasmSpawner};

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::error::ApiError;
use crate::models::MetricReading;

/// `Ok(None)` = el backend devolvió null
pub type FetchResult<T> = Result<Option<T>, ApiError>;
pub type Fetcher<T> = Rc<dyn Fn() -> LocalBoxFuture<'static, FetchResult<T>>>;

/// Prueba de que `begin()` aceptó el fetch
#[derive(Debug)]
pub struct FetchTicket {
    _private: (),
}

struct ResourceState<T> {
    reading: MetricReading<T>,
    default: T,
    active: bool,
    in_flight: bool,
    fetches_started: u64,
}

pub struct PollingResource<T> {
    state: Rc<RefCell<ResourceState<T>>>,
}

impl<T> Clone for PollingResource<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T> PollingResource<T> {
    pub fn deactivate(&self) {
        self.state.borrow_mut().active = false;
    }
}

impl<T: Clone> PollingResource<T> {
    pub fn new(default: T) -> Self {
        Self {
            state: Rc::new(RefCell::new(ResourceState {
                reading: MetricReading::pending(default.clone()),
                default,
                active: true,
                in_flight: false,
                fetches_started: 0,
            })),
        }
    }

    /// Marca el inicio de un fetch. `None` si está inactivo o ya hay uno en vuelo.
    pub fn begin(&self) -> Option<FetchTicket> {
        let mut state = self.state.borrow_mut();
        if !state.active || state.in_flight {
            return None;
        }
        state.in_flight = true;
        state.reading.loading = true;
        state.fetches_started += 1;
        Some(FetchTicket { _private: () })
    }

    /// Aplica el resultado de un fetch. Devuelve `false` si el recurso ya no está activo.
    pub fn complete(&self, _ticket: FetchTicket, outcome: FetchResult<T>) -> bool {
        let mut state = self.state.borrow_mut();
        state.in_flight = false;
        if !state.active {
            return false;
        }

        match outcome {
            Ok(value) => {
                let value = match value {
                    Some(v) => v,
                    None => state.default.clone(),
                };
                state.reading.data = value;
                state.reading.error = None;
                state.reading.fetched_at = Some(chrono::Utc::now());
            }
            Err(e) => {
                // data se queda con el último valor bueno
                state.reading.error = Some(e.to_string());
            }
        }
        state.reading.loading = false;
        true
    }

    pub fn is_active(&self) -> bool {
        self.state.borrow().active
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.borrow().in_flight
    }

    pub fn fetches_started(&self) -> u64 {
        self.state.borrow().fetches_started
    }

    pub fn reading(&self) -> MetricReading<T> {
        self.state.borrow().reading.clone()
    }
}

/// Identidad de un polling: si cambia, el hook suelta el anterior y arranca otro
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollKey {
    pub name: &'static str,
    /// Origen de los datos (p.ej. la URL del backend) capturado por el fetcher
    pub source: String,
    pub interval_ms: u32,
}

pub struct PollOptions<T> {
    /// Nombre para los logs (normalmente el nombre del RPC)
    pub name: &'static str,
    pub interval_ms: u32,
    pub default: T,
}

/// Mantiene vivo el polling. Al soltarlo se cancela el timer y el recurso queda inactivo.
pub struct PollingHandle<T, Timer> {
    name: &'static str,
    resource: PollingResource<T>,
    timer: Option<Timer>,
}

impl<T: Clone, Timer> PollingHandle<T, Timer> {
    pub fn resource(&self) -> &PollingResource<T> {
        &self.resource
    }

    pub fn reading(&self) -> MetricReading<T> {
        self.resource.reading()
    }
}

impl<T, Timer> Drop for PollingHandle<T, Timer> {
    fn drop(&mut self) {
        self.resource.deactivate();
        self.timer.take();
        log::debug!("🛑 [POLL] {} detenido", self.name);
    }
}

/// Arranca el polling: fetch inmediato y después uno por `interval_ms`.
/// `on_change` recibe cada cambio de estado (inicio y fin de fetch).
pub fn start_polling<T, C, S, F>(
    clock: &C,
    spawner: S,
    options: PollOptions<T>,
    fetcher: Fetcher<T>,
    on_change: F,
) -> PollingHandle<T, C::Timer>
where
    T: Clone + 'static,
    C: Clock,
    S: Spawner + 'static,
    F: Fn(MetricReading<T>) + 'static,
{
    let name = options.name;
    let resource = PollingResource::new(options.default);
    let spawner: Rc<dyn Spawner> = Rc::new(spawner);
    let on_change: Rc<dyn Fn(MetricReading<T>)> = Rc::new(on_change);

    let tick: Rc<dyn Fn()> = {
        let resource = resource.clone();
        Rc::new(move || fetch_once(name, &resource, &fetcher, &spawner, &on_change))
    };

    log::info!("⏰ [POLL] {} cada {} segundos", name, options.interval_ms / 1000);
    tick();

    let timer = clock.every(options.interval_ms, Box::new(move || tick()));

    PollingHandle {
        name,
        resource,
        timer: Some(timer),
    }
}

fn fetch_once<T: Clone + 'static>(
    name: &'static str,
    resource: &PollingResource<T>,
    fetcher: &Fetcher<T>,
    spawner: &Rc<dyn Spawner>,
    on_change: &Rc<dyn Fn(MetricReading<T>)>,
) {
    let Some(ticket) = resource.begin() else {
        if resource.is_active() {
            log::debug!("⏭️ [POLL] {}: fetch anterior en curso, tick omitido", name);
        }
        return;
    };
    on_change(resource.reading());

    let request = fetcher();
    let resource = resource.clone();
    let on_change = on_change.clone();

    spawner.spawn(Box::pin(async move {
        let outcome = request.await;
        if let Err(e) = &outcome {
            log::warn!("⚠️ [POLL] {} falló: {}", name, e);
        }
        if resource.complete(ticket, outcome) {
            on_change(resource.reading());
        } else {
            log::debug!("🗑️ [POLL] {}: respuesta tras desmontar descartada", name);
        }
    }));
}
