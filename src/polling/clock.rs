use futures::future::LocalBoxFuture;
use gloo_timers::callback::Interval;

/// Fuente de ticks periódicos. El timer devuelto cancela el intervalo al soltarse.
pub trait Clock {
    type Timer: 'static;

    fn every(&self, interval_ms: u32, tick: Box<dyn FnMut()>) -> Self::Timer;
}

/// Ejecuta futures locales (!Send) en el event loop
pub trait Spawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// `setInterval` del navegador vía gloo
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    type Timer = Interval;

    fn every(&self, interval_ms: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(interval_ms, tick)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WasmSpawner;

impl Spawner for WasmSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
