use yew::prelude::*;

use crate::models::MetricReading;
use crate::polling::{start_polling, BrowserClock, Fetcher, PollKey, PollOptions, WasmSpawner};

/// Hook genérico: arranca el polling con el reloj del navegador y lo suelta al desmontar.
/// El fetcher solo se toma cuando cambia `key`; su `source` debe identificar lo que captura.
#[hook]
pub fn use_polling<T>(key: PollKey, fetcher: Fetcher<T>, default: T) -> MetricReading<T>
where
    T: Clone + PartialEq + 'static,
{
    let reading = use_state(|| MetricReading::pending(default.clone()));

    {
        let reading = reading.clone();
        use_effect_with(key, move |key| {
            let handle = start_polling(
                &BrowserClock,
                WasmSpawner,
                PollOptions {
                    name: key.name,
                    interval_ms: key.interval_ms,
                    default,
                },
                fetcher,
                move |snapshot| reading.set(snapshot),
            );

            move || drop(handle)
        });
    }

    (*reading).clone()
}
