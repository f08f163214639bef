use yew::prelude::*;

use crate::config::CONFIG;
use crate::services::{test_connection, ConnectionReport};

/// Estado de la prueba de conexión al backend. `None` mientras se comprueba.
#[hook]
pub fn use_connection_status() -> Option<ConnectionReport> {
    let report = use_state(|| None::<ConnectionReport>);

    {
        let report = report.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = test_connection(&CONFIG).await;
                report.set(Some(result));
            });
            || ()
        });
    }

    (*report).clone()
}
