use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Event};
use yew::prelude::*;

use crate::utils::{current_path, ROUTE_CHANGED_EVENT};

/// Ruta actual; se actualiza con atrás/adelante y con `push_path`
#[hook]
pub fn use_current_path() -> String {
    let path = use_state(current_path);

    {
        let path = path.clone();
        use_effect_with((), move |_| {
            let listener = Closure::wrap(Box::new(move |_e: Event| {
                path.set(current_path());
            }) as Box<dyn FnMut(Event)>);

            if let Some(win) = window() {
                for event in ["popstate", ROUTE_CHANGED_EVENT] {
                    let _ = win.add_event_listener_with_callback(
                        event,
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }

            move || {
                if let Some(win) = window() {
                    for event in ["popstate", ROUTE_CHANGED_EVENT] {
                        let _ = win.remove_event_listener_with_callback(
                            event,
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
                drop(listener);
            }
        });
    }

    (*path).clone()
}
