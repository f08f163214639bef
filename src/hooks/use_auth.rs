use yew::prelude::*;

use crate::models::SessionState;
use crate::services::auth_service;

#[derive(Clone, PartialEq, Debug, Default)]
pub struct AuthState {
    pub session: SessionState,
    pub logging_out: bool,
}

pub struct UseAuthHandle {
    pub state: UseStateHandle<AuthState>,
    pub logout: Callback<()>,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let state = use_state(|| AuthState {
        session: auth_service::current_session(),
        logging_out: false,
    });

    // Releer cookies (p.ej. al cambiar de ruta)
    let refresh = {
        let state = state.clone();
        Callback::from(move |_| {
            let session = auth_service::current_session();
            if session != state.session {
                log::info!("🔄 [AUTH] Sesión actualizada (autenticado: {})", session.is_authenticated);
                let mut new_state = (*state).clone();
                new_state.session = session;
                state.set(new_state);
            }
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            if state.logging_out {
                log::info!("👋 [AUTH] Logout ya en curso, ignorando");
                return;
            }
            let mut new_state = (*state).clone();
            new_state.logging_out = true;
            state.set(new_state);

            wasm_bindgen_futures::spawn_local(auth_service::logout());
        })
    };

    UseAuthHandle {
        state,
        logout,
        refresh,
    }
}
