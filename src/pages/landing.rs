use yew::prelude::*;

use crate::utils::{push_path, DASHBOARD_PATH, LOGIN_PATH};

fn nav_to(path: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        push_path(path);
    })
}

#[derive(Properties, PartialEq)]
pub struct LandingPageProps {
    pub is_authenticated: bool,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    html! {
        <section class="landing">
            <h1>{"Ops Dashboard"}</h1>
            <p class="landing-subtitle">{"Aprovisionamiento y monitorización de la operación diaria"}</p>
            if props.is_authenticated {
                <a class="btn-primary" href={DASHBOARD_PATH} onclick={nav_to(DASHBOARD_PATH)}>
                    {"Ir al panel"}
                </a>
            } else {
                <a class="btn-primary" href={LOGIN_PATH} onclick={nav_to(LOGIN_PATH)}>
                    {"Iniciar sesión"}
                </a>
            }
        </section>
    }
}

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="not-found">
            <h2>{"404"}</h2>
            <p>{"Esta página no existe."}</p>
            <a href={DASHBOARD_PATH} onclick={nav_to(DASHBOARD_PATH)}>{"Volver al panel"}</a>
        </section>
    }
}
