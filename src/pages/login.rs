use yew::prelude::*;

use crate::utils::{push_path, DASHBOARD_PATH, LOGIN_ENDPOINT};

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub is_authenticated: bool,
}

/// El login lo resuelve el proveedor de identidad; aquí solo se envía el formulario
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    if props.is_authenticated {
        let onclick = Callback::from(|e: MouseEvent| {
            e.prevent_default();
            push_path(DASHBOARD_PATH);
        });
        return html! {
            <section class="login-screen">
                <p>{"Ya has iniciado sesión."}</p>
                <a class="btn-primary" href={DASHBOARD_PATH} {onclick}>{"Continuar al panel"}</a>
            </section>
        };
    }

    html! {
        <section class="login-screen">
            <h2>{"Iniciar sesión"}</h2>
            <form class="login-form" method="post" action={LOGIN_ENDPOINT}>
                <label for="login-email">{"Email"}</label>
                <input id="login-email" name="email" type="email" autocomplete="username" required=true />
                <label for="login-password">{"Contraseña"}</label>
                <input id="login-password" name="password" type="password" autocomplete="current-password" required=true />
                <button type="submit" class="btn-primary">{"Entrar"}</button>
            </form>
        </section>
    }
}
