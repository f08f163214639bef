// ============================================================================
// APP - gate de sesión + shell + página de la ruta actual
// ============================================================================

use yew::prelude::*;

use crate::components::LayoutShell;
use crate::hooks::{use_auth, use_current_path};
use crate::models::{gate, GateDecision};
use crate::pages::{
    DashboardPage, LandingPage, LoginPage, MonitoringPage, NotFoundPage, Page,
};
use crate::services::is_authenticated;
use crate::utils::push_path;

fn render_page(page: Page, is_authenticated: bool) -> Html {
    match page {
        Page::Landing => html! { <LandingPage {is_authenticated} /> },
        Page::Login => html! { <LoginPage {is_authenticated} /> },
        Page::Dashboard => html! { <DashboardPage /> },
        Page::Monitoring => html! { <MonitoringPage /> },
        Page::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let path = use_current_path();
    let auth = use_auth();

    let session = auth.state.session.clone();
    // Las cookies se leen en cada render; el estado del hook solo alimenta el chrome
    let authenticated = is_authenticated();
    let decision = gate(&path, authenticated);

    // Releer cookies en cada cambio de ruta
    {
        let refresh = auth.refresh.clone();
        use_effect_with(path.clone(), move |_| {
            refresh.emit(());
            || ()
        });
    }

    {
        let path = path.clone();
        use_effect_with(decision, move |decision| {
            if let GateDecision::Redirect(target) = *decision {
                log::info!("🔒 [GATE] {} requiere sesión, redirigiendo a {}", path, target);
                push_path(target);
            }
            || ()
        });
    }

    if decision != GateDecision::Render {
        return html! {
            <div class="gate-redirect">{"Redirigiendo..."}</div>
        };
    }

    html! {
        <LayoutShell
            path={path.clone()}
            user={session.user.clone()}
            on_logout={auth.logout.clone()}
            logging_out={auth.state.logging_out}
        >
            {render_page(Page::for_path(&path), authenticated)}
        </LayoutShell>
    }
}
