use yew::prelude::*;

use crate::components::Avatar;
use crate::hooks::use_connection_status;
use crate::models::{ShellVariant, UserInfo};

#[derive(Properties, PartialEq)]
pub struct TopbarProps {
    pub variant: ShellVariant,
    #[prop_or_default]
    pub user: Option<UserInfo>,
    pub on_logout: Callback<()>,
    #[prop_or(false)]
    pub logging_out: bool,
}

#[function_component(Topbar)]
pub fn topbar(props: &TopbarProps) -> Html {
    let connection = use_connection_status();

    let title = match props.variant {
        ShellVariant::Monitoring => "Monitorización",
        _ => "Panel de control",
    };

    let (conn_class, conn_text, conn_title) = match &connection {
        None => ("conn-badge checking", "⏳ Comprobando", None),
        Some(report) if report.success => ("conn-badge online", "🟢 Conectado", None),
        Some(report) => ("conn-badge offline", "🔴 Sin conexión", report.error.clone()),
    };

    let onclick = {
        let cb = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let name = props.user.as_ref().and_then(|u| u.display_name()).map(|n| AttrValue::from(n.to_string()));
    let email = props.user.as_ref().and_then(|u| u.email()).map(|e| AttrValue::from(e.to_string()));

    html! {
        <header class="topbar">
            <h1 class="topbar-title">{title}</h1>
            <div class="topbar-actions">
                <span class={conn_class} title={conn_title}>{conn_text}</span>
                <Avatar name={name.clone()} email={email} />
                if let Some(name) = name {
                    <span class="topbar-user">{name}</span>
                }
                <button class="btn-logout" {onclick} disabled={props.logging_out}>
                    {if props.logging_out { "Saliendo..." } else { "⎋ Salir" }}
                </button>
            </div>
        </header>
    }
}
