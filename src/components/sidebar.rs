use yew::prelude::*;

use crate::models::ShellVariant;
use crate::utils::{push_path, DASHBOARD_PATH, MONITORING_PATH};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { path: DASHBOARD_PATH, label: "Resumen", icon: "📊" },
    NavItem { path: MONITORING_PATH, label: "Monitorización", icon: "🛰️" },
];

/// Un enlace está activo en su ruta y en sus subrutas
pub fn is_active(item_path: &str, current_path: &str) -> bool {
    current_path == item_path
        || current_path
            .strip_prefix(item_path)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub variant: ShellVariant,
    pub current_path: AttrValue,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let brand = match props.variant {
        ShellVariant::Monitoring => "Ops · Monitor",
        _ => "Ops · Dashboard",
    };

    html! {
        <aside class={classes!("sidebar", props.variant.css_class())}>
            <div class="sidebar-brand">{brand}</div>
            <nav class="sidebar-nav">
                { for NAV_ITEMS.iter().map(|item| {
                    let onclick = {
                        let path = item.path;
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            push_path(path);
                        })
                    };
                    let active = is_active(item.path, &props.current_path);
                    html! {
                        <a href={item.path} class={classes!("sidebar-link", active.then_some("active"))} {onclick}>
                            <span class="sidebar-icon">{item.icon}</span>
                            <span class="sidebar-label">{item.label}</span>
                        </a>
                    }
                }) }
            </nav>
        </aside>
    }
}
