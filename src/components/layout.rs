use yew::prelude::*;

use crate::components::{Sidebar, Topbar};
use crate::models::{shell_variant, UserInfo};

#[derive(Properties, PartialEq)]
pub struct LayoutShellProps {
    pub path: AttrValue,
    #[prop_or_default]
    pub user: Option<UserInfo>,
    pub on_logout: Callback<()>,
    #[prop_or(false)]
    pub logging_out: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Envuelve la página según la variante de su ruta; las públicas van sin chrome
#[function_component(LayoutShell)]
pub fn layout_shell(props: &LayoutShellProps) -> Html {
    let variant = shell_variant(&props.path);

    if !variant.has_chrome() {
        return html! { <>{props.children.clone()}</> };
    }

    html! {
        <div class={classes!("layout-shell", variant.css_class())}>
            <Sidebar {variant} current_path={props.path.clone()} />
            <div class="layout-main">
                <Topbar
                    {variant}
                    user={props.user.clone()}
                    on_logout={props.on_logout.clone()}
                    logging_out={props.logging_out}
                />
                <main class="layout-content">
                    {props.children.clone()}
                </main>
            </div>
        </div>
    }
}
