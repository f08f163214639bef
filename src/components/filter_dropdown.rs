use yew::prelude::*;

/// El estado abierto/cerrado lo guarda el llamador
#[derive(Properties, PartialEq)]
pub struct FilterDropdownProps {
    pub label: AttrValue,
    pub open: bool,
    pub on_toggle: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FilterDropdown)]
pub fn filter_dropdown(props: &FilterDropdownProps) -> Html {
    let onclick = {
        let cb = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(());
        })
    };

    html! {
        <div class={classes!("filter-dropdown", props.open.then_some("open"))}>
            <button class="filter-toggle" {onclick} aria-expanded={props.open.to_string()}>
                <span>{props.label.clone()}</span>
                <span class="filter-caret">{if props.open { "▴" } else { "▾" }}</span>
            </button>
            if props.open {
                <div class="filter-menu">
                    {props.children.clone()}
                </div>
            }
        </div>
    }
}
