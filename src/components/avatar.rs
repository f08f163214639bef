use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub email: Option<AttrValue>,
}

#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let initials = props
        .name
        .as_deref()
        .and_then(initials)
        .unwrap_or_else(|| "👤".to_string());
    let title = props.email.clone().or_else(|| props.name.clone());

    html! {
        <div class="avatar" title={title}>
            <span class="avatar-initials">{initials}</span>
        </div>
    }
}

/// Iniciales de hasta dos palabras, en mayúsculas
pub fn initials(name: &str) -> Option<String> {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    (!letters.is_empty()).then_some(letters)
}
