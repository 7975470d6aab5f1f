use yew::prelude::*;

const DEFAULT_BG_COLOR: &str = "#4c6ef5";

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub label: AttrValue,
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub width: Option<AttrValue>,
    #[prop_or_default]
    pub margin: Option<AttrValue>,
    #[prop_or_default]
    pub bg_color: Option<AttrValue>,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let mut style = format!(
        "background-color: {};",
        props.bg_color.as_deref().unwrap_or(DEFAULT_BG_COLOR)
    );
    if let Some(width) = &props.width {
        style.push_str(&format!(" width: {};", width));
    }
    if let Some(margin) = &props.margin {
        style.push_str(&format!(" margin: {};", margin));
    }

    html! {
        <button
            type="button"
            class="btn"
            {style}
            onclick={props.onclick.clone()}
        >
            { props.label.clone() }
        </button>
    }
}
