use std::cell::RefCell;

use shared::{execute, Action, ApiError, Command, ItemState, ListUpdate, Todo};
use yew::prelude::*;

use crate::components::button::Button;
use crate::components::text_input::TextInput;
use crate::services::api::ApiService;
use crate::services::error::handle_error;

const COMPLETED_COLOR: &str = "#2ECC71";
const PENDING_COLOR: &str = "#BDC3C7";

#[derive(Properties, PartialEq)]
pub struct TodoItemProps {
    pub todo: Todo,
    pub api: ApiService,
    pub on_update: Callback<ListUpdate>,
}

#[function_component(TodoItem)]
pub fn todo_item(props: &TodoItemProps) -> Html {
    let item = use_mut_ref(|| ItemState::new(&props.todo));
    let mounted = use_mut_ref(|| true);
    let trigger = use_force_update();

    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            move || {
                *mounted.borrow_mut() = false;
            }
        });
    }

    // Applies an action locally, then sends whatever command it produced.
    // Local writes after the await are skipped once the row is gone.
    let dispatch = {
        let item = item.clone();
        let mounted = mounted.clone();
        let trigger = trigger.clone();
        let api = props.api.clone();
        let on_update = props.on_update.clone();

        Callback::from(move |action: Action| {
            tracing::debug!(id = item.borrow().id(), ?action, "Row action");
            let command = item.borrow_mut().dispatch(action);
            trigger.force_update();

            let Some(command) = command else {
                return;
            };

            let item = item.clone();
            let mounted = mounted.clone();
            let trigger = trigger.clone();
            let api = api.clone();
            let on_update = on_update.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = execute(&api, &command).await;
                let finished = finish_command(&item, *mounted.borrow(), &command, result, &on_update);

                if finished.rerender {
                    trigger.force_update();
                }
                if let Some(e) = finished.error {
                    handle_error(api.config(), &e);
                }
            });
        })
    };

    let view = RowView::new(&item.borrow(), &props.todo);

    let on_toggle = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(Action::ToggleCompletion))
    };
    let on_primary = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(Action::Primary))
    };
    let on_secondary = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(Action::Secondary))
    };
    let on_input = {
        let dispatch = dispatch.clone();
        Callback::from(move |value: String| dispatch.emit(Action::Input(value)))
    };

    html! {
        <div class={classes!("todo-item", view.icon_filled.then_some("completed"))}>
            { completion_icon(view.icon_filled, on_toggle) }

            <div class="text-box">
                {match view.text {
                    RowText::Editing(buffer) => html! {
                        <TextInput value={buffer} oninput={on_input} />
                    },
                    RowText::Static(text) => html! { <div>{ text }</div> },
                }}
            </div>

            <div class="button-box">
                <Button
                    label={view.primary_label}
                    width="50px"
                    onclick={on_primary}
                />
                <Button
                    label={view.secondary_label}
                    width="50px"
                    margin="0 0 0 10px"
                    bg_color="#ff6b6b"
                    onclick={on_secondary}
                />
            </div>
        </div>
    }
}

#[derive(Debug, Clone, PartialEq)]
enum RowText {
    Static(String),
    Editing(String),
}

/// What a row shows. The icon follows the local completion flag so a toggle
/// is visible before the service answers; the static text is always the
/// stored one.
#[derive(Debug, Clone, PartialEq)]
struct RowView {
    icon_filled: bool,
    text: RowText,
    primary_label: &'static str,
    secondary_label: &'static str,
}

impl RowView {
    fn new(state: &ItemState, todo: &Todo) -> Self {
        let text = if state.editing {
            RowText::Editing(state.edit_buffer.clone())
        } else {
            RowText::Static(todo.text.clone())
        };

        Self {
            icon_filled: state.completed_local,
            text,
            primary_label: state.primary_label(),
            secondary_label: state.secondary_label(),
        }
    }
}

#[derive(Debug, PartialEq)]
struct Finished {
    rerender: bool,
    error: Option<ApiError>,
}

/// Runs once the service has answered `command`. Local state is only touched
/// while the row is still mounted; a successful list update always reaches
/// the page because the list outlives the row.
fn finish_command(
    item: &RefCell<ItemState>,
    mounted: bool,
    command: &Command,
    result: Result<ListUpdate, ApiError>,
    on_update: &Callback<ListUpdate>,
) -> Finished {
    if mounted {
        item.borrow_mut().settle(command, result.is_ok());
    }

    match result {
        Ok(update) => {
            on_update.emit(update);
            Finished {
                rerender: mounted,
                error: None,
            }
        }
        Err(e) => Finished {
            rerender: mounted,
            error: Some(e),
        },
    }
}

fn completion_icon(completed: bool, onclick: Callback<MouseEvent>) -> Html {
    if completed {
        html! {
            <svg class="icon" viewBox="0 0 24 24" width="40" height="40" {onclick}>
                <circle cx="12" cy="12" r="10" fill={COMPLETED_COLOR} />
                <path
                    d="M7 12.5l3.5 3.5L17 9"
                    fill="none"
                    stroke="#ffffff"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
            </svg>
        }
    } else {
        html! {
            <svg class="icon" viewBox="0 0 24 24" width="40" height="40" {onclick}>
                <circle cx="12" cy="12" r="10" fill="none" stroke={PENDING_COLOR} stroke-width="1.5" />
                <path
                    d="M7 12.5l3.5 3.5L17 9"
                    fill="none"
                    stroke={PENDING_COLOR}
                    stroke-width="1.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
            </svg>
        }
    }
}
