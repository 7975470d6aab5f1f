use shared::ListUpdate;
use yew::prelude::*;

use crate::components::todo_list::TodoList;
use crate::config::ApiConfig;
use crate::services::api::ApiService;
use crate::services::error::handle_error;
use crate::store::TodoStore;

#[function_component(Home)]
pub fn home() -> Html {
    let api = use_memo((), |_| ApiService::new(ApiConfig::from_env()));
    let store = use_reducer(TodoStore::default);
    let loading = use_state(|| true);
    let new_text = use_state(String::new);

    {
        let api = api.clone();
        let dispatcher = store.dispatcher();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api.get_todos().await {
                    Ok(todos) => dispatcher.dispatch(ListUpdate::Reset(todos)),
                    Err(e) => handle_error(api.config(), &e),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_update = {
        let dispatcher = store.dispatcher();
        Callback::from(move |update: ListUpdate| dispatcher.dispatch(update))
    };

    let on_text_input = {
        let new_text = new_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            new_text.set(input.value());
        })
    };

    let on_create = {
        let api = api.clone();
        let dispatcher = store.dispatcher();
        let new_text = new_text.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let text = (*new_text).clone();
            if text.trim().is_empty() {
                return;
            }

            let api = api.clone();
            let dispatcher = dispatcher.clone();
            let new_text = new_text.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.create_todo(&text).await {
                    Ok(created) => {
                        tracing::info!(id = created.id, "Todo created");
                        dispatcher.dispatch(ListUpdate::Append(created));
                        new_text.set(String::new());
                    }
                    Err(e) => handle_error(api.config(), &e),
                }
            });
        })
    };

    html! {
        <div class="container">
            <h2>{ "My Todos" }</h2>
            <form class="todo-form" onsubmit={on_create}>
                <input
                    type="text"
                    placeholder="Add a new todo..."
                    value={(*new_text).clone()}
                    oninput={on_text_input}
                />
                <button type="submit" class="btn">{ "Add" }</button>
            </form>
            if *loading {
                <div class="loading">
                    <div class="spinner"></div>
                </div>
            } else {
                <TodoList
                    todos={store.todos.clone()}
                    api={(*api).clone()}
                    {on_update}
                />
            }
        </div>
    }
}
