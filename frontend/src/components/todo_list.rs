use shared::{ListUpdate, Todo};
use yew::prelude::*;

use crate::components::todo_item::TodoItem;
use crate::services::api::ApiService;

#[derive(Properties, PartialEq)]
pub struct TodoListProps {
    pub todos: Vec<Todo>,
    pub api: ApiService,
    pub on_update: Callback<ListUpdate>,
}

#[function_component(TodoList)]
pub fn todo_list(props: &TodoListProps) -> Html {
    if props.todos.is_empty() {
        return html! {
            <div class="empty-state">
                <h2>{ "No todos yet!" }</h2>
                <p>{ "Add one above to get started." }</p>
            </div>
        };
    }

    html! {
        <div class="todo-list">
            { for props.todos.iter().map(|todo| html! {
                <TodoItem
                    key={todo.id.to_string()}
                    todo={todo.clone()}
                    api={props.api.clone()}
                    on_update={props.on_update.clone()}
                />
            })}
        </div>
    }
}
