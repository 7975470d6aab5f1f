pub mod button;
pub mod header;
pub mod text_input;
pub mod todo_item;
pub mod todo_list;
