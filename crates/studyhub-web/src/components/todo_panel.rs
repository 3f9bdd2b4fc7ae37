use std::rc::Rc;

use studyhub_core::todo::TodoList;
use uuid::Uuid;
use web_sys::{Event, HtmlInputElement, SubmitEvent};
use yew::{Callback, Html, NodeRef, Reducible, TargetCast, function_component, html, use_node_ref, use_reducer};

#[derive(Clone, Default, PartialEq)]
struct TodoStore {
    list: TodoList,
}

enum TodoAction {
    Add(String),
    Toggle(Uuid, bool),
    Remove(Uuid),
}

impl Reducible for TodoStore {
    type Action = TodoAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            TodoAction::Add(text) => next.list.add(&text).is_some(),
            TodoAction::Toggle(id, checked) => next.list.toggle(id, checked),
            TodoAction::Remove(id) => next.list.remove(id).is_some(),
        };
        if changed { Rc::new(next) } else { self }
    }
}

#[function_component(TodoPanel)]
pub fn todo_panel() -> Html {
    let store = use_reducer(TodoStore::default);
    let input_ref: NodeRef = use_node_ref();

    let on_submit = {
        let dispatcher = store.dispatcher();
        let input_ref = input_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let text = input.value();
            if text.trim().is_empty() {
                return;
            }

            input.set_value("");
            dispatcher.dispatch(TodoAction::Add(text));
        })
    };

    let on_toggle = {
        let dispatcher = store.dispatcher();
        Callback::from(move |(id, checked): (Uuid, bool)| {
            dispatcher.dispatch(TodoAction::Toggle(id, checked));
        })
    };

    let on_delete = {
        let dispatcher = store.dispatcher();
        Callback::from(move |id: Uuid| dispatcher.dispatch(TodoAction::Remove(id)))
    };

    html! {
        <div class="todo">
            <form id="todo-form" class="todo-form" onsubmit={on_submit}>
                <input ref={input_ref} type="text" placeholder="Add a task..." />
                <button type="submit" class="btn">{ "Add" }</button>
            </form>
            <div id="todo-list">
                {
                    for store.list.items().iter().map(|item| {
                        let id = item.id;
                        let on_toggle = on_toggle.clone();
                        let on_delete = on_delete.clone();
                        html! {
                            <div key={id.to_string()} class="todo-item p-4 rounded-lg shadow mb-3 flex items-center justify-between">
                                <div class="flex items-center">
                                    <input
                                        type="checkbox"
                                        class="mr-3 w-4 h-4 text-primary"
                                        checked={item.completed}
                                        onchange={Callback::from(move |event: Event| {
                                            let checked = event.target_unchecked_into::<HtmlInputElement>().checked();
                                            on_toggle.emit((id, checked));
                                        })}
                                    />
                                    <span class={item.text_class()}>{ &item.text }</span>
                                </div>
                                <button
                                    class="delete-todo text-red-500 hover:text-red-700"
                                    onclick={Callback::from(move |_| on_delete.emit(id))}
                                >
                                    { "✕" }
                                </button>
                            </div>
                        }
                    })
                }
            </div>
        </div>
    }
}
