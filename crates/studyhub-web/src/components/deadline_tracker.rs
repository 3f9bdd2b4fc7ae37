use std::rc::Rc;

use chrono::Utc;
use studyhub_core::config::DeadlineConfig;
use studyhub_core::deadlines::DeadlineBoard;
use uuid::Uuid;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement, SubmitEvent};
use yew::{Callback, Html, NodeRef, Properties, Reducible, function_component, html, use_node_ref, use_reducer};

#[derive(Properties, PartialEq)]
pub struct DeadlineTrackerProps {
    pub config: DeadlineConfig,
}

#[derive(Clone, PartialEq)]
struct DeadlineStore {
    board: DeadlineBoard,
}

enum DeadlineAction {
    Add {
        title: String,
        date: String,
        priority: String,
    },
    Remove(Uuid),
}

impl Reducible for DeadlineStore {
    type Action = DeadlineAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            DeadlineAction::Add { title, date, priority } => next.board.add(&title, &date, &priority).is_some(),
            DeadlineAction::Remove(id) => next.board.remove(id).is_some(),
        };
        if changed { Rc::new(next) } else { self }
    }
}

#[function_component(DeadlineTracker)]
pub fn deadline_tracker(props: &DeadlineTrackerProps) -> Html {
    let store = {
        let config = props.config.clone();
        use_reducer(move || DeadlineStore {
            board: DeadlineBoard::new(&config),
        })
    };
    let form_ref: NodeRef = use_node_ref();
    let title_ref: NodeRef = use_node_ref();
    let date_ref: NodeRef = use_node_ref();
    let priority_ref: NodeRef = use_node_ref();

    let on_submit = {
        let store = store.clone();
        let form_ref = form_ref.clone();
        let title_ref = title_ref.clone();
        let date_ref = date_ref.clone();
        let priority_ref = priority_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let (Some(title), Some(date), Some(priority)) = (
                title_ref.cast::<HtmlInputElement>(),
                date_ref.cast::<HtmlInputElement>(),
                priority_ref.cast::<HtmlSelectElement>(),
            ) else {
                return;
            };

            // The form resets only when the values are accepted.
            let (title, date, priority) = (title.value(), date.value(), priority.value());
            if store.board.clone().add(&title, &date, &priority).is_none() {
                return;
            }

            store.dispatch(DeadlineAction::Add { title, date, priority });
            if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                form.reset();
            }
        })
    };

    let on_delete = {
        let dispatcher = store.dispatcher();
        Callback::from(move |id: Uuid| dispatcher.dispatch(DeadlineAction::Remove(id)))
    };

    html! {
        <div class="deadlines">
            <form id="deadline-form" ref={form_ref} onsubmit={on_submit}>
                <input id="deadline-title" ref={title_ref} type="text" placeholder="Assignment or exam" />
                <input id="deadline-date" ref={date_ref} type="date" />
                <select id="deadline-priority" ref={priority_ref}>
                    <option value="">{ "Priority" }</option>
                    <option value="high">{ "High" }</option>
                    <option value="medium">{ "Medium" }</option>
                    <option value="low">{ "Low" }</option>
                </select>
                <button type="submit" class="btn">{ "Add Deadline" }</button>
            </form>
            <div id="deadlines-list">
                {
                    for store.board.cards(Utc::now()).into_iter().map(|card| {
                        let id = card.id;
                        let on_delete = on_delete.clone();
                        html! {
                            <div key={id.to_string()} class={format!("{} p-4 rounded-lg shadow mb-3", card.card_class)}>
                                <div class="flex justify-between items-center">
                                    <div>
                                        <h3 class="font-semibold text-lg">{ card.title }</h3>
                                        <p class="text-gray-600">{ card.due_label }</p>
                                        <span class={format!("text-sm px-2 py-1 rounded {}", card.badge_class)}>
                                            { card.priority_label }
                                        </span>
                                    </div>
                                    <button
                                        class="delete-deadline text-red-500 hover:text-red-700"
                                        onclick={Callback::from(move |_| on_delete.emit(id))}
                                    >
                                        { "✕" }
                                    </button>
                                </div>
                            </div>
                        }
                    })
                }
            </div>
        </div>
    }
}
