use std::rc::Rc;

use gloo::timers::callback::Timeout;
use studyhub_core::chat::ChatLog;
use studyhub_core::config::ChatConfig;
use web_sys::{Element, HtmlInputElement, SubmitEvent};
use yew::{Callback, Html, NodeRef, Properties, Reducible, function_component, html, use_effect_with, use_node_ref, use_reducer};

#[derive(Properties, PartialEq)]
pub struct ChatPanelProps {
    pub config: ChatConfig,
}

#[derive(Clone, PartialEq)]
struct ChatStore {
    log: ChatLog,
}

enum ChatAction {
    Submit(String),
    Reply,
}

impl Reducible for ChatStore {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            ChatAction::Submit(text) => next.log.submit(&text),
            ChatAction::Reply => next.log.reply(&mut rand::thread_rng()).is_some(),
        };
        if changed { Rc::new(next) } else { self }
    }
}

#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    let store = {
        let config = props.config.clone();
        use_reducer(move || ChatStore {
            log: ChatLog::new(&config),
        })
    };
    let input_ref: NodeRef = use_node_ref();
    let messages_ref: NodeRef = use_node_ref();

    {
        let messages_ref = messages_ref.clone();
        use_effect_with(store.log.messages().len(), move |_| {
            if let Some(container) = messages_ref.cast::<Element>() {
                container.set_scroll_top(container.scroll_height());
            }
            || ()
        });
    }

    let on_submit = {
        let dispatcher = store.dispatcher();
        let input_ref = input_ref.clone();
        let reply_delay_ms = props.config.reply_delay_ms;
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
            dispatcher.dispatch(ChatAction::Submit(text));

            // No cancellation: a reply landing after unmount is dropped by yew.
            let dispatcher = dispatcher.clone();
            Timeout::new(reply_delay_ms, move || dispatcher.dispatch(ChatAction::Reply)).forget();
        })
    };

    html! {
        <div class="chat">
            <div id="chat-messages" ref={messages_ref} class="chat-messages overflow-y-auto">
                {
                    for store.log.messages().iter().map(|message| html! {
                        <div class={message.row_class()}>
                            <div class={message.bubble_class()}>{ &message.text }</div>
                        </div>
                    })
                }
            </div>
            <form id="chat-form" class="chat-form flex" onsubmit={on_submit}>
                <input id="chat-input" ref={input_ref} type="text" placeholder="Ask a study question..." />
                <button type="submit" class="btn">{ "Send" }</button>
            </form>
        </div>
    }
}
