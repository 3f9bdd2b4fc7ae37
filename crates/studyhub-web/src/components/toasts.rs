use std::rc::Rc;

use gloo::timers::callback::Timeout;
use studyhub_core::notify::{NOTICE_CLASS, Notice, NoticeBoard};
use yew::{Callback, Html, Properties, Reducible, function_component, html, use_effect_with};

#[derive(Clone, Default, PartialEq)]
pub struct NoticeStore {
    pub board: NoticeBoard,
}

pub enum NoticeAction {
    Push(String),
    Dismiss(u64),
}

impl Reducible for NoticeStore {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NoticeAction::Push(message) => {
                next.board.push(message);
            }
            NoticeAction::Dismiss(id) => {
                if !next.board.dismiss(id) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastsProps {
    pub notices: Vec<Notice>,
    pub lifetime_ms: u32,
    pub on_dismiss: Callback<u64>,
}

#[function_component(Toasts)]
pub fn toasts(props: &ToastsProps) -> Html {
    html! {
        <>
            {
                for props.notices.iter().map(|notice| html! {
                    <Toast
                        key={notice.id}
                        id={notice.id}
                        message={notice.message.clone()}
                        lifetime_ms={props.lifetime_ms}
                        on_dismiss={props.on_dismiss.clone()}
                    />
                })
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    id: u64,
    message: String,
    lifetime_ms: u32,
    on_dismiss: Callback<u64>,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let lifetime_ms = props.lifetime_ms;
        use_effect_with(props.id, move |id| {
            let id = *id;
            let timeout = Timeout::new(lifetime_ms, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    html! {
        <div class={NOTICE_CLASS}>{ &props.message }</div>
    }
}
