use std::rc::Rc;

use gloo::timers::callback::Interval;
use studyhub_core::config::PomodoroConfig;
use studyhub_core::pomodoro::Pomodoro;
use wasm_bindgen::JsCast;
use web_sys::HtmlAudioElement;
use yew::{Callback, Html, Properties, Reducible, function_component, html, use_effect_with, use_reducer};

use super::toasts::{NoticeAction, NoticeStore, Toasts};

#[derive(Properties, PartialEq)]
pub struct PomodoroTimerProps {
    pub config: PomodoroConfig,
    pub notice_lifetime_ms: u32,
}

#[derive(Clone, PartialEq)]
struct TimerStore {
    timer: Pomodoro,
    /// Bumped on every phase change so effects fire once per change.
    changes: u64,
    last_message: Option<&'static str>,
}

enum TimerAction {
    Start,
    Pause,
    Reset,
    Tick,
}

impl Reducible for TimerStore {
    type Action = TimerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            TimerAction::Start => next.timer.start(),
            TimerAction::Pause => next.timer.pause(),
            TimerAction::Reset => {
                next.timer.reset();
                true
            }
            TimerAction::Tick => {
                if let Some(change) = next.timer.tick() {
                    next.changes = next.changes.wrapping_add(1);
                    next.last_message = Some(change.message);
                }
                true
            }
        };

        if changed { Rc::new(next) } else { self }
    }
}

fn play_timer_sound() {
    let audio = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("timer-sound"))
        .and_then(|element| element.dyn_into::<HtmlAudioElement>().ok());

    if let Some(audio) = audio {
        let _ = audio.play();
    }
}

#[function_component(PomodoroTimer)]
pub fn pomodoro_timer(props: &PomodoroTimerProps) -> Html {
    let store = {
        let config = props.config.clone();
        use_reducer(move || TimerStore {
            timer: Pomodoro::new(&config),
            changes: 0,
            last_message: None,
        })
    };
    let notices = use_reducer(NoticeStore::default);

    {
        let dispatcher = store.dispatcher();
        let tick_ms = props.config.tick_ms;
        use_effect_with(store.timer.is_running(), move |running| {
            let interval = running.then(|| {
                Interval::new(tick_ms, move || dispatcher.dispatch(TimerAction::Tick))
            });
            move || drop(interval)
        });
    }

    {
        let notices = notices.dispatcher();
        let message = store.last_message;
        use_effect_with(store.changes, move |changes| {
            if *changes > 0 {
                play_timer_sound();
                if let Some(message) = message {
                    tracing::info!(%message, "pomodoro phase finished");
                    notices.dispatch(NoticeAction::Push(message.to_string()));
                }
            }
            || ()
        });
    }

    let on_start = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(TimerAction::Start))
    };
    let on_pause = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(TimerAction::Pause))
    };
    let on_reset = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(TimerAction::Reset))
    };
    let on_dismiss = {
        let notices = notices.dispatcher();
        Callback::from(move |id: u64| notices.dispatch(NoticeAction::Dismiss(id)))
    };

    let view = store.timer.view();
    let phase_class = if view.on_break { "timer-phase break" } else { "timer-phase work" };

    html! {
        <div class="pomodoro">
            <div class={phase_class}>{ view.phase_label }</div>
            <div id="timer-display" class="timer-display">{ view.display }</div>
            <div class="timer-actions">
                <button id="start-timer" class="btn" disabled={view.running} onclick={on_start}>{ "Start" }</button>
                <button id="pause-timer" class="btn" disabled={!view.running} onclick={on_pause}>{ "Pause" }</button>
                <button id="reset-timer" class="btn" onclick={on_reset}>{ "Reset" }</button>
            </div>
            <Toasts
                notices={notices.board.active().to_vec()}
                lifetime_ms={props.notice_lifetime_ms}
                on_dismiss={on_dismiss}
            />
        </div>
    }
}
