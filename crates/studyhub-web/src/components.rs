mod chat_panel;
mod deadline_tracker;
mod month_calendar;
mod pomodoro_timer;
mod quote_rotator;
mod toasts;
mod todo_panel;

pub use chat_panel::{ChatPanel, ChatPanelProps};
pub use deadline_tracker::{DeadlineTracker, DeadlineTrackerProps};
pub use month_calendar::{MonthCalendar, MonthCalendarProps};
pub use pomodoro_timer::{PomodoroTimer, PomodoroTimerProps};
pub use quote_rotator::{QuoteRotator, QuoteRotatorProps};
pub use toasts::{NoticeAction, NoticeStore, Toasts, ToastsProps};
pub use todo_panel::TodoPanel;
