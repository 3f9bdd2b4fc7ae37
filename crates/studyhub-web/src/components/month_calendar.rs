use chrono::NaiveDate;
use studyhub_core::calendar::{self, CalendarCell, CalendarCursor, WEEKDAY_LABELS};
use yew::{Callback, Html, Properties, function_component, html, use_state};

#[derive(Properties, PartialEq)]
pub struct MonthCalendarProps {
    pub today: NaiveDate,
}

#[function_component(MonthCalendar)]
pub fn month_calendar(props: &MonthCalendarProps) -> Html {
    let cursor = {
        let today = props.today;
        use_state(move || CalendarCursor::containing(today))
    };

    let on_prev = {
        let cursor = cursor.clone();
        Callback::from(move |_| cursor.set(cursor.prev()))
    };
    let on_next = {
        let cursor = cursor.clone();
        Callback::from(move |_| cursor.set(cursor.next()))
    };

    let grid = calendar::render(*cursor, props.today);

    html! {
        <div class="calendar">
            <div class="calendar-header flex justify-between items-center">
                <button id="prev-month" class="btn" onclick={on_prev}>{ "Prev" }</button>
                <h2 id="month-year">{ grid.title.clone() }</h2>
                <button id="next-month" class="btn" onclick={on_next}>{ "Next" }</button>
            </div>
            <div class="calendar-weekday-row grid grid-cols-7">
                {
                    for WEEKDAY_LABELS.iter().map(|label| html! {
                        <div class="calendar-weekday text-center">{ *label }</div>
                    })
                }
            </div>
            <div id="calendar-grid" class="calendar-grid grid grid-cols-7">
                {
                    for grid.cells.iter().map(|cell| match cell {
                        CalendarCell::Blank => html! {
                            <div class={cell.class()}></div>
                        },
                        CalendarCell::Day { day, .. } => html! {
                            <div class={cell.class()}>{ *day }</div>
                        },
                    })
                }
            </div>
        </div>
    }
}
