use std::rc::Rc;

use gloo::console::log;
use gloo::events::{
  EventListener,
  EventListenerOptions
};
use studyhub_core::{
  Route,
  RouteTable,
  StudyConfig
};
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  Element,
  ScrollBehavior,
  ScrollIntoViewOptions,
  ScrollLogicalPosition
};

use crate::components::{
  ChatPanel,
  ChatPanelProps,
  DeadlineTracker,
  DeadlineTrackerProps,
  MonthCalendar,
  MonthCalendarProps,
  PomodoroTimer,
  PomodoroTimerProps,
  QuoteRotator,
  QuoteRotatorProps,
  TodoPanel
};

const STUDYHUB_CONFIG_TOML: &str =
  include_str!("../assets/studyhub.toml");
const WIDGET_ROOT_ID: &str =
  "widget-root";

/// Mounts one widget into its host
/// element.
pub type Mount =
  fn(Element, Rc<StudyConfig>);

/// Page entry point: wires the shared
/// page chrome, then mounts at most one
/// widget for the current path.
#[tracing::instrument(skip_all)]
pub fn start() {
  let Some(document) = web_sys::window()
    .and_then(|window| {
      window.document()
    })
  else {
    tracing::warn!(
      "no document; nothing to \
       initialize"
    );
    return;
  };

  wire_mobile_menu(&document);
  wire_smooth_scroll(&document);

  let path = web_sys::window()
    .and_then(|window| {
      window.location().pathname().ok()
    })
    .unwrap_or_default();
  let config = Rc::new(
    StudyConfig::load_or_default(
      STUDYHUB_CONFIG_TOML
    )
  );

  activate(
    &widget_routes(),
    &path,
    &document,
    config
  );
}

/// The explicit page-to-widget map.
pub fn widget_routes()
-> RouteTable<Mount> {
  RouteTable::new()
    .register(
      Route::Pomodoro,
      mount_pomodoro as Mount
    )
    .register(Route::Todo, mount_todo)
    .register(
      Route::Quotes,
      mount_quotes
    )
    .register(
      Route::Deadlines,
      mount_deadlines
    )
    .register(
      Route::Calendar,
      mount_calendar
    )
    .register(Route::Chat, mount_chat)
}

pub fn activate(
  routes: &RouteTable<Mount>,
  path: &str,
  document: &Document,
  config: Rc<StudyConfig>
) {
  let Some((route, mount)) =
    routes.resolve(path)
  else {
    ui_debug(
      "route.none",
      &format!(
        "no widget registered for \
         {path}"
      )
    );
    return;
  };

  let Some(root) = document
    .get_element_by_id(WIDGET_ROOT_ID)
  else {
    ui_debug(
      "route.no_root",
      &format!(
        "#{WIDGET_ROOT_ID} missing; \
         {route:?} widget disabled"
      )
    );
    return;
  };

  tracing::info!(
    ?route,
    path,
    "mounting widget"
  );
  mount(root, config);
}

fn mount_pomodoro(
  root: Element,
  config: Rc<StudyConfig>
) {
  yew::Renderer::<PomodoroTimer>::with_root_and_props(
    root,
    PomodoroTimerProps {
      config: config.pomodoro.clone(),
      notice_lifetime_ms: config
        .notifications
        .lifetime_ms
    }
  )
  .render();
}

fn mount_todo(
  root: Element,
  _config: Rc<StudyConfig>
) {
  yew::Renderer::<TodoPanel>::with_root(
    root
  )
  .render();
}

fn mount_quotes(
  root: Element,
  config: Rc<StudyConfig>
) {
  yew::Renderer::<QuoteRotator>::with_root_and_props(
    root,
    QuoteRotatorProps {
      config: config.quotes.clone()
    }
  )
  .render();
}

fn mount_deadlines(
  root: Element,
  config: Rc<StudyConfig>
) {
  yew::Renderer::<DeadlineTracker>::with_root_and_props(
    root,
    DeadlineTrackerProps {
      config: config.deadlines.clone()
    }
  )
  .render();
}

fn mount_calendar(
  root: Element,
  config: Rc<StudyConfig>
) {
  yew::Renderer::<MonthCalendar>::with_root_and_props(
    root,
    MonthCalendarProps {
      today: config.today()
    }
  )
  .render();
}

fn mount_chat(
  root: Element,
  config: Rc<StudyConfig>
) {
  yew::Renderer::<ChatPanel>::with_root_and_props(
    root,
    ChatPanelProps {
      config: config.chat.clone()
    }
  )
  .render();
}

fn wire_mobile_menu(document: &Document) {
  let (Some(button), Some(menu)) = (
    document.get_element_by_id(
      "mobile-menu-button"
    ),
    document
      .get_element_by_id("mobile-menu")
  ) else {
    return;
  };

  EventListener::new(
    &button,
    "click",
    move |_| {
      let _ = menu
        .class_list()
        .toggle("hidden");
    }
  )
  .forget();
}

fn wire_smooth_scroll(
  document: &Document
) {
  let Ok(anchors) = document
    .query_selector_all(
      "a[href^=\"#\"]"
    )
  else {
    return;
  };

  let mut wired = 0_u32;
  for index in 0..anchors.length() {
    let Some(anchor) = anchors
      .get(index)
      .and_then(|node| {
        node.dyn_into::<Element>().ok()
      })
    else {
      continue;
    };

    let document = document.clone();
    let href_source = anchor.clone();
    EventListener::new_with_options(
      &anchor,
      "click",
      EventListenerOptions::enable_prevent_default(),
      move |event| {
        event.prevent_default();
        let Some(href) = href_source
          .get_attribute("href")
        else {
          return;
        };
        if let Ok(Some(target)) =
          document.query_selector(&href)
        {
          let options =
            ScrollIntoViewOptions::new();
          options.set_behavior(
            ScrollBehavior::Smooth
          );
          options.set_block(
            ScrollLogicalPosition::Start
          );
          target
            .scroll_into_view_with_scroll_into_view_options(
              &options
            );
        }
      }
    )
    .forget();
    wired += 1;
  }

  tracing::debug!(
    anchors = wired,
    "wired smooth scroll anchors"
  );
}

pub(crate) fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
