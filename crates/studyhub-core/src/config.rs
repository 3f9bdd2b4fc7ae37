use anyhow::Context;
use chrono::{
  Local,
  NaiveDate,
  Utc
};
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::{
  debug,
  error,
  info,
  warn
};

use crate::chat::{
  DEFAULT_GREETING,
  DEFAULT_RESPONSES
};
use crate::quotes::DEFAULT_QUOTES;

pub const DEFAULT_WORK_SECONDS: u32 =
  25 * 60;
pub const DEFAULT_BREAK_SECONDS: u32 =
  5 * 60;
pub const DEFAULT_TICK_MS: u32 = 1_000;
pub const DEFAULT_NOTICE_LIFETIME_MS:
  u32 = 3_000;
pub const DEFAULT_URGENT_WINDOW_DAYS:
  i64 = 7;
/// Longest accepted urgency window,
/// about ten years.
pub const MAX_URGENT_WINDOW_DAYS: i64 =
  3_650;
pub const DEFAULT_REPLY_DELAY_MS: u32 =
  1_000;

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct StudyConfig {
  #[serde(default)]
  pub timezone:      Option<String>,
  #[serde(default)]
  pub pomodoro:      PomodoroConfig,
  #[serde(default)]
  pub notifications: NotificationConfig,
  #[serde(default)]
  pub deadlines:     DeadlineConfig,
  #[serde(default)]
  pub chat:          ChatConfig,
  #[serde(default)]
  pub quotes:        QuoteConfig
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct PomodoroConfig {
  #[serde(
    default = "default_work_seconds"
  )]
  pub work_seconds:  u32,
  #[serde(
    default = "default_break_seconds"
  )]
  pub break_seconds: u32,
  #[serde(default = "default_tick_ms")]
  pub tick_ms:       u32
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct NotificationConfig {
  #[serde(
    default = "default_notice_lifetime_ms"
  )]
  pub lifetime_ms: u32
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct DeadlineConfig {
  #[serde(
    default = "default_urgent_window_days"
  )]
  pub urgent_window_days: i64
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct ChatConfig {
  #[serde(
    default = "default_reply_delay_ms"
  )]
  pub reply_delay_ms: u32,
  #[serde(default = "default_greeting")]
  pub greeting:       String,
  #[serde(default = "default_responses")]
  pub responses:      Vec<String>
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct QuoteConfig {
  #[serde(default = "default_quotes")]
  pub items: Vec<String>
}

fn default_work_seconds() -> u32 {
  DEFAULT_WORK_SECONDS
}

fn default_break_seconds() -> u32 {
  DEFAULT_BREAK_SECONDS
}

fn default_tick_ms() -> u32 {
  DEFAULT_TICK_MS
}

fn default_notice_lifetime_ms() -> u32 {
  DEFAULT_NOTICE_LIFETIME_MS
}

fn default_urgent_window_days() -> i64 {
  DEFAULT_URGENT_WINDOW_DAYS
}

fn default_reply_delay_ms() -> u32 {
  DEFAULT_REPLY_DELAY_MS
}

fn default_greeting() -> String {
  DEFAULT_GREETING.to_string()
}

fn default_responses() -> Vec<String> {
  DEFAULT_RESPONSES
    .iter()
    .map(|line| line.to_string())
    .collect()
}

fn default_quotes() -> Vec<String> {
  DEFAULT_QUOTES
    .iter()
    .map(|line| line.to_string())
    .collect()
}

impl Default for PomodoroConfig {
  fn default() -> Self {
    Self {
      work_seconds:  default_work_seconds(),
      break_seconds: default_break_seconds(
      ),
      tick_ms:       default_tick_ms()
    }
  }
}

impl Default for NotificationConfig {
  fn default() -> Self {
    Self {
      lifetime_ms:
        default_notice_lifetime_ms()
    }
  }
}

impl Default for DeadlineConfig {
  fn default() -> Self {
    Self {
      urgent_window_days:
        default_urgent_window_days()
    }
  }
}

impl Default for ChatConfig {
  fn default() -> Self {
    Self {
      reply_delay_ms: default_reply_delay_ms(
      ),
      greeting:       default_greeting(),
      responses:      default_responses()
    }
  }
}

impl Default for QuoteConfig {
  fn default() -> Self {
    Self {
      items: default_quotes()
    }
  }
}

impl Default for StudyConfig {
  fn default() -> Self {
    Self {
      timezone:      None,
      pomodoro:      PomodoroConfig::default(
      ),
      notifications:
        NotificationConfig::default(),
      deadlines:     DeadlineConfig::default(
      ),
      chat:          ChatConfig::default(),
      quotes:        QuoteConfig::default()
    }
  }
}

impl StudyConfig {
  pub fn parse(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut config =
      toml::from_str::<StudyConfig>(raw)
        .context(
          "failed to parse studyhub \
           config"
        )?;
    config.sanitize();
    Ok(config)
  }

  /// Parses the embedded config, logging
  /// and falling back to defaults on
  /// failure.
  #[tracing::instrument(skip_all)]
  pub fn load_or_default(
    raw: &str
  ) -> Self {
    match Self::parse(raw) {
      | Ok(config) => {
        info!(
          timezone = ?config.timezone,
          work_seconds = config.pomodoro.work_seconds,
          break_seconds = config.pomodoro.break_seconds,
          quotes = config.quotes.items.len(),
          "loaded studyhub config"
        );
        config
      }
      | Err(error) => {
        error!(%error, "failed parsing studyhub config; using defaults");
        Self::default()
      }
    }
  }

  fn sanitize(&mut self) {
    if self.pomodoro.work_seconds == 0 {
      self.pomodoro.work_seconds =
        default_work_seconds();
    }
    if self.pomodoro.break_seconds == 0
    {
      self.pomodoro.break_seconds =
        default_break_seconds();
    }
    if self.pomodoro.tick_ms == 0 {
      self.pomodoro.tick_ms =
        default_tick_ms();
    }
    if self.notifications.lifetime_ms
      == 0
    {
      self.notifications.lifetime_ms =
        default_notice_lifetime_ms();
    }
    if !(1..=MAX_URGENT_WINDOW_DAYS)
      .contains(
        &self
          .deadlines
          .urgent_window_days
      )
    {
      self
        .deadlines
        .urgent_window_days =
        default_urgent_window_days();
    }

    self.chat.responses.retain(|line| {
      !line.trim().is_empty()
    });
    if self.chat.responses.is_empty() {
      debug!(
        "empty chat response set; \
         restoring defaults"
      );
      self.chat.responses =
        default_responses();
    }
    if self.chat.greeting.trim().is_empty()
    {
      self.chat.greeting =
        default_greeting();
    }

    self.quotes.items.retain(|line| {
      !line.trim().is_empty()
    });
    if self.quotes.items.is_empty() {
      debug!(
        "empty quote set; restoring \
         defaults"
      );
      self.quotes.items =
        default_quotes();
    }

    if let Some(raw) =
      self.timezone.as_deref()
      && parse_timezone(raw).is_none()
    {
      warn!(
        timezone = %raw,
        "ignoring unknown timezone"
      );
      self.timezone = None;
    }
  }

  /// The calendar's notion of today: the
  /// configured timezone when set,
  /// otherwise the local clock.
  pub fn today(&self) -> NaiveDate {
    match self
      .timezone
      .as_deref()
      .and_then(parse_timezone)
    {
      | Some(tz) => {
        Utc::now()
          .with_timezone(&tz)
          .date_naive()
      }
      | None => {
        Local::now().date_naive()
      }
    }
  }
}

fn parse_timezone(
  raw: &str
) -> Option<Tz> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return None;
  }
  trimmed.parse::<Tz>().ok()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::deadlines::DeadlineBoard;

  #[test]
  fn empty_document_yields_defaults() {
    let config = StudyConfig::parse("")
      .expect("parse empty config");
    assert_eq!(
      config,
      StudyConfig::default()
    );
    assert_eq!(
      config.pomodoro.work_seconds,
      1500
    );
    assert_eq!(
      config.pomodoro.break_seconds,
      300
    );
    assert_eq!(
      config.quotes.items.len(),
      5
    );
    assert_eq!(
      config.chat.responses.len(),
      5
    );
  }

  #[test]
  fn zero_durations_are_sanitized() {
    let config = StudyConfig::parse(
      r#"
[pomodoro]
work_seconds = 0
break_seconds = 0
tick_ms = 0

[notifications]
lifetime_ms = 0

[deadlines]
urgent_window_days = -2
"#
    )
    .expect("parse config");

    assert_eq!(
      config.pomodoro,
      PomodoroConfig::default()
    );
    assert_eq!(
      config.notifications.lifetime_ms,
      3_000
    );
    assert_eq!(
      config
        .deadlines
        .urgent_window_days,
      7
    );
  }

  #[test]
  fn blank_lists_fall_back_to_defaults()
  {
    let config = StudyConfig::parse(
      r#"
[chat]
greeting = "  "
responses = ["", "   "]

[quotes]
items = []
"#
    )
    .expect("parse config");

    assert_eq!(
      config.chat,
      ChatConfig::default()
    );
    assert_eq!(
      config.quotes,
      QuoteConfig::default()
    );
  }

  #[test]
  fn unknown_timezone_is_dropped() {
    let config = StudyConfig::parse(
      "timezone = \"Mars/Olympus\"",
    )
    .expect("parse config");
    assert!(config.timezone.is_none());

    let config = StudyConfig::parse(
      "timezone = \"Europe/Berlin\"",
    )
    .expect("parse config");
    assert_eq!(
      config.timezone.as_deref(),
      Some("Europe/Berlin")
    );
  }

  #[test]
  fn invalid_toml_falls_back() {
    assert!(
      StudyConfig::parse("pomodoro = [")
        .is_err()
    );
    assert_eq!(
      StudyConfig::load_or_default(
        "pomodoro = ["
      ),
      StudyConfig::default()
    );
  }

  #[test]
  fn oversized_urgent_window_falls_back()
  {
    let config =
      StudyConfig::load_or_default(
        "[deadlines]\n\
         urgent_window_days = \
         200000000000\n"
      );
    assert_eq!(
      config
        .deadlines
        .urgent_window_days,
      DEFAULT_URGENT_WINDOW_DAYS
    );

    let board = DeadlineBoard::new(
      &config.deadlines
    );
    assert!(board.items().is_empty());

    let config = StudyConfig::parse(
      "[deadlines]\n\
       urgent_window_days = 3650\n"
    )
    .expect("parse config");
    assert_eq!(
      config
        .deadlines
        .urgent_window_days,
      MAX_URGENT_WINDOW_DAYS
    );
  }
}
