use chrono::{
  Datelike,
  NaiveDate
};
use tracing::{
  debug,
  warn
};

pub const MONTH_NAMES: [&str; 12] = [
  "January",
  "February",
  "March",
  "April",
  "May",
  "June",
  "July",
  "August",
  "September",
  "October",
  "November",
  "December"
];

pub const WEEKDAY_LABELS: [&str; 7] = [
  "Sun", "Mon", "Tue", "Wed", "Thu",
  "Fri", "Sat"
];

/// Month/year focus of the calendar.
/// `month` is zero based (0 = January).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct CalendarCursor {
  month: u32,
  year:  i32
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum CalendarCell {
  Blank,
  Day {
    day:   u32,
    today: bool
  }
}

impl CalendarCell {
  pub fn class(self) -> &'static str {
    match self {
      | Self::Blank => {
        "calendar-day p-2 text-center"
      }
      | Self::Day {
        today: false,
        ..
      } => {
        "calendar-day p-2 text-center \
         cursor-pointer rounded"
      }
      | Self::Day {
        today: true,
        ..
      } => {
        "calendar-day p-2 text-center \
         cursor-pointer rounded \
         calendar-today"
      }
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
  pub title: String,
  pub cells: Vec<CalendarCell>
}

impl CalendarGrid {
  pub fn leading_blanks(&self) -> usize {
    self
      .cells
      .iter()
      .take_while(|cell| {
        matches!(
          cell,
          CalendarCell::Blank
        )
      })
      .count()
  }
}

impl CalendarCursor {
  /// Returns `None` for a month outside
  /// 0..=11.
  pub fn new(
    month: u32,
    year: i32
  ) -> Option<Self> {
    (month < 12).then_some(Self {
      month,
      year
    })
  }

  pub fn containing(
    date: NaiveDate
  ) -> Self {
    Self {
      month: date.month0(),
      year:  date.year()
    }
  }

  pub fn month(self) -> u32 {
    self.month
  }

  pub fn year(self) -> i32 {
    self.year
  }

  pub fn prev(self) -> Self {
    let next = if self.month == 0 {
      Self {
        month: 11,
        year:  self.year - 1
      }
    } else {
      Self {
        month: self.month - 1,
        year:  self.year
      }
    };
    debug!(month = next.month, year = next.year, "calendar moved back");
    next
  }

  pub fn next(self) -> Self {
    let next = if self.month == 11 {
      Self {
        month: 0,
        year:  self.year + 1
      }
    } else {
      Self {
        month: self.month + 1,
        year:  self.year
      }
    };
    debug!(month = next.month, year = next.year, "calendar moved forward");
    next
  }

  pub fn title(self) -> String {
    format!(
      "{} {}",
      MONTH_NAMES[self.month as usize],
      self.year
    )
  }
}

pub fn first_day_of_month(
  year: i32,
  month0: u32
) -> Option<NaiveDate> {
  NaiveDate::from_ymd_opt(
    year,
    month0 + 1,
    1
  )
}

pub fn days_in_month(
  year: i32,
  month0: u32
) -> Option<u32> {
  let first =
    first_day_of_month(year, month0)?;
  let next_first = if month0 == 11 {
    NaiveDate::from_ymd_opt(
      year + 1,
      1,
      1
    )?
  } else {
    NaiveDate::from_ymd_opt(
      year,
      month0 + 2,
      1
    )?
  };
  u32::try_from(
    next_first
      .signed_duration_since(first)
      .num_days()
  )
  .ok()
}

/// Builds the month grid from scratch:
/// one blank per weekday before the 1st
/// (Sunday first), then one cell per
/// day with `today` marked.
pub fn render(
  cursor: CalendarCursor,
  today: NaiveDate
) -> CalendarGrid {
  let title = cursor.title();
  let (Some(first), Some(day_count)) = (
    first_day_of_month(
      cursor.year,
      cursor.month
    ),
    days_in_month(
      cursor.year,
      cursor.month
    )
  ) else {
    warn!(
      month = cursor.month,
      year = cursor.year,
      "calendar month out of range"
    );
    return CalendarGrid {
      title,
      cells: vec![]
    };
  };

  let leading = first
    .weekday()
    .num_days_from_sunday()
    as usize;
  let mut cells = Vec::with_capacity(
    leading + day_count as usize
  );
  cells.extend(
    std::iter::repeat_n(
      CalendarCell::Blank,
      leading
    )
  );
  let marks_today = today.year()
    == cursor.year
    && today.month0() == cursor.month;
  cells.extend((1..=day_count).map(
    |day| CalendarCell::Day {
      day,
      today: marks_today
        && today.day() == day
    }
  ));

  CalendarGrid {
    title,
    cells
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(
    y: i32,
    m: u32,
    d: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d)
      .expect("valid date")
  }

  #[test]
  fn april_2026_has_three_blanks_and_thirty_days()
  {
    let cursor =
      CalendarCursor::new(3, 2026)
        .expect("valid cursor");
    let grid =
      render(cursor, date(2026, 1, 1));

    assert_eq!(grid.title, "April 2026");
    assert_eq!(grid.leading_blanks(), 3);
    assert_eq!(grid.cells.len(), 33);
    let days: Vec<u32> = grid
      .cells
      .iter()
      .filter_map(|cell| match cell {
        | CalendarCell::Day {
          day,
          ..
        } => Some(*day),
        | CalendarCell::Blank => None
      })
      .collect();
    assert_eq!(
      days,
      (1..=30).collect::<Vec<_>>()
    );
  }

  #[test]
  fn today_is_marked_only_in_its_month()
  {
    let today = date(2026, 4, 17);
    let cursor =
      CalendarCursor::containing(today);
    let grid = render(cursor, today);
    let marked: Vec<&CalendarCell> = grid
      .cells
      .iter()
      .filter(|cell| {
        matches!(
          cell,
          CalendarCell::Day {
            today: true,
            ..
          }
        )
      })
      .collect();
    assert_eq!(marked.len(), 1);
    assert_eq!(
      *marked[0],
      CalendarCell::Day {
        day:   17,
        today: true
      }
    );
    assert!(
      marked[0]
        .class()
        .ends_with("calendar-today")
    );

    let other = render(
      CalendarCursor::containing(date(
        2025, 4, 1
      )),
      today
    );
    assert!(other.cells.iter().all(
      |cell| {
        !cell
          .class()
          .contains("calendar-today")
      }
    ));
  }

  #[test]
  fn prev_from_january_wraps_to_december()
  {
    let cursor =
      CalendarCursor::new(0, 2026)
        .expect("valid cursor");
    let prev = cursor.prev();
    assert_eq!(prev.month(), 11);
    assert_eq!(prev.year(), 2025);
    assert_eq!(
      prev.title(),
      "December 2025"
    );
  }

  #[test]
  fn next_from_december_wraps_to_january()
  {
    let cursor =
      CalendarCursor::new(11, 2026)
        .expect("valid cursor");
    let next = cursor.next();
    assert_eq!(next.month(), 0);
    assert_eq!(next.year(), 2027);
  }

  #[test]
  fn days_in_month_handles_leap_years() {
    assert_eq!(
      days_in_month(2024, 1),
      Some(29)
    );
    assert_eq!(
      days_in_month(2026, 1),
      Some(28)
    );
    assert_eq!(
      days_in_month(2026, 11),
      Some(31)
    );
    assert!(
      CalendarCursor::new(12, 2026)
        .is_none()
    );
  }
}
