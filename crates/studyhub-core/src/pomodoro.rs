use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PomodoroConfig;

pub const WORK_COMPLETE_MESSAGE: &str = "Work session complete! Take a break!";
pub const BREAK_COMPLETE_MESSAGE: &str = "Break time over! Ready to work?";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "Focus",
            Self::Break => "Break",
        }
    }

    fn flipped(self) -> Self {
        match self {
            Self::Work => Self::Break,
            Self::Break => Self::Work,
        }
    }
}

/// Coarse state of the timer. Paused is not a state of its own: a paused
/// timer is `Idle` with time already elapsed in the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running(Phase),
}

/// Emitted by [`Pomodoro::tick`] when the remaining time hits zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseChange {
    pub finished: Phase,
    pub next: Phase,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pomodoro {
    work_seconds: u32,
    break_seconds: u32,
    remaining: u32,
    running: bool,
    phase: Phase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerView {
    pub display: String,
    pub phase_label: &'static str,
    pub running: bool,
    pub on_break: bool,
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self::new(&PomodoroConfig::default())
    }
}

impl Pomodoro {
    pub fn new(config: &PomodoroConfig) -> Self {
        Self {
            work_seconds: config.work_seconds,
            break_seconds: config.break_seconds,
            remaining: config.work_seconds,
            running: false,
            phase: Phase::Work,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> TimerState {
        if self.running {
            TimerState::Running(self.phase)
        } else {
            TimerState::Idle
        }
    }

    /// Returns `false` when the timer was already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        debug!(phase = ?self.phase, remaining = self.remaining, "timer started");
        true
    }

    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        debug!(phase = ?self.phase, remaining = self.remaining, "timer paused");
        true
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.phase = Phase::Work;
        self.remaining = self.work_seconds;
        debug!(remaining = self.remaining, "timer reset");
    }

    /// Advances the timer by one second. At zero the phase flips, the
    /// remaining time is restored to the new phase's duration and the timer
    /// stops until started again.
    pub fn tick(&mut self) -> Option<PhaseChange> {
        if !self.running {
            return None;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return None;
        }

        let finished = self.phase;
        let next = finished.flipped();
        self.running = false;
        self.phase = next;
        self.remaining = self.duration_of(next);

        debug!(?finished, ?next, remaining = self.remaining, "phase change");

        Some(PhaseChange {
            finished,
            next,
            message: match finished {
                Phase::Work => WORK_COMPLETE_MESSAGE,
                Phase::Break => BREAK_COMPLETE_MESSAGE,
            },
        })
    }

    pub fn view(&self) -> TimerView {
        TimerView {
            display: format_clock(self.remaining),
            phase_label: self.phase.label(),
            running: self.running,
            on_break: self.phase == Phase::Break,
        }
    }

    fn duration_of(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work_seconds,
            Phase::Break => self.break_seconds,
        }
    }
}

/// `MM:SS`, zero padded. Minutes are not wrapped into hours.
pub fn format_clock(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_ticks(timer: &mut Pomodoro, count: u32) -> Vec<PhaseChange> {
        (0..count).filter_map(|_| timer.tick()).collect()
    }

    #[test]
    fn work_phase_rolls_into_break_after_1500_ticks() {
        let mut timer = Pomodoro::default();
        assert!(timer.start());

        let changes = run_ticks(&mut timer, 1499);
        assert!(changes.is_empty());
        assert_eq!(timer.remaining(), 1);

        let change = timer.tick().expect("phase change at zero");
        assert_eq!(change.finished, Phase::Work);
        assert_eq!(change.next, Phase::Break);
        assert_eq!(change.message, WORK_COMPLETE_MESSAGE);
        assert_eq!(timer.remaining(), 300);
        assert_eq!(timer.phase(), Phase::Break);
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn break_phase_rolls_back_into_work() {
        let mut timer = Pomodoro::default();
        timer.start();
        run_ticks(&mut timer, 1500);

        timer.start();
        let changes = run_ticks(&mut timer, 300);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].message, BREAK_COMPLETE_MESSAGE);
        assert_eq!(timer.phase(), Phase::Work);
        assert_eq!(timer.remaining(), 1500);
    }

    #[test]
    fn double_start_is_guarded() {
        let mut timer = Pomodoro::default();
        assert!(timer.start());
        assert!(!timer.start());
        assert_eq!(timer.state(), TimerState::Running(Phase::Work));
    }

    #[test]
    fn pause_keeps_remaining_and_ignores_ticks() {
        let mut timer = Pomodoro::default();
        timer.start();
        run_ticks(&mut timer, 42);
        assert!(timer.pause());
        assert!(!timer.pause());

        run_ticks(&mut timer, 10);
        assert_eq!(timer.remaining(), 1500 - 42);
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn pause_then_reset_restores_work_duration() {
        let mut timer = Pomodoro::default();
        timer.start();
        run_ticks(&mut timer, 1500 + 17);
        timer.start();
        run_ticks(&mut timer, 5);
        timer.pause();
        timer.reset();

        assert_eq!(timer.remaining(), 1500);
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.phase(), Phase::Work);
    }

    #[test]
    fn view_formats_clock() {
        let mut timer = Pomodoro::default();
        assert_eq!(timer.view().display, "25:00");
        timer.start();
        run_ticks(&mut timer, 61);
        let view = timer.view();
        assert_eq!(view.display, "23:59");
        assert!(view.running);
        assert!(!view.on_break);
        assert_eq!(format_clock(5), "00:05");
    }

    #[test]
    fn custom_durations_are_respected() {
        let mut timer = Pomodoro::new(&PomodoroConfig {
            work_seconds: 3,
            break_seconds: 2,
            tick_ms: 1_000,
        });
        timer.start();
        assert_eq!(run_ticks(&mut timer, 3).len(), 1);
        assert_eq!(timer.remaining(), 2);
    }
}
