pub mod calendar;
pub mod chat;
pub mod config;
pub mod deadlines;
pub mod notify;
pub mod pomodoro;
pub mod quotes;
pub mod route;
pub mod storage;
pub mod todo;

pub use config::StudyConfig;
pub use route::{
  Route,
  RouteTable
};
