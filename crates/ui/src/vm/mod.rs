mod game_vm;
mod time_fmt;

pub use game_vm::{GameIntent, GameVm, ProblemLineVm, map_problem_line};
pub use time_fmt::{format_datetime, format_time_left};
