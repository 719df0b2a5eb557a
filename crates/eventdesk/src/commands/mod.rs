//! Command dispatch: bridges CLI args -> desk reads and Commands -> output formatting.

pub mod alerts;
pub mod config_cmd;
pub mod crowd;
pub mod dashboard;
pub mod events;
pub mod exits;
pub mod feedback;
pub mod lost_persons;
pub mod medical;
pub mod util;
pub mod washrooms;
pub mod zones;

use eventdesk_core::Desk;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, desk: &Desk, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Events(args) => events::handle(desk, args, global).await,
        Command::Zones(args) => zones::handle(desk, args, global).await,
        Command::LostPersons(args) => lost_persons::handle(desk, args, global).await,
        Command::Medical(args) => medical::handle(desk, args, global).await,
        Command::Exits(args) => exits::handle(desk, args, global).await,
        Command::Washrooms(args) => washrooms::handle(desk, args, global).await,
        Command::Feedback(args) => feedback::handle(desk, args, global).await,
        Command::Crowd(args) => crowd::handle(desk, args, global).await,
        Command::Alerts(args) => alerts::handle(desk, args, global).await,
        Command::Dashboard(args) => dashboard::handle(desk, args, global).await,
        Command::Config(args) => config_cmd::handle(args, global),
        // Generated in `main` before any backend is resolved.
        Command::Completions(_) => Ok(()),
    }
}
