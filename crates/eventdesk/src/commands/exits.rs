//! Emergency exit command handlers.

use tabled::Tabled;

use eventdesk_core::{Command as CoreCommand, Desk, EmergencyExit, ExitRequest, ExitStatus};

use crate::cli::{ExitStatusArg, ExitsArgs, ExitsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ExitRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Flow/min")]
    flow: String,
    #[tabled(rename = "Capacity/min")]
    capacity: String,
}

impl From<&EmergencyExit> for ExitRow {
    fn from(x: &EmergencyExit) -> Self {
        Self {
            id: x.id.clone(),
            name: x.name.clone(),
            location: util::or_dash(x.location.as_deref()),
            status: x.status.to_string(),
            flow: util::opt_num(x.current_flow_rate),
            capacity: util::opt_num(x.capacity),
        }
    }
}

fn detail(x: &EmergencyExit) -> String {
    output::key_values(&[
        ("ID", x.id.clone()),
        ("Event", x.event_id.clone()),
        ("Name", x.name.clone()),
        ("Location", util::or_dash(x.location.as_deref())),
        ("Status", x.status.to_string()),
        ("Flow/min", util::opt_num(x.current_flow_rate)),
        ("Capacity/min", util::opt_num(x.capacity)),
        ("Updated", util::fmt_time(x.last_updated.as_ref())),
    ])
}

fn status_of(arg: ExitStatusArg) -> ExitStatus {
    match arg {
        ExitStatusArg::Clear => ExitStatus::Clear,
        ExitStatusArg::Moderate => ExitStatus::Moderate,
        ExitStatusArg::Crowded => ExitStatus::Crowded,
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(desk: &Desk, args: ExitsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ExitsCommand::List(list) => {
            let filter = util::filter_from(&list, global)?;
            let exits = util::apply_limit(desk.exits(&filter).await?, list.limit);
            let out = output::render_list(
                global.format(),
                &exits,
                |x| ExitRow::from(x),
                |x| x.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ExitsCommand::Get { id } => {
            let exit = desk.exit(&id).await?;
            let out = output::render_single(global.format(), &exit, detail, |x| x.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ExitsCommand::Create {
            name,
            location,
            status,
            capacity,
            flow_rate,
        } => {
            let request = ExitRequest {
                event_id: util::require_event(global)?,
                name,
                location,
                status: status_of(status),
                capacity,
                current_flow_rate: flow_rate,
            };
            let result = desk.execute(CoreCommand::CreateExit(request)).await?;
            util::report_mutation("Exit registered", &result, global)
        }

        ExitsCommand::Update { id, from_file } => {
            let update = util::read_json_file::<ExitRequest>(&from_file)?;
            let result = desk.execute(CoreCommand::UpdateExit { id, update }).await?;
            util::report_mutation("Exit updated", &result, global)
        }

        ExitsCommand::Status { id, status } => {
            let result = desk
                .execute(CoreCommand::SetExitStatus {
                    id,
                    status: status_of(status),
                })
                .await?;
            util::report_mutation("Exit status updated", &result, global)
        }

        ExitsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete exit '{id}'?"), global.yes)? {
                return Ok(());
            }
            let result = desk.execute(CoreCommand::DeleteExit { id }).await?;
            util::report_mutation("Exit deleted", &result, global)
        }
    }
}
