//! Event command handlers.

use tabled::Tabled;

use eventdesk_core::{Command as CoreCommand, Desk, Event, EventRequest, EventStatus, RecordFilter};

use crate::cli::{EventStatusArg, EventsArgs, EventsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Attendees")]
    attendees: String,
}

impl From<&Event> for EventRow {
    fn from(e: &Event) -> Self {
        Self {
            id: e.id.clone(),
            name: e.name.clone(),
            status: e.status.to_string(),
            start: util::fmt_time(e.start_time.as_ref()),
            location: util::or_dash(e.location.as_deref()),
            attendees: match (e.attendees_count, e.capacity) {
                (Some(a), Some(c)) => format!("{a}/{c}"),
                (a, c) => util::opt_num(a.or(c)),
            },
        }
    }
}

fn detail(e: &Event) -> String {
    let mut lines = output::key_values(&[
        ("ID", e.id.clone()),
        ("Name", e.name.clone()),
        ("Status", e.status.to_string()),
        ("Start", util::fmt_time(e.start_time.as_ref())),
        ("End", util::fmt_time(e.end_time.as_ref())),
        ("Location", util::or_dash(e.location.as_deref())),
        ("Capacity", util::opt_num(e.capacity)),
        ("Attendees", util::opt_num(e.attendees_count)),
        ("Organizer", util::or_dash(e.organizer_id.as_deref())),
        ("Description", util::or_dash(e.description.as_deref())),
    ]);
    for area in &e.areas {
        lines.push_str(&format!(
            "\n  area {} ({:.5}, {:.5}) r={}m",
            area.name, area.location.lat, area.location.lon, area.radius_m
        ));
    }
    lines
}

fn status_of(arg: EventStatusArg) -> EventStatus {
    match arg {
        EventStatusArg::Upcoming => EventStatus::Upcoming,
        EventStatusArg::Live => EventStatus::Live,
        EventStatusArg::Completed => EventStatus::Completed,
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(desk: &Desk, args: EventsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        EventsCommand::List(list) => {
            // Events are not scoped to an event.
            let filter = RecordFilter {
                event_id: None,
                status: list.status.clone(),
                priority: None,
                search: list.search.clone(),
            };
            let events = util::apply_limit(desk.events(&filter).await?, list.limit);
            let out = output::render_list(
                global.format(),
                &events,
                |e| EventRow::from(e),
                |e| e.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        EventsCommand::Get { id } => {
            let event = desk.event(&id).await?;
            let out = output::render_single(global.format(), &event, detail, |e| e.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        EventsCommand::Create {
            name,
            start,
            end,
            description,
            location,
            capacity,
            organizer,
            from_file,
        } => {
            let request = if let Some(path) = from_file {
                util::read_json_file::<EventRequest>(&path)?
            } else {
                EventRequest {
                    name: name.unwrap_or_default(),
                    start_time: start.unwrap_or_default(),
                    end_time: end.unwrap_or_default(),
                    description,
                    location,
                    capacity,
                    organizer_id: organizer,
                    ..EventRequest::default()
                }
            };
            let result = desk.execute(CoreCommand::CreateEvent(request)).await?;
            util::report_mutation("Event created", &result, global)
        }

        EventsCommand::Update { id, from_file } => {
            let update = util::read_json_file::<EventRequest>(&from_file)?;
            let result = desk.execute(CoreCommand::UpdateEvent { id, update }).await?;
            util::report_mutation("Event updated", &result, global)
        }

        EventsCommand::Status { id, status } => {
            let result = desk
                .execute(CoreCommand::SetEventStatus {
                    id,
                    status: status_of(status),
                })
                .await?;
            util::report_mutation("Event status updated", &result, global)
        }

        EventsCommand::Delete { id } => {
            if !util::confirm(
                &format!("Delete event '{id}' and everything filed under it?"),
                global.yes,
            )? {
                return Ok(());
            }
            let result = desk.execute(CoreCommand::DeleteEvent { id }).await?;
            util::report_mutation("Event deleted", &result, global)
        }
    }
}
