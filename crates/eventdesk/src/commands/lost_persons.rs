//! Lost-person command handlers.

use tabled::Tabled;

use eventdesk_core::{
    Command as CoreCommand, Desk, LostPerson, LostPersonReport, LostPersonStats,
    LostPersonStatus, Priority,
};

use crate::cli::{
    GlobalOpts, LostPersonsArgs, LostPersonsCommand, LostStatusArg, PhotoCommand,
};
use crate::error::CliError;
use crate::output::{self, Tone};

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct LostPersonRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Age")]
    age: u32,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Last Seen")]
    last_seen: String,
    #[tabled(rename = "Reported")]
    reported: String,
}

impl From<&LostPerson> for LostPersonRow {
    fn from(p: &LostPerson) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            age: p.age,
            priority: p.priority.to_string(),
            status: p.status.to_string(),
            last_seen: util::or_dash(p.last_seen_location.as_deref()),
            reported: util::fmt_time(p.reported_at.as_ref()),
        }
    }
}

fn priority_tone(priority: Priority) -> Tone {
    match priority {
        Priority::Critical => Tone::Bad,
        Priority::High => Tone::Warn,
        _ => Tone::Plain,
    }
}

fn detail(p: &LostPerson, color: bool) -> String {
    output::key_values(&[
        ("ID", p.id.clone()),
        ("Event", p.event_id.clone()),
        ("Name", p.name.clone()),
        ("Age", p.age.to_string()),
        ("Gender", util::or_dash(p.gender.as_deref())),
        (
            "Priority",
            output::paint(p.priority.as_ref(), priority_tone(p.priority), color),
        ),
        ("Status", p.status.to_string()),
        ("Description", util::or_dash(p.description.as_deref())),
        ("Last seen", util::or_dash(p.last_seen_location.as_deref())),
        ("Last seen at", util::fmt_time(p.last_seen_time.as_ref())),
        ("Photo", util::or_dash(p.photo_url.as_deref())),
        ("Reporter", util::or_dash(p.reporter_name.as_deref())),
        ("Phone", util::or_dash(p.reporter_phone.as_deref())),
        ("Reported", util::fmt_time(p.reported_at.as_ref())),
    ])
}

fn stats_detail(s: &LostPersonStats) -> String {
    let mut pairs = vec![("Total", s.total.to_string())];
    pairs.extend(s.by_status.iter().map(|(k, n)| (k.as_ref(), n.to_string())));
    pairs.extend(s.by_priority.iter().map(|(k, n)| (k.as_ref(), n.to_string())));
    output::key_values(&pairs)
}

fn status_of(arg: LostStatusArg) -> LostPersonStatus {
    match arg {
        LostStatusArg::Missing => LostPersonStatus::Missing,
        LostStatusArg::Searching => LostPersonStatus::Searching,
        LostStatusArg::Found => LostPersonStatus::Found,
        LostStatusArg::Resolved => LostPersonStatus::Resolved,
    }
}

// ── Handler ─────────────────────────────────────────────────────────

#[allow(clippy::too_many_lines)]
pub async fn handle(
    desk: &Desk,
    args: LostPersonsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let color = output::should_color(global.color_mode());
    match args.command {
        LostPersonsCommand::List(list) => {
            let filter = util::filter_from(&list, global)?;
            let persons = util::apply_limit(desk.lost_persons(&filter).await?, list.limit);
            let out = output::render_list(
                global.format(),
                &persons,
                |p| LostPersonRow::from(p),
                |p| p.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        LostPersonsCommand::Get { id } => {
            let person = desk.lost_person(&id).await?;
            let out = output::render_single(
                global.format(),
                &person,
                |p| detail(p, color),
                |p| p.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        LostPersonsCommand::Report {
            name,
            age,
            gender,
            description,
            last_seen,
            last_seen_time,
            reporter_id,
            reporter_name,
            reporter_phone,
            from_file,
        } => {
            let mut report = if let Some(path) = from_file {
                util::read_json_file::<LostPersonReport>(&path)?
            } else {
                LostPersonReport {
                    event_id: String::new(),
                    name: name.unwrap_or_default(),
                    age: age.unwrap_or_default(),
                    gender,
                    description,
                    last_seen_location: last_seen.unwrap_or_default(),
                    last_seen_time: last_seen_time.unwrap_or_default(),
                    reporter_id,
                    reporter_name: reporter_name.unwrap_or_default(),
                    reporter_phone: reporter_phone.unwrap_or_default(),
                }
            };
            if report.event_id.is_empty() {
                report.event_id = util::require_event(global)?;
            }
            let result = desk.execute(CoreCommand::ReportLostPerson(report)).await?;
            util::report_mutation("Report filed", &result, global)
        }

        LostPersonsCommand::Status { id, status } => {
            let result = desk
                .execute(CoreCommand::SetLostPersonStatus {
                    id,
                    status: status_of(status),
                })
                .await?;
            util::report_mutation("Report status updated", &result, global)
        }

        LostPersonsCommand::Photo(photo) => match photo.command {
            PhotoCommand::Upload { id, path } => {
                let bytes = tokio::fs::read(&path).await?;
                let file_name = path
                    .file_name()
                    .map_or_else(|| "photo.jpg".into(), |n| n.to_string_lossy().into_owned());
                let result = desk
                    .execute(CoreCommand::UploadLostPersonPhoto {
                        id,
                        file_name,
                        bytes,
                    })
                    .await?;
                util::report_mutation("Photo uploaded", &result, global)
            }
            PhotoCommand::Delete { id } => {
                if !util::confirm(&format!("Remove the photo from report '{id}'?"), global.yes)? {
                    return Ok(());
                }
                let result = desk
                    .execute(CoreCommand::DeleteLostPersonPhoto { id })
                    .await?;
                util::report_mutation("Photo removed", &result, global)
            }
        },

        LostPersonsCommand::Active => {
            let event_id = util::require_event(global)?;
            let persons = desk.active_lost_persons(&event_id).await?;
            let out = output::render_list(
                global.format(),
                &persons,
                |p| LostPersonRow::from(p),
                |p| p.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        LostPersonsCommand::Stats => {
            let event_id = util::require_event(global)?;
            let stats = desk.lost_person_stats(&event_id).await?;
            let out = output::render_single(global.format(), &stats, stats_detail, |s| {
                s.total.to_string()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
