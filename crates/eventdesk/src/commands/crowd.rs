//! Crowd density command handlers.

use tabled::Tabled;

use eventdesk_core::{
    Command as CoreCommand, CrowdReading, CrowdReadingRequest, Desk, Location,
    PersonCountRequest,
};

use crate::cli::{CrowdArgs, CrowdCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct CrowdRow {
    #[tabled(rename = "Area")]
    area: String,
    #[tabled(rename = "People")]
    people: u32,
    #[tabled(rename = "Radius m")]
    radius: String,
    #[tabled(rename = "People/m²")]
    density: String,
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "Time")]
    time: String,
}

impl From<&CrowdReading> for CrowdRow {
    fn from(r: &CrowdReading) -> Self {
        Self {
            area: r.area_name.clone(),
            people: r.person_count,
            radius: format!("{:.0}", r.radius_m),
            density: format!("{:.2}", r.people_per_m2),
            level: r.level.to_string(),
            time: util::fmt_time(r.timestamp.as_ref()),
        }
    }
}

fn reading_id(r: &CrowdReading) -> String {
    r.id.clone().unwrap_or_else(|| r.area_name.clone())
}

pub async fn handle(desk: &Desk, args: CrowdArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        CrowdCommand::List(list) => {
            let filter = util::filter_from(&list, global)?;
            let readings = util::apply_limit(desk.crowd_readings(&filter).await?, list.limit);
            let out =
                output::render_list(global.format(), &readings, |r| CrowdRow::from(r), reading_id)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CrowdCommand::Latest => {
            let event_id = util::require_event(global)?;
            let readings = desk.latest_crowd(&event_id).await?;
            let out =
                output::render_list(global.format(), &readings, |r| CrowdRow::from(r), reading_id)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CrowdCommand::Record {
            area,
            lat,
            lon,
            radius,
            count,
        } => {
            let request = CrowdReadingRequest {
                event_id: util::require_event(global)?,
                area_name: area,
                location: Location { lat, lon },
                radius_m: radius,
                person_count: count,
            };
            let result = desk
                .execute(CoreCommand::RecordCrowdReading(request))
                .await?;
            util::report_mutation("Reading recorded", &result, global)
        }

        CrowdCommand::Count {
            image,
            area,
            radius,
            save,
        } => {
            let bytes = tokio::fs::read(&image).await?;
            let file_name = image
                .file_name()
                .map_or_else(|| "image.jpg".into(), |n| n.to_string_lossy().into_owned());
            let request = PersonCountRequest {
                event_id: if save {
                    Some(util::require_event(global)?)
                } else {
                    global.event.clone()
                },
                area_name: area,
                radius_m: radius,
                save_record: save,
            };
            let count = desk.count_people(&file_name, bytes, request).await?;
            let out = output::render_single(
                global.format(),
                &count,
                |c| {
                    output::key_values(&[
                        ("Image", util::or_dash(c.image_filename.as_deref())),
                        ("People", c.person_count.to_string()),
                        ("Saved", save.to_string()),
                    ])
                },
                |c| c.person_count.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
