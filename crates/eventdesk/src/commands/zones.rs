//! Zone command handlers.

use tabled::Tabled;

use eventdesk_core::{Command as CoreCommand, DensityStatus, Desk, Zone, ZoneRequest};

use crate::cli::{DensityArg, GlobalOpts, ZonesArgs, ZonesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ZoneRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "People")]
    people: u32,
    #[tabled(rename = "Capacity")]
    capacity: u32,
    #[tabled(rename = "Density")]
    status: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl From<&Zone> for ZoneRow {
    fn from(z: &Zone) -> Self {
        Self {
            id: z.id.clone(),
            name: z.name.clone(),
            people: z.current_density,
            capacity: z.capacity,
            status: z.density_status.to_string(),
            updated: util::fmt_time(z.last_updated.as_ref()),
        }
    }
}

fn detail(z: &Zone) -> String {
    output::key_values(&[
        ("ID", z.id.clone()),
        ("Event", z.event_id.clone()),
        ("Name", z.name.clone()),
        ("People", z.current_density.to_string()),
        ("Capacity", z.capacity.to_string()),
        ("Density", z.density_status.to_string()),
        ("Image", util::or_dash(z.image_url.as_deref())),
        ("Updated", util::fmt_time(z.last_updated.as_ref())),
    ])
}

fn density_of(arg: DensityArg) -> DensityStatus {
    match arg {
        DensityArg::Low => DensityStatus::Low,
        DensityArg::Moderate => DensityStatus::Moderate,
        DensityArg::Crowded => DensityStatus::Crowded,
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(desk: &Desk, args: ZonesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ZonesCommand::List(list) => {
            let filter = util::filter_from(&list, global)?;
            let zones = util::apply_limit(desk.zones(&filter).await?, list.limit);
            let out = output::render_list(
                global.format(),
                &zones,
                |z| ZoneRow::from(z),
                |z| z.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ZonesCommand::Get { id } => {
            let zone = desk.zone(&id).await?;
            let out = output::render_single(global.format(), &zone, detail, |z| z.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ZonesCommand::Create {
            name,
            capacity,
            current,
            image_url,
            from_file,
        } => {
            let request = if let Some(path) = from_file {
                let mut request = util::read_json_file::<ZoneRequest>(&path)?;
                if request.event_id.is_empty() {
                    request.event_id = util::require_event(global)?;
                }
                request
            } else {
                ZoneRequest {
                    event_id: util::require_event(global)?,
                    name: name.unwrap_or_default(),
                    capacity: capacity.unwrap_or_default(),
                    current_density: current,
                    density_status: None,
                    image_url,
                }
            };
            let result = desk.execute(CoreCommand::CreateZone(request)).await?;
            util::report_mutation("Zone created", &result, global)
        }

        ZonesCommand::Update { id, from_file } => {
            let update = util::read_json_file::<ZoneRequest>(&from_file)?;
            let result = desk.execute(CoreCommand::UpdateZone { id, update }).await?;
            util::report_mutation("Zone updated", &result, global)
        }

        ZonesCommand::Density { id, count, status } => {
            let result = desk
                .execute(CoreCommand::SetZoneDensity {
                    id,
                    current_density: count,
                    status: status.map(density_of),
                })
                .await?;
            util::report_mutation("Head count recorded", &result, global)
        }

        ZonesCommand::Delete { id } => {
            if !util::confirm(&format!("Delete zone '{id}'?"), global.yes)? {
                return Ok(());
            }
            let result = desk.execute(CoreCommand::DeleteZone { id }).await?;
            util::report_mutation("Zone deleted", &result, global)
        }
    }
}
