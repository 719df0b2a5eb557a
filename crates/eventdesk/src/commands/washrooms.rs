//! Washroom command handlers.

use tabled::Tabled;

use eventdesk_core::{
    Availability, Command as CoreCommand, Desk, Washroom, WashroomGender, WashroomRequest,
};

use crate::cli::{AvailabilityArg, GenderArg, GlobalOpts, WashroomsArgs, WashroomsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct WashroomRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Gender")]
    gender: String,
    #[tabled(rename = "Floor")]
    floor: String,
    #[tabled(rename = "Stalls")]
    capacity: u32,
    #[tabled(rename = "Availability")]
    availability: String,
}

impl From<&Washroom> for WashroomRow {
    fn from(w: &Washroom) -> Self {
        Self {
            id: w.id.clone(),
            name: w.name.clone(),
            gender: w.gender.to_string(),
            floor: util::or_dash(w.floor_level.as_deref()),
            capacity: w.capacity,
            availability: w.availability.to_string(),
        }
    }
}

fn detail(w: &Washroom) -> String {
    output::key_values(&[
        ("ID", w.id.clone()),
        ("Event", w.event_id.clone()),
        ("Name", w.name.clone()),
        ("Gender", w.gender.to_string()),
        ("Floor", util::or_dash(w.floor_level.as_deref())),
        ("Stalls", w.capacity.to_string()),
        ("Availability", w.availability.to_string()),
        ("Directions", util::or_dash(w.location_details.as_deref())),
    ])
}

fn gender_of(arg: GenderArg) -> WashroomGender {
    match arg {
        GenderArg::Male => WashroomGender::Male,
        GenderArg::Female => WashroomGender::Female,
        GenderArg::Unisex => WashroomGender::Unisex,
    }
}

fn availability_of(arg: AvailabilityArg) -> Availability {
    match arg {
        AvailabilityArg::Available => Availability::Available,
        AvailabilityArg::Occupied => Availability::Occupied,
        AvailabilityArg::Maintenance => Availability::Maintenance,
    }
}

pub async fn handle(
    desk: &Desk,
    args: WashroomsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        WashroomsCommand::List(list) => {
            let filter = util::filter_from(&list, global)?;
            let washrooms = util::apply_limit(desk.washrooms(&filter).await?, list.limit);
            let out = output::render_list(
                global.format(),
                &washrooms,
                |w| WashroomRow::from(w),
                |w| w.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        WashroomsCommand::Get { id } => {
            let washroom = desk.washroom(&id).await?;
            let out =
                output::render_single(global.format(), &washroom, detail, |w| w.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        WashroomsCommand::Create {
            name,
            gender,
            capacity,
            floor,
            availability,
            location_details,
        } => {
            let request = WashroomRequest {
                event_id: util::require_event(global)?,
                name,
                gender: gender_of(gender),
                floor_level: floor,
                capacity,
                availability: availability.map(availability_of),
                location_details,
            };
            let result = desk.execute(CoreCommand::CreateWashroom(request)).await?;
            util::report_mutation("Washroom registered", &result, global)
        }

        WashroomsCommand::Update { id, from_file } => {
            let update = util::read_json_file::<WashroomRequest>(&from_file)?;
            let result = desk
                .execute(CoreCommand::UpdateWashroom { id, update })
                .await?;
            util::report_mutation("Washroom updated", &result, global)
        }

        WashroomsCommand::Status { id, availability } => {
            let result = desk
                .execute(CoreCommand::SetWashroomStatus {
                    id,
                    availability: availability_of(availability),
                })
                .await?;
            util::report_mutation("Washroom availability updated", &result, global)
        }

        WashroomsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete washroom '{id}'?"), global.yes)? {
                return Ok(());
            }
            let result = desk.execute(CoreCommand::DeleteWashroom { id }).await?;
            util::report_mutation("Washroom deleted", &result, global)
        }
    }
}
