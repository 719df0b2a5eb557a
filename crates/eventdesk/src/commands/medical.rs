//! Medical emergency and facility command handlers.

use tabled::Tabled;

use eventdesk_core::{
    Command as CoreCommand, Desk, EmergencyReport, EmergencyStats, EmergencyStatus,
    EmergencyType, FacilityRequest, FacilityType, MedicalEmergency, MedicalFacility, Severity,
};

use crate::cli::{
    EmergenciesArgs, EmergenciesCommand, EmergencyStatusArg, EmergencyTypeArg, FacilitiesArgs,
    FacilitiesCommand, FacilityTypeArg, GlobalOpts, MedicalArgs, MedicalCommand, SeverityArg,
};
use crate::error::CliError;
use crate::output::{self, Tone};

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct EmergencyRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Responder")]
    responder: String,
    #[tabled(rename = "Reported")]
    reported: String,
}

impl From<&MedicalEmergency> for EmergencyRow {
    fn from(e: &MedicalEmergency) -> Self {
        Self {
            id: e.id.clone(),
            kind: e.emergency_type.to_string(),
            severity: e.severity.to_string(),
            status: e.status.to_string(),
            location: util::or_dash(e.location.as_deref()),
            responder: util::or_dash(e.responder_name.as_deref()),
            reported: util::fmt_time(e.reported_at.as_ref()),
        }
    }
}

#[derive(Tabled)]
struct FacilityRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Contact")]
    contact: String,
    #[tabled(rename = "Address")]
    address: String,
}

impl From<&MedicalFacility> for FacilityRow {
    fn from(f: &MedicalFacility) -> Self {
        Self {
            id: f.id.clone(),
            name: f.name.clone(),
            kind: f.facility_type.to_string(),
            contact: util::or_dash(f.contact_number.as_deref()),
            address: util::or_dash(f.address.as_deref()),
        }
    }
}

fn severity_tone(severity: Severity) -> Tone {
    match severity {
        Severity::Critical => Tone::Bad,
        Severity::Severe => Tone::Warn,
        _ => Tone::Plain,
    }
}

fn emergency_detail(e: &MedicalEmergency, color: bool) -> String {
    output::key_values(&[
        ("ID", e.id.clone()),
        ("Event", e.event_id.clone()),
        ("Type", e.emergency_type.to_string()),
        (
            "Severity",
            output::paint(e.severity.as_ref(), severity_tone(e.severity), color),
        ),
        ("Status", e.status.to_string()),
        ("Location", util::or_dash(e.location.as_deref())),
        ("Patient", util::or_dash(e.patient_name.as_deref())),
        ("Patient age", util::opt_num(e.patient_age)),
        ("Description", util::or_dash(e.description.as_deref())),
        ("Responder", util::or_dash(e.responder_name.as_deref())),
        (
            "Response",
            e.response_time_min
                .map_or_else(|| "-".into(), |m| format!("{m} min")),
        ),
        ("Reported", util::fmt_time(e.reported_at.as_ref())),
    ])
}

fn facility_detail(f: &MedicalFacility) -> String {
    output::key_values(&[
        ("ID", f.id.clone()),
        ("Event", f.event_id.clone()),
        ("Name", f.name.clone()),
        ("Type", f.facility_type.to_string()),
        ("Contact", util::or_dash(f.contact_number.as_deref())),
        ("Address", util::or_dash(f.address.as_deref())),
    ])
}

fn stats_detail(s: &EmergencyStats) -> String {
    let mut pairs = vec![("Total", s.total.to_string())];
    pairs.extend(s.by_severity.iter().map(|(k, n)| (k.as_ref(), n.to_string())));
    pairs.extend(s.by_status.iter().map(|(k, n)| (k.as_ref(), n.to_string())));
    pairs.extend(s.by_type.iter().map(|(k, n)| (k.as_ref(), n.to_string())));
    output::key_values(&pairs)
}

// ── Arg mapping ─────────────────────────────────────────────────────

fn type_of(arg: EmergencyTypeArg) -> EmergencyType {
    match arg {
        EmergencyTypeArg::Injury => EmergencyType::Injury,
        EmergencyTypeArg::Illness => EmergencyType::Illness,
        EmergencyTypeArg::Heatstroke => EmergencyType::Heatstroke,
        EmergencyTypeArg::Cardiac => EmergencyType::Cardiac,
        EmergencyTypeArg::Other => EmergencyType::Other,
    }
}

fn severity_of(arg: SeverityArg) -> Severity {
    match arg {
        SeverityArg::Critical => Severity::Critical,
        SeverityArg::Severe => Severity::Severe,
        SeverityArg::Moderate => Severity::Moderate,
        SeverityArg::Minor => Severity::Minor,
    }
}

fn status_of(arg: EmergencyStatusArg) -> EmergencyStatus {
    match arg {
        EmergencyStatusArg::Reported => EmergencyStatus::Reported,
        EmergencyStatusArg::ResponderDispatched => EmergencyStatus::ResponderDispatched,
        EmergencyStatusArg::OnScene => EmergencyStatus::OnScene,
        EmergencyStatusArg::Transported => EmergencyStatus::Transported,
        EmergencyStatusArg::Resolved => EmergencyStatus::Resolved,
    }
}

fn facility_type_of(arg: FacilityTypeArg) -> FacilityType {
    match arg {
        FacilityTypeArg::Hospital => FacilityType::Hospital,
        FacilityTypeArg::Clinic => FacilityType::Clinic,
        FacilityTypeArg::FirstAid => FacilityType::FirstAid,
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn handle(desk: &Desk, args: MedicalArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        MedicalCommand::Emergencies(args) => handle_emergencies(desk, args, global).await,
        MedicalCommand::Facilities(args) => handle_facilities(desk, args, global).await,
    }
}

async fn handle_emergencies(
    desk: &Desk,
    args: EmergenciesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let color = output::should_color(global.color_mode());
    match args.command {
        EmergenciesCommand::List(list) => {
            let filter = util::filter_from(&list, global)?;
            let emergencies = util::apply_limit(desk.emergencies(&filter).await?, list.limit);
            let out = output::render_list(
                global.format(),
                &emergencies,
                |e| EmergencyRow::from(e),
                |e| e.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        EmergenciesCommand::Get { id } => {
            let emergency = desk.emergency(&id).await?;
            let out = output::render_single(
                global.format(),
                &emergency,
                |e| emergency_detail(e, color),
                |e| e.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        EmergenciesCommand::Report {
            emergency_type,
            severity,
            location,
            patient_name,
            patient_age,
            description,
        } => {
            let report = EmergencyReport {
                event_id: util::require_event(global)?,
                emergency_type: type_of(emergency_type),
                severity: severity_of(severity),
                patient_name,
                patient_age,
                description,
                location,
            };
            let result = desk.execute(CoreCommand::ReportEmergency(report)).await?;
            util::report_mutation("Emergency reported", &result, global)
        }

        EmergenciesCommand::Status {
            id,
            status,
            responder,
            response_time,
        } => {
            let result = desk
                .execute(CoreCommand::SetEmergencyStatus {
                    id,
                    status: status_of(status),
                    responder_name: responder,
                    response_time_min: response_time,
                })
                .await?;
            util::report_mutation("Emergency status updated", &result, global)
        }

        EmergenciesCommand::Stats => {
            let event_id = util::require_event(global)?;
            let stats = desk.emergency_stats(&event_id).await?;
            let out = output::render_single(global.format(), &stats, stats_detail, |s| {
                s.total.to_string()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

async fn handle_facilities(
    desk: &Desk,
    args: FacilitiesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        FacilitiesCommand::List(list) => {
            let filter = util::filter_from(&list, global)?;
            let facilities = util::apply_limit(desk.facilities(&filter).await?, list.limit);
            let out = output::render_list(
                global.format(),
                &facilities,
                |f| FacilityRow::from(f),
                |f| f.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FacilitiesCommand::Get { id } => {
            let facility = desk.facility(&id).await?;
            let out =
                output::render_single(global.format(), &facility, facility_detail, |f| {
                    f.id.clone()
                })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FacilitiesCommand::Create {
            name,
            facility_type,
            contact,
            address,
        } => {
            let request = FacilityRequest {
                event_id: util::require_event(global)?,
                name,
                facility_type: facility_type_of(facility_type),
                contact_number: contact,
                address,
            };
            let result = desk.execute(CoreCommand::CreateFacility(request)).await?;
            util::report_mutation("Facility registered", &result, global)
        }

        FacilitiesCommand::Update { id, from_file } => {
            let update = util::read_json_file::<FacilityRequest>(&from_file)?;
            let result = desk
                .execute(CoreCommand::UpdateFacility { id, update })
                .await?;
            util::report_mutation("Facility updated", &result, global)
        }

        FacilitiesCommand::Delete { id } => {
            if !util::confirm(&format!("Delete facility '{id}'?"), global.yes)? {
                return Ok(());
            }
            let result = desk.execute(CoreCommand::DeleteFacility { id }).await?;
            util::report_mutation("Facility deleted", &result, global)
        }
    }
}
