// ── Desk: the operator-facing facade ──
//
// Wraps one `BackendClient` and exposes typed reads, the `Command` write
// path and dashboard assembly. Reads go through per-view slots so that a
// newer fetch for the same view supersedes an older one still in flight.

use std::collections::HashMap;
use std::future::Future;
use std::str::FromStr;
use std::sync::Arc;

use eventdesk_api::BackendClient;
use eventdesk_api::types::{
    AlertQuery, CrowdDensityQuery, EmergencyStatusUpdate, EventQuery, EventScope, FeedbackQuery,
    LostPersonQuery, MedicalEmergencyQuery,
};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::command::{Collection, Command, CommandResult, PersonCountRequest, Record};
use crate::config::DeskConfig;
use crate::convert::convert_all;
use crate::error::CoreError;
use crate::filter::RecordFilter;
use crate::model::{
    Alert, AlertSeverity, CrowdLevel, CrowdReading, EmergencyExit, EmergencyStats,
    EmergencyStatus, Event, EventStatus, Feedback, FeedbackStats, LostPerson, LostPersonStats,
    LostPersonStatus, MedicalEmergency, MedicalFacility, PersonCount, Severity, Washroom,
    WeatherReading, Zone,
};
use crate::view::{EventDashboard, EventSnapshot};

/// Default page size for "recent feedback".
pub const RECENT_FEEDBACK_LIMIT: u32 = 10;

// ── Latest-wins view slots ───────────────────────────────────────

/// The screens whose fetches supersede one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    Events,
    Zones,
    LostPersons,
    Emergencies,
    Facilities,
    Exits,
    Washrooms,
    Feedback,
    Crowd,
    Alerts,
    Dashboard,
}

/// Tracks the fetch currently allowed to deliver results for one view.
///
/// Starting a new fetch through [`run`](Self::run) cancels the previous
/// one, which then resolves to [`CoreError::Cancelled`] instead of its data.
#[derive(Debug, Clone, Default)]
pub struct ViewSlot {
    current: Arc<Mutex<CancellationToken>>,
}

impl ViewSlot {
    async fn claim(&self) -> CancellationToken {
        let mut current = self.current.lock().await;
        current.cancel();
        let token = CancellationToken::new();
        *current = token.clone();
        token
    }

    /// Run `fetch` as the newest request for this view.
    pub async fn run<T, F>(&self, fetch: F) -> Result<T, CoreError>
    where
        F: Future<Output = Result<T, CoreError>>,
    {
        let token = self.claim().await;
        tokio::select! {
            biased;
            () = token.cancelled() => Err(CoreError::Cancelled),
            result = fetch => {
                if token.is_cancelled() {
                    Err(CoreError::Cancelled)
                } else {
                    result
                }
            }
        }
    }
}

// ── Desk ─────────────────────────────────────────────────────────

/// Cheaply cloneable handle to one backend.
#[derive(Clone)]
pub struct Desk {
    inner: Arc<DeskInner>,
}

struct DeskInner {
    config: DeskConfig,
    client: BackendClient,
    slots: Mutex<HashMap<ViewKey, ViewSlot>>,
}

impl Desk {
    /// Build the HTTP client for `config`. No request is made yet.
    pub fn new(config: DeskConfig) -> Result<Self, CoreError> {
        let client = BackendClient::new(config.url.as_str(), &config.transport(), config.retry)?;
        Ok(Self::with_client(config, client))
    }

    /// Wrap an already-built client (tests point this at a mock server).
    pub fn with_client(config: DeskConfig, client: BackendClient) -> Self {
        Self {
            inner: Arc::new(DeskInner {
                config,
                client,
                slots: Mutex::new(HashMap::new()),
            }),
        }
    }

    pub fn config(&self) -> &DeskConfig {
        &self.inner.config
    }

    fn client(&self) -> &BackendClient {
        &self.inner.client
    }

    /// The slot for `key`, created on first use.
    pub async fn view(&self, key: ViewKey) -> ViewSlot {
        self.inner
            .slots
            .lock()
            .await
            .entry(key)
            .or_default()
            .clone()
    }

    // ── Events ───────────────────────────────────────────────────

    pub async fn events(&self, filter: &RecordFilter) -> Result<Vec<Event>, CoreError> {
        let status = parse_filter::<EventStatus>("event status", filter.status.as_deref())?;
        let query = EventQuery {
            status: status.map(|s| s.to_string()),
            organizer_id: None,
        };
        let events: Vec<Event> = convert_all(self.client().list_events(&query).await?)?;
        debug!(count = events.len(), "fetched events");
        Ok(filter.apply(events))
    }

    pub async fn event(&self, id: &str) -> Result<Event, CoreError> {
        Event::try_from(self.client().get_event(id).await?)
    }

    // ── Zones ────────────────────────────────────────────────────

    pub async fn zones(&self, filter: &RecordFilter) -> Result<Vec<Zone>, CoreError> {
        let zones: Vec<Zone> = convert_all(self.client().list_zones(&scope(filter)).await?)?;
        debug!(count = zones.len(), "fetched zones");
        Ok(filter.apply(zones))
    }

    pub async fn zone(&self, id: &str) -> Result<Zone, CoreError> {
        Zone::try_from(self.client().get_zone(id).await?)
    }

    // ── Lost persons ─────────────────────────────────────────────

    pub async fn lost_persons(&self, filter: &RecordFilter) -> Result<Vec<LostPerson>, CoreError> {
        let status = parse_filter::<LostPersonStatus>("status", filter.status.as_deref())?;
        let query = LostPersonQuery {
            event_id: filter.event_id.clone(),
            status: status.map(|s| s.wire_value().to_owned()),
            priority: filter.priority.as_ref().map(|p| p.to_ascii_lowercase()),
        };
        let persons: Vec<LostPerson> =
            convert_all(self.client().list_lost_persons(&query).await?)?;
        debug!(count = persons.len(), "fetched lost persons");
        // "reported" and "missing" name the same status.
        let local = RecordFilter {
            status: status.map(|s| s.to_string()),
            ..filter.clone()
        };
        Ok(local.apply(persons))
    }

    pub async fn lost_person(&self, id: &str) -> Result<LostPerson, CoreError> {
        LostPerson::try_from(self.client().get_lost_person(id).await?)
    }

    /// Cases still being searched for (reported or searching).
    pub async fn active_lost_persons(&self, event_id: &str) -> Result<Vec<LostPerson>, CoreError> {
        convert_all(self.client().active_lost_persons(event_id).await?)
    }

    pub async fn lost_person_stats(&self, event_id: &str) -> Result<LostPersonStats, CoreError> {
        LostPersonStats::try_from(self.client().lost_person_stats(event_id).await?)
    }

    // ── Medical ──────────────────────────────────────────────────

    pub async fn emergencies(
        &self,
        filter: &RecordFilter,
    ) -> Result<Vec<MedicalEmergency>, CoreError> {
        let status = parse_filter::<EmergencyStatus>("status", filter.status.as_deref())?;
        let severity = parse_filter::<Severity>("severity", filter.priority.as_deref())?;
        let query = MedicalEmergencyQuery {
            event_id: filter.event_id.clone(),
            status: status.map(|s| s.to_string()),
            severity: severity.map(|s| s.to_string()),
            emergency_type: None,
        };
        let emergencies: Vec<MedicalEmergency> =
            convert_all(self.client().list_medical_emergencies(&query).await?)?;
        debug!(count = emergencies.len(), "fetched medical emergencies");
        Ok(filter.apply(emergencies))
    }

    pub async fn emergency(&self, id: &str) -> Result<MedicalEmergency, CoreError> {
        MedicalEmergency::try_from(self.client().get_medical_emergency(id).await?)
    }

    pub async fn emergency_stats(&self, event_id: &str) -> Result<EmergencyStats, CoreError> {
        EmergencyStats::try_from(self.client().medical_emergency_stats(event_id).await?)
    }

    pub async fn facilities(
        &self,
        filter: &RecordFilter,
    ) -> Result<Vec<MedicalFacility>, CoreError> {
        let facilities: Vec<MedicalFacility> =
            convert_all(self.client().list_medical_facilities(&scope(filter)).await?)?;
        Ok(filter.apply(facilities))
    }

    pub async fn facility(&self, id: &str) -> Result<MedicalFacility, CoreError> {
        MedicalFacility::try_from(self.client().get_medical_facility(id).await?)
    }

    // ── Exits & washrooms ────────────────────────────────────────

    pub async fn exits(&self, filter: &RecordFilter) -> Result<Vec<EmergencyExit>, CoreError> {
        let exits: Vec<EmergencyExit> =
            convert_all(self.client().list_exits(&scope(filter)).await?)?;
        Ok(filter.apply(exits))
    }

    pub async fn exit(&self, id: &str) -> Result<EmergencyExit, CoreError> {
        EmergencyExit::try_from(self.client().get_exit(id).await?)
    }

    pub async fn washrooms(&self, filter: &RecordFilter) -> Result<Vec<Washroom>, CoreError> {
        let washrooms: Vec<Washroom> =
            convert_all(self.client().list_washrooms(&scope(filter)).await?)?;
        Ok(filter.apply(washrooms))
    }

    pub async fn washroom(&self, id: &str) -> Result<Washroom, CoreError> {
        Washroom::try_from(self.client().get_washroom(id).await?)
    }

    // ── Feedback ─────────────────────────────────────────────────

    pub async fn feedback(&self, filter: &RecordFilter) -> Result<Vec<Feedback>, CoreError> {
        let query = FeedbackQuery {
            event_id: filter.event_id.clone(),
            ..FeedbackQuery::default()
        };
        let entries: Vec<Feedback> = convert_all(self.client().list_feedback(&query).await?)?;
        Ok(filter.apply(entries))
    }

    pub async fn feedback_entry(&self, id: &str) -> Result<Feedback, CoreError> {
        Feedback::try_from(self.client().get_feedback(id).await?)
    }

    pub async fn feedback_stats(&self, event_id: &str) -> Result<FeedbackStats, CoreError> {
        FeedbackStats::try_from(self.client().feedback_stats(event_id).await?)
    }

    /// Newest entries first, at most `limit` of them.
    pub async fn recent_feedback(
        &self,
        event_id: &str,
        limit: u32,
    ) -> Result<Vec<Feedback>, CoreError> {
        convert_all(self.client().recent_feedback(event_id, limit).await?)
    }

    // ── Alerts ───────────────────────────────────────────────────

    /// Newest first. The status filter takes `active` or `inactive`, the
    /// priority filter an alert severity.
    pub async fn alerts(&self, filter: &RecordFilter) -> Result<Vec<Alert>, CoreError> {
        let is_active = match filter.status.as_deref().map(str::to_ascii_lowercase).as_deref() {
            None => None,
            Some("active") => Some(true),
            Some("inactive") => Some(false),
            Some(other) => {
                return Err(CoreError::ValidationFailed {
                    message: format!("unknown alert state filter {other:?}"),
                });
            }
        };
        let severity = parse_filter::<AlertSeverity>("severity", filter.priority.as_deref())?;
        let query = AlertQuery {
            event_id: filter.event_id.clone(),
            alert_type: None,
            severity: severity.map(|s| s.to_string()),
            is_active,
        };
        let alerts: Vec<Alert> = convert_all(self.client().list_alerts(&query).await?)?;
        debug!(count = alerts.len(), "fetched alerts");
        Ok(filter.apply(alerts))
    }

    pub async fn alert(&self, id: &str) -> Result<Alert, CoreError> {
        Alert::try_from(self.client().get_alert(id).await?)
    }

    pub async fn weather_reading(&self, id: &str) -> Result<WeatherReading, CoreError> {
        Ok(WeatherReading::from(self.client().get_weather_alert(id).await?))
    }

    pub async fn latest_weather(&self, event_id: &str) -> Result<WeatherReading, CoreError> {
        Ok(WeatherReading::from(self.client().latest_weather_alert(event_id).await?))
    }

    // ── Crowd density ────────────────────────────────────────────

    pub async fn crowd_readings(
        &self,
        filter: &RecordFilter,
    ) -> Result<Vec<CrowdReading>, CoreError> {
        let level = parse_filter::<CrowdLevel>("crowd level", filter.status.as_deref())?;
        let query = CrowdDensityQuery {
            event_id: filter.event_id.clone(),
            area_name: None,
            density_level: level.map(|l| l.wire_value().to_owned()),
        };
        let readings: Vec<CrowdReading> =
            convert_all(self.client().list_crowd_density(&query).await?)?;
        Ok(filter.apply(readings))
    }

    /// Most recent readings for an event, newest first.
    pub async fn latest_crowd(&self, event_id: &str) -> Result<Vec<CrowdReading>, CoreError> {
        convert_all(self.client().latest_crowd_density(event_id).await?)
    }

    /// Send an image to the counting service.
    pub async fn count_people(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        request: PersonCountRequest,
    ) -> Result<PersonCount, CoreError> {
        request.validate()?;
        let count = self
            .client()
            .count_people(file_name, bytes, &request.into())
            .await?;
        info!(persons = count.person_count, "image counted");
        Ok(PersonCount::from(count))
    }

    // ── Dashboard ────────────────────────────────────────────────

    /// Fetch every collection for one event concurrently.
    pub async fn event_snapshot(&self, event_id: &str) -> Result<EventSnapshot, CoreError> {
        let filter = RecordFilter::for_event(event_id);
        let (
            event,
            zones,
            lost_persons,
            emergencies,
            facilities,
            exits,
            washrooms,
            feedback,
            alerts,
        ) = tokio::try_join!(
            self.event(event_id),
            self.zones(&filter),
            self.lost_persons(&filter),
            self.emergencies(&filter),
            self.facilities(&filter),
            self.exits(&filter),
            self.washrooms(&filter),
            self.feedback(&filter),
            self.alerts(&filter),
        )?;
        Ok(EventSnapshot {
            event,
            zones,
            lost_persons,
            emergencies,
            facilities,
            exits,
            washrooms,
            feedback,
            alerts,
        })
    }

    /// Fetch and assemble every board for one event.
    pub async fn event_dashboard(&self, event_id: &str) -> Result<EventDashboard, CoreError> {
        let snapshot = self.event_snapshot(event_id).await?;
        Ok(EventDashboard::assemble(&snapshot))
    }

    // ── Commands ─────────────────────────────────────────────────

    /// Validate, send, then re-fetch the affected collection.
    ///
    /// The refreshed collection is scoped to the event of the record that
    /// changed; deletes look the record up first to learn that event.
    #[allow(clippy::too_many_lines)]
    pub async fn execute(&self, cmd: Command) -> Result<CommandResult, CoreError> {
        let client = self.client();
        match cmd {
            // ── Events ──
            Command::CreateEvent(req) => {
                req.validate()?;
                let event = Event::try_from(client.create_event(&req.into()).await?)?;
                info!(id = %event.id, "event created");
                self.after_event(Some(event), None).await
            }
            Command::UpdateEvent { id, update } => {
                update.validate()?;
                let event = Event::try_from(client.update_event(&id, &update.into()).await?)?;
                info!(%id, "event updated");
                self.after_event(Some(event), None).await
            }
            Command::SetEventStatus { id, status } => {
                let ack = client.set_event_status(&id, status.as_ref()).await?;
                info!(%id, %status, "event status set");
                let event = self.event(&id).await?;
                self.after_event(Some(event), Some(ack.message)).await
            }
            Command::DeleteEvent { id } => {
                let ack = client.delete_event(&id).await?;
                info!(%id, "event deleted");
                self.after_event(None, Some(ack.message)).await
            }

            // ── Zones ──
            Command::CreateZone(req) => {
                req.validate()?;
                let zone = Zone::try_from(client.create_zone(&req.into()).await?)?;
                info!(id = %zone.id, "zone created");
                self.after_zone(zone.event_id.clone(), Some(zone)).await
            }
            Command::UpdateZone { id, update } => {
                update.validate()?;
                let zone = Zone::try_from(client.update_zone(&id, &update.into()).await?)?;
                info!(%id, "zone updated");
                self.after_zone(zone.event_id.clone(), Some(zone)).await
            }
            Command::SetZoneDensity {
                id,
                current_density,
                status,
            } => {
                let status: Option<&str> = status.as_ref().map(AsRef::as_ref);
                let zone = Zone::try_from(
                    client
                        .update_zone_density(&id, current_density, status)
                        .await?,
                )?;
                info!(%id, current_density, status = %zone.density_status, "zone density updated");
                self.after_zone(zone.event_id.clone(), Some(zone)).await
            }
            Command::DeleteZone { id } => {
                let zone = self.zone(&id).await?;
                client.delete_zone(&id).await?;
                info!(%id, "zone deleted");
                self.after_zone(zone.event_id, None).await
            }

            // ── Lost persons ──
            Command::ReportLostPerson(req) => {
                req.validate()?;
                let person = LostPerson::try_from(client.create_lost_person(&req.into()).await?)?;
                info!(id = %person.id, priority = %person.priority, "lost person reported");
                self.after_lost_person(person, None).await
            }
            Command::SetLostPersonStatus { id, status } => {
                let person = LostPerson::try_from(
                    client.set_lost_person_status(&id, status.wire_value()).await?,
                )?;
                info!(%id, %status, "lost person status set");
                self.after_lost_person(person, None).await
            }
            Command::UploadLostPersonPhoto {
                id,
                file_name,
                bytes,
            } => {
                if bytes.is_empty() {
                    return Err(CoreError::ValidationFailed {
                        message: "photo is empty".into(),
                    });
                }
                let upload = client.upload_lost_person_photo(&id, &file_name, bytes).await?;
                info!(%id, photo_url = %upload.photo_url, "lost person photo uploaded");
                let person = self.lost_person(&id).await?;
                self.after_lost_person(person, Some(upload.message)).await
            }
            Command::DeleteLostPersonPhoto { id } => {
                let ack = client.delete_lost_person_photo(&id).await?;
                info!(%id, "lost person photo removed");
                let person = self.lost_person(&id).await?;
                self.after_lost_person(person, Some(ack.message)).await
            }

            // ── Medical ──
            Command::ReportEmergency(req) => {
                req.validate()?;
                let created = client.create_medical_emergency(&req.into()).await?;
                let emergency = MedicalEmergency::try_from(created)?;
                info!(id = %emergency.id, severity = %emergency.severity, "emergency reported");
                self.after_emergency(emergency).await
            }
            Command::SetEmergencyStatus {
                id,
                status,
                responder_name,
                response_time_min,
            } => {
                let update = EmergencyStatusUpdate {
                    new_status: status.to_string(),
                    responder_name,
                    response_time: response_time_min,
                };
                let emergency = MedicalEmergency::try_from(
                    client.set_medical_emergency_status(&id, &update).await?,
                )?;
                info!(%id, %status, "emergency status set");
                self.after_emergency(emergency).await
            }
            Command::CreateFacility(req) => {
                req.validate()?;
                let facility =
                    MedicalFacility::try_from(client.create_medical_facility(&req.into()).await?)?;
                info!(id = %facility.id, "medical facility created");
                self.after_facility(facility.event_id.clone(), Some(facility)).await
            }
            Command::UpdateFacility { id, update } => {
                update.validate()?;
                let facility = MedicalFacility::try_from(
                    client.update_medical_facility(&id, &update.into()).await?,
                )?;
                info!(%id, "medical facility updated");
                self.after_facility(facility.event_id.clone(), Some(facility)).await
            }
            Command::DeleteFacility { id } => {
                let facility = self.facility(&id).await?;
                client.delete_medical_facility(&id).await?;
                info!(%id, "medical facility deleted");
                self.after_facility(facility.event_id, None).await
            }

            // ── Exits ──
            Command::CreateExit(req) => {
                req.validate()?;
                let exit = EmergencyExit::try_from(client.create_exit(&req.into()).await?)?;
                info!(id = %exit.id, "exit created");
                self.after_exit(exit.event_id.clone(), Some(exit)).await
            }
            Command::UpdateExit { id, update } => {
                update.validate()?;
                let exit = EmergencyExit::try_from(client.update_exit(&id, &update.into()).await?)?;
                info!(%id, "exit updated");
                self.after_exit(exit.event_id.clone(), Some(exit)).await
            }
            Command::SetExitStatus { id, status } => {
                let exit =
                    EmergencyExit::try_from(client.set_exit_status(&id, status.as_ref()).await?)?;
                info!(%id, %status, "exit status set");
                self.after_exit(exit.event_id.clone(), Some(exit)).await
            }
            Command::DeleteExit { id } => {
                let exit = self.exit(&id).await?;
                client.delete_exit(&id).await?;
                info!(%id, "exit deleted");
                self.after_exit(exit.event_id, None).await
            }

            // ── Washrooms ──
            Command::CreateWashroom(req) => {
                req.validate()?;
                let washroom = Washroom::try_from(client.create_washroom(&req.into()).await?)?;
                info!(id = %washroom.id, "washroom created");
                self.after_washroom(washroom.event_id.clone(), Some(washroom)).await
            }
            Command::UpdateWashroom { id, update } => {
                update.validate()?;
                let washroom =
                    Washroom::try_from(client.update_washroom(&id, &update.into()).await?)?;
                info!(%id, "washroom updated");
                self.after_washroom(washroom.event_id.clone(), Some(washroom)).await
            }
            Command::SetWashroomStatus { id, availability } => {
                let washroom = Washroom::try_from(
                    client.set_washroom_status(&id, availability.as_ref()).await?,
                )?;
                info!(%id, %availability, "washroom availability set");
                self.after_washroom(washroom.event_id.clone(), Some(washroom)).await
            }
            Command::DeleteWashroom { id } => {
                let washroom = self.washroom(&id).await?;
                client.delete_washroom(&id).await?;
                info!(%id, "washroom deleted");
                self.after_washroom(washroom.event_id, None).await
            }

            // ── Alerts ──
            Command::RaiseAlert(req) => {
                req.validate()?;
                let alert = Alert::try_from(client.create_alert(&req.into()).await?)?;
                info!(id = %alert.id, severity = %alert.severity, "alert raised");
                self.after_alert(alert.event_id.clone(), Some(alert), None).await
            }
            Command::DeactivateAlert { id } => {
                let ack = client.deactivate_alert(&id).await?;
                info!(%id, "alert deactivated");
                let alert = self.alert(&id).await?;
                self.after_alert(alert.event_id.clone(), Some(alert), Some(ack.message)).await
            }
            Command::DeleteAlert { id } => {
                let alert = self.alert(&id).await?;
                let ack = client.delete_alert(&id).await?;
                info!(%id, "alert deleted");
                self.after_alert(alert.event_id, None, Some(ack.message)).await
            }
            Command::ReportWeather(report) => {
                report.validate()?;
                let created = client.create_weather_alert(&report.into()).await?;
                let reading = WeatherReading::from(created);
                info!(id = %reading.id, condition = %reading.condition, "weather reported");
                let latest = self.latest_weather(&reading.event_id).await?;
                Ok(CommandResult {
                    record: Some(Record::WeatherReading(reading)),
                    message: None,
                    refreshed: Collection::Weather(vec![latest]),
                })
            }

            // ── Feedback & crowd ──
            Command::SubmitFeedback(req) => {
                req.validate()?;
                let entry = Feedback::try_from(client.create_feedback(&req.into()).await?)?;
                info!(id = %entry.id, rating = entry.rating, "feedback submitted");
                let refreshed = self.feedback(&RecordFilter::for_event(&entry.event_id)).await?;
                Ok(CommandResult {
                    record: Some(Record::Feedback(entry)),
                    message: None,
                    refreshed: Collection::Feedback(refreshed),
                })
            }
            Command::RecordCrowdReading(req) => {
                req.validate()?;
                let reading =
                    CrowdReading::try_from(client.record_crowd_density(&req.into()).await?)?;
                info!(area = %reading.area_name, level = %reading.level, "crowd reading recorded");
                let refreshed = self
                    .crowd_readings(&RecordFilter::for_event(&reading.event_id))
                    .await?;
                Ok(CommandResult {
                    record: Some(Record::CrowdReading(reading)),
                    message: None,
                    refreshed: Collection::CrowdReadings(refreshed),
                })
            }
        }
    }

    // ── Post-mutation refreshes ──────────────────────────────────

    async fn after_event(
        &self,
        event: Option<Event>,
        message: Option<String>,
    ) -> Result<CommandResult, CoreError> {
        let refreshed = self.events(&RecordFilter::default()).await?;
        Ok(CommandResult {
            record: event.map(Record::Event),
            message,
            refreshed: Collection::Events(refreshed),
        })
    }

    async fn after_zone(
        &self,
        event_id: String,
        zone: Option<Zone>,
    ) -> Result<CommandResult, CoreError> {
        let refreshed = self.zones(&RecordFilter::for_event(event_id)).await?;
        Ok(CommandResult {
            record: zone.map(Record::Zone),
            message: None,
            refreshed: Collection::Zones(refreshed),
        })
    }

    async fn after_lost_person(
        &self,
        person: LostPerson,
        message: Option<String>,
    ) -> Result<CommandResult, CoreError> {
        let refreshed = self
            .lost_persons(&RecordFilter::for_event(&person.event_id))
            .await?;
        Ok(CommandResult {
            record: Some(Record::LostPerson(person)),
            message,
            refreshed: Collection::LostPersons(refreshed),
        })
    }

    async fn after_emergency(
        &self,
        emergency: MedicalEmergency,
    ) -> Result<CommandResult, CoreError> {
        let refreshed = self
            .emergencies(&RecordFilter::for_event(&emergency.event_id))
            .await?;
        Ok(CommandResult {
            record: Some(Record::MedicalEmergency(emergency)),
            message: None,
            refreshed: Collection::MedicalEmergencies(refreshed),
        })
    }

    async fn after_facility(
        &self,
        event_id: String,
        facility: Option<MedicalFacility>,
    ) -> Result<CommandResult, CoreError> {
        let refreshed = self.facilities(&RecordFilter::for_event(event_id)).await?;
        Ok(CommandResult {
            record: facility.map(Record::MedicalFacility),
            message: None,
            refreshed: Collection::MedicalFacilities(refreshed),
        })
    }

    async fn after_exit(
        &self,
        event_id: String,
        exit: Option<EmergencyExit>,
    ) -> Result<CommandResult, CoreError> {
        let refreshed = self.exits(&RecordFilter::for_event(event_id)).await?;
        Ok(CommandResult {
            record: exit.map(Record::EmergencyExit),
            message: None,
            refreshed: Collection::EmergencyExits(refreshed),
        })
    }

    async fn after_alert(
        &self,
        event_id: String,
        alert: Option<Alert>,
        message: Option<String>,
    ) -> Result<CommandResult, CoreError> {
        let refreshed = self.alerts(&RecordFilter::for_event(event_id)).await?;
        Ok(CommandResult {
            record: alert.map(Record::Alert),
            message,
            refreshed: Collection::Alerts(refreshed),
        })
    }

    async fn after_washroom(
        &self,
        event_id: String,
        washroom: Option<Washroom>,
    ) -> Result<CommandResult, CoreError> {
        let refreshed = self.washrooms(&RecordFilter::for_event(event_id)).await?;
        Ok(CommandResult {
            record: washroom.map(Record::Washroom),
            message: None,
            refreshed: Collection::Washrooms(refreshed),
        })
    }
}

fn scope(filter: &RecordFilter) -> EventScope {
    EventScope {
        event_id: filter.event_id.clone(),
    }
}

/// Parse a filter value the backend also filters on server-side.
fn parse_filter<T: FromStr>(field: &str, raw: Option<&str>) -> Result<Option<T>, CoreError> {
    raw.map(|value| {
        value.parse::<T>().map_err(|_| CoreError::ValidationFailed {
            message: format!("unknown {field} filter {value:?}"),
        })
    })
    .transpose()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn parse_filter_accepts_any_case() {
        let status = parse_filter::<LostPersonStatus>("status", Some("Searching")).unwrap();
        assert_eq!(status, Some(LostPersonStatus::Searching));
        assert_eq!(parse_filter::<CrowdLevel>("level", None).unwrap(), None);
    }

    #[test]
    fn parse_filter_rejects_unknown_values() {
        let err = parse_filter::<EventStatus>("event status", Some("paused")).unwrap_err();
        assert!(matches!(err, CoreError::ValidationFailed { .. }));
    }

    #[tokio::test]
    async fn newer_fetch_cancels_older_one() {
        let slot = ViewSlot::default();
        let slow = slot.run(async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok::<_, CoreError>("stale")
        });
        let fast = async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            slot.run(async { Ok::<_, CoreError>("fresh") }).await
        };

        let (stale, fresh) = tokio::join!(slow, fast);
        assert!(matches!(stale, Err(CoreError::Cancelled)));
        assert_eq!(fresh.unwrap(), "fresh");
    }

    #[tokio::test]
    async fn completed_fetch_is_not_cancelled_later() {
        let slot = ViewSlot::default();
        let first = slot.run(async { Ok::<_, CoreError>(1) }).await;
        let second = slot.run(async { Ok::<_, CoreError>(2) }).await;
        assert_eq!(first.unwrap(), 1);
        assert_eq!(second.unwrap(), 2);
    }
}
