//! Dashboard command handlers.
//!
//! Each board fetches only the collections it needs and prints the view
//! model the core assembles from them. `--watch` redraws on an interval;
//! refreshes run through the dashboard's view slot, and a tick that lands
//! while the previous refresh is still running is skipped.

use std::fmt::Display;
use std::future::Future;
use std::hash::Hash;
use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tabled::Tabled;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use eventdesk_core::{
    AlertBoard, CoreError, Desk, EventBoard, EventDashboard, EventOverview, ExitBoard,
    FacilityBoard, FeedbackBoard, LostPersonBoard, MedicalBoard, OccupancyStatus, RecordFilter,
    Tally, UtilizationStatus, ViewKey, ViewSlot, WashroomBoard, ZoneBoard,
};

use crate::cli::{DashboardArgs, DashboardBoard, GlobalOpts};
use crate::error::CliError;
use crate::output::{self, Tone};

use super::util;

// ── View selection ──────────────────────────────────────────────────

/// One printed board.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum BoardView {
    Overview(EventOverview),
    Zones(ZoneBoard),
    LostPersons(LostPersonBoard),
    Medical {
        emergencies: MedicalBoard,
        facilities: FacilityBoard,
    },
    Exits(ExitBoard),
    Washrooms(WashroomBoard),
    Feedback(FeedbackBoard),
    Alerts(AlertBoard),
    Events(EventBoard),
    All(Box<EventDashboard>),
}

fn needs_event(event_id: Option<&str>) -> Result<&str, CoreError> {
    event_id.ok_or_else(|| CoreError::ValidationFailed {
        message: "this board needs an event".into(),
    })
}

async fn fetch_board(
    desk: &Desk,
    board: DashboardBoard,
    event_id: Option<&str>,
) -> Result<BoardView, CoreError> {
    let scoped = event_id.map(RecordFilter::for_event).unwrap_or_default();
    Ok(match board {
        DashboardBoard::Overview => {
            let id = needs_event(event_id)?;
            let (event, zones, alerts) =
                tokio::try_join!(desk.event(id), desk.zones(&scoped), desk.alerts(&scoped))?;
            BoardView::Overview(EventOverview::assemble(Some(&event), &zones, &alerts))
        }
        DashboardBoard::Zones => {
            BoardView::Zones(ZoneBoard::assemble(&desk.zones(&scoped).await?))
        }
        DashboardBoard::LostPersons => BoardView::LostPersons(LostPersonBoard::assemble(
            &desk.lost_persons(&scoped).await?,
        )),
        DashboardBoard::Medical => {
            let (emergencies, facilities) =
                tokio::try_join!(desk.emergencies(&scoped), desk.facilities(&scoped))?;
            BoardView::Medical {
                emergencies: MedicalBoard::assemble(&emergencies),
                facilities: FacilityBoard::assemble(&facilities),
            }
        }
        DashboardBoard::Exits => {
            BoardView::Exits(ExitBoard::assemble(&desk.exits(&scoped).await?))
        }
        DashboardBoard::Washrooms => {
            BoardView::Washrooms(WashroomBoard::assemble(&desk.washrooms(&scoped).await?))
        }
        DashboardBoard::Feedback => {
            BoardView::Feedback(FeedbackBoard::assemble(&desk.feedback(&scoped).await?))
        }
        DashboardBoard::Alerts => {
            BoardView::Alerts(AlertBoard::assemble(&desk.alerts(&scoped).await?))
        }
        DashboardBoard::Events => {
            let events = desk.events(&RecordFilter::default()).await?;
            BoardView::Events(EventBoard::assemble(&events))
        }
        DashboardBoard::All => {
            BoardView::All(Box::new(desk.event_dashboard(needs_event(event_id)?).await?))
        }
    })
}

// ── Text rendering ──────────────────────────────────────────────────

fn occupancy_tone(status: OccupancyStatus) -> Tone {
    match status {
        OccupancyStatus::Safe => Tone::Good,
        OccupancyStatus::Moderate => Tone::Warn,
        OccupancyStatus::Risky | OccupancyStatus::Critical => Tone::Bad,
    }
}

fn utilization_tone(status: UtilizationStatus) -> Tone {
    match status {
        UtilizationStatus::Low => Tone::Good,
        UtilizationStatus::Moderate => Tone::Warn,
        UtilizationStatus::High | UtilizationStatus::Critical => Tone::Bad,
    }
}

/// `safe 3 · moderate 1 · risky 0`
fn tally_line<K: Display + Hash + Eq + Clone>(tally: &Tally<K>) -> String {
    tally
        .iter()
        .map(|(k, n)| format!("{k} {n}"))
        .collect::<Vec<_>>()
        .join(" · ")
}

fn count_alert(n: u64, color: bool) -> String {
    output::paint(&n.to_string(), if n > 0 { Tone::Bad } else { Tone::Good }, color)
}

#[derive(Tabled)]
struct OccupancyRow {
    #[tabled(rename = "Zone")]
    name: String,
    #[tabled(rename = "People")]
    people: u32,
    #[tabled(rename = "Capacity")]
    capacity: u32,
    #[tabled(rename = "Occupancy")]
    occupancy: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct DensityRow {
    #[tabled(rename = "Zone")]
    name: String,
    #[tabled(rename = "People")]
    people: u32,
    #[tabled(rename = "Capacity")]
    capacity: u32,
    #[tabled(rename = "Density")]
    density: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct UtilizationRow {
    #[tabled(rename = "Exit")]
    name: String,
    #[tabled(rename = "Flow/min")]
    flow: u32,
    #[tabled(rename = "Capacity/min")]
    capacity: u32,
    #[tabled(rename = "Utilization")]
    utilization: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn table<R: Tabled>(rows: Vec<R>) -> String {
    if rows.is_empty() {
        return String::new();
    }
    tabled::Table::new(rows)
        .with(tabled::settings::Style::rounded())
        .to_string()
}

fn join_sections(sections: &[String]) -> String {
    sections
        .iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[allow(clippy::too_many_lines)]
fn render_text(view: &BoardView, color: bool) -> String {
    match view {
        BoardView::Overview(o) => join_sections(&[
            output::heading("Event overview", color),
            output::key_values(&[
                ("Zones", o.zone_count.to_string()),
                ("People", format!("{} / {}", o.total_people, o.total_capacity)),
                ("Avg occupancy", format!("{}%", o.average_occupancy_pct)),
                ("Peak occupancy", format!("{}%", o.peak_occupancy_pct)),
                ("Critical zones", count_alert(o.critical_zones, color)),
                ("Safe zones", o.safe_zones.to_string()),
                ("Active alerts", count_alert(o.active_alerts, color)),
                (
                    "Attendance",
                    o.attendance_pct.map_or_else(|| "-".into(), |p| format!("{p}%")),
                ),
                ("By status", tally_line(&o.by_status)),
            ]),
            table(
                o.zones
                    .iter()
                    .map(|z| OccupancyRow {
                        name: z.name.clone(),
                        people: z.people,
                        capacity: z.capacity,
                        occupancy: format!("{}%", z.occupancy_pct),
                        status: output::paint(z.status.as_ref(), occupancy_tone(z.status), color),
                    })
                    .collect(),
            ),
        ]),

        BoardView::Zones(b) => join_sections(&[
            output::heading("Zones", color),
            output::key_values(&[
                ("Zones", b.total.to_string()),
                ("People", format!("{} / {}", b.total_people, b.total_capacity)),
                ("By density", tally_line(&b.by_status)),
            ]),
            table(
                b.zones
                    .iter()
                    .map(|z| DensityRow {
                        name: z.name.clone(),
                        people: z.people,
                        capacity: z.capacity,
                        density: format!("{}%", z.density_pct),
                        status: z.status.to_string(),
                    })
                    .collect(),
            ),
        ]),

        BoardView::LostPersons(b) => join_sections(&[
            output::heading("Lost persons", color),
            output::key_values(&[
                ("Reports", b.total.to_string()),
                ("Open", b.open.to_string()),
                ("Critical open", count_alert(b.critical_open, color)),
                ("By status", tally_line(&b.by_status)),
                ("By priority", tally_line(&b.by_priority)),
            ]),
        ]),

        BoardView::Medical {
            emergencies,
            facilities,
        } => join_sections(&[
            output::heading("Medical", color),
            output::key_values(&[
                ("Emergencies", emergencies.total.to_string()),
                ("Active", count_alert(emergencies.active, color)),
                ("Resolved", emergencies.resolved.to_string()),
                (
                    "Avg response",
                    format!("{:.1} min", emergencies.average_response_min),
                ),
                ("By severity", tally_line(&emergencies.by_severity)),
                ("By type", tally_line(&emergencies.by_type)),
                ("By status", tally_line(&emergencies.by_status)),
                ("Facilities", facilities.total.to_string()),
                ("By facility", tally_line(&facilities.by_type)),
            ]),
        ]),

        BoardView::Exits(b) => join_sections(&[
            output::heading("Emergency exits", color),
            output::key_values(&[
                ("Exits", b.total.to_string()),
                ("Clear", b.clear.to_string()),
                ("Moderate", b.moderate.to_string()),
                ("Crowded", count_alert(b.crowded, color)),
                ("Flow", format!("{} / {} per min", b.total_flow, b.total_capacity)),
            ]),
            table(
                b.utilization
                    .iter()
                    .map(|u| UtilizationRow {
                        name: u.name.clone(),
                        flow: u.flow_rate,
                        capacity: u.capacity,
                        utilization: format!("{}%", u.utilization_pct),
                        status: output::paint(
                            u.status.as_ref(),
                            utilization_tone(u.status),
                            color,
                        ),
                    })
                    .collect(),
            ),
        ]),

        BoardView::Washrooms(b) => join_sections(&[
            output::heading("Washrooms", color),
            output::key_values(&[
                ("Washrooms", b.total.to_string()),
                (
                    "Stalls free",
                    format!("{} / {}", b.available_capacity, b.total_capacity),
                ),
                ("By availability", tally_line(&b.by_availability)),
                ("By gender", tally_line(&b.by_gender)),
            ]),
        ]),

        BoardView::Feedback(b) => join_sections(&[
            output::heading("Feedback", color),
            output::key_values(&[
                ("Entries", b.total.to_string()),
                ("Average", b.average_rating_label()),
                ("Positive", b.positive.to_string()),
                ("Negative", b.negative.to_string()),
                (
                    "Sentiment",
                    b.sentiment
                        .percentages
                        .iter()
                        .map(|(k, p)| format!("{k} {p}%"))
                        .collect::<Vec<_>>()
                        .join(" · "),
                ),
                ("Ratings", tally_line(&b.ratings)),
            ]),
        ]),

        BoardView::Alerts(b) => join_sections(&[
            output::heading("Alerts", color),
            output::key_values(&[
                ("Alerts", b.total.to_string()),
                ("Active", b.active.to_string()),
                ("Urgent", count_alert(b.urgent, color)),
                ("By type", tally_line(&b.by_kind)),
                ("By severity", tally_line(&b.by_severity)),
            ]),
        ]),

        BoardView::Events(b) => join_sections(&[
            output::heading("Events", color),
            output::key_values(&[
                ("Events", b.total.to_string()),
                ("Live", b.live.to_string()),
                ("Capacity", b.total_capacity.to_string()),
                ("Attendees", b.total_attendees.to_string()),
                ("By status", tally_line(&b.by_status)),
            ]),
        ]),

        BoardView::All(d) => {
            let boards = [
                BoardView::Overview(d.overview.clone()),
                BoardView::Zones(d.zones.clone()),
                BoardView::LostPersons(d.lost_persons.clone()),
                BoardView::Medical {
                    emergencies: d.medical.clone(),
                    facilities: d.facilities.clone(),
                },
                BoardView::Exits(d.exits.clone()),
                BoardView::Washrooms(d.washrooms.clone()),
                BoardView::Feedback(d.feedback.clone()),
                BoardView::Alerts(d.alerts.clone()),
            ];
            let mut sections = vec![output::heading(
                &format!("{} ({})", d.event_name, d.event_id),
                color,
            )];
            sections.extend(boards.iter().map(|b| render_text(b, color)));
            join_sections(&sections)
        }
    }
}

fn render(view: &BoardView, global: &GlobalOpts) -> Result<String, CliError> {
    let color = output::should_color(global.color_mode());
    output::render_single(
        global.format(),
        view,
        |v| render_text(v, color),
        |v| render_text(v, false),
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    desk: &Desk,
    args: DashboardArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let event_id = match args.board {
        DashboardBoard::Events => None,
        _ => Some(util::require_event(global)?),
    };

    if let Some(secs) = args.watch {
        return watch(desk, args.board, event_id.as_deref(), secs, global).await;
    }

    let spinner = spinner(global);
    let result = fetch_board(desk, args.board, event_id.as_deref()).await;
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    let out = render(&result?, global)?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn spinner(global: &GlobalOpts) -> Option<ProgressBar> {
    if global.quiet || !std::io::stderr().is_terminal() {
        return None;
    }
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message("fetching");
    bar.enable_steady_tick(Duration::from_millis(100));
    Some(bar)
}

/// Redraw every `secs` seconds until Ctrl-C.
async fn watch(
    desk: &Desk,
    board: DashboardBoard,
    event_id: Option<&str>,
    secs: u64,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let slot = desk.view(ViewKey::Dashboard).await;
    let clear = std::io::stdout().is_terminal();
    let event_id = event_id.map(str::to_owned);

    refresh_loop(
        &slot,
        Duration::from_secs(secs.max(1)),
        || {
            let (desk, event_id) = (desk.clone(), event_id.clone());
            async move { fetch_board(&desk, board, event_id.as_deref()).await }
        },
        |result| {
            match result {
                Ok(view) => {
                    let out = render(&view, global)?;
                    if clear {
                        print!("\x1b[2J\x1b[H");
                    }
                    output::print_output(&out, global.quiet);
                }
                Err(CoreError::Cancelled) => debug!("refresh superseded by a newer one"),
                Err(e) => warn!(error = %e, "dashboard refresh failed"),
            }
            Ok(())
        },
        async {
            let _ = tokio::signal::ctrl_c().await;
        },
    )
    .await
}

/// Start `fetch` through `slot` on every tick of `period` and hand each
/// outcome to `deliver`, until `stop` resolves.
///
/// At most one refresh is in flight: a tick that arrives before the
/// previous refresh delivered is skipped, so a backend slower than the
/// period still gets to draw.
async fn refresh_loop<T, F, Fut, D, S>(
    slot: &ViewSlot,
    period: Duration,
    mut fetch: F,
    mut deliver: D,
    stop: S,
) -> Result<(), CliError>
where
    T: Send + 'static,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CoreError>> + Send + 'static,
    D: FnMut(Result<T, CoreError>) -> Result<(), CliError>,
    S: Future<Output = ()>,
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut in_flight = false;
    tokio::pin!(stop);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if in_flight {
                    debug!("previous refresh still running, skipping tick");
                    continue;
                }
                in_flight = true;
                let (slot, tx, refresh) = (slot.clone(), tx.clone(), fetch());
                tokio::spawn(async move {
                    let _ = tx.send(slot.run(refresh).await);
                });
            }
            Some(result) = rx.recv() => {
                in_flight = false;
                deliver(result)?;
            }
            () = &mut stop => return Ok(()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn tally_line_keeps_category_order() {
        let mut t: Tally<OccupancyStatus> = Tally::known();
        t.add(OccupancyStatus::Risky);
        assert_eq!(
            tally_line(&t),
            "safe 0 · moderate 0 · risky 1 · critical 0"
        );
    }

    #[test]
    fn empty_overview_renders_without_table() {
        let view = BoardView::Overview(EventOverview::assemble(None, &[], &[]));
        let text = render_text(&view, false);
        assert!(text.contains("Zones:"));
        assert!(!text.contains('╭'));
    }

    #[test]
    fn alert_board_flags_urgent_alerts() {
        let board = AlertBoard::assemble(&[]);
        let text = render_text(&BoardView::Alerts(board), false);
        assert!(text.contains("Urgent:"));
        assert!(text.lines().any(|l| l.starts_with("Urgent:") && l.ends_with('0')));
    }

    #[tokio::test]
    async fn event_boards_refuse_to_run_without_an_event() {
        let url = crate::config::parse_backend_url("http://127.0.0.1:9").unwrap();
        let desk = Desk::new(eventdesk_core::DeskConfig::new(url)).unwrap();
        for board in [DashboardBoard::Overview, DashboardBoard::All] {
            let result = fetch_board(&desk, board, None).await;
            assert!(
                matches!(result, Err(CoreError::ValidationFailed { .. })),
                "{board:?} ran without an event"
            );
        }
    }

    #[tokio::test]
    async fn refreshes_slower_than_the_period_still_deliver() {
        let slot = ViewSlot::default();
        let (mut delivered, mut superseded) = (0, 0);
        refresh_loop(
            &slot,
            Duration::from_millis(50),
            || async {
                tokio::time::sleep(Duration::from_millis(80)).await;
                Ok::<_, CoreError>(())
            },
            |result| {
                match result {
                    Ok(()) => delivered += 1,
                    Err(_) => superseded += 1,
                }
                Ok(())
            },
            tokio::time::sleep(Duration::from_millis(600)),
        )
        .await
        .unwrap();

        assert!(delivered >= 3, "only {delivered} refreshes delivered");
        assert_eq!(superseded, 0);
    }
}
