//! Alert and weather command handlers.

use tabled::Tabled;

use eventdesk_core::{
    Alert, AlertKind, AlertRequest, AlertSeverity, Command as CoreCommand, Desk, WeatherReading,
    WeatherReport,
};

use crate::cli::{
    AlertKindArg, AlertSeverityArg, AlertsArgs, AlertsCommand, GlobalOpts, WeatherCommand,
};
use crate::error::CliError;
use crate::output::{self, Tone};

use super::util;

#[derive(Tabled)]
struct AlertRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&Alert> for AlertRow {
    fn from(a: &Alert) -> Self {
        Self {
            id: a.id.clone(),
            kind: a.kind.to_string(),
            severity: a.severity.to_string(),
            state: a.state_label().into(),
            title: a.title.clone(),
            created: util::fmt_time(a.created_at.as_ref()),
        }
    }
}

fn severity_tone(alert: &Alert) -> Tone {
    if !alert.active {
        return Tone::Plain;
    }
    match alert.severity {
        AlertSeverity::Critical => Tone::Bad,
        AlertSeverity::High => Tone::Warn,
        _ => Tone::Plain,
    }
}

fn alert_detail(a: &Alert, color: bool) -> String {
    output::key_values(&[
        ("ID", a.id.clone()),
        ("Event", a.event_id.clone()),
        ("Title", a.title.clone()),
        ("Message", a.message.clone()),
        ("Type", a.kind.to_string()),
        (
            "Severity",
            output::paint(a.severity.as_ref(), severity_tone(a), color),
        ),
        ("State", a.state_label().into()),
        ("Created", util::fmt_time(a.created_at.as_ref())),
    ])
}

fn weather_detail(w: &WeatherReading) -> String {
    output::key_values(&[
        ("ID", w.id.clone()),
        ("Event", w.event_id.clone()),
        ("Condition", w.condition.clone()),
        ("Temperature", format!("{:.1} °C", w.temperature)),
        ("Humidity", format!("{:.0}%", w.humidity)),
        (
            "Wind",
            w.wind_speed.map_or_else(|| "-".into(), |s| format!("{s:.1} km/h")),
        ),
        ("Description", util::or_dash(w.description.as_deref())),
        ("Observed", util::fmt_time(w.observed_at.as_ref())),
    ])
}

fn kind_of(arg: AlertKindArg) -> AlertKind {
    match arg {
        AlertKindArg::Info => AlertKind::Info,
        AlertKindArg::Warning => AlertKind::Warning,
        AlertKindArg::Emergency => AlertKind::Emergency,
    }
}

fn severity_of(arg: AlertSeverityArg) -> AlertSeverity {
    match arg {
        AlertSeverityArg::Low => AlertSeverity::Low,
        AlertSeverityArg::Medium => AlertSeverity::Medium,
        AlertSeverityArg::High => AlertSeverity::High,
        AlertSeverityArg::Critical => AlertSeverity::Critical,
    }
}

pub async fn handle(desk: &Desk, args: AlertsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let color = output::should_color(global.color_mode());
    match args.command {
        AlertsCommand::List(list) => {
            let filter = util::filter_from(&list, global)?;
            let alerts = util::apply_limit(desk.alerts(&filter).await?, list.limit);
            let out = output::render_list(
                global.format(),
                &alerts,
                |a| AlertRow::from(a),
                |a| a.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AlertsCommand::Get { id } => {
            let alert = desk.alert(&id).await?;
            let out = output::render_single(
                global.format(),
                &alert,
                |a| alert_detail(a, color),
                |a| a.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AlertsCommand::Raise {
            title,
            message,
            kind,
            severity,
        } => {
            let request = AlertRequest {
                event_id: util::require_event(global)?,
                title,
                message,
                kind: kind_of(kind),
                severity: severity_of(severity),
            };
            let result = desk.execute(CoreCommand::RaiseAlert(request)).await?;
            util::report_mutation("Alert raised", &result, global)
        }

        AlertsCommand::Deactivate { id } => {
            let result = desk.execute(CoreCommand::DeactivateAlert { id }).await?;
            util::report_mutation("Alert deactivated", &result, global)
        }

        AlertsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete alert '{id}'?"), global.yes)? {
                return Ok(());
            }
            let result = desk.execute(CoreCommand::DeleteAlert { id }).await?;
            util::report_mutation("Alert deleted", &result, global)
        }

        AlertsCommand::Weather(command) => handle_weather(desk, command, global).await,
    }
}

async fn handle_weather(
    desk: &Desk,
    command: WeatherCommand,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match command {
        WeatherCommand::Latest => {
            let event_id = util::require_event(global)?;
            let reading = desk.latest_weather(&event_id).await?;
            let out = output::render_single(global.format(), &reading, weather_detail, |w| {
                w.id.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        WeatherCommand::Get { id } => {
            let reading = desk.weather_reading(&id).await?;
            let out = output::render_single(global.format(), &reading, weather_detail, |w| {
                w.id.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        WeatherCommand::Report {
            temperature,
            humidity,
            condition,
            wind_speed,
            description,
        } => {
            let report = WeatherReport {
                event_id: util::require_event(global)?,
                temperature,
                humidity,
                condition,
                wind_speed,
                description,
            };
            let result = desk.execute(CoreCommand::ReportWeather(report)).await?;
            util::report_mutation("Weather reported", &result, global)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(severity: AlertSeverity, active: bool) -> Alert {
        Alert {
            id: "a1".into(),
            event_id: "e1".into(),
            title: "Gate 3 closed".into(),
            message: "Use gate 4".into(),
            kind: AlertKind::Warning,
            severity,
            active,
            created_at: None,
        }
    }

    #[test]
    fn only_active_urgent_alerts_are_highlighted() {
        assert!(matches!(
            severity_tone(&alert(AlertSeverity::Critical, true)),
            Tone::Bad
        ));
        assert!(matches!(
            severity_tone(&alert(AlertSeverity::High, true)),
            Tone::Warn
        ));
        assert!(matches!(
            severity_tone(&alert(AlertSeverity::Critical, false)),
            Tone::Plain
        ));
    }

    #[test]
    fn weather_detail_shows_missing_wind_as_dash() {
        let reading = WeatherReading {
            id: "w1".into(),
            event_id: "e1".into(),
            temperature: 31.25,
            humidity: 78.0,
            condition: "Hot and Humid".into(),
            wind_speed: None,
            description: None,
            observed_at: None,
        };
        let detail = weather_detail(&reading);
        assert!(detail.contains("31.2 °C") || detail.contains("31.3 °C"));
        assert!(detail.contains("78%"));
        assert!(detail.lines().any(|l| l.contains("Wind") && l.trim_end().ends_with('-')));
    }
}
