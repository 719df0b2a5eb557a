//! Clap derive structures for the `eventdesk` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// eventdesk -- operator console for live event operations
#[derive(Debug, Parser)]
#[command(
    name = "eventdesk",
    version,
    about = "Run event operations from the command line",
    long_about = "An operator console for the event-operations backend.\n\n\
        Manage events, zones, lost-person reports, medical emergencies,\n\
        exits, washrooms, feedback and crowd readings, and print the\n\
        live dashboards computed from them.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration profile to use
    #[arg(long, short = 'p', env = "EVENTDESK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend URL (overrides profile)
    #[arg(long, short = 'u', env = "EVENTDESK_URL", global = true)]
    pub url: Option<String>,

    /// Event id to scope commands to (overrides profile)
    #[arg(long, short = 'e', env = "EVENTDESK_EVENT", global = true)]
    pub event: Option<String>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "EVENTDESK_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "EVENTDESK_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "EVENTDESK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Retries for failed reads (overrides profile)
    #[arg(long, env = "EVENTDESK_RETRIES", global = true)]
    pub retries: Option<u32>,
}

// build.rs includes this file without the callers.
#[allow(dead_code)]
impl GlobalOpts {
    pub fn format(&self) -> OutputFormat {
        self.output.unwrap_or(OutputFormat::Table)
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color.unwrap_or(ColorMode::Auto)
    }
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage events
    #[command(alias = "ev")]
    Events(EventsArgs),

    /// Manage zones and their head counts
    #[command(alias = "z")]
    Zones(ZonesArgs),

    /// Manage lost-person reports
    #[command(alias = "lp")]
    LostPersons(LostPersonsArgs),

    /// Manage medical emergencies and facilities
    #[command(alias = "med")]
    Medical(MedicalArgs),

    /// Manage emergency exits
    Exits(ExitsArgs),

    /// Manage washroom facilities
    #[command(alias = "wc")]
    Washrooms(WashroomsArgs),

    /// Read and submit attendee feedback
    #[command(alias = "fb")]
    Feedback(FeedbackArgs),

    /// Crowd density readings and image head counts
    Crowd(CrowdArgs),

    /// Raise, list and clear operator alerts; report weather
    #[command(alias = "al")]
    Alerts(AlertsArgs),

    /// Print computed dashboards
    #[command(alias = "dash")]
    Dashboard(DashboardArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared List Arguments ────────────────────────────────────────────

/// Shared filtering arguments for all list commands.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only records with this status
    #[arg(long)]
    pub status: Option<String>,

    /// Only records with this priority (severity for emergencies)
    #[arg(long)]
    pub priority: Option<String>,

    /// Case-insensitive text search over names and locations
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Ignore the configured event and list across all events
    #[arg(long, short = 'A')]
    pub all_events: bool,

    /// Max rows to print (0 = all)
    #[arg(long, short = 'l', default_value = "0")]
    pub limit: usize,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  EVENTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct EventsArgs {
    #[command(subcommand)]
    pub command: EventsCommand,
}

#[derive(Debug, Subcommand)]
pub enum EventsCommand {
    /// List events
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get event details
    Get {
        /// Event ID
        id: String,
    },

    /// Create an event
    Create {
        /// Event name
        #[arg(long, required_unless_present = "from_file")]
        name: Option<String>,

        /// Start time (e.g. 2025-06-01T10:00:00)
        #[arg(long, required_unless_present = "from_file")]
        start: Option<String>,

        /// End time
        #[arg(long, required_unless_present = "from_file")]
        end: Option<String>,

        /// Free-text description
        #[arg(long)]
        description: Option<String>,

        /// Venue
        #[arg(long)]
        location: Option<String>,

        /// Expected capacity
        #[arg(long)]
        capacity: Option<u32>,

        /// Organizer id
        #[arg(long)]
        organizer: Option<String>,

        /// Create from JSON file (areas and all other fields)
        #[arg(long, short = 'F', conflicts_with_all = &["name", "start", "end"])]
        from_file: Option<PathBuf>,
    },

    /// Replace an event with the contents of a JSON file
    Update {
        /// Event ID
        id: String,

        /// Full payload as JSON
        #[arg(long, short = 'F', required = true)]
        from_file: PathBuf,
    },

    /// Set an event's status
    Status {
        /// Event ID
        id: String,

        #[arg(value_enum)]
        status: EventStatusArg,
    },

    /// Delete an event
    Delete {
        /// Event ID
        id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EventStatusArg {
    Upcoming,
    Live,
    Completed,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ZONES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ZonesArgs {
    #[command(subcommand)]
    pub command: ZonesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ZonesCommand {
    /// List zones of the current event
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get zone details
    Get {
        /// Zone ID
        id: String,
    },

    /// Create a zone in the current event
    Create {
        /// Zone name
        #[arg(long, required_unless_present = "from_file")]
        name: Option<String>,

        /// Maximum number of people
        #[arg(long, required_unless_present = "from_file")]
        capacity: Option<u32>,

        /// Current head count
        #[arg(long)]
        current: Option<u32>,

        /// Camera snapshot URL
        #[arg(long)]
        image_url: Option<String>,

        /// Create from JSON file
        #[arg(long, short = 'F', conflicts_with_all = &["name", "capacity"])]
        from_file: Option<PathBuf>,
    },

    /// Replace a zone with the contents of a JSON file
    Update {
        /// Zone ID
        id: String,

        /// Full payload as JSON
        #[arg(long, short = 'F', required = true)]
        from_file: PathBuf,
    },

    /// Record a new head count
    Density {
        /// Zone ID
        id: String,

        /// Number of people currently in the zone
        count: u32,

        /// Explicit label (derived from the count when omitted)
        #[arg(long, value_enum)]
        status: Option<DensityArg>,
    },

    /// Delete a zone
    Delete {
        /// Zone ID
        id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DensityArg {
    Low,
    Moderate,
    Crowded,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  LOST PERSONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct LostPersonsArgs {
    #[command(subcommand)]
    pub command: LostPersonsCommand,
}

#[derive(Debug, Subcommand)]
pub enum LostPersonsCommand {
    /// List reports of the current event
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get report details
    Get {
        /// Report ID
        id: String,
    },

    /// File a new report in the current event
    Report {
        /// Missing person's name
        #[arg(long, required_unless_present = "from_file")]
        name: Option<String>,

        /// Age in years
        #[arg(long, required_unless_present = "from_file")]
        age: Option<u32>,

        #[arg(long, default_value = "unknown")]
        gender: String,

        /// Clothing, appearance
        #[arg(long, default_value = "")]
        description: String,

        /// Where they were last seen
        #[arg(long, required_unless_present = "from_file")]
        last_seen: Option<String>,

        /// When they were last seen
        #[arg(long, required_unless_present = "from_file")]
        last_seen_time: Option<String>,

        #[arg(long, default_value = "operator")]
        reporter_id: String,

        #[arg(long, required_unless_present = "from_file")]
        reporter_name: Option<String>,

        #[arg(long, required_unless_present = "from_file")]
        reporter_phone: Option<String>,

        /// Create from JSON file
        #[arg(long, short = 'F', conflicts_with_all = &["name", "age", "last_seen"])]
        from_file: Option<PathBuf>,
    },

    /// Set a report's status
    Status {
        /// Report ID
        id: String,

        #[arg(value_enum)]
        status: LostStatusArg,
    },

    /// Manage the report photo
    Photo(PhotoArgs),

    /// Reports still being searched for
    Active,

    /// Status and priority counts for the current event
    Stats,
}

#[derive(Debug, Args)]
pub struct PhotoArgs {
    #[command(subcommand)]
    pub command: PhotoCommand,
}

#[derive(Debug, Subcommand)]
pub enum PhotoCommand {
    /// Upload a photo (jpg, png, ...)
    Upload {
        /// Report ID
        id: String,

        /// Image file
        path: PathBuf,
    },

    /// Remove the photo
    Delete {
        /// Report ID
        id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LostStatusArg {
    #[value(alias = "reported")]
    Missing,
    Searching,
    Found,
    Resolved,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  MEDICAL
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct MedicalArgs {
    #[command(subcommand)]
    pub command: MedicalCommand,
}

#[derive(Debug, Subcommand)]
pub enum MedicalCommand {
    /// Medical emergencies
    #[command(alias = "em")]
    Emergencies(EmergenciesArgs),

    /// Hospitals, clinics and first-aid posts
    #[command(alias = "fac")]
    Facilities(FacilitiesArgs),
}

#[derive(Debug, Args)]
pub struct EmergenciesArgs {
    #[command(subcommand)]
    pub command: EmergenciesCommand,
}

#[derive(Debug, Subcommand)]
pub enum EmergenciesCommand {
    /// List emergencies of the current event
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get emergency details
    Get {
        /// Emergency ID
        id: String,
    },

    /// Report a new emergency in the current event
    Report {
        #[arg(long = "type", value_enum)]
        emergency_type: EmergencyTypeArg,

        #[arg(long, value_enum)]
        severity: SeverityArg,

        /// Where it happened
        #[arg(long)]
        location: String,

        #[arg(long)]
        patient_name: Option<String>,

        #[arg(long)]
        patient_age: Option<u32>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Set an emergency's status
    Status {
        /// Emergency ID
        id: String,

        #[arg(value_enum)]
        status: EmergencyStatusArg,

        /// Responder handling the case
        #[arg(long)]
        responder: Option<String>,

        /// Minutes from report to arrival
        #[arg(long)]
        response_time: Option<u32>,
    },

    /// Severity, status and type counts for the current event
    Stats,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EmergencyTypeArg {
    Injury,
    Illness,
    Heatstroke,
    Cardiac,
    Other,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SeverityArg {
    Critical,
    Severe,
    Moderate,
    Minor,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EmergencyStatusArg {
    Reported,
    ResponderDispatched,
    OnScene,
    Transported,
    Resolved,
}

#[derive(Debug, Args)]
pub struct FacilitiesArgs {
    #[command(subcommand)]
    pub command: FacilitiesCommand,
}

#[derive(Debug, Subcommand)]
pub enum FacilitiesCommand {
    /// List facilities of the current event
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get facility details
    Get {
        /// Facility ID
        id: String,
    },

    /// Register a facility in the current event
    Create {
        #[arg(long)]
        name: String,

        #[arg(long = "type", value_enum)]
        facility_type: FacilityTypeArg,

        #[arg(long)]
        contact: String,

        #[arg(long)]
        address: String,
    },

    /// Replace a facility with the contents of a JSON file
    Update {
        /// Facility ID
        id: String,

        /// Full payload as JSON
        #[arg(long, short = 'F', required = true)]
        from_file: PathBuf,
    },

    /// Delete a facility
    Delete {
        /// Facility ID
        id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FacilityTypeArg {
    Hospital,
    Clinic,
    FirstAid,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  EXITS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ExitsArgs {
    #[command(subcommand)]
    pub command: ExitsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ExitsCommand {
    /// List exits of the current event
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get exit details
    Get {
        /// Exit ID
        id: String,
    },

    /// Register an exit in the current event
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        location: String,

        #[arg(long, value_enum, default_value = "clear")]
        status: ExitStatusArg,

        /// People per minute the exit can clear
        #[arg(long)]
        capacity: Option<u32>,

        /// Current people per minute
        #[arg(long)]
        flow_rate: Option<u32>,
    },

    /// Replace an exit with the contents of a JSON file
    Update {
        /// Exit ID
        id: String,

        /// Full payload as JSON
        #[arg(long, short = 'F', required = true)]
        from_file: PathBuf,
    },

    /// Set an exit's status
    Status {
        /// Exit ID
        id: String,

        #[arg(value_enum)]
        status: ExitStatusArg,
    },

    /// Delete an exit
    Delete {
        /// Exit ID
        id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExitStatusArg {
    Clear,
    Moderate,
    Crowded,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  WASHROOMS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct WashroomsArgs {
    #[command(subcommand)]
    pub command: WashroomsCommand,
}

#[derive(Debug, Subcommand)]
pub enum WashroomsCommand {
    /// List washrooms of the current event
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get washroom details
    Get {
        /// Washroom ID
        id: String,
    },

    /// Register a washroom in the current event
    Create {
        #[arg(long)]
        name: String,

        #[arg(long, value_enum)]
        gender: GenderArg,

        /// Number of stalls
        #[arg(long)]
        capacity: u32,

        #[arg(long)]
        floor: Option<String>,

        #[arg(long, value_enum)]
        availability: Option<AvailabilityArg>,

        /// How to find it
        #[arg(long)]
        location_details: Option<String>,
    },

    /// Replace a washroom with the contents of a JSON file
    Update {
        /// Washroom ID
        id: String,

        /// Full payload as JSON
        #[arg(long, short = 'F', required = true)]
        from_file: PathBuf,
    },

    /// Set a washroom's availability
    Status {
        /// Washroom ID
        id: String,

        #[arg(value_enum)]
        availability: AvailabilityArg,
    },

    /// Delete a washroom
    Delete {
        /// Washroom ID
        id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
    Unisex,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AvailabilityArg {
    Available,
    Occupied,
    Maintenance,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  FEEDBACK
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct FeedbackArgs {
    #[command(subcommand)]
    pub command: FeedbackCommand,
}

#[derive(Debug, Subcommand)]
pub enum FeedbackCommand {
    /// List feedback of the current event
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get a feedback entry
    Get {
        /// Feedback ID
        id: String,
    },

    /// Submit feedback for the current event
    Submit {
        /// Rating from 1 to 5
        #[arg(long)]
        rating: u8,

        #[arg(long, default_value = "operator")]
        user_id: String,

        #[arg(long)]
        comment: Option<String>,

        #[arg(long)]
        category: Option<String>,
    },

    /// Rating and sentiment breakdown for the current event
    Stats,

    /// Newest entries first
    Recent {
        /// Number of entries [default: 10]
        #[arg(long, short = 'n')]
        limit: Option<u32>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CROWD
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CrowdArgs {
    #[command(subcommand)]
    pub command: CrowdCommand,
}

#[derive(Debug, Subcommand)]
pub enum CrowdCommand {
    /// List readings of the current event
    #[command(alias = "ls")]
    List(ListArgs),

    /// Most recent readings of the current event
    Latest,

    /// Record a head count over a circular area
    Record {
        /// Area label
        #[arg(long)]
        area: String,

        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Radius in metres
        #[arg(long)]
        radius: f64,

        /// People counted
        #[arg(long)]
        count: u32,
    },

    /// Count people in an image
    Count {
        /// Image file
        image: PathBuf,

        /// Area label (needed with --save)
        #[arg(long)]
        area: Option<String>,

        /// Radius in metres (needed with --save)
        #[arg(long)]
        radius: Option<f64>,

        /// Also store the result as a crowd reading
        #[arg(long)]
        save: bool,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ALERTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AlertsArgs {
    #[command(subcommand)]
    pub command: AlertsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AlertsCommand {
    /// List alerts of the current event, newest first
    ///
    /// `--status` takes active or inactive; `--priority` a severity.
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get alert details
    Get {
        /// Alert ID
        id: String,
    },

    /// Raise an alert in the current event
    Raise {
        #[arg(long)]
        title: String,

        #[arg(long)]
        message: String,

        #[arg(long = "type", value_enum, default_value = "info")]
        kind: AlertKindArg,

        #[arg(long, value_enum)]
        severity: AlertSeverityArg,
    },

    /// Mark an alert as no longer active
    Deactivate {
        /// Alert ID
        id: String,
    },

    /// Delete an alert
    Delete {
        /// Alert ID
        id: String,
    },

    /// Weather readings
    #[command(subcommand)]
    Weather(WeatherCommand),
}

#[derive(Debug, Subcommand)]
pub enum WeatherCommand {
    /// Latest reading of the current event
    Latest,

    /// Get a reading by ID
    Get {
        /// Reading ID
        id: String,
    },

    /// Post a reading for the current event
    Report {
        /// Degrees Celsius
        #[arg(long, allow_hyphen_values = true)]
        temperature: f64,

        /// Relative humidity, percent
        #[arg(long)]
        humidity: f64,

        /// Short condition label, e.g. "Hot and Humid"
        #[arg(long)]
        condition: String,

        #[arg(long)]
        wind_speed: Option<f64>,

        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AlertKindArg {
    Info,
    Warning,
    Emergency,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AlertSeverityArg {
    Low,
    Medium,
    High,
    Critical,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DASHBOARD
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Copy, Args)]
pub struct DashboardArgs {
    #[command(subcommand)]
    pub board: DashboardBoard,

    /// Redraw every N seconds until interrupted
    #[arg(long, short = 'w', global = true)]
    pub watch: Option<u64>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum DashboardBoard {
    /// Occupancy across all zones of the current event
    Overview,
    /// Density per zone
    Zones,
    /// Lost-person case counts
    LostPersons,
    /// Emergency and facility counts
    Medical,
    /// Exit status and utilization
    Exits,
    /// Washroom availability
    Washrooms,
    /// Ratings and sentiment
    Feedback,
    /// Active alerts by type and severity
    Alerts,
    /// All events at a glance
    Events,
    /// Every board of the current event from one snapshot
    All,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG / COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current configuration
    Show,

    /// Set a value on the active profile
    Set {
        /// Key: backend_url, event, timeout, retries, ca_cert, insecure
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
