//! Feedback command handlers.

use tabled::Tabled;

use eventdesk_core::{
    Command as CoreCommand, Desk, Feedback, FeedbackStats, FeedbackSubmission,
    RECENT_FEEDBACK_LIMIT,
};

use crate::cli::{FeedbackArgs, FeedbackCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct FeedbackRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Sentiment")]
    sentiment: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Comment")]
    comment: String,
    #[tabled(rename = "Submitted")]
    submitted: String,
}

const COMMENT_WIDTH: usize = 48;

impl From<&Feedback> for FeedbackRow {
    fn from(f: &Feedback) -> Self {
        let comment = util::or_dash(f.comment.as_deref());
        Self {
            id: f.id.clone(),
            rating: stars(f.rating),
            sentiment: if f.sentiment_inferred {
                format!("{}*", f.sentiment)
            } else {
                f.sentiment.to_string()
            },
            category: util::or_dash(f.category.as_deref()),
            comment: if comment.chars().count() > COMMENT_WIDTH {
                let cut: String = comment.chars().take(COMMENT_WIDTH - 1).collect();
                format!("{cut}…")
            } else {
                comment
            },
            submitted: util::fmt_time(f.submitted_at.as_ref()),
        }
    }
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn detail(f: &Feedback) -> String {
    output::key_values(&[
        ("ID", f.id.clone()),
        ("Event", f.event_id.clone()),
        ("User", util::or_dash(f.user_id.as_deref())),
        ("Rating", format!("{} ({})", stars(f.rating), f.rating)),
        (
            "Sentiment",
            if f.sentiment_inferred {
                format!("{} (inferred from comment)", f.sentiment)
            } else {
                f.sentiment.to_string()
            },
        ),
        ("Category", util::or_dash(f.category.as_deref())),
        ("Comment", util::or_dash(f.comment.as_deref())),
        ("Submitted", util::fmt_time(f.submitted_at.as_ref())),
    ])
}

fn stats_detail(s: &FeedbackStats) -> String {
    let ratings: Vec<(String, u64)> = s
        .rating_distribution
        .iter()
        .map(|(k, n)| (stars(*k), n))
        .collect();
    let mut pairs = vec![
        ("Total", s.total.to_string()),
        ("Average", format!("{:.1}", s.average_rating)),
    ];
    pairs.extend(s.sentiment.iter().map(|(k, n)| (k.as_ref(), n.to_string())));
    pairs.extend(ratings.iter().map(|(label, n)| (label.as_str(), n.to_string())));
    output::key_values(&pairs)
}

pub async fn handle(desk: &Desk, args: FeedbackArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        FeedbackCommand::List(list) => {
            let filter = util::filter_from(&list, global)?;
            let entries = util::apply_limit(desk.feedback(&filter).await?, list.limit);
            let out = output::render_list(
                global.format(),
                &entries,
                |f| FeedbackRow::from(f),
                |f| f.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FeedbackCommand::Get { id } => {
            let entry = desk.feedback_entry(&id).await?;
            let out = output::render_single(global.format(), &entry, detail, |f| f.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FeedbackCommand::Submit {
            rating,
            user_id,
            comment,
            category,
        } => {
            let submission = FeedbackSubmission {
                event_id: util::require_event(global)?,
                user_id,
                rating,
                comment,
                category,
            };
            let result = desk.execute(CoreCommand::SubmitFeedback(submission)).await?;
            util::report_mutation("Feedback submitted", &result, global)
        }

        FeedbackCommand::Stats => {
            let event_id = util::require_event(global)?;
            let stats = desk.feedback_stats(&event_id).await?;
            let out = output::render_single(global.format(), &stats, stats_detail, |s| {
                s.total.to_string()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FeedbackCommand::Recent { limit } => {
            let event_id = util::require_event(global)?;
            let entries = desk
                .recent_feedback(&event_id, limit.unwrap_or(RECENT_FEEDBACK_LIMIT))
                .await?;
            let out = output::render_list(
                global.format(),
                &entries,
                |f| FeedbackRow::from(f),
                |f| f.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
