use crate::reminder::{self, ReminderReport};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::print_json;

pub fn handle_remind(ctx: &CommandContext, dry_run: bool, json: bool) -> Result<()> {
    let mut state = ctx.load_state()?;
    let pending = reminder::pending_reminders(&state, ctx.today);

    if dry_run || pending.sent.is_empty() {
        if json {
            print_json(&serde_json::json!({ "dry_run": dry_run, "report": pending }))?;
        } else {
            print_report(&pending, dry_run);
        }
        return Ok(());
    }

    let report = send_pending(ctx, &mut state)?;

    if json {
        print_json(&serde_json::json!({ "dry_run": false, "report": report }))?;
    } else {
        print_report(&report, false);
    }
    if !report.failed.is_empty() {
        anyhow::bail!("{} reminder(s) could not be sent", report.failed.len());
    }
    Ok(())
}

#[cfg(feature = "email")]
fn send_pending(
    ctx: &CommandContext,
    state: &mut crate::model::PlannerState,
) -> Result<ReminderReport> {
    use crate::config::SMTP_PASSWORD_ENV;
    use crate::mailer::SmtpMailer;

    let password = std::env::var(SMTP_PASSWORD_ENV).ok().filter(|p| !p.is_empty());
    let mailer = SmtpMailer::from_settings(&ctx.config.email, password)?;
    let report = reminder::run_reminders(state, ctx.today, &mailer, |s| ctx.store.save(s))?;
    Ok(report)
}

#[cfg(not(feature = "email"))]
fn send_pending(
    _ctx: &CommandContext,
    _state: &mut crate::model::PlannerState,
) -> Result<ReminderReport> {
    anyhow::bail!("studyplan was built without email support; rebuild with --features email")
}

fn print_report(report: &ReminderReport, dry_run: bool) {
    if report.is_empty() {
        println!("No reminders due.");
        return;
    }

    let verb = if dry_run { "Would send" } else { "Sent" };
    for sent in &report.sent {
        println!(
            "{} reminder for {} to {}",
            verb.green(),
            sent.name.bold(),
            sent.message.recipient
        );
    }
    for failed in &report.failed {
        println!("{} {}: {}", "Failed".red(), failed.name.bold(), failed.reason);
    }
    for skipped in &report.skipped {
        println!("{} {}: {}", "Skipped".yellow(), skipped.name.bold(), skipped.reason);
    }
}
