//! Text for the non-survey views: landing, completion, not found and the dashboard.

use std::fmt::Write;

use intake::surveys::pages;
use intake::{Dashboard, DashboardLoader, SurveyKind};

const BAR_WIDTH: usize = 30;

pub fn landing() -> String {
    format!(
        "{}\n\n{}\n\n{}\n{}\n\n{}\n\n{}",
        pages::LANDING_TITLE,
        pages::LANDING_INTRO,
        pages::WHY_TITLE,
        pages::WHY_BODY,
        pages::WHY_FACTS.join(" · "),
        pages::LANDING_PROMPT,
    )
}

/// Shown above the survey menu.
pub fn landing_subtitle() -> &'static str {
    pages::LANDING_SUBTITLE
}

/// One menu entry per survey kind: `Title - description`.
pub fn survey_choice(kind: SurveyKind) -> String {
    format!("{} - {}", kind.title(), kind.description())
}

pub fn completion() -> String {
    format!(
        "{}\n\n{}\n\n{}\n\nWhat's Next?\n{}\n\nQuestions? Contact us at {}",
        pages::COMPLETION_TITLE,
        pages::COMPLETION_MESSAGE,
        pages::COMPLETION_USE,
        pages::COMPLETION_NEXT,
        pages::CONTACT_EMAIL
    )
}

pub fn not_found(path: &str) -> String {
    format!("404: nothing lives at {path}")
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    "█".repeat((count * BAR_WIDTH).div_ceil(max))
}

fn cell(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// The whole dashboard, or a loading line while fetches are outstanding.
pub fn dashboard(loader: &DashboardLoader) -> String {
    let Some(dashboard) = loader.dashboard() else {
        return "Loading dashboard...".to_string();
    };

    let mut out = String::new();
    for (kind, err) in loader.errors() {
        let _ = writeln!(out, "! could not load {}: {err}", kind.collection());
    }
    out.push_str(&summary(&dashboard));
    out
}

fn summary(dashboard: &Dashboard) -> String {
    let mut out = String::from("Survey Dashboard\n\n");
    let counts = dashboard.counts();

    let _ = writeln!(out, "Survey Responses by Type ({} total)", counts.total());
    let bars = counts.bars();
    let max = bars.iter().map(|(_, count)| *count).max().unwrap_or(0);
    for (label, count) in bars {
        let _ = writeln!(out, "  {label:<18} {count:>4} {}", bar(count, max));
    }

    out.push_str("\nUser Primary Reasons\n");
    let users = counts.users.max(1);
    for group in dashboard.primary_reasons() {
        let percent = (group.count as f64 / users as f64 * 100.0).round();
        let _ = writeln!(
            out,
            "  {:>4} ({percent:>3}%)  {}",
            group.count,
            cell(group.value.as_deref())
        );
    }

    out.push_str("\nUser Surveys\n");
    for row in dashboard.user_table() {
        let _ = writeln!(
            out,
            "  {:<10} | {} | {} | {} | {}",
            row.date,
            cell(row.primary_reason.as_deref()),
            cell(row.search_frequency.as_deref()),
            cell(row.platform_useful.as_deref()),
            cell(row.mobile_importance.as_deref()),
        );
    }

    out.push_str("\nService Provider Surveys\n");
    for row in dashboard.provider_table() {
        let _ = writeln!(
            out,
            "  {:<10} | {} | {} | {} | {}",
            row.date,
            row.service_types,
            cell(row.platform_interest.as_deref()),
            cell(row.verification_importance.as_deref()),
            cell(row.payment_willingness.as_deref()),
        );
    }

    out.push_str("\nReal Estate Surveys\n");
    for row in dashboard.real_estate_table() {
        let _ = writeln!(
            out,
            "  {:<10} | {} | {} | {} | {}",
            row.date,
            cell(row.primary_role.as_deref()),
            cell(row.platform_interest.as_deref()),
            cell(row.subscription_interest.as_deref()),
            cell(row.seo_importance.as_deref()),
        );
    }
    out
}
