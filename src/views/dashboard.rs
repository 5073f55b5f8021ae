//! Dashboard view: priorities, tasks, blockers, weekly report, questions.

use std::fmt;

use crate::api::types::{AnalysisReport, Level, TaskStatus};

pub fn render_empty() -> String {
    "Dashboard\n=========\nNo analysis yet. Submit notes from /.\n".to_string()
}

pub fn render(report: &AnalysisReport) -> String {
    DashboardView(report).to_string()
}

/// Text layout of a report.
pub struct DashboardView<'a>(pub &'a AnalysisReport);

impl fmt::Display for DashboardView<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(out, self.0)
    }
}

fn write_report(out: &mut fmt::Formatter<'_>, report: &AnalysisReport) -> fmt::Result {
    writeln!(out, "Dashboard")?;
    writeln!(out, "=========")?;
    writeln!(
        out,
        "{} chars analysed ({:?} mode)",
        report.meta.received_chars, report.meta.mode
    )?;

    section(out, "Priorities", report.priorities.len())?;
    for p in &report.priorities {
        writeln!(out, "  [{}] {}: {}", level(p.urgency), p.title, p.reason)?;
    }

    section(out, "Tasks", report.tasks.len())?;
    for t in &report.tasks {
        let due = t.due.as_deref().unwrap_or("no due date");
        writeln!(
            out,
            "  [{}] {} ({}, {}, {:.0}%)",
            status(t.status),
            t.title,
            t.owner,
            due,
            t.confidence * 100.0
        )?;
    }

    section(out, "Blockers", report.blockers.len())?;
    for b in &report.blockers {
        writeln!(out, "  [{}] {}", level(b.severity), b.title)?;
        if !b.impacts.is_empty() {
            writeln!(out, "      impacts: {}", b.impacts.join(", "))?;
        }
        if !b.suggested_fix.is_empty() {
            writeln!(out, "      fix: {}", b.suggested_fix)?;
        }
    }

    let weekly = &report.weekly_report;
    writeln!(out)?;
    writeln!(out, "Weekly report")?;
    for (label, items) in [
        ("done", &weekly.done),
        ("next", &weekly.next),
        ("risks", &weekly.risks),
        ("asks", &weekly.asks),
    ] {
        writeln!(out, "  {label}:")?;
        for item in items {
            writeln!(out, "    - {item}")?;
        }
    }

    section(out, "Questions", report.questions.len())?;
    for q in &report.questions {
        writeln!(out, "  ? {}", q.question)?;
        if !q.why.is_empty() {
            writeln!(out, "    ({})", q.why)?;
        }
    }
    Ok(())
}

fn section(out: &mut fmt::Formatter<'_>, title: &str, count: usize) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{title} ({count})")
}

fn level(level: Level) -> &'static str {
    match level {
        Level::High => "high",
        Level::Medium => "medium",
        Level::Low => "low",
        Level::Other => "?",
    }
}

fn status(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "todo",
        TaskStatus::Doing => "doing",
        TaskStatus::Done => "done",
        TaskStatus::Blocked => "blocked",
        TaskStatus::Other => "?",
    }
}
