//! Plain-text rendering of the view models for terminal output.
//!
//! Every absent value renders as the placeholder from
//! [`services::format`](crate::services::format); counts and shares use the
//! same formatting as the browser front end.

use std::fmt::Write as _;

use crate::api::{ChartRecord, ProgramRecord};
use crate::services::format::{
    format_count, format_number, format_share, format_time, PLACEHOLDER,
};
use crate::services::{
    CompetitionView, DayOverview, DaySelection, ProgramHistory, ProgramTrend, TrendSummary,
    ViewState,
};

/// A view model that can be printed as text.
pub trait Render {
    fn render(&self) -> String;
}

/// Render a view in whatever display state it is in.
pub fn render_state<T: Render>(title: &str, state: &ViewState<T>) -> String {
    match state {
        ViewState::Loading => format!("{}\nLoading…\n", title),
        ViewState::Empty => format!("{}\nNo data\n", title),
        ViewState::Error { kind, message } => format!("{}\nError ({}): {}\n", title, kind, message),
        ViewState::Ready { data } => format!("{}\n{}", title, data.render()),
    }
}

/// Column-aligned table. The first column is left-aligned, the rest right.
struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(header: &[&str]) -> Self {
        Self {
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }
        widths
    }

    fn to_text(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();
        write_row(&mut out, &self.header, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_row(&mut out, &rule, &widths);
        for row in &self.rows {
            write_row(&mut out, row, &widths);
        }
        out
    }
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let pad = width.saturating_sub(cell.chars().count());
        if i > 0 {
            line.push_str("  ");
            line.push_str(&" ".repeat(pad));
            line.push_str(cell);
        } else {
            line.push_str(cell);
            line.push_str(&" ".repeat(pad));
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

fn chart_table(points: &[ChartRecord], smoothed_header: &str) -> String {
    let mut table = Table::new(&["label", "value", smoothed_header]);
    for point in points {
        table.row(vec![
            point.label.clone(),
            format_count(point.raw_value),
            format_count(point.smoothed_value),
        ]);
    }
    table.to_text()
}

fn summary_line(summary: &TrendSummary) -> String {
    format!(
        "latest {}  smoothed {}  mean {}  min {}  max {}  ({} of {} points with data)\n",
        format_count(summary.latest),
        format_count(summary.latest_smoothed),
        format_count(summary.mean),
        format_count(summary.min),
        format_count(summary.max),
        summary.valid_points,
        summary.total_points,
    )
}

impl Render for DaySelection {
    fn render(&self) -> String {
        let mut out = String::new();
        for day in &self.days {
            let marker = if self.selected.as_ref() == Some(day) { "*" } else { " " };
            let _ = writeln!(out, "{} {}", marker, day);
        }
        out
    }
}

impl Render for DayOverview {
    fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}  AMR {}  peak {}  share {}  minutes {}",
            self.date,
            format_count(Some(self.topline.average_viewers)),
            format_count(Some(self.topline.peak_viewers)),
            format_share(self.topline.shr_pct),
            format_count(Some(self.topline.points_minutes)),
        );
        out.push('\n');

        let mut programs = Table::new(&["#", "title", "start", "end", "min", "AMR", "SHR %"]);
        for row in &self.programs {
            programs.row(vec![
                row.rank.to_string(),
                row.title.clone(),
                format_time(row.start.as_deref()),
                format_time(row.end.as_deref()),
                format_number(row.duration_min),
                format_count(row.amr),
                format_share(row.shr_pct),
            ]);
        }
        out.push_str(&programs.to_text());
        out.push('\n');
        out.push_str(&chart_table(&self.minutes, &format!("MA{}", self.window)));
        out
    }
}

impl Render for ProgramTrend {
    fn render(&self) -> String {
        let mut out = format!(
            "{}  last {} days  mode {}  window {}\n",
            self.slug, self.days, self.mode, self.window
        );
        out.push_str(&summary_line(&self.summary));
        out.push('\n');
        out.push_str(&chart_table(&self.points, &format!("MA{}", self.window)));
        out
    }
}

impl Render for ProgramHistory {
    fn render(&self) -> String {
        let mut out = format!("{}  window {}\n", self.slug, self.window);
        out.push_str(&summary_line(&self.summary));
        out.push('\n');
        out.push_str(&chart_table(&self.points, &format!("MA{}", self.window)));
        out
    }
}

impl Render for ProgramRecord {
    fn render(&self) -> String {
        let mut table = Table::new(&["field", "value"]);
        let rows = [
            ("title", self.title.clone()),
            ("start", format_time(self.start.as_deref())),
            ("end", format_time(self.end.as_deref())),
            ("duration (min)", format_number(self.duration_min)),
            ("AMR", format_count(self.amr)),
            ("SHR %", format_share(self.shr_pct)),
            (
                "rank",
                self.rank_amr
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| PLACEHOLDER.to_string()),
            ),
            ("break penalty", format_count(self.break_penalty)),
            ("recovery (min)", format_number(self.recovery_time)),
            ("lead-in delta", format_count(self.lead_in_delta)),
            ("lead-out delta", format_count(self.lead_out_delta)),
        ];
        for (field, value) in rows {
            table.row(vec![field.to_string(), value]);
        }
        table.to_text()
    }
}

impl Render for CompetitionView {
    fn render(&self) -> String {
        let mut table = Table::new(&["#", "station", "SHR %", "AMR"]);
        for station in &self.stations {
            table.row(vec![
                station.position.to_string(),
                station.name.clone(),
                format_share(station.shr_pct),
                format_count(station.amr),
            ]);
        }
        let mut out = table.to_text();
        let _ = writeln!(
            out,
            "total {}  leader {}",
            format_share(self.total_share),
            self.leader.as_deref().unwrap_or(PLACEHOLDER),
        );
        out
    }
}
