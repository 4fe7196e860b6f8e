//! Client-side selection and ordering of tasks for display
//!
//! The remote returns raw task records; this module picks the date field
//! matching the view (completion date for completed tasks, due date
//! otherwise), applies the user's filters and orders the result.

use chrono::{Datelike, NaiveDate};

use crate::api::Task;
use crate::date;

/// Display date of a task. Tasks without one are still listed in pending
/// mode and always sort after every dated task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayDate {
    Date(NaiveDate),
    Missing,
}

impl DisplayDate {
    pub fn is_missing(&self) -> bool {
        matches!(self, DisplayDate::Missing)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DisplayDate::Date(date) => Some(*date),
            DisplayDate::Missing => None,
        }
    }
}

/// One row of the task table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: u64,
    pub date: DisplayDate,
    pub title: String,
}

/// Inclusive date range, both bounds already normalized from user input.
#[derive(Debug, Clone, Copy)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Selects and orders tasks for display.
///
/// With a period, only dated rows inside the range survive. Completed
/// tasks without a period are narrowed to the current ISO week of the
/// current year. Pending tasks without a period all pass through.
pub fn select_rows(
    tasks: &[Task],
    completed: bool,
    period: Option<Period>,
    today: NaiveDate,
) -> Vec<TaskRow> {
    let mut rows = Vec::new();

    for task in tasks {
        let date = display_date(task, completed);

        let keep = if let Some(period) = period {
            match date.date() {
                Some(date) => period.contains(date),
                None => false,
            }
        } else if completed {
            match date.date() {
                Some(date) => {
                    date.year() == today.year()
                        && date.iso_week().week() == today.iso_week().week()
                }
                None => false,
            }
        } else {
            true
        };

        if keep {
            rows.push(TaskRow {
                id: task.id,
                date,
                title: task.title.clone(),
            });
        }
    }

    sort_rows(&mut rows, completed);
    rows
}

/// Picks the view's date field off a raw record. The completion timestamp
/// is truncated to its date portion.
fn display_date(task: &Task, completed: bool) -> DisplayDate {
    let raw = if completed {
        task.completed_at
            .as_deref()
            .map(|stamp| &stamp[..stamp.len().min(10)])
    } else {
        task.due_date.as_deref()
    };

    match raw {
        Some(value) => match date::parse_flexible(value) {
            Ok(date) => DisplayDate::Date(date),
            Err(_) => DisplayDate::Missing,
        },
        None => DisplayDate::Missing,
    }
}

fn sort_rows(rows: &mut [TaskRow], completed: bool) {
    if completed {
        rows.sort_by(|a, b| (a.date.date(), &a.title).cmp(&(b.date.date(), &b.title)));
    } else {
        // Undated rows sort after every dated one.
        rows.sort_by(|a, b| {
            (a.date.is_missing(), a.date.date(), &a.title).cmp(&(
                b.date.is_missing(),
                b.date.date(),
                &b.title,
            ))
        });
    }
}
