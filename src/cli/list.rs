//! `wlc list` command implementation

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use colored::{ColoredString, Colorize};

use crate::api::Client;
use crate::date;
use crate::filter::{self, DisplayDate, Period, TaskRow};

use super::definition::{ListCommands, ListTasksArgs};

const MIN_DATE_COL: usize = 10;

pub async fn run(client: &Client, command: ListCommands) -> Result<()> {
    match command {
        ListCommands::Lists => run_lists(client).await,
        ListCommands::Tasks(args) => run_tasks(client, args).await,
    }
}

async fn run_lists(client: &Client) -> Result<()> {
    for list in client.get_lists().await? {
        println!("{} | {}", list.id, list.title);
    }
    Ok(())
}

async fn run_tasks(client: &Client, args: ListTasksArgs) -> Result<()> {
    let list_id = super::resolve_list_id(client, &args.in_list).await?;
    let tasks = client.get_tasks(list_id, args.completed).await?;

    let period = match &args.period {
        Some(bounds) => Some(Period {
            start: date::parse_flexible(&bounds[0])?,
            end: date::parse_flexible(&bounds[1])?,
        }),
        None => None,
    };

    let today = Local::now().date_naive();
    let rows = filter::select_rows(&tasks, args.completed, period, today);

    print_task_table(&rows, args.completed, today);
    Ok(())
}

fn date_column_title(completed: bool) -> &'static str {
    if completed {
        "completed_at"
    } else {
        "due_date"
    }
}

fn print_task_table(rows: &[TaskRow], completed: bool, today: NaiveDate) {
    let date_title = date_column_title(completed);
    let width = MIN_DATE_COL.max(date_title.len());

    let header = format!(
        "{:^10} | {:^width$} | title",
        "id",
        date_title,
        width = width
    );
    println!("{}", header.bold());

    for row in rows {
        let rendered = match row.date {
            // Display dates are zero-padded, unlike the form sent to the API.
            DisplayDate::Date(date) => date.format("%Y-%m-%d").to_string(),
            DisplayDate::Missing => String::new(),
        };
        let line = format!("{} | {:^width$} | {}", row.id, rendered, row.title, width = width);
        println!("{}", colorize_row(&line, row.date, completed, today));
    }
}

/// Pending rows are colored by urgency: overdue red, due today bright
/// red, due in the current ISO week yellow. Completed and undated rows
/// stay uncolored.
fn colorize_row(line: &str, date: DisplayDate, completed: bool, today: NaiveDate) -> ColoredString {
    let DisplayDate::Date(date) = date else {
        return line.normal();
    };
    if completed {
        return line.normal();
    }

    if date < today {
        line.red()
    } else if date == today {
        line.bright_red()
    } else if date.iso_week() == today.iso_week() {
        line.yellow()
    } else {
        line.normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_column_width_grows_with_title() {
        assert_eq!(MIN_DATE_COL.max(date_column_title(false).len()), 10);
        assert_eq!(MIN_DATE_COL.max(date_column_title(true).len()), 12);
    }

    #[test]
    fn test_colorize_urgency_ladder() {
        colored::control::set_override(true);
        let today = day(2024, 6, 5);

        let overdue = colorize_row("x", DisplayDate::Date(day(2024, 6, 4)), false, today);
        assert!(overdue.to_string().contains("\u{1b}[31m"));

        let due_today = colorize_row("x", DisplayDate::Date(day(2024, 6, 5)), false, today);
        assert!(due_today.to_string().contains("\u{1b}[91m"));

        // 2024-06-07 is in the same ISO week as 2024-06-05.
        let this_week = colorize_row("x", DisplayDate::Date(day(2024, 6, 7)), false, today);
        assert!(this_week.to_string().contains("\u{1b}[33m"));

        let later = colorize_row("x", DisplayDate::Date(day(2024, 7, 1)), false, today);
        assert!(!later.to_string().contains("\u{1b}[3"));

        // Completed and undated rows stay plain even when overdue.
        let done = colorize_row("x", DisplayDate::Date(day(2024, 6, 4)), true, today);
        assert!(!done.to_string().contains("\u{1b}[31m"));

        let undated = colorize_row("x", DisplayDate::Missing, false, today);
        assert!(!undated.to_string().contains("\u{1b}[31m"));
    }
}
