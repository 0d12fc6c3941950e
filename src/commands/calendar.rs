use super::report_failure;
use crate::{
    client::ApiClient,
    libs::{
        messages::Message,
        view::{format_month_year, month_grid, View},
    },
    msg_error, msg_print,
};
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct CalendarArgs {
    /// Month to show (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    month: Option<String>,
}

/// Parses `YYYY-MM` into a year and month.
pub fn parse_month(value: &str) -> Option<(i32, u32)> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d").ok()?;
    Some((date.year(), date.month()))
}

pub async fn cmd(client: &ApiClient, args: CalendarArgs) -> Result<()> {
    let today = Local::now().date_naive();
    let (year, month) = match args.month.as_deref() {
        Some(value) => match parse_month(value) {
            Some(ym) => ym,
            None => {
                msg_error!(Message::InvalidMonth(value.to_string()));
                return Ok(());
            }
        },
        None => (today.year(), today.month()),
    };
    let Some(grid) = month_grid(year, month) else {
        msg_error!(Message::InvalidMonth(format!("{}-{:02}", year, month)));
        return Ok(());
    };

    let todos = match client.list_todos().await {
        Ok(todos) => todos,
        Err(e) => {
            report_failure(Message::LoadTodosFailed, &e);
            return Ok(());
        }
    };

    msg_print!(Message::CalendarHeader(format_month_year(year, month)), true);
    View::calendar(&grid, &todos, today);
    Ok(())
}
