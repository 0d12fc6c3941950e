//! Terminal rendering and the small date/color computations behind it.
//!
//! Everything that depends on "today" takes it as an argument, so the
//! overdue and calendar logic can be checked against a fixed date.

use super::todo::{Todo, DATE_FORMAT};
use crate::db::categories::Category;
use chrono::{Datelike, NaiveDate};
use prettytable::{row, Cell, Row, Table};

/// Preset colors offered when creating a category.
pub const CATEGORY_PALETTE: [&str; 10] = [
    "#e3f2fd", "#f3e5f5", "#e8f5e8", "#fff3e0", "#fce4ec", "#f1f8e9", "#e0f2f1", "#fff8e1", "#fafafa", "#e8eaf6",
];

pub const DEFAULT_CATEGORY_COLOR: &str = CATEGORY_PALETTE[0];

const DARK_TEXT: &str = "#000000";
const LIGHT_TEXT: &str = "#ffffff";

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A task is overdue when its due date is strictly before `today` and it is
/// still open. Only calendar dates are compared.
pub fn is_overdue(due_date: Option<NaiveDate>, completed: bool, today: NaiveDate) -> bool {
    match due_date {
        Some(due) => !completed && due < today,
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoStatus {
    Completed,
    Overdue,
    Pending,
    NoDueDate,
}

impl TodoStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TodoStatus::Completed => "Completed",
            TodoStatus::Overdue => "Overdue",
            TodoStatus::Pending => "Pending",
            TodoStatus::NoDueDate => "No due date",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            TodoStatus::Completed => "#4caf50",
            TodoStatus::Overdue => "#f44336",
            TodoStatus::Pending => "#ff9800",
            TodoStatus::NoDueDate => "#9e9e9e",
        }
    }
}

pub fn status(todo: &Todo, today: NaiveDate) -> TodoStatus {
    if todo.completed {
        TodoStatus::Completed
    } else if is_overdue(todo.due_date, todo.completed, today) {
        TodoStatus::Overdue
    } else if todo.due_date.is_some() {
        TodoStatus::Pending
    } else {
        TodoStatus::NoDueDate
    }
}

/// Parses `#rgb` or `#rrggbb` into its channels.
fn parse_hex_color(token: &str) -> Option<(u32, u32, u32)> {
    let hex = token.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let hex = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => hex.to_string(),
        _ => return None,
    };
    let channel = |s: &str| u32::from_str_radix(s, 16).ok();
    Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?))
}

/// Text color that stays readable on a category background.
///
/// Uses YIQ brightness; anything that is not a hex color gets dark text.
pub fn contrast_color(token: &str) -> &'static str {
    match parse_hex_color(token) {
        Some((r, g, b)) => {
            let yiq = (299 * r + 587 * g + 114 * b) / 1000;
            if yiq >= 128 {
                DARK_TEXT
            } else {
                LIGHT_TEXT
            }
        }
        None => DARK_TEXT,
    }
}

/// Shape of a Sunday-first month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Empty cells before the 1st (Sunday = 0).
    pub leading_blanks: u32,
    pub days_in_month: u32,
}

impl MonthGrid {
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

pub fn month_grid(year: i32, month: u32) -> Option<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };

    Some(MonthGrid {
        year,
        month,
        leading_blanks: first.weekday().num_days_from_sunday(),
        days_in_month: next_month.signed_duration_since(first).num_days() as u32,
    })
}

pub fn todos_for_date(todos: &[Todo], date: NaiveDate) -> Vec<&Todo> {
    todos.iter().filter(|t| t.due_date == Some(date)).collect()
}

/// `June 2024`
pub fn format_month_year(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default()
}

fn format_due(due_date: Option<NaiveDate>) -> String {
    due_date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
}

fn category_label(name: &Option<String>, color: &Option<String>) -> String {
    match (name, color) {
        (Some(name), Some(color)) => format!("{} ({})", name, color),
        (Some(name), None) => name.clone(),
        _ => String::new(),
    }
}

pub struct View {}

impl View {
    pub fn todos(todos: &[Todo], today: NaiveDate) {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "TITLE", "DUE", "STATUS", "CATEGORY"]);
        for todo in todos {
            let status = status(todo, today);
            let overdue = if status == TodoStatus::Overdue { " ⚠" } else { "" };
            table.add_row(row![
                todo.id,
                if todo.completed { "[x]" } else { "[ ]" },
                todo.title,
                format!("{}{}", format_due(todo.due_date), overdue),
                status.label(),
                category_label(&todo.category_name, &todo.category_color)
            ]);
        }
        table.printstd();
    }

    pub fn todo_detail(todo: &Todo, today: NaiveDate) {
        let mut table = Table::new();
        let status = status(todo, today);

        table.add_row(row!["ID", todo.id]);
        table.add_row(row!["TITLE", todo.title]);
        if !todo.description.is_empty() {
            table.add_row(row!["DESCRIPTION", todo.description]);
        }
        table.add_row(row!["STATUS", format!("{} ({})", status.label(), status.color())]);
        if todo.due_date.is_some() {
            table.add_row(row!["DUE", format_due(todo.due_date)]);
        }
        if todo.category_name.is_some() {
            table.add_row(row!["CATEGORY", category_label(&todo.category_name, &todo.category_color)]);
        }
        table.add_row(row!["CREATED", todo.created_at]);
        if todo.updated_at != todo.created_at {
            table.add_row(row!["UPDATED", todo.updated_at]);
        }
        table.printstd();
    }

    pub fn categories(categories: &[Category]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "COLOR", "TEXT", "CREATED"]);
        for category in categories {
            table.add_row(row![
                category.id,
                category.name,
                category.color,
                contrast_color(&category.color),
                category.created_at
            ]);
        }
        table.printstd();
    }

    /// Month grid with each day's task titles, its pending count and an
    /// overdue marker. Today is wrapped in brackets.
    pub fn calendar(grid: &MonthGrid, todos: &[Todo], today: NaiveDate) {
        let mut table = Table::new();
        table.set_titles(Row::new(WEEKDAYS.iter().map(|d| Cell::new(d)).collect()));

        let mut cells: Vec<Cell> = (0..grid.leading_blanks).map(|_| Cell::new("")).collect();
        for day in 1..=grid.days_in_month {
            let Some(date) = grid.date(day) else { continue };
            cells.push(Cell::new(&Self::calendar_cell(day, date, todos, today)));
            if cells.len() == WEEKDAYS.len() {
                table.add_row(Row::new(std::mem::take(&mut cells)));
            }
        }
        if !cells.is_empty() {
            while cells.len() < WEEKDAYS.len() {
                cells.push(Cell::new(""));
            }
            table.add_row(Row::new(cells));
        }
        table.printstd();
    }

    fn calendar_cell(day: u32, date: NaiveDate, todos: &[Todo], today: NaiveDate) -> String {
        let mut lines = vec![if date == today { format!("[{}]", day) } else { day.to_string() }];

        let due = todos_for_date(todos, date);
        lines.extend(due.iter().map(|t| {
            let mark = if t.completed { "✓" } else { "•" };
            format!("{} {}", mark, t.title)
        }));

        let pending = due.iter().filter(|t| !t.completed).count();
        if pending > 0 {
            lines.push(format!("{} pending", pending));
        }
        if due.iter().any(|t| is_overdue(t.due_date, t.completed, today)) {
            lines.push(TodoStatus::Overdue.label().to_string());
        }
        lines.join("\n")
    }
}
