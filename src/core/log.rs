use crate::errors::AppResult;
use crate::store::Store;
use crate::store::log::{LogRow, load_log};
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    match regex::Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "work_add" | "todo_add" | "import" => Colour::Green,
        "work_del" | "todo_del" => Colour::Red,
        "work_edit" | "todo_edit" | "todo_toggle" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "export" => Colour::Blue,
        "signup" | "login" | "logout" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        other if other.ends_with("_error") || other.ends_with("_failed") => Colour::Red,
        _ => Colour::White,
    }
}

fn op_target(row: &LogRow) -> String {
    if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    }
}

/// Operation plus target, operation coloured, cut to `MAX_OP_WIDTH` visible
/// characters.
fn render_op(row: &LogRow) -> String {
    let color = color_for_operation(&row.operation);
    let visible = op_target(row);

    let cut = if visible.chars().count() > MAX_OP_WIDTH {
        let mut s: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        visible
    };

    match cut.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(cut.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &Store) -> AppResult<()> {
        let rows = load_log(store.conn())?;

        if rows.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let dates: Vec<String> = rows
            .iter()
            .map(|r| {
                chrono::DateTime::parse_from_rfc3339(&r.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| r.date.clone())
            })
            .collect();

        let op_w = rows
            .iter()
            .map(|r| op_target(r).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
        let date_w = dates.iter().map(String::len).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (row, date) in rows.iter().zip(&dates) {
            let op = render_op(row);
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                row.id, date, op, padding, row.message,
            );
        }

        Ok(())
    }
}
