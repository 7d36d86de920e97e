//! Terminal output for the `visa` commands.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use visa_model::Content;
use visa_validate::{country_specific_questions, question_list_for_state};

use crate::session::{SessionReport, StepRecord};

/// Destination countries with their question counts.
pub fn countries_table(content: &Content) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Country"),
        header_cell("Questions"),
        header_cell("Verification"),
    ]);
    apply_table_style(&mut table);
    for country in &content.countries {
        table.add_row(vec![
            Cell::new(country).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(content.country_questions(country).len()),
            Cell::new(content.verification_questions(country).len()),
        ]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table
}

/// The question set a user sees for the given selections, as plain text.
pub fn format_question_set(content: &Content, country: Option<&str>, state: Option<&str>) -> String {
    let mut lines = vec![content.common_questions.title.clone()];
    let common = question_list_for_state(content, state.unwrap_or_default());
    push_numbered(&mut lines, &common);

    if let Some(country) = country.filter(|country| !country.is_empty()) {
        lines.push(format!(
            "{} ({country})",
            content.country_specific_questions.title
        ));
        let specific = country_specific_questions(content, country);
        if specific.is_empty() {
            lines.push("  (none)".to_string());
        } else {
            push_numbered(&mut lines, &specific);
        }
    }
    lines.join("\n")
}

/// One row per replayed step.
pub fn session_table(report: &SessionReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Result"),
        header_cell("Route"),
        header_cell("Messages"),
    ]);
    apply_table_style(&mut table);
    for step in &report.steps {
        table.add_row(step_row(step));
    }
    table
}

pub fn print_session(report: &SessionReport) {
    println!("{}", session_table(report));
    if report.submitted {
        println!("Application submitted; back on {}", report.final_route);
    } else {
        println!("Application not submitted; stopped on {}", report.final_route);
    }
}

fn step_row(step: &StepRecord) -> Vec<Cell> {
    let result = if step.passed {
        Cell::new("passed").fg(Color::Green)
    } else {
        Cell::new("failed").fg(Color::Red).add_attribute(Attribute::Bold)
    };
    let messages = if step.messages.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(step.messages.join("\n"))
    };
    vec![
        Cell::new(step.stage.label()),
        result,
        Cell::new(step.route.name()),
        messages,
    ]
}

fn push_numbered(lines: &mut Vec<String>, questions: &[String]) {
    for (index, question) in questions.iter().enumerate() {
        lines.push(format!("  {}. {question}", index + 1));
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
