use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dok_model::{ArtifactBundle, DokLevel};
use dok_standards::{SeedReport, SeedStatus};

pub fn print_seed_summary(report: &SeedReport) {
    println!("Data: {}", report.data_dir.display());
    println!("Output: {}", report.output_dir.display());
    println!("{}", seed_table(report));
    let failures: Vec<(&str, &str)> = report
        .subjects
        .iter()
        .filter_map(|subject| match &subject.status {
            SeedStatus::Failed { error } => Some((subject.csv.as_str(), error.as_str())),
            _ => None,
        })
        .collect();
    if !failures.is_empty() {
        eprintln!("Errors:");
        for (csv, error) in failures {
            eprintln!("- {csv}: {error}");
        }
    }
}

pub fn seed_table(report: &SeedReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Output"),
        header_cell("Status"),
        header_cell("Grades"),
        header_cell("Standards"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    let mut total_grades = 0usize;
    for subject in &report.subjects {
        total_grades += subject.grades;
        table.add_row(vec![
            Cell::new(&subject.csv)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&subject.json),
            status_cell(&subject.status),
            count_cell(subject.grades),
            count_cell(subject.standards),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell(report.mode),
        Cell::new(total_grades).add_attribute(Attribute::Bold),
        Cell::new(report.total_standards()).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn levels_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("DOK"),
        header_cell("Name"),
        header_cell("Definition"),
        header_cell("Verbs"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for level in DokLevel::ALL {
        table.add_row(vec![
            Cell::new(level.as_u8())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(level.label()),
            Cell::new(level.definition()),
            Cell::new(level.verbs().join(", ")),
        ]);
    }
    table
}

pub fn bundle_table(bundle: &ArtifactBundle) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Format"),
        header_cell("Prompt"),
        header_cell("Evidence of success"),
    ]);
    apply_table_style(&mut table);
    for item in &bundle.items {
        table.add_row(vec![
            Cell::new("Item").fg(Color::Blue),
            Cell::new(&item.kind),
            Cell::new(&item.text),
            Cell::new(&item.success),
        ]);
    }
    for activity in &bundle.activities {
        table.add_row(vec![
            Cell::new("Activity").fg(Color::Green),
            Cell::new(&activity.title),
            Cell::new(&activity.task),
            Cell::new(&activity.evidence),
        ]);
    }
    table
}

pub fn print_bundle(bundle: &ArtifactBundle) {
    println!("Standard: {}", bundle.standard);
    println!("{}: {}", bundle.dok, bundle.dok.definition());
    println!("{}", bundle_table(bundle));
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: &SeedStatus) -> Cell {
    match status {
        SeedStatus::Written => Cell::new("written").fg(Color::Green),
        SeedStatus::UpToDate => Cell::new("up to date").fg(Color::Green),
        SeedStatus::Stale => Cell::new("stale")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
        SeedStatus::Skipped => dim_cell("skipped"),
        SeedStatus::Failed { .. } => Cell::new("FAILED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
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
