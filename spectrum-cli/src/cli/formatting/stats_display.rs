//! Dataset summary rendering

use crate::cli::output::{create_standard_table, format_number, header_cell, section_header, tree_item};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use spectrum_core::{Dataset, StatusCode};
use spectrum_data::{current_status_counts, distinct_categories, StatusCounts};

/// Per-category current-status counts, one row per category present
pub fn summary_table(dataset: &Dataset) -> Table {
    let mut table = create_standard_table();

    let mut header = vec![header_cell("Category")];
    header.extend(StatusCode::ALL.iter().map(|status| header_cell(status.as_str())));
    header.push(header_cell("Total"));
    table.set_header(header);

    for category in distinct_categories(dataset) {
        let counts: StatusCounts = dataset
            .species
            .iter()
            .filter(|species| species.category == category)
            .map(|species| species.current_status)
            .collect();

        let mut row = vec![Cell::new(category.as_str())];
        row.extend(count_cells(&counts));
        table.add_row(row);
    }

    let mut row = vec![Cell::new("All").add_attribute(Attribute::Bold)];
    row.extend(count_cells(&current_status_counts(dataset)));
    table.add_row(row);

    table
}

fn count_cells(counts: &StatusCounts) -> Vec<Cell> {
    let mut cells: Vec<Cell> = StatusCode::ALL
        .iter()
        .map(|&status| {
            let cell = Cell::new(counts.get(status)).set_alignment(CellAlignment::Right);
            if status.is_extinct() && counts.get(status) > 0 {
                cell.fg(Color::Red)
            } else {
                cell
            }
        })
        .collect();
    cells.push(
        Cell::new(format_number(counts.total()))
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right),
    );
    cells
}

/// Print metadata followed by the summary table
pub fn print_dataset_summary(dataset: &Dataset) {
    section_header("Dataset Summary");
    tree_item(false, "Species", &format_number(dataset.metadata.total_count));
    tree_item(false, "Years", &dataset.metadata.year_range.to_string());
    tree_item(
        true,
        "Updated",
        &dataset.metadata.last_updated.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );
    println!("{}", summary_table(dataset));
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectrum_core::Category;
    use spectrum_test::fixtures::{dataset_of, SpeciesBuilder};

    #[test]
    fn test_summary_table_rows() {
        let dataset = dataset_of(vec![
            SpeciesBuilder::new("species-1").status(StatusCode::EN).build(),
            SpeciesBuilder::new("species-2")
                .category(Category::Birds)
                .status(StatusCode::EX)
                .build(),
        ]);

        let rendered = summary_table(&dataset).to_string();
        assert!(rendered.contains("Birds"));
        assert!(rendered.contains("Mammals"));
        assert!(rendered.contains("All"));
        assert!(rendered.find("Birds").unwrap() < rendered.find("Mammals").unwrap());
    }
}
