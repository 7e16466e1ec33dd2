use comfy_table::{Cell, ContentArrangement, Table, presets::UTF8_FULL};
use strum::IntoEnumIterator;
use warden_client::shared::{SortField, SortState};
use warden_std::Style;

pub fn get_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Column label for `field`, with the direction indicator only when it is
/// the active sort column
pub fn sort_header_label(field: SortField, sort: &SortState) -> String {
    match sort.direction_for(field) {
        Some(direction) => format!(
            "{} {}",
            field.label(),
            Style::SortIndicator.paint(direction.indicator())
        ),
        None => field.label().to_string(),
    }
}

/// One header cell per sortable column, in display order
pub fn sort_header(sort: &SortState) -> Vec<Cell> {
    SortField::iter()
        .map(|field| Cell::new(sort_header_label(field, sort)))
        .collect()
}
