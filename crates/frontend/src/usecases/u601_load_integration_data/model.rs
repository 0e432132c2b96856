//! Display model for the loaded item list

use crate::shared::date_utils::format_timestamp;
use contracts::enums::integration_type::IntegrationType;
use contracts::usecases::u601_load_integration_data::{IntegrationItem, LoadedItems};

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub key: String,
    pub title: String,
    pub id_line: String,
    pub created_line: Option<String>,
    pub modified_line: Option<String>,
    pub divider_after: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Empty { message: Option<String> },
    List {
        header: String,
        message: Option<String>,
        rows: Vec<ItemRow>,
    },
}

pub fn header_text(total_count: u64, integration: IntegrationType) -> String {
    format!("Loaded {} items from {}", total_count, integration)
}

pub fn result_view(loaded: LoadedItems, integration: IntegrationType) -> ResultView {
    if loaded.is_empty() {
        return ResultView::Empty {
            message: loaded.message,
        };
    }
    let len = loaded.items.len();
    let rows = loaded
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| item_row(item, index, len))
        .collect();
    ResultView::List {
        header: header_text(loaded.total_count, integration),
        message: loaded.message,
        rows,
    }
}

fn item_row(item: &IntegrationItem, index: usize, len: usize) -> ItemRow {
    let created_line = present(&item.creation_time)
        .map(|raw| format!("Created: {}", format_timestamp(item.created_on(), raw)));
    let modified_line = present(&item.last_modified_time)
        .map(|raw| format!("Modified: {}", format_timestamp(item.modified_on(), raw)));

    ItemRow {
        key: if item.id.is_empty() {
            index.to_string()
        } else {
            item.id.clone()
        },
        title: item.display_title(),
        id_line: format!("ID: {}", item.id),
        created_line,
        modified_line,
        divider_after: index + 1 < len,
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
