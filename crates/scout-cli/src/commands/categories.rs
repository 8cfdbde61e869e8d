//! Handle `scout categories`.

use scout_catalog::CatalogSource;
use scout_core::Catalog;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared;
use crate::output;

#[derive(Debug, Serialize)]
struct CategoryRow {
    key: String,
    name: String,
    icon: String,
    servers: usize,
}

pub async fn handle(source: &CatalogSource, flags: &GlobalFlags) -> anyhow::Result<()> {
    let catalog = shared::load_catalog(source).await?;
    let rows = category_rows(&catalog);
    output::output(&rows, flags.format)
}

fn category_rows(catalog: &Catalog) -> Vec<CategoryRow> {
    catalog
        .categories
        .iter()
        .map(|(key, info)| CategoryRow {
            key: key.clone(),
            name: info.name.clone(),
            icon: info.icon.clone(),
            servers: catalog
                .servers
                .iter()
                .filter(|entry| &entry.category == key)
                .count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rows_count_entries_per_category() {
        let catalog: Catalog = serde_json::from_str(
            r#"{
                "servers": [
                    { "name": "Alpha", "description": "a", "category": "db", "type": "Local" },
                    { "name": "Beta", "description": "b", "category": "web", "type": "Remote" },
                    { "name": "Gamma", "description": "c", "category": "db", "type": "Local" }
                ],
                "categories": {
                    "db": { "name": "Databases", "icon": "fas fa-database" },
                    "web": { "name": "Web Services", "icon": "fas fa-globe" },
                    "empty": { "name": "Unused", "icon": "fas fa-folder" }
                }
            }"#,
        )
        .unwrap();

        let rows = category_rows(&catalog);
        assert_eq!(rows.len(), 3);

        let db = rows.iter().find(|row| row.key == "db").unwrap();
        assert_eq!(db.name, "Databases");
        assert_eq!(db.servers, 2);

        let unused = rows.iter().find(|row| row.key == "empty").unwrap();
        assert_eq!(unused.servers, 0);
    }
}
