use std::error::Error;
use std::fs;
use std::path::Path;

use super::{DeleteCmd, InsertCmd, InsertManyCmd, UpdateCmd};
use crate::cli::pairs_to_row;
use crate::commands::Execute;
use crate::db::{QueryFacade, RowData};
use crate::types::AffectedResult;

impl Execute for InsertCmd {
    type Output = AffectedResult;

    fn execute(self, db: &QueryFacade) -> Result<Self::Output, Box<dyn Error>> {
        let row = pairs_to_row(self.values);
        let affected = db.insert(&self.table, &row)?;
        Ok(AffectedResult::new("insert", &self.table, affected))
    }
}

/// Read a JSON array of objects into records.
pub(crate) fn load_rows(path: &Path) -> Result<Vec<RowData>, Box<dyn Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let json: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| format!("Invalid JSON in {}: {}", path.display(), e))?;
    let items = json
        .as_array()
        .ok_or_else(|| format!("{} must contain a JSON array of objects", path.display()))?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            RowData::from_json(item).ok_or_else(|| -> Box<dyn Error> {
                format!("Record {} in {} is not an object", i, path.display()).into()
            })
        })
        .collect()
}

impl Execute for InsertManyCmd {
    type Output = AffectedResult;

    fn execute(self, db: &QueryFacade) -> Result<Self::Output, Box<dyn Error>> {
        let rows = load_rows(&self.file)?;
        let affected = if self.columns.is_empty() {
            db.insert_many(&self.table, &rows)?
        } else {
            db.insert_many_with_columns(&self.table, &self.columns, &rows)?
        };
        Ok(AffectedResult::new("insert", &self.table, affected))
    }
}

impl Execute for UpdateCmd {
    type Output = AffectedResult;

    fn execute(self, db: &QueryFacade) -> Result<Self::Output, Box<dyn Error>> {
        let assignments = pairs_to_row(self.values);
        let filters = pairs_to_row(self.filters);
        let affected = db.update(&self.table, &assignments, &filters)?;
        Ok(AffectedResult::new("update", &self.table, affected))
    }
}

impl Execute for DeleteCmd {
    type Output = AffectedResult;

    fn execute(self, db: &QueryFacade) -> Result<Self::Output, Box<dyn Error>> {
        let filters = pairs_to_row(self.filters);
        let affected = db.delete(&self.table, &filters)?;
        Ok(AffectedResult::new("delete", &self.table, affected))
    }
}
