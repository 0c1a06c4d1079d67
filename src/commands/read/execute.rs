use std::error::Error;

use super::{SelectAllCmd, SelectByCmd, SelectCmd, SelectPageCmd};
use crate::cli::pairs_to_row;
use crate::commands::Execute;
use crate::db::QueryFacade;
use crate::types::RowsResult;

impl Execute for SelectAllCmd {
    type Output = RowsResult;

    fn execute(self, db: &QueryFacade) -> Result<Self::Output, Box<dyn Error>> {
        let rows = db.select_all(&self.table)?;
        Ok(RowsResult {
            table: self.table,
            rows,
        })
    }
}

impl Execute for SelectPageCmd {
    type Output = RowsResult;

    fn execute(self, db: &QueryFacade) -> Result<Self::Output, Box<dyn Error>> {
        let rows = db.select_paginated(&self.table, self.from, self.to)?;
        Ok(RowsResult {
            table: self.table,
            rows,
        })
    }
}

impl Execute for SelectByCmd {
    type Output = RowsResult;

    fn execute(self, db: &QueryFacade) -> Result<Self::Output, Box<dyn Error>> {
        let rows = db.select_by_column(&self.table, &self.column, self.value)?;
        Ok(RowsResult {
            table: self.table,
            rows,
        })
    }
}

impl Execute for SelectCmd {
    type Output = RowsResult;

    fn execute(self, db: &QueryFacade) -> Result<Self::Output, Box<dyn Error>> {
        let filters = pairs_to_row(self.filters);
        let rows = db.select_filtered(&self.table, &filters)?;
        Ok(RowsResult {
            table: self.table,
            rows,
        })
    }
}
