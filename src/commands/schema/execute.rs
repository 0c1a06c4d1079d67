use std::error::Error;

use super::{CreateTableCmd, DescribeCmd, DropTableCmd, ListTablesCmd, TruncateCmd};
use crate::commands::Execute;
use crate::db::QueryFacade;
use crate::types::{AffectedResult, NamesResult};

impl Execute for CreateTableCmd {
    type Output = AffectedResult;

    fn execute(self, db: &QueryFacade) -> Result<Self::Output, Box<dyn Error>> {
        let affected = db.create_table(&self.table, &self.columns)?;
        Ok(AffectedResult::new("create table", &self.table, affected))
    }
}

impl Execute for DropTableCmd {
    type Output = AffectedResult;

    fn execute(self, db: &QueryFacade) -> Result<Self::Output, Box<dyn Error>> {
        let affected = db.drop_table(&self.table)?;
        Ok(AffectedResult::new("drop table", &self.table, affected))
    }
}

impl Execute for TruncateCmd {
    type Output = AffectedResult;

    fn execute(self, db: &QueryFacade) -> Result<Self::Output, Box<dyn Error>> {
        let affected = db.truncate(&self.table)?;
        Ok(AffectedResult::new("truncate", &self.table, affected))
    }
}

impl Execute for ListTablesCmd {
    type Output = NamesResult;

    fn execute(self, db: &QueryFacade) -> Result<Self::Output, Box<dyn Error>> {
        Ok(NamesResult {
            title: "Tables".to_string(),
            names: db.list_tables()?,
        })
    }
}

impl Execute for DescribeCmd {
    type Output = NamesResult;

    fn execute(self, db: &QueryFacade) -> Result<Self::Output, Box<dyn Error>> {
        let names = db.describe_columns(&self.table)?;
        if names.is_empty() {
            return Err(format!("Table '{}' not found or has no columns", self.table).into());
        }
        Ok(NamesResult {
            title: format!("Columns of {}", self.table),
            names,
        })
    }
}
