use std::error::Error;

use super::QueryCmd;
use crate::commands::Execute;
use crate::db::{QueryFacade, QueryResult};

impl Execute for QueryCmd {
    type Output = QueryResult;

    fn execute(self, db: &QueryFacade) -> Result<Self::Output, Box<dyn Error>> {
        Ok(db.raw_query(&self.sql)?)
    }
}
