use clap::Parser;
use serde::Serialize;

use crate::{WardenErrorCode, WardenOutput, WardenResult};

#[derive(Debug, Serialize, Parser)]
/// Explain an error code
pub struct Explain {
    /// The full error code. For example, E004
    #[arg(value_name = "CODE", value_parser = <WardenErrorCode as std::str::FromStr>::from_str)]
    code: WardenErrorCode,
}

impl Explain {
    pub fn run(&self) -> WardenResult<WardenOutput> {
        Ok(WardenOutput::ErrorExplanation(self.code.explain()))
    }
}
