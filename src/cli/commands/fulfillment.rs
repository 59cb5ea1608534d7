use super::{CatalogSource, CommandHandler, CommandResult};
use crate::cli::render::{no_courses_notice, render_fulfillment, unknown_minor_notice};
use crate::cli::OutputFormat;
use crate::engine::Analyzer;
use crate::Result;

/// Handler for the `fulfillment` command
pub struct FulfillmentCommand {
    pub source: CatalogSource,
    pub major: String,
    pub minor: String,
    pub format: OutputFormat,
}

impl CommandHandler for FulfillmentCommand {
    fn execute(&self) -> Result<CommandResult> {
        let (settings, store) = self.source.load()?;
        if store.minors.get(&self.minor).is_none() {
            return Ok(CommandResult::Error(unknown_minor_notice(&self.minor)));
        }

        let (courses, fulfillment, diagnostics) =
            Analyzer::new(&store, &settings).fulfillment(&self.major, &self.minor);

        for diagnostic in &diagnostics {
            eprintln!("{}", diagnostic);
        }

        if courses.is_empty() {
            return Ok(CommandResult::Warning(no_courses_notice(&self.minor)));
        }

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&fulfillment)?);
            }
            OutputFormat::Text => {
                println!("{}", render_fulfillment(&fulfillment));
            }
        }
        Ok(CommandResult::Success(None))
    }

    fn name(&self) -> &'static str {
        "fulfillment"
    }
}

impl FulfillmentCommand {
    pub fn new(source: CatalogSource, major: String, minor: String, format: OutputFormat) -> Self {
        Self {
            source,
            major,
            minor,
            format,
        }
    }
}
