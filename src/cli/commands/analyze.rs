use super::{CatalogSource, CommandHandler, CommandResult};
use crate::cli::render::{
    no_courses_notice, render_table, unknown_minor_notice, LEGEND, UNPROCESSABLE_NOTICE,
};
use crate::cli::OutputFormat;
use crate::engine::{Analysis, AnalysisOutcome, Analyzer};
use crate::Result;

/// Handler for the `analyze` command
pub struct AnalyzeCommand {
    pub source: CatalogSource,
    pub major: String,
    pub minor: String,
    pub format: OutputFormat,
}

impl CommandHandler for AnalyzeCommand {
    fn execute(&self) -> Result<CommandResult> {
        let (settings, store) = self.source.load()?;
        if store.minors.get(&self.minor).is_none() {
            return Ok(CommandResult::Error(unknown_minor_notice(&self.minor)));
        }

        let analysis = Analyzer::new(&store, &settings).analyze(&self.major, &self.minor);

        for diagnostic in &analysis.diagnostics {
            eprintln!("{}", diagnostic);
        }

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
                Ok(CommandResult::Success(None))
            }
            OutputFormat::Text => Ok(self.report(&analysis, &settings.marker)),
        }
    }

    fn name(&self) -> &'static str {
        "analyze"
    }
}

impl AnalyzeCommand {
    pub fn new(source: CatalogSource, major: String, minor: String, format: OutputFormat) -> Self {
        Self {
            source,
            major,
            minor,
            format,
        }
    }

    /// Print the table, or turn an empty outcome into the matching notice
    fn report(&self, analysis: &Analysis, marker: &str) -> CommandResult {
        match &analysis.outcome {
            AnalysisOutcome::NoCourses => CommandResult::Warning(no_courses_notice(&self.minor)),
            AnalysisOutcome::Unprocessable => {
                CommandResult::Success(Some(UNPROCESSABLE_NOTICE.to_string()))
            }
            AnalysisOutcome::Table(table) => {
                println!("{}", render_table(table, &analysis.major, marker));
                println!();
                println!("{}", LEGEND);
                CommandResult::Success(None)
            }
        }
    }
}
