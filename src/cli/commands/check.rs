//! Check command implementation.
//!
//! The `graphdev check` command verifies Python and LangGraph runtime
//! requirements and emits a JSON report. The report body goes straight to
//! stdout (not through the UI) so callers can pipe it; the process exit
//! status mirrors the report's `ok` field for callers that do not parse
//! JSON.

use crate::check::interpreter::Interpreter;
use crate::check::version::{extract_runtime_version, VersionRequirement};
use crate::check::{distribution, EnvironmentReport};
use crate::cli::args::CheckArgs;
use crate::error::{GraphdevError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Run the environment inspection and build the report.
    pub fn build_report(&self) -> Result<EnvironmentReport> {
        let required = VersionRequirement::parse(&self.args.min_version)?;

        let interpreter = Interpreter::resolve(self.args.python.as_deref())?;
        tracing::debug!("inspecting interpreter {}", interpreter.path().display());

        let raw = interpreter.version_output()?;
        let runtime = extract_runtime_version(&raw).ok_or_else(|| {
            GraphdevError::InterpreterQueryFailed {
                message: format!("could not parse version from {raw:?}"),
            }
        })?;

        let search_path = interpreter.search_path()?;
        let status = distribution::inspect(&search_path);

        Ok(EnvironmentReport::new(
            runtime.full.clone(),
            &self.args.min_version,
            required.is_satisfied_by(runtime.major, runtime.minor),
            status,
        ))
    }
}

impl Command for CheckCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = self.build_report()?;
        let body = report.to_json()?;

        if let Some(path) = &self.args.write_json {
            report.write_to(path)?;
        }

        // Contract output: the same JSON body regardless of --write-json.
        print!("{}", body);

        Ok(if report.ok {
            CommandResult::success()
        } else {
            CommandResult::failure(1)
        })
    }
}
