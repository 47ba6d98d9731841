//! Scaffold command implementation.
//!
//! The `graphdev scaffold` command materializes a minimal LangGraph starter
//! project: manifest, package with an example graph, a test file, and a
//! README, with the package name substituted throughout.

use std::path::PathBuf;

use crate::cli::args::ScaffoldArgs;
use crate::error::Result;
use crate::scaffold::{write_file_set, PackageName, ScaffoldFileSet};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The scaffold command implementation.
pub struct ScaffoldCommand {
    args: ScaffoldArgs,
}

impl ScaffoldCommand {
    /// Create a new scaffold command.
    pub fn new(args: ScaffoldArgs) -> Self {
        Self { args }
    }

    /// Resolve the output directory to an absolute path.
    ///
    /// The directory does not need to pre-exist.
    fn out_dir(&self) -> Result<PathBuf> {
        Ok(std::path::absolute(&self.args.out)?)
    }
}

impl Command for ScaffoldCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // Name validation precedes any filesystem interaction: a bad name
        // must leave the output directory untouched.
        let package = PackageName::parse(&self.args.package)?;
        let out_dir = self.out_dir()?;

        let files = ScaffoldFileSet::render(&package)?;
        let created = write_file_set(&out_dir, &files, self.args.force)?;

        ui.message("Scaffold created:");
        for path in &created {
            ui.message(&format!("- {}", path.display()));
        }
        ui.message("");
        ui.message("Next:");
        ui.message(&format!("- cd {}", out_dir.display()));
        ui.message("- python -m pip install -e .");
        ui.message("- python -m pytest -q");

        Ok(CommandResult::success())
    }
}
