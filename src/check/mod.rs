//! Environment checking for Python and LangGraph requirements.
//!
//! This module answers one question: does the local environment satisfy a
//! minimum Python version and have the `langgraph` package installed?
//!
//! - [`version`] - MAJOR.MINOR requirement parsing and comparison
//! - [`interpreter`] - Python interpreter discovery and introspection
//! - [`distribution`] - installed-package presence and metadata lookup
//! - [`report`] - the JSON report emitted by `graphdev check`

pub mod distribution;
pub mod interpreter;
pub mod report;
pub mod version;

pub use distribution::DistributionStatus;
pub use interpreter::Interpreter;
pub use report::EnvironmentReport;
pub use version::VersionRequirement;
