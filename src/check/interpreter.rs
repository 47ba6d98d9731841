//! Python interpreter discovery and introspection.
//!
//! The checker never runs inside the interpreter it inspects, so everything
//! here goes through short subprocess queries against a resolved binary.
//! Resolution walks PATH entries directly rather than shelling out to
//! `which` — `which` behavior varies across systems and is sometimes a
//! shell builtin with inconsistent error handling.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{GraphdevError, Result};

/// Interpreter names tried in order when no explicit path is given.
const INTERPRETER_NAMES: &[&str] = &["python3", "python"];

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// A resolved Python interpreter.
#[derive(Debug, Clone)]
pub struct Interpreter {
    path: PathBuf,
}

impl Interpreter {
    /// Resolve an interpreter, preferring an explicit path over PATH lookup.
    ///
    /// PATH lookup tries `python3` first, then `python`. Fails with
    /// [`GraphdevError::InterpreterNotFound`] when nothing usable is found.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if path.is_file() {
                return Ok(Self {
                    path: path.to_path_buf(),
                });
            }
            return Err(GraphdevError::InterpreterNotFound);
        }

        let entries = parse_system_path();
        for name in INTERPRETER_NAMES {
            if let Some(path) = resolve_tool_path(name, &entries) {
                tracing::debug!("resolved interpreter {} at {}", name, path.display());
                return Ok(Self { path });
            }
        }

        Err(GraphdevError::InterpreterNotFound)
    }

    /// Get the interpreter binary path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `--version` and return the combined output.
    ///
    /// Interpreters before Python 3.4 print the version to stderr, so both
    /// streams are captured and concatenated.
    pub fn version_output(&self) -> Result<String> {
        let output = Command::new(&self.path).arg("--version").output()?;

        if !output.status.success() {
            return Err(GraphdevError::InterpreterQueryFailed {
                message: format!(
                    "{} --version exited with {:?}",
                    self.path.display(),
                    output.status.code()
                ),
            });
        }

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(combined.trim().to_string())
    }

    /// Query the interpreter's module search path (`sys.path`).
    ///
    /// Only imports `sys`; never imports the package under inspection.
    pub fn search_path(&self) -> Result<Vec<PathBuf>> {
        // chr(10) avoids embedding a literal newline inside the one-liner.
        let output = Command::new(&self.path)
            .arg("-c")
            .arg("import sys; print(chr(10).join(sys.path))")
            .output()?;

        if !output.status.success() {
            return Err(GraphdevError::InterpreterQueryFailed {
                message: format!(
                    "{} sys.path query exited with {:?}",
                    self.path.display(),
                    output.status.code()
                ),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        // An empty sys.path entry means the invocation directory; keep it
        // as "." rather than dropping it.
        Ok(stdout
            .lines()
            .map(str::trim)
            .map(|line| {
                if line.is_empty() {
                    PathBuf::from(".")
                } else {
                    PathBuf::from(line)
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Create a fake binary at a path (creates parent dirs as needed).
    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    /// Create a fake interpreter script that reports the given version and
    /// prints `site_dir` as its module search path.
    #[cfg(unix)]
    fn create_fake_interpreter(path: &Path, version: &str, site_dir: &Path) {
        let script = format!(
            "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then\n  echo \"Python {}\"\nelse\n  echo \"{}\"\nfi\n",
            version,
            site_dir.display()
        );
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, script).unwrap();
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn resolve_tool_path_finds_first_match() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");

        create_fake_binary(&dir_a.join("python3"));
        create_fake_binary(&dir_b.join("python3"));

        let result = resolve_tool_path("python3", &[dir_a.clone(), dir_b]);
        assert_eq!(result, Some(dir_a.join("python3")));
    }

    #[test]
    fn resolve_tool_path_returns_none_when_not_found() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("empty");
        fs::create_dir_all(&dir).unwrap();

        assert!(resolve_tool_path("python3", &[dir]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_skips_non_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");

        fs::create_dir_all(&dir_a).unwrap();
        fs::write(dir_a.join("python3"), "not executable").unwrap();
        fs::set_permissions(dir_a.join("python3"), fs::Permissions::from_mode(0o644)).unwrap();
        create_fake_binary(&dir_b.join("python3"));

        let result = resolve_tool_path("python3", &[dir_a, dir_b.clone()]);
        assert_eq!(result, Some(dir_b.join("python3")));
    }

    #[test]
    fn python3_preferred_over_python() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("bin");

        create_fake_binary(&dir.join("python"));
        create_fake_binary(&dir.join("python3"));

        let entries = vec![dir.clone()];
        let resolved = INTERPRETER_NAMES
            .iter()
            .find_map(|name| resolve_tool_path(name, &entries));
        assert_eq!(resolved, Some(dir.join("python3")));
    }

    #[test]
    fn python_is_the_fallback_candidate() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("bin");

        create_fake_binary(&dir.join("python"));

        let entries = vec![dir.clone()];
        let resolved = INTERPRETER_NAMES
            .iter()
            .find_map(|name| resolve_tool_path(name, &entries));
        assert_eq!(resolved, Some(dir.join("python")));
    }

    #[test]
    fn resolve_explicit_path_must_exist() {
        let result = Interpreter::resolve(Some(Path::new("/nonexistent/python")));
        assert!(matches!(result, Err(GraphdevError::InterpreterNotFound)));
    }

    #[test]
    fn resolve_explicit_path_is_used_verbatim() {
        let temp = TempDir::new().unwrap();
        let python = temp.path().join("python3");
        create_fake_binary(&python);

        let interp = Interpreter::resolve(Some(&python)).unwrap();
        assert_eq!(interp.path(), python);
    }

    #[cfg(unix)]
    #[test]
    fn version_output_reads_fake_interpreter() {
        let temp = TempDir::new().unwrap();
        let python = temp.path().join("python3");
        create_fake_interpreter(&python, "3.11.4", temp.path());

        let interp = Interpreter::resolve(Some(&python)).unwrap();
        assert_eq!(interp.version_output().unwrap(), "Python 3.11.4");
    }

    #[cfg(unix)]
    #[test]
    fn search_path_reads_fake_interpreter() {
        let temp = TempDir::new().unwrap();
        let site = temp.path().join("site-packages");
        fs::create_dir_all(&site).unwrap();
        let python = temp.path().join("python3");
        create_fake_interpreter(&python, "3.11.4", &site);

        let interp = Interpreter::resolve(Some(&python)).unwrap();
        assert_eq!(interp.search_path().unwrap(), vec![site]);
    }

    #[cfg(unix)]
    #[test]
    fn empty_search_path_entry_maps_to_current_directory() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let python = temp.path().join("python3");
        let script = "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then\n  echo \"Python 3.11.4\"\nelse\n  echo \"\"\n  echo \"/some/site-packages\"\nfi\n";
        fs::write(&python, script).unwrap();
        fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();

        let interp = Interpreter::resolve(Some(&python)).unwrap();
        assert_eq!(
            interp.search_path().unwrap(),
            vec![PathBuf::from("."), PathBuf::from("/some/site-packages")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn failing_interpreter_is_a_query_error() {
        let temp = TempDir::new().unwrap();
        let python = temp.path().join("python3");
        fs::write(&python, "#!/bin/sh\nexit 3\n").unwrap();
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();

        let interp = Interpreter::resolve(Some(&python)).unwrap();
        let err = interp.version_output().unwrap_err();
        assert!(matches!(err, GraphdevError::InterpreterQueryFailed { .. }));
    }
}
