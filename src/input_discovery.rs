use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use console::style;
use glob::Pattern;
use walkdir::WalkDir;

use crate::constants::input::SKIPPED_DIRECTORIES;
use crate::error::PolygonWheelError;
use crate::progress::ProgressReporter;

/// Expands command line paths into the edge-list files to analyze
pub struct InputDiscovery {
    pattern: Pattern,
    warnings: Vec<String>,
}

impl InputDiscovery {
    pub fn new(pattern: &str) -> Result<Self, PolygonWheelError> {
        let pattern = Pattern::new(pattern).map_err(|e| PolygonWheelError::ConfigurationError {
            message: format!("Invalid file pattern '{pattern}': {e}"),
        })?;

        Ok(Self {
            pattern,
            warnings: Vec::new(),
        })
    }

    /// Resolve every path to a sorted, deduplicated list of files
    ///
    /// Files are taken as given, directories are walked for files matching
    /// the pattern, and anything else is tried as a glob.
    pub fn discover_all(
        &mut self,
        paths: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Vec<PathBuf> {
        let mut files = BTreeSet::new();

        for path in paths {
            if path.is_file() {
                files.insert(path.clone());
            } else if path.is_dir() {
                self.discover_in_dir(path, &mut files, progress);
            } else if is_glob(path) {
                self.expand_glob(path, &mut files);
            } else {
                self.warnings
                    .push(format!("Path '{}' does not exist", path.display()));
            }
        }

        files.into_iter().collect()
    }

    fn discover_in_dir(
        &self,
        dir: &Path,
        files: &mut BTreeSet<PathBuf>,
        progress: Option<&ProgressReporter>,
    ) {
        let found = WalkDir::new(dir)
            .into_iter()
            .filter_entry(|e| {
                let name = e.file_name().to_string_lossy();
                // The walk root itself may be "." or a hidden directory
                e.depth() == 0
                    || !(name.starts_with('.') || SKIPPED_DIRECTORIES.contains(&name.as_ref()))
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.pattern.matches(&e.file_name().to_string_lossy()))
            .map(|e| e.into_path());

        for file in found {
            if let Some(p) = progress {
                p.checking_file(&file);
            }
            files.insert(file);
        }
    }

    fn expand_glob(&mut self, path: &Path, files: &mut BTreeSet<PathBuf>) {
        let glob_str = path.to_string_lossy();
        match glob::glob(&glob_str) {
            Ok(entries) => {
                for entry in entries.filter_map(Result::ok) {
                    if entry.is_file() {
                        files.insert(entry);
                    }
                }
            }
            Err(e) => {
                self.warnings
                    .push(format!("Invalid glob pattern '{glob_str}': {e}"));
            }
        }
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Print the collected warnings to stderr
    pub fn report_warnings(&self) {
        for warning in self.warnings() {
            eprintln!("{} {}", style("⚠").yellow(), warning);
        }
    }
}

fn is_glob(path: &Path) -> bool {
    path.to_string_lossy()
        .contains(|c| matches!(c, '*' | '?' | '['))
}
