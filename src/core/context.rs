use std::{
    cell::OnceCell,
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{Catalog, file_scanner::scan_files, parsers::ts::parse_ts_file},
    issues::ParseErrorIssue,
};

/// All successfully parsed catalogs, indexed by file path.
pub type AllCatalogs = HashMap<String, Catalog>;

/// Shared state for commands that work on the catalogs of a project.
///
/// Configuration is resolved and files are discovered eagerly; catalogs are
/// parsed on first access to [`CheckContext::catalogs`], in parallel.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--source-language en`)
/// 2. `.tslingrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// All catalog files found by the scan.
    pub files: HashSet<String>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    /// Parsed catalogs. Initialized on first call to `catalogs()`.
    catalogs: OnceCell<AllCatalogs>,

    /// Files that failed to parse. Populated alongside `catalogs`.
    parse_errors: OnceCell<Vec<ParseErrorIssue>>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// Loads configuration and scans the source root for catalog files.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or the source root is not
    /// a valid path.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(Path::new(path))?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if let Some(ref source_language) = common_args.source_language {
            config.source_language = source_language.clone();
        }

        Ok(Self::from_config(config, root_dir, verbose))
    }

    /// Build a context from an already resolved configuration.
    pub fn from_config(config: Config, root_dir: PathBuf, verbose: bool) -> Self {
        let base_dir = root_dir.to_string_lossy().to_string();
        let scan_result = scan_files(&base_dir, &config.includes, &config.ignores, verbose);

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        if verbose {
            eprintln!(
                "Note: Found {} catalog file(s) under {}",
                scan_result.files.len(),
                root_dir.display()
            );
        }

        Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
            catalogs: OnceCell::new(),
            parse_errors: OnceCell::new(),
        }
    }

    /// Get parsed catalogs for all scanned files (lazy initialization).
    ///
    /// Files are read and parsed in parallel. Files that fail to parse are
    /// left out and reported through `parse_errors()`.
    pub fn catalogs(&self) -> &AllCatalogs {
        self.catalogs.get_or_init(|| {
            let parse_results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| (file_path.clone(), parse_ts_file(Path::new(file_path))))
                .collect();

            let mut parsed = HashMap::new();
            let mut errors = Vec::new();

            for (file_path, result) in parse_results {
                match result {
                    Ok(catalog) => {
                        parsed.insert(file_path, catalog);
                    }
                    Err(e) => {
                        // Innermost cause: the outer contexts repeat the file path
                        let error = e.root_cause().to_string();
                        if self.verbose {
                            eprintln!("Warning: {} - {}", file_path, error);
                        }
                        errors.push(ParseErrorIssue { file_path, error });
                    }
                }
            }

            let _ = self.parse_errors.set(errors);
            parsed
        })
    }

    /// Catalogs sorted by file path, for deterministic output.
    pub fn sorted_catalogs(&self) -> Vec<(&String, &Catalog)> {
        let mut catalogs: Vec<_> = self.catalogs().iter().collect();
        catalogs.sort_by(|a, b| a.0.cmp(b.0));
        catalogs
    }

    /// Get parse errors from catalog files.
    ///
    /// Forces catalog parsing if it has not happened yet.
    pub fn parse_errors(&self) -> &Vec<ParseErrorIssue> {
        self.catalogs();
        self.parse_errors.get_or_init(Vec::new)
    }
}
