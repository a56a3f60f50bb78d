//! Application flow: answers, folder resolution, materialization and the
//! summary printed for the user.

use crate::catalog::Catalog;
use crate::cli::Args;
use crate::error::{Error, Result};
use crate::filesystem::Filesystem;
use crate::folders::{resolve_folders, DuplicateFolders};
use crate::formatter::Formatter;
use crate::materializer::{Materializer, Report};
use crate::parser::{get_answers, get_answers_from};
use crate::prompt::Prompter;
use log::info;

/// Runs one scaffolding session.
///
/// # Flow
/// 1. Loads preloaded answers and asks the remaining questions
/// 2. Resolves the folder set
/// 3. Materializes the project under `<output_dir>/<name>`
/// 4. Prints every entry and the next steps
///
/// # Errors
/// Any error aborts the run. A run whose report holds failed entries returns
/// `Error::IncompleteError` after printing the report.
pub fn run(args: Args, prompt: &dyn Prompter, fs: &dyn Filesystem) -> Result<Report> {
    let mut preloaded = get_answers_from(args.stdin, args.answers)?;
    if let Some(name) = args.name {
        preloaded.name = Some(name);
    }
    let config = get_answers(prompt, preloaded)?;

    let duplicates = if args.keep_duplicate_folders {
        DuplicateFolders::Keep
    } else {
        DuplicateFolders::Collapse
    };
    let folders = resolve_folders(&config, duplicates)?;

    let root = args.output_dir.join(&config.name);
    info!("Creating project '{}' in {}", config.name, root.display());

    let catalog = Catalog::new();
    let formatter = Formatter::default();
    let report = Materializer::new(&catalog, &formatter, fs).materialize(&config, &folders, &root)?;

    for entry in &report.entries {
        println!("{}: '{}'", entry.outcome, entry.path.display());
    }

    let failed = report.failed();
    if failed > 0 {
        return Err(Error::IncompleteError { failed, total: report.entries.len() });
    }

    if args.dry_run {
        println!("\nDry run: nothing was written.");
    } else {
        println!("\nProject \"{}\" is ready!", config.name);
        println!("\nNext steps:\ncd {}\nnpm install\nnpm run dev\n", root.display());
    }
    Ok(report)
}
