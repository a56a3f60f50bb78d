//! Application entry point: parses arguments, sets up logging and picks the
//! filesystem the run writes to.

use create_backend_project::{
    app::run,
    cli::get_args,
    error::default_error_handler,
    filesystem::{DryRunFilesystem, LocalFilesystem},
    logger::init_logger,
    prompt::DialoguerPrompter,
};

fn main() {
    let args = get_args();
    init_logger(args.verbose);

    let prompt = DialoguerPrompter::new();
    let result = if args.dry_run {
        run(args, &prompt, &DryRunFilesystem::new())
    } else {
        run(args, &prompt, &LocalFilesystem::new())
    };

    if let Err(err) = result {
        default_error_handler(err);
    }
}
