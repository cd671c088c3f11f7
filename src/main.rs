use clap::Parser;
use code_collector::fs::StdFileReader;
use code_collector::{logger, run_app, ui, Args, ClipboardDispatcher, Deps, InclusionPolicy};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logger::initialize_logger(args.verbose, args.no_color);
    ui::configure_color(args.no_color);

    let policy = InclusionPolicy::default();
    let dispatcher = ClipboardDispatcher::for_current_platform();
    let deps = Deps {
        policy: &policy,
        reader: &StdFileReader,
        clipboard: (!args.no_clipboard).then_some(&dispatcher),
    };

    match run_app(deps, &args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            ui::print_fatal(&e, args.no_color);
            ExitCode::FAILURE
        }
    }
}
