use std::env;
use std::process::ExitCode;

mod cli;
mod clipboard;
mod exits;
mod settings;
mod terminal;
mod tui;

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    log::debug!("started with {} argument(s)", args.len().saturating_sub(1));

    match cli::mode(&args, cli::is_terminal_session()) {
        cli::Mode::Menu => {
            tui::run();
            ExitCode::SUCCESS
        }
        cli::Mode::Client => cli::run(args),
        cli::Mode::NoTerminal => cli::no_terminal(),
    }
}
