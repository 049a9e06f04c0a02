mod app;
mod consts;
mod game;
mod input;
mod options;
mod util;
use crate::app::App;
use crate::options::Options;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    let options = match Options::from_args() {
        Ok(Some(options)) => options,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("slither: {e}");
            return ExitCode::from(2);
        }
    };
    let terminal = ratatui::init();
    let r = App::new(options).run(terminal);
    ratatui::restore();
    exit_status(r)
}

fn exit_status(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
