mod cli;
mod prompt;
mod reference;
mod repl;
mod rlpl;
mod rppl;

use std::{
    path::PathBuf,
    rc::Rc,
    sync::{atomic::{AtomicBool, Ordering}, Arc}
};

use clap::Parser;
use cli::{print_finished, print_running, print_stopped};
use emoji_core::{
    eval::prelude::{run_file, ErrorClass, Interpreter, InterpreterOptions, DEFAULT_MAX_CALL_DEPTH},
    utils::prelude::{Error, StdConsoleIO}
};

#[derive(Parser)]
enum Command {
    /// Runs a program
    Run {
        /// Path of source file
        path: PathBuf,
        /// Allow declaring a name twice in the same scope
        #[arg(long, default_value_t = false)]
        no_strict: bool,
        /// Seed for the random number builtin
        #[arg(long)]
        seed: Option<u64>,
        /// Calls that may be active at once
        #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
        max_call_depth: usize,
        /// Do not print status lines
        #[arg(short, long, default_value_t = false)]
        quiet: bool,
    },
    /// Runs Read Lex Print Loop
    Lex,
    /// Runs Read Parse Print Loop
    Parse,
    /// Runs Read Eval Print Loop
    Repl {
        /// Allow declaring a name twice in the same scope
        #[arg(long, default_value_t = false)]
        no_strict: bool,
        /// Seed for the random number builtin
        #[arg(long)]
        seed: Option<u64>,
        /// Calls that may be active at once
        #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
        max_call_depth: usize,
    },
    /// Prints the glyph reference
    Reference,
}

fn main() {
    let result = match Command::parse() {
        Command::Run { path, no_strict, seed, max_call_depth, quiet } => {
            let options = InterpreterOptions { strict: !no_strict, seed, max_call_depth };
            let mut interpreter = Interpreter::new(options, Rc::new(StdConsoleIO))
                .with_interrupt(interrupt_on_ctrlc());

            if !quiet {
                print_running(&path.to_string_lossy());
            }
            let start = std::time::Instant::now();

            match run_file(path, &mut interpreter) {
                Ok(_) => {
                    if !quiet {
                        print_finished(start.elapsed());
                    }
                },
                Err(err) if err.is_end_of_input() => {
                    print_stopped("input ended");
                },
                Err(Error::Runtime { error, .. }) if error.class() == ErrorClass::Interrupted => {
                    print_stopped("interrupted");
                    std::process::exit(130);
                },
                Err(err) => {
                    report(&err);
                    std::process::exit(1);
                }
            }

            Ok(())
        },
        Command::Lex => rlpl::start(),
        Command::Parse => rppl::start(),
        Command::Repl { no_strict, seed, max_call_depth } => {
            let options = InterpreterOptions { strict: !no_strict, seed, max_call_depth };
            let interpreter = Interpreter::new(options, Rc::new(StdConsoleIO))
                .with_interrupt(interrupt_on_ctrlc());

            repl::start(interpreter)
        },
        Command::Reference => {
            reference::print();
            Ok(())
        },
    };

    if let Err(err) = result {
        report(&Error::from(err));
        std::process::exit(1);
    }
}

fn report(err: &Error) {
    let buf_writer = cli::stderr_buffer_writer();
    let mut buf = buf_writer.buffer();

    err.pretty(&mut buf);
    // nowhere left to report a failing stderr
    let _ = buf_writer.print(&buf);
}

/// A flag raised by Ctrl-C. The interpreter checks it between statements,
/// so a second Ctrl-C exits at once for a program blocked on input.
fn interrupt_on_ctrlc() -> Arc<AtomicBool> {
    let interrupt = Arc::new(AtomicBool::new(false));
    let handler_flag = interrupt.clone();

    let handler = move || {
        if handler_flag.swap(true, Ordering::SeqCst) {
            std::process::exit(130);
        }
    };

    // without a handler Ctrl-C falls back to killing the process
    let _ = ctrlc::set_handler(handler);

    interrupt
}
