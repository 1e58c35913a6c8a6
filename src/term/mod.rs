use ansi_term::Style;
use basic::error;
use basic::lang::{Error, LineNumber};
use basic::mach::{Event, Listing, Runtime};
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Signal, Terminal};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub fn main() {
    let filter = EnvFilter::try_from_env("BASIC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        tracing::warn!(%error, "no Ctrl-C handler");
    }
    if let Err(error) = main_loop(interrupted, std::env::args().nth(1)) {
        eprintln!("{}", error);
    }
}

fn main_loop(interrupted: Arc<AtomicBool>, file: Option<String>) -> std::io::Result<()> {
    let mut runtime = Runtime::default();
    let command = Interface::new("BASIC")?;
    command.set_prompt("READY. ")?;
    let input = Interface::new("INPUT")?;
    input.set_report_signal(Signal::Interrupt, true);
    if let Some(file) = file {
        match load(&file) {
            Ok(listing) => {
                writeln!(command, "Loaded {} lines from {}", listing.len(), file)?;
                runtime.set_listing(listing);
            }
            Err(error) => print_error(&command, &error)?,
        }
    }

    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(5000) {
            Event::Stopped => {
                let saved_completer = command.completer();
                command.set_completer(Arc::new(LineCompleter::new(runtime.get_listing())));
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                command.set_completer(saved_completer);
                if runtime.enter(&string) {
                    command.add_history_unique(string);
                }
            }
            Event::Input(prompt) => {
                input.set_prompt(&prompt)?;
                match input.read_line()? {
                    ReadResult::Input(string) => {
                        if runtime.enter(&string) {
                            input.add_history_unique(string);
                        }
                    }
                    ReadResult::Signal(Signal::Interrupt) => {
                        input.set_buffer("")?;
                        input.lock_reader().cancel_read_line()?;
                        runtime.interrupt();
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    print_error(&command, error)?;
                }
            }
            Event::Running => {}
            Event::Print(s) => {
                write!(command, "{}", s)?;
            }
            Event::List(s) => {
                write!(command, "{}", s)?;
            }
            Event::Load(s) => match load(&s) {
                Ok(listing) => {
                    writeln!(command, "Loaded {} lines from {}", listing.len(), s)?;
                    runtime.set_listing(listing);
                }
                Err(error) => print_error(&command, &error)?,
            },
            Event::Save(s) => match save(runtime.get_listing(), &s) {
                Ok(count) => writeln!(command, "Saved {} lines to {}", count, s)?,
                Err(error) => print_error(&command, &error)?,
            },
            Event::Exit => break,
        }
    }
    Ok(())
}

fn print_error<T: Terminal>(interface: &Interface<T>, error: &Error) -> std::io::Result<()> {
    writeln!(
        interface,
        "{}",
        Style::new().bold().paint(format!("?{}", error))
    )
}

struct LineCompleter {
    listing: Listing,
}

impl LineCompleter {
    fn new(listing: Listing) -> LineCompleter {
        LineCompleter { listing }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let number = prompter.buffer().trim().parse::<LineNumber>().ok()?;
        let s = self.listing.line(number)?;
        let mut comp = Completion::simple(s);
        comp.suffix = linefeed::complete::Suffix::None;
        Some(vec![comp])
    }
}

fn load(filename: &str) -> Result<Listing, Error> {
    let mut listing = Listing::default();
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; filename.to_string())),
                _ => return Err(error!(InternalError; msg)),
            }
        }
    };
    for (index, line) in reader.lines().enumerate() {
        match line {
            Err(error) => return Err(error!(InternalError; error.to_string())),
            Ok(line) => {
                if let Err(error) = listing.load_str(&line) {
                    return Err(error.message(format!(
                        "IN LINE {} OF {} (NOT A BASIC LINE NUMBER)",
                        index + 1,
                        filename
                    )));
                }
            }
        }
    }
    tracing::debug!(filename, lines = listing.len(), "loaded");
    Ok(listing)
}

fn save(listing: Listing, filename: &str) -> Result<usize, Error> {
    if listing.is_empty() {
        return Err(error!(InternalError; "NOTHING TO SAVE"));
    }
    let mut file = match File::create(filename) {
        Ok(file) => file,
        Err(error) => return Err(error!(InternalError; error.to_string())),
    };
    for line in listing.lines() {
        if let Err(error) = writeln!(file, "{}", line) {
            return Err(error!(InternalError; error.to_string()));
        }
    }
    tracing::debug!(filename, lines = listing.len(), "saved");
    Ok(listing.len())
}
