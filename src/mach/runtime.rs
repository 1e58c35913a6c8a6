use super::{statement, syntax, Config, Context, Data, Flow, Listing, State};
use crate::error;
use crate::lang::{Command, Cursor, Error, Line, LineNumber};
use std::collections::VecDeque;
use std::sync::Arc;

/// What the terminal should do next.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Nothing is running; read a command.
    Stopped,
    /// A slice of the program ran; call `execute` again.
    Running,
    Print(String),
    Errors(Arc<Vec<Error>>),
    /// INPUT wants a line, entered with `Runtime::enter`.
    Input(String),
    List(String),
    /// Load this file and hand it back with `Runtime::set_listing`.
    Load(String),
    /// Save `get_listing()` to this file.
    Save(String),
    Exit,
}

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Stopped,
    Running,
    Input(String),
}

/// ## BASIC runtime
///
/// Owns the program source and the interpreter context. The terminal feeds
/// it lines with `enter` and drives it with `execute`.

#[derive(Debug)]
pub struct Runtime {
    listing: Listing,
    ctx: Context,
    status: Status,
    pending: Option<String>,
    events: VecDeque<Event>,
    run_after_load: bool,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::new(Config::default())
    }
}

impl Runtime {
    pub fn new(config: Config) -> Runtime {
        Runtime {
            listing: Listing::default(),
            ctx: Context::new(config),
            status: Status::Stopped,
            pending: None,
            events: VecDeque::new(),
            run_after_load: false,
        }
    }

    /// Takes a line typed at the terminal. Numbered lines edit the program,
    /// anything else runs on the next `execute`. Returns true when the line
    /// is worth keeping in the history.
    pub fn enter(&mut self, s: &str) -> bool {
        if let Status::Input(_) = self.status {
            self.ctx.input = Some(s.to_string());
            self.status = Status::Running;
            return true;
        }
        let line = match Line::new(s) {
            Ok(line) => line,
            Err(error) => {
                self.push_errors(vec![error]);
                return false;
            }
        };
        if line.is_direct() {
            if line.is_empty() {
                return false;
            }
            self.pending = Some(line.text().to_string());
            return true;
        }
        if let Err(error) = self.listing.insert(line) {
            self.push_errors(vec![error]);
        }
        true
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.events.pop_front() {
            return event;
        }
        if let Some(text) = self.pending.take() {
            self.command(&text);
            return self.events.pop_front().unwrap_or(Event::Running);
        }
        match self.status.clone() {
            Status::Stopped => Event::Stopped,
            Status::Input(prompt) if self.ctx.input.is_none() => Event::Input(prompt),
            _ => {
                self.status = Status::Running;
                let event = self.run_slice(cycles);
                self.events.push_back(event);
                self.events.pop_front().unwrap_or(Event::Running)
            }
        }
    }

    /// Ctrl-C: stops a running program with BREAK.
    pub fn interrupt(&mut self) {
        if self.status == Status::Stopped {
            return;
        }
        let error = match self.ctx.state.pc {
            Some(line) => error!(Break, line),
            None => error!(Break),
        };
        self.halt();
        self.push_errors(vec![error]);
    }

    pub fn get_listing(&self) -> Listing {
        self.listing.clone()
    }

    pub fn set_listing(&mut self, listing: Listing) {
        self.listing = listing;
        if self.run_after_load {
            self.run_after_load = false;
            self.run();
        }
    }

    fn push_errors(&mut self, errors: Vec<Error>) {
        if !errors.is_empty() {
            self.events.push_back(Event::Errors(Arc::new(errors)));
        }
    }

    /// Moves what the last statements printed and reported into the queue.
    fn flush(&mut self) {
        let output = self.ctx.take_output();
        if !output.is_empty() {
            self.events.push_back(Event::Print(output));
        }
        let reported = self.ctx.take_reported();
        self.push_errors(reported);
    }

    fn run(&mut self) {
        self.ctx.program = self.listing.program();
        self.ctx.var.clear();
        self.ctx.channels.close_all();
        self.ctx.state = State::new(self.ctx.config.stack_limit);
        self.ctx.state.data = Data::collect(&self.ctx.program);
        self.ctx.state.pc = self.ctx.program.first_line();
        self.ctx.input = None;
        self.status = Status::Running;
        tracing::info!(lines = self.ctx.program.len(), "run started");
    }

    fn halt(&mut self) {
        if self.ctx.state.pc.is_some() {
            tracing::info!(line = ?self.ctx.state.pc, "run finished");
        }
        self.ctx.state.pc = None;
        self.ctx.input = None;
        self.ctx.channels.close_all();
        self.status = Status::Stopped;
    }

    fn run_slice(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            let line = match self.ctx.state.pc {
                Some(line) => line,
                None => {
                    self.flush();
                    self.halt();
                    return Event::Stopped;
                }
            };
            let text = match self.ctx.program.get(line) {
                Some(text) => text,
                None => {
                    self.fail(error!(UndefinedLine, line));
                    return Event::Stopped;
                }
            };
            tracing::debug!(line, statement = %text, "dispatch");
            match statement::execute(&mut self.ctx, line, &text) {
                Ok(Flow::Next) => self.ctx.state.pc = self.ctx.program.next_line_after(line),
                Ok(Flow::Goto(target)) => self.ctx.state.pc = Some(target),
                Ok(Flow::After(target)) => {
                    self.ctx.state.pc = self.ctx.program.next_line_after(target)
                }
                Ok(Flow::End) => self.ctx.state.pc = None,
                Ok(Flow::Input(prompt)) => {
                    self.flush();
                    self.status = Status::Input(prompt.clone());
                    return Event::Input(prompt);
                }
                Err(error) => {
                    self.fail(error.in_line_number(line));
                    return Event::Stopped;
                }
            }
        }
        self.flush();
        Event::Running
    }

    fn fail(&mut self, error: Error) {
        tracing::debug!(%error, "run halted");
        self.flush();
        self.halt();
        self.push_errors(vec![error]);
    }

    /// Shell commands, or a single statement run without a line number.
    fn command(&mut self, text: &str) {
        let (command, args) = match Command::classify(text) {
            Some(command) => command,
            None => return self.direct_statement(text),
        };
        let result = match command {
            Command::Bye | Command::Exit => {
                self.events.push_back(Event::Exit);
                Ok(())
            }
            Command::List => self.list(args),
            Command::Load => file_name(args).map(|name| {
                self.events.push_back(Event::Load(name));
            }),
            Command::New => {
                self.listing.clear();
                self.ctx.var.clear();
                self.events
                    .push_back(Event::Print("MEMORY CLEARED.\n".to_string()));
                Ok(())
            }
            Command::Renumber => self.renumber(args),
            Command::Run if args.is_empty() => {
                self.run();
                Ok(())
            }
            Command::Run => file_name(args).map(|name| {
                self.run_after_load = true;
                self.events.push_back(Event::Load(name));
            }),
            Command::Save => file_name(args).map(|name| {
                self.events.push_back(Event::Save(name));
            }),
            Command::Syntax => {
                let errors = syntax::check(&self.listing.program());
                self.push_errors(errors);
                self.events
                    .push_back(Event::Print("SYNTAX CHECK COMPLETE.\n".to_string()));
                Ok(())
            }
        };
        if let Err(error) = result {
            self.push_errors(vec![error]);
        }
    }

    fn direct_statement(&mut self, text: &str) {
        self.ctx.program = self.listing.program();
        self.ctx.state = State::new(self.ctx.config.stack_limit);
        self.ctx.state.data = Data::collect(&self.ctx.program);
        let result = statement::execute(&mut self.ctx, 0, text);
        self.flush();
        match result {
            Ok(Flow::Goto(target)) => {
                self.ctx.state.pc = Some(target);
                self.status = Status::Running;
            }
            Ok(Flow::Input(_)) => {
                self.push_errors(vec![error!(IllegalFunctionCall; "INPUT NEEDS A LINE NUMBER")]);
            }
            Ok(_) => {}
            Err(error) => self.push_errors(vec![error]),
        }
    }

    /// `LIST`, `LIST from`, `LIST a-b` or `LIST a,b`
    fn list(&mut self, args: &str) -> Result<(), Error> {
        let mut cursor = Cursor::new(args);
        let start = cursor.line_number();
        let end = if cursor.eat('-') || cursor.eat(',') {
            cursor.line_number().unwrap_or(LineNumber::max_value())
        } else {
            LineNumber::max_value()
        };
        cursor.finish()?;
        let start = start.unwrap_or(0);
        if start > end {
            return Err(error!(IllegalFunctionCall; "LIST RANGE IS BACKWARDS"));
        }
        self.events.push_back(Event::List(self.listing.list(start..=end)));
        Ok(())
    }

    /// `RENUMBER [start[, step[, old]]]`
    fn renumber(&mut self, args: &str) -> Result<(), Error> {
        let mut values: [LineNumber; 3] = [10, 10, 0];
        if !args.trim().is_empty() {
            for (slot, arg) in values.iter_mut().zip(args.split(',')) {
                let mut cursor = Cursor::new(arg);
                if let Some(n) = cursor.line_number() {
                    *slot = n;
                }
                cursor.finish()?;
            }
        }
        let (listing, _) = self.listing.renum(values[0], values[1], values[2])?;
        self.listing = listing;
        Ok(())
    }
}

fn file_name(args: &str) -> Result<String, Error> {
    let name = args.trim().trim_matches('"');
    if name.is_empty() {
        return Err(error!(SyntaxError; "EXPECTED FILE NAME"));
    }
    Ok(name.to_string())
}
