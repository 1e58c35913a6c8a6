use super::{Channels, Data, Frame, Program, Stack, Var, DENSE_THRESHOLD};
use crate::error;
use crate::lang::{Error, LineNumber};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Deepest nesting of loops, and separately of GOSUBs.
pub const STACK_LIMIT: usize = 15;

/// ## Interpreter settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub dense_threshold: usize,
    pub stack_limit: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            dense_threshold: DENSE_THRESHOLD,
            stack_limit: STACK_LIMIT,
        }
    }
}

/// What a statement asks the dispatcher to do next.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Continue with the following line.
    Next,
    /// Continue at this line.
    Goto(LineNumber),
    /// Continue with the line following this one.
    After(LineNumber),
    /// Stop normally.
    End,
    /// Wait for a line of keyboard input, then run this statement again.
    Input(String),
}

/// ## Execution state of one RUN
///
/// `pc` of `None` means the run is over.

#[derive(Debug)]
pub struct State {
    pub pc: Option<LineNumber>,
    pub gosub: Stack<LineNumber>,
    pub loops: Stack<Frame>,
    pub data: Data,
}

impl State {
    pub fn new(limit: usize) -> State {
        State {
            pc: None,
            gosub: Stack::new(limit, "TOO MANY NESTED GOSUBS")
                .with_underflow(|| error!(ReturnWithoutGosub)),
            loops: Stack::new(limit, "TOO MANY NESTED LOOPS"),
            data: Data::default(),
        }
    }
}

/// ## Interpreter context
///
/// Everything a statement handler may touch, passed explicitly to each one.

#[derive(Debug)]
pub struct Context {
    pub config: Config,
    pub program: Program,
    pub var: Var,
    pub state: State,
    pub channels: Channels,
    pub rng: StdRng,
    /// A line typed in answer to INPUT, not yet consumed.
    pub input: Option<String>,
    output: String,
    reported: Vec<Error>,
}

impl Default for Context {
    fn default() -> Context {
        Context::new(Config::default())
    }
}

impl Context {
    pub fn new(config: Config) -> Context {
        Context {
            config,
            program: Program::default(),
            var: Var::with_threshold(config.dense_threshold),
            state: State::new(config.stack_limit),
            channels: Channels::default(),
            rng: StdRng::from_entropy(),
            input: None,
            output: String::new(),
            reported: vec![],
        }
    }

    pub fn print(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Records an error that does not stop the run.
    pub fn report(&mut self, error: Error) {
        let error = match self.state.pc {
            Some(line) => error.in_line_number(line),
            None => error,
        };
        tracing::warn!(%error, "reported");
        self.reported.push(error);
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    pub fn take_reported(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.reported)
    }

    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}
