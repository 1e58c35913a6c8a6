#![allow(dead_code)]
use basic::mach::{Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

/// Drives the runtime until it waits for the terminal. Errors are shown
/// the way the terminal shows them, without the leading `?`.
pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut slices = 0;
    loop {
        let event = runtime.execute(cycles);
        match event {
            Event::Stopped | Event::Exit => break,
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("{}\n", error));
                }
            }
            Event::Running => {
                slices += 1;
                if slices > 100 {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles * 100));
                    break;
                }
            }
            Event::Print(ps) | Event::List(ps) => {
                s.push_str(&ps);
            }
            Event::Input(ps) => {
                s.push_str(&ps);
                break;
            }
            Event::Load(name) => {
                s.push_str(&format!("LOAD {}\n", name));
                break;
            }
            Event::Save(name) => {
                s.push_str(&format!("SAVE {}\n", name));
                break;
            }
        }
    }
    s
}

/// Enters each line, then `RUN`.
pub fn run(lines: &[&str]) -> String {
    let mut r = Runtime::default();
    for line in lines {
        r.enter(line);
    }
    r.enter("RUN");
    exec(&mut r)
}
