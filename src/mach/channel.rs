use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Input,
    Output,
    Append,
}

enum Handle {
    Reader(BufReader<File>),
    Writer(BufWriter<File>),
}

/// ## File channels
///
/// Files opened with `OPEN ... AS #n`, keyed by channel number.

#[derive(Default)]
pub struct Channels {
    open: HashMap<u32, Handle>,
}

impl std::fmt::Debug for Channels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut numbers: Vec<_> = self.open.keys().collect();
        numbers.sort();
        write!(f, "Channels {:?}", numbers)
    }
}

fn io_error(error: std::io::Error, path: &str) -> Error {
    match error.kind() {
        ErrorKind::NotFound => error!(FileNotFound; path.to_string()),
        _ => error!(InternalError; format!("{}: {}", path, error)),
    }
}

impl Channels {
    pub fn open(&mut self, number: u32, path: &str, mode: Mode) -> Result<()> {
        if self.open.contains_key(&number) {
            return Err(error!(BadFileNumber; format!("#{} ALREADY OPEN", number)));
        }
        let handle = match mode {
            Mode::Input => Handle::Reader(BufReader::new(
                File::open(path).map_err(|e| io_error(e, path))?,
            )),
            Mode::Output => Handle::Writer(BufWriter::new(
                File::create(path).map_err(|e| io_error(e, path))?,
            )),
            Mode::Append => Handle::Writer(BufWriter::new(
                OpenOptions::new()
                    .append(true)
                    .create(true)
                    .open(path)
                    .map_err(|e| io_error(e, path))?,
            )),
        };
        tracing::debug!(number, path, ?mode, "channel opened");
        self.open.insert(number, handle);
        Ok(())
    }

    pub fn close(&mut self, number: u32) -> Result<()> {
        match self.open.remove(&number) {
            Some(Handle::Writer(mut writer)) => {
                tracing::debug!(number, "channel closed");
                writer
                    .flush()
                    .map_err(|e| error!(InternalError; e.to_string()))
            }
            Some(Handle::Reader(_)) => {
                tracing::debug!(number, "channel closed");
                Ok(())
            }
            None => Err(error!(BadFileNumber; format!("#{} IS NOT OPEN", number))),
        }
    }

    pub fn close_all(&mut self) {
        let numbers: Vec<u32> = self.open.keys().copied().collect();
        for number in numbers {
            if let Err(error) = self.close(number) {
                tracing::warn!(number, %error, "closing channel failed");
            }
        }
    }

    pub fn is_open(&self, number: u32) -> bool {
        self.open.contains_key(&number)
    }

    pub fn write(&mut self, number: u32, text: &str) -> Result<()> {
        match self.open.get_mut(&number) {
            Some(Handle::Writer(writer)) => writer
                .write_all(text.as_bytes())
                .map_err(|e| error!(InternalError; e.to_string())),
            Some(Handle::Reader(_)) => Err(error!(BadFileMode; format!("#{} IS OPEN FOR INPUT", number))),
            None => Err(error!(BadFileNumber; format!("#{} IS NOT OPEN", number))),
        }
    }

    /// Next line without its line ending.
    pub fn read_line(&mut self, number: u32) -> Result<String> {
        match self.open.get_mut(&number) {
            Some(Handle::Reader(reader)) => {
                let mut line = String::new();
                let read = reader
                    .read_line(&mut line)
                    .map_err(|e| error!(InternalError; e.to_string()))?;
                if read == 0 {
                    return Err(error!(InputPastEnd; format!("#{}", number)));
                }
                Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
            }
            Some(Handle::Writer(_)) => Err(error!(BadFileMode; format!("#{} IS OPEN FOR OUTPUT", number))),
            None => Err(error!(BadFileNumber; format!("#{} IS NOT OPEN", number))),
        }
    }
}

impl Drop for Channels {
    fn drop(&mut self) {
        self.close_all();
    }
}
