//! Process adapters backed by `std::process`

use std::io::{self, Read};
use std::process::{Command, ExitStatus, Stdio};

use crate::application::ports::{ProcessError, ProcessQuerier, ProcessRunner};

/// Runs binaries attached to this process's terminal
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, bin: &str, args: &[String]) -> Result<(), ProcessError> {
        let result = Command::new(bin)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| spawn_error(bin, e))
            .and_then(|status| check_status(bin, status, Vec::new()))
            .map(|_| ());

        log_exec(bin, args, &result);
        result
    }
}

/// Runs binaries with stdout and stderr captured into one buffer
pub struct SystemQuerier;

impl SystemQuerier {
    pub fn new() -> Self {
        Self
    }

    fn combined_output(bin: &str, args: &[String]) -> Result<Vec<u8>, ProcessError> {
        let (mut reader, writer) = io::pipe().map_err(|e| spawn_error(bin, e))?;
        let stderr = writer.try_clone().map_err(|e| spawn_error(bin, e))?;

        // The command owns our write ends; it must be dropped before reading
        // or the pipe never reaches EOF.
        let mut child = {
            let mut command = Command::new(bin);
            command
                .args(args)
                .stdin(Stdio::null())
                .stdout(writer)
                .stderr(stderr);
            command.spawn().map_err(|e| spawn_error(bin, e))?
        };

        let mut output = Vec::new();
        let read = reader.read_to_end(&mut output);
        let status = child.wait().map_err(|e| spawn_error(bin, e))?;
        read.map_err(|e| spawn_error(bin, e))?;

        check_status(bin, status, output)
    }
}

impl Default for SystemQuerier {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessQuerier for SystemQuerier {
    fn query(&self, bin: &str, args: &[String]) -> Result<Vec<u8>, ProcessError> {
        let result = Self::combined_output(bin, args);
        log_exec(bin, args, &result);
        result
    }
}

fn spawn_error(bin: &str, e: io::Error) -> ProcessError {
    if e.kind() == io::ErrorKind::NotFound {
        ProcessError::NotFound {
            bin: bin.to_string(),
        }
    } else {
        ProcessError::Spawn {
            bin: bin.to_string(),
            message: e.to_string(),
        }
    }
}

fn check_status(bin: &str, status: ExitStatus, output: Vec<u8>) -> Result<Vec<u8>, ProcessError> {
    if status.success() {
        return Ok(output);
    }

    Err(ProcessError::Failed {
        bin: bin.to_string(),
        code: status.code(),
        output,
    })
}

fn log_exec<T>(bin: &str, args: &[String], result: &Result<T, ProcessError>) {
    match result {
        Ok(_) => tracing::debug!("exec: '{}', '{:?}', '<nil>'", bin, args),
        Err(e) => tracing::debug!("exec: '{}', '{:?}', '{}'", bin, args, e),
    }
}
