//! Process execution port interfaces

use thiserror::Error;

/// Process execution errors
#[derive(Debug, Clone, Error)]
pub enum ProcessError {
    #[error("{bin}: executable file not found")]
    NotFound { bin: String },

    #[error("{bin}: failed to start: {message}")]
    Spawn { bin: String, message: String },

    #[error("{bin}: {}", exit_description(.code))]
    Failed {
        bin: String,
        code: Option<i32>,
        /// Captured output, empty for interactive runs
        output: Vec<u8>,
    },
}

impl ProcessError {
    /// Output captured before the failure, if any
    pub fn output(&self) -> &[u8] {
        match self {
            ProcessError::Failed { output, .. } => output,
            _ => &[],
        }
    }

    /// Exit code of a process that ran but failed
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ProcessError::Failed { code, .. } => *code,
            _ => None,
        }
    }
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Port for interactive process execution.
///
/// The child shares this process's stdin, stdout and stderr.
pub trait ProcessRunner: Send + Sync {
    /// Run `bin` with `args` to completion.
    ///
    /// # Returns
    /// Ok(()) on a zero exit status, error otherwise
    fn run(&self, bin: &str, args: &[String]) -> Result<(), ProcessError>;
}

/// Port for captured process execution
pub trait ProcessQuerier: Send + Sync {
    /// Run `bin` with `args` and capture stdout and stderr together.
    ///
    /// # Returns
    /// The combined output, or an error that still carries it
    fn query(&self, bin: &str, args: &[String]) -> Result<Vec<u8>, ProcessError>;
}

/// Blanket implementation for boxed runner types
impl ProcessRunner for Box<dyn ProcessRunner> {
    fn run(&self, bin: &str, args: &[String]) -> Result<(), ProcessError> {
        self.as_ref().run(bin, args)
    }
}

/// Blanket implementation for boxed querier types
impl ProcessQuerier for Box<dyn ProcessQuerier> {
    fn query(&self, bin: &str, args: &[String]) -> Result<Vec<u8>, ProcessError> {
        self.as_ref().query(bin, args)
    }
}
