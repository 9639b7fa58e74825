//! Execution result types

/// Result of command execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Success status
    pub success: bool,

    /// What the command produced
    pub data: ResultData,
}

/// Data returned from command execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultData {
    /// Text to print
    Message(String),

    /// A child process finished; `None` when it was killed by a signal
    ExitStatus(Option<i32>),

    /// No data
    None,
}

impl ExecutionResult {
    /// A successful result carrying a message.
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            success: true,
            data: ResultData::Message(text.into()),
        }
    }

    /// A successful result with nothing to show.
    pub fn empty() -> Self {
        Self {
            success: true,
            data: ResultData::None,
        }
    }

    /// Result of a finished child process.
    pub fn exit_status(code: Option<i32>) -> Self {
        Self {
            success: code == Some(0),
            data: ResultData::ExitStatus(code),
        }
    }
}
