//! Process exit statuses

use std::process::ExitCode;

/// How a sketch run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExitStatus {
    /// The user quit or the sketch called exit
    Success,
    /// The window could not be created
    WindowCreation,
    /// The renderer could not be created
    RendererCreation,
    /// The windowing system could not be initialized
    PlatformInit,
    /// `Sketch::setup` returned an error
    SetupFailed,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::WindowCreation => 1,
            ExitStatus::RendererCreation => 2,
            ExitStatus::PlatformInit => 3,
            ExitStatus::SetupFailed => 4,
        }
    }

    pub fn is_success(self) -> bool {
        self == ExitStatus::Success
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code() as u8)
    }
}
