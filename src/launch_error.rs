use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum LaunchError {
    ExeUnresolved { source: io::Error },
    MissingTarget { path: PathBuf },
    SpawnFailed { path: PathBuf, source: io::Error },
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExeUnresolved { source } => {
                write!(f, "could not resolve launcher location: {source}")
            }
            Self::MissingTarget { path } => {
                write!(f, "target binary not found: {}", path.display())
            }
            Self::SpawnFailed { path, source } => {
                write!(f, "failed to spawn {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LaunchError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchExit {
    Ok = 0,
    Failed = 1,
}

impl LaunchExit {
    pub fn code(self) -> i32 {
        self as i32
    }
}
