use std::path::{Path, PathBuf};

use anyhow::anyhow;

use crate::launch_error::LaunchError;

/// Fixed description of what the launcher starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchSpec {
    pub binary_stem: &'static str,
    pub ui_flag: &'static str,
    pub title: &'static str,
}

impl LaunchSpec {
    pub const fn optics_ring_generator() -> Self {
        Self {
            binary_stem: "optics-ring-generator",
            ui_flag: "--ui",
            title: "Optics Ring Generator",
        }
    }

    pub fn binary_file_name(&self) -> String {
        format!("{}{}", self.binary_stem, std::env::consts::EXE_SUFFIX)
    }
}

impl Default for LaunchSpec {
    fn default() -> Self {
        Self::optics_ring_generator()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTarget {
    pub dir: PathBuf,
    pub binary: PathBuf,
}

impl LaunchTarget {
    pub fn exists(&self) -> bool {
        self.binary.exists()
    }
}

pub fn sibling_binary_path(spec: &LaunchSpec, exe_path: &Path) -> Option<LaunchTarget> {
    let dir = exe_path.parent()?.to_path_buf();
    let binary = dir.join(spec.binary_file_name());
    Some(LaunchTarget { dir, binary })
}

/// Resolves the sibling next to the running executable. The working
/// directory plays no part.
pub fn resolve_from_current_exe(spec: &LaunchSpec) -> anyhow::Result<LaunchTarget> {
    let exe = std::env::current_exe()
        .map_err(|source| anyhow!(LaunchError::ExeUnresolved { source }))?;
    sibling_binary_path(spec, &exe).ok_or_else(|| {
        anyhow!(LaunchError::ExeUnresolved {
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("executable path has no parent: {}", exe.display()),
            ),
        })
    })
}
