use std::path::Path;

use crate::launch_target::LaunchSpec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    MissingTarget { file_name: String },
    SpawnFailed,
}

impl Notice {
    pub fn message(&self, spec: &LaunchSpec) -> String {
        match self {
            Self::MissingTarget { file_name } => format!(
                "Error: {file_name} not found!\n\nPlease ensure the application is properly installed."
            ),
            Self::SpawnFailed => format!(
                "Failed to launch {}.\n\nPlease try running as administrator or check your installation.",
                spec.title
            ),
        }
    }

    pub fn missing(binary: &Path, spec: &LaunchSpec) -> Self {
        Self::MissingTarget {
            file_name: binary
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| spec.binary_file_name()),
        }
    }
}

/// Blocking, informational error display.
pub trait Notifier {
    fn show_error(&self, title: &str, message: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DialogNotifier;

#[cfg(windows)]
impl Notifier for DialogNotifier {
    fn show_error(&self, title: &str, message: &str) {
        use windows::core::{HSTRING, PCWSTR};
        use windows::Win32::Foundation::HWND;
        use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK};

        let text = HSTRING::from(message);
        let caption = HSTRING::from(title);
        // SAFETY: both strings are NUL-terminated and outlive the call; no owner window.
        unsafe {
            MessageBoxW(
                HWND::default(),
                PCWSTR(text.as_ptr()),
                PCWSTR(caption.as_ptr()),
                MB_OK | MB_ICONERROR,
            );
        }
    }
}

#[cfg(not(windows))]
impl Notifier for DialogNotifier {
    fn show_error(&self, title: &str, message: &str) {
        eprintln!("{title}: {}", message.replace("\n\n", " "));
    }
}
