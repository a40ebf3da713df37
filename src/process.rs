//! External command execution.
//!
//! Every OS service this crate talks to is reached by running a system tool
//! (`netsh`, `powershell`). The [`CommandRunner`] trait is the seam that lets
//! tests substitute canned output for real processes.

use std::io;
use std::process::Command;

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Whether the process exited with a zero status.
    pub success: bool,
    /// Exit code, if the process was not terminated by a signal.
    pub code: Option<i32>,
    /// Standard output, decoded with [`decode_console`].
    pub stdout: String,
    /// Standard error, decoded with [`decode_console`].
    pub stderr: String,
}

impl CommandOutput {
    /// Creates a successful output with the given stdout.
    #[must_use]
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Creates a failed output with the given exit code and stdout.
    #[must_use]
    pub fn failed(code: i32, stdout: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Returns the most useful diagnostic text: stderr if present, else stdout.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim().to_string()
        } else {
            stderr.to_string()
        }
    }
}

/// Trait for running external programs to completion.
///
/// Implementations block until the program exits. No timeout is imposed.
pub trait CommandRunner {
    /// Runs `program` with `args` and captures its output.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the process could not be spawned.
    /// A non-zero exit status is NOT an error at this level.
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}

/// [`CommandRunner`] backed by [`std::process::Command`].
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    _private: (),
}

impl SystemRunner {
    /// Creates a new system runner.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        tracing::debug!(program, ?args, "Running command");

        let output = Command::new(program).args(args).output()?;

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: decode_console(&output.stdout),
            stderr: decode_console(&output.stderr),
        })
    }
}

/// Decodes captured console output.
///
/// UTF-8 is taken as is, minus a leading byte order mark. Anything else is
/// in the console's OEM code page, which is how `netsh` and an unconfigured
/// PowerShell write on localized Windows.
#[must_use]
pub fn decode_console(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.trim_start_matches('\u{feff}').to_string(),
        Err(_) => decode_oem(bytes),
    }
}

#[cfg(windows)]
fn decode_oem(bytes: &[u8]) -> String {
    use windows::Win32::Globalization::{CP_OEMCP, MULTI_BYTE_TO_WIDE_CHAR_FLAGS, MultiByteToWideChar};

    let flags = MULTI_BYTE_TO_WIDE_CHAR_FLAGS(0);
    // SAFETY: `bytes` is a valid slice; passing no output buffer only
    // measures the result.
    let needed = unsafe { MultiByteToWideChar(CP_OEMCP, flags, bytes, None) };
    let Ok(needed) = usize::try_from(needed) else {
        return String::from_utf8_lossy(bytes).into_owned();
    };
    if needed == 0 {
        return String::from_utf8_lossy(bytes).into_owned();
    }

    let mut wide = vec![0u16; needed];
    // SAFETY: `wide` holds exactly the length measured above.
    let written = unsafe { MultiByteToWideChar(CP_OEMCP, flags, bytes, Some(&mut wide)) };
    wide.truncate(usize::try_from(written).unwrap_or(0));
    String::from_utf16_lossy(&wide)
}

#[cfg(not(windows))]
fn decode_oem(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_prefers_stderr() {
        let output = CommandOutput {
            success: false,
            code: Some(1),
            stdout: "some stdout".to_string(),
            stderr: "  access denied \r\n".to_string(),
        };
        assert_eq!(output.diagnostic(), "access denied");
    }

    #[test]
    fn diagnostic_falls_back_to_stdout() {
        let output = CommandOutput::failed(1, "The hosted network couldn't be started.\r\n");
        assert_eq!(output.diagnostic(), "The hosted network couldn't be started.");
    }

    #[test]
    fn ok_output_is_successful() {
        let output = CommandOutput::ok("done");
        assert!(output.success);
        assert_eq!(output.code, Some(0));
    }

    #[test]
    fn utf8_output_keeps_non_ascii_names() {
        let bytes = "\u{feff}[{\"name\":\"Drahtlosnetzwerkverbindung für Büro\"}]".as_bytes();
        assert_eq!(
            decode_console(bytes),
            "[{\"name\":\"Drahtlosnetzwerkverbindung für Büro\"}]"
        );
    }

    #[test]
    fn code_page_output_keeps_ascii_text() {
        // "Unterstützte" in code page 850
        let decoded = decode_console(b"Unterst\x81tzte gehostete Netzwerke : Ja");
        assert!(decoded.starts_with("Unterst"));
        assert!(decoded.ends_with("tzte gehostete Netzwerke : Ja"));
    }

    #[test]
    fn system_runner_reports_spawn_failure() {
        let runner = SystemRunner::new();
        let result = runner.run("hotshare-definitely-not-a-real-program", &[]);
        assert!(result.is_err());
    }
}
