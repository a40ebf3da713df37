//! Administrator check.

/// Returns true if the current process runs with administrator rights.
///
/// Always false off Windows, where none of the managed services exist.
#[must_use]
pub fn is_elevated() -> bool {
    #[cfg(windows)]
    {
        // SAFETY: `IsUserAnAdmin` takes no arguments and only reads the
        // process token.
        unsafe { windows::Win32::UI::Shell::IsUserAnAdmin() }.as_bool()
    }

    #[cfg(not(windows))]
    {
        false
    }
}
