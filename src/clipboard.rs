use anyhow::Result;
use arboard::Clipboard;
#[cfg(target_os = "linux")]
use arboard::SetExtLinux;

/// Sentinel argv entry that switches the binary into clipboard-daemon mode.
pub const DAEMON_FLAG: &str = "__treescript_clipboard_daemon";

// Reads the script from stdin and holds the clipboard selection until
// another owner takes over. X11/Wayland selections die with the process that
// set them, so a short-lived CLI has to leave this daemon behind.
#[cfg(target_os = "linux")]
fn serve_clipboard() -> Result<()> {
    let text = std::io::read_to_string(std::io::stdin())?;

    let mut clipboard = Clipboard::new()?;
    clipboard.set().wait().text(text)?;
    Ok(())
}

/// Checks argv for [`DAEMON_FLAG`]. Returns Ok(true) after serving as the
/// clipboard daemon; Ok(false) means a normal run should proceed.
pub fn check_and_run_daemon_if_requested() -> Result<bool> {
    if !std::env::args().any(|arg| arg == DAEMON_FLAG) {
        return Ok(false);
    }
    #[cfg(target_os = "linux")]
    {
        serve_clipboard()?;
        Ok(true)
    }
    #[cfg(not(target_os = "linux"))]
    {
        eprintln!(
            "⚠️ Warning: {} is only meaningful on Linux. Ignoring.",
            DAEMON_FLAG
        );
        Ok(true)
    }
}

pub fn copy_text_to_clipboard(text: String) -> Result<()> {
    #[cfg(not(target_os = "linux"))]
    {
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
    }

    #[cfg(target_os = "linux")]
    {
        use std::io::Write;
        use std::process::{Command, Stdio};

        // Hand the text to a detached copy of ourselves; the daemon keeps
        // the selection alive after this process exits.
        let mut child = Command::new(std::env::current_exe()?)
            .arg(DAEMON_FLAG)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .current_dir("/")
            .spawn()?;

        match child.stdin.take() {
            Some(mut stdin) => {
                stdin.write_all(text.as_bytes())?;
                stdin.flush()?;
            }
            None => {
                return Err(anyhow::anyhow!("failed to open stdin of clipboard daemon"));
            }
        }
    }
    Ok(())
}
