use clap::ValueEnum;
use std::fmt;

use crate::outline::{Entry, EntryKind};

/// Target dialect for the generated script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Cmd,
    #[value(name = "powershell")]
    PowerShell,
    Bash,
}

impl Shell {
    /// Human-facing label for the preview UI.
    pub fn label(self) -> &'static str {
        match self {
            Shell::Cmd => "CMD (Batch)",
            Shell::PowerShell => "PowerShell",
            Shell::Bash => "Bash",
        }
    }

    /// One-line usage hint shown after generating a script.
    pub fn tip(self) -> &'static str {
        match self {
            Shell::Cmd => "Tip: Save as .bat or paste into Command Prompt.",
            Shell::PowerShell => "Tip: Save as .ps1 or paste into PowerShell.",
            Shell::Bash => "Tip: Save as .sh or paste into Terminal.",
        }
    }

    /// The next dialect in the preview's cycle order.
    pub fn next(self) -> Shell {
        match self {
            Shell::Cmd => Shell::PowerShell,
            Shell::PowerShell => Shell::Bash,
            Shell::Bash => Shell::Cmd,
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shell::Cmd => "cmd",
            Shell::PowerShell => "powershell",
            Shell::Bash => "bash",
        };
        write!(f, "{name}")
    }
}

/// Render the script for `shell` over an already-parsed entry list.
///
/// Each encoder emits one command per entry in list order and only rewrites
/// path separators; none of them deduplicate or reorder. Only the bash
/// encoder guarantees a file's parent directory exists before touching it.
pub fn generate_script(shell: Shell, entries: &[Entry]) -> String {
    match shell {
        Shell::Cmd => generate_cmd_commands(entries),
        Shell::PowerShell => generate_powershell_commands(entries),
        Shell::Bash => generate_bash_commands(entries),
    }
}

fn generate_cmd_commands(entries: &[Entry]) -> String {
    let mut commands = vec!["@echo off".to_string()];
    for entry in entries {
        let path = entry.path.replace('/', "\\");
        match entry.kind {
            EntryKind::Folder => {
                commands.push(format!("if not exist \"{path}\" mkdir \"{path}\""));
            }
            // Assumes the outline listed the parent folder first; cmd has no
            // mkdir-parents shorthand to fall back on.
            EntryKind::File => commands.push(format!("type nul > \"{path}\"")),
        }
    }
    commands.join("\n")
}

fn generate_powershell_commands(entries: &[Entry]) -> String {
    let mut commands = Vec::new();
    for entry in entries {
        let path = entry.path.replace('/', "\\");
        let item_type = match entry.kind {
            EntryKind::Folder => "Directory",
            EntryKind::File => "File",
        };
        // -Force creates missing parents, so ordering never matters here.
        commands.push(format!(
            "New-Item -Path \"{path}\" -ItemType {item_type} -Force"
        ));
    }
    commands.join("\n")
}

fn generate_bash_commands(entries: &[Entry]) -> String {
    let mut commands = vec!["#!/bin/bash".to_string()];
    for entry in entries {
        let path = entry.path.replace('\\', "/");
        match entry.kind {
            EntryKind::Folder => commands.push(format!("mkdir -p \"{path}\"")),
            EntryKind::File => {
                let parent = match path.rfind('/') {
                    Some(idx) => &path[..idx],
                    None => "",
                };
                if parent.is_empty() {
                    commands.push(format!("touch \"{path}\""));
                } else {
                    commands.push(format!("mkdir -p \"{parent}\" && touch \"{path}\""));
                }
            }
        }
    }
    commands.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::parse_outline;
    use pretty_assertions::assert_eq;

    #[test]
    fn cmd_script_starts_with_echo_off_and_uses_backslashes() {
        let entries = parse_outline("src/\n  app.js\n");
        assert_eq!(
            generate_script(Shell::Cmd, &entries),
            "@echo off\nif not exist \"src\" mkdir \"src\"\ntype nul > \"src\\app.js\""
        );
    }

    #[test]
    fn powershell_forces_creation_for_both_kinds() {
        let entries = parse_outline("src/\n  app.js\n");
        assert_eq!(
            generate_script(Shell::PowerShell, &entries),
            "New-Item -Path \"src\" -ItemType Directory -Force\n\
             New-Item -Path \"src\\app.js\" -ItemType File -Force"
        );
    }

    #[test]
    fn bash_creates_the_parent_before_touching_a_nested_file() {
        let entries = parse_outline("src/\n  app.js\n");
        assert_eq!(
            generate_script(Shell::Bash, &entries),
            "#!/bin/bash\nmkdir -p \"src\"\nmkdir -p \"src\" && touch \"src/app.js\""
        );
    }

    #[test]
    fn bash_touches_root_files_without_a_parent_mkdir() {
        let entries = parse_outline("README.md");
        assert_eq!(
            generate_script(Shell::Bash, &entries),
            "#!/bin/bash\ntouch \"README.md\""
        );
    }

    #[test]
    fn empty_entry_list_yields_header_only_scripts() {
        // A comment-only outline parses to nothing, but the encoders still
        // run and cmd/bash keep their headers.
        let entries = parse_outline("# just a comment");
        assert_eq!(generate_script(Shell::Cmd, &entries), "@echo off");
        assert_eq!(generate_script(Shell::Bash, &entries), "#!/bin/bash");
        assert_eq!(generate_script(Shell::PowerShell, &entries), "");
    }

    #[test]
    fn every_entry_emits_exactly_one_command() {
        let entries = parse_outline("a/\n  b/\n    c.txt\nd.md\nREADME\n");
        assert_eq!(entries.len(), 5);
        for shell in [Shell::Cmd, Shell::PowerShell, Shell::Bash] {
            let header_lines = match shell {
                Shell::PowerShell => 0,
                _ => 1,
            };
            let script = generate_script(shell, &entries);
            assert_eq!(script.lines().count(), entries.len() + header_lines);
        }
    }

    #[test]
    fn shell_cycle_visits_every_dialect_once() {
        assert_eq!(Shell::Cmd.next(), Shell::PowerShell);
        assert_eq!(Shell::PowerShell.next(), Shell::Bash);
        assert_eq!(Shell::Bash.next(), Shell::Cmd);
    }
}
