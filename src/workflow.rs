use crate::{cli, clipboard, outline, script, tui};
use anyhow::{Context, Result, bail};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Demonstration outline used by `--sample`.
pub const SAMPLE_OUTLINE: &str = "\
src/
  components/
    Header.js
    Footer.js
    ui/
      Button.jsx
      Card.jsx
  utils/
    api.ts
  App.js
public/
  index.html
  robots.txt
README.md
";

// "-" is the conventional spelling for stdin.
fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_outline(cli_args: &cli::Cli) -> Result<String> {
    if cli_args.sample {
        return Ok(SAMPLE_OUTLINE.to_string());
    }
    match cli_args.outline.as_deref() {
        Some(path) if !is_stdin(path) => fs::read_to_string(path)
            .with_context(|| format!("could not read outline file {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("could not read outline from stdin")?;
            Ok(buffer)
        }
    }
}

// Main orchestrator: outline text in, script (stdout/file/clipboard/TUI) out.
pub fn run_treescript(cli_args: cli::Cli) -> Result<()> {
    if cli_args.interactive {
        let has_file = matches!(cli_args.outline.as_deref(), Some(path) if !is_stdin(path));
        if !has_file && !cli_args.sample {
            bail!("--interactive needs an OUTLINE file or --sample; stdin is the terminal");
        }
        if cli_args.output.is_some() || cli_args.copy {
            eprintln!("⚠️ Warning: --output and --copy are ignored in interactive mode.");
        }
    }

    let text = read_outline(&cli_args)?;
    let entries = outline::parse_outline(&text);
    let stats = outline::tally(&entries);
    let outline_is_blank = text.trim().is_empty();

    if cli_args.interactive {
        return tui::run_preview(entries, cli_args.shell, outline_is_blank);
    }

    // The encoders never run for blank input; the script is simply empty.
    let generated = if outline_is_blank {
        String::new()
    } else {
        script::generate_script(cli_args.shell, &entries)
    };

    eprintln!("Detected: {} folders, {} files", stats.folders, stats.files);

    let mut delivered = false;
    if let Some(out_path) = &cli_args.output {
        let mut contents = generated.clone();
        if !contents.is_empty() {
            contents.push('\n');
        }
        fs::write(out_path, contents)
            .with_context(|| format!("could not write {}", out_path.display()))?;
        println!(
            "✅ Wrote {} script to {}.",
            cli_args.shell,
            out_path.display()
        );
        delivered = true;
    }
    if cli_args.copy {
        if generated.is_empty() {
            eprintln!("⚠️ Nothing to copy: the outline is empty.");
        } else {
            clipboard::copy_text_to_clipboard(generated.clone())?;
            println!(
                "✅ Copied {} script ({} folders, {} files) to the clipboard.",
                cli_args.shell, stats.folders, stats.files
            );
            eprintln!("{}", cli_args.shell.tip());
        }
        delivered = true;
    }
    if !delivered && !generated.is_empty() {
        println!("{generated}");
    }

    Ok(())
}
