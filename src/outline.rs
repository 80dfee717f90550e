/// File-or-folder classification of one outline line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
}

/// One parsed outline line: the leaf name plus its resolved path.
///
/// Paths are slash-separated and relative (no leading slash). Entries keep
/// the input line order; the parser never reorders or deduplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: String,
    pub kind: EntryKind,
    pub name: String,
}

/// Folder/file tallies over a parsed entry list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub folders: usize,
    pub files: usize,
}

// An open ancestor folder during the parsing pass. `indent` is the raw
// character count of the folder line's leading run, not a normalized depth;
// mixing tabs and spaces across lines therefore yields indents that are not
// comparable in a principled way. Accepted limitation.
struct StackFrame {
    indent: usize,
    name: String,
}

fn is_indent_char(c: char) -> bool {
    c.is_whitespace() || matches!(c, '│' | '├' | '└' | '─')
}

/// Parse an indentation-based outline into a flat, ordered entry list.
///
/// Total over any input: blank lines and comment-only lines are skipped,
/// anything else yields an entry. A name is a folder if it ends with `/` or
/// `\`, or if it contains no `.` anywhere, so extension-less files like
/// `LICENSE` classify as folders. That heuristic is part of the tool's
/// contract and must not be corrected here.
pub fn parse_outline(text: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut stack: Vec<StackFrame> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }

        // Raw length of the leading run: whitespace plus the box-drawing
        // glyphs tree renderers emit.
        let indent = line.chars().take_while(|&c| is_indent_char(c)).count();

        // Strip the run, then drop everything from the first '#'.
        let stripped = line.trim_start_matches(is_indent_char).trim();
        let mut name = stripped
            .split('#')
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();
        if name.is_empty() {
            continue;
        }

        // A frame stays an ancestor only while its recorded indent is
        // strictly smaller than the current line's.
        while stack.last().is_some_and(|frame| frame.indent >= indent) {
            stack.pop();
        }

        let kind = if name.ends_with('/') || name.ends_with('\\') || !name.contains('.') {
            if name.ends_with('/') || name.ends_with('\\') {
                name.pop();
            }
            EntryKind::Folder
        } else {
            EntryKind::File
        };

        let prefix = stack
            .iter()
            .map(|frame| frame.name.as_str())
            .collect::<Vec<_>>()
            .join("/");
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}/{name}")
        };

        entries.push(Entry {
            path,
            kind,
            name: name.clone(),
        });

        if kind == EntryKind::Folder {
            stack.push(StackFrame { indent, name });
        }
    }

    entries
}

/// Count folders and files in an entry list.
pub fn tally(entries: &[Entry]) -> TreeStats {
    let mut stats = TreeStats::default();
    for entry in entries {
        match entry.kind {
            EntryKind::Folder => stats.folders += 1,
            EntryKind::File => stats.files += 1,
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(path: &str, kind: EntryKind) -> Entry {
        let name = path.rsplit('/').next().unwrap_or(path).to_string();
        Entry {
            path: path.to_string(),
            kind,
            name,
        }
    }

    #[test]
    fn blank_input_yields_no_entries() {
        assert_eq!(parse_outline(""), Vec::new());
        assert_eq!(parse_outline("   \n\t\n\n  "), Vec::new());
    }

    #[test]
    fn nested_outline_resolves_paths_in_input_order() {
        let text = "src/\n  a.js\n  utils/\n    b.ts\n";
        let entries = parse_outline(text);
        assert_eq!(
            entries,
            vec![
                entry("src", EntryKind::Folder),
                entry("src/a.js", EntryKind::File),
                entry("src/utils", EntryKind::Folder),
                entry("src/utils/b.ts", EntryKind::File),
            ]
        );
        assert_eq!(
            tally(&entries),
            TreeStats {
                folders: 2,
                files: 2
            }
        );
    }

    #[test]
    fn parsing_is_a_pure_function_of_the_text() {
        let text = "a/\n  b.txt\nc.md\n";
        assert_eq!(parse_outline(text), parse_outline(text));
    }

    #[test]
    fn extension_less_name_classifies_as_folder() {
        // No dot, so the heuristic calls it a folder. That misclassification
        // is contractual; asserting File here would be the actual bug.
        let entries = parse_outline("LICENSE");
        assert_eq!(entries, vec![entry("LICENSE", EntryKind::Folder)]);
    }

    #[test]
    fn inline_comments_are_stripped_from_names() {
        let entries = parse_outline("  cache.tmp   # ignored\n");
        assert_eq!(entries, vec![entry("cache.tmp", EntryKind::File)]);
    }

    #[test]
    fn comment_only_lines_have_no_entry_and_no_stack_effect() {
        let text = "# scaffold\nsrc/\n  # generated below\n  main.rs\n";
        let entries = parse_outline(text);
        assert_eq!(
            entries,
            vec![
                entry("src", EntryKind::Folder),
                entry("src/main.rs", EntryKind::File),
            ]
        );
    }

    #[test]
    fn backslash_folder_marker_matches_forward_slash() {
        assert_eq!(parse_outline("assets\\"), parse_outline("assets/"));
    }

    #[test]
    fn box_drawing_glyphs_count_as_indentation() {
        let text = "src/\n├─ main.rs\n└─ lib.rs\n";
        let entries = parse_outline(text);
        assert_eq!(
            entries,
            vec![
                entry("src", EntryKind::Folder),
                entry("src/main.rs", EntryKind::File),
                entry("src/lib.rs", EntryKind::File),
            ]
        );
    }

    #[test]
    fn equal_indentation_closes_the_previous_folder() {
        let text = "a/\n  one.txt\nb/\n  two.txt\n";
        let entries = parse_outline(text);
        assert_eq!(
            entries,
            vec![
                entry("a", EntryKind::Folder),
                entry("a/one.txt", EntryKind::File),
                entry("b", EntryKind::Folder),
                entry("b/two.txt", EntryKind::File),
            ]
        );
    }

    #[test]
    fn dedent_pops_every_deeper_ancestor() {
        let text = "a/\n  b/\n    c/\n      deep.txt\n  shallow.txt\n";
        let entries = parse_outline(text);
        assert_eq!(
            entries,
            vec![
                entry("a", EntryKind::Folder),
                entry("a/b", EntryKind::Folder),
                entry("a/b/c", EntryKind::Folder),
                entry("a/b/c/deep.txt", EntryKind::File),
                entry("a/shallow.txt", EntryKind::File),
            ]
        );
    }

    #[test]
    fn over_indented_first_line_lands_at_the_root() {
        // Nothing is on the stack yet, so the indent is meaningless and the
        // entry resolves to a root-level path. Silent, per the contract.
        let entries = parse_outline("    floating.txt");
        assert_eq!(entries, vec![entry("floating.txt", EntryKind::File)]);
    }

    #[test]
    fn tab_indentation_nests_like_spaces() {
        let text = "src/\n\tmain.rs\n";
        let entries = parse_outline(text);
        assert_eq!(
            entries,
            vec![
                entry("src", EntryKind::Folder),
                entry("src/main.rs", EntryKind::File),
            ]
        );
    }
}
