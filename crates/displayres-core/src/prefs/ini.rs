//! Line-preserving edits of the `[Display]` section of FalloutPrefs.ini.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::display::Resolution;

static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[.*\]").expect("section regex is valid"));

const DISPLAY_HEADER: &str = "[Display]";
const WIDTH_KEY: &str = "iSize W=";
const HEIGHT_KEY: &str = "iSize H=";

/// A single edit made to the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefsChange {
    /// `line` is 1-based in the original file
    Replaced { line: usize, old: String, new: String },
    Inserted { new: String },
}

impl fmt::Display for PrefsChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefsChange::Replaced { line, old, new } => {
                write!(f, "change line {}: '{}' to '{}'", line, old, new)
            }
            PrefsChange::Inserted { new } => {
                write!(f, "insert '{}' after {} section", new, DISPLAY_HEADER)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    /// Rewritten file, line endings preserved
    pub lines: Vec<String>,
    pub changes: Vec<PrefsChange>,
    pub display_section_found: bool,
}

impl PatchOutcome {
    pub fn contents(&self) -> String {
        self.lines.concat()
    }
}

fn line_ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

/// Set `iSize W`/`iSize H` in the `[Display]` section to `size`.
///
/// Only the first occurrence of each key is rewritten; missing keys are
/// inserted directly after the `[Display]` header, H before W.
pub fn patch_display_section(contents: &str, size: Resolution) -> PatchOutcome {
    let width_line = format!("{}{}", WIDTH_KEY, size.width);
    let height_line = format!("{}{}", HEIGHT_KEY, size.height);

    let mut lines: Vec<String> = Vec::new();
    let mut changes = Vec::new();
    let mut in_display = false;
    let mut width_done = false;
    let mut height_done = false;

    for (index, line) in contents.split_inclusive('\n').enumerate() {
        let trimmed = line.trim();

        if trimmed.starts_with(DISPLAY_HEADER) {
            in_display = true;
            lines.push(line.to_string());
            continue;
        }
        if in_display && SECTION_HEADER.is_match(trimmed) {
            in_display = false;
            lines.push(line.to_string());
            continue;
        }

        if in_display {
            let replacement = if trimmed.starts_with(WIDTH_KEY) && !width_done {
                width_done = true;
                Some(&width_line)
            } else if trimmed.starts_with(HEIGHT_KEY) && !height_done {
                height_done = true;
                Some(&height_line)
            } else {
                None
            };

            if let Some(new) = replacement {
                lines.push(format!("{}{}", new, line_ending(line)));
                changes.push(PrefsChange::Replaced {
                    line: index + 1,
                    old: trimmed.to_string(),
                    new: new.clone(),
                });
                continue;
            }
        }

        lines.push(line.to_string());
    }

    let header_index = lines
        .iter()
        .position(|line| line.trim().starts_with(DISPLAY_HEADER));

    if let Some(header_index) = header_index
        && (!width_done || !height_done)
    {
        let ending = match line_ending(&lines[header_index]) {
            "" => {
                lines[header_index].push('\n');
                "\n"
            }
            ending => ending,
        };

        let mut insert_at = header_index + 1;
        if !height_done {
            lines.insert(insert_at, format!("{}{}", height_line, ending));
            changes.push(PrefsChange::Inserted {
                new: height_line.clone(),
            });
            insert_at += 1;
        }
        if !width_done {
            lines.insert(insert_at, format!("{}{}", width_line, ending));
            changes.push(PrefsChange::Inserted {
                new: width_line.clone(),
            });
        }
    }

    PatchOutcome {
        lines,
        changes,
        display_section_found: header_index.is_some(),
    }
}
