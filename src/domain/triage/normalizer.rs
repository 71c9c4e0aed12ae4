//! Text normalization shared by every extractor.
//!
//! Pasted support-desk threads arrive with Windows line endings, bullet glyphs,
//! non-breaking spaces, and tab-aligned columns. `normalize` folds all of that
//! into one canonical form: non-empty lines joined by `\n`, each line holding
//! single interior spaces and no leading list marker.

/// Glyphs that desk tools and word processors use as list bullets.
const BULLET_GLYPHS: &[char] = &[
    '\u{2022}', // •
    '\u{25E6}', // ◦
    '\u{25AA}', // ▪
    '\u{25AB}', // ▫
    '\u{2023}', // ‣
    '\u{25CF}', // ●
    '\u{25CB}', // ○
    '\u{25A0}', // ■
    '\u{25A1}', // □
    '\u{25BA}', // ►
    '\u{25B8}', // ▸
    '\u{2219}', // ∙
    '\u{00B7}', // ·
    '\u{2043}', // ⁃
    '\u{27A4}', // ➤
];

/// ASCII list markers removed from the start of a line.
const LIST_MARKERS: &[&str] = &["- ", "* "];

/// Returns the canonical form of a raw note.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)` for every input.
pub fn normalize(raw: &str) -> String {
    raw.split('\n')
        .map(collapse_line)
        .filter_map(|line| {
            let stripped = strip_list_markers(&line);
            (!stripped.is_empty()).then(|| stripped.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Characters folded into a single space. Carriage returns and tabs are both
/// whitespace and control characters, so they land here too.
fn is_horizontal_space(c: char) -> bool {
    c != '\n'
        && (c.is_whitespace()
            || c.is_control()
            || BULLET_GLYPHS.contains(&c)
            || c == '\u{200B}'
            || c == '\u{FEFF}')
}

/// Collapses runs of horizontal space to one space and trims both ends.
fn collapse_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut pending_space = false;

    for c in line.chars() {
        if is_horizontal_space(c) {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }

    out
}

fn strip_list_markers(mut line: &str) -> &str {
    while let Some(rest) = LIST_MARKERS
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
    {
        line = rest.trim_start();
    }
    line
}
