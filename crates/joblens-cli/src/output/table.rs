#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| strip_ansi(cell).chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(6)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| {
            let text = truncate_text(header, *width);
            format_cell(&text, *width)
        })
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.len());

    let row_lines = rows
        .iter()
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let value = row.get(index).cloned().unwrap_or_else(|| "-".to_string());
                    let truncated = truncate_text(&value, *width);
                    format_cell(&truncated, *width)
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(2 + row_lines.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

/// Wrap every case-insensitive occurrence of `term` in bold-yellow ANSI.
///
/// Used to mark search matches in table cells; the layout code measures
/// cells with ANSI stripped, so highlighting never shifts columns.
///
/// Matching walks the haystack char by char and compares case-folded code
/// points. Byte offsets from a lowercased copy must not be reused on the
/// original: case folding can change byte lengths (`İ` is 2 bytes, its
/// lowercase `i̇` is 3), so such offsets drift off char boundaries.
#[must_use]
pub fn highlight_matches(value: &str, term: &str) -> String {
    if term.is_empty() {
        return value.to_string();
    }

    let term_folded: Vec<char> = term.chars().flat_map(char::to_lowercase).collect();
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while !rest.is_empty() {
        if let Some(len) = folded_prefix_len(rest, &term_folded) {
            out.push_str("\u{1b}[1;33m");
            out.push_str(&rest[..len]);
            out.push_str("\u{1b}[0m");
            rest = &rest[len..];
            continue;
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out
}

/// Byte length of the prefix of `value` whose case-folded chars equal
/// `term_folded`, if any. A char whose fold expands to several code points
/// must match them all; a match never ends mid-expansion.
fn folded_prefix_len(value: &str, term_folded: &[char]) -> Option<usize> {
    let mut wanted = term_folded.iter();
    let mut len = 0;

    for ch in value.chars() {
        for folded in ch.to_lowercase() {
            match wanted.next() {
                Some(&want) if want == folded => {}
                _ => return None,
            }
        }
        len += ch.len_utf8();
        if wanted.len() == 0 {
            return Some(len);
        }
    }
    None
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let mut candidate_idx = None;
        let mut candidate_width = 0usize;
        for (idx, width) in widths.iter().enumerate() {
            let min_width = headers[idx].len().max(6);
            if *width > min_width && *width > candidate_width {
                candidate_idx = Some(idx);
                candidate_width = *width;
            }
        }

        let Some(idx) = candidate_idx else {
            break;
        };

        widths[idx] = widths[idx].saturating_sub(1);
        total = widths.iter().sum::<usize>() + separators;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    // Truncation operates on the plain text; a cell that still carries ANSI
    // after truncation could leave the terminal in a colored state, so
    // highlighted cells that need truncating lose their highlight.
    let plain = strip_ansi(value);
    if plain.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out = String::new();
    for ch in plain.chars().take(width - 1) {
        out.push(ch);
    }
    out.push('…');
    out
}

fn format_cell(value: &str, width: usize) -> String {
    let plain_len = strip_ansi(value).chars().count();
    let pad = width.saturating_sub(plain_len);
    format!("{}{}", value, " ".repeat(pad))
}

fn strip_ansi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            let _ = chars.next();
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(ch);
    }
    out
}
