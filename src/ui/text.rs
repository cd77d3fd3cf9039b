/// Word-wrap `text` to `width` columns and keep at most `max_lines` rows.
///
/// When text is cut, the last kept row ends with `…`. Words longer than a
/// row are split. Widths are counted in chars.
pub fn wrap_truncated(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        loop {
            let needed = if current_width == 0 {
                word.len()
            } else {
                word.len() + 1
            };
            if current_width + needed <= width {
                if current_width > 0 {
                    current.push(' ');
                }
                current.extend(word.iter());
                current_width += needed;
                break;
            }
            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
                continue;
            }
            // Word alone is wider than a row.
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
    }
    if current_width > 0 {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let mut chars: Vec<char> = last.chars().collect();
            chars.truncate(width.saturating_sub(1));
            while chars.last() == Some(&' ') {
                chars.pop();
            }
            chars.push('…');
            *last = chars.into_iter().collect();
        }
    }
    lines
}
