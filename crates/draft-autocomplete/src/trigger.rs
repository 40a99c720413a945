use std::ops::Range;

/// True iff the edit from `prev_text` to `new_text` is a single character
/// insertion whose result places the trigger marker immediately before the
/// caret. All offsets are char offsets into the focus block's text.
pub fn should_open(trigger: &str, prev_text: &str, new_text: &str, caret: usize) -> bool {
    let trigger_len = trigger.chars().count();
    if trigger_len == 0 {
        return false;
    }
    if new_text.chars().count() != prev_text.chars().count() + 1 {
        return false;
    }
    if caret < trigger_len {
        return false;
    }
    chars_match(new_text, caret - trigger_len, trigger)
}

/// Char offset just after the marker's last occurrence at or before the
/// caret. `None` means no marker remains and the session must cancel.
pub fn match_start(trigger: &str, text: &str, caret: usize) -> Option<usize> {
    if trigger.is_empty() {
        return None;
    }
    let caret_byte = byte_offset(text, caret);
    let found_byte = text[..caret_byte].rfind(trigger)?;
    let marker_start = text[..found_byte].chars().count();
    Some(marker_start + trigger.chars().count())
}

/// The commit replacement range: marker start through the caret.
pub fn marker_range(trigger: &str, text: &str, caret: usize) -> Option<Range<usize>> {
    let match_start = match_start(trigger, text, caret)?;
    Some(match_start - trigger.chars().count()..caret)
}

fn chars_match(text: &str, start_char: usize, needle: &str) -> bool {
    text.chars()
        .skip(start_char)
        .take(needle.chars().count())
        .eq(needle.chars())
}

pub(crate) fn byte_offset(text: &str, char_ix: usize) -> usize {
    text.char_indices()
        .nth(char_ix)
        .map(|(byte_ix, _)| byte_ix)
        .unwrap_or(text.len())
}

pub(crate) fn char_slice(text: &str, range: Range<usize>) -> String {
    text.chars()
        .skip(range.start)
        .take(range.end.saturating_sub(range.start))
        .collect()
}
