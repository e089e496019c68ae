/// Lower-case, drop everything outside `[a-z0-9]` and whitespace, and
/// collapse runs of whitespace to single spaces.
///
/// Total and idempotent; the output contains only `[a-z0-9 ]` with no
/// leading, trailing or repeated spaces.
pub fn normalize(text: &str) -> String {
    let mut kept = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            kept.push(c);
        } else if c.is_whitespace() {
            kept.push(' ');
        }
    }
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}
