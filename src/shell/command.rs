//! Shell command parsing

/// Parse a shell command line; '#' starts a comment so sessions can be
/// scripted from files
pub fn parse_command(input: &str) -> Option<String> {
    let input = match input.split_once('#') {
        Some((before, _)) => before,
        None => input,
    };
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    Some(input.to_string())
}
