#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    ArrowDown,
    ArrowUp,
    Enter,
    Tab,
    Escape,
    Backspace,
}

/// Maps a raw key name to an autocomplete command. Unrecognized keys map to
/// `None` and pass through to the rich-text engine's default binding.
pub fn bind_key(key: &str) -> Option<KeyCommand> {
    match key {
        "down" => Some(KeyCommand::ArrowDown),
        "up" => Some(KeyCommand::ArrowUp),
        "enter" => Some(KeyCommand::Enter),
        "tab" => Some(KeyCommand::Tab),
        "escape" => Some(KeyCommand::Escape),
        "backspace" => Some(KeyCommand::Backspace),
        _ => None,
    }
}
