use is_terminal::IsTerminal;

/// Decide whether console output should use colors
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}
