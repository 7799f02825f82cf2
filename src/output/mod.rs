use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Whether stderr is a terminal that should get colored output
pub fn should_use_colors() -> bool {
    std::io::stderr().is_terminal()
}

/// Render an error message for stderr
pub fn format_error(message: &str, use_colors: bool) -> String {
    let label = if use_colors {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    };
    format!("{} {}", label, message)
}
