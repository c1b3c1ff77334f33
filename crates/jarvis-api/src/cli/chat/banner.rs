//! Welcome banner printed when a chat session starts.

use console::style;

/// Print the welcome banner. `source` says where replies come from.
pub fn print_welcome_banner(source: &str) {
    println!();
    println!("  {} {}", style("◉").cyan(), style("Jarvis").cyan().bold());
    println!("  {}", style("Your emotional AI companion").dim());
    println!();
    println!("  {}  {}", style("Replies:").bold(), style(source).dim());
    println!();
    println!("  {}", style("Type /help for commands, Ctrl+D to exit").dim());
    println!("  {}", style("---").dim());
    println!();
}
