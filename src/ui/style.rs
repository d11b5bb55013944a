use console::style;
use std::fmt::Display;

/// Red bold: error banners
pub fn error<D: Display>(text: D) -> String {
    style(text).red().bold().to_string()
}

/// White bold: section headers, titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: timestamps, secondary text, in-progress labels
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Green: own messages
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Cyan: other participants
pub fn cyan<D: Display>(text: D) -> String {
    style(text).cyan().to_string()
}
