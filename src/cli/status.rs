//! Status lines shown to the user
//!
//! Kept apart from `tracing` output: these are part of the interface, logs
//! are diagnostics.

pub fn info(message: &str) {
    println!("ℹ {}", message);
}

pub fn success(message: &str) {
    println!("✓ {}", message);
}

pub fn warning(message: &str) {
    eprintln!("⚠ {}", message);
}

/// Numbered, 1-based list of choices
pub fn choices(heading: &str, items: &[String]) {
    println!("{}", heading);
    for line in numbered(items) {
        println!("{}", line);
    }
}

fn numbered(items: &[String]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("  [{}] {}", i + 1, item))
        .collect()
}
