use console::style;

use crate::types::SummaryResult;

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").blue(), message);
    }

    pub fn header(&self, message: &str) {
        println!("\n{}", style(message).bold().underlined());
    }

    pub fn section(&self, message: &str) {
        println!("\n{}", style(message).bold());
        println!("{}", "─".repeat(40));
    }

    pub fn summary(&self, title: &str, result: &SummaryResult) {
        self.header(title);

        self.section("Summary");
        println!("{}", result.summary);

        self.section("Technologies");
        if result.technologies.is_empty() {
            println!("{}", style("(none detected)").dim());
        } else {
            for tech in &result.technologies {
                println!("  {} {}", style("•").cyan(), tech);
            }
        }

        self.section("Structure");
        println!("{}", result.structure);
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
