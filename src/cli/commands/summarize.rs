//! Summarize Command
//!
//! Usage:
//!   repolens summarize <URL> [--format text|json]

use super::SummaryFormat;
use crate::cli::ui::Output;
use crate::config::Config;
use crate::summarizer::RepoSummarizer;
use crate::types::{Result, SummaryResult};

pub async fn run(config: &Config, url: &str, format: SummaryFormat) -> Result<()> {
    let summarizer = RepoSummarizer::from_config(config)?;
    let result = summarizer.summarize(url).await?;

    match format {
        SummaryFormat::Json => println!("{}", render_json(&result)?),
        SummaryFormat::Text => Output::new().summary(url, &result),
    }
    Ok(())
}

pub fn render_json(result: &SummaryResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json() {
        let result = SummaryResult {
            summary: "A tool.".to_string(),
            technologies: vec!["Rust".to_string()],
            structure: "One crate.".to_string(),
        };
        let json: serde_json::Value = serde_json::from_str(&render_json(&result).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "summary": "A tool.",
                "technologies": ["Rust"],
                "structure": "One crate."
            })
        );
    }

    #[tokio::test]
    async fn test_run_requires_api_key() {
        let err = run(&Config::default(), "https://github.com/a/b", SummaryFormat::Json)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("API key"));
    }
}
