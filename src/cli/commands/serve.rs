//! Serve Command
//!
//! Usage:
//!   repolens serve [--bind ADDR]

use crate::cli::ui::Output;
use crate::config::Config;
use crate::server;
use crate::summarizer::RepoSummarizer;
use crate::types::Result;

pub async fn run(config: &Config, bind: Option<&str>) -> Result<()> {
    // Missing API key fails here, before the socket is bound
    let summarizer = RepoSummarizer::from_config(config)?;
    let addr = bind.unwrap_or(&config.server.bind);

    let output = Output::new();
    output.info(&format!("Listening on http://{}", addr));
    output.info(&format!(
        "Try: curl -X POST http://{}/summarize -H 'Content-Type: application/json' -d '{{\"github_url\": \"https://github.com/psf/requests\"}}'",
        addr
    ));

    server::serve(summarizer, addr).await
}
