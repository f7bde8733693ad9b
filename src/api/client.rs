use std::sync::atomic::{AtomicBool, Ordering};
use yansi::Paint;

use crate::error::AppError;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

const RESPONSE_PREVIEW_CHARS: usize = 240;

/// Issue a GET and return the response body as text.
/// Transport failures, timeouts and non-2xx statuses become `UpstreamUnavailable`.
pub async fn get_text(client: &reqwest::Client, url: &str) -> Result<String, AppError> {
    // --- Curl Logging ---
    let parts = [
        Paint::new("curl").fg(yansi::Color::Green).bold().to_string(),
        format!("-X {}", Paint::new("GET").fg(yansi::Color::Yellow).bold()),
        format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)),
        format!(
            "{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'Accept: application/json'").fg(yansi::Color::Magenta)
        ),
    ];
    log_output(format!("Request:\n{}", parts.join(" ")));
    // --------------------

    let resp = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(AppError::UpstreamUnavailable(format!(
            "GET {} returned {}",
            url, status
        )));
    }

    // Reading the body to the end releases the connection back to the pool.
    let body = resp.text().await?;

    let preview: String = body.chars().take(RESPONSE_PREVIEW_CHARS).collect();
    let response_str = Paint::new(format!("{} {}", status.as_u16(), preview))
        .rgb(100, 100, 100)
        .to_string();
    log_output(format!("Response:\n{}", response_str));

    Ok(body)
}
