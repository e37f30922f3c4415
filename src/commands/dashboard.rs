//! Dashboard command - rebuild thumbnails and render progress

use super::progress::SpinnerProgress;
use crate::{
    PaintrError,
    config::PaintrConfig,
    dashboard::{Dashboard, DashboardCache, DashboardSettings, render_json, render_text},
};
use dialoguer::{Confirm, theme::ColorfulTheme};

type Result<T> = std::result::Result<T, PaintrError>;

/// Execute the dashboard command
///
/// With `interactive`, the loaded data stays cached between renders and is
/// only reloaded when the user asks for a refresh.
///
/// # Errors
/// Returns an error if loading fails, JSON output fails or user interaction fails
pub fn execute(config: &PaintrConfig, json: bool, interactive: bool, quiet: bool) -> Result<()> {
    let settings = DashboardSettings::from(config);
    let bar_length = settings.bar_length;
    let dashboard = Dashboard::new(settings);
    let mut progress = SpinnerProgress::new(quiet || json);

    if !interactive {
        let data = dashboard.load(&mut progress)?;
        if json {
            println!("{}", render_json(&data, bar_length)?);
        } else {
            print!("{}", render_text(&data, bar_length));
        }
        return Ok(());
    }

    let mut cache = DashboardCache::new(dashboard);
    loop {
        let data = cache.get(&mut progress)?;
        print!("{}", render_text(data, bar_length));
        if !confirm_refresh()? {
            return Ok(());
        }
        cache.invalidate();
    }
}

fn confirm_refresh() -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Refresh data?")
        .default(false)
        .interact()
        .map_err(|e| PaintrError::InvalidInput(format!("Confirmation failed: {e}")))
}
