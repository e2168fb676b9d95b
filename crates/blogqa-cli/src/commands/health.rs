use anyhow::{Context, Result, bail};
use colored::Colorize;

use crate::app::AppContext;

pub async fn run(ctx: &AppContext) -> Result<()> {
    let health = ctx
        .api
        .health()
        .await
        .with_context(|| format!("Service at {} is unreachable", ctx.config.api_base()))?;

    if health.is_ok() {
        println!("{} {}", "✓".green(), ctx.config.api_base());
        Ok(())
    } else {
        bail!("Service reported status '{}'", health.status);
    }
}
