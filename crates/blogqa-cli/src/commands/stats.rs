use anyhow::{Result, bail};
use blogqa_application::{DashboardState, load_dashboard};

use crate::app::AppContext;
use crate::view;

async fn load(ctx: &AppContext) -> DashboardState {
    let selected = ctx.collection.id().await;
    load_dashboard(ctx.api.as_ref(), ctx.collection.catalog(), &selected).await
}

/// Dashboard page, or the error line when statistics are unavailable.
pub async fn render(ctx: &AppContext) -> String {
    match load(ctx).await {
        DashboardState::Loaded(dashboard) => view::dashboard(&dashboard),
        DashboardState::Failed => view::dashboard_failed(),
    }
}

pub async fn run(ctx: &AppContext) -> Result<()> {
    match load(ctx).await {
        DashboardState::Loaded(dashboard) => {
            println!("{}", view::dashboard(&dashboard));
            Ok(())
        }
        DashboardState::Failed => {
            eprintln!("{}", view::dashboard_failed());
            bail!("failed to load statistics");
        }
    }
}
