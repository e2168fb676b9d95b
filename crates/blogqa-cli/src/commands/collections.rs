use anyhow::Result;

use crate::app::AppContext;
use crate::view;

pub async fn run(ctx: &AppContext) -> Result<()> {
    let selected = ctx.collection.id().await;
    println!("{}", view::collections(ctx.collection.catalog(), &selected));
    Ok(())
}
