use anyhow::Result;

use crate::app::AppContext;
use crate::repl;

pub async fn run(ctx: &AppContext, collection: Option<&str>) -> Result<()> {
    ctx.select_collection(collection).await?;
    repl::run(ctx).await
}
