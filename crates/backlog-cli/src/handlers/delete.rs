use crate::context::CliContext;
use crate::output;
use backlog_domain::CollectionName;

pub async fn handle(ctx: &CliContext, id: &str) -> anyhow::Result<()> {
    let mut active = ctx.load(CollectionName::Active).await?;
    let removed = active.remove_by_prefix(id)?;
    ctx.save(CollectionName::Active, &active).await?;
    tracing::info!("Deleted item {}", removed.id);

    if ctx.json {
        output::output_success(serde_json::json!({
            "deleted": removed.id,
            "title": removed.title,
        }))
    } else {
        println!("✓ Deleted backlog item: {}", removed.title);
        Ok(())
    }
}
