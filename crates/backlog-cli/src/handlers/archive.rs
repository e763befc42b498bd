use crate::context::CliContext;
use crate::output;
use backlog_domain::{archive_done, CollectionName};

/// Moves done items to the archive. Writes active first, then archive.
pub async fn handle(ctx: &CliContext) -> anyhow::Result<()> {
    let mut active = ctx.load(CollectionName::Active).await?;
    let mut archive = ctx.load(CollectionName::Archive).await?;

    let moved = archive_done(&mut active, &mut archive);
    if moved > 0 {
        ctx.save(CollectionName::Active, &active).await?;
        ctx.save(CollectionName::Archive, &archive).await?;
        tracing::info!("Archived {} items", moved);
    }

    if ctx.json {
        return output::output_success(serde_json::json!({ "archived": moved }));
    }
    if moved == 0 {
        println!("No completed items to archive");
    } else {
        println!("✓ Archived {} completed item(s)", moved);
    }
    Ok(())
}
