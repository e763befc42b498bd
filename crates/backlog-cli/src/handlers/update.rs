use crate::cli::UpdateArgs;
use crate::context::CliContext;
use crate::output;
use backlog_domain::{CollectionName, ItemUpdate};

pub async fn handle(ctx: &CliContext, args: UpdateArgs) -> anyhow::Result<()> {
    let update = ItemUpdate::from_flags(
        args.title.as_deref(),
        args.desc.as_deref(),
        args.due.as_deref(),
        args.tags.as_deref(),
        args.status.as_deref(),
    )?;

    let mut active = ctx.load(CollectionName::Active).await?;
    let item = active.update_by_prefix(&args.id, update)?;
    ctx.save(CollectionName::Active, &active).await?;
    tracing::info!("Updated item {}", item.id);

    if ctx.json {
        output::output_success(&item)
    } else {
        println!("✓ Updated backlog item: {}", item.title);
        Ok(())
    }
}
