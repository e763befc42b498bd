use crate::cli::AddArgs;
use crate::context::CliContext;
use crate::output;
use backlog_domain::{CollectionName, Item, ItemDraft};

pub async fn handle(ctx: &CliContext, args: AddArgs) -> anyhow::Result<()> {
    let draft = ItemDraft::parse(
        &args.title,
        args.desc.as_deref().unwrap_or_default(),
        args.due.as_deref().unwrap_or_default(),
        args.tags.as_deref().unwrap_or_default(),
    )?;

    let mut active = ctx.load(CollectionName::Active).await?;
    let item = Item::new(draft);
    active.push(item.clone());
    ctx.save(CollectionName::Active, &active).await?;
    tracing::info!("Added item {}", item.id);

    if ctx.json {
        output::output_success(&item)
    } else {
        println!("✓ Added backlog item: {} (ID: {})", item.title, item.id);
        Ok(())
    }
}
