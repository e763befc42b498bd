use crate::context::CliContext;
use crate::output;
use backlog_domain::{CollectionName, Item, SearchQuery};
use chrono::{DateTime, Local, Utc};

pub async fn handle(ctx: &CliContext, keyword: &str) -> anyhow::Result<()> {
    let active = ctx.load(CollectionName::Active).await?;
    let query = SearchQuery::new(keyword);
    let matches: Vec<&Item> = active.search(&query).collect();
    tracing::debug!("Search '{}' matched {} items", keyword, matches.len());

    if ctx.json {
        return output::output_list(matches);
    }

    if matches.is_empty() {
        println!("No items found matching '{}'", keyword);
        return Ok(());
    }

    println!("\nFound {} item(s) matching '{}':\n", matches.len(), keyword);
    for item in matches {
        println!("{}", describe_item(item));
    }
    Ok(())
}

/// Multi-line listing of every populated field.
pub fn describe_item(item: &Item) -> String {
    let mut lines = vec![
        format!("ID: {}", item.id.short()),
        format!("Title: {}", item.title),
    ];
    if !item.description.is_empty() {
        lines.push(format!("Description: {}", item.description));
    }
    lines.push(format!("Status: {}", item.status));
    if !item.due_date.is_empty() {
        lines.push(format!("Due Date: {}", item.due_date));
    }
    if !item.tags.is_empty() {
        lines.push(format!("Tags: {}", item.tags_joined(", ")));
    }
    lines.push(format!("Created: {}", format_time(item.created_at)));
    lines.push(format!("Updated: {}", format_time(item.updated_at)));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn format_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%d-%m-%Y %H:%M").to_string()
}
