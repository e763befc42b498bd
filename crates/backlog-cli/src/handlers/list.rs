use crate::context::CliContext;
use crate::output;
use backlog_domain::{Collection, CollectionName, Item, ItemStatus, SearchQuery};

const COLUMN_WIDTH: usize = 35;

pub async fn handle(ctx: &CliContext, interactive: bool) -> anyhow::Result<()> {
    if interactive {
        backlog_tui::run_board(ctx.store(), &ctx.config).await?;
        return Ok(());
    }

    let active = ctx.load(CollectionName::Active).await?;
    if ctx.json {
        return output::output_list(active.items().to_vec());
    }
    print!("{}", render_table(&active));
    Ok(())
}

/// Three-column text board with one line per item and a totals line.
pub fn render_table(collection: &Collection) -> String {
    let buckets = collection.partition_by_status(&SearchQuery::default());
    let rule = "=".repeat(COLUMN_WIDTH * 3 + 4);
    let divider = vec!["-".repeat(COLUMN_WIDTH); 3].join(" | ");

    let mut out = String::new();
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    let headings: Vec<String> = ItemStatus::ALL
        .iter()
        .map(|status| pad(status.heading()))
        .collect();
    out.push_str(headings.join(" | ").trim_end());
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    let rows = buckets.iter().map(Vec::len).max().unwrap_or(0);
    for row in 0..rows {
        let cells: Vec<String> = buckets
            .iter()
            .map(|bucket| bucket.get(row).map(format_cell).unwrap_or_else(|| pad("")))
            .collect();
        out.push_str(&cells.join(" | "));
        out.push('\n');
        if row + 1 < rows {
            out.push_str(&divider);
            out.push('\n');
        }
    }

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "\nTotal: {} items ({} todo, {} in-progress, {} done)\n\n",
        collection.len(),
        buckets[0].len(),
        buckets[1].len(),
        buckets[2].len()
    ));
    out
}

fn format_cell(item: &Item) -> String {
    let text = format!("[{}] {}", item.id.short(), item.title);
    if text.chars().count() <= COLUMN_WIDTH {
        return pad(&text);
    }
    let kept: String = text.chars().take(COLUMN_WIDTH - 3).collect();
    format!("{}...", kept)
}

fn pad(text: &str) -> String {
    format!("{:<width$}", text, width = COLUMN_WIDTH)
}
