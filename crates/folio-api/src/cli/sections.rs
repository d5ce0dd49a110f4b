//! `folio sections`: render the content sections without a browser.

use anyhow::{Context, Result};
use console::style;

use folio_core::content::{ContentLoader, Document};
use folio_infra::config::FolioConfig;
use folio_infra::supabase::SupabaseClient;
use folio_types::content::ContentKind;

/// Load one section, or all four concurrently, and print the HTML.
///
/// Reads with the public credential when available, as the site does.
pub async fn show_sections(
    config: FolioConfig,
    container: Option<String>,
    json: bool,
) -> Result<()> {
    let access = config
        .public_backend
        .or(config.service_backend)
        .context("no backend configured: set SUPABASE_URL and SUPABASE_ANON_KEY")?;
    let loader =
        ContentLoader::new(SupabaseClient::new(access)?).with_blog_limit(config.site.blog_limit);

    let document = match container {
        Some(id) => {
            let kind = ContentKind::from_container_id(&id)
                .with_context(|| format!("unknown section '{id}'"))?;
            let mut document = Document::with_containers([kind.container_id()]);
            document.mount(loader.load(kind).await);
            document
        }
        None => {
            let mut document = Document::portfolio();
            loader.load_into(&mut document).await;
            document
        }
    };

    let sections = document.to_map();
    if json {
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }

    for (id, html) in &sections {
        println!();
        println!("  {} {}", style("#").dim(), style(id).cyan().bold());
        if html.is_empty() {
            println!("  {}", style("(empty)").dim());
        } else {
            println!("{html}");
        }
    }
    println!();

    Ok(())
}
