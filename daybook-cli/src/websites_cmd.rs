use anyhow::{bail, Result};
use clap::Subcommand;
use daybook_core::{categories, search, Website};

use crate::app::App;
use crate::display::website_line;
use crate::input::{optional, required, trimmed};

#[derive(Subcommand, Debug)]
pub enum WebsitesCommand {
    /// Bookmarks, optionally filtered by search and category
    List {
        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        category: Option<String>,
    },

    /// Bookmark a website
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        url: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long, default_value = "")]
        category: String,
    },

    /// Delete a bookmark by id
    Delete { id: String },

    /// Distinct categories in use
    Categories,
}

pub async fn run(app: &App, cmd: WebsitesCommand) -> Result<()> {
    match cmd {
        WebsitesCommand::List {
            search: query,
            category,
        } => {
            let all = app.websites.get_all().await;
            let shown: Vec<Website> = search(&all, query.as_deref().unwrap_or(""))
                .into_iter()
                .filter(|w| match category.as_deref() {
                    Some(c) if !c.is_empty() => w.category == c,
                    _ => true,
                })
                .collect();
            for w in &shown {
                println!("{}", website_line(w));
            }
        }

        WebsitesCommand::Add {
            name,
            url,
            description,
            category,
        } => {
            let site = new_website(&name, &url, description, &category)?;
            let created = app.websites.create(site).await;
            println!("Added {}", website_line(&created));
        }

        WebsitesCommand::Delete { id } => {
            app.websites.delete(&id).await;
            println!("Deleted {id}");
        }

        WebsitesCommand::Categories => {
            for c in categories(&app.websites.get_all().await) {
                println!("{c}");
            }
        }
    }

    Ok(())
}

fn new_website(
    name: &str,
    url: &str,
    description: Option<String>,
    category: &str,
) -> Result<Website> {
    let name = required("name", name)?;
    let url = required("url", url)?;
    if reqwest::Url::parse(&url).is_err() {
        bail!("not an absolute URL: {url}");
    }
    let mut site = Website::new("", name, url).with_category(trimmed(category));
    if let Some(d) = optional(description) {
        site = site.with_description(d);
    }
    Ok(site)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_absolute_url_required() {
        assert!(new_website(" ", "https://docs.rs", None, "").is_err());
        assert!(new_website("Docs", "docs.rs", None, "").is_err());
        assert!(new_website("Docs", "  ", None, "").is_err());
    }

    #[test]
    fn fields_are_trimmed() {
        let w = new_website(" Docs ", " https://docs.rs ", Some(" ".into()), " Dev ").unwrap();
        assert_eq!(w.name, "Docs");
        assert_eq!(w.url, "https://docs.rs");
        assert_eq!(w.description, None);
        assert_eq!(w.category, "Dev");
    }
}
