//! Tagmarks — a search-first bookmark client for a REST/JSON backend.
//!
//! Console front end: each subcommand drives one client operation against
//! the configured backend. Configuration is read from `tagmarks.json`
//! (override with `TAGMARKS_CONFIG`); a missing file means defaults.

use std::process::ExitCode;

use tagmarks::app::App;
use tagmarks::config::ClientConfig;
use tagmarks::tags::{tag_cloud, MAX_SIZE, MIN_SIZE};
use tagmarks::types::bookmark::Bookmark;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("tagmarks: {}", message);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> Result<(), String> {
    let Some(command) = args.first() else {
        return Err(usage());
    };

    let config_path =
        std::env::var("TAGMARKS_CONFIG").unwrap_or_else(|_| "tagmarks.json".to_string());
    let config = ClientConfig::load(&config_path).map_err(|e| e.to_string())?;
    let app = App::new(config).map_err(|e| e.to_string())?;

    match command.as_str() {
        "search" => {
            let query = args.get(1).ok_or("search: missing query")?;
            let state = app.session.search(query).await.map_err(|e| e.to_string())?;
            if state.error {
                return Err("backend reported a search error".to_string());
            }
            println!("{} hits (of {})", state.hits.len(), state.total_hits);
            for hit in &state.hits {
                println!("{}  {}  [{}]", hit.id, hit.url, hit.tags.join(", "));
            }
            Ok(())
        }
        "get" => {
            let id = args.get(1).ok_or("get: missing id")?;
            let bookmark = app.store.bookmark(id).await.map_err(|e| e.to_string())?;
            println!("{}", bookmark.title);
            println!("{}", bookmark.url);
            if !bookmark.description.is_empty() {
                println!("{}", bookmark.description);
            }
            println!("tags: {}", bookmark.tags.join(", "));
            Ok(())
        }
        "create" => {
            let url = args.get(1).ok_or("create: missing url")?;
            let title = args.get(2).ok_or("create: missing title")?;
            let draft = Bookmark {
                id: None,
                url: url.clone(),
                title: title.clone(),
                description: args.get(3).cloned().unwrap_or_default(),
                tags: args
                    .get(4)
                    .map(|t| t.split(',').map(|s| s.trim().to_string()).collect())
                    .unwrap_or_default(),
            };
            let id = app.store.create(&draft).await.map_err(|e| e.to_string())?;
            println!("{}", id);
            Ok(())
        }
        "delete" => {
            let id = args.get(1).ok_or("delete: missing id")?;
            app.store.delete(id).await.map_err(|e| e.to_string())?;
            Ok(())
        }
        "tags" => {
            let tags = app.store.all_tags().await.map_err(|e| e.to_string())?;
            for tag in tags {
                println!("{}", tag);
            }
            Ok(())
        }
        "tag-cloud" => {
            let counts = app.store.tag_counts().await.map_err(|e| e.to_string())?;
            for entry in tag_cloud(&counts, MIN_SIZE, MAX_SIZE) {
                println!("{:<24} {:>5}  size {:.1}", entry.value, entry.count, entry.size);
            }
            Ok(())
        }
        _ => Err(usage()),
    }
}

fn usage() -> String {
    [
        "usage: tagmarks <command> [args]",
        "  search <query>",
        "  get <id>",
        "  create <url> <title> [description] [tag,tag,...]",
        "  delete <id>",
        "  tags",
        "  tag-cloud",
    ]
    .join("\n")
}
