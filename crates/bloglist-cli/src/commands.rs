use std::net::SocketAddr;
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use bloglist_server::{BloglistServer, ServerConfig};
use bloglist_stats::{favorite_blog, total_likes};
use bloglist_store::BlogStore;
use bloglist_types::{parse_draft, Blog, BlogDraft};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args, cli.verbose).await,
        Command::Stats(args) => cmd_stats(args, cli.verbose, cli.format).await,
        Command::Seed(args) => cmd_seed(args, cli.verbose, cli.format).await,
    }
}

/// Layer defaults, the TOML file, the environment and CLI flags, in that order.
fn resolve_config(
    target: &TargetArgs,
    bind: Option<SocketAddr>,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ServerConfig> {
    let mut config = match &target.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ServerConfig::default(),
    };
    config
        .apply_env(lookup)
        .context("invalid environment override")?;
    if let Some(addr) = bind {
        config.bind_addr = addr;
    }
    if let Some(uri) = &target.store {
        config.store_uri = uri.clone();
    }
    Ok(config)
}

/// Logs go to stderr so `--format json` output stays parseable.
///
/// Returns `false` when a global subscriber was already installed.
fn init_tracing(log_level: &str, verbose: bool) -> bool {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };
    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            eprintln!("{} logging not initialized: {e}", "warning:".yellow().bold());
            false
        }
    }
}

async fn open_store(config: &ServerConfig) -> anyhow::Result<std::sync::Arc<dyn BlogStore>> {
    bloglist_store::connect(&config.store_uri)
        .await
        .with_context(|| format!("failed to open store {}", config.store_uri))
}

async fn cmd_serve(args: ServeArgs, verbose: bool) -> anyhow::Result<()> {
    let config = resolve_config(&args.target, args.bind, |key| std::env::var(key).ok())?;
    init_tracing(&config.log_level, verbose);
    let store = open_store(&config).await?;
    tracing::info!(
        bind = %config.bind_addr,
        store = %config.store_uri,
        max_body_bytes = config.max_body_bytes,
        "starting bloglist"
    );
    BloglistServer::new(config, store)
        .serve()
        .await
        .context("server terminated with an error")?;
    tracing::info!("bloglist stopped");
    Ok(())
}

async fn cmd_stats(args: StatsArgs, verbose: bool, format: OutputFormat) -> anyhow::Result<()> {
    let config = resolve_config(&args.target, None, |key| std::env::var(key).ok())?;
    init_tracing(&config.log_level, verbose);
    let store = open_store(&config).await?;
    let blogs = store.list_all().await.context("failed to load blogs")?;
    println!("{}", render_stats(&blogs, format));
    Ok(())
}

async fn cmd_seed(args: SeedArgs, verbose: bool, format: OutputFormat) -> anyhow::Result<()> {
    let config = resolve_config(&args.target, None, |key| std::env::var(key).ok())?;
    init_tracing(&config.log_level, verbose);
    let drafts = read_drafts(&args.file)?;
    let store = open_store(&config).await?;
    if store.backend() == "memory" {
        tracing::warn!("seeding an in-memory store; the blogs vanish when this process exits");
    }
    let inserted = seed_store(store.as_ref(), drafts).await?;
    match format {
        OutputFormat::Json => println!("{}", json!({ "inserted": inserted, "store": config.store_uri })),
        OutputFormat::Text => println!(
            "{} Seeded {} blogs into {}",
            "✓".green().bold(),
            inserted.to_string().bold(),
            config.store_uri.cyan()
        ),
    }
    Ok(())
}

fn read_drafts(path: &Path) -> anyhow::Result<Vec<BlogDraft>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    parse_drafts(&value)
}

/// Validate every entry before anything is inserted.
fn parse_drafts(value: &Value) -> anyhow::Result<Vec<BlogDraft>> {
    let Some(entries) = value.as_array() else {
        bail!("seed file must hold a JSON array of blogs");
    };
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| parse_draft(entry).with_context(|| format!("entry {i} is not a valid blog")))
        .collect()
}

async fn seed_store(store: &dyn BlogStore, drafts: Vec<BlogDraft>) -> anyhow::Result<usize> {
    let mut inserted = 0;
    for draft in drafts {
        let blog = store.insert(draft).await.context("failed to insert blog")?;
        tracing::debug!(id = %blog.id, title = %blog.title, "seeded blog");
        inserted += 1;
    }
    Ok(inserted)
}

fn render_stats(blogs: &[Blog], format: OutputFormat) -> String {
    let total = total_likes(blogs);
    let favorite = favorite_blog(blogs);
    match format {
        OutputFormat::Json => json!({
            "blogs": blogs.len(),
            "totalLikes": total,
            "favorite": favorite,
        })
        .to_string(),
        OutputFormat::Text => {
            let mut out = format!(
                "Blogs:       {}\nTotal likes: {}\n",
                blogs.len().to_string().bold(),
                total.to_string().bold()
            );
            match favorite {
                Some(blog) => {
                    out.push_str(&format!("Favorite:    {}", blog.title.yellow().bold()));
                    if let Some(author) = &blog.author {
                        out.push_str(&format!(" by {author}"));
                    }
                    out.push_str(&format!(" ({} likes)", blog.likes.to_string().green()));
                }
                None => out.push_str(&format!("Favorite:    {}", "none".dimmed())),
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloglist_store::InMemoryBlogStore;
    use bloglist_types::BlogId;
    use std::io::Write;

    fn blog(title: &str, author: Option<&str>, likes: u64) -> Blog {
        Blog {
            id: BlogId::generate(),
            title: title.into(),
            author: author.map(Into::into),
            url: format!("https://blogs.example/{likes}"),
            likes,
        }
    }

    #[test]
    fn stats_text() {
        let blogs = vec![
            blog("React patterns", Some("Michael Chan"), 7),
            blog("Canonical string reduction", Some("Edsger W. Dijkstra"), 12),
            blog("First class tests", Some("Robert C. Martin"), 10),
        ];
        let out = render_stats(&blogs, OutputFormat::Text);
        assert!(out.contains("29"));
        assert!(out.contains("Canonical string reduction"));
        assert!(out.contains("Edsger W. Dijkstra"));
    }

    #[test]
    fn stats_text_empty() {
        let out = render_stats(&[], OutputFormat::Text);
        assert!(out.contains("none"));
    }

    #[test]
    fn stats_json() {
        let blogs = vec![blog("Go To", None, 5), blog("Tied", None, 5)];
        let out = render_stats(&blogs, OutputFormat::Json);
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["blogs"], 2);
        assert_eq!(v["totalLikes"], 10);
        assert_eq!(v["favorite"]["title"], "Go To");
    }

    #[test]
    fn stats_json_empty_has_null_favorite() {
        let v: Value = serde_json::from_str(&render_stats(&[], OutputFormat::Json)).unwrap();
        assert_eq!(v["totalLikes"], 0);
        assert!(v["favorite"].is_null());
    }

    #[test]
    fn drafts_from_array() {
        let value = json!([
            { "title": "a", "url": "http://a", "likes": 3 },
            { "title": "b", "url": "http://b", "author": "someone" },
        ]);
        let drafts = parse_drafts(&value).unwrap();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].likes, 3);
        assert_eq!(drafts[1].likes, 0);
    }

    #[test]
    fn drafts_reject_invalid_entry() {
        let value = json!([
            { "title": "a", "url": "http://a" },
            { "author": "nobody" },
        ]);
        let err = parse_drafts(&value).unwrap_err();
        assert!(err.to_string().contains("entry 1"));
    }

    #[test]
    fn drafts_require_array() {
        assert!(parse_drafts(&json!({ "title": "a", "url": "b" })).is_err());
    }

    #[test]
    fn read_drafts_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title":"x","url":"http://x","likes":1}}]"#).unwrap();
        let drafts = read_drafts(file.path()).unwrap();
        assert_eq!(drafts.len(), 1);
    }

    #[tokio::test]
    async fn seed_inserts_every_draft() {
        let store = InMemoryBlogStore::new();
        let drafts = vec![
            BlogDraft::new("a", "http://a").with_likes(1),
            BlogDraft::new("b", "http://b").with_likes(2),
        ];
        assert_eq!(seed_store(&store, drafts).await.unwrap(), 2);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[test]
    fn config_defaults_without_overrides() {
        let config = resolve_config(&TargetArgs::default(), None, |_| None).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn config_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "bind_addr = \"0.0.0.0:4000\"\nstore_uri = \"file://from-toml.json\"\n").unwrap();
        let target = TargetArgs {
            config: Some(file.path().to_path_buf()),
            store: None,
        };

        let config = resolve_config(&target, None, |_| None).unwrap();
        assert_eq!(config.bind_addr.port(), 4000);
        assert_eq!(config.store_uri, "file://from-toml.json");

        let env = |key: &str| match key {
            "PORT" => Some("5000".to_string()),
            "BLOGLIST_STORE_URI" => Some("file://from-env.json".to_string()),
            _ => None,
        };
        let config = resolve_config(&target, None, env).unwrap();
        assert_eq!(config.bind_addr.port(), 5000);
        assert_eq!(config.store_uri, "file://from-env.json");

        let target = TargetArgs {
            store: Some("memory://".into()),
            ..target
        };
        let config = resolve_config(&target, Some("127.0.0.1:6000".parse().unwrap()), env).unwrap();
        assert_eq!(config.bind_addr.port(), 6000);
        assert_eq!(config.store_uri, "memory://");
    }

    #[test]
    fn tracing_installs_once() {
        assert!(init_tracing("info", false));
        assert!(!init_tracing("debug", true));
    }

    #[test]
    fn config_bad_port_fails() {
        let err = resolve_config(&TargetArgs::default(), None, |key| {
            (key == "PORT").then(|| "not-a-port".to_string())
        });
        assert!(err.is_err());
    }
}
