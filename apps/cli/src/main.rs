//! Storefront CLI
//!
//! Usage:
//!   storefront search iphone --limit 5 --page 2
//!   storefront show MLA1446234567
//!   storefront cart add MLA1446234567

mod cart_store;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use storefront_client::{RetryPolicy, StorefrontClient};
use storefront_models::{query::DEFAULT_LIMIT, Paging, Product};

use cart_store::CartStore;

#[derive(Parser, Debug)]
#[command(name = "storefront", version)]
#[command(about = "Search the storefront catalog and manage a local cart")]
struct Cli {
    /// Base URL of the storefront API
    #[arg(
        long,
        env = "STOREFRONT_API_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    api_url: String,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value_t = 10_000, global = true)]
    timeout_ms: u64,

    /// Retries for transient failures
    #[arg(long, default_value_t = 2, global = true)]
    retries: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search products
    Search {
        query: String,
        #[arg(short, long)]
        limit: Option<usize>,
        #[arg(short, long, conflicts_with = "page")]
        offset: Option<usize>,
        /// 1-indexed page, converted to an offset using the limit
        #[arg(short, long)]
        page: Option<usize>,
    },
    /// Autocomplete suggestions for a partial query
    Suggest {
        query: String,
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show product detail
    Show { id: String },
    /// Check API health
    Health,
    /// Manage the local cart
    Cart {
        /// Cart file (defaults to the user data directory)
        #[arg(long)]
        cart_file: Option<PathBuf>,
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand, Debug)]
enum CartAction {
    /// Add one unit of a product
    Add { id: String },
    /// Remove a product
    Remove { id: String },
    /// Set the quantity of a product already in the cart
    Set { id: String, quantity: u32 },
    /// List cart contents
    List,
    /// Empty the cart
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = StorefrontClient::with_options(
        &cli.api_url,
        Duration::from_millis(cli.timeout_ms),
        RetryPolicy::new(cli.retries),
    )
    .context("Failed to create API client")?;

    match cli.command {
        Command::Search {
            query,
            limit,
            offset,
            page,
        } => {
            let offset = match page {
                Some(page) => Some(page_offset(page, limit)?),
                None => offset,
            };
            let response = client
                .search(&query, limit, offset)
                .await
                .with_context(|| format!("Search for \"{query}\" failed"))?;
            print!("{}", render::search_page(&response));
        }
        Command::Suggest { query, limit } => {
            let products = client
                .suggestions(&query, limit)
                .await
                .with_context(|| format!("Suggestions for \"{query}\" failed"))?;
            print!("{}", render::suggestions(&products));
        }
        Command::Show { id } => {
            let detail = client
                .product(&id)
                .await
                .with_context(|| format!("Failed to load product {id}"))?;
            print!("{}", render::product_detail(&detail));
        }
        Command::Health => {
            let health = client.health().await.context("Health check failed")?;
            println!("{} ({}) at {}", health.status, client.base_url(), health.timestamp);
        }
        Command::Cart { cart_file, action } => {
            let path = match cart_file {
                Some(path) => path,
                None => CartStore::default_path()?,
            };
            run_cart(&client, CartStore::new(path), action).await?;
        }
    }

    Ok(())
}

/// Offset of the first result on 1-indexed `page`.
fn page_offset(page: usize, limit: Option<usize>) -> Result<usize> {
    if page == 0 {
        anyhow::bail!("--page starts at 1");
    }
    Paging::new(0, 0, limit.unwrap_or(DEFAULT_LIMIT))
        .context("--limit must be at least 1")?
        .offset_for_page(page)
        .with_context(|| format!("--page {page} is out of range"))
}

async fn run_cart(client: &StorefrontClient, store: CartStore, action: CartAction) -> Result<()> {
    let mut cart = store.load()?;

    match action {
        CartAction::Add { id } => {
            let detail = client
                .product(&id)
                .await
                .with_context(|| format!("Failed to load product {id}"))?;
            let product = Product::from(detail);
            if !product.is_available() {
                anyhow::bail!("{} is out of stock", product.title);
            }
            cart.add(&product);
            println!("Added {}", product.title);
        }
        CartAction::Remove { id } => {
            if !cart.remove(&id) {
                anyhow::bail!("{id} is not in the cart");
            }
            println!("Removed {id}");
        }
        CartAction::Set { id, quantity } => {
            if quantity < 1 {
                println!("Quantity must be at least 1; use `cart remove` to drop {id}");
                return Ok(());
            }
            if !cart.update_quantity(&id, quantity) {
                anyhow::bail!("{id} is not in the cart");
            }
            println!("Set {id} to {quantity}");
        }
        CartAction::List => {
            print!("{}", render::cart(&cart));
            return Ok(());
        }
        CartAction::Clear => {
            cart.clear();
            println!("Cart cleared");
        }
    }

    store.save(&cart)?;
    tracing::debug!(path = %store.path().display(), items = cart.total_items(), "Cart saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_offset_uses_limit() {
        assert_eq!(page_offset(1, None).unwrap(), 0);
        assert_eq!(page_offset(3, None).unwrap(), 2 * DEFAULT_LIMIT);
        assert_eq!(page_offset(4, Some(5)).unwrap(), 15);
    }

    #[test]
    fn page_offset_rejects_bad_input() {
        assert!(page_offset(0, None).is_err());
        assert!(page_offset(2, Some(0)).is_err());

        let err = page_offset(usize::MAX, Some(10)).unwrap_err();
        assert!(err.to_string().contains("out of range"), "{err}");
    }
}
