use clap::{Parser, Subcommand};
use ortho_client::{DispatchReceipt, source_for};
use serde::Serialize;
use shared::{AppError, ErrorCode, ProductId};
use storefront::{CustomerDetails, ModalView, PageController, ProductCard, setup_environment};

#[derive(Parser)]
#[command(name = "storefront", version, about = "Ortho mattress catalog")]
struct Cli {
    /// Catalog URL or local path, overrides CATALOG_URL
    #[arg(long)]
    catalog: Option<String>,

    /// Print view models as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List category sections
    List {
        /// Reveal every section in full
        #[arg(long)]
        all: bool,
    },
    /// Show a product in the details (or test) view
    Show {
        id: ProductId,
        #[arg(long)]
        size: Option<usize>,
        #[arg(long)]
        test: bool,
    },
    /// Open whatever a location fragment points at
    Route { fragment: String },
    /// Send an order through WhatsApp
    Order {
        id: ProductId,
        #[arg(long, default_value_t = 0)]
        size: usize,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Request a consultation through Telegram
    Consult {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        comment: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    let mut config = setup_environment()?;
    let cli = Cli::parse();
    if let Some(catalog) = cli.catalog {
        config.catalog_url = catalog;
    }

    // 2. Catalog
    let source = source_for(&config.catalog_url, &config.client_config())?;
    let mut page = PageController::from_config(&config)?;
    if page.load_catalog(source.as_ref()).await.is_fallback() {
        tracing::info!("Serving the default catalog");
    }

    // 3. Command
    match cli.command {
        Command::List { all } => {
            let mut sections = page.sections();
            if all {
                for section in &mut sections {
                    section.cards.extend(page.reveal(section.category));
                    section.reveal_label = None;
                }
            }
            if cli.json {
                print_json(&sections)?;
            } else {
                for section in &sections {
                    println!("== {} ==", section.title);
                    section.cards.iter().for_each(print_card);
                    if let Some(label) = &section.reveal_label {
                        println!("   [{}]", label);
                    }
                    println!();
                }
            }
        }
        Command::Show { id, size, test } => {
            let opened = if test {
                page.open_test(id)
            } else {
                page.open_details(id)
            };
            if opened.is_none() {
                return Err(product_not_found(id));
            }
            if let Some(index) = size
                && page.choose_size(index).is_none()
            {
                return Err(size_not_found(id, index));
            }
            show_modal(&page, cli.json)?;
        }
        Command::Route { fragment } => {
            if page.navigate(&fragment).is_some() {
                show_modal(&page, cli.json)?;
            } else {
                println!("home");
            }
        }
        Command::Order {
            id,
            size,
            name,
            phone,
            comment,
        } => {
            if page.open_details(id).is_none() {
                return Err(product_not_found(id));
            }
            if page.choose_size(size).is_none() && page.selection().size_index().is_some() {
                return Err(size_not_found(id, size));
            }
            page.open_order();
            if let Some(summary) = page.board().order_summary() {
                println!("{} {}", summary.product_name, summary.size_name.as_deref().unwrap_or(""));
                println!("{}  🎁 {}", summary.price_label, summary.gift_line);
            }
            let customer = customer(name, phone, comment);
            let receipt = page.submit_order(&customer).await.map_err(report)?;
            print_receipt(&receipt);
        }
        Command::Consult {
            name,
            phone,
            comment,
        } => {
            let customer = customer(name, phone, comment);
            let receipt = page.request_consultation(&customer).await.map_err(report)?;
            print_receipt(&receipt);
        }
    }

    Ok(())
}

fn customer(name: String, phone: String, comment: Option<String>) -> CustomerDetails {
    CustomerDetails {
        name,
        phone,
        comment,
    }
}

fn product_not_found(id: ProductId) -> anyhow::Error {
    AppError::new(ErrorCode::ProductNotFound)
        .with_detail("product_id", id)
        .into()
}

fn size_not_found(id: ProductId, index: usize) -> anyhow::Error {
    AppError::new(ErrorCode::SizeNotFound)
        .with_detail("product_id", id)
        .with_detail("index", index)
        .into()
}

/// Show the customer-facing text before failing
fn report(err: AppError) -> anyhow::Error {
    if let Some(message) = err.user_message() {
        eprintln!("{}", message);
    }
    anyhow::Error::new(err)
}

fn show_modal(page: &PageController, json: bool) -> anyhow::Result<()> {
    let Some(view) = page.modal_view() else {
        return Ok(());
    };
    if json {
        return print_json(&view);
    }
    print_modal(&view);
    if let Some(url) = page.share_url() {
        println!("\n{}", url);
    }
    Ok(())
}

fn print_card(card: &ProductCard) {
    let old = card
        .old_price_label
        .as_deref()
        .map(|p| format!(" (было {})", p))
        .unwrap_or_default();
    let badge = card.discount_badge.as_deref().unwrap_or("");
    println!(
        "  [{}] {}  {}{} {}  {} {}",
        card.product_id,
        card.title,
        card.price_label,
        old,
        badge,
        card.stars.glyphs(),
        card.reviews_label
    );
}

fn print_modal(view: &ModalView) {
    println!("{}", view.title);
    println!("{} {}", view.stars.glyphs(), view.rating_label);
    match &view.old_price_label {
        Some(old) => println!("{} (было {})", view.price_label, old),
        None => println!("{}", view.price_label),
    }
    for option in &view.size_options {
        let marker = if option.selected { "*" } else { " " };
        println!(" {} {}", marker, option.label);
    }
    if !view.description.is_empty() {
        println!("\n{}", view.description);
    }
    for feature in &view.features {
        println!("  - {}", feature);
    }
    if let Some(video) = &view.video_url {
        println!("\nВидео: {}", video);
    }
}

fn print_receipt(receipt: &DispatchReceipt) {
    match receipt {
        DispatchReceipt::DeepLink(url) => println!("Откройте ссылку: {}", url),
        DispatchReceipt::Delivered { destinations } => {
            println!("Заявка отправлена ({} чатов)", destinations)
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
