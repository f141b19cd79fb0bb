//! Taxlaw Catalog entry point
//!
//! On web the library's `LawCatalogView` is the entry point. Natively this is
//! a small CLI over a file-backed store, for inspecting and editing the same
//! snapshot format.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;

    use clap::{Parser, Subcommand};

    use taxlaw_catalog::platform::{FileStore, SystemClock};
    use taxlaw_catalog::{Catalog, CatalogStore, EntryId, KeywordDraft, Settings, default_catalog};

    #[derive(Parser)]
    #[command(name = "taxlaw-catalog", about = "Acquisition-tax statute catalog with keyword tags")]
    struct Cli {
        /// Directory holding stored snapshots
        #[arg(long, env = "TAXLAW_STORE_DIR", default_value = ".taxlaw")]
        store_dir: PathBuf,

        /// Storage key of the catalog snapshot
        #[arg(long)]
        key: Option<String>,

        /// Override the snapshot freshness window (days)
        #[arg(long)]
        ttl_days: Option<u64>,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Subcommand)]
    enum Command {
        /// List laws, optionally filtered by title/keyword
        List {
            #[arg(default_value = "")]
            query: String,
        },
        /// Replace a law's keywords (max 7; blanks and duplicates dropped)
        Keywords { id: u32, keywords: Vec<String> },
        /// Print a law's reference URL
        Open { id: u32 },
        /// Discard edits and return to the built-in catalog
        Reset,
    }

    fn print_catalog(catalog: &Catalog, query: &str) {
        for section in catalog.sections() {
            println!("{}", section.title);
            for law in &section.laws {
                println!("  [{:>3}] {}", law.id, law.title);
                if !law.keywords.is_empty() {
                    println!("        {}", law.keywords.join(", "));
                }
            }
        }
        if !query.trim().is_empty() {
            println!("\"{}\": {} results", query.trim(), catalog.entry_count());
        }
    }

    pub fn run() -> std::process::ExitCode {
        env_logger::init();
        let cli = Cli::parse();

        let mut settings = Settings::default();
        if let Some(key) = cli.key {
            settings = settings.with_storage_key(key);
        }
        if let Some(days) = cli.ttl_days {
            settings = settings.with_ttl_days(days);
        }

        let mut store = CatalogStore::initialize(
            FileStore::new(&cli.store_dir),
            SystemClock,
            &settings,
            default_catalog(),
        );

        match cli.command {
            Command::List { query } => print_catalog(&store.filter(&query), &query),
            Command::Keywords { id, keywords } => {
                let mut draft = KeywordDraft::default();
                for keyword in &keywords {
                    if !draft.add(keyword) {
                        log::warn!("Skipping keyword '{}'", keyword);
                    }
                }
                if let Err(e) = store.set_keywords(EntryId(id), draft.into_keywords()) {
                    eprintln!("error: {e}");
                    return std::process::ExitCode::FAILURE;
                }
            }
            Command::Open { id } => {
                if store.entry(EntryId(id)).is_none() {
                    eprintln!("error: no law entry with id {id}");
                    return std::process::ExitCode::FAILURE;
                }
                store.open_law(EntryId(id));
            }
            Command::Reset => store.reset(),
        }
        std::process::ExitCode::SUCCESS
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    cli::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is the library's start hook, this is just to satisfy the compiler
}
