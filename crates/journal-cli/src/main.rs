//! Journal CLI - a small, file-backed personal journal.
//!
//! This is the command-line interface for Journal. Every subcommand maps
//! onto exactly one store or query operation from `journal-core`; this
//! layer only parses arguments and renders results as text.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use uuid::Uuid;

use journal_core::query::{self, DEFAULT_FUZZY_CUTOFF, DEFAULT_FUZZY_MAX_RESULTS};
use journal_core::{EntryStore, JournalEntry, JournalError, VERSION};

const RULE_LEN: usize = 80;

/// Journal - a small, file-backed, CLI-first personal journal
#[derive(Parser)]
#[command(name = "journal")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to the journal file
    #[arg(
        short,
        long,
        global = true,
        env = "JOURNAL_PATH",
        default_value = "journal.json"
    )]
    journal: String,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new journal entry
    Add {
        /// Title of the entry (at most 50 characters)
        #[arg(value_name = "TITLE")]
        title: String,

        /// Body of the entry (at most 200 characters)
        #[arg(value_name = "CONTENT")]
        content: String,

        /// Add tags to the entry
        #[arg(short, long, value_name = "TAG")]
        tag: Vec<String>,
    },

    /// List entries, optionally filtered by tag
    List {
        /// Keep only entries carrying any of these tags
        #[arg(long, value_name = "TAG")]
        tag: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search entries by title (fuzzy by default) or by tag
    Search {
        /// Search query
        #[arg(value_name = "QUERY")]
        query: String,

        /// Match the query exactly against tags instead of titles
        #[arg(long, conflicts_with = "substring")]
        tags: bool,

        /// Plain substring match on titles instead of fuzzy matching
        #[arg(long)]
        substring: bool,

        /// Limit number of fuzzy results
        #[arg(long, default_value_t = DEFAULT_FUZZY_MAX_RESULTS)]
        limit: usize,

        /// Similarity threshold for fuzzy matching (0-1)
        #[arg(long, default_value_t = DEFAULT_FUZZY_CUTOFF)]
        cutoff: f64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show statistics about the journal
    Stats,

    /// Delete a journal entry by ID
    Delete {
        /// Entry ID (full UUID)
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Populate the journal with canned developer-journal entries
    Seed,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let store = EntryStore::new(&cli.journal);

    match cli.command {
        Some(Commands::Add {
            title,
            content,
            tag,
        }) => {
            let entry = store.add(&title, &content, &tag)?;
            if !cli.quiet {
                println!("Added entry {}", entry.id);
            }
        }
        Some(Commands::List { tag, json }) => {
            let entries = load_entries(&store)?;
            let filtered = query::filter_by_tags(&entries, &tag);
            if json {
                println!("{}", serde_json::to_string_pretty(&filtered)?);
            } else if filtered.is_empty() {
                if tag.is_empty() {
                    println!("No journal entries found.");
                } else {
                    println!("No journal entries found with tags: {}", tag.join(", "));
                }
            } else {
                if !cli.quiet && !tag.is_empty() {
                    println!(
                        "Found {} entries with tags: {}",
                        filtered.len(),
                        tag.join(", ")
                    );
                }
                print_entries(&filtered, cli.quiet);
            }
        }
        Some(Commands::Search {
            query,
            tags,
            substring,
            limit,
            cutoff,
            json,
        }) => {
            let entries = load_entries(&store)?;
            if tags {
                let found = query::search_by_tag(&entries, &query);
                render_found_entries(&found, &query, json, cli.quiet)?;
            } else if substring {
                let found = query::search_by_title(&entries, &query);
                render_found_entries(&found, &query, json, cli.quiet)?;
            } else {
                let titles: Vec<String> =
                    entries.iter().map(|entry| entry.title.clone()).collect();
                let found = query::fuzzy_search_titles(&titles, &query, limit, cutoff);
                if json {
                    println!("{}", serde_json::to_string_pretty(&found)?);
                } else if found.is_empty() {
                    println!("No journal entries found with title '{}'", query);
                } else {
                    println!(
                        "Found entries with title '{}': {}",
                        query,
                        found.join(", ")
                    );
                }
            }
        }
        Some(Commands::Stats) => {
            let entries = load_entries(&store)?;
            if entries.is_empty() {
                println!("No journal entries found.");
            } else {
                let stats = query::stats(&entries);
                println!("Total entries: {}", stats.count);
                println!("Total tags: {}", stats.distinct_tag_count);
                println!(
                    "Most common tag: {}",
                    stats.most_common_tag.as_deref().unwrap_or("(none)")
                );
                println!("Total words: {}", stats.total_words);
                println!("Average words per entry: {}", stats.avg_words_per_entry);
            }
        }
        Some(Commands::Delete { id }) => {
            let parsed =
                Uuid::parse_str(&id).map_err(|e| anyhow::anyhow!("Invalid entry ID: {}", e))?;
            store.delete(parsed)?;
            if !cli.quiet {
                println!("Deleted entry {}", parsed);
            }
        }
        Some(Commands::Seed) => {
            for (title, content, tags) in SEED_ENTRIES {
                let tags: Vec<String> = tags.iter().map(|tag| tag.to_string()).collect();
                match store.add(title, content, &tags) {
                    Ok(_) => {
                        if !cli.quiet {
                            println!("Journal entry '{}' saved.", title);
                        }
                    }
                    Err(err) => {
                        eprintln!("Failed to add journal entry '{}'. Reason: {}", title, err);
                    }
                }
            }
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "journal", &mut std::io::stdout());
        }
        None => {
            println!("Journal v{}", VERSION);
            println!("\nRun `journal --help` for usage information.");
        }
    }

    Ok(())
}

/// Load the collection, warning on stderr when the file is corrupt.
///
/// A malformed file degrades to an empty journal rather than aborting, but
/// the user is told about it instead of the corruption being swallowed.
fn load_entries(store: &EntryStore) -> anyhow::Result<Vec<JournalEntry>> {
    match store.try_load() {
        Ok(entries) => Ok(entries),
        Err(JournalError::Malformed(reason)) => {
            eprintln!(
                "Warning: journal file {} is not readable ({}); treating it as empty.",
                store.path().display(),
                reason
            );
            Ok(Vec::new())
        }
        Err(err) => Err(err.into()),
    }
}

fn render_found_entries(
    found: &[&JournalEntry],
    query: &str,
    json: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(found)?);
    } else if found.is_empty() {
        println!("No journal entries found for '{}'", query);
    } else {
        if !quiet {
            println!("Found {} entries for '{}'", found.len(), query);
        }
        print_entries(found, quiet);
    }
    Ok(())
}

fn print_entries(entries: &[&JournalEntry], quiet: bool) {
    for entry in entries {
        print_entry(entry);
    }
    if !quiet {
        println!("{}", "-".repeat(RULE_LEN));
        println!("Total entries: {}", entries.len());
    }
}

fn print_entry(entry: &JournalEntry) {
    let tags = if entry.tags.is_empty() {
        "No tags".to_string()
    } else {
        entry.tags.join(", ")
    };
    println!("{}", "-".repeat(RULE_LEN));
    println!(
        "{} -- {} [{}]",
        entry.title.to_uppercase(),
        entry.date.to_rfc3339(),
        entry.id
    );
    println!("Tags: {}", tags);
    println!("{}", "-".repeat(RULE_LEN));
    println!("{}", entry.content);
}

/// Canned developer-journal entries for `journal seed`.
const SEED_ENTRIES: [(&str, &str, &[&str]); 5] = [
    (
        "Setup VSCode Environment",
        "Installed Rust, rust-analyzer, clippy. Enabled format on save.",
        &["setup", "tools"],
    ),
    (
        "Explored Clap",
        "Built the derive-based CLI with subcommands and env defaults.",
        &["clap", "cli"],
    ),
    (
        "Wrote First Tests",
        "Tested edge cases, boundary lengths, round trips.",
        &["testing"],
    ),
    (
        "Switched To Workspace Layout",
        "Split core and CLI into separate crates. Much cleaner deps!",
        &["cargo", "layout"],
    ),
    (
        "Git Aliases Setup",
        "Added aliases like gst, gco, gcm to boost workflow.",
        &["git", "productivity"],
    ),
];
