use std::path::PathBuf;
use clap::{Parser, Subcommand};
use kvs_database::{
    dashboard::{DashboardStats, ACTIVE_USERS, RECENT_ACTIVITY},
    manager::{self, Notice, NoticeVariant, Selection, ViewMode},
    storage::{FileStore, SlotBackend},
    upload::{self, UploadForm},
    AppError, FileRecord, FileSize, FileUpdate, Result, StorageError, ValidationError,
};

#[derive(Parser)]
#[command(name = "kvs")]
#[command(
    about = "KVS Database: a demo file database kept in a local key-value slot",
    long_about = None
)]
pub struct Cli {
    /// Directory holding the key-value slots
    #[arg(long, global = true)]
    pub storage_dir: Option<PathBuf>,

    /// Slot key the file collection is stored under
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show storage statistics
    Dashboard,

    /// List files
    List {
        #[arg(short, long)]
        search: Option<String>,

        #[arg(long, default_value = "grid")]
        view: ViewMode,
    },

    /// Show one file's metadata
    Show {
        id: String,
    },

    /// Register a file stored behind an external link
    Upload {
        /// Pre-fill name, size and type from a local file (contents are not read)
        #[arg(long)]
        from_file: Option<PathBuf>,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        size: Option<String>,

        #[arg(short = 't', long = "type")]
        file_type: Option<String>,

        #[arg(short, long)]
        link: Option<String>,
    },

    /// Simulate downloading a file from its external link
    Download {
        id: String,
    },

    /// Delete a file record
    Delete {
        id: String,
    },

    /// Change fields of a file record
    Update {
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        size: Option<String>,

        #[arg(short = 't', long = "type")]
        file_type: Option<String>,

        #[arg(short, long)]
        link: Option<String>,
    },
}

pub async fn execute_command<B: SlotBackend>(
    store: &mut FileStore<B>,
    command: Commands,
) -> Result<()> {
    match command {
        Commands::Dashboard => print_dashboard(store.load()),
        Commands::List { search, view } => {
            let files: Vec<&FileRecord> = match &search {
                Some(query) => manager::search(store.load(), query),
                None => store.load().iter().collect(),
            };
            print_files(&files, view);
        }
        Commands::Show { id } => {
            let file = find(store, &id)?;
            let pretty = serde_json::to_string_pretty(file)
                .map_err(|e| StorageError::Storage(e.to_string()))?;
            println!("{}", pretty);
        }
        Commands::Upload { from_file, name, size, file_type, link } => {
            let mut form = match from_file {
                Some(path) => {
                    let len = tokio::fs::metadata(&path).await?.len();
                    let file_name = path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .ok_or_else(|| {
                            AppError::Other(format!("invalid file name: {}", path.display()))
                        })?;
                    UploadForm::from_dropped(file_name, len)
                }
                None => UploadForm::default(),
            };
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(size) = size {
                form.size = size;
            }
            if let Some(file_type) = file_type {
                form.file_type = file_type;
            }
            if let Some(link) = link {
                form.external_link = link;
            }

            match upload::upload(store, &mut form).await {
                Ok((record, notice)) => {
                    print_notice(&notice);
                    println!("{}", record.id);
                }
                Err(AppError::Validation(err)) => {
                    print_notice(&upload::rejection_notice(&err));
                    return Err(err.into());
                }
                Err(e) => return Err(e),
            }
        }
        Commands::Download { id } => {
            let file = find(store, &id)?;
            print_notice(&manager::download(file));
            println!("{}", file.external_link);
        }
        Commands::Delete { id } => {
            find(store, &id)?;
            let notice = manager::delete(store, &mut Selection::default(), &id).await?;
            print_notice(&notice);
        }
        Commands::Update { id, name, size, file_type, link } => {
            find(store, &id)?;
            let size = size.map(|s| FileSize::normalize(&s)).transpose()?;
            let update = FileUpdate {
                name,
                file_type,
                size,
                last_modified: None,
                external_link: link,
            };
            if update.is_empty() {
                let err = ValidationError::InvalidUpdate("no fields given".to_string());
                return Err(err.into());
            }
            store.update(&id, update).await?;
            print_notice(&Notice::info("File Updated", format!("{} has been updated", id)));
        }
    }

    Ok(())
}

fn find<'a, B: SlotBackend>(store: &'a FileStore<B>, id: &str) -> Result<&'a FileRecord> {
    store
        .get(id)
        .ok_or_else(|| StorageError::NotFound(id.to_string()).into())
}

pub fn print_notice(notice: &Notice) {
    match notice.variant {
        NoticeVariant::Default => eprintln!("{}", notice),
        NoticeVariant::Destructive => eprintln!("! {}", notice),
    }
}

fn print_dashboard(files: &[FileRecord]) {
    let stats = DashboardStats::compute(files);

    println!("Dashboard");
    println!("  Total Files   {}", stats.total_files);
    println!("  Storage Used  {}", stats.total_size_label());
    println!("  File Types    {}", stats.distinct_types());
    println!("  Active Users  {}", ACTIVE_USERS);

    println!();
    println!("Storage Analytics ({} Files)", stats.total_files);
    for slice in stats.chart_slices() {
        println!(
            "  {:<8} {:>4}  {:>5.1}%  {}",
            slice.file_type.to_uppercase(),
            slice.count,
            slice.share * 100.0,
            slice.color
        );
    }

    println!();
    println!("Recent Activity");
    for activity in &RECENT_ACTIVITY {
        println!(
            "  {:<9} {:<20} {:<6} {}",
            activity.action, activity.file, activity.user, activity.time
        );
    }
}

fn print_files(files: &[&FileRecord], view: ViewMode) {
    if files.is_empty() {
        println!("No files found");
        println!("Upload files or change your search query");
        return;
    }

    match view {
        ViewMode::Grid => {
            for file in files {
                println!("[{}] {} ({}) {}", file.category().label(), file.name, file.size, file.id);
            }
        }
        ViewMode::List => {
            for file in files {
                let modified = file
                    .last_modified
                    .map(|t| t.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<38} {:<30} {:<8} {:<10} {}",
                    file.id,
                    file.name,
                    file.type_label(),
                    file.size,
                    modified
                );
            }
        }
    }
}
