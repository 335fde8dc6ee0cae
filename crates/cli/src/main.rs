//! Stride CLI - personal goal tracking from the terminal.

mod format;

use anyhow::Result;
use chrono::{Datelike, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing::Level;

use stride_core::{
    Category, CategoryId, CompletionRecord, DailyNote, Frequency, MicroObjective, ObjectiveId,
    ProgressRecord, ProgressionMode, ScheduleDay, SubCategory, SubCategoryId, Time,
};
use stride_progress::{compute_decay, compute_progress};
use stride_storage::{CompletionFilter, CompletionLog, JsonStorage, Storage};

use format::{format_percentage, render_bar};

const BAR_WIDTH: usize = 20;

#[derive(Parser)]
#[command(name = "stride")]
#[command(about = "Personal goal tracking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage goal categories
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// Add a sub-category to a category
    Sub {
        /// Category ID
        category_id: String,
        /// Sub-category name
        name: String,
        /// Icon name
        #[arg(long)]
        icon: Option<String>,
    },
    /// Manage micro-objectives
    Objective {
        #[command(subcommand)]
        command: ObjectiveCommands,
    },
    /// Mark an objective completed today
    Done {
        /// Objective ID
        objective_id: String,
        /// Magnitude of the completion (e.g. money saved, km run)
        #[arg(long)]
        value: Option<f64>,
        /// Free-form note
        #[arg(long)]
        notes: Option<String>,
    },
    /// Remove today's completion of an objective
    Undo {
        /// Objective ID
        objective_id: String,
    },
    /// Show progress for every category
    Status,
    /// Manage daily notes
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },
    /// Persist today's progress snapshot for every category
    Snapshot,
}

#[derive(Subcommand)]
enum CategoryCommands {
    /// Create a category
    Add {
        /// Category name
        name: String,
        /// Progression mode (cumulative, weekly, monthly)
        #[arg(long)]
        mode: ProgressionMode,
        /// Cumulative mode: value to reach
        #[arg(long)]
        target: Option<f64>,
        /// Unit of the target (cumulative or monthly)
        #[arg(long)]
        unit: Option<String>,
        /// Weekly mode: scheduled days, comma separated (e.g. monday,thursday)
        #[arg(long, value_delimiter = ',')]
        days: Vec<ScheduleDay>,
        /// Weekly mode: target sessions per week
        #[arg(long)]
        sessions: Option<u32>,
        /// Monthly mode: value to accumulate each month
        #[arg(long)]
        monthly_target: Option<f64>,
        /// Display color (hex)
        #[arg(long)]
        color: Option<String>,
        /// Display icon name
        #[arg(long)]
        icon: Option<String>,
        /// Track the recent-activity decay score
        #[arg(long)]
        decay: bool,
    },
    /// List categories
    List,
    /// Delete a category and everything under it
    Remove {
        /// Category ID
        id: String,
    },
    /// Set the current value of a cumulative category
    SetValue {
        /// Category ID
        id: String,
        /// New current value
        value: f64,
    },
}

#[derive(Subcommand)]
enum ObjectiveCommands {
    /// Create a micro-objective under a sub-category
    Add {
        /// Sub-category ID
        subcategory_id: String,
        /// Objective name
        name: String,
        /// Frequency (daily, weekly, monthly, once)
        #[arg(long, default_value = "daily")]
        frequency: Frequency,
        /// Scheduled days, comma separated
        #[arg(long, value_delimiter = ',')]
        days: Vec<ScheduleDay>,
        /// Default magnitude recorded on completion
        #[arg(long)]
        value: Option<f64>,
        /// Unit of the magnitude
        #[arg(long)]
        unit: Option<String>,
    },
    /// List active objectives
    List {
        /// Only objectives scheduled today
        #[arg(long)]
        today: bool,
    },
}

#[derive(Subcommand)]
enum NoteCommands {
    /// Add a note for a day (defaults to today)
    Add {
        /// Note text
        content: String,
        /// Day the note belongs to (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Scope the note to a category
        #[arg(long)]
        category: Option<String>,
    },
    /// List the notes of a day (defaults to today)
    List {
        /// Day to list (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    let storage_path = std::path::PathBuf::from(".stride");
    let mut storage = JsonStorage::new(&storage_path).await?;
    let now = Utc::now();

    match cli.command {
        Commands::Category { command } => run_category(command, &mut storage, now).await?,
        Commands::Sub {
            category_id,
            name,
            icon,
        } => {
            let category_id = parse_category_id(&category_id)?;
            if storage.load_category(category_id).await?.is_none() {
                println!("Category not found");
                return Ok(());
            }
            let mut subcategory = SubCategory::new(category_id, name);
            if let Some(icon) = icon {
                subcategory.icon = icon;
            }
            storage.save_subcategory(&subcategory).await?;
            println!("Added sub-category: {} - {}", subcategory.id, subcategory.name);
        }
        Commands::Objective { command } => run_objective(command, &mut storage, now).await?,
        Commands::Done {
            objective_id,
            value,
            notes,
        } => {
            let objective_id = parse_objective_id(&objective_id)?;
            let Some(objective) = storage.load_objective(objective_id).await? else {
                println!("Objective not found");
                return Ok(());
            };
            let value = value.or(objective.value);
            let mut log = CompletionLog::new(storage);
            let record = log.complete(objective_id, value, notes, now).await?;
            println!("Completed: {} at {}", objective.name, record.completed_at);
        }
        Commands::Undo { objective_id } => {
            let objective_id = parse_objective_id(&objective_id)?;
            let mut log = CompletionLog::new(storage);
            match log.uncomplete(objective_id, now).await? {
                Some(record) => println!("Removed completion from {}", record.completed_at),
                None => println!("Nothing to undo today"),
            }
        }
        Commands::Status => run_status(&storage, now).await?,
        Commands::Note { command } => run_note(command, &mut storage, now).await?,
        Commands::Snapshot => run_snapshot(&mut storage, now).await?,
    }

    Ok(())
}

async fn run_category(
    command: CategoryCommands,
    storage: &mut JsonStorage,
    now: Time,
) -> Result<()> {
    match command {
        CategoryCommands::Add {
            name,
            mode,
            target,
            unit,
            days,
            sessions,
            monthly_target,
            color,
            icon,
            decay,
        } => {
            let mut category = Category::new(name, mode);
            category.target_value = target;
            category.scheduled_days = days;
            category.weekly_target_sessions = sessions;
            category.monthly_target_value = monthly_target;
            category.decay_enabled = decay;
            match mode {
                ProgressionMode::Cumulative => category.target_unit = unit,
                ProgressionMode::Monthly => category.monthly_target_unit = unit,
                ProgressionMode::Weekly => {}
            }
            if let Some(color) = color {
                category.color = color;
            }
            if let Some(icon) = icon {
                category.icon = icon;
            }
            storage.save_category(&category).await?;
            println!("Added category: {} - {}", category.id, category.name);
        }
        CategoryCommands::List => {
            let categories = storage.list_categories().await?;
            println!("Categories ({})", categories.len());
            for category in categories {
                println!(
                    "  {} | {} | {}",
                    category.id, category.progression_mode, category.name,
                );
            }
        }
        CategoryCommands::Remove { id } => {
            let id = parse_category_id(&id)?;
            storage.delete_category(id).await?;
            println!("Removed category {}", id);
        }
        CategoryCommands::SetValue { id, value } => {
            let id = parse_category_id(&id)?;
            let Some(mut category) = storage.load_category(id).await? else {
                println!("Category not found");
                return Ok(());
            };
            category.current_value = Some(value);
            category.updated_at = now;
            storage.save_category(&category).await?;
            println!("{}: current value set to {}", category.name, value);
        }
    }
    Ok(())
}

async fn run_objective(
    command: ObjectiveCommands,
    storage: &mut JsonStorage,
    now: Time,
) -> Result<()> {
    match command {
        ObjectiveCommands::Add {
            subcategory_id,
            name,
            frequency,
            days,
            value,
            unit,
        } => {
            let subcategory_id: SubCategoryId = subcategory_id
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid sub-category ID"))?;
            if storage.load_subcategory(subcategory_id).await?.is_none() {
                println!("Sub-category not found");
                return Ok(());
            }
            let mut objective = MicroObjective::new(subcategory_id, name, frequency);
            objective.scheduled_days = days;
            objective.value = value;
            objective.value_unit = unit;
            storage.save_objective(&objective).await?;
            println!("Added objective: {} - {}", objective.id, objective.name);
        }
        ObjectiveCommands::List { today } => {
            let mut objectives = storage.list_active_objectives().await?;
            if today {
                let weekday = ScheduleDay::from(now.date_naive().weekday());
                objectives.retain(|o| o.is_scheduled_on(weekday));
            }
            println!("Objectives ({})", objectives.len());
            for objective in objectives {
                println!(
                    "  {} | {} | {}",
                    objective.id, objective.frequency, objective.name,
                );
            }
        }
    }
    Ok(())
}

async fn run_status(storage: &JsonStorage, now: Time) -> Result<()> {
    let categories = storage.list_categories().await?;
    if categories.is_empty() {
        println!("No categories yet");
        return Ok(());
    }

    for category in categories {
        let completions = category_completions(storage, &category).await?;
        let progress = compute_progress(category.progression_mode, &category, &completions, now);

        println!(
            "{:20} {} {:>4}  ({})",
            category.name,
            render_bar(progress, BAR_WIDTH),
            format_percentage(progress),
            category.progression_mode,
        );
        if category.decay_enabled {
            let decay = compute_decay(&completions, now);
            println!("{:20} regularity {}", "", format_percentage(decay));
        }
    }
    Ok(())
}

async fn run_note(command: NoteCommands, storage: &mut JsonStorage, now: Time) -> Result<()> {
    match command {
        NoteCommands::Add {
            content,
            date,
            category,
        } => {
            let mut note = DailyNote::new(content, date.unwrap_or_else(|| now.date_naive()));
            if let Some(category) = category {
                note.category_id = Some(parse_category_id(&category)?);
            }
            storage.save_note(&note).await?;
            println!("Added note for {}", note.note_date);
        }
        NoteCommands::List { date } => {
            let date = date.unwrap_or_else(|| now.date_naive());
            let notes = storage.list_notes(date).await?;
            println!("Notes for {} ({})", date, notes.len());
            for note in notes {
                println!("  {}", note.content);
            }
        }
    }
    Ok(())
}

async fn run_snapshot(storage: &mut JsonStorage, now: Time) -> Result<()> {
    let categories = storage.list_categories().await?;
    for category in &categories {
        let completions = category_completions(storage, category).await?;
        let progress = compute_progress(category.progression_mode, category, &completions, now);
        let record = ProgressRecord {
            category_id: category.id,
            record_date: now.date_naive(),
            progress_value: progress,
            cumulative_value: category.current_value,
            regularity_score: category
                .decay_enabled
                .then(|| compute_decay(&completions, now)),
            created_at: now,
        };
        storage.save_progress_record(&record).await?;
        println!("{}: {}", category.name, format_percentage(progress));
    }
    println!("Saved {} snapshot(s) for {}", categories.len(), now.date_naive());
    Ok(())
}

/// Collect the completion history of every objective under a category.
async fn category_completions(
    storage: &JsonStorage,
    category: &Category,
) -> Result<Vec<CompletionRecord>> {
    let mut completions = Vec::new();
    for subcategory in storage.list_subcategories(category.id).await? {
        for objective in storage.list_objectives(subcategory.id).await? {
            let filter = CompletionFilter {
                objective_id: Some(objective.id),
                ..Default::default()
            };
            completions.extend(storage.list_completions(&filter).await?);
        }
    }
    Ok(completions)
}

fn parse_category_id(s: &str) -> Result<CategoryId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid category ID"))
}

fn parse_objective_id(s: &str) -> Result<ObjectiveId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid objective ID"))
}
