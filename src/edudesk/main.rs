use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use edudesk::api::{CmdMessage, EdudeskApi};
use edudesk::catalog::TopicCatalog;
use edudesk::config::DeskConfig;
use edudesk::derive::TemplateDeriver;
use edudesk::editor::edit_draft_text;
use edudesk::error::{EdudeskError, Result};
use edudesk::model::ContentKind;
use edudesk::session::ContentStatus;
use edudesk::store::fs::FileStore;
use std::path::PathBuf;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::print::{print_messages, print_topics, print_users};
use cli::render::render_markdown;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: EdudeskApi<FileStore, TemplateDeriver>,
    config: DeskConfig,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Topics) | None => handle_topics(&ctx),
        Some(Commands::Show {
            subtopic,
            kind,
            raw,
        }) => handle_show(&mut ctx, subtopic, kind, raw),
        Some(Commands::Upload { subtopic, file }) => handle_upload(&mut ctx, subtopic, file),
        Some(Commands::Edit {
            subtopic,
            kind,
            content,
            no_editor,
        }) => handle_edit(&mut ctx, subtopic, kind, content, no_editor),
        Some(Commands::Reset { subtopic, kind }) => handle_reset(&mut ctx, subtopic, kind),
        Some(Commands::Users { term }) => handle_users(&ctx, term),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => match std::env::var_os("EDUDESK_HOME") {
            Some(home) => PathBuf::from(home),
            None => ProjectDirs::from("com", "edudesk", "edudesk")
                .ok_or_else(|| EdudeskError::Store("Could not determine data dir".to_string()))?
                .data_dir()
                .to_path_buf(),
        },
    };

    let config = DeskConfig::load(&data_dir).unwrap_or_default();
    let catalog = TopicCatalog::load(&data_dir)?;
    let store = FileStore::new(&data_dir).with_content_ext(&config.content_ext);
    let api = EdudeskApi::new(store, TemplateDeriver, catalog, config.default_kind)?;

    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

fn handle_topics(ctx: &AppContext) -> Result<()> {
    let overviews = ctx.api.topics_overview()?;
    print_topics(&overviews);
    Ok(())
}

fn select_view(ctx: &mut AppContext, subtopic: u32, kind: Option<ContentKind>) -> Result<()> {
    ctx.api.select_subtopic(subtopic)?;
    if let Some(kind) = kind {
        ctx.api.select_kind(kind)?;
    }
    Ok(())
}

fn handle_show(
    ctx: &mut AppContext,
    subtopic: u32,
    kind: Option<ContentKind>,
    raw: bool,
) -> Result<()> {
    select_view(ctx, subtopic, kind)?;
    let session = ctx.api.session();

    let name = ctx
        .api
        .catalog()
        .subtopic_name(subtopic)
        .unwrap_or("(unknown subtopic)")
        .to_string();
    println!(
        "{} {}",
        name.bold(),
        format!("[{}]", session.active_kind.label()).yellow()
    );
    println!("--------------------------------");

    if session.content_status == ContentStatus::Failed {
        print_messages(&[CmdMessage::error(
            "Content failed to load. Please try again later.",
        )]);
    } else if !session.has_uploaded_content() {
        print_messages(&[CmdMessage::info(
            "No chapter uploaded yet. Use `edudesk upload <subtopic> <file>` to generate content.",
        )]);
    }

    if raw {
        println!("{}", session.display_body());
    } else {
        print!("{}", render_markdown(session.display_body()));
    }
    Ok(())
}

fn handle_upload(ctx: &mut AppContext, subtopic: u32, file: PathBuf) -> Result<()> {
    let source_text = std::fs::read_to_string(&file).map_err(EdudeskError::Io)?;
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "chapter".to_string());

    ctx.api.select_subtopic(subtopic)?;
    let messages = ctx.api.upload(&source_text, &stem)?;
    print_messages(&messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    subtopic: u32,
    kind: Option<ContentKind>,
    content: Option<String>,
    no_editor: bool,
) -> Result<()> {
    select_view(ctx, subtopic, kind)?;
    ctx.api.toggle_edit()?;

    let edited = if no_editor {
        content.unwrap_or_default()
    } else {
        let draft = ctx.api.session().draft.clone();
        edit_draft_text(&draft, &ctx.config.content_ext)?
    };

    ctx.api.edit_draft(&edited)?;
    let messages = ctx.api.save()?;
    print_messages(&messages);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext, subtopic: u32, kind: Option<ContentKind>) -> Result<()> {
    select_view(ctx, subtopic, kind)?;
    let messages = ctx.api.reset_upload()?;
    print_messages(&messages);
    Ok(())
}

fn handle_users(ctx: &AppContext, term: Option<String>) -> Result<()> {
    let users = match term {
        Some(term) => ctx.api.search_users(&term),
        None => ctx.api.list_users(),
    };
    print_users(&users);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            println!("content-ext  = {}", ctx.config.content_ext);
            println!("default-kind = {}", ctx.config.default_kind);
        }
        (Some("content-ext"), None) => println!("{}", ctx.config.content_ext),
        (Some("content-ext"), Some(ext)) => {
            ctx.config.set_content_ext(&ext);
            ctx.config.save(&ctx.data_dir)?;
            print_messages(&[CmdMessage::success(format!(
                "content-ext set to {}",
                ctx.config.content_ext
            ))]);
        }
        (Some("default-kind"), None) => println!("{}", ctx.config.default_kind),
        (Some("default-kind"), Some(kind)) => {
            let kind: ContentKind = kind.parse().map_err(EdudeskError::Api)?;
            ctx.config.default_kind = kind;
            ctx.config.save(&ctx.data_dir)?;
            print_messages(&[CmdMessage::success(format!("default-kind set to {}", kind))]);
        }
        (Some(other), _) => {
            return Err(EdudeskError::Api(format!(
                "Unknown config key '{}' (expected content-ext or default-kind)",
                other
            )));
        }
    }
    Ok(())
}
