use anyhow::Result;
use clap::Parser;
use console::Term;
use kioskctl::cli::{Cli, Commands, KioskCommand, MediaCommand, ToolsCommand, handlers};
use kioskctl::config::Configuration;
use kioskctl::menu::run_wizard;
use kioskctl::report::{ConsoleReporter, Reporter};
use log::info;

fn main() {
    kioskctl::init::init();
    let cli = Cli::parse();
    let reporter = ConsoleReporter::new();

    if let Err(e) = run(&cli, &reporter) {
        reporter.error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: &Cli, reporter: &dyn Reporter) -> Result<()> {
    let config = Configuration::open(&cli.config)?;
    info!("Using configuration {}", config.path().display());

    match &cli.command {
        Commands::Config(args) => {
            handlers::show_config(&config, args.all, args.section.as_deref(), reporter)
        }
        Commands::Kiosk(command) => run_kiosk(&config, command, reporter),
        Commands::Media(command) => run_media(&config, command, reporter),
        Commands::Tools(ToolsCommand::Thumbnail { source, target }) => {
            handlers::generate_thumbnails(&config, source.clone(), target.clone(), reporter)
        }
    }
}

fn run_kiosk(
    config: &Configuration,
    command: &KioskCommand,
    reporter: &dyn Reporter,
) -> Result<()> {
    if let KioskCommand::Wizard = command {
        return run_wizard(&Term::stdout(), config, reporter);
    }

    let store = handlers::open_item_store(config)?;
    match command {
        KioskCommand::Add {
            title,
            link,
            kind,
            language,
            position,
        } => handlers::add_tile(
            &store,
            &language.languages(),
            title,
            link,
            *kind,
            *position,
            reporter,
        ),
        KioskCommand::Remove { id, language } => {
            handlers::remove_tile(&store, &language.languages(), *id, reporter)
        }
        KioskCommand::List => handlers::list_tiles(&store, reporter),
        KioskCommand::Edit {
            id,
            language,
            title,
            link,
            kind,
        } => handlers::edit_tile(
            &store,
            *id,
            *language,
            title.as_deref(),
            link.as_deref(),
            *kind,
            reporter,
        ),
        KioskCommand::BulkRemove { ids } => handlers::bulk_remove_tiles(&store, ids, reporter),
        KioskCommand::Clear => handlers::clear_tiles(&store, reporter),
        KioskCommand::Wizard => unreachable!(),
    }
}

fn run_media(
    config: &Configuration,
    command: &MediaCommand,
    reporter: &dyn Reporter,
) -> Result<()> {
    let store = handlers::open_media_store(config)?;
    match command {
        MediaCommand::Add {
            title,
            file,
            kind,
            description,
        } => handlers::add_media(&store, title, file, *kind, description.as_deref(), reporter),
        MediaCommand::Remove { id } => handlers::remove_media(&store, *id, reporter),
        MediaCommand::List => handlers::list_media(&store, reporter),
        MediaCommand::Edit {
            id,
            title,
            file,
            kind,
            description,
        } => handlers::edit_media(
            &store,
            *id,
            title.as_deref(),
            file.as_deref(),
            *kind,
            description.as_deref(),
            reporter,
        ),
        MediaCommand::Clear => handlers::clear_media(&store, reporter),
    }
}
