use crate::cli::handlers::{
    add_tile, bulk_remove_tiles, clear_tiles, edit_tile, list_tiles, open_item_store, remove_tile,
};
use crate::component::{ItemStore, Language, TileType};
use crate::config::Configuration;
use crate::pause;
use crate::report::Reporter;
use anyhow::Result;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

const LANGUAGE_CHOICES: [&str; 3] = ["de", "en", "all"];
const TYPE_CHOICES: [TileType; 3] = [TileType::Website, TileType::External, TileType::Pdf];

/// Interactive tile management loop. Every mutation is confirmed before it
/// runs and reported through the injected reporter.
pub fn run_wizard(term: &Term, config: &Configuration, reporter: &dyn Reporter) -> Result<()> {
    let store = open_item_store(config)?;

    loop {
        term.clear_screen()?;
        println!("{}", style("=== Kiosk Wizard ===").cyan().bold());

        let options = vec![
            "Add a new tile",
            "Remove a tile",
            "List all tiles",
            "Edit a tile",
            "Bulk remove tiles",
            "Clear all tiles",
            "Exit",
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Choose an option")
            .items(&options)
            .default(0)
            .interact_on_opt(term)?;

        match selection {
            Some(0) => prompt_add(&store, reporter)?,
            Some(1) => prompt_remove(&store, reporter)?,
            Some(2) => list_tiles(&store, reporter)?,
            Some(3) => prompt_edit(&store, reporter)?,
            Some(4) => prompt_bulk_remove(&store, reporter)?,
            Some(5) => prompt_clear(&store, reporter)?,
            Some(6) | None => return Ok(()), // ESC or exit
            _ => unreachable!(),
        }

        pause(term)?;
    }
}

fn prompt_languages() -> Result<Vec<Language>> {
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose a language")
        .items(&LANGUAGE_CHOICES)
        .default(2)
        .interact()?;
    Ok(match choice {
        0 => vec![Language::De],
        1 => vec![Language::En],
        _ => Language::ALL.to_vec(),
    })
}

fn prompt_type() -> Result<TileType> {
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose the type")
        .items(&TYPE_CHOICES.map(|t| t.to_string()))
        .default(0)
        .interact()?;
    Ok(TYPE_CHOICES[choice])
}

/// Empty input means "keep the current value".
fn prompt_optional(prompt: &str) -> Result<Option<String>> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(if value.is_empty() { None } else { Some(value) })
}

fn confirmed(prompt: &str) -> Result<bool> {
    let confirmed = Confirm::new().with_prompt(prompt).interact()?;
    if !confirmed {
        println!("{}", style("Aborted.").red().bold());
    }
    Ok(confirmed)
}

fn prompt_add(store: &ItemStore, reporter: &dyn Reporter) -> Result<()> {
    println!("{}", style("Add a new tile").bold());
    println!(
        "{}",
        style("Choose 'all' to add the tile to both languages at once.").dim()
    );

    let languages = prompt_languages()?;
    let title: String = Input::new().with_prompt("Enter the title").interact_text()?;
    let link: String = Input::new().with_prompt("Enter the link").interact_text()?;
    let kind = prompt_type()?;
    let position: i64 = Input::new()
        .with_prompt("Enter the position (0 appends)")
        .default(0)
        .interact_text()?;

    if confirmed("Add this tile?")? {
        add_tile(store, &languages, &title, &link, kind, position, reporter)?;
    }
    Ok(())
}

fn prompt_remove(store: &ItemStore, reporter: &dyn Reporter) -> Result<()> {
    println!("{}", style("Remove a tile").bold());

    let languages = prompt_languages()?;
    let id: usize = Input::new().with_prompt("Enter the ID").interact_text()?;

    if confirmed("Remove this tile?")? {
        remove_tile(store, &languages, id, reporter)?;
    }
    Ok(())
}

fn prompt_edit(store: &ItemStore, reporter: &dyn Reporter) -> Result<()> {
    println!("{}", style("Edit a tile").bold());

    let id: usize = Input::new().with_prompt("Enter the ID").interact_text()?;
    let language = match Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose a language")
        .items(&LANGUAGE_CHOICES[..2])
        .default(0)
        .interact()?
    {
        0 => Language::De,
        _ => Language::En,
    };
    let title = prompt_optional("Enter the title (empty keeps it)")?;
    let link = prompt_optional("Enter the link (empty keeps it)")?;
    let kind = prompt_type()?;

    if confirmed("Edit this tile?")? {
        edit_tile(
            store,
            id,
            language,
            title.as_deref(),
            link.as_deref(),
            Some(kind),
            reporter,
        )?;
    }
    Ok(())
}

fn prompt_bulk_remove(store: &ItemStore, reporter: &dyn Reporter) -> Result<()> {
    println!("{}", style("Bulk remove tiles").bold());
    println!("{}", style("Provide the IDs separated by commas.").dim());

    let input: String = Input::new().with_prompt("Enter the IDs").interact_text()?;
    let mut ids = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match part.parse::<usize>() {
            Ok(id) => ids.push(id),
            Err(_) => {
                reporter.error(&format!("Not a valid ID: {part}"));
                return Ok(());
            }
        }
    }
    if ids.is_empty() {
        reporter.warn("No IDs given.");
        return Ok(());
    }

    if confirmed("Remove these tiles?")? {
        bulk_remove_tiles(store, &ids, reporter)?;
    }
    Ok(())
}

fn prompt_clear(store: &ItemStore, reporter: &dyn Reporter) -> Result<()> {
    if confirmed("Remove ALL tiles in both languages?")? {
        clear_tiles(store, reporter)?;
    }
    Ok(())
}
