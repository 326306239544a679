use anyhow::{Context, Result};
use grocery_planner::config::GroceryConfig;
use grocery_planner::grocery_list::{GroceryList, GroceryListAssembler};
use grocery_planner::pantry::PantryStaples;
use grocery_planner::storage::FileStore;
use log::info;
use std::env;
use std::process::ExitCode;

const USAGE: &str = "usage: grocery_planner [list | toggle <key> | clear | staples | add-staple <name> | remove-staple <name> | reset-staples]";

fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    env_logger::init();

    info!("Starting grocery planner");

    let config = GroceryConfig::from_env().context("Failed to read configuration")?;
    let store = FileStore::new(&config.storage_dir);
    let mut assembler = GroceryListAssembler::new(store, &config);
    assembler.load();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("list");
    let argument = args.get(1).map(String::as_str);

    match (command, argument) {
        ("list", None) => print_list(assembler.grocery_list(), config.group_by_category),
        ("toggle", Some(key)) => {
            let checked = assembler.toggle_item(key);
            println!("{key}: {}", if checked { "checked" } else { "unchecked" });
        }
        ("clear", None) => {
            assembler.clear_checked();
            println!("Cleared all checked items");
        }
        ("staples", None) => print_staples(assembler.staples()),
        ("add-staple", Some(staple)) => {
            if assembler.add_staple(staple) {
                println!("Added pantry staple '{staple}'");
            } else {
                println!("'{staple}' is already a pantry staple");
            }
        }
        ("remove-staple", Some(staple)) => {
            if assembler.remove_staple(staple) {
                println!("Removed pantry staple '{staple}'");
            } else {
                println!("'{staple}' is not a pantry staple");
            }
        }
        ("reset-staples", None) => {
            assembler.reset_staples();
            print_staples(assembler.staples());
        }
        _ => {
            eprintln!("{USAGE}");
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_list(list: &GroceryList, group_by_category: bool) {
    if list.is_empty() {
        println!("No meals planned yet! Add some meals to your weekly plan to generate a grocery list.");
        return;
    }

    println!("{}", list.progress_summary());
    for group in list.grouped(group_by_category) {
        if group_by_category {
            println!("\n== {} ==", group.label);
        }
        for item in &group.items {
            let mark = if item.checked { "x" } else { " " };
            let recipes: Vec<&str> = item.recipe_names.iter().map(String::as_str).collect();
            println!(
                "[{mark}] {}  ({})  <{}>",
                item.display_text,
                recipes.join(", "),
                item.key()
            );
        }
    }
}

fn print_staples(staples: &PantryStaples) {
    println!("{} pantry staples:", staples.len());
    for staple in staples.iter() {
        println!("  - {staple}");
    }
}
