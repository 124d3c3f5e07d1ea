use anyhow::Result;
use docflow_config::Config;
use docflow_engine::compile::{ExpandOptions, split_list_lines};
use docflow_engine::{
    CompressOptions, EditorOptions, Element, ElementKind, FormulaCache, compress, expand,
    group_by_row_flex, io, text_from_element_list,
};
use std::{env, path::PathBuf, process};

const USAGE: &str = "Usage: docflow-cli <expand|compress|text|lines|groups> <file.json>";

#[derive(Debug, Clone, Copy)]
enum Command {
    Expand,
    Compress,
    Text,
    Lines,
    Groups,
}

impl Command {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "expand" => Some(Command::Expand),
            "compress" => Some(Command::Compress),
            "text" => Some(Command::Text),
            "lines" => Some(Command::Lines),
            "groups" => Some(Command::Groups),
            _ => None,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let (command, path) = match args.as_slice() {
        [_, command, path] => match Command::parse(command) {
            Some(command) => (command, PathBuf::from(path)),
            None => {
                eprintln!("Error: unknown command '{command}'");
                eprintln!("{USAGE}");
                process::exit(1);
            }
        },
        _ => {
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            log::warn!("Ignoring config file: {e}");
            Config::default()
        }
    };
    let path = config.resolve_document(&path);
    let document = io::read_document(&path)?;
    log::info!("Loaded {} elements from {}", document.len(), path.display());

    let flat = flatten(document, &config.editor);
    match command {
        Command::Expand => println!("{}", serde_json::to_string_pretty(&flat)?),
        Command::Compress => {
            let nested = compress(&flat, CompressOptions { classify_area: true });
            println!("{}", serde_json::to_string_pretty(&nested)?);
        }
        Command::Text => println!("{}", text_from_element_list(&flat)),
        Command::Lines => {
            let nested = compress(&flat, CompressOptions::default());
            for (n, list) in nested.iter().filter(|e| e.kind == ElementKind::List).enumerate() {
                println!("list {n}:");
                for (index, line) in split_list_lines(&list.value_list) {
                    let text: String = line.iter().map(|e| e.value.as_str()).collect();
                    println!("  {index}: {text}");
                }
            }
        }
        Command::Groups => {
            for group in group_by_row_flex(&flat) {
                let row_flex = group
                    .row_flex
                    .map(|r| format!("{r:?}"))
                    .unwrap_or_else(|| "default".to_string());
                println!("{row_flex}: {}", serde_json::to_string(&group.elements)?);
            }
        }
    }
    Ok(())
}

fn flatten(document: Vec<Element>, editor: &EditorOptions) -> Vec<Element> {
    let formulas = FormulaCache::new();
    let mut elements = document;
    expand(&mut elements, &ExpandOptions::new(editor, &formulas));
    elements
}
