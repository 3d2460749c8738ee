use anyhow::Result;
use md2notion_config::Config;
use md2notion_engine::{Block, FileNode, FolderNode, LinkMap, io};
use serde::Serialize;
use std::{env, path::PathBuf, process};

/// A folder with every file's content parsed, ready to serialize.
#[derive(Serialize)]
struct FolderOutput {
    name: String,
    files: Vec<FileOutput>,
    subfolders: Vec<FolderOutput>,
}

#[derive(Serialize)]
struct FileOutput {
    file_name: String,
    blocks: Vec<Block>,
}

fn render_folder(folder: &FolderNode, link_map: &LinkMap) -> Result<FolderOutput> {
    let files = folder
        .files
        .iter()
        .map(|file| render_file(file, link_map))
        .collect::<Result<_>>()?;
    let subfolders = folder
        .subfolders
        .iter()
        .map(|sub| render_folder(sub, link_map))
        .collect::<Result<_>>()?;

    Ok(FolderOutput {
        name: folder.name.clone(),
        files,
        subfolders,
    })
}

fn render_file(file: &FileNode, link_map: &LinkMap) -> Result<FileOutput> {
    Ok(FileOutput {
        file_name: file.file_name().to_string(),
        blocks: file.get_content(link_map)?,
    })
}

fn main() -> Result<()> {
    // Determine source path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let source_path;
    let link_map_path;
    let from_config;

    if args.len() == 2 || args.len() == 3 {
        // CLI arguments provided - use them
        source_path = PathBuf::from(&args[1]);
        link_map_path = args.get(2).map(PathBuf::from);
        from_config = false;
    } else if args.len() == 1 {
        // No CLI arguments - try config file
        match Config::load() {
            Ok(Some(config)) => {
                source_path = config.source_path;
                link_map_path = config.link_map_path;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No source path provided and no config file found");
                eprintln!("Usage: {} <source-folder-path> [link-map.toml]", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <source-folder-path> [link-map.toml]", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [source-folder-path] [link-map.toml]", args[0]);
        process::exit(1);
    };

    // Validate source directory using the engine
    if let Err(e) = io::validate_source_dir(&source_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Source path '{}'{} is invalid: {e}",
            source_path.display(),
            source
        );
        process::exit(1);
    }

    let link_map: LinkMap = match link_map_path {
        Some(path) => md2notion_config::load_link_map(path)?,
        None => LinkMap::new(),
    };

    match io::build_folder_tree(&source_path)? {
        Some(tree) => {
            let output = render_folder(&tree, &link_map)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        None => {
            // Tree with no Markdown anywhere; mirror the engine's contract.
            println!("null");
        }
    }

    Ok(())
}
