use std::io;

use anyhow::Result;
use clap::Parser;

use jotter::cli::CliArgs;
use jotter::config::EditorConfig;
use jotter::model::AppModel;
use jotter::runtime::Runtime;

fn main() -> Result<()> {
    jotter::tracing::init();

    let args = CliArgs::parse();
    let file_config = match args.config_path() {
        Some(path) => EditorConfig::load_from(path),
        None => EditorConfig::load(),
    };
    let startup = args
        .into_config(file_config)
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    let mut model = AppModel::new(startup.editor);
    if let Some(name) = startup.initial_name {
        let stored = model.buffer.set_name(&name);
        tracing::info!("Starting with buffer named {}", stored);
    }

    let stdin = io::stdin();
    let mut runtime = Runtime::new(model, stdin.lock(), io::stdout());
    runtime.run()?;

    Ok(())
}
