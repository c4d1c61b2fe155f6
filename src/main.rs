//! `easy-edit` binary: render a field or replay scripted events against it

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use easy_edit::cli::{replay, CliArgs, CliCommand, Script};
use easy_edit::keymap::{load_default_keymap, Keymap};
use easy_edit::{EasyEditConfig, EasyEditModel, EasyEditProps};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    easy_edit::tracing::init(args.log_level());

    let config = EasyEditConfig::load();
    let keymap = Keymap::with_bindings(load_default_keymap(args.keymap.as_deref()));

    match args.command {
        CliCommand::Render { props, edit } => {
            let mut props = read_props(&props, &config)?;
            props.edit_mode |= edit;
            let model = EasyEditModel::with_keymap(props, keymap);
            println!("{}", easy_edit::view::render(&model).to_html());
        }
        CliCommand::Replay {
            props,
            script,
            json,
        } => {
            let props = read_props(&props, &config)?;
            let script = read_script(&script)?;
            if let Some(ref name) = script.name {
                eprintln!("Replaying {}", name);
            }

            let report = replay(props, keymap, &script).context("replaying script")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
        }
    }

    Ok(())
}

fn read_props(path: &Path, config: &EasyEditConfig) -> Result<EasyEditProps> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("reading props {}", path.display()))?;
    EasyEditProps::from_yaml_with_config(&yaml, config)
        .with_context(|| format!("parsing props {}", path.display()))
}

fn read_script(path: &Path) -> Result<Script> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    Script::from_yaml(&yaml).with_context(|| format!("parsing script {}", path.display()))
}
