// src/app.rs
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use text_count_infra::{FileReader, FileWriter, MAX_INPUT_BYTES, persistence::STDIN_NAME, watch::FileWatch};
use text_count_ports::clock::SystemClock;
use text_count_shared_kernel::{ApplicationError, InfrastructureError, PresentationError};
use text_count_usecase::{AnalyzeText, SettingsRepository};
use tracing::{debug, info, warn};

use crate::args::Args;
use crate::config::{self, Config};
use crate::presentation;

pub fn run(args: Args) -> Result<()> {
    if args.behavior.watch && args.input_path().is_none() {
        return Err(PresentationError::InvalidValue {
            flag: "--watch".to_string(),
            value: "-".to_string(),
            reason: "standard input cannot be watched".to_string(),
        }
        .into());
    }

    let state_dir = config::resolve_state_dir(args.state.state_dir.as_ref());
    if let Some(dir) = &state_dir {
        debug!(dir = %dir.display(), "using state directory");
    }
    let store = config::open_store(state_dir.as_deref());
    let repository = SettingsRepository::new(store.as_ref(), &SystemClock);

    if args.state.clear {
        repository.clear_all().context("clearing saved state")?;
        info!("saved settings and text cleared");
    }

    if let Some(path) = &args.state.import_settings {
        let json = read_file(path)?;
        repository.import_bundle(&json).with_context(|| format!("importing {}", path.display()))?;
        info!(path = %path.display(), "settings imported");
    }

    let settings = config::apply_overrides(repository.load_settings(), &args)?;
    if args.state.save {
        repository.save_settings(&settings).context("saving settings")?;
    }

    let config = Config {
        settings,
        format: args.output.format,
        top: args.output.top,
        output: args.output.output.clone(),
        store: store.clone(),
    };

    let settings_only = args.file.is_none()
        && !args.state.last
        && (args.state.export_settings.is_some()
            || args.state.import_settings.is_some()
            || args.state.save
            || args.state.clear);
    if !settings_only {
        let text = if args.state.last {
            repository.load_text()
        } else {
            match args.input_path() {
                Some(path) => read_file(path)?,
                None => read_stdin()?,
            }
        };
        emit(&config, &text)?;
    }

    if let Some(path) = &args.state.export_settings {
        export_settings(&repository, path)?;
    }

    if args.behavior.watch
        && let Some(path) = args.input_path()
    {
        watch(config, path)?;
    }
    Ok(())
}

/// Count `text` and write the rendered result to `--output` or stdout.
fn emit(config: &Config, text: &str) -> Result<()> {
    let repository = SettingsRepository::new(config.store.as_ref(), &SystemClock);
    let output = AnalyzeText::new(&config.settings).autosave_to(&repository).run(text, config.top);
    let rendered = presentation::render(&output, config.format, config.settings.display_format, &Local::now())
        .context("rendering output")?;

    match &config.output {
        Some(path) => FileWriter::write_text(path, &rendered)
            .with_context(|| format!("writing {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{rendered}").map_err(InfrastructureError::from)?;
        }
    }
    Ok(())
}

fn export_settings(repository: &SettingsRepository<'_>, path: &Path) -> Result<()> {
    let json = repository.export_bundle()?;
    FileWriter::write_text(path, &json).map_err(|err| ApplicationError::ExportFailed {
        reason: format!("cannot write {}", path.display()),
        source: Some(Box::new(err.into())),
    })?;
    info!(path = %path.display(), "settings exported");
    Ok(())
}

fn watch(config: Config, path: &Path) -> Result<()> {
    if !config.settings.realtime_mode {
        warn!("realtime mode is off; not watching for changes");
        return Ok(());
    }

    let delay = config.debounce();
    let delay_ms = config.settings.debounce_delay;
    let target = path.to_path_buf();
    let watch = FileWatch::start(path, delay, move || {
        let result = read_file(&target).and_then(|text| emit(&config, &text));
        if let Err(err) = result {
            let chain = format!("{err:#}");
            warn!(error = %chain, "recount failed");
        }
    })?;
    info!(path = %path.display(), delay_ms, "watching for changes");
    watch.wait();
    Ok(())
}

/// Invalid UTF-8 is replaced rather than rejected.
fn read_file(path: &Path) -> Result<String> {
    Ok(FileReader::read_text(path, MAX_INPUT_BYTES)?)
}

fn read_stdin() -> Result<String> {
    Ok(FileReader::read_text_from(io::stdin().lock(), STDIN_NAME, MAX_INPUT_BYTES)?)
}
