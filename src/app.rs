use crate::cli::{Cli, Commands};
use scanwatch::{config, engine, ui};
use std::process;

pub fn run(cli: Cli) {
    init_logging();

    let config = config::Config::load().unwrap_or_default();

    // Handle subcommands first
    if let Some(command) = cli.command {
        match command {
            Commands::CheckNmap => handle_check_nmap(&config),
            Commands::Scan { target } => handle_scan(&config, cli.scan_dir, &target),
            Commands::InitConfig => handle_init_config(),
        }
        return;
    }

    // Launch TUI (default behavior)
    let scan_dir = cli.scan_dir.unwrap_or_else(|| config.scan_dir());
    if let Err(e) = ui::run_ui(cli.target, scan_dir, &config) {
        eprintln!("Error running UI: {}", e);
        process::exit(1);
    }
}

/// Route tracing output to a file when RUST_LOG is set. The alternate
/// screen owns the terminal, so the subscriber never writes there.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("scanwatch.log")
    else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
}

fn handle_check_nmap(config: &config::Config) {
    match engine::nmap_version(&config.programs.nmap) {
        Ok(version) => {
            println!("nmap found: {}", version);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }

    // diff is only exercised from the diff screen, but check it here too
    match std::process::Command::new(&config.programs.diff)
        .arg("--version")
        .output()
    {
        Ok(out) if out.status.success() => {
            let stdout = String::from_utf8_lossy(&out.stdout);
            println!("diff found: {}", stdout.lines().next().unwrap_or("unknown"));
        }
        _ => {
            eprintln!("Error: {} not found in PATH", config.programs.diff);
            process::exit(1);
        }
    }
}

fn handle_scan(config: &config::Config, scan_dir: Option<std::path::PathBuf>, target: &str) {
    let dir = scan_dir.unwrap_or_else(|| config.scan_dir());

    match engine::run_scan(&config.programs.nmap, target, &dir) {
        Ok(outcome) => {
            print!("{}", outcome.report);
            println!("Saved to {}", outcome.path.display());
            for host in &outcome.hosts {
                println!("  {}", host);
            }
            println!("{} host(s) up", outcome.hosts.len());
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn handle_init_config() {
    match config::Config::load() {
        Ok(cfg) if config::Config::exists() => {
            match config::Config::config_path() {
                Ok(path) => println!("Config loaded successfully from {}", path.display()),
                Err(e) => println!("Config loaded, but config path unknown: {:#}", e),
            }
            println!("{:#?}", cfg);
        }
        Ok(_) | Err(_) => {
            println!("Config missing or invalid. Creating default config...");

            let cfg = config::Config::default();
            if let Err(err) = cfg.save() {
                eprintln!("Failed to save default config: {:#}", err);
                process::exit(1);
            } else {
                match config::Config::config_path() {
                    Ok(path) => println!("Default config saved to {}", path.display()),
                    Err(e) => println!("Default config saved (path unknown): {:#}", e),
                }
            }
        }
    }
}
