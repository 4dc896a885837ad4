use anyhow::Result;
use clap::Parser;
use console::style;
use flickr_album_organize::cli::Cli;
use flickr_album_organize::component::AlbumOrganizer;
use flickr_album_organize::component::album_organizer::OrganizeError;
use flickr_album_organize::config::Config;
use flickr_album_organize::signal::setup_shutdown_signal;
use log::{info, warn};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            warn!("Program error: {e:#}");
            eprintln!("{} {:#}", style("錯誤:").red().bold(), e);

            // 來源與目的地相同屬於設定錯誤
            if matches!(e.downcast_ref::<OrganizeError>(), Some(OrganizeError::SamePath(_))) {
                ExitCode::from(1)
            } else {
                ExitCode::from(2)
            }
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let shutdown_signal = setup_shutdown_signal()?;
    let config = Config::new(cli.settings.as_deref());

    let organizer = AlbumOrganizer::new(
        cli.organize_options(&config.settings),
        cli.confirm_before_move(&config.settings),
        shutdown_signal,
    );

    if organizer.run()?.is_none() {
        info!("使用者取消操作");
    }

    Ok(())
}
