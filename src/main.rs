// Windows GUI应用程序配置，隐藏控制台窗口
#![cfg_attr(
    not(debug_assertions),
    windows_subsystem = "windows"
)]

mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use cli::{Args, Commands};

use leading_crumbs::app::config::manager::TomlConfigStore;
use leading_crumbs::app::config::paths::ConfigPaths;
use leading_crumbs::app::logging::setup::init_logging;
use leading_crumbs::{
    BreadcrumbSettingsForm, EnvLanguage, FixedLanguage,
    LanguageProvider, SETTINGS_NAME,
};

fn main() -> anyhow::Result<()> {
    init_logging();

    // 解析命令行参数
    let args = Args::parse();

    let paths = match &args.config_dir {
        Some(dir) => ConfigPaths::with_dir(dir),
        None => ConfigPaths::new(SETTINGS_NAME),
    }
    .context("Unable to resolve config directory")?;

    let locale = args
        .locale
        .map(Into::into)
        .unwrap_or_else(|| EnvLanguage.current_locale());

    let mut form = BreadcrumbSettingsForm::new(
        TomlConfigStore::new(paths),
        FixedLanguage(locale),
    );

    match args.command.unwrap_or(Commands::Gui) {
        Commands::Gui => {
            leading_crumbs::ui::run_gui(form)
                .context("GUI exited with an error")?;
        }
        Commands::Show => commands::show(&form)?,
        Commands::Add {
            en_crumb,
            en_url,
            fr_crumb,
            fr_url,
        } => {
            let row = leading_crumbs::CrumbRow::filled(
                en_crumb, en_url, fr_crumb, fr_url,
            );
            commands::add(&mut form, row)?;
        }
        Commands::Remove => commands::remove(&mut form)?,
        Commands::FrontPage { state } => {
            commands::front_page(&mut form, state.enabled())?;
        }
    }

    Ok(())
}
