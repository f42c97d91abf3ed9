use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};
use movies_tui::{app::App, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("movies-tui")
        .version(crate_version!())
        .about("Browse movies, TV shows and people from the terminal")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("api-url")
                .long("api-url")
                .value_name("URL")
                .help("Base URL of the movies API for this run")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("theme")
                .short("t")
                .long("theme")
                .value_name("NAME")
                .help("Theme for this run: tokyo-night, dracula or rose-pine-dawn")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(api_url) = matches.value_of("api-url") {
        config.api_url = api_url.to_string();
    }
    if let Some(theme) = matches.value_of("theme") {
        config.theme_name = theme.to_string();
    }

    App::start(config).await?;
    Ok(())
}
