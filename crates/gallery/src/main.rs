use gallery::{Key, MediaGallery, Page, PageEvent};
use gallery_config::GalleryConfig;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: media-gallery [OPTIONS] <PAGE>

Loads an admin page, runs the gallery's load handling and the given keys,
then prints the overlay markup and the final address.

Options:
  --address <URL>    Address the page was loaded from (default: /)
  --keys <K1,K2>     Comma separated key names, e.g. ArrowRight,Escape
  --config <PATH>    Gallery configuration file (TOML)
  --save-config      Store the configuration in use as the user default
  -h, --help         Print this help";

struct Args {
    page: PathBuf,
    address: String,
    keys: Vec<Key>,
    config: Option<PathBuf>,
    save_config: bool,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let save_config = args.contains("--save-config");
    let address = args
        .opt_value_from_str("--address")?
        .unwrap_or_else(|| "/".to_string());
    let keys = args
        .opt_value_from_str::<_, String>("--keys")?
        .map(|keys| {
            keys.split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(Key::from_name)
                .collect()
        })
        .unwrap_or_default();
    let config = args.opt_value_from_str("--config")?;
    let page = args.free_from_str()?;

    Ok(Some(Args {
        page,
        address,
        keys,
        config,
        save_config,
    }))
}

fn load_config(path: Option<&PathBuf>) -> Result<GalleryConfig, gallery_config::ConfigError> {
    match path {
        Some(path) => gallery_config::load_from_path(path),
        None => gallery_config::load(),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let config = match load_config(args.config.as_ref()) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Failed to load configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    if args.save_config {
        if let Err(err) = gallery_config::save(&config) {
            tracing::error!("Failed to save configuration: {err}");
            return ExitCode::FAILURE;
        }
        tracing::info!("Saved gallery configuration");
    }

    let mut page = match Page::from_file(&args.page, &args.address) {
        Ok(page) => page,
        Err(err) => {
            tracing::error!("Failed to load {}: {err}", args.page.display());
            return ExitCode::FAILURE;
        }
    };

    let mut gallery = MediaGallery::collect(&mut page, config);
    gallery.dispatch(&mut page, PageEvent::Load);

    for key in args.keys {
        gallery.dispatch(&mut page, PageEvent::KeyDown(key));
    }

    match gallery.overlay(&page) {
        Some(overlay) => println!("{}", overlay.to_markup()),
        None => println!("(closed)"),
    }
    println!("{}", page.address());

    ExitCode::SUCCESS
}
