use clap::{Parser, Subcommand};
use compass::config;
use compass::dial::CairoCanvas;
use compass::export;
use compass::gui::APP_ID;
use compass::gui::app::{AppInit, AppModel};
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "compass", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Resource file to read instead of the one in the config directory
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Initial bearing in degrees (not wrapped)
    #[arg(
        short = 'b',
        long,
        global = true,
        default_value_t = 0.0,
        allow_negative_numbers = true
    )]
    bearing: f32,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Render the dial to a PNG file without opening a window
    Render {
        /// Side of the square image; defaults to the dial's preferred size
        #[arg(short = 's', long)]
        size: Option<u32>,

        #[arg(short = 'o', long, default_value = "compass.png")]
        output: PathBuf,
    },
    /// Write the default resource file if none exists and print its path
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render { size, output }) => {
            let config = config::load_or_default(cli.config.as_deref());
            export::render_png(config.resources(), cli.bearing, size, &output)?;
            Ok(())
        }
        Some(Commands::InitConfig) => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
        None => {
            let config = config::load_or_default(cli.config.as_deref());
            let metrics = CairoCanvas::offscreen()?;

            // clap owns the command line; GTK gets none of it
            let app = RelmApp::new(APP_ID).with_args(Vec::new());
            app.run::<AppModel>(AppInit {
                config,
                bearing: cli.bearing,
                metrics,
            });
            Ok(())
        }
    }
}
