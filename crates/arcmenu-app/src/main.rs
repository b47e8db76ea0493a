use arcmenu::{CircularMenu, Size};
use arcmenu_app::config::{self, AppConfig, ItemLabel};
use arcmenu_app::events::AppEvent;
use arcmenu_app::report::{self, LayoutReport};
use arcmenu_app::source::{ChannelDelegate, ConfigSource};
use arcmenu_app::sys::runtime;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(name = "arcmenu", version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the per-user default
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Lay the menu out headless and print the result
    Layout {
        #[arg(long, default_value_t = 320.0)]
        width: f64,
        #[arg(long, default_value_t = 160.0)]
        height: f64,
        /// Horizontal drag distance to replay; repeat for several drags
        #[arg(long = "drag", allow_hyphen_values = true)]
        drags: Vec<f64>,
        /// Tap the item with this index after the drags
        #[arg(long)]
        tap: Option<usize>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Keep running and print again whenever the config file changes
        #[arg(long)]
        watch: bool,
    },
    /// Write the default config file if none exists
    InitConfig,
    /// Open the interactive menu window. Drags rotate the menu only when they
    /// start on the ring band; presses elsewhere in the window are ignored.
    Show,
}

struct Headless {
    menu: CircularMenu<ItemLabel>,
    source: Rc<ConfigSource>,
    _delegate: Rc<ChannelDelegate>,
    json: bool,
}

impl Headless {
    fn new(config: &AppConfig, size: Size, tx: async_channel::Sender<AppEvent>, json: bool) -> Self {
        let source = Rc::new(ConfigSource::new(config));
        let delegate = Rc::new(ChannelDelegate::new(tx));
        let mut menu = CircularMenu::new(config.menu);
        menu.set_data_source(&source);
        menu.set_delegate(&delegate);
        menu.resize(size);
        menu.layout_if_needed();
        Self {
            menu,
            source,
            _delegate: delegate,
            json,
        }
    }

    fn reload(&mut self, config: &AppConfig) {
        self.source = Rc::new(ConfigSource::new(config));
        self.menu.set_data_source(&self.source);
        self.menu.set_config(config.menu);
        self.menu.layout_if_needed();
    }

    fn print(&self) -> anyhow::Result<()> {
        let report = LayoutReport::capture(&self.menu);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("{}", report);
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config_path = config::resolve_config_path(cli.config)?;

    match cli.command {
        Commands::Layout {
            width,
            height,
            drags,
            tap,
            json,
            watch,
        } => layout(config_path, Size::new(width, height), &drags, tap, json, watch),
        Commands::InitConfig => {
            config::write_default_config(&config_path)?;
            println!("{}", config_path.display());
            Ok(())
        }
        Commands::Show => show(config_path),
    }
}

fn layout(
    config_path: PathBuf,
    size: Size,
    drags: &[f64],
    tap: Option<usize>,
    json: bool,
    watch: bool,
) -> anyhow::Result<()> {
    let config = config::load_or_default(&config_path);
    let (tx, rx) = async_channel::unbounded();
    let mut headless = Headless::new(&config, size, tx.clone(), json);

    for &dx in drags {
        let outcome = report::replay_drag(&mut headless.menu, dx);
        log::info!("drag {}: {:?}", dx, outcome);
    }
    if let Some(index) = tap
        && !headless.menu.tap(index)
    {
        log::warn!("Item {} is not tappable", index);
    }
    headless.print()?;

    if !watch {
        while let Ok(event) = rx.try_recv() {
            print_event(&headless, &event);
        }
        return Ok(());
    }

    runtime::start_background_services(config_path.clone(), tx);
    while let Ok(event) = rx.recv_blocking() {
        match event {
            AppEvent::ConfigReload => match config::load_config(&config_path) {
                Ok(new_config) => {
                    headless.reload(&new_config);
                    log::info!("Configuration reloaded");
                    headless.print()?;
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
            other => print_event(&headless, &other),
        }
    }
    Ok(())
}

fn print_event(headless: &Headless, event: &AppEvent) {
    if let AppEvent::ItemSelected(index) = event {
        let label = headless
            .source
            .label(*index)
            .map(ItemLabel::to_string)
            .unwrap_or_default();
        println!("selected [{}] {}", index, label);
    }
}

#[cfg(feature = "gtk")]
fn show(config_path: PathBuf) -> anyhow::Result<()> {
    let config = config::load_or_default(&config_path);
    arcmenu_app::gui::run(config, config_path);
    Ok(())
}

#[cfg(not(feature = "gtk"))]
fn show(_config_path: PathBuf) -> anyhow::Result<()> {
    anyhow::bail!("arcmenu was built without the `gtk` feature; rebuild with `--features gtk`")
}
