mod calculator;
mod ui;

use clap::Parser;
use gpui::{AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions, px, size};
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::ui::CalculatorView;

/// A small four-function desktop calculator built with GPUI.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(move |cx| {
        gpui_component::init(cx);

        let bounds = Bounds::centered(None, size(px(320.0), px(460.0)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("Calculator".into()),
                ..Default::default()
            }),
            window_min_size: Some(size(px(260.0), px(380.0))),
            ..Default::default()
        };

        let window = cx.open_window(options, |window, cx| {
            let view = cx.new(|cx| CalculatorView::new(window, cx));
            cx.new(|cx| gpui_component::Root::new(Into::<gpui::AnyView>::into(view), window, cx))
        });

        if let Err(error) = window {
            error!(%error, "failed to open calculator window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "zcalc=debug" } else { "zcalc=info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}
