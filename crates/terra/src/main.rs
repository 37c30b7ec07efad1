mod app;
mod haptics;
mod input;
mod logging;
mod notify;
mod placement;
mod scene;
mod ui;

use std::io::{Write, stdout};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use rand::{SeedableRng, rngs::StdRng};
use terra_anim::SystemClock;
use terra_config::Config;

use crate::app::App;
use crate::haptics::TerminalBell;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    logging::init(config.log_filter()?)?;

    // Bind the scene before taking over the terminal so layout errors print plainly.
    let app = App::new(
        config,
        SystemClock::new(),
        Box::new(TerminalBell),
        StdRng::from_os_rng(),
    )?
    .with_config_path(Config::path().ok());

    let terminal = ratatui::init();
    let result = with_mouse_capture(&mut stdout(), || app.run(terminal));
    ratatui::restore();
    result
}

/// Run `body` with mouse capture enabled on `out`. Capture is released even
/// when enabling it or `body` fails; the first error is returned.
fn with_mouse_capture<W: Write>(
    out: &mut W,
    body: impl FnOnce() -> color_eyre::Result<()>,
) -> color_eyre::Result<()> {
    let result = execute!(out, EnableMouseCapture)
        .map_err(Into::into)
        .and_then(|()| body());
    let released = execute!(out, DisableMouseCapture);
    result?;
    released?;
    Ok(())
}
