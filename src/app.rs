use color_eyre::eyre::Result;

use crate::{
    config::Config,
    core::{
        raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain, update::update,
    },
    presentation::components::Components,
    tui,
};

/// Runner that drives the Elm core from terminal events.
pub struct App {
    pub config: Config,
    pub tick_rate: f64,
    pub frame_rate: f64,
    state: AppState,
    components: Components,
}

impl App {
    pub fn new(tick_rate: f64, frame_rate: f64) -> Result<Self> {
        let config = Config::new()?;
        let state = AppState::new(config.clone());
        Ok(Self {
            config,
            tick_rate,
            frame_rate,
            state,
            components: Components::new(),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Translate one raw message and fold the resulting domain messages
    /// into the state.
    fn dispatch(&mut self, raw: RawMsg) {
        if !raw.is_frequent() {
            log::debug!("{raw:?}");
        }
        let msgs = translate_raw_to_domain(raw, &self.state);
        for msg in msgs {
            let state = std::mem::take(&mut self.state);
            self.state = update(msg, state);
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = tui::Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;

        loop {
            if let Some(e) = tui.next().await {
                match e {
                    tui::Event::Quit => self.dispatch(RawMsg::Quit),
                    tui::Event::Tick => self.dispatch(RawMsg::Tick),
                    tui::Event::Key(key) => self.dispatch(RawMsg::Key(key)),
                    tui::Event::Error => {
                        self.dispatch(RawMsg::Error("terminal event stream failed".into()));
                    }
                    tui::Event::Resize(_, _) => {
                        // draw() autoresizes the fullscreen viewport
                        self.draw(&mut tui)?;
                    }
                    tui::Event::Render => self.draw(&mut tui)?,
                    _ => {}
                }
            }

            if self.state.system.should_suspend {
                tui.suspend()?;
                self.dispatch(RawMsg::Resume);
                tui = tui::Tui::new()?
                    .tick_rate(self.tick_rate)
                    .frame_rate(self.frame_rate);
                tui.enter()?;
            } else if self.state.system.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    fn draw(&mut self, tui: &mut tui::Tui) -> Result<()> {
        tui.draw(|f| {
            self.components.render(f, &self.state);
        })?;
        Ok(())
    }
}
