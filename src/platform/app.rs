//! Host that ties the simulation to its collaborators
//!
//! Input arrives whenever the platform delivers it and is queued; the queue
//! is applied at the start of the next frame so a tick never sees a half
//! applied command.

use super::{FrameScheduler, Renderer, ScoreSink};
use crate::sim::{GameEvent, GamePhase, GameState, RandomSource, TickInput, Viewport, tick};

pub struct App<R, S, V, K> {
    pub state: GameState,
    rng: R,
    scheduler: S,
    renderer: V,
    score_sink: K,
    pending: TickInput,
    autoplay: bool,
}

impl<R, S, V, K> App<R, S, V, K>
where
    R: RandomSource,
    S: FrameScheduler,
    V: Renderer,
    K: ScoreSink,
{
    /// Take ownership of a session and register the frame loop
    pub fn new(state: GameState, rng: R, scheduler: S, renderer: V, score_sink: K) -> Self {
        let mut app = Self {
            state,
            rng,
            scheduler,
            renderer,
            score_sink,
            pending: TickInput::default(),
            autoplay: false,
        };
        app.renderer.draw(&app.state);
        app.scheduler.start();
        app
    }

    /// The one player action (tap, click, space, touch).
    ///
    /// After a miss the loop is stopped, so this restarts right away instead
    /// of waiting for a frame.
    pub fn press(&mut self) {
        if self.state.phase == GamePhase::Over {
            self.restart();
        } else {
            self.pending.place = true;
        }
    }

    /// Start over from any phase
    pub fn restart(&mut self) {
        self.pending = TickInput::default();
        self.state.reset();
        self.flush_events();
        self.renderer.draw(&self.state);
        self.scheduler.start();
    }

    pub fn set_autoplay(&mut self, on: bool) {
        self.autoplay = on;
    }

    /// Viewport changed; redraw at the new geometry
    pub fn resize(&mut self, viewport: Viewport) {
        if self.state.resize(viewport) {
            self.flush_events();
            self.renderer.draw(&self.state);
        }
    }

    /// One animation frame. Returns false when the loop is not registered.
    pub fn frame(&mut self) -> bool {
        if !self.scheduler.is_running() {
            return false;
        }

        let mut input = std::mem::take(&mut self.pending);
        input.autoplay = self.autoplay;
        tick(&mut self.state, &input, &mut self.rng);

        self.renderer.draw(&self.state);
        self.flush_events();

        if self.state.phase == GamePhase::Over {
            self.scheduler.stop();
        }
        true
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn renderer(&self) -> &V {
        &self.renderer
    }

    pub fn score_sink(&self) -> &K {
        &self.score_sink
    }

    fn flush_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Placed { score, .. } => self.score_sink.score_changed(score),
                GameEvent::Reset => self.score_sink.score_changed(0),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{HeadlessScheduler, LogScoreSink, NullRenderer, VertexRenderer};
    use crate::sim::{SequenceSource, seeded};

    type TestApp = App<SequenceSource, HeadlessScheduler, VertexRenderer, LogScoreSink>;

    fn app() -> TestApp {
        App::new(
            GameState::default(),
            SequenceSource::constant(0.5),
            HeadlessScheduler::default(),
            VertexRenderer::default(),
            LogScoreSink::default(),
        )
    }

    fn line_up(app: &mut TestApp) {
        let x = app.state.landing_block().unwrap().x;
        app.state.blocks.last_mut().unwrap().x = x;
    }

    #[test]
    fn test_new_registers_loop_and_draws() {
        let app = app();
        assert!(app.scheduler().is_running());
        assert_eq!(app.scheduler().starts, 1);
        assert!(!app.renderer().vertices.is_empty());
    }

    #[test]
    fn test_press_is_applied_on_next_frame() {
        let mut app = app();
        app.press();
        assert_eq!(app.state.phase, GamePhase::Idle);
        assert!(app.frame());
        assert_eq!(app.state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_landing_reports_score() {
        let mut app = app();
        app.press();
        app.frame();
        line_up(&mut app);
        app.press();
        app.frame();
        assert_eq!(app.state.score, 1);
        assert_eq!(app.score_sink().last, Some(1));
    }

    #[test]
    fn test_miss_stops_loop_and_press_restarts() {
        let mut app = app();
        app.press();
        app.frame();
        app.state.blocks.last_mut().unwrap().x = 390.0;
        app.press();
        assert!(app.frame());

        assert_eq!(app.state.phase, GamePhase::Over);
        assert!(!app.scheduler().is_running());
        assert_eq!(app.scheduler().stops, 1);
        assert!(!app.frame());

        app.press();
        assert_eq!(app.state.phase, GamePhase::Idle);
        assert!(app.scheduler().is_running());
        assert_eq!(app.scheduler().starts, 2);
        assert_eq!(app.score_sink().last, Some(0));
        assert_eq!(app.state.blocks.len(), 1);
    }

    #[test]
    fn test_resize_keeps_score() {
        let mut app = app();
        app.press();
        app.frame();
        line_up(&mut app);
        app.press();
        app.frame();
        app.resize(Viewport::new(800.0, 600.0));
        assert_eq!(app.state.score, 1);
        assert_eq!(app.state.blocks[0].width, 320.0);
    }

    #[test]
    fn test_autoplay_runs_unattended() {
        let mut app = App::new(
            GameState::default(),
            seeded(5),
            HeadlessScheduler::default(),
            NullRenderer,
            LogScoreSink::default(),
        );
        app.set_autoplay(true);
        for _ in 0..1500 {
            app.frame();
        }
        assert!(app.state.score > 0);
        assert_eq!(app.score_sink().last, Some(app.state.score));
    }
}
