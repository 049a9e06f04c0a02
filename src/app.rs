use crate::consts;
use crate::game::{Direction, Game};
use crate::input::KeyTracker;
use crate::options::Options;
use anyhow::{anyhow, bail, Context};
use crossterm::event::{
    poll, read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Instant;

/// The interactive loop: one shared state record driven by three periodic
/// activities, mirroring the classic update/input/repaint cadence.
///
/// - an update thread advances the game every [`TICK_PERIOD`][consts::TICK_PERIOD]
/// - an input thread samples the key tracker every [`FRAME_PERIOD`][consts::FRAME_PERIOD]
///   and steers the snake
/// - the main thread redraws every `FRAME_PERIOD`, draining terminal events
///   into the tracker between frames
///
/// Shutdown is cooperative: the quit keys clear `running`, every loop polls
/// it, and the main thread joins the workers before returning.
#[derive(Debug)]
pub(crate) struct App {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    game: Mutex<Game>,
    keys: Mutex<KeyTracker>,
    running: AtomicBool,
}

impl App {
    pub(crate) fn new(options: Options) -> App {
        App {
            shared: Arc::new(Shared {
                game: Mutex::new(Game::new(options.surface)),
                keys: Mutex::new(KeyTracker::new()),
                running: AtomicBool::new(true),
            }),
        }
    }

    pub(crate) fn run<B: Backend>(self, mut terminal: Terminal<B>) -> anyhow::Result<()> {
        // Key-release reporting needs the kitty keyboard protocol; without
        // it held keys are tracked from presses alone.
        let enhanced = crossterm::terminal::supports_keyboard_enhancement().unwrap_or(false);
        if enhanced {
            execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .context("failed to enable key-release reporting")?;
        }
        let update = thread::spawn({
            let shared = Arc::clone(&self.shared);
            move || update_loop(&shared)
        });
        let input = thread::spawn({
            let shared = Arc::clone(&self.shared);
            move || input_loop(&shared)
        });
        let r = self.repaint_loop(&mut terminal);
        self.shared.running.store(false, Ordering::Release);
        let joined = update.join().and(input.join());
        if enhanced {
            let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
        }
        r?;
        if joined.is_err() {
            bail!("a worker thread panicked");
        }
        Ok(())
    }

    /// The repaint task: draw the current game snapshot once per frame and
    /// feed any terminal events that arrive in between into the key tracker.
    fn repaint_loop<B: Backend>(&self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        while self.shared.running.load(Ordering::Acquire) {
            let deadline = Instant::now() + consts::FRAME_PERIOD;
            {
                let game = self
                    .shared
                    .game
                    .lock()
                    .map_err(|_| anyhow!("game state lock poisoned"))?;
                terminal.draw(|frame| game.draw(frame))?;
            }
            loop {
                let wait = deadline.saturating_duration_since(Instant::now());
                if wait.is_zero() || !poll(wait)? {
                    break;
                }
                self.handle_event(read()?);
            }
        }
        Ok(())
    }

    fn handle_event(&self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        match key.kind {
            KeyEventKind::Press if is_quit(&key) => {
                self.shared.running.store(false, Ordering::Release);
            }
            KeyEventKind::Press => {
                if let Ok(mut keys) = self.shared.keys.lock() {
                    keys.press(key.code);
                }
            }
            KeyEventKind::Release => {
                if let Ok(mut keys) = self.shared.keys.lock() {
                    keys.release(key.code);
                }
            }
            // a repeat of a held key changes nothing
            KeyEventKind::Repeat => (),
        }
    }
}

/// The update task: advance the simulation one tick per period
fn update_loop(shared: &Shared) {
    while shared.running.load(Ordering::Acquire) {
        match shared.game.lock() {
            Ok(mut game) => game.tick(),
            Err(_) => break,
        }
        thread::sleep(consts::TICK_PERIOD);
    }
}

/// The input task: steer along the most recently pressed held key
fn input_loop(shared: &Shared) {
    while shared.running.load(Ordering::Acquire) {
        let key = match shared.keys.lock() {
            Ok(keys) => keys.last(),
            Err(_) => break,
        };
        if let Some(direction) = key.and_then(Direction::from_key) {
            match shared.game.lock() {
                Ok(mut game) => game.steer(direction),
                Err(_) => break,
            }
        }
        thread::sleep(consts::FRAME_PERIOD);
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(
        (key.modifiers, key.code),
        (KeyModifiers::CONTROL, KeyCode::Char('c'))
            | (KeyModifiers::NONE, KeyCode::Esc | KeyCode::Char('q'))
    )
}
