//! Sky Hop entry point
//!
//! Sets up the terminal, then runs the frame loop: pump input, advance the
//! simulation with the measured frame time, play the tick's sounds, draw.

use std::io::{Write, stdout};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    execute, terminal,
};

use skyhop::audio::{AudioManager, SoundEffect};
use skyhop::highscores::HighScores;
use skyhop::input::InputState;
use skyhop::render::{CELL_W, Renderer};
use skyhop::settings::Settings;
use skyhop::sim::{GameEvent, GameState, RunPhase, frame_delta, tick};

/// Frame pacing target, matching the simulation's reference tick
const FRAME: Duration = Duration::from_millis(16);

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Seed from `--seed N`, falling back to the wall clock
fn seed_from_args() -> u64 {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--seed" {
            if let Some(value) = args.next().and_then(|v| v.parse().ok()) {
                return value;
            }
            log::warn!("--seed requires an integer, using wall clock");
        }
    }
    now_millis()
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let seed = seed_from_args();
    log::info!("Sky Hop starting with seed {seed}");

    let mut out = stdout();
    terminal::enable_raw_mode()?;
    execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        EnableMouseCapture
    )?;

    let result = run(&mut out, seed);

    execute!(
        out,
        DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;
    result
}

fn run(out: &mut impl Write, seed: u64) -> std::io::Result<()> {
    let mut settings = Settings::load();
    let mut scores = HighScores::load();

    let mut audio = AudioManager::new();
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);
    audio.set_muted(settings.muted);

    let (cols, rows) = terminal::size()?;
    let mut renderer = Renderer::new(cols, rows, settings.show_fps);
    let mut state = GameState::new(seed, renderer.viewport());
    let mut input = InputState::new();
    let mut events: Vec<GameEvent> = Vec::new();

    let mut last = Instant::now();
    let mut quit = false;

    while !quit {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => quit = true,
                    KeyCode::Enter | KeyCode::Char('s') => state.start(),
                    KeyCode::Char('p') => state.toggle_pause(),
                    KeyCode::Char('r') => {
                        state.reset();
                        state.start();
                    }
                    KeyCode::Char('m') => {
                        let muted = !audio.muted();
                        audio.set_muted(muted);
                        settings.muted = muted;
                    }
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('z') => input.press_jump(),
                    KeyCode::Left | KeyCode::Char('a') => input.press_left(),
                    KeyCode::Right | KeyCode::Char('d') => input.press_right(),
                    _ => {}
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Down(_) | MouseEventKind::Drag(_) => {
                        let x = (mouse.column as f32 + 0.5) * CELL_W;
                        input.pointer_down(x, state.viewport.w);
                    }
                    MouseEventKind::Up(_) => input.pointer_up(),
                    _ => {}
                },
                Event::Resize(cols, rows) => {
                    renderer.resize(cols, rows);
                    state.viewport = renderer.viewport();
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let frame_ms = now.duration_since(last).as_secs_f32() * 1000.0;
        last = now;

        let tick_input = input.sample();
        tick(&mut state, &tick_input, frame_delta(frame_ms), &mut events);
        audio.dispatch(&events);

        if events.contains(&GameEvent::GameOver) {
            log::info!("Run over at score {} after {} ticks", state.score, state.time_ticks);
            if scores.add_score(state.score, state.time_ticks, now_millis()).is_some() {
                audio.play(SoundEffect::HighScore);
                scores.save();
            }
        }

        renderer.draw(out, &state, &scores, frame_ms)?;

        if state.phase == RunPhase::Paused {
            // A paused game does not need 60 Hz redraws
            std::thread::sleep(FRAME * 3);
        } else if let Some(rest) = FRAME.checked_sub(last.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    settings.save();
    Ok(())
}
