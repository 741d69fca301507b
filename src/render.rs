//! Terminal renderer
//!
//! Draws the world into the alternate screen with crossterm. Simulation
//! coordinates are world units; one character cell covers `CELL_W` x `CELL_H`
//! units, so the playfield keeps roughly square proportions despite tall
//! glyphs. The renderer is stateless apart from the current terminal size.

use std::io::Write;

use crossterm::{
    cursor,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use crate::consts::*;
use crate::highscores::HighScores;
use crate::sim::{GameState, Platform, PlatformKind, RunPhase, Viewport};

/// World units covered by one character cell
pub const CELL_W: f32 = 8.0;
pub const CELL_H: f32 = 16.0;

/// Simulation viewport for a terminal of the given size
pub fn viewport_for(cols: u16, rows: u16) -> Viewport {
    Viewport {
        w: cols as f32 * CELL_W,
        h: rows as f32 * CELL_H,
    }
}

fn platform_style(kind: PlatformKind) -> (char, Color) {
    match kind {
        PlatformKind::Normal => ('=', Color::Green),
        PlatformKind::Moving => ('~', Color::Cyan),
        PlatformKind::Spring => ('^', Color::Yellow),
    }
}

pub struct Renderer {
    cols: u16,
    rows: u16,
    show_fps: bool,
}

impl Renderer {
    pub fn new(cols: u16, rows: u16, show_fps: bool) -> Self {
        Self {
            cols,
            rows,
            show_fps,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    pub fn viewport(&self) -> Viewport {
        viewport_for(self.cols, self.rows)
    }

    /// Draw one frame. Runs every frame regardless of phase, so pause and
    /// game-over overlays stay on screen.
    pub fn draw(
        &self,
        out: &mut impl Write,
        state: &GameState,
        scores: &HighScores,
        frame_ms: f32,
    ) -> std::io::Result<()> {
        queue!(out, terminal::Clear(ClearType::All))?;

        for platform in &state.platforms {
            self.draw_platform(out, platform, state.camera.y)?;
        }
        self.draw_player(out, state)?;
        self.draw_status(out, state, scores, frame_ms)?;

        match state.phase {
            RunPhase::Idle => self.draw_center(
                out,
                &["S K Y H O P", "", "enter: start   q: quit"],
            )?,
            RunPhase::Paused => self.draw_center(out, &["PAUSED", "", "p: resume"])?,
            RunPhase::GameOver => {
                let score_line = format!("final score: {}", state.score);
                // The run's entry is already on the board by the time this draws
                let rank = scores
                    .entries
                    .iter()
                    .position(|e| e.score == state.score)
                    .map(|i| i + 1);
                let rank_line = match rank {
                    Some(rank) => format!("leaderboard rank #{rank}"),
                    None => String::new(),
                };
                self.draw_center(
                    out,
                    &[
                        "GAME OVER",
                        "",
                        &score_line,
                        &rank_line,
                        "",
                        "enter: play again   q: quit",
                    ],
                )?;
            }
            RunPhase::Running => {}
        }

        out.flush()
    }

    fn draw_platform(
        &self,
        out: &mut impl Write,
        platform: &Platform,
        camera_y: f32,
    ) -> std::io::Result<()> {
        let row = (platform.pos.y - camera_y) / CELL_H;
        if row < 0.0 || row >= self.rows as f32 {
            return Ok(());
        }
        let col = (platform.left() / CELL_W).max(0.0) as u16;
        if col >= self.cols {
            return Ok(());
        }
        let width = (PLATFORM_W / CELL_W) as u16;
        let width = width.min(self.cols - col) as usize;

        let (glyph, color) = platform_style(platform.kind);
        let body: String = std::iter::repeat(glyph).take(width).collect();
        queue!(
            out,
            cursor::MoveTo(col, row as u16),
            SetForegroundColor(color),
            Print(body),
            ResetColor
        )
    }

    fn draw_player(&self, out: &mut impl Write, state: &GameState) -> std::io::Result<()> {
        let row = state.player_screen_y() / CELL_H;
        let col = state.player.pos.x / CELL_W;
        if row < 0.0 || row >= self.rows as f32 || col < 0.0 || col >= self.cols as f32 {
            return Ok(());
        }
        queue!(
            out,
            cursor::MoveTo(col as u16, row as u16),
            SetForegroundColor(Color::White),
            Print('@'),
            ResetColor
        )
    }

    fn draw_status(
        &self,
        out: &mut impl Write,
        state: &GameState,
        scores: &HighScores,
        frame_ms: f32,
    ) -> std::io::Result<()> {
        let mut line = format!(" SCORE {:>6}", state.score);
        if let Some(top) = scores.top_score() {
            line.push_str(&format!("   BEST {top:>6}"));
        }
        if self.show_fps {
            line.push_str(&format!("   {frame_ms:>5.1} ms"));
        }
        queue!(out, cursor::MoveTo(0, 0), Print(line))
    }

    fn draw_center(&self, out: &mut impl Write, lines: &[&str]) -> std::io::Result<()> {
        let top = (self.rows / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let col = (self.cols / 2).saturating_sub(line.len() as u16 / 2);
            queue!(
                out,
                cursor::MoveTo(col, top + i as u16),
                Print(*line)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[test]
    fn viewport_scales_with_cell_size() {
        let viewport = viewport_for(60, 50);
        assert_eq!(viewport.w, 480.0);
        assert_eq!(viewport.h, 800.0);
    }

    #[test]
    fn platform_styles_are_distinct() {
        let styles = [
            platform_style(PlatformKind::Normal),
            platform_style(PlatformKind::Moving),
            platform_style(PlatformKind::Spring),
        ];
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a.0, b.0);
            }
        }
    }

    #[test]
    fn idle_frame_renders_into_any_writer() {
        let renderer = Renderer::new(60, 50, false);
        let state = GameState::new(1, renderer.viewport());
        let scores = HighScores::new();
        let mut buf: Vec<u8> = Vec::new();
        renderer.draw(&mut buf, &state, &scores, 16.0).unwrap();
        let text = String::from_utf8_lossy(&buf);
        assert!(text.contains("S K Y H O P"));
        assert!(text.contains("SCORE"));
    }

    #[test]
    fn game_over_frame_shows_final_score() {
        let renderer = Renderer::new(60, 50, false);
        let mut state = GameState::new(1, renderer.viewport());
        state.start();
        state.score = 1234;
        state.phase = RunPhase::GameOver;
        let mut buf: Vec<u8> = Vec::new();
        renderer
            .draw(&mut buf, &state, &HighScores::new(), 16.0)
            .unwrap();
        let text = String::from_utf8_lossy(&buf);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("1234"));
    }

    #[test]
    fn offscreen_platforms_are_skipped() {
        let renderer = Renderer::new(60, 50, false);
        let platform = Platform::new(100.0, -5_000.0);
        let mut buf: Vec<u8> = Vec::new();
        renderer.draw_platform(&mut buf, &platform, 0.0).unwrap();
        assert!(buf.is_empty());
    }
}
