//! Scrolls a long list in the terminal with an animated vertical scrollbar.
//!
//! Keys: Up/Down scroll a line, PageUp/PageDown a page, h toggles a
//! horizontal bar, q or Esc quits. Logs go to `scrollbar.log`.

use std::fs::File;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{self, Print, ResetColor, SetBackgroundColor};
use crossterm::{cursor, execute, queue, terminal};
use simplelog::{Config, LevelFilter, WriteLogger};

use scrollbar::{
    Canvas, Color, Easing, Extent, Orientation, Padding, Part, Scrollbar, ScrollbarStyle,
    TransitionConfig,
};

const LINES: usize = 240;
const BACKDROP: (u8, u8, u8) = (24, 24, 32);

fn main() -> io::Result<()> {
    let log_file = File::create("scrollbar.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut stdout);

    execute!(stdout, ResetColor, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut io::Stdout) -> io::Result<()> {
    let mut canvas = Canvas::new();
    let style = ScrollbarStyle::new()
        .thickness(1.0)
        .track_padding(Padding::new(0.0, 0.0, 1.0, 1.0))
        .track_color(Color::rgb(60, 60, 80))
        .thumb_color(Color::rgb(140, 170, 255));
    let mut bar = Scrollbar::new(canvas.clone(), style);

    let (width, height) = terminal::size()?;
    let mut container = Extent::new(width as f32, height as f32);
    let mut orientation = Orientation::Vertical;
    bar.on_container_resize(container);
    bar.initialize(LINES as f32, viewport(container, orientation), 0.0, orientation);

    let animated = TransitionConfig::millis(180, Easing::EaseOut);
    let mut position = 0.0_f32;

    loop {
        canvas.tick();
        draw(stdout, &canvas, &bar, container)?;

        let timeout = if canvas.has_running_animations() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(500)
        };
        if !event::poll(timeout)? {
            continue;
        }

        let page = viewport(container, orientation);
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up | KeyCode::Left => position -= 1.0,
                KeyCode::Down | KeyCode::Right => position += 1.0,
                KeyCode::PageUp => position -= page,
                KeyCode::PageDown => position += page,
                KeyCode::Char('h') => {
                    orientation = match orientation {
                        Orientation::Vertical => Orientation::Horizontal,
                        Orientation::Horizontal => Orientation::Vertical,
                    };
                    let length = viewport(container, orientation);
                    bar.initialize(LINES as f32, length, 0.0, orientation);
                    position = 0.0;
                    continue;
                }
                _ => continue,
            },
            Event::Resize(width, height) => {
                container = Extent::new(width as f32, height as f32);
                bar.on_container_resize(container);
                if let Err(e) = bar.update(
                    LINES as f32,
                    viewport(container, orientation),
                    position,
                    animated,
                ) {
                    log::error!("resize update failed: {}", e);
                }
                continue;
            }
            _ => continue,
        }

        position = position.clamp(0.0, (LINES as f32 - page).max(0.0));
        bar.scroll_to(position, animated);
    }
}

fn viewport(container: Extent, orientation: Orientation) -> f32 {
    match orientation {
        Orientation::Vertical => container.height,
        Orientation::Horizontal => container.width,
    }
}

/// Absolute cell rectangle of a part, resolved from its anchor.
fn cells(canvas: &Canvas, part: Part, container: Extent) -> (i32, i32, i32, i32) {
    let (fx, fy) = canvas.anchor(part).factors();
    let size = canvas.size(part);
    let position = canvas.position(part);
    let x = container.width * fx + position.x - size.width * fx;
    let y = container.height * fy + position.y - size.height * fy;
    (
        x.round() as i32,
        y.round() as i32,
        size.width.round() as i32,
        size.height.round() as i32,
    )
}

/// Blend a part's color over the backdrop by its alpha and opacity.
fn blended(canvas: &Canvas, part: Part) -> style::Color {
    let color = canvas.background(part);
    let weight = color.alpha() * canvas.opacity(part);
    let rgb = color.to_rgb();
    let mix = |c: u8, b: u8| (b as f32 + (c as f32 - b as f32) * weight).round() as u8;
    style::Color::Rgb {
        r: mix(rgb.r, BACKDROP.0),
        g: mix(rgb.g, BACKDROP.1),
        b: mix(rgb.b, BACKDROP.2),
    }
}

fn draw(
    stdout: &mut io::Stdout,
    canvas: &Canvas,
    bar: &Scrollbar<Canvas>,
    container: Extent,
) -> io::Result<()> {
    let (width, height) = (container.width as u16, container.height as u16);
    let first = bar.animated_scroll_position().round() as usize;
    let backdrop = style::Color::Rgb {
        r: BACKDROP.0,
        g: BACKDROP.1,
        b: BACKDROP.2,
    };

    for row in 0..height {
        let text = match bar.orientation() {
            Some(Orientation::Horizontal) => format!("{:>width$}", row, width = first + 4),
            _ => format!("line {}", first + row as usize),
        };
        let text: String = text.chars().take(width as usize).collect();
        queue!(
            stdout,
            cursor::MoveTo(0, row),
            SetBackgroundColor(backdrop),
            Print(format!("{:<width$}", text, width = width as usize))
        )?;
    }

    for part in [Part::Track, Part::Thumb] {
        let (x, y, w, h) = cells(canvas, part, container);
        let color = blended(canvas, part);
        for row in y.max(0)..(y + h).min(height as i32) {
            for col in x.max(0)..(x + w).min(width as i32) {
                queue!(
                    stdout,
                    cursor::MoveTo(col as u16, row as u16),
                    SetBackgroundColor(color),
                    Print(" ")
                )?;
            }
        }
    }

    queue!(stdout, ResetColor)?;
    stdout.flush()
}
