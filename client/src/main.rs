use std::{io, time::Duration};

use anyhow::Context;
use colored::Colorize;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{self, Clear, ClearType},
};
use liblife::{render, rule::Preset, sim};
use strum::IntoEnumIterator;

use config::Config;

mod config;
mod seed;

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    println!("{}", "Choose conditions:".bold());
    for (key, preset) in ('A'..).zip(Preset::iter()) {
        println!("{key}: {preset}");
    }

    let rule = read_preset_choice()
        .context("Couldn't read rule choice")?
        .rule();

    let grid = seed::random_start_grid(
        config.rows,
        config.cols,
        config.min_alive..=config.max_alive,
    );

    clear_screen()?;
    render::print(write_line, &grid, 0, None::<fn()>);

    println!("{}", "Press Enter To Begin".bold());
    wait_for_enter()?;

    let frame_delay = Duration::from_millis(config.frame_delay_ms);
    sim::run(
        &grid,
        config.iterations,
        |alive, live_neighbors| rule.apply(alive, live_neighbors),
        |next, generation| {
            render::print(
                write_line,
                next,
                generation,
                Some(|| {
                    let _ = clear_screen();
                }),
            )
        },
        Some(|| spin_sleep::sleep(frame_delay)),
    );

    wait_for_enter()?;
    Ok(())
}

fn write_line(line: &str) {
    println!("{line}");
}

fn clear_screen() -> anyhow::Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    Ok(())
}

fn wait_for_enter() -> anyhow::Result<()> {
    io::stdin()
        .read_line(&mut String::new())
        .context("Couldn't read stdin")?;
    Ok(())
}

fn read_preset_choice() -> anyhow::Result<Preset> {
    terminal::enable_raw_mode().context("Couldn't enter raw mode")?;
    let key = read_key_press();
    terminal::disable_raw_mode().context("Couldn't leave raw mode")?;
    println!();

    Ok(preset_for_key(key?))
}

fn read_key_press() -> anyhow::Result<char> {
    loop {
        if let Event::Key(key) = event::read().context("Couldn't read key event")? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            return Ok(match key.code {
                KeyCode::Char(ch) => ch,
                // Any non-letter key falls back to the default preset.
                _ => '\0',
            });
        }
    }
}

fn preset_for_key(key: char) -> Preset {
    ('a'..)
        .zip(Preset::iter())
        .find_map(|(menu_key, preset)| (menu_key == key.to_ascii_lowercase()).then_some(preset))
        .unwrap_or_default()
}
