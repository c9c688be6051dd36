use std::fs::File;
use std::io::BufReader;
use std::time::{Duration, Instant};

use log::{debug, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use display::Display;
use emu8::constants::TIMER_HZ;
use emu8::Chip8;

use crate::config::Config;
use crate::keymap::keymap;

pub fn run(config: Config) -> Result<(), String> {
    let mut chip8: Chip8 = Chip8::new();

    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init()?;
    let mut display: Display = Display::new(&sdl, config.scale)?;
    let mut events = sdl.event_pump()?;

    // Load ROM
    let file = File::open(&config.rom)
        .map_err(|e| format!("unable to open {}: {}", config.rom.display(), e))?;
    let mut reader = BufReader::new(file);
    let size = chip8.load_rom(&mut reader).map_err(|e| e.to_string())?;
    info!("loaded {} ({} bytes)", config.rom.display(), size);

    // Set initial timing
    let cycle_time = Duration::from_nanos(config.cycle_nanos);
    let timer_period = Duration::from_nanos(1_000_000_000 / TIMER_HZ);
    let mut last_cycle = Instant::now();
    let mut last_tick = Instant::now();

    // Whether or not the configured clock speed should be respected
    let mut fast_forward = false;
    // Whether the game's state should be cycled forwards or backwards
    let mut rewind = false;
    let mut buzzing = false;

    'event: loop {
        // If the draw flag is set, unset it and render the current frame
        if let Some(frame) = chip8.frame() {
            display.render(frame)?;
            chip8.clear_draw_flag();
        }

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Escape, _) => rewind = true,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    (Keycode::Escape, _) => rewind = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        if rewind {
            chip8.rewind();
            last_tick = Instant::now();
        } else {
            chip8.step().map_err(|e| e.to_string())?;
            while last_tick.elapsed() >= timer_period {
                chip8.tick_timers();
                last_tick += timer_period;
            }
        }

        if chip8.sound_active() != buzzing {
            buzzing = !buzzing;
            debug!("buzzer {}", if buzzing { "on" } else { "off" });
        }

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if !fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    Ok(())
}
