use std::path::PathBuf;

use emu8::constants::CLOCK_SPEED;

const USAGE: &str = "usage: chip8 <rom> [--scale N] [--speed HZ]";

/// Runtime settings for the runner, taken from the command line.
#[derive(Debug, PartialEq)]
pub struct Config {
    pub rom: PathBuf,
    /// Window pixels per Chip-8 pixel
    pub scale: u32,
    /// Nanoseconds per CPU cycle
    pub cycle_nanos: u64,
}

impl Config {
    /// Parses arguments, not including the program name.
    pub fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut rom = None;
        let mut scale = 10;
        let mut cycle_nanos = CLOCK_SPEED;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--scale" => scale = parse_value(&arg, args.next())?,
                "--speed" => {
                    let hz: u64 = parse_value(&arg, args.next())?;
                    if hz == 0 {
                        return Err("--speed must be above 0".to_string());
                    }
                    cycle_nanos = 1_000_000_000 / hz;
                }
                flag if flag.starts_with("--") => {
                    return Err(format!("unknown flag {}\n{}", flag, USAGE))
                }
                _ if rom.is_none() => rom = Some(PathBuf::from(arg)),
                _ => return Err(format!("unexpected argument {}\n{}", arg, USAGE)),
            }
        }

        Ok(Config {
            rom: rom.ok_or_else(|| format!("expected a ROM file path\n{}", USAGE))?,
            scale,
            cycle_nanos,
        })
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{} needs a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("{} got an invalid value {}", flag, value))
}
