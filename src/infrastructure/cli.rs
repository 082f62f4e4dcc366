use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        value_parser = parse_rate,
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        value_parser = parse_rate,
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(long, conflicts_with = "light", help = "Start with the dark theme")]
    pub dark: bool,

    #[arg(long, help = "Start with the light theme")]
    pub light: bool,

    #[arg(short, long, value_name = "TEXT", help = "Initial search text")]
    pub search: Option<String>,
}

/// Rates are turned into intervals, so they must be finite and above zero
fn parse_rate(value: &str) -> Result<f64, String> {
    let rate: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(format!("`{value}` must be a positive number"))
    }
}

impl Cli {
    /// Theme requested on the command line, if any
    pub fn dark_theme(&self) -> Option<bool> {
        match (self.dark, self.light) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
