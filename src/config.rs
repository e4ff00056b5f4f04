use clap::{ArgAction, Parser};

use crate::{
    generators::FIXED_SEED,
    renderers::{Fill, Format},
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Maze width and height must be greater than 0.")]
    ZeroDimension,
}

/// Validated settings for one maze run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub format: Format,
    pub fill: Fill,
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Config {
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        Ok(Config {
            width,
            height,
            format: Format::default(),
            fill: Fill::default(),
            seed: None,
        })
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Option words accepted after the dimensions, in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opt {
    Ascii,
    Block,
    DebugSets,
    DebugRows,
    NoRandom,
}

impl Opt {
    /// Unknown words give `None`.
    pub fn from_word(word: &str) -> Option<Opt> {
        match word {
            "a" => Some(Opt::Ascii),
            "b" => Some(Opt::Block),
            "ds" => Some(Opt::DebugSets),
            "dr" => Some(Opt::DebugRows),
            "r" => Some(Opt::NoRandom),
            _ => None,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "eller-maze",
    version,
    about = "Generate a perfect maze of any size with Eller's algorithm"
)]
pub struct Cli {
    /// Maze width in cells
    pub width: usize,
    /// Maze height in cells
    pub height: usize,
    /// Options: a (ASCII maze, default), b (block maze), ds (show set
    /// labels), dr (show raw passage bitmasks), r (fixed seed). Unknown words
    /// are ignored.
    pub options: Vec<String>,
    /// Generate from this seed instead of a random one
    #[arg(long)]
    pub seed: Option<u64>,
    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl TryFrom<&Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        let mut config = Config::new(cli.width, cli.height)?.with_seed(cli.seed);
        for word in &cli.options {
            let Some(opt) = Opt::from_word(word) else {
                tracing::warn!("[config] ignoring unknown option {:?}", word);
                continue;
            };
            match opt {
                Opt::Ascii => config.format = Format::Ascii,
                Opt::Block => config.format = Format::Block,
                Opt::DebugSets => config.fill = Fill::Sets,
                Opt::DebugRows if config.fill == Fill::Blank => config.fill = Fill::Bits,
                Opt::DebugRows => {}
                Opt::NoRandom => config.seed = config.seed.or(Some(FIXED_SEED)),
            }
        }
        Ok(config)
    }
}
