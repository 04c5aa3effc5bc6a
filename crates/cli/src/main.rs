use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use points::{clip_segment, Block, CartesianPoint, ClipError, Coordinates, PolarPoint, Rounding};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod parse;

use parse::parse_components;

#[derive(Parser)]
#[command(name = "points-cli")]
#[command(about = "Point conversion, block and viewport clipping utilities")]
struct Cmd {
    /// Log every clipping step and conversion
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Clip the segment FROM-TO to a viewport (Cohen–Sutherland)
    Clip {
        /// Viewport block: 1, 2 or 4 comma-separated numbers
        #[arg(long, default_value = "0,0,100,100", allow_hyphen_values = true)]
        viewport: String,
        #[arg(long, allow_hyphen_values = true)]
        from: String,
        #[arg(long, allow_hyphen_values = true)]
        to: String,
    },
    /// Convert a Cartesian point "x,y[,z]" to polar
    Polar {
        #[arg(long, allow_hyphen_values = true)]
        point: String,
    },
    /// Convert a polar point "rho,theta[,phi]" to Cartesian
    Cartesian {
        #[arg(long, allow_hyphen_values = true)]
        point: String,
        /// Round to this many decimal places
        #[arg(long)]
        digits: Option<u32>,
        /// Round to integers
        #[arg(long, conflicts_with = "digits")]
        int: bool,
    },
    /// Normalize a block and print its center and size
    Block {
        #[arg(long, allow_hyphen_values = true)]
        bounds: String,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::TRACE } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    let out = match cmd.action {
        Action::Clip { viewport, from, to } => clip(&viewport, &from, &to)?,
        Action::Polar { point } => polar(&point)?,
        Action::Cartesian { point, digits, int } => {
            let rounding = match (digits, int) {
                (Some(n), _) => Some(Rounding::places(n)),
                (None, true) => Some(Rounding::integer()),
                (None, false) => None,
            };
            cartesian(&point, rounding)?
        }
        Action::Block { bounds } => block(&bounds)?,
    };
    println!("{out}");
    Ok(())
}

fn clip(viewport: &str, from: &str, to: &str) -> Result<String> {
    let viewport: Block = viewport
        .parse()
        .with_context(|| format!("viewport {viewport:?}"))?;
    let first = CartesianPoint::new(parse_components(from)?);
    let second = CartesianPoint::new(parse_components(to)?);
    tracing::info!(%viewport, %first, %second, "clip");
    match clip_segment(&viewport, &first, &second) {
        Ok(segment) => Ok(segment.to_string()),
        Err(ClipError::Outside { .. }) => Ok("outside".to_string()),
        Err(e) => Err(e.into()),
    }
}

fn polar(point: &str) -> Result<String> {
    let cp = CartesianPoint::new(parse_components(point)?);
    let pp = PolarPoint::as_polar(&cp).with_context(|| format!("point {point:?}"))?;
    Ok(pp.to_string())
}

fn cartesian(point: &str, rounding: Option<Rounding>) -> Result<String> {
    let pp = PolarPoint::new(parse_components(point)?);
    let out = match rounding {
        Some(r) => pp.as_cartesian_with(r).map(|p| p.to_string()),
        None => pp.as_cartesian().map(|p| p.to_string()),
    };
    out.with_context(|| format!("point {point:?}"))
}

fn block(bounds: &str) -> Result<String> {
    let b: Block = bounds.parse().with_context(|| format!("block {bounds:?}"))?;
    Ok(format!("block: {b}\ncenter: {}\nsize: {}", b.center(), b.size()))
}
