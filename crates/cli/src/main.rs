use anyhow::Result;
use clap::{Parser, Subcommand};
use figures::api::{info, Circle, Color, Figure, FigureError, Rectangle, Shape, Triangle};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "figures-cli")]
#[command(about = "Describe triangles, circles and rectangles")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Triangle from three side lengths
    Triangle {
        #[arg(long)]
        color: Color,
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
    },
    /// Circle from its radius
    Circle {
        #[arg(long)]
        color: Color,
        #[arg(allow_negative_numbers = true)]
        radius: f64,
    },
    /// Rectangle from width and height
    Rectangle {
        #[arg(long)]
        color: Color,
        #[arg(allow_negative_numbers = true)]
        width: f64,
        #[arg(allow_negative_numbers = true)]
        height: f64,
    },
    /// Print library version and known tags as JSON
    Report,
}

/// Static facts about this build, printed by `report`.
#[derive(Debug, Serialize)]
struct Report {
    figures_version: &'static str,
    shapes: Vec<&'static str>,
    colors: Vec<&'static str>,
}

impl Report {
    fn current() -> Self {
        Self {
            figures_version: figures::VERSION,
            shapes: Shape::ALL.iter().map(|s| s.as_str()).collect(),
            colors: Color::ALL.iter().map(|c| c.as_str()).collect(),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Report => report(),
        action => {
            println!("{}", describe(action)?);
            Ok(())
        }
    }
}

/// Construct the figure named by `action` and render its `info` line.
fn describe(action: Action) -> Result<String> {
    let line = match action {
        Action::Triangle { color, a, b, c } => {
            tracing::info!(%color, a, b, c, "triangle");
            summarize(Shape::Triangle, Triangle::new(color, a, b, c))?
        }
        Action::Circle { color, radius } => {
            tracing::info!(%color, radius, "circle");
            summarize(Shape::Circle, Circle::new(color, radius))?
        }
        Action::Rectangle {
            color,
            width,
            height,
        } => {
            tracing::info!(%color, width, height, "rectangle");
            summarize(Shape::Rectangle, Rectangle::new(color, width, height))?
        }
        Action::Report => anyhow::bail!("report has no figure to describe"),
    };
    Ok(line)
}

fn summarize<F: Figure>(shape: Shape, built: Result<F, FigureError>) -> Result<String> {
    let figure = built.map_err(|err| {
        tracing::warn!(%shape, %err, "invalid_figure");
        err
    })?;
    tracing::info!(%shape, area = figure.area(), "area");
    Ok(info(&figure))
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&Report::current())?);
    Ok(())
}
