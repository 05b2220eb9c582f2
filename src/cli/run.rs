use std::io::Write;

use tracing::{debug, info};

use crate::cli::{Cli, Commands};
use crate::context::errors::SpecError;
use crate::fp::shape::{self, Shape};
use crate::oop;
use crate::utils::{factorial, repeat};

/// Executes a parsed command line, writing results to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), RunError> {
    match &cli.command {
        Commands::Factorial { n } => {
            debug!(n, "factorial");
            writeln!(out, "{}", factorial(*n))?;
        }
        Commands::Repeat { s, count } => {
            debug!(s = s.as_str(), count, "repeat");
            writeln!(out, "{}", repeat(s, *count))?;
        }
        Commands::Shape { specs } => {
            let shapes = specs
                .iter()
                .map(|spec| spec.parse::<Shape>())
                .collect::<Result<Vec<_>, SpecError>>()?;
            info!(count = shapes.len(), "describing shapes");
            write_shapes(&shapes, out)?;
        }
        Commands::Demo => {
            writeln!(out, "factorial(5) = {}", factorial(5))?;
            writeln!(out, "repeat(\"a\", 5) = {}", repeat("a", 5))?;
            write_shapes(&shape::demo(), out)?;
            let dyn_total = oop::shape::total_area(&oop::shape::demo());
            debug!(total = dyn_total, "dynamic dispatch total");
        }
    }
    Ok(())
}

fn write_shapes<W: Write>(shapes: &[Shape], out: &mut W) -> Result<(), RunError> {
    for s in shapes {
        debug!(kind = shape::kind(s), "shape");
        writeln!(out, "{}", s)?;
    }
    writeln!(out, "total area={:.6}", shape::total_area(shapes))?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Spec(#[from] SpecError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
