use tidy_common::config::Config;
use tidy_core::shapes::{Circle, Shape, Square, Triangle};

use crate::commands::ShapeKind;
use crate::terminal::print;

pub fn area(kind: ShapeKind, dimensions: &[f64], cfg: &Config) -> anyhow::Result<()> {
    let shape: Box<dyn Shape> = build_shape(kind, dimensions)?;
    if cfg.quiet < 2 {
        print::aligned_line("Shape", shape.name(), cfg.quiet);
    }
    print::aligned_line("Area", format!("{:.4}", shape.area()), cfg.quiet);
    Ok(())
}

fn build_shape(kind: ShapeKind, dimensions: &[f64]) -> anyhow::Result<Box<dyn Shape>> {
    let shape: Box<dyn Shape> = match (kind, dimensions) {
        (ShapeKind::Circle, [radius]) => Box::new(Circle::new(*radius)?),
        (ShapeKind::Square, [side]) => Box::new(Square::new(*side)?),
        (ShapeKind::Triangle, [base, height]) => Box::new(Triangle::new(*base, *height)?),
        (ShapeKind::Triangle, _) => anyhow::bail!("a triangle needs a base and a height"),
        (_, _) => anyhow::bail!("{kind:?} takes exactly one dimension"),
    };
    Ok(shape)
}
