//! Shapes command - show the catalog

use crate::cli::context::CommandContext;
use crate::cli::style::Stylize;
use anstream::println;
use truckload::catalog::Shape;
use truckload::types::ROW_DELIMITER;

/// Run the shapes command
pub fn run_shapes(ctx: &CommandContext, name: Option<&str>) {
    match name {
        Some(name) => match ctx.catalog.find(name) {
            Some(shape) => print_shape(shape),
            None => println!("{}", format!("No shape named '{name}'").muted()),
        },
        None => {
            if ctx.catalog.shapes().is_empty() {
                println!("{}", "Catalog is empty".muted());
            }
            for shape in ctx.catalog.shapes() {
                print_shape(shape);
            }
        }
    }
}

fn print_shape(shape: &Shape) {
    println!("{} {}", "Name:".emphasis(), shape.name.accent());
    println!("{}", "Form:".emphasis());
    for row in shape.form.split(ROW_DELIMITER) {
        println!("{row}");
    }
    println!("{} {}", "Symbol:".emphasis(), shape.symbol);
    println!();
}
