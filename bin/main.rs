use anyhow::{bail, Context};
use log::info;

use mazer::{draw_path, parse_img, solve};

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let print = args.iter().any(|a| a == "--print");
    let json = args.iter().any(|a| a == "--json");
    let mut paths = args.iter().filter(|a| !a.starts_with('-'));

    let Some(input) = paths.next() else {
        bail!("usage: mazer <image> [output] [--print | --json]");
    };

    let img = image::open(input).with_context(|| format!("failed to open {}", input))?;
    let grid = parse_img(&img)?;
    info!("parsed {}x{} grid", grid.columns, grid.rows);

    let result = solve(&grid)?;
    info!(
        "found path of cost {} through {} nodes",
        result.total_cost,
        result.path.len()
    );

    if json {
        println!("{}", serde_json::to_string(&result.path)?);
    } else if print {
        for p in &result.path {
            println!("{} {}", p.col, p.row);
        }
    } else {
        let output = paths.next().map(String::as_str).unwrap_or("result.png");
        draw_path(&img, &result.path)
            .save(output)
            .with_context(|| format!("failed to save {}", output))?;
        info!("saved overlay to {}", output);
    }

    Ok(())
}
