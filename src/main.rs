use clap::Parser;
use std::path::PathBuf;
use tabfeed::{FeedError, FeedLayout, FeedHost, Rect, Scenario, parse_region};

/// Lays out a New Tab Page feed scenario and prints the item frames.
#[derive(Parser, Debug)]
#[command(name = "tabfeed", version, about)]
struct Cli {
    /// Scenario JSON file.
    scenario: PathBuf,

    /// Only report items visible in this region, given as x,y,width,height.
    #[arg(long, value_parser = parse_region)]
    region: Option<Rect>,

    /// Print the layout as JSON.
    #[arg(long)]
    json: bool,

    /// Swap the surface's width and height before laying out.
    #[arg(long)]
    rotate: bool,
}

fn main() -> Result<(), FeedError> {
    env_logger::init();
    let cli = Cli::parse();

    let scenario = Scenario::from_file(&cli.scenario)?;
    let name = scenario.name.clone();
    let mut host = scenario.into_host();
    if cli.rotate {
        let rotated = host.surface().map(|s| s.rotated());
        host.set_surface(rotated);
    }

    let layout = match cli.region {
        Some(region) => host.layout_region(region),
        None => host.layout_pass(),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        print_layout(&host, &layout, name.as_deref());
    }
    Ok(())
}

fn print_layout(host: &FeedHost, layout: &FeedLayout, name: Option<&str>) {
    if let Some(name) = name {
        println!("{name}");
    }
    for placed in &layout.frames {
        let template = host
            .cell(placed.item)
            .map(|cell| cell.template.to_string())
            .unwrap_or_default();
        let f = placed.frame;
        println!(
            "{:<8} {:<16} x={:<8.2} y={:<8.2} w={:<8.2} h={:.2}",
            placed.item.to_string(),
            template,
            f.x,
            f.y,
            f.width,
            f.height
        );
    }
    println!(
        "content extent: {:.2} x {:.2}",
        layout.content_extent.width, layout.content_extent.height
    );
    if let Some(gap) = &layout.gap {
        println!(
            "gap section {}: {:.2} -> {:.2} (shift {:.2})",
            gap.section, gap.natural_height, gap.height, gap.shift
        );
    }
    for warning in &layout.degradations {
        eprintln!("warning: {warning}");
    }
}
