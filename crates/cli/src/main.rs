use clap::Parser;
use geodesic_mesh::{geodesic_sphere, SphereConfig, TriangleMesh};

mod args;
mod buffer;
mod directions;

use args::{Args, Commands, SphereArgs};

fn build_sphere(args: &SphereArgs) -> TriangleMesh {
    let config = SphereConfig {
        subdivisions: args.subdivisions,
    };
    log::info!("generating sphere with {} subdivisions", config.subdivisions);
    geodesic_sphere(&config)
}

fn stats_command(args: SphereArgs) {
    let stats = build_sphere(&args).stats();
    println!("vertices:           {}", stats.vertices);
    println!("triangles:          {}", stats.triangles);
    println!("edges:              {}", stats.edges);
    println!("distinct positions: {}", stats.distinct_positions);
    println!(
        "edge angle:         {:.4} - {:.4} deg (ratio {:.4})",
        stats.min_edge_angle,
        stats.max_edge_angle,
        stats.edge_ratio()
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    match args.command {
        Commands::Stats(args) => stats_command(args),
        Commands::Buffer(args) => buffer::buffer_command(args)?,
        Commands::Directions(args) => directions::directions_command(args)?,
    }
    Ok(())
}
