use clap::{Parser, Subcommand};

#[derive(clap::Args, Debug)]
pub struct SphereArgs {
    /// Number of subdivision passes applied to the icosahedron.
    #[arg(short = 'n', long, default_value_t = 0)]
    pub subdivisions: u32,
}

#[derive(clap::Args, Debug)]
pub struct BufferArgs {
    #[command(flatten)]
    pub sphere: SphereArgs,

    /// Output path for the raw little-endian f32 vertex buffer.
    #[arg(short, long)]
    pub output: String,
}

#[derive(clap::Args, Debug)]
pub struct DirectionsArgs {
    #[command(flatten)]
    pub sphere: SphereArgs,

    /// Output path. Writes to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print vertex, facet and edge statistics for a sphere.
    Stats(SphereArgs),
    /// Write the flattened render vertices of a sphere.
    Buffer(BufferArgs),
    /// Print the azimuth and elevation of every vertex, in degrees.
    Directions(DirectionsArgs),
}
