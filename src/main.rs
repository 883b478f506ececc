mod camera;
mod image;
mod light;
mod parse;
mod ray;
mod renderer;
mod scene;
mod shading;
mod surface;
mod timer;

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
    process,
};

use clap::{App, Arg, ErrorKind};
use tracing_subscriber::EnvFilter;

use crate::{parse::parse_scene, renderer::Renderer, timer::Stopwatch};

const VERSION: &str = env!("CARGO_PKG_VERSION");

//----------------------------------------------------------------

fn main() {
    let mut stopwatch = Stopwatch::start();

    // Parse command line arguments.
    let args = App::new("spherecast")
        .version(VERSION)
        .about("Ray casts a scene of spheres into an ASCII PPM image")
        .arg(
            Arg::with_name("INPUT")
                .help("Scene description file to render")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .help("Path of the PPM image to write")
                .required(true)
                .index(2),
        )
        .get_matches_safe();

    let args = match args {
        Ok(args) => args,
        Err(e) => match e.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => e.exit(),
            // Bad usage is reported but isn't a failure.
            _ => {
                eprintln!("{}", e.message);
                return;
            }
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Both are required positionals, so clap guarantees they're present.
    let input_path = Path::new(args.value_of("INPUT").unwrap_or_default());
    let output_path = Path::new(args.value_of("OUTPUT").unwrap_or_default());

    // Load the scene.
    let contents = match fs::read_to_string(input_path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::error!("Couldn't read '{}': {}", input_path.display(), e);
            process::exit(1);
        }
    };
    let scene = match parse_scene(&contents) {
        Ok(scene) => scene,
        Err(e) => {
            tracing::error!(
                "Couldn't parse '{}': {}",
                input_path.display(),
                e.describe(&contents)
            );
            process::exit(1);
        }
    };
    tracing::info!(
        "Parsed '{}' in {}: {} spheres, {} lights",
        input_path.display(),
        stopwatch.lap(),
        scene.spheres.len(),
        scene.world.ambient_lights.len() + scene.world.diffuse_lights.len()
    );
    tracing::debug!("\n{}", scene);

    // Opened up front so an unwritable path fails before any rendering.
    let file = match File::create(output_path) {
        Ok(file) => file,
        Err(e) => {
            tracing::error!("Couldn't create '{}': {}", output_path.display(), e);
            process::exit(1);
        }
    };

    // Render.
    let image = Renderer::new(&scene, num_cpus::get()).render();
    tracing::info!(
        "Rendered {}x{} in {}",
        image.width(),
        image.height(),
        stopwatch.lap()
    );

    // Write the image.
    let mut out = BufWriter::new(file);
    if let Err(e) = image.write_ascii_ppm(&mut out).and_then(|_| out.flush()) {
        tracing::error!("Couldn't write '{}': {}", output_path.display(), e);
        process::exit(1);
    }
    tracing::info!(
        "Wrote '{}' in {} ({} total)",
        output_path.display(),
        stopwatch.lap(),
        stopwatch.total()
    );
}
