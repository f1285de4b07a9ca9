use orrery::config::RunConfig;
use orrery::ics::{Catalog, SystemGenerator};
use orrery::sim::{trail_plane_au, Simulation};
use orrery::sys::BodySet;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::{rngs::StdRng, SeedableRng};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[derive(ValueEnum, Debug, Copy, Clone)]
enum Preset {
    Solar,
    SunEarth,
}

impl From<Preset> for Catalog {
    fn from(p: Preset) -> Self {
        match p {
            Preset::Solar => Catalog::SolarSystem,
            Preset::SunEarth => Catalog::SunEarth,
        }
    }
}

/// Run a gravitational system in real time and dump its orbit trails.
#[derive(Parser, Debug)]
struct Args {
    /// Use a fixed body set instead of a random one
    #[arg(long, value_enum)]
    catalog: Option<Preset>,
    #[arg(long, default_value_t = 1)]
    stars: usize,
    #[arg(long, default_value_t = 4)]
    planets: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 60)]
    fps: u32,
    #[arg(long, default_value_t = 10)]
    days_per_second: u32,
    /// Trail decimation in ticks (default: 5% of fps)
    #[arg(long)]
    sample_every: Option<u32>,
    /// Wall-clock run time
    #[arg(long, default_value_t = 5.0)]
    seconds: f64,
    /// Trail output, one `body x_au z_au` line per sample
    #[arg(long, default_value = "trails.txt")]
    out: PathBuf,
}

fn build(args: &Args) -> Result<BodySet> {
    if let Some(preset) = args.catalog {
        return Ok(SystemGenerator::create_catalog(preset.into()));
    }
    let mut rng = StdRng::seed_from_u64(args.seed);
    let psys = SystemGenerator::default().create(args.stars, args.planets, &mut rng)?;
    Ok(psys)
}

fn summary(label: &str, psys: &BodySet) {
    let (ke, pe) = psys.energies();
    eprintln!(
        "{}: ke: {:e} pe: {:e} te: {:e} momentum: {:?}",
        label,
        ke,
        pe,
        ke + pe,
        psys.momentum()
    );
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let psys = build(&args)?;
    summary("start", &psys);

    let mut config = RunConfig::new(args.fps, args.days_per_second);
    config.sample_every = args.sample_every;

    let mut sim = Simulation::new(psys)?;
    sim.start(&config)?;
    thread::sleep(Duration::from_secs_f64(args.seconds.max(0.0)));
    sim.stop();
    let counter = sim.join()?;
    eprintln!(
        "ticks: {} overruns: {} encounters: {}",
        counter.ticks, counter.overruns, counter.encounters
    );
    if let Some(engine) = sim.engine() {
        summary("end", engine.bodies());
    }

    let frame = sim.frame();
    let trails = sim.trails();
    let file = File::create(&args.out).with_context(|| format!("creating {:?}", args.out))?;
    let mut writer = BufWriter::new(file);
    for (body, trail) in frame.bodies.iter().zip(trails.iter()) {
        let name = body.name.as_deref().unwrap_or("-");
        for (x, z) in trail_plane_au(trail) {
            writeln!(&mut writer, "{} {} {}", name.replace(' ', "_"), x, z)?;
        }
    }
    writer.flush()?;

    #[cfg(feature = "serde1")]
    {
        let path = args.out.with_extension("bin");
        let file = File::create(&path).with_context(|| format!("creating {:?}", path))?;
        bincode::serialize_into(BufWriter::new(file), &(&*frame, &trails))?;
    }

    Ok(())
}

// -- end of file --
