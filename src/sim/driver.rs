//! Real-time driver.
//!
//! One worker thread owns the [`Engine`] while running and ticks it at a fixed
//! wall-clock cadence. Simulated time advances by exactly `dt` per tick; ticks
//! that overrun their budget are not replayed, so wall-clock and simulated
//! time may drift apart under load.
//!
//! Readers on other threads see whole ticks only: each tick publishes a fresh
//! immutable [`Frame`], and orbit trails are appended under their own lock.

use super::{AdamsBashforth, Engine, Frame, Integrator};
use crate::{
    config::RunConfig,
    consts::AU,
    error::{Error, Result},
    gravity::Gravity,
    real::Real,
    sys::BodySet,
    types::Vector3,
};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, PoisonError, RwLock,
    },
    thread::{self, JoinHandle},
    time::Instant,
};

/// Work done by one run of the worker.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Counter {
    pub ticks: u64,
    /// Ticks that took longer than the frame budget
    pub overruns: u64,
    /// Clamped close encounters
    pub encounters: u64,
}

#[derive(Debug)]
struct Shared {
    running: AtomicBool,
    frame: RwLock<Arc<Frame>>,
    trails: RwLock<Vec<Vec<Vector3>>>,
}

impl Shared {
    fn publish(&self, frame: Frame) {
        let frame = Arc::new(frame);
        *self.frame.write().unwrap_or_else(PoisonError::into_inner) = frame;
    }

    fn sample(&self, psys: &BodySet) {
        let mut trails = self.trails.write().unwrap_or_else(PoisonError::into_inner);
        for (trail, b) in trails.iter_mut().zip(psys.iter()) {
            trail.push(b.pos());
        }
    }
}

type Worker<I> = JoinHandle<(Engine<I>, Result<Counter>)>;

/// A body set together with its trails, running flag and worker.
pub struct Simulation<I: Integrator = AdamsBashforth> {
    shared: Arc<Shared>,
    engine: Option<Engine<I>>,
    worker: Option<Worker<I>>,
    len: usize,
}

impl Simulation<AdamsBashforth> {
    pub fn new<B: Into<BodySet>>(bodies: B) -> Result<Self> {
        Ok(Self::with_engine(Engine::new(bodies.into())?))
    }

    pub fn with_gravity<B: Into<BodySet>>(bodies: B, gravity: Gravity) -> Result<Self> {
        Ok(Self::with_engine(Engine::with_parts(
            bodies.into(),
            gravity,
            AdamsBashforth,
        )?))
    }
}

impl<I: Integrator + Send + 'static> Simulation<I> {
    pub fn with_engine(engine: Engine<I>) -> Self {
        let len = engine.bodies().len();
        let shared = Shared {
            running: AtomicBool::new(false),
            frame: RwLock::new(Arc::new(engine.frame())),
            trails: RwLock::new(vec![Vec::new(); len]),
        };
        Simulation {
            shared: Arc::new(shared),
            engine: Some(engine),
            worker: None,
            len,
        }
    }

    /// Spawn the worker and tick until [`stop`](Self::stop) (or `max_ticks`).
    pub fn start(&mut self, config: &RunConfig) -> Result<()> {
        config.validate()?;
        if self.is_running() {
            return Err(Error::AlreadyRunning);
        }
        // reclaim the engine of a run that ended by itself
        if self.worker.is_some() {
            self.wait()?;
        }
        let engine = self.engine.take().ok_or(Error::WorkerPanicked)?;
        let dt = config.dt();
        if let Err(err) = engine.check(dt) {
            self.engine = Some(engine);
            return Err(err);
        }

        log::info!(
            "starting {} bodies: {} fps, dt = {} s, trail every {} ticks",
            self.len,
            config.frames_per_second,
            dt,
            config.decimation()
        );
        self.shared.running.store(true, Ordering::Release);
        let shared = Arc::clone(&self.shared);
        let config = config.clone();
        self.worker = Some(thread::spawn(move || {
            let mut engine = engine;
            let res = run(&mut engine, &shared, &config);
            shared.running.store(false, Ordering::Release);
            (engine, res)
        }));
        Ok(())
    }

    /// Ask the worker to finish after its current tick.
    pub fn stop(&self) {
        self.shared.running.store(false, Ordering::Release);
    }

    /// Stop and wait for the worker. The engine is kept, so the simulation can
    /// be started again with the same time-step.
    pub fn join(&mut self) -> Result<Counter> {
        self.stop();
        self.wait()
    }

    /// Wait for the worker without stopping it, e.g. for a run bounded by
    /// `max_ticks`. Blocks until someone calls [`stop`](Self::stop) otherwise.
    pub fn wait(&mut self) -> Result<Counter> {
        let worker = match self.worker.take() {
            Some(worker) => worker,
            None => return Ok(Counter::default()),
        };
        let (engine, res) = worker.join().map_err(|_| Error::WorkerPanicked)?;
        self.engine = Some(engine);
        match &res {
            Ok(counter) => log::info!(
                "stopped after {} ticks ({} overruns, {} close encounters)",
                counter.ticks,
                counter.overruns,
                counter.encounters
            ),
            Err(err) => log::warn!("worker failed: {}", err),
        }
        res
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::Acquire)
            && self.worker.as_ref().map_or(false, |w| !w.is_finished())
    }

    /// Latest published snapshot.
    pub fn frame(&self) -> Arc<Frame> {
        let frame = self.shared.frame.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&frame)
    }

    /// Copy of every orbit trail, in body order.
    pub fn trails(&self) -> Vec<Vec<Vector3>> {
        self.shared
            .trails
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn trail(&self, i: usize) -> Option<Vec<Vector3>> {
        self.shared
            .trails
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(i)
            .cloned()
    }

    pub fn clear_trails(&self) {
        self.shared
            .trails
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .iter_mut()
            .for_each(Vec::clear);
    }

    /// The engine, unless a worker currently owns it.
    pub fn engine(&self) -> Option<&Engine<I>> {
        self.engine.as_ref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<I: Integrator> Drop for Simulation<I> {
    fn drop(&mut self) {
        self.shared.running.store(false, Ordering::Release);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::warn!("worker panicked");
            }
        }
    }
}

fn run<I: Integrator>(
    engine: &mut Engine<I>,
    shared: &Shared,
    config: &RunConfig,
) -> Result<Counter> {
    let dt = config.dt();
    let budget = config.frame_budget();
    let nskip = u64::from(config.decimation());

    let mut counter = Counter::default();
    while shared.running.load(Ordering::Acquire) {
        let timer = Instant::now();

        counter.encounters += engine.tick(dt)? as u64;
        counter.ticks += 1;
        if engine.ticks() % nskip == 0 {
            shared.sample(engine.bodies());
        }
        shared.publish(engine.frame());

        if config.max_ticks.map_or(false, |n| counter.ticks >= n) {
            break;
        }

        let elapsed = timer.elapsed();
        if elapsed < budget {
            thread::sleep(budget - elapsed);
        } else if elapsed > budget {
            counter.overruns += 1;
            log::trace!("tick {} overran by {:?}", engine.ticks(), elapsed - budget);
        }
    }
    Ok(counter)
}

/// Project a trail onto the orbital (x, z) plane, in astronomical units.
pub fn trail_plane_au(trail: &[Vector3]) -> Vec<(Real, Real)> {
    trail.iter().map(|r| (r.x / AU, r.z / AU)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        consts::DAY,
        ics::{Catalog, SystemGenerator},
    };
    use std::time::Duration;

    fn solar() -> Simulation {
        Simulation::new(SystemGenerator::create_catalog(Catalog::SolarSystem)).unwrap()
    }

    #[test]
    fn trails_are_decimated() {
        let mut sim = solar();
        assert_eq!(sim.trails().len(), sim.len());

        let cfg = RunConfig::new(1000, 1).with_sample_every(10).with_max_ticks(95);
        sim.start(&cfg).unwrap();
        let counter = sim.wait().unwrap();

        assert_eq!(counter.ticks, 95);
        assert!(!sim.is_running());
        let trails = sim.trails();
        assert_eq!(trails.len(), 5);
        assert!(trails.iter().all(|t| t.len() == 9));
        assert_eq!(sim.frame().tick, 95);
        assert_eq!(sim.engine().unwrap().ticks(), 95);
        // the last sample was taken at tick 90, after which the planets moved on
        assert_ne!(trails[3][8], sim.frame().bodies[3].pos);
    }

    #[test]
    fn stop_is_cooperative() {
        let mut sim = solar();
        sim.start(&RunConfig::new(200, 1)).unwrap();
        assert!(sim.is_running());
        assert_eq!(sim.start(&RunConfig::new(200, 1)), Err(Error::AlreadyRunning));

        thread::sleep(Duration::from_millis(50));
        sim.stop();
        let counter = sim.join().unwrap();
        assert!(counter.ticks > 0);
        assert!(!sim.is_running());

        let frame = sim.frame();
        assert_eq!(frame.tick, counter.ticks);
        assert_eq!(frame.time, counter.ticks as Real * DAY / 200.0);
    }

    #[test]
    fn restart_keeps_step_size() {
        let mut sim = solar();
        sim.start(&RunConfig::new(1000, 2).with_max_ticks(5)).unwrap();
        sim.wait().unwrap();

        let err = sim.start(&RunConfig::new(1000, 1)).unwrap_err();
        assert!(matches!(err, Error::StepSizeChanged { .. }));
        assert!(sim.engine().is_some());

        sim.start(&RunConfig::new(1000, 2).with_max_ticks(5)).unwrap();
        sim.wait().unwrap();
        assert_eq!(sim.frame().tick, 10);
    }

    #[test]
    fn run_ending_by_itself_can_be_restarted() {
        let mut sim = solar();
        let cfg = RunConfig::new(1000, 1).with_max_ticks(3);
        sim.start(&cfg).unwrap();
        while sim.is_running() {
            thread::sleep(Duration::from_millis(1));
        }
        sim.start(&cfg).unwrap();
        sim.wait().unwrap();
        assert_eq!(sim.engine().unwrap().ticks(), 6);
    }

    #[test]
    fn rejects_bad_config() {
        let mut sim = solar();
        assert!(matches!(
            sim.start(&RunConfig::new(0, 1)),
            Err(Error::InvalidConfig(_))
        ));
        assert!(!sim.is_running());
        assert!(sim.engine().is_some());
    }

    #[test]
    fn clear_trails_keeps_cardinality() {
        let mut sim = solar();
        sim.start(&RunConfig::new(1000, 1).with_sample_every(1).with_max_ticks(4))
            .unwrap();
        sim.wait().unwrap();
        assert!(sim.trails().iter().all(|t| t.len() == 4));
        sim.clear_trails();
        let trails = sim.trails();
        assert_eq!(trails.len(), sim.len());
        assert!(trails.iter().all(Vec::is_empty));
        assert_eq!(sim.trail(9), None);
    }

    #[test]
    fn bounded_run_finishes_by_itself() {
        let mut sim = solar();
        assert_eq!(sim.wait(), Ok(Counter::default()));

        sim.start(&RunConfig::new(1000, 1).with_max_ticks(20)).unwrap();
        let counter = sim.wait().unwrap();
        assert_eq!(counter.ticks, 20);
        assert_eq!(sim.frame().tick, 20);
        assert_eq!(sim.engine().unwrap().bodies()[0].locked_dt(), Some(DAY / 1000.0));
    }

    #[test]
    fn custom_clamp_distance() {
        let gravity = Gravity::new(1.0e6).unwrap();
        let mut sim =
            Simulation::with_gravity(SystemGenerator::create_catalog(Catalog::SunEarth), gravity)
                .unwrap();
        assert_eq!(sim.engine().unwrap().gravity().min_distance(), 1.0e6);
        assert_eq!(sim.len(), 2);

        sim.start(&RunConfig::new(1000, 1).with_max_ticks(3)).unwrap();
        assert_eq!(sim.wait().unwrap().ticks, 3);
        assert!(matches!(
            Simulation::with_gravity(BodySet::new(), Gravity::default()),
            Err(Error::EmptySystem)
        ));
    }

    #[test]
    fn plane_projection() {
        let trail = vec![Vector3::new(AU, 5.0, -2.0 * AU)];
        assert_eq!(trail_plane_au(&trail), vec![(1.0, -2.0)]);
    }
}

// -- end of file --
