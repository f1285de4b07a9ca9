#![cfg_attr(feature = "nightly", feature(test))]

#[cfg(feature = "nightly")]
extern crate test;

#[cfg(all(feature = "nightly", test))]
mod bench {
    use orrery::{
        gravity::{Compute, Energy, Gravity},
        ics::{Params, SystemGenerator},
        sim::Engine,
        sys::BodySet,
    };
    use rand::{rngs::StdRng, SeedableRng};
    use test::Bencher;

    const N: usize = 256;

    fn init_body_set(nplanets: usize, seed: u8) -> BodySet {
        let mut rng = StdRng::from_seed([seed; 32]);
        let params = Params {
            random_phase: true,
            ..Default::default()
        };
        SystemGenerator::new(params)
            .create(2, nplanets, &mut rng)
            .unwrap()
    }

    #[bench]
    fn accelerations(b: &mut Bencher) {
        let psys = init_body_set(N, 0);
        let gravity = Gravity::default();
        b.iter(|| gravity.accelerations(psys.bodies()));
    }

    #[bench]
    fn accelerations_small(b: &mut Bencher) {
        let psys = init_body_set(8, 1);
        let gravity = Gravity::default();
        b.iter(|| gravity.accelerations(psys.bodies()));
    }

    #[bench]
    fn energies(b: &mut Bencher) {
        let psys = init_body_set(N, 2);
        let kernel = Energy::new(Gravity::DEFAULT_MIN_DISTANCE);
        b.iter(|| kernel.compute(psys.bodies()));
    }

    #[bench]
    fn tick(b: &mut Bencher) {
        let psys = init_body_set(N, 3);
        let mut engine = Engine::new(psys).unwrap();
        b.iter(|| engine.tick(3600.0).unwrap());
    }
}

// -- end of file --
