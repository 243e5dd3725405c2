extern crate env_logger;
extern crate failure;
#[macro_use]
extern crate log;
extern crate racetrack;

use std::path::Path;

use failure::Error;
use racetrack::{load_track, run, Offset, Track};

// Seconds per step of the simulation.
const TIME_STEP: f32 = 1. / 60.;
const STEPS: usize = 60 * 120;

const PLAYER_SPEED: f32 = 150.;
// How far to the side the player swerves, as a fraction of the road width.
const SWERVE: f32 = 0.6;
// Height of the vehicle above the road.
const RIDE_HEIGHT: f32 = 2.9;

const CONVOY_SPEED: f32 = 100.;
const CONVOY_SPACING: [f32; 6] = [0., 800., 1800., 3000., 4800., 5200.];

/// Something going round a track, counting the laps it finishes.
struct Driver {
    name: String,
    distance: f32,
    speed: f32,
    lap: i64,
}

impl Driver {
    fn new(name: &str, distance: f32, speed: f32, track: &Track) -> Driver {
        Driver {
            name: name.to_owned(),
            distance,
            speed,
            lap: track.current_lap(distance),
        }
    }

    fn advance(&mut self, track: &Track, dt: f32) {
        self.distance += self.speed * dt;
        let lap = track.current_lap(self.distance);
        if lap != self.lap {
            info!("{} started lap {} on '{}'.", self.name, lap, track.name());
            self.lap = lap;
        }
    }
}

fn drive(player_track: &Track, convoy_track: &Track) -> Result<(), Error> {
    let mut player = Driver::new("player", 0., PLAYER_SPEED, player_track);
    let mut convoy: Vec<Driver> = CONVOY_SPACING
        .iter()
        .enumerate()
        .map(|(i, &spacing)| {
            let name = format!("convoy {}", i);
            Driver::new(&name, spacing, CONVOY_SPEED, convoy_track)
        })
        .collect();

    let swerve = SWERVE * player_track.width();
    let mut skipped = 0;
    for step in 0..STEPS {
        let time = step as f32 * TIME_STEP;
        player.advance(player_track, TIME_STEP);
        let lateral = player_track.clamp_lateral(swerve * (0.5 * time).sin());
        let offset = Offset::new(0., RIDE_HEIGHT, lateral);
        match player_track.place(player.distance, offset) {
            Ok(placement) => debug!(
                "t={:.2} player at {:?}, lap {}",
                time, placement.position, player.lap
            ),
            Err(err) => {
                warn!(
                    "Skipping player at distance {}: {}",
                    player.distance, err
                );
                skipped += 1;
            }
        }

        for follower in &mut convoy {
            follower.advance(convoy_track, TIME_STEP);
            if let Err(err) = convoy_track.frame_at(follower.distance) {
                warn!(
                    "Skipping {} at distance {}: {}",
                    follower.name, follower.distance, err
                );
                skipped += 1;
            }
        }
    }

    info!(
        "Player finished {} laps of '{}' ({} long).",
        player.lap,
        player_track.name(),
        player_track.total_length()
    );
    for follower in &convoy {
        info!("{} reached lap {}.", follower.name, follower.lap);
    }
    if skipped > 0 {
        warn!("Skipped {} placements.", skipped);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    run(|| {
        let player_track = load_track(Path::new("tracks/player"))?;
        let convoy_track = load_track(Path::new("tracks/environment"))?;
        drive(&player_track, &convoy_track)
    })
}
