extern crate env_logger;
#[macro_use]
extern crate failure;
extern crate racetrack;

use std::fs;
use std::path::Path;

use racetrack::{load_track, run};

const TRACKS: [&str; 2] = ["player", "environment"];

fn main() {
    env_logger::init();
    run(|| {
        let tracks = Path::new("tracks");
        if !tracks.is_dir() {
            bail!("Could not find the tracks directory. Run from the crate root.");
        }
        let out_dir = Path::new("images");
        fs::create_dir_all(out_dir)?;
        for name in &TRACKS {
            let track = load_track(tracks.join(name))?;
            let mut doc = track.draw_plan();
            // Mark where each lap starts.
            track.draw_markers(&mut doc, &[0.])?;

            let path = out_dir.join(format!("{}-plan.svg", name));
            let filename = path
                .to_str()
                .ok_or_else(|| format_err!("Bad output path {:?}", path))?;
            doc.save(filename)?;
        }
        Ok(())
    })
}
