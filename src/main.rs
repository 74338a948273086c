// Release builds link as a GUI program so no console flashes before the child starts.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use optics_ring_launcher::launch_target::{resolve_from_current_exe, LaunchSpec};
use optics_ring_launcher::launcher::Launcher;
use optics_ring_launcher::notify::DialogNotifier;
use optics_ring_launcher::spawn::ProcessSpawner;

fn main() {
    let spec = LaunchSpec::optics_ring_generator();
    let launcher = Launcher::new(spec, ProcessSpawner, DialogNotifier);
    let exit = launcher.run(resolve_from_current_exe(&spec));
    std::process::exit(exit.code());
}
