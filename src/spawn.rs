use std::io;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawned {
    pub pid: u32,
}

pub trait Spawner {
    fn spawn_detached(&self, program: &Path, args: &[&str]) -> io::Result<Spawned>;
}

/// Starts the child and lets go of it. The `Child` is dropped before
/// returning, which closes the OS handles without waiting.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessSpawner;

impl Spawner for ProcessSpawner {
    fn spawn_detached(&self, program: &Path, args: &[&str]) -> io::Result<Spawned> {
        let child = Command::new(program).args(args).spawn()?;
        let spawned = Spawned { pid: child.id() };
        drop(child);
        Ok(spawned)
    }
}
