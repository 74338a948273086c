use anyhow::anyhow;

use crate::launch_error::{LaunchError, LaunchExit};
use crate::launch_target::{LaunchSpec, LaunchTarget};
use crate::notify::{Notice, Notifier};
use crate::spawn::{Spawned, Spawner};

pub struct Launcher<S, N> {
    pub spec: LaunchSpec,
    pub spawner: S,
    pub notifier: N,
}

impl<S: Spawner, N: Notifier> Launcher<S, N> {
    pub fn new(spec: LaunchSpec, spawner: S, notifier: N) -> Self {
        Self {
            spec,
            spawner,
            notifier,
        }
    }

    /// Checks the sibling and spawns it with the UI flag. Never waits on the child.
    pub fn launch(&self, target: &LaunchTarget) -> anyhow::Result<Spawned> {
        if !target.exists() {
            return Err(anyhow!(LaunchError::MissingTarget {
                path: target.binary.clone(),
            }));
        }
        self.spawner
            .spawn_detached(&target.binary, &[self.spec.ui_flag])
            .map_err(|source| {
                anyhow!(LaunchError::SpawnFailed {
                    path: target.binary.clone(),
                    source,
                })
            })
    }

    /// Runs a resolved (or failed-to-resolve) target through to an exit
    /// status, notifying the user on every failure.
    pub fn run(&self, target: anyhow::Result<LaunchTarget>) -> LaunchExit {
        match target.and_then(|t| self.launch(&t)) {
            Ok(_) => LaunchExit::Ok,
            Err(err) => {
                eprintln!("FAIL: {err}");
                let notice = match err.downcast_ref::<LaunchError>() {
                    Some(LaunchError::MissingTarget { path }) => Notice::missing(path, &self.spec),
                    _ => Notice::SpawnFailed,
                };
                self.notifier
                    .show_error(self.spec.title, &notice.message(&self.spec));
                LaunchExit::Failed
            }
        }
    }
}
