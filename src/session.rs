use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::info;

use crate::config::SessionConfig;
use crate::error::{LatheError, Result};
use crate::export::write_glb;
use crate::scene::{install_default_handlers, EventBus, EventScript, SceneState};

/// Summary of a completed session replay.
#[derive(Debug)]
pub struct SessionResult {
    pub events: usize,
    pub failed_rebuilds: usize,
    pub profile_points: usize,
    pub axis_points: usize,
    pub vertex_count: usize,
    pub triangle_count: usize,
    /// GLB path, `None` on a dry run.
    pub output: Option<PathBuf>,
    pub output_bytes: usize,
    pub duration: Duration,
}

impl std::fmt::Display for SessionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Replayed {} events: profile {} pts, axis {} pts -> {} vertices / {} triangles",
            self.events,
            self.profile_points,
            self.axis_points,
            self.vertex_count,
            self.triangle_count
        )?;
        if self.failed_rebuilds > 0 {
            writeln!(
                f,
                "  {} rebuild(s) failed; the last good mesh was kept",
                self.failed_rebuilds
            )?;
        }
        match &self.output {
            Some(path) => write!(
                f,
                "Done: wrote {} ({} bytes) in {:.2}s",
                path.display(),
                self.output_bytes,
                self.duration.as_secs_f64()
            ),
            None => write!(
                f,
                "Done: dry run, nothing written ({:.2}s)",
                self.duration.as_secs_f64()
            ),
        }
    }
}

/// Session orchestrator: replays a recorded sketch and exports the result.
pub struct Session;

impl Session {
    /// Load the script, dispatch its events through the default handlers,
    /// and write the final scene as GLB.
    pub fn run(config: &SessionConfig) -> Result<SessionResult> {
        let start = Instant::now();

        info!(script = %config.script.display(), "Starting session");

        info!("Stage 1/3: Loading script");
        let script = EventScript::from_path(&config.script)?;
        let events = script.to_events()?;
        let mut scene = script.initial_scene(config.lathe);
        info!(
            events = events.len(),
            profile_points = scene.profile.len(),
            axis_points = scene.axis.len(),
            ring_resolution = config.lathe.ring_resolution,
            radius = config.lathe.radius.name(),
            "Script loaded"
        );

        info!("Stage 2/3: Replaying events");
        let mut bus = EventBus::new();
        install_default_handlers(&mut bus);
        for event in &events {
            bus.enqueue(*event);
        }
        let dispatched = bus.dispatch_pending(&mut scene);

        if config.dry_run {
            info!("--dry-run: skipping GLB export");
            print_scene_summary(&scene, dispatched);
            return Ok(Self::summarize(&scene, dispatched, None, 0, start));
        }

        info!("Stage 3/3: Export");
        let output = config
            .output
            .clone()
            .unwrap_or_else(|| config.script.with_extension("glb"));
        if same_file(&output, &config.script) {
            return Err(LatheError::Output(format!(
                "Output {} would overwrite the input script",
                output.display()
            )));
        }
        let bytes = write_glb(scene.mesh(), &[&scene.profile, &scene.axis])?;
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output, &bytes)?;
        info!(output = %output.display(), bytes = bytes.len(), "Wrote GLB");

        print_scene_summary(&scene, dispatched);

        let result = Self::summarize(&scene, dispatched, Some(output), bytes.len(), start);
        info!(elapsed = ?result.duration, "Session complete");
        Ok(result)
    }

    fn summarize(
        scene: &SceneState,
        events: usize,
        output: Option<PathBuf>,
        output_bytes: usize,
        start: Instant,
    ) -> SessionResult {
        SessionResult {
            events,
            failed_rebuilds: scene.failed_rebuilds(),
            profile_points: scene.profile.len(),
            axis_points: scene.axis.len(),
            vertex_count: scene.mesh().vertex_count(),
            triangle_count: scene.mesh().triangle_count(),
            output,
            output_bytes,
            duration: start.elapsed(),
        }
    }
}

/// Whether `a` and `b` name the same file, resolving links when both exist.
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Print curve and mesh stats for the final scene.
fn print_scene_summary(scene: &SceneState, events: usize) {
    let mesh = scene.mesh();
    println!("=== Scene ===");
    println!("  Events:    {events}");
    println!("  Profile:   {} points", scene.profile.len());
    println!("  Axis:      {} points", scene.axis.len());
    println!("  Mode:      {:?} / {:?}", scene.mode, scene.view);
    println!("  Vertices:  {}", mesh.vertex_count());
    println!("  Triangles: {}", mesh.triangle_count());
    if scene.failed_rebuilds() > 0 {
        println!("  Failed rebuilds: {}", scene.failed_rebuilds());
    }
}
