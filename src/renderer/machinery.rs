use std::{
    num::NonZeroUsize,
    ops::Deref as _,
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
    thread::{self, JoinHandle},
};

use image::{GenericImage, GenericImageView, RgbaImage};

use crate::{
    camera::Camera,
    error::{Error, Result},
    geometry::ScreenBlock,
    renderer::{RenderSettings, worker::Worker},
    scene::Scene,
    screen_block::ScreenBlockExt,
};

/// Number of finished and total tiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Progress {
    pub finished: usize,
    pub total: usize,
}

/// Starts rendering in background threads.
/// `finished_tile_callback` is called from the worker threads after each tile is copied
/// into the output image.
pub fn render<F: Fn(ScreenBlock, Progress) + Send + Sync + 'static>(
    scene: Scene,
    camera: Camera,
    settings: RenderSettings,
    finished_tile_callback: F,
) -> Result<RenderProgress> {
    let image = RgbaImage::new(
        camera.get_resolution().x,
        camera.get_resolution().y,
    );
    let state = Arc::new(RenderState {
        scene,
        camera,
        settings,

        image: Mutex::new(image),

        tile_ordering: ScreenBlock::from_size(camera.get_resolution())
            .tile_ordering(settings.tile_size),
        next_tile_index: AtomicUsize::new(0),
        finished_tiles: AtomicUsize::new(0),
    });
    let finished_tile_callback = Arc::new(finished_tile_callback);

    let cores = worker_cores(settings.threads);
    log::info!(
        "rendering {}x{} pixels in {} tiles on {} threads",
        camera.get_resolution().x,
        camera.get_resolution().y,
        state.tile_ordering.len(),
        cores.len()
    );

    let threads = cores
        .into_iter()
        .enumerate()
        .map(|(worker_id, core)| {
            let state = Arc::clone(&state);
            let finished_tile_callback = Arc::clone(&finished_tile_callback);

            thread::Builder::new()
                .name(format!("worker{worker_id}"))
                .spawn(move || {
                    if let Some(core) = core {
                        core_affinity::set_for_current(core);
                    }

                    let mut worker = Worker::new(worker_id);
                    let tile_size = settings.tile_size.get();
                    let resolution = state.camera.get_resolution();
                    let mut buffer = RgbaImage::new(
                        tile_size.min(resolution.x),
                        tile_size.min(resolution.y),
                    );

                    while let Some(tile) = state.get_next_tile() {
                        worker.render_tile(
                            &state.scene,
                            &state.camera,
                            &state.settings,
                            tile,
                            &mut buffer,
                        );
                        state
                            .image
                            .lock()
                            .unwrap_or_else(PoisonError::into_inner)
                            .copy_from(
                                buffer.view(0, 0, tile.width(), tile.height()).deref(),
                                tile.min.x,
                                tile.min.y,
                            )
                            .unwrap_or_else(|_| {
                                unreachable!("The buffer should always fit into the output")
                            });

                        let finished = state.finished_tiles.fetch_add(1, Ordering::AcqRel) + 1;
                        (finished_tile_callback)(
                            *tile,
                            Progress {
                                finished,
                                total: state.tile_ordering.len(),
                            },
                        );
                    }
                })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(RenderProgress {
        render_state: state,
        threads,
    })
}

/// Renders the whole image on the calling thread's behalf and waits for the result.
pub fn render_blocking(scene: Scene, camera: Camera, settings: RenderSettings) -> Result<RgbaImage> {
    let mut progress = render(scene, camera, settings, |_, _| {})?;
    progress.wait()?;
    Ok(progress.into_image())
}

/// Cores to pin the workers to, one entry per worker.
/// Entries are `None` when the core list is unavailable.
fn worker_cores(threads: Option<NonZeroUsize>) -> Vec<Option<core_affinity::CoreId>> {
    let cores: Vec<_> = match core_affinity::get_core_ids() {
        Some(ids) if !ids.is_empty() => ids.into_iter().map(Some).collect(),
        _ => {
            log::warn!("Could not get the CPU list, worker threads will not be pinned");
            let count = thread::available_parallelism().map_or(1, NonZeroUsize::get);
            vec![None; count]
        }
    };

    let count = threads.map_or(cores.len(), NonZeroUsize::get);
    cores.into_iter().cycle().take(count).collect()
}

pub struct RenderProgress {
    render_state: Arc<RenderState>,
    threads: Vec<JoinHandle<()>>,
}

impl RenderProgress {
    pub fn progress(&self) -> Progress {
        Progress {
            finished: self.render_state.finished_tiles.load(Ordering::Acquire),
            total: self.render_state.tile_ordering.len(),
        }
    }

    pub fn progress_percent(&self) -> f32 {
        let Progress { finished, total } = self.progress();
        if total == 0 {
            100.0
        } else {
            100.0 * (finished as f32) / (total as f32)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.threads.iter().all(|handle| handle.is_finished())
    }

    /// Signal the workers to abort.
    /// Any running workers will still finish their tiles, but no new ones will be started.
    pub fn abort(&self) {
        self.render_state
            .next_tile_index
            .store(self.render_state.tile_ordering.len(), Ordering::Release);
    }

    /// Wait for the workers to finish.
    pub fn wait(&mut self) -> Result<()> {
        let panicked = self
            .threads
            .drain(..)
            .map(|handle| handle.join())
            .filter(|result| result.is_err())
            .count();

        if panicked > 0 {
            Err(Error::Render(format!("{panicked} worker thread(s) panicked")))
        } else {
            Ok(())
        }
    }

    /// Copy of the current image content.
    pub fn into_image(self) -> RgbaImage {
        self.render_state
            .image
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

struct RenderState {
    scene: Scene,
    camera: Camera,
    settings: RenderSettings,

    image: Mutex<RgbaImage>,

    tile_ordering: Vec<ScreenBlock>,
    next_tile_index: AtomicUsize,
    finished_tiles: AtomicUsize,
}

impl RenderState {
    fn get_next_tile(&self) -> Option<&ScreenBlock> {
        let id = self.next_tile_index.fetch_add(1, Ordering::AcqRel);
        self.tile_ordering.get(id)
    }
}
