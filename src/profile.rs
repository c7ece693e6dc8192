use tracing::info;

use crate::scene::SurfaceKind;

/// Per frame counters, combined across rayon tasks with `reduce`.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct Profile {
    pub camera_rays: usize,
    pub sphere_hits: usize,
    pub plane_hits: usize,
    pub background_hits: usize,
}

impl Profile {
    pub fn new(
        camera_rays: usize,
        sphere_hits: usize,
        plane_hits: usize,
        background_hits: usize,
    ) -> Self {
        Profile {
            camera_rays,
            sphere_hits,
            plane_hits,
            background_hits,
        }
    }

    pub fn record(&mut self, kind: SurfaceKind) {
        self.camera_rays += 1;
        match kind {
            SurfaceKind::Sphere => self.sphere_hits += 1,
            SurfaceKind::Plane => self.plane_hits += 1,
            SurfaceKind::Background => self.background_hits += 1,
        }
    }

    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.sphere_hits + other.sphere_hits,
            self.plane_hits + other.plane_hits,
            self.background_hits + other.background_hits,
        )
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let &Profile {
            camera_rays,
            sphere_hits,
            plane_hits,
            background_hits,
        } = self;
        info!(
            "{} total camera rays at {} per second and {} per second per thread",
            camera_rays,
            camera_rays as f32 / elapsed,
            camera_rays as f32 / elapsed / (threads as f32)
        );
        info!(
            "{} sphere hits, {} plane hits, {} background",
            sphere_hits, plane_hits, background_hits
        );
    }
}
