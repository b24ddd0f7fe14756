use tracing::info;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub camera_rays: usize, // one per pixel
    pub box_tests: usize,   // ray/voxel slab tests
    pub hits: usize,        // camera rays that hit something
}

impl Profile {
    pub fn new(camera_rays: usize, box_tests: usize, hits: usize) -> Self {
        Profile {
            camera_rays,
            box_tests,
            hits,
        }
    }
    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.box_tests + other.box_tests,
            self.hits + other.hits,
        )
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let &Profile {
            camera_rays,
            box_tests,
            hits,
        } = self;
        let elapsed = elapsed.max(f32::EPSILON);
        info!(
            "{} camera rays at {} per second and {} per second per thread",
            camera_rays,
            camera_rays as f32 / elapsed,
            camera_rays as f32 / elapsed / (threads as f32)
        );
        info!(
            "{} box tests at {} per second",
            box_tests,
            box_tests as f32 / elapsed
        );
        info!(
            "{} of {} camera rays hit the scene ({:.1}%)",
            hits,
            camera_rays,
            100.0 * hits as f32 / camera_rays.max(1) as f32
        );
    }
}
