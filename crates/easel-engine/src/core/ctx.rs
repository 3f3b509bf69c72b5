use crate::assets::ImageLoader;
use crate::config::Layout;
use crate::controller::Commands;
use crate::coords::Viewport;
use crate::id::IdSource;
use crate::surface::Surface;
use crate::time::FrameTime;

/// Context handed to `Entity::init` and `Entity::update`.
///
/// Carries the drawing surface, the controller's view settings and a command
/// buffer. Registry mutations requested through [`commands`](Self::commands)
/// are applied after the current pass returns.
pub struct FrameCtx<'a> {
    pub surface: &'a mut dyn Surface,
    pub images: &'a mut dyn ImageLoader,
    pub ids: &'a IdSource,
    pub commands: &'a mut Commands,
    pub time: FrameTime,
    pub scale: f32,
    pub viewport: Viewport,
    pub layout: Layout,
}

impl<'a> FrameCtx<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        surface: &'a mut dyn Surface,
        images: &'a mut dyn ImageLoader,
        ids: &'a IdSource,
        commands: &'a mut Commands,
        time: FrameTime,
        scale: f32,
        viewport: Viewport,
        layout: Layout,
    ) -> Self {
        Self {
            surface,
            images,
            ids,
            commands,
            time,
            scale,
            viewport,
            layout,
        }
    }
}
