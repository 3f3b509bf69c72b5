use std::cell::RefCell;
use std::rc::Rc;

use crate::assets::ImageHandle;
use crate::coords::{ColorRgba, Rect};

use super::{Surface, SurfaceCmd, SurfaceError, SurfaceProvider};

/// Shared, append-only view of what a [`RecordingSurface`] was asked to do.
///
/// Cloning is cheap; all clones observe the same log.
#[derive(Debug, Clone, Default)]
pub struct CommandLog(Rc<RefCell<Vec<SurfaceCmd>>>);

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, cmd: SurfaceCmd) {
        self.0.borrow_mut().push(cmd);
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Copy of every command recorded so far.
    pub fn snapshot(&self) -> Vec<SurfaceCmd> {
        self.0.borrow().clone()
    }

    /// Drains the log.
    pub fn take(&self) -> Vec<SurfaceCmd> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    /// Number of fill/blit commands recorded so far.
    pub fn draw_count(&self) -> usize {
        self.0.borrow().iter().filter(|c| c.is_draw()).count()
    }
}

/// Headless surface that records every call into a [`CommandLog`].
#[derive(Debug)]
pub struct RecordingSurface {
    label: String,
    width: u32,
    height: u32,
    depth: usize,
    log: CommandLog,
}

impl RecordingSurface {
    pub fn new(label: impl Into<String>, width: u32, height: u32, log: CommandLog) -> Self {
        Self {
            label: label.into(),
            width,
            height,
            depth: 0,
            log,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current save/restore nesting.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.log.push(SurfaceCmd::Clear(rect));
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.log.push(SurfaceCmd::SetOpacity(opacity));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.log.push(SurfaceCmd::Scale { sx, sy });
    }

    fn save(&mut self) {
        self.depth += 1;
        self.log.push(SurfaceCmd::Save);
    }

    fn restore(&mut self) {
        debug_assert!(self.depth > 0, "restore called without matching save");
        self.depth = self.depth.saturating_sub(1);
        self.log.push(SurfaceCmd::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.log.push(SurfaceCmd::Translate { x, y });
    }

    fn rotate(&mut self, radians: f32) {
        self.log.push(SurfaceCmd::Rotate(radians));
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.log.push(SurfaceCmd::GlobalAlpha(alpha));
    }

    fn set_image_smoothing(&mut self, enabled: bool) {
        self.log.push(SurfaceCmd::ImageSmoothing(enabled));
    }

    fn fill_rect(&mut self, rect: Rect, color: ColorRgba) {
        self.log.push(SurfaceCmd::FillRect { rect, color });
    }

    fn draw_image(&mut self, image: &ImageHandle, src: Rect, dst: Rect) {
        self.log.push(SurfaceCmd::DrawImage {
            image: image.src().to_string(),
            src,
            dst,
        });
    }
}

/// Hands out [`RecordingSurface`]s that all write to one [`CommandLog`].
#[derive(Debug, Clone, Default)]
pub struct RecordingProvider {
    log: CommandLog,
    refuse: Option<String>,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose every `acquire` fails with `reason`.
    pub fn refusing(reason: impl Into<String>) -> Self {
        Self {
            log: CommandLog::new(),
            refuse: Some(reason.into()),
        }
    }

    pub fn log(&self) -> CommandLog {
        self.log.clone()
    }
}

impl SurfaceProvider for RecordingProvider {
    fn acquire(&mut self, label: &str, width: u32, height: u32) -> Result<Box<dyn Surface>, SurfaceError> {
        if let Some(reason) = &self.refuse {
            return Err(SurfaceError::new(label, width, height, reason.clone()));
        }
        if width == 0 || height == 0 {
            return Err(SurfaceError::new(label, width, height, "zero-sized surface"));
        }
        log::debug!("recording surface '{label}' acquired ({width}x{height})");
        Ok(Box::new(RecordingSurface::new(label, width, height, self.log.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_call_order() {
        let log = CommandLog::new();
        let mut s = RecordingSurface::new("t", 10, 10, log.clone());
        s.save();
        s.translate(1.0, 2.0);
        s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), ColorRgba::black());
        s.restore();
        assert_eq!(s.depth(), 0);
        assert_eq!(
            log.snapshot(),
            vec![
                SurfaceCmd::Save,
                SurfaceCmd::Translate { x: 1.0, y: 2.0 },
                SurfaceCmd::FillRect { rect: Rect::new(0.0, 0.0, 1.0, 1.0), color: ColorRgba::black() },
                SurfaceCmd::Restore,
            ]
        );
        assert_eq!(log.draw_count(), 1);
    }

    #[test]
    fn take_drains() {
        let log = CommandLog::new();
        let mut s = RecordingSurface::new("t", 1, 1, log.clone());
        s.set_opacity(1.0);
        assert_eq!(log.take().len(), 1);
        assert!(log.is_empty());
    }

    #[test]
    fn refusing_provider_errors() {
        let mut p = RecordingProvider::refusing("no gpu");
        let err = p.acquire("main", 10, 10).err().unwrap();
        assert_eq!(err.reason, "no gpu");
        assert!(err.to_string().contains("main"));
    }

    #[test]
    fn zero_sized_surface_is_refused() {
        let mut p = RecordingProvider::new();
        assert!(p.acquire("main", 0, 10).is_err());
        assert!(p.acquire("main", 10, 10).is_ok());
    }
}
