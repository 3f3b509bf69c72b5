//! The stock drawable: an image (or one cell of a sprite sheet) with an
//! optional background fill.

use std::fmt;
use std::rc::Rc;

use crate::assets::ImageHandle;
use crate::behavior::{Behavior, TraitKind};
use crate::coords::{ColorRgba, Rect};
use crate::core::{AttributePatch, Attributes, Base, Entity, EntityKind, FrameCtx};
use crate::id::IdSource;

/// Sprite-sheet grid: `columns x rows` equal cells, starting at cell `(col, row)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Sheet {
    pub columns: u32,
    pub rows: u32,
    pub col: u32,
    pub row: u32,
}

impl Default for Sheet {
    fn default() -> Self {
        Self { columns: 1, rows: 1, col: 0, row: 0 }
    }
}

impl Sheet {
    pub fn grid(columns: u32, rows: u32) -> Self {
        Self { columns: columns.max(1), rows: rows.max(1), col: 0, row: 0 }
    }

    pub fn at(mut self, col: u32, row: u32) -> Self {
        self.col = col;
        self.row = row;
        self
    }

    /// Cell shown for animation frame `frame`, counting row-major from the start cell.
    fn cell(&self, frame: u32) -> (u32, u32) {
        let columns = u64::from(self.columns.max(1));
        let rows = u64::from(self.rows.max(1));
        let start = u64::from(self.row) * columns + u64::from(self.col);
        let linear = (start + u64::from(frame)) % (columns * rows);
        ((linear % columns) as u32, (linear / columns) as u32)
    }
}

/// Source cell resolved from the image size.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Cell {
    src: Rect,
    /// Horizontal offset of this cell in the destination.
    advance: f32,
}

type Hook = Rc<dyn Fn(&Attributes)>;

pub struct Sprite {
    base: Base,
    background: Option<ColorRgba>,
    src: String,
    image: Option<ImageHandle>,
    sheet: Sheet,
    cells: Vec<Cell>,
    cached_frame: Option<u32>,
    scale: f32,
    created_hook: Option<Hook>,
    destroyed_hook: Option<Hook>,
}

impl Sprite {
    pub fn new(ids: &IdSource, patch: AttributePatch) -> Self {
        Self {
            base: Base::with_patch(ids, EntityKind::Sprite, patch),
            background: None,
            src: String::new(),
            image: None,
            sheet: Sheet::default(),
            cells: Vec::new(),
            cached_frame: None,
            scale: 1.0,
            created_hook: None,
            destroyed_hook: None,
        }
    }

    /// Image source, requested from the controller's loader on `init`.
    pub fn image(mut self, src: impl Into<String>) -> Self {
        self.src = src.into();
        self
    }

    pub fn sheet(mut self, sheet: Sheet) -> Self {
        self.sheet = sheet;
        self
    }

    pub fn background(mut self, color: ColorRgba) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_trait(mut self, kind: TraitKind, behavior: impl Behavior) -> Self {
        self.base.traits.insert(kind, Box::new(behavior));
        self
    }

    pub fn when_created(mut self, hook: impl Fn(&Attributes) + 'static) -> Self {
        self.created_hook = Some(Rc::new(hook));
        self
    }

    pub fn when_destroyed(mut self, hook: impl Fn(&Attributes) + 'static) -> Self {
        self.destroyed_hook = Some(Rc::new(hook));
        self
    }

    pub fn image_handle(&self) -> Option<&ImageHandle> {
        self.image.as_ref()
    }

    /// Resolves the source cell once the image size is known, and again
    /// whenever the animation frame changes.
    fn cache(&mut self) {
        let Some((width, height)) = self.image.as_ref().and_then(ImageHandle::size) else {
            return;
        };
        let frame = self.base.attributes.frame;
        if !self.cells.is_empty() && self.cached_frame == Some(frame) {
            return;
        }

        let cell_w = width as f32 / self.sheet.columns.max(1) as f32;
        let cell_h = height as f32 / self.sheet.rows.max(1) as f32;
        let (col, row) = self.sheet.cell(frame);

        self.cells.clear();
        self.cells.push(Cell {
            src: Rect::new(col as f32 * cell_w, row as f32 * cell_h, cell_w, cell_h),
            advance: 0.0,
        });
        self.cached_frame = Some(frame);
    }
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("attributes", &self.base.attributes)
            .field("src", &self.src)
            .field("sheet", &self.sheet)
            .finish_non_exhaustive()
    }
}

impl Entity for Sprite {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn init(&mut self, ctx: &mut FrameCtx<'_>) {
        if !self.src.is_empty() {
            self.image = Some(ctx.images.request(&self.src));
        }
        self.on_create();
    }

    fn update(&mut self, ctx: &mut FrameCtx<'_>) {
        self.scale = ctx.scale;
        self.cache();

        let a = &self.base.attributes;
        let vp = ctx.viewport;
        let (w, h) = (a.width * self.scale, a.height * self.scale);
        let surface = &mut *ctx.surface;

        surface.set_image_smoothing(false);

        if let Some(color) = self.background {
            surface.fill_rect(Rect::new(a.x + vp.left, a.y + vp.top, w, h), color);
        }

        let Some(image) = &self.image else {
            return;
        };
        for cell in &self.cells {
            surface.save();
            surface.translate(a.x + cell.advance + vp.left, a.y + vp.top);
            surface.rotate(a.angle.to_radians());
            surface.set_global_alpha(f32::from(a.opacity.min(100)) / 100.0);
            surface.draw_image(image, cell.src, Rect::new(a.origin.x, a.origin.y, w, h));
            surface.restore();
        }
    }

    fn copy(&self, ids: &IdSource) -> Box<dyn Entity> {
        Box::new(Self {
            base: self.base.copy(ids),
            background: self.background,
            src: self.src.clone(),
            image: self.image.clone(),
            sheet: self.sheet,
            cells: self.cells.clone(),
            cached_frame: self.cached_frame,
            scale: self.scale,
            created_hook: self.created_hook.clone(),
            destroyed_hook: self.destroyed_hook.clone(),
        })
    }

    fn on_create(&mut self) {
        if let Some(hook) = &self.created_hook {
            hook(&self.base.attributes);
        }
    }

    fn on_destroy(&mut self) {
        if let Some(hook) = &self.destroyed_hook {
            hook(&self.base.attributes);
        }
    }
}
